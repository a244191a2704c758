//! IP Reputation Scanner Library
//!
//! This library provides the core functionality for checking a spreadsheet of
//! IP addresses against AbuseIPDB and writing an annotated report.
//!
//! # Modules
//!
//! - `core`: Core scan logic.
//! - `integrations`: External service integrations.
//! - `abuseipdb_client`: AbuseIPDB `check` client.
//! - `config`: Configuration management.
//! - `enrichment`: Record mapping and the batch workflow.
//! - `errors`: Error handling types.
//! - `input`: Spreadsheet input loader.
//! - `models`: Result record and output columns.
//! - `output`: Spreadsheet report writer.
//! - `pacing`: Delay policy between API calls.
//! - `time`: Kolkata timestamp normalization.

pub mod core;
pub mod integrations;

pub mod abuseipdb_client;
pub mod config;
pub mod enrichment;
pub mod errors;
pub mod input;
pub mod models;
pub mod output;
pub mod pacing;
pub mod time;
