//! External service and file-format integrations.

pub mod abuseipdb_client {
    pub use crate::abuseipdb_client::*;
}

pub mod spreadsheet {
    pub use crate::input::*;
    pub use crate::output::*;
}
