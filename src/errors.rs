use std::fmt;

/// Scanner-specific error types.
///
/// Every variant is fatal for a run: the batch is all-or-nothing and no
/// partial output is written.
#[derive(Debug, Clone)]
pub enum ScanError {
    /// Missing or invalid configuration value.
    Config(String),
    /// The input spreadsheet could not be opened or read.
    Input(String),
    /// The input spreadsheet has no column with the expected header.
    MissingColumn(String),
    /// Error interacting with the reputation API.
    ExternalApi(String),
    /// A timestamp returned by the API could not be parsed.
    Timestamp(String),
    /// The output spreadsheet could not be built or saved.
    Spreadsheet(String),
    /// Filesystem error outside of spreadsheet handling.
    Io(String),
    /// Error with context chain for better debugging.
    WithContext {
        /// The underlying source of the error.
        source: Box<ScanError>,
        /// Additional context message.
        context: String,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Config(msg) => write!(f, "Configuration error: {}", msg),
            ScanError::Input(msg) => write!(f, "Input error: {}", msg),
            ScanError::MissingColumn(name) => {
                write!(f, "Input error: column '{}' not found", name)
            }
            ScanError::ExternalApi(msg) => write!(f, "External API error: {}", msg),
            ScanError::Timestamp(msg) => write!(f, "Timestamp error: {}", msg),
            ScanError::Spreadsheet(msg) => write!(f, "Spreadsheet error: {}", msg),
            ScanError::Io(msg) => write!(f, "I/O error: {}", msg),
            ScanError::WithContext { source, context } => {
                write!(f, "{}: {}", context, source)
            }
        }
    }
}

impl std::error::Error for ScanError {}

impl ScanError {
    /// Returns the innermost error, skipping any context wrappers.
    pub fn root(&self) -> &ScanError {
        match self {
            ScanError::WithContext { source, .. } => source.root(),
            other => other,
        }
    }
}

impl From<reqwest::Error> for ScanError {
    fn from(err: reqwest::Error) -> Self {
        ScanError::ExternalApi(err.to_string())
    }
}

impl From<calamine::Error> for ScanError {
    fn from(err: calamine::Error) -> Self {
        ScanError::Input(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for ScanError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        ScanError::Spreadsheet(err.to_string())
    }
}

impl From<chrono::ParseError> for ScanError {
    fn from(err: chrono::ParseError) -> Self {
        ScanError::Timestamp(err.to_string())
    }
}

impl From<std::io::Error> for ScanError {
    fn from(err: std::io::Error) -> Self {
        ScanError::Io(err.to_string())
    }
}

/// Extension trait for adding context to errors.
/// Similar to `anyhow::Context` but for our `ScanError` type.
pub trait ResultExt<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T, ScanError>;

    /// Add context lazily (only evaluated on error).
    fn with_context<F>(self, f: F) -> Result<T, ScanError>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for Result<T, ScanError> {
    fn context(self, context: impl Into<String>) -> Result<T, ScanError> {
        self.map_err(|e| ScanError::WithContext {
            source: Box::new(e),
            context: context.into(),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T, ScanError>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ScanError::WithContext {
            source: Box::new(e),
            context: f(),
        })
    }
}
