use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Config,
    Io,
}

#[derive(Error, Debug)]
pub enum SplitError {
    #[error("cable length out of range: {length} (expected {min}..={max})")]
    CableLengthOutOfRange { length: i64, min: i64, max: i64 },

    #[error("cut count out of range: {times} (expected {min}..={max})")]
    CutCountOutOfRange { times: i64, min: i64, max: i64 },

    #[error("too many cuts for this length: {times} cuts on a cable of length {length}")]
    TooManyCuts { length: i64, times: i64 },

    #[error("not an integer: {value}")]
    NotAnInteger { value: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config parse error: {message}")]
    ConfigParseError { message: String },

    #[error("Invalid config value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl SplitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SplitError::CableLengthOutOfRange { .. }
            | SplitError::CutCountOutOfRange { .. }
            | SplitError::TooManyCuts { .. }
            | SplitError::NotAnInteger { .. } => ErrorKind::InvalidArgument,
            SplitError::ConfigParseError { .. } | SplitError::InvalidConfigValueError { .. } => {
                ErrorKind::Config
            }
            SplitError::IoError(_) | SplitError::SerializationError(_) => ErrorKind::Io,
        }
    }

    /// Short message for terminal output, without the offending values.
    pub fn user_friendly_message(&self) -> String {
        match self {
            SplitError::CableLengthOutOfRange { .. } => "cable length out of range".to_string(),
            SplitError::CutCountOutOfRange { .. } => "cut count out of range".to_string(),
            SplitError::TooManyCuts { .. } => "too many cuts for this length".to_string(),
            SplitError::NotAnInteger { .. } => "not an integer".to_string(),
            SplitError::IoError(e) => format!("could not read input: {}", e),
            SplitError::SerializationError(e) => format!("could not render output: {}", e),
            SplitError::ConfigParseError { message } => format!("invalid job file: {}", message),
            SplitError::InvalidConfigValueError { field, reason, .. } => {
                format!("invalid value for {}: {}", field, reason)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SplitError>;
