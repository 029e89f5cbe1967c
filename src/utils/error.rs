use thiserror::Error;

/// Placeholder echoed back when the rejected input was empty or absent.
pub const EMPTY_INPUT_PLACEHOLDER: &str = "(empty)";

#[derive(Error, Debug)]
pub enum BarcodeError {
    #[error("Invalid/non-barcode agent name: {input}")]
    InvalidBarcode { input: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    System,
}

impl BarcodeError {
    /// Builds the rejection for a candidate that is not a barcode.
    pub fn invalid_barcode(input: Option<&str>) -> Self {
        let input = match input {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => EMPTY_INPUT_PLACEHOLDER.to_string(),
        };
        BarcodeError::InvalidBarcode { input }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            BarcodeError::InvalidBarcode { .. } => ErrorCategory::Input,
            BarcodeError::ConfigError { .. }
            | BarcodeError::InvalidConfigValueError { .. }
            | BarcodeError::ConfigValidationError { .. } => ErrorCategory::Configuration,
            BarcodeError::IoError(_)
            | BarcodeError::SerializationError(_)
            | BarcodeError::CsvError(_)
            | BarcodeError::InternalError { .. } => ErrorCategory::System,
        }
    }

    /// Only bad input is the caller's fault; everything else is reported as an internal error.
    pub fn is_client_error(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BarcodeError::InvalidBarcode { input } => {
                format!("'{}' is not a barcode agent name", input)
            }
            BarcodeError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            BarcodeError::ConfigError { message }
            | BarcodeError::ConfigValidationError { message, .. } => {
                format!("Configuration problem: {}", message)
            }
            other => format!("Unexpected failure: {}", other),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => {
                "Barcodes are 1 to 15 characters of 'i' and 'l' (any case), optionally prefixed with '@'"
            }
            ErrorCategory::Configuration => {
                "Check the command line flags, the TOML file and environment variables"
            }
            ErrorCategory::System => "Check the logs for the underlying cause and retry",
        }
    }
}

pub type Result<T> = std::result::Result<T, BarcodeError>;
