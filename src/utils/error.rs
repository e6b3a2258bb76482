use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Parse error at line {line}, field '{field}', value '{value}': {reason}")]
    Parse {
        line: u64,
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid argument '{argument}' = '{value}': {reason}")]
    InvalidArgument {
        argument: String,
        value: String,
        reason: String,
    },

    #[error("Division by zero population for '{address}' (area {area})")]
    Division { address: String, area: f64 },

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration value for '{field}' = '{value}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ReportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ReportError::Parse { .. } | ReportError::Csv(_) => ErrorCategory::Input,
            ReportError::InvalidArgument { .. } | ReportError::Division { .. } => {
                ErrorCategory::Data
            }
            ReportError::Config { .. } | ReportError::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            ReportError::Io(_) | ReportError::Serialization(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// Exit code for the binaries.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ReportError::Parse {
                line, field, value, ..
            } => format!(
                "Input file has a bad value '{}' in column '{}' on line {}",
                value, field, line
            ),
            ReportError::InvalidArgument {
                argument, value, reason,
            } => format!("Invalid {} '{}': {}", argument, value, reason),
            ReportError::Division { address, .. } => {
                format!("Building '{}' has zero population", address)
            }
            ReportError::Csv(e) => format!("Input file is not valid CSV: {}", e),
            ReportError::Io(e) => format!("Could not read input: {}", e),
            ReportError::Serialization(e) => format!("Could not render report: {}", e),
            ReportError::Config { message } => format!("Configuration problem: {}", message),
            ReportError::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ReportError::Parse { .. } => {
                "Fix the listed cell so it holds a number of the expected type"
            }
            ReportError::InvalidArgument { .. } => {
                "Check that floor counts are positive and the dataset is not empty"
            }
            ReportError::Division { .. } => "Set a positive population for the listed building",
            ReportError::Csv(_) => "Make sure the file is UTF-8 CSV with a header row",
            ReportError::Io(_) => "Check that the input path exists and is readable",
            ReportError::Serialization(_) => "Try the text output format",
            ReportError::Config { .. } | ReportError::InvalidConfigValue { .. } => {
                "Review the command line arguments or configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
