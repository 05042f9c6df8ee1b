use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("HTTP {status} from {url}")]
    HttpStatusError { status: u16, url: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
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

impl CatalogError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CatalogError::ApiError(_) | CatalogError::HttpStatusError { .. } => {
                ErrorCategory::Network
            }
            CatalogError::CsvError(_)
            | CatalogError::SerializationError(_)
            | CatalogError::ProcessingError { .. } => ErrorCategory::Data,
            CatalogError::ConfigError { .. }
            | CatalogError::ConfigValidationError { .. }
            | CatalogError::InvalidConfigValueError { .. }
            | CatalogError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CatalogError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // the backend may come back, a rerun is worth it
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::ApiError(_) => "Check the network connection and that the endpoint is reachable",
            CatalogError::HttpStatusError { .. } => "Verify the endpoint URL and that the backend is running",
            CatalogError::CsvError(_) => "Make sure the CSV file has a header row and consistent columns",
            CatalogError::SerializationError(_) => "Make sure the input is a JSON array of objects or strings",
            CatalogError::IoError(_) => "Check that the file exists and that you have read/write permission",
            CatalogError::ConfigError { .. } | CatalogError::ConfigValidationError { .. } => {
                "Check the ranking TOML file for syntax errors"
            }
            CatalogError::InvalidConfigValueError { .. } => "Correct the highlighted configuration value",
            CatalogError::MissingConfigError { .. } => "Add the missing setting to the command line or config file",
            CatalogError::ProcessingError { .. } => "Inspect the input data for unexpected shapes",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::ApiError(_) | CatalogError::HttpStatusError { .. } => {
                format!("Could not fetch the catalog: {}", self)
            }
            CatalogError::IoError(e) => format!("File access failed: {}", e),
            CatalogError::MissingConfigError { field } => {
                format!("Missing setting '{}'", field)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;
