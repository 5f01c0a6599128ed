use std::fmt;

#[derive(Debug)]
pub enum FlightsError {
    ApiError {
        status: u16,
        message: String,
    },
    ConfigError(String),
    NetworkError(reqwest::Error),
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    YamlError(serde_yaml::Error),
}

impl fmt::Display for FlightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlightsError::ApiError { status, message } => {
                write!(f, "API error (status {}): {}", status, message)
            }
            FlightsError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            FlightsError::NetworkError(e) => write!(f, "Network error: {}", e),
            FlightsError::IoError(e) => write!(f, "IO error: {}", e),
            FlightsError::JsonError(e) => write!(f, "JSON error: {}", e),
            FlightsError::YamlError(e) => write!(f, "YAML error: {}", e),
        }
    }
}

impl std::error::Error for FlightsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FlightsError::NetworkError(e) => Some(e),
            FlightsError::IoError(e) => Some(e),
            FlightsError::JsonError(e) => Some(e),
            FlightsError::YamlError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for FlightsError {
    fn from(err: reqwest::Error) -> Self {
        FlightsError::NetworkError(err)
    }
}

impl From<std::io::Error> for FlightsError {
    fn from(err: std::io::Error) -> Self {
        FlightsError::IoError(err)
    }
}

impl From<serde_json::Error> for FlightsError {
    fn from(err: serde_json::Error) -> Self {
        FlightsError::JsonError(err)
    }
}

impl From<serde_yaml::Error> for FlightsError {
    fn from(err: serde_yaml::Error) -> Self {
        FlightsError::YamlError(err)
    }
}

// anyhow errors only come from loading config files.
impl From<anyhow::Error> for FlightsError {
    fn from(err: anyhow::Error) -> Self {
        FlightsError::ConfigError(format!("{:#}", err))
    }
}

pub type Result<T> = std::result::Result<T, FlightsError>;
