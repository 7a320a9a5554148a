use std::error::Error as StdError;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    InvalidPhoneNumber { input: String },
    MessageTooLong { max: usize, actual: usize },
    InvalidNotifyUrl { input: String },
    UnsupportedMethod { method: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhoneNumber { input } => write!(f, "invalid phone format: {input}"),
            Self::MessageTooLong { max, actual } => {
                write!(f, "message too long: {actual} characters (max {max})")
            }
            Self::InvalidNotifyUrl { input } => write!(f, "invalid notify URL: {input}"),
            Self::UnsupportedMethod { method } => {
                write!(f, "unsupported method: {method} (expected GET or POST)")
            }
        }
    }
}

impl StdError for ValidationError {}

#[derive(Debug)]
pub enum ConfigurationError {
    MissingToken,
    InvalidBaseUrl { input: String },
    HttpClient(Box<dyn StdError + Send + Sync>),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingToken => write!(f, "token is required"),
            Self::InvalidBaseUrl { input } => write!(f, "invalid base URL: {input}"),
            Self::HttpClient(err) => write!(f, "failed to build HTTP client: {err}"),
        }
    }
}

impl StdError for ConfigurationError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::HttpClient(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}
