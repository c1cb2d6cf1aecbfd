use std::fmt;
use std::error::Error;

#[derive(Debug)]
pub enum DustError {
    InvalidArgument(String),
    InvalidInput(String),
    ApiError(String),
    ParseError(String),
    NetworkError(String),
    IoError(String),
}

impl fmt::Display for DustError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DustError::InvalidArgument(msg) => write!(f, "Invalid Argument: {}", msg),
            DustError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            DustError::ApiError(msg) => write!(f, "API Error: {}", msg),
            DustError::ParseError(msg) => write!(f, "Parse Error: {}", msg),
            DustError::NetworkError(msg) => write!(f, "Network Error: {}", msg),
            DustError::IoError(msg) => write!(f, "IO Error: {}", msg),
        }
    }
}

impl Error for DustError {}

impl From<reqwest::Error> for DustError {
    fn from(err: reqwest::Error) -> Self {
        DustError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for DustError {
    fn from(err: serde_json::Error) -> Self {
        DustError::ParseError(err.to_string())
    }
}

impl From<std::io::Error> for DustError {
    fn from(err: std::io::Error) -> Self {
        DustError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DustError>;
