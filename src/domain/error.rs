//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type for the library layers
pub type Result<T> = std::result::Result<T, ConvertError>;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input bytes are not valid UTF-8; nothing has been processed yet
    #[error("input is not valid UTF-8 (first invalid byte at offset {offset})")]
    Decode { offset: usize },

    /// Reading the input or writing the output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Packaging the .docx archive failed
    #[error("serialization error: {0}")]
    Serialize(String),

    /// A style file could not be parsed
    #[error("style configuration error: {0}")]
    Style(#[from] serde_json::Error),

    /// A style value is outside what a .docx can express
    #[error("invalid style value: {0}")]
    InvalidStyle(String),
}
