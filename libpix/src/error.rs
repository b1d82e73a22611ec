//! Error types for Pix

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PixError>;

#[derive(Error, Debug)]
pub enum PixError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Media error: {0}")]
    Media(#[from] MediaError),
}

impl PixError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PixError::Media(MediaError::UnsupportedType(_)) => 3,
            PixError::Media(_) => 1,
            PixError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug)]
pub enum MediaError {
    #[error("Failed to read media file: {0}")]
    Io(#[from] std::io::Error),

    /// The file's type is known but is neither an image nor a video
    #[error("Unsupported media type: {0}")]
    UnsupportedType(String),

    /// No media type could be guessed for the file
    #[error("Unknown media type for {0}")]
    UnknownType(String),

    #[error("File is too large: {size} bytes (limit {limit})")]
    TooLarge { size: u64, limit: u64 },
}
