//! Media decode service
//!
//! Turns a file chosen for upload into a self-contained `data:` URL the feed
//! can store as a post's media reference. Only images and videos are
//! accepted; the type is guessed from the file extension.

use std::path::Path;

use base64::Engine;

use crate::config::MediaConfig;
use crate::error::MediaError;

/// Result of decoding an upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedMedia {
    /// `data:<type>;base64,<payload>`
    pub media_ref: String,
    /// MIME essence, e.g. `image/png`
    pub content_type: String,
    pub size: u64,
}

#[derive(Debug, Clone)]
pub struct MediaDecoder {
    max_bytes: u64,
}

impl MediaDecoder {
    pub fn new(max_bytes: u64) -> Self {
        Self { max_bytes }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(config.max_upload_bytes)
    }

    /// Guess the MIME type of `path`, accepting only `image/*` and `video/*`
    pub fn content_type_for(path: &Path) -> Result<mime::Mime, MediaError> {
        let guessed = mime_guess::from_path(path)
            .first()
            .ok_or_else(|| MediaError::UnknownType(path.display().to_string()))?;

        if guessed.type_() == mime::IMAGE || guessed.type_() == mime::VIDEO {
            Ok(guessed)
        } else {
            Err(MediaError::UnsupportedType(guessed.essence_str().to_string()))
        }
    }

    /// Read and encode a file
    ///
    /// The type check runs before the file is opened, so unsupported files
    /// are rejected without being read.
    pub async fn decode(&self, path: &Path) -> Result<DecodedMedia, MediaError> {
        let content_type = Self::content_type_for(path)?;

        let size = tokio::fs::metadata(path).await?.len();
        if size > self.max_bytes {
            return Err(MediaError::TooLarge {
                size,
                limit: self.max_bytes,
            });
        }

        let bytes = tokio::fs::read(path).await?;
        let payload = base64::engine::general_purpose::STANDARD.encode(&bytes);
        let essence = content_type.essence_str().to_string();

        tracing::debug!(
            path = %path.display(),
            content_type = %essence,
            size,
            "Decoded upload"
        );

        Ok(DecodedMedia {
            media_ref: format!("data:{};base64,{}", essence, payload),
            content_type: essence,
            size,
        })
    }
}

impl Default for MediaDecoder {
    fn default() -> Self {
        Self::from_config(&MediaConfig::default())
    }
}
