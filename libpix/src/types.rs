//! Core data types for Pix

use serde::{Deserialize, Serialize};
use std::fmt;

/// Post identifier, allocated from the feed's counter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CommentId(pub u64);

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies one opening of the upload dialog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UploadId(pub u64);

impl fmt::Display for UploadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    /// Classify a MIME type string, e.g. `image/png` or `video/mp4`
    ///
    /// Returns `None` for anything that is not an image or a video.
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let (top_level, _) = content_type.split_once('/')?;
        match top_level.trim().to_ascii_lowercase().as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single media item in the feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    /// URL or `data:` URL of the media; never inspected by the feed
    pub media_ref: String,
    pub media_kind: MediaKind,
    pub title: String,
    pub author: String,
    pub liked: bool,
    pub saved: bool,
    /// Append-only and insertion ordered. Nothing may remove, reorder or
    /// rewrite an existing comment.
    pub comments: Vec<Comment>,
}

impl Post {
    pub fn new(id: PostId, media_ref: String, media_kind: MediaKind, title: String, author: String) -> Self {
        Self {
            id,
            media_ref,
            media_kind,
            title,
            author,
            liked: false,
            saved: false,
            comments: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub text: String,
    /// Display label fixed at creation time
    pub timestamp: String,
}

/// Feed tab; exactly one is active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Home,
    Search,
    Saved,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Search, Tab::Saved];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Search => "Search",
            Tab::Saved => "Saved",
        }
    }
}

/// User-facing notice, e.g. a toast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

impl Notification {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error: false,
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            is_error: true,
        }
    }
}
