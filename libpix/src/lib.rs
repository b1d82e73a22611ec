//! Pix - an in-memory photo and video feed
//!
//! This library holds the feed state model (posts, comments, tabs, drafts),
//! the media decode service used for uploads, and the notification bus the
//! front ends listen on.

pub mod config;
pub mod error;
pub mod events;
pub mod feed;
pub mod logging;
pub mod media;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{PixError, Result};
pub use feed::{Action, FeedState, FeedStore};
pub use types::{Comment, MediaKind, Notification, Post, PostId, Tab, UploadId};
