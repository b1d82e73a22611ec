//! Actions for the reducer pattern
//!
//! Every change to the feed is described by an `Action`. The reducer
//! (see `reducer.rs`) is responsible for applying actions to state.

use crate::types::{PostId, Tab, UploadId};

/// Intents that trigger state transitions
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // === Navigation ===
    SetTab(Tab),

    /// Stored verbatim; only filters the Search tab
    SetSearchQuery(String),

    // === Social ===
    ToggleLike(PostId),
    ToggleSave(PostId),

    // === Detail view ===
    /// Select a post and reset the comment draft
    OpenDetail(PostId),
    CloseDetail,
    SetCommentDraft(String),
    /// Append the comment draft to the selected post
    SubmitComment,

    // === Edit flow ===
    StartEdit(PostId),
    SetEditTitle(String),
    CancelEdit,
    CommitEdit,

    DeletePost(PostId),

    // === Upload flow ===
    /// Open the upload dialog, optionally pre-filling the title
    StartUpload(Option<String>),
    SetUploadTitle(String),
    CancelUpload,

    /// Decoded media arrived; `content_type` decides the media kind
    ///
    /// Only the dialog named by `upload` is closed. When that dialog is no
    /// longer open, `title` (captured when decoding started) names the post.
    CompleteUpload {
        upload: Option<UploadId>,
        title: String,
        media_ref: String,
        content_type: String,
    },

    /// Decoding the chosen file failed
    UploadFailed(String),
}

impl Action {
    /// Short name for logging; avoids dumping media payloads
    pub fn name(&self) -> &'static str {
        match self {
            Action::SetTab(_) => "set_tab",
            Action::SetSearchQuery(_) => "set_search_query",
            Action::ToggleLike(_) => "toggle_like",
            Action::ToggleSave(_) => "toggle_save",
            Action::OpenDetail(_) => "open_detail",
            Action::CloseDetail => "close_detail",
            Action::SetCommentDraft(_) => "set_comment_draft",
            Action::SubmitComment => "submit_comment",
            Action::StartEdit(_) => "start_edit",
            Action::SetEditTitle(_) => "set_edit_title",
            Action::CancelEdit => "cancel_edit",
            Action::CommitEdit => "commit_edit",
            Action::DeletePost(_) => "delete_post",
            Action::StartUpload(_) => "start_upload",
            Action::SetUploadTitle(_) => "set_upload_title",
            Action::CancelUpload => "cancel_upload",
            Action::CompleteUpload { .. } => "complete_upload",
            Action::UploadFailed(_) => "upload_failed",
        }
    }
}
