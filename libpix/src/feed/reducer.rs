//! Pure reducer function for state transitions
//!
//! The reducer is a pure function: `(FeedState, Action) -> FeedState`.
//! It performs no I/O. Notices meant for the user are queued in
//! `FeedState::outbox` and delivered by `FeedStore` after the transition.
//!
//! Every action is defined for every state. Actions that reference a post
//! that no longer exists, blank comments and commits without a draft are
//! silent no-ops.

use super::actions::Action;
use super::state::{EditDraft, FeedState, UploadDraft};
use crate::types::{Comment, CommentId, MediaKind, Notification, Post, PostId, UploadId};

/// Pure reducer function
///
/// Takes current state and an action, returns new state. The outbox of the
/// returned state holds only the notices raised by this action.
pub fn reduce(state: FeedState, action: Action) -> FeedState {
    let mut state = FeedState {
        outbox: Vec::new(),
        ..state
    };

    match action {
        // === Navigation ===
        Action::SetTab(tab) => FeedState {
            active_tab: tab,
            ..state
        },

        Action::SetSearchQuery(query) => FeedState {
            search_query: query,
            ..state
        },

        // === Social ===
        Action::ToggleLike(id) => {
            if let Some(post) = find_post_mut(&mut state.posts, id) {
                post.liked = !post.liked;
            }
            state
        }

        Action::ToggleSave(id) => {
            if let Some(post) = find_post_mut(&mut state.posts, id) {
                post.saved = !post.saved;
            }
            state
        }

        // === Detail view ===
        Action::OpenDetail(id) => {
            if state.post(id).is_none() {
                return state;
            }
            FeedState {
                selected: Some(id),
                comment_draft: String::new(),
                ..state
            }
        }

        Action::CloseDetail => FeedState {
            selected: None,
            comment_draft: String::new(),
            ..state
        },

        Action::SetCommentDraft(text) => FeedState {
            comment_draft: text,
            ..state
        },

        Action::SubmitComment => submit_comment(state),

        // === Edit flow ===
        Action::StartEdit(id) => {
            let title = match state.post(id) {
                Some(post) => post.title.clone(),
                None => return state,
            };
            FeedState {
                edit: Some(EditDraft { post_id: id, title }),
                ..state
            }
        }

        Action::SetEditTitle(title) => {
            if let Some(draft) = state.edit.as_mut() {
                draft.title = title;
            }
            state
        }

        Action::CancelEdit => FeedState {
            edit: None,
            ..state
        },

        Action::CommitEdit => commit_edit(state),

        Action::DeletePost(id) => delete_post(state, id),

        // === Upload flow ===
        Action::StartUpload(title) => {
            let id = UploadId(state.next_upload_id);
            FeedState {
                upload: Some(UploadDraft {
                    id,
                    title: title.unwrap_or_default(),
                }),
                next_upload_id: id.0 + 1,
                ..state
            }
        }

        Action::SetUploadTitle(title) => {
            if let Some(draft) = state.upload.as_mut() {
                draft.title = title;
            }
            state
        }

        Action::CancelUpload => FeedState {
            upload: None,
            ..state
        },

        Action::CompleteUpload {
            upload,
            title,
            media_ref,
            content_type,
        } => complete_upload(state, upload, title, media_ref, &content_type),

        Action::UploadFailed(reason) => {
            state.outbox.push(Notification::error("Upload failed", reason));
            state
        }
    }
}

fn find_post_mut(posts: &mut [Post], id: PostId) -> Option<&mut Post> {
    posts.iter_mut().find(|p| p.id == id)
}

fn submit_comment(mut state: FeedState) -> FeedState {
    let Some(id) = state.selected else {
        return state;
    };
    if state.comment_draft.trim().is_empty() {
        return state;
    }
    let Some(post) = find_post_mut(&mut state.posts, id) else {
        return state;
    };

    // Stored as typed; only the emptiness check looks at the trimmed text
    post.comments.push(Comment {
        id: CommentId(state.next_comment_id),
        author: state.settings.viewer_name.clone(),
        text: std::mem::take(&mut state.comment_draft),
        timestamp: state.settings.comment_timestamp.clone(),
    });
    state.next_comment_id += 1;
    state
}

fn commit_edit(mut state: FeedState) -> FeedState {
    let Some(draft) = state.edit.take() else {
        return state;
    };

    if let Some(post) = find_post_mut(&mut state.posts, draft.post_id) {
        post.title = draft.title;
        state
            .outbox
            .push(Notification::info("Post updated", "Your changes have been saved"));
    }
    state
}

fn delete_post(mut state: FeedState, id: PostId) -> FeedState {
    let before = state.posts.len();
    state.posts.retain(|p| p.id != id);
    if state.posts.len() == before {
        return state;
    }

    if state.selected == Some(id) {
        state.selected = None;
        state.comment_draft.clear();
    }
    if state.edit.as_ref().is_some_and(|draft| draft.post_id == id) {
        state.edit = None;
    }
    state
        .outbox
        .push(Notification::info("Post deleted", "The post has been removed"));
    state
}

fn complete_upload(
    mut state: FeedState,
    upload: Option<UploadId>,
    captured_title: String,
    media_ref: String,
    content_type: &str,
) -> FeedState {
    let Some(media_kind) = MediaKind::from_mime(content_type) else {
        state.outbox.push(Notification::error(
            "Upload failed",
            format!("Only images and videos are supported (got {})", content_type),
        ));
        return state;
    };

    // A dialog opened after this decode started stays open
    let own_dialog = upload.is_some() && state.upload.as_ref().map(|d| d.id) == upload;
    let title = if own_dialog {
        state.upload.take().map(|draft| draft.title).unwrap_or_default()
    } else {
        captured_title
    };
    let title = if title.is_empty() {
        state.settings.untitled_title.clone()
    } else {
        title
    };

    let post = Post::new(
        PostId(state.next_post_id),
        media_ref,
        media_kind,
        title,
        state.settings.viewer_name.clone(),
    );
    state.next_post_id += 1;
    state.posts.insert(0, post);

    state
        .outbox
        .push(Notification::info("Post published", "Your post was added to the feed"));
    state
}
