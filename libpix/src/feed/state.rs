//! Feed state
//!
//! `FeedState` is the single source of truth for the feed: the canonical
//! post collection plus the transient selection and draft state. All state
//! transitions happen through the reducer (see `reducer.rs`); everything in
//! this file is either construction or a pure derived view.

use crate::config::FeedConfig;
use crate::types::{MediaKind, Notification, Post, PostId, Tab, UploadId};

/// Labels the reducer stamps onto new posts and comments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedSettings {
    /// Author name of the current user; gates edit/delete
    pub viewer_name: String,
    pub untitled_title: String,
    pub comment_timestamp: String,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self::from(&FeedConfig::default())
    }
}

impl From<&FeedConfig> for FeedSettings {
    fn from(config: &FeedConfig) -> Self {
        Self {
            viewer_name: config.viewer_name.clone(),
            untitled_title: config.untitled_title.clone(),
            comment_timestamp: config.comment_timestamp.clone(),
        }
    }
}

/// In-progress title edit for one post
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub post_id: PostId,
    pub title: String,
}

/// Upload dialog contents; present only while the dialog is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadDraft {
    /// Fresh for every `StartUpload`
    pub id: UploadId,
    pub title: String,
}

/// Which placeholder the feed area should show instead of posts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// Saved tab with nothing saved
    NoSaved,
    /// Search query matched nothing
    NoResults,
}

/// Root feed state
#[derive(Debug, Clone, PartialEq)]
pub struct FeedState {
    /// Most recent first
    pub posts: Vec<Post>,

    pub active_tab: Tab,

    pub search_query: String,

    /// Selected post, by id only. Read it through `selected_post()`.
    pub selected: Option<PostId>,

    /// Comment being typed for the selected post
    pub comment_draft: String,

    pub edit: Option<EditDraft>,

    pub upload: Option<UploadDraft>,

    pub next_post_id: u64,

    pub next_comment_id: u64,

    pub next_upload_id: u64,

    pub settings: FeedSettings,

    /// Notices raised by the last transition, drained by `FeedStore`
    pub outbox: Vec<Notification>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new(FeedSettings::default())
    }
}

impl FeedState {
    /// Create an empty feed
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            posts: Vec::new(),
            active_tab: Tab::Home,
            search_query: String::new(),
            selected: None,
            comment_draft: String::new(),
            edit: None,
            upload: None,
            next_post_id: 1,
            next_comment_id: 1,
            next_upload_id: 1,
            settings,
            outbox: Vec::new(),
        }
    }

    /// Create a feed holding the given posts; id counters continue past them
    pub fn with_posts(settings: FeedSettings, posts: Vec<Post>) -> Self {
        let next_post_id = posts.iter().map(|p| p.id.0).max().unwrap_or(0) + 1;
        let next_comment_id = posts
            .iter()
            .flat_map(|p| p.comments.iter())
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            posts,
            next_post_id,
            next_comment_id,
            ..Self::new(settings)
        }
    }

    /// Create a feed with the demo posts
    pub fn seeded(settings: FeedSettings) -> Self {
        Self::with_posts(settings, seed_posts())
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    /// The post open in the detail view, looked up from the collection
    pub fn selected_post(&self) -> Option<&Post> {
        self.selected.and_then(|id| self.post(id))
    }

    /// Posts to display for the active tab and search query
    pub fn visible_posts(&self) -> Vec<&Post> {
        let on_tab = self
            .posts
            .iter()
            .filter(|p| self.active_tab != Tab::Saved || p.saved);

        if self.active_tab == Tab::Search && !self.search_query.is_empty() {
            let query = self.search_query.to_lowercase();
            on_tab
                .filter(|p| {
                    p.title.to_lowercase().contains(&query)
                        || p.author.to_lowercase().contains(&query)
                })
                .collect()
        } else {
            on_tab.collect()
        }
    }

    pub fn saved_posts(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| p.saved).collect()
    }

    /// Whether the viewer may edit or delete this post
    pub fn can_modify(&self, post: &Post) -> bool {
        post.author == self.settings.viewer_name
    }

    pub fn empty_state(&self) -> Option<EmptyState> {
        match self.active_tab {
            Tab::Saved if self.posts.iter().all(|p| !p.saved) => Some(EmptyState::NoSaved),
            Tab::Search if !self.search_query.is_empty() && self.visible_posts().is_empty() => {
                Some(EmptyState::NoResults)
            }
            _ => None,
        }
    }

    pub fn upload_open(&self) -> bool {
        self.upload.is_some()
    }

    pub fn editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Whether the comment draft would be accepted by `SubmitComment`
    pub fn can_submit_comment(&self) -> bool {
        self.selected_post().is_some() && !self.comment_draft.trim().is_empty()
    }
}

const SEED_MEDIA: [&str; 3] = [
    "https://cdn.poehali.dev/projects/a1b85591-5932-4ee8-9fa7-8d4bef4a4ecf/files/2f845b11-8a2e-4dcc-a4fe-66ca7b82c306.jpg",
    "https://cdn.poehali.dev/projects/a1b85591-5932-4ee8-9fa7-8d4bef4a4ecf/files/08d3fc9d-2f9e-4972-a4a7-ed3436825f0c.jpg",
    "https://cdn.poehali.dev/projects/a1b85591-5932-4ee8-9fa7-8d4bef4a4ecf/files/8fa240a2-beeb-42fb-b0ce-224a39780c7f.jpg",
];

fn seed_posts() -> Vec<Post> {
    let entries = [
        ("Mountain Serenity", "Alex M."),
        ("Urban Lines", "Sarah K."),
        ("Coffee Moments", "Mike R."),
        ("Nature Escape", "Emma L."),
        ("City Views", "John D."),
        ("Cozy Space", "Lisa W."),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, author))| {
            Post::new(
                PostId(i as u64 + 1),
                SEED_MEDIA[i % SEED_MEDIA.len()].to_string(),
                MediaKind::Image,
                title.to_string(),
                author.to_string(),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Comment, CommentId};

    #[test]
    fn test_seeded_feed() {
        let state = FeedState::seeded(FeedSettings::default());

        assert_eq!(state.posts.len(), 6);
        assert_eq!(state.posts[0].id, PostId(1));
        assert_eq!(state.posts[0].title, "Mountain Serenity");
        assert_eq!(state.posts[5].author, "Lisa W.");
        assert_eq!(state.next_post_id, 7);
        assert!(state.posts.iter().all(|p| !p.liked && !p.saved));
    }

    #[test]
    fn test_with_posts_continues_comment_ids() {
        let mut post = Post::new(
            PostId(3),
            "a".to_string(),
            MediaKind::Video,
            "t".to_string(),
            "You".to_string(),
        );
        post.comments.push(Comment {
            id: CommentId(41),
            author: "Mike R.".to_string(),
            text: "wow".to_string(),
            timestamp: "1h".to_string(),
        });

        let state = FeedState::with_posts(FeedSettings::default(), vec![post]);
        assert_eq!(state.next_post_id, 4);
        assert_eq!(state.next_comment_id, 42);
    }

    #[test]
    fn test_selected_post_is_looked_up() {
        let mut state = FeedState::seeded(FeedSettings::default());
        state.selected = Some(PostId(2));
        state.posts[1].title = "Changed".to_string();

        assert_eq!(state.selected_post().unwrap().title, "Changed");

        state.posts.retain(|p| p.id != PostId(2));
        assert!(state.selected_post().is_none());
    }

    #[test]
    fn test_search_matches_author_case_insensitively() {
        let mut state = FeedState::seeded(FeedSettings::default());
        state.active_tab = Tab::Search;
        state.search_query = "SARAH".to_string();

        let titles: Vec<&str> = state.visible_posts().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["Urban Lines"]);
    }

    #[test]
    fn test_query_ignored_outside_search_tab() {
        let mut state = FeedState::seeded(FeedSettings::default());
        state.search_query = "urban".to_string();

        assert_eq!(state.visible_posts().len(), 6);
        assert_eq!(state.empty_state(), None);
    }

    #[test]
    fn test_empty_states() {
        let mut state = FeedState::seeded(FeedSettings::default());

        state.active_tab = Tab::Saved;
        assert_eq!(state.empty_state(), Some(EmptyState::NoSaved));

        state.active_tab = Tab::Search;
        assert_eq!(state.empty_state(), None);

        state.search_query = "zzz".to_string();
        assert_eq!(state.empty_state(), Some(EmptyState::NoResults));
    }

    #[test]
    fn test_can_modify_only_own_posts() {
        let state = FeedState::seeded(FeedSettings::default());
        let own = Post::new(
            PostId(99),
            "a".to_string(),
            MediaKind::Image,
            "Mine".to_string(),
            "You".to_string(),
        );

        assert!(state.can_modify(&own));
        assert!(!state.can_modify(&state.posts[0]));
    }

    #[test]
    fn test_can_submit_comment() {
        let mut state = FeedState::seeded(FeedSettings::default());
        state.comment_draft = "hello".to_string();
        assert!(!state.can_submit_comment());

        state.selected = Some(PostId(1));
        assert!(state.can_submit_comment());

        state.comment_draft = "  \n".to_string();
        assert!(!state.can_submit_comment());
    }
}
