//! Application module
//!
//! `App` combines the feed store from libpix with the state that only the
//! terminal needs: which field has focus, the list cursor, the help overlay
//! and the current toast. Feed data is never copied here; rendering reads it
//! from the store on every frame.

pub mod event;
pub mod input;

use libpix::events::{Event, EventBus, EventReceiver};
use libpix::feed::{Action, FeedSettings, FeedState, FeedStore};
use libpix::{Config, Notification, Post, PostId, UploadId};
use tui_textarea::{CursorMove, TextArea};

use crate::services::DecodeResult;

pub use input::Effect;

/// How many ticks a toast stays on screen
pub const TOAST_TICKS: u16 = 30;

/// Which widget receives typed characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys are commands (navigation, like, save, ...)
    Feed,
    Search,
    Comment,
    EditTitle,
    UploadTitle,
    UploadPath,
}

impl Focus {
    pub fn placeholder(&self) -> &'static str {
        match self {
            Focus::Feed => "",
            Focus::Search => "Search titles and authors...",
            Focus::Comment => "Add a comment...",
            Focus::EditTitle | Focus::UploadTitle => "Title",
            Focus::UploadPath => "Path to an image or video",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub notice: Notification,
    pub ticks_left: u16,
}

pub struct App {
    pub store: FeedStore<EventBus>,
    events: EventReceiver,
    pub should_quit: bool,
    pub help_visible: bool,
    /// Index into the visible posts
    pub cursor: usize,
    pub focus: Focus,
    pub upload_path: String,
    /// Upload dialog whose file is being decoded
    pub decoding: Option<UploadId>,
    pub toast: Option<Toast>,
    /// Editor for the focused text field
    pub input: TextArea<'static>,
    pub tick_rate_ms: u64,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let settings = FeedSettings::from(&config.feed);
        let state = if config.feed.seed {
            FeedState::seeded(settings)
        } else {
            FeedState::new(settings)
        };
        Self::with_state(state, config.ui.tick_rate_ms)
    }

    pub fn with_state(state: FeedState, tick_rate_ms: u64) -> Self {
        let bus = EventBus::default();
        let events = bus.subscribe();

        Self {
            store: FeedStore::new(state, bus),
            events,
            should_quit: false,
            help_visible: false,
            cursor: 0,
            focus: Focus::Feed,
            upload_path: String::new(),
            decoding: None,
            toast: None,
            input: TextArea::default(),
            tick_rate_ms,
        }
    }

    pub fn state(&self) -> &FeedState {
        self.store.state()
    }

    /// Run an action through the store and bring UI state back in line
    pub fn dispatch(&mut self, action: Action) {
        let followed = self.cursor_post().map(|p| p.id);
        self.store.dispatch(action);
        self.follow_cursor(followed);
        self.release_stale_focus();
        self.drain_events();
    }

    /// Post under the list cursor
    pub fn cursor_post(&self) -> Option<&Post> {
        self.state().visible_posts().get(self.cursor).copied()
    }

    /// Post that like/save/edit/delete act on: the open one, else the cursor's
    pub fn target_post_id(&self) -> Option<PostId> {
        self.state()
            .selected
            .or_else(|| self.cursor_post().map(|p| p.id))
    }

    pub fn on_tick(&mut self) {
        self.drain_events();
        if let Some(toast) = self.toast.as_mut() {
            toast.ticks_left = toast.ticks_left.saturating_sub(1);
            if toast.ticks_left == 0 {
                self.toast = None;
            }
        }
    }

    /// Whether the open upload dialog is waiting for its decode
    pub fn is_decoding(&self) -> bool {
        self.decoding.is_some() && self.decoding == self.open_upload()
    }

    /// Feed a finished decode back into the store
    ///
    /// The upload is applied even if its dialog was closed meanwhile, under
    /// the title captured with the request. A dialog opened since then is
    /// left as it is.
    pub fn on_decoded(&mut self, result: DecodeResult) {
        let DecodeResult { request, outcome } = result;
        if self.decoding == Some(request.upload) {
            self.decoding = None;
        }

        match outcome {
            Ok(decoded) => {
                if self.open_upload() == Some(request.upload) {
                    self.upload_path.clear();
                }
                self.dispatch(Action::CompleteUpload {
                    upload: Some(request.upload),
                    title: request.title,
                    media_ref: decoded.media_ref,
                    content_type: decoded.content_type,
                });
            }
            Err(e) => self.dispatch(Action::UploadFailed(e.to_string())),
        }
    }

    /// Move focus and load the field's current value into the editor
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;

        let value = match focus {
            Focus::Feed => String::new(),
            Focus::Search => self.state().search_query.clone(),
            Focus::Comment => self.state().comment_draft.clone(),
            Focus::EditTitle => self
                .state()
                .edit
                .as_ref()
                .map(|d| d.title.clone())
                .unwrap_or_default(),
            Focus::UploadTitle => self
                .state()
                .upload
                .as_ref()
                .map(|d| d.title.clone())
                .unwrap_or_default(),
            Focus::UploadPath => self.upload_path.clone(),
        };

        let mut input = TextArea::new(vec![value]);
        input.set_placeholder_text(focus.placeholder());
        input.set_cursor_line_style(ratatui::style::Style::default());
        input.move_cursor(CursorMove::End);
        self.input = input;
    }

    /// Text currently in the editor
    pub fn input_text(&self) -> String {
        self.input.lines().concat()
    }

    fn open_upload(&self) -> Option<UploadId> {
        self.state().upload.as_ref().map(|d| d.id)
    }

    /// Keep the cursor on the same post when posts move; clamp otherwise
    fn follow_cursor(&mut self, followed: Option<PostId>) {
        let (len, index) = {
            let visible = self.state().visible_posts();
            let index = followed.and_then(|id| visible.iter().position(|p| p.id == id));
            (visible.len(), index)
        };

        match index {
            Some(index) => self.cursor = index,
            None if self.cursor >= len => self.cursor = len.saturating_sub(1),
            None => {}
        }
    }

    fn release_stale_focus(&mut self) {
        let state = self.store.state();
        let stale = match self.focus {
            Focus::Comment => state.selected_post().is_none(),
            Focus::EditTitle => state.edit.is_none(),
            Focus::UploadTitle | Focus::UploadPath => state.upload.is_none(),
            Focus::Feed | Focus::Search => false,
        };
        if stale {
            self.set_focus(Focus::Feed);
        }
    }

    fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            match event {
                Event::Notification(notice) => {
                    self.toast = Some(Toast {
                        notice,
                        ticks_left: TOAST_TICKS,
                    });
                }
            }
        }
    }
}
