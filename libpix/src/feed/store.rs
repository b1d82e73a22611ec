//! State container that owns the feed
//!
//! `FeedStore` holds the current `FeedState`, runs each action through the
//! reducer and forwards the resulting notices to its sink. Presentation code
//! reads `state()` and calls `dispatch()`; nothing else mutates the feed.

use super::actions::Action;
use super::reducer::reduce;
use super::state::FeedState;
use crate::events::NotificationSink;

pub struct FeedStore<S> {
    state: FeedState,
    sink: S,
}

impl<S: NotificationSink> FeedStore<S> {
    pub fn new(state: FeedState, sink: S) -> Self {
        Self { state, sink }
    }

    /// Current snapshot
    pub fn state(&self) -> &FeedState {
        &self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Apply one action, then deliver the notices it raised
    pub fn dispatch(&mut self, action: Action) -> &FeedState {
        tracing::debug!(action = action.name(), "Dispatching action");

        let current = std::mem::take(&mut self.state);
        self.state = reduce(current, action);

        for notice in std::mem::take(&mut self.state.outbox) {
            if notice.is_error {
                tracing::warn!(title = %notice.title, message = %notice.message, "Notification");
            } else {
                tracing::info!(title = %notice.title, message = %notice.message, "Notification");
            }
            self.sink.notify(notice);
        }

        &self.state
    }

    #[cfg(test)]
    fn into_state(self) -> FeedState {
        self.state
    }
}
