//! Feed state model
//!
//! - Actions: what can happen
//! - State: what is true right now, plus derived views
//! - Reducer: pure function (State, Action) -> State
//! - Store: owns the state and delivers notices

pub mod actions;
pub mod reducer;
pub mod state;
pub mod store;

pub use actions::Action;
pub use reducer::reduce;
pub use state::{EditDraft, EmptyState, FeedSettings, FeedState, UploadDraft};
pub use store::FeedStore;
