//! Keyboard handling
//!
//! Maps key presses to feed actions depending on which field has focus.
//! Typed characters go through the text editor and are then written back
//! to the matching draft in the store, so the store always holds what is
//! on screen.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use libpix::feed::Action;
use libpix::Tab;

use super::{App, Focus};
use crate::services::DecodeRequest;

/// Work the event loop must do outside the app
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Decode this file and report back through `App::on_decoded`
    Decode(DecodeRequest),
}

impl App {
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Effect> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return None;
        }

        if self.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.help_visible = false;
            }
            return None;
        }

        match self.focus {
            Focus::Feed => {
                self.handle_feed_key(key);
                None
            }
            Focus::Search => {
                self.handle_search_key(key);
                None
            }
            Focus::Comment => {
                self.handle_comment_key(key);
                None
            }
            Focus::EditTitle => {
                self.handle_edit_key(key);
                None
            }
            Focus::UploadTitle | Focus::UploadPath => self.handle_upload_key(key),
        }
    }

    fn handle_feed_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::F(1) | KeyCode::Char('?') => self.help_visible = true,

            // Tabs
            KeyCode::Char('1') => self.dispatch(Action::SetTab(Tab::Home)),
            KeyCode::Char('2') => self.dispatch(Action::SetTab(Tab::Search)),
            KeyCode::Char('3') => self.dispatch(Action::SetTab(Tab::Saved)),
            KeyCode::Tab => self.cycle_tab(1),
            KeyCode::BackTab => self.cycle_tab(Tab::ALL.len() - 1),
            KeyCode::Char('/') => {
                self.dispatch(Action::SetTab(Tab::Search));
                self.set_focus(Focus::Search);
            }

            // List navigation
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.state().visible_posts().len();
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Home | KeyCode::Char('g') => self.cursor = 0,
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.state().visible_posts().len().saturating_sub(1);
            }

            // Detail view
            KeyCode::Enter => {
                if let Some(id) = self.cursor_post().map(|p| p.id) {
                    self.dispatch(Action::OpenDetail(id));
                }
            }
            KeyCode::Esc | KeyCode::Char('x') => {
                if self.state().selected.is_some() {
                    self.dispatch(Action::CloseDetail);
                } else {
                    self.toast = None;
                }
            }
            KeyCode::Char('c') => {
                if self.state().selected.is_none() {
                    if let Some(id) = self.cursor_post().map(|p| p.id) {
                        self.dispatch(Action::OpenDetail(id));
                    }
                }
                if self.state().selected.is_some() {
                    self.set_focus(Focus::Comment);
                }
            }

            // Social
            KeyCode::Char('l') => {
                if let Some(id) = self.target_post_id() {
                    self.dispatch(Action::ToggleLike(id));
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.target_post_id() {
                    self.dispatch(Action::ToggleSave(id));
                }
            }

            // Own posts only
            KeyCode::Char('e') => {
                if let Some(id) = self.modifiable_target() {
                    self.dispatch(Action::StartEdit(id));
                    self.set_focus(Focus::EditTitle);
                }
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.modifiable_target() {
                    self.dispatch(Action::DeletePost(id));
                }
            }

            KeyCode::Char('u') | KeyCode::Char('+') => {
                self.upload_path.clear();
                self.dispatch(Action::StartUpload(None));
                self.set_focus(Focus::UploadTitle);
            }

            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Down => self.set_focus(Focus::Feed),
            _ => {
                self.input.input(key);
                let query = self.input_text();
                self.dispatch(Action::SetSearchQuery(query));
            }
        }
    }

    fn handle_comment_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.set_focus(Focus::Feed),
            KeyCode::Enter => {
                self.dispatch(Action::SubmitComment);
                // Reload the (now cleared) draft; stays put if submission was ignored
                if self.focus == Focus::Comment {
                    self.set_focus(Focus::Comment);
                }
            }
            _ => {
                self.input.input(key);
                let text = self.input_text();
                self.dispatch(Action::SetCommentDraft(text));
            }
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.dispatch(Action::CancelEdit),
            KeyCode::Enter => self.dispatch(Action::CommitEdit),
            _ => {
                self.input.input(key);
                let title = self.input_text();
                self.dispatch(Action::SetEditTitle(title));
            }
        }
    }

    fn handle_upload_key(&mut self, key: KeyEvent) -> Option<Effect> {
        match (self.focus, key.code) {
            (_, KeyCode::Esc) => {
                self.dispatch(Action::CancelUpload);
                None
            }
            (Focus::UploadTitle, KeyCode::Tab | KeyCode::Down | KeyCode::Enter) => {
                self.set_focus(Focus::UploadPath);
                None
            }
            (Focus::UploadPath, KeyCode::Tab | KeyCode::BackTab | KeyCode::Up) => {
                self.set_focus(Focus::UploadTitle);
                None
            }
            (Focus::UploadPath, KeyCode::Enter) => {
                let path = self.upload_path.trim();
                if self.is_decoding() || path.is_empty() {
                    return None;
                }
                let draft = self.state().upload.as_ref()?;
                let request = DecodeRequest {
                    upload: draft.id,
                    title: draft.title.clone(),
                    path: libpix::config::expand_path(path),
                };
                self.decoding = Some(request.upload);
                Some(Effect::Decode(request))
            }
            (Focus::UploadTitle, _) => {
                self.input.input(key);
                let title = self.input_text();
                self.dispatch(Action::SetUploadTitle(title));
                None
            }
            _ => {
                self.input.input(key);
                self.upload_path = self.input_text();
                None
            }
        }
    }

    fn cycle_tab(&mut self, step: usize) {
        let current = Tab::ALL
            .iter()
            .position(|t| *t == self.state().active_tab)
            .unwrap_or(0);
        let next = Tab::ALL[(current + step) % Tab::ALL.len()];
        self.dispatch(Action::SetTab(next));
    }

    fn modifiable_target(&self) -> Option<libpix::PostId> {
        let id = self.target_post_id()?;
        let state = self.state();
        state
            .post(id)
            .filter(|post| state.can_modify(post))
            .map(|post| post.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use libpix::feed::{FeedSettings, FeedState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::with_state(FeedState::seeded(FeedSettings::default()), 100);
        let mut key = press(KeyCode::Char('q'));
        key.kind = KeyEventKind::Release;

        app.handle_key(key);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_text_field() {
        let mut app = App::with_state(FeedState::seeded(FeedSettings::default()), 100);
        app.handle_key(press(KeyCode::Char('/')));
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));

        assert!(app.should_quit);
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let mut app = App::with_state(FeedState::seeded(FeedSettings::default()), 100);
        app.handle_key(press(KeyCode::BackTab));
        assert_eq!(app.state().active_tab, Tab::Saved);

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.state().active_tab, Tab::Home);
    }
}
