//! Test keybinding mappings to feed actions
//!
//! Drives `App::handle_key` the way the event loop does and checks the
//! resulting feed state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use libpix::feed::{FeedSettings, FeedState};
use libpix::media::DecodedMedia;
use libpix::{MediaKind, Post, PostId, Tab, UploadId};
use pix_tui::services::{DecodeRequest, DecodeResult};
use pix_tui::{App, Effect, Focus};

fn key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(app: &mut App, code: KeyCode) -> Option<Effect> {
    app.handle_key(key_event(code))
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn seeded_app() -> App {
    App::with_state(FeedState::seeded(FeedSettings::default()), 100)
}

/// Seeded feed plus one post by the viewer at the top
fn app_with_own_post() -> App {
    let settings = FeedSettings::default();
    let mut posts = vec![Post::new(
        PostId(10),
        "https://img.example/mine.jpg".to_string(),
        MediaKind::Image,
        "My Photo".to_string(),
        settings.viewer_name.clone(),
    )];
    posts.extend(FeedState::seeded(FeedSettings::default()).posts);
    App::with_state(FeedState::with_posts(settings, posts), 100)
}

#[test]
fn test_q_quits_application() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_q_types_into_search_instead_of_quitting() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('/'));
    press(&mut app, KeyCode::Char('q'));

    assert!(!app.should_quit);
    assert_eq!(app.state().search_query, "q");
}

#[test]
fn test_help_overlay_swallows_keys() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::F(1));
    assert!(app.help_visible);

    press(&mut app, KeyCode::Char('l'));
    assert!(!app.state().posts[0].liked);

    press(&mut app, KeyCode::Esc);
    assert!(!app.help_visible);
}

#[test]
fn test_number_keys_switch_tabs() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().active_tab, Tab::Saved);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.state().active_tab, Tab::Search);
    press(&mut app, KeyCode::Char('1'));
    assert_eq!(app.state().active_tab, Tab::Home);
}

#[test]
fn test_search_filters_as_you_type() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('/'));
    assert_eq!(app.focus, Focus::Search);
    assert_eq!(app.state().active_tab, Tab::Search);

    type_text(&mut app, "CITY");
    let titles: Vec<&str> = app
        .state()
        .visible_posts()
        .iter()
        .map(|p| p.title.as_str())
        .collect();
    assert_eq!(titles, vec!["City Views"]);

    press(&mut app, KeyCode::Backspace);
    assert_eq!(app.state().search_query, "CIT");

    press(&mut app, KeyCode::Enter);
    assert_eq!(app.focus, Focus::Feed);
    assert_eq!(app.state().search_query, "CIT");
}

#[test]
fn test_navigation_stays_in_bounds() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Up);
    assert_eq!(app.cursor, 0);

    for _ in 0..10 {
        press(&mut app, KeyCode::Char('j'));
    }
    assert_eq!(app.cursor, 5);

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(app.cursor, 0);
    press(&mut app, KeyCode::Char('G'));
    assert_eq!(app.cursor, 5);
}

#[test]
fn test_like_and_save_cursor_post() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('l'));
    press(&mut app, KeyCode::Char('s'));

    let post = app.state().post(PostId(2)).unwrap();
    assert!(post.liked);
    assert!(post.saved);

    press(&mut app, KeyCode::Char('3'));
    assert_eq!(app.state().visible_posts().len(), 1);
}

#[test]
fn test_open_detail_and_comment() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.state().selected, Some(PostId(1)));

    press(&mut app, KeyCode::Char('c'));
    assert_eq!(app.focus, Focus::Comment);

    type_text(&mut app, "Lovely");
    assert_eq!(app.state().comment_draft, "Lovely");

    press(&mut app, KeyCode::Enter);
    let post = app.state().selected_post().unwrap();
    assert_eq!(post.comments.len(), 1);
    assert_eq!(post.comments[0].text, "Lovely");
    assert_eq!(post.comments[0].author, "You");
    assert_eq!(app.state().comment_draft, "");
    assert_eq!(app.input_text(), "");
    assert_eq!(app.focus, Focus::Comment);
}

#[test]
fn test_blank_comment_is_not_submitted() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('c'));
    type_text(&mut app, "   ");
    press(&mut app, KeyCode::Enter);

    assert!(app.state().selected_post().unwrap().comments.is_empty());
    assert_eq!(app.state().comment_draft, "   ");
}

#[test]
fn test_esc_closes_detail() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);
    assert!(app.state().selected.is_none());
}

#[test]
fn test_cannot_edit_or_delete_others_posts() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('e'));
    assert!(app.state().edit.is_none());
    assert_eq!(app.focus, Focus::Feed);

    press(&mut app, KeyCode::Char('d'));
    assert_eq!(app.state().posts.len(), 6);
}

#[test]
fn test_edit_own_post_title() {
    let mut app = app_with_own_post();
    press(&mut app, KeyCode::Char('e'));
    assert_eq!(app.focus, Focus::EditTitle);
    assert_eq!(app.input_text(), "My Photo");

    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Backspace);
    type_text(&mut app, "Day");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.state().post(PostId(10)).unwrap().title, "My Day");
    assert!(app.state().edit.is_none());
    assert_eq!(app.focus, Focus::Feed);
    assert_eq!(app.toast.as_ref().unwrap().notice.title, "Post updated");
}

#[test]
fn test_cancel_edit_keeps_title() {
    let mut app = app_with_own_post();
    press(&mut app, KeyCode::Char('e'));
    type_text(&mut app, "!!!");
    press(&mut app, KeyCode::Esc);

    assert_eq!(app.state().post(PostId(10)).unwrap().title, "My Photo");
    assert_eq!(app.focus, Focus::Feed);
}

#[test]
fn test_delete_own_post() {
    let mut app = app_with_own_post();
    press(&mut app, KeyCode::Char('d'));

    assert!(app.state().post(PostId(10)).is_none());
    assert_eq!(app.state().posts.len(), 6);
    assert_eq!(app.toast.as_ref().unwrap().notice.title, "Post deleted");
}

#[test]
fn test_upload_flow_requests_decode() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('u'));
    assert!(app.state().upload_open());
    assert_eq!(app.focus, Focus::UploadTitle);

    type_text(&mut app, "Beach");
    assert_eq!(app.state().upload.as_ref().unwrap().title, "Beach");

    press(&mut app, KeyCode::Tab);
    assert_eq!(app.focus, Focus::UploadPath);

    // Nothing to decode yet
    assert_eq!(press(&mut app, KeyCode::Enter), None);

    type_text(&mut app, "/tmp/beach.png");
    let effect = press(&mut app, KeyCode::Enter);
    assert_eq!(
        effect,
        Some(Effect::Decode(DecodeRequest {
            upload: UploadId(1),
            title: "Beach".to_string(),
            path: "/tmp/beach.png".into(),
        }))
    );
    assert!(app.is_decoding());

    // A second Enter while decoding does nothing
    assert_eq!(press(&mut app, KeyCode::Enter), None);
}

#[test]
fn test_esc_cancels_upload() {
    let mut app = seeded_app();
    press(&mut app, KeyCode::Char('u'));
    type_text(&mut app, "Draft");
    press(&mut app, KeyCode::Esc);

    assert!(!app.state().upload_open());
    assert_eq!(app.focus, Focus::Feed);
    assert_eq!(app.state().posts.len(), 6);
}

fn decoded_png() -> DecodedMedia {
    DecodedMedia {
        media_ref: "data:image/png;base64,AAAA".to_string(),
        content_type: "image/png".to_string(),
        size: 3,
    }
}

/// Open the upload dialog, fill in both fields and press Enter
fn submit_upload(app: &mut App, title: &str, path: &str) -> DecodeRequest {
    press(app, KeyCode::Char('u'));
    type_text(app, title);
    press(app, KeyCode::Tab);
    type_text(app, path);
    match press(app, KeyCode::Enter) {
        Some(Effect::Decode(request)) => request,
        None => panic!("upload was not submitted"),
    }
}

#[test]
fn test_late_decode_does_not_take_over_reopened_dialog() {
    let mut app = seeded_app();
    let first = submit_upload(&mut app, "First", "/tmp/first.png");
    press(&mut app, KeyCode::Esc);

    press(&mut app, KeyCode::Char('u'));
    type_text(&mut app, "Second");
    assert!(!app.is_decoding());

    app.on_decoded(DecodeResult {
        request: first,
        outcome: Ok(decoded_png()),
    });

    assert_eq!(app.state().posts[0].title, "First");
    assert_eq!(app.state().posts.len(), 7);
    assert_eq!(app.state().upload.as_ref().unwrap().title, "Second");
    assert_eq!(app.focus, Focus::UploadTitle);
    assert_eq!(app.input_text(), "Second");
}

#[test]
fn test_reopened_dialog_can_submit_while_old_decode_runs() {
    let mut app = seeded_app();
    let first = submit_upload(&mut app, "First", "/tmp/first.png");
    press(&mut app, KeyCode::Esc);

    let second = submit_upload(&mut app, "Second", "/tmp/second.png");
    assert_ne!(second.upload, first.upload);
    assert!(app.is_decoding());

    app.on_decoded(DecodeResult {
        request: first,
        outcome: Ok(decoded_png()),
    });
    assert!(app.is_decoding());
    assert_eq!(app.state().upload.as_ref().unwrap().title, "Second");

    app.on_decoded(DecodeResult {
        request: second,
        outcome: Ok(decoded_png()),
    });
    assert!(!app.is_decoding());
    assert!(!app.state().upload_open());
    assert_eq!(app.state().posts[0].title, "Second");
    assert_eq!(app.state().posts[1].title, "First");
    assert_eq!(app.focus, Focus::Feed);
}
