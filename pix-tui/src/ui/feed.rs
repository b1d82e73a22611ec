//! Feed list and post detail

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use libpix::feed::{EmptyState, FeedState};
use libpix::{MediaKind, Post};

use super::render_field;
use crate::app::{App, Focus};

pub(super) fn render_body(frame: &mut Frame, area: Rect, app: &App) {
    match app.state().selected_post() {
        Some(post) => {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(area);
            render_list(frame, chunks[0], app);
            render_detail(frame, chunks[1], app, post);
        }
        None => render_list(frame, area, app),
    }
}

fn render_list(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();
    let block = Block::default()
        .title(format!(" {} ", state.active_tab.label()))
        .borders(Borders::ALL);

    if let Some(empty) = state.empty_state() {
        let message = match empty {
            EmptyState::NoSaved => "No saved posts",
            EmptyState::NoResults => "Nothing found",
        };
        let widget = Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray)))
            .block(block);
        frame.render_widget(widget, area);
        return;
    }

    let items: Vec<ListItem> = state
        .visible_posts()
        .into_iter()
        .map(|post| list_item(state, post))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if app.focus == Focus::Feed || state.selected.is_some() {
        list_state.select(Some(app.cursor));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn list_item<'a>(state: &FeedState, post: &'a Post) -> ListItem<'a> {
    let mut spans = vec![
        Span::styled(kind_badge(post.media_kind), Style::default().fg(Color::Blue)),
        Span::raw(" "),
        Span::styled(post.title.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  @{}", post.author), Style::default().fg(Color::Gray)),
    ];
    if post.liked {
        spans.push(Span::styled("  ♥", Style::default().fg(Color::Red)));
    }
    if post.saved {
        spans.push(Span::styled("  ★", Style::default().fg(Color::Yellow)));
    }
    if !post.comments.is_empty() {
        spans.push(Span::raw(format!("  {} comments", post.comments.len())));
    }
    if state.can_modify(post) {
        spans.push(Span::styled("  (yours)", Style::default().fg(Color::Green)));
    }
    ListItem::new(Line::from(spans))
}

fn kind_badge(kind: MediaKind) -> &'static str {
    match kind {
        MediaKind::Image => "[img]",
        MediaKind::Video => "[vid]",
    }
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App, post: &Post) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(4), Constraint::Length(3)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            post.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(format!("by {}", post.author), Style::default().fg(Color::Gray))),
        Line::from(""),
        Line::from(format!("{} {}", kind_badge(post.media_kind), media_label(&post.media_ref))),
        Line::from(vec![
            status_span(post.liked, "♥ Liked", "♡ Like", Color::Red),
            Span::raw("   "),
            status_span(post.saved, "★ Saved", "☆ Save", Color::Yellow),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("Comments ({})", post.comments.len()),
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
    ];

    if post.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "No comments yet",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for comment in &post.comments {
        lines.push(Line::from(vec![
            Span::styled(comment.author.clone(), Style::default().fg(Color::Cyan)),
            Span::styled(format!(" · {}", comment.timestamp), Style::default().fg(Color::DarkGray)),
        ]));
        lines.push(Line::from(format!("  {}", comment.text)));
    }

    let detail = Paragraph::new(lines)
        .block(Block::default().title(" Post ").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(detail, chunks[0]);

    render_field(
        frame,
        chunks[1],
        app,
        Focus::Comment,
        "Comment (c)",
        &app.state().comment_draft,
    );
}

fn status_span(on: bool, on_text: &'static str, off_text: &'static str, color: Color) -> Span<'static> {
    if on {
        Span::styled(on_text, Style::default().fg(color))
    } else {
        Span::styled(off_text, Style::default().fg(Color::DarkGray))
    }
}

/// Short description of a media reference; data URLs are far too long to print
fn media_label(media_ref: &str) -> String {
    match media_ref.strip_prefix("data:") {
        Some(rest) => {
            let mime = rest.split(';').next().unwrap_or_default();
            format!("uploaded {} ({} bytes encoded)", mime, rest.len())
        }
        None => media_ref.to_string(),
    }
}
