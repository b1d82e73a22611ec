//! UI rendering
//!
//! Render functions read the app and draw; they never change state.

mod dialogs;
mod feed;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

use crate::app::{App, Focus};
use libpix::Tab;

/// Draw the whole screen
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.size();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Feed and detail
            Constraint::Length(3), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], app);
    feed::render_body(frame, chunks[1], app);
    render_status_bar(frame, chunks[2], app);

    if app.state().edit.is_some() {
        dialogs::render_edit(frame, area, app);
    }
    if app.state().upload.is_some() {
        dialogs::render_upload(frame, area, app);
    }
    if app.help_visible {
        render_help_overlay(frame, area);
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.state();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(34),
            Constraint::Min(0),
        ])
        .split(area);

    let brand = Paragraph::new(Span::styled(
        "Pix",
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD),
    ))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, chunks[0]);

    let selected = Tab::ALL
        .iter()
        .position(|t| *t == state.active_tab)
        .unwrap_or(0);
    let titles: Vec<Line> = Tab::ALL
        .iter()
        .enumerate()
        .map(|(i, t)| Line::from(format!("{} {}", i + 1, t.label())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(selected)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, chunks[1]);

    if state.active_tab == Tab::Search {
        render_field(frame, chunks[2], app, Focus::Search, "Search (/)", &state.search_query);
    }
}

/// Draw a titled single-line field; the focused one shows the live editor
pub(crate) fn render_field(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    field: Focus,
    title: &str,
    value: &str,
) {
    let focused = app.focus == field;
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if focused {
        frame.render_widget(&app.input, inner);
    } else if value.is_empty() {
        let hint = Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(hint), inner);
    } else {
        frame.render_widget(Paragraph::new(value.to_string()), inner);
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let widget = match app.toast {
        Some(ref toast) => {
            let color = if toast.notice.is_error { Color::Red } else { Color::Green };
            Paragraph::new(Line::from(vec![
                Span::styled(
                    toast.notice.title.clone(),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                ),
                Span::raw(": "),
                Span::raw(toast.notice.message.clone()),
            ]))
            .block(Block::default().borders(Borders::ALL).border_style(Style::default().fg(color)))
        }
        None => Paragraph::new(Span::styled(hints(app), Style::default().fg(Color::Gray)))
            .block(Block::default().borders(Borders::ALL)),
    };

    frame.render_widget(widget, area);
}

fn hints(app: &App) -> &'static str {
    match app.focus {
        Focus::Feed if app.state().selected.is_some() => {
            "l: like | s: save | c: comment | e: edit | d: delete | Esc: close | ?: help"
        }
        Focus::Feed => "Enter: open | l: like | s: save | u: upload | /: search | 1-3: tabs | q: quit",
        Focus::Search => "Type to filter | Enter/Esc: back to feed",
        Focus::Comment => "Enter: send | Esc: back",
        Focus::EditTitle => "Enter: save | Esc: cancel",
        Focus::UploadTitle | Focus::UploadPath => "Enter: next/upload | Tab: switch field | Esc: cancel",
    }
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Feed:"),
        Line::from("  j/k, Up/Down  - Move"),
        Line::from("  Enter         - Open post"),
        Line::from("  1 / 2 / 3     - Home / Search / Saved"),
        Line::from("  /             - Search"),
        Line::from("  l / s         - Like / Save"),
        Line::from("  u             - Upload"),
        Line::from(""),
        Line::from("Open post:"),
        Line::from("  c             - Comment"),
        Line::from("  e / d         - Edit / Delete (your posts)"),
        Line::from("  Esc           - Close"),
        Line::from(""),
        Line::from("q or Ctrl+C to quit; Esc or ? to close this help"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Helper to create centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
