//! Modal dialogs for editing and uploading posts

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::{centered_rect, render_field};
use crate::app::{App, Focus};

pub(super) fn render_edit(frame: &mut Frame, area: Rect, app: &App) {
    let Some(draft) = app.state().edit.as_ref() else {
        return;
    };

    let popup = centered_rect(60, 30, area);
    let block = Block::default()
        .title(format!(" Edit post {} ", draft.post_id))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(inner);

    render_field(frame, chunks[0], app, Focus::EditTitle, "Title", &draft.title);
    frame.render_widget(hint("Enter: save | Esc: cancel"), chunks[1]);
}

pub(super) fn render_upload(frame: &mut Frame, area: Rect, app: &App) {
    let Some(draft) = app.state().upload.as_ref() else {
        return;
    };

    let popup = centered_rect(70, 50, area);
    let block = Block::default()
        .title(" New post ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(popup);

    frame.render_widget(Clear, popup);
    frame.render_widget(block, popup);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_field(frame, chunks[0], app, Focus::UploadTitle, "Title", &draft.title);
    render_field(frame, chunks[1], app, Focus::UploadPath, "File", &app.upload_path);

    let status = if app.is_decoding() {
        Paragraph::new(Span::styled("Decoding...", Style::default().fg(Color::Yellow)))
    } else {
        hint("Tab: switch field | Enter on file: upload | Esc: cancel")
    };
    frame.render_widget(status, chunks[2]);
}

fn hint(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
}
