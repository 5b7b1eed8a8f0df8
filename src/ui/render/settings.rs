use crate::ui::theme::Theme;
use crate::ui::{App, Focus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Longest run of mask characters shown for the credential
const MAX_MASK: usize = 24;

pub(super) fn render_settings(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let focused = app.focus == Focus::ApiKey;
    let key_block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_active()
        } else {
            Theme::border()
        })
        .title(Span::styled(" OpenAI API key (optional) ", Theme::text_muted()));

    let masked: String = "•".repeat(app.api_key.chars().count().min(MAX_MASK));
    let key_line = if app.api_key.is_empty() && !focused {
        Line::from(Span::styled("empty → demo mode with mock analysis", Theme::text_dim()))
    } else {
        Line::from(Span::styled(masked.clone(), Theme::text()))
    };
    let inner = key_block.inner(columns[0]);
    frame.render_widget(Paragraph::new(key_line).block(key_block), columns[0]);

    if focused {
        frame.set_cursor_position(Position::new(
            inner.x + (masked.chars().count() as u16).min(inner.width.saturating_sub(1)),
            inner.y,
        ));
    }

    let mode_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Theme::border());

    let (mode_label, mode_style) = if app.is_live_active() {
        (
            " Using OpenAI ",
            Style::default()
                .fg(Theme::GREY_900)
                .bg(Theme::GREEN)
                .add_modifier(Modifier::BOLD),
        )
    } else if app.has_api_key() {
        (
            " Demo Mode ",
            Style::default().fg(Theme::GREY_50).bg(Theme::GREY_700),
        )
    } else {
        (
            " Demo Mode ",
            Style::default()
                .fg(Theme::GREY_400)
                .add_modifier(Modifier::DIM),
        )
    };

    let sep = format!("  {}  ", Theme::DOT_SEPARATOR);
    let mode_line = Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(sep.clone(), Theme::text_dim()),
        Span::styled("model ", Theme::text_dim()),
        Span::styled(app.settings.model.id(), Theme::text()),
        Span::styled(sep, Theme::text_dim()),
        Span::styled(
            format!(
                "{} tok  temp {}",
                app.settings.max_tokens, app.settings.temperature
            ),
            Theme::text_muted(),
        ),
    ]);
    frame.render_widget(Paragraph::new(mode_line).block(mode_block), columns[1]);
}
