use crate::ui::theme::Theme;
use crate::ui::{App, Focus};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled("  ", Style::default())];

    if app.analyzing {
        spans.push(Span::styled(
            format!("{} Analyzing...", Theme::spinner_frame(app.loading_frame)),
            Style::default().fg(Theme::PURPLE),
        ));
        spans.push(Span::styled("   ", Style::default()));
    }

    let mut hints: Vec<(&str, &str)> = Vec::new();
    if !app.analyzing {
        hints.push(("^R", "analyze"));
    }
    if app.has_api_key() {
        hints.push(("^L", "live"));
    }
    hints.push(("F3", "model"));
    match app.focus {
        Focus::Results => {
            hints.push(("←→", "tabs"));
            hints.push(("↑↓", "scroll"));
        }
        Focus::ApiKey => hints.push(("type", "key")),
        Focus::Editor => {}
    }
    hints.push(("tab", "focus"));
    hints.push(("^C", "quit"));

    for (i, (key, label)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  ", Style::default()));
        }
        spans.push(Span::styled(*key, Theme::key()));
        spans.push(Span::styled(format!(" {}", label), Theme::text_dim()));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
