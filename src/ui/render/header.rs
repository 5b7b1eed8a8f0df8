use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub(super) fn render_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled("T S   A S S I S T A N T", Theme::title())),
        Line::from(Span::styled(
            "modern patterns · type safety · performance",
            Theme::text_dim(),
        )),
    ];
    let header = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(header, area);
}
