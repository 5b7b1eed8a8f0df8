use crate::ui::theme::Theme;
use crate::ui::{App, Focus};
use ratatui::{
    layout::{Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub(super) fn render_code(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::Editor;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_active()
        } else {
            Theme::border()
        })
        .title(Span::styled(" TypeScript Code ", Theme::title()));

    let inner = block.inner(area);
    let height = inner.height as usize;
    let scroll = app.editor.visible_scroll(height);

    let lines = app.editor.lines();
    let gutter = lines.len().to_string().len().max(2);

    let visible: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, text)| {
            Line::from(vec![
                Span::styled(format!("{:>width$} ", i + 1, width = gutter), Theme::text_dim()),
                Span::styled(text.as_str(), Theme::text()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);

    if focused {
        let (row, _) = app.editor.cursor();
        let x = inner.x as usize + gutter + 1 + app.editor.cursor_display_col();
        let y = inner.y as usize + row.saturating_sub(scroll);
        if x < (inner.x + inner.width) as usize && y < (inner.y + inner.height) as usize {
            frame.set_cursor_position(Position::new(x as u16, y as u16));
        }
    }
}
