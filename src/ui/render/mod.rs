mod code;
mod footer;
mod header;
mod results;
mod settings;
mod toast;

use crate::ui::theme::Theme;
use crate::ui::App;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use code::render_code;
use footer::render_footer;
use header::render_header;
use results::render_results;
use settings::render_settings;
use toast::render_toast;

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    frame.render_widget(Block::default().style(Style::default().bg(Theme::BG)), area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Credential + mode
            Constraint::Min(8),    // Code / results
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0]);
    render_settings(frame, layout[1], app);

    // Results only appear once something has been analyzed
    match &app.analysis {
        Some(analysis) => {
            let panes = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(layout[2]);
            render_code(frame, panes[0], app);
            render_results(frame, panes[1], app, analysis);
        }
        None => render_code(frame, layout[2], app),
    }

    render_footer(frame, layout[3], app);

    if let Some(toast) = &app.toast {
        render_toast(frame, toast);
    }
}
