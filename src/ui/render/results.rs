use crate::analysis::{Analysis, ModernPattern, Suggestion, TypeIssue};
use crate::ui::theme::Theme;
use crate::ui::{App, Focus, ResultTab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Frame,
};

pub(crate) const NO_SUGGESTIONS: &str = "No suggestions found. Your code looks good!";
pub(crate) const NO_TYPE_ISSUES: &str = "No type issues detected!";
pub(crate) const NO_PATTERNS: &str = "No modern patterns suggested at this time";

pub(super) fn render_results(frame: &mut Frame, area: Rect, app: &App, analysis: &Analysis) {
    let focused = app.focus == Focus::Results;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused {
            Theme::border_active()
        } else {
            Theme::border()
        })
        .title(Span::styled(" Analysis Results ", Theme::title()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let titles: Vec<Line> = ResultTab::ALL
        .iter()
        .map(|tab| {
            let count = match tab {
                ResultTab::Suggestions => analysis.suggestions.len(),
                ResultTab::TypeIssues => analysis.type_issues.len(),
                ResultTab::Patterns => analysis.modern_patterns.len(),
            };
            Line::from(format!("{} ({})", tab.label(), count))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .select(app.active_tab.index())
        .style(Theme::text_dim())
        .highlight_style(
            Style::default()
                .fg(Theme::WHITE)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(Span::styled("│", Theme::border()));
    frame.render_widget(tabs, rows[0]);

    let body = Paragraph::new(tab_lines(analysis, app.active_tab)).wrap(Wrap { trim: false });
    let limit = max_scroll(&body, rows[1]);
    app.results_scroll_limit.set(limit);
    let scroll = app.results_scroll.min(limit);
    frame.render_widget(body.scroll((scroll as u16, 0)), rows[1]);
}

/// Furthest scroll offset that still fills `area`, counted in wrapped rows
pub(crate) fn max_scroll(body: &Paragraph, area: Rect) -> usize {
    body.line_count(area.width).saturating_sub(area.height as usize)
}

/// Body lines for one results tab
pub(crate) fn tab_lines(analysis: &Analysis, tab: ResultTab) -> Vec<Line<'static>> {
    let (lines, empty) = match tab {
        ResultTab::Suggestions => (suggestion_lines(&analysis.suggestions), NO_SUGGESTIONS),
        ResultTab::TypeIssues => (type_issue_lines(&analysis.type_issues), NO_TYPE_ISSUES),
        ResultTab::Patterns => (pattern_lines(&analysis.modern_patterns), NO_PATTERNS),
    };
    if lines.is_empty() {
        vec![
            Line::default(),
            Line::from(Span::styled(format!("  {}", empty), Theme::text_muted())),
        ]
    } else {
        lines
    }
}

fn suggestion_lines(suggestions: &[Suggestion]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for s in suggestions {
        let mut header = vec![
            Span::styled(
                format!("{} ", s.kind.icon()),
                Style::default().fg(Theme::kind_color(s.kind)),
            ),
            Span::styled(format!(" {} ", s.severity.label()), Theme::severity_badge(s.severity)),
            Span::raw(" "),
            Span::styled(
                format!("[{}]", s.kind.label()),
                Style::default().fg(Theme::kind_color(s.kind)),
            ),
        ];
        if let Some(line) = s.line {
            header.push(Span::styled(format!("  Line {}", line), Theme::text_dim()));
        }
        lines.push(Line::from(header));
        lines.push(Line::from(Span::styled(format!("  {}", s.message), Theme::text())));
        if let Some(alternative) = &s.modern_alternative {
            lines.extend(code_lines(alternative));
        }
        lines.push(Line::default());
    }
    lines
}

fn type_issue_lines(issues: &[TypeIssue]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for issue in issues {
        lines.push(Line::from(vec![
            Span::styled("▲ ", Style::default().fg(Theme::RED)),
            Span::styled(
                format!(" Line {} ", issue.line),
                Style::default()
                    .fg(Theme::GREY_900)
                    .bg(Theme::RED)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("  {}", issue.message),
            Style::default().fg(Theme::RED),
        )));
        lines.push(Line::from(vec![
            Span::styled(
                "  Solution: ",
                Style::default()
                    .fg(Theme::GREEN)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(issue.solution.clone(), Style::default().fg(Theme::GREEN)),
        ]));
        lines.push(Line::default());
    }
    lines
}

fn pattern_lines(patterns: &[ModernPattern]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for pattern in patterns {
        lines.push(Line::from(Span::styled(
            pattern.name.clone(),
            Style::default()
                .fg(Theme::CYAN)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("  {}", pattern.description),
            Theme::text_muted(),
        )));
        lines.extend(code_lines(&pattern.example));
        if !pattern.benefits.is_empty() {
            lines.push(Line::from(Span::styled("  Benefits:", Theme::title())));
            for benefit in &pattern.benefits {
                lines.push(Line::from(vec![
                    Span::styled(format!("  {} ", Theme::BULLET), Style::default().fg(Theme::CYAN)),
                    Span::styled(benefit.clone(), Theme::text()),
                ]));
            }
        }
        lines.push(Line::default());
    }
    lines
}

/// Example code, one styled line per source line
fn code_lines(text: &str) -> Vec<Line<'static>> {
    text.lines()
        .map(|l| {
            Line::from(vec![
                Span::styled("  │ ", Theme::text_dim()),
                Span::styled(l.to_string(), Theme::code()),
            ])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Severity, SuggestionKind};

    fn plain(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_suggestion_without_line_or_example() {
        let s = Suggestion::new(SuggestionKind::Optimization, Severity::Low, "Use readonly");
        let text = plain(&suggestion_lines(&[s]));
        assert!(text.contains(" low "));
        assert!(text.contains("[optimization]"));
        assert!(!text.contains("Line"));
        assert!(!text.contains('│'));
    }

    #[test]
    fn test_multiline_example_splits() {
        let lines = code_lines("a\nb\nc");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_max_scroll_counts_wrapped_rows() {
        let long = "x".repeat(200);
        let s = Suggestion::new(SuggestionKind::Warning, Severity::Medium, long);
        let analysis = Analysis::new("x", vec![s], Vec::new(), Vec::new());
        let lines = tab_lines(&analysis, ResultTab::Suggestions);
        let logical = lines.len();
        let body = Paragraph::new(lines).wrap(Wrap { trim: false });

        let narrow = Rect::new(0, 0, 20, 4);
        assert!(max_scroll(&body, narrow) >= logical);
        assert_eq!(
            max_scroll(&body, narrow),
            body.line_count(20) - narrow.height as usize
        );

        let tall = Rect::new(0, 0, 300, 50);
        assert_eq!(max_scroll(&body, tall), 0);
    }

    #[test]
    fn test_empty_pattern_tab_message() {
        let analysis = Analysis::new("x", Vec::new(), Vec::new(), Vec::new());
        let text = plain(&tab_lines(&analysis, ResultTab::Patterns));
        assert!(text.contains(NO_PATTERNS));
    }
}
