//! Palette for ts-assistant
//! Greyscale chrome with a few accents for severity and status

use crate::analysis::{Severity, SuggestionKind};
use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    // ─────────────────────────────────────────────────────────────────────
    // Greyscale - from brightest to darkest
    // ─────────────────────────────────────────────────────────────────────

    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const GREY_50: Color = Color::Rgb(250, 250, 250);
    pub const GREY_100: Color = Color::Rgb(220, 220, 220);
    pub const GREY_200: Color = Color::Rgb(180, 180, 180);
    pub const GREY_300: Color = Color::Rgb(140, 140, 140);
    pub const GREY_400: Color = Color::Rgb(100, 100, 100);
    /// Borders, separators
    pub const GREY_500: Color = Color::Rgb(70, 70, 70);
    pub const GREY_700: Color = Color::Rgb(35, 35, 35);
    pub const GREY_800: Color = Color::Rgb(28, 28, 28);
    pub const GREY_900: Color = Color::Rgb(18, 18, 18);

    pub const BG: Color = Self::GREY_900;

    // ─────────────────────────────────────────────────────────────────────
    // Accents
    // ─────────────────────────────────────────────────────────────────────

    pub const GREEN: Color = Color::Rgb(100, 200, 100);
    pub const RED: Color = Color::Rgb(220, 100, 100);
    pub const YELLOW: Color = Color::Rgb(230, 200, 90);
    pub const BLUE: Color = Color::Rgb(110, 160, 230);
    pub const PURPLE: Color = Color::Rgb(170, 130, 230);
    pub const CYAN: Color = Color::Rgb(90, 200, 210);

    /// Spinner frames - braille pattern
    pub const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

    pub const BULLET: char = '•';
    pub const DOT_SEPARATOR: char = '·';

    pub fn text() -> Style {
        Style::default().fg(Self::GREY_100)
    }

    pub fn text_muted() -> Style {
        Style::default().fg(Self::GREY_300)
    }

    pub fn text_dim() -> Style {
        Style::default().fg(Self::GREY_400)
    }

    pub fn title() -> Style {
        Style::default()
            .fg(Self::GREY_50)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border() -> Style {
        Style::default().fg(Self::GREY_500)
    }

    /// Focused pane
    pub fn border_active() -> Style {
        Style::default().fg(Self::GREY_200)
    }

    /// Keybinding highlight
    pub fn key() -> Style {
        Style::default()
            .fg(Self::WHITE)
            .add_modifier(Modifier::BOLD)
    }

    /// Code snippets inside result cards
    pub fn code() -> Style {
        Style::default().fg(Self::PURPLE).bg(Self::GREY_800)
    }

    pub fn severity_color(severity: Severity) -> Color {
        match severity {
            Severity::High => Self::RED,
            Severity::Medium => Self::YELLOW,
            Severity::Low => Self::BLUE,
        }
    }

    /// Badge style: dark text on the severity color
    pub fn severity_badge(severity: Severity) -> Style {
        Style::default()
            .fg(Self::GREY_900)
            .bg(Self::severity_color(severity))
            .add_modifier(Modifier::BOLD)
    }

    pub fn kind_color(kind: SuggestionKind) -> Color {
        match kind {
            SuggestionKind::Error => Self::RED,
            SuggestionKind::Warning => Self::YELLOW,
            SuggestionKind::Improvement => Self::BLUE,
            SuggestionKind::Optimization => Self::PURPLE,
        }
    }

    pub fn spinner_frame(frame: usize) -> char {
        Self::SPINNER[frame % Self::SPINNER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_colors_are_distinct() {
        assert_ne!(
            Theme::severity_color(Severity::High),
            Theme::severity_color(Severity::Low)
        );
        assert_ne!(
            Theme::severity_color(Severity::Medium),
            Theme::severity_color(Severity::Low)
        );
    }

    #[test]
    fn test_spinner_frame_wraps() {
        assert_eq!(Theme::spinner_frame(0), Theme::spinner_frame(Theme::SPINNER.len()));
    }
}
