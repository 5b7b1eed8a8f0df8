//! ts-assistant UI - a single-screen review console
//!
//! Layout:
//! ╔══════════════════════════════════════════════════════════════╗
//! ║                 T S   A S S I S T A N T                      ║
//! ╠══════════════════════════════════════════════════════════════╣
//! ║  API key ••••••••      [ Demo Mode ]      model gpt-4        ║
//! ╠═══════════════════════════╦══════════════════════════════════╣
//! ║  CODE                     ║  Suggestions │ Type Issues │ ... ║
//! ║  interface User {         ║  [medium] improvement  Line 1    ║
//! ║    id: string;            ║  Consider using const ...        ║
//! ╠═══════════════════════════╩══════════════════════════════════╣
//! ║  ^R analyze  ^L live  F3 model  tab focus  ^C quit           ║
//! ╚══════════════════════════════════════════════════════════════╝

pub mod editor;
pub mod render;
pub mod theme;

pub use render::render;

use crate::analysis::{Analysis, ApiResponse};
use crate::config::Settings;
use crate::llm::{self, LlmConfig};
use editor::Editor;
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Snippet shown in the editor on startup
pub const SAMPLE_CODE: &str = r#"interface User {
  id: string;
  name: string;
  email: string;
  createdAt: Date;
}

async function fetchUser(id: string) {
  const response = await fetch(`/api/users/${id}`);
  return response.json();
}

const users: User[] = [];
users.push({ id: "1", name: "John", email: "john@example.com" });"#;

pub const BLANK_CODE_MESSAGE: &str = "Please enter some TypeScript code to analyze";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Failed to analyze code. Please try again.";

/// Pane that receives key input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    ApiKey,
    #[default]
    Editor,
    Results,
}

/// Tabs of the results pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultTab {
    #[default]
    Suggestions,
    TypeIssues,
    Patterns,
}

impl ResultTab {
    pub const ALL: [ResultTab; 3] = [
        ResultTab::Suggestions,
        ResultTab::TypeIssues,
        ResultTab::Patterns,
    ];

    pub fn index(&self) -> usize {
        match self {
            ResultTab::Suggestions => 0,
            ResultTab::TypeIssues => 1,
            ResultTab::Patterns => 2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ResultTab::Suggestions => "Suggestions",
            ResultTab::TypeIssues => "Type Issues",
            ResultTab::Patterns => "Modern Patterns",
        }
    }

    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Toast notification kind - affects duration and styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// Duration in seconds before toast expires
    pub fn duration_secs(&self) -> u64 {
        match self {
            ToastKind::Info => 3,
            ToastKind::Success => 4,
            ToastKind::Error => 10, // Errors stay longer
        }
    }
}

/// Toast notification
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
    pub kind: ToastKind,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
            kind,
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed().as_secs() >= self.kind.duration_secs()
    }
}

/// Which wrapper path a job takes
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisMode {
    Live(LlmConfig),
    Mock { delay: Duration },
}

/// A snapshot of what to analyze, produced when the user triggers analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisJob {
    pub code: String,
    pub mode: AnalysisMode,
}

impl AnalysisJob {
    pub fn is_live(&self) -> bool {
        matches!(self.mode, AnalysisMode::Live(_))
    }

    pub async fn run(self) -> ApiResponse<Analysis> {
        match self.mode {
            AnalysisMode::Live(config) => llm::analyze_live(&self.code, &config).await,
            AnalysisMode::Mock { delay } => llm::analyze_mock_after(&self.code, delay).await,
        }
    }
}

/// All state for one UI session
pub struct App {
    pub editor: Editor,
    pub analysis: Option<Analysis>,
    pub analyzing: bool,
    pub api_key: String,
    pub use_live: bool,
    pub settings: Settings,
    pub focus: Focus,
    pub active_tab: ResultTab,
    pub results_scroll: usize,
    /// Last scrollable row of the results body, recorded on render
    pub results_scroll_limit: Cell<usize>,
    pub toast: Option<Toast>,
    pub loading_frame: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(settings: Settings) -> Self {
        Self::with_code(settings, SAMPLE_CODE)
    }

    pub fn with_code(settings: Settings, code: &str) -> Self {
        Self {
            editor: Editor::new(code),
            analysis: None,
            analyzing: false,
            api_key: String::new(),
            use_live: false,
            settings,
            focus: Focus::default(),
            active_tab: ResultTab::default(),
            results_scroll: 0,
            results_scroll_limit: Cell::new(usize::MAX),
            toast: None,
            loading_frame: 0,
            should_quit: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  CREDENTIAL + MODE
    // ═══════════════════════════════════════════════════════════════════════

    pub fn has_api_key(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Live mode is only in effect while a credential is present
    pub fn is_live_active(&self) -> bool {
        self.use_live && self.has_api_key()
    }

    /// Flip live/demo mode. Does nothing without a credential.
    pub fn toggle_live(&mut self) -> bool {
        if !self.has_api_key() {
            return false;
        }
        self.use_live = !self.use_live;
        tracing::debug!(use_live = self.use_live, "mode toggled");
        true
    }

    pub fn push_api_key_char(&mut self, c: char) {
        if !c.is_control() {
            self.api_key.push(c);
        }
    }

    pub fn pop_api_key_char(&mut self) {
        self.api_key.pop();
    }

    pub fn cycle_model(&mut self) {
        self.settings.model = self.settings.model.next();
        self.show_toast(ToastKind::Info, format!("Model: {}", self.settings.model));
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  ANALYSIS LIFECYCLE
    // ═══════════════════════════════════════════════════════════════════════

    /// Validate input and mark analysis as running.
    ///
    /// Returns `None` when the code is blank (a validation toast is shown) or
    /// when an analysis is already in flight.
    pub fn begin_analysis(&mut self) -> Option<AnalysisJob> {
        if self.analyzing {
            return None;
        }
        if self.editor.is_blank() {
            self.show_toast(ToastKind::Error, BLANK_CODE_MESSAGE);
            return None;
        }

        let mode = if self.is_live_active() {
            AnalysisMode::Live(self.settings.llm_config(self.api_key.trim()))
        } else {
            AnalysisMode::Mock {
                delay: self.settings.mock_delay(),
            }
        };

        self.analyzing = true;
        self.loading_frame = 0;
        tracing::info!(live = matches!(mode, AnalysisMode::Live(_)), "starting code analysis");

        Some(AnalysisJob {
            code: self.editor.text(),
            mode,
        })
    }

    /// Store the outcome of a finished job
    pub fn finish_analysis(&mut self, result: ApiResponse<Analysis>, live: bool) {
        self.analyzing = false;
        match result {
            ApiResponse::Success { data, .. } => {
                self.analysis = Some(data);
                self.results_scroll = 0;
                let message = if live {
                    "Code analyzed successfully with OpenAI!"
                } else {
                    "Code analyzed with demo mode!"
                };
                self.show_toast(ToastKind::Success, message);
            }
            ApiResponse::Failure { error, .. } => {
                // Keep whatever analysis was shown before.
                self.show_toast(ToastKind::Error, format!("Analysis failed: {}", error.message));
            }
        }
    }

    /// The background task died without producing a result
    pub fn abort_analysis(&mut self, detail: &str) {
        tracing::error!(detail, "analysis error");
        self.analyzing = false;
        self.show_toast(ToastKind::Error, UNEXPECTED_FAILURE_MESSAGE);
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  NAVIGATION
    // ═══════════════════════════════════════════════════════════════════════

    pub fn next_focus(&mut self) {
        self.focus = match self.focus {
            Focus::ApiKey => Focus::Editor,
            Focus::Editor if self.analysis.is_some() => Focus::Results,
            Focus::Editor | Focus::Results => Focus::ApiKey,
        };
    }

    pub fn prev_focus(&mut self) {
        self.focus = match self.focus {
            Focus::ApiKey if self.analysis.is_some() => Focus::Results,
            Focus::ApiKey => Focus::Editor,
            Focus::Editor => Focus::ApiKey,
            Focus::Results => Focus::Editor,
        };
    }

    pub fn select_tab(&mut self, tab: ResultTab) {
        if self.active_tab != tab {
            self.active_tab = tab;
            self.results_scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.results_scroll = self
            .results_scroll
            .saturating_add(lines)
            .min(self.results_scroll_limit.get());
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.results_scroll = self.results_scroll.saturating_sub(lines);
    }

    // ═══════════════════════════════════════════════════════════════════════
    //  TOASTS + ANIMATION
    // ═══════════════════════════════════════════════════════════════════════

    pub fn show_toast(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.toast = Some(Toast::new(kind, message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Tick the loading animation
    pub fn tick_loading(&mut self) {
        if self.analyzing {
            self.loading_frame = self.loading_frame.wrapping_add(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{ApiError, Severity, Suggestion, SuggestionKind};
    use crate::llm::Model;

    fn app() -> App {
        App::new(Settings::default())
    }

    fn toast_text(app: &App) -> String {
        app.toast.as_ref().map(|t| t.message.clone()).unwrap_or_default()
    }

    fn sample_analysis(message: &str) -> Analysis {
        Analysis::new(
            "let a = 1;",
            vec![Suggestion::new(SuggestionKind::Warning, Severity::Low, message)],
            Vec::new(),
            Vec::new(),
        )
    }

    #[test]
    fn test_starts_with_sample_code_in_demo_mode() {
        let app = app();
        assert!(app.editor.text().contains("interface User"));
        assert!(app.analysis.is_none());
        assert!(!app.analyzing);
        assert!(!app.is_live_active());
    }

    #[test]
    fn test_blank_code_is_rejected_before_any_call() {
        let mut app = App::with_code(Settings::default(), "   \n\t  ");
        assert!(app.begin_analysis().is_none());
        assert!(!app.analyzing);
        assert_eq!(toast_text(&app), BLANK_CODE_MESSAGE);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);
    }

    #[test]
    fn test_toggle_live_requires_credential() {
        let mut app = app();
        assert!(!app.toggle_live());
        assert!(!app.use_live);

        for c in "sk-test".chars() {
            app.push_api_key_char(c);
        }
        assert!(app.toggle_live());
        assert!(app.is_live_active());
        assert!(app.toggle_live());
        assert!(!app.use_live);
    }

    #[test]
    fn test_whitespace_credential_does_not_count() {
        let mut app = app();
        app.push_api_key_char(' ');
        assert!(!app.toggle_live());
    }

    #[test]
    fn test_mock_job_without_live_mode() {
        let mut app = app();
        app.api_key = "sk-test".to_string();
        let job = app.begin_analysis().expect("job");
        assert!(!job.is_live());
        assert_eq!(job.code, SAMPLE_CODE);
        assert!(app.analyzing);
    }

    #[test]
    fn test_live_job_carries_settings_and_key() {
        let mut app = app();
        app.settings.model = Model::Gpt4Turbo;
        app.api_key = " sk-live ".to_string();
        app.toggle_live();

        let job = app.begin_analysis().expect("job");
        match job.mode {
            AnalysisMode::Live(config) => {
                assert_eq!(config.api_key, "sk-live");
                assert_eq!(config.model(), Model::Gpt4Turbo);
            }
            AnalysisMode::Mock { .. } => panic!("expected live job"),
        }
    }

    #[test]
    fn test_live_toggle_ignored_once_key_cleared() {
        let mut app = app();
        app.api_key = "k".to_string();
        app.toggle_live();
        app.pop_api_key_char();
        let job = app.begin_analysis().expect("job");
        assert!(!job.is_live());
    }

    #[test]
    fn test_no_second_job_while_analyzing() {
        let mut app = app();
        assert!(app.begin_analysis().is_some());
        assert!(app.begin_analysis().is_none());
    }

    #[test]
    fn test_success_stores_analysis() {
        let mut app = app();
        app.begin_analysis();
        app.finish_analysis(ApiResponse::success(sample_analysis("first")), false);
        assert!(!app.analyzing);
        assert_eq!(app.analysis.as_ref().unwrap().suggestions[0].message, "first");
        assert_eq!(toast_text(&app), "Code analyzed with demo mode!");
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_failure_keeps_previous_analysis() {
        let mut app = app();
        app.finish_analysis(ApiResponse::success(sample_analysis("kept")), true);
        assert_eq!(toast_text(&app), "Code analyzed successfully with OpenAI!");

        app.begin_analysis();
        app.finish_analysis(
            ApiResponse::failure(ApiError::analysis_failed("OpenAI API error: 500")),
            true,
        );
        assert!(!app.analyzing);
        assert_eq!(app.analysis.as_ref().unwrap().suggestions[0].message, "kept");
        assert_eq!(toast_text(&app), "Analysis failed: OpenAI API error: 500");
    }

    #[test]
    fn test_abort_clears_flag_with_generic_message() {
        let mut app = app();
        app.begin_analysis();
        app.abort_analysis("task panicked");
        assert!(!app.analyzing);
        assert_eq!(toast_text(&app), UNEXPECTED_FAILURE_MESSAGE);
    }

    #[test]
    fn test_results_focus_requires_analysis() {
        let mut app = app();
        app.next_focus();
        assert_eq!(app.focus, Focus::ApiKey);
        app.next_focus();
        assert_eq!(app.focus, Focus::Editor);

        app.analysis = Some(sample_analysis("x"));
        app.next_focus();
        assert_eq!(app.focus, Focus::Results);
        app.prev_focus();
        assert_eq!(app.focus, Focus::Editor);
    }

    #[test]
    fn test_scroll_down_stops_at_rendered_limit() {
        let mut app = app();
        app.results_scroll_limit.set(7);
        app.scroll_down(5);
        assert_eq!(app.results_scroll, 5);
        app.scroll_down(5);
        assert_eq!(app.results_scroll, 7);
        app.scroll_up(1);
        assert_eq!(app.results_scroll, 6);
    }

    #[test]
    fn test_tab_switch_resets_scroll() {
        let mut app = app();
        app.scroll_down(4);
        app.select_tab(ResultTab::Patterns);
        assert_eq!(app.results_scroll, 0);
        assert_eq!(ResultTab::Patterns.next(), ResultTab::Suggestions);
        assert_eq!(ResultTab::Suggestions.prev(), ResultTab::Patterns);
    }

    #[test]
    fn test_cycle_model_shows_toast() {
        let mut app = app();
        app.cycle_model();
        assert_eq!(app.settings.model, Model::Gpt4Turbo);
        assert!(toast_text(&app).contains("gpt-4-turbo"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_mock_job_runs_to_demo_analysis() {
        let mut app = app();
        let job = app.begin_analysis().unwrap();
        let live = job.is_live();
        let result = job.run().await;
        app.finish_analysis(result, live);
        let analysis = app.analysis.as_ref().unwrap();
        assert_eq!(analysis.suggestions.len(), 2);
        assert_eq!(analysis.code, SAMPLE_CODE);
    }
}
