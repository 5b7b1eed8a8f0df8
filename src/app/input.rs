//! Key and paste handling
//!
//! Global shortcuts are checked first, then the key goes to the focused pane.

use crate::app::background;
use crate::app::RuntimeContext;
use crate::ui::{App, Focus, ResultTab};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

const PAGE: usize = 10;

/// Main key event handler
pub fn handle_key_event(app: &mut App, key: KeyEvent, ctx: &RuntimeContext) -> Result<()> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
            app.should_quit = true;
            return Ok(());
        }
        KeyCode::Char('r') if ctrl => {
            trigger_analysis(app, ctx);
            return Ok(());
        }
        KeyCode::F(5) => {
            trigger_analysis(app, ctx);
            return Ok(());
        }
        KeyCode::Char('l') if ctrl => {
            app.toggle_live();
            return Ok(());
        }
        KeyCode::F(2) => {
            app.toggle_live();
            return Ok(());
        }
        KeyCode::F(3) => {
            app.cycle_model();
            return Ok(());
        }
        KeyCode::Tab => {
            app.next_focus();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.prev_focus();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::ApiKey => handle_api_key_input(app, key),
        Focus::Editor => handle_editor_input(app, key),
        Focus::Results => handle_results_input(app, key),
    }
    Ok(())
}

/// Bracketed paste goes to whichever text field has focus
pub fn handle_paste(app: &mut App, text: &str) {
    match app.focus {
        Focus::ApiKey => {
            for c in text.trim().chars() {
                app.push_api_key_char(c);
            }
        }
        Focus::Editor => app.editor.insert_str(text),
        Focus::Results => {}
    }
}

fn trigger_analysis(app: &mut App, ctx: &RuntimeContext) {
    if let Some(job) = app.begin_analysis() {
        background::spawn_analysis(job, ctx);
    }
}

fn handle_api_key_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_api_key_char(c)
        }
        KeyCode::Backspace => app.pop_api_key_char(),
        KeyCode::Enter | KeyCode::Down => app.focus = Focus::Editor,
        _ => {}
    }
}

fn handle_editor_input(app: &mut App, key: KeyEvent) {
    let editor = &mut app.editor;
    match key.code {
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            editor.insert_char(c)
        }
        KeyCode::Enter => editor.newline(),
        KeyCode::Backspace => editor.backspace(),
        KeyCode::Delete => editor.delete(),
        KeyCode::Left => editor.move_left(),
        KeyCode::Right => editor.move_right(),
        KeyCode::Up => editor.move_up(),
        KeyCode::Down => editor.move_down(),
        KeyCode::Home => editor.move_home(),
        KeyCode::End => editor.move_end(),
        _ => {}
    }
}

fn handle_results_input(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.select_tab(app.active_tab.prev()),
        KeyCode::Right | KeyCode::Char('l') => app.select_tab(app.active_tab.next()),
        KeyCode::Char('1') => app.select_tab(ResultTab::Suggestions),
        KeyCode::Char('2') => app.select_tab(ResultTab::TypeIssues),
        KeyCode::Char('3') => app.select_tab(ResultTab::Patterns),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::PageDown => app.scroll_down(PAGE),
        KeyCode::PageUp => app.scroll_up(PAGE),
        KeyCode::Home => app.results_scroll = 0,
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Analysis;
    use crate::config::Settings;
    use crate::ui::BLANK_CODE_MESSAGE;
    use std::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_blank_code_analyze_spawns_nothing() {
        let (tx, rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::with_code(Settings::default(), "  \n ");

        handle_key_event(&mut app, ctrl('r'), &ctx).unwrap();

        assert!(!app.analyzing);
        assert!(rx.try_recv().is_err());
        assert_eq!(app.toast.as_ref().unwrap().message, BLANK_CODE_MESSAGE);
    }

    #[test]
    fn test_toggle_live_shortcut_without_key_is_noop() {
        let (tx, _rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::new(Settings::default());

        handle_key_event(&mut app, ctrl('l'), &ctx).unwrap();
        assert!(!app.use_live);
        handle_key_event(&mut app, key(KeyCode::F(2)), &ctx).unwrap();
        assert!(!app.use_live);
    }

    #[test]
    fn test_typing_into_api_key_then_toggle() {
        let (tx, _rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::new(Settings::default());
        app.focus = Focus::ApiKey;

        for c in "sk-1x".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)), &ctx).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Backspace), &ctx).unwrap();
        assert_eq!(app.api_key, "sk-1");

        handle_key_event(&mut app, ctrl('l'), &ctx).unwrap();
        assert!(app.is_live_active());
    }

    #[test]
    fn test_editor_typing_edits_code() {
        let (tx, _rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::with_code(Settings::default(), "");

        for c in "let".chars() {
            handle_key_event(&mut app, key(KeyCode::Char(c)), &ctx).unwrap();
        }
        handle_key_event(&mut app, key(KeyCode::Enter), &ctx).unwrap();
        handle_paste(&mut app, "x = 1;");
        assert_eq!(app.editor.text(), "let\nx = 1;");
    }

    #[test]
    fn test_results_navigation() {
        let (tx, _rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::new(Settings::default());
        app.analysis = Some(Analysis::new("x", Vec::new(), Vec::new(), Vec::new()));
        app.focus = Focus::Results;

        handle_key_event(&mut app, key(KeyCode::Right), &ctx).unwrap();
        assert_eq!(app.active_tab, ResultTab::TypeIssues);
        handle_key_event(&mut app, key(KeyCode::Char('3')), &ctx).unwrap();
        assert_eq!(app.active_tab, ResultTab::Patterns);
        handle_key_event(&mut app, key(KeyCode::PageDown), &ctx).unwrap();
        assert_eq!(app.results_scroll, PAGE);
        handle_key_event(&mut app, key(KeyCode::Esc), &ctx).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits_from_editor() {
        let (tx, _rx) = mpsc::channel();
        let ctx = RuntimeContext { tx: &tx };
        let mut app = App::new(Settings::default());
        handle_key_event(&mut app, ctrl('c'), &ctx).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.editor.text(), crate::ui::SAMPLE_CODE);
    }

    #[test]
    fn test_paste_into_api_key_trims() {
        let mut app = App::new(Settings::default());
        app.focus = Focus::ApiKey;
        handle_paste(&mut app, "  sk-pasted\n");
        assert_eq!(app.api_key, "sk-pasted");
    }
}
