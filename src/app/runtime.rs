//! TUI runtime
//!
//! The UI loop stays on the calling thread; analyses run on tokio tasks and
//! report back over an mpsc channel drained once per tick.

use crate::app::messages::BackgroundMessage;
use crate::app::{background, input, RuntimeContext};
use crate::ui::{self, App};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io;
use std::sync::mpsc;
use std::time::Duration;

/// Event poll timeout; also the spinner tick
const TICK: Duration = Duration::from_millis(50);

/// Run the TUI until the user quits
pub async fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, rx) = mpsc::channel::<BackgroundMessage>();

    let result = run_loop(&mut terminal, &mut app, rx, tx);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableBracketedPaste
    )?;
    terminal.show_cursor()?;

    if app.analyzing {
        tracing::info!("exiting with an analysis still in flight");
    }
    tracing::info!("ts-assistant exiting");

    result
}

/// Main event loop with background message handling
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    rx: mpsc::Receiver<BackgroundMessage>,
    tx: mpsc::Sender<BackgroundMessage>,
) -> Result<()> {
    let ctx = RuntimeContext { tx: &tx };

    loop {
        app.clear_expired_toast();
        app.tick_loading();

        background::drain_messages(app, &rx);

        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(TICK)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key_event(app, key, &ctx)?;
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
