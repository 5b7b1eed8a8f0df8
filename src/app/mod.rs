pub mod background;
pub mod headless;
pub mod input;
pub mod messages;
pub mod runtime;

pub use messages::BackgroundMessage;
pub use runtime::run_tui;

use std::sync::mpsc;

pub struct RuntimeContext<'a> {
    pub tx: &'a mpsc::Sender<BackgroundMessage>,
}
