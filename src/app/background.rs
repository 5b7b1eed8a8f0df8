//! Background task handling
//!
//! Channel sends use `let _ =`: the send only fails when the receiver was
//! dropped during shutdown, and then nobody is waiting for the result.

use crate::app::messages::BackgroundMessage;
use crate::app::RuntimeContext;
use crate::ui::{AnalysisJob, App};
use futures::FutureExt;
use std::future::Future;
use std::panic::AssertUnwindSafe;
use std::sync::mpsc;

/// Apply every pending background message to the app
pub fn drain_messages(app: &mut App, rx: &mpsc::Receiver<BackgroundMessage>) {
    while let Ok(msg) = rx.try_recv() {
        match msg {
            BackgroundMessage::AnalysisFinished { result, live } => {
                app.finish_analysis(result, live);
            }
            BackgroundMessage::Error(e) => {
                app.abort_analysis(&e);
            }
        }
    }
}

/// Run an analysis job off the UI thread
pub fn spawn_analysis(job: AnalysisJob, ctx: &RuntimeContext) {
    let tx = ctx.tx.clone();
    let tx_result = tx.clone();
    spawn_background(tx, "analysis", async move {
        let live = job.is_live();
        let result = job.run().await;
        let _ = tx_result.send(BackgroundMessage::AnalysisFinished { result, live });
    });
}

/// Spawn a task, reporting a panic as [`BackgroundMessage::Error`]
pub fn spawn_background<F>(tx: mpsc::Sender<BackgroundMessage>, task_name: &'static str, fut: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(panic) = AssertUnwindSafe(fut).catch_unwind().await {
            let detail = if let Some(s) = panic.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic.downcast_ref::<String>() {
                s.clone()
            } else {
                "unknown panic payload".to_string()
            };
            tracing::error!(task = task_name, %detail, "background task panicked");
            let _ = tx.send(BackgroundMessage::Error(format!(
                "Background task '{}' crashed unexpectedly: {}",
                task_name, detail
            )));
        }
    });
}
