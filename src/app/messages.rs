use crate::analysis::{Analysis, ApiResponse};

/// Messages from background tasks to the main UI thread
pub enum BackgroundMessage {
    /// The wrapper returned, successfully or not
    AnalysisFinished {
        result: ApiResponse<Analysis>,
        live: bool,
    },
    /// A background task crashed before producing a result
    Error(String),
}
