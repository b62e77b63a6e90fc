use crate::protocol::AssistantStatus;
use serde::Serialize;

/// Last-seen conversation state, valid for the process lifetime
///
/// Owned by the dispatcher and mutated only by its handlers; read access
/// goes through [`StatusSnapshot`](crate::dispatch::StatusSnapshot).
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub status: AssistantStatus,
    pub last_message: String,
    pub last_user: String,
    /// Most recent volume, raw 0–255
    pub volume: f32,
    /// Most recent spectrum, full sequence (renderer consumption is capped,
    /// the state is not)
    pub spectrum: Vec<f32>,
}

/// Point-in-time view of the session state
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub status: AssistantStatus,
    pub last_message: String,
    pub last_user: String,
    pub volume: f32,
    pub spectrum_len: usize,
    pub uptime_secs: f64,
}
