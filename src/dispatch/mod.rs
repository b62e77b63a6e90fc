//! Message dispatch and session state
//!
//! This module provides the `Dispatcher` that:
//! - Parses inbound JSON frames and classifies them by `type`
//! - Routes each frame to its handler (fail-open on bad input)
//! - Maintains the last-seen session state behind a query surface
//! - Owns the cancellable particle-burst revert task

mod dispatcher;
mod state;

pub use dispatcher::{Dispatcher, DispatcherConfig};
pub use state::{SessionState, StatusSnapshot};
