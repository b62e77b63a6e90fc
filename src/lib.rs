pub mod config;
pub mod dispatch;
pub mod http;
pub mod protocol;
pub mod render;

pub use config::Config;
pub use dispatch::{Dispatcher, DispatcherConfig, SessionState, StatusSnapshot};
pub use http::{create_router, AppState};
pub use protocol::{AiMessage, AssistantStatus, AudioData, StatusUpdate, UserMessage};
pub use render::{AiVisualParams, ParticleEffect, Renderer, Speaker, TraceRenderer};
