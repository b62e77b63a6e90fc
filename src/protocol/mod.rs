//! Inbound wire format
//!
//! Text frames are JSON objects discriminated by a `type` field:
//! `user_message`, `ai_message`, `status_update`, `audio_data`.
//! Every payload field is optional; defaults match what the assistant
//! frontend omits (`""`, `false`, `0`, empty spectrum, `idle`).

pub mod messages;

pub use messages::{AiMessage, AssistantStatus, AudioData, StatusUpdate, UserMessage};
