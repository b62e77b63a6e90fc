use serde::{Deserialize, Serialize};
use std::fmt;

/// Conversation state reported by the assistant frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssistantStatus {
    Idle,
    Listening,
    Thinking,
    Speaking,
}

impl AssistantStatus {
    /// Parse a wire status string. Returns `None` for anything outside the
    /// four known states so callers can keep the previous status.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "idle" => Some(Self::Idle),
            "listening" => Some(Self::Listening),
            "thinking" => Some(Self::Thinking),
            "speaking" => Some(Self::Speaking),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Listening => "listening",
            Self::Thinking => "thinking",
            Self::Speaking => "speaking",
        }
    }
}

impl Default for AssistantStatus {
    fn default() -> Self {
        Self::Idle
    }
}

impl fmt::Display for AssistantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transcribed user speech (`"type": "user_message"`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserMessage {
    pub text: String,
    pub user: String,
    /// Segment is a finalized utterance (not a streaming partial)
    pub definite: bool,
    /// Segment closes a paragraph
    pub paragraph: bool,
}

/// Assistant speech (`"type": "ai_message"`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AiMessage {
    pub text: String,
    pub user: String,
    pub definite: bool,
    pub paragraph: bool,
    /// The user cut the assistant off mid-utterance
    #[serde(rename = "isInterrupted")]
    pub is_interrupted: bool,
}

/// Conversation state transition (`"type": "status_update"`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusUpdate {
    /// Raw status string; a missing field means `idle`
    pub status: String,
}

impl Default for StatusUpdate {
    fn default() -> Self {
        Self {
            status: AssistantStatus::Idle.as_str().to_string(),
        }
    }
}

/// Live audio levels from the frontend (`"type": "audio_data"`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioData {
    /// Overall volume, 0–255
    pub volume: f32,
    /// Per-band spectrum magnitudes, each 0–255
    pub spectrum: Vec<f32>,
}
