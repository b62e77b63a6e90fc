use crate::protocol::AssistantStatus;
use anyhow::Result;

/// Who produced a transcript line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Ai,
}

/// Particle system parameters derived from user speech
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleEffect {
    /// Particle count, scales with utterance length (capped at 1000)
    pub count: u32,
    /// Elevated birth rate for a finished utterance; reverts after a delay
    pub burst: bool,
}

/// Halo parameters derived from assistant speech
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AiVisualParams {
    /// Effect intensity, 0.0–1.0
    pub intensity: f32,
    /// Switches the halo to the interrupted color variant
    pub interrupted: bool,
}

/// Visual parameter surface of the rendering host
///
/// One method per visual concept. Implementations own the mapping from
/// these parameters to whatever the host actually drives; the dispatcher
/// only depends on this trait. Methods return `Result` so a failing sink
/// can be logged at the dispatch boundary without stopping later messages.
#[async_trait::async_trait]
pub trait Renderer: Send + Sync {
    /// Display a transcript line, colored by speaker
    async fn show_text(&self, speaker: Speaker, text: &str) -> Result<()>;

    /// Drive the user-input particle system
    async fn set_particle_effect(&self, effect: ParticleEffect) -> Result<()>;

    /// Drive the assistant halo effect
    async fn set_ai_visual(&self, params: AiVisualParams) -> Result<()>;

    /// Apply the fixed visual preset for a conversation state
    async fn set_status_preset(&self, status: AssistantStatus) -> Result<()>;

    /// Update the volume meter (normalized 0.0–1.0)
    async fn set_volume(&self, level: f32) -> Result<()>;

    /// Update the spectrum display (normalized bands, already capped)
    async fn set_spectrum(&self, bands: &[f32]) -> Result<()>;

    /// Renderer name for logging
    fn name(&self) -> &str;
}
