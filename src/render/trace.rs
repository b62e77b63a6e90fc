use super::renderer::{AiVisualParams, ParticleEffect, Renderer, Speaker};
use crate::protocol::AssistantStatus;
use anyhow::Result;
use tracing::{debug, info};

/// Structured-logging renderer
///
/// Stands in for the real rendering host: every parameter write is emitted
/// as a trace event addressing the host operator it would target
/// (`message_display`, `user_particles`, `main_light`, ...). Useful on its
/// own for development and as the default sink when no host is attached.
#[derive(Debug, Default)]
pub struct TraceRenderer;

impl TraceRenderer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl Renderer for TraceRenderer {
    async fn show_text(&self, speaker: Speaker, text: &str) -> Result<()> {
        match speaker {
            Speaker::User => {
                info!(op = "message_display", font_color = "0.2 0.6 1.0", "User: {text}")
            }
            Speaker::Ai => {
                info!(op = "message_display", font_color = "0.2 1.0 0.3", "AI: {text}")
            }
        }
        Ok(())
    }

    async fn set_particle_effect(&self, effect: ParticleEffect) -> Result<()> {
        let birth_rate = if effect.burst { 100 } else { 10 };
        info!(
            op = "user_particles",
            count = effect.count,
            birth_rate,
            "particle effect"
        );
        Ok(())
    }

    async fn set_ai_visual(&self, params: AiVisualParams) -> Result<()> {
        let color = if params.interrupted {
            "1.0 0.3 0.3"
        } else {
            "0.3 1.0 0.3"
        };
        info!(
            op = "ai_visual",
            intensity = params.intensity,
            color,
            interrupted = params.interrupted,
            "ai halo"
        );
        Ok(())
    }

    async fn set_status_preset(&self, status: AssistantStatus) -> Result<()> {
        match status {
            AssistantStatus::Speaking => {
                info!(op = "speaking_animation", play = true, "speaking preset");
                info!(op = "main_light", dimmer = 0.8, "speaking preset");
            }
            AssistantStatus::Listening => {
                info!(op = "listening_pulse", amplitude = 0.5, "listening preset");
                info!(op = "main_light", color = "0.3 0.6 1.0", "listening preset");
            }
            AssistantStatus::Thinking => {
                info!(op = "thinking_rotation", speed = 2.0, "thinking preset");
                info!(op = "main_light", color = "1.0 0.7 0.2", "thinking preset");
            }
            AssistantStatus::Idle => {
                info!(op = "default_animation", play = true, "idle preset");
                info!(
                    op = "main_light",
                    color = "1.0 1.0 1.0",
                    dimmer = 0.6,
                    "idle preset"
                );
            }
        }
        Ok(())
    }

    async fn set_volume(&self, level: f32) -> Result<()> {
        debug!(op = "volume_meter", level, "volume");
        Ok(())
    }

    async fn set_spectrum(&self, bands: &[f32]) -> Result<()> {
        debug!(op = "spectrum_viz", bands = bands.len(), "spectrum");
        Ok(())
    }

    fn name(&self) -> &str {
        "trace"
    }
}
