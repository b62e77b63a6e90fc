use super::state::{SessionState, StatusSnapshot};
use crate::protocol::{AiMessage, AssistantStatus, AudioData, StatusUpdate, UserMessage};
use crate::render::{AiVisualParams, ParticleEffect, Renderer, Speaker};
use anyhow::{Context, Result};
use chrono::Utc;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

/// Dispatcher tuning
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    /// Spectrum bands forwarded to the renderer (state keeps the full
    /// sequence regardless)
    pub spectrum_bands: usize,

    /// How long a particle burst lasts before reverting
    pub burst_revert: Duration,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            spectrum_bands: 32,
            burst_revert: Duration::from_millis(1000),
        }
    }
}

/// Routes inbound frames to handlers and owns the session state
///
/// `receive_text` never raises to its caller: a frame that cannot be parsed
/// or a handler that fails is logged and dropped, and the next frame is
/// processed normally. Unknown `type` and unknown `status` values are
/// ignored (logged at debug level, not errors).
pub struct Dispatcher {
    config: DispatcherConfig,
    renderer: Arc<dyn Renderer>,
    state: Mutex<SessionState>,
    /// Pending burst revert; aborted and replaced when new input arrives
    burst_revert_task: Mutex<Option<JoinHandle<()>>>,
    started_at: chrono::DateTime<Utc>,
}

impl Dispatcher {
    pub fn new(renderer: Arc<dyn Renderer>, config: DispatcherConfig) -> Self {
        info!(renderer = renderer.name(), "dispatcher ready");
        Self {
            config,
            renderer,
            state: Mutex::new(SessionState::default()),
            burst_revert_task: Mutex::new(None),
            started_at: Utc::now(),
        }
    }

    /// Handle one inbound text frame. Fail-open: never returns an error.
    pub async fn receive_text(&self, payload: &str) {
        let value: Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(e) => {
                warn!("dropping unparseable frame: {e}");
                return;
            }
        };

        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        let result = match kind.as_str() {
            "user_message" => self.handle_user_message(value).await,
            "ai_message" => self.handle_ai_message(value).await,
            "status_update" => self.handle_status_update(value).await,
            "audio_data" => self.handle_audio_data(value).await,
            "" => {
                debug!("frame without a type field, ignoring");
                Ok(())
            }
            other => {
                debug!(message_type = other, "unrecognized message type, ignoring");
                Ok(())
            }
        };

        if let Err(e) = result {
            warn!(message_type = %kind, "handler failed: {e:#}");
        }
    }

    /// Handle one inbound binary frame. The protocol carries no binary
    /// payloads today; only the length is logged.
    pub async fn receive_bytes(&self, payload: &[u8]) {
        debug!(len = payload.len(), "binary frame received");
    }

    pub async fn on_connection_open(&self, peer: &str) {
        info!(peer, "websocket connection established");
    }

    pub async fn on_connection_close(&self, peer: &str) {
        info!(peer, "websocket connection closed");
    }

    /// Pure read of the session state
    pub async fn snapshot(&self) -> StatusSnapshot {
        let state = self.state.lock().await;
        let uptime = Utc::now().signed_duration_since(self.started_at);
        StatusSnapshot {
            status: state.status,
            last_message: state.last_message.clone(),
            last_user: state.last_user.clone(),
            volume: state.volume,
            spectrum_len: state.spectrum.len(),
            uptime_secs: uptime.num_milliseconds() as f64 / 1000.0,
        }
    }

    async fn handle_user_message(&self, value: Value) -> Result<()> {
        let msg: UserMessage =
            serde_json::from_value(value).context("invalid user_message payload")?;

        {
            let mut state = self.state.lock().await;
            state.last_message = msg.text.clone();
            state.last_user = msg.user.clone();
        }

        info!(user = %msg.user, "user message: {}", msg.text);

        self.renderer.show_text(Speaker::User, &msg.text).await?;

        let count = (msg.text.chars().count() as u32)
            .saturating_mul(2)
            .min(1000);
        let burst = msg.definite || msg.paragraph;

        // New input supersedes any pending revert
        self.cancel_pending_revert().await;

        self.renderer
            .set_particle_effect(ParticleEffect { count, burst })
            .await?;

        if burst {
            self.schedule_burst_revert(count).await;
        }

        Ok(())
    }

    async fn handle_ai_message(&self, value: Value) -> Result<()> {
        let msg: AiMessage = serde_json::from_value(value).context("invalid ai_message payload")?;

        {
            let mut state = self.state.lock().await;
            state.last_message = msg.text.clone();
            state.last_user = msg.user.clone();
        }

        info!(interrupted = msg.is_interrupted, "ai message: {}", msg.text);

        self.renderer.show_text(Speaker::Ai, &msg.text).await?;

        let intensity = (msg.text.chars().count() as f32 / 50.0).min(1.0);
        self.renderer
            .set_ai_visual(AiVisualParams {
                intensity,
                interrupted: msg.is_interrupted,
            })
            .await?;

        Ok(())
    }

    async fn handle_status_update(&self, value: Value) -> Result<()> {
        let msg: StatusUpdate =
            serde_json::from_value(value).context("invalid status_update payload")?;

        match AssistantStatus::parse(&msg.status) {
            Some(status) => {
                {
                    let mut state = self.state.lock().await;
                    state.status = status;
                }
                info!(%status, "status update");
                self.renderer.set_status_preset(status).await?;
            }
            None => {
                debug!(status = %msg.status, "unrecognized status, keeping previous");
            }
        }

        Ok(())
    }

    async fn handle_audio_data(&self, value: Value) -> Result<()> {
        let msg: AudioData =
            serde_json::from_value(value).context("invalid audio_data payload")?;

        {
            let mut state = self.state.lock().await;
            state.volume = msg.volume;
            state.spectrum = msg.spectrum.clone();
        }

        self.renderer.set_volume(msg.volume / 255.0).await?;

        if !msg.spectrum.is_empty() {
            let bands: Vec<f32> = msg
                .spectrum
                .iter()
                .take(self.config.spectrum_bands)
                .map(|v| v / 255.0)
                .collect();
            self.renderer.set_spectrum(&bands).await?;
        }

        Ok(())
    }

    async fn cancel_pending_revert(&self) {
        let mut pending = self.burst_revert_task.lock().await;
        if let Some(task) = pending.take() {
            task.abort();
        }
    }

    /// Schedule the particle system back to its resting birth rate.
    /// Caller must have cancelled any previous revert first.
    async fn schedule_burst_revert(&self, count: u32) {
        let renderer = Arc::clone(&self.renderer);
        let delay = self.config.burst_revert;

        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Err(e) = renderer
                .set_particle_effect(ParticleEffect {
                    count,
                    burst: false,
                })
                .await
            {
                error!("burst revert failed: {e:#}");
            }
        });

        let mut pending = self.burst_revert_task.lock().await;
        *pending = Some(task);
    }
}
