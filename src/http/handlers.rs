use super::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use tracing::warn;

/// GET /ws
/// Upgrade to WebSocket and feed inbound frames to the dispatcher
pub async fn ws_upgrade(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// One connection's receive loop. Frames are handled sequentially, so the
/// dispatcher sees this connection's messages in arrival order.
async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let peer = uuid::Uuid::new_v4().to_string();
    let dispatcher = state.dispatcher;

    dispatcher.on_connection_open(&peer).await;

    while let Some(frame) = socket.recv().await {
        match frame {
            Ok(Message::Text(text)) => dispatcher.receive_text(&text).await,
            Ok(Message::Binary(bytes)) => dispatcher.receive_bytes(&bytes).await,
            Ok(Message::Close(_)) => break,
            // Ping/pong are answered by axum itself
            Ok(_) => {}
            Err(e) => {
                warn!(peer = %peer, "websocket receive error: {e}");
                break;
            }
        }
    }

    dispatcher.on_connection_close(&peer).await;
}

/// GET /status
/// Current session state snapshot
pub async fn bridge_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dispatcher.snapshot().await)
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
