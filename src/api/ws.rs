//! WebSocket endpoint for real-time update notifications.
//!
//! The socket task registers an unbounded channel with the registry, then
//! pumps two streams: payloads queued by broadcasts go out to the client,
//! and anything the client sends is read and discarded. The connection is
//! push-only in practice. Either side closing or erroring ends the task,
//! which unregisters the listener on the way out.

use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::Response,
};
use futures_util::{SinkExt, StreamExt};

use crate::api::AppState;

pub async fn listen(State(state): State<AppState>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    let id = state.registry.register(tx);

    loop {
        tokio::select! {
            queued = rx.recv() => {
                match queued {
                    Some(payload) => {
                        if sender.send(Message::Text(payload.into())).await.is_err() {
                            tracing::debug!(listener = ?id, "send failed, client gone");
                            break;
                        }
                    }
                    // Registry dropped this channel after a failed broadcast.
                    None => break,
                }
            }
            incoming = receiver.next() => {
                match incoming {
                    // Client payloads are discarded.
                    Some(Ok(Message::Close(_))) | None => {
                        tracing::debug!(listener = ?id, "client closed connection");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::debug!(listener = ?id, error = %e, "socket error");
                        break;
                    }
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    state.registry.unregister(id);
}
