use super::AppState;
use crate::protocol::{Outgoing, ServerMessage};
use crate::types::SessionId;
use tokio::sync::mpsc;

impl AppState {
    /// Register a new connection. The receiver feeds that connection's socket.
    pub async fn connect(&self) -> (SessionId, mpsc::UnboundedReceiver<ServerMessage>) {
        let session_id = ulid::Ulid::new().to_string();
        let (tx, rx) = mpsc::unbounded_channel();

        self.connections
            .write()
            .await
            .insert(session_id.clone(), tx);

        tracing::debug!("Connection registered: {}", session_id);
        (session_id, rx)
    }

    /// Fire-and-forget delivery; connections that went away are skipped
    pub(super) async fn deliver(&self, outgoing: Vec<Outgoing>) {
        if outgoing.is_empty() {
            return;
        }

        let connections = self.connections.read().await;
        for Outgoing { to, msg } in outgoing {
            match connections.get(&to) {
                Some(tx) => {
                    if tx.send(msg).is_err() {
                        tracing::debug!("Receiver for {} already closed", to);
                    }
                }
                None => tracing::debug!("No connection for {}, dropping message", to),
            }
        }
    }

    pub(super) async fn drop_connection(&self, session_id: &SessionId) {
        self.connections.write().await.remove(session_id);
        tracing::debug!("Connection dropped: {}", session_id);
    }

    pub async fn connection_count(&self) -> usize {
        self.connections.read().await.len()
    }
}
