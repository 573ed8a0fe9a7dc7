pub mod code;
mod connections;
pub mod error;
pub mod registry;
mod room;
pub mod session;

use crate::protocol::{ClientMessage, ServerMessage};
use crate::types::*;
use crate::ws::handlers;
use registry::RoomRegistry;
use session::SessionDirectory;
use std::collections::HashMap;
use std::time::Instant;
use tokio::sync::{mpsc, Mutex, RwLock};

pub use error::GameError;

/// Everything the event handlers read and mutate
#[derive(Debug, Default)]
pub struct GameState {
    pub rooms: RoomRegistry,
    pub sessions: SessionDirectory,
    pub config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            rooms: RoomRegistry::new(),
            sessions: SessionDirectory::new(),
            config,
        }
    }
}

/// Shared application state
pub struct AppState {
    /// One lock for all rooms: events are applied strictly one at a time
    pub game: Mutex<GameState>,
    /// Outbound queue per live connection
    connections: RwLock<HashMap<SessionId, mpsc::UnboundedSender<ServerMessage>>>,
}

impl AppState {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Mutex::new(GameState::new(config)),
            connections: RwLock::new(HashMap::new()),
        }
    }

    /// Apply one client event and enqueue everything it produced.
    ///
    /// Messages are enqueued before the game lock is released, so clients see
    /// notifications in the same order the events were applied.
    pub async fn handle_client_message(&self, session_id: &SessionId, msg: ClientMessage) {
        let mut game = self.game.lock().await;
        let outgoing = handlers::handle_message(&mut game, session_id, msg);
        self.deliver(outgoing).await;
    }

    /// Reconcile a closed connection and forget its outbound queue
    pub async fn disconnect(&self, session_id: &SessionId) {
        {
            let mut game = self.game.lock().await;
            let outgoing = handlers::handle_disconnect(&mut game, session_id);
            self.deliver(outgoing).await;
        }
        self.drop_connection(session_id).await;
    }

    /// Close rooms idle past the configured timeout. Returns how many were closed.
    pub async fn expire_idle_rooms(&self, now: Instant) -> usize {
        let mut game = self.game.lock().await;
        let before = game.rooms.len();
        let outgoing = handlers::handle_idle_expiry(&mut game, now);
        self.deliver(outgoing).await;
        before - game.rooms.len()
    }

    pub async fn room_count(&self) -> usize {
        self.game.lock().await.rooms.len()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
