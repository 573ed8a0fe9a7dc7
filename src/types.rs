use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// Opaque ID types for type safety
pub type RoomCode = String;
pub type SessionId = String;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    Submission,
    Playing,
    Reveal,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GamePhase::Submission => "submission",
            GamePhase::Playing => "playing",
            GamePhase::Reveal => "reveal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Host,
    Player,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub max_name_chars: usize,
    pub max_word_chars: usize,
    /// Rooms idle for longer than this are expired (None = never)
    pub room_idle_timeout: Option<Duration>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_name_chars: 24,
            max_word_chars: 64,
            room_idle_timeout: Some(Duration::from_secs(4 * 60 * 60)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub session_id: SessionId,
    pub name: String,
    pub word: Option<String>,
}

impl Player {
    pub fn new(session_id: SessionId, name: String) -> Self {
        Self {
            session_id,
            name,
            word: None,
        }
    }

    pub fn submitted(&self) -> bool {
        self.word.is_some()
    }
}

#[derive(Debug, Clone)]
pub struct Room {
    pub code: RoomCode,
    pub host_session_id: SessionId,
    /// Join order is preserved
    pub players: Vec<Player>,
    pub phase: GamePhase,
    pub last_activity: Instant,
}
