use crate::types::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "t",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    CreateGame,
    JoinGame {
        room_code: String,
        player_name: String,
    },
    SubmitWord {
        room_code: String,
        /// Informational only; the submitting session identifies the player
        #[serde(default)]
        player_name: Option<String>,
        word: String,
    },
    // Host-only messages
    StartGame {
        room_code: String,
    },
    RevealAnswers {
        room_code: String,
    },
    ResetGame {
        room_code: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(
    tag = "t",
    rename_all = "kebab-case",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    /// First message on every connection
    Welcome {
        protocol: String,
        session_id: SessionId,
        server_now: String,
    },
    GameCreated {
        room_code: RoomCode,
    },
    JoinSuccess {
        room_code: RoomCode,
        player_name: String,
    },
    JoinError {
        message: String,
    },
    /// Host only: roster after a join
    PlayerJoined {
        players: Vec<PlayerSummary>,
    },
    /// Host only: roster after a submission
    PlayerSubmitted {
        players: Vec<PlayerSummary>,
    },
    /// Host only: roster after a player disconnected
    PlayerLeft {
        player_name: String,
        players: Vec<PlayerSummary>,
    },
    WordSubmitted,
    SubmitError {
        message: String,
    },
    GamePhaseChange {
        phase: GamePhase,
    },
    /// Host only: shuffled words to read aloud
    GameStarted {
        words: Vec<String>,
    },
    AnswersRevealed {
        results: Vec<RevealedAnswer>,
    },
    GameReset,
    HostDisconnected,
    /// Room was closed by the idle reaper
    RoomExpired,
    Error {
        code: String,
        msg: String,
    },
}

/// Player entry in roster updates sent to the host
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerSummary {
    pub name: String,
    pub submitted: bool,
}

impl From<&Player> for PlayerSummary {
    fn from(p: &Player) -> Self {
        Self {
            name: p.name.clone(),
            submitted: p.submitted(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RevealedAnswer {
    pub name: String,
    pub word: String,
}

/// A server message addressed to a single connection
#[derive(Debug, Clone, PartialEq)]
pub struct Outgoing {
    pub to: SessionId,
    pub msg: ServerMessage,
}

impl Outgoing {
    pub fn new(to: &SessionId, msg: ServerMessage) -> Self {
        Self {
            to: to.clone(),
            msg,
        }
    }
}
