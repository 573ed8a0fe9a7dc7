use crate::types::GamePhase;

/// Reasons an inbound event is refused.
///
/// The `Display` text is what players see in `join-error` / `submit-error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("Game not found!")]
    RoomNotFound,

    #[error("Game already started!")]
    GameInProgress,

    #[error("Name already taken!")]
    NameTaken,

    #[error("Please enter a name")]
    EmptyName,

    #[error("Name is too long (max {0} characters)")]
    NameTooLong(usize),

    #[error("Please enter a word")]
    EmptyWord,

    #[error("Word is too long (max {0} characters)")]
    WordTooLong(usize),

    #[error("You are not a player in this game!")]
    NotAPlayer,

    #[error("You are already in a game!")]
    AlreadyInGame,

    #[error("Only the host can {0}")]
    Unauthorized(&'static str),

    #[error("Cannot {action} during the {phase} phase")]
    WrongPhase {
        action: &'static str,
        phase: GamePhase,
    },
}
