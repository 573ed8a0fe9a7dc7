//! Player message handlers
//!
//! Joining a room, submitting a word and leaving.

use crate::protocol::{Outgoing, ServerMessage};
use crate::state::code::normalize_room_code;
use crate::state::{GameError, GameState};
use crate::types::{RoomCode, SessionId};

use super::handlers::to_host;

pub fn handle_join_game(
    game: &mut GameState,
    session_id: &SessionId,
    room_code: &str,
    player_name: &str,
) -> Vec<Outgoing> {
    tracing::info!("Join request for {} as {:?}", room_code, player_name);
    join_game(game, session_id, room_code, player_name).unwrap_or_else(|e| {
        tracing::info!("Join rejected for {}: {}", session_id, e);
        vec![Outgoing::new(
            session_id,
            ServerMessage::JoinError {
                message: e.to_string(),
            },
        )]
    })
}

fn join_game(
    game: &mut GameState,
    session_id: &SessionId,
    room_code: &str,
    player_name: &str,
) -> Result<Vec<Outgoing>, GameError> {
    if game.sessions.is_bound(session_id) {
        return Err(GameError::AlreadyInGame);
    }
    let name = validate_name(player_name, game.config.max_name_chars)?;

    let room_code = normalize_room_code(room_code);
    let room = game
        .rooms
        .get_mut(&room_code)
        .ok_or(GameError::RoomNotFound)?;
    room.add_player(session_id.clone(), name.clone())?;
    game.sessions
        .bind_player(session_id.clone(), room_code.clone(), name.clone());

    tracing::info!("{} joined game {}", name, room_code);
    Ok(vec![
        Outgoing::new(
            session_id,
            ServerMessage::JoinSuccess {
                room_code,
                player_name: name,
            },
        ),
        to_host(
            room,
            ServerMessage::PlayerJoined {
                players: room.roster(),
            },
        ),
    ])
}

pub fn handle_submit_word(
    game: &mut GameState,
    session_id: &SessionId,
    room_code: &str,
    word: &str,
) -> Vec<Outgoing> {
    submit_word(game, session_id, room_code, word).unwrap_or_else(|e| {
        tracing::info!("Submission rejected for {}: {}", session_id, e);
        vec![Outgoing::new(
            session_id,
            ServerMessage::SubmitError {
                message: e.to_string(),
            },
        )]
    })
}

fn submit_word(
    game: &mut GameState,
    session_id: &SessionId,
    room_code: &str,
    word: &str,
) -> Result<Vec<Outgoing>, GameError> {
    let max_word_chars = game.config.max_word_chars;
    let room_code = normalize_room_code(room_code);
    let room = game
        .rooms
        .get_mut(&room_code)
        .ok_or(GameError::RoomNotFound)?;

    let name = room
        .player(session_id)
        .map(|p| p.name.clone())
        .ok_or(GameError::NotAPlayer)?;
    let word = validate_word(word, max_word_chars)?;
    room.submit_word(session_id, word)?;

    tracing::info!("{} submitted word in game {}", name, room_code);
    Ok(vec![
        Outgoing::new(session_id, ServerMessage::WordSubmitted),
        to_host(
            room,
            ServerMessage::PlayerSubmitted {
                players: room.roster(),
            },
        ),
    ])
}

/// A player's connection is gone: drop them from the roster and tell the host
pub fn handle_player_left(
    game: &mut GameState,
    session_id: &SessionId,
    room_code: &RoomCode,
) -> Vec<Outgoing> {
    let Some(room) = game.rooms.get_mut(room_code) else {
        return Vec::new();
    };
    let Some(player) = room.remove_player(session_id) else {
        return Vec::new();
    };
    tracing::info!("{} left game {}", player.name, room_code);

    vec![to_host(
        room,
        ServerMessage::PlayerLeft {
            player_name: player.name,
            players: room.roster(),
        },
    )]
}

fn validate_name(input: &str, max_chars: usize) -> Result<String, GameError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(GameError::EmptyName);
    }
    if name.chars().count() > max_chars {
        return Err(GameError::NameTooLong(max_chars));
    }
    Ok(name.to_string())
}

fn validate_word(input: &str, max_chars: usize) -> Result<String, GameError> {
    let word = input.trim();
    if word.is_empty() {
        return Err(GameError::EmptyWord);
    }
    if word.chars().count() > max_chars {
        return Err(GameError::WordTooLong(max_chars));
    }
    Ok(word.to_string())
}
