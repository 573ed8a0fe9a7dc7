//! Host command handlers
//!
//! `start`, `reveal` and `reset` require the caller to host the room.
//! Authorization is checked in the main dispatch layer before calling these.

use crate::protocol::{Outgoing, ServerMessage};
use crate::state::GameState;
use crate::types::{Room, RoomCode, SessionId};

use super::handlers::{handle_disconnect, remove_room, to_host, to_room};

pub fn handle_create_game(game: &mut GameState, session_id: &SessionId) -> Vec<Outgoing> {
    let mut outgoing = Vec::new();

    // One role per connection: leave whatever this session was doing before
    if game.sessions.is_bound(session_id) {
        tracing::info!("{} is creating a new game, leaving its previous one", session_id);
        outgoing.extend(handle_disconnect(game, session_id));
    }

    let room_code = game.rooms.create_room(session_id.clone()).code.clone();
    game.sessions.bind_host(session_id.clone(), room_code.clone());
    tracing::info!("Game created: {}", room_code);

    outgoing.push(Outgoing::new(
        session_id,
        ServerMessage::GameCreated { room_code },
    ));
    outgoing
}

pub fn handle_start_game(room: &mut Room) -> Vec<Outgoing> {
    match room.start() {
        Ok(words) => {
            tracing::info!("Game {} started with {} words", room.code, words.len());
            let mut outgoing = vec![to_host(room, ServerMessage::GameStarted { words })];
            outgoing.extend(to_room(
                room,
                ServerMessage::GamePhaseChange { phase: room.phase },
            ));
            outgoing
        }
        Err(e) => {
            tracing::debug!("Ignoring start-game for {}: {}", room.code, e);
            Vec::new()
        }
    }
}

pub fn handle_reveal_answers(room: &mut Room) -> Vec<Outgoing> {
    match room.reveal() {
        Ok(results) => {
            tracing::info!("Game {} revealed answers", room.code);
            to_room(room, ServerMessage::AnswersRevealed { results })
        }
        Err(e) => {
            tracing::debug!("Ignoring reveal-answers for {}: {}", room.code, e);
            Vec::new()
        }
    }
}

pub fn handle_reset_game(room: &mut Room) -> Vec<Outgoing> {
    room.reset();
    tracing::info!("Game {} reset", room.code);
    to_room(room, ServerMessage::GameReset)
}

/// The host's connection is gone: the room goes with it
pub fn handle_host_left(game: &mut GameState, room_code: &RoomCode) -> Vec<Outgoing> {
    let Some(room) = remove_room(game, room_code) else {
        return Vec::new();
    };
    tracing::info!("Game {} deleted - host disconnected", room_code);

    room.players
        .iter()
        .map(|p| Outgoing::new(&p.session_id, ServerMessage::HostDisconnected))
        .collect()
}
