//! Event dispatch
//!
//! Maps each inbound event onto room and session operations and returns the
//! notifications it produced, already addressed to their recipients. Nothing
//! in here touches a socket, so the whole protocol can be driven from tests.

use crate::protocol::{ClientMessage, Outgoing, ServerMessage};
use crate::state::code::normalize_room_code;
use crate::state::{GameError, GameState};
use crate::types::{Role, Room, RoomCode, SessionId};
use std::time::Instant;

use super::{host, player};

/// Resolve a room the caller hosts, or drop the event without a reply.
/// Non-hosts never learn that the action exists.
macro_rules! hosted_room {
    ($game:expr, $session_id:expr, $room_code:expr, $action:expr) => {
        match $game.rooms.get_mut(&normalize_room_code(&$room_code)) {
            Some(room) if room.is_host($session_id) => room,
            Some(_) => {
                tracing::debug!(
                    "Ignoring event from {}: {}",
                    $session_id,
                    GameError::Unauthorized($action)
                );
                return Vec::new();
            }
            None => {
                tracing::debug!("Ignoring host event for unknown room {}", $room_code);
                return Vec::new();
            }
        }
    };
}

/// Handle one client event and return the resulting notifications
pub fn handle_message(
    game: &mut GameState,
    session_id: &SessionId,
    msg: ClientMessage,
) -> Vec<Outgoing> {
    match msg {
        ClientMessage::CreateGame => host::handle_create_game(game, session_id),

        // Player messages
        ClientMessage::JoinGame {
            room_code,
            player_name,
        } => player::handle_join_game(game, session_id, &room_code, &player_name),

        ClientMessage::SubmitWord {
            room_code, word, ..
        } => player::handle_submit_word(game, session_id, &room_code, &word),

        // Host-only commands (authorization checked before dispatch)
        ClientMessage::StartGame { room_code } => {
            let room = hosted_room!(game, session_id, room_code, "start the game");
            host::handle_start_game(room)
        }

        ClientMessage::RevealAnswers { room_code } => {
            let room = hosted_room!(game, session_id, room_code, "reveal answers");
            host::handle_reveal_answers(room)
        }

        ClientMessage::ResetGame { room_code } => {
            let room = hosted_room!(game, session_id, room_code, "reset the game");
            host::handle_reset_game(room)
        }
    }
}

/// Reconcile a connection that went away
pub fn handle_disconnect(game: &mut GameState, session_id: &SessionId) -> Vec<Outgoing> {
    let Some(entry) = game.sessions.unbind(session_id) else {
        tracing::debug!("Disconnect from unbound session {}", session_id);
        return Vec::new();
    };

    match entry.role {
        Role::Host => host::handle_host_left(game, &entry.room_code),
        Role::Player => player::handle_player_left(game, session_id, &entry.room_code),
    }
}

/// Close every room that has been idle longer than the configured timeout
pub fn handle_idle_expiry(game: &mut GameState, now: Instant) -> Vec<Outgoing> {
    let Some(timeout) = game.config.room_idle_timeout else {
        return Vec::new();
    };

    let mut outgoing = Vec::new();
    for code in game.rooms.idle_rooms(now, timeout) {
        if let Some(room) = remove_room(game, &code) {
            tracing::info!("Game {} expired after {:?} without activity", code, timeout);
            outgoing.extend(to_room(&room, ServerMessage::RoomExpired));
        }
    }
    outgoing
}

/// Delete a room and unbind everyone who was in it
pub(super) fn remove_room(game: &mut GameState, room_code: &RoomCode) -> Option<Room> {
    let room = game.rooms.delete(room_code)?;
    for member in room.members() {
        game.sessions.unbind(member);
    }
    Some(room)
}

pub(super) fn to_host(room: &Room, msg: ServerMessage) -> Outgoing {
    Outgoing::new(&room.host_session_id, msg)
}

/// Host and every player of the room
pub(super) fn to_room(room: &Room, msg: ServerMessage) -> Vec<Outgoing> {
    room.members()
        .map(|member| Outgoing::new(member, msg.clone()))
        .collect()
}
