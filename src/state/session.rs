use crate::types::*;
use std::collections::HashMap;

/// What a connection is, as far as rooms are concerned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEntry {
    pub role: Role,
    pub room_code: RoomCode,
    pub player_name: Option<String>,
}

/// Reverse index from connection to room role.
///
/// Only used to resolve disconnects in O(1); the Room stays the source of truth.
#[derive(Debug, Default)]
pub struct SessionDirectory {
    entries: HashMap<SessionId, SessionEntry>,
}

impl SessionDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind_host(&mut self, session_id: SessionId, room_code: RoomCode) {
        self.entries.insert(
            session_id,
            SessionEntry {
                role: Role::Host,
                room_code,
                player_name: None,
            },
        );
    }

    pub fn bind_player(&mut self, session_id: SessionId, room_code: RoomCode, player_name: String) {
        self.entries.insert(
            session_id,
            SessionEntry {
                role: Role::Player,
                room_code,
                player_name: Some(player_name),
            },
        );
    }

    pub fn get(&self, session_id: &SessionId) -> Option<&SessionEntry> {
        self.entries.get(session_id)
    }

    pub fn is_bound(&self, session_id: &SessionId) -> bool {
        self.entries.contains_key(session_id)
    }

    pub fn unbind(&mut self, session_id: &SessionId) -> Option<SessionEntry> {
        self.entries.remove(session_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
