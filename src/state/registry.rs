use super::code::generate_room_code;
use crate::types::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Owns every live room, keyed by room code
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a room hosted by `host_session_id` under a fresh code
    pub fn create_room(&mut self, host_session_id: SessionId) -> &Room {
        self.create_room_with(host_session_id, generate_room_code)
    }

    /// Same as `create_room` with a custom code source.
    /// Codes already in use are drawn again, never overwritten.
    pub fn create_room_with<F>(&mut self, host_session_id: SessionId, mut next_code: F) -> &Room
    where
        F: FnMut() -> RoomCode,
    {
        let code = loop {
            let code = next_code();
            if !self.rooms.contains_key(&code) {
                break code;
            }
            tracing::debug!("Room code collision on {}, drawing again", code);
        };

        self.rooms
            .entry(code.clone())
            .or_insert_with(|| Room::new(code, host_session_id))
    }

    /// Exact-match lookup; normalize user input first
    pub fn get(&self, code: &str) -> Option<&Room> {
        self.rooms.get(code)
    }

    pub fn get_mut(&mut self, code: &str) -> Option<&mut Room> {
        self.rooms.get_mut(code)
    }

    /// Remove a room. Deleting an unknown code is a no-op.
    pub fn delete(&mut self, code: &str) -> Option<Room> {
        self.rooms.remove(code)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    pub fn codes(&self) -> impl Iterator<Item = &RoomCode> {
        self.rooms.keys()
    }

    /// Codes of rooms without activity for longer than `timeout`
    pub fn idle_rooms(&self, now: Instant, timeout: Duration) -> Vec<RoomCode> {
        self.rooms
            .values()
            .filter(|r| now.saturating_duration_since(r.last_activity) > timeout)
            .map(|r| r.code.clone())
            .collect()
    }
}
