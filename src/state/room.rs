use super::error::GameError;
use crate::protocol::{PlayerSummary, RevealedAnswer};
use crate::types::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Instant;

impl Room {
    /// New room in the Submission phase with no players
    pub fn new(code: RoomCode, host_session_id: SessionId) -> Self {
        Self {
            code,
            host_session_id,
            players: Vec::new(),
            phase: GamePhase::Submission,
            last_activity: Instant::now(),
        }
    }

    pub fn is_host(&self, session_id: &SessionId) -> bool {
        self.host_session_id == *session_id
    }

    pub fn player(&self, session_id: &SessionId) -> Option<&Player> {
        self.players.iter().find(|p| p.session_id == *session_id)
    }

    /// Host first, then players in join order
    pub fn members(&self) -> impl Iterator<Item = &SessionId> {
        std::iter::once(&self.host_session_id).chain(self.players.iter().map(|p| &p.session_id))
    }

    pub fn roster(&self) -> Vec<PlayerSummary> {
        self.players.iter().map(PlayerSummary::from).collect()
    }

    pub fn touch(&mut self) {
        self.last_activity = Instant::now();
    }

    fn name_taken(&self, name: &str) -> bool {
        let name = name.to_lowercase();
        self.players.iter().any(|p| p.name.to_lowercase() == name)
    }

    /// Add a player. Only allowed during Submission, names are case-insensitively unique.
    pub fn add_player(&mut self, session_id: SessionId, name: String) -> Result<&Player, GameError> {
        if self.phase != GamePhase::Submission {
            return Err(GameError::GameInProgress);
        }
        if self.name_taken(&name) {
            return Err(GameError::NameTaken);
        }

        self.players.push(Player::new(session_id, name));
        self.touch();
        Ok(&self.players[self.players.len() - 1])
    }

    /// Record a player's word. Re-submitting overwrites the previous word.
    pub fn submit_word(&mut self, session_id: &SessionId, word: String) -> Result<(), GameError> {
        if self.phase != GamePhase::Submission {
            return Err(GameError::GameInProgress);
        }
        let player = self
            .players
            .iter_mut()
            .find(|p| p.session_id == *session_id)
            .ok_or(GameError::NotAPlayer)?;

        player.word = Some(word);
        self.touch();
        Ok(())
    }

    /// Submission -> Playing. Returns the submitted words in random order.
    pub fn start(&mut self) -> Result<Vec<String>, GameError> {
        self.start_with(&mut rand::rng())
    }

    pub fn start_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<String>, GameError> {
        if self.phase != GamePhase::Submission {
            return Err(GameError::WrongPhase {
                action: "start the game",
                phase: self.phase,
            });
        }

        let mut words: Vec<String> = self.players.iter().filter_map(|p| p.word.clone()).collect();
        // Fisher-Yates, every permutation equally likely
        words.shuffle(rng);

        self.phase = GamePhase::Playing;
        self.touch();
        Ok(words)
    }

    /// Playing -> Reveal. Results follow join order, not the shuffled play order.
    pub fn reveal(&mut self) -> Result<Vec<RevealedAnswer>, GameError> {
        if self.phase != GamePhase::Playing {
            return Err(GameError::WrongPhase {
                action: "reveal answers",
                phase: self.phase,
            });
        }

        let results = self
            .players
            .iter()
            .filter_map(|p| {
                p.word.as_ref().map(|word| RevealedAnswer {
                    name: p.name.clone(),
                    word: word.clone(),
                })
            })
            .collect();

        self.phase = GamePhase::Reveal;
        self.touch();
        Ok(results)
    }

    /// Back to Submission from any phase. Players stay, their words are cleared.
    pub fn reset(&mut self) {
        for player in &mut self.players {
            player.word = None;
        }
        self.phase = GamePhase::Submission;
        self.touch();
    }

    /// Remove a player entirely (not just mark inactive)
    pub fn remove_player(&mut self, session_id: &SessionId) -> Option<Player> {
        let index = self.players.iter().position(|p| p.session_id == *session_id)?;
        self.touch();
        Some(self.players.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn room_with_players(names: &[&str]) -> Room {
        let mut room = Room::new("ABCDEF".to_string(), "host".to_string());
        for name in names {
            room.add_player(format!("s-{}", name), name.to_string())
                .unwrap();
        }
        room
    }

    #[test]
    fn test_new_room_starts_in_submission() {
        let room = Room::new("ABCDEF".to_string(), "host".to_string());
        assert_eq!(room.phase, GamePhase::Submission);
        assert!(room.players.is_empty());
        assert!(room.is_host(&"host".to_string()));
        assert!(!room.is_host(&"other".to_string()));
    }

    #[test]
    fn test_names_are_case_insensitively_unique() {
        let mut room = room_with_players(&["Alice"]);
        let result = room.add_player("s2".to_string(), "alice".to_string());
        assert_eq!(result.unwrap_err(), GameError::NameTaken);
        assert_eq!(room.players.len(), 1);
    }

    #[test]
    fn test_join_rejected_outside_submission() {
        let mut room = room_with_players(&["Alice"]);
        room.submit_word(&"s-Alice".to_string(), "cat".to_string())
            .unwrap();
        room.start().unwrap();

        let result = room.add_player("s2".to_string(), "Bob".to_string());
        assert_eq!(result.unwrap_err(), GameError::GameInProgress);

        room.reveal().unwrap();
        let result = room.add_player("s2".to_string(), "Bob".to_string());
        assert_eq!(result.unwrap_err(), GameError::GameInProgress);
        assert_eq!(room.players.len(), 1);
    }

    #[test]
    fn test_submit_requires_membership() {
        let mut room = room_with_players(&["Alice"]);
        let result = room.submit_word(&"stranger".to_string(), "cat".to_string());
        assert_eq!(result.unwrap_err(), GameError::NotAPlayer);
        assert!(!room.players[0].submitted());
    }

    #[test]
    fn test_resubmission_overwrites() {
        let mut room = room_with_players(&["Alice"]);
        let alice = "s-Alice".to_string();
        room.submit_word(&alice, "cat".to_string()).unwrap();
        room.submit_word(&alice, "dog".to_string()).unwrap();
        assert_eq!(room.player(&alice).unwrap().word.as_deref(), Some("dog"));
    }

    #[test]
    fn test_start_shuffles_only_submitted_words() {
        let mut room = room_with_players(&["Alice", "Bob", "Carol"]);
        room.submit_word(&"s-Alice".to_string(), "cat".to_string())
            .unwrap();
        room.submit_word(&"s-Carol".to_string(), "dog".to_string())
            .unwrap();

        let mut words = room.start().unwrap();
        assert_eq!(room.phase, GamePhase::Playing);
        assert_eq!(room.players.len(), 3);

        words.sort();
        assert_eq!(words, vec!["cat".to_string(), "dog".to_string()]);
    }

    #[test]
    fn test_shuffle_produces_every_ordering() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut orders = std::collections::HashSet::new();
        for _ in 0..200 {
            let mut room = room_with_players(&["A", "B", "C"]);
            for name in ["A", "B", "C"] {
                room.submit_word(&format!("s-{}", name), name.to_lowercase())
                    .unwrap();
            }
            orders.insert(room.start_with(&mut rng).unwrap());
        }
        assert_eq!(orders.len(), 6);
    }

    #[test]
    fn test_start_only_from_submission() {
        let mut room = room_with_players(&["Alice"]);
        room.start().unwrap();
        assert!(matches!(
            room.start(),
            Err(GameError::WrongPhase {
                phase: GamePhase::Playing,
                ..
            })
        ));
    }

    #[test]
    fn test_reveal_uses_join_order() {
        let mut room = room_with_players(&["Alice", "Bob", "Carol"]);
        room.submit_word(&"s-Carol".to_string(), "dog".to_string())
            .unwrap();
        room.submit_word(&"s-Alice".to_string(), "cat".to_string())
            .unwrap();
        room.start().unwrap();

        let results = room.reveal().unwrap();
        assert_eq!(room.phase, GamePhase::Reveal);
        assert_eq!(
            results,
            vec![
                RevealedAnswer {
                    name: "Alice".to_string(),
                    word: "cat".to_string()
                },
                RevealedAnswer {
                    name: "Carol".to_string(),
                    word: "dog".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_reveal_requires_playing() {
        let mut room = room_with_players(&["Alice"]);
        assert!(room.reveal().is_err());
        assert_eq!(room.phase, GamePhase::Submission);
    }

    #[test]
    fn test_reset_keeps_players_and_clears_words() {
        let mut room = room_with_players(&["Alice", "Bob"]);
        room.submit_word(&"s-Alice".to_string(), "cat".to_string())
            .unwrap();
        room.start().unwrap();
        room.reveal().unwrap();

        room.reset();
        assert_eq!(room.phase, GamePhase::Submission);
        let names: Vec<_> = room.players.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "Bob"]);
        assert!(room.players.iter().all(|p| !p.submitted() && p.word.is_none()));
    }

    #[test]
    fn test_remove_player() {
        let mut room = room_with_players(&["Alice", "Bob"]);
        let removed = room.remove_player(&"s-Alice".to_string()).unwrap();
        assert_eq!(removed.name, "Alice");
        assert_eq!(room.roster().len(), 1);
        assert!(room.remove_player(&"s-Alice".to_string()).is_none());
    }

    #[test]
    fn test_members_lists_host_first() {
        let room = room_with_players(&["Alice", "Bob"]);
        let members: Vec<_> = room.members().cloned().collect();
        assert_eq!(members, vec!["host", "s-Alice", "s-Bob"]);
    }
}
