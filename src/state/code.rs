use crate::types::RoomCode;
use rand::Rng;

/// Room codes are typed by hand, so letters only
const CODE_CHARS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const CODE_LENGTH: usize = 6;

/// Generate a random room code (6 uppercase letters).
///
/// Uniqueness is the caller's job, see `RoomRegistry::create_room`.
pub fn generate_room_code() -> RoomCode {
    generate_room_code_with(&mut rand::rng())
}

pub fn generate_room_code_with<R: Rng + ?Sized>(rng: &mut R) -> RoomCode {
    (0..CODE_LENGTH)
        .map(|_| CODE_CHARS[rng.random_range(0..CODE_CHARS.len())] as char)
        .collect()
}

/// Normalize user-typed room codes before lookup
pub fn normalize_room_code(input: &str) -> RoomCode {
    input.trim().to_ascii_uppercase()
}

pub fn is_valid_room_code(code: &str) -> bool {
    code.len() == CODE_LENGTH && code.bytes().all(|b| b.is_ascii_uppercase())
}
