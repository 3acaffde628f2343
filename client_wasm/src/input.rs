//! Keyboard input handling

use game_core::MashKey;

/// Map a DOM key string to a mash key. Only the left/right arrows count;
/// everything else is ignored.
pub fn parse_mash_key(key: &str) -> Option<MashKey> {
    match key {
        "ArrowLeft" => Some(MashKey::Left),
        "ArrowRight" => Some(MashKey::Right),
        _ => None,
    }
}
