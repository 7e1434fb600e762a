//! Filler glyph alphabet for the reveal animation.

use rand::Rng;

/// The 62-symbol alphabet used for not-yet-revealed positions: A-Z a-z 0-9.
pub const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Pick a uniformly random glyph from [`ALPHABET`].
pub fn random_glyph<R: Rng>(rng: &mut R) -> char {
    let bytes = ALPHABET.as_bytes();
    bytes[rng.gen_range(0..bytes.len())] as char
}
