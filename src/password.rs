//! Random password generation.
//!
//! A pure convenience utility: the vault never calls this itself, it
//! just hands front-ends a reasonable generator.

use rand::rngs::OsRng;
use rand::Rng;

/// Characters a generated password may contain.
///
/// Letters, digits, and a fixed set of symbols.  Every character class
/// is *available* but not guaranteed to appear in any given password.
pub const PASSWORD_ALPHABET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}";

/// Generate a random password of `length` characters.
///
/// Each character is drawn uniformly from `PASSWORD_ALPHABET` using
/// the OS RNG.
pub fn generate_password(length: usize) -> String {
    let mut rng = OsRng;
    (0..length)
        .map(|_| {
            let idx = rng.gen_range(0..PASSWORD_ALPHABET.len());
            PASSWORD_ALPHABET[idx] as char
        })
        .collect()
}
