//! Vigenère cipher: a Caesar shift per letter, taken cyclically from the key.
//!
//! The key cursor only advances on letters, so punctuation and spacing do
//! not change which key letter lines up with which text letter. The key
//! stream is derived fresh on every call.

use super::{substitute_letters, Substitution};
use crate::alphabet::rank_to_char;
use crate::key::VigenereKey;
use crate::trace::Recorder;
use crate::utils::modular::reduce;

/// Encodes letter `i` as `(p + k_i) mod 26`.
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::vigenere;
/// use classicrypt::key::VigenereKey;
/// use classicrypt::trace::Discard;
///
/// let key = VigenereKey::new("LEMON").unwrap();
/// assert_eq!(vigenere::encode("Attack at dawn!", &key, &mut Discard), "Lxfopv ef rnhr!");
/// ```
pub fn encode<R: Recorder>(text: &str, key: &VigenereKey, recorder: &mut R) -> String {
    substitute_letters(
        text,
        recorder,
        |cursor, rank| {
            let k = key.rank_at(cursor);
            Substitution {
                key_rank: k,
                output_rank: reduce(rank as i64 + k as i64),
            }
        },
        |input, rank, sub, output| {
            format!(
                "Character '{}' ({}) + Key '{}' ({}) = ({} + {}) mod 26 = {} → '{}'",
                input,
                rank,
                rank_to_char(sub.key_rank),
                sub.key_rank,
                rank,
                sub.key_rank,
                sub.output_rank,
                output
            )
        },
    )
}

/// Decodes letter `i` as `(c - k_i) mod 26`.
pub fn decode<R: Recorder>(text: &str, key: &VigenereKey, recorder: &mut R) -> String {
    substitute_letters(
        text,
        recorder,
        |cursor, rank| {
            let k = key.rank_at(cursor);
            Substitution {
                key_rank: k,
                output_rank: reduce(rank as i64 - k as i64),
            }
        },
        |input, rank, sub, output| {
            format!(
                "Character '{}' ({}) - Key '{}' ({}) = ({} - {}) mod 26 = {} → '{}'",
                input,
                rank,
                rank_to_char(sub.key_rank),
                sub.key_rank,
                rank,
                sub.key_rank,
                sub.output_rank,
                output
            )
        },
    )
}
