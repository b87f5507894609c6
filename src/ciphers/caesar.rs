//! Caesar cipher: every letter shifted by a fixed amount.

use super::{substitute_letters, Substitution};
use crate::key::CaesarKey;
use crate::trace::Recorder;
use crate::utils::modular::reduce;

/// Shifts each letter forward by the key: `r → r + k mod 26`.
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::caesar;
/// use classicrypt::key::CaesarKey;
/// use classicrypt::trace::Discard;
///
/// assert_eq!(caesar::encode("Hello, World", &CaesarKey::new(3), &mut Discard), "Khoor, Zruog");
/// ```
pub fn encode<R: Recorder>(text: &str, key: &CaesarKey, recorder: &mut R) -> String {
    let k = key.shift();
    substitute_letters(
        text,
        recorder,
        |_, rank| Substitution {
            key_rank: k,
            output_rank: reduce(rank as i64 + k as i64),
        },
        |input, rank, sub, output| {
            format!(
                "'{}' ({}) + {} = {} mod 26 → '{}'",
                input, rank, sub.key_rank, sub.output_rank, output
            )
        },
    )
}

/// Shifts each letter back by the key: `r → r - k mod 26`.
pub fn decode<R: Recorder>(text: &str, key: &CaesarKey, recorder: &mut R) -> String {
    let k = key.shift();
    substitute_letters(
        text,
        recorder,
        |_, rank| Substitution {
            key_rank: k,
            output_rank: reduce(rank as i64 - k as i64),
        },
        |input, rank, sub, output| {
            format!(
                "'{}' ({}) - {} = {} mod 26 → '{}'",
                input, rank, sub.key_rank, sub.output_rank, output
            )
        },
    )
}
