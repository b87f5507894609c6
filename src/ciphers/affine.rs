//! Affine cipher: `r → a·r + b mod 26`.

use super::{substitute_letters, Substitution};
use crate::key::AffineKey;
use crate::trace::Recorder;
use crate::utils::modular::reduce;

/// Encodes each letter as `(a·r + b) mod 26`.
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::affine;
/// use classicrypt::key::AffineKey;
/// use classicrypt::trace::Discard;
///
/// let key = AffineKey::new(5, 8).unwrap();
/// assert_eq!(affine::encode("AFFINE cipher", &key, &mut Discard), "IHHWVC swfrcp");
/// ```
pub fn encode<R: Recorder>(text: &str, key: &AffineKey, recorder: &mut R) -> String {
    let (a, b) = (key.a() as i64, key.b());
    substitute_letters(
        text,
        recorder,
        |_, rank| Substitution {
            key_rank: b,
            output_rank: reduce(a * rank as i64 + b as i64),
        },
        |input, rank, sub, output| {
            format!(
                "'{}' ({}) → ({} × {} + {}) mod 26 = {} → '{}'",
                input, rank, a, rank, sub.key_rank, sub.output_rank, output
            )
        },
    )
}

/// Decodes each letter as `a⁻¹·(r - b) mod 26`.
pub fn decode<R: Recorder>(text: &str, key: &AffineKey, recorder: &mut R) -> String {
    let (a_inv, b) = (key.a_inverse() as i64, key.b());
    substitute_letters(
        text,
        recorder,
        |_, rank| Substitution {
            key_rank: b,
            output_rank: reduce(a_inv * (rank as i64 - b as i64)),
        },
        |input, rank, sub, output| {
            format!(
                "'{}' ({}) → {} × ({} - {}) mod 26 = {} → '{}'",
                input, rank, a_inv, rank, sub.key_rank, sub.output_rank, output
            )
        },
    )
}
