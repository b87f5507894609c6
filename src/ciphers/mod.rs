//! Cipher transforms.
//!
//! One module per cipher, each exposing `encode` and `decode` over an
//! already-validated key. Transforms are pure: output depends only on the
//! text and key, and the only side effect is reporting steps to the
//! [`Recorder`].

pub mod affine;
pub mod caesar;
pub mod hill;
pub mod playfair;
pub mod vigenere;

use serde::{Deserialize, Serialize};

use crate::alphabet::{self, Symbol};
use crate::trace::{Recorder, StepDetail, TraceStep};

/// Whether a transform encrypts or decrypts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Encode,
    Decode,
}

/// One letter substitution: the key rank used and the resulting rank.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Substitution {
    pub(crate) key_rank: u8,
    pub(crate) output_rank: u8,
}

/// Applies a per-letter substitution, keeping case and non-letters in place.
///
/// `substitute` receives the index of the letter among letters only (the
/// key cursor) and its rank. `describe` builds the step text from
/// `(input, input_rank, substitution, output)`; it is only called when the
/// recorder keeps steps. Non-letters are copied and produce no step.
pub(crate) fn substitute_letters<R, S, D>(
    text: &str,
    recorder: &mut R,
    mut substitute: S,
    describe: D,
) -> String
where
    R: Recorder,
    S: FnMut(usize, u8) -> Substitution,
    D: Fn(char, u8, Substitution, char) -> String,
{
    let mut output = String::with_capacity(text.len());
    let mut cursor = 0;
    for (symbol, original) in alphabet::normalize(text).into_iter().zip(text.chars()) {
        match symbol {
            Symbol::Letter { rank, .. } => {
                let sub = substitute(cursor, rank);
                let out = symbol.render(sub.output_rank);
                recorder.record(|| {
                    TraceStep::with_detail(
                        describe(original, rank, sub, out),
                        StepDetail::Letter {
                            input: original,
                            input_rank: rank,
                            key_rank: sub.key_rank,
                            output_rank: sub.output_rank,
                            output: out,
                        },
                    )
                });
                output.push(out);
                cursor += 1;
            }
            Symbol::Other(c) => output.push(c),
        }
    }
    output
}
