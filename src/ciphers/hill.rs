//! Hill cipher: blocks of N letters multiplied by an N×N key matrix mod 26.

use crate::alphabet::{self, rank_to_char};
use crate::config::HillOptions;
use crate::key::hill_matrix::{mul_vector, HillKey};
use crate::trace::{Recorder, StepDetail, TraceStep};

use super::Direction;

/// Encodes `text` block by block with the key matrix.
///
/// Non-letters are dropped; the letters are padded with the configured pad
/// letter to a multiple of the matrix dimension.
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::hill;
/// use classicrypt::config::HillOptions;
/// use classicrypt::key::HillKey;
/// use classicrypt::trace::Discard;
///
/// let key = HillKey::new(&[vec![3, 3], vec![2, 5]]).unwrap();
/// assert_eq!(hill::encode("help", &key, &HillOptions::default(), &mut Discard), "HIAT");
/// ```
pub fn encode<R: Recorder>(
    text: &str,
    key: &HillKey,
    options: &HillOptions,
    recorder: &mut R,
) -> String {
    transform(text, key, options, Direction::Encode, recorder)
}

/// Decodes `text` block by block with the inverse key matrix.
///
/// Padding is applied the same way as for [`encode`] and is not removed.
pub fn decode<R: Recorder>(
    text: &str,
    key: &HillKey,
    options: &HillOptions,
    recorder: &mut R,
) -> String {
    transform(text, key, options, Direction::Decode, recorder)
}

/// Letters of `text` padded to a multiple of `dimension`.
pub(crate) fn padded_ranks(text: &str, dimension: usize, options: &HillOptions) -> Vec<u8> {
    let mut ranks = alphabet::letters(text);
    let pad = options.pad_rank();
    while !ranks.len().is_multiple_of(dimension) {
        ranks.push(pad);
    }
    ranks
}

fn transform<R: Recorder>(
    text: &str,
    key: &HillKey,
    options: &HillOptions,
    direction: Direction,
    recorder: &mut R,
) -> String {
    let n = key.dimension();
    let matrix = match direction {
        Direction::Encode => key.matrix(),
        Direction::Decode => key.inverse(),
    };
    let label = match direction {
        Direction::Encode => "K",
        Direction::Decode => "K⁻¹",
    };

    let ranks = padded_ranks(text, n, options);
    let mut output = String::with_capacity(ranks.len());
    for block in ranks.chunks_exact(n) {
        let result = mul_vector(matrix, block);
        recorder.record(|| {
            TraceStep::with_detail(
                format!(
                    "Block '{}' {:?} × {} mod 26 = {:?} → '{}'",
                    alphabet::ranks_to_string(block),
                    block,
                    label,
                    result,
                    alphabet::ranks_to_string(&result)
                ),
                StepDetail::Block {
                    input: block.to_vec(),
                    output: result.clone(),
                },
            )
        });
        output.extend(result.iter().map(|&r| rank_to_char(r)));
    }
    output
}
