//! Playfair digraph cipher.
//!
//! Text is prepared into digraphs (pairs of letters) and each pair is
//! substituted through the 5×5 key grid:
//!
//! - same row: each letter moves one column right (left to decode)
//! - same column: each letter moves one row down (up to decode)
//! - rectangle: each letter keeps its row and takes the other's column
//!
//! Decoding does not remove filler letters inserted during preparation.

use crate::alphabet::{self, rank_to_char};
use crate::config::{ConfigError, PlayfairOptions};
use crate::key::playfair_grid::{PlayfairGrid, GRID_SIZE};
use crate::trace::{DigraphRule, Recorder, StepDetail, TraceStep};

use super::Direction;

/// Preparation letters as ranks: `(merged, merge_into)` and
/// `(filler, alternate_filler)`.
#[derive(Debug, Clone, Copy)]
struct Preparation {
    merge: (u8, u8),
    fillers: (u8, u8),
}

impl Preparation {
    fn of_grid(grid: &PlayfairGrid) -> Self {
        Preparation {
            merge: (grid.merged(), grid.merge_into()),
            fillers: (grid.filler(), grid.alternate_filler()),
        }
    }

    fn of_options(options: &PlayfairOptions) -> Self {
        Preparation {
            merge: options.merge_ranks(),
            fillers: (options.filler_rank(), options.alternate_filler_rank()),
        }
    }
}

/// Prepares `text` for encoding and returns it as letter ranks.
///
/// Drops non-letters, folds the merged letter, inserts the filler between
/// any two adjacent identical letters, and pads to an even length. When the
/// letter next to an inserted or padded filler is the filler itself, the
/// alternate filler is used instead, so no digraph ever holds the same
/// letter twice.
fn prepare_ranks(text: &str, rules: Preparation) -> Vec<u8> {
    let (merged, merge_into) = rules.merge;
    let (filler, alternate) = rules.fillers;
    let filler_for = |rank: u8| if rank == filler { alternate } else { filler };

    let mut letters = alphabet::letters(text);
    alphabet::fold(&mut letters, merged, merge_into);

    let mut prepared = Vec::with_capacity(letters.len() * 2);
    for (i, &rank) in letters.iter().enumerate() {
        prepared.push(rank);
        if letters.get(i + 1) == Some(&rank) {
            prepared.push(filler_for(rank));
        }
    }
    if let Some(&last) = prepared.last() {
        if !prepared.len().is_multiple_of(2) {
            prepared.push(filler_for(last));
        }
    }
    prepared
}

/// Prepared form of `text`, as shown to the user before encoding.
///
/// # Errors
/// Returns the [`ConfigError`] from [`PlayfairOptions::validate`].
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::playfair;
/// use classicrypt::config::PlayfairOptions;
///
/// let options = PlayfairOptions::default();
/// assert_eq!(playfair::prepare("balloon", &options)?, "BALXLOXONX");
/// assert_eq!(playfair::prepare("jump", &options)?, "IUMP");
/// assert_eq!(playfair::prepare("odd", &options)?, "ODXD");
/// # Ok::<(), classicrypt::ConfigError>(())
/// ```
pub fn prepare(text: &str, options: &PlayfairOptions) -> Result<String, ConfigError> {
    options.validate()?;
    Ok(alphabet::ranks_to_string(&prepare_ranks(
        text,
        Preparation::of_options(options),
    )))
}

/// Encodes `text` with `grid`.
///
/// Text is prepared with the grid's merge and filler letters. For non-empty
/// input the prepared text is recorded before the digraph steps.
///
/// # Examples
///
/// ```
/// use classicrypt::ciphers::playfair;
/// use classicrypt::config::PlayfairOptions;
/// use classicrypt::key::PlayfairGrid;
/// use classicrypt::trace::Discard;
///
/// let grid = PlayfairGrid::new("MONARCHY", &PlayfairOptions::default())?;
/// assert_eq!(playfair::encode("instruments", &grid, &mut Discard), "GATLMZCLRQXA");
/// # Ok::<(), classicrypt::ConfigError>(())
/// ```
pub fn encode<R: Recorder>(text: &str, grid: &PlayfairGrid, recorder: &mut R) -> String {
    let prepared = prepare_ranks(text, Preparation::of_grid(grid));
    if !prepared.is_empty() {
        recorder.record(|| {
            TraceStep::note(format!(
                "Prepared text: {}",
                alphabet::ranks_to_string(&prepared)
            ))
        });
    }
    substitute_digraphs(&prepared, grid, Direction::Encode, recorder)
}

/// Decodes `text` with `grid`.
///
/// Non-letters are dropped and the merged letter folded. A trailing
/// unpaired letter is ignored and noted in the trace. Filler letters from
/// encoding remain in the output.
pub fn decode<R: Recorder>(text: &str, grid: &PlayfairGrid, recorder: &mut R) -> String {
    let mut letters = alphabet::letters(text);
    alphabet::fold(&mut letters, grid.merged(), grid.merge_into());

    if !letters.len().is_multiple_of(2) {
        if let Some(dangling) = letters.pop() {
            recorder.record(|| {
                TraceStep::note(format!(
                    "Unpaired trailing letter '{}' ignored",
                    rank_to_char(dangling)
                ))
            });
        }
    }
    substitute_digraphs(&letters, grid, Direction::Decode, recorder)
}

/// Substitutes each pair of `ranks`; `ranks` must have even length.
fn substitute_digraphs<R: Recorder>(
    ranks: &[u8],
    grid: &PlayfairGrid,
    direction: Direction,
    recorder: &mut R,
) -> String {
    let step = match direction {
        Direction::Encode => 1,
        Direction::Decode => GRID_SIZE - 1,
    };

    let mut output = String::with_capacity(ranks.len());
    for pair in ranks.chunks_exact(2) {
        let (first, second) = (pair[0], pair[1]);
        let (r1, c1) = grid.position(first);
        let (r2, c2) = grid.position(second);
        let (r1u, c1u, r2u, c2u) = (r1 as usize, c1 as usize, r2 as usize, c2 as usize);

        let (rule, out1, out2) = if r1 == r2 {
            (
                DigraphRule::SameRow,
                grid.rank_at(r1u, c1u + step),
                grid.rank_at(r2u, c2u + step),
            )
        } else if c1 == c2 {
            (
                DigraphRule::SameColumn,
                grid.rank_at(r1u + step, c1u),
                grid.rank_at(r2u + step, c2u),
            )
        } else {
            (
                DigraphRule::Rectangle,
                grid.rank_at(r1u, c2u),
                grid.rank_at(r2u, c1u),
            )
        };

        let input = [rank_to_char(first), rank_to_char(second)];
        let result = [rank_to_char(out1), rank_to_char(out2)];
        recorder.record(|| {
            TraceStep::with_detail(
                format!(
                    "Digraph '{}{}' - {}: ({},{}) & ({},{}) → '{}{}'",
                    input[0],
                    input[1],
                    rule.label(),
                    r1,
                    c1,
                    r2,
                    c2,
                    result[0],
                    result[1]
                ),
                StepDetail::Digraph {
                    input,
                    positions: [(r1, c1), (r2, c2)],
                    rule,
                    output: result,
                },
            )
        });
        output.push(result[0]);
        output.push(result[1]);
    }
    output
}
