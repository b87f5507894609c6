//! Playfair 5×5 key grid.
//!
//! The grid is built in two phases: the folded, deduplicated key letters in
//! input order, then the rest of the reduced alphabet in its fixed order.
//! The resulting 25-letter sequence is laid out row-major.

use std::fmt;

use crate::alphabet::{self, rank_to_char, Alphabet, ALPHABET_LEN};
use crate::config::{ConfigError, PlayfairOptions};

/// Side length of the Playfair grid.
pub const GRID_SIZE: usize = 5;

/// Number of cells in the grid.
const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;

/// 5×5 grid holding every letter of the reduced alphabet exactly once.
///
/// Cells store standard letter ranks (`A` = 0). A reverse table maps each
/// rank to its `(row, col)`; the merged letter maps to the position of the
/// letter it is folded into. The grid also keeps the filler letters of the
/// options it was built with, so text is prepared with the same letters.
#[derive(Clone, PartialEq, Eq)]
pub struct PlayfairGrid {
    cells: [u8; GRID_CELLS],
    positions: [(u8, u8); ALPHABET_LEN],
    merged: u8,
    merge_into: u8,
    filler: u8,
    alternate_filler: u8,
}

impl PlayfairGrid {
    /// Builds the grid for `key`.
    ///
    /// Non-letters in `key` are ignored and the merged letter is folded.
    /// Any key, including an empty one, yields a complete grid.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`PlayfairOptions::validate`].
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::config::PlayfairOptions;
    /// use classicrypt::key::PlayfairGrid;
    ///
    /// let grid = PlayfairGrid::new("MONARCHY", &PlayfairOptions::default())?;
    /// assert_eq!(grid.row_string(0), "MONAR");
    /// assert_eq!(grid.row_string(1), "CHYBD");
    /// # Ok::<(), classicrypt::ConfigError>(())
    /// ```
    pub fn new(key: &str, options: &PlayfairOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        let (merged, merge_into) = options.merge_ranks();

        let mut key_ranks = alphabet::letters(key);
        alphabet::fold(&mut key_ranks, merged, merge_into);

        // Phase 1: key letters, first occurrence wins.
        let mut placed = [false; ALPHABET_LEN];
        placed[merged as usize] = true;
        let mut order = Vec::with_capacity(GRID_CELLS);
        for rank in key_ranks {
            if !placed[rank as usize] {
                placed[rank as usize] = true;
                order.push(rank);
            }
        }

        // Phase 2: remaining letters of the reduced alphabet.
        let reduced = Alphabet::without(rank_to_char(merged));
        for c in reduced.iter() {
            if let Some(rank) = alphabet::char_to_rank(c) {
                if !placed[rank as usize] {
                    placed[rank as usize] = true;
                    order.push(rank);
                }
            }
        }

        let mut cells = [0u8; GRID_CELLS];
        let mut positions = [(0u8, 0u8); ALPHABET_LEN];
        for (i, &rank) in order.iter().enumerate().take(GRID_CELLS) {
            cells[i] = rank;
            positions[rank as usize] = ((i / GRID_SIZE) as u8, (i % GRID_SIZE) as u8);
        }
        positions[merged as usize] = positions[merge_into as usize];

        Ok(PlayfairGrid {
            cells,
            positions,
            merged,
            merge_into,
            filler: options.filler_rank(),
            alternate_filler: options.alternate_filler_rank(),
        })
    }

    /// Letter rank stored at `(row, col)`; both wrap modulo 5.
    pub fn rank_at(&self, row: usize, col: usize) -> u8 {
        self.cells[(row % GRID_SIZE) * GRID_SIZE + (col % GRID_SIZE)]
    }

    /// `(row, col)` of letter `rank`.
    pub fn position(&self, rank: u8) -> (u8, u8) {
        self.positions[rank as usize % ALPHABET_LEN]
    }

    /// Rank of the letter that is folded away.
    pub fn merged(&self) -> u8 {
        self.merged
    }

    /// Rank the merged letter is folded into.
    pub fn merge_into(&self) -> u8 {
        self.merge_into
    }

    /// Rank of the filler letter.
    pub fn filler(&self) -> u8 {
        self.filler
    }

    /// Rank of the filler used next to the filler letter itself.
    pub fn alternate_filler(&self) -> u8 {
        self.alternate_filler
    }

    /// The grid as uppercase characters, row by row.
    pub fn rows(&self) -> [[char; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[' '; GRID_SIZE]; GRID_SIZE];
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                *cell = rank_to_char(self.rank_at(r, c));
            }
        }
        rows
    }

    /// Row `row` as a string, e.g. `"MONAR"`.
    pub fn row_string(&self, row: usize) -> String {
        (0..GRID_SIZE)
            .map(|c| rank_to_char(self.rank_at(row, c)))
            .collect()
    }
}

impl fmt::Display for PlayfairGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..GRID_SIZE {
            if row > 0 {
                writeln!(f)?;
            }
            let letters: Vec<String> = (0..GRID_SIZE)
                .map(|c| rank_to_char(self.rank_at(row, c)).to_string())
                .collect();
            write!(f, "{}", letters.join(" "))?;
        }
        Ok(())
    }
}

impl fmt::Debug for PlayfairGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<String> = (0..GRID_SIZE).map(|r| self.row_string(r)).collect();
        f.debug_struct("PlayfairGrid").field("rows", &rows).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(key: &str) -> PlayfairGrid {
        PlayfairGrid::new(key, &PlayfairOptions::default()).unwrap()
    }

    #[test]
    fn test_monarchy_layout() {
        let g = grid("MONARCHY");
        let rows: Vec<String> = (0..5).map(|r| g.row_string(r)).collect();
        assert_eq!(rows, vec!["MONAR", "CHYBD", "EFGIK", "LPQST", "UVWXZ"]);
    }

    #[test]
    fn test_playfair_example_layout() {
        let g = grid("PLAYFAIREXAMPLE");
        let rows: Vec<String> = (0..5).map(|r| g.row_string(r)).collect();
        assert_eq!(rows, vec!["PLAYF", "IREXM", "BCDGH", "KNOQS", "TUVWZ"]);
    }

    #[test]
    fn test_every_letter_once() {
        for key in ["", "JJJJ", "the quick brown fox", "zyxwvutsrqponmlkjihgfedcba"] {
            let g = grid(key);
            let mut seen = [0u8; 26];
            for r in 0..5 {
                for c in 0..5 {
                    seen[g.rank_at(r, c) as usize] += 1;
                }
            }
            for (rank, &count) in seen.iter().enumerate() {
                let expected = if rank == 9 { 0 } else { 1 };
                assert_eq!(count, expected, "key {:?}, letter {}", key, rank);
            }
        }
    }

    #[test]
    fn test_merged_letter_shares_position() {
        let g = grid("jazz");
        assert_eq!(g.row_string(0), "IAZBC");
        assert_eq!(g.position(9), g.position(8));
        assert_eq!(g.position(8), (0, 0));
    }

    #[test]
    fn test_position_matches_cells() {
        let g = grid("KEYWORD");
        for r in 0..5 {
            for c in 0..5 {
                let rank = g.rank_at(r, c);
                assert_eq!(g.position(rank), (r as u8, c as u8));
            }
        }
    }

    #[test]
    fn test_custom_merge() {
        let options = PlayfairOptions {
            merged: 'Q',
            merge_into: 'K',
            ..PlayfairOptions::default()
        };
        let g = PlayfairGrid::new("", &options).unwrap();
        assert_eq!(g.row_string(3), "PRSTU");
        assert_eq!(g.position(16), g.position(10));
    }

    #[test]
    fn test_rejects_letter_merged_into_itself() {
        let options = PlayfairOptions {
            merged: 'I',
            merge_into: 'I',
            ..PlayfairOptions::default()
        };
        assert!(matches!(
            PlayfairGrid::new("KEY", &options),
            Err(ConfigError::Conflict(_))
        ));
    }

    #[test]
    fn test_rejects_unusable_filler() {
        let options = PlayfairOptions {
            filler: '-',
            ..PlayfairOptions::default()
        };
        assert_eq!(
            PlayfairGrid::new("KEY", &options),
            Err(ConfigError::NotALetter {
                field: "playfair.filler",
                value: '-'
            })
        );
    }

    #[test]
    fn test_keeps_filler_letters() {
        let options = PlayfairOptions {
            filler: 'Z',
            alternate_filler: 'Y',
            ..PlayfairOptions::default()
        };
        let g = PlayfairGrid::new("KEY", &options).unwrap();
        assert_eq!(g.filler(), 25);
        assert_eq!(g.alternate_filler(), 24);
    }

    #[test]
    fn test_display() {
        let g = grid("MONARCHY");
        let shown = g.to_string();
        assert!(shown.starts_with("M O N A R\nC H Y B D"));
        assert_eq!(shown.lines().count(), 5);
    }
}
