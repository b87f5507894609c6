//! Alphabet normalization.
//!
//! Maps raw user text into letter ranks of the working alphabet. Ciphers that
//! preserve layout (Caesar, Affine, Vigenère) use [`normalize`], which keeps
//! every non-letter in place and remembers the case of each letter. Ciphers
//! that work on a bare letter sequence (Playfair, Hill) use [`letters`].
//!
//! Only ASCII `A-Z` / `a-z` count as letters; everything else, including
//! non-ASCII characters, is treated as pass-through.

use std::fmt;

/// Number of letters in the full Latin alphabet.
pub const ALPHABET_LEN: usize = 26;

/// A single unit of normalized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// A letter, by rank (`A` = 0), with its original case.
    Letter { rank: u8, upper: bool },
    /// Any other character, copied verbatim to the output.
    Other(char),
}

impl Symbol {
    /// Renders a rank back to a character using this symbol's case.
    ///
    /// Non-letter symbols ignore `rank` and return their own character.
    pub fn render(&self, rank: u8) -> char {
        match *self {
            Symbol::Letter { upper, .. } => {
                let c = rank_to_char(rank);
                if upper {
                    c
                } else {
                    c.to_ascii_lowercase()
                }
            }
            Symbol::Other(c) => c,
        }
    }
}

/// Ordered set of letters with a unique rank per symbol.
///
/// Ranks here are positions inside this alphabet; the stored characters are
/// always uppercase. The full alphabet has 26 symbols, the merged alphabet
/// used by Playfair drops one letter and has 25.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    /// The full `A..=Z` alphabet.
    pub fn standard() -> Self {
        Alphabet {
            symbols: ('A'..='Z').collect(),
        }
    }

    /// `A..=Z` without `dropped` (uppercase ASCII letter).
    ///
    /// If `dropped` is not an uppercase ASCII letter the result is the full
    /// alphabet.
    pub fn without(dropped: char) -> Self {
        Alphabet {
            symbols: ('A'..='Z').filter(|&c| c != dropped).collect(),
        }
    }

    /// Number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Rank of `c` (case-insensitive) within this alphabet.
    pub fn rank_of(&self, c: char) -> Option<usize> {
        let upper = c.to_ascii_uppercase();
        self.symbols.iter().position(|&s| s == upper)
    }

    /// Symbol at `rank`.
    pub fn symbol(&self, rank: usize) -> Option<char> {
        self.symbols.get(rank).copied()
    }

    /// Iterates over the symbols in order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.symbols.iter().copied()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// Rank of an ASCII letter in `A..=Z` (case-insensitive).
pub fn char_to_rank(c: char) -> Option<u8> {
    if c.is_ascii_alphabetic() {
        Some(c.to_ascii_uppercase() as u8 - b'A')
    } else {
        None
    }
}

/// Uppercase letter for `rank` (taken modulo 26).
pub fn rank_to_char(rank: u8) -> char {
    (b'A' + rank % ALPHABET_LEN as u8) as char
}

/// Splits `text` into letters and pass-through symbols, keeping positions.
///
/// # Examples
///
/// ```
/// use classicrypt::alphabet::{normalize, Symbol};
///
/// let symbols = normalize("a!");
/// assert_eq!(symbols[0], Symbol::Letter { rank: 0, upper: false });
/// assert_eq!(symbols[1], Symbol::Other('!'));
/// ```
pub fn normalize(text: &str) -> Vec<Symbol> {
    text.chars()
        .map(|c| match char_to_rank(c) {
            Some(rank) => Symbol::Letter {
                rank,
                upper: c.is_ascii_uppercase(),
            },
            None => Symbol::Other(c),
        })
        .collect()
}

/// Drops every non-letter and folds case, returning letter ranks.
pub fn letters(text: &str) -> Vec<u8> {
    text.chars().filter_map(char_to_rank).collect()
}

/// Replaces every occurrence of rank `from` with rank `into`.
///
/// Used by Playfair to merge I/J. The fold cannot be undone.
pub fn fold(ranks: &mut [u8], from: u8, into: u8) {
    for r in ranks.iter_mut() {
        if *r == from {
            *r = into;
        }
    }
}

/// Renders ranks as an uppercase string.
pub fn ranks_to_string(ranks: &[u8]) -> String {
    ranks.iter().map(|&r| rank_to_char(r)).collect()
}
