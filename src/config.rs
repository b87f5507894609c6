//! Engine options.
//!
//! The defaults follow the usual textbook conventions: Playfair merges `J`
//! into `I` and uses `X` as filler (`Q` when the doubled letter is itself
//! `X`), Hill pads short blocks with `X`. Options can be loaded from TOML:
//!
//! ```toml
//! [playfair]
//! filler = "X"
//! alternate_filler = "Q"
//! merged = "J"
//! merge_into = "I"
//!
//! [hill]
//! pad = "Z"
//! ```

use serde::{Deserialize, Serialize};

use crate::alphabet::char_to_rank;

/// Errors produced while loading or validating [`CipherOptions`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("options parse failed: {0}")]
    Parse(String),
    #[error("{field} must be an ASCII letter, got {value:?}")]
    NotALetter { field: &'static str, value: char },
    #[error("{0}")]
    Conflict(String),
}

/// Playfair preparation options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayfairOptions {
    /// Letter inserted between doubled letters and used to pad odd lengths.
    pub filler: char,
    /// Used instead of `filler` when the neighbouring letter is `filler`.
    pub alternate_filler: char,
    /// Letter folded away so the alphabet fits a 5×5 grid.
    pub merged: char,
    /// Letter `merged` is folded into.
    pub merge_into: char,
}

impl PlayfairOptions {
    /// Checks the filler and merge letters.
    ///
    /// # Errors
    /// - [`ConfigError::NotALetter`] if a letter is not an ASCII letter.
    /// - [`ConfigError::Conflict`] if the two fillers are the same letter,
    ///   either filler is the merged letter, or the merged letter is its
    ///   own target.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let filler = letter("playfair.filler", self.filler)?;
        let alternate = letter("playfair.alternate_filler", self.alternate_filler)?;
        let merged = letter("playfair.merged", self.merged)?;
        let into = letter("playfair.merge_into", self.merge_into)?;

        if filler == alternate {
            return Err(ConfigError::Conflict(
                "playfair filler and alternate filler must differ".into(),
            ));
        }
        if merged == into {
            return Err(ConfigError::Conflict(
                "playfair merged letter must differ from merge target".into(),
            ));
        }
        if filler == merged || alternate == merged {
            return Err(ConfigError::Conflict(
                "playfair filler letters cannot be the merged letter".into(),
            ));
        }
        Ok(())
    }

    /// Rank of the filler letter; invalid letters fall back to `X`.
    pub(crate) fn filler_rank(&self) -> u8 {
        char_to_rank(self.filler).unwrap_or(b'X' - b'A')
    }

    /// Rank of the alternate filler; invalid letters fall back to `Q`.
    pub(crate) fn alternate_filler_rank(&self) -> u8 {
        char_to_rank(self.alternate_filler).unwrap_or(b'Q' - b'A')
    }

    /// `(merged, merge_into)` ranks; invalid letters fall back to `J → I`.
    pub(crate) fn merge_ranks(&self) -> (u8, u8) {
        (
            char_to_rank(self.merged).unwrap_or(b'J' - b'A'),
            char_to_rank(self.merge_into).unwrap_or(b'I' - b'A'),
        )
    }
}

impl Default for PlayfairOptions {
    fn default() -> Self {
        PlayfairOptions {
            filler: 'X',
            alternate_filler: 'Q',
            merged: 'J',
            merge_into: 'I',
        }
    }
}

/// Hill block options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HillOptions {
    /// Letter appended until the text length is a multiple of the matrix size.
    pub pad: char,
}

impl HillOptions {
    /// Checks the pad letter.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotALetter`] if `pad` is not an ASCII letter.
    pub fn validate(&self) -> Result<(), ConfigError> {
        letter("hill.pad", self.pad).map(|_| ())
    }

    /// Rank of the pad letter; invalid letters fall back to `X`.
    pub(crate) fn pad_rank(&self) -> u8 {
        char_to_rank(self.pad).unwrap_or(b'X' - b'A')
    }
}

impl Default for HillOptions {
    fn default() -> Self {
        HillOptions { pad: 'X' }
    }
}

/// All engine options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherOptions {
    pub playfair: PlayfairOptions,
    pub hill: HillOptions,
}

impl CipherOptions {
    /// Parses options from a TOML document and validates them.
    ///
    /// Missing tables and keys fall back to their defaults.
    ///
    /// # Errors
    /// Returns [`ConfigError::Parse`] on malformed TOML, or a validation
    /// error from [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let options: CipherOptions =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Checks that every configured letter is usable.
    ///
    /// # Errors
    /// - [`ConfigError::NotALetter`] if a configured character is not an
    ///   ASCII letter.
    /// - [`ConfigError::Conflict`] if the Playfair letters collide. See
    ///   [`PlayfairOptions::validate`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.playfair.validate()?;
        self.hill.validate()
    }
}

fn letter(field: &'static str, value: char) -> Result<u8, ConfigError> {
    char_to_rank(value).ok_or(ConfigError::NotALetter { field, value })
}
