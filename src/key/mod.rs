//! Key scheduling.
//!
//! Turns raw, user-supplied [`KeyParams`] into validated [`KeyMaterial`].
//! Validation happens once, here; the transforms assume their key structure
//! already satisfies its invariants (coprime affine `a`, non-empty Vigenère
//! key, invertible Hill matrix, complete Playfair grid).

pub mod hill_matrix;
pub mod playfair_grid;

use serde::{Deserialize, Serialize};

use crate::alphabet::{self, rank_to_char};
use crate::config::CipherOptions;
use crate::engine::CipherKind;
use crate::error::{CipherError, Result};
use crate::utils::modular::{self, reduce};

pub use hill_matrix::HillKey;
pub use playfair_grid::PlayfairGrid;

/// Raw key parameters as supplied by the caller.
///
/// Serialized with a `cipher` tag, e.g. `{"cipher":"affine","a":5,"b":8}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "cipher", rename_all = "snake_case")]
pub enum KeyParams {
    Caesar { shift: i64 },
    Affine { a: i64, b: i64 },
    Vigenere { key: String },
    Playfair { key: String },
    Hill { matrix: Vec<Vec<i64>> },
}

impl KeyParams {
    /// The cipher these parameters belong to.
    pub fn kind(&self) -> CipherKind {
        match self {
            KeyParams::Caesar { .. } => CipherKind::Caesar,
            KeyParams::Affine { .. } => CipherKind::Affine,
            KeyParams::Vigenere { .. } => CipherKind::Vigenere,
            KeyParams::Playfair { .. } => CipherKind::Playfair,
            KeyParams::Hill { .. } => CipherKind::Hill,
        }
    }
}

/// Validated, cipher-specific key structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Caesar(CaesarKey),
    Affine(AffineKey),
    Vigenere(VigenereKey),
    Playfair(PlayfairGrid),
    Hill(HillKey),
}

impl KeyMaterial {
    /// The cipher this key is for.
    pub fn kind(&self) -> CipherKind {
        match self {
            KeyMaterial::Caesar(_) => CipherKind::Caesar,
            KeyMaterial::Affine(_) => CipherKind::Affine,
            KeyMaterial::Vigenere(_) => CipherKind::Vigenere,
            KeyMaterial::Playfair(_) => CipherKind::Playfair,
            KeyMaterial::Hill(_) => CipherKind::Hill,
        }
    }
}

/// Caesar shift, always in `0..26`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaesarKey {
    shift: u8,
}

impl CaesarKey {
    /// Creates a key from any integer shift, reduced modulo 26.
    pub fn new(shift: i64) -> Self {
        CaesarKey {
            shift: reduce(shift),
        }
    }

    pub fn shift(&self) -> u8 {
        self.shift
    }
}

/// Affine coefficients `(a, b)` with `a` invertible modulo 26.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AffineKey {
    a: u8,
    b: u8,
    a_inv: u8,
}

impl AffineKey {
    /// Validates `(a, b)` and precomputes `a⁻¹`.
    ///
    /// Both coefficients are reduced modulo 26 first.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `a` shares a factor with 26
    /// (every even `a`, `13`, and multiples of 26).
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::key::AffineKey;
    ///
    /// let key = AffineKey::new(5, 8).unwrap();
    /// assert_eq!(key.a_inverse(), 21);
    /// assert!(AffineKey::new(13, 0).is_err());
    /// ```
    pub fn new(a: i64, b: i64) -> Result<Self> {
        let a_inv = modular::mod_inverse(a).ok_or_else(|| {
            CipherError::invalid_key(
                CipherKind::Affine,
                format!("a = {} is not coprime with 26", a),
            )
        })?;
        Ok(AffineKey {
            a: reduce(a),
            b: reduce(b),
            a_inv,
        })
    }

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn b(&self) -> u8 {
        self.b
    }

    /// Multiplicative inverse of `a` modulo 26.
    pub fn a_inverse(&self) -> u8 {
        self.a_inv
    }
}

/// Filtered Vigenère key: the letter ranks of the raw key, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VigenereKey {
    ranks: Vec<u8>,
}

impl VigenereKey {
    /// Keeps only the ASCII letters of `raw` (case-insensitive).
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`] if `raw` has no letters.
    pub fn new(raw: &str) -> Result<Self> {
        let ranks = alphabet::letters(raw);
        if ranks.is_empty() {
            return Err(CipherError::invalid_key(
                CipherKind::Vigenere,
                "key must contain at least one letter",
            ));
        }
        Ok(VigenereKey { ranks })
    }

    /// Key ranks in order (never empty).
    pub fn ranks(&self) -> &[u8] {
        &self.ranks
    }

    /// Key rank for the `index`-th letter of the text.
    pub fn rank_at(&self, index: usize) -> u8 {
        self.ranks[index % self.ranks.len()]
    }

    /// Filtered key as uppercase letters.
    pub fn as_letters(&self) -> String {
        alphabet::ranks_to_string(&self.ranks)
    }

    /// Key letter lined up under each character of `text`.
    ///
    /// Letters of `text` consume the key cyclically; every other character
    /// gets a space and does not advance the key.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::key::VigenereKey;
    ///
    /// let key = VigenereKey::new("lemon").unwrap();
    /// assert_eq!(key.key_stream("attack at"), "LEMONL EM");
    /// ```
    pub fn key_stream(&self, text: &str) -> String {
        let mut cursor = 0;
        text.chars()
            .map(|c| {
                if alphabet::char_to_rank(c).is_some() {
                    let k = rank_to_char(self.rank_at(cursor));
                    cursor += 1;
                    k
                } else {
                    ' '
                }
            })
            .collect()
    }
}

/// Derives validated key material for `kind` from raw `params`.
///
/// # Errors
/// Returns [`CipherError::InvalidKey`] if `params` belongs to another cipher
/// or fails that cipher's validation, and [`CipherError::Options`] if the
/// Playfair options are unusable.
pub(crate) fn derive(
    kind: CipherKind,
    params: &KeyParams,
    options: &CipherOptions,
) -> Result<KeyMaterial> {
    if params.kind() != kind {
        return Err(CipherError::invalid_key(
            kind,
            format!("expected {} key parameters, got {}", kind, params.kind()),
        ));
    }
    let material = match params {
        KeyParams::Caesar { shift } => KeyMaterial::Caesar(CaesarKey::new(*shift)),
        KeyParams::Affine { a, b } => KeyMaterial::Affine(AffineKey::new(*a, *b)?),
        KeyParams::Vigenere { key } => KeyMaterial::Vigenere(VigenereKey::new(key)?),
        KeyParams::Playfair { key } => {
            KeyMaterial::Playfair(PlayfairGrid::new(key, &options.playfair)?)
        }
        KeyParams::Hill { matrix } => KeyMaterial::Hill(HillKey::new(matrix)?),
    };
    tracing::trace!(cipher = %kind, ?material, "key material derived");
    Ok(material)
}
