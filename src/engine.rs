//! Engine: dispatch from cipher kind to key scheduler and transform.
//!
//! The cipher set is closed, so dispatch is a single `match` over
//! [`KeyMaterial`]. Every call derives its key material fresh from the raw
//! parameters; the engine holds nothing but its options and can be shared
//! freely between threads.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ciphers::{affine, caesar, hill, playfair, vigenere, Direction};
use crate::config::{CipherOptions, ConfigError};
use crate::error::Result;
use crate::key::{self, KeyMaterial, KeyParams};
use crate::trace::{Discard, Recorder, Trace};

/// The supported ciphers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Caesar,
    Affine,
    Vigenere,
    Playfair,
    Hill,
}

impl CipherKind {
    /// Every cipher, in menu order.
    pub const ALL: [CipherKind; 5] = [
        CipherKind::Caesar,
        CipherKind::Affine,
        CipherKind::Vigenere,
        CipherKind::Playfair,
        CipherKind::Hill,
    ];
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherKind::Caesar => "Caesar",
            CipherKind::Affine => "Affine",
            CipherKind::Vigenere => "Vigenère",
            CipherKind::Playfair => "Playfair",
            CipherKind::Hill => "Hill",
        };
        f.write_str(name)
    }
}

/// Output of one transform call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub output: String,
    pub trace: Trace,
}

/// Cipher engine configured with [`CipherOptions`].
#[derive(Debug, Clone, Default)]
pub struct CipherEngine {
    options: CipherOptions,
}

impl CipherEngine {
    /// Creates an engine after validating `options`.
    ///
    /// # Errors
    /// Returns the [`ConfigError`] from [`CipherOptions::validate`].
    pub fn new(options: CipherOptions) -> std::result::Result<Self, ConfigError> {
        options.validate()?;
        Ok(CipherEngine { options })
    }

    /// Options in use.
    pub fn options(&self) -> &CipherOptions {
        &self.options
    }

    /// Validates `params` for `kind` and builds the key structure.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey) if
    /// the parameters belong to another cipher or fail validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{CipherEngine, CipherKind, KeyParams};
    ///
    /// let engine = CipherEngine::default();
    /// let bad = KeyParams::Affine { a: 13, b: 2 };
    /// assert!(engine.derive_key_material(CipherKind::Affine, &bad).is_err());
    /// ```
    pub fn derive_key_material(&self, kind: CipherKind, params: &KeyParams) -> Result<KeyMaterial> {
        key::derive(kind, params, &self.options)
    }

    /// Encodes `text` and returns the output with its trace.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey);
    /// the transform does not run in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{CipherEngine, CipherKind, KeyParams};
    ///
    /// let engine = CipherEngine::default();
    /// let params = KeyParams::Caesar { shift: 3 };
    /// let result = engine.encode(CipherKind::Caesar, "HELLO", &params).unwrap();
    /// assert_eq!(result.output, "KHOOR");
    /// assert_eq!(result.trace.len(), 5);
    /// ```
    pub fn encode(&self, kind: CipherKind, text: &str, params: &KeyParams) -> Result<Transformation> {
        self.run(Direction::Encode, kind, text, params)
    }

    /// Decodes `text` and returns the output with its trace.
    ///
    /// # Errors
    /// See [`encode`](Self::encode).
    pub fn decode(&self, kind: CipherKind, text: &str, params: &KeyParams) -> Result<Transformation> {
        self.run(Direction::Decode, kind, text, params)
    }

    /// Encodes `text` without building a trace.
    ///
    /// # Errors
    /// See [`encode`](Self::encode).
    pub fn encode_output(&self, kind: CipherKind, text: &str, params: &KeyParams) -> Result<String> {
        let material = self.derive_key_material(kind, params)?;
        Ok(self.apply(Direction::Encode, text, &material, &mut Discard))
    }

    /// Decodes `text` without building a trace.
    ///
    /// # Errors
    /// See [`encode`](Self::encode).
    pub fn decode_output(&self, kind: CipherKind, text: &str, params: &KeyParams) -> Result<String> {
        let material = self.derive_key_material(kind, params)?;
        Ok(self.apply(Direction::Decode, text, &material, &mut Discard))
    }

    /// Runs one transform with already-derived key material.
    pub fn apply<R: Recorder>(
        &self,
        direction: Direction,
        text: &str,
        material: &KeyMaterial,
        recorder: &mut R,
    ) -> String {
        tracing::debug!(
            cipher = %material.kind(),
            ?direction,
            input_len = text.len(),
            "applying cipher"
        );
        match (material, direction) {
            (KeyMaterial::Caesar(k), Direction::Encode) => caesar::encode(text, k, recorder),
            (KeyMaterial::Caesar(k), Direction::Decode) => caesar::decode(text, k, recorder),
            (KeyMaterial::Affine(k), Direction::Encode) => affine::encode(text, k, recorder),
            (KeyMaterial::Affine(k), Direction::Decode) => affine::decode(text, k, recorder),
            (KeyMaterial::Vigenere(k), Direction::Encode) => vigenere::encode(text, k, recorder),
            (KeyMaterial::Vigenere(k), Direction::Decode) => vigenere::decode(text, k, recorder),
            (KeyMaterial::Playfair(g), Direction::Encode) => playfair::encode(text, g, recorder),
            (KeyMaterial::Playfair(g), Direction::Decode) => playfair::decode(text, g, recorder),
            (KeyMaterial::Hill(k), Direction::Encode) => {
                hill::encode(text, k, &self.options.hill, recorder)
            }
            (KeyMaterial::Hill(k), Direction::Decode) => {
                hill::decode(text, k, &self.options.hill, recorder)
            }
        }
    }

    fn run(
        &self,
        direction: Direction,
        kind: CipherKind,
        text: &str,
        params: &KeyParams,
    ) -> Result<Transformation> {
        let material = self.derive_key_material(kind, params)?;
        let mut trace = Trace::new();
        let output = self.apply(direction, text, &material, &mut trace);
        tracing::debug!(cipher = %kind, ?direction, steps = trace.len(), "transform complete");
        Ok(Transformation { output, trace })
    }
}

/// Encodes with default options. See [`CipherEngine::encode`].
///
/// # Errors
/// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey) for
/// rejected keys.
pub fn encode(kind: CipherKind, text: &str, params: &KeyParams) -> Result<Transformation> {
    CipherEngine::default().encode(kind, text, params)
}

/// Decodes with default options. See [`CipherEngine::decode`].
///
/// # Errors
/// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey) for
/// rejected keys.
pub fn decode(kind: CipherKind, text: &str, params: &KeyParams) -> Result<Transformation> {
    CipherEngine::default().decode(kind, text, params)
}

/// Derives key material with default options. See
/// [`CipherEngine::derive_key_material`].
///
/// # Errors
/// Returns [`CipherError::InvalidKey`](crate::CipherError::InvalidKey) for
/// rejected keys.
pub fn derive_key_material(kind: CipherKind, params: &KeyParams) -> Result<KeyMaterial> {
    CipherEngine::default().derive_key_material(kind, params)
}
