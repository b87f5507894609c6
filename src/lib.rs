//! Classical cipher engine with step-by-step explanations.
//!
//! Implements the Caesar, Affine, Vigenère, Playfair and Hill ciphers as
//! pure encode/decode functions over ASCII letters. Every transform can
//! report an ordered trace of what it did to each letter, digraph or block,
//! so a presentation layer can show the work.
//!
//! These ciphers are intentionally breakable; the crate exists for teaching.
//!
//! # Architecture
//!
//! ```text
//! alphabet    (normalizer — letters, case, pass-through symbols)
//!     ↓
//! key         (scheduler — CaesarKey, AffineKey, VigenereKey,
//!              PlayfairGrid, HillKey; validation happens here)
//!     ↓
//! ciphers     (one encode/decode pair per cipher)
//!     ↓
//! trace       (Recorder: Trace keeps steps, Discard drops them)
//!
//! engine      (CipherKind dispatch over all of the above)
//! ```
//!
//! # Examples
//!
//! Encode with the textbook Vigenère key and inspect the trace:
//!
//! ```
//! use classicrypt::{encode, decode, CipherKind, KeyParams};
//!
//! let key = KeyParams::Vigenere { key: "LEMON".into() };
//!
//! let encoded = encode(CipherKind::Vigenere, "ATTACKATDAWN", &key).unwrap();
//! assert_eq!(encoded.output, "LXFOPVEFRNHR");
//! assert_eq!(encoded.trace.len(), 12);
//!
//! let decoded = decode(CipherKind::Vigenere, &encoded.output, &key).unwrap();
//! assert_eq!(decoded.output, "ATTACKATDAWN");
//! ```
//!
//! Invalid keys are rejected before any text is touched:
//!
//! ```
//! use classicrypt::{derive_key_material, CipherError, CipherKind, KeyParams};
//!
//! let singular = KeyParams::Hill { matrix: vec![vec![2, 4], vec![1, 2]] };
//! let err = derive_key_material(CipherKind::Hill, &singular).unwrap_err();
//! assert!(matches!(err, CipherError::InvalidKey { .. }));
//! ```

#![deny(clippy::all)]

pub mod alphabet;
pub mod ciphers;
pub mod config;
pub mod error;
pub mod key;
pub mod trace;
pub mod utils;

mod engine;

pub use ciphers::Direction;
pub use config::{CipherOptions, ConfigError};
pub use engine::{
    decode, derive_key_material, encode, CipherEngine, CipherKind, Transformation,
};
pub use error::{CipherError, Result};
pub use key::{KeyMaterial, KeyParams};
pub use trace::{Discard, Recorder, StepDetail, Trace, TraceStep};
