//! Shared arithmetic helpers.

pub mod modular;
