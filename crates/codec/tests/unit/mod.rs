//! # Unit Components
//!
//! Tests grouped by the component they exercise.

/// Configuration readers (cfg and JSON forms, file loading).
pub mod config;

/// Instruction facade scenarios: text, binary, hex and raw words.
pub mod instruction;
