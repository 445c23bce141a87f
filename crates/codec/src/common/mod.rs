//! Common types shared across the translator.
//!
//! This module contains:
//! 1. **Errors:** The request-time [`CodecError`](error::CodecError) taxonomy,
//!    construction-time table conflicts and configuration errors.
//! 2. **Bits:** Field extraction, placement and sign-extension helpers.

/// Bit-field extraction, placement and sign extension.
pub mod bits;

/// Error types for translation, table construction and configuration.
pub mod error;
