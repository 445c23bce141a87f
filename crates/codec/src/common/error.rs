//! Error definitions for the translator.
//!
//! This module defines three error families:
//! 1. **Request errors:** [`CodecError`], returned as a value by every
//!    translation and rendered as a one-line message.
//! 2. **Table conflicts:** [`TableConflictError`], raised only while the
//!    descriptor table is built; fatal for the driver.
//! 3. **Configuration errors:** [`ConfigError`], raised while loading a cfg
//!    or JSON configuration.

use std::io;

use thiserror::Error;

use crate::config::Xlen;

/// Failure of a single translation request.
///
/// Every variant carries the mnemonic and/or the offending token so the
/// message can be shown to a user without further context.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// The mnemonic is not in the descriptor table or the pseudo-instruction set.
    #[error("unknown mnemonic `{mnemonic}`")]
    UnknownMnemonic {
        /// Lowercased mnemonic as written.
        mnemonic: String,
    },

    /// Operand count or kind does not match the instruction's operand roles.
    #[error("malformed operands for `{mnemonic}`: {detail}")]
    MalformedOperands {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// What was expected and what was found.
        detail: String,
    },

    /// The operand text or binary input cannot be tokenized.
    #[error("syntax error at `{token}`: {reason}")]
    Syntax {
        /// Offending token.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },

    /// A register or CSR numeral is outside its namespace.
    #[error("`{token}` is out of range (expected {min}..={max})")]
    OutOfRange {
        /// Offending token.
        token: String,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// A symbolic CSR name is not in the CSR table.
    #[error("unknown CSR `{token}`")]
    UnknownCsr {
        /// Offending token.
        token: String,
    },

    /// An immediate does not fit its field or hits a reserved zero encoding.
    #[error("immediate {value} out of range for `{mnemonic}` (expected {expected})")]
    ImmediateOutOfRange {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Rejected value.
        value: i64,
        /// Accepted range, e.g. `-2048..=2047`.
        expected: String,
    },

    /// A branch or jump offset is not a multiple of its alignment.
    #[error("immediate {value} for `{mnemonic}` must be a multiple of {alignment}")]
    MisalignedImmediate {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Rejected value.
        value: i64,
        /// Required alignment in bytes.
        alignment: u32,
    },

    /// A register cannot be placed in the instruction's register field.
    #[error("register `{register}` cannot be encoded by `{mnemonic}`: {reason}")]
    RegisterNotEncodable {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Register as rendered (`x3`, `f20`).
        register: String,
        /// Why the field rejects it.
        reason: String,
    },

    /// The mnemonic exists, but not at the configured ISA width.
    #[error("`{mnemonic}` is not available on {isa}")]
    UnsupportedOnIsa {
        /// Mnemonic being assembled.
        mnemonic: String,
        /// Configured (fixed) ISA width.
        isa: Xlen,
    },

    /// No descriptor matches the word, or it matches a reserved pattern.
    #[error("undecodable encoding {encoding}")]
    UndecodableEncoding {
        /// The word as lowercase hex with `0x` prefix.
        encoding: String,
    },

    /// The descriptor table could not be built.
    #[error(transparent)]
    TableConflict(#[from] TableConflictError),
}

/// Two descriptors (or a descriptor and its own operand fields) collide.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("descriptor table conflict between `{first}` and `{second}`: {reason}")]
pub struct TableConflictError {
    /// First mnemonic involved.
    pub first: String,
    /// Second mnemonic involved (equal to `first` for self-overlaps).
    pub second: String,
    /// Description of the collision.
    pub reason: String,
}

/// Failure to load the translator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("cannot read config file {path}: {source}")]
    Io {
        /// Path as given.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// A recognised key carries a value of the wrong shape.
    #[error("invalid value for {key}: `{value}` (expected {expected})")]
    InvalidValue {
        /// Configuration key (`ISA`, `ABI`).
        key: String,
        /// Offending value as written.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },

    /// The JSON form failed to parse.
    #[error("malformed JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
