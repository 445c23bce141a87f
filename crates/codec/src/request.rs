//! Request/response boundary.
//!
//! One input line becomes exactly one [`Response`]. Lines made of binary
//! digits or `0x` hex are disassembled; everything else is assembled.

use serde::{Deserialize, Serialize};

use crate::common::error::CodecError;
use crate::config::Config;
use crate::instruction::Instruction;

/// How an input line is interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    /// Assembly text.
    Text,
    /// `0`/`1` digits, optionally `0b`-prefixed with `_` separators.
    Binary,
    /// `0x` followed by hex digits.
    Hex,
}

/// Classifies one trimmed input line.
pub fn classify(line: &str) -> InputKind {
    let line = line.trim();
    if let Some(digits) = line.strip_prefix("0x").or_else(|| line.strip_prefix("0X"))
        && !digits.is_empty()
        && digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return InputKind::Hex;
    }
    let body = line.strip_prefix("0b").or_else(|| line.strip_prefix("0B")).unwrap_or(line);
    if body.chars().any(|c| c == '0' || c == '1') && body.chars().all(|c| matches!(c, '0' | '1' | '_')) {
        return InputKind::Binary;
    }
    InputKind::Text
}

/// Fields printed for a successful translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// `{"asm": ..., "hex": ...}`.
    #[default]
    Full,
    /// `{"hex": ...}` only.
    HexOnly,
}

/// JSON-shaped result of one input line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Response {
    /// Successful translation.
    Translated {
        /// Canonical assembly.
        asm: String,
        /// Lowercase hex word.
        hex: String,
    },
    /// Successful translation in hex-only mode.
    Hex {
        /// Lowercase hex word.
        hex: String,
    },
    /// Failed request.
    Failed {
        /// One-line error message.
        error: String,
    },
}

impl Response {
    /// Builds the response for a finished request.
    pub fn new(result: Result<Instruction, CodecError>, mode: OutputMode) -> Self {
        match (result, mode) {
            (Ok(inst), OutputMode::Full) => Self::Translated { asm: inst.asm().to_string(), hex: inst.hex() },
            (Ok(inst), OutputMode::HexOnly) => Self::Hex { hex: inst.hex() },
            (Err(err), _) => Self::Failed { error: err.to_string() },
        }
    }

    /// Returns `true` for [`Response::Failed`].
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Serializes to a single JSON line (without the newline).
    ///
    /// # Errors
    ///
    /// Propagates [`serde_json::Error`]; plain string fields never fail in
    /// practice.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Translates one line in whichever direction [`classify`] selects.
///
/// # Errors
///
/// Any request-time [`CodecError`].
pub fn translate(line: &str, config: &Config) -> Result<Instruction, CodecError> {
    let line = line.trim();
    match classify(line) {
        InputKind::Text => Instruction::from_text(line, config),
        InputKind::Binary => Instruction::from_binary(line, config),
        InputKind::Hex => Instruction::from_hex(line, config),
    }
}

/// Translates one line into its response.
pub fn translate_line(line: &str, config: &Config, mode: OutputMode) -> Response {
    Response::new(translate(line, config), mode)
}
