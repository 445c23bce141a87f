//! Raw instruction words.

use std::fmt;

use crate::common::error::CodecError;
use crate::isa::codec::render_word;
use crate::isa::fields::{InstructionBits, WIDE_QUADRANT};
use crate::isa::format::Format;

/// An instruction word of either length.
///
/// RISC-V instruction length is independent of XLEN: compressed halfwords
/// are 16 bits and every other instruction is 32 bits on all widths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Encoding {
    /// 16-bit compressed halfword; low bits are never `11`.
    Compressed(u16),
    /// 32-bit word; low bits are always `11`.
    Standard(u32),
}

impl Encoding {
    /// Wraps a raw word of `len_bits` (16 or 32) bits.
    ///
    /// # Errors
    ///
    /// * [`CodecError::Syntax`] for other lengths or words wider than `len_bits`.
    /// * [`CodecError::UndecodableEncoding`] when the low two bits contradict
    ///   the length (`11` on a halfword, anything else on a word).
    pub fn from_word(word: u32, len_bits: u32) -> Result<Self, CodecError> {
        match len_bits {
            16 => {
                let half = u16::try_from(word).map_err(|_| CodecError::Syntax {
                    token: format!("{word:#x}"),
                    reason: "does not fit in 16 bits".to_string(),
                })?;
                if word.is_wide() {
                    return Err(CodecError::UndecodableEncoding { encoding: render_word(Format::Ci, word) });
                }
                Ok(Self::Compressed(half))
            }
            32 => {
                if word.quadrant() != WIDE_QUADRANT {
                    return Err(CodecError::UndecodableEncoding { encoding: render_word(Format::I, word) });
                }
                Ok(Self::Standard(word))
            }
            other => Err(CodecError::Syntax {
                token: other.to_string(),
                reason: "instruction length must be 16 or 32 bits".to_string(),
            }),
        }
    }

    /// The word, zero-extended to 32 bits.
    pub const fn word(self) -> u32 {
        match self {
            Self::Compressed(half) => half as u32,
            Self::Standard(word) => word,
        }
    }

    /// Returns `true` for a 16-bit halfword.
    pub const fn is_compressed(self) -> bool {
        matches!(self, Self::Compressed(_))
    }

    /// Lowercase hex without prefix: 4 digits for halfwords, 8 for words.
    pub fn hex(self) -> String {
        match self {
            Self::Compressed(half) => format!("{half:04x}"),
            Self::Standard(word) => format!("{word:08x}"),
        }
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}
