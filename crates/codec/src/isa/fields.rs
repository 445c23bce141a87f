//! Fixed field positions of RISC-V instruction words.
//!
//! Provides bit extraction for the fields every format shares: the opcode,
//! funct3 and funct7 of 32-bit words and the quadrant and funct3 of
//! compressed halfwords.

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;
/// Bit mask for the compressed quadrant (bits 0-1).
pub const QUADRANT_MASK: u32 = 0x3;
/// Low two bits of every 32-bit instruction.
pub const WIDE_QUADRANT: u32 = 0b11;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    fn opcode(&self) -> u32;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    fn funct7(&self) -> u32;

    /// Extracts the compressed quadrant (bits 0-1).
    fn quadrant(&self) -> u32;

    /// Extracts the compressed funct3 field (bits 13-15).
    fn c_funct3(&self) -> u32;

    /// Returns `true` when the low two bits mark a 32-bit instruction.
    fn is_wide(&self) -> bool {
        self.quadrant() == WIDE_QUADRANT
    }
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn quadrant(&self) -> u32 {
        self & QUADRANT_MASK
    }

    #[inline(always)]
    fn c_funct3(&self) -> u32 {
        (self >> 13) & FUNCT3_MASK
    }
}
