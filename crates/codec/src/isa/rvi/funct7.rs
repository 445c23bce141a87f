//! RISC-V Base Integer (I) Function Codes (funct7 / funct6).
//!
//! The `funct7` field (bits 31-25) selects the alternate encoding of a
//! register-register operation (e.g., ADD vs SUB). Immediate shifts reuse the
//! top bits of the immediate: 5 bits (31-27) when the shift amount may be 7
//! bits wide, 6 bits (31-26) for the RV128 `*d` shifts and 7 bits for the
//! `*w` shifts.

/// Default function code (ADD, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Subtract function code (SUB).
pub const SUB: u32 = 0b0100000;

/// Shift Right Arithmetic function code (SRA).
pub const SRA: u32 = 0b0100000;

/// Logical right shift, bits 31-27 of SLLI/SRLI.
pub const SHIFT_LOGICAL_5: u32 = 0b00000;

/// Arithmetic right shift, bits 31-27 of SRAI.
pub const SHIFT_ARITH_5: u32 = 0b01000;

/// Logical shift, bits 31-26 of SLLID/SRLID.
pub const SHIFT_LOGICAL_6: u32 = 0b000000;

/// Arithmetic right shift, bits 31-26 of SRAID.
pub const SHIFT_ARITH_6: u32 = 0b010000;
