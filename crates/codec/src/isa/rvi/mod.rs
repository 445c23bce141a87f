//! Base Integer Instruction Set (RV32I/RV64I/RV128I).
//!
//! Opcode and function-code constants shared by all three base widths; the
//! RV64 `*w` and RV128 `*d` word-size variants live under their own opcodes.

/// Function codes (funct3) for base integer instructions.
pub mod funct3;

/// Function codes (funct7/funct6) for base integer instructions.
pub mod funct7;

/// Major opcodes for base integer instructions.
pub mod opcodes;
