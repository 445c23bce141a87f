//! Single (F) and Double (D) Precision Floating-Point Extensions.
//!
//! Both extensions share opcodes; the 2-bit `fmt` field in bits 26-25 (the
//! low bits of funct7) selects single (`00`) or double (`01`) precision.

/// Function codes (funct3) for floating-point instructions.
pub mod funct3;

/// Function codes (funct7) for floating-point instructions.
pub mod funct7;

/// Major opcodes for floating-point instructions.
pub mod opcodes;
