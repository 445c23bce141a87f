//! Compressed Instruction Extension (C).
//!
//! 16-bit encodings selected by a 2-bit quadrant (bits 1-0) and a 3-bit
//! funct3 (bits 15-13), with short funct fields inside quadrants 1 and 2.
//! Several funct3 slots carry a different instruction per XLEN.

/// Quadrant and function-code constants for compressed instructions.
pub mod constants;
