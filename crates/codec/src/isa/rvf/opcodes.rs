//! RISC-V Floating-Point (F/D) Opcodes.

/// Floating-point load (FLW, FLD).
pub const OP_LOAD_FP: u32 = 0b0000111;

/// Floating-point store (FSW, FSD).
pub const OP_STORE_FP: u32 = 0b0100111;

/// Fused Multiply-Add.
pub const OP_FMADD: u32 = 0b1000011;

/// Fused Multiply-Subtract.
pub const OP_FMSUB: u32 = 0b1000111;

/// Fused Negative Multiply-Subtract.
pub const OP_FNMSUB: u32 = 0b1001011;

/// Fused Negative Multiply-Add.
pub const OP_FNMADD: u32 = 0b1001111;

/// Floating-point arithmetic, compare, convert and move.
pub const OP_FP: u32 = 0b1010011;
