//! RISC-V Floating-Point Function Codes (funct3).
//!
//! For arithmetic instructions funct3 holds the rounding mode; for the
//! remaining operations it selects the variant.

/// Load/store width: word (FLW, FSW).
pub const WIDTH_W: u32 = 0b010;
/// Load/store width: doubleword (FLD, FSD).
pub const WIDTH_D: u32 = 0b011;

/// Sign Injection.
pub const FSGNJ: u32 = 0b000;
/// Sign Injection Negated.
pub const FSGNJN: u32 = 0b001;
/// Sign Injection XOR.
pub const FSGNJX: u32 = 0b010;

/// Minimum.
pub const FMIN: u32 = 0b000;
/// Maximum.
pub const FMAX: u32 = 0b001;

/// Less or Equal.
pub const FLE: u32 = 0b000;
/// Less Than.
pub const FLT: u32 = 0b001;
/// Equal.
pub const FEQ: u32 = 0b010;

/// Move to/from integer register.
pub const FMV: u32 = 0b000;
/// Classify.
pub const FCLASS: u32 = 0b001;
