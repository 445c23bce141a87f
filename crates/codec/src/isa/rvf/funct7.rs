//! RISC-V Floating-Point Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) encodes the operation and format. Single
//! precision constants carry format bits `00`; double precision ones `01`.

/// Format field (bits 26-25) for single precision.
pub const FMT_S: u32 = 0b00;
/// Format field (bits 26-25) for double precision.
pub const FMT_D: u32 = 0b01;

/// Floating-point Add (Single).
pub const FADD_S: u32 = 0b0000000;
/// Floating-point Subtract (Single).
pub const FSUB_S: u32 = 0b0000100;
/// Floating-point Multiply (Single).
pub const FMUL_S: u32 = 0b0001000;
/// Floating-point Divide (Single).
pub const FDIV_S: u32 = 0b0001100;
/// Floating-point Square Root (Single).
pub const FSQRT_S: u32 = 0b0101100;
/// Floating-point Sign Injection (Single).
pub const FSGNJ_S: u32 = 0b0010000;
/// Floating-point Min/Max (Single).
pub const FMIN_MAX_S: u32 = 0b0010100;
/// Floating-point Compare (Single).
pub const FCMP_S: u32 = 0b1010000;
/// Convert Float to Integer (Single).
pub const FCVT_W_S: u32 = 0b1100000;
/// Convert Integer to Float (Single).
pub const FCVT_S_W: u32 = 0b1101000;
/// Floating-point Classify / Move to Integer (Single).
pub const FCLASS_MV_X_S: u32 = 0b1110000;
/// Move Integer to Float (Single).
pub const FMV_S_X: u32 = 0b1111000;
/// Convert Double to Single.
pub const FCVT_S_D: u32 = 0b0100000;

/// Floating-point Add (Double).
pub const FADD_D: u32 = 0b0000001;
/// Floating-point Subtract (Double).
pub const FSUB_D: u32 = 0b0000101;
/// Floating-point Multiply (Double).
pub const FMUL_D: u32 = 0b0001001;
/// Floating-point Divide (Double).
pub const FDIV_D: u32 = 0b0001101;
/// Floating-point Square Root (Double).
pub const FSQRT_D: u32 = 0b0101101;
/// Floating-point Sign Injection (Double).
pub const FSGNJ_D: u32 = 0b0010001;
/// Floating-point Min/Max (Double).
pub const FMIN_MAX_D: u32 = 0b0010101;
/// Floating-point Compare (Double).
pub const FCMP_D: u32 = 0b1010001;
/// Convert Float to Integer (Double).
pub const FCVT_W_D: u32 = 0b1100001;
/// Convert Integer to Float (Double).
pub const FCVT_D_W: u32 = 0b1101001;
/// Floating-point Classify / Move to Integer (Double).
pub const FCLASS_MV_X_D: u32 = 0b1110001;
/// Move Integer to Float (Double).
pub const FMV_D_X: u32 = 0b1111001;
/// Convert Single to Double.
pub const FCVT_D_S: u32 = 0b0100001;
