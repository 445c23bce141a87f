//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Integer registers are written `x0`..`x31` and float registers `f0`..`f31`.
//! With ABI mode enabled the calling-convention aliases (`zero`, `ra`, `sp`,
//! `a0`, `fa0`, ...) are accepted on input and used for rendering.

use std::borrow::Cow;

use crate::common::error::CodecError;

/// Register x0 (zero register, always zero).
pub const REG_ZERO: u8 = 0;
/// Register x1 (return address, ra).
pub const REG_RA: u8 = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: u8 = 2;

/// Number of registers in each file.
pub const REG_COUNT: u8 = 32;

/// ABI register names for x0–x31.
const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// ABI register names for f0–f31.
const FREG_NAMES: [&str; 32] = [
    "ft0", "ft1", "ft2", "ft3", "ft4", "ft5", "ft6", "ft7", "fs0", "fs1", "fa0", "fa1", "fa2",
    "fa3", "fa4", "fa5", "fa6", "fa7", "fs2", "fs3", "fs4", "fs5", "fs6", "fs7", "fs8", "fs9",
    "fs10", "fs11", "ft8", "ft9", "ft10", "ft11",
];

/// Alternate name of s0 (frame pointer).
const FRAME_POINTER: &str = "fp";

/// Integer or floating-point register file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterFile {
    /// `x0`..`x31`.
    Integer,
    /// `f0`..`f31`.
    Float,
}

impl RegisterFile {
    const fn prefix(self) -> char {
        match self {
            Self::Integer => 'x',
            Self::Float => 'f',
        }
    }

    const fn abi_names(self) -> &'static [&'static str; 32] {
        match self {
            Self::Integer => &REG_NAMES,
            Self::Float => &FREG_NAMES,
        }
    }

    fn abi_index(self, name: &str) -> Option<u8> {
        if self == Self::Integer && name == FRAME_POINTER {
            return Some(8);
        }
        self.abi_names().iter().position(|n| *n == name).map(|i| i as u8)
    }
}

/// Resolves an integer register token.
///
/// # Errors
///
/// See [`resolve_in`].
pub fn resolve_register(token: &str, abi: bool) -> Result<u8, CodecError> {
    resolve_in(RegisterFile::Integer, token, abi)
}

/// Resolves a floating-point register token.
///
/// # Errors
///
/// See [`resolve_in`].
pub fn resolve_float_register(token: &str, abi: bool) -> Result<u8, CodecError> {
    resolve_in(RegisterFile::Float, token, abi)
}

/// Resolves a register token in the given file.
///
/// # Errors
///
/// * [`CodecError::OutOfRange`] for `x32` and beyond.
/// * [`CodecError::Syntax`] for anything that is not a register name, and for
///   ABI aliases while ABI mode is off.
pub fn resolve_in(file: RegisterFile, token: &str, abi: bool) -> Result<u8, CodecError> {
    let name = token.to_ascii_lowercase();
    if let Some(digits) = name.strip_prefix(file.prefix())
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        return digits.parse::<u8>().ok().filter(|n| *n < REG_COUNT).ok_or_else(|| CodecError::OutOfRange {
            token: token.to_string(),
            min: 0,
            max: i64::from(REG_COUNT - 1),
        });
    }
    match file.abi_index(&name) {
        Some(index) if abi => Ok(index),
        Some(_) => Err(CodecError::Syntax {
            token: token.to_string(),
            reason: "ABI register names require ABI mode".to_string(),
        }),
        None => Err(CodecError::Syntax {
            token: token.to_string(),
            reason: match file {
                RegisterFile::Integer => "expected an integer register".to_string(),
                RegisterFile::Float => "expected a floating-point register".to_string(),
            },
        }),
    }
}

/// Renders a register index: ABI alias when `abi` is set, else `x<N>`/`f<N>`.
pub fn register_name(file: RegisterFile, index: u8, abi: bool) -> Cow<'static, str> {
    match file.abi_names().get(usize::from(index)) {
        Some(name) if abi => Cow::Borrowed(*name),
        _ => Cow::Owned(format!("{}{index}", file.prefix())),
    }
}
