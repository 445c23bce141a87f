//! Format codecs.
//!
//! One codec per word layout, behind the [`FormatCodec`] trait. A codec only
//! knows where each operand role lives in its layout ([`Slot`]); packing,
//! range checks, alignment, reserved values and unpacking are shared by the
//! trait's provided methods and driven by the descriptor.
//!
//! # Layouts
//!
//! * `base`: R, R4, I, S, B, U, J.
//! * `compressed`: CR, CI, CSS, CIW, CL, CS, CA, CB, CJ.

use std::fmt;

use crate::common::bits::{field, place};
use crate::common::error::CodecError;
use crate::config::Xlen;
use crate::isa::abi::RegisterFile;
use crate::isa::descriptor::{Constraint, InstructionDescriptor};
use crate::isa::format::{Format, Role};
use crate::isa::operand::{OperandValue, RoundingMode};

/// 32-bit base formats.
pub mod base;

/// 16-bit compressed formats.
pub mod compressed;

/// Lowest register index reachable through a 3-bit compressed field.
pub const NARROW_BASE: u8 = 8;

/// Highest register index reachable through a 3-bit compressed field.
pub const NARROW_LAST: u8 = 15;

/// Where an operand role lives in a layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Register field at bit `lo`; 3 bits (x8-x15) when `narrow`, else 5.
    Register {
        /// Lowest bit.
        lo: u32,
        /// 3-bit compressed register field.
        narrow: bool,
    },
    /// Plain unsigned field.
    Field {
        /// Lowest bit.
        lo: u32,
        /// Width in bits.
        width: u32,
    },
    /// Scattered per the descriptor's immediate layout.
    Immediate,
}

impl Slot {
    /// Word bits covered by this slot for the given descriptor.
    pub fn mask(self, descriptor: &InstructionDescriptor) -> Option<u32> {
        match self {
            Self::Register { lo, narrow } => Some(place(u32::MAX, lo, if narrow { 3 } else { 5 })),
            Self::Field { lo, width } => Some(place(u32::MAX, lo, width)),
            Self::Immediate => descriptor.imm.as_ref().map(|imm| imm.field_mask()),
        }
    }
}

/// Encoder/decoder for one word layout.
pub trait FormatCodec: fmt::Debug + Sync {
    /// The layout this codec implements.
    fn format(&self) -> Format;

    /// Slot of `role` in this layout, `None` if the layout has no such field.
    fn slot(&self, role: Role) -> Option<Slot>;

    /// Packs operand values into the descriptor's fixed bits.
    ///
    /// # Errors
    ///
    /// * [`CodecError::MalformedOperands`] when the values do not match the roles.
    /// * [`CodecError::RegisterNotEncodable`] for registers outside a narrow
    ///   field or reserved by the encoding.
    /// * [`CodecError::ImmediateOutOfRange`] / [`CodecError::MisalignedImmediate`]
    ///   for immediates that do not fit.
    fn encode(&self, descriptor: &InstructionDescriptor, operands: &[OperandValue], xlen: Xlen) -> Result<u32, CodecError> {
        if operands.len() != descriptor.operands.len() {
            return Err(malformed(
                descriptor,
                format!("expected {} operands, found {}", descriptor.operands.len(), operands.len()),
            ));
        }
        check_constraints(descriptor, operands)?;
        let mut word = descriptor.match_bits;
        for (role, value) in descriptor.operands.iter().zip(operands) {
            let slot = self.slot(*role).ok_or_else(|| missing_slot(descriptor, *role))?;
            word |= encode_operand(descriptor, *role, slot, *value, xlen)?;
        }
        Ok(word)
    }

    /// Unpacks operand values from a word already matched to `descriptor`.
    ///
    /// # Errors
    ///
    /// [`CodecError::UndecodableEncoding`] when the word carries a reserved
    /// operand value (reserved rounding mode, oversized shift, reserved
    /// register or zero immediate).
    fn decode(&self, descriptor: &InstructionDescriptor, word: u32, xlen: Xlen) -> Result<Vec<OperandValue>, CodecError> {
        let operands = descriptor
            .operands
            .iter()
            .map(|role| {
                let slot = self.slot(*role).ok_or_else(|| missing_slot(descriptor, *role))?;
                decode_operand(descriptor, *role, slot, word, xlen)
            })
            .collect::<Result<Vec<_>, _>>()?;
        check_constraints(descriptor, &operands).map_err(|_| undecodable(descriptor.format, word))?;
        Ok(operands)
    }
}

impl Format {
    /// Codec implementing this layout.
    pub fn codec(self) -> &'static dyn FormatCodec {
        match self {
            Self::R => &base::RType,
            Self::R4 => &base::R4Type,
            Self::I => &base::IType,
            Self::S => &base::SType,
            Self::B => &base::BType,
            Self::U => &base::UType,
            Self::J => &base::JType,
            Self::Cr => &compressed::CrType,
            Self::Ci => &compressed::CiType,
            Self::Css => &compressed::CssType,
            Self::Ciw => &compressed::CiwType,
            Self::Cl => &compressed::ClType,
            Self::Cs => &compressed::CsType,
            Self::Ca => &compressed::CaType,
            Self::Cb => &compressed::CbType,
            Self::Cj => &compressed::CjType,
        }
    }
}

/// Renders a word the way error messages show it: `0x` plus 4 or 8 digits.
pub fn render_word(format: Format, word: u32) -> String {
    if format.is_compressed() { format!("{word:#06x}") } else { format!("{word:#010x}") }
}

/// Error for a word that matches no descriptor or a reserved pattern.
pub fn undecodable(format: Format, word: u32) -> CodecError {
    CodecError::UndecodableEncoding { encoding: render_word(format, word) }
}

fn malformed(descriptor: &InstructionDescriptor, detail: String) -> CodecError {
    CodecError::MalformedOperands { mnemonic: descriptor.mnemonic.to_string(), detail }
}

fn missing_slot(descriptor: &InstructionDescriptor, role: Role) -> CodecError {
    malformed(descriptor, format!("{} format has no {role} field", descriptor.format))
}

fn out_of_range(descriptor: &InstructionDescriptor, value: i64, min: i64, max: i64) -> CodecError {
    CodecError::ImmediateOutOfRange {
        mnemonic: descriptor.mnemonic.to_string(),
        value,
        expected: format!("{min}..={max}"),
    }
}

/// Rejects operand values the encoding reserves.
///
/// # Errors
///
/// [`CodecError::RegisterNotEncodable`] or [`CodecError::ImmediateOutOfRange`].
pub fn check_constraints(descriptor: &InstructionDescriptor, operands: &[OperandValue]) -> Result<(), CodecError> {
    for constraint in descriptor.constraints {
        match *constraint {
            Constraint::RegisterNot(role, reserved) => {
                let value = descriptor.position(role).and_then(|i| operands.get(i));
                let name = match value {
                    Some(OperandValue::Register(index)) if *index == reserved => format!("x{reserved}"),
                    Some(OperandValue::FloatRegister(index)) if *index == reserved => format!("f{reserved}"),
                    _ => continue,
                };
                return Err(CodecError::RegisterNotEncodable {
                    mnemonic: descriptor.mnemonic.to_string(),
                    reason: format!("{role} = {name} is a reserved encoding"),
                    register: name,
                });
            }
            Constraint::NonZeroImmediate => {
                let value = descriptor.position(Role::Imm).and_then(|i| operands.get(i));
                if value == Some(&OperandValue::Immediate(0)) {
                    return Err(CodecError::ImmediateOutOfRange {
                        mnemonic: descriptor.mnemonic.to_string(),
                        value: 0,
                        expected: "a non-zero value".to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

fn register_index(role: Role, value: OperandValue) -> Option<u8> {
    match (role.register_file()?, value) {
        (RegisterFile::Integer, OperandValue::Register(index)) | (RegisterFile::Float, OperandValue::FloatRegister(index)) => {
            Some(index)
        }
        _ => None,
    }
}

fn encode_operand(
    descriptor: &InstructionDescriptor,
    role: Role,
    slot: Slot,
    value: OperandValue,
    xlen: Xlen,
) -> Result<u32, CodecError> {
    let mismatch = || malformed(descriptor, format!("{role} cannot take a {}", value.kind()));
    match slot {
        Slot::Register { lo, narrow } => {
            let index = register_index(role, value).ok_or_else(mismatch)?;
            let prefix = if role.register_file() == Some(RegisterFile::Float) { 'f' } else { 'x' };
            if narrow {
                if !(NARROW_BASE..=NARROW_LAST).contains(&index) {
                    return Err(CodecError::RegisterNotEncodable {
                        mnemonic: descriptor.mnemonic.to_string(),
                        register: format!("{prefix}{index}"),
                        reason: format!("compressed {role} field holds {prefix}8-{prefix}15 only"),
                    });
                }
                Ok(place(u32::from(index - NARROW_BASE), lo, 3))
            } else if index > 31 {
                Err(CodecError::OutOfRange { token: format!("{prefix}{index}"), min: 0, max: 31 })
            } else {
                Ok(place(u32::from(index), lo, 5))
            }
        }
        Slot::Field { lo, width } => {
            let raw = match (role, value) {
                (Role::Zimm, OperandValue::Immediate(v)) => {
                    if !(0..=31).contains(&v) {
                        return Err(out_of_range(descriptor, v, 0, 31));
                    }
                    v as u32
                }
                (Role::Rm, OperandValue::RoundingMode(mode)) => mode.bits(),
                (Role::Pred | Role::Succ, OperandValue::FenceSet(set)) => {
                    if set > 0b1111 {
                        return Err(out_of_range(descriptor, i64::from(set), 0, 0b1111));
                    }
                    u32::from(set)
                }
                _ => return Err(mismatch()),
            };
            Ok(place(raw, lo, width))
        }
        Slot::Immediate => {
            let layout = descriptor.imm.ok_or_else(|| missing_slot(descriptor, role))?;
            let v = match (role, value) {
                (Role::Imm, OperandValue::Immediate(v)) => v,
                (Role::Shamt, OperandValue::ShiftAmount(s)) => i64::from(s),
                (Role::Csr, OperandValue::Csr(addr)) => i64::from(addr),
                _ => return Err(mismatch()),
            };
            let (min, max) = layout.range(xlen);
            if !(min..=max).contains(&v) {
                return Err(out_of_range(descriptor, v, min, max));
            }
            if v % i64::from(layout.align) != 0 {
                return Err(CodecError::MisalignedImmediate {
                    mnemonic: descriptor.mnemonic.to_string(),
                    value: v,
                    alignment: layout.align,
                });
            }
            Ok(layout.scatter(v))
        }
    }
}

fn decode_operand(
    descriptor: &InstructionDescriptor,
    role: Role,
    slot: Slot,
    word: u32,
    xlen: Xlen,
) -> Result<OperandValue, CodecError> {
    let reserved = || undecodable(descriptor.format, word);
    match slot {
        Slot::Register { lo, narrow } => {
            let index = if narrow { field(word, lo, 3) as u8 + NARROW_BASE } else { field(word, lo, 5) as u8 };
            match role.register_file() {
                Some(RegisterFile::Integer) => Ok(OperandValue::Register(index)),
                Some(RegisterFile::Float) => Ok(OperandValue::FloatRegister(index)),
                None => Err(missing_slot(descriptor, role)),
            }
        }
        Slot::Field { lo, width } => {
            let raw = field(word, lo, width);
            match role {
                Role::Zimm => Ok(OperandValue::Immediate(i64::from(raw))),
                Role::Rm => RoundingMode::from_bits(raw).map(OperandValue::RoundingMode).ok_or_else(reserved),
                Role::Pred | Role::Succ => Ok(OperandValue::FenceSet(raw as u8)),
                _ => Err(missing_slot(descriptor, role)),
            }
        }
        Slot::Immediate => {
            let layout = descriptor.imm.ok_or_else(|| missing_slot(descriptor, role))?;
            let v = layout.gather(word);
            match role {
                Role::Imm => Ok(OperandValue::Immediate(v)),
                Role::Csr => Ok(OperandValue::Csr(v as u16)),
                Role::Shamt => {
                    let (_, max) = layout.range(xlen);
                    if v > max {
                        return Err(reserved());
                    }
                    Ok(OperandValue::ShiftAmount(v as u8))
                }
                _ => Err(missing_slot(descriptor, role)),
            }
        }
    }
}
