//! 32-bit base formats.
//!
//! Register fields sit at fixed positions in every base format: rd at 11-7,
//! rs1 at 19-15, rs2 at 24-20 and rs3 at 31-27. Float roles share the
//! integer positions.

use crate::isa::codec::{FormatCodec, Slot};
use crate::isa::format::{Format, Role};

const fn wide(lo: u32) -> Option<Slot> {
    Some(Slot::Register { lo, narrow: false })
}

/// Register-register layout (integer ALU, float arithmetic and moves).
#[derive(Debug)]
pub struct RType;

impl FormatCodec for RType {
    fn format(&self) -> Format {
        Format::R
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Frd => wide(7),
            Role::Rs1 | Role::Frs1 => wide(15),
            Role::Rs2 | Role::Frs2 => wide(20),
            Role::Rm => Some(Slot::Field { lo: 12, width: 3 }),
            _ => None,
        }
    }
}

/// Four-register layout (fused multiply-add).
#[derive(Debug)]
pub struct R4Type;

impl FormatCodec for R4Type {
    fn format(&self) -> Format {
        Format::R4
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Frs3 => wide(27),
            other => RType.slot(other),
        }
    }
}

/// Immediate layout; also hosts CSR access, fences and system instructions.
#[derive(Debug)]
pub struct IType;

impl FormatCodec for IType {
    fn format(&self) -> Format {
        Format::I
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Frd => wide(7),
            Role::Rs1 => wide(15),
            Role::Imm | Role::Shamt | Role::Csr => Some(Slot::Immediate),
            Role::Zimm => Some(Slot::Field { lo: 15, width: 5 }),
            Role::Pred => Some(Slot::Field { lo: 24, width: 4 }),
            Role::Succ => Some(Slot::Field { lo: 20, width: 4 }),
            _ => None,
        }
    }
}

/// Store layout.
#[derive(Debug)]
pub struct SType;

impl FormatCodec for SType {
    fn format(&self) -> Format {
        Format::S
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rs1 => wide(15),
            Role::Rs2 | Role::Frs2 => wide(20),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Conditional branch layout.
#[derive(Debug)]
pub struct BType;

impl FormatCodec for BType {
    fn format(&self) -> Format {
        Format::B
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rs1 => wide(15),
            Role::Rs2 => wide(20),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Upper-immediate layout.
#[derive(Debug)]
pub struct UType;

impl FormatCodec for UType {
    fn format(&self) -> Format {
        Format::U
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd => wide(7),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Jump layout.
#[derive(Debug)]
pub struct JType;

impl FormatCodec for JType {
    fn format(&self) -> Format {
        Format::J
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        UType.slot(role)
    }
}
