//! 16-bit compressed formats.
//!
//! Full register fields sit at 11-7 (rd/rs1) and 6-2 (rs2). The 3-bit
//! fields of CIW, CL, CS, CA and CB sit at 9-7 (rd'/rs1') and 4-2
//! (rd'/rs2') and address x8-x15 (f8-f15).

use crate::isa::codec::{FormatCodec, Slot};
use crate::isa::format::{Format, Role};

const fn full(lo: u32) -> Option<Slot> {
    Some(Slot::Register { lo, narrow: false })
}

const fn narrow(lo: u32) -> Option<Slot> {
    Some(Slot::Register { lo, narrow: true })
}

/// Compressed register layout (C.JR, C.JALR, C.MV, C.ADD).
#[derive(Debug)]
pub struct CrType;

impl FormatCodec for CrType {
    fn format(&self) -> Format {
        Format::Cr
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Rs1 => full(7),
            Role::Rs2 => full(2),
            _ => None,
        }
    }
}

/// Compressed immediate layout (C.LI, C.ADDI, C.SLLI, C.LWSP, ...).
#[derive(Debug)]
pub struct CiType;

impl FormatCodec for CiType {
    fn format(&self) -> Format {
        Format::Ci
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Frd => full(7),
            Role::Imm | Role::Shamt => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed stack-relative store layout.
#[derive(Debug)]
pub struct CssType;

impl FormatCodec for CssType {
    fn format(&self) -> Format {
        Format::Css
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rs2 | Role::Frs2 => full(2),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed wide-immediate layout (C.ADDI4SPN).
#[derive(Debug)]
pub struct CiwType;

impl FormatCodec for CiwType {
    fn format(&self) -> Format {
        Format::Ciw
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd => narrow(2),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed load layout.
#[derive(Debug)]
pub struct ClType;

impl FormatCodec for ClType {
    fn format(&self) -> Format {
        Format::Cl
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Frd => narrow(2),
            Role::Rs1 => narrow(7),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed store layout.
#[derive(Debug)]
pub struct CsType;

impl FormatCodec for CsType {
    fn format(&self) -> Format {
        Format::Cs
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rs2 | Role::Frs2 => narrow(2),
            Role::Rs1 => narrow(7),
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed arithmetic layout; rd' doubles as the first source.
#[derive(Debug)]
pub struct CaType;

impl FormatCodec for CaType {
    fn format(&self) -> Format {
        Format::Ca
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd => narrow(7),
            Role::Rs2 => narrow(2),
            _ => None,
        }
    }
}

/// Compressed branch layout; also C.SRLI, C.SRAI and C.ANDI.
#[derive(Debug)]
pub struct CbType;

impl FormatCodec for CbType {
    fn format(&self) -> Format {
        Format::Cb
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Rd | Role::Rs1 => narrow(7),
            Role::Imm | Role::Shamt => Some(Slot::Immediate),
            _ => None,
        }
    }
}

/// Compressed jump layout.
#[derive(Debug)]
pub struct CjType;

impl FormatCodec for CjType {
    fn format(&self) -> Format {
        Format::Cj
    }

    fn slot(&self, role: Role) -> Option<Slot> {
        match role {
            Role::Imm => Some(Slot::Immediate),
            _ => None,
        }
    }
}
