//! Encoding formats, operand roles and immediate bit layouts.
//!
//! A [`Format`] names a word layout; the layout's register and field slots
//! are supplied by its codec (see [`crate::isa::codec`]). Immediates are
//! described separately by an [`ImmLayout`] because one format hosts several
//! scatter patterns (e.g. the CI loads at different scales).

use std::fmt;

use crate::common::bits::{field, low_mask, place, sign_extend};
use crate::config::Xlen;
use crate::isa::abi::RegisterFile;

/// Word layout of an instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Register-register.
    R,
    /// Four-register (fused multiply-add).
    R4,
    /// Register-immediate, loads, JALR, CSR, fences and system.
    I,
    /// Store.
    S,
    /// Conditional branch.
    B,
    /// Upper immediate.
    U,
    /// Jump.
    J,
    /// Compressed register.
    Cr,
    /// Compressed immediate.
    Ci,
    /// Compressed stack-relative store.
    Css,
    /// Compressed wide immediate.
    Ciw,
    /// Compressed load.
    Cl,
    /// Compressed store.
    Cs,
    /// Compressed arithmetic.
    Ca,
    /// Compressed branch / arithmetic immediate.
    Cb,
    /// Compressed jump.
    Cj,
}

impl Format {
    /// Returns `true` for the 16-bit formats.
    pub const fn is_compressed(self) -> bool {
        matches!(
            self,
            Self::Cr | Self::Ci | Self::Css | Self::Ciw | Self::Cl | Self::Cs | Self::Ca | Self::Cb | Self::Cj
        )
    }

    /// Bits covered by an instruction of this format.
    pub const fn word_mask(self) -> u32 {
        if self.is_compressed() { 0xFFFF } else { u32::MAX }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::R => "R",
            Self::R4 => "R4",
            Self::I => "I",
            Self::S => "S",
            Self::B => "B",
            Self::U => "U",
            Self::J => "J",
            Self::Cr => "CR",
            Self::Ci => "CI",
            Self::Css => "CSS",
            Self::Ciw => "CIW",
            Self::Cl => "CL",
            Self::Cs => "CS",
            Self::Ca => "CA",
            Self::Cb => "CB",
            Self::Cj => "CJ",
        };
        f.write_str(name)
    }
}

/// What an operand means, independent of where its bits go.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// Integer destination register.
    Rd,
    /// First integer source register (or base address).
    Rs1,
    /// Second integer source register (or store data).
    Rs2,
    /// Float destination register.
    Frd,
    /// First float source register.
    Frs1,
    /// Second float source register (or store data).
    Frs2,
    /// Third float source register (fused multiply-add).
    Frs3,
    /// Immediate or offset.
    Imm,
    /// Shift amount.
    Shamt,
    /// CSR address.
    Csr,
    /// 5-bit unsigned CSR immediate in the rs1 slot.
    Zimm,
    /// Rounding mode; optional when trailing.
    Rm,
    /// Fence predecessor set.
    Pred,
    /// Fence successor set.
    Succ,
}

impl Role {
    /// Register file of a register role, `None` for the others.
    pub const fn register_file(self) -> Option<RegisterFile> {
        match self {
            Self::Rd | Self::Rs1 | Self::Rs2 => Some(RegisterFile::Integer),
            Self::Frd | Self::Frs1 | Self::Frs2 | Self::Frs3 => Some(RegisterFile::Float),
            _ => None,
        }
    }

    /// Lowercase role name used in messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rd => "rd",
            Self::Rs1 => "rs1",
            Self::Rs2 => "rs2",
            Self::Frd => "frd",
            Self::Frs1 => "frs1",
            Self::Frs2 => "frs2",
            Self::Frs3 => "frs3",
            Self::Imm => "imm",
            Self::Shamt => "shamt",
            Self::Csr => "csr",
            Self::Zimm => "zimm",
            Self::Rm => "rm",
            Self::Pred => "pred",
            Self::Succ => "succ",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How the operands are written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Syntax {
    /// Comma-separated in role order.
    Plain,
    /// The last two roles (offset, base) are written `offset(base)`.
    Memory,
}

/// Signedness of an immediate field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sign {
    /// Two's complement; decoded with sign extension.
    Signed,
    /// Zero-extended.
    Unsigned,
    /// Upper immediates: negative input accepted, canonical form unsigned.
    Upper,
}

/// Width policy for shift amounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShiftWidth {
    /// Base shifts: 5, 6 or 7 bits for RV32, RV64, RV128.
    Xlen,
    /// `*w` shifts: always 5 bits.
    Word,
    /// RV128 `*d` shifts: always 6 bits.
    Double,
    /// Compressed shifts: 5 bits on RV32, 6 otherwise.
    Compressed,
}

impl ShiftWidth {
    /// Number of shift-amount bits at the given width.
    pub const fn bits(self, xlen: Xlen) -> u32 {
        match (self, xlen) {
            (Self::Word, _) | (Self::Xlen | Self::Compressed, Xlen::Rv32) => 5,
            (Self::Double, _) | (Self::Xlen | Self::Compressed, Xlen::Rv64) | (Self::Compressed, Xlen::Rv128) => 6,
            (Self::Xlen, Xlen::Rv128) => 7,
        }
    }
}

/// A contiguous run of immediate bits.
///
/// `width` bits of the value starting at bit `value_lo` live in the word at
/// bit `lo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    /// Lowest bit position in the instruction word.
    pub lo: u32,
    /// Number of bits.
    pub width: u32,
    /// Lowest bit position in the immediate value.
    pub value_lo: u32,
}

const fn seg(lo: u32, width: u32, value_lo: u32) -> Segment {
    Segment { lo, width, value_lo }
}

/// Scatter pattern and range of an immediate.
///
/// `bits` is the width of the written value, including implicit low zero
/// bits such as bit 0 of a branch offset.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImmLayout {
    /// Bit runs, in any order.
    pub segments: &'static [Segment],
    /// Width of the value.
    pub bits: u32,
    /// Signedness.
    pub sign: Sign,
    /// Required divisor of the value (2 for branch and jump offsets).
    pub align: u32,
    /// Shift-amount policy; overrides `bits` for the range check.
    pub shift: Option<ShiftWidth>,
}

impl ImmLayout {
    const fn new(segments: &'static [Segment], bits: u32, sign: Sign) -> Self {
        Self { segments, bits, sign, align: 1, shift: None }
    }

    const fn aligned(mut self, align: u32) -> Self {
        self.align = align;
        self
    }

    const fn shift(mut self, shift: ShiftWidth) -> Self {
        self.shift = Some(shift);
        self
    }

    /// Inclusive range of accepted values at the given width.
    pub const fn range(&self, xlen: Xlen) -> (i64, i64) {
        let bits = match self.shift {
            Some(shift) => shift.bits(xlen),
            None => self.bits,
        };
        match self.sign {
            Sign::Signed => (-(1 << (bits - 1)), (1 << (bits - 1)) - 1),
            Sign::Unsigned => (0, (1 << bits) - 1),
            Sign::Upper => (-(1 << (bits - 1)), (1 << bits) - 1),
        }
    }

    /// Union of the word bits this immediate occupies.
    pub fn field_mask(&self) -> u32 {
        self.segments.iter().fold(0, |acc, s| acc | place(u32::MAX, s.lo, s.width))
    }

    /// Places an in-range value into its word positions.
    pub fn scatter(&self, value: i64) -> u32 {
        let raw = (value as u32) & low_mask(self.bits);
        self.segments.iter().fold(0, |acc, s| acc | place(raw >> s.value_lo, s.lo, s.width))
    }

    /// Reassembles the value from a word, extending per [`ImmLayout::sign`].
    pub fn gather(&self, word: u32) -> i64 {
        let raw = self.segments.iter().fold(0, |acc, s| acc | (field(word, s.lo, s.width) << s.value_lo));
        match self.sign {
            Sign::Signed => sign_extend(raw, self.bits),
            Sign::Unsigned | Sign::Upper => i64::from(raw),
        }
    }
}

/// I-type 12-bit signed immediate (bits 31-20).
pub const I_IMM: ImmLayout = ImmLayout::new(&[seg(20, 12, 0)], 12, Sign::Signed);

/// S-type 12-bit signed immediate (bits 31-25 and 11-7).
pub const S_IMM: ImmLayout = ImmLayout::new(&[seg(7, 5, 0), seg(25, 7, 5)], 12, Sign::Signed);

/// B-type 13-bit signed, even branch offset.
pub const B_IMM: ImmLayout =
    ImmLayout::new(&[seg(8, 4, 1), seg(25, 6, 5), seg(7, 1, 11), seg(31, 1, 12)], 13, Sign::Signed).aligned(2);

/// U-type 20-bit upper immediate (bits 31-12).
pub const U_IMM: ImmLayout = ImmLayout::new(&[seg(12, 20, 0)], 20, Sign::Upper);

/// J-type 21-bit signed, even jump offset.
pub const J_IMM: ImmLayout =
    ImmLayout::new(&[seg(21, 10, 1), seg(20, 1, 11), seg(12, 8, 12), seg(31, 1, 20)], 21, Sign::Signed).aligned(2);

/// 12-bit CSR address (bits 31-20).
pub const CSR_ADDR: ImmLayout = ImmLayout::new(&[seg(20, 12, 0)], 12, Sign::Unsigned);

/// Base shift amount; bits 26-20, limited by XLEN.
pub const SHAMT_XLEN: ImmLayout = ImmLayout::new(&[seg(20, 7, 0)], 7, Sign::Unsigned).shift(ShiftWidth::Xlen);

/// `*w` shift amount; bits 24-20.
pub const SHAMT_W: ImmLayout = ImmLayout::new(&[seg(20, 5, 0)], 5, Sign::Unsigned).shift(ShiftWidth::Word);

/// `*d` shift amount; bits 25-20.
pub const SHAMT_D: ImmLayout = ImmLayout::new(&[seg(20, 6, 0)], 6, Sign::Unsigned).shift(ShiftWidth::Double);

/// CI 6-bit signed immediate (C.ADDI, C.LI, C.LUI, C.ADDIW) and CB C.ANDI.
pub const CI_IMM: ImmLayout = ImmLayout::new(&[seg(2, 5, 0), seg(12, 1, 5)], 6, Sign::Signed);

/// CI/CB shift amount (C.SLLI, C.SRLI, C.SRAI).
pub const C_SHAMT: ImmLayout =
    ImmLayout::new(&[seg(2, 5, 0), seg(12, 1, 5)], 6, Sign::Unsigned).shift(ShiftWidth::Compressed);

/// C.LWSP / C.FLWSP offset, in words.
pub const CI_LWSP: ImmLayout = ImmLayout::new(&[seg(4, 3, 0), seg(12, 1, 3), seg(2, 2, 4)], 6, Sign::Unsigned);

/// C.LDSP / C.FLDSP offset, in doublewords.
pub const CI_LDSP: ImmLayout = ImmLayout::new(&[seg(5, 2, 0), seg(12, 1, 2), seg(2, 3, 3)], 6, Sign::Unsigned);

/// C.LQSP offset, in quadwords.
pub const CI_LQSP: ImmLayout = ImmLayout::new(&[seg(6, 1, 0), seg(12, 1, 1), seg(2, 4, 2)], 6, Sign::Unsigned);

/// C.ADDI16SP stack adjustment, in units of 16 bytes.
pub const CI_ADDI16SP: ImmLayout =
    ImmLayout::new(&[seg(6, 1, 0), seg(2, 1, 1), seg(5, 1, 2), seg(3, 2, 3), seg(12, 1, 5)], 6, Sign::Signed);

/// C.SWSP / C.FSWSP offset, in words.
pub const CSS_SWSP: ImmLayout = ImmLayout::new(&[seg(9, 4, 0), seg(7, 2, 4)], 6, Sign::Unsigned);

/// C.SDSP / C.FSDSP offset, in doublewords.
pub const CSS_SDSP: ImmLayout = ImmLayout::new(&[seg(10, 3, 0), seg(7, 3, 3)], 6, Sign::Unsigned);

/// C.SQSP offset, in quadwords.
pub const CSS_SQSP: ImmLayout = ImmLayout::new(&[seg(11, 2, 0), seg(7, 4, 2)], 6, Sign::Unsigned);

/// C.ADDI4SPN immediate, in units of 4 bytes.
pub const CIW_ADDI4SPN: ImmLayout =
    ImmLayout::new(&[seg(6, 1, 0), seg(5, 1, 1), seg(11, 2, 2), seg(7, 4, 4)], 8, Sign::Unsigned);

/// C.LW / C.SW / C.FLW / C.FSW offset, in words.
pub const CL_W: ImmLayout = ImmLayout::new(&[seg(6, 1, 0), seg(10, 3, 1), seg(5, 1, 4)], 5, Sign::Unsigned);

/// C.LD / C.SD / C.FLD / C.FSD offset, in doublewords.
pub const CL_D: ImmLayout = ImmLayout::new(&[seg(10, 3, 0), seg(5, 2, 3)], 5, Sign::Unsigned);

/// C.LQ / C.SQ offset, in quadwords.
pub const CL_Q: ImmLayout = ImmLayout::new(&[seg(11, 2, 0), seg(5, 2, 2), seg(10, 1, 4)], 5, Sign::Unsigned);

/// C.BEQZ / C.BNEZ 9-bit signed, even branch offset.
pub const CB_BRANCH: ImmLayout = ImmLayout::new(
    &[seg(12, 1, 8), seg(10, 2, 3), seg(5, 2, 6), seg(3, 2, 1), seg(2, 1, 5)],
    9,
    Sign::Signed,
)
.aligned(2);

/// C.J / C.JAL 12-bit signed, even jump offset.
pub const CJ_JUMP: ImmLayout = ImmLayout::new(
    &[
        seg(12, 1, 11),
        seg(11, 1, 4),
        seg(9, 2, 8),
        seg(8, 1, 10),
        seg(7, 1, 6),
        seg(6, 1, 7),
        seg(3, 3, 1),
        seg(2, 1, 5),
    ],
    12,
    Sign::Signed,
)
.aligned(2);
