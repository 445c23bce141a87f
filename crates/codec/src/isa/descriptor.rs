//! Instruction descriptors.
//!
//! A descriptor is the immutable record for one mnemonic: its format, the
//! fixed bits (`match_bits` under `mask`), the ordered operand roles, the
//! operand syntax, the immediate layout, the reserved operand values and the
//! ISA widths it exists on. Everything the codecs need is read from here.

use std::fmt;

use crate::common::bits::{field, place};
use crate::config::Xlen;
use crate::isa::fields::InstructionBits;
use crate::isa::format::{Format, ImmLayout, Role, Syntax};

/// Extension an instruction belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Base integer ISA.
    Base,
    /// Compressed instructions (C).
    Compressed,
    /// Single-precision floating point (F).
    Float,
    /// Double-precision floating point (D).
    Double,
    /// Control and status register access (Zicsr).
    Csr,
    /// Memory ordering (FENCE, FENCE.TSO) and Zifencei.
    Fence,
    /// Privileged returns, WFI and SFENCE.VMA.
    Privileged,
}

/// Set of ISA widths.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct XlenSet(u8);

impl XlenSet {
    /// RV32 only.
    pub const RV32: Self = Self(0b001);
    /// RV64 only.
    pub const RV64: Self = Self(0b010);
    /// RV128 only.
    pub const RV128: Self = Self(0b100);
    /// RV32 and RV64.
    pub const RV32_64: Self = Self(0b011);
    /// RV64 and RV128.
    pub const RV64_UP: Self = Self(0b110);
    /// Every width.
    pub const ALL: Self = Self(0b111);

    /// Returns `true` if `xlen` is in the set.
    pub const fn contains(self, xlen: Xlen) -> bool {
        self.0 & (1 << xlen.index()) != 0
    }

    /// Narrowest width in the set.
    pub fn min(self) -> Option<Xlen> {
        Xlen::ALL.into_iter().find(|x| self.contains(*x))
    }
}

impl fmt::Debug for XlenSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(Xlen::ALL.into_iter().filter(|x| self.contains(*x))).finish()
    }
}

/// Operand values an encoding reserves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Constraint {
    /// The register in this role must not be the given index.
    RegisterNot(Role, u8),
    /// The immediate must be non-zero.
    NonZeroImmediate,
}

/// Immutable description of one real instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionDescriptor {
    /// Canonical lowercase mnemonic.
    pub mnemonic: &'static str,
    /// Word layout.
    pub format: Format,
    /// Values of the fixed bits.
    pub match_bits: u32,
    /// Positions of the fixed bits.
    pub mask: u32,
    /// Operand roles in assembly order.
    pub operands: &'static [Role],
    /// How the operands are written.
    pub syntax: Syntax,
    /// Immediate layout for `Imm`, `Shamt` and `Csr` roles.
    pub imm: Option<ImmLayout>,
    /// Reserved operand values.
    pub constraints: &'static [Constraint],
    /// Widths on which the instruction exists.
    pub isa: XlenSet,
    /// Extension tag.
    pub extension: Extension,
}

impl InstructionDescriptor {
    /// Creates a descriptor with no fixed bits beyond those given.
    pub const fn new(
        mnemonic: &'static str,
        format: Format,
        match_bits: u32,
        mask: u32,
        operands: &'static [Role],
    ) -> Self {
        Self {
            mnemonic,
            format,
            match_bits,
            mask,
            operands,
            syntax: Syntax::Plain,
            imm: None,
            constraints: &[],
            isa: XlenSet::ALL,
            extension: Extension::Base,
        }
    }

    /// Creates a descriptor whose every bit is fixed.
    pub const fn fixed(mnemonic: &'static str, format: Format, word: u32) -> Self {
        Self::new(mnemonic, format, word, format.word_mask(), &[])
    }

    /// Fixes `width` bits at `lo` to `value`.
    #[must_use]
    pub const fn fix(mut self, lo: u32, width: u32, value: u32) -> Self {
        self.match_bits |= place(value, lo, width);
        self.mask |= place(u32::MAX, lo, width);
        self
    }

    /// Restricts the descriptor to the given widths.
    #[must_use]
    pub const fn on(mut self, isa: XlenSet) -> Self {
        self.isa = isa;
        self
    }

    /// Sets the extension tag.
    #[must_use]
    pub const fn ext(mut self, extension: Extension) -> Self {
        self.extension = extension;
        self
    }

    /// Writes the last two operands as `offset(base)`.
    #[must_use]
    pub const fn memory(mut self) -> Self {
        self.syntax = Syntax::Memory;
        self
    }

    /// Sets the immediate layout.
    #[must_use]
    pub const fn layout(mut self, imm: ImmLayout) -> Self {
        self.imm = Some(imm);
        self
    }

    /// Sets the reserved operand values.
    #[must_use]
    pub const fn constrained(mut self, constraints: &'static [Constraint]) -> Self {
        self.constraints = constraints;
        self
    }

    /// Returns `true` if `word` carries this descriptor's fixed bits.
    pub const fn matches(&self, word: u32) -> bool {
        word & self.mask == self.match_bits
    }

    /// Narrowest width the instruction exists on.
    pub fn min_xlen(&self) -> Option<Xlen> {
        self.isa.min()
    }

    /// Major opcode (bits 6-0) of a 32-bit instruction.
    pub fn opcode(&self) -> u32 {
        self.match_bits.opcode()
    }

    /// funct3, if fixed.
    pub fn funct3(&self) -> Option<u32> {
        let lo = if self.format.is_compressed() { 13 } else { 12 };
        (field(self.mask, lo, 3) == 0b111).then(|| field(self.match_bits, lo, 3))
    }

    /// funct7, if fixed.
    pub fn funct7(&self) -> Option<u32> {
        (!self.format.is_compressed() && self.mask.funct7() == 0x7F).then(|| self.match_bits.funct7())
    }

    /// Compressed quadrant (bits 1-0); `0b11` for 32-bit instructions.
    pub fn quadrant(&self) -> u32 {
        self.match_bits.quadrant()
    }

    /// Number of fixed bits; more fixed bits means a more specific pattern.
    pub const fn specificity(&self) -> u32 {
        self.mask.count_ones()
    }

    /// Index of `role` in the operand list.
    pub fn position(&self, role: Role) -> Option<usize> {
        self.operands.iter().position(|r| *r == role)
    }
}
