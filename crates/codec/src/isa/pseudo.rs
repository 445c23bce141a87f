//! Pseudo-instructions.
//!
//! Assembler aliases that expand to exactly one real instruction. They are
//! encode-only: the bit-pattern index never yields a pseudo mnemonic, and the
//! rendered `asm` of an expanded pseudo is its base instruction.

use crate::isa::abi::{REG_RA, REG_ZERO};
use crate::isa::format::Role::{self, Csr, Frd, Frs1, Imm, Rd, Rs1, Zimm};
use crate::isa::operand::OperandValue;
use crate::isa::privileged::csr::{FCSR, FFLAGS, FRM};

/// One operand of the expansion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arg {
    /// The pseudo's own operand at this position.
    Operand(usize),
    /// A fixed integer register.
    Register(u8),
    /// A fixed immediate.
    Immediate(i64),
    /// A fixed CSR address.
    Csr(u16),
}

/// An alias for one real instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PseudoInstruction {
    /// Pseudo mnemonic.
    pub mnemonic: &'static str,
    /// Real instruction it expands to.
    pub target: &'static str,
    /// Operand roles as written.
    pub operands: &'static [Role],
    /// Target operands, in the target's role order.
    pub expansion: &'static [Arg],
}

impl PseudoInstruction {
    /// Builds the target's operand values from the pseudo's resolved operands.
    ///
    /// Returns `None` when `operands` is shorter than the expansion requires.
    pub fn expand(&self, operands: &[OperandValue]) -> Option<Vec<OperandValue>> {
        self.expansion
            .iter()
            .map(|arg| match *arg {
                Arg::Operand(i) => operands.get(i).copied(),
                Arg::Register(index) => Some(OperandValue::Register(index)),
                Arg::Immediate(value) => Some(OperandValue::Immediate(value)),
                Arg::Csr(addr) => Some(OperandValue::Csr(addr)),
            })
            .collect()
    }
}

const fn pseudo(
    mnemonic: &'static str,
    target: &'static str,
    operands: &'static [Role],
    expansion: &'static [Arg],
) -> PseudoInstruction {
    PseudoInstruction { mnemonic, target, operands, expansion }
}

use self::Arg::{Immediate as I, Operand as O, Register as R};

const X0: Arg = R(REG_ZERO);

/// The pseudo-instruction set.
pub const PSEUDO_INSTRUCTIONS: &[PseudoInstruction] = &[
    pseudo("nop", "addi", &[], &[X0, X0, I(0)]),
    pseudo("li", "addi", &[Rd, Imm], &[O(0), X0, O(1)]),
    pseudo("mv", "addi", &[Rd, Rs1], &[O(0), O(1), I(0)]),
    pseudo("not", "xori", &[Rd, Rs1], &[O(0), O(1), I(-1)]),
    pseudo("neg", "sub", &[Rd, Rs1], &[O(0), X0, O(1)]),
    pseudo("negw", "subw", &[Rd, Rs1], &[O(0), X0, O(1)]),
    pseudo("sext.w", "addiw", &[Rd, Rs1], &[O(0), O(1), I(0)]),
    pseudo("seqz", "sltiu", &[Rd, Rs1], &[O(0), O(1), I(1)]),
    pseudo("snez", "sltu", &[Rd, Rs1], &[O(0), X0, O(1)]),
    pseudo("sltz", "slt", &[Rd, Rs1], &[O(0), O(1), X0]),
    pseudo("sgtz", "slt", &[Rd, Rs1], &[O(0), X0, O(1)]),
    pseudo("beqz", "beq", &[Rs1, Imm], &[O(0), X0, O(1)]),
    pseudo("bnez", "bne", &[Rs1, Imm], &[O(0), X0, O(1)]),
    pseudo("blez", "bge", &[Rs1, Imm], &[X0, O(0), O(1)]),
    pseudo("bgez", "bge", &[Rs1, Imm], &[O(0), X0, O(1)]),
    pseudo("bltz", "blt", &[Rs1, Imm], &[O(0), X0, O(1)]),
    pseudo("bgtz", "blt", &[Rs1, Imm], &[X0, O(0), O(1)]),
    pseudo("bgt", "blt", &[Rs1, Rs1, Imm], &[O(1), O(0), O(2)]),
    pseudo("ble", "bge", &[Rs1, Rs1, Imm], &[O(1), O(0), O(2)]),
    pseudo("bgtu", "bltu", &[Rs1, Rs1, Imm], &[O(1), O(0), O(2)]),
    pseudo("bleu", "bgeu", &[Rs1, Rs1, Imm], &[O(1), O(0), O(2)]),
    pseudo("j", "jal", &[Imm], &[X0, O(0)]),
    pseudo("jr", "jalr", &[Rs1], &[X0, I(0), O(0)]),
    pseudo("ret", "jalr", &[], &[X0, I(0), R(REG_RA)]),
    pseudo("fmv.s", "fsgnj.s", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("fabs.s", "fsgnjx.s", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("fneg.s", "fsgnjn.s", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("fmv.d", "fsgnj.d", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("fabs.d", "fsgnjx.d", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("fneg.d", "fsgnjn.d", &[Frd, Frs1], &[O(0), O(1), O(1)]),
    pseudo("csrr", "csrrs", &[Rd, Csr], &[O(0), O(1), X0]),
    pseudo("csrw", "csrrw", &[Csr, Rs1], &[X0, O(0), O(1)]),
    pseudo("csrs", "csrrs", &[Csr, Rs1], &[X0, O(0), O(1)]),
    pseudo("csrc", "csrrc", &[Csr, Rs1], &[X0, O(0), O(1)]),
    pseudo("csrwi", "csrrwi", &[Csr, Zimm], &[X0, O(0), O(1)]),
    pseudo("csrsi", "csrrsi", &[Csr, Zimm], &[X0, O(0), O(1)]),
    pseudo("csrci", "csrrci", &[Csr, Zimm], &[X0, O(0), O(1)]),
    pseudo("frcsr", "csrrs", &[Rd], &[O(0), Arg::Csr(FCSR), X0]),
    pseudo("fscsr", "csrrw", &[Rs1], &[X0, Arg::Csr(FCSR), O(0)]),
    pseudo("frrm", "csrrs", &[Rd], &[O(0), Arg::Csr(FRM), X0]),
    pseudo("fsrm", "csrrw", &[Rs1], &[X0, Arg::Csr(FRM), O(0)]),
    pseudo("frflags", "csrrs", &[Rd], &[O(0), Arg::Csr(FFLAGS), X0]),
    pseudo("fsflags", "csrrw", &[Rs1], &[X0, Arg::Csr(FFLAGS), O(0)]),
];
