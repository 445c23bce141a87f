//! The instruction catalog.
//!
//! Every real instruction the translator knows, grouped by extension. The
//! catalog is plain data; [`DescriptorTable`](crate::isa::table::DescriptorTable)
//! validates it and builds the lookup indices.

use crate::isa::abi::{REG_SP, REG_ZERO};
use crate::isa::descriptor::Constraint::{NonZeroImmediate, RegisterNot};
use crate::isa::descriptor::{Constraint, Extension, InstructionDescriptor as D, XlenSet};
use crate::isa::format::{
    B_IMM, C_SHAMT, CB_BRANCH, CI_ADDI16SP, CI_IMM, CI_LDSP, CI_LQSP, CI_LWSP, CIW_ADDI4SPN, CJ_JUMP, CL_D, CL_Q, CL_W,
    CSR_ADDR, CSS_SDSP, CSS_SQSP, CSS_SWSP, Format, I_IMM, J_IMM, Role, S_IMM, SHAMT_D, SHAMT_W, SHAMT_XLEN, U_IMM,
};
use crate::isa::privileged::opcodes::{self as sys, OP_SYSTEM};
use crate::isa::rvc::constants::{self as rvc, QUADRANT_0, QUADRANT_1, QUADRANT_2, q0, q1, q2};
use crate::isa::rvf::{funct3 as ff3, funct7 as ff7, opcodes as fop};
use crate::isa::rvi::{funct3 as f3, funct7 as f7, opcodes as op};

use crate::isa::format::Role::{Csr, Frd, Frs1, Frs2, Frs3, Imm, Pred, Rd, Rm, Rs1, Rs2, Shamt, Succ, Zimm};

const RD_RS1_RS2: &[Role] = &[Rd, Rs1, Rs2];
const RD_RS1_IMM: &[Role] = &[Rd, Rs1, Imm];
const RD_RS1_SHAMT: &[Role] = &[Rd, Rs1, Shamt];
const RD_IMM: &[Role] = &[Rd, Imm];
const RD_IMM_RS1: &[Role] = &[Rd, Imm, Rs1];
const RS2_IMM_RS1: &[Role] = &[Rs2, Imm, Rs1];
const RS1_RS2_IMM: &[Role] = &[Rs1, Rs2, Imm];
const FRD_IMM_RS1: &[Role] = &[Frd, Imm, Rs1];
const FRS2_IMM_RS1: &[Role] = &[Frs2, Imm, Rs1];
const FRD_FRS1_FRS2: &[Role] = &[Frd, Frs1, Frs2];
const FRD_FRS1_FRS2_RM: &[Role] = &[Frd, Frs1, Frs2, Rm];
const FRD_FRS1_FRS2_FRS3_RM: &[Role] = &[Frd, Frs1, Frs2, Frs3, Rm];
const FRD_FRS1_RM: &[Role] = &[Frd, Frs1, Rm];
const FRD_RS1_RM: &[Role] = &[Frd, Rs1, Rm];
const FRD_RS1: &[Role] = &[Frd, Rs1];
const RD_FRS1_RM: &[Role] = &[Rd, Frs1, Rm];
const RD_FRS1: &[Role] = &[Rd, Frs1];
const RD_FRS1_FRS2: &[Role] = &[Rd, Frs1, Frs2];
const RD_CSR_RS1: &[Role] = &[Rd, Csr, Rs1];
const RD_CSR_ZIMM: &[Role] = &[Rd, Csr, Zimm];
const RD_SHAMT: &[Role] = &[Rd, Shamt];
const RD_RS2: &[Role] = &[Rd, Rs2];
const FRD_IMM: &[Role] = &[Frd, Imm];
const RS2_IMM: &[Role] = &[Rs2, Imm];
const FRS2_IMM: &[Role] = &[Frs2, Imm];
const RS1_IMM: &[Role] = &[Rs1, Imm];
const RS1_ONLY: &[Role] = &[Rs1];
const RS1_RS2: &[Role] = &[Rs1, Rs2];
const IMM_ONLY: &[Role] = &[Imm];
const PRED_SUCC: &[Role] = &[Pred, Succ];

const RD_NOT_ZERO: &[Constraint] = &[RegisterNot(Rd, REG_ZERO)];
const RS1_NOT_ZERO: &[Constraint] = &[RegisterNot(Rs1, REG_ZERO)];
const RD_RS2_NOT_ZERO: &[Constraint] = &[RegisterNot(Rd, REG_ZERO), RegisterNot(Rs2, REG_ZERO)];
const LUI_RESERVED: &[Constraint] = &[RegisterNot(Rd, REG_ZERO), RegisterNot(Rd, REG_SP), NonZeroImmediate];
const IMM_NOT_ZERO: &[Constraint] = &[NonZeroImmediate];

/// `fence.tso`: fm=1000, pred=rw, succ=rw.
const FENCE_TSO_WORD: u32 = 0x8330_000F;

/// `fence.i` with its reserved fields zero.
const FENCE_I_WORD: u32 = 0x0000_100F;

fn r(mnemonic: &'static str, opcode: u32, funct3: u32, funct7: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, Format::R, 0, 0, operands).fix(0, 7, opcode).fix(12, 3, funct3).fix(25, 7, funct7)
}

/// R-type with a rounding-mode operand in the funct3 position.
fn r_rm(mnemonic: &'static str, funct7: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, Format::R, 0, 0, operands).fix(0, 7, fop::OP_FP).fix(25, 7, funct7)
}

fn r4(mnemonic: &'static str, opcode: u32, fmt: u32) -> D {
    D::new(mnemonic, Format::R4, 0, 0, FRD_FRS1_FRS2_FRS3_RM).fix(0, 7, opcode).fix(25, 2, fmt)
}

fn i(mnemonic: &'static str, opcode: u32, funct3: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, Format::I, 0, 0, operands).fix(0, 7, opcode).fix(12, 3, funct3).layout(I_IMM)
}

fn s(mnemonic: &'static str, opcode: u32, funct3: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, Format::S, 0, 0, operands).fix(0, 7, opcode).fix(12, 3, funct3).layout(S_IMM).memory()
}

fn b(mnemonic: &'static str, funct3: u32) -> D {
    D::new(mnemonic, Format::B, 0, 0, RS1_RS2_IMM).fix(0, 7, op::OP_BRANCH).fix(12, 3, funct3).layout(B_IMM)
}

fn c(mnemonic: &'static str, format: Format, quadrant: u32, funct3: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, format, 0, 0, operands).fix(0, 2, quadrant).fix(13, 3, funct3).ext(Extension::Compressed)
}

fn load(mnemonic: &'static str, funct3: u32) -> D {
    i(mnemonic, op::OP_LOAD, funct3, RD_IMM_RS1).memory()
}

fn shift(mnemonic: &'static str, opcode: u32, funct3: u32) -> D {
    D::new(mnemonic, Format::I, 0, 0, RD_RS1_SHAMT).fix(0, 7, opcode).fix(12, 3, funct3)
}

fn csr(mnemonic: &'static str, funct3: u32, operands: &'static [Role]) -> D {
    D::new(mnemonic, Format::I, 0, 0, operands)
        .fix(0, 7, OP_SYSTEM)
        .fix(12, 3, funct3)
        .layout(CSR_ADDR)
        .ext(Extension::Csr)
}

/// Base integer instruction sets (RV32I, RV64I word ops, RV128I doubleword ops).
fn base_integer() -> Vec<D> {
    let shift_xlen = |mnemonic, funct3, top| shift(mnemonic, op::OP_IMM, funct3).fix(27, 5, top).layout(SHAMT_XLEN);
    let shift_w = |mnemonic, funct3, funct7| {
        shift(mnemonic, op::OP_IMM_32, funct3).fix(25, 7, funct7).layout(SHAMT_W).on(XlenSet::RV64_UP)
    };
    let shift_d = |mnemonic, funct3, top| {
        shift(mnemonic, op::OP_IMM_64, funct3).fix(26, 6, top).layout(SHAMT_D).on(XlenSet::RV128)
    };
    let word = |mnemonic, funct3, funct7| r(mnemonic, op::OP_REG_32, funct3, funct7, RD_RS1_RS2).on(XlenSet::RV64_UP);
    let double = |mnemonic, funct3, funct7| r(mnemonic, op::OP_REG_64, funct3, funct7, RD_RS1_RS2).on(XlenSet::RV128);
    vec![
        D::new("lui", Format::U, 0, 0, RD_IMM).fix(0, 7, op::OP_LUI).layout(U_IMM),
        D::new("auipc", Format::U, 0, 0, RD_IMM).fix(0, 7, op::OP_AUIPC).layout(U_IMM),
        D::new("jal", Format::J, 0, 0, RD_IMM).fix(0, 7, op::OP_JAL).layout(J_IMM),
        i("jalr", op::OP_JALR, 0b000, RD_IMM_RS1).memory(),
        b("beq", f3::BEQ),
        b("bne", f3::BNE),
        b("blt", f3::BLT),
        b("bge", f3::BGE),
        b("bltu", f3::BLTU),
        b("bgeu", f3::BGEU),
        load("lb", f3::LB),
        load("lh", f3::LH),
        load("lw", f3::LW),
        load("ld", f3::LD).on(XlenSet::RV64_UP),
        load("lbu", f3::LBU),
        load("lhu", f3::LHU),
        load("lwu", f3::LWU).on(XlenSet::RV64_UP),
        load("ldu", f3::LDU).on(XlenSet::RV128),
        i("lq", op::OP_MISC_MEM, f3::LQ, RD_IMM_RS1).memory().on(XlenSet::RV128),
        s("sb", op::OP_STORE, f3::SB, RS2_IMM_RS1),
        s("sh", op::OP_STORE, f3::SH, RS2_IMM_RS1),
        s("sw", op::OP_STORE, f3::SW, RS2_IMM_RS1),
        s("sd", op::OP_STORE, f3::SD, RS2_IMM_RS1).on(XlenSet::RV64_UP),
        s("sq", op::OP_STORE, f3::SQ, RS2_IMM_RS1).on(XlenSet::RV128),
        i("addi", op::OP_IMM, f3::ADD_SUB, RD_RS1_IMM),
        i("slti", op::OP_IMM, f3::SLT, RD_RS1_IMM),
        i("sltiu", op::OP_IMM, f3::SLTU, RD_RS1_IMM),
        i("xori", op::OP_IMM, f3::XOR, RD_RS1_IMM),
        i("ori", op::OP_IMM, f3::OR, RD_RS1_IMM),
        i("andi", op::OP_IMM, f3::AND, RD_RS1_IMM),
        shift_xlen("slli", f3::SLL, f7::SHIFT_LOGICAL_5),
        shift_xlen("srli", f3::SRL_SRA, f7::SHIFT_LOGICAL_5),
        shift_xlen("srai", f3::SRL_SRA, f7::SHIFT_ARITH_5),
        r("add", op::OP_REG, f3::ADD_SUB, f7::DEFAULT, RD_RS1_RS2),
        r("sub", op::OP_REG, f3::ADD_SUB, f7::SUB, RD_RS1_RS2),
        r("sll", op::OP_REG, f3::SLL, f7::DEFAULT, RD_RS1_RS2),
        r("slt", op::OP_REG, f3::SLT, f7::DEFAULT, RD_RS1_RS2),
        r("sltu", op::OP_REG, f3::SLTU, f7::DEFAULT, RD_RS1_RS2),
        r("xor", op::OP_REG, f3::XOR, f7::DEFAULT, RD_RS1_RS2),
        r("srl", op::OP_REG, f3::SRL_SRA, f7::DEFAULT, RD_RS1_RS2),
        r("sra", op::OP_REG, f3::SRL_SRA, f7::SRA, RD_RS1_RS2),
        r("or", op::OP_REG, f3::OR, f7::DEFAULT, RD_RS1_RS2),
        r("and", op::OP_REG, f3::AND, f7::DEFAULT, RD_RS1_RS2),
        // RV64I word operations.
        i("addiw", op::OP_IMM_32, f3::ADD_SUB, RD_RS1_IMM).on(XlenSet::RV64_UP),
        shift_w("slliw", f3::SLL, f7::DEFAULT),
        shift_w("srliw", f3::SRL_SRA, f7::DEFAULT),
        shift_w("sraiw", f3::SRL_SRA, f7::SRA),
        word("addw", f3::ADD_SUB, f7::DEFAULT),
        word("subw", f3::ADD_SUB, f7::SUB),
        word("sllw", f3::SLL, f7::DEFAULT),
        word("srlw", f3::SRL_SRA, f7::DEFAULT),
        word("sraw", f3::SRL_SRA, f7::SRA),
        // RV128I doubleword operations.
        i("addid", op::OP_IMM_64, f3::ADD_SUB, RD_RS1_IMM).on(XlenSet::RV128),
        shift_d("sllid", f3::SLL, f7::SHIFT_LOGICAL_6),
        shift_d("srlid", f3::SRL_SRA, f7::SHIFT_LOGICAL_6),
        shift_d("sraid", f3::SRL_SRA, f7::SHIFT_ARITH_6),
        double("addd", f3::ADD_SUB, f7::DEFAULT),
        double("subd", f3::ADD_SUB, f7::SUB),
        double("slld", f3::SLL, f7::DEFAULT),
        double("srld", f3::SRL_SRA, f7::DEFAULT),
        double("srad", f3::SRL_SRA, f7::SRA),
    ]
}

/// Fences, environment calls, privileged returns and Zicsr.
fn system() -> Vec<D> {
    let fixed = |mnemonic, word, extension| D::fixed(mnemonic, Format::I, word).ext(extension);
    vec![
        D::new("fence", Format::I, 0, 0, PRED_SUCC)
            .fix(0, 7, op::OP_MISC_MEM)
            .fix(7, 5, 0)
            .fix(12, 3, f3::FENCE)
            .fix(15, 5, 0)
            .fix(28, 4, 0)
            .ext(Extension::Fence),
        fixed("fence.tso", FENCE_TSO_WORD, Extension::Fence),
        fixed("fence.i", FENCE_I_WORD, Extension::Fence),
        fixed("ecall", sys::ECALL, Extension::Base),
        fixed("ebreak", sys::EBREAK, Extension::Base),
        fixed("sret", sys::SRET, Extension::Privileged),
        fixed("mret", sys::MRET, Extension::Privileged),
        fixed("wfi", sys::WFI, Extension::Privileged),
        D::new("sfence.vma", Format::R, 0, 0, RS1_RS2)
            .fix(0, 7, OP_SYSTEM)
            .fix(7, 5, 0)
            .fix(12, 3, sys::PRIV)
            .fix(25, 7, sys::SFENCE_VMA)
            .ext(Extension::Privileged),
        csr("csrrw", sys::CSRRW, RD_CSR_RS1),
        csr("csrrs", sys::CSRRS, RD_CSR_RS1),
        csr("csrrc", sys::CSRRC, RD_CSR_RS1),
        csr("csrrwi", sys::CSRRWI, RD_CSR_ZIMM),
        csr("csrrsi", sys::CSRRSI, RD_CSR_ZIMM),
        csr("csrrci", sys::CSRRCI, RD_CSR_ZIMM),
    ]
}

/// Function codes that differ between single and double precision.
#[derive(Clone, Copy)]
struct Precision {
    fmt: u32,
    width: u32,
    add: u32,
    sub: u32,
    mul: u32,
    div: u32,
    sqrt: u32,
    sgnj: u32,
    min_max: u32,
    cmp: u32,
    to_int: u32,
    from_int: u32,
    class_mv: u32,
    mv_from_int: u32,
}

const SINGLE: Precision = Precision {
    fmt: ff7::FMT_S,
    width: ff3::WIDTH_W,
    add: ff7::FADD_S,
    sub: ff7::FSUB_S,
    mul: ff7::FMUL_S,
    div: ff7::FDIV_S,
    sqrt: ff7::FSQRT_S,
    sgnj: ff7::FSGNJ_S,
    min_max: ff7::FMIN_MAX_S,
    cmp: ff7::FCMP_S,
    to_int: ff7::FCVT_W_S,
    from_int: ff7::FCVT_S_W,
    class_mv: ff7::FCLASS_MV_X_S,
    mv_from_int: ff7::FMV_S_X,
};

const DOUBLE: Precision = Precision {
    fmt: ff7::FMT_D,
    width: ff3::WIDTH_D,
    add: ff7::FADD_D,
    sub: ff7::FSUB_D,
    mul: ff7::FMUL_D,
    div: ff7::FDIV_D,
    sqrt: ff7::FSQRT_D,
    sgnj: ff7::FSGNJ_D,
    min_max: ff7::FMIN_MAX_D,
    cmp: ff7::FCMP_D,
    to_int: ff7::FCVT_W_D,
    from_int: ff7::FCVT_D_W,
    class_mv: ff7::FCLASS_MV_X_D,
    mv_from_int: ff7::FMV_D_X,
};

/// Single-precision floating point (F).
fn single_precision() -> Vec<D> {
    let p = SINGLE;
    vec![
        i("flw", fop::OP_LOAD_FP, p.width, FRD_IMM_RS1).memory(),
        s("fsw", fop::OP_STORE_FP, p.width, FRS2_IMM_RS1),
        r4("fmadd.s", fop::OP_FMADD, p.fmt),
        r4("fmsub.s", fop::OP_FMSUB, p.fmt),
        r4("fnmsub.s", fop::OP_FNMSUB, p.fmt),
        r4("fnmadd.s", fop::OP_FNMADD, p.fmt),
        r_rm("fadd.s", p.add, FRD_FRS1_FRS2_RM),
        r_rm("fsub.s", p.sub, FRD_FRS1_FRS2_RM),
        r_rm("fmul.s", p.mul, FRD_FRS1_FRS2_RM),
        r_rm("fdiv.s", p.div, FRD_FRS1_FRS2_RM),
        r_rm("fsqrt.s", p.sqrt, FRD_FRS1_RM).fix(20, 5, 0),
        r("fsgnj.s", fop::OP_FP, ff3::FSGNJ, p.sgnj, FRD_FRS1_FRS2),
        r("fsgnjn.s", fop::OP_FP, ff3::FSGNJN, p.sgnj, FRD_FRS1_FRS2),
        r("fsgnjx.s", fop::OP_FP, ff3::FSGNJX, p.sgnj, FRD_FRS1_FRS2),
        r("fmin.s", fop::OP_FP, ff3::FMIN, p.min_max, FRD_FRS1_FRS2),
        r("fmax.s", fop::OP_FP, ff3::FMAX, p.min_max, FRD_FRS1_FRS2),
        r("feq.s", fop::OP_FP, ff3::FEQ, p.cmp, RD_FRS1_FRS2),
        r("flt.s", fop::OP_FP, ff3::FLT, p.cmp, RD_FRS1_FRS2),
        r("fle.s", fop::OP_FP, ff3::FLE, p.cmp, RD_FRS1_FRS2),
        r("fclass.s", fop::OP_FP, ff3::FCLASS, p.class_mv, RD_FRS1).fix(20, 5, 0),
        r("fmv.x.w", fop::OP_FP, ff3::FMV, p.class_mv, RD_FRS1).fix(20, 5, 0),
        r("fmv.w.x", fop::OP_FP, ff3::FMV, p.mv_from_int, FRD_RS1).fix(20, 5, 0),
        r_rm("fcvt.w.s", p.to_int, RD_FRS1_RM).fix(20, 5, 0),
        r_rm("fcvt.wu.s", p.to_int, RD_FRS1_RM).fix(20, 5, 1),
        r_rm("fcvt.l.s", p.to_int, RD_FRS1_RM).fix(20, 5, 2).on(XlenSet::RV64_UP),
        r_rm("fcvt.lu.s", p.to_int, RD_FRS1_RM).fix(20, 5, 3).on(XlenSet::RV64_UP),
        r_rm("fcvt.s.w", p.from_int, FRD_RS1_RM).fix(20, 5, 0),
        r_rm("fcvt.s.wu", p.from_int, FRD_RS1_RM).fix(20, 5, 1),
        r_rm("fcvt.s.l", p.from_int, FRD_RS1_RM).fix(20, 5, 2).on(XlenSet::RV64_UP),
        r_rm("fcvt.s.lu", p.from_int, FRD_RS1_RM).fix(20, 5, 3).on(XlenSet::RV64_UP),
    ]
    .into_iter()
    .map(|d| d.ext(Extension::Float))
    .collect()
}

/// Double-precision floating point (D).
fn double_precision() -> Vec<D> {
    let p = DOUBLE;
    vec![
        i("fld", fop::OP_LOAD_FP, p.width, FRD_IMM_RS1).memory(),
        s("fsd", fop::OP_STORE_FP, p.width, FRS2_IMM_RS1),
        r4("fmadd.d", fop::OP_FMADD, p.fmt),
        r4("fmsub.d", fop::OP_FMSUB, p.fmt),
        r4("fnmsub.d", fop::OP_FNMSUB, p.fmt),
        r4("fnmadd.d", fop::OP_FNMADD, p.fmt),
        r_rm("fadd.d", p.add, FRD_FRS1_FRS2_RM),
        r_rm("fsub.d", p.sub, FRD_FRS1_FRS2_RM),
        r_rm("fmul.d", p.mul, FRD_FRS1_FRS2_RM),
        r_rm("fdiv.d", p.div, FRD_FRS1_FRS2_RM),
        r_rm("fsqrt.d", p.sqrt, FRD_FRS1_RM).fix(20, 5, 0),
        r("fsgnj.d", fop::OP_FP, ff3::FSGNJ, p.sgnj, FRD_FRS1_FRS2),
        r("fsgnjn.d", fop::OP_FP, ff3::FSGNJN, p.sgnj, FRD_FRS1_FRS2),
        r("fsgnjx.d", fop::OP_FP, ff3::FSGNJX, p.sgnj, FRD_FRS1_FRS2),
        r("fmin.d", fop::OP_FP, ff3::FMIN, p.min_max, FRD_FRS1_FRS2),
        r("fmax.d", fop::OP_FP, ff3::FMAX, p.min_max, FRD_FRS1_FRS2),
        r_rm("fcvt.s.d", ff7::FCVT_S_D, FRD_FRS1_RM).fix(20, 5, 1),
        r_rm("fcvt.d.s", ff7::FCVT_D_S, FRD_FRS1_RM).fix(20, 5, 0),
        r("feq.d", fop::OP_FP, ff3::FEQ, p.cmp, RD_FRS1_FRS2),
        r("flt.d", fop::OP_FP, ff3::FLT, p.cmp, RD_FRS1_FRS2),
        r("fle.d", fop::OP_FP, ff3::FLE, p.cmp, RD_FRS1_FRS2),
        r("fclass.d", fop::OP_FP, ff3::FCLASS, p.class_mv, RD_FRS1).fix(20, 5, 0),
        r("fmv.x.d", fop::OP_FP, ff3::FMV, p.class_mv, RD_FRS1).fix(20, 5, 0).on(XlenSet::RV64_UP),
        r("fmv.d.x", fop::OP_FP, ff3::FMV, p.mv_from_int, FRD_RS1).fix(20, 5, 0).on(XlenSet::RV64_UP),
        r_rm("fcvt.w.d", p.to_int, RD_FRS1_RM).fix(20, 5, 0),
        r_rm("fcvt.wu.d", p.to_int, RD_FRS1_RM).fix(20, 5, 1),
        r_rm("fcvt.l.d", p.to_int, RD_FRS1_RM).fix(20, 5, 2).on(XlenSet::RV64_UP),
        r_rm("fcvt.lu.d", p.to_int, RD_FRS1_RM).fix(20, 5, 3).on(XlenSet::RV64_UP),
        r_rm("fcvt.d.w", p.from_int, FRD_RS1_RM).fix(20, 5, 0),
        r_rm("fcvt.d.wu", p.from_int, FRD_RS1_RM).fix(20, 5, 1),
        r_rm("fcvt.d.l", p.from_int, FRD_RS1_RM).fix(20, 5, 2).on(XlenSet::RV64_UP),
        r_rm("fcvt.d.lu", p.from_int, FRD_RS1_RM).fix(20, 5, 3).on(XlenSet::RV64_UP),
    ]
    .into_iter()
    .map(|d| d.ext(Extension::Double))
    .collect()
}

/// The compressed extension; several slots change meaning with XLEN.
fn compressed() -> Vec<D> {
    let alu = |mnemonic, selector, funct2| {
        c(mnemonic, Format::Ca, QUADRANT_1, q1::C_MISC_ALU, RD_RS2)
            .fix(10, 2, q1::MISC_ALU)
            .fix(12, 1, selector)
            .fix(5, 2, funct2)
    };
    let misc_imm = |mnemonic, selector, operands, layout| {
        c(mnemonic, Format::Cb, QUADRANT_1, q1::C_MISC_ALU, operands).fix(10, 2, selector).layout(layout)
    };
    let cr = |mnemonic, bit12, operands| {
        c(mnemonic, Format::Cr, QUADRANT_2, q2::C_JR_MV_ADD, operands).fix(12, 1, bit12)
    };
    vec![
        // Quadrant 0.
        c("c.addi4spn", Format::Ciw, QUADRANT_0, q0::C_ADDI4SPN, RD_IMM).layout(CIW_ADDI4SPN).constrained(IMM_NOT_ZERO),
        c("c.fld", Format::Cl, QUADRANT_0, q0::C_FLD_LQ, FRD_IMM_RS1).layout(CL_D).memory().on(XlenSet::RV32_64),
        c("c.lq", Format::Cl, QUADRANT_0, q0::C_FLD_LQ, RD_IMM_RS1).layout(CL_Q).memory().on(XlenSet::RV128),
        c("c.lw", Format::Cl, QUADRANT_0, q0::C_LW, RD_IMM_RS1).layout(CL_W).memory(),
        c("c.flw", Format::Cl, QUADRANT_0, q0::C_FLW_LD, FRD_IMM_RS1).layout(CL_W).memory().on(XlenSet::RV32),
        c("c.ld", Format::Cl, QUADRANT_0, q0::C_FLW_LD, RD_IMM_RS1).layout(CL_D).memory().on(XlenSet::RV64_UP),
        c("c.fsd", Format::Cs, QUADRANT_0, q0::C_FSD_SQ, FRS2_IMM_RS1).layout(CL_D).memory().on(XlenSet::RV32_64),
        c("c.sq", Format::Cs, QUADRANT_0, q0::C_FSD_SQ, RS2_IMM_RS1).layout(CL_Q).memory().on(XlenSet::RV128),
        c("c.sw", Format::Cs, QUADRANT_0, q0::C_SW, RS2_IMM_RS1).layout(CL_W).memory(),
        c("c.fsw", Format::Cs, QUADRANT_0, q0::C_FSW_SD, FRS2_IMM_RS1).layout(CL_W).memory().on(XlenSet::RV32),
        c("c.sd", Format::Cs, QUADRANT_0, q0::C_FSW_SD, RS2_IMM_RS1).layout(CL_D).memory().on(XlenSet::RV64_UP),
        // Quadrant 1.
        D::fixed("c.nop", Format::Ci, rvc::C_NOP).ext(Extension::Compressed),
        c("c.addi", Format::Ci, QUADRANT_1, q1::C_ADDI, RD_IMM).layout(CI_IMM).constrained(RD_NOT_ZERO),
        c("c.jal", Format::Cj, QUADRANT_1, q1::C_JAL_ADDIW, IMM_ONLY).layout(CJ_JUMP).on(XlenSet::RV32),
        c("c.addiw", Format::Ci, QUADRANT_1, q1::C_JAL_ADDIW, RD_IMM)
            .layout(CI_IMM)
            .constrained(RD_NOT_ZERO)
            .on(XlenSet::RV64_UP),
        c("c.li", Format::Ci, QUADRANT_1, q1::C_LI, RD_IMM).layout(CI_IMM),
        c("c.addi16sp", Format::Ci, QUADRANT_1, q1::C_LUI_ADDI16SP, IMM_ONLY)
            .fix(7, 5, u32::from(REG_SP))
            .layout(CI_ADDI16SP)
            .constrained(IMM_NOT_ZERO),
        c("c.lui", Format::Ci, QUADRANT_1, q1::C_LUI_ADDI16SP, RD_IMM).layout(CI_IMM).constrained(LUI_RESERVED),
        misc_imm("c.srli", q1::MISC_SRLI, RD_SHAMT, C_SHAMT),
        misc_imm("c.srai", q1::MISC_SRAI, RD_SHAMT, C_SHAMT),
        misc_imm("c.andi", q1::MISC_ANDI, RD_IMM, CI_IMM),
        alu("c.sub", 0, q1::ALU_SUB),
        alu("c.xor", 0, q1::ALU_XOR_ADDW),
        alu("c.or", 0, q1::ALU_OR),
        alu("c.and", 0, q1::ALU_AND),
        alu("c.subw", 1, q1::ALU_SUB).on(XlenSet::RV64_UP),
        alu("c.addw", 1, q1::ALU_XOR_ADDW).on(XlenSet::RV64_UP),
        c("c.j", Format::Cj, QUADRANT_1, q1::C_J, IMM_ONLY).layout(CJ_JUMP),
        c("c.beqz", Format::Cb, QUADRANT_1, q1::C_BEQZ, RS1_IMM).layout(CB_BRANCH),
        c("c.bnez", Format::Cb, QUADRANT_1, q1::C_BNEZ, RS1_IMM).layout(CB_BRANCH),
        // Quadrant 2.
        c("c.slli", Format::Ci, QUADRANT_2, q2::C_SLLI, RD_SHAMT).layout(C_SHAMT),
        c("c.fldsp", Format::Ci, QUADRANT_2, q2::C_FLDSP_LQSP, FRD_IMM).layout(CI_LDSP).on(XlenSet::RV32_64),
        c("c.lqsp", Format::Ci, QUADRANT_2, q2::C_FLDSP_LQSP, RD_IMM)
            .layout(CI_LQSP)
            .constrained(RD_NOT_ZERO)
            .on(XlenSet::RV128),
        c("c.lwsp", Format::Ci, QUADRANT_2, q2::C_LWSP, RD_IMM).layout(CI_LWSP).constrained(RD_NOT_ZERO),
        c("c.flwsp", Format::Ci, QUADRANT_2, q2::C_FLWSP_LDSP, FRD_IMM).layout(CI_LWSP).on(XlenSet::RV32),
        c("c.ldsp", Format::Ci, QUADRANT_2, q2::C_FLWSP_LDSP, RD_IMM)
            .layout(CI_LDSP)
            .constrained(RD_NOT_ZERO)
            .on(XlenSet::RV64_UP),
        cr("c.jr", 0, RS1_ONLY).fix(2, 5, 0).constrained(RS1_NOT_ZERO),
        cr("c.mv", 0, RD_RS2).constrained(RD_RS2_NOT_ZERO),
        D::fixed("c.ebreak", Format::Cr, rvc::C_EBREAK).ext(Extension::Compressed),
        cr("c.jalr", 1, RS1_ONLY).fix(2, 5, 0).constrained(RS1_NOT_ZERO),
        cr("c.add", 1, RD_RS2).constrained(RD_RS2_NOT_ZERO),
        c("c.fsdsp", Format::Css, QUADRANT_2, q2::C_FSDSP_SQSP, FRS2_IMM).layout(CSS_SDSP).on(XlenSet::RV32_64),
        c("c.sqsp", Format::Css, QUADRANT_2, q2::C_FSDSP_SQSP, RS2_IMM).layout(CSS_SQSP).on(XlenSet::RV128),
        c("c.swsp", Format::Css, QUADRANT_2, q2::C_SWSP, RS2_IMM).layout(CSS_SWSP),
        c("c.fswsp", Format::Css, QUADRANT_2, q2::C_FSWSP_SDSP, FRS2_IMM).layout(CSS_SWSP).on(XlenSet::RV32),
        c("c.sdsp", Format::Css, QUADRANT_2, q2::C_FSWSP_SDSP, RS2_IMM).layout(CSS_SDSP).on(XlenSet::RV64_UP),
    ]
}

/// Every real instruction, in catalog order.
pub fn instructions() -> Vec<D> {
    let mut all = base_integer();
    all.extend(system());
    all.extend(single_precision());
    all.extend(double_precision());
    all.extend(compressed());
    all
}
