//! Base Format Codec Tests.
//!
//! Verifies R, R4, I, S, B, U and J encodings against hand-computed words,
//! immediate boundaries, alignment, XLEN-dependent shift amounts, and the
//! float/CSR variants of the R and I layouts.
//!
//! # Coverage Matrix
//!
//! - R-type:  OP_REG, OP_REG_32, OP_REG_64, OP_FP, SFENCE.VMA
//! - R4-type: FMADD
//! - I-type:  OP_IMM, OP_IMM_32, OP_IMM_64, OP_LOAD, OP_LOAD_FP, JALR, SYSTEM, MISC-MEM
//! - S-type:  OP_STORE, OP_STORE_FP
//! - B-type:  OP_BRANCH
//! - U-type:  LUI, AUIPC
//! - J-type:  JAL

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvcodec_core::isa::codec::check_constraints;
use rvcodec_core::isa::descriptor::{Constraint, InstructionDescriptor};
use rvcodec_core::isa::format::{Format, Role};
use rvcodec_core::isa::operand::OperandValue;
use rvcodec_core::{CodecError, Config, Instruction, Xlen};

use crate::common::{assemble, assemble_on, config, disassemble};

#[rstest]
#[case("addi x5, x0, 10", "00a00293")]
#[case("add x1, x2, x3", "003100b3")]
#[case("sub x1, x2, x3", "403100b3")]
#[case("xori x1, x2, -1", "fff14093")]
#[case("lw x5, -8(x6)", "ff832283")]
#[case("sw x5, 8(x6)", "00532423")]
#[case("beq x1, x2, 16", "00208863")]
#[case("jal x5, 234", "0ea002ef")]
#[case("jal x1, -4", "ffdff0ef")]
#[case("jalr x0, 0(x1)", "00008067")]
#[case("lui x1, 0x12345", "123450b7")]
#[case("slli x1, x1, 40", "02809093")]
#[case("srai x1, x2, 3", "40315093")]
#[case("addiw x1, x2, -1", "fff1009b")]
#[case("csrrs x5, mstatus, x0", "300022f3")]
#[case("csrrwi x0, fflags, 5", "0012d073")]
#[case("fadd.s f1, f2, f3", "003170d3")]
#[case("fadd.d f1, f2, f3, rne", "023100d3")]
#[case("fmadd.s f1, f2, f3, f4", "203170c3")]
#[case("flw f1, 4(x2)", "00412087")]
#[case("fsd f1, 8(x2)", "00113427")]
#[case("fcvt.w.s x1, f2, rtz", "c00110d3")]
#[case("fmv.x.w x1, f2", "e00100d3")]
#[case("fence iorw, iorw", "0ff0000f")]
#[case("fence rw, w", "0310000f")]
#[case("fence.tso", "8330000f")]
#[case("fence.i", "0000100f")]
#[case("sfence.vma x1, x2", "12208073")]
#[case("ecall", "00000073")]
#[case("ebreak", "00100073")]
#[case("mret", "30200073")]
#[case("wfi", "10500073")]
fn test_encodes_and_renders_canonically(#[case] line: &str, #[case] hex: &str) {
    let inst = assemble(line);
    assert_eq!(inst.hex(), hex);
    assert_eq!(inst.asm(), line);
}

#[test]
fn test_decoding_matches_encoding() {
    for (word, asm) in [
        (0x00a0_0293, "addi x5, x0, 10"),
        (0x0053_2423, "sw x5, 8(x6)"),
        (0x0020_8863, "beq x1, x2, 16"),
        (0xffdf_f0ef, "jal x1, -4"),
        (0xc001_10d3, "fcvt.w.s x1, f2, rtz"),
        (0x3000_22f3, "csrrs x5, mstatus, x0"),
    ] {
        assert_eq!(disassemble(word).asm(), asm);
    }
}

#[rstest]
#[case("addi x1, x0, 2047", true)]
#[case("addi x1, x0, -2048", true)]
#[case("addi x1, x0, 2048", false)]
#[case("addi x1, x0, -2049", false)]
#[case("sw x1, 2047(x2)", true)]
#[case("sw x1, -2049(x2)", false)]
#[case("beq x1, x2, 4094", true)]
#[case("beq x1, x2, -4096", true)]
#[case("beq x1, x2, 4096", false)]
#[case("jal x5, 1048574", true)]
#[case("jal x5, -1048576", true)]
#[case("jal x5, 1048576", false)]
#[case("lui x1, 0xfffff", true)]
#[case("lui x1, -524288", true)]
#[case("lui x1, 0x100000", false)]
#[case("csrrwi x1, 0x300, 31", true)]
#[case("csrrwi x1, 0x300, 32", false)]
fn test_immediate_boundaries(#[case] line: &str, #[case] fits: bool) {
    let result = Instruction::from_text(line, &config(Xlen::Rv64));
    if fits {
        assert!(result.is_ok(), "{line}: {result:?}");
    } else {
        assert!(matches!(result, Err(CodecError::ImmediateOutOfRange { .. })), "{line}: {result:?}");
    }
}

#[test]
fn test_out_of_range_error_carries_range() {
    let err = Instruction::from_text("addi x1, x0, 2048", &config(Xlen::Rv64)).unwrap_err();
    assert_eq!(
        err,
        CodecError::ImmediateOutOfRange { mnemonic: "addi".to_string(), value: 2048, expected: "-2048..=2047".to_string() }
    );
}

#[test]
fn test_odd_jump_offset_is_misaligned() {
    assert_eq!(assemble("jal x5, 234").hex(), "0ea002ef");
    let err = Instruction::from_text("jal x5, 235", &Config::default()).unwrap_err();
    assert_eq!(err, CodecError::MisalignedImmediate { mnemonic: "jal".to_string(), value: 235, alignment: 2 });
}

#[test]
fn test_out_of_range_wins_over_misalignment() {
    let err = Instruction::from_text("beq x1, x2, 4097", &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::ImmediateOutOfRange { .. }), "{err:?}");
}

#[rstest]
#[case(Xlen::Rv32, "slli x1, x1, 31", true)]
#[case(Xlen::Rv32, "slli x1, x1, 32", false)]
#[case(Xlen::Rv64, "slli x1, x1, 63", true)]
#[case(Xlen::Rv64, "slli x1, x1, 64", false)]
#[case(Xlen::Rv128, "slli x1, x1, 127", true)]
#[case(Xlen::Rv128, "slli x1, x1, 128", false)]
#[case(Xlen::Rv64, "slliw x1, x1, 31", true)]
#[case(Xlen::Rv64, "slliw x1, x1, 32", false)]
#[case(Xlen::Rv128, "sllid x1, x1, 63", true)]
#[case(Xlen::Rv128, "sllid x1, x1, 64", false)]
#[case(Xlen::Rv64, "srai x1, x1, -1", false)]
fn test_shift_amount_width(#[case] xlen: Xlen, #[case] line: &str, #[case] fits: bool) {
    let result = Instruction::from_text(line, &config(xlen));
    if fits {
        assert!(result.is_ok(), "{line} on {xlen}: {result:?}");
    } else {
        assert!(matches!(result, Err(CodecError::ImmediateOutOfRange { .. })), "{line} on {xlen}: {result:?}");
    }
}

#[test]
fn test_wide_shift_amount_is_reserved_on_rv32() {
    let word = 0x0200_9093;
    assert!(matches!(
        Instruction::from_word(word, 32, &config(Xlen::Rv32)),
        Err(CodecError::UndecodableEncoding { .. })
    ));
    assert_eq!(Instruction::from_word(word, 32, &config(Xlen::Rv64)).unwrap().asm(), "slli x1, x1, 32");
}

#[test]
fn test_rv128_doubleword_shift() {
    let inst = assemble_on(Xlen::Rv128, "sllid x1, x2, 63");
    assert_eq!(inst.hex(), "03f110db");
    assert_eq!(inst.xlen(), Xlen::Rv128);
}

#[test]
fn test_rounding_mode_round_trip() {
    let inst = assemble("fsqrt.d f1, f2, rdn");
    let back = disassemble(inst.encoding().word());
    assert_eq!(back.asm(), "fsqrt.d f1, f2, rdn");
    assert_eq!(back.operands(), inst.operands());
}

#[test]
fn test_reserved_rounding_mode_is_undecodable() {
    // fadd.s f1, f2, f3 with rm = 0b101.
    let word = 0x0031_50d3;
    assert!(matches!(
        Instruction::from_word(word, 32, &config(Xlen::Rv64)),
        Err(CodecError::UndecodableEncoding { .. })
    ));
}

#[test]
fn test_float_roles_reject_integer_registers() {
    assert!(Instruction::from_text("fadd.s x1, f2, f3", &config(Xlen::Rv64)).is_err());
    assert!(Instruction::from_text("fmv.x.w f1, f2", &config(Xlen::Rv64)).is_err());
}

#[test]
fn test_reserved_float_register_is_named_in_its_own_file() {
    const FRD_FRS1: &[Role] = &[Role::Frd, Role::Frs1];
    const NO_F0: &[Constraint] = &[Constraint::RegisterNot(Role::Frd, 0)];
    let descriptor = InstructionDescriptor::new("fmov.test", Format::R, 0x53, 0x7f, FRD_FRS1).constrained(NO_F0);

    let err = check_constraints(&descriptor, &[OperandValue::FloatRegister(0), OperandValue::FloatRegister(1)])
        .unwrap_err();
    match err {
        CodecError::RegisterNotEncodable { register, reason, .. } => {
            assert_eq!(register, "f0");
            assert!(reason.contains("f0"), "{reason}");
            assert!(!reason.contains("x0"), "{reason}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(check_constraints(&descriptor, &[OperandValue::FloatRegister(2), OperandValue::FloatRegister(0)]).is_ok());
}

#[test]
fn test_unknown_csr_address_renders_as_hex() {
    let inst = assemble("csrrw x1, 0x7c0, x2");
    assert_eq!(inst.asm(), "csrrw x1, 0x7c0, x2");
}

#[test]
fn test_fence_set_letters_any_order() {
    assert_eq!(assemble("fence wr, oi").asm(), "fence rw, io");
    assert!(Instruction::from_text("fence rr, w", &config(Xlen::Rv64)).is_err());
}
