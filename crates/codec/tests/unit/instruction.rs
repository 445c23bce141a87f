//! Instruction Facade Tests.
//!
//! This module covers the per-request entry points end to end:
//!
//! # Coverage Matrix
//!
//! | Entry point     | Scenarios                                              |
//! |-----------------|--------------------------------------------------------|
//! | `from_text`     | Real and pseudo mnemonics, ABI names, AUTO width, errors |
//! | `from_binary`   | Prefixes, separators, lengths, undecodable words       |
//! | `from_hex`      | Halfwords, words, digit counts                         |
//! | `from_word`     | AUTO candidate order for decoding                      |

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::common::{abi_config, assemble, assemble_on, config, disassemble, init_tracing};
use rvcodec_core::isa::operand::OperandValue;
use rvcodec_core::{CodecError, Config, DescriptorTable, Encoding, Instruction, IsaWidth, Xlen};

#[test]
fn test_facade_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Instruction>();
    assert_send_sync::<DescriptorTable>();
    assert_send_sync::<Config>();
}

#[test]
fn test_assemble_reports_every_view() {
    init_tracing();
    let inst = assemble("addi x5, x0, 10");
    assert_eq!(inst.asm(), "addi x5, x0, 10");
    assert_eq!(inst.hex(), "00a00293");
    assert_eq!(inst.encoding(), Encoding::Standard(0x00a0_0293));
    assert_eq!(inst.mnemonic(), "addi");
    assert_eq!(inst.xlen(), Xlen::Rv64);
    assert_eq!(inst.operands(), &[OperandValue::Register(5), OperandValue::Register(0), OperandValue::Immediate(10)]);
    assert_eq!(inst.to_string(), "addi x5, x0, 10");
}

#[test]
fn test_mnemonic_and_spacing_are_normalised() {
    let inst = assemble("  ADDI   x5,x0 ,  10 ");
    assert_eq!(inst.asm(), "addi x5, x0, 10");
    assert_eq!(inst.hex(), "00a00293");
}

#[rstest]
#[case("lw x5, 8(x6)")]
#[case("lw x5, 8 (x6)")]
#[case("lw x5, 8\u{3000}(x6)")]
#[case("lw\u{a0}x5,\u{2003}8\u{a0}(x6)")]
fn test_space_before_memory_operand_parenthesis(#[case] line: &str) {
    let inst = assemble(line);
    assert_eq!(inst.asm(), "lw x5, 8(x6)");
    assert_eq!(inst.hex(), "00832283");
}

#[test]
fn test_disassemble_word() {
    let inst = disassemble(0x00a0_0293);
    assert_eq!(inst.asm(), "addi x5, x0, 10");
    assert_eq!(inst.hex(), "00a00293");
}

#[rstest]
#[case("nop", "addi x0, x0, 0", "00000013")]
#[case("li x5, 10", "addi x5, x0, 10", "00a00293")]
#[case("mv x1, x2", "addi x1, x2, 0", "00010093")]
#[case("ret", "jalr x0, 0(x1)", "00008067")]
#[case("j -4", "jal x0, -4", "ffdff06f")]
#[case("beqz x1, 16", "beq x1, x0, 16", "00008863")]
#[case("neg x1, x2", "sub x1, x0, x2", "402000b3")]
#[case("bgt x1, x2, 16", "blt x2, x1, 16", "00114863")]
#[case("csrr x5, mstatus", "csrrs x5, mstatus, x0", "300022f3")]
#[case("frcsr x5", "csrrs x5, fcsr, x0", "003022f3")]
#[case("fmv.s f1, f2", "fsgnj.s f1, f2, f2", "202100d3")]
fn test_pseudo_expands_to_canonical_text(#[case] line: &str, #[case] asm: &str, #[case] hex: &str) {
    let inst = assemble(line);
    assert_eq!(inst.asm(), asm);
    assert_eq!(inst.hex(), hex);
}

#[test]
fn test_pseudo_range_error_names_the_target() {
    let err = Instruction::from_text("li x5, 4096", &config(Xlen::Rv64)).unwrap_err();
    assert_eq!(
        err,
        CodecError::ImmediateOutOfRange { mnemonic: "addi".to_string(), value: 4096, expected: "-2048..=2047".to_string() }
    );
}

#[test]
fn test_abi_names_round_trip() {
    let inst = Instruction::from_text("addi t0, zero, 10", &abi_config(Xlen::Rv64)).unwrap();
    assert_eq!(inst.asm(), "addi t0, zero, 10");
    assert_eq!(inst.hex(), "00a00293");

    let inst = Instruction::from_text("addi x5, x0, 10", &abi_config(Xlen::Rv64)).unwrap();
    assert_eq!(inst.asm(), "addi t0, zero, 10");

    let inst = Instruction::from_hex("0x00a00293", &abi_config(Xlen::Rv64)).unwrap();
    assert_eq!(inst.asm(), "addi t0, zero, 10");
}

#[test]
fn test_abi_names_rejected_without_abi_mode() {
    let err = Instruction::from_text("addi t0, zero, 10", &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::Syntax { ref token, .. } if token == "t0"), "{err:?}");
}

#[rstest]
#[case(Xlen::Rv32)]
#[case(Xlen::Rv64)]
fn test_fixed_width_rejects_wider_instruction(#[case] xlen: Xlen) {
    let err = Instruction::from_text("lq x1, 0(x2)", &config(xlen)).unwrap_err();
    assert_eq!(err, CodecError::UnsupportedOnIsa { mnemonic: "lq".to_string(), isa: xlen });
}

#[test]
fn test_rv64_only_instruction_on_rv32() {
    let err = Instruction::from_text("ld x1, 0(x2)", &config(Xlen::Rv32)).unwrap_err();
    assert_eq!(err, CodecError::UnsupportedOnIsa { mnemonic: "ld".to_string(), isa: Xlen::Rv32 });
    assert_eq!(assemble_on(Xlen::Rv128, "ld x1, 0(x2)").xlen(), Xlen::Rv128);
}

#[rstest]
#[case("addi x5, x0, 10", Xlen::host())]
#[case("ld x1, 0(x2)", Xlen::Rv64)]
#[case("lq x1, 0(x2)", Xlen::Rv128)]
#[case("c.jal 8", Xlen::Rv32)]
fn test_auto_width_picks_first_supporting_candidate(#[case] line: &str, #[case] xlen: Xlen) {
    let inst = Instruction::from_text(line, &Config::default()).unwrap();
    assert_eq!(inst.xlen(), xlen);
}

#[test]
fn test_auto_width_decodes_on_later_candidate() {
    // c.jal on RV32; c.addiw with a reserved rd on RV64 and RV128.
    let inst = Instruction::from_word(0x2021, 16, &Config::default()).unwrap();
    assert_eq!(inst.asm(), "c.jal 8");
    assert_eq!(inst.xlen(), Xlen::Rv32);
}

#[test]
fn test_auto_width_reports_first_candidate_error() {
    let err = Instruction::from_hex("0xffffffff", &Config::new(IsaWidth::Auto, false)).unwrap_err();
    assert_eq!(err, CodecError::UndecodableEncoding { encoding: "0xffffffff".to_string() });
}

#[test]
fn test_unknown_mnemonic() {
    let err = Instruction::from_text("mul x1, x2, x3", &Config::default()).unwrap_err();
    assert_eq!(err, CodecError::UnknownMnemonic { mnemonic: "mul".to_string() });
    assert_eq!(err.to_string(), "unknown mnemonic `mul`");
}

#[rstest]
#[case("addi x1, x2")]
#[case("addi")]
#[case("addi x1, x2, 3, 4")]
#[case("ret x1")]
#[case("add x1, 0(x2)")]
fn test_malformed_operands(#[case] line: &str) {
    let err = Instruction::from_text(line, &Config::default()).unwrap_err();
    assert!(matches!(err, CodecError::MalformedOperands { .. }), "`{line}`: {err:?}");
}

#[test]
fn test_arity_error_lists_expected_operands() {
    let err = Instruction::from_text("addi x1, x2", &Config::default()).unwrap_err();
    let CodecError::MalformedOperands { mnemonic, detail } = err else { panic!("expected malformed operands") };
    assert_eq!(mnemonic, "addi");
    assert!(detail.starts_with("expected 3 operands (rd, rs1, imm)"), "{detail}");
    assert!(detail.ends_with("found 2"), "{detail}");
}

#[test]
fn test_register_out_of_range() {
    let err = Instruction::from_text("addi x32, x0, 1", &Config::default()).unwrap_err();
    assert_eq!(err, CodecError::OutOfRange { token: "x32".to_string(), min: 0, max: 31 });
}

#[test]
fn test_unknown_csr() {
    let err = Instruction::from_text("csrrs x1, bogus, x0", &Config::default()).unwrap_err();
    assert_eq!(err, CodecError::UnknownCsr { token: "bogus".to_string() });
}

#[rstest]
#[case("")]
#[case("   ")]
#[case("addi x1, x2, ten")]
#[case("lw x1, 4(x2")]
fn test_syntax_errors(#[case] line: &str) {
    let err = Instruction::from_text(line, &Config::default()).unwrap_err();
    assert!(matches!(err, CodecError::Syntax { .. }), "`{line}`: {err:?}");
}

#[test]
fn test_from_binary_word() {
    let inst = Instruction::from_binary("00000000101000000000001010010011", &config(Xlen::Rv64)).unwrap();
    assert_eq!(inst.asm(), "addi x5, x0, 10");
    assert_eq!(inst.hex(), "00a00293");
}

#[test]
fn test_from_binary_halfword_with_prefix_and_separators() {
    let inst = Instruction::from_binary("0b0100_0001_1101_0010", &Config::default()).unwrap();
    assert_eq!(inst.asm(), "c.lwsp x3, 5");
    assert_eq!(inst.hex(), "41d2");
    assert_eq!(inst.encoding(), Encoding::Compressed(0x41d2));
}

#[test]
fn test_from_binary_rejects_wide_quadrant_mismatch() {
    let err = Instruction::from_binary("00000000000000000000000000000001", &Config::default()).unwrap_err();
    assert_eq!(err, CodecError::UndecodableEncoding { encoding: "0x00000001".to_string() });
}

#[rstest]
#[case("0101")]
#[case("0000000000000000000000000")]
#[case("0b0102")]
fn test_from_binary_rejects_bad_input(#[case] bits: &str) {
    let err = Instruction::from_binary(bits, &Config::default()).unwrap_err();
    assert!(matches!(err, CodecError::Syntax { .. }), "`{bits}`: {err:?}");
}

#[rstest]
#[case("0x41d2", "c.lwsp x3, 5", "41d2")]
#[case("0x00a00293", "addi x5, x0, 10", "00a00293")]
#[case("0X00A00293", "addi x5, x0, 10", "00a00293")]
fn test_from_hex(#[case] text: &str, #[case] asm: &str, #[case] hex: &str) {
    let inst = Instruction::from_hex(text, &config(Xlen::Rv64)).unwrap();
    assert_eq!(inst.asm(), asm);
    assert_eq!(inst.hex(), hex);
}

#[rstest]
#[case("0x123")]
#[case("0x123456")]
#[case("00a00293")]
#[case("0x00g00293")]
#[case("0x+0a1")]
#[case("0x+00a0293")]
fn test_from_hex_rejects_bad_input(#[case] text: &str) {
    let err = Instruction::from_hex(text, &Config::default()).unwrap_err();
    assert!(matches!(err, CodecError::Syntax { .. }), "`{text}`: {err:?}");
}

#[test]
fn test_from_hex_reserved_halfword() {
    let err = Instruction::from_hex("0x0000", &config(Xlen::Rv64)).unwrap_err();
    assert_eq!(err, CodecError::UndecodableEncoding { encoding: "0x0000".to_string() });
}

#[test]
fn test_from_word_rejects_other_lengths() {
    let err = Instruction::from_word(0x13, 24, &Config::default()).unwrap_err();
    assert!(matches!(err, CodecError::Syntax { .. }));
}

#[test]
fn test_explicit_table_entry_points() {
    let table = DescriptorTable::global().unwrap();
    let inst = Instruction::assemble(table, "sw x5, 8(x6)", &config(Xlen::Rv32)).unwrap();
    assert_eq!(inst.hex(), "00532423");
    let back = Instruction::disassemble(table, inst.encoding(), &config(Xlen::Rv32)).unwrap();
    assert_eq!(back.asm(), "sw x5, 8(x6)");
}
