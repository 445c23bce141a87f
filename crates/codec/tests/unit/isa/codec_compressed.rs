//! Compressed Format Codec Tests.
//!
//! Verifies CR, CI, CSS, CIW, CL, CS, CA, CB and CJ encodings, the 3-bit
//! register fields, scaled immediates, reserved encodings and the slots that
//! change meaning with XLEN.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvcodec_core::{CodecError, Instruction, Xlen};

use crate::common::{abi_config, assemble, assemble_on, config, disassemble_half};

#[rstest]
#[case("c.lwsp x3, 5", "41d2")]
#[case("c.li x10, 5", "4515")]
#[case("c.addi x8, -1", "147d")]
#[case("c.slli x1, 3", "008e")]
#[case("c.lw x8, 1(x9)", "40c0")]
#[case("c.sub x8, x9", "8c05")]
#[case("c.and x10, x11", "8d6d")]
#[case("c.addw x8, x9", "9c25")]
#[case("c.mv x1, x2", "808a")]
#[case("c.add x1, x2", "908a")]
#[case("c.jr x1", "8082")]
#[case("c.j 8", "a021")]
#[case("c.j -2", "bffd")]
#[case("c.swsp x1, 3", "c606")]
#[case("c.addi4spn x8, 1", "0040")]
#[case("c.addi4spn x9, 255", "1fe4")]
#[case("c.nop", "0001")]
#[case("c.ebreak", "9002")]
fn test_encodes_and_renders_canonically(#[case] line: &str, #[case] hex: &str) {
    let inst = assemble(line);
    assert_eq!(inst.hex(), hex);
    assert_eq!(inst.asm(), line);
    assert!(inst.encoding().is_compressed());
}

#[test]
fn test_lwsp_scales_by_word() {
    let inst = assemble("c.lwsp x3, 5");
    assert_eq!(inst.descriptor().format.to_string(), "CI");
    let abi = Instruction::from_text("c.lwsp x3, 5", &abi_config(Xlen::Rv64)).unwrap();
    assert_eq!(abi.asm(), "c.lwsp gp, 5");
    assert_eq!(abi.hex(), "41d2");
}

#[rstest]
#[case("c.lw x1, 0(x9)")]
#[case("c.lw x8, 0(x16)")]
#[case("c.sub x7, x9")]
#[case("c.beqz x1, 4")]
#[case("c.addi4spn x2, 4")]
fn test_narrow_register_fields(#[case] line: &str) {
    let err = Instruction::from_text(line, &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::RegisterNotEncodable { .. }), "{line}: {err:?}");
}

#[rstest]
#[case("c.lwsp x0, 1")]
#[case("c.lui x2, 1")]
#[case("c.lui x0, 1")]
#[case("c.jr x0")]
#[case("c.mv x1, x0")]
#[case("c.add x0, x2")]
#[case("c.addi x0, 1")]
fn test_reserved_registers(#[case] line: &str) {
    let err = Instruction::from_text(line, &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::RegisterNotEncodable { .. }), "{line}: {err:?}");
}

#[rstest]
#[case("c.lui x3, 0")]
#[case("c.addi16sp 0")]
#[case("c.addi4spn x8, 0")]
fn test_reserved_zero_immediates(#[case] line: &str) {
    let err = Instruction::from_text(line, &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::ImmediateOutOfRange { value: 0, .. }), "{line}: {err:?}");
}

#[rstest]
#[case("c.lwsp x1, 63", true)]
#[case("c.lwsp x1, 64", false)]
#[case("c.lw x8, 31(x9)", true)]
#[case("c.lw x8, 32(x9)", false)]
#[case("c.addi x1, 31", true)]
#[case("c.addi x1, -32", true)]
#[case("c.addi x1, 32", false)]
#[case("c.addi16sp -32", true)]
#[case("c.addi16sp 31", true)]
#[case("c.beqz x8, 254", true)]
#[case("c.beqz x8, -256", true)]
#[case("c.beqz x8, 256", false)]
#[case("c.j 2046", true)]
#[case("c.j -2048", true)]
#[case("c.j 2048", false)]
fn test_compressed_immediate_boundaries(#[case] line: &str, #[case] fits: bool) {
    let result = Instruction::from_text(line, &config(Xlen::Rv64));
    if fits {
        assert!(result.is_ok(), "{line}: {result:?}");
    } else {
        assert!(matches!(result, Err(CodecError::ImmediateOutOfRange { .. })), "{line}: {result:?}");
    }
}

#[test]
fn test_compressed_branch_offsets_are_bytes() {
    let err = Instruction::from_text("c.bnez x8, 3", &config(Xlen::Rv64)).unwrap_err();
    assert!(matches!(err, CodecError::MisalignedImmediate { alignment: 2, .. }));
}

#[test]
fn test_compressed_shift_width() {
    assert!(Instruction::from_text("c.slli x1, 32", &config(Xlen::Rv32)).is_err());
    assert_eq!(assemble_on(Xlen::Rv64, "c.slli x1, 32").asm(), "c.slli x1, 32");
    assert_eq!(assemble_on(Xlen::Rv32, "c.srai x8, 31").asm(), "c.srai x8, 31");
}

#[test]
fn test_xlen_dependent_slots() {
    // funct3 011 in quadrant 0: c.flw on RV32, c.ld on RV64 and RV128.
    assert_eq!(disassemble_half(Xlen::Rv32, 0x6000).asm(), "c.flw f8, 0(x8)");
    assert_eq!(disassemble_half(Xlen::Rv64, 0x6000).asm(), "c.ld x8, 0(x8)");
    assert_eq!(disassemble_half(Xlen::Rv128, 0x6000).asm(), "c.ld x8, 0(x8)");
    // funct3 001 in quadrant 0: c.fld on RV32/RV64, c.lq on RV128.
    assert_eq!(disassemble_half(Xlen::Rv64, 0x2000).asm(), "c.fld f8, 0(x8)");
    assert_eq!(disassemble_half(Xlen::Rv128, 0x2000).asm(), "c.lq x8, 0(x8)");
    // c.jal exists only on RV32; the same slot is c.addiw elsewhere.
    assert_eq!(assemble_on(Xlen::Rv32, "c.jal 8").hex(), "2021");
    assert!(matches!(
        Instruction::from_text("c.jal 8", &config(Xlen::Rv64)),
        Err(CodecError::UnsupportedOnIsa { isa: Xlen::Rv64, .. })
    ));
}

#[rstest]
#[case(0x0000)]
#[case(0x4002)]
#[case(0x8002)]
#[case(0x6101)]
fn test_reserved_halfwords_are_undecodable(#[case] half: u32) {
    let result = Instruction::from_word(half, 16, &config(Xlen::Rv64));
    assert!(matches!(result, Err(CodecError::UndecodableEncoding { .. })), "{half:#06x}: {result:?}");
}

#[test]
fn test_subw_slot_is_reserved_on_rv32() {
    assert_eq!(disassemble_half(Xlen::Rv64, 0x9c25).asm(), "c.addw x8, x9");
    assert!(Instruction::from_word(0x9c25, 16, &config(Xlen::Rv32)).is_err());
}

#[test]
fn test_stack_adjust_decodes_in_scale_units() {
    let inst = assemble("c.addi16sp -2");
    let back = disassemble_half(Xlen::Rv64, inst.encoding().word() as u16);
    assert_eq!(back.asm(), "c.addi16sp -2");
}
