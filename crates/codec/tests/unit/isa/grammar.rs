//! Operand Grammar Tests.
//!
//! Verifies tokenizing of operand text, the `offset(base)` form, arity and
//! syntax ordering, and numeric literal parsing.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvcodec_core::CodecError;
use rvcodec_core::isa::format::{Role, Syntax};
use rvcodec_core::isa::grammar::{OperandList, arrange, parse_immediate, split_mnemonic, tokenize};

fn tokens(text: &str) -> Vec<String> {
    tokenize(text).unwrap().tokens
}

#[test]
fn test_split_mnemonic_lowercases_and_trims() {
    assert_eq!(split_mnemonic("  ADDI  x5, x0, 10 "), Some(("addi".to_string(), "x5, x0, 10")));
    assert_eq!(split_mnemonic("ecall"), Some(("ecall".to_string(), "")));
    assert_eq!(split_mnemonic("   "), None);
}

#[rstest]
#[case("x5, x0, 10", &["x5", "x0", "10"])]
#[case("x5 x0 10", &["x5", "x0", "10"])]
#[case("x5,x0,   10", &["x5", "x0", "10"])]
#[case("x5, 8(x6)", &["x5", "8", "x6"])]
#[case("x5, ( x6 )", &["x5", "0", "x6"])]
#[case("x5 -4(sp)", &["x5", "-4", "sp"])]
#[case("x5, 8 (x6)", &["x5", "8", "x6"])]
#[case("x5, 8\t(x6)", &["x5", "8", "x6"])]
#[case("x5 8 (x6)", &["x5", "8", "x6"])]
#[case("x5, 8\u{a0}(x6)", &["x5", "8", "x6"])]
#[case("x5\u{3000}8(x6)", &["x5", "8", "x6"])]
#[case("", &[])]
fn test_tokenize(#[case] text: &str, #[case] expected: &[&str]) {
    assert_eq!(tokens(text), expected);
}

#[test]
fn test_memory_flag_only_for_offset_base() {
    assert!(tokenize("x1, 0(x2)").unwrap().memory);
    assert!(!tokenize("x1, x2, 0").unwrap().memory);
}

#[rstest]
#[case("x1,,x2")]
#[case("x1, x2,")]
#[case("x1, 8(x2")]
#[case("x1, 8x2)")]
#[case("x1, 8(x2) x3")]
#[case("8(x2), x1")]
#[case("x1, 8((x2))")]
#[case("x1, 8()")]
fn test_tokenize_rejects(#[case] text: &str) {
    assert!(matches!(tokenize(text), Err(CodecError::Syntax { .. })), "{text}");
}

#[test]
fn test_arrange_accepts_plain_memory_order() {
    let roles = [Role::Rd, Role::Imm, Role::Rs1];
    let plain = arrange(tokenize("x5, x6, -8").unwrap(), "lw", &roles, Syntax::Memory).unwrap();
    let memory = arrange(tokenize("x5, -8(x6)").unwrap(), "lw", &roles, Syntax::Memory).unwrap();
    assert_eq!(plain, vec!["x5", "-8", "x6"]);
    assert_eq!(plain, memory);
}

#[test]
fn test_arrange_rejects_memory_operand_on_plain_instruction() {
    let roles = [Role::Rd, Role::Rs1, Role::Imm];
    let err = arrange(tokenize("x5, 4(x6)").unwrap(), "addi", &roles, Syntax::Plain).unwrap_err();
    assert!(matches!(err, CodecError::MalformedOperands { ref mnemonic, .. } if mnemonic == "addi"));
}

#[test]
fn test_arrange_allows_omitted_rounding_mode() {
    let roles = [Role::Frd, Role::Frs1, Role::Frs2, Role::Rm];
    let tokens = arrange(tokenize("f1, f2, f3").unwrap(), "fadd.s", &roles, Syntax::Plain).unwrap();
    assert_eq!(tokens.len(), 3);
}

#[rstest]
#[case("x1, x2")]
#[case("x1, x2, x3, x4")]
#[case("")]
fn test_arrange_arity_mismatch(#[case] text: &str) {
    let roles = [Role::Rd, Role::Rs1, Role::Rs2];
    let err = arrange(tokenize(text).unwrap(), "add", &roles, Syntax::Plain).unwrap_err();
    match err {
        CodecError::MalformedOperands { mnemonic, detail } => {
            assert_eq!(mnemonic, "add");
            assert!(detail.contains("expected 3 operands"), "{detail}");
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_arrange_without_operands() {
    assert_eq!(arrange(OperandList::default(), "ecall", &[], Syntax::Plain).unwrap(), Vec::<String>::new());
}

#[rstest]
#[case("0", 0)]
#[case("10", 10)]
#[case("-10", -10)]
#[case("+7", 7)]
#[case("0x7FF", 2047)]
#[case("-0x800", -2048)]
#[case("0XfF", 255)]
#[case("9223372036854775807", i64::MAX)]
fn test_parse_immediate(#[case] token: &str, #[case] expected: i64) {
    assert_eq!(parse_immediate(token).unwrap(), expected);
}

#[rstest]
#[case("")]
#[case("-")]
#[case("0x")]
#[case("1.5")]
#[case("0b101")]
#[case("ten")]
#[case("9223372036854775808")]
#[case("0x1_0000_0000_0000_0000")]
fn test_parse_immediate_rejects(#[case] token: &str) {
    assert!(matches!(parse_immediate(token), Err(CodecError::Syntax { .. })), "{token}");
}
