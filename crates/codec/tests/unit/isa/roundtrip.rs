//! Property-Based Round-Trip Tests.
//!
//! Random words carrying some descriptor's fixed bits are disassembled; any
//! word that decodes must reassemble from its own text to the identical
//! encoding and operands. Every successful translation must also survive a
//! trip through its `hex` rendering.

use proptest::prelude::*;

use rvcodec_core::{Config, DescriptorTable, Instruction, IsaWidth, Xlen};

// ── Strategies ──────────────────────────────────────────────────────────

fn table() -> &'static DescriptorTable {
    DescriptorTable::global().unwrap()
}

/// A word that carries the fixed bits of one catalog entry, the XLEN it is
/// decoded at, and the encoding length.
fn arb_patterned_word() -> impl Strategy<Value = (u32, Xlen, u32)> {
    let count = table().descriptors().len();
    (0..count, any::<u32>(), prop::sample::select(Xlen::ALL.to_vec())).prop_map(|(index, noise, pick)| {
        let d = &table().descriptors()[index];
        let xlen = if d.isa.contains(pick) { pick } else { d.min_xlen().unwrap_or(Xlen::Rv64) };
        let word = (noise & !d.mask & d.format.word_mask()) | d.match_bits;
        let len = if d.format.is_compressed() { 16 } else { 32 };
        (word, xlen, len)
    })
}

/// Hand-written lines across formats and widths.
fn valid_line() -> impl Strategy<Value = (&'static str, Xlen)> {
    prop::sample::select(vec![
        ("addi x5, x0, 10", Xlen::Rv64),
        ("lui x1, -1", Xlen::Rv32),
        ("jal x1, -4", Xlen::Rv64),
        ("sd x1, -8(x2)", Xlen::Rv64),
        ("fmadd.d f1, f2, f3, f4, rup", Xlen::Rv64),
        ("csrrwi x0, fflags, 5", Xlen::Rv32),
        ("fence rw, w", Xlen::Rv64),
        ("c.lwsp x3, 5", Xlen::Rv32),
        ("c.lq x8, 1(x9)", Xlen::Rv128),
        ("c.j -2", Xlen::Rv64),
        ("sllid x1, x2, 63", Xlen::Rv128),
        ("ret", Xlen::Rv64),
    ])
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2048))]

    #[test]
    fn decoded_words_reassemble_identically((word, xlen, len) in arb_patterned_word()) {
        let config = Config::new(IsaWidth::from(xlen), false);
        if let Ok(decoded) = Instruction::from_word(word, len, &config) {
            let again = Instruction::from_text(decoded.asm(), &config);
            prop_assert!(again.is_ok(), "`{}` ({:#x}) failed to reassemble: {:?}", decoded.asm(), word, again.err());
            let again = again.unwrap();
            prop_assert_eq!(again.encoding(), decoded.encoding());
            prop_assert_eq!(again.operands(), decoded.operands());
            prop_assert_eq!(again.asm(), decoded.asm());
        }
    }

    #[test]
    fn abi_rendering_reassembles((word, xlen, len) in arb_patterned_word()) {
        let config = Config::new(IsaWidth::from(xlen), true);
        if let Ok(decoded) = Instruction::from_word(word, len, &config) {
            let again = Instruction::from_text(decoded.asm(), &config).unwrap();
            prop_assert_eq!(again.encoding(), decoded.encoding());
        }
    }

    #[test]
    fn hex_rendering_round_trips((line, xlen) in valid_line()) {
        let config = Config::new(IsaWidth::from(xlen), false);
        let inst = Instruction::from_text(line, &config).unwrap();
        let back = Instruction::from_hex(&format!("0x{}", inst.hex()), &config).unwrap();
        prop_assert_eq!(back.encoding(), inst.encoding());
        prop_assert_eq!(back.asm(), inst.asm());
    }

    #[test]
    fn arbitrary_text_never_panics(line in "\\PC{0,48}") {
        let _ = Instruction::from_text(&line, &Config::default());
    }

    #[test]
    fn memory_operand_spacing_does_not_change_encoding(
        line in "lw[ \u{a0}\u{3000}]x5,[ \u{2003}]{0,2}8[ \t\u{a0}\u{3000}]{0,3}\\(x6\\)",
    ) {
        let inst = Instruction::from_text(&line, &Config::default()).unwrap();
        prop_assert_eq!(inst.hex(), "00832283");
    }
}
