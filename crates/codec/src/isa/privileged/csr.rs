//! Control and Status Register (CSR) names and addresses.
//!
//! Covers the user floating-point and counter CSRs, the supervisor and
//! machine trap-setup/handling CSRs, debug/trigger CSRs, and the indexed
//! `pmpcfgN`, `pmpaddrN`, `mhpmcounterN[h]`, `mhpmeventN` and
//! `hpmcounterN[h]` families.

use std::borrow::Cow;

use crate::common::error::CodecError;
use crate::isa::grammar;

/// Floating-Point Accrued Exceptions.
pub const FFLAGS: u16 = 0x001;
/// Floating-Point Dynamic Rounding Mode.
pub const FRM: u16 = 0x002;
/// Floating-Point Control and Status (`frm` + `fflags`).
pub const FCSR: u16 = 0x003;

/// Largest encodable CSR address (12 bits).
pub const CSR_MAX: u16 = 0xFFF;

/// Named CSRs with a single address.
const CSR_NAMES: &[(&str, u16)] = &[
    ("fflags", FFLAGS),
    ("frm", FRM),
    ("fcsr", FCSR),
    ("cycle", 0xC00),
    ("time", 0xC01),
    ("instret", 0xC02),
    ("cycleh", 0xC80),
    ("timeh", 0xC81),
    ("instreth", 0xC82),
    ("sstatus", 0x100),
    ("sie", 0x104),
    ("stvec", 0x105),
    ("scounteren", 0x106),
    ("senvcfg", 0x10A),
    ("sscratch", 0x140),
    ("sepc", 0x141),
    ("scause", 0x142),
    ("stval", 0x143),
    ("sip", 0x144),
    ("stimecmp", 0x14D),
    ("satp", 0x180),
    ("mstatus", 0x300),
    ("misa", 0x301),
    ("medeleg", 0x302),
    ("mideleg", 0x303),
    ("mie", 0x304),
    ("mtvec", 0x305),
    ("mcounteren", 0x306),
    ("menvcfg", 0x30A),
    ("mstatush", 0x310),
    ("menvcfgh", 0x31A),
    ("mcountinhibit", 0x320),
    ("mscratch", 0x340),
    ("mepc", 0x341),
    ("mcause", 0x342),
    ("mtval", 0x343),
    ("mip", 0x344),
    ("mtinst", 0x34A),
    ("mtval2", 0x34B),
    ("mseccfg", 0x747),
    ("mseccfgh", 0x757),
    ("tselect", 0x7A0),
    ("tdata1", 0x7A1),
    ("tdata2", 0x7A2),
    ("tdata3", 0x7A3),
    ("mcontext", 0x7A8),
    ("dcsr", 0x7B0),
    ("dpc", 0x7B1),
    ("dscratch0", 0x7B2),
    ("dscratch1", 0x7B3),
    ("mcycle", 0xB00),
    ("minstret", 0xB02),
    ("mcycleh", 0xB80),
    ("minstreth", 0xB82),
    ("mvendorid", 0xF11),
    ("marchid", 0xF12),
    ("mimpid", 0xF13),
    ("mhartid", 0xF14),
    ("mconfigptr", 0xF15),
];

/// An indexed CSR family: `{prefix}{n}{suffix}` lives at `base + n`.
struct CsrFamily {
    prefix: &'static str,
    suffix: &'static str,
    base: u16,
    first: u16,
    last: u16,
}

const CSR_FAMILIES: &[CsrFamily] = &[
    CsrFamily { prefix: "pmpcfg", suffix: "", base: 0x3A0, first: 0, last: 15 },
    CsrFamily { prefix: "pmpaddr", suffix: "", base: 0x3B0, first: 0, last: 63 },
    CsrFamily { prefix: "mhpmcounter", suffix: "h", base: 0xB80, first: 3, last: 31 },
    CsrFamily { prefix: "mhpmcounter", suffix: "", base: 0xB00, first: 3, last: 31 },
    CsrFamily { prefix: "mhpmevent", suffix: "", base: 0x320, first: 3, last: 31 },
    CsrFamily { prefix: "hpmcounter", suffix: "h", base: 0xC80, first: 3, last: 31 },
    CsrFamily { prefix: "hpmcounter", suffix: "", base: 0xC00, first: 3, last: 31 },
];

impl CsrFamily {
    fn index_of(&self, name: &str) -> Option<u16> {
        let digits = name.strip_prefix(self.prefix)?.strip_suffix(self.suffix)?;
        if digits.is_empty()
            || !digits.bytes().all(|b| b.is_ascii_digit())
            || (digits.len() > 1 && digits.starts_with('0'))
        {
            return None;
        }
        let n: u16 = digits.parse().ok()?;
        (self.first..=self.last).contains(&n).then_some(self.base + n)
    }

    fn name_of(&self, addr: u16) -> Option<String> {
        let n = addr.checked_sub(self.base)?;
        (self.first..=self.last).contains(&n).then(|| format!("{}{n}{}", self.prefix, self.suffix))
    }
}

/// Resolves a CSR operand: a numeric address (decimal or `0x` hex) or a
/// symbolic name.
///
/// # Errors
///
/// * [`CodecError::OutOfRange`] for numerals outside `0..=0xfff`.
/// * [`CodecError::UnknownCsr`] for names not in the table.
pub fn resolve_csr(token: &str) -> Result<u16, CodecError> {
    if token.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+') {
        let value = grammar::parse_immediate(token)?;
        return u16::try_from(value).ok().filter(|v| *v <= CSR_MAX).ok_or_else(|| CodecError::OutOfRange {
            token: token.to_string(),
            min: 0,
            max: i64::from(CSR_MAX),
        });
    }
    let name = token.to_ascii_lowercase();
    CSR_NAMES
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, addr)| *addr)
        .or_else(|| CSR_FAMILIES.iter().find_map(|family| family.index_of(&name)))
        .ok_or_else(|| CodecError::UnknownCsr { token: token.to_string() })
}

/// Returns the symbolic name of a CSR address, if it has one.
pub fn csr_name(addr: u16) -> Option<Cow<'static, str>> {
    CSR_NAMES
        .iter()
        .find(|(_, a)| *a == addr)
        .map(|(name, _)| Cow::Borrowed(*name))
        .or_else(|| CSR_FAMILIES.iter().find_map(|family| family.name_of(addr)).map(Cow::Owned))
}

/// Renders a CSR operand: its name when known, otherwise `0x`-prefixed hex.
pub fn render_csr(addr: u16) -> String {
    csr_name(addr).map_or_else(|| format!("{addr:#x}"), Cow::into_owned)
}
