//! Resolved operand values.
//!
//! Values are checked against their role when parsed and against their field
//! width when encoded; an [`OperandValue`] on its own only guarantees the
//! shape (register, immediate, CSR, ...).

use std::fmt;

/// A resolved operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperandValue {
    /// Integer register index (0-31).
    Register(u8),
    /// Floating-point register index (0-31).
    FloatRegister(u8),
    /// Signed immediate, offset or CSR immediate, as written.
    Immediate(i64),
    /// CSR address (12-bit).
    Csr(u16),
    /// Shift amount.
    ShiftAmount(u8),
    /// Static or dynamic rounding mode.
    RoundingMode(RoundingMode),
    /// Fence ordering set (bits: i=8, o=4, r=2, w=1).
    FenceSet(u8),
}

impl OperandValue {
    /// Short kind name used in messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Register(_) => "integer register",
            Self::FloatRegister(_) => "float register",
            Self::Immediate(_) => "immediate",
            Self::Csr(_) => "CSR",
            Self::ShiftAmount(_) => "shift amount",
            Self::RoundingMode(_) => "rounding mode",
            Self::FenceSet(_) => "fence set",
        }
    }
}

/// RISC-V rounding mode encoding.
///
/// `Dyn` selects the mode held in `fcsr.frm` and is the default when the
/// operand is omitted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Round to Nearest, ties to Even.
    Rne = 0b000,
    /// Round towards Zero.
    Rtz = 0b001,
    /// Round Down (towards −∞).
    Rdn = 0b010,
    /// Round Up (towards +∞).
    Rup = 0b011,
    /// Round to Nearest, ties to Max Magnitude.
    Rmm = 0b100,
    /// Dynamic: use `fcsr.frm`.
    #[default]
    Dyn = 0b111,
}

impl RoundingMode {
    /// Decodes a 3-bit rounding mode field.
    ///
    /// Returns `None` for the reserved encodings 0b101 and 0b110.
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits & 0x7 {
            0b000 => Some(Self::Rne),
            0b001 => Some(Self::Rtz),
            0b010 => Some(Self::Rdn),
            0b011 => Some(Self::Rup),
            0b100 => Some(Self::Rmm),
            0b111 => Some(Self::Dyn),
            _ => None,
        }
    }

    /// Field encoding.
    pub const fn bits(self) -> u32 {
        self as u32
    }

    /// Assembly name (`rne`, `rtz`, `rdn`, `rup`, `rmm`, `dyn`).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rne => "rne",
            Self::Rtz => "rtz",
            Self::Rdn => "rdn",
            Self::Rup => "rup",
            Self::Rmm => "rmm",
            Self::Dyn => "dyn",
        }
    }

    /// Parses an assembly name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        [Self::Rne, Self::Rtz, Self::Rdn, Self::Rup, Self::Rmm, Self::Dyn]
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for RoundingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fence set letters, most significant bit first.
const FENCE_LETTERS: [(char, u8); 4] = [('i', 0b1000), ('o', 0b0100), ('r', 0b0010), ('w', 0b0001)];

/// Parses a fence set such as `rw` or `iorw`; `0` is the empty set.
///
/// Letters may appear in any order but at most once.
pub fn parse_fence_set(token: &str) -> Option<u8> {
    if token == "0" {
        return Some(0);
    }
    let mut set = 0u8;
    for c in token.chars() {
        let (_, bit) = FENCE_LETTERS.iter().find(|(letter, _)| c.eq_ignore_ascii_case(letter))?;
        if set & bit != 0 {
            return None;
        }
        set |= bit;
    }
    (set != 0).then_some(set)
}

/// Renders a fence set in canonical `iorw` order.
pub fn render_fence_set(set: u8) -> String {
    if set == 0 {
        return "0".to_string();
    }
    FENCE_LETTERS.iter().filter(|(_, bit)| set & bit != 0).map(|(letter, _)| letter).collect()
}
