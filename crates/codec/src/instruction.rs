//! Instruction facade.
//!
//! An [`Instruction`] is the result of one translation request in either
//! direction. It pairs the canonical `asm` rendering with the machine word,
//! and is never mutated after construction: both renderings exist or the
//! request fails.
//!
//! Assembly goes text -> grammar -> descriptor (or pseudo expansion) ->
//! resolver -> format codec. Disassembly goes word -> bit-pattern index ->
//! format codec -> rendering. Assembled instructions are rendered from the
//! decoded word, so both directions print the same canonical text.

use std::fmt;

use crate::common::error::CodecError;
use crate::config::{Config, IsaWidth, Xlen};
use crate::isa::abi::{RegisterFile, register_name, resolve_float_register, resolve_register};
use crate::isa::descriptor::InstructionDescriptor;
pub use crate::isa::encoding::Encoding;
use crate::isa::format::{Role, Sign, Syntax};
use crate::isa::grammar::{arrange, parse_immediate, split_mnemonic, tokenize};
use crate::isa::operand::{OperandValue, RoundingMode, parse_fence_set, render_fence_set};
use crate::isa::privileged::csr::{render_csr, resolve_csr};
use crate::isa::table::{DescriptorTable, Lookup};

/// One translated instruction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Instruction {
    descriptor: InstructionDescriptor,
    operands: Vec<OperandValue>,
    xlen: Xlen,
    encoding: Encoding,
    asm: String,
}

impl Instruction {
    /// Assembles one line of text with the shared descriptor table.
    ///
    /// # Errors
    ///
    /// Any request-time [`CodecError`]; [`CodecError::TableConflict`] if the
    /// shared table failed to build.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvcodec_core::{Config, Instruction};
    ///
    /// let inst = Instruction::from_text("addi x5, x0, 10", &Config::default()).unwrap();
    /// assert_eq!(inst.hex(), "00a00293");
    /// ```
    pub fn from_text(line: &str, config: &Config) -> Result<Self, CodecError> {
        Self::assemble(DescriptorTable::global()?, line, config)
    }

    /// Disassembles a string of 16 or 32 `0`/`1` digits, with an optional
    /// `0b` prefix and `_` separators.
    ///
    /// # Errors
    ///
    /// [`CodecError::Syntax`] for other lengths or digits, otherwise as for
    /// [`Instruction::from_word`].
    pub fn from_binary(bits: &str, config: &Config) -> Result<Self, CodecError> {
        let trimmed = bits.trim();
        let body = trimmed.strip_prefix("0b").or_else(|| trimmed.strip_prefix("0B")).unwrap_or(trimmed);
        let digits: String = body.chars().filter(|c| *c != '_').collect();
        if !digits.chars().all(|c| c == '0' || c == '1') {
            return Err(syntax(trimmed, "expected binary digits"));
        }
        if digits.len() != 16 && digits.len() != 32 {
            return Err(syntax(trimmed, "binary instructions are 16 or 32 bits long"));
        }
        let word = u32::from_str_radix(&digits, 2).map_err(|_| syntax(trimmed, "expected binary digits"))?;
        Self::from_word(word, digits.len() as u32, config)
    }

    /// Disassembles `0x` followed by 4 (compressed) or 8 hex digits.
    ///
    /// # Errors
    ///
    /// [`CodecError::Syntax`] for a missing prefix or another digit count,
    /// otherwise as for [`Instruction::from_word`].
    pub fn from_hex(text: &str, config: &Config) -> Result<Self, CodecError> {
        let trimmed = text.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .ok_or_else(|| syntax(trimmed, "hex instructions start with 0x"))?;
        if digits.len() != 4 && digits.len() != 8 {
            return Err(syntax(trimmed, "hex instructions have 4 or 8 digits"));
        }
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(syntax(trimmed, "expected hex digits"));
        }
        let word = u32::from_str_radix(digits, 16).map_err(|_| syntax(trimmed, "expected hex digits"))?;
        Self::from_word(word, digits.len() as u32 * 4, config)
    }

    /// Disassembles a raw word of `len_bits` (16 or 32) bits with the shared
    /// descriptor table.
    ///
    /// # Errors
    ///
    /// [`CodecError::UndecodableEncoding`] when no descriptor matches at any
    /// candidate width, [`CodecError::Syntax`] for other lengths.
    pub fn from_word(word: u32, len_bits: u32, config: &Config) -> Result<Self, CodecError> {
        let encoding = Encoding::from_word(word, len_bits)?;
        Self::disassemble(DescriptorTable::global()?, encoding, config)
    }

    /// Assembles one line of text against `table`.
    ///
    /// # Errors
    ///
    /// * [`CodecError::Syntax`] for blank lines and bad operand text.
    /// * [`CodecError::UnknownMnemonic`] / [`CodecError::UnsupportedOnIsa`].
    /// * Resolver and codec errors for individual operands.
    pub fn assemble(table: &DescriptorTable, line: &str, config: &Config) -> Result<Self, CodecError> {
        assemble_line(table, line, config)
            .inspect(|inst| tracing::trace!(line, asm = %inst.asm, hex = %inst.encoding, xlen = %inst.xlen, "assembled"))
            .inspect_err(|err| tracing::debug!(line, %err, "assembly failed"))
    }

    /// Disassembles `encoding` against `table`, trying each candidate width
    /// of the configured ISA in order.
    ///
    /// # Errors
    ///
    /// The error from the first candidate width when none decodes the word.
    pub fn disassemble(table: &DescriptorTable, encoding: Encoding, config: &Config) -> Result<Self, CodecError> {
        let mut first_error = None;
        for xlen in config.isa.candidates() {
            match decode_at(table, encoding, xlen, config.abi) {
                Ok(inst) => {
                    tracing::trace!(hex = %encoding, asm = %inst.asm, %xlen, "disassembled");
                    return Ok(inst);
                }
                Err(err) => {
                    let _ = first_error.get_or_insert(err);
                }
            }
        }
        let err = first_error.unwrap_or_else(|| CodecError::UndecodableEncoding { encoding: format!("0x{encoding}") });
        tracing::debug!(hex = %encoding, %err, "disassembly failed");
        Err(err)
    }

    /// Canonical assembly text.
    pub fn asm(&self) -> &str {
        &self.asm
    }

    /// Lowercase hex of the word: 8 digits, or 4 for compressed halfwords.
    pub fn hex(&self) -> String {
        self.encoding.hex()
    }

    /// The machine word.
    pub const fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Width the instruction was encoded or decoded at.
    pub const fn xlen(&self) -> Xlen {
        self.xlen
    }

    /// Descriptor of the (base) instruction.
    pub const fn descriptor(&self) -> &InstructionDescriptor {
        &self.descriptor
    }

    /// Operand values in the descriptor's role order.
    pub fn operands(&self) -> &[OperandValue] {
        &self.operands
    }

    /// Canonical mnemonic.
    pub const fn mnemonic(&self) -> &'static str {
        self.descriptor.mnemonic
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.asm)
    }
}

fn syntax(token: &str, reason: &str) -> CodecError {
    CodecError::Syntax { token: token.to_string(), reason: reason.to_string() }
}

fn assemble_line(table: &DescriptorTable, line: &str, config: &Config) -> Result<Instruction, CodecError> {
    let (mnemonic, rest) = split_mnemonic(line).ok_or_else(|| syntax(line, "empty instruction"))?;
    let list = tokenize(rest)?;
    let (descriptor, values, xlen) = match table.lookup(&mnemonic)? {
        Lookup::Instruction(descriptor) => {
            let xlen = select_width(descriptor, config.isa)?;
            let tokens = arrange(list, descriptor.mnemonic, descriptor.operands, descriptor.syntax)?;
            let resolver = Resolver { mnemonic: descriptor.mnemonic, descriptor, xlen, abi: config.abi };
            (descriptor, resolver.resolve_all(descriptor.operands, &tokens)?, xlen)
        }
        Lookup::Pseudo { alias, target } => {
            let xlen = select_width(target, config.isa)?;
            let tokens = arrange(list, alias.mnemonic, alias.operands, Syntax::Plain)?;
            let resolver = Resolver { mnemonic: alias.mnemonic, descriptor: target, xlen, abi: config.abi };
            let own = resolver.resolve_all(alias.operands, &tokens)?;
            let values = alias.expand(&own).ok_or_else(|| CodecError::MalformedOperands {
                mnemonic: alias.mnemonic.to_string(),
                detail: format!("cannot expand to `{}`", target.mnemonic),
            })?;
            (target, values, xlen)
        }
    };

    let codec = descriptor.format.codec();
    let word = codec.encode(descriptor, &values, xlen)?;
    let encoding = Encoding::from_word(word, if descriptor.format.is_compressed() { 16 } else { 32 })?;
    let operands = codec.decode(descriptor, word, xlen)?;
    let asm = render(descriptor, &operands, config.abi);
    Ok(Instruction { descriptor: *descriptor, operands, xlen, encoding, asm })
}

fn decode_at(table: &DescriptorTable, encoding: Encoding, xlen: Xlen, abi: bool) -> Result<Instruction, CodecError> {
    let descriptor = table.decode(encoding, xlen)?;
    let operands = descriptor.format.codec().decode(descriptor, encoding.word(), xlen)?;
    let asm = render(descriptor, &operands, abi);
    Ok(Instruction { descriptor: *descriptor, operands, xlen, encoding, asm })
}

/// First candidate width on which the descriptor exists.
fn select_width(descriptor: &InstructionDescriptor, isa: IsaWidth) -> Result<Xlen, CodecError> {
    isa.candidates().into_iter().find(|xlen| descriptor.isa.contains(*xlen)).ok_or_else(|| {
        CodecError::UnsupportedOnIsa {
            mnemonic: descriptor.mnemonic.to_string(),
            isa: isa.fixed().unwrap_or_else(Xlen::host),
        }
    })
}

/// Turns raw tokens into operand values for one mnemonic.
struct Resolver<'d> {
    /// Mnemonic as written (the pseudo name for aliases).
    mnemonic: &'static str,
    /// Descriptor whose immediate layout bounds shift amounts.
    descriptor: &'d InstructionDescriptor,
    xlen: Xlen,
    abi: bool,
}

impl Resolver<'_> {
    fn resolve_all(&self, roles: &[Role], tokens: &[String]) -> Result<Vec<OperandValue>, CodecError> {
        let mut values = roles
            .iter()
            .zip(tokens)
            .map(|(role, token)| self.resolve(*role, token))
            .collect::<Result<Vec<_>, _>>()?;
        if values.len() + 1 == roles.len() && roles.last() == Some(&Role::Rm) {
            values.push(OperandValue::RoundingMode(RoundingMode::Dyn));
        }
        Ok(values)
    }

    fn resolve(&self, role: Role, token: &str) -> Result<OperandValue, CodecError> {
        Ok(match role {
            Role::Rd | Role::Rs1 | Role::Rs2 => OperandValue::Register(resolve_register(token, self.abi)?),
            Role::Frd | Role::Frs1 | Role::Frs2 | Role::Frs3 => {
                OperandValue::FloatRegister(resolve_float_register(token, self.abi)?)
            }
            Role::Imm | Role::Zimm => OperandValue::Immediate(parse_immediate(token)?),
            Role::Shamt => {
                let value = parse_immediate(token)?;
                let shamt = u8::try_from(value).map_err(|_| {
                    let (min, max) = self.descriptor.imm.map_or((0, 31), |layout| layout.range(self.xlen));
                    CodecError::ImmediateOutOfRange {
                        mnemonic: self.mnemonic.to_string(),
                        value,
                        expected: format!("{min}..={max}"),
                    }
                })?;
                OperandValue::ShiftAmount(shamt)
            }
            Role::Csr => OperandValue::Csr(resolve_csr(token)?),
            Role::Rm => OperandValue::RoundingMode(
                RoundingMode::from_name(token)
                    .ok_or_else(|| syntax(token, "expected a rounding mode (rne, rtz, rdn, rup, rmm, dyn)"))?,
            ),
            Role::Pred | Role::Succ => OperandValue::FenceSet(
                parse_fence_set(token).ok_or_else(|| syntax(token, "expected a fence set such as iorw, rw or 0"))?,
            ),
        })
    }
}

/// Canonical text: ABI or numeric register names, `offset(base)` for
/// memory syntax, hex upper immediates, CSR names, and no `rm` when dynamic.
fn render(descriptor: &InstructionDescriptor, operands: &[OperandValue], abi: bool) -> String {
    let upper = descriptor.imm.is_some_and(|layout| layout.sign == Sign::Upper);
    let rendered: Vec<String> = operands
        .iter()
        .filter(|value| **value != OperandValue::RoundingMode(RoundingMode::Dyn))
        .map(|value| match *value {
            OperandValue::Register(index) => register_name(RegisterFile::Integer, index, abi).into_owned(),
            OperandValue::FloatRegister(index) => register_name(RegisterFile::Float, index, abi).into_owned(),
            OperandValue::Immediate(v) if upper => format!("{v:#x}"),
            OperandValue::Immediate(v) => v.to_string(),
            OperandValue::Csr(addr) => render_csr(addr),
            OperandValue::ShiftAmount(s) => s.to_string(),
            OperandValue::RoundingMode(mode) => mode.name().to_string(),
            OperandValue::FenceSet(set) => render_fence_set(set),
        })
        .collect();
    match (descriptor.syntax, rendered.as_slice()) {
        (_, []) => descriptor.mnemonic.to_string(),
        (Syntax::Memory, [leading @ .., offset, base]) => {
            let mut text = format!("{} ", descriptor.mnemonic);
            for operand in leading {
                text.push_str(operand);
                text.push_str(", ");
            }
            text.push_str(&format!("{offset}({base})"));
            text
        }
        (_, all) => format!("{} {}", descriptor.mnemonic, all.join(", ")),
    }
}
