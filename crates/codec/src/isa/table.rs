//! The descriptor table.
//!
//! Holds the instruction catalog and the pseudo-instruction aliases behind
//! two immutable indices: by mnemonic, and per XLEN by bit pattern. The bit
//! pattern index buckets descriptors by the fields every pattern fixes (the
//! major opcode of 32-bit words, the quadrant and funct3 of halfwords) and
//! orders each bucket most specific first, so the first match wins.
//!
//! Construction validates the catalog; the shared instance is built once on
//! first use by [`DescriptorTable::global`].

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::common::error::{CodecError, TableConflictError};
use crate::config::Xlen;
use crate::isa::catalog;
use crate::isa::codec::{Slot, undecodable};
use crate::isa::descriptor::InstructionDescriptor;
use crate::isa::encoding::Encoding;
use crate::isa::fields::{InstructionBits, OPCODE_MASK, QUADRANT_MASK, WIDE_QUADRANT};
use crate::isa::format::{Format, Role, Syntax};
use crate::isa::pseudo::{Arg, PSEUDO_INSTRUCTIONS, PseudoInstruction};

/// Bits every compressed pattern fixes: quadrant (1-0) and funct3 (15-13).
const COMPRESSED_KEY_MASK: u32 = 0xE003;

/// Result of a mnemonic lookup.
#[derive(Clone, Copy, Debug)]
pub enum Lookup<'t> {
    /// A real instruction.
    Instruction(&'t InstructionDescriptor),
    /// A pseudo-instruction and the real instruction it expands to.
    Pseudo {
        /// The alias.
        alias: &'t PseudoInstruction,
        /// Its expansion target.
        target: &'t InstructionDescriptor,
    },
}

#[derive(Clone, Copy, Debug)]
enum MnemonicEntry {
    Real(usize),
    Pseudo(usize, usize),
}

/// Validated catalog with its mnemonic and bit-pattern indices.
#[derive(Debug)]
pub struct DescriptorTable {
    descriptors: Vec<InstructionDescriptor>,
    pseudos: Vec<PseudoInstruction>,
    by_mnemonic: HashMap<&'static str, MnemonicEntry>,
    /// Per XLEN: bucket key -> descriptor indices, most specific first.
    by_pattern: [HashMap<u32, Vec<usize>>; 3],
}

fn conflict(first: &str, second: &str, reason: impl Into<String>) -> TableConflictError {
    TableConflictError { first: first.to_string(), second: second.to_string(), reason: reason.into() }
}

/// Bucket of a word: its opcode, or its quadrant and funct3 when compressed.
fn bucket_key(word: u32, compressed: bool) -> u32 {
    if compressed { word.quadrant() | (word.c_funct3() << 2) } else { word.opcode() }
}

impl DescriptorTable {
    /// Returns the shared table built from the full catalog.
    ///
    /// # Errors
    ///
    /// [`TableConflictError`] if the catalog is inconsistent; the same error
    /// is returned on every call.
    pub fn global() -> Result<&'static Self, TableConflictError> {
        static TABLE: OnceLock<Result<DescriptorTable, TableConflictError>> = OnceLock::new();
        TABLE
            .get_or_init(|| Self::new(catalog::instructions(), PSEUDO_INSTRUCTIONS.to_vec()))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Validates a catalog and builds its indices.
    ///
    /// # Errors
    ///
    /// [`TableConflictError`] for duplicate mnemonics (including pseudo names
    /// shadowing real ones), pseudo-instructions with a missing target, fixed
    /// bits overlapping operand fields, and, per XLEN, two patterns matched by
    /// the same word where neither is strictly more specific.
    pub fn new(
        descriptors: Vec<InstructionDescriptor>,
        pseudos: Vec<PseudoInstruction>,
    ) -> Result<Self, TableConflictError> {
        let mut by_mnemonic = HashMap::with_capacity(descriptors.len() + pseudos.len());
        for (index, descriptor) in descriptors.iter().enumerate() {
            validate_fields(descriptor)?;
            if by_mnemonic.insert(descriptor.mnemonic, MnemonicEntry::Real(index)).is_some() {
                return Err(conflict(descriptor.mnemonic, descriptor.mnemonic, "duplicate mnemonic"));
            }
        }
        for (index, alias) in pseudos.iter().enumerate() {
            let target = match by_mnemonic.get(alias.target) {
                Some(MnemonicEntry::Real(target)) => *target,
                _ => return Err(conflict(alias.mnemonic, alias.target, "pseudo-instruction target is not a real instruction")),
            };
            validate_pseudo(alias, &descriptors[target])?;
            if by_mnemonic.insert(alias.mnemonic, MnemonicEntry::Pseudo(index, target)).is_some() {
                return Err(conflict(alias.mnemonic, alias.mnemonic, "pseudo-instruction shadows another mnemonic"));
            }
        }

        let by_pattern = [
            build_pattern_index(&descriptors, Xlen::Rv32)?,
            build_pattern_index(&descriptors, Xlen::Rv64)?,
            build_pattern_index(&descriptors, Xlen::Rv128)?,
        ];
        tracing::debug!(descriptors = descriptors.len(), pseudos = pseudos.len(), "descriptor table built");
        Ok(Self { descriptors, pseudos, by_mnemonic, by_pattern })
    }

    /// Looks up a lowercase mnemonic.
    ///
    /// # Errors
    ///
    /// [`CodecError::UnknownMnemonic`] when neither a real nor a pseudo
    /// instruction has this name.
    pub fn lookup(&self, mnemonic: &str) -> Result<Lookup<'_>, CodecError> {
        let unknown = || CodecError::UnknownMnemonic { mnemonic: mnemonic.to_string() };
        match *self.by_mnemonic.get(mnemonic).ok_or_else(unknown)? {
            MnemonicEntry::Real(index) => self.descriptors.get(index).map(Lookup::Instruction).ok_or_else(unknown),
            MnemonicEntry::Pseudo(alias, target) => match (self.pseudos.get(alias), self.descriptors.get(target)) {
                (Some(alias), Some(target)) => Ok(Lookup::Pseudo { alias, target }),
                _ => Err(unknown()),
            },
        }
    }

    /// Finds the most specific descriptor whose fixed bits match `encoding`
    /// at the given width.
    ///
    /// # Errors
    ///
    /// [`CodecError::UndecodableEncoding`] when nothing matches.
    pub fn decode(&self, encoding: Encoding, xlen: Xlen) -> Result<&InstructionDescriptor, CodecError> {
        let word = encoding.word();
        let format = if encoding.is_compressed() { Format::Ci } else { Format::I };
        self.by_pattern[xlen.index()]
            .get(&bucket_key(word, encoding.is_compressed()))
            .into_iter()
            .flatten()
            .filter_map(|index| self.descriptors.get(*index))
            .find(|descriptor| descriptor.matches(word))
            .ok_or_else(|| undecodable(format, word))
    }

    /// All real instructions, in catalog order.
    pub fn descriptors(&self) -> &[InstructionDescriptor] {
        &self.descriptors
    }

    /// All pseudo-instructions.
    pub fn pseudos(&self) -> &[PseudoInstruction] {
        &self.pseudos
    }
}

/// Checks one descriptor against its own format.
fn validate_fields(d: &InstructionDescriptor) -> Result<(), TableConflictError> {
    let name = d.mnemonic;
    let word_mask = d.format.word_mask();
    let codec = d.format.codec();
    if codec.format() != d.format {
        return Err(conflict(name, name, format!("codec mismatch for {} format", d.format)));
    }
    if d.match_bits & !d.mask != 0 || d.mask & !word_mask != 0 {
        return Err(conflict(name, name, "fixed bits outside the mask or the instruction length"));
    }
    let (key_mask, wide) = if d.format.is_compressed() { (COMPRESSED_KEY_MASK, false) } else { (OPCODE_MASK, true) };
    if d.mask & key_mask != key_mask {
        return Err(conflict(name, name, "pattern does not fix its opcode"));
    }
    if (d.match_bits & QUADRANT_MASK == WIDE_QUADRANT) != wide {
        return Err(conflict(name, name, "quadrant contradicts the instruction length"));
    }

    let mut used = d.mask;
    for (position, role) in d.operands.iter().enumerate() {
        let slot = codec.slot(*role).ok_or_else(|| conflict(name, name, format!("{} format has no {role} field", d.format)))?;
        if slot == Slot::Immediate && d.imm.is_none() {
            return Err(conflict(name, name, format!("{role} needs an immediate layout")));
        }
        if *role == Role::Rm && position + 1 != d.operands.len() {
            return Err(conflict(name, name, "rounding mode must be the last operand"));
        }
        let bits = slot.mask(d).unwrap_or(0);
        if bits & used != 0 {
            return Err(conflict(name, name, format!("{role} field overlaps fixed bits or another operand")));
        }
        used |= bits;
    }
    if used & !word_mask != 0 {
        return Err(conflict(name, name, "operand fields exceed the instruction length"));
    }
    if d.syntax == Syntax::Memory && d.operands.len() < 2 {
        return Err(conflict(name, name, "memory syntax needs an offset and a base"));
    }
    Ok(())
}

/// Checks that a pseudo-instruction's expansion fits its target.
fn validate_pseudo(alias: &PseudoInstruction, target: &InstructionDescriptor) -> Result<(), TableConflictError> {
    if alias.expansion.len() != target.operands.len() {
        return Err(conflict(alias.mnemonic, target.mnemonic, "expansion does not match the target's operands"));
    }
    let in_range = alias.expansion.iter().all(|arg| match arg {
        Arg::Operand(i) => *i < alias.operands.len(),
        Arg::Register(_) | Arg::Immediate(_) | Arg::Csr(_) => true,
    });
    if !in_range {
        return Err(conflict(alias.mnemonic, target.mnemonic, "expansion refers to a missing operand"));
    }
    Ok(())
}

/// Buckets the descriptors present at `xlen` and rejects ambiguous pairs.
fn build_pattern_index(
    descriptors: &[InstructionDescriptor],
    xlen: Xlen,
) -> Result<HashMap<u32, Vec<usize>>, TableConflictError> {
    let mut buckets: HashMap<u32, Vec<usize>> = HashMap::new();
    for (index, d) in descriptors.iter().enumerate().filter(|(_, d)| d.isa.contains(xlen)) {
        buckets.entry(bucket_key(d.match_bits, d.format.is_compressed())).or_default().push(index);
    }
    for bucket in buckets.values_mut() {
        for (i, &a) in bucket.iter().enumerate() {
            for &b in &bucket[i + 1..] {
                check_overlap(&descriptors[a], &descriptors[b], xlen)?;
            }
        }
        bucket.sort_by_key(|index| std::cmp::Reverse(descriptors[*index].specificity()));
    }
    Ok(buckets)
}

/// Two patterns may share a word only if one strictly refines the other.
fn check_overlap(a: &InstructionDescriptor, b: &InstructionDescriptor, xlen: Xlen) -> Result<(), TableConflictError> {
    let shared = a.mask & b.mask;
    if (a.match_bits ^ b.match_bits) & shared != 0 {
        return Ok(());
    }
    if a.mask == b.mask {
        return Err(conflict(a.mnemonic, b.mnemonic, format!("identical fixed-bit patterns on {xlen}")));
    }
    if shared == a.mask || shared == b.mask {
        return Ok(());
    }
    Err(conflict(a.mnemonic, b.mnemonic, format!("partially overlapping patterns on {xlen}")))
}
