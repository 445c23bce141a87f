//! Instruction Set Architecture (ISA) definitions.
//!
//! Contains the opcode constants, the instruction descriptor catalog, the
//! per-format codecs and the operand grammar, organized by extension.
//!
//! # Extensions
//!
//! * `rvi`: Base integer instruction sets (RV32I, RV64I, RV128I).
//! * `rvf`: Single- and double-precision floating point (F, D).
//! * `rvc`: Compressed instructions (C).
//! * `privileged`: System instructions and CSR names (Zicsr, Zifencei).

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// The instruction catalog: one descriptor per real instruction.
pub mod catalog;

/// One encoder/decoder per instruction format.
pub mod codec;

/// Instruction descriptors: fixed bits, operand roles, widths.
pub mod descriptor;

/// Machine words tagged with their length.
pub mod encoding;

/// Bit extraction utilities for raw instruction words.
pub mod fields;

/// Encoding formats, operand roles and immediate layouts.
pub mod format;

/// Operand tokenizer and numeric literal parser.
pub mod grammar;

/// Resolved operand values.
pub mod operand;

/// Privileged architecture definitions (system instructions, CSRs).
pub mod privileged;

/// Pseudo-instruction aliases and their expansions.
pub mod pseudo;

/// Compressed instruction extension (16-bit instruction encoding).
pub mod rvc;

/// Floating-point extensions (F and D).
pub mod rvf;

/// Base integer instruction sets.
pub mod rvi;

/// The validated descriptor table with mnemonic and bit-pattern indices.
pub mod table;
