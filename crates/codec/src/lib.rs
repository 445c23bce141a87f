//! Bidirectional RISC-V assembly/machine-code translator.
//!
//! This crate turns one line of RISC-V assembly into its machine encoding and
//! one machine word back into canonical assembly. It provides:
//! 1. **ISA:** Opcode constants, the instruction descriptor table with its
//!    mnemonic and bit-pattern indices, and one codec per encoding format
//!    (RV32/64/128 I, F, D, C, Zicsr, Zifencei and the privileged returns).
//! 2. **Facade:** [`Instruction`] pairs the canonical `asm` text with its
//!    lowercase `hex` rendering.
//! 3. **Configuration:** ISA width selection and the ABI register-name toggle.
//! 4. **Requests:** Line classification and the JSON-shaped response object.

/// Common types (errors, bit-field helpers).
pub mod common;
/// Translator configuration (ISA width, ABI names, cfg/JSON readers).
pub mod config;
/// Per-request instruction facade (`from_text`, `from_binary`, `from_hex`, `from_word`).
pub mod instruction;
/// Instruction set (descriptors, table, operand grammar, format codecs, ABI, CSRs).
pub mod isa;
/// Request/response boundary used by the CLI driver.
pub mod request;

/// Error returned by every translation request.
pub use crate::common::error::{CodecError, ConfigError, TableConflictError};
/// Translator configuration; use `Config::default()` or load a cfg/JSON file.
pub use crate::config::{Config, IsaWidth, Xlen};
/// Translated instruction; construct with `Instruction::from_text` and friends.
pub use crate::instruction::{Encoding, Instruction};
/// Descriptor table shared by all requests; see `DescriptorTable::global`.
pub use crate::isa::table::DescriptorTable;
/// JSON-shaped response for one input line.
pub use crate::request::{InputKind, OutputMode, Response};
