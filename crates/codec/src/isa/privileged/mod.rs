//! Privileged Architecture and Zicsr.
//!
//! System-opcode instructions (environment calls, trap returns, fences on
//! address translation) and the control and status register namespace.

/// CSR address table and name resolution.
pub mod csr;

/// System instruction opcodes and CSR access function codes.
pub mod opcodes;
