//! SYSTEM opcode encodings.
//!
//! Instructions without operands are listed as complete words; the rest are
//! the funct3 (and, for `sfence.vma`, funct7) values under [`OP_SYSTEM`].

/// Major opcode shared by every instruction in this module.
pub const OP_SYSTEM: u32 = 0b1110011;

/// `ecall`.
pub const ECALL: u32 = 0x0000_0073;
/// `ebreak`: `ecall` with imm = 1.
pub const EBREAK: u32 = 0x0010_0073;
/// `sret`: funct12 = 0x102.
pub const SRET: u32 = 0x1020_0073;
/// `mret`: funct12 = 0x302.
pub const MRET: u32 = 0x3020_0073;
/// `wfi`: funct12 = 0x105.
pub const WFI: u32 = 0x1050_0073;

/// funct7 of `sfence.vma`; rs1 and rs2 stay operands.
pub const SFENCE_VMA: u32 = 0b0001001;

/// funct3 of every non-CSR SYSTEM instruction.
pub const PRIV: u32 = 0b000;

// Zicsr: bit 2 of funct3 selects the 5-bit immediate source over rs1.

/// `csrrw`.
pub const CSRRW: u32 = 0b001;
/// `csrrs`.
pub const CSRRS: u32 = 0b010;
/// `csrrc`.
pub const CSRRC: u32 = 0b011;
/// `csrrwi`.
pub const CSRRWI: u32 = 0b101;
/// `csrrsi`.
pub const CSRRSI: u32 = 0b110;
/// `csrrci`.
pub const CSRRCI: u32 = 0b111;
