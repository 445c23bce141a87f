//! funct3 values (bits 14-12) of the base integer instructions.
//!
//! Values repeat across major opcodes; each group below is only meaningful
//! together with the opcode named in its heading.

// LOAD: the low two bits give the access width, bit 2 selects zero-extension.

/// `lb`.
pub const LB: u32 = 0b000;
/// `lh`.
pub const LH: u32 = 0b001;
/// `lw`.
pub const LW: u32 = 0b010;
/// `ld` (RV64 and up).
pub const LD: u32 = 0b011;
/// `lbu`.
pub const LBU: u32 = 0b100;
/// `lhu`.
pub const LHU: u32 = 0b101;
/// `lwu` (RV64 and up).
pub const LWU: u32 = 0b110;
/// `ldu` (RV128).
pub const LDU: u32 = 0b111;

// STORE: access width only.

/// `sb`.
pub const SB: u32 = 0b000;
/// `sh`.
pub const SH: u32 = 0b001;
/// `sw`.
pub const SW: u32 = 0b010;
/// `sd` (RV64 and up).
pub const SD: u32 = 0b011;
/// `sq` (RV128).
pub const SQ: u32 = 0b100;

// BRANCH: 010 and 011 are reserved.

/// `beq`.
pub const BEQ: u32 = 0b000;
/// `bne`.
pub const BNE: u32 = 0b001;
/// `blt`.
pub const BLT: u32 = 0b100;
/// `bge`.
pub const BGE: u32 = 0b101;
/// `bltu`.
pub const BLTU: u32 = 0b110;
/// `bgeu`.
pub const BGEU: u32 = 0b111;

// OP, OP-IMM and their word/doubleword variants; funct7 picks among pairs.

/// `add`/`sub`, `addi`.
pub const ADD_SUB: u32 = 0b000;
/// `sll`, `slli`.
pub const SLL: u32 = 0b001;
/// `slt`, `slti`.
pub const SLT: u32 = 0b010;
/// `sltu`, `sltiu`.
pub const SLTU: u32 = 0b011;
/// `xor`, `xori`.
pub const XOR: u32 = 0b100;
/// `srl`/`sra`, `srli`/`srai`.
pub const SRL_SRA: u32 = 0b101;
/// `or`, `ori`.
pub const OR: u32 = 0b110;
/// `and`, `andi`.
pub const AND: u32 = 0b111;

// MISC-MEM.

/// `fence` and `fence.tso`.
pub const FENCE: u32 = 0b000;
/// `lq` (RV128).
pub const LQ: u32 = 0b010;
