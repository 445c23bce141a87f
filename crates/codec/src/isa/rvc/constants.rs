//! RISC-V Compressed (C) Extension Constants.
//!
//! Defines the quadrants and opcodes for 16-bit compressed instructions.
//! Compressed instructions are divided into three quadrants (0, 1, 2) based
//! on the lowest 2 bits of the instruction.

/// Quadrant 0 (bits 1:0 = 00).
pub const QUADRANT_0: u32 = 0b00;
/// Quadrant 1 (bits 1:0 = 01).
pub const QUADRANT_1: u32 = 0b01;
/// Quadrant 2 (bits 1:0 = 10).
pub const QUADRANT_2: u32 = 0b10;

/// Instructions in Quadrant 0.
pub mod q0 {
    /// Compressed Add Immediate, scaled by 4, to Stack Pointer (C.ADDI4SPN).
    pub const C_ADDI4SPN: u32 = 0b000;
    /// C.FLD on RV32/RV64, C.LQ on RV128.
    pub const C_FLD_LQ: u32 = 0b001;
    /// Compressed Load Word (C.LW).
    pub const C_LW: u32 = 0b010;
    /// C.FLW on RV32, C.LD on RV64/RV128.
    pub const C_FLW_LD: u32 = 0b011;
    /// C.FSD on RV32/RV64, C.SQ on RV128.
    pub const C_FSD_SQ: u32 = 0b101;
    /// Compressed Store Word (C.SW).
    pub const C_SW: u32 = 0b110;
    /// C.FSW on RV32, C.SD on RV64/RV128.
    pub const C_FSW_SD: u32 = 0b111;
}

/// Instructions in Quadrant 1.
pub mod q1 {
    /// Compressed Add Immediate (C.ADDI, C.NOP).
    pub const C_ADDI: u32 = 0b000;
    /// C.JAL on RV32, C.ADDIW on RV64/RV128.
    pub const C_JAL_ADDIW: u32 = 0b001;
    /// Compressed Load Immediate (C.LI).
    pub const C_LI: u32 = 0b010;
    /// Compressed Load Upper Immediate / Add Immediate 16 to SP (C.LUI / C.ADDI16SP).
    pub const C_LUI_ADDI16SP: u32 = 0b011;
    /// Miscellaneous ALU operations (C.SRLI, C.SRAI, C.ANDI, C.SUB, etc.).
    pub const C_MISC_ALU: u32 = 0b100;
    /// Compressed Jump (C.J).
    pub const C_J: u32 = 0b101;
    /// Compressed Branch Equal Zero (C.BEQZ).
    pub const C_BEQZ: u32 = 0b110;
    /// Compressed Branch Not Equal Zero (C.BNEZ).
    pub const C_BNEZ: u32 = 0b111;

    /// C.SRLI selector in bits 11-10.
    pub const MISC_SRLI: u32 = 0b00;
    /// C.SRAI selector in bits 11-10.
    pub const MISC_SRAI: u32 = 0b01;
    /// C.ANDI selector in bits 11-10.
    pub const MISC_ANDI: u32 = 0b10;
    /// Register-register selector in bits 11-10.
    pub const MISC_ALU: u32 = 0b11;

    /// C.SUB / C.SUBW selector in bits 6-5.
    pub const ALU_SUB: u32 = 0b00;
    /// C.XOR / C.ADDW selector in bits 6-5.
    pub const ALU_XOR_ADDW: u32 = 0b01;
    /// C.OR selector in bits 6-5.
    pub const ALU_OR: u32 = 0b10;
    /// C.AND selector in bits 6-5.
    pub const ALU_AND: u32 = 0b11;
}

/// Instructions in Quadrant 2.
pub mod q2 {
    /// Compressed Shift Left Logical Immediate (C.SLLI).
    pub const C_SLLI: u32 = 0b000;
    /// C.FLDSP on RV32/RV64, C.LQSP on RV128.
    pub const C_FLDSP_LQSP: u32 = 0b001;
    /// Compressed Load Word from SP (C.LWSP).
    pub const C_LWSP: u32 = 0b010;
    /// C.FLWSP on RV32, C.LDSP on RV64/RV128.
    pub const C_FLWSP_LDSP: u32 = 0b011;
    /// Jump Register / Move / Add / EBREAK (C.JR, C.MV, C.EBREAK, C.JALR, C.ADD).
    pub const C_JR_MV_ADD: u32 = 0b100;
    /// C.FSDSP on RV32/RV64, C.SQSP on RV128.
    pub const C_FSDSP_SQSP: u32 = 0b101;
    /// Compressed Store Word to SP (C.SWSP).
    pub const C_SWSP: u32 = 0b110;
    /// C.FSWSP on RV32, C.SDSP on RV64/RV128.
    pub const C_FSWSP_SDSP: u32 = 0b111;
}

/// Compressed No-Op (C.NOP), the only fully fixed quadrant-1 halfword.
pub const C_NOP: u32 = 0x0001;

/// Compressed Environment Break (C.EBREAK).
pub const C_EBREAK: u32 = 0x9002;
