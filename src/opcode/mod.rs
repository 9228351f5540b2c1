//! The 256-entry opcode dispatch table.
//!
//! Every byte value maps to a handler: the undocumented opcodes are wired to
//! NOP with whatever mode matches their true length, so the program counter
//! and cycle counter stay honest even through garbage.

use crate::cpu::{AddressingMode, Cpu};

pub mod arrith;
pub mod branch;
pub mod cmp;
pub mod flags;
pub mod inc_dec;
pub mod load;
pub mod logic;
pub mod shift;
pub mod stack;
pub mod sys;
pub mod transfer;

pub struct OpCode {
    pub code: u8,
    /// Mnemonic with its addressing suffix, as it appears in trace output.
    pub mnemonic: &'static str,
    pub run: fn(&mut Cpu, AddressingMode),
    pub mode: AddressingMode,
    /// Base cycle cost; page-cross and branch penalties come on top, except
    /// that a base of 7 never pays extras.
    pub cycles: u8,
}

macro_rules! opcodes {
    ($({ $code:literal, $mnemonic:literal, $path:ident::$handler:ident, $mode:ident, $cycles:literal }),* $(,)?) => {
        [$(
            OpCode {
                code: $code,
                mnemonic: $mnemonic,
                run: $path::$handler,
                mode: AddressingMode::$mode,
                cycles: $cycles,
            },
        )*]
    };
}

#[rustfmt::skip]
pub static OPCODES: [OpCode; 256] = opcodes![
    { 0x00, "BRK impl",  sys::brk,      Implied,     7 },
    { 0x01, "ORA X,ind", logic::ora,    IndirectX,   6 },
    { 0x02, "???",       sys::nop,      Implied,     2 },
    { 0x03, "???",       sys::nop,      Implied,     8 },
    { 0x04, "???",       sys::nop,      ZeroPage,    3 },
    { 0x05, "ORA zpg",   logic::ora,    ZeroPage,    3 },
    { 0x06, "ASL zpg",   shift::asl,    ZeroPage,    5 },
    { 0x07, "???",       sys::nop,      Implied,     5 },
    { 0x08, "PHP impl",  stack::php,    Implied,     3 },
    { 0x09, "ORA #",     logic::ora,    Immediate,   2 },
    { 0x0A, "ASL A",     shift::asl,    Accumulator, 2 },
    { 0x0B, "???",       sys::nop,      Implied,     2 },
    { 0x0C, "???",       sys::nop,      Absolute,    4 },
    { 0x0D, "ORA abs",   logic::ora,    Absolute,    4 },
    { 0x0E, "ASL abs",   shift::asl,    Absolute,    6 },
    { 0x0F, "???",       sys::nop,      Implied,     6 },
    { 0x10, "BPL rel",   branch::bpl,   Relative,    2 },
    { 0x11, "ORA ind,Y", logic::ora,    IndirectY,   5 },
    { 0x12, "???",       sys::nop,      Implied,     2 },
    { 0x13, "???",       sys::nop,      Implied,     8 },
    { 0x14, "???",       sys::nop,      ZeroPage,    4 },
    { 0x15, "ORA zpg,X", logic::ora,    ZeroPageX,   4 },
    { 0x16, "ASL zpg,X", shift::asl,    ZeroPageX,   6 },
    { 0x17, "???",       sys::nop,      Implied,     6 },
    { 0x18, "CLC impl",  flags::clc,    Implied,     2 },
    { 0x19, "ORA abs,Y", logic::ora,    AbsoluteY,   4 },
    { 0x1A, "???",       sys::nop,      Implied,     2 },
    { 0x1B, "???",       sys::nop,      Implied,     7 },
    { 0x1C, "???",       sys::nop,      AbsoluteX,   4 },
    { 0x1D, "ORA abs,X", logic::ora,    AbsoluteX,   4 },
    { 0x1E, "ASL abs,X", shift::asl,    AbsoluteX,   7 },
    { 0x1F, "???",       sys::nop,      Implied,     7 },
    { 0x20, "JSR abs",   sys::jsr,      Absolute,    6 },
    { 0x21, "AND X,ind", logic::and,    IndirectX,   6 },
    { 0x22, "???",       sys::nop,      Implied,     2 },
    { 0x23, "???",       sys::nop,      Implied,     8 },
    { 0x24, "BIT zpg",   cmp::bit,      ZeroPage,    3 },
    { 0x25, "AND zpg",   logic::and,    ZeroPage,    3 },
    { 0x26, "ROL zpg",   shift::rol,    ZeroPage,    5 },
    { 0x27, "???",       sys::nop,      Implied,     5 },
    { 0x28, "PLP impl",  stack::plp,    Implied,     4 },
    { 0x29, "AND #",     logic::and,    Immediate,   2 },
    { 0x2A, "ROL A",     shift::rol,    Accumulator, 2 },
    { 0x2B, "???",       sys::nop,      Implied,     2 },
    { 0x2C, "BIT abs",   cmp::bit,      Absolute,    4 },
    { 0x2D, "AND abs",   logic::and,    Absolute,    4 },
    { 0x2E, "ROL abs",   shift::rol,    Absolute,    6 },
    { 0x2F, "???",       sys::nop,      Implied,     6 },
    { 0x30, "BMI rel",   branch::bmi,   Relative,    2 },
    { 0x31, "AND ind,Y", logic::and,    IndirectY,   5 },
    { 0x32, "???",       sys::nop,      Implied,     2 },
    { 0x33, "???",       sys::nop,      Implied,     8 },
    { 0x34, "???",       sys::nop,      ZeroPage,    4 },
    { 0x35, "AND zpg,X", logic::and,    ZeroPageX,   4 },
    { 0x36, "ROL zpg,X", shift::rol,    ZeroPageX,   6 },
    { 0x37, "???",       sys::nop,      Implied,     6 },
    { 0x38, "SEC impl",  flags::sec,    Implied,     2 },
    { 0x39, "AND abs,Y", logic::and,    AbsoluteY,   4 },
    { 0x3A, "???",       sys::nop,      Implied,     2 },
    { 0x3B, "???",       sys::nop,      Implied,     7 },
    { 0x3C, "???",       sys::nop,      AbsoluteX,   4 },
    { 0x3D, "AND abs,X", logic::and,    AbsoluteX,   4 },
    { 0x3E, "ROL abs,X", shift::rol,    AbsoluteX,   7 },
    { 0x3F, "???",       sys::nop,      Implied,     7 },
    { 0x40, "RTI impl",  sys::rti,      Implied,     6 },
    { 0x41, "EOR X,ind", logic::eor,    IndirectX,   6 },
    { 0x42, "???",       sys::nop,      Implied,     2 },
    { 0x43, "???",       sys::nop,      Implied,     8 },
    { 0x44, "???",       sys::nop,      ZeroPage,    3 },
    { 0x45, "EOR zpg",   logic::eor,    ZeroPage,    3 },
    { 0x46, "LSR zpg",   shift::lsr,    ZeroPage,    5 },
    { 0x47, "???",       sys::nop,      Implied,     5 },
    { 0x48, "PHA impl",  stack::pha,    Implied,     3 },
    { 0x49, "EOR #",     logic::eor,    Immediate,   2 },
    { 0x4A, "LSR A",     shift::lsr,    Accumulator, 2 },
    { 0x4B, "???",       sys::nop,      Implied,     2 },
    { 0x4C, "JMP abs",   sys::jmp,      Absolute,    3 },
    { 0x4D, "EOR abs",   logic::eor,    Absolute,    4 },
    { 0x4E, "LSR abs",   shift::lsr,    Absolute,    6 },
    { 0x4F, "???",       sys::nop,      Implied,     6 },
    { 0x50, "BVC rel",   branch::bvc,   Relative,    2 },
    { 0x51, "EOR ind,Y", logic::eor,    IndirectY,   5 },
    { 0x52, "???",       sys::nop,      Implied,     2 },
    { 0x53, "???",       sys::nop,      Implied,     8 },
    { 0x54, "???",       sys::nop,      ZeroPage,    4 },
    { 0x55, "EOR zpg,X", logic::eor,    ZeroPageX,   4 },
    { 0x56, "LSR zpg,X", shift::lsr,    ZeroPageX,   6 },
    { 0x57, "???",       sys::nop,      Implied,     6 },
    { 0x58, "CLI impl",  flags::cli,    Implied,     2 },
    { 0x59, "EOR abs,Y", logic::eor,    AbsoluteY,   4 },
    { 0x5A, "???",       sys::nop,      Implied,     2 },
    { 0x5B, "???",       sys::nop,      Implied,     7 },
    { 0x5C, "???",       sys::nop,      AbsoluteX,   4 },
    { 0x5D, "EOR abs,X", logic::eor,    AbsoluteX,   4 },
    { 0x5E, "LSR abs,X", shift::lsr,    AbsoluteX,   7 },
    { 0x5F, "???",       sys::nop,      Implied,     7 },
    { 0x60, "RTS impl",  sys::rts,      Implied,     6 },
    { 0x61, "ADC X,ind", arrith::adc,   IndirectX,   6 },
    { 0x62, "???",       sys::nop,      Implied,     2 },
    { 0x63, "???",       sys::nop,      Implied,     8 },
    { 0x64, "???",       sys::nop,      ZeroPage,    3 },
    { 0x65, "ADC zpg",   arrith::adc,   ZeroPage,    3 },
    { 0x66, "ROR zpg",   shift::ror,    ZeroPage,    5 },
    { 0x67, "???",       sys::nop,      Implied,     5 },
    { 0x68, "PLA impl",  stack::pla,    Implied,     4 },
    { 0x69, "ADC #",     arrith::adc,   Immediate,   2 },
    { 0x6A, "ROR A",     shift::ror,    Accumulator, 2 },
    { 0x6B, "???",       sys::nop,      Implied,     2 },
    { 0x6C, "JMP ind",   sys::jmp,      IndirectBug, 5 },
    { 0x6D, "ADC abs",   arrith::adc,   Absolute,    4 },
    { 0x6E, "ROR abs",   shift::ror,    Absolute,    6 },
    { 0x6F, "???",       sys::nop,      Implied,     6 },
    { 0x70, "BVS rel",   branch::bvs,   Relative,    2 },
    { 0x71, "ADC ind,Y", arrith::adc,   IndirectY,   5 },
    { 0x72, "???",       sys::nop,      Implied,     2 },
    { 0x73, "???",       sys::nop,      Implied,     8 },
    { 0x74, "???",       sys::nop,      ZeroPage,    4 },
    { 0x75, "ADC zpg,X", arrith::adc,   ZeroPageX,   4 },
    { 0x76, "ROR zpg,X", shift::ror,    ZeroPageX,   6 },
    { 0x77, "???",       sys::nop,      Implied,     6 },
    { 0x78, "SEI impl",  flags::sei,    Implied,     2 },
    { 0x79, "ADC abs,Y", arrith::adc,   AbsoluteY,   4 },
    { 0x7A, "???",       sys::nop,      Implied,     2 },
    { 0x7B, "???",       sys::nop,      Implied,     7 },
    { 0x7C, "???",       sys::nop,      AbsoluteX,   4 },
    { 0x7D, "ADC abs,X", arrith::adc,   AbsoluteX,   4 },
    { 0x7E, "ROR abs,X", shift::ror,    AbsoluteX,   7 },
    { 0x7F, "???",       sys::nop,      Implied,     7 },
    { 0x80, "???",       sys::nop,      Immediate,   2 },
    { 0x81, "STA X,ind", load::sta,     IndirectX,   6 },
    { 0x82, "???",       sys::nop,      Implied,     2 },
    { 0x83, "???",       sys::nop,      Implied,     6 },
    { 0x84, "STY zpg",   load::sty,     ZeroPage,    3 },
    { 0x85, "STA zpg",   load::sta,     ZeroPage,    3 },
    { 0x86, "STX zpg",   load::stx,     ZeroPage,    3 },
    { 0x87, "???",       sys::nop,      Implied,     3 },
    { 0x88, "DEY impl",  inc_dec::dey,  Implied,     2 },
    { 0x89, "???",       sys::nop,      Implied,     2 },
    { 0x8A, "TXA impl",  transfer::txa, Implied,     2 },
    { 0x8B, "???",       sys::nop,      Implied,     2 },
    { 0x8C, "STY abs",   load::sty,     Absolute,    4 },
    { 0x8D, "STA abs",   load::sta,     Absolute,    4 },
    { 0x8E, "STX abs",   load::stx,     Absolute,    4 },
    { 0x8F, "???",       sys::nop,      Implied,     4 },
    { 0x90, "BCC rel",   branch::bcc,   Relative,    2 },
    { 0x91, "STA ind,Y", load::sta,     IndirectY,   6 },
    { 0x92, "???",       sys::nop,      Implied,     2 },
    { 0x93, "???",       sys::nop,      Implied,     6 },
    { 0x94, "STY zpg,X", load::sty,     ZeroPageX,   4 },
    { 0x95, "STA zpg,X", load::sta,     ZeroPageX,   4 },
    { 0x96, "STX zpg,Y", load::stx,     ZeroPageY,   4 },
    { 0x97, "???",       sys::nop,      Implied,     4 },
    { 0x98, "TYA impl",  transfer::tya, Implied,     2 },
    { 0x99, "STA abs,Y", load::sta,     AbsoluteY,   5 },
    { 0x9A, "TXS impl",  stack::txs,    Implied,     2 },
    { 0x9B, "???",       sys::nop,      Implied,     5 },
    { 0x9C, "???",       sys::nop,      Implied,     5 },
    { 0x9D, "STA abs,X", load::sta,     AbsoluteX,   5 },
    { 0x9E, "???",       sys::nop,      Implied,     5 },
    { 0x9F, "???",       sys::nop,      Implied,     5 },
    { 0xA0, "LDY #",     load::ldy,     Immediate,   2 },
    { 0xA1, "LDA X,ind", load::lda,     IndirectX,   6 },
    { 0xA2, "LDX #",     load::ldx,     Immediate,   2 },
    { 0xA3, "???",       sys::nop,      Implied,     6 },
    { 0xA4, "LDY zpg",   load::ldy,     ZeroPage,    3 },
    { 0xA5, "LDA zpg",   load::lda,     ZeroPage,    3 },
    { 0xA6, "LDX zpg",   load::ldx,     ZeroPage,    3 },
    { 0xA7, "???",       sys::nop,      Implied,     3 },
    { 0xA8, "TAY impl",  transfer::tay, Implied,     2 },
    { 0xA9, "LDA #",     load::lda,     Immediate,   2 },
    { 0xAA, "TAX impl",  transfer::tax, Implied,     2 },
    { 0xAB, "???",       sys::nop,      Implied,     2 },
    { 0xAC, "LDY abs",   load::ldy,     Absolute,    4 },
    { 0xAD, "LDA abs",   load::lda,     Absolute,    4 },
    { 0xAE, "LDX abs",   load::ldx,     Absolute,    4 },
    { 0xAF, "???",       sys::nop,      Implied,     4 },
    { 0xB0, "BCS rel",   branch::bcs,   Relative,    2 },
    { 0xB1, "LDA ind,Y", load::lda,     IndirectY,   5 },
    { 0xB2, "???",       sys::nop,      Implied,     2 },
    { 0xB3, "???",       sys::nop,      Implied,     5 },
    { 0xB4, "LDY zpg,X", load::ldy,     ZeroPageX,   4 },
    { 0xB5, "LDA zpg,X", load::lda,     ZeroPageX,   4 },
    { 0xB6, "LDX zpg,Y", load::ldx,     ZeroPageY,   4 },
    { 0xB7, "???",       sys::nop,      Implied,     4 },
    { 0xB8, "CLV impl",  flags::clv,    Implied,     2 },
    { 0xB9, "LDA abs,Y", load::lda,     AbsoluteY,   4 },
    { 0xBA, "TSX impl",  stack::tsx,    Implied,     2 },
    { 0xBB, "???",       sys::nop,      Implied,     4 },
    { 0xBC, "LDY abs,X", load::ldy,     AbsoluteX,   4 },
    { 0xBD, "LDA abs,X", load::lda,     AbsoluteX,   4 },
    { 0xBE, "LDX abs,Y", load::ldx,     AbsoluteY,   4 },
    { 0xBF, "???",       sys::nop,      Implied,     4 },
    { 0xC0, "CPY #",     cmp::cpy,      Immediate,   2 },
    { 0xC1, "CMP X,ind", cmp::cmp,      IndirectX,   6 },
    { 0xC2, "???",       sys::nop,      Implied,     2 },
    { 0xC3, "???",       sys::nop,      Implied,     8 },
    { 0xC4, "CPY zpg",   cmp::cpy,      ZeroPage,    3 },
    { 0xC5, "CMP zpg",   cmp::cmp,      ZeroPage,    3 },
    { 0xC6, "DEC zpg",   inc_dec::dec,  ZeroPage,    5 },
    { 0xC7, "???",       sys::nop,      Implied,     5 },
    { 0xC8, "INY impl",  inc_dec::iny,  Implied,     2 },
    { 0xC9, "CMP #",     cmp::cmp,      Immediate,   2 },
    { 0xCA, "DEX impl",  inc_dec::dex,  Implied,     2 },
    { 0xCB, "???",       sys::nop,      Implied,     2 },
    { 0xCC, "CPY abs",   cmp::cpy,      Absolute,    4 },
    { 0xCD, "CMP abs",   cmp::cmp,      Absolute,    4 },
    { 0xCE, "DEC abs",   inc_dec::dec,  Absolute,    6 },
    { 0xCF, "???",       sys::nop,      Implied,     6 },
    { 0xD0, "BNE rel",   branch::bne,   Relative,    2 },
    { 0xD1, "CMP ind,Y", cmp::cmp,      IndirectY,   5 },
    { 0xD2, "???",       sys::nop,      Implied,     2 },
    { 0xD3, "???",       sys::nop,      Implied,     8 },
    { 0xD4, "???",       sys::nop,      ZeroPage,    4 },
    { 0xD5, "CMP zpg,X", cmp::cmp,      ZeroPageX,   4 },
    { 0xD6, "DEC zpg,X", inc_dec::dec,  ZeroPageX,   6 },
    { 0xD7, "???",       sys::nop,      Implied,     6 },
    { 0xD8, "CLD impl",  flags::cld,    Implied,     2 },
    { 0xD9, "CMP abs,Y", cmp::cmp,      AbsoluteY,   4 },
    { 0xDA, "???",       sys::nop,      Implied,     2 },
    { 0xDB, "???",       sys::nop,      Implied,     7 },
    { 0xDC, "???",       sys::nop,      AbsoluteX,   4 },
    { 0xDD, "CMP abs,X", cmp::cmp,      AbsoluteX,   4 },
    { 0xDE, "DEC abs,X", inc_dec::dec,  AbsoluteX,   7 },
    { 0xDF, "???",       sys::nop,      Implied,     7 },
    { 0xE0, "CPX #",     cmp::cpx,      Immediate,   2 },
    { 0xE1, "SBC X,ind", arrith::sbc,   IndirectX,   6 },
    { 0xE2, "???",       sys::nop,      Implied,     2 },
    { 0xE3, "???",       sys::nop,      Implied,     8 },
    { 0xE4, "CPX zpg",   cmp::cpx,      ZeroPage,    3 },
    { 0xE5, "SBC zpg",   arrith::sbc,   ZeroPage,    3 },
    { 0xE6, "INC zpg",   inc_dec::inc,  ZeroPage,    5 },
    { 0xE7, "???",       sys::nop,      Implied,     5 },
    { 0xE8, "INX impl",  inc_dec::inx,  Implied,     2 },
    { 0xE9, "SBC #",     arrith::sbc,   Immediate,   2 },
    { 0xEA, "NOP impl",  sys::nop,      Implied,     2 },
    { 0xEB, "???",       sys::nop,      Implied,     2 },
    { 0xEC, "CPX abs",   cmp::cpx,      Absolute,    4 },
    { 0xED, "SBC abs",   arrith::sbc,   Absolute,    4 },
    { 0xEE, "INC abs",   inc_dec::inc,  Absolute,    6 },
    { 0xEF, "???",       sys::nop,      Implied,     6 },
    { 0xF0, "BEQ rel",   branch::beq,   Relative,    2 },
    { 0xF1, "SBC ind,Y", arrith::sbc,   IndirectY,   5 },
    { 0xF2, "???",       sys::nop,      Implied,     2 },
    { 0xF3, "???",       sys::nop,      Implied,     8 },
    { 0xF4, "???",       sys::nop,      ZeroPage,    4 },
    { 0xF5, "SBC zpg,X", arrith::sbc,   ZeroPageX,   4 },
    { 0xF6, "INC zpg,X", inc_dec::inc,  ZeroPageX,   6 },
    { 0xF7, "???",       sys::nop,      Implied,     6 },
    { 0xF8, "SED impl",  flags::sed,    Implied,     2 },
    { 0xF9, "SBC abs,Y", arrith::sbc,   AbsoluteY,   4 },
    { 0xFA, "???",       sys::nop,      Implied,     2 },
    { 0xFB, "???",       sys::nop,      Implied,     7 },
    { 0xFC, "???",       sys::nop,      AbsoluteX,   4 },
    { 0xFD, "SBC abs,X", arrith::sbc,   AbsoluteX,   4 },
    { 0xFE, "INC abs,X", inc_dec::inc,  AbsoluteX,   7 },
    { 0xFF, "???",       sys::nop,      Implied,     7 },
];
