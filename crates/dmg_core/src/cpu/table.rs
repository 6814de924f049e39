//! Authoritative opcode tables.
//!
//! One row per defined opcode: mnemonic, length in bytes, M-cycles
//! (including the opcode fetch), M-cycles when a conditional branch is
//! taken, flag effects, and the behaviour. Flag effects are written Z N H C:
//! `-` untouched, `0`/`1` forced, a letter means computed from the result.
//!
//! Unlisted base opcodes are the hardware holes and decode to `None`.

use lazy_static::lazy_static;

use super::{Cpu, Operand};

/// Behaviour of one base opcode. Returns total M-cycles.
pub type Handler = fn(&mut Cpu, u8) -> u32;

#[derive(Clone, Copy)]
pub enum Dispatch {
    Execute(Handler),
    /// $CB: fetch a second byte and decode it through the extended table.
    Prefix,
}

impl std::fmt::Debug for Dispatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dispatch::Execute(_) => f.write_str("Execute"),
            Dispatch::Prefix => f.write_str("Prefix"),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Instruction {
    pub mnemonic: &'static str,
    pub length: u8,
    /// M-cycles, or the not-taken cost for conditional branches.
    pub cycles: u8,
    pub cycles_taken: Option<u8>,
    pub flags: &'static str,
    pub dispatch: Dispatch,
}

macro_rules! opcode_table {
    (@taken) => { None };
    (@taken $taken:literal) => { Some($taken) };
    ($($op:literal => $mnemonic:literal, $len:literal, $cycles:literal $(/ $taken:literal)?, $flags:literal, $handler:ident;)*) => {{
        let mut table: [Option<Instruction>; 256] = [None; 256];
        $(
            table[$op] = Some(Instruction {
                mnemonic: $mnemonic,
                length: $len,
                cycles: $cycles,
                cycles_taken: opcode_table!(@taken $($taken)?),
                flags: $flags,
                dispatch: Dispatch::Execute(Cpu::$handler),
            });
        )*
        table
    }};
}

fn build_base_table() -> [Option<Instruction>; 256] {
    let mut table = opcode_table! {
        0x00 => "NOP", 1, 1, "----", exec_nop;
        0x01 => "LD BC,d16", 3, 3, "----", exec_ld_rr_d16;
        0x02 => "LD (BC),A", 1, 2, "----", exec_ld_indirect_a;
        0x03 => "INC BC", 1, 2, "----", exec_inc16;
        0x04 => "INC B", 1, 1, "Z0H-", exec_inc8;
        0x05 => "DEC B", 1, 1, "Z1H-", exec_dec8;
        0x06 => "LD B,d8", 2, 2, "----", exec_ld_r_d8;
        0x07 => "RLCA", 1, 1, "000C", exec_rotate_a;
        0x08 => "LD (a16),SP", 3, 5, "----", exec_ld_a16_sp;
        0x09 => "ADD HL,BC", 1, 2, "-0HC", exec_add_hl_rr;
        0x0A => "LD A,(BC)", 1, 2, "----", exec_ld_a_indirect;
        0x0B => "DEC BC", 1, 2, "----", exec_dec16;
        0x0C => "INC C", 1, 1, "Z0H-", exec_inc8;
        0x0D => "DEC C", 1, 1, "Z1H-", exec_dec8;
        0x0E => "LD C,d8", 2, 2, "----", exec_ld_r_d8;
        0x0F => "RRCA", 1, 1, "000C", exec_rotate_a;
        0x10 => "STOP 0", 2, 1, "----", exec_stop;
        0x11 => "LD DE,d16", 3, 3, "----", exec_ld_rr_d16;
        0x12 => "LD (DE),A", 1, 2, "----", exec_ld_indirect_a;
        0x13 => "INC DE", 1, 2, "----", exec_inc16;
        0x14 => "INC D", 1, 1, "Z0H-", exec_inc8;
        0x15 => "DEC D", 1, 1, "Z1H-", exec_dec8;
        0x16 => "LD D,d8", 2, 2, "----", exec_ld_r_d8;
        0x17 => "RLA", 1, 1, "000C", exec_rotate_a;
        0x18 => "JR r8", 2, 3, "----", exec_jr;
        0x19 => "ADD HL,DE", 1, 2, "-0HC", exec_add_hl_rr;
        0x1A => "LD A,(DE)", 1, 2, "----", exec_ld_a_indirect;
        0x1B => "DEC DE", 1, 2, "----", exec_dec16;
        0x1C => "INC E", 1, 1, "Z0H-", exec_inc8;
        0x1D => "DEC E", 1, 1, "Z1H-", exec_dec8;
        0x1E => "LD E,d8", 2, 2, "----", exec_ld_r_d8;
        0x1F => "RRA", 1, 1, "000C", exec_rotate_a;
        0x20 => "JR NZ,r8", 2, 2/3, "----", exec_jr_cc;
        0x21 => "LD HL,d16", 3, 3, "----", exec_ld_rr_d16;
        0x22 => "LD (HL+),A", 1, 2, "----", exec_ld_indirect_a;
        0x23 => "INC HL", 1, 2, "----", exec_inc16;
        0x24 => "INC H", 1, 1, "Z0H-", exec_inc8;
        0x25 => "DEC H", 1, 1, "Z1H-", exec_dec8;
        0x26 => "LD H,d8", 2, 2, "----", exec_ld_r_d8;
        0x27 => "DAA", 1, 1, "Z-0C", exec_daa;
        0x28 => "JR Z,r8", 2, 2/3, "----", exec_jr_cc;
        0x29 => "ADD HL,HL", 1, 2, "-0HC", exec_add_hl_rr;
        0x2A => "LD A,(HL+)", 1, 2, "----", exec_ld_a_indirect;
        0x2B => "DEC HL", 1, 2, "----", exec_dec16;
        0x2C => "INC L", 1, 1, "Z0H-", exec_inc8;
        0x2D => "DEC L", 1, 1, "Z1H-", exec_dec8;
        0x2E => "LD L,d8", 2, 2, "----", exec_ld_r_d8;
        0x2F => "CPL", 1, 1, "-11-", exec_cpl;
        0x30 => "JR NC,r8", 2, 2/3, "----", exec_jr_cc;
        0x31 => "LD SP,d16", 3, 3, "----", exec_ld_rr_d16;
        0x32 => "LD (HL-),A", 1, 2, "----", exec_ld_indirect_a;
        0x33 => "INC SP", 1, 2, "----", exec_inc16;
        0x34 => "INC (HL)", 1, 3, "Z0H-", exec_inc8;
        0x35 => "DEC (HL)", 1, 3, "Z1H-", exec_dec8;
        0x36 => "LD (HL),d8", 2, 3, "----", exec_ld_r_d8;
        0x37 => "SCF", 1, 1, "-001", exec_scf;
        0x38 => "JR C,r8", 2, 2/3, "----", exec_jr_cc;
        0x39 => "ADD HL,SP", 1, 2, "-0HC", exec_add_hl_rr;
        0x3A => "LD A,(HL-)", 1, 2, "----", exec_ld_a_indirect;
        0x3B => "DEC SP", 1, 2, "----", exec_dec16;
        0x3C => "INC A", 1, 1, "Z0H-", exec_inc8;
        0x3D => "DEC A", 1, 1, "Z1H-", exec_dec8;
        0x3E => "LD A,d8", 2, 2, "----", exec_ld_r_d8;
        0x3F => "CCF", 1, 1, "-00C", exec_ccf;
        0x40 => "LD B,B", 1, 1, "----", exec_ld_r_r;
        0x41 => "LD B,C", 1, 1, "----", exec_ld_r_r;
        0x42 => "LD B,D", 1, 1, "----", exec_ld_r_r;
        0x43 => "LD B,E", 1, 1, "----", exec_ld_r_r;
        0x44 => "LD B,H", 1, 1, "----", exec_ld_r_r;
        0x45 => "LD B,L", 1, 1, "----", exec_ld_r_r;
        0x46 => "LD B,(HL)", 1, 2, "----", exec_ld_r_r;
        0x47 => "LD B,A", 1, 1, "----", exec_ld_r_r;
        0x48 => "LD C,B", 1, 1, "----", exec_ld_r_r;
        0x49 => "LD C,C", 1, 1, "----", exec_ld_r_r;
        0x4A => "LD C,D", 1, 1, "----", exec_ld_r_r;
        0x4B => "LD C,E", 1, 1, "----", exec_ld_r_r;
        0x4C => "LD C,H", 1, 1, "----", exec_ld_r_r;
        0x4D => "LD C,L", 1, 1, "----", exec_ld_r_r;
        0x4E => "LD C,(HL)", 1, 2, "----", exec_ld_r_r;
        0x4F => "LD C,A", 1, 1, "----", exec_ld_r_r;
        0x50 => "LD D,B", 1, 1, "----", exec_ld_r_r;
        0x51 => "LD D,C", 1, 1, "----", exec_ld_r_r;
        0x52 => "LD D,D", 1, 1, "----", exec_ld_r_r;
        0x53 => "LD D,E", 1, 1, "----", exec_ld_r_r;
        0x54 => "LD D,H", 1, 1, "----", exec_ld_r_r;
        0x55 => "LD D,L", 1, 1, "----", exec_ld_r_r;
        0x56 => "LD D,(HL)", 1, 2, "----", exec_ld_r_r;
        0x57 => "LD D,A", 1, 1, "----", exec_ld_r_r;
        0x58 => "LD E,B", 1, 1, "----", exec_ld_r_r;
        0x59 => "LD E,C", 1, 1, "----", exec_ld_r_r;
        0x5A => "LD E,D", 1, 1, "----", exec_ld_r_r;
        0x5B => "LD E,E", 1, 1, "----", exec_ld_r_r;
        0x5C => "LD E,H", 1, 1, "----", exec_ld_r_r;
        0x5D => "LD E,L", 1, 1, "----", exec_ld_r_r;
        0x5E => "LD E,(HL)", 1, 2, "----", exec_ld_r_r;
        0x5F => "LD E,A", 1, 1, "----", exec_ld_r_r;
        0x60 => "LD H,B", 1, 1, "----", exec_ld_r_r;
        0x61 => "LD H,C", 1, 1, "----", exec_ld_r_r;
        0x62 => "LD H,D", 1, 1, "----", exec_ld_r_r;
        0x63 => "LD H,E", 1, 1, "----", exec_ld_r_r;
        0x64 => "LD H,H", 1, 1, "----", exec_ld_r_r;
        0x65 => "LD H,L", 1, 1, "----", exec_ld_r_r;
        0x66 => "LD H,(HL)", 1, 2, "----", exec_ld_r_r;
        0x67 => "LD H,A", 1, 1, "----", exec_ld_r_r;
        0x68 => "LD L,B", 1, 1, "----", exec_ld_r_r;
        0x69 => "LD L,C", 1, 1, "----", exec_ld_r_r;
        0x6A => "LD L,D", 1, 1, "----", exec_ld_r_r;
        0x6B => "LD L,E", 1, 1, "----", exec_ld_r_r;
        0x6C => "LD L,H", 1, 1, "----", exec_ld_r_r;
        0x6D => "LD L,L", 1, 1, "----", exec_ld_r_r;
        0x6E => "LD L,(HL)", 1, 2, "----", exec_ld_r_r;
        0x6F => "LD L,A", 1, 1, "----", exec_ld_r_r;
        0x70 => "LD (HL),B", 1, 2, "----", exec_ld_r_r;
        0x71 => "LD (HL),C", 1, 2, "----", exec_ld_r_r;
        0x72 => "LD (HL),D", 1, 2, "----", exec_ld_r_r;
        0x73 => "LD (HL),E", 1, 2, "----", exec_ld_r_r;
        0x74 => "LD (HL),H", 1, 2, "----", exec_ld_r_r;
        0x75 => "LD (HL),L", 1, 2, "----", exec_ld_r_r;
        0x76 => "HALT", 1, 1, "----", exec_halt;
        0x77 => "LD (HL),A", 1, 2, "----", exec_ld_r_r;
        0x78 => "LD A,B", 1, 1, "----", exec_ld_r_r;
        0x79 => "LD A,C", 1, 1, "----", exec_ld_r_r;
        0x7A => "LD A,D", 1, 1, "----", exec_ld_r_r;
        0x7B => "LD A,E", 1, 1, "----", exec_ld_r_r;
        0x7C => "LD A,H", 1, 1, "----", exec_ld_r_r;
        0x7D => "LD A,L", 1, 1, "----", exec_ld_r_r;
        0x7E => "LD A,(HL)", 1, 2, "----", exec_ld_r_r;
        0x7F => "LD A,A", 1, 1, "----", exec_ld_r_r;
        0x80 => "ADD A,B", 1, 1, "Z0HC", exec_alu_r;
        0x81 => "ADD A,C", 1, 1, "Z0HC", exec_alu_r;
        0x82 => "ADD A,D", 1, 1, "Z0HC", exec_alu_r;
        0x83 => "ADD A,E", 1, 1, "Z0HC", exec_alu_r;
        0x84 => "ADD A,H", 1, 1, "Z0HC", exec_alu_r;
        0x85 => "ADD A,L", 1, 1, "Z0HC", exec_alu_r;
        0x86 => "ADD A,(HL)", 1, 2, "Z0HC", exec_alu_r;
        0x87 => "ADD A,A", 1, 1, "Z0HC", exec_alu_r;
        0x88 => "ADC A,B", 1, 1, "Z0HC", exec_alu_r;
        0x89 => "ADC A,C", 1, 1, "Z0HC", exec_alu_r;
        0x8A => "ADC A,D", 1, 1, "Z0HC", exec_alu_r;
        0x8B => "ADC A,E", 1, 1, "Z0HC", exec_alu_r;
        0x8C => "ADC A,H", 1, 1, "Z0HC", exec_alu_r;
        0x8D => "ADC A,L", 1, 1, "Z0HC", exec_alu_r;
        0x8E => "ADC A,(HL)", 1, 2, "Z0HC", exec_alu_r;
        0x8F => "ADC A,A", 1, 1, "Z0HC", exec_alu_r;
        0x90 => "SUB B", 1, 1, "Z1HC", exec_alu_r;
        0x91 => "SUB C", 1, 1, "Z1HC", exec_alu_r;
        0x92 => "SUB D", 1, 1, "Z1HC", exec_alu_r;
        0x93 => "SUB E", 1, 1, "Z1HC", exec_alu_r;
        0x94 => "SUB H", 1, 1, "Z1HC", exec_alu_r;
        0x95 => "SUB L", 1, 1, "Z1HC", exec_alu_r;
        0x96 => "SUB (HL)", 1, 2, "Z1HC", exec_alu_r;
        0x97 => "SUB A", 1, 1, "Z1HC", exec_alu_r;
        0x98 => "SBC A,B", 1, 1, "Z1HC", exec_alu_r;
        0x99 => "SBC A,C", 1, 1, "Z1HC", exec_alu_r;
        0x9A => "SBC A,D", 1, 1, "Z1HC", exec_alu_r;
        0x9B => "SBC A,E", 1, 1, "Z1HC", exec_alu_r;
        0x9C => "SBC A,H", 1, 1, "Z1HC", exec_alu_r;
        0x9D => "SBC A,L", 1, 1, "Z1HC", exec_alu_r;
        0x9E => "SBC A,(HL)", 1, 2, "Z1HC", exec_alu_r;
        0x9F => "SBC A,A", 1, 1, "Z1HC", exec_alu_r;
        0xA0 => "AND B", 1, 1, "Z010", exec_alu_r;
        0xA1 => "AND C", 1, 1, "Z010", exec_alu_r;
        0xA2 => "AND D", 1, 1, "Z010", exec_alu_r;
        0xA3 => "AND E", 1, 1, "Z010", exec_alu_r;
        0xA4 => "AND H", 1, 1, "Z010", exec_alu_r;
        0xA5 => "AND L", 1, 1, "Z010", exec_alu_r;
        0xA6 => "AND (HL)", 1, 2, "Z010", exec_alu_r;
        0xA7 => "AND A", 1, 1, "Z010", exec_alu_r;
        0xA8 => "XOR B", 1, 1, "Z000", exec_alu_r;
        0xA9 => "XOR C", 1, 1, "Z000", exec_alu_r;
        0xAA => "XOR D", 1, 1, "Z000", exec_alu_r;
        0xAB => "XOR E", 1, 1, "Z000", exec_alu_r;
        0xAC => "XOR H", 1, 1, "Z000", exec_alu_r;
        0xAD => "XOR L", 1, 1, "Z000", exec_alu_r;
        0xAE => "XOR (HL)", 1, 2, "Z000", exec_alu_r;
        0xAF => "XOR A", 1, 1, "Z000", exec_alu_r;
        0xB0 => "OR B", 1, 1, "Z000", exec_alu_r;
        0xB1 => "OR C", 1, 1, "Z000", exec_alu_r;
        0xB2 => "OR D", 1, 1, "Z000", exec_alu_r;
        0xB3 => "OR E", 1, 1, "Z000", exec_alu_r;
        0xB4 => "OR H", 1, 1, "Z000", exec_alu_r;
        0xB5 => "OR L", 1, 1, "Z000", exec_alu_r;
        0xB6 => "OR (HL)", 1, 2, "Z000", exec_alu_r;
        0xB7 => "OR A", 1, 1, "Z000", exec_alu_r;
        0xB8 => "CP B", 1, 1, "Z1HC", exec_alu_r;
        0xB9 => "CP C", 1, 1, "Z1HC", exec_alu_r;
        0xBA => "CP D", 1, 1, "Z1HC", exec_alu_r;
        0xBB => "CP E", 1, 1, "Z1HC", exec_alu_r;
        0xBC => "CP H", 1, 1, "Z1HC", exec_alu_r;
        0xBD => "CP L", 1, 1, "Z1HC", exec_alu_r;
        0xBE => "CP (HL)", 1, 2, "Z1HC", exec_alu_r;
        0xBF => "CP A", 1, 1, "Z1HC", exec_alu_r;
        0xC0 => "RET NZ", 1, 2/5, "----", exec_ret_cc;
        0xC1 => "POP BC", 1, 3, "----", exec_pop_rr;
        0xC2 => "JP NZ,a16", 3, 3/4, "----", exec_jp_cc;
        0xC3 => "JP a16", 3, 4, "----", exec_jp_a16;
        0xC4 => "CALL NZ,a16", 3, 3/6, "----", exec_call_cc;
        0xC5 => "PUSH BC", 1, 4, "----", exec_push_rr;
        0xC6 => "ADD A,d8", 2, 2, "Z0HC", exec_alu_d8;
        0xC7 => "RST 00H", 1, 4, "----", exec_rst;
        0xC8 => "RET Z", 1, 2/5, "----", exec_ret_cc;
        0xC9 => "RET", 1, 4, "----", exec_ret;
        0xCA => "JP Z,a16", 3, 3/4, "----", exec_jp_cc;
        0xCC => "CALL Z,a16", 3, 3/6, "----", exec_call_cc;
        0xCD => "CALL a16", 3, 6, "----", exec_call_a16;
        0xCE => "ADC A,d8", 2, 2, "Z0HC", exec_alu_d8;
        0xCF => "RST 08H", 1, 4, "----", exec_rst;
        0xD0 => "RET NC", 1, 2/5, "----", exec_ret_cc;
        0xD1 => "POP DE", 1, 3, "----", exec_pop_rr;
        0xD2 => "JP NC,a16", 3, 3/4, "----", exec_jp_cc;
        0xD4 => "CALL NC,a16", 3, 3/6, "----", exec_call_cc;
        0xD5 => "PUSH DE", 1, 4, "----", exec_push_rr;
        0xD6 => "SUB d8", 2, 2, "Z1HC", exec_alu_d8;
        0xD7 => "RST 10H", 1, 4, "----", exec_rst;
        0xD8 => "RET C", 1, 2/5, "----", exec_ret_cc;
        0xD9 => "RETI", 1, 4, "----", exec_reti;
        0xDA => "JP C,a16", 3, 3/4, "----", exec_jp_cc;
        0xDC => "CALL C,a16", 3, 3/6, "----", exec_call_cc;
        0xDE => "SBC A,d8", 2, 2, "Z1HC", exec_alu_d8;
        0xDF => "RST 18H", 1, 4, "----", exec_rst;
        0xE0 => "LDH (a8),A", 2, 3, "----", exec_ldh_a8;
        0xE1 => "POP HL", 1, 3, "----", exec_pop_rr;
        0xE2 => "LD (C),A", 1, 2, "----", exec_ldh_c;
        0xE5 => "PUSH HL", 1, 4, "----", exec_push_rr;
        0xE6 => "AND d8", 2, 2, "Z010", exec_alu_d8;
        0xE7 => "RST 20H", 1, 4, "----", exec_rst;
        0xE8 => "ADD SP,r8", 2, 4, "00HC", exec_add_sp_r8;
        0xE9 => "JP (HL)", 1, 1, "----", exec_jp_hl;
        0xEA => "LD (a16),A", 3, 4, "----", exec_ld_a16_a;
        0xEE => "XOR d8", 2, 2, "Z000", exec_alu_d8;
        0xEF => "RST 28H", 1, 4, "----", exec_rst;
        0xF0 => "LDH A,(a8)", 2, 3, "----", exec_ldh_a8;
        0xF1 => "POP AF", 1, 3, "ZNHC", exec_pop_rr;
        0xF2 => "LD A,(C)", 1, 2, "----", exec_ldh_c;
        0xF3 => "DI", 1, 1, "----", exec_di;
        0xF5 => "PUSH AF", 1, 4, "----", exec_push_rr;
        0xF6 => "OR d8", 2, 2, "Z000", exec_alu_d8;
        0xF7 => "RST 30H", 1, 4, "----", exec_rst;
        0xF8 => "LD HL,SP+r8", 2, 3, "00HC", exec_ld_hl_sp_r8;
        0xF9 => "LD SP,HL", 1, 2, "----", exec_ld_sp_hl;
        0xFA => "LD A,(a16)", 3, 4, "----", exec_ld_a16_a;
        0xFB => "EI", 1, 1, "----", exec_ei;
        0xFE => "CP d8", 2, 2, "Z1HC", exec_alu_d8;
        0xFF => "RST 38H", 1, 4, "----", exec_rst;
    };

    table[0xCB] = Some(Instruction {
        mnemonic: "PREFIX CB",
        length: 1,
        cycles: 1,
        cycles_taken: None,
        flags: "----",
        dispatch: Dispatch::Prefix,
    });

    table
}

/// Operation family of a CB-prefixed opcode, from bits 7–3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CbKind {
    Rlc,
    Rrc,
    Rl,
    Rr,
    Sla,
    Sra,
    Swap,
    Srl,
    Bit(u8),
    Res(u8),
    Set(u8),
}

impl CbKind {
    /// Decode `(group, y)` where group is bits 7–6 and y is bits 5–3.
    const fn decode(group: u8, y: u8) -> CbKind {
        match (group, y) {
            (0, 0) => CbKind::Rlc,
            (0, 1) => CbKind::Rrc,
            (0, 2) => CbKind::Rl,
            (0, 3) => CbKind::Rr,
            (0, 4) => CbKind::Sla,
            (0, 5) => CbKind::Sra,
            (0, 6) => CbKind::Swap,
            (0, _) => CbKind::Srl,
            (1, bit) => CbKind::Bit(bit),
            (2, bit) => CbKind::Res(bit),
            (_, bit) => CbKind::Set(bit),
        }
    }

    fn mnemonic(self, operand: Operand) -> String {
        let target = operand.name();
        match self {
            CbKind::Rlc => format!("RLC {target}"),
            CbKind::Rrc => format!("RRC {target}"),
            CbKind::Rl => format!("RL {target}"),
            CbKind::Rr => format!("RR {target}"),
            CbKind::Sla => format!("SLA {target}"),
            CbKind::Sra => format!("SRA {target}"),
            CbKind::Swap => format!("SWAP {target}"),
            CbKind::Srl => format!("SRL {target}"),
            CbKind::Bit(bit) => format!("BIT {bit},{target}"),
            CbKind::Res(bit) => format!("RES {bit},{target}"),
            CbKind::Set(bit) => format!("SET {bit},{target}"),
        }
    }

    const fn flags(self) -> &'static str {
        match self {
            CbKind::Swap => "Z000",
            CbKind::Bit(_) => "Z01-",
            CbKind::Res(_) | CbKind::Set(_) => "----",
            _ => "Z00C",
        }
    }
}

/// One entry of the extended table. Cycles include both the $CB and the
/// second opcode fetch.
#[derive(Clone, Debug)]
pub struct CbInstruction {
    pub mnemonic: String,
    pub kind: CbKind,
    pub operand: Operand,
    pub cycles: u8,
    pub flags: &'static str,
}

impl CbInstruction {
    fn decode(opcode: u8) -> CbInstruction {
        let kind = CbKind::decode(opcode >> 6, (opcode >> 3) & 0x07);
        let operand = Operand::from_bits(opcode);
        let cycles = match (kind, operand.is_memory()) {
            (_, false) => 2,
            (CbKind::Bit(_), true) => 3,
            (_, true) => 4,
        };
        CbInstruction {
            mnemonic: kind.mnemonic(operand),
            kind,
            operand,
            cycles,
            flags: kind.flags(),
        }
    }
}

lazy_static! {
    static ref BASE_TABLE: [Option<Instruction>; 256] = build_base_table();
    static ref CB_TABLE: [Option<CbInstruction>; 256] =
        std::array::from_fn(|opcode| Some(CbInstruction::decode(opcode as u8)));
}

/// Look up an unprefixed opcode. `None` for the eleven hardware holes.
#[inline]
pub fn instruction(opcode: u8) -> Option<&'static Instruction> {
    BASE_TABLE[opcode as usize].as_ref()
}

/// Look up the byte following a $CB prefix.
#[inline]
pub fn cb_instruction(opcode: u8) -> Option<&'static CbInstruction> {
    CB_TABLE[opcode as usize].as_ref()
}
