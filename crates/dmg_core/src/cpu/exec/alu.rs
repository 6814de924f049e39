use crate::cpu::alu::AluOp;
use crate::cpu::{Cpu, Flag, Operand};

impl Cpu {
    /// ADD/ADC/SUB/SBC/AND/XOR/OR/CP A,r for $80–$BF.
    pub(in crate::cpu) fn exec_alu_r(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let src = Operand::from_bits(opcode);
        let value = self.read_operand(src);
        self.alu(AluOp::from_opcode(opcode), value);

        if src.is_memory() { 2 } else { 1 }
    }

    pub(in crate::cpu) fn exec_alu_d8(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC6);
        let value = self.fetch8();
        self.alu(AluOp::from_opcode(opcode), value);
        2
    }

    /// RLCA, RRCA, RLA, RRA. Unlike the CB forms, Z is always cleared.
    pub(in crate::cpu) fn exec_rotate_a(&mut self, opcode: u8) -> u32 {
        let a = self.regs.a;
        let carry_in = self.get_flag(Flag::C) as u8;
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        let (result, carry_out) = match (opcode >> 3) & 0x03 {
            0 => (a.rotate_left(1), a & 0x80 != 0),
            1 => (a.rotate_right(1), a & 0x01 != 0),
            2 => ((a << 1) | carry_in, a & 0x80 != 0),
            _ => ((a >> 1) | (carry_in << 7), a & 0x01 != 0),
        };

        self.regs.a = result;
        self.clear_flags();
        self.set_flag(Flag::C, carry_out);
        1
    }

    pub(in crate::cpu) fn exec_add_hl_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x09 | 0x19 | 0x29 | 0x39));
        let value = self.read_rp(opcode);
        self.alu_add16_hl(value);
        2
    }

    pub(in crate::cpu) fn exec_add_sp_r8(&mut self, _opcode: u8) -> u32 {
        let imm = self.fetch8();
        self.regs.sp = self.alu_add16_signed(self.regs.sp, imm);
        4
    }

    pub(in crate::cpu) fn exec_ld_hl_sp_r8(&mut self, _opcode: u8) -> u32 {
        let imm = self.fetch8();
        let result = self.alu_add16_signed(self.regs.sp, imm);
        self.regs.set_hl(result);
        3
    }

    pub(in crate::cpu) fn exec_daa(&mut self, _opcode: u8) -> u32 {
        self.alu_daa();
        1
    }

    pub(in crate::cpu) fn exec_cpl(&mut self, _opcode: u8) -> u32 {
        self.regs.a = !self.regs.a;
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, true);
        1
    }

    pub(in crate::cpu) fn exec_scf(&mut self, _opcode: u8) -> u32 {
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, true);
        1
    }

    pub(in crate::cpu) fn exec_ccf(&mut self, _opcode: u8) -> u32 {
        let carry = self.get_flag(Flag::C);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, !carry);
        1
    }
}
