use crate::cpu::Cpu;

impl Cpu {
    /// Pair selected by bits 5–4 for PUSH/POP: BC, DE, HL, AF.
    fn read_rp2(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.af(),
        }
    }

    pub(in crate::cpu) fn exec_push_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC5 | 0xD5 | 0xE5 | 0xF5));
        let value = self.read_rp2(opcode);
        self.push_u16(value);
        4
    }

    /// POP AF goes through `set_af`, so F's low nibble stays zero.
    pub(in crate::cpu) fn exec_pop_rr(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC1 | 0xD1 | 0xE1 | 0xF1));
        let value = self.pop_u16();
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.set_af(value),
        }
        3
    }
}
