use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_jr(&mut self, _opcode: u8) -> u32 {
        self.jr(true)
    }

    pub(in crate::cpu) fn exec_jr_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x20 | 0x28 | 0x30 | 0x38));
        let taken = self.condition(opcode);
        self.jr(taken)
    }

    pub(in crate::cpu) fn exec_jp_a16(&mut self, _opcode: u8) -> u32 {
        self.jp_cond(true)
    }

    pub(in crate::cpu) fn exec_jp_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC2 | 0xCA | 0xD2 | 0xDA));
        let taken = self.condition(opcode);
        self.jp_cond(taken)
    }

    pub(in crate::cpu) fn exec_jp_hl(&mut self, _opcode: u8) -> u32 {
        self.regs.pc = self.regs.hl();
        1
    }

    pub(in crate::cpu) fn exec_call_a16(&mut self, _opcode: u8) -> u32 {
        self.call_cond(true)
    }

    pub(in crate::cpu) fn exec_call_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC4 | 0xCC | 0xD4 | 0xDC));
        let taken = self.condition(opcode);
        self.call_cond(taken)
    }

    pub(in crate::cpu) fn exec_ret(&mut self, _opcode: u8) -> u32 {
        self.ret();
        4
    }

    pub(in crate::cpu) fn exec_ret_cc(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xC0 | 0xC8 | 0xD0 | 0xD8));
        let taken = self.condition(opcode);
        self.ret_cond(taken)
    }

    /// RETI enables IME immediately, with no EI-style delay.
    pub(in crate::cpu) fn exec_reti(&mut self, _opcode: u8) -> u32 {
        self.ret();
        self.ime = true;
        self.ime_enable_countdown = 0;
        4
    }

    pub(in crate::cpu) fn exec_rst(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0xC7);
        let ret = self.regs.pc;
        self.push_u16(ret);
        self.regs.pc = (opcode & 0x38) as u16;
        4
    }
}
