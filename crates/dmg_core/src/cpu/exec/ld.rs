use crate::cpu::{Cpu, Operand};

/// Address register for the `LD (rr),A` / `LD A,(rr)` column and how HL
/// moves afterwards.
fn indirect_target(cpu: &Cpu, opcode: u8) -> (u16, i8) {
    match (opcode >> 4) & 0x03 {
        0 => (cpu.regs.bc(), 0),
        1 => (cpu.regs.de(), 0),
        2 => (cpu.regs.hl(), 1),
        _ => (cpu.regs.hl(), -1),
    }
}

impl Cpu {
    pub(in crate::cpu) fn exec_ld_rr_d16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x01 | 0x11 | 0x21 | 0x31));
        let value = self.fetch16();
        self.write_rp(opcode, value);
        3
    }

    pub(in crate::cpu) fn exec_ld_r_d8(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x06);
        let target = Operand::from_bits(opcode >> 3);
        let value = self.fetch8();
        self.write_operand(target, value);

        if target.is_memory() { 3 } else { 2 }
    }

    /// LD r,r' for $40–$7F except $76, which is HALT.
    pub(in crate::cpu) fn exec_ld_r_r(&mut self, opcode: u8) -> u32 {
        debug_assert!((0x40..=0x7F).contains(&opcode) && opcode != 0x76);
        let dst = Operand::from_bits(opcode >> 3);
        let src = Operand::from_bits(opcode);
        let value = self.read_operand(src);
        self.write_operand(dst, value);

        if dst.is_memory() || src.is_memory() { 2 } else { 1 }
    }

    /// LD (BC),A / LD (DE),A / LD (HL+),A / LD (HL-),A
    pub(in crate::cpu) fn exec_ld_indirect_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x02 | 0x12 | 0x22 | 0x32));
        let (addr, step) = indirect_target(self, opcode);
        self.write8(addr, self.regs.a);
        if step != 0 {
            self.regs.set_hl(addr.wrapping_add_signed(step as i16));
        }
        2
    }

    /// LD A,(BC) / LD A,(DE) / LD A,(HL+) / LD A,(HL-)
    pub(in crate::cpu) fn exec_ld_a_indirect(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0A | 0x1A | 0x2A | 0x3A));
        let (addr, step) = indirect_target(self, opcode);
        self.regs.a = self.read8(addr);
        if step != 0 {
            self.regs.set_hl(addr.wrapping_add_signed(step as i16));
        }
        2
    }

    pub(in crate::cpu) fn exec_ld_a16_sp(&mut self, _opcode: u8) -> u32 {
        let addr = self.fetch16();
        let [lo, hi] = self.regs.sp.to_le_bytes();
        self.write8(addr, lo);
        self.write8(addr.wrapping_add(1), hi);
        5
    }

    /// LDH (a8),A for $E0 and LDH A,(a8) for $F0.
    pub(in crate::cpu) fn exec_ldh_a8(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE0 | 0xF0));
        let addr = 0xFF00 | self.fetch8() as u16;
        if opcode == 0xE0 {
            self.write8(addr, self.regs.a);
        } else {
            self.regs.a = self.read8(addr);
        }
        3
    }

    /// LD (C),A for $E2 and LD A,(C) for $F2.
    pub(in crate::cpu) fn exec_ldh_c(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xE2 | 0xF2));
        let addr = 0xFF00 | self.regs.c as u16;
        if opcode == 0xE2 {
            self.write8(addr, self.regs.a);
        } else {
            self.regs.a = self.read8(addr);
        }
        2
    }

    /// LD (a16),A for $EA and LD A,(a16) for $FA.
    pub(in crate::cpu) fn exec_ld_a16_a(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0xEA | 0xFA));
        let addr = self.fetch16();
        if opcode == 0xEA {
            self.write8(addr, self.regs.a);
        } else {
            self.regs.a = self.read8(addr);
        }
        4
    }

    pub(in crate::cpu) fn exec_ld_sp_hl(&mut self, _opcode: u8) -> u32 {
        self.regs.sp = self.regs.hl();
        2
    }
}
