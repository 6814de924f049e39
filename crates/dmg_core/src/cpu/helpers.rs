use super::{Cpu, Flag};
use crate::machine::DIV_ADDR;

impl Cpu {
    /// Memory read as the CPU sees it.
    #[inline]
    pub fn read8(&self, addr: u16) -> u8 {
        self.bus.read_byte(addr)
    }

    /// Memory write as the CPU sees it.
    ///
    /// Cartridge ROM ignores writes (there is no bank controller behind it)
    /// and any write to DIV resets the divider.
    pub fn write8(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => {
                log::trace!("dropped write {value:#04X} to ROM at {addr:#06X}");
            }
            DIV_ADDR => self.bus.io_mut().reset_div(),
            _ => self.bus.write_byte(addr, value),
        }
    }

    #[inline]
    pub(in crate::cpu) fn fetch8(&mut self) -> u8 {
        let value = self.read8(self.regs.pc);
        if self.halt_bug {
            // The first fetch after a HALT bug reads the byte but leaves PC
            // where it is.
            self.halt_bug = false;
        } else {
            self.regs.pc = self.regs.pc.wrapping_add(1);
        }
        value
    }

    #[inline]
    pub(in crate::cpu) fn fetch16(&mut self) -> u16 {
        let lo = self.fetch8();
        let hi = self.fetch8();
        u16::from_le_bytes([lo, hi])
    }

    /// Push with the high byte at SP-1 and the low byte at SP-2.
    #[inline]
    pub(in crate::cpu) fn push_u16(&mut self, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(self.regs.sp, hi);
        self.regs.sp = self.regs.sp.wrapping_sub(1);
        self.write8(self.regs.sp, lo);
    }

    #[inline]
    pub(in crate::cpu) fn pop_u16(&mut self) -> u16 {
        let lo = self.read8(self.regs.sp);
        let hi = self.read8(self.regs.sp.wrapping_add(1));
        self.regs.sp = self.regs.sp.wrapping_add(2);
        u16::from_le_bytes([lo, hi])
    }

    /// Branch condition encoded in opcode bits 4–3: NZ, Z, NC, C.
    #[inline]
    pub(in crate::cpu) fn condition(&self, opcode: u8) -> bool {
        match (opcode >> 3) & 0x03 {
            0 => !self.get_flag(Flag::Z),
            1 => self.get_flag(Flag::Z),
            2 => !self.get_flag(Flag::C),
            _ => self.get_flag(Flag::C),
        }
    }

    /// 16-bit register pair selected by opcode bits 5–4 for loads and
    /// arithmetic: BC, DE, HL, SP.
    #[inline]
    pub(in crate::cpu) fn read_rp(&self, opcode: u8) -> u16 {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            2 => self.regs.hl(),
            _ => self.regs.sp,
        }
    }

    #[inline]
    pub(in crate::cpu) fn write_rp(&mut self, opcode: u8, value: u16) {
        match (opcode >> 4) & 0x03 {
            0 => self.regs.set_bc(value),
            1 => self.regs.set_de(value),
            2 => self.regs.set_hl(value),
            _ => self.regs.sp = value,
        }
    }

    /// Relative jump shared by JR and JR cc.
    ///
    /// The displacement is a signed 8-bit offset relative to the address
    /// following the operand.
    pub(in crate::cpu) fn jr(&mut self, cond: bool) -> u32 {
        let offset = self.fetch8() as i8;
        if cond {
            self.regs.pc = self.regs.pc.wrapping_add_signed(offset as i16);
            3
        } else {
            2
        }
    }

    pub(in crate::cpu) fn jp_cond(&mut self, cond: bool) -> u32 {
        let addr = self.fetch16();
        if cond {
            self.regs.pc = addr;
            4
        } else {
            3
        }
    }

    pub(in crate::cpu) fn call_cond(&mut self, cond: bool) -> u32 {
        let addr = self.fetch16();
        if cond {
            let ret = self.regs.pc;
            self.push_u16(ret);
            self.regs.pc = addr;
            6
        } else {
            3
        }
    }

    /// Pop shared by RET, RET cc and RETI.
    pub(in crate::cpu) fn ret(&mut self) {
        self.regs.pc = self.pop_u16();
    }

    pub(in crate::cpu) fn ret_cond(&mut self, cond: bool) -> u32 {
        if cond {
            self.ret();
            5
        } else {
            2
        }
    }
}
