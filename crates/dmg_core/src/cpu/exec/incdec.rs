use crate::cpu::{Cpu, Operand};

impl Cpu {
    pub(in crate::cpu) fn exec_inc8(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x04, "unexpected INC r opcode {opcode:#04x}");
        let target = Operand::from_bits(opcode >> 3);
        let value = self.read_operand(target);
        let result = self.alu_inc8(value);
        self.write_operand(target, result);

        if target.is_memory() { 3 } else { 1 }
    }

    pub(in crate::cpu) fn exec_dec8(&mut self, opcode: u8) -> u32 {
        debug_assert!(opcode & 0xC7 == 0x05, "unexpected DEC r opcode {opcode:#04x}");
        let target = Operand::from_bits(opcode >> 3);
        let value = self.read_operand(target);
        let result = self.alu_dec8(value);
        self.write_operand(target, result);

        if target.is_memory() { 3 } else { 1 }
    }

    pub(in crate::cpu) fn exec_inc16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x03 | 0x13 | 0x23 | 0x33));
        let value = self.read_rp(opcode).wrapping_add(1);
        self.write_rp(opcode, value);
        2
    }

    pub(in crate::cpu) fn exec_dec16(&mut self, opcode: u8) -> u32 {
        debug_assert!(matches!(opcode, 0x0B | 0x1B | 0x2B | 0x3B));
        let value = self.read_rp(opcode).wrapping_sub(1);
        self.write_rp(opcode, value);
        2
    }
}
