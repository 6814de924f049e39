use super::alu::flags;
use super::{CbInstruction, CbKind, Cpu, Flag};

impl Cpu {
    /// Execute one decoded CB-prefixed instruction and return its M-cycles.
    pub(in crate::cpu) fn exec_cb(&mut self, instr: &CbInstruction) -> u32 {
        let value = self.read_operand(instr.operand);
        let carry_in = self.get_flag(Flag::C) as u8;

        match instr.kind {
            CbKind::Bit(bit) => {
                // Z from the tested bit, N=0, H=1, C kept.
                let zero = value & (1 << bit) == 0;
                self.regs.f = flags(zero, false, true, carry_in != 0);
            }
            CbKind::Res(bit) => self.write_operand(instr.operand, value & !(1 << bit)),
            CbKind::Set(bit) => self.write_operand(instr.operand, value | (1 << bit)),
            kind => {
                let (result, carry_out) = match kind {
                    CbKind::Rlc => (value.rotate_left(1), value & 0x80 != 0),
                    CbKind::Rrc => (value.rotate_right(1), value & 0x01 != 0),
                    CbKind::Rl => ((value << 1) | carry_in, value & 0x80 != 0),
                    CbKind::Rr => ((value >> 1) | (carry_in << 7), value & 0x01 != 0),
                    CbKind::Sla => (value << 1, value & 0x80 != 0),
                    CbKind::Sra => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
                    CbKind::Swap => (value.rotate_left(4), false),
                    // SRL
                    _ => (value >> 1, value & 0x01 != 0),
                };
                self.regs.f = flags(result == 0, false, false, carry_out);
                self.write_operand(instr.operand, result);
            }
        }

        instr.cycles as u32
    }
}
