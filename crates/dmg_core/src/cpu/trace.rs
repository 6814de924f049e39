use super::table::{cb_instruction, instruction, Dispatch};
use super::Cpu;

impl Cpu {
    /// Register state in the gameboy-doctor log format:
    ///
    /// `A:01 F:B0 B:00 C:13 D:00 E:D8 H:01 L:4D SP:FFFE PC:0100 PCMEM:00,C3,13,02`
    pub fn trace_line(&self) -> String {
        let r = &self.regs;
        let pc = r.pc;
        let mem = |offset: u16| self.read8(pc.wrapping_add(offset));
        format!(
            "A:{:02X} F:{:02X} B:{:02X} C:{:02X} D:{:02X} E:{:02X} H:{:02X} L:{:02X} SP:{:04X} PC:{:04X} PCMEM:{:02X},{:02X},{:02X},{:02X}",
            r.a,
            r.f,
            r.b,
            r.c,
            r.d,
            r.e,
            r.h,
            r.l,
            r.sp,
            pc,
            mem(0),
            mem(1),
            mem(2),
            mem(3),
        )
    }

    /// Mnemonic and byte length of the instruction at `addr`, or `None` for
    /// an undefined opcode.
    pub fn disassemble(&self, addr: u16) -> Option<(String, u8)> {
        let opcode = self.read8(addr);
        let instr = instruction(opcode)?;
        match instr.dispatch {
            Dispatch::Execute(_) => Some((instr.mnemonic.to_string(), instr.length)),
            Dispatch::Prefix => {
                let cb = cb_instruction(self.read8(addr.wrapping_add(1)))?;
                Some((cb.mnemonic.clone(), 2))
            }
        }
    }
}
