use super::table::{cb_instruction, instruction, Dispatch};
use super::Cpu;
use crate::error::{CpuError, Result};
use crate::machine::InterruptFlags;

impl Cpu {
    /// Run one unit of work and return the M-cycles it took.
    ///
    /// A unit is one of: an interrupt dispatch (5), one idle HALT/STOP
    /// cycle (1), or one complete instruction including its fetch. Decode
    /// faults are latched; once one has happened every later call returns
    /// it again until [`Cpu::reset`].
    pub fn step(&mut self) -> Result<u32> {
        if let Some(fault) = self.fault {
            return Err(fault);
        }

        if self.stopped {
            if !self.bus.io().requested().contains(InterruptFlags::JOYPAD) {
                return Ok(1);
            }
            self.stopped = false;
        }

        if let Some(cycles) = self.service_interrupts() {
            return Ok(cycles);
        }

        if self.halted {
            return Ok(1);
        }

        if self.trace_instructions {
            log::trace!("{}", self.trace_line());
        }

        let pc = self.regs.pc;
        let opcode = self.fetch8();
        let cycles = match instruction(opcode).map(|instr| instr.dispatch) {
            Some(Dispatch::Execute(handler)) => handler(self, opcode),
            Some(Dispatch::Prefix) => self.step_prefixed(pc)?,
            None => return Err(self.latch_fault(CpuError::UndefinedOpcode { pc, opcode })),
        };

        self.apply_ime_delay();
        Ok(cycles)
    }

    fn step_prefixed(&mut self, pc: u16) -> Result<u32> {
        let opcode = self.fetch8();
        match cb_instruction(opcode) {
            Some(instr) => Ok(self.exec_cb(instr)),
            None => Err(self.latch_fault(CpuError::UndefinedExtendedOpcode { pc, opcode })),
        }
    }

    fn latch_fault(&mut self, fault: CpuError) -> CpuError {
        log::error!(
            "GB CPU halted on {fault} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
            sp = self.regs.sp,
            af = self.regs.af(),
            bc = self.regs.bc(),
            de = self.regs.de(),
            hl = self.regs.hl(),
        );
        self.fault = Some(fault);
        fault
    }
}
