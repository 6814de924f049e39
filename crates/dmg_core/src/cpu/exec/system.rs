use crate::cpu::Cpu;

impl Cpu {
    pub(in crate::cpu) fn exec_nop(&mut self, _opcode: u8) -> u32 {
        1
    }

    /// STOP is two bytes long; the padding byte is fetched and ignored.
    ///
    /// The CPU then idles with the timer frozen until a joypad interrupt is
    /// requested (see `step`).
    pub(in crate::cpu) fn exec_stop(&mut self, _opcode: u8) -> u32 {
        let _padding = self.fetch8();
        self.stopped = true;
        self.halted = false;
        1
    }

    /// HALT, including the halt bug: with IME clear and an enabled
    /// interrupt already pending the CPU does not halt, and the next opcode
    /// fetch fails to advance PC.
    pub(in crate::cpu) fn exec_halt(&mut self, _opcode: u8) -> u32 {
        if !self.ime && !self.pending_interrupts().is_empty() {
            self.halt_bug = true;
        } else {
            self.halted = true;
        }
        1
    }

    pub(in crate::cpu) fn exec_di(&mut self, _opcode: u8) -> u32 {
        self.ime = false;
        self.ime_enable_countdown = 0;
        1
    }

    /// IME becomes set after the *next* instruction completes.
    pub(in crate::cpu) fn exec_ei(&mut self, _opcode: u8) -> u32 {
        if !self.ime && self.ime_enable_countdown == 0 {
            self.ime_enable_countdown = 2;
        }
        1
    }
}
