use super::Cpu;
use crate::machine::InterruptFlags;

/// M-cycles taken by an interrupt dispatch: two idle cycles, two pushes and
/// the jump.
pub(in crate::cpu) const DISPATCH_MCYCLES: u32 = 5;

impl Cpu {
    /// Requests that are both flagged in IF and enabled in IE.
    pub fn pending_interrupts(&self) -> InterruptFlags {
        self.bus.io().requested() & InterruptFlags::from_bits_truncate(self.bus.ie())
    }

    /// Wake from HALT and dispatch the highest-priority pending interrupt.
    ///
    /// Any pending request ends HALT, whether or not IME is set. Only when
    /// IME is set is the interrupt actually taken: PC is pushed, IME is
    /// cleared, exactly one IF bit is acknowledged and PC jumps to the
    /// vector. Returns the cycles spent when a dispatch happened.
    pub(in crate::cpu) fn service_interrupts(&mut self) -> Option<u32> {
        let pending = self.pending_interrupts();
        let interrupt = pending.highest_priority()?;

        self.halted = false;
        if !self.ime {
            return None;
        }

        self.ime = false;
        self.ime_enable_countdown = 0;

        // A halt bug still armed here (EI ; HALT with a request already
        // pending) never gets its repeated fetch; return to the HALT instead.
        let pc = if std::mem::take(&mut self.halt_bug) {
            self.regs.pc.wrapping_sub(1)
        } else {
            self.regs.pc
        };
        self.push_u16(pc);
        self.bus.io_mut().acknowledge(interrupt);
        self.regs.pc = interrupt.vector();

        if self.log_interrupts {
            log::debug!(
                "GB CPU interrupt: {:?} vector=0x{:04X} pc=0x{:04X} sp=0x{:04X} IF=0x{:02X} IE=0x{:02X}",
                interrupt,
                self.regs.pc,
                pc,
                self.regs.sp,
                self.bus.io().interrupt_flag() & 0x1F,
                self.bus.ie(),
            );
        }

        Some(DISPATCH_MCYCLES)
    }

    /// Count down a pending EI after an instruction has completed.
    #[inline]
    pub(in crate::cpu) fn apply_ime_delay(&mut self) {
        if self.ime_enable_countdown > 0 {
            self.ime_enable_countdown -= 1;
            if self.ime_enable_countdown == 0 {
                self.ime = true;
            }
        }
    }
}
