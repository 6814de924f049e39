use super::{Cpu, Registers};
use crate::machine::MemoryBus;

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU in the DMG post-boot state with a freshly seeded bus.
    pub fn new() -> Self {
        Self::with_bus(MemoryBus::default())
    }

    pub fn with_bus(bus: MemoryBus) -> Self {
        Self {
            regs: Registers::dmg_boot(),
            bus,
            ime: false,
            ime_enable_countdown: 0,
            halted: false,
            halt_bug: false,
            stopped: false,
            fault: None,
            trace_instructions: false,
            log_interrupts: false,
        }
    }

    /// Return registers, latches and the bus to the post-boot state.
    ///
    /// Tracing switches survive a reset; memory contents, including any
    /// loaded ROM, do not.
    pub fn reset(&mut self) {
        self.regs = Registers::dmg_boot();
        self.bus = MemoryBus::default();
        // Per Pan Docs, IME is clear when control is handed to the cartridge
        // at 0x0100.
        self.ime = false;
        self.ime_enable_countdown = 0;
        self.halted = false;
        self.halt_bug = false;
        self.stopped = false;
        self.fault = None;
    }
}
