mod alu;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod operand;
mod regs;
mod step;
mod table;
mod trace;

pub use operand::Operand;
pub use regs::{Flag, Registers};
pub use table::{cb_instruction, instruction, CbInstruction, CbKind, Dispatch, Instruction};

use crate::error::CpuError;
use crate::machine::MemoryBus;

/// LR35902 core.
///
/// The CPU exclusively owns the memory bus; everything else (timer, test
/// harnesses, debuggers) reaches memory through [`Cpu::bus`] and
/// [`Cpu::bus_mut`].
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    bus: MemoryBus,
    ime: bool,
    /// Instructions left before a pending EI sets IME. EI arms it with 2 so
    /// IME rises once the instruction after EI has completed.
    ime_enable_countdown: u8,
    halted: bool,
    halt_bug: bool,
    /// STOP low-power state. Left when a joypad interrupt is requested.
    stopped: bool,
    /// First decode fault, returned by every `step` until reset.
    fault: Option<CpuError>,
    trace_instructions: bool,
    log_interrupts: bool,
}

impl Cpu {
    #[inline]
    pub fn bus(&self) -> &MemoryBus {
        &self.bus
    }

    #[inline]
    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        &mut self.bus
    }

    pub fn ime(&self) -> bool {
        self.ime
    }

    pub fn halted(&self) -> bool {
        self.halted
    }

    pub fn stopped(&self) -> bool {
        self.stopped
    }

    /// Whether an EI is still waiting to take effect.
    pub fn ime_pending(&self) -> bool {
        self.ime_enable_countdown > 0
    }

    pub fn fault(&self) -> Option<CpuError> {
        self.fault
    }

    pub(crate) fn set_tracing(&mut self, trace_instructions: bool, log_interrupts: bool) {
        self.trace_instructions = trace_instructions;
        self.log_interrupts = log_interrupts;
    }
}
