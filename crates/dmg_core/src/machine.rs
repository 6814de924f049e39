mod bus;
mod gameboy;
mod io;
mod timer;

pub use bus::{MemoryBus, Region};
pub use gameboy::GameBoy;
pub use io::{reg, InterruptFlags, IoRegisters};
pub use timer::Timer;

/// Address of the interrupt flag register (IF).
pub const IF_ADDR: u16 = 0xFF0F;
/// Address of the interrupt enable register (IE).
pub const IE_ADDR: u16 = 0xFFFF;
/// Address of the divider register (DIV).
pub const DIV_ADDR: u16 = 0xFF04;
/// Serial transfer data (SB).
pub const SB_ADDR: u16 = 0xFF01;
/// Serial transfer control (SC).
pub const SC_ADDR: u16 = 0xFF02;

#[cfg(test)]
mod tests;
