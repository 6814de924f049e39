pub mod config;
pub mod cpu;
pub mod error;
pub mod machine;

pub use config::GameBoyConfig;
pub use cpu::{Cpu, Flag, Operand, Registers};
pub use error::{CpuError, Result};
pub use machine::{GameBoy, InterruptFlags, IoRegisters, MemoryBus, Region, Timer};

/// DMG CPU clock in T-cycles per second.
pub const CLOCK_HZ: u32 = 4_194_304;
/// T-cycles per M-cycle. All cycle counts reported by this crate are M-cycles.
pub const TCYCLES_PER_MCYCLE: u32 = 4;
/// M-cycles in one 59.7 Hz video frame, for drivers that pace by frame.
pub const MCYCLES_PER_FRAME: u32 = 70_224 / TCYCLES_PER_MCYCLE;
