use crate::config::GameBoyConfig;
use crate::cpu::Cpu;
use crate::error::Result;

use super::{MemoryBus, Timer};

/// Bytes of cartridge ROM visible without a bank controller.
const FIXED_ROM_SIZE: usize = 0x8000;

/// High-level Game Boy machine.
///
/// Owns the CPU (which owns the bus) and the timer. One [`GameBoy::step`]
/// runs the CPU for one instruction or interrupt dispatch and then feeds
/// the cycles it took to the timer.
#[derive(Clone, Debug)]
pub struct GameBoy {
    cpu: Cpu,
    timer: Timer,
    config: GameBoyConfig,
    /// Last image passed to `load_rom`, re-inserted on reset.
    rom: Vec<u8>,
    total_cycles: u64,
}

impl Default for GameBoy {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBoy {
    pub fn new() -> Self {
        Self::with_config(GameBoyConfig::default())
    }

    pub fn with_config(config: GameBoyConfig) -> Self {
        let mut cpu = Cpu::new();
        cpu.set_tracing(config.trace_instructions, config.log_interrupts);
        Self {
            cpu,
            timer: Timer::new(),
            config,
            rom: Vec::new(),
            total_cycles: 0,
        }
    }

    pub fn config(&self) -> &GameBoyConfig {
        &self.config
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn bus(&self) -> &MemoryBus {
        self.cpu.bus()
    }

    pub fn bus_mut(&mut self) -> &mut MemoryBus {
        self.cpu.bus_mut()
    }

    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// M-cycles run since power-on or the last reset.
    pub fn total_cycles(&self) -> u64 {
        self.total_cycles
    }

    /// Back to the post-boot state with the last loaded ROM still inserted.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.timer = Timer::new();
        self.total_cycles = 0;
        self.insert_rom();
    }

    /// Copy a ROM image into the fixed $0000–$7FFF window.
    ///
    /// Only the first 32 KiB are visible; there is no bank switching.
    pub fn load_rom(&mut self, rom: &[u8]) {
        log_cartridge_header(rom);
        self.rom = rom.to_vec();
        self.insert_rom();
    }

    fn insert_rom(&mut self) {
        let len = self.rom.len().min(FIXED_ROM_SIZE);
        self.cpu.bus_mut().load(0x0000, &self.rom[..len]);
    }

    /// Raw write that bypasses CPU-side policy, so ROM bytes can be patched.
    pub fn set_value(&mut self, addr: u16, value: u8) {
        self.cpu.bus_mut().write_byte(addr, value);
    }

    pub fn read_value(&self, addr: u16) -> u8 {
        self.cpu.bus().read_byte(addr)
    }

    /// Execute one CPU step and advance the timer by the cycles it took.
    ///
    /// The timer does not run while the CPU is in STOP. The STOP opcode
    /// itself and the step that wakes from it are still counted.
    pub fn step(&mut self) -> Result<u32> {
        let was_stopped = self.cpu.stopped();
        let cycles = self.cpu.step()?;
        if !(was_stopped && self.cpu.stopped()) {
            self.timer.advance(self.cpu.bus_mut().io_mut(), cycles);
        }
        self.total_cycles += cycles as u64;
        Ok(cycles)
    }
}

fn log_cartridge_header(rom: &[u8]) {
    if rom.len() < 0x150 {
        log::warn!("ROM image is only {} bytes; no cartridge header", rom.len());
        return;
    }

    let title: String = rom[0x134..=0x143]
        .iter()
        .take_while(|&&b| b != 0)
        .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '?' })
        .collect();
    let cart_type = rom[0x147];
    let rom_size_code = rom[0x148];

    log::info!(
        "Loaded ROM \"{}\" ({} bytes, cartridge type 0x{:02X}, ROM size code 0x{:02X})",
        title.trim_end(),
        rom.len(),
        cart_type,
        rom_size_code,
    );

    if cart_type != 0x00 {
        log::warn!(
            "cartridge type 0x{:02X} needs a bank controller; only the fixed 32 KiB window is mapped",
            cart_type
        );
    }
    if rom.len() > FIXED_ROM_SIZE {
        log::warn!(
            "ROM is {} bytes; bytes past 0x{:04X} are not reachable",
            rom.len(),
            FIXED_ROM_SIZE
        );
    }
}
