use bitflags::bitflags;

bitflags! {
    /// Interrupt request/enable bits shared by IF ($FF0F) and IE ($FFFF).
    ///
    /// Bit order is also the service priority: VBlank wins over everything,
    /// Joypad loses to everything.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InterruptFlags: u8 {
        const VBLANK = 1 << 0;
        const LCD_STAT = 1 << 1;
        const TIMER = 1 << 2;
        const SERIAL = 1 << 3;
        const JOYPAD = 1 << 4;
    }
}

impl InterruptFlags {
    /// The single highest-priority source set in `self`, if any.
    pub fn highest_priority(self) -> Option<InterruptFlags> {
        let bits = self.bits() & Self::all().bits();
        if bits == 0 {
            return None;
        }
        Some(Self::from_bits_retain(1 << bits.trailing_zeros()))
    }

    /// Handler address for a single interrupt source.
    ///
    /// For a multi-bit value the highest-priority source decides.
    pub fn vector(self) -> u16 {
        let index = (self.bits() & Self::all().bits()).trailing_zeros().min(4) as u16;
        0x0040 + index * 8
    }
}

/// Offsets of the named registers inside the I/O block ($FF00 + offset).
pub mod reg {
    pub const JOYP: usize = 0x00;
    pub const SB: usize = 0x01;
    pub const SC: usize = 0x02;
    pub const DIV: usize = 0x04;
    pub const TIMA: usize = 0x05;
    pub const TMA: usize = 0x06;
    pub const TAC: usize = 0x07;
    pub const IF: usize = 0x0F;
    pub const LCDC: usize = 0x40;
    pub const STAT: usize = 0x41;
    pub const SCY: usize = 0x42;
    pub const SCX: usize = 0x43;
    pub const LY: usize = 0x44;
    pub const LYC: usize = 0x45;
    pub const DMA: usize = 0x46;
    pub const BGP: usize = 0x47;
    pub const OBP0: usize = 0x48;
    pub const OBP1: usize = 0x49;
    pub const WY: usize = 0x4A;
    pub const WX: usize = 0x4B;
}

pub(crate) const IO_SIZE: usize = 0x80;

/// The $FF00–$FF7F register block.
///
/// Storage is a plain byte array; the named accessors below are the view the
/// timer and interrupt controller work through. Nothing here applies
/// hardware policy except the DIV reset latch, which the CPU write path arms
/// and the timer consumes.
#[derive(Clone)]
pub struct IoRegisters {
    regs: [u8; IO_SIZE],
    div_reset: bool,
}

impl Default for IoRegisters {
    fn default() -> Self {
        Self {
            regs: [0; IO_SIZE],
            div_reset: false,
        }
    }
}

impl std::fmt::Debug for IoRegisters {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IoRegisters")
            .field("div", &self.div())
            .field("tima", &self.tima())
            .field("tma", &self.tma())
            .field("tac", &self.tac())
            .field("if", &self.interrupt_flag())
            .finish_non_exhaustive()
    }
}

impl IoRegisters {
    #[inline]
    pub fn get(&self, offset: usize) -> u8 {
        self.regs[offset]
    }

    #[inline]
    pub fn set(&mut self, offset: usize, value: u8) {
        self.regs[offset] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.regs
    }

    pub(crate) fn cell(&self, offset: usize) -> &u8 {
        &self.regs[offset]
    }

    pub(crate) fn cell_mut(&mut self, offset: usize) -> &mut u8 {
        &mut self.regs[offset]
    }

    pub fn div(&self) -> u8 {
        self.regs[reg::DIV]
    }

    pub fn set_div(&mut self, value: u8) {
        self.regs[reg::DIV] = value;
    }

    /// Zero DIV and ask the timer to restart its divider accumulator.
    pub fn reset_div(&mut self) {
        self.regs[reg::DIV] = 0;
        self.div_reset = true;
    }

    pub(crate) fn take_div_reset(&mut self) -> bool {
        std::mem::take(&mut self.div_reset)
    }

    pub fn tima(&self) -> u8 {
        self.regs[reg::TIMA]
    }

    pub fn set_tima(&mut self, value: u8) {
        self.regs[reg::TIMA] = value;
    }

    pub fn tma(&self) -> u8 {
        self.regs[reg::TMA]
    }

    pub fn set_tma(&mut self, value: u8) {
        self.regs[reg::TMA] = value;
    }

    pub fn tac(&self) -> u8 {
        self.regs[reg::TAC]
    }

    pub fn set_tac(&mut self, value: u8) {
        self.regs[reg::TAC] = value;
    }

    pub fn sb(&self) -> u8 {
        self.regs[reg::SB]
    }

    pub fn sc(&self) -> u8 {
        self.regs[reg::SC]
    }

    /// Raw IF byte, including the three unused upper bits.
    pub fn interrupt_flag(&self) -> u8 {
        self.regs[reg::IF]
    }

    pub fn set_interrupt_flag(&mut self, value: u8) {
        self.regs[reg::IF] = value;
    }

    /// Pending requests as seen by the interrupt controller.
    pub fn requested(&self) -> InterruptFlags {
        InterruptFlags::from_bits_truncate(self.regs[reg::IF])
    }

    pub fn request(&mut self, interrupt: InterruptFlags) {
        self.regs[reg::IF] |= interrupt.bits();
    }

    pub fn acknowledge(&mut self, interrupt: InterruptFlags) {
        self.regs[reg::IF] &= !interrupt.bits();
    }
}
