use super::MemoryBus;
use crate::machine::io::reg;

/// APU registers $FF10–$FF26 as the boot ROM leaves them. Holes are
/// unmapped on hardware and stay zero here.
const DMG_APU_INIT: [(usize, u8); 21] = [
    (0x10, 0x80), // NR10
    (0x11, 0xBF), // NR11
    (0x12, 0xF3), // NR12
    (0x13, 0xFF), // NR13
    (0x14, 0xBF), // NR14
    (0x16, 0x3F), // NR21
    (0x17, 0x00), // NR22
    (0x18, 0xFF), // NR23
    (0x19, 0xBF), // NR24
    (0x1A, 0x7F), // NR30
    (0x1B, 0xFF), // NR31
    (0x1C, 0x9F), // NR32
    (0x1D, 0xFF), // NR33
    (0x1E, 0xBF), // NR34
    (0x20, 0xFF), // NR41
    (0x21, 0x00), // NR42
    (0x22, 0x00), // NR43
    (0x23, 0xBF), // NR44
    (0x24, 0x77), // NR50
    (0x25, 0xF3), // NR51
    (0x26, 0xF1), // NR52
];

impl MemoryBus {
    /// Seed the I/O block with the DMG post-boot values seen at PC=$0100.
    pub(super) fn apply_dmg_initial_io_state(&mut self) {
        let io = &mut self.io;

        io.set(reg::JOYP, 0xCF);

        // Serial: idle, internal clock bit reads back set.
        io.set(reg::SB, 0x00);
        io.set(reg::SC, 0x7E);

        // DIV has been counting through the boot ROM.
        io.set_div(0xAB);
        io.set_tima(0x00);
        io.set_tma(0x00);
        io.set_tac(0xF8);

        // Upper three bits read as 1; VBlank was requested during boot.
        io.set_interrupt_flag(0xE1);

        for (offset, value) in DMG_APU_INIT {
            io.set(offset, value);
        }

        io.set(reg::LCDC, 0x91);
        io.set(reg::STAT, 0x85);
        io.set(reg::SCY, 0x00);
        io.set(reg::SCX, 0x00);
        io.set(reg::LY, 0x00);
        io.set(reg::LYC, 0x00);
        io.set(reg::DMA, 0xFF);
        io.set(reg::BGP, 0xFC);
        io.set(reg::OBP0, 0xFF);
        io.set(reg::OBP1, 0xFF);
        io.set(reg::WY, 0x00);
        io.set(reg::WX, 0x00);

        self.ie = 0x00;
    }
}
