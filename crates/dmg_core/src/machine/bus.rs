use super::io::{IoRegisters, IO_SIZE};

mod init;

const ROM_BANK_SIZE: usize = 0x4000;
const VRAM_SIZE: usize = 0x2000;
const EXT_RAM_SIZE: usize = 0x2000;
const WRAM_BANK_SIZE: usize = 0x1000;
const OAM_SIZE: usize = 0xA0;
const UNUSABLE_SIZE: usize = 0x60;
const HRAM_SIZE: usize = 0x7F;

/// The backing regions of the DMG address space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    RomBank0,
    RomBankN,
    VideoRam,
    ExternalRam,
    WorkRam0,
    WorkRam1,
    /// $E000–$FDFF. Has no storage of its own; accesses land in work RAM.
    EchoRam,
    Oam,
    Unusable,
    Io,
    HighRam,
    InterruptEnable,
}

impl Region {
    pub const ALL: [Region; 12] = [
        Region::RomBank0,
        Region::RomBankN,
        Region::VideoRam,
        Region::ExternalRam,
        Region::WorkRam0,
        Region::WorkRam1,
        Region::EchoRam,
        Region::Oam,
        Region::Unusable,
        Region::Io,
        Region::HighRam,
        Region::InterruptEnable,
    ];

    /// The region an address decodes to, before echo aliasing.
    pub const fn of(addr: u16) -> Region {
        match addr {
            0x0000..=0x3FFF => Region::RomBank0,
            0x4000..=0x7FFF => Region::RomBankN,
            0x8000..=0x9FFF => Region::VideoRam,
            0xA000..=0xBFFF => Region::ExternalRam,
            0xC000..=0xCFFF => Region::WorkRam0,
            0xD000..=0xDFFF => Region::WorkRam1,
            0xE000..=0xFDFF => Region::EchoRam,
            0xFE00..=0xFE9F => Region::Oam,
            0xFEA0..=0xFEFF => Region::Unusable,
            0xFF00..=0xFF7F => Region::Io,
            0xFF80..=0xFFFE => Region::HighRam,
            0xFFFF => Region::InterruptEnable,
        }
    }

    /// First address of the region.
    pub const fn start(self) -> u16 {
        match self {
            Region::RomBank0 => 0x0000,
            Region::RomBankN => 0x4000,
            Region::VideoRam => 0x8000,
            Region::ExternalRam => 0xA000,
            Region::WorkRam0 => 0xC000,
            Region::WorkRam1 => 0xD000,
            Region::EchoRam => 0xE000,
            Region::Oam => 0xFE00,
            Region::Unusable => 0xFEA0,
            Region::Io => 0xFF00,
            Region::HighRam => 0xFF80,
            Region::InterruptEnable => 0xFFFF,
        }
    }

    /// Resolve an address to the region that stores it and the offset
    /// inside that region's array. Echo RAM resolves into work RAM; every
    /// other address resolves to itself.
    pub const fn locate(addr: u16) -> (Region, usize) {
        let region = Region::of(addr);
        match region {
            Region::EchoRam => {
                let mirrored = addr - 0x2000;
                let target = Region::of(mirrored);
                (target, (mirrored - target.start()) as usize)
            }
            _ => (region, (addr - region.start()) as usize),
        }
    }
}

/// Flat address router over the DMG's fixed backing arrays.
///
/// The bus has no policy of its own: every region, ROM included, accepts
/// writes. Hardware rules (read-only cartridge space, DIV reset on write)
/// are applied by the CPU before it gets here.
#[derive(Clone)]
pub struct MemoryBus {
    rom_bank0: [u8; ROM_BANK_SIZE],
    rom_bank1: [u8; ROM_BANK_SIZE],
    vram: [u8; VRAM_SIZE],
    ext_ram: [u8; EXT_RAM_SIZE],
    wram0: [u8; WRAM_BANK_SIZE],
    wram1: [u8; WRAM_BANK_SIZE],
    oam: [u8; OAM_SIZE],
    unusable: [u8; UNUSABLE_SIZE],
    io: IoRegisters,
    hram: [u8; HRAM_SIZE],
    ie: u8,
}

impl Default for MemoryBus {
    fn default() -> Self {
        let mut bus = Self {
            rom_bank0: [0; ROM_BANK_SIZE],
            rom_bank1: [0; ROM_BANK_SIZE],
            vram: [0; VRAM_SIZE],
            ext_ram: [0; EXT_RAM_SIZE],
            wram0: [0; WRAM_BANK_SIZE],
            wram1: [0; WRAM_BANK_SIZE],
            oam: [0; OAM_SIZE],
            unusable: [0; UNUSABLE_SIZE],
            io: IoRegisters::default(),
            hram: [0; HRAM_SIZE],
            ie: 0,
        };
        bus.apply_dmg_initial_io_state();
        bus
    }
}

impl std::fmt::Debug for MemoryBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryBus")
            .field("io", &self.io)
            .field("ie", &format_args!("{:#04X}", self.ie))
            .finish_non_exhaustive()
    }
}

impl MemoryBus {
    pub fn new() -> Self {
        Self::default()
    }

    fn cell(&self, addr: u16) -> &u8 {
        let (region, offset) = Region::locate(addr);
        match region {
            Region::RomBank0 => &self.rom_bank0[offset],
            Region::RomBankN => &self.rom_bank1[offset],
            Region::VideoRam => &self.vram[offset],
            Region::ExternalRam => &self.ext_ram[offset],
            Region::WorkRam0 => &self.wram0[offset],
            Region::WorkRam1 => &self.wram1[offset],
            Region::Oam => &self.oam[offset],
            Region::Unusable => &self.unusable[offset],
            Region::Io => self.io.cell(offset),
            Region::HighRam => &self.hram[offset],
            Region::InterruptEnable => &self.ie,
            // `locate` never yields the echo region.
            Region::EchoRam => unreachable!("echo RAM resolved to itself at {addr:#06X}"),
        }
    }

    fn cell_mut(&mut self, addr: u16) -> &mut u8 {
        let (region, offset) = Region::locate(addr);
        match region {
            Region::RomBank0 => &mut self.rom_bank0[offset],
            Region::RomBankN => &mut self.rom_bank1[offset],
            Region::VideoRam => &mut self.vram[offset],
            Region::ExternalRam => &mut self.ext_ram[offset],
            Region::WorkRam0 => &mut self.wram0[offset],
            Region::WorkRam1 => &mut self.wram1[offset],
            Region::Oam => &mut self.oam[offset],
            Region::Unusable => &mut self.unusable[offset],
            Region::Io => self.io.cell_mut(offset),
            Region::HighRam => &mut self.hram[offset],
            Region::InterruptEnable => &mut self.ie,
            Region::EchoRam => unreachable!("echo RAM resolved to itself at {addr:#06X}"),
        }
    }

    #[inline]
    pub fn read_byte(&self, addr: u16) -> u8 {
        *self.cell(addr)
    }

    #[inline]
    pub fn write_byte(&mut self, addr: u16, value: u8) {
        *self.cell_mut(addr) = value;
    }

    /// Little-endian 16-bit read. $FFFF wraps its high byte to $0000.
    pub fn read_word(&self, addr: u16) -> u16 {
        let lo = self.read_byte(addr);
        let hi = self.read_byte(addr.wrapping_add(1));
        u16::from_le_bytes([lo, hi])
    }

    pub fn write_word(&mut self, addr: u16, value: u16) {
        let [lo, hi] = value.to_le_bytes();
        self.write_byte(addr, lo);
        self.write_byte(addr.wrapping_add(1), hi);
    }

    /// Copy `data` into the bus starting at `start`, wrapping at $FFFF.
    pub fn load(&mut self, start: u16, data: &[u8]) {
        let mut addr = start;
        for &byte in data {
            self.write_byte(addr, byte);
            addr = addr.wrapping_add(1);
        }
    }

    /// Backing bytes of a region. Echo RAM has none and yields an empty
    /// slice; read the work RAM regions instead.
    pub fn region_bytes(&self, region: Region) -> &[u8] {
        match region {
            Region::RomBank0 => &self.rom_bank0,
            Region::RomBankN => &self.rom_bank1,
            Region::VideoRam => &self.vram,
            Region::ExternalRam => &self.ext_ram,
            Region::WorkRam0 => &self.wram0,
            Region::WorkRam1 => &self.wram1,
            Region::EchoRam => &[],
            Region::Oam => &self.oam,
            Region::Unusable => &self.unusable,
            Region::Io => {
                debug_assert_eq!(self.io.as_slice().len(), IO_SIZE);
                self.io.as_slice()
            }
            Region::HighRam => &self.hram,
            Region::InterruptEnable => std::slice::from_ref(&self.ie),
        }
    }

    pub fn io(&self) -> &IoRegisters {
        &self.io
    }

    pub fn io_mut(&mut self) -> &mut IoRegisters {
        &mut self.io
    }

    pub fn ie(&self) -> u8 {
        self.ie
    }

    pub fn set_ie(&mut self, value: u8) {
        self.ie = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_address_has_exactly_one_home() {
        let bus = MemoryBus::default();
        for addr in 0..=0xFFFFu16 {
            let (region, offset) = Region::locate(addr);
            assert_ne!(region, Region::EchoRam);
            assert!(offset < bus.region_bytes(region).len(), "{addr:#06X}");
        }
    }

    #[test]
    fn echo_maps_onto_work_ram() {
        assert_eq!(Region::locate(0xE000), (Region::WorkRam0, 0));
        assert_eq!(Region::locate(0xF000), (Region::WorkRam1, 0));
        assert_eq!(Region::locate(0xFDFF), (Region::WorkRam1, 0xDFF));
    }

    #[test]
    fn ie_is_not_part_of_hram() {
        let mut bus = MemoryBus::default();
        bus.write_byte(0xFFFE, 0xAA);
        bus.write_byte(0xFFFF, 0x1F);
        assert_eq!(bus.region_bytes(Region::HighRam)[0x7E], 0xAA);
        assert_eq!(bus.ie(), 0x1F);
    }

    #[test]
    fn words_are_little_endian() {
        let mut bus = MemoryBus::default();
        bus.write_word(0xC000, 0xBEEF);
        assert_eq!(bus.read_byte(0xC000), 0xEF);
        assert_eq!(bus.read_byte(0xC001), 0xBE);
        assert_eq!(bus.read_word(0xC000), 0xBEEF);
    }
}
