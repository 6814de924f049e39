use super::Cpu;

/// 8-bit operand location selected by a 3-bit opcode field.
///
/// The encoding is the standard register order used by both opcode
/// tables: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=(HL), 7=A.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operand {
    B,
    C,
    D,
    E,
    H,
    L,
    /// Memory at the address in HL.
    HlIndirect,
    A,
}

impl Operand {
    /// Decode the low three bits of `bits`.
    pub const fn from_bits(bits: u8) -> Operand {
        match bits & 0x07 {
            0 => Operand::B,
            1 => Operand::C,
            2 => Operand::D,
            3 => Operand::E,
            4 => Operand::H,
            5 => Operand::L,
            6 => Operand::HlIndirect,
            _ => Operand::A,
        }
    }

    /// Whether accessing this operand touches memory (and costs bus cycles).
    #[inline]
    pub const fn is_memory(self) -> bool {
        matches!(self, Operand::HlIndirect)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Operand::B => "B",
            Operand::C => "C",
            Operand::D => "D",
            Operand::E => "E",
            Operand::H => "H",
            Operand::L => "L",
            Operand::HlIndirect => "(HL)",
            Operand::A => "A",
        }
    }
}

impl Cpu {
    #[inline]
    pub(in crate::cpu) fn read_operand(&self, operand: Operand) -> u8 {
        match operand {
            Operand::B => self.regs.b,
            Operand::C => self.regs.c,
            Operand::D => self.regs.d,
            Operand::E => self.regs.e,
            Operand::H => self.regs.h,
            Operand::L => self.regs.l,
            Operand::HlIndirect => self.read8(self.regs.hl()),
            Operand::A => self.regs.a,
        }
    }

    #[inline]
    pub(in crate::cpu) fn write_operand(&mut self, operand: Operand, value: u8) {
        match operand {
            Operand::B => self.regs.b = value,
            Operand::C => self.regs.c = value,
            Operand::D => self.regs.d = value,
            Operand::E => self.regs.e = value,
            Operand::H => self.regs.h = value,
            Operand::L => self.regs.l = value,
            Operand::HlIndirect => self.write8(self.regs.hl(), value),
            Operand::A => self.regs.a = value,
        }
    }
}
