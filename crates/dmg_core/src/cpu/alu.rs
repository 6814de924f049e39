use super::{Cpu, Flag};

/// The eight accumulator operations selected by opcode bits 5–3 in both
/// the `ALU A,r` block ($80–$BF) and the `ALU A,d8` column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::cpu) enum AluOp {
    Add,
    Adc,
    Sub,
    Sbc,
    And,
    Xor,
    Or,
    Cp,
}

impl AluOp {
    pub(in crate::cpu) const fn from_opcode(opcode: u8) -> AluOp {
        match (opcode >> 3) & 0x07 {
            0 => AluOp::Add,
            1 => AluOp::Adc,
            2 => AluOp::Sub,
            3 => AluOp::Sbc,
            4 => AluOp::And,
            5 => AluOp::Xor,
            6 => AluOp::Or,
            _ => AluOp::Cp,
        }
    }
}

/// Pack Z N H C into the upper nibble of F.
#[inline]
pub(in crate::cpu) const fn flags(z: bool, n: bool, h: bool, c: bool) -> u8 {
    (z as u8) << 7 | (n as u8) << 6 | (h as u8) << 5 | (c as u8) << 4
}

/// 8-bit add with optional carry-in. Returns the sum and the new F.
#[inline]
pub(in crate::cpu) fn add8(a: u8, value: u8, carry_in: bool) -> (u8, u8) {
    let carry = carry_in as u8;
    let half = (a & 0x0F) + (value & 0x0F) + carry;
    let full = a as u16 + value as u16 + carry as u16;
    let result = full as u8;
    (result, flags(result == 0, false, half > 0x0F, full > 0xFF))
}

/// 8-bit subtract with optional borrow-in. Returns the difference and the
/// new F.
///
/// The half-borrow includes the carry-in, which is what SBC needs to pass
/// blargg's cpu_instrs.
#[inline]
pub(in crate::cpu) fn sub8(a: u8, value: u8, carry_in: bool) -> (u8, u8) {
    let carry = carry_in as i16;
    let half = (a & 0x0F) as i16 - (value & 0x0F) as i16 - carry;
    let full = a as i16 - value as i16 - carry;
    let result = full as u8;
    (result, flags(result == 0, true, half < 0, full < 0))
}

impl Cpu {
    /// Run one accumulator operation against `value`, updating A (except
    /// for CP) and all four flags.
    pub(in crate::cpu) fn alu(&mut self, op: AluOp, value: u8) {
        let a = self.regs.a;
        let carry = self.get_flag(Flag::C);
        let (result, f) = match op {
            AluOp::Add => add8(a, value, false),
            AluOp::Adc => add8(a, value, carry),
            AluOp::Sub => sub8(a, value, false),
            AluOp::Sbc => sub8(a, value, carry),
            AluOp::And => {
                let r = a & value;
                (r, flags(r == 0, false, true, false))
            }
            AluOp::Xor => {
                let r = a ^ value;
                (r, flags(r == 0, false, false, false))
            }
            AluOp::Or => {
                let r = a | value;
                (r, flags(r == 0, false, false, false))
            }
            AluOp::Cp => {
                let (_, f) = sub8(a, value, false);
                (a, f)
            }
        };
        self.regs.a = result;
        self.regs.f = f;
    }

    /// Decimal adjust A after a BCD add or subtract.
    ///
    /// Correction is driven by N, H and C plus the digits of A. Z and C are
    /// recomputed, H is cleared, N is left alone.
    pub(in crate::cpu) fn alu_daa(&mut self) {
        let mut a = self.regs.a;
        let mut adjust = 0u8;
        let mut carry = self.get_flag(Flag::C);

        if self.get_flag(Flag::H) || (!self.get_flag(Flag::N) && a & 0x0F > 0x09) {
            adjust |= 0x06;
        }
        if carry || (!self.get_flag(Flag::N) && a > 0x99) {
            adjust |= 0x60;
            carry = true;
        }

        a = if self.get_flag(Flag::N) {
            a.wrapping_sub(adjust)
        } else {
            a.wrapping_add(adjust)
        };

        self.set_flag(Flag::Z, a == 0);
        self.set_flag(Flag::H, false);
        self.set_flag(Flag::C, carry);
        self.regs.a = a;
    }

    /// INC r / INC (HL). C is preserved.
    #[inline]
    pub(in crate::cpu) fn alu_inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, value & 0x0F == 0x0F);
        result
    }

    /// DEC r / DEC (HL). C is preserved.
    #[inline]
    pub(in crate::cpu) fn alu_dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.set_flag(Flag::Z, result == 0);
        self.set_flag(Flag::N, true);
        self.set_flag(Flag::H, value & 0x0F == 0);
        result
    }

    /// ADD HL,rr: carries out of bit 11 and bit 15, Z untouched.
    #[inline]
    pub(in crate::cpu) fn alu_add16_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        self.set_flag(Flag::N, false);
        self.set_flag(Flag::H, (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF);
        self.set_flag(Flag::C, hl as u32 + value as u32 > 0xFFFF);
        self.regs.set_hl(hl.wrapping_add(value));
    }

    /// `base + r8` for ADD SP,r8 and LD HL,SP+r8.
    ///
    /// Z and N are cleared; H and C come from the unsigned low-byte add.
    #[inline]
    pub(in crate::cpu) fn alu_add16_signed(&mut self, base: u16, imm8: u8) -> u16 {
        let offset = imm8 as i8 as i16 as u16;
        self.regs.f = flags(
            false,
            false,
            (base & 0x000F) + (offset & 0x000F) > 0x000F,
            (base & 0x00FF) + (offset & 0x00FF) > 0x00FF,
        );
        base.wrapping_add(offset)
    }
}
