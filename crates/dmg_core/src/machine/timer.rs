use super::io::{InterruptFlags, IoRegisters};

/// M-cycles per DIV increment (16384 Hz).
pub const DIV_PERIOD: u32 = 64;

/// Timer / divider unit.
///
/// Time is fed in whole M-cycles after every CPU step. Each counter keeps a
/// sub-period accumulator so no cycles are lost or counted twice across
/// calls; both accumulators are always reduced below their period.
#[derive(Clone, Debug, Default)]
pub struct Timer {
    div_cycles: u32,
    tima_cycles: u32,
}

impl Timer {
    pub fn new() -> Self {
        Self::default()
    }

    /// M-cycles per TIMA increment for the clock select in TAC[1:0].
    ///
    /// - 00 → 256 (4096 Hz)
    /// - 01 → 4 (262144 Hz)
    /// - 10 → 16 (65536 Hz)
    /// - 11 → 64 (16384 Hz)
    #[inline]
    pub const fn tima_period(tac: u8) -> u32 {
        match tac & 0x03 {
            0x00 => 256,
            0x01 => 4,
            0x02 => 16,
            _ => 64,
        }
    }

    /// Advance DIV and, when TAC enables it, TIMA by `m_cycles`.
    pub fn advance(&mut self, io: &mut IoRegisters, m_cycles: u32) {
        self.advance_div(io, m_cycles);
        self.advance_tima(io, m_cycles);
    }

    fn advance_div(&mut self, io: &mut IoRegisters, m_cycles: u32) {
        if io.take_div_reset() {
            self.div_cycles = 0;
        }

        let total = self.div_cycles + m_cycles;
        let increments = total / DIV_PERIOD;
        self.div_cycles = total % DIV_PERIOD;

        if increments > 0 {
            io.set_div(io.div().wrapping_add(increments as u8));
        }
    }

    fn advance_tima(&mut self, io: &mut IoRegisters, m_cycles: u32) {
        let tac = io.tac();
        if tac & 0x04 == 0 {
            return;
        }

        let period = Self::tima_period(tac);
        // The leftover may come from a slower clock select.
        let total = self.tima_cycles % period + m_cycles;
        let increments = total / period;
        self.tima_cycles = total % period;

        for _ in 0..increments {
            let (next, overflow) = io.tima().overflowing_add(1);
            if overflow {
                io.set_tima(io.tma());
                io.request(InterruptFlags::TIMER);
            } else {
                io.set_tima(next);
            }
        }
    }

    /// Cycles accumulated toward the next DIV increment.
    pub fn div_cycles(&self) -> u32 {
        self.div_cycles
    }

    /// Cycles accumulated toward the next TIMA increment.
    pub fn tima_cycles(&self) -> u32 {
        self.tima_cycles
    }
}
