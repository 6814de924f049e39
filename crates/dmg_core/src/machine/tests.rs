use super::*;
use crate::config::GameBoyConfig;
use crate::error::CpuError;

fn gameboy() -> GameBoy {
    let _ = env_logger::builder().is_test(true).try_init();
    GameBoy::new()
}

/// A 32 KiB image with `program` at the entry point.
fn rom_with_entry(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom[0x0134..0x0138].copy_from_slice(b"TEST");
    rom
}

// ---------------------------------------------------------------------------
// Timer
// ---------------------------------------------------------------------------

#[test]
fn div_increments_once_per_64_mcycles_and_wraps() {
    let mut io = IoRegisters::default();
    let mut timer = Timer::new();
    io.set_div(0xFE);

    timer.advance(&mut io, 63);
    assert_eq!(io.div(), 0xFE);
    timer.advance(&mut io, 1);
    assert_eq!(io.div(), 0xFF);
    assert_eq!(timer.div_cycles(), 0);

    // Carry over partial periods across calls.
    for _ in 0..16 {
        timer.advance(&mut io, 4);
    }
    assert_eq!(io.div(), 0x00);

    timer.advance(&mut io, 64 * 3 + 10);
    assert_eq!(io.div(), 0x03);
    assert_eq!(timer.div_cycles(), 10);
}

#[test]
fn tima_is_idle_while_tac_disables_it() {
    let mut io = IoRegisters::default();
    let mut timer = Timer::new();
    io.set_tac(0x01);
    timer.advance(&mut io, 1000);
    assert_eq!(io.tima(), 0);
    assert_eq!(timer.tima_cycles(), 0);
}

#[test]
fn tima_overflow_reloads_tma_and_requests_timer_interrupt_for_every_rate() {
    for (select, period) in [(0u8, 256u32), (1, 4), (2, 16), (3, 64)] {
        let mut io = IoRegisters::default();
        let mut timer = Timer::new();
        io.set_tac(0x04 | select);
        io.set_tma(0xAB);
        io.set_tima(0xFE);

        timer.advance(&mut io, period - 1);
        assert_eq!(io.tima(), 0xFE, "TAC={select}");
        timer.advance(&mut io, 1);
        assert_eq!(io.tima(), 0xFF, "TAC={select}");
        assert!(!io.requested().contains(InterruptFlags::TIMER));

        timer.advance(&mut io, period);
        assert_eq!(io.tima(), 0xAB, "TAC={select}");
        assert!(io.requested().contains(InterruptFlags::TIMER), "TAC={select}");
        assert_eq!(Timer::tima_period(select), period);
    }
}

#[test]
fn tima_handles_several_overflows_in_one_advance() {
    let mut io = IoRegisters::default();
    let mut timer = Timer::new();
    io.set_tac(0x05); // enabled, 4 M-cycles
    io.set_tma(0xFE);
    io.set_tima(0xFF);

    // 1st increment overflows to TMA=FE, then FF, then overflows again.
    timer.advance(&mut io, 4 * 3 + 2);
    assert_eq!(io.tima(), 0xFE);
    assert_eq!(timer.tima_cycles(), 2);
    assert!(io.requested().contains(InterruptFlags::TIMER));
}

#[test]
fn switching_to_a_faster_rate_keeps_tima_within_one_step() {
    let mut io = IoRegisters::default();
    let mut timer = Timer::new();
    io.set_tac(0x04); // 256 M-cycles
    timer.advance(&mut io, 255);
    assert_eq!(io.tima(), 0);

    io.set_tac(0x05); // 4 M-cycles
    timer.advance(&mut io, 1);
    assert!(io.tima() <= 1, "TIMA jumped to {}", io.tima());
    assert!(timer.tima_cycles() < 4);

    timer.advance(&mut io, 4);
    assert!(io.tima() <= 2);
    assert!(!io.requested().contains(InterruptFlags::TIMER));
}

#[test]
fn div_write_restarts_the_divider() {
    let mut io = IoRegisters::default();
    let mut timer = Timer::new();
    timer.advance(&mut io, 40);
    io.reset_div();
    timer.advance(&mut io, 63);
    assert_eq!(io.div(), 0);
    timer.advance(&mut io, 1);
    assert_eq!(io.div(), 1);
}

// ---------------------------------------------------------------------------
// Interrupts
// ---------------------------------------------------------------------------

#[test]
fn interrupt_flags_priority_and_vectors() {
    let all = InterruptFlags::all();
    assert_eq!(all.highest_priority(), Some(InterruptFlags::VBLANK));
    assert_eq!(
        (InterruptFlags::SERIAL | InterruptFlags::JOYPAD).highest_priority(),
        Some(InterruptFlags::SERIAL)
    );
    assert_eq!(InterruptFlags::empty().highest_priority(), None);
    assert_eq!(InterruptFlags::VBLANK.vector(), 0x0040);
    assert_eq!(InterruptFlags::LCD_STAT.vector(), 0x0048);
    assert_eq!(InterruptFlags::TIMER.vector(), 0x0050);
    assert_eq!(InterruptFlags::SERIAL.vector(), 0x0058);
    assert_eq!(InterruptFlags::JOYPAD.vector(), 0x0060);
}

#[test]
fn interrupts_are_serviced_in_priority_order() {
    let mut gb = gameboy();
    // Every vector holds RETI so IME comes straight back on.
    for vector in [0x40u16, 0x48, 0x50, 0x58, 0x60] {
        gb.set_value(vector, 0xD9);
    }
    // EI ; then NOPs at the entry point.
    gb.set_value(0x0100, 0xFB);
    gb.set_value(IE_ADDR, 0x1F);
    gb.set_value(IF_ADDR, 0x1F);

    gb.step().unwrap(); // EI
    gb.step().unwrap(); // NOP, IME rises afterwards

    let expected_if = [0x1E, 0x1C, 0x18, 0x10, 0x00];
    for (i, vector) in [0x40u16, 0x48, 0x50, 0x58, 0x60].into_iter().enumerate() {
        assert_eq!(gb.step().unwrap(), 5);
        assert_eq!(gb.cpu().regs.pc, vector);
        assert!(!gb.cpu().ime());
        assert_eq!(gb.read_value(IF_ADDR) & 0x1F, expected_if[i]);
        // RETI back to the NOP stream.
        assert_eq!(gb.step().unwrap(), 4);
        assert!(gb.cpu().ime());
    }
}

#[test]
fn interrupt_upper_if_bits_are_stored_but_ignored() {
    let mut gb = gameboy();
    gb.set_value(IF_ADDR, 0xE0);
    gb.set_value(IE_ADDR, 0xFF);
    assert_eq!(gb.read_value(IF_ADDR), 0xE0);
    assert!(gb.cpu().pending_interrupts().is_empty());
}

#[test]
fn timer_overflow_interrupt_reaches_the_cpu() {
    // EI ; JR -2
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0xFB, 0x18, 0xFE]));
    gb.set_value(IE_ADDR, InterruptFlags::TIMER.bits());
    gb.set_value(IF_ADDR, 0xE0);
    gb.set_value(0xFF05, 0xFF); // TIMA
    gb.set_value(0xFF07, 0x05); // enabled, 4 M-cycles

    let mut reached = false;
    for _ in 0..10 {
        gb.step().unwrap();
        if gb.cpu().regs.pc == 0x0050 {
            reached = true;
            break;
        }
    }
    assert!(reached, "timer interrupt never dispatched");
}

// ---------------------------------------------------------------------------
// Stepper, bus and reset
// ---------------------------------------------------------------------------

#[test]
fn small_program_loops_back_to_entry() {
    // LD A,5 ; INC A ; JP 0x0100
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0x3E, 0x05, 0x3C, 0xC3, 0x00, 0x01]));

    assert_eq!(gb.step().unwrap(), 2);
    assert_eq!(gb.step().unwrap(), 1);
    assert_eq!(gb.step().unwrap(), 4);

    let cpu = gb.cpu();
    assert_eq!(cpu.regs.a, 0x06);
    assert!(!cpu.get_flag(crate::cpu::Flag::Z));
    assert_eq!(cpu.regs.pc, 0x0100);
    assert_eq!(gb.total_cycles(), 7);
}

#[test]
fn stepping_feeds_the_timer() {
    // JR -2 forever: 3 M-cycles per step.
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0x18, 0xFE]));
    let div = gb.read_value(DIV_ADDR);
    for _ in 0..64 {
        gb.step().unwrap();
    }
    // 192 M-cycles is exactly three DIV periods.
    assert_eq!(gb.read_value(DIV_ADDR), div.wrapping_add(3));
    assert_eq!(gb.timer().div_cycles(), 0);
}

#[test]
fn timer_is_frozen_during_stop() {
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0x10, 0x00, 0x00]));
    let div = gb.read_value(DIV_ADDR);

    // The STOP opcode's own cycle runs before the low-power state.
    assert_eq!(gb.step().unwrap(), 1);
    assert!(gb.cpu().stopped());
    assert_eq!(gb.timer().div_cycles(), 1);

    for _ in 0..200 {
        gb.step().unwrap();
    }
    assert!(gb.cpu().stopped());
    assert_eq!(gb.read_value(DIV_ADDR), div);
    assert_eq!(gb.timer().div_cycles(), 1);

    // Joypad wakes it; the NOP after the padding byte is counted.
    let if_value = gb.read_value(IF_ADDR);
    gb.set_value(IF_ADDR, if_value | InterruptFlags::JOYPAD.bits());
    assert_eq!(gb.step().unwrap(), 1);
    assert!(!gb.cpu().stopped());
    assert_eq!(gb.cpu().regs.pc, 0x0103);
    assert_eq!(gb.timer().div_cycles(), 2);
}

#[test]
fn echo_ram_mirrors_work_ram_both_ways() {
    let mut bus = MemoryBus::default();
    bus.write_byte(0xC010, 0x12);
    assert_eq!(bus.read_byte(0xE010), 0x12);
    bus.write_byte(0xE010, 0x34);
    assert_eq!(bus.read_byte(0xC010), 0x34);

    bus.write_byte(0xFDFF, 0x56);
    assert_eq!(bus.read_byte(0xDDFF), 0x56);
    assert!(bus.region_bytes(Region::EchoRam).is_empty());
}

#[test]
fn region_sizes() {
    let bus = MemoryBus::default();
    let sizes: Vec<usize> = Region::ALL
        .iter()
        .map(|&region| bus.region_bytes(region).len())
        .collect();
    assert_eq!(
        sizes,
        vec![0x4000, 0x4000, 0x2000, 0x2000, 0x1000, 0x1000, 0, 0xA0, 0x60, 0x80, 0x7F, 1]
    );
}

#[test]
fn power_on_io_values() {
    let bus = MemoryBus::default();
    assert_eq!(bus.read_byte(0xFF00), 0xCF);
    assert_eq!(bus.read_byte(SC_ADDR), 0x7E);
    assert_eq!(bus.read_byte(DIV_ADDR), 0xAB);
    assert_eq!(bus.read_byte(IF_ADDR), 0xE1);
    assert_eq!(bus.read_byte(0xFF26), 0xF1);
    assert_eq!(bus.read_byte(0xFF40), 0x91);
    assert_eq!(bus.read_byte(0xFF47), 0xFC);
    assert_eq!(bus.read_byte(IE_ADDR), 0x00);
}

#[test]
fn load_rom_fills_the_fixed_window_only() {
    let mut gb = gameboy();
    let mut rom = vec![0u8; 0x9000];
    rom[0x0000] = 0x11;
    rom[0x7FFF] = 0x22;
    rom[0x8000] = 0x33;
    gb.load_rom(&rom);
    assert_eq!(gb.read_value(0x0000), 0x11);
    assert_eq!(gb.read_value(0x7FFF), 0x22);
    assert_eq!(gb.read_value(0x8000), 0x00);
}

#[test]
fn reset_restores_boot_state_and_reinserts_rom() {
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0x3E, 0x05, 0x3C]));
    gb.set_value(0xC000, 0x99);
    gb.step().unwrap();
    gb.step().unwrap();

    gb.reset();
    assert_eq!(gb.cpu().regs, crate::cpu::Registers::dmg_boot());
    assert_eq!(gb.total_cycles(), 0);
    assert_eq!(gb.read_value(0xC000), 0x00);
    assert_eq!(gb.read_value(0x0100), 0x3E);
    assert_eq!(gb.read_value(DIV_ADDR), 0xAB);
}

#[test]
fn fault_propagates_through_the_stepper() {
    let mut gb = gameboy();
    gb.load_rom(&rom_with_entry(&[0x00, 0xFD]));
    gb.step().unwrap();
    let err = gb.step().unwrap_err();
    assert_eq!(
        err,
        CpuError::UndefinedOpcode {
            pc: 0x0101,
            opcode: 0xFD
        }
    );
    assert_eq!(gb.step().unwrap_err(), err);
    assert_eq!(gb.total_cycles(), 1);
    assert_eq!(err.to_string(), "undefined opcode 0xFD at PC=0x0101");
}

#[test]
fn config_switches_reach_the_cpu() {
    let config = GameBoyConfig::builder()
        .trace_instructions(true)
        .log_interrupts(true)
        .build();
    let mut gb = GameBoy::with_config(config);
    gb.load_rom(&rom_with_entry(&[0x00]));
    assert!(gb.config().log_interrupts);
    assert_eq!(gb.step().unwrap(), 1);
}
