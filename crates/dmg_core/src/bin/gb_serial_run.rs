//! Run a test ROM headless and echo what it prints over the serial port.
//!
//! Blargg-style test ROMs report by "transmitting" each character: they put
//! it in SB and write 0x81 to SC. There is no link partner, so we pick the
//! byte up, print it and clear SC as if the transfer had completed.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use dmg_core::machine::{SB_ADDR, SC_ADDR};
use dmg_core::{GameBoy, GameBoyConfig, CLOCK_HZ, MCYCLES_PER_FRAME, TCYCLES_PER_MCYCLE};

/// Enough frames (a little under three minutes) for the combined cpu_instrs ROM.
const DEFAULT_MAX_FRAMES: u64 = 10_000;
const USAGE: &str = "Usage: gb_serial_run <rom_path> [max_mcycles]";

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Passed,
    Failed,
    OutOfBudget,
}

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path: PathBuf = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    };
    let max_mcycles: u64 = match args.next() {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid max_mcycles '{raw}'; expected an integer"))?,
        None => DEFAULT_MAX_FRAMES * MCYCLES_PER_FRAME as u64,
    };

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{}'", rom_path.display()))?;

    let trace = std::env::var_os("GB_TRACE").is_some();
    let config = GameBoyConfig::builder().trace_instructions(trace).build();
    let mut gb = GameBoy::with_config(config);
    gb.load_rom(&rom);

    let mut output = Vec::new();
    let outcome = run(&mut gb, max_mcycles, &mut output)?;
    println!();

    match outcome {
        Outcome::Passed => Ok(()),
        Outcome::Failed => bail!("test ROM reported failure"),
        Outcome::OutOfBudget => bail!(
            "no verdict after {} M-cycles ({:.1}s emulated, {} serial bytes seen)",
            gb.total_cycles(),
            emulated_seconds(gb.total_cycles()),
            output.len()
        ),
    }
}

fn emulated_seconds(mcycles: u64) -> f64 {
    (mcycles * TCYCLES_PER_MCYCLE as u64) as f64 / CLOCK_HZ as f64
}

fn run(gb: &mut GameBoy, max_mcycles: u64, output: &mut Vec<u8>) -> Result<Outcome> {
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    while gb.total_cycles() < max_mcycles {
        gb.step().with_context(|| {
            format!("CPU fault after {} M-cycles", gb.total_cycles())
        })?;

        if gb.read_value(SC_ADDR) == 0x81 {
            let byte = gb.read_value(SB_ADDR);
            gb.set_value(SC_ADDR, 0x00);
            output.push(byte);
            stdout.write_all(&[byte])?;
            stdout.flush()?;

            if output.ends_with(b"Passed") {
                return Ok(Outcome::Passed);
            }
            if output.ends_with(b"Failed") {
                return Ok(Outcome::Failed);
            }
        }
    }

    Ok(Outcome::OutOfBudget)
}
