use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use chip8_core::constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_SCALE, DISPLAY_WIDTH};
use chip8_core::{Chip8, Color, Config, Quirks};

mod keymap;
mod run;

/// Fastest clock the host loop can keep up with while still polling input every frame
const MAX_CLOCK_SPEED: i64 = 1_000_000;

/// A Chip-8 interpreter
///
/// Keys 1234/QWER/ASDF/ZXCV form the keypad, Space pauses and Escape quits.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the ROM file to run
    rom: PathBuf,

    #[arg(long, default_value_t = DISPLAY_WIDTH, help = "Display width in pixels")]
    width: usize,

    #[arg(long, default_value_t = DISPLAY_HEIGHT, help = "Display height in pixels")]
    height: usize,

    #[arg(short, long, default_value_t = DISPLAY_SCALE, help = "Window pixels per display pixel")]
    scale: u32,

    #[arg(long, default_value = "FFFF00FF", help = "Color of lit pixels as RRGGBB[AA]")]
    foreground: Color,

    #[arg(long, default_value = "00000000", help = "Color of unlit pixels as RRGGBB[AA]")]
    background: Color,

    #[arg(
        short,
        long,
        default_value_t = CLOCK_SPEED,
        value_parser = clap::value_parser!(u32).range(1..=MAX_CLOCK_SPEED),
        help = "Instructions per second"
    )]
    clock: u32,

    #[arg(long, help = "Halt on unknown opcodes instead of skipping them")]
    strict: bool,

    #[arg(long, help = "8XY6/8XYE shift VY into VX")]
    shift_uses_vy: bool,

    #[arg(long, help = "FX55/FX65 advance I past the last register")]
    load_store_increments_i: bool,

    #[arg(long, help = "BNNN jumps to XNN + VX")]
    jump_uses_vx: bool,

    #[arg(long, help = "Seed for the random number generator")]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            width: self.width,
            height: self.height,
            scale: self.scale,
            foreground: self.foreground,
            background: self.background,
            cycles_per_second: self.clock,
            strict: self.strict,
            quirks: Quirks {
                shift_uses_vy: self.shift_uses_vy,
                load_store_increments_i: self.load_store_increments_i,
                jump_uses_vx: self.jump_uses_vx,
            },
            seed: self.seed,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let mut chip8 = Chip8::new(&config)?;
    chip8
        .load_rom_file(&args.rom)
        .with_context(|| format!("failed to load {}", args.rom.display()))?;

    run::run(&mut chip8, &config)?;
    info!("exiting");
    Ok(())
}

#[cfg(test)]
mod test_args {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["chip8", "rom.ch8"]).unwrap();
        assert_eq!(args.config(), Config::default());
    }

    #[test]
    fn test_clock_is_bounded() {
        assert!(Args::try_parse_from(["chip8", "rom.ch8", "--clock", "1000000"]).is_ok());
        assert!(Args::try_parse_from(["chip8", "rom.ch8", "--clock", "2000000000"]).is_err());
        assert!(Args::try_parse_from(["chip8", "rom.ch8", "--clock", "0"]).is_err());
    }

    #[test]
    fn test_zero_width_is_rejected_by_core() {
        let args = Args::try_parse_from(["chip8", "rom.ch8", "--width", "0"]).unwrap();
        assert!(Chip8::new(&args.config()).is_err());
    }
}
