use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::constants::{CLOCK_SPEED, DISPLAY_HEIGHT, DISPLAY_SCALE, DISPLAY_WIDTH};
use crate::error::ConfigError;

/// # Config
/// Everything the interpreter and its collaborators can be tuned with.
///
/// Only `width`, `height`, `cycles_per_second`, `strict`, `quirks` and `seed` affect emulation.
/// The scale and colors are carried along for whatever renders the FrameBuffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub width: usize,
    pub height: usize,
    pub scale: u32,
    pub foreground: Color,
    pub background: Color,
    pub cycles_per_second: u32,
    /// Halt on opcodes outside of the instruction set instead of skipping them
    pub strict: bool,
    pub quirks: Quirks,
    /// Seed for CXNN; `None` draws one from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            scale: DISPLAY_SCALE,
            foreground: Color(0xFFFF_00FF),
            background: Color(0x0000_0000),
            cycles_per_second: CLOCK_SPEED,
            strict: false,
            quirks: Quirks::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Rejects values that would leave nothing to draw on or nothing to run
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::EmptyDisplay {
                width: self.width,
                height: self.height,
            });
        }
        if self.scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        if self.cycles_per_second == 0 {
            return Err(ConfigError::ZeroClockSpeed);
        }
        Ok(())
    }
}

/// # Quirks
/// Behaviors that differ between the original COSMAC VIP interpreter and later ones.
///
/// Everything defaults to the later behavior that most ROMs expect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE shift Vy into Vx rather than shifting Vx in place
    pub shift_uses_vy: bool,
    /// FX55/FX65 leave I pointing past the last register transferred
    pub load_store_increments_i: bool,
    /// BNNN jumps to XNN + Vx instead of NNN + V0
    pub jump_uses_vx: bool,
}

/// An RGBA color packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn a(self) -> u8 {
        self.0 as u8
    }
}

/// Parses `RRGGBBAA` or `RRGGBB` hex, optionally prefixed by `#` or `0x`.
/// A six digit color is treated as fully opaque.
impl FromStr for Color {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .trim()
            .trim_start_matches('#')
            .trim_start_matches("0x")
            .trim_start_matches("0X");
        let value = u32::from_str_radix(digits, 16)?;
        if digits.len() <= 6 {
            Ok(Color(value << 8 | 0xFF))
        } else {
            Ok(Color(value))
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08X}", self.0)
    }
}
