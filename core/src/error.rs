use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while placing a ROM image into memory.
///
/// All of these are fatal at startup; the interpreter never runs a cycle after one.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("ROM is too large ({size} bytes), max size is {max} bytes")]
    RomTooLarge { size: usize, max: usize },

    #[error("ROM not found at {}", path.display())]
    RomNotFound { path: PathBuf },

    #[error("unable to read ROM: {0}")]
    Io(#[from] io::Error),
}

/// Settings the interpreter can't run with.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("display must be at least 1x1 pixels, got {width}x{height}")]
    EmptyDisplay { width: usize, height: usize },

    #[error("display scale must be non-zero")]
    ZeroScale,

    #[error("clock speed must be non-zero")]
    ZeroClockSpeed,
}

/// Conditions raised while executing a single instruction.
///
/// `pc` is the address the offending instruction was fetched from.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    #[error("stack overflow: call at {pc:#06X} exceeds the maximum call depth")]
    StackOverflow { pc: u16 },

    #[error("stack underflow: return at {pc:#06X} with an empty call stack")]
    StackUnderflow { pc: u16 },

    #[error("program counter {pc:#06X} is outside of addressable memory")]
    PcOutOfRange { pc: u16 },

    #[error("unknown opcode {opcode:#06X} at {pc:#06X}")]
    UnknownOpcode { opcode: u16, pc: u16 },
}
