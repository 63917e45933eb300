pub use chip8::{Chip8, Cycle, Input, Status, Trace};
pub use config::{Color, Config, Quirks};
pub use error::{ConfigError, Fault, LoadError};
pub use frame_buffer::FrameBuffer;
pub use instruction::Instruction;

mod chip8;
pub mod config;
pub mod constants;
pub mod error;
mod frame_buffer;
mod instruction;
pub mod keypad;
pub mod memory;
pub mod opcode;
mod operations;
pub mod stack;
pub mod state;
pub mod timer;
