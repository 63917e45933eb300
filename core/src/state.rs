use crate::constants::ENTRY_POINT;
use crate::frame_buffer::FrameBuffer;
use crate::keypad::Keypad;
use crate::memory::Memory;
use crate::stack::Stack;
use crate::timer::Timers;

/// A snapshot of the Chip8 internal state
///
/// ## CPU
/// Registers
/// - (v) 16 primary 8-bit registers (V0..VF)
///     - the first 15 (V0..VE) are general purpose registers
///     - the 16th (VF) is the carry, borrow and collision flag
/// - (i) a 16-bit memory address register, kept within 12 bits
///
/// Counter
/// - (pc) a 16-bit program counter, starting at 0x200
///
/// Stack
/// - up to 12 return addresses for nested subroutine calls
///
/// Timers
/// - 2 8-bit timers (delay & sound), decremented at 60Hz
///
/// ## Memory
/// - 4096 bytes of addressable memory
/// - a frame buffer holding the contents of the next frame to be drawn
///
/// ## Input
/// - the pressed status of keys 0..F
/// - Emulation halts while FX0A waits for a key to be written to `register_needing_key`
#[derive(Clone)]
pub struct State {
    pub v: [u8; 16],
    pub i: u16,
    pub pc: u16,
    pub stack: Stack,
    pub timers: Timers,
    pub keypad: Keypad,
    pub memory: Memory,
    pub frame_buffer: FrameBuffer,
    pub draw_flag: bool,
    pub register_needing_key: Option<u8>,
}

impl State {
    /// # Arguments
    /// * `width` `height` the size of the frame buffer in pixels
    pub fn new(width: usize, height: usize) -> Self {
        State {
            v: [0; 16],
            i: 0,
            pc: ENTRY_POINT,
            stack: Stack::new(),
            timers: Timers::new(),
            keypad: Keypad::new(),
            memory: Memory::new(),
            frame_buffer: FrameBuffer::new(width, height),
            draw_flag: false,
            register_needing_key: None,
        }
    }

    pub fn vf(&mut self, flag: bool) {
        self.v[0xF] = flag as u8;
    }

    /// if condition then pc += 2
    pub fn skip_if(&mut self, condition: bool) {
        if condition {
            self.pc = self.pc.wrapping_add(0x2);
        }
    }
}

#[cfg(test)]
mod test_state {
    use super::*;

    #[test]
    fn test_state_new() {
        let state = State::new(64, 32);
        assert_eq!(state.pc, 0x200);
        assert_eq!(state.i, 0x0);
        assert_eq!(state.v, [0; 16]);
        assert!(state.stack.is_empty());
        assert_eq!(state.timers.current(), (0, 0));
        assert!(state.frame_buffer.is_blank());
        assert_eq!(state.register_needing_key, None);
    }

    #[test]
    fn test_vf() {
        let mut state = State::new(64, 32);
        state.vf(true);
        assert_eq!(state.v[0xF], 0x1);
        state.vf(false);
        assert_eq!(state.v[0xF], 0x0);
    }
}
