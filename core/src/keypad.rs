/// # Keypad
/// The pressed status of the 16 hex keys 0..F.
///
/// Written by whatever polls input, read by the interpreter at the start of each cycle.
/// Only the latest snapshot is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Keypad {
    keys: [bool; 16],
}

impl Keypad {
    pub fn new() -> Self {
        Keypad { keys: [false; 16] }
    }

    /// # Arguments
    /// * `key` a hex key; only the low nibble is used
    pub fn press(&mut self, key: u8) {
        self.keys[(key & 0xF) as usize] = true;
    }

    pub fn release(&mut self, key: u8) {
        self.keys[(key & 0xF) as usize] = false;
    }

    pub fn is_pressed(&self, key: u8) -> bool {
        self.keys[(key & 0xF) as usize]
    }
}
