use crate::constants::{
    ADDRESS_MASK, ENTRY_POINT, FONT_OFFSET, MAX_ROM_SIZE, MEMORY_SIZE, SPRITE_SHEET,
};
use crate::error::LoadError;

/// # Memory
/// 4096 bytes of addressable memory.
///
/// - `0x000..0x050` holds the sprite sheet for the hex digits
/// - `0x200..` holds the loaded ROM
///
/// Data accesses through the index register are masked to 12 bits so they can never leave
/// the address space. Instruction fetches are not masked; see `word`.
#[derive(Clone)]
pub struct Memory {
    bytes: [u8; MEMORY_SIZE],
}

impl Memory {
    pub fn new() -> Self {
        let mut bytes = [0; MEMORY_SIZE];
        let font = FONT_OFFSET as usize;
        bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);
        Memory { bytes }
    }

    /// Writes the sprite sheet and then the image at `ENTRY_POINT`.
    ///
    /// The size is checked before anything is written so a rejected image leaves memory untouched.
    ///
    /// # Arguments
    /// * `image` the raw bytes of a ROM
    pub fn load(&mut self, image: &[u8]) -> Result<(), LoadError> {
        if image.len() > MAX_ROM_SIZE {
            return Err(LoadError::RomTooLarge {
                size: image.len(),
                max: MAX_ROM_SIZE,
            });
        }

        let font = FONT_OFFSET as usize;
        self.bytes[font..font + SPRITE_SHEET.len()].copy_from_slice(&SPRITE_SHEET);

        let start = ENTRY_POINT as usize;
        self.bytes[start..start + image.len()].copy_from_slice(image);
        Ok(())
    }

    /// Reads the big-endian 16-bit word at `addr`.
    /// Returns `None` if either byte lies outside of memory.
    pub fn word(&self, addr: u16) -> Option<u16> {
        let addr = addr as usize;
        let left = *self.bytes.get(addr)?;
        let right = *self.bytes.get(addr + 1)?;
        Some(u16::from(left) << 8 | u16::from(right))
    }

    pub fn read(&self, addr: u16) -> u8 {
        self.bytes[(addr & ADDRESS_MASK) as usize]
    }

    pub fn write(&mut self, addr: u16, value: u8) {
        self.bytes[(addr & ADDRESS_MASK) as usize] = value;
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}
