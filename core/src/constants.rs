/// Bytes of addressable memory
pub const MEMORY_SIZE: usize = 4096;

/// Mask applied to the index register and data addresses (12 bits)
pub const ADDRESS_MASK: u16 = 0x0FFF;

/// Address where ROMs are loaded and where the program counter starts
pub const ENTRY_POINT: u16 = 0x200;

/// Largest ROM that fits between the entry point and the end of memory
pub const MAX_ROM_SIZE: usize = MEMORY_SIZE - ENTRY_POINT as usize;

/// Address of the first font glyph
pub const FONT_OFFSET: u16 = 0x000;

/// Each font glyph is 5 rows tall
pub const GLYPH_HEIGHT: u16 = 5;

/// Maximum number of nested subroutine calls
pub const STACK_DEPTH: usize = 12;

pub const DISPLAY_WIDTH: usize = 64;
pub const DISPLAY_HEIGHT: usize = 32;

/// Default window scale factor
pub const DISPLAY_SCALE: u32 = 20;

/// Default instruction throughput
pub const CLOCK_SPEED: u32 = 700;

/// Delay and sound timers decrement at this rate regardless of clock speed
pub const TIMER_SPEED: u32 = 60;

/// # Sprite Sheet
/// Built-in glyphs for the hex digits 0..F, loaded at `FONT_OFFSET`.
///
/// Every glyph is 4 pixels wide and 5 rows tall; only the high nibble of each byte is used.
/// ```text
/// 0xF0  ****
/// 0x90  *  *
/// 0x90  *  *
/// 0x90  *  *
/// 0xF0  ****
/// ```
pub const SPRITE_SHEET: [u8; 80] = [
    0xF0, 0x90, 0x90, 0x90, 0xF0, // 0
    0x20, 0x60, 0x20, 0x20, 0x70, // 1
    0xF0, 0x10, 0xF0, 0x80, 0xF0, // 2
    0xF0, 0x10, 0xF0, 0x10, 0xF0, // 3
    0x90, 0x90, 0xF0, 0x10, 0x10, // 4
    0xF0, 0x80, 0xF0, 0x10, 0xF0, // 5
    0xF0, 0x80, 0xF0, 0x90, 0xF0, // 6
    0xF0, 0x10, 0x20, 0x40, 0x40, // 7
    0xF0, 0x90, 0xF0, 0x90, 0xF0, // 8
    0xF0, 0x90, 0xF0, 0x10, 0xF0, // 9
    0xF0, 0x90, 0xF0, 0x90, 0x90, // A
    0xE0, 0x90, 0xE0, 0x90, 0xE0, // B
    0xF0, 0x80, 0x80, 0x80, 0xF0, // C
    0xE0, 0x90, 0x90, 0x90, 0xE0, // D
    0xF0, 0x80, 0xF0, 0x80, 0xF0, // E
    0xF0, 0x80, 0xF0, 0x80, 0x80, // F
];
