/// # Decoded
/// Every addressing field of one fetched 16-bit opcode.
///
/// Which fields matter depends on the instruction:
/// - `nnn` the low 12 bits, an address
/// - `nn` the low byte, an immediate compared with or assigned to Vx
/// - `n` the low nibble, a sprite height or a sub-operation selector
/// - `x` `y` the second and third nibbles, register indices
///
/// Lives for exactly one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub op: u16,
    pub nnn: u16,
    pub nn: u8,
    pub n: u8,
    pub x: u8,
    pub y: u8,
}

impl Decoded {
    /// The opcode's four nibbles, most significant first; what instruction selection matches on
    pub fn nibbles(&self) -> (u8, u8, u8, u8) {
        ((self.op >> 12) as u8, self.x, self.y, self.n)
    }
}

/// Splits a 16-bit word into its fields. Total: every word decodes.
pub fn decode(word: u16) -> Decoded {
    Decoded {
        op: word,
        nnn: word & 0x0FFF,
        nn: (word & 0x00FF) as u8,
        n: (word & 0x000F) as u8,
        x: ((word & 0x0F00) >> 8) as u8,
        y: ((word & 0x00F0) >> 4) as u8,
    }
}
