use std::fmt;

use crate::config::Quirks;
use crate::opcode::{decode, Decoded};

/// # Instruction
/// One variant per opcode of the canonical Chip-8 set.
///
/// Words that match none of them become `Unhandled` so the caller decides what an unknown
/// opcode means instead of it silently falling through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    /// 0NNN: call a machine code routine (ignored)
    Sys(u16),
    /// 00E0
    Clear,
    /// 00EE
    Return,
    /// 1NNN
    Jump(u16),
    /// 2NNN
    Call(u16),
    /// 3XNN
    SkipEqImm { x: u8, nn: u8 },
    /// 4XNN
    SkipNeImm { x: u8, nn: u8 },
    /// 5XY0
    SkipEqReg { x: u8, y: u8 },
    /// 6XNN
    Load { x: u8, nn: u8 },
    /// 7XNN
    Add { x: u8, nn: u8 },
    /// 8XY0
    Move { x: u8, y: u8 },
    /// 8XY1
    Or { x: u8, y: u8 },
    /// 8XY2
    And { x: u8, y: u8 },
    /// 8XY3
    Xor { x: u8, y: u8 },
    /// 8XY4
    AddReg { x: u8, y: u8 },
    /// 8XY5
    Sub { x: u8, y: u8 },
    /// 8XY6
    ShiftRight { x: u8, y: u8 },
    /// 8XY7
    SubN { x: u8, y: u8 },
    /// 8XYE
    ShiftLeft { x: u8, y: u8 },
    /// 9XY0
    SkipNeReg { x: u8, y: u8 },
    /// ANNN
    LoadIndex(u16),
    /// BNNN: jump to NNN + V`register`; the register is V0 unless `with_quirks` picks VX
    JumpOffset { register: u8, nnn: u16 },
    /// CXNN
    Random { x: u8, nn: u8 },
    /// DXYN
    Draw { x: u8, y: u8, n: u8 },
    /// EX9E
    SkipPressed { x: u8 },
    /// EXA1
    SkipNotPressed { x: u8 },
    /// FX07
    ReadDelay { x: u8 },
    /// FX0A
    WaitKey { x: u8 },
    /// FX15
    SetDelay { x: u8 },
    /// FX18
    SetSound { x: u8 },
    /// FX1E
    AddIndex { x: u8 },
    /// FX29
    LoadGlyph { x: u8 },
    /// FX33
    Bcd { x: u8 },
    /// FX55
    Store { x: u8 },
    /// FX65
    Read { x: u8 },
    Unhandled(u16),
}

impl Instruction {
    /// Selects the Instruction for a raw opcode
    pub fn from_op(word: u16) -> Self {
        Self::from(decode(word))
    }

    /// Resolves the parts of an Instruction that depend on which interpreter is emulated
    pub fn with_quirks(self, quirks: Quirks) -> Self {
        match self {
            Instruction::JumpOffset { nnn, .. } if quirks.jump_uses_vx => Instruction::JumpOffset {
                register: (nnn >> 8) as u8,
                nnn,
            },
            other => other,
        }
    }
}

impl From<Decoded> for Instruction {
    fn from(op: Decoded) -> Self {
        use Instruction::*;

        let (x, y) = (op.x, op.y);
        match op.nibbles() {
            (0x0, 0x0, 0xE, 0x0) => Clear,
            (0x0, 0x0, 0xE, 0xE) => Return,
            (0x0, ..) => Sys(op.nnn),
            (0x1, ..) => Jump(op.nnn),
            (0x2, ..) => Call(op.nnn),
            (0x3, ..) => SkipEqImm { x, nn: op.nn },
            (0x4, ..) => SkipNeImm { x, nn: op.nn },
            (0x5, .., 0x0) => SkipEqReg { x, y },
            (0x6, ..) => Load { x, nn: op.nn },
            (0x7, ..) => Add { x, nn: op.nn },
            (0x8, .., 0x0) => Move { x, y },
            (0x8, .., 0x1) => Or { x, y },
            (0x8, .., 0x2) => And { x, y },
            (0x8, .., 0x3) => Xor { x, y },
            (0x8, .., 0x4) => AddReg { x, y },
            (0x8, .., 0x5) => Sub { x, y },
            (0x8, .., 0x6) => ShiftRight { x, y },
            (0x8, .., 0x7) => SubN { x, y },
            (0x8, .., 0xE) => ShiftLeft { x, y },
            (0x9, .., 0x0) => SkipNeReg { x, y },
            (0xA, ..) => LoadIndex(op.nnn),
            (0xB, ..) => JumpOffset {
                register: 0x0,
                nnn: op.nnn,
            },
            (0xC, ..) => Random { x, nn: op.nn },
            (0xD, ..) => Draw { x, y, n: op.n },
            (0xE, _, 0x9, 0xE) => SkipPressed { x },
            (0xE, _, 0xA, 0x1) => SkipNotPressed { x },
            (0xF, _, 0x0, 0x7) => ReadDelay { x },
            (0xF, _, 0x0, 0xA) => WaitKey { x },
            (0xF, _, 0x1, 0x5) => SetDelay { x },
            (0xF, _, 0x1, 0x8) => SetSound { x },
            (0xF, _, 0x1, 0xE) => AddIndex { x },
            (0xF, _, 0x2, 0x9) => LoadGlyph { x },
            (0xF, _, 0x3, 0x3) => Bcd { x },
            (0xF, _, 0x5, 0x5) => Store { x },
            (0xF, _, 0x6, 0x5) => Read { x },
            _ => Unhandled(op.op),
        }
    }
}

/// Assembly-style mnemonics, used when tracing
impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Instruction::*;

        match *self {
            Sys(nnn) => write!(f, "SYS {:#05X}", nnn),
            Clear => write!(f, "CLS"),
            Return => write!(f, "RET"),
            Jump(nnn) => write!(f, "JP {:#05X}", nnn),
            Call(nnn) => write!(f, "CALL {:#05X}", nnn),
            SkipEqImm { x, nn } => write!(f, "SE V{:X}, {:#04X}", x, nn),
            SkipNeImm { x, nn } => write!(f, "SNE V{:X}, {:#04X}", x, nn),
            SkipEqReg { x, y } => write!(f, "SE V{:X}, V{:X}", x, y),
            Load { x, nn } => write!(f, "LD V{:X}, {:#04X}", x, nn),
            Add { x, nn } => write!(f, "ADD V{:X}, {:#04X}", x, nn),
            Move { x, y } => write!(f, "LD V{:X}, V{:X}", x, y),
            Or { x, y } => write!(f, "OR V{:X}, V{:X}", x, y),
            And { x, y } => write!(f, "AND V{:X}, V{:X}", x, y),
            Xor { x, y } => write!(f, "XOR V{:X}, V{:X}", x, y),
            AddReg { x, y } => write!(f, "ADD V{:X}, V{:X}", x, y),
            Sub { x, y } => write!(f, "SUB V{:X}, V{:X}", x, y),
            ShiftRight { x, y } => write!(f, "SHR V{:X}, V{:X}", x, y),
            SubN { x, y } => write!(f, "SUBN V{:X}, V{:X}", x, y),
            ShiftLeft { x, y } => write!(f, "SHL V{:X}, V{:X}", x, y),
            SkipNeReg { x, y } => write!(f, "SNE V{:X}, V{:X}", x, y),
            LoadIndex(nnn) => write!(f, "LD I, {:#05X}", nnn),
            JumpOffset { register, nnn } => write!(f, "JP V{:X}, {:#05X}", register, nnn),
            Random { x, nn } => write!(f, "RND V{:X}, {:#04X}", x, nn),
            Draw { x, y, n } => write!(f, "DRW V{:X}, V{:X}, {}", x, y, n),
            SkipPressed { x } => write!(f, "SKP V{:X}", x),
            SkipNotPressed { x } => write!(f, "SKNP V{:X}", x),
            ReadDelay { x } => write!(f, "LD V{:X}, DT", x),
            WaitKey { x } => write!(f, "LD V{:X}, K", x),
            SetDelay { x } => write!(f, "LD DT, V{:X}", x),
            SetSound { x } => write!(f, "LD ST, V{:X}", x),
            AddIndex { x } => write!(f, "ADD I, V{:X}", x),
            LoadGlyph { x } => write!(f, "LD F, V{:X}", x),
            Bcd { x } => write!(f, "LD B, V{:X}", x),
            Store { x } => write!(f, "LD [I], V{:X}", x),
            Read { x } => write!(f, "LD V{:X}, [I]", x),
            Unhandled(op) => write!(f, "??? {:#06X}", op),
        }
    }
}

#[cfg(test)]
mod test_instruction {
    use super::Instruction::*;
    use super::*;

    #[test]
    fn test_decodes_control_flow() {
        assert_eq!(Instruction::from_op(0x00E0), Clear);
        assert_eq!(Instruction::from_op(0x00EE), Return);
        assert_eq!(Instruction::from_op(0x0123), Sys(0x123));
        assert_eq!(Instruction::from_op(0x1ABC), Jump(0xABC));
        assert_eq!(Instruction::from_op(0x2ABC), Call(0xABC));
        assert_eq!(
            Instruction::from_op(0xB123),
            JumpOffset {
                register: 0x0,
                nnn: 0x123
            }
        );
    }

    #[test]
    fn test_decodes_skips() {
        assert_eq!(Instruction::from_op(0x3122), SkipEqImm { x: 0x1, nn: 0x22 });
        assert_eq!(Instruction::from_op(0x4122), SkipNeImm { x: 0x1, nn: 0x22 });
        assert_eq!(Instruction::from_op(0x5120), SkipEqReg { x: 0x1, y: 0x2 });
        assert_eq!(Instruction::from_op(0x9120), SkipNeReg { x: 0x1, y: 0x2 });
        assert_eq!(Instruction::from_op(0xE19E), SkipPressed { x: 0x1 });
        assert_eq!(Instruction::from_op(0xE1A1), SkipNotPressed { x: 0x1 });
    }

    #[test]
    fn test_decodes_alu() {
        let expected = [
            (0x8120, Move { x: 0x1, y: 0x2 }),
            (0x8121, Or { x: 0x1, y: 0x2 }),
            (0x8122, And { x: 0x1, y: 0x2 }),
            (0x8123, Xor { x: 0x1, y: 0x2 }),
            (0x8124, AddReg { x: 0x1, y: 0x2 }),
            (0x8125, Sub { x: 0x1, y: 0x2 }),
            (0x8126, ShiftRight { x: 0x1, y: 0x2 }),
            (0x8127, SubN { x: 0x1, y: 0x2 }),
            (0x812E, ShiftLeft { x: 0x1, y: 0x2 }),
        ];
        for (op, instruction) in expected.iter() {
            assert_eq!(Instruction::from_op(*op), *instruction, "{:#06X}", op);
        }
    }

    #[test]
    fn test_decodes_f_family() {
        assert_eq!(Instruction::from_op(0xF307), ReadDelay { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF30A), WaitKey { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF315), SetDelay { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF318), SetSound { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF31E), AddIndex { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF329), LoadGlyph { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF333), Bcd { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF355), Store { x: 0x3 });
        assert_eq!(Instruction::from_op(0xF365), Read { x: 0x3 });
    }

    #[test]
    fn test_decodes_draw() {
        assert_eq!(
            Instruction::from_op(0xD125),
            Draw {
                x: 0x1,
                y: 0x2,
                n: 0x5
            }
        );
    }

    #[test]
    fn test_unknown_words_are_unhandled() {
        for op in [0x5121, 0x8128, 0x812F, 0x9121, 0xE100, 0xF100, 0xF1FF].iter() {
            assert_eq!(Instruction::from_op(*op), Unhandled(*op));
        }
    }

    #[test]
    fn test_display_mnemonics() {
        assert_eq!(Instruction::from_op(0xA202).to_string(), "LD I, 0x202");
        assert_eq!(Instruction::from_op(0x600A).to_string(), "LD V0, 0x0A");
        assert_eq!(Instruction::from_op(0xD015).to_string(), "DRW V0, V1, 5");
        assert_eq!(Instruction::from_op(0xB123).to_string(), "JP V0, 0x123");
    }

    #[test]
    fn test_jump_uses_vx_quirk() {
        let quirks = Quirks {
            jump_uses_vx: true,
            ..Quirks::default()
        };
        let instruction = Instruction::from_op(0xB123).with_quirks(quirks);
        assert_eq!(
            instruction,
            JumpOffset {
                register: 0x1,
                nnn: 0x123
            }
        );
        assert_eq!(instruction.to_string(), "JP V1, 0x123");
    }

    #[test]
    fn test_default_quirks_change_nothing() {
        let instruction = Instruction::from_op(0xB123);
        assert_eq!(instruction.with_quirks(Quirks::default()), instruction);
    }
}
