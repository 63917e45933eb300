use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::Quirks;
use crate::constants::{ADDRESS_MASK, FONT_OFFSET, GLYPH_HEIGHT};
use crate::error::Fault;
use crate::instruction::Instruction;
use crate::state::State;

/// # Executor
/// Applies the semantics of one Instruction to a State.
///
/// The program counter has already been advanced past the instruction by the time it runs,
/// so CALL saves the address of the following instruction and skips add another 2.
pub struct Executor {
    quirks: Quirks,
    rng: StdRng,
}

impl Executor {
    /// # Arguments
    /// * `quirks` which interpreter behaviors to emulate
    /// * `seed` a seed for CXNN; `None` seeds from the OS
    pub fn new(quirks: Quirks, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Executor { quirks, rng }
    }

    /// Executes a single Instruction. `Unhandled` is a no-op here; callers decide its policy.
    pub fn execute(&mut self, state: &mut State, instruction: Instruction) -> Result<(), Fault> {
        use Instruction::*;

        match instruction {
            Sys(_) | Unhandled(_) => {}
            Clear => clr(state),
            Return => rts(state)?,
            Jump(nnn) => jump(state, nnn),
            Call(nnn) => call(state, nnn)?,
            SkipEqImm { x, nn } => state.skip_if(state.v[x as usize] == nn),
            SkipNeImm { x, nn } => state.skip_if(state.v[x as usize] != nn),
            SkipEqReg { x, y } => state.skip_if(state.v[x as usize] == state.v[y as usize]),
            SkipNeReg { x, y } => state.skip_if(state.v[x as usize] != state.v[y as usize]),
            Load { x, nn } => state.v[x as usize] = nn,
            Add { x, nn } => add(state, x, nn),
            Move { x, y } => state.v[x as usize] = state.v[y as usize],
            Or { x, y } => state.v[x as usize] |= state.v[y as usize],
            And { x, y } => state.v[x as usize] &= state.v[y as usize],
            Xor { x, y } => state.v[x as usize] ^= state.v[y as usize],
            AddReg { x, y } => addr(state, x, y),
            Sub { x, y } => sub(state, x, y),
            ShiftRight { x, y } => shr(state, x, y, self.quirks),
            SubN { x, y } => subn(state, x, y),
            ShiftLeft { x, y } => shl(state, x, y, self.quirks),
            LoadIndex(nnn) => state.i = nnn & ADDRESS_MASK,
            JumpOffset { register, nnn } => jumpi(state, register, nnn),
            Random { x, nn } => state.v[x as usize] = self.rng.gen::<u8>() & nn,
            Draw { x, y, n } => draw(state, x, y, n),
            SkipPressed { x } => state.skip_if(state.keypad.is_pressed(state.v[x as usize])),
            SkipNotPressed { x } => state.skip_if(!state.keypad.is_pressed(state.v[x as usize])),
            ReadDelay { x } => state.v[x as usize] = state.timers.delay(),
            WaitKey { x } => state.register_needing_key = Some(x),
            SetDelay { x } => state.timers.set_delay(state.v[x as usize]),
            SetSound { x } => state.timers.set_sound(state.v[x as usize]),
            AddIndex { x } => addi(state, x),
            LoadGlyph { x } => ldspr(state, x),
            Bcd { x } => bcd(state, x),
            Store { x } => stor(state, x, self.quirks),
            Read { x } => read(state, x, self.quirks),
        }
        Ok(())
    }
}

/// The address the current instruction was fetched from
fn current_pc(state: &State) -> u16 {
    state.pc.wrapping_sub(0x2)
}

/// clear
pub fn clr(state: &mut State) {
    state.frame_buffer.clear();
    state.draw_flag = true;
}

/// PC = STACK.pop()
pub fn rts(state: &mut State) -> Result<(), Fault> {
    let pc = current_pc(state);
    state.pc = state.stack.pop().ok_or(Fault::StackUnderflow { pc })?;
    Ok(())
}

/// PC = addr
pub fn jump(state: &mut State, nnn: u16) {
    state.pc = nnn;
}

/// STACK.push(PC); PC = addr
pub fn call(state: &mut State, nnn: u16) -> Result<(), Fault> {
    let pc = current_pc(state);
    state
        .stack
        .push(state.pc)
        .ok_or(Fault::StackOverflow { pc })?;
    state.pc = nnn;
    Ok(())
}

/// Vx += nn
/// Add nn to Vx; allow for overflow but implicitly drop it
pub fn add(state: &mut State, x: u8, nn: u8) {
    let vx = &mut state.v[x as usize];
    *vx = vx.wrapping_add(nn);
}

/// Vx += Vy; VF = overflow
pub fn addr(state: &mut State, x: u8, y: u8) {
    let (res, over) = state.v[x as usize].overflowing_add(state.v[y as usize]);
    state.v[x as usize] = res;
    state.vf(over);
}

/// Vx -= Vy; VF = !underflow
pub fn sub(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[x as usize].overflowing_sub(state.v[y as usize]);
    state.v[x as usize] = res;
    state.vf(!under);
}

/// Vx = Vy - Vx; VF = !underflow
pub fn subn(state: &mut State, x: u8, y: u8) {
    let (res, under) = state.v[y as usize].overflowing_sub(state.v[x as usize]);
    state.v[x as usize] = res;
    state.vf(!under);
}

/// Vx >>= 1; VF = lsb
pub fn shr(state: &mut State, x: u8, y: u8, quirks: Quirks) {
    let source = if quirks.shift_uses_vy { y } else { x };
    let value = state.v[source as usize];
    state.v[x as usize] = value >> 1;
    state.vf(value & 0x1 == 0x1);
}

/// Vx <<= 1; VF = msb
pub fn shl(state: &mut State, x: u8, y: u8, quirks: Quirks) {
    let source = if quirks.shift_uses_vy { y } else { x };
    let value = state.v[source as usize];
    state.v[x as usize] = value << 1;
    state.vf(value & 0x80 == 0x80);
}

/// PC = Vr + addr
/// The register is V0, or VX once `jump_uses_vx` has been applied to the Instruction.
/// A target beyond memory is caught when the next instruction is fetched.
pub fn jumpi(state: &mut State, register: u8, nnn: u16) {
    state.pc = nnn + u16::from(state.v[register as usize]);
}

/// draw_sprite(x=Vx y=Vy size=n)
/// XORs a sprite from memory i..i+n at position x, y on the FrameBuffer.
/// The position wraps but the sprite is clipped at the edges.
/// Sets VF if any pixels were erased
pub fn draw(state: &mut State, x: u8, y: u8, n: u8) {
    let mut sprite = [0u8; 15];
    for (row, byte) in sprite.iter_mut().enumerate().take(n as usize) {
        *byte = state.memory.read(state.i.wrapping_add(row as u16));
    }

    let collision = state.frame_buffer.draw_sprite(
        state.v[x as usize] as usize,
        state.v[y as usize] as usize,
        &sprite[..n as usize],
    );
    state.vf(collision);
    state.draw_flag = true;
}

/// I += Vx
pub fn addi(state: &mut State, x: u8) {
    state.i = state.i.wrapping_add(u16::from(state.v[x as usize])) & ADDRESS_MASK;
}

/// I = address of the glyph for the low nibble of Vx
/// See constants::SPRITE_SHEET for more details
pub fn ldspr(state: &mut State, x: u8) {
    let digit = u16::from(state.v[x as usize] & 0xF);
    state.i = FONT_OFFSET + digit * GLYPH_HEIGHT;
}

/// mem[I..I+3] = bcd(Vx)
/// Store BCD repr of Vx in memory starting at address i
pub fn bcd(state: &mut State, x: u8) {
    let value = state.v[x as usize];
    let digits = [value / 100 % 10, value / 10 % 10, value % 10];
    for (offset, digit) in digits.iter().enumerate() {
        state.memory.write(state.i.wrapping_add(offset as u16), *digit);
    }
}

/// mem[I..=I+x] = V0..=Vx
pub fn stor(state: &mut State, x: u8, quirks: Quirks) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(u16::from(register));
        state.memory.write(addr, state.v[register as usize]);
    }
    if quirks.load_store_increments_i {
        state.i = state.i.wrapping_add(u16::from(x) + 1) & ADDRESS_MASK;
    }
}

/// V0..=Vx = mem[I..=I+x]
pub fn read(state: &mut State, x: u8, quirks: Quirks) {
    for register in 0..=x {
        let addr = state.i.wrapping_add(u16::from(register));
        state.v[register as usize] = state.memory.read(addr);
    }
    if quirks.load_store_increments_i {
        state.i = state.i.wrapping_add(u16::from(x) + 1) & ADDRESS_MASK;
    }
}
