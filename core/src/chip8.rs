use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;

use log::{debug, error, info, trace, warn};

use crate::config::{Config, Quirks};
use crate::constants::TIMER_SPEED;
use crate::error::{ConfigError, Fault, LoadError};
use crate::frame_buffer::FrameBuffer;
use crate::instruction::Instruction;
use crate::operations::Executor;
use crate::state::State;
use crate::timer::Clock;

/// Where the emulation loop is in its lifecycle. `Quit` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Running,
    Paused,
    Quit,
}

/// Discrete events delivered by the host between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Quit,
    TogglePause,
    KeyDown(u8),
    KeyUp(u8),
}

/// The outcome of a single call to `advance_cpu`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cycle {
    Executed(Instruction),
    /// An opcode outside of the instruction set was skipped
    Unhandled(u16),
    /// FX0A is blocking until a key is pressed
    Waiting,
    /// Nothing ran because the machine is paused or has quit
    Idle,
}

/// Handed to the tracer once per decoded instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trace {
    /// The address the instruction was fetched from
    pub pc: u16,
    pub opcode: u16,
    pub instruction: Instruction,
}

impl fmt::Display for Trace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X} {:04X} {}", self.pc, self.opcode, self.instruction)
    }
}

/// # Chip-8
/// Chip-8 is a virtual machine and corresponding interpreted language.
///
/// Tracks:
///  - current `state`
///  - the `status` of the emulation loop
///  - separate clocks for instruction cycles and the 60Hz timers
///
/// Supplies interfaces for:
/// - loading roms
/// - handling input events
/// - advancing the CPU and its timers, either one step at a time or for a span of real time
/// - inspecting its frame buffer for rendering by some display
/// - observing every decoded instruction through a tracer
pub struct Chip8 {
    state: State,
    executor: Executor,
    status: Status,
    strict: bool,
    quirks: Quirks,
    cpu_clock: Clock,
    timer_clock: Clock,
    tracer: Option<Box<dyn FnMut(&Trace)>>,
}

impl Chip8 {
    /// Fails if `config` describes an empty display or a stopped clock
    pub fn new(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Chip8 {
            state: State::new(config.width, config.height),
            executor: Executor::new(config.quirks, config.seed),
            status: Status::Running,
            strict: config.strict,
            quirks: config.quirks,
            cpu_clock: Clock::new(config.cycles_per_second),
            timer_clock: Clock::new(TIMER_SPEED),
            tracer: None,
        })
    }

    /// Load a rom from memory
    ///
    /// # Arguments
    /// * `rom` the raw bytes of a ROM
    pub fn load_rom(&mut self, rom: &[u8]) -> Result<(), LoadError> {
        self.state.memory.load(rom)?;
        info!("loaded ROM ({} bytes)", rom.len());
        Ok(())
    }

    /// Load a rom from a source file
    ///
    /// # Arguments
    /// * `path` the location of a file that contains a ROM
    pub fn load_rom_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let path = path.as_ref();
        let rom = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::RomNotFound {
                path: path.to_path_buf(),
            },
            _ => LoadError::Io(e),
        })?;
        self.load_rom(&rom)
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Applies a single input event
    /// - `Quit` is honored from any status and is final
    /// - `TogglePause` flips between running and paused
    /// - key events update the keypad; a key down also satisfies a pending FX0A
    pub fn handle_input(&mut self, input: Input) {
        match (input, self.status) {
            (_, Status::Quit) => {}
            (Input::Quit, _) => {
                info!("quit");
                self.status = Status::Quit;
            }
            (Input::TogglePause, Status::Running) => {
                info!("paused");
                self.status = Status::Paused;
            }
            (Input::TogglePause, Status::Paused) => {
                info!("resumed");
                self.cpu_clock.reset();
                self.timer_clock.reset();
                self.status = Status::Running;
            }
            (Input::KeyDown(key), status) => {
                let key = key & 0xF;
                self.state.keypad.press(key);
                if status == Status::Running {
                    if let Some(register) = self.state.register_needing_key.take() {
                        self.state.v[register as usize] = key;
                    }
                }
            }
            (Input::KeyUp(key), _) => self.state.keypad.release(key & 0xF),
        }
    }

    /// Installs an observer that is called with every decoded instruction
    pub fn set_tracer(&mut self, tracer: Box<dyn FnMut(&Trace)>) {
        self.tracer = Some(tracer);
    }

    pub fn clear_tracer(&mut self) {
        self.tracer = None;
    }

    /// Advances the CPU by a single cycle
    /// - idles unless running
    /// - breaks if awaiting a keypress
    /// - gets and executes the next opcode
    ///
    /// Any fault is fatal: the machine moves to `Quit` before the fault is returned.
    pub fn advance_cpu(&mut self) -> Result<Cycle, Fault> {
        if self.status != Status::Running {
            return Ok(Cycle::Idle);
        }
        if self.state.register_needing_key.is_some() {
            return Ok(Cycle::Waiting);
        }

        let pc = self.state.pc;
        let op = match self.state.memory.word(pc) {
            Some(op) => op,
            None => return Err(self.halt(Fault::PcOutOfRange { pc })),
        };
        self.state.pc = pc.wrapping_add(0x2);

        let instruction = Instruction::from_op(op).with_quirks(self.quirks);
        let record = Trace {
            pc,
            opcode: op,
            instruction,
        };
        trace!("{}", record);
        if let Some(tracer) = self.tracer.as_mut() {
            tracer(&record);
        }

        match instruction {
            Instruction::Unhandled(opcode) if self.strict => {
                Err(self.halt(Fault::UnknownOpcode { opcode, pc }))
            }
            Instruction::Unhandled(opcode) => {
                warn!("skipping unknown opcode {:04X} at {:04X}", opcode, pc);
                Ok(Cycle::Unhandled(opcode))
            }
            _ => {
                if let Instruction::Sys(addr) = instruction {
                    debug!("ignoring SYS {:03X} at {:04X}", addr, pc);
                }
                match self.executor.execute(&mut self.state, instruction) {
                    Ok(()) => Ok(Cycle::Executed(instruction)),
                    Err(fault) => Err(self.halt(fault)),
                }
            }
        }
    }

    /// Decrements both timers once, unless paused or quit
    pub fn advance_timers(&mut self) {
        if self.status == Status::Running {
            self.state.timers.tick();
        }
    }

    /// Runs everything that falls due over `elapsed` of real time.
    ///
    /// Instruction cycles and timer ticks are interleaved evenly across the span, so the
    /// timers an instruction sees match when it would have run. No time accrues unless running.
    /// Returns how many cycles were run.
    pub fn run_for(&mut self, elapsed: Duration) -> Result<u32, Fault> {
        if self.status != Status::Running {
            return Ok(0);
        }

        let cycles = self.cpu_clock.advance(elapsed);
        let ticks = self.timer_clock.advance(elapsed);

        let mut ticked = 0;
        for cycle in 1..=cycles {
            self.advance_cpu()?;
            let due = (u64::from(ticks) * u64::from(cycle) / u64::from(cycles)) as u32;
            while ticked < due {
                self.advance_timers();
                ticked += 1;
            }
            if self.status != Status::Running {
                return Ok(cycle);
            }
        }
        while ticked < ticks {
            self.advance_timers();
            ticked += 1;
        }

        Ok(cycles)
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.state.frame_buffer
    }

    /// Returns the FrameBuffer if the display should be redrawn, unsetting the draw flag
    pub fn take_frame(&mut self) -> Option<&FrameBuffer> {
        if self.state.draw_flag {
            self.state.draw_flag = false;
            Some(&self.state.frame_buffer)
        } else {
            None
        }
    }

    /// Whether a tone should be playing
    pub fn sound_active(&self) -> bool {
        self.state.timers.sound() > 0
    }

    fn halt(&mut self, fault: Fault) -> Fault {
        error!("{}", fault);
        self.status = Status::Quit;
        fault
    }
}
