use std::time::{Duration, Instant};

use anyhow::Error;
use log::debug;
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use chip8_core::constants::TIMER_SPEED;
use chip8_core::{Chip8, Config, Input, Status};
use display::Display;

use crate::keymap::keymap;

/// Drives a loaded Chip8 until it quits.
///
/// Each frame polls input, runs whatever cycles and timer ticks fell due since the last frame,
/// redraws if anything was drawn and then sleeps off the rest of the frame.
pub fn run(chip8: &mut Chip8, config: &Config) -> anyhow::Result<()> {
    // Get SDL2 context
    let sdl: sdl2::Sdl = sdl2::init().map_err(Error::msg)?;
    let mut display: Display = Display::new(&sdl, config).map_err(Error::msg)?;
    let mut events = sdl.event_pump().map_err(Error::msg)?;

    // Set initial timing
    let frame_time: Duration = Duration::from_secs(1) / TIMER_SPEED;
    let mut last_frame: Instant = Instant::now();
    let mut beeping = false;

    while chip8.status() != Status::Quit {
        // Handle input
        for event in events.poll_iter() {
            if let Some(input) = to_input(&event) {
                chip8.handle_input(input);
            }
        }

        // Update state
        let now = Instant::now();
        chip8.run_for(now - last_frame)?;
        last_frame = now;

        // If the draw flag is set, unset it and render the current frame
        if let Some(frame) = chip8.take_frame() {
            display.render(frame).map_err(Error::msg)?;
        }

        if chip8.sound_active() != beeping {
            beeping = !beeping;
            debug!("sound {}", if beeping { "on" } else { "off" });
        }

        // Handle timing
        let elapsed = now.elapsed();
        if frame_time > elapsed {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    Ok(())
}

/// Maps an SDL event to the input it stands for, if any
fn to_input(event: &Event) -> Option<Input> {
    match event {
        Event::Quit { .. } => Some(Input::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Escape),
            ..
        } => Some(Input::Quit),
        Event::KeyDown {
            keycode: Some(Keycode::Space),
            repeat: false,
            ..
        } => Some(Input::TogglePause),
        Event::KeyDown {
            keycode: Some(key), ..
        } => keymap(*key).map(Input::KeyDown),
        Event::KeyUp {
            keycode: Some(key), ..
        } => keymap(*key).map(Input::KeyUp),
        _ => None,
    }
}
