use std::convert::TryFrom;

use sdl2::pixels::PixelFormatEnum;

use chip8_core::{Color, Config, FrameBuffer};

/// # Display
/// The Chip-8 display is composed of monochrome pixels, 64x32 by default.
/// Lit pixels are drawn in the foreground color and unlit ones in the background color,
/// each scaled up to a `scale`x`scale` square on screen.
/// The display only gets a call to `render` when the Chip-8 FrameBuffer is updated.
pub struct Display {
    canvas: sdl2::render::WindowCanvas,
    foreground: Color,
    background: Color,
}

impl Display {
    /// Creates a new display object bound to an sdl2 context.
    ///
    /// # Arguments
    /// * `sdl` an sdl2 context with which to draw
    /// * `config` supplies the size of the display in pixels, the size multiplier for each
    ///   pixel and the colors to draw with
    pub fn new(sdl: &sdl2::Sdl, config: &Config) -> Result<Self, String> {
        let (width, height) = Display::window_size(config)?;
        let video_subsystem = sdl.video()?;
        let window = video_subsystem
            .window("Chip-8", width, height)
            .position_centered()
            .opengl()
            .build()
            .map_err(|e| e.to_string())?;
        let canvas = window
            .into_canvas()
            .build()
            .map_err(|e| e.to_string())?;

        Ok(Display {
            canvas,
            foreground: config.foreground,
            background: config.background,
        })
    }

    /// The window's size in screen pixels: the display size times the scale.
    /// Fails if either side doesn't fit in a u32.
    fn window_size(config: &Config) -> Result<(u32, u32), String> {
        let scaled = |pixels: usize| {
            u32::try_from(pixels)
                .ok()
                .and_then(|pixels| pixels.checked_mul(config.scale))
        };
        match (scaled(config.width), scaled(config.height)) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(format!(
                "window size {}x{} at scale {} is too large",
                config.width, config.height, config.scale
            )),
        }
    }

    /// Formats a Chip-8 FrameBuffer for rendering as an SDL2 texture.
    ///
    /// An SDL2 RGB24 texture is a 1D array of bytes that represent concatenated rows of RGB pixels.
    ///
    /// This creates a two color rendering by:
    /// - Walking the frame buffer's rows top to bottom
    /// - Replacing each pixel with the RGB values of either the foreground or background color
    ///
    /// The alpha channel of either color is ignored.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    /// * `foreground` `background` the colors of lit and unlit pixels
    fn frame_to_sdl_texture(frame: &FrameBuffer, foreground: Color, background: Color) -> Vec<u8> {
        frame
            .rows()
            .flat_map(|row| row.iter())
            .map(|&lit| if lit { foreground } else { background })
            .flat_map(|color| vec![color.r(), color.g(), color.b()])
            .collect()
    }

    /// Formats the Chip-8 FrameBuffer as an SDL2 RGB24 texture and renders it.
    ///
    /// # Arguments
    /// * `frame` a Chip-8 FrameBuffer
    pub fn render(&mut self, frame: &FrameBuffer) -> Result<(), String> {
        let texture_creator = self.canvas.texture_creator();

        let mut texture = texture_creator
            .create_texture_streaming(
                PixelFormatEnum::RGB24,
                frame.width() as u32,
                frame.height() as u32,
            )
            .map_err(|e| e.to_string())?;

        let pixels = Display::frame_to_sdl_texture(frame, self.foreground, self.background);
        texture.with_lock(None, |buffer: &mut [u8], pitch: usize| {
            for (row, line) in pixels.chunks(frame.width() * 3).enumerate() {
                buffer[row * pitch..row * pitch + line.len()].copy_from_slice(line);
            }
        })?;

        self.canvas.copy(&texture, None, None)?;
        self.canvas.present();
        Ok(())
    }
}
