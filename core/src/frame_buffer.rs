/// # FrameBuffer
/// A monochrome grid of lit/unlit pixels, stored row-major and indexed as (x, y).
///
/// Only CLS and DRW mutate it. Renderers get it by shared reference once per frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<bool>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        FrameBuffer {
            width,
            height,
            pixels: vec![false; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Unlights every pixel
    pub fn clear(&mut self) {
        self.pixels.iter_mut().for_each(|p| *p = false);
    }

    /// Returns whether the pixel at (x, y) is lit; anything off-screen is unlit.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.pixels[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, lit: bool) {
        if x < self.width && y < self.height {
            self.pixels[y * self.width + x] = lit;
        }
    }

    /// XORs an 8-pixel wide sprite onto the grid.
    ///
    /// The origin wraps into the visible grid but the sprite itself is clipped at the right
    /// and bottom edges. Returns true if any lit sprite pixel landed on an already lit pixel.
    ///
    /// # Arguments
    /// * `x` `y` the origin, taken modulo the grid size
    /// * `rows` one byte per sprite row; the most significant bit is the leftmost pixel
    pub fn draw_sprite(&mut self, x: usize, y: usize, rows: &[u8]) -> bool {
        let x0 = x % self.width;
        let y0 = y % self.height;
        let mut collision = false;

        for (dy, row) in rows.iter().enumerate() {
            let y = y0 + dy;
            if y >= self.height {
                break;
            }
            for bit in 0..8 {
                let x = x0 + bit;
                if x >= self.width {
                    break;
                }
                let sprite_pixel = (row >> (7 - bit)) & 1 == 1;
                let pixel = &mut self.pixels[y * self.width + x];
                collision |= sprite_pixel && *pixel;
                *pixel ^= sprite_pixel;
            }
        }

        collision
    }

    /// Iterates over the rows of the grid, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        self.pixels.chunks(self.width)
    }

    pub fn pixels(&self) -> &[bool] {
        &self.pixels
    }

    pub fn is_blank(&self) -> bool {
        self.pixels.iter().all(|&p| !p)
    }
}
