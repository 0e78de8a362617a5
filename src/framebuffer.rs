/// width of the CHIP-8 display in pixels
pub const DISPLAY_WIDTH: usize = 64;
/// height of the CHIP-8 display in pixels
pub const DISPLAY_HEIGHT: usize = 32;

/// Monochrome 64x32 bitmap. Each row is packed into a `u64` with column 0 in
/// the most significant bit. Coordinates wrap around both edges, so no write
/// can land outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Framebuffer {
    rows: [u64; DISPLAY_HEIGHT],
}

impl Framebuffer {
    pub fn new() -> Self {
        Framebuffer {
            rows: [0; DISPLAY_HEIGHT],
        }
    }

    /// turn every pixel off
    pub fn clear(&mut self) {
        self.rows = [0; DISPLAY_HEIGHT];
    }

    pub fn rows(&self) -> &[u64; DISPLAY_HEIGHT] {
        &self.rows
    }

    /// is the pixel at (x, y) lit; coordinates wrap
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.rows[y % DISPLAY_HEIGHT] & Self::mask(x) != 0
    }

    /// flip the pixel at (x, y), returning true if it was on and is now off
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        let mask = Self::mask(x);
        let row = &mut self.rows[y % DISPLAY_HEIGHT];
        let was_on = *row & mask != 0;
        *row ^= mask;
        was_on
    }

    /// XOR an 8-pixel-wide sprite onto the display with its top-left corner at
    /// (x0, y0). Returns true if any lit pixel was switched off.
    pub fn draw_sprite(&mut self, x0: usize, y0: usize, sprite: &[u8]) -> bool {
        let mut collision = false;
        for (y, byte) in sprite.iter().enumerate() {
            for x in 0..8 {
                if (byte >> (7 - x)) & 0x1 == 1 {
                    collision |= self.toggle(x0 + x, y0 + y);
                }
            }
        }
        collision
    }

    /// iterate over every lit (or unlit) pixel as (x, y)
    pub fn pixels(&self, lit: bool) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..DISPLAY_HEIGHT).flat_map(move |y| {
            (0..DISPLAY_WIDTH).filter_map(move |x| (self.get(x, y) == lit).then(|| (x, y)))
        })
    }

    fn mask(x: usize) -> u64 {
        1 << (DISPLAY_WIDTH - 1 - x % DISPLAY_WIDTH)
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}
