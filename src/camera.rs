use crate::CellIndex;
use crate::ScreenSize;
use crate::grid::Grid;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Cells covered by a single braille character, horizontally
pub const GLYPH_WIDTH: CellIndex = 2;

/// Cells covered by a single braille character, vertically
pub const GLYPH_HEIGHT: CellIndex = 4;

/// Projects a [`Grid`] onto a block of braille characters. Each character shows a 2x4 square of
/// cells, the top left cell of the grid being the top left dot of the first character.
pub struct Camera {
    /// The cell buffer
    cb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the cell buffer
    w: usize,

    /// Height of the cell buffer
    h: usize,
}

impl Camera {
    /// Create a camera `cols` characters wide and `rows` characters tall
    pub fn new(cols: ScreenSize, rows: ScreenSize) -> Self {
        let (w, h) = Self::cell_size(cols, rows);
        let cb = vec![false; w * h];

        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // `bw` and `bh` are the width and height of the framebuffer in braille characters (that
        // is, not accounting for the trailing newlines expected at the end of each line).

        let (bw, bh) = (cols as usize, rows as usize);
        let cp = vec![BRAILLE_EMPTY; bw * bh];

        // Each braille character is 3 bytes, and newlines one byte. Since we need `bh` newlines,
        // this gives us a framebuffer of length `3 * (bw * bh) + bh`.
        let fb = String::with_capacity(3 * (bw * bh) + bh);

        let mut cam = Self { cb, fb, cp, w, h };
        cam.write_fb();

        cam
    }

    /// Size of the grid this camera shows in full, in cells
    pub fn cell_size(cols: ScreenSize, rows: ScreenSize) -> (CellIndex, CellIndex) {
        (
            cols as CellIndex * GLYPH_WIDTH,
            rows as CellIndex * GLYPH_HEIGHT,
        )
    }

    /// Width of the cell buffer
    pub fn width(&self) -> usize {
        self.w
    }

    /// Height of the cell buffer
    pub fn height(&self) -> usize {
        self.h
    }

    pub fn resize(&mut self, cols: ScreenSize, rows: ScreenSize) {
        *self = Self::new(cols, rows);
    }

    /// The `(x, y, w, h)` rectangle of cells under the character at `(col, row)`, or `None` if
    /// the character is outside of the camera.
    pub fn cells_under(
        &self,
        col: ScreenSize,
        row: ScreenSize,
    ) -> Option<(CellIndex, CellIndex, CellIndex, CellIndex)> {
        let x = col as CellIndex * GLYPH_WIDTH;
        let y = row as CellIndex * GLYPH_HEIGHT;

        if x >= self.w || y >= self.h {
            return None;
        }

        Some((x, y, GLYPH_WIDTH, GLYPH_HEIGHT))
    }

    /// Turns on a single pixel of the framebuffer
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        assert!(x < self.w, "x is out of bounds");
        assert!(y < self.h, "y is out of bounds");

        let i = self.xy_from(x, y);

        self.cb[i] = true;
    }

    /// Reset the cell buffer
    pub fn reset(&mut self) {
        self.cb.fill(false);
    }

    /// Project every live cell of `grid` that falls in view. Anything previously drawn is
    /// discarded.
    pub fn draw(&mut self, grid: &Grid) {
        self.reset();

        for (x, y) in grid.live_cells() {
            if x < self.w && y < self.h {
                self.draw_pixel(x, y);
            }
        }
    }

    /// Fundamentally, we have a framebuffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?".
    pub fn render(&mut self) -> &str {
        let bw = self.w / GLYPH_WIDTH;

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.cb.iter().enumerate() {
            if !px {
                continue;
            }

            let (x, y) = self.xy_to(n);
            let hex = Self::get_hex_value(x, y);

            self.cp[(y / GLYPH_HEIGHT) * bw + (x / GLYPH_WIDTH)] += hex;
        }

        self.write_fb();

        &self.fb
    }

    /// Rebuild the framebuffer from the codepoints
    fn write_fb(&mut self) {
        let bw = self.w / GLYPH_WIDTH;

        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // Every codepoint lives in U+2800..=U+28FF, all of which are valid chars
            self.fb
                .push(char::from_u32(c).unwrap_or(char::REPLACEMENT_CHARACTER));
        }

        if !self.cp.is_empty() {
            self.fb.push('\n');
        }
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Camera;
    use crate::grid::Grid;

    #[test]
    fn empty() {
        let mut cam = Camera::new(2, 1);

        assert_eq!(cam.render(), "\u{2800}\u{2800}\n");
    }

    #[test]
    fn single_cell() {
        let mut cam = Camera::new(1, 1);
        let grid = Grid::from_live_cells(2, 4, [(0, 0)]).unwrap();

        cam.draw(&grid);
        assert_eq!(cam.render(), "\u{2801}\n");
    }

    #[test]
    fn full_glyph() {
        let mut cam = Camera::new(1, 1);
        let mut grid = Grid::new(2, 4).unwrap();
        grid.fill_rect(0, 0, 2, 4, true);

        cam.draw(&grid);
        assert_eq!(cam.render(), "\u{28FF}\n");
    }

    #[test]
    fn multiple_rows() {
        let mut cam = Camera::new(2, 2);
        // bottom right dot of the last glyph
        let grid = Grid::from_live_cells(4, 8, [(3, 7)]).unwrap();

        cam.draw(&grid);
        assert_eq!(cam.render(), "\u{2800}\u{2800}\n\u{2800}\u{2880}\n");
    }

    #[test]
    fn draw_clips_and_resets() {
        let mut cam = Camera::new(1, 1);
        let grid = Grid::from_live_cells(10, 10, [(1, 1), (9, 9)]).unwrap();

        cam.draw(&grid);
        assert_eq!(cam.render(), "\u{2810}\n");

        cam.draw(&Grid::new(10, 10).unwrap());
        assert_eq!(cam.render(), "\u{2800}\n");
    }

    #[test]
    fn cells_under() {
        let cam = Camera::new(3, 2);

        assert_eq!(cam.width(), 6);
        assert_eq!(cam.height(), 8);
        assert_eq!(cam.cells_under(1, 1), Some((2, 4, 2, 4)));
        assert_eq!(cam.cells_under(3, 0), None);
        assert_eq!(cam.cells_under(0, 2), None);
    }
}
