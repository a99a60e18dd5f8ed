use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::error::Result;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Fill the rectangle covering columns `[x, x + width)` and rows
    /// `[y, y + height)`. Empty rectangles draw nothing.
    pub fn draw_rectangle(&mut self, x: i64, y: i64, width: u32, height: u32, color: Color) -> Result<()> {
        let raw = self.format().check(color)?;

        let x0 = x.max(0);
        let x1 = x.saturating_add(width as i64).min(self.width() as i64);
        let y0 = y.max(0);
        let y1 = y.saturating_add(height as i64).min(self.height() as i64);
        if x0 >= x1 || y0 >= y1 {
            return Ok(());
        }

        for row in y0..y1 {
            self.fill_span(x0 as usize, row as usize, (x1 - x0) as usize, raw);
        }
        Ok(())
    }
}
