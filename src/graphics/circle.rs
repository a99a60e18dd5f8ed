use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::error::Result;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Draw a circle outline using the midpoint algorithm.
    ///
    /// Only octant steps whose offset can put one of the eight mirrored
    /// points on the surface are walked; the state at the start of each such
    /// run is computed directly.
    pub fn draw_circle(&mut self, cx: i64, cy: i64, radius: u32, color: Color) -> Result<()> {
        let raw = self.format().check(color)?;

        let r = radius as i128;
        let (ccx, ccy) = (cx as i128, cy as i128);
        let (w, h) = (self.width() as i128, self.height() as i128);
        let mut runs = [
            (-ccx, w - 1 - ccx),
            (ccx - w + 1, ccx),
            (-ccy, h - 1 - ccy),
            (ccy - h + 1, ccy),
        ];
        runs.sort_unstable();

        let mut next = 0i128;
        for (lo, hi) in runs {
            let mut x = lo.max(next);
            if x > hi {
                continue;
            }
            let mut y = octant_y(r, x);
            if x > y {
                break;
            }
            let mut d = (x + 1) * (x + 1) + y * y - y - r * r;

            while x <= y && x <= hi {
                self.draw_circle_points(cx, cy, x as i64, y as i64, raw);
                x += 1;
                if d < 0 {
                    d += 2 * x + 1;
                } else {
                    y -= 1;
                    d += 2 * (x - y) + 1;
                }
            }
            next = x;
        }
        Ok(())
    }

    fn draw_circle_points(&mut self, cx: i64, cy: i64, x: i64, y: i64, raw: u16) {
        let points = [
            (cx.saturating_add(x), cy.saturating_add(y)),
            (cx.saturating_sub(x), cy.saturating_add(y)),
            (cx.saturating_add(x), cy.saturating_sub(y)),
            (cx.saturating_sub(x), cy.saturating_sub(y)),
            (cx.saturating_add(y), cy.saturating_add(x)),
            (cx.saturating_sub(y), cy.saturating_add(x)),
            (cx.saturating_add(y), cy.saturating_sub(x)),
            (cx.saturating_sub(y), cy.saturating_sub(x)),
        ];

        for (px, py) in points {
            self.put_raw(px, py, raw);
        }
    }
}

/// The `y` the midpoint walk holds at step `x`: the largest `y` with
/// `y * (y - 1) < r² - x²`. Negative once `x` is past the radius.
fn octant_y(r: i128, x: i128) -> i128 {
    let s = r * r - x * x;
    if s < 0 {
        return -1;
    }
    ((isqrt(4 * s as u128) + 1) / 2) as i128
}

fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = 1u128 << ((128 - n.leading_zeros()).div_ceil(2));
    loop {
        let y = (x + n / x) / 2;
        if y >= x {
            return x;
        }
        x = y;
    }
}
