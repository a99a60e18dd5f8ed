use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::error::Result;

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Draw a segment from `(xi, yi)` to `(xf, yf)`, both ends included.
    ///
    /// Steps one pixel per iteration along the axis with the larger delta and
    /// moves on the other axis whenever the accumulated error passes half a
    /// pixel, so each pixel of the 8-connected path is written exactly once.
    /// The walk always starts from the end with the smaller coordinate on
    /// that axis, so both endpoint orders give the same pixels.
    pub fn draw_line(&mut self, xi: i64, yi: i64, xf: i64, yf: i64, color: Color) -> Result<()> {
        let raw = self.format().check(color)?;

        let (adx, ady) = (xi.abs_diff(xf), yi.abs_diff(yf));
        if adx >= ady {
            let ((x0, y0), (_, y1)) = if xi <= xf { ((xi, yi), (xf, yf)) } else { ((xf, yf), (xi, yi)) };
            let sy = if y1 >= y0 { 1 } else { -1 };
            let extent = self.width();
            self.walk_line((x0, y0), adx, ady, sy, extent, |m, n| (m, n), raw);
        } else {
            let ((x0, y0), (x1, _)) = if yi <= yf { ((xi, yi), (xf, yf)) } else { ((xf, yf), (xi, yi)) };
            let sx = if x1 >= x0 { 1 } else { -1 };
            let extent = self.height();
            self.walk_line((y0, x0), ady, adx, sx, extent, |m, n| (n, m), raw);
        }
        Ok(())
    }

    /// Walk `major + 1` steps in major/minor coordinates, only visiting the
    /// steps whose major coordinate lies in `[0, extent)`. `to_xy` maps a
    /// (major, minor) pair back to screen coordinates.
    #[allow(clippy::too_many_arguments)]
    fn walk_line(
        &mut self,
        start: (i64, i64),
        major: u64,
        minor: u64,
        minor_dir: i64,
        extent: usize,
        to_xy: impl Fn(i64, i64) -> (i64, i64),
        raw: u16,
    ) {
        let (m0, n0) = (start.0 as i128, start.1 as i128);
        let first = (-m0).max(0);
        let last = (extent as i128 - 1 - m0).min(major as i128);
        if first > last {
            return;
        }

        let (mut steps, mut err) = skip_to(first as u128, major, minor);
        let (major, minor) = (major as i128, minor as i128);
        let mut m = m0 + first;

        // err stays within (-major, major]
        for i in first..=last {
            let n = n0 + minor_dir as i128 * steps;
            let (x, y) = to_xy(m as i64, n as i64);
            self.put_raw(x, y, raw);
            if i == last {
                break;
            }
            err += 2 * minor;
            if err > major {
                steps += 1;
                err -= 2 * major;
            }
            m += 1;
        }
    }
}

/// Minor-axis steps taken and error term after `first` iterations of the
/// walk, without running them.
fn skip_to(first: u128, major: u64, minor: u64) -> (i128, i128) {
    if first == 0 || major == 0 {
        return (0, 0);
    }
    // first <= major and minor <= major, so the product fits
    let product = first * minor as u128;
    let (q, r) = (product / major as u128, product % major as u128);
    let (major, r) = (major as i128, r as i128);
    if 2 * r <= major {
        (q as i128, 2 * r)
    } else {
        (q as i128 + 1, 2 * r - 2 * major)
    }
}

#[cfg(test)]
mod tests {
    use crate::devices::framebuffer::Color;
    use crate::error::GfxError;
    use crate::graphics::test_util::{canvas, lit, INK};
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_degenerate_line() {
        let mut fb = canvas(8, 8);
        fb.draw_line(0, 0, 0, 0, INK).unwrap();
        assert_eq!(lit(&fb), vec![(0, 0)]);
    }

    #[test]
    fn test_horizontal_line() {
        let mut fb = canvas(8, 8);
        fb.draw_line(0, 0, 4, 0, INK).unwrap();
        assert_eq!(lit(&fb), vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_shallow_line() {
        let mut fb = canvas(8, 8);
        fb.draw_line(0, 0, 4, 2, INK).unwrap();
        assert_eq!(lit(&fb), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_all_octants_hit_endpoints_once_per_step() {
        let ends: [(i64, i64); 8] = [(7, 2), (2, 7), (-2, 7), (-7, 2), (-7, -2), (-2, -7), (2, -7), (7, -2)];
        for (ex, ey) in ends {
            let mut fb = canvas(20, 20);
            fb.draw_line(10, 10, 10 + ex, 10 + ey, INK).unwrap();
            let pixels = lit(&fb);
            assert!(pixels.contains(&(10, 10)));
            assert!(pixels.contains(&(10 + ex, 10 + ey)));
            // one pixel per step along the dominant axis
            assert_eq!(pixels.len() as i64, ex.abs().max(ey.abs()) + 1);
        }
    }

    #[test]
    fn test_steep_line_is_connected() {
        let mut fb = canvas(10, 10);
        fb.draw_line(1, 9, 3, 0, INK).unwrap();
        let mut pixels: Vec<(i64, i64)> = lit(&fb);
        pixels.sort_by_key(|p| p.1);
        for pair in pixels.windows(2) {
            assert_eq!(pair[1].1 - pair[0].1, 1);
            assert!((pair[1].0 - pair[0].0).abs() <= 1);
        }
    }

    #[test]
    fn test_line_clips_on_write() {
        let mut fb = canvas(4, 4);
        fb.draw_line(-3, 1, 6, 1, INK).unwrap();
        assert_eq!(lit(&fb), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_endpoint_order_does_not_matter() {
        for (a, b) in [((0, 0), (4, 2)), ((1, 9), (3, 0)), ((6, 1), (0, 5)), ((2, 2), (7, 7))] {
            let mut forward = canvas(10, 10);
            forward.draw_line(a.0, a.1, b.0, b.1, INK).unwrap();
            let mut backward = canvas(10, 10);
            backward.draw_line(b.0, b.1, a.0, a.1, INK).unwrap();
            assert_eq!(lit(&forward), lit(&backward));
        }
    }

    #[test]
    fn test_far_off_screen_endpoints() {
        let mut fb = canvas(16, 16);
        fb.draw_line(i64::MIN, 5, i64::MAX, 5, INK).unwrap();
        let row: Vec<(i64, i64)> = (0..16).map(|x| (x, 5)).collect();
        assert_eq!(lit(&fb), row);

        let mut fb = canvas(16, 16);
        let far = 1_000_000_000_000;
        fb.draw_line(far, far, -far, -far, INK).unwrap();
        let diagonal: Vec<(i64, i64)> = (0..16).map(|i| (i, i)).collect();
        assert_eq!(lit(&fb), diagonal);

        let mut fb = canvas(16, 16);
        fb.draw_line(3, i64::MIN / 2, 4, i64::MAX / 2, INK).unwrap();
        assert_eq!(lit(&fb).len(), 16);
    }

    #[test]
    fn test_clipped_start_matches_full_walk() {
        let mut clipped = canvas(8, 8);
        clipped.draw_line(-37, -5, 12, 9, INK).unwrap();

        // same segment drawn on a canvas that holds all of it
        let mut whole = canvas(60, 20);
        whole.draw_line(0, 0, 49, 14, INK).unwrap();
        let expected: Vec<(i64, i64)> = lit(&whole)
            .into_iter()
            .map(|(x, y)| (x - 37, y - 5))
            .filter(|&(x, y)| (0..8).contains(&x) && (0..8).contains(&y))
            .collect();
        assert_eq!(lit(&clipped), expected);
    }

    #[test]
    fn test_line_rejects_foreign_color() {
        let mut fb = canvas(4, 4);
        assert_eq!(fb.draw_line(0, 0, 3, 3, Color::Direct(1)), Err(GfxError::FormatMismatch));
        assert!(lit(&fb).is_empty());
    }
}
