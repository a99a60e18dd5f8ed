//! Scanline polygon fill.
//!
//! Edges are half-open in y: an edge covers scanlines from its upper vertex
//! down to, but not including, its lower vertex. A vertex shared by two
//! edges is therefore counted once when the outline passes through it and
//! twice (or not at all) at a local extremum, which keeps the even-odd
//! pairing intact. Horizontal edges never produce crossings. The crossing x
//! is interpolated from the upper vertex and truncated toward zero, so the
//! result doesn't depend on vertex order.

use super::Vector2D;
use crate::devices::framebuffer::{Color, FrameBuffer};
use crate::error::{GfxError, Result};
use alloc::vec::Vec;

/// X where the edge `a`-`b` crosses scanline `y`, if it does
fn edge_crossing(a: Vector2D, b: Vector2D, y: i64) -> Option<i64> {
    if a.y == b.y {
        return None;
    }
    let (top, bottom) = if a.y < b.y { (a, b) } else { (b, a) };
    if y < top.y || y >= bottom.y {
        return None;
    }

    let num = (y as i128 - top.y as i128) * (bottom.x as i128 - top.x as i128);
    let den = bottom.y as i128 - top.y as i128;
    Some((top.x as i128 + num / den) as i64)
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> FrameBuffer<B> {
    /// Fill a closed polygon; the last vertex connects back to the first.
    ///
    /// Spans between crossing pairs are filled including both ends.
    /// Self-intersecting outlines get an even-odd fill.
    pub fn draw_polygon(&mut self, vertices: &[Vector2D], color: Color) -> Result<()> {
        if vertices.len() < 3 {
            return Err(GfxError::InvalidPolygon);
        }
        let raw = self.format().check(color)?;

        let min_y = vertices.iter().map(|v| v.y).min().unwrap_or(0);
        let max_y = vertices.iter().map(|v| v.y).max().unwrap_or(0);
        let top = min_y.max(0);
        let bottom = max_y.min(self.height() as i64 - 1);

        let mut crossings = Vec::with_capacity(vertices.len());
        for y in top..=bottom {
            crossings.clear();
            for (i, &a) in vertices.iter().enumerate() {
                let b = vertices[(i + 1) % vertices.len()];
                if let Some(x) = edge_crossing(a, b, y) {
                    crossings.push(x);
                }
            }
            crossings.sort_unstable();

            for pair in crossings.chunks_exact(2) {
                self.fill_clipped_span(pair[0], pair[1], y, raw);
            }
        }
        Ok(())
    }

    /// Fill `[x0, x1]` on row `y`, dropping whatever lies off-surface
    fn fill_clipped_span(&mut self, x0: i64, x1: i64, y: i64, raw: u16) {
        if y < 0 || y >= self.height() as i64 {
            return;
        }
        let start = x0.max(0);
        let end = x1.min(self.width() as i64 - 1);
        if start > end {
            return;
        }
        self.fill_span(start as usize, y as usize, (end - start + 1) as usize, raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphics::test_util::{canvas, lit, INK};
    use alloc::vec;

    fn poly(points: &[(i64, i64)]) -> Vec<Vector2D> {
        points.iter().map(|&p| p.into()).collect()
    }

    fn row(fb: &FrameBuffer, y: i64) -> Vec<i64> {
        lit(fb).into_iter().filter(|p| p.1 == y).map(|p| p.0).collect()
    }

    #[test]
    fn test_too_few_vertices() {
        let mut fb = canvas(4, 4);
        assert_eq!(fb.draw_polygon(&poly(&[(0, 0), (3, 3)]), INK), Err(GfxError::InvalidPolygon));
        assert_eq!(fb.draw_polygon(&[], INK), Err(GfxError::InvalidPolygon));
    }

    #[test]
    fn test_triangle_scanline() {
        let tri = poly(&[(0, 0), (4, 0), (0, 4)]);
        let mut fb = canvas(8, 8);
        fb.draw_polygon(&tri, INK).unwrap();
        assert_eq!(row(&fb, 2), vec![0, 1, 2]);
        assert_eq!(row(&fb, 0), vec![0, 1, 2, 3, 4]);
        // bottom vertex row is excluded
        assert!(row(&fb, 4).is_empty());

        let first = fb.as_bytes().to_vec();
        let mut again = canvas(8, 8);
        again.draw_polygon(&tri, INK).unwrap();
        assert_eq!(again.as_bytes(), &first[..]);
    }

    #[test]
    fn test_vertex_order_does_not_matter() {
        let mut cw = canvas(12, 12);
        let mut ccw = canvas(12, 12);
        cw.draw_polygon(&poly(&[(1, 1), (9, 3), (4, 10)]), INK).unwrap();
        ccw.draw_polygon(&poly(&[(4, 10), (9, 3), (1, 1)]), INK).unwrap();
        assert_eq!(cw.as_bytes(), ccw.as_bytes());
    }

    #[test]
    fn test_concave_polygon_has_gap() {
        // a "U" shape opening upwards
        let u = poly(&[(0, 0), (2, 0), (2, 4), (5, 4), (5, 0), (7, 0), (7, 6), (0, 6)]);
        let mut fb = canvas(10, 10);
        fb.draw_polygon(&u, INK).unwrap();
        assert_eq!(row(&fb, 2), vec![0, 1, 2, 5, 6, 7]);
        assert_eq!(row(&fb, 5), vec![0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_polygon_partially_off_screen() {
        let mut fb = canvas(6, 6);
        fb.draw_polygon(&poly(&[(-10, -10), (3, -10), (3, 3), (-10, 3)]), INK).unwrap();
        let pixels = lit(&fb);
        assert_eq!(pixels.len(), 4 * 3);
        assert!(pixels.iter().all(|&(x, y)| x <= 3 && y <= 2));
    }

    #[test]
    fn test_crossing_truncates_from_upper_vertex() {
        let a = Vector2D::new(0, 0);
        let b = Vector2D::new(-3, 2);
        assert_eq!(edge_crossing(a, b, 1), Some(-1));
        assert_eq!(edge_crossing(b, a, 1), Some(-1));
        assert_eq!(edge_crossing(a, b, 2), None);
        assert_eq!(edge_crossing(a, Vector2D::new(5, 0), 0), None);
    }
}
