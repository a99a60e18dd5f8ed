use vgcore::{Color, FrameBuffer, GfxError, Pixmap, PixelFormat, Rgb, Vector2D};

fn count_set(fb: &FrameBuffer) -> usize {
    let background = fb.format().black();
    let mut n = 0;
    for y in 0..fb.height() as i64 {
        for x in 0..fb.width() as i64 {
            if fb.get_pixel(x, y).unwrap() != background {
                n += 1;
            }
        }
    }
    n
}

fn direct_canvas(width: usize, height: usize) -> FrameBuffer {
    let mut fb = FrameBuffer::new(width, height, PixelFormat::RGB565).unwrap();
    fb.fill(PixelFormat::RGB565.black()).unwrap();
    fb
}

#[test]
fn test_every_pixel_round_trips() {
    let format = PixelFormat::RGB565;
    let mut fb = direct_canvas(7, 5);
    for y in 0..5 {
        for x in 0..7 {
            let c = format.rgb((x * 36) as u8, (y * 50) as u8, 200).unwrap();
            fb.set_pixel(x, y, c).unwrap();
            assert_eq!(fb.get_pixel(x, y), Ok(c));
        }
    }
    let back = format.to_rgb(fb.get_pixel(6, 4).unwrap()).unwrap();
    assert_eq!(back, Rgb::new(216, 200, 200));
}

#[test]
fn test_single_pixel_shapes() {
    let white = PixelFormat::RGB565.convert(Rgb::WHITE).unwrap();

    let mut fb = direct_canvas(10, 10);
    fb.draw_line(0, 0, 0, 0, white).unwrap();
    assert_eq!(count_set(&fb), 1);

    let mut fb = direct_canvas(10, 10);
    fb.draw_line(0, 0, 4, 0, white).unwrap();
    assert_eq!(count_set(&fb), 5);
    assert_eq!(fb.get_pixel(4, 0), Ok(white));

    let mut fb = direct_canvas(10, 10);
    fb.draw_circle(5, 5, 0, white).unwrap();
    assert_eq!(count_set(&fb), 1);
    assert_eq!(fb.get_pixel(5, 5), Ok(white));
}

#[test]
fn test_triangle_row_is_reproducible() {
    let tri = [Vector2D::new(0, 0), Vector2D::new(4, 0), Vector2D::new(0, 4)];
    let c = Color::Direct(0x1234);
    let mut first = None;
    for _ in 0..3 {
        let mut fb = direct_canvas(6, 6);
        fb.draw_polygon(&tri, c).unwrap();
        let row: Vec<bool> = (0..6).map(|x| fb.get_pixel(x, 2) == Ok(c)).collect();
        assert_eq!(row, [true, true, true, false, false, false]);
        match &first {
            None => first = Some(fb.as_bytes().to_vec()),
            Some(bytes) => assert_eq!(fb.as_bytes(), &bytes[..]),
        }
    }
}

#[test]
fn test_out_of_bounds_set_pixel_is_reported() {
    let mut fb = direct_canvas(3, 3);
    let before = fb.as_bytes().to_vec();
    assert_eq!(fb.set_pixel(3, 1, Color::Direct(1)), Err(GfxError::OutOfBounds));
    assert_eq!(fb.set_pixel(1, -3, Color::Direct(1)), Err(GfxError::OutOfBounds));
    assert_eq!(fb.as_bytes(), &before[..]);
}

#[test]
fn test_transparent_pixmap_is_noop() {
    let mut fb = direct_canvas(4, 4);
    fb.draw_circle(2, 2, 1, Color::Direct(0xFFFF)).unwrap();
    let before = fb.as_bytes().to_vec();
    let data = [0xE0, 0x47, 0xE0, 0x47, 0xE0, 0x47, 0xE0, 0x47];
    let pm = Pixmap::new(2, 2, PixelFormat::RGB565, &data).unwrap();
    fb.draw_pixmap(1, 1, &pm).unwrap();
    assert_eq!(fb.as_bytes(), &before[..]);
}
