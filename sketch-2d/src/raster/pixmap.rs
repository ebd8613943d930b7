use crate::{BoxSize, Color};

/// Row-major CPU pixel buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct Pixmap {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Pixmap {
    pub fn new(width: u32, height: u32, base_color: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![base_color; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> BoxSize {
        BoxSize::new(self.width as f32, self.height as f32)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[self.index(x, y)])
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn fill_span(&mut self, x0: u32, x1: u32, y0: u32, y1: u32, color: Color) {
        for y in y0..y1 {
            for x in x0..x1 {
                let index = self.index(x, y);
                let dst = &mut self.pixels[index];
                *dst = source_over(color, *dst);
            }
        }
    }

    #[inline(always)]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

fn source_over(src: Color, dst: Color) -> Color {
    match src.a {
        u8::MAX => src,
        0 => dst,
        alpha => {
            let a = alpha as u32;
            let blend = |s: u8, d: u8| ((s as u32 * a + d as u32 * (255 - a) + 127) / 255) as u8;
            Color {
                r: blend(src.r, dst.r),
                g: blend(src.g, dst.g),
                b: blend(src.b, dst.b),
                a: (a + (dst.a as u32 * (255 - a) + 127) / 255) as u8,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_pixel_is_none() {
        let pixmap = Pixmap::new(4, 3, Color::WHITE);
        assert_eq!(pixmap.pixel(3, 2), Some(Color::WHITE));
        assert_eq!(pixmap.pixel(4, 0), None);
        assert_eq!(pixmap.pixel(0, 3), None);
        assert_eq!(pixmap.pixels().len(), 12);
    }

    #[test]
    fn translucent_fill_blends_with_destination() {
        let mut pixmap = Pixmap::new(1, 1, Color::rgb8(0, 0, 0));
        pixmap.fill_span(0, 1, 0, 1, Color::rgba8(255, 255, 255, 0));
        assert_eq!(pixmap.pixel(0, 0), Some(Color::rgb8(0, 0, 0)));
        pixmap.fill_span(0, 1, 0, 1, Color::rgba8(255, 0, 0, 255));
        assert_eq!(pixmap.pixel(0, 0), Some(Color::rgb8(255, 0, 0)));
        pixmap.fill_span(0, 1, 0, 1, Color::rgba8(0, 0, 255, 128));
        let blended = pixmap.pixel(0, 0).unwrap();
        assert_eq!((blended.r, blended.g, blended.b, blended.a), (127, 0, 128, 255));
    }
}
