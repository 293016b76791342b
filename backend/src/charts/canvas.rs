//! Minimal raster drawing on top of `image::RgbImage`

use image::{Rgb, RgbImage};

/// A pixel position; may lie outside the canvas, in which case drawing clips
pub type Point = (i64, i64);

pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn put(&mut self, (x, y): Point, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.image.width() && (y as u32) < self.image.height()
        {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle spanning both corners, inclusive
    pub fn fill_rect(&mut self, (x0, y0): Point, (x1, y1): Point, color: Rgb<u8>) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put((x, y), color);
            }
        }
    }

    /// Bresenham line stamped with a square brush
    pub fn line(&mut self, from: Point, to: Point, thickness: u32, color: Rgb<u8>) {
        let half = (thickness.max(1) as i64 - 1) / 2;
        let (mut x, mut y) = from;
        let dx = (to.0 - x).abs();
        let dy = -(to.1 - y).abs();
        let sx = if x < to.0 { 1 } else { -1 };
        let sy = if y < to.1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.fill_rect((x - half, y - half), (x + half, y + half), color);
            if (x, y) == to {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn circle(&mut self, (cx, cy): Point, radius: i64, color: Rgb<u8>) {
        for y in -radius..=radius {
            for x in -radius..=radius {
                if x * x + y * y <= radius * radius {
                    self.put((cx + x, cy + y), color);
                }
            }
        }
    }

    pub fn square(&mut self, (cx, cy): Point, half: i64, color: Rgb<u8>) {
        self.fill_rect((cx - half, cy - half), (cx + half, cy + half), color);
    }

    pub fn pixel(&self, (x, y): Point) -> Option<Rgb<u8>> {
        if x < 0 || y < 0 {
            return None;
        }
        self.image.get_pixel_checked(x as u32, y as u32).copied()
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}
