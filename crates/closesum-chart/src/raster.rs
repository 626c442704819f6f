//! In-memory RGBA raster backend.
//!
//! Shapes are drawn with `imageproc`; text uses the 8x8 bitmap glyphs from
//! `font8x8`, scaled by an integer factor per [`TextSize`].

use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect as PixelRect;
use std::io::Cursor;

use crate::surface::{Color, Orientation, Point, Rect, Surface, TextAnchor, TextSize, TextStyle};

/// Side of a glyph cell in font pixels.
const GLYPH_SIZE: i64 = 8;

/// A raster canvas backed by an [`RgbaImage`].
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// Creates a transparent canvas.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
        }
    }

    /// Returns the underlying image.
    #[must_use]
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consumes the surface, returning the image.
    #[must_use]
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Encodes the canvas as PNG.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, image::ImageError> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(buf.into_inner())
    }

    /// Returns the pixel at `(x, y)`, if it is on the canvas.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.image
            .get_pixel_checked(x, y)
            .map(|p| Color::rgb(p.0[0], p.0[1], p.0[2]))
    }

    fn put(&mut self, x: i64, y: i64, color: Rgba<u8>) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        if x < self.image.width() && y < self.image.height() {
            self.image.put_pixel(x, y, color);
        }
    }
}

const fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

const fn scale_of(size: TextSize) -> i64 {
    match size {
        TextSize::Label => 1,
        TextSize::Title => 2,
    }
}

fn glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .unwrap_or([0; 8])
}

impl Surface for RasterSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let width = rect.width.round();
        let height = rect.height.round();
        if width < 1.0 || height < 1.0 {
            return;
        }
        let area = PixelRect::at(rect.x.round() as i32, rect.y.round() as i32)
            .of_size(width as u32, height as u32);
        draw_filled_rect_mut(&mut self.image, area, rgba(color));
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Color) {
        draw_line_segment_mut(
            &mut self.image,
            (from.x as f32, from.y as f32),
            (to.x as f32, to.y as f32),
            rgba(color),
        );
    }

    fn fill_text(&mut self, text: &str, at: Point, style: TextStyle) {
        let scale = scale_of(style.size);
        let cell = GLYPH_SIZE * scale;
        let length = text.chars().count() as i64 * cell;
        let offset = match style.anchor {
            TextAnchor::Start => 0,
            TextAnchor::Middle => length / 2,
            TextAnchor::End => length,
        };
        let ax = at.x.round() as i64;
        let ay = at.y.round() as i64;
        let color = rgba(style.color);

        for (k, c) in text.chars().enumerate() {
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_SIZE {
                    if bits & (1 << col) == 0 {
                        continue;
                    }
                    // (u, v): along the text and down from its top edge.
                    let u = k as i64 * cell + col * scale;
                    let v = row as i64 * scale;
                    for du in 0..scale {
                        for dv in 0..scale {
                            let (x, y) = match style.orientation {
                                Orientation::Horizontal => {
                                    (ax - offset + u + du, ay - cell / 2 + v + dv)
                                }
                                Orientation::Vertical => {
                                    (ax - cell / 2 + v + dv, ay + offset - (u + du))
                                }
                            };
                            self.put(x, y, color);
                        }
                    }
                }
            }
        }
    }

    fn stroke_arc_point(&mut self, center: Point, radius: f64, color: Color) {
        draw_filled_circle_mut(
            &mut self.image,
            (center.x.round() as i32, center.y.round() as i32),
            radius.round() as i32,
            rgba(color),
        );
    }
}
