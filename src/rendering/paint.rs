/// Colors and the small paint command set used by the icon renderer

use image::Rgba;

use crate::rendering::layout::{Point, Rect};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Fully opaque pixel value for this color
    pub const fn to_rgba(self) -> Rgba<u8> {
        Rgba([self.r, self.g, self.b, 255])
    }

    /// Linear blend toward `other`, channel by channel.
    ///
    /// `ratio` is clamped to `0.0..=1.0`; fractional results are truncated.
    pub fn lerp(self, other: Color, ratio: f64) -> Color {
        let t = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.trunc().clamp(0.0, 255.0) as u8
        };
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

/// `#0a66c2`, the top half of the background
pub const PRIMARY_BLUE: Color = Color::rgb(0x0a, 0x66, 0xc2);
/// `#004182`, the gradient target and pupil
pub const DARK_BLUE: Color = Color::rgb(0x00, 0x41, 0x82);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);

/// Drawing primitives, executed in order by the rasterizer
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    /// Fill the whole canvas
    Fill { color: Color },
    /// Rows `from_row..height` blend from `from` toward `to`
    VerticalGradient { from_row: u32, from: Color, to: Color },
    /// Filled ellipse inscribed in an inclusive bounding box
    Ellipse { bounds: Rect, color: Color },
    /// Straight line with butt caps
    Line {
        start: Point,
        end: Point,
        width: u32,
        color: Color,
    },
}
