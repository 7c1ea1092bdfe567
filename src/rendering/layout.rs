/// Geometry of the icon glyph, derived from the target size
use crate::rendering::paint::{PaintCommand, DARK_BLUE, PRIMARY_BLUE, WHITE};

/// Sizes at or above this get the eye/pupil/slash design
pub const DETAILED_MIN_SIZE: u32 = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Bounding box whose corners are both inside the box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        (self.x1 - self.x0 + 1).max(0) as u32
    }

    pub fn height(&self) -> u32 {
        (self.y1 - self.y0 + 1).max(0) as u32
    }
}

/// Placement of every glyph element for one icon size.
///
/// All values come from integer division of the size, so the same size
/// always yields the same layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconLayout {
    Detailed {
        eye: Rect,
        pupil: Rect,
        slash_start: Point,
        slash_end: Point,
        slash_width: u32,
    },
    Simple {
        circle: Rect,
    },
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let s = size as i32;
        if size >= DETAILED_MIN_SIZE {
            let margin = s / 6;
            let eye_y = s / 2;
            let eye_radius = s / 5;
            let pupil_radius = eye_radius / 3;

            IconLayout::Detailed {
                eye: Rect::new(
                    margin,
                    eye_y - eye_radius,
                    margin + eye_radius * 2,
                    eye_y + eye_radius,
                ),
                pupil: Rect::new(
                    margin + eye_radius - pupil_radius,
                    eye_y - pupil_radius,
                    margin + eye_radius + pupil_radius,
                    eye_y + pupil_radius,
                ),
                slash_start: Point::new(margin + eye_radius * 2 + s / 12, s / 4),
                slash_end: Point::new(s - margin, s - s / 4),
                slash_width: (size / 16).max(2),
            }
        } else {
            let margin = s / 4;
            IconLayout::Simple {
                circle: Rect::new(margin, margin, s - margin, s - margin),
            }
        }
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self, IconLayout::Detailed { .. })
    }

    /// Full display list for an icon of `size`, background first
    pub fn paint_commands(&self, size: u32) -> Vec<PaintCommand> {
        let mut cmds = vec![
            PaintCommand::Fill { color: PRIMARY_BLUE },
            PaintCommand::VerticalGradient {
                from_row: size / 2,
                from: PRIMARY_BLUE,
                to: DARK_BLUE,
            },
        ];

        match *self {
            IconLayout::Detailed {
                eye,
                pupil,
                slash_start,
                slash_end,
                slash_width,
            } => {
                cmds.push(PaintCommand::Ellipse { bounds: eye, color: WHITE });
                cmds.push(PaintCommand::Ellipse { bounds: pupil, color: DARK_BLUE });
                cmds.push(PaintCommand::Line {
                    start: slash_start,
                    end: slash_end,
                    width: slash_width,
                    color: WHITE,
                });
            }
            IconLayout::Simple { circle } => {
                cmds.push(PaintCommand::Ellipse { bounds: circle, color: WHITE });
            }
        }

        cmds
    }
}
