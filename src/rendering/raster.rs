/// Rasterizer: executes paint commands against an RGBA buffer

use image::RgbaImage;

use crate::rendering::layout::{Point, Rect};
use crate::rendering::paint::{Color, PaintCommand};

/// Run `commands` in order on a fresh `width`×`height` canvas
pub fn rasterize(width: u32, height: u32, commands: &[PaintCommand]) -> RgbaImage {
    let mut canvas = RgbaImage::new(width, height);
    for cmd in commands {
        apply(&mut canvas, cmd);
    }
    canvas
}

pub fn apply(canvas: &mut RgbaImage, cmd: &PaintCommand) {
    match *cmd {
        PaintCommand::Fill { color } => {
            let px = color.to_rgba();
            for p in canvas.pixels_mut() {
                *p = px;
            }
        }
        PaintCommand::VerticalGradient { from_row, from, to } => {
            fill_vertical_gradient(canvas, from_row, from, to)
        }
        PaintCommand::Ellipse { bounds, color } => fill_ellipse(canvas, bounds, color),
        PaintCommand::Line {
            start,
            end,
            width,
            color,
        } => draw_wide_line(canvas, start, end, width, color),
    }
}

/// Rows from `from_row` to the bottom edge, with ratio 0.0 on `from_row`.
///
/// The span is `from_row` itself, so a zero `from_row` leaves the canvas
/// untouched.
fn fill_vertical_gradient(canvas: &mut RgbaImage, from_row: u32, from: Color, to: Color) {
    if from_row == 0 {
        return;
    }
    let span = f64::from(from_row);
    for y in from_row..canvas.height() {
        let ratio = f64::from(y - from_row) / span;
        let px = from.lerp(to, ratio).to_rgba();
        for x in 0..canvas.width() {
            canvas.put_pixel(x, y, px);
        }
    }
}

fn fill_ellipse(canvas: &mut RgbaImage, bounds: Rect, color: Color) {
    if bounds.width() == 0 || bounds.height() == 0 {
        return;
    }
    let rx = f64::from(bounds.width()) / 2.0;
    let ry = f64::from(bounds.height()) / 2.0;
    let cx = f64::from(bounds.x0) + rx;
    let cy = f64::from(bounds.y0) + ry;
    let px = color.to_rgba();

    for y in clip(bounds.y0, bounds.y1, canvas.height()) {
        let dy = (f64::from(y) + 0.5 - cy) / ry;
        for x in clip(bounds.x0, bounds.x1, canvas.width()) {
            let dx = (f64::from(x) + 0.5 - cx) / rx;
            if dx * dx + dy * dy <= 1.0 {
                canvas.put_pixel(x, y, px);
            }
        }
    }
}

fn draw_wide_line(canvas: &mut RgbaImage, start: Point, end: Point, width: u32, color: Color) {
    let (ax, ay) = (f64::from(start.x) + 0.5, f64::from(start.y) + 0.5);
    let (bx, by) = (f64::from(end.x) + 0.5, f64::from(end.y) + 0.5);
    let (vx, vy) = (bx - ax, by - ay);
    let len_sq = vx * vx + vy * vy;
    let half = f64::from(width.max(1)) / 2.0;
    let px = color.to_rgba();

    // Degenerate segment: a `width`-sided square dot
    if len_sq == 0.0 {
        let w = width.max(1) as i32;
        let (lo, hi) = (w / 2, (w + 1) / 2 - 1);
        let dot = Rect::new(start.x - lo, start.y - lo, start.x + hi, start.y + hi);
        for y in clip(dot.y0, dot.y1, canvas.height()) {
            for x in clip(dot.x0, dot.x1, canvas.width()) {
                canvas.put_pixel(x, y, px);
            }
        }
        return;
    }

    let pad = half.ceil() as i32;
    let reach = Rect::new(
        start.x.min(end.x) - pad,
        start.y.min(end.y) - pad,
        start.x.max(end.x) + pad,
        start.y.max(end.y) + pad,
    );
    let len = len_sq.sqrt();

    for y in clip(reach.y0, reach.y1, canvas.height()) {
        let py = f64::from(y) + 0.5 - ay;
        for x in clip(reach.x0, reach.x1, canvas.width()) {
            let pxo = f64::from(x) + 0.5 - ax;
            let along = (pxo * vx + py * vy) / len_sq;
            if !(0.0..=1.0).contains(&along) {
                continue;
            }
            // signed perpendicular distance; half-open so the band is `width` thick
            let across = (pxo * vy - py * vx) / len;
            if -half <= across && across < half {
                canvas.put_pixel(x, y, px);
            }
        }
    }
}

/// Inclusive `lo..=hi` intersected with `0..limit`
fn clip(lo: i32, hi: i32, limit: u32) -> std::ops::Range<u32> {
    let start = lo.max(0) as u32;
    let end = if hi < 0 { 0 } else { (hi as u32).saturating_add(1).min(limit) };
    start.min(end)..end
}
