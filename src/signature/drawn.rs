use super::{SignatureImage, CANVAS_HEIGHT, CANVAS_WIDTH};
use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PEN_WIDTH: f32 = 2.5;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Freehand capture surface. Pressure is ignored; every stroke has the same width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokePad {
    #[serde(default = "default_pen_width")]
    pen_width: f32,
    strokes: Vec<Vec<Point>>,
    #[serde(skip)]
    drawing: bool,
}

fn default_pen_width() -> f32 {
    DEFAULT_PEN_WIDTH
}

impl Default for StrokePad {
    fn default() -> Self {
        Self::new()
    }
}

impl StrokePad {
    pub fn new() -> Self {
        Self {
            pen_width: DEFAULT_PEN_WIDTH,
            strokes: Vec::new(),
            drawing: false,
        }
    }

    pub fn from_strokes(strokes: Vec<Vec<Point>>) -> Self {
        Self {
            strokes,
            ..Self::new()
        }
    }

    pub fn begin_stroke(&mut self, at: Point) {
        self.strokes.push(vec![at]);
        self.drawing = true;
    }

    /// Extends the current stroke; ignored when no stroke is in progress
    pub fn line_to(&mut self, to: Point) {
        if !self.drawing {
            return;
        }
        if let Some(stroke) = self.strokes.last_mut() {
            stroke.push(to);
        }
    }

    pub fn end_stroke(&mut self) {
        self.drawing = false;
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.drawing = false;
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.iter().all(Vec::is_empty)
    }

    pub fn strokes(&self) -> &[Vec<Point>] {
        &self.strokes
    }

    /// A blank pad never produces an image
    pub fn rasterize(&self) -> Option<SignatureImage> {
        if self.is_empty() {
            return None;
        }
        SignatureImage::from_rgba(&self.render())
    }

    pub fn render(&self) -> RgbaImage {
        let mut canvas = RgbaImage::from_pixel(CANVAS_WIDTH, CANVAS_HEIGHT, Rgba([0, 0, 0, 0]));
        let radius = self.pen_width / 2.0;

        for stroke in &self.strokes {
            match stroke.as_slice() {
                [] => {}
                [only] => stamp(&mut canvas, *only, radius),
                points => {
                    for pair in points.windows(2) {
                        segment(&mut canvas, pair[0], pair[1], radius);
                    }
                }
            }
        }

        canvas
    }
}

fn segment(canvas: &mut RgbaImage, from: Point, to: Point, radius: f32) {
    let Some((from, to)) = clip_to_canvas(from, to, radius) else {
        return;
    };
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let steps = ((dx.hypot(dy) / 0.5).ceil().max(1.0) as usize).min(MAX_SEGMENT_STEPS);

    for i in 0..=steps {
        let t = i as f32 / steps as f32;
        stamp(canvas, Point::new(from.x + dx * t, from.y + dy * t), radius);
    }
}

/// Longest diagonal of the canvas, sampled every half pixel, with room for the pen
const MAX_SEGMENT_STEPS: usize = 4 * (CANVAS_WIDTH + CANVAS_HEIGHT) as usize;

/// Liang-Barsky clip against the canvas grown by the pen radius.
/// Non-finite points and segments that miss the canvas yield `None`.
fn clip_to_canvas(from: Point, to: Point, radius: f32) -> Option<(Point, Point)> {
    if ![from.x, from.y, to.x, to.y].iter().all(|v| v.is_finite()) {
        return None;
    }

    // widen to f64 so far-off endpoints keep their direction
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (dx, dy) = (to.x as f64 - x0, to.y as f64 - y0);
    let r = radius as f64;
    let (min_x, max_x) = (-r, CANVAS_WIDTH as f64 + r);
    let (min_y, max_y) = (-r, CANVAS_HEIGHT as f64 + r);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - min_x),
        (dx, max_x - x0),
        (-dy, y0 - min_y),
        (dy, max_y - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let t = q / p;
        if p < 0.0 {
            t0 = t0.max(t);
        } else {
            t1 = t1.min(t);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f64| Point::new((x0 + dx * t) as f32, (y0 + dy * t) as f32);
    Some((at(t0), at(t1)))
}

/// Round pen tip
fn stamp(canvas: &mut RgbaImage, center: Point, radius: f32) {
    let min_x = (center.x - radius).floor().max(0.0) as u32;
    let min_y = (center.y - radius).floor().max(0.0) as u32;
    let max_x = ((center.x + radius).ceil().max(0.0) as u32).min(CANVAS_WIDTH - 1);
    let max_y = ((center.y + radius).ceil().max(0.0) as u32).min(CANVAS_HEIGHT - 1);

    if center.x + radius < 0.0 || center.y + radius < 0.0 || min_x > max_x || min_y > max_y {
        return;
    }

    for y in min_y..=max_y {
        for x in min_x..=max_x {
            let px = x as f32 + 0.5 - center.x;
            let py = y as f32 + 0.5 - center.y;
            if px * px + py * py <= radius * radius {
                canvas.put_pixel(x, y, Rgba([0, 0, 0, 255]));
            }
        }
    }
}
