//! Pixel-level painting operations of the pattern renderer.
//!
//! Every operation works on a straight-alpha [`RgbaImage`] in place, is deterministic, and
//! silently paints nothing for degenerate geometry.

use image::RgbaImage;
use kurbo::{BezPath, Point, Shape};

use crate::foundation::{
    core::{Direction, Rgba8},
    math::{alpha_from_unit, band_fraction, lerp_trunc},
};

/// Set every pixel to `color`.
pub fn fill(canvas: &mut RgbaImage, color: Rgba8) {
    let px = color.to_pixel();
    for p in canvas.pixels_mut() {
        *p = px;
    }
}

/// Fill the rectangle with corners `(x0, y0)` and `(x1, y1)`, both inclusive, clipped to the
/// canvas. An inverted rectangle paints nothing.
pub fn fill_rect(canvas: &mut RgbaImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgba8) {
    let (w, h) = canvas.dimensions();
    let x0 = x0.max(0);
    let y0 = y0.max(0);
    let x1 = x1.min(i64::from(w) - 1);
    let y1 = y1.min(i64::from(h) - 1);
    if x0 > x1 || y0 > y1 {
        return;
    }
    let px = color.to_pixel();
    for y in y0..=y1 {
        for x in x0..=x1 {
            canvas.put_pixel(x as u32, y as u32, px);
        }
    }
}

/// Fill a closed polygon (non-zero winding), sampling each pixel at its center.
pub fn fill_polygon(canvas: &mut RgbaImage, points: &[Point], color: Rgba8) {
    if points.len() < 3 {
        return;
    }
    let mut path = BezPath::new();
    path.move_to(points[0]);
    for p in &points[1..] {
        path.line_to(*p);
    }
    path.close_path();

    let (w, h) = canvas.dimensions();
    let bbox = path.bounding_box();
    let x0 = bbox.x0.floor().max(0.0) as u32;
    let y0 = bbox.y0.floor().max(0.0) as u32;
    let x1 = (bbox.x1.ceil().max(0.0) as u32).min(w);
    let y1 = (bbox.y1.ceil().max(0.0) as u32).min(h);

    let px = color.to_pixel();
    for y in y0..y1 {
        for x in x0..x1 {
            let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
            if path.contains(center) {
                canvas.put_pixel(x, y, px);
            }
        }
    }
}

/// Linear ramp from `from` (first row/column) toward `to`, opaque.
///
/// For index `i` in `[0, extent)` the ratio is `i / extent` and each channel is truncated,
/// so the last row stops one step short of `to`.
pub fn linear_gradient(canvas: &mut RgbaImage, from: Rgba8, to: Rgba8, direction: Direction) {
    let (w, h) = canvas.dimensions();
    let extent = match direction {
        Direction::Vertical => h,
        Direction::Horizontal => w,
    };
    for i in 0..extent {
        let t = f64::from(i) / f64::from(extent);
        let c = Rgba8::opaque(
            lerp_trunc(from.r, to.r, t),
            lerp_trunc(from.g, to.g, t),
            lerp_trunc(from.b, to.b, t),
        )
        .to_pixel();
        match direction {
            Direction::Vertical => (0..w).for_each(|x| canvas.put_pixel(x, i, c)),
            Direction::Horizontal => (0..h).for_each(|y| canvas.put_pixel(i, y, c)),
        }
    }
}

/// Bands of `stripe_width` pixels cycling through `colors`.
///
/// `Horizontal` stacks horizontal bands from the top; `Vertical` lays vertical bands from
/// the left. Band `k` uses `colors[k % colors.len()]`.
pub fn stripes(canvas: &mut RgbaImage, colors: &[Rgba8], stripe_width: u32, direction: Direction) {
    if stripe_width == 0 || colors.is_empty() {
        return;
    }
    let (w, h) = canvas.dimensions();
    let sw = i64::from(stripe_width);
    match direction {
        Direction::Horizontal => {
            for (k, y) in (0..h).step_by(stripe_width as usize).enumerate() {
                let y = i64::from(y);
                fill_rect(canvas, 0, y, i64::from(w), y + sw, colors[k % colors.len()]);
            }
        }
        Direction::Vertical => {
            for (k, x) in (0..w).step_by(stripe_width as usize).enumerate() {
                let x = i64::from(x);
                fill_rect(canvas, x, 0, x + sw, i64::from(h), colors[k % colors.len()]);
            }
        }
    }
}

/// Two full-height stripes mirrored about the vertical center line, `gap` pixels apart.
pub fn racing_stripes(canvas: &mut RgbaImage, stripe: Rgba8, stripe_width: u32, gap: u32) {
    let (w, h) = canvas.dimensions();
    let center = i64::from(w / 2);
    let sw = i64::from(stripe_width);
    let half_gap = i64::from(gap / 2);
    let h = i64::from(h);
    fill_rect(canvas, center - sw - half_gap, 0, center - half_gap, h, stripe);
    fill_rect(canvas, center + half_gap, 0, center + sw + half_gap, h, stripe);
}

/// Shades of the diagonal carbon-fiber weave.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Weave {
    pub base: Rgba8,
    /// Falling diagonals (top-left to bottom-right).
    pub light: Rgba8,
    /// Falling diagonals offset by half a step.
    pub dark: Rgba8,
    /// Rising diagonals, drawn over both falling families.
    pub cross: Rgba8,
    pub step: u32,
    pub line_width: u32,
}

impl Default for Weave {
    fn default() -> Self {
        Self {
            base: Rgba8::opaque(30, 30, 30),
            light: Rgba8::opaque(50, 50, 50),
            dark: Rgba8::opaque(20, 20, 20),
            cross: Rgba8::opaque(40, 40, 40),
            step: 8,
            line_width: 2,
        }
    }
}

impl Weave {
    /// Shade of pixel `(x, y)` on a canvas `height` rows tall.
    pub fn shade_at(&self, x: u32, y: u32, height: u32) -> Rgba8 {
        if self.step == 0 {
            return self.base;
        }
        let step = i64::from(self.step);
        let lw = i64::from(self.line_width);
        let (x, y) = (i64::from(x), i64::from(y));

        if (x + y).rem_euclid(step) < lw {
            return self.cross;
        }
        let d = (x - y + i64::from(height)).rem_euclid(step);
        let half = step / 2;
        if d < lw {
            self.light
        } else if d >= half && d < half + lw {
            self.dark
        } else {
            self.base
        }
    }
}

/// Paint the carbon-fiber weave over the whole canvas.
pub fn carbon_weave(canvas: &mut RgbaImage, weave: &Weave) {
    let h = canvas.height();
    for (x, y, p) in canvas.enumerate_pixels_mut() {
        *p = weave.shade_at(x, y, h).to_pixel();
    }
}

/// Which end of a fade band is fully transparent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeDirection {
    /// Transparent at the top of the band, strongest at the bottom.
    #[default]
    Down,
    /// Strongest at the top of the band, transparent at the bottom.
    Up,
}

/// Blend `color` into rows `[floor(start*h), floor(end*h))` with a vertical alpha ramp.
///
/// `start`/`end` are fractions of the canvas height. Row alpha is
/// `round(255 * ratio * strength)` with `ratio = (row - start*h) / ((end - start) * h)`.
pub fn vertical_fade(
    canvas: &mut RgbaImage,
    color: Rgba8,
    start: f64,
    end: f64,
    strength: f64,
    direction: FadeDirection,
) {
    let (w, h) = canvas.dimensions();
    let hf = f64::from(h);
    let from = start * hf;
    let span = hf * band_fraction(start, end);
    if span <= 0.0 {
        return;
    }
    let y0 = from.floor().max(0.0) as u32;
    let y1 = ((end * hf).floor().max(0.0) as u32).min(h);

    for y in y0..y1 {
        let mut ratio = ((f64::from(y) - from) / span).clamp(0.0, 1.0);
        if direction == FadeDirection::Up {
            ratio = 1.0 - ratio;
        }
        let alpha = alpha_from_unit(ratio * strength);
        let src = Rgba8::new(color.r, color.g, color.b, alpha);
        for x in 0..w {
            let dst = Rgba8::from(*canvas.get_pixel(x, y));
            canvas.put_pixel(x, y, over(dst, src).to_pixel());
        }
    }
}

/// Straight-alpha source-over.
pub fn over(dst: Rgba8, src: Rgba8) -> Rgba8 {
    let sa = u32::from(src.a);
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }
    let da = (u32::from(dst.a) * (255 - sa) + 127) / 255;
    let oa = sa + da;
    if oa == 0 {
        return Rgba8::TRANSPARENT;
    }
    let mix = |s: u8, d: u8| ((u32::from(s) * sa + u32::from(d) * da + oa / 2) / oa) as u8;
    Rgba8::new(
        mix(src.r, dst.r),
        mix(src.g, dst.g),
        mix(src.b, dst.b),
        oa as u8,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/paint/pattern.rs"]
mod tests;
