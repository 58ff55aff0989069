use std::path::Path;

use anyhow::Context;
use image::{GrayImage, Luma, RgbaImage};

use crate::foundation::{
    core::{CanvasSize, Rgba8},
    error::{WrapError, WrapResult},
    math::{blend_channel, luma601},
};

/// Panel template: its luminance decides where painted content shows through.
#[derive(Clone, Debug)]
pub struct Template {
    mask: GrayImage,
}

impl Template {
    /// Decode a template image from disk.
    pub fn load(path: impl AsRef<Path>) -> WrapResult<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(WrapError::asset(format!(
                "template '{}' does not exist",
                path.display()
            )));
        }
        let img = image::open(path)
            .with_context(|| format!("decode template '{}'", path.display()))?;
        Ok(Self::from_image(&img.to_rgba8()))
    }

    pub fn from_image(img: &RgbaImage) -> Self {
        Self {
            mask: luminance_mask(img),
        }
    }

    pub fn size(&self) -> CanvasSize {
        let (width, height) = self.mask.dimensions();
        CanvasSize { width, height }
    }

    /// Grayscale paste mask: 0 keeps the white backdrop, 255 shows the painted canvas.
    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }
}

/// Single-channel luma view of an RGBA image (alpha ignored).
pub fn luminance_mask(img: &RgbaImage) -> GrayImage {
    let (w, h) = img.dimensions();
    GrayImage::from_fn(w, h, |x, y| {
        let p = img.get_pixel(x, y);
        Luma([luma601(p[0], p[1], p[2])])
    })
}

/// Alpha channel of an RGBA image as a paste mask.
pub fn alpha_mask(img: &RgbaImage) -> GrayImage {
    let (w, h) = img.dimensions();
    GrayImage::from_fn(w, h, |x, y| Luma([img.get_pixel(x, y)[3]]))
}

/// Paste `src` onto `dst` at `(x, y)`, weighting every channel (alpha included) by `mask`.
///
/// `mask` must match `src` in size. Pixels falling outside `dst` are skipped.
pub fn paste_masked(
    dst: &mut RgbaImage,
    src: &RgbaImage,
    mask: &GrayImage,
    x: i64,
    y: i64,
) -> WrapResult<()> {
    if src.dimensions() != mask.dimensions() {
        return Err(WrapError::render(format!(
            "paste mask is {:?} but source is {:?}",
            mask.dimensions(),
            src.dimensions()
        )));
    }
    let (dw, dh) = dst.dimensions();
    for (sx, sy, s) in src.enumerate_pixels() {
        let dx = x + i64::from(sx);
        let dy = y + i64::from(sy);
        if dx < 0 || dy < 0 || dx >= i64::from(dw) || dy >= i64::from(dh) {
            continue;
        }
        let m = mask.get_pixel(sx, sy)[0];
        if m == 0 {
            continue;
        }
        let d = dst.get_pixel_mut(dx as u32, dy as u32);
        for c in 0..4 {
            d[c] = blend_channel(d[c], s[c], m);
        }
    }
    Ok(())
}

/// Restrict `canvas` to the template's paintable area over an opaque white backdrop.
pub fn composite(canvas: &RgbaImage, template: &Template) -> WrapResult<RgbaImage> {
    let size = template.size();
    if CanvasSize::of(canvas) != size {
        return Err(WrapError::validation(format!(
            "canvas is {}x{} but template is {}x{}",
            canvas.width(),
            canvas.height(),
            size.width,
            size.height
        )));
    }
    let mut out = RgbaImage::from_pixel(size.width, size.height, Rgba8::WHITE.to_pixel());
    paste_masked(&mut out, canvas, template.mask(), 0, 0)?;
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/mask.rs"]
mod tests;
