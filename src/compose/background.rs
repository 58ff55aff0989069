use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::{
    foundation::core::Rgba8,
    paint::palette::ColorRef,
};

/// Replacement for keyed-out pixels.
pub const CLEARED: Rgba8 = Rgba8::new(255, 255, 255, 0);

/// A background color to key out of a logo sheet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundKey {
    pub color: ColorRef,
    /// Exclusive per-channel distance bound.
    pub threshold: u16,
}

impl BackgroundKey {
    pub fn new(color: impl Into<ColorRef>, threshold: u16) -> Self {
        Self {
            color: color.into(),
            threshold,
        }
    }
}

/// Make every pixel whose R, G and B are each within `threshold` (exclusive) of `key`
/// fully transparent white. Other pixels, alpha included, are left alone.
///
/// Returns the number of pixels cleared by this pass.
pub fn remove_background(img: &mut RgbaImage, key: Rgba8, threshold: u16) -> usize {
    let cleared = CLEARED.to_pixel();
    let near = |a: u8, b: u8| (i32::from(a) - i32::from(b)).unsigned_abs() < u32::from(threshold);
    let mut n = 0;
    for p in img.pixels_mut() {
        if near(p[0], key.r) && near(p[1], key.g) && near(p[2], key.b) {
            if *p != cleared {
                n += 1;
            }
            *p = cleared;
        }
    }
    n
}

#[cfg(test)]
#[path = "../../tests/unit/compose/background.rs"]
mod tests;
