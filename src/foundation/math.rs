/// Rounded division by 255 of a product of two channel values, as used by masked pastes.
///
/// `a` must not exceed `255 * 255`.
pub(crate) fn div255(a: u32) -> u8 {
    let t = a + 128;
    (((t >> 8) + t) >> 8) as u8
}

/// Blend one channel: `mask = 0` keeps `dst`, `mask = 255` takes `src`.
pub(crate) fn blend_channel(dst: u8, src: u8, mask: u8) -> u8 {
    let m = u32::from(mask);
    div255(u32::from(dst) * (255 - m) + u32::from(src) * m)
}

/// ITU-R 601-2 luma in 16.16 fixed point.
pub(crate) fn luma601(r: u8, g: u8, b: u8) -> u8 {
    ((u32::from(r) * 19595 + u32::from(g) * 38470 + u32::from(b) * 7471 + 0x8000) >> 16) as u8
}

/// Linear interpolation of one channel, truncated toward zero.
pub(crate) fn lerp_trunc(a: u8, b: u8, t: f64) -> u8 {
    let a = f64::from(a);
    let b = f64::from(b);
    (a + (b - a) * t) as u8
}

/// Premultiply one color channel by `alpha`, rounded.
pub(crate) fn premultiply(c: u8, alpha: u8) -> u8 {
    div255(u32::from(c) * u32::from(alpha))
}

/// Undo [`premultiply`]; fully transparent pixels come back black.
pub(crate) fn unpremultiply(c: u8, alpha: u8) -> u8 {
    if alpha == 0 {
        return 0;
    }
    let a = u32::from(alpha);
    ((u32::from(c) * 255 + a / 2) / a).min(255) as u8
}

/// Length of the `[start, end]` fraction band, snapped to 12 decimal places so that
/// `1.0 - 0.7` yields the same double as the literal `0.3`.
pub(crate) fn band_fraction(start: f64, end: f64) -> f64 {
    ((end - start) * 1e12).round() / 1e12
}

/// Alpha for a fraction of full strength, rounded half away from zero.
pub(crate) fn alpha_from_unit(v: f64) -> u8 {
    (255.0 * v).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
