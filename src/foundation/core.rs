use serde::{Deserialize, Serialize};

pub use kurbo::Point;

/// Straight (non-premultiplied) RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self::opaque(255, 255, 255);
    pub const BLACK: Self = Self::opaque(0, 0, 0);
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn to_pixel(self) -> image::Rgba<u8> {
        image::Rgba(self.to_array())
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        fn hex_byte(pair: &str) -> Result<u8, String> {
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
        }

        if !s.is_ascii() {
            return Err("hex color must be ascii".to_owned());
        }
        match s.len() {
            6 => Ok(Self::opaque(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
            )),
            8 => Ok(Self::new(
                hex_byte(&s[0..2])?,
                hex_byte(&s[2..4])?,
                hex_byte(&s[4..6])?,
                hex_byte(&s[6..8])?,
            )),
            _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
        }
    }

    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!(
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }

    pub(crate) fn from_channels(v: &[u8]) -> Result<Self, String> {
        match *v {
            [r, g, b] => Ok(Self::opaque(r, g, b)),
            [r, g, b, a] => Ok(Self::new(r, g, b, a)),
            _ => Err("rgba array must have len 3 ([r,g,b]) or 4 ([r,g,b,a])".to_owned()),
        }
    }
}

impl From<[u8; 4]> for Rgba8 {
    fn from(v: [u8; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(p: image::Rgba<u8>) -> Self {
        Self::from(p.0)
    }
}

impl Serialize for Rgba8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgba8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Hex(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Hex(s) => Self::from_hex(&s).map_err(serde::de::Error::custom),
            Repr::Arr(v) => Self::from_channels(&v).map_err(serde::de::Error::custom),
        }
    }
}

/// Position along one canvas axis: `frac * extent + px`.
///
/// Bare JSON numbers are absolute pixels; `{ "frac": 0.15, "px": 3 }` is relative to the
/// axis extent (width for x, height for y).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Coord {
    pub frac: f64,
    pub px: f64,
}

impl Coord {
    pub const fn new(frac: f64, px: f64) -> Self {
        Self { frac, px }
    }

    pub const fn px(px: f64) -> Self {
        Self::new(0.0, px)
    }

    pub const fn frac(frac: f64) -> Self {
        Self::new(frac, 0.0)
    }

    /// The far edge of the axis (`frac = 1`).
    pub const fn end() -> Self {
        Self::frac(1.0)
    }

    /// Exact position, used for polygon vertices.
    pub fn resolve(self, extent: u32) -> f64 {
        self.frac * f64::from(extent) + self.px
    }

    /// Integer pixel position: the relative part is truncated before the offset is added,
    /// then the sum is truncated again.
    pub fn resolve_px(self, extent: u32) -> i64 {
        ((self.frac * f64::from(extent)).floor() + self.px).floor() as i64
    }
}

impl<'de> Deserialize<'de> for Coord {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Px(f64),
            Rel {
                frac: f64,
                #[serde(default)]
                px: f64,
            },
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Px(px) => Self::px(px),
            Repr::Rel { frac, px } => Self::new(frac, px),
        })
    }
}

/// Orientation of a gradient ramp or a stripe band.
///
/// `Vertical` gradients change color from top to bottom; `Horizontal` stripes are
/// horizontal bands stacked from the top. The other variant swaps axes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

/// Width and height of a canvas in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn of(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self { width, height }
    }

    /// Resolve an `(x, y)` coordinate pair to exact canvas space.
    pub fn point(self, x: Coord, y: Coord) -> Point {
        Point::new(x.resolve(self.width), y.resolve(self.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
