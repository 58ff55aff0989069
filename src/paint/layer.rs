use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::{
    assets::store::AssetStore,
    compose::mask::{alpha_mask, paste_masked},
    foundation::{
        core::{CanvasSize, Coord, Direction, Rgba8},
        error::{WrapError, WrapResult},
    },
    paint::{
        palette::{ColorRef, Palette},
        pattern::{self, FadeDirection, Weave},
    },
};

/// Read-only inputs shared by every painter during one generation call.
#[derive(Clone, Copy, Debug)]
pub struct PaintCtx<'a> {
    pub palette: &'a Palette,
    pub assets: &'a AssetStore,
}

impl<'a> PaintCtx<'a> {
    pub fn new(palette: &'a Palette, assets: &'a AssetStore) -> Self {
        Self { palette, assets }
    }

    pub fn color(&self, c: &ColorRef) -> WrapResult<Rgba8> {
        self.palette.resolve(c)
    }
}

/// Renderer strategy: paints onto a template-sized canvas.
pub trait Paint {
    fn paint(&self, canvas: &mut RgbaImage, cx: &PaintCtx<'_>) -> WrapResult<()>;
}

impl<P: Paint> Paint for [P] {
    fn paint(&self, canvas: &mut RgbaImage, cx: &PaintCtx<'_>) -> WrapResult<()> {
        for p in self {
            p.paint(canvas, cx)?;
        }
        Ok(())
    }
}

/// One painting step of a skin. Layers are applied in order over a transparent canvas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Layer {
    Fill {
        color: ColorRef,
    },
    Gradient {
        from: ColorRef,
        to: ColorRef,
        #[serde(default)]
        direction: Direction,
    },
    Stripes {
        colors: Vec<ColorRef>,
        #[serde(default = "default_stripe_width")]
        stripe_width: u32,
        #[serde(default = "horizontal")]
        direction: Direction,
    },
    /// Base fill plus two stripes mirrored about the vertical center line.
    RacingStripes {
        base: ColorRef,
        stripe: ColorRef,
        #[serde(default = "default_racing_width")]
        stripe_width: u32,
        #[serde(default = "default_racing_gap")]
        gap: u32,
    },
    /// Inclusive rectangle between two corners.
    Rect {
        x0: Coord,
        y0: Coord,
        x1: Coord,
        y1: Coord,
        color: ColorRef,
    },
    Polygon {
        points: Vec<[Coord; 2]>,
        color: ColorRef,
    },
    CarbonWeave,
    /// Vertical alpha ramp over a band of rows, as fractions of the height.
    Fade {
        color: ColorRef,
        start: f64,
        #[serde(default = "one")]
        end: f64,
        #[serde(default = "one")]
        strength: f64,
        #[serde(default)]
        direction: FadeDirection,
    },
    /// A prepared logo resized to `size` and pasted with its own alpha at `(x, y)`.
    Logo {
        logo: String,
        size: [u32; 2],
        x: Coord,
        y: Coord,
    },
}

fn default_stripe_width() -> u32 {
    50
}

fn horizontal() -> Direction {
    Direction::Horizontal
}

fn default_racing_width() -> u32 {
    30
}

fn default_racing_gap() -> u32 {
    10
}

fn one() -> f64 {
    1.0
}

impl Layer {
    pub fn fill(color: impl Into<ColorRef>) -> Self {
        Self::Fill {
            color: color.into(),
        }
    }

    pub fn gradient(from: impl Into<ColorRef>, to: impl Into<ColorRef>, direction: Direction) -> Self {
        Self::Gradient {
            from: from.into(),
            to: to.into(),
            direction,
        }
    }

    pub fn rect(x0: Coord, y0: Coord, x1: Coord, y1: Coord, color: impl Into<ColorRef>) -> Self {
        Self::Rect {
            x0,
            y0,
            x1,
            y1,
            color: color.into(),
        }
    }

    /// Full-width horizontal band from `y0` to `y1` (inclusive).
    pub fn band(y0: Coord, y1: Coord, color: impl Into<ColorRef>) -> Self {
        Self::rect(Coord::px(0.0), y0, Coord::end(), y1, color)
    }

    /// Polygon from fractional `(x, y)` vertices.
    pub fn polygon(points: &[(f64, f64)], color: impl Into<ColorRef>) -> Self {
        Self::Polygon {
            points: points
                .iter()
                .map(|&(x, y)| [Coord::frac(x), Coord::frac(y)])
                .collect(),
            color: color.into(),
        }
    }

    pub fn fade(color: impl Into<ColorRef>, start: f64, strength: f64) -> Self {
        Self::Fade {
            color: color.into(),
            start,
            end: 1.0,
            strength,
            direction: FadeDirection::Down,
        }
    }

    pub fn logo(name: impl Into<String>, size: [u32; 2], x: Coord, y: Coord) -> Self {
        Self::Logo {
            logo: name.into(),
            size,
            x,
            y,
        }
    }

    /// Every palette reference this layer uses.
    pub(crate) fn colors(&self) -> Vec<&ColorRef> {
        match self {
            Self::Fill { color }
            | Self::Rect { color, .. }
            | Self::Polygon { color, .. }
            | Self::Fade { color, .. } => vec![color],
            Self::Gradient { from, to, .. } => vec![from, to],
            Self::Stripes { colors, .. } => colors.iter().collect(),
            Self::RacingStripes { base, stripe, .. } => vec![base, stripe],
            Self::CarbonWeave | Self::Logo { .. } => Vec::new(),
        }
    }
}

impl Paint for Layer {
    fn paint(&self, canvas: &mut RgbaImage, cx: &PaintCtx<'_>) -> WrapResult<()> {
        let size = CanvasSize::of(canvas);
        match self {
            Self::Fill { color } => pattern::fill(canvas, cx.color(color)?),
            Self::Gradient {
                from,
                to,
                direction,
            } => pattern::linear_gradient(canvas, cx.color(from)?, cx.color(to)?, *direction),
            Self::Stripes {
                colors,
                stripe_width,
                direction,
            } => {
                let colors = colors
                    .iter()
                    .map(|c| cx.color(c))
                    .collect::<WrapResult<Vec<_>>>()?;
                pattern::stripes(canvas, &colors, *stripe_width, *direction);
            }
            Self::RacingStripes {
                base,
                stripe,
                stripe_width,
                gap,
            } => {
                pattern::fill(canvas, cx.color(base)?);
                pattern::racing_stripes(canvas, cx.color(stripe)?, *stripe_width, *gap);
            }
            Self::Rect {
                x0,
                y0,
                x1,
                y1,
                color,
            } => pattern::fill_rect(
                canvas,
                x0.resolve_px(size.width),
                y0.resolve_px(size.height),
                x1.resolve_px(size.width),
                y1.resolve_px(size.height),
                cx.color(color)?,
            ),
            Self::Polygon { points, color } => {
                let points: Vec<_> = points.iter().map(|[x, y]| size.point(*x, *y)).collect();
                pattern::fill_polygon(canvas, &points, cx.color(color)?);
            }
            Self::CarbonWeave => pattern::carbon_weave(canvas, &Weave::default()),
            Self::Fade {
                color,
                start,
                end,
                strength,
                direction,
            } => pattern::vertical_fade(canvas, cx.color(color)?, *start, *end, *strength, *direction),
            Self::Logo {
                logo,
                size: [w, h],
                x,
                y,
            } => {
                if *w == 0 || *h == 0 {
                    return Err(WrapError::validation(format!(
                        "logo \"{logo}\" has an empty target size"
                    )));
                }
                let img = cx.assets.logo_resized(logo, *w, *h)?;
                let mask = alpha_mask(&img);
                paste_masked(
                    canvas,
                    &img,
                    &mask,
                    x.resolve_px(size.width),
                    y.resolve_px(size.height),
                )?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/layer.rs"]
mod tests;
