//! Built-in skin recipes.
//!
//! Geometry is kept exactly as designed: fractional anchors are expressed with
//! [`Coord::frac`], pixel offsets from a fractional anchor with [`Coord::new`].

use crate::{
    assets::store::{CropRect, LogoSpec},
    compose::background::BackgroundKey,
    foundation::core::{Coord, Direction, Rgba8},
    paint::{layer::Layer, skin::SkinSpec},
};

/// Named groups of built-in skins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetSet {
    /// Solid, gradient, stripe and weave samples.
    Samples,
    /// Ferrari liveries without logos.
    Ferrari,
    /// Ferrari liveries with sponsor logos (needs the logo sheets).
    FerrariSponsors,
}

impl PresetSet {
    pub const ALL: [Self; 3] = [Self::Samples, Self::Ferrari, Self::FerrariSponsors];

    pub fn name(self) -> &'static str {
        match self {
            Self::Samples => "samples",
            Self::Ferrari => "ferrari",
            Self::FerrariSponsors => "ferrari-sponsors",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    pub fn skins(self) -> Vec<SkinSpec> {
        match self {
            Self::Samples => sample_skins(),
            Self::Ferrari => ferrari_skins(),
            Self::FerrariSponsors => ferrari_sponsor_skins(),
        }
    }
}

/// Look a built-in skin up by its output name.
pub fn find_preset(name: &str) -> Option<SkinSpec> {
    PresetSet::ALL
        .into_iter()
        .flat_map(PresetSet::skins)
        .find(|s| s.name == name)
}

pub fn sample_skins() -> Vec<SkinSpec> {
    vec![
        SkinSpec::new("matte_black", vec![Layer::fill("matte_black")]),
        SkinSpec::new("carbon_fiber", vec![Layer::CarbonWeave]),
        SkinSpec::new(
            "blue_purple_gradient",
            vec![Layer::gradient(
                Rgba8::opaque(0, 100, 200),
                Rgba8::opaque(100, 0, 150),
                Direction::Vertical,
            )],
        ),
        SkinSpec::new(
            "red_fade",
            vec![Layer::gradient(
                Rgba8::opaque(200, 50, 50),
                Rgba8::opaque(50, 50, 50),
                Direction::Vertical,
            )],
        ),
        SkinSpec::new(
            "usa_stripes",
            vec![Layer::Stripes {
                colors: vec!["red".into(), "white".into(), "blue".into()],
                stripe_width: 60,
                direction: Direction::Horizontal,
            }],
        ),
        racing("racing_stripes_white", "carbon", "white"),
        racing("racing_stripes_red", "white", "red"),
    ]
}

fn racing(name: &str, base: &str, stripe: &str) -> SkinSpec {
    SkinSpec::new(
        name,
        vec![Layer::RacingStripes {
            base: base.into(),
            stripe: stripe.into(),
            stripe_width: 30,
            gap: 10,
        }],
    )
}

/// Offset from the horizontal center, in pixels.
fn from_center(px: f64) -> Coord {
    Coord::new(0.5, px)
}

fn full_height_rect(x0: Coord, x1: Coord, color: &str) -> Layer {
    Layer::rect(x0, Coord::px(0.0), x1, Coord::end(), color)
}

pub fn ferrari_skins() -> Vec<SkinSpec> {
    vec![ferrari_classic(), ferrari_modern(), ferrari_racing(), ferrari_gradient()]
}

fn ferrari_classic() -> SkinSpec {
    const STRIPE: f64 = 15.0;
    let at = |px: f64| Coord::new(0.15, px);

    SkinSpec::new(
        "Ferrari_F1_Classic",
        vec![
            Layer::fill("ferrari_red"),
            Layer::fade("ferrari_black", 0.7, 0.8),
            // tricolore band
            Layer::band(at(0.0), at(STRIPE), "ferrari_green"),
            Layer::band(at(STRIPE), at(STRIPE * 2.0), "ferrari_white"),
            Layer::band(at(STRIPE * 2.0), at(STRIPE * 3.0), "ferrari_red"),
            Layer::band(at(-3.0), at(0.0), "ferrari_yellow"),
            Layer::band(at(STRIPE * 3.0), at(STRIPE * 3.0 + 3.0), "ferrari_yellow"),
        ],
    )
}

fn ferrari_modern() -> SkinSpec {
    let f = Coord::frac;
    SkinSpec::new(
        "Ferrari_F1_Modern",
        vec![
            Layer::fill("ferrari_red"),
            Layer::polygon(
                &[(0.0, 0.3), (0.35, 0.4), (0.35, 0.8), (0.0, 0.9)],
                "ferrari_black",
            ),
            Layer::polygon(
                &[(1.0, 0.3), (0.65, 0.4), (0.65, 0.8), (1.0, 0.9)],
                "ferrari_black",
            ),
            // number panel
            Layer::rect(f(0.4), f(0.35), f(0.6), f(0.55), "ferrari_yellow"),
            Layer::rect(f(0.42), f(0.37), f(0.58), f(0.53), "ferrari_red"),
            Layer::band(f(0.85), Coord::end(), "ferrari_black"),
        ],
    )
}

fn ferrari_racing() -> SkinSpec {
    const W: f64 = 25.0;
    const GAP: f64 = 8.0;
    let c = from_center;

    SkinSpec::new(
        "Ferrari_F1_Racing",
        vec![
            Layer::fill("ferrari_red"),
            full_height_rect(c(-W * 2.0 - GAP * 1.5), c(-W - GAP * 1.5), "ferrari_yellow"),
            full_height_rect(c(W + GAP * 1.5), c(W * 2.0 + GAP * 1.5), "ferrari_yellow"),
            full_height_rect(c(-W - GAP * 0.5), c(-GAP * 0.5), "ferrari_black"),
            full_height_rect(c(GAP * 0.5), c(W + GAP * 0.5), "ferrari_black"),
        ],
    )
}

fn ferrari_gradient() -> SkinSpec {
    SkinSpec::new(
        "Ferrari_F1_Gradient",
        vec![
            Layer::gradient("ferrari_red", Rgba8::opaque(30, 5, 8), Direction::Vertical),
            Layer::band(Coord::frac(0.45), Coord::frac(0.47), "ferrari_yellow"),
        ],
    )
}

pub const SPONSOR_SHEET: &str = "sponsors.jpg";
pub const SHIELD_SHEET: &str = "ferrari_shield.jpg";

const PURE_RED: Rgba8 = Rgba8::opaque(255, 0, 0);
const BRAND_RED: Rgba8 = Rgba8::opaque(239, 26, 45);

/// Sponsor sheet halves with the red backdrop keyed out, in the given key order.
fn sponsor_logo(crop: CropRect, keys: [Rgba8; 2]) -> LogoSpec {
    keys.into_iter().fold(
        LogoSpec::new(SPONSOR_SHEET).crop(crop),
        |spec, k| spec.remove(BackgroundKey::new(k, 80)),
    )
}

fn shield_logo() -> LogoSpec {
    LogoSpec::new(SHIELD_SHEET).remove(BackgroundKey::new(Rgba8::WHITE, 40))
}

const LEFT_HALF: CropRect = CropRect::new(0.0, 0.0, 0.5, 1.0);
const RIGHT_HALF: CropRect = CropRect::new(0.5, 0.0, 1.0, 1.0);

pub fn ferrari_sponsor_skins() -> Vec<SkinSpec> {
    vec![ferrari_sponsored(), ferrari_sponsored_v2()]
}

fn ferrari_sponsored() -> SkinSpec {
    let f = Coord::frac;
    let keys = [BRAND_RED, PURE_RED];

    SkinSpec::new(
        "Ferrari_F1_Sponsored",
        vec![
            Layer::fill("ferrari_red"),
            Layer::fade("ferrari_black", 0.75, 200.0 / 255.0),
            Layer::band(f(0.42), f(0.44), "ferrari_yellow"),
            Layer::logo("shield", [80, 100], from_center(-40.0), f(0.05)),
            Layer::logo("shell", [70, 70], f(0.08), f(0.5)),
            Layer::logo("shell", [70, 70], f(0.82), f(0.5)),
            Layer::logo("vodafone", [90, 60], from_center(-45.0), f(0.82)),
            Layer::logo("shell", [50, 50], f(0.45), f(0.25)),
        ],
    )
    .with_logo("shield", shield_logo())
    .with_logo("shell", sponsor_logo(RIGHT_HALF, keys))
    .with_logo("vodafone", sponsor_logo(LEFT_HALF, keys))
}

fn ferrari_sponsored_v2() -> SkinSpec {
    let f = Coord::frac;
    let keys = [PURE_RED, BRAND_RED];

    SkinSpec::new(
        "Ferrari_F1_Sponsored_v2",
        vec![
            Layer::fill("ferrari_red"),
            Layer::polygon(
                &[(0.0, 0.35), (0.3, 0.45), (0.3, 0.85), (0.0, 0.95)],
                "ferrari_black",
            ),
            Layer::polygon(
                &[(1.0, 0.35), (0.7, 0.45), (0.7, 0.85), (1.0, 0.95)],
                "ferrari_black",
            ),
            full_height_rect(f(0.47), f(0.53), "ferrari_yellow"),
            Layer::logo("shield", [100, 120], from_center(-50.0), f(0.02)),
            Layer::logo("shell", [60, 60], f(0.05), f(0.55)),
            Layer::logo("shell", [60, 60], f(0.85), f(0.55)),
            Layer::logo("vodafone", [80, 55], from_center(-40.0), f(0.88)),
        ],
    )
    .with_logo("shield", shield_logo())
    .with_logo("shell", sponsor_logo(RIGHT_HALF, keys))
    .with_logo("vodafone", sponsor_logo(LEFT_HALF, keys))
}

#[cfg(test)]
#[path = "../../tests/unit/paint/presets.rs"]
mod tests;
