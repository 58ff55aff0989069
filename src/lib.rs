//! wrapgen generates vehicle wrap skins.
//!
//! A skin is an ordered stack of painting layers (solid fills, gradients, stripes, angular
//! polygons, a carbon-fiber weave, fades and sponsor logos). Generation paints the stack
//! onto a canvas the size of a panel template, masks the result through the template's
//! luminance over an opaque white backdrop, and writes a PNG.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: decode logo sheets, crop them and key out their backgrounds ([`AssetStore`])
//! 2. **Paint**: run a [`Paint`] strategy over a fresh transparent canvas ([`render`])
//! 3. **Composite**: paste the canvas onto white through the template mask ([`composite`])
//! 4. **Write**: encode `<output_dir>/<name>.png` ([`generate`])
//!
//! Everything is synchronous and single-threaded; every call owns its canvas.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod foundation;
mod paint;
mod pipeline;

pub use assets::store::{AssetStore, CropRect, LogoSpec, cut_logo};
pub use compose::background::{BackgroundKey, CLEARED, remove_background};
pub use compose::mask::{Template, alpha_mask, composite, luminance_mask, paste_masked};
pub use foundation::core::{CanvasSize, Coord, Direction, Point, Rgba8};
pub use foundation::error::{WrapError, WrapResult};
pub use paint::layer::{Layer, Paint, PaintCtx};
pub use paint::palette::{ColorRef, Palette};
pub use paint::pattern::{
    FadeDirection, Weave, carbon_weave, fill, fill_polygon, fill_rect, linear_gradient, over,
    racing_stripes, stripes, vertical_fade,
};
pub use paint::presets::{
    PresetSet, SHIELD_SHEET, SPONSOR_SHEET, ferrari_skins, ferrari_sponsor_skins, find_preset,
    sample_skins,
};
pub use paint::skin::{SkinSpec, render};
pub use pipeline::{
    Batch, PathOverrides, WrapConfig, compose, ensure_parent_dir, generate, generate_all,
    generate_skin, write_png,
};
