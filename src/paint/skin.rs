use std::collections::BTreeMap;

use image::RgbaImage;
use serde::{Deserialize, Serialize};

use crate::{
    assets::store::LogoSpec,
    foundation::{
        core::CanvasSize,
        error::{WrapError, WrapResult},
    },
    paint::{
        layer::{Layer, Paint, PaintCtx},
        palette::Palette,
    },
};

/// A named wrap design: logo cutouts plus an ordered layer stack.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkinSpec {
    /// Output file stem.
    pub name: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub logos: BTreeMap<String, LogoSpec>,
    pub layers: Vec<Layer>,
}

impl SkinSpec {
    pub fn new(name: impl Into<String>, layers: Vec<Layer>) -> Self {
        Self {
            name: name.into(),
            logos: BTreeMap::new(),
            layers,
        }
    }

    pub fn with_logo(mut self, name: impl Into<String>, logo: LogoSpec) -> Self {
        self.logos.insert(name.into(), logo);
        self
    }

    /// Check names, palette references and logo references before any IO happens.
    pub fn validate(&self, palette: &Palette) -> WrapResult<()> {
        if self.name.trim().is_empty() {
            return Err(WrapError::validation("skin name must not be empty"));
        }
        if self.name.contains(['/', '\\']) || self.name == "." || self.name == ".." {
            return Err(WrapError::validation(format!(
                "skin name \"{}\" must be a plain file stem",
                self.name
            )));
        }
        for layer in &self.layers {
            for c in layer.colors() {
                palette
                    .resolve(c)
                    .map_err(|e| WrapError::validation(format!("skin \"{}\": {e}", self.name)))?;
            }
            if let Layer::Logo { logo, .. } = layer
                && !self.logos.contains_key(logo)
            {
                return Err(WrapError::validation(format!(
                    "skin \"{}\" places undefined logo \"{logo}\"",
                    self.name
                )));
            }
        }
        for (name, logo) in &self.logos {
            for key in &logo.remove {
                palette.resolve(&key.color).map_err(|e| {
                    WrapError::validation(format!("skin \"{}\" logo \"{name}\": {e}", self.name))
                })?;
            }
        }
        Ok(())
    }
}

impl Paint for SkinSpec {
    fn paint(&self, canvas: &mut RgbaImage, cx: &PaintCtx<'_>) -> WrapResult<()> {
        self.layers.as_slice().paint(canvas, cx)
    }
}

/// Paint onto a fresh transparent canvas of `size`.
pub fn render(painter: &dyn Paint, size: CanvasSize, cx: &PaintCtx<'_>) -> WrapResult<RgbaImage> {
    if size.width == 0 || size.height == 0 {
        return Err(WrapError::render("canvas must not be empty"));
    }
    let mut canvas = RgbaImage::new(size.width, size.height);
    painter.paint(&mut canvas, cx)?;
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/paint/skin.rs"]
mod tests;
