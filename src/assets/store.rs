use std::{
    collections::{BTreeMap, HashMap},
    path::Path,
};

use anyhow::Context;
use image::{RgbaImage, imageops::FilterType};
use serde::{Deserialize, Serialize};

use crate::{
    compose::background::{BackgroundKey, remove_background},
    foundation::{
        error::{WrapError, WrapResult},
        math::{premultiply, unpremultiply},
    },
    paint::palette::Palette,
};

/// Fractional crop rectangle within a sheet image (`0..=1` on both axes).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CropRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Default for CropRect {
    fn default() -> Self {
        Self::FULL
    }
}

impl CropRect {
    pub const FULL: Self = Self::new(0.0, 0.0, 1.0, 1.0);

    pub const fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Pixel bounds `(x, y, w, h)` inside a `width` x `height` sheet, truncating each edge.
    fn pixel_bounds(self, width: u32, height: u32) -> WrapResult<(u32, u32, u32, u32)> {
        let edge = |f: f64, extent: u32| (f.clamp(0.0, 1.0) * f64::from(extent)).floor() as u32;
        let (x0, x1) = (edge(self.left, width), edge(self.right, width));
        let (y0, y1) = (edge(self.top, height), edge(self.bottom, height));
        if x1 <= x0 || y1 <= y0 {
            return Err(WrapError::validation(format!(
                "crop {self:?} is empty on a {width}x{height} sheet"
            )));
        }
        Ok((x0, y0, x1 - x0, y1 - y0))
    }
}

/// A logo cut out of a sheet image in the asset directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogoSpec {
    /// Sheet file name, relative to the asset directory.
    pub sheet: String,
    #[serde(default)]
    pub crop: CropRect,
    /// Background keys removed in order.
    #[serde(default)]
    pub remove: Vec<BackgroundKey>,
}

impl LogoSpec {
    pub fn new(sheet: impl Into<String>) -> Self {
        Self {
            sheet: sheet.into(),
            crop: CropRect::FULL,
            remove: Vec::new(),
        }
    }

    pub fn crop(mut self, crop: CropRect) -> Self {
        self.crop = crop;
        self
    }

    pub fn remove(mut self, key: BackgroundKey) -> Self {
        self.remove.push(key);
        self
    }
}

/// Logo cutouts decoded and keyed ahead of painting, so painting never touches the disk.
#[derive(Clone, Debug, Default)]
pub struct AssetStore {
    logos: HashMap<String, RgbaImage>,
}

impl AssetStore {
    /// Store with no logos, for skins that reference none.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every sheet referenced by `logos` from `assets_dir` (each file at most once),
    /// crop it and remove its keyed backgrounds.
    #[tracing::instrument(skip(logos, palette), fields(count = logos.len()))]
    pub fn prepare(
        logos: &BTreeMap<String, LogoSpec>,
        assets_dir: &Path,
        palette: &Palette,
    ) -> WrapResult<Self> {
        let mut sheets: HashMap<&str, RgbaImage> = HashMap::new();
        let mut out = HashMap::with_capacity(logos.len());

        for (name, spec) in logos {
            if !sheets.contains_key(spec.sheet.as_str()) {
                let sheet = load_sheet(&assets_dir.join(&spec.sheet))?;
                sheets.insert(spec.sheet.as_str(), sheet);
            }
            let sheet = &sheets[spec.sheet.as_str()];
            let cutout = cut_logo(sheet, spec, palette)
                .map_err(|e| WrapError::asset(format!("logo \"{name}\": {e}")))?;
            tracing::debug!(
                logo = %name,
                width = cutout.width(),
                height = cutout.height(),
                "prepared logo"
            );
            out.insert(name.clone(), cutout);
        }
        Ok(Self { logos: out })
    }

    pub fn insert(&mut self, name: impl Into<String>, cutout: RgbaImage) {
        self.logos.insert(name.into(), cutout);
    }

    pub fn logo(&self, name: &str) -> Option<&RgbaImage> {
        self.logos.get(name)
    }

    /// The named cutout resized to `width` x `height` with Lanczos3 resampling.
    ///
    /// Resampling runs on premultiplied color so keyed-out pixels do not bleed into edges.
    pub fn logo_resized(&self, name: &str, width: u32, height: u32) -> WrapResult<RgbaImage> {
        let logo = self
            .logo(name)
            .ok_or_else(|| WrapError::validation(format!("unknown logo \"{name}\"")))?;
        if logo.dimensions() == (width, height) {
            return Ok(logo.clone());
        }
        let mut premul = logo.clone();
        for p in premul.pixels_mut() {
            let a = p[3];
            for c in 0..3 {
                p[c] = premultiply(p[c], a);
            }
        }
        let mut out = image::imageops::resize(&premul, width, height, FilterType::Lanczos3);
        for p in out.pixels_mut() {
            let a = p[3];
            for c in 0..3 {
                p[c] = unpremultiply(p[c], a);
            }
        }
        Ok(out)
    }
}

fn load_sheet(path: &Path) -> WrapResult<RgbaImage> {
    if !path.is_file() {
        return Err(WrapError::asset(format!(
            "logo sheet '{}' does not exist",
            path.display()
        )));
    }
    let img =
        image::open(path).with_context(|| format!("decode logo sheet '{}'", path.display()))?;
    Ok(img.to_rgba8())
}

/// Crop a sheet and key out the logo's backgrounds in order.
pub fn cut_logo(sheet: &RgbaImage, spec: &LogoSpec, palette: &Palette) -> WrapResult<RgbaImage> {
    let (x, y, w, h) = spec.crop.pixel_bounds(sheet.width(), sheet.height())?;
    let mut cutout = image::imageops::crop_imm(sheet, x, y, w, h).to_image();
    for key in &spec.remove {
        let color = palette.resolve(&key.color)?;
        remove_background(&mut cutout, color, key.threshold);
    }
    Ok(cutout)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
