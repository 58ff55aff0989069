use std::{
    collections::{BTreeMap, HashSet},
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context;
use image::{ImageFormat, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::{
    assets::store::AssetStore,
    compose::mask::{Template, composite},
    foundation::{
        core::Rgba8,
        error::{WrapError, WrapResult},
    },
    paint::{
        layer::{Paint, PaintCtx},
        palette::Palette,
        skin::{SkinSpec, render},
    },
};

/// Where generation reads its inputs and writes its PNGs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WrapConfig {
    pub template_path: PathBuf,
    pub assets_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from("templates/modely-2025-premium/template.png"),
            assets_dir: PathBuf::from("assets"),
            output_dir: PathBuf::from("skins"),
        }
    }
}

impl WrapConfig {
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.png"))
    }
}

/// Optional path overrides carried by a batch file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathOverrides {
    pub template_path: Option<PathBuf>,
    pub assets_dir: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl PathOverrides {
    /// Apply set fields onto `config`; relative paths are taken relative to `base`.
    pub fn apply(&self, config: &mut WrapConfig, base: &Path) {
        let rebase = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                base.join(p)
            }
        };
        if let Some(p) = &self.template_path {
            config.template_path = rebase(p);
        }
        if let Some(p) = &self.assets_dir {
            config.assets_dir = rebase(p);
        }
        if let Some(p) = &self.output_dir {
            config.output_dir = rebase(p);
        }
    }
}

/// A JSON file describing skins to generate.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    #[serde(default)]
    pub paths: PathOverrides,
    /// Extra or overriding palette entries.
    #[serde(default)]
    pub palette: BTreeMap<String, Rgba8>,
    pub skins: Vec<SkinSpec>,
}

impl Batch {
    /// Parse a batch from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WrapResult<Self> {
        serde_json::from_reader(r).map_err(|e| WrapError::serde(format!("parse batch JSON: {e}")))
    }

    /// Parse a batch from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WrapResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open batch '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate every skin and reject duplicate output names.
    pub fn validate(&self, palette: &Palette) -> WrapResult<()> {
        let mut seen = HashSet::new();
        for skin in &self.skins {
            skin.validate(palette)?;
            if !seen.insert(skin.name.as_str()) {
                return Err(WrapError::validation(format!(
                    "skin name \"{}\" appears more than once",
                    skin.name
                )));
            }
        }
        Ok(())
    }
}

/// Paint with `painter` and mask through `template`, without touching the disk.
pub fn compose(
    template: &Template,
    painter: &dyn Paint,
    cx: &PaintCtx<'_>,
) -> WrapResult<RgbaImage> {
    let canvas = render(painter, template.size(), cx)?;
    composite(&canvas, template)
}

/// Load the template, paint, composite and write `<output_dir>/<name>.png`.
#[tracing::instrument(skip(config, painter, cx))]
pub fn generate(
    config: &WrapConfig,
    name: &str,
    painter: &dyn Paint,
    cx: &PaintCtx<'_>,
) -> WrapResult<PathBuf> {
    let template = Template::load(&config.template_path)?;
    let out = compose(&template, painter, cx)?;
    let path = config.output_path(name);
    write_png(&out, &path)?;
    tracing::info!(path = %path.display(), "created skin");
    Ok(path)
}

/// Validate one skin, prepare its logos, and generate it.
pub fn generate_skin(
    config: &WrapConfig,
    palette: &Palette,
    skin: &SkinSpec,
) -> WrapResult<PathBuf> {
    skin.validate(palette)?;
    let assets = AssetStore::prepare(&skin.logos, &config.assets_dir, palette)?;
    let cx = PaintCtx::new(palette, &assets);
    generate(config, &skin.name, skin, &cx)
}

/// Generate skins in order, stopping at the first failure. Files already written stay.
#[tracing::instrument(skip_all, fields(count = skins.len()))]
pub fn generate_all(
    config: &WrapConfig,
    palette: &Palette,
    skins: &[SkinSpec],
) -> WrapResult<Vec<PathBuf>> {
    skins
        .iter()
        .map(|skin| generate_skin(config, palette, skin))
        .collect()
}

/// Encode `img` as PNG, creating parent directories as needed.
pub fn write_png(img: &RgbaImage, path: &Path) -> WrapResult<()> {
    ensure_parent_dir(path)?;
    img.save_with_format(path, ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

pub fn ensure_parent_dir(path: &Path) -> WrapResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
