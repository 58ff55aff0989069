pub(crate) mod layer;
pub(crate) mod palette;
pub(crate) mod pattern;
pub(crate) mod presets;
pub(crate) mod skin;
