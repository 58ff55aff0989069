use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::{
    core::Rgba8,
    error::{WrapError, WrapResult},
};

/// Immutable table of named colors.
///
/// Built once (usually via [`Palette::standard`]) and passed by reference to painting code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, Rgba8>,
}

impl Palette {
    /// Brand and utility colors used by the built-in presets.
    pub fn standard() -> Self {
        Self::from_entries([
            ("white", Rgba8::WHITE),
            ("black", Rgba8::BLACK),
            ("red", Rgba8::opaque(255, 0, 0)),
            ("blue", Rgba8::opaque(0, 0, 255)),
            ("matte_black", Rgba8::opaque(25, 25, 25)),
            ("carbon", Rgba8::opaque(30, 30, 30)),
            ("ferrari_red", Rgba8::opaque(239, 26, 45)),
            ("ferrari_yellow", Rgba8::opaque(255, 242, 0)),
            ("ferrari_black", Rgba8::opaque(0, 0, 0)),
            ("ferrari_white", Rgba8::opaque(255, 255, 255)),
            ("ferrari_green", Rgba8::opaque(0, 165, 81)),
        ])
    }

    pub fn from_entries<K: Into<String>>(entries: impl IntoIterator<Item = (K, Rgba8)>) -> Self {
        Self {
            entries: entries.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Return a new palette with `extra` entries added; same-named entries are replaced.
    pub fn extended(&self, extra: &BTreeMap<String, Rgba8>) -> Self {
        let mut entries = self.entries.clone();
        entries.extend(extra.iter().map(|(k, v)| (k.clone(), *v)));
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<Rgba8> {
        self.entries.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgba8)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve a color reference; unknown names are a validation error.
    pub fn resolve(&self, color: &ColorRef) -> WrapResult<Rgba8> {
        match color {
            ColorRef::Value(c) => Ok(*c),
            ColorRef::Named(name) => self
                .get(name)
                .ok_or_else(|| WrapError::validation(format!("unknown palette color \"{name}\""))),
        }
    }
}

/// A literal color or the name of a palette entry.
///
/// In JSON, strings starting with `#` are hex literals, other strings are palette names,
/// and arrays are channel bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorRef {
    Value(Rgba8),
    Named(String),
}

impl ColorRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }
}

impl From<Rgba8> for ColorRef {
    fn from(c: Rgba8) -> Self {
        Self::Value(c)
    }
}

impl From<&str> for ColorRef {
    fn from(name: &str) -> Self {
        Self::named(name)
    }
}

impl Serialize for ColorRef {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(c) => c.serialize(serializer),
            Self::Named(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for ColorRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Str(String),
            Arr(Vec<u8>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Str(s) if s.trim_start().starts_with('#') => Rgba8::from_hex(&s)
                .map(Self::Value)
                .map_err(serde::de::Error::custom),
            Repr::Str(s) => Ok(Self::Named(s)),
            Repr::Arr(v) => Rgba8::from_channels(&v)
                .map(Self::Value)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/paint/palette.rs"]
mod tests;
