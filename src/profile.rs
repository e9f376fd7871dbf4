//! Surface profiles
//!
//! A profile bundles the surface settings that are not part of the SVG
//! document itself: the plot title, the background color, the pen speed
//! hint for interactive backends, and the requested sampling precision.
//! Profiles load from TOML files so the same document can be replayed
//! with different surface setups.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::document::DEFAULT_PRECISION;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse profile TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Surface settings for one conversion run
#[derive(Debug, Clone)]
pub struct Profile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Title shown by interactive surfaces / emitted in script headers
    pub title: String,
    /// Surface background color
    pub background: String,
    /// Pen speed hint (interactive backends only)
    pub speed: String,
    /// Requested sampling precision; the extractor still applies its clamp
    pub precision: f64,
}

/// TOML structure for deserializing profiles
#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    surface: Option<TomlSurface>,
    sampling: Option<TomlSampling>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlSurface {
    title: Option<String>,
    background: Option<String>,
    speed: Option<String>,
}

#[derive(Deserialize, Default)]
struct TomlSampling {
    precision: Option<f64>,
}

/// Default profile - the surface setup the converter was written against
const DEFAULT_PROFILE: &str = r##"
[surface]
title = "Tomortec"
background = "#315a78"
speed = "fastest"

[sampling]
precision = 0.001
"##;

impl Profile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string. Missing fields fall back to the
    /// default profile's values.
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;
        let surface = parsed.surface.unwrap_or_default();
        let sampling = parsed.sampling.unwrap_or_default();

        Ok(Profile {
            name: parsed.metadata.and_then(|m| m.name),
            title: surface.title.unwrap_or_else(|| "Tomortec".to_string()),
            background: surface
                .background
                .unwrap_or_else(|| "#315a78".to_string()),
            speed: surface.speed.unwrap_or_else(|| "fastest".to_string()),
            precision: sampling.precision.unwrap_or(DEFAULT_PRECISION),
        })
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::from_str(DEFAULT_PROFILE).expect("Default profile should be valid TOML")
    }
}
