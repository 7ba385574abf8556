//! Loading the occurrence catalog from disk.
//!
//! The catalog is plain configuration: a JSON array of occurrences (the
//! shape the landing page ships as `workshops.json`) or a TOML file with
//! `[[occurrences]]` tables. It is read once and never written back.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::occurrence::Occurrence;

#[derive(Debug, Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    occurrences: Vec<Occurrence>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    /// Picks the format from the file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

pub fn load_catalog(path: &Path) -> Result<Vec<Occurrence>> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read occurrence catalog from {}", path.display()))?;
    let occurrences = parse_catalog(&data, CatalogFormat::from_path(path))
        .with_context(|| format!("failed to parse occurrence catalog {}", path.display()))?;

    log::info!(
        "Loaded {} occurrences from {}",
        occurrences.len(),
        path.display()
    );
    Ok(occurrences)
}

pub fn parse_catalog(data: &str, format: CatalogFormat) -> Result<Vec<Occurrence>> {
    let occurrences: Vec<Occurrence> = match format {
        CatalogFormat::Json => serde_json::from_str(data)?,
        CatalogFormat::Toml => toml::from_str::<TomlCatalog>(data)?.occurrences,
    };

    for occurrence in occurrences.iter().filter(|o| o.has_invalid_date()) {
        log::warn!(
            "Occurrence '{}' has an unreadable date {:?}; it will show as coming soon",
            occurrence.title,
            occurrence.date
        );
    }

    Ok(occurrences)
}
