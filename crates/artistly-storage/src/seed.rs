use std::path::{Path, PathBuf};

use artistly_core::domain::artist::Artist;
use artistly_core::domain::booking::BookingRequest;
use artistly_core::domain::category::Category;
use artistly_core::domain::fee_range::FeeRange;
use artistly_core::ports::CatalogFacets;
use serde::Deserialize;
use thiserror::Error;

const BUILTIN_SEED: &str = include_str!("../data/seed.json");

#[derive(Debug, Error)]
pub enum StorageError {
  #[error("cannot read seed file {path:?}: {source}")]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid seed data: {0}")]
  Json(#[from] serde_json::Error),

  #[error("config error: {0}")]
  Config(#[from] artistly_config::ConfigError),
}

/// Datos de ejemplo con los que arrancan los adapters en memoria.
///
/// El formato es el JSON de `data/seed.json` (claves en camelCase).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeedData {
  pub categories: Vec<Category>,
  pub artists: Vec<Artist>,
  #[serde(default)]
  pub booking_requests: Vec<BookingRequest>,
  #[serde(default)]
  pub locations: Vec<String>,
  #[serde(default = "default_fee_ranges")]
  pub fee_ranges: Vec<String>,
  #[serde(default)]
  pub languages: Vec<String>,
}

fn default_fee_ranges() -> Vec<String> {
  FeeRange::ALL.iter().map(|r| r.label().to_string()).collect()
}

impl SeedData {
  /// Semilla integrada en el binario.
  pub fn builtin() -> Result<Self, StorageError> {
    Self::from_json(BUILTIN_SEED)
  }

  pub fn from_json(json: &str) -> Result<Self, StorageError> {
    Ok(serde_json::from_str(json)?)
  }

  pub fn from_file(path: &Path) -> Result<Self, StorageError> {
    let json = std::fs::read_to_string(path)
      .map_err(|source| StorageError::Io { path: path.to_path_buf(), source })?;
    Self::from_json(&json)
  }

  /// `from_file` si hay ruta, la semilla integrada si no.
  pub fn load(path: Option<&Path>) -> Result<Self, StorageError> {
    match path {
      Some(p) => Self::from_file(p),
      None => Self::builtin(),
    }
  }

  pub fn facets(&self) -> CatalogFacets {
    CatalogFacets {
      categories: self.categories.iter().map(|c| c.name.clone()).collect(),
      locations: self.locations.clone(),
      fee_ranges: self.fee_ranges.clone(),
      languages: self.languages.clone(),
    }
  }
}
