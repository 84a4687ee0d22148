use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Variable de entorno que activa el modo portable.
pub const BASE_DIR_VAR: &str = "ARTISTLY_BASE_DIR";

const CONFIG_FILE: &str = "artistly.toml";

/// Dónde guarda Artistly su configuración.
///
/// Con `ARTISTLY_BASE_DIR` definido se usa `<base>/config/`; si no, el
/// directorio de config estándar del sistema para `com.artistly.artistly`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtistlyPaths {
  pub config_dir: PathBuf,
}

impl ArtistlyPaths {
  pub fn detect() -> Result<Self, ConfigError> {
    Self::resolve(std::env::var_os(BASE_DIR_VAR).map(PathBuf::from))
  }

  /// `base` manda sobre los directorios del sistema.
  pub fn resolve(base: Option<PathBuf>) -> Result<Self, ConfigError> {
    match base {
      Some(base) => Self::at(base),
      None => {
        let dirs = ProjectDirs::from("com", "artistly", "artistly").ok_or(ConfigError::NoProjectDirs)?;
        Self { config_dir: dirs.config_dir().to_path_buf() }.created()
      }
    }
  }

  /// Layout portable bajo `base`.
  pub fn at(base: impl AsRef<Path>) -> Result<Self, ConfigError> {
    let base = base.as_ref();
    Self { config_dir: base.join("config") }.created()
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join(CONFIG_FILE)
  }

  fn created(self) -> Result<Self, ConfigError> {
    std::fs::create_dir_all(&self.config_dir)?;
    Ok(self)
  }
}
