use artistly_config::{ConfigBackend, ConfigError, TomlConfigBackend};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Sección `[storage]`: de dónde salen los datos de ejemplo.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct StorageConfig {
  /// Fichero JSON que sustituye a la semilla integrada. Sin valor se usan
  /// los datos de ejemplo que vienen con el binario.
  pub seed_path: Option<PathBuf>,
}

impl StorageConfig {
  /// Lee la sección de `backend` y deja los valores por defecto escritos.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("storage")?;
    backend.save_section("storage", &cfg)?;
    Ok(cfg)
  }
}

/// Sección `[simulation]`: latencias artificiales de los adapters.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
  /// Espera antes de aplicar un cambio de estado de una solicitud.
  #[serde(default = "default_transition_delay_ms")]
  pub transition_delay_ms: u64,

  /// Espera antes de aceptar un perfil de artista.
  #[serde(default = "default_submission_delay_ms")]
  pub submission_delay_ms: u64,
}

fn default_transition_delay_ms() -> u64 {
  1000
}

fn default_submission_delay_ms() -> u64 {
  2000
}

impl Default for SimulationConfig {
  fn default() -> Self {
    SimulationConfig {
      transition_delay_ms: default_transition_delay_ms(),
      submission_delay_ms: default_submission_delay_ms(),
    }
  }
}

impl SimulationConfig {
  /// Sin latencia (tests, scripts).
  pub fn instant() -> Self {
    SimulationConfig { transition_delay_ms: 0, submission_delay_ms: 0 }
  }

  pub fn transition_delay(&self) -> Duration {
    Duration::from_millis(self.transition_delay_ms)
  }

  pub fn submission_delay(&self) -> Duration {
    Duration::from_millis(self.submission_delay_ms)
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("simulation")?;
    backend.save_section("simulation", &cfg)?;
    Ok(cfg)
  }
}
