use artistly_config::{ConfigBackend, ConfigError, TomlConfigBackend};
use artistly_core::services::TransitionPolicy;
use artistly_storage::{SimulationConfig, StorageConfig};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Sección `[triage]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TriageConfig {
  /// Con `true` solo se aprueban o rechazan solicitudes pendientes.
  #[serde(default = "default_enforce_pending_only")]
  pub enforce_pending_only: bool,
}

fn default_enforce_pending_only() -> bool {
  true
}

impl Default for TriageConfig {
  fn default() -> Self {
    TriageConfig { enforce_pending_only: default_enforce_pending_only() }
  }
}

impl TriageConfig {
  pub fn policy(&self) -> TransitionPolicy {
    if self.enforce_pending_only { TransitionPolicy::PendingOnly } else { TransitionPolicy::Permissive }
  }

  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let cfg = backend.load_section_with_default("triage")?;
    backend.save_section("triage", &cfg)?;
    Ok(cfg)
  }
}

/// Vista plana de todas las secciones, tal y como la ve quien llama a los
/// comandos.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDto {
  pub seed_path: Option<String>,
  pub transition_delay_ms: u64,
  pub submission_delay_ms: u64,
  pub enforce_pending_only: bool,
}

impl SettingsDto {
  /// Igual que el `load_from` de cada sección: lo que falte se escribe con
  /// su valor por defecto.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let storage = StorageConfig::load_from(backend)?;
    let simulation = SimulationConfig::load_from(backend)?;
    let triage = TriageConfig::load_from(backend)?;
    Ok(SettingsDto::from((storage, simulation, triage)))
  }

  pub fn save_to(self, backend: &TomlConfigBackend) -> Result<(), ConfigError> {
    let (storage, simulation, triage): (StorageConfig, SimulationConfig, TriageConfig) = self.into();
    backend.save_section("storage", &storage)?;
    backend.save_section("simulation", &simulation)?;
    backend.save_section("triage", &triage)
  }
}

impl From<(StorageConfig, SimulationConfig, TriageConfig)> for SettingsDto {
  fn from((storage, simulation, triage): (StorageConfig, SimulationConfig, TriageConfig)) -> Self {
    SettingsDto {
      seed_path: storage.seed_path.map(|p| p.to_string_lossy().to_string()),
      transition_delay_ms: simulation.transition_delay_ms,
      submission_delay_ms: simulation.submission_delay_ms,
      enforce_pending_only: triage.enforce_pending_only,
    }
  }
}

impl From<SettingsDto> for (StorageConfig, SimulationConfig, TriageConfig) {
  fn from(dto: SettingsDto) -> Self {
    (
      StorageConfig { seed_path: dto.seed_path.filter(|p| !p.is_empty()).map(PathBuf::from) },
      SimulationConfig {
        transition_delay_ms: dto.transition_delay_ms,
        submission_delay_ms: dto.submission_delay_ms,
      },
      TriageConfig { enforce_pending_only: dto.enforce_pending_only },
    )
  }
}
