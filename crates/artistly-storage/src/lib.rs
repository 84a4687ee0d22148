pub mod bookings;
pub mod catalog;
pub mod config;
pub mod gateway;
pub mod seed;

use std::sync::Arc;

use artistly_config::TomlConfigBackend;

pub use bookings::InMemoryBookingStore;
pub use catalog::InMemoryCatalog;
pub use config::{SimulationConfig, StorageConfig};
pub use gateway::SimulatedSubmissionGateway;
pub use seed::{SeedData, StorageError};

/// Los tres adapters en memoria, construidos a partir de la misma semilla.
pub struct MockStore {
  pub catalog: InMemoryCatalog,
  pub bookings: InMemoryBookingStore,
  pub gateway: SimulatedSubmissionGateway,
}

impl MockStore {
  pub fn new(seed: SeedData, simulation: &SimulationConfig) -> Self {
    let bookings =
      InMemoryBookingStore::new(seed.booking_requests.clone(), simulation.transition_delay());
    let gateway = SimulatedSubmissionGateway::new(simulation.submission_delay());
    let catalog = InMemoryCatalog::new(Arc::new(seed));

    Self { catalog, bookings, gateway }
  }

  /// Semilla integrada y sin latencia.
  pub fn instant() -> Result<Self, StorageError> {
    Ok(Self::new(SeedData::builtin()?, &SimulationConfig::instant()))
  }

  /// Lee `[storage]` y `[simulation]` de `backend`.
  pub fn from_backend(backend: &TomlConfigBackend) -> Result<Self, StorageError> {
    let storage = StorageConfig::load_from(backend)?;
    let simulation = SimulationConfig::load_from(backend)?;
    let seed = SeedData::load(storage.seed_path.as_deref())?;

    tracing::info!(
      seed = ?storage.seed_path,
      artists = seed.artists.len(),
      requests = seed.booking_requests.len(),
      "mock store ready"
    );

    Ok(Self::new(seed, &simulation))
  }
}
