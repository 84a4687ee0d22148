mod backend;
mod error;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use error::ConfigError;
pub use io::atomic_write_str;
pub use paths::{ArtistlyPaths, BASE_DIR_VAR};

use once_cell::sync::Lazy;

/// Rutas del proceso, resueltas una sola vez.
pub static PATHS: Lazy<ArtistlyPaths> =
  Lazy::new(|| ArtistlyPaths::detect().expect("cannot resolve artistly directories"));

pub static CONFIG_BACKEND: Lazy<TomlConfigBackend> =
  Lazy::new(|| TomlConfigBackend::new(PATHS.clone()));
