use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("config io: {0}")]
  Io(#[from] std::io::Error),

  #[error("malformed config file: {0}")]
  Toml(#[from] toml::de::Error),

  #[error("cannot locate a home directory for the config files")]
  NoProjectDirs,

  #[error("{0}")]
  Other(String),
}
