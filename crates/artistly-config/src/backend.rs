use std::fs;
use std::io::ErrorKind;

use serde::Serialize;
use serde::de::DeserializeOwned;
use toml_edit::DocumentMut;
use tracing::debug;

use crate::error::ConfigError;
use crate::io::atomic_write_str;
use crate::paths::ArtistlyPaths;

/// Acceso por secciones (`[storage]`, `[simulation]`...) al fichero de config.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

/// Un único `artistly.toml` con una tabla por sección.
///
/// Al guardar se edita el documento con `toml_edit`, así que los comentarios
/// y las demás secciones del usuario se conservan.
pub struct TomlConfigBackend {
  paths: ArtistlyPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: ArtistlyPaths) -> Self {
    TomlConfigBackend { paths }
  }

  pub fn paths(&self) -> &ArtistlyPaths {
    &self.paths
  }

  /// Texto completo del fichero de config, o `None` si aún no existe.
  pub fn read_raw(&self) -> Result<Option<String>, ConfigError> {
    match fs::read_to_string(self.paths.config_file()) {
      Ok(text) => Ok(Some(text)),
      Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
      Err(e) => Err(ConfigError::Io(e)),
    }
  }

  /// Como `load_section`, pero sin fichero o sin sección devuelve
  /// `T::default()`.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    let Some(text) = self.read_raw()? else {
      debug!(section, "no config file yet, using defaults");
      return Ok(T::default());
    };

    match find_section(&text, section)? {
      Some(table) => decode_section(section, table),
      None => {
        debug!(section, "section not in config file, using defaults");
        Ok(T::default())
      }
    }
  }
}

fn find_section(text: &str, section: &str) -> Result<Option<toml::Value>, ConfigError> {
  let root: toml::Table = toml::from_str(text)?;
  Ok(root.get(section).cloned())
}

fn decode_section<T: DeserializeOwned>(section: &str, table: toml::Value) -> Result<T, ConfigError> {
  table.try_into().map_err(|e| ConfigError::Other(format!("decode section [{section}]: {e}")))
}

fn encode_section<T: Serialize>(section: &str, value: &T) -> Result<toml_edit::Item, ConfigError> {
  let body = toml::to_string(value)
    .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
  let doc = body
    .parse::<DocumentMut>()
    .map_err(|e| ConfigError::Other(format!("encode section [{section}]: {e}")))?;
  Ok(doc.into_item())
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let file = self.paths.config_file();
    let text = self.read_raw()?.ok_or_else(|| {
      ConfigError::Io(std::io::Error::new(ErrorKind::NotFound, format!("{} does not exist", file.display())))
    })?;

    let table = find_section(&text, section)?
      .ok_or_else(|| ConfigError::Other(format!("missing section [{section}] in {}", file.display())))?;

    decode_section(section, table)
  }

  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let file = self.paths.config_file();

    let mut doc = match self.read_raw()? {
      Some(text) => text
        .parse::<DocumentMut>()
        .map_err(|e| ConfigError::Other(format!("cannot edit {}: {e}", file.display())))?,
      None => DocumentMut::new(),
    };

    doc[section] = encode_section(section, value)?;

    atomic_write_str(&file, &doc.to_string())?;
    debug!(file = %file.display(), section, "config section saved");

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Demo {
    delay_ms: u64,
    label: Option<String>,
  }

  fn backend(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(ArtistlyPaths::at(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let tmp = tempdir().unwrap();
    let cfg: Demo = backend(tmp.path()).load_section_with_default("demo").unwrap();
    assert_eq!(cfg, Demo::default());
  }

  #[test]
  fn strict_load_fails_without_section() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    b.save_section("other", &Demo::default()).unwrap();

    let err = b.load_section::<Demo>("demo").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.contains("missing section [demo]")));
  }

  #[test]
  fn save_then_load_section() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    let value = Demo { delay_ms: 250, label: Some("fast".into()) };

    b.save_section("demo", &value).unwrap();

    assert_eq!(b.load_section::<Demo>("demo").unwrap(), value);
  }

  #[test]
  fn save_preserves_comments_and_other_sections() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    fs::write(
      b.paths().config_file(),
      "# comentario del usuario\n[keep]\nvalue = 1\n\n[demo]\ndelay_ms = 1\n",
    )
    .unwrap();

    b.save_section("demo", &Demo { delay_ms: 9, label: None }).unwrap();

    let raw = b.read_raw().unwrap().unwrap();
    assert!(raw.contains("# comentario del usuario"));
    assert!(raw.contains("[keep]"));
    assert_eq!(b.load_section::<Demo>("demo").unwrap().delay_ms, 9);
  }

  #[test]
  fn bad_section_type_is_reported() {
    let tmp = tempdir().unwrap();
    let b = backend(tmp.path());
    fs::write(b.paths().config_file(), "[demo]\ndelay_ms = \"soon\"\n").unwrap();

    let err = b.load_section_with_default::<Demo>("demo").unwrap_err();
    assert!(matches!(err, ConfigError::Other(msg) if msg.starts_with("decode section [demo]")));
  }
}
