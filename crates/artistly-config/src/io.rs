use std::ffi::OsString;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Sustituye `path` por `contents` sin dejar nunca un fichero a medias: se
/// escribe un `.<nombre>.tmp` en el mismo directorio y se renombra encima.
pub fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let staging = staging_path(path);

  let mut file = OpenOptions::new().write(true).create(true).truncate(true).open(&staging)?;
  file.write_all(contents.as_bytes())?;
  file.sync_all()?;
  drop(file);

  fs::rename(&staging, path).inspect_err(|_| {
    let _ = fs::remove_file(&staging);
  })
}

fn staging_path(path: &Path) -> PathBuf {
  let mut name = OsString::from(".");
  name.push(path.file_name().unwrap_or_default());
  name.push(".tmp");
  path.with_file_name(name)
}
