use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identificador de un artista del catálogo.
///
/// Los IDs vienen del origen de datos (semilla JSON, backend externo) y se
/// tratan como opacos: no se parsean ni se generan en el dominio.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(String);

impl ArtistId {
  pub fn new(id: impl Into<String>) -> Self {
    ArtistId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for ArtistId {
  fn from(s: &str) -> Self {
    ArtistId(s.to_string())
  }
}

impl fmt::Display for ArtistId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

impl CategoryId {
  pub fn new(id: impl Into<String>) -> Self {
    CategoryId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for CategoryId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identificador de una solicitud de booking (`BookingRequest`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestId(String);

impl RequestId {
  pub fn new(id: impl Into<String>) -> Self {
    RequestId(id.into())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl From<&str> for RequestId {
  fn from(s: &str) -> Self {
    RequestId(s.to_string())
  }
}

impl fmt::Display for RequestId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Identificador de un envío de perfil de artista.
///
/// A diferencia del resto, este sí lo genera el sistema (UUID v4) en el
/// momento en que el backend de envíos acepta la solicitud.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(Uuid);

impl SubmissionId {
  /// Genera un nuevo identificador único.
  pub fn new() -> Self {
    SubmissionId(Uuid::new_v4())
  }

  pub fn from_uuid(u: Uuid) -> Self {
    SubmissionId(u)
  }

  pub fn as_uuid(&self) -> Uuid {
    self.0
  }
}

impl Default for SubmissionId {
  fn default() -> Self {
    Self::new()
  }
}

impl From<Uuid> for SubmissionId {
  fn from(u: Uuid) -> Self {
    SubmissionId(u)
  }
}

impl fmt::Display for SubmissionId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
