use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Rango de tarifas que un artista puede declarar al darse de alta.
///
/// Es una enumeración cerrada: el formulario de alta solo acepta estos
/// valores. Las etiquetas coinciden exactamente con las del catálogo
/// (`"$100-$300"`, `"$2000+"`...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum FeeRange {
  Under300,
  From300To600,
  From600To1000,
  From1000To2000,
  Over2000,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown fee range: {0:?}")]
pub struct UnknownFeeRange(pub String);

impl FeeRange {
  /// Todos los rangos, en orden ascendente.
  pub const ALL: [FeeRange; 5] = [
    FeeRange::Under300,
    FeeRange::From300To600,
    FeeRange::From600To1000,
    FeeRange::From1000To2000,
    FeeRange::Over2000,
  ];

  pub fn label(&self) -> &'static str {
    match self {
      FeeRange::Under300 => "$100-$300",
      FeeRange::From300To600 => "$300-$600",
      FeeRange::From600To1000 => "$600-$1000",
      FeeRange::From1000To2000 => "$1000-$2000",
      FeeRange::Over2000 => "$2000+",
    }
  }

  /// Etiquetas de todos los rangos, separadas por coma.
  pub fn labels() -> String {
    Self::ALL.iter().map(FeeRange::label).collect::<Vec<_>>().join(", ")
  }
}

impl FromStr for FeeRange {
  type Err = UnknownFeeRange;

  /// Al contrario que otros enums del dominio, parsear **sí puede fallar**:
  /// una etiqueta fuera de la enumeración no es un rango válido.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let trimmed = s.trim();
    FeeRange::ALL
      .into_iter()
      .find(|r| r.label() == trimmed)
      .ok_or_else(|| UnknownFeeRange(s.to_string()))
  }
}

impl TryFrom<String> for FeeRange {
  type Error = UnknownFeeRange;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<FeeRange> for String {
  fn from(r: FeeRange) -> Self {
    r.label().to_string()
  }
}

impl fmt::Display for FeeRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_every_label() {
    for range in FeeRange::ALL {
      assert_eq!(range.label().parse::<FeeRange>(), Ok(range));
    }
  }

  #[test]
  fn rejects_labels_outside_the_enumeration() {
    assert!("$500-$1000".parse::<FeeRange>().is_err());
    assert!("".parse::<FeeRange>().is_err());
  }

  #[test]
  fn tolerates_surrounding_whitespace() {
    assert_eq!(" $2000+ ".parse::<FeeRange>(), Ok(FeeRange::Over2000));
  }
}
