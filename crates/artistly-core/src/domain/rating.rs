use serde::{Deserialize, Serialize};
use std::fmt;

/// Valoración media de un artista, de 0.0 a 5.0 en pasos de una décima.
///
/// Se guarda en décimas (`4.8` → `48`) para poder compararla y ordenarla sin
/// flotantes; en JSON viaja como número decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Rating(u8);

impl Rating {
  pub const MAX: Rating = Rating(50);

  /// `None` fuera de `[0.0, 5.0]` (NaN incluido). Redondea a la décima.
  pub fn new(value: f32) -> Option<Self> {
    (0.0..=5.0).contains(&value).then(|| Rating((value * 10.0).round() as u8))
  }

  pub fn tenths(&self) -> u8 {
    self.0
  }

  pub fn as_f32(&self) -> f32 {
    f32::from(self.0) / 10.0
  }

  /// Estrellas completas (parte entera).
  pub fn stars(&self) -> usize {
    usize::from(self.0 / 10)
  }
}

impl TryFrom<f32> for Rating {
  type Error = String;

  fn try_from(value: f32) -> Result<Self, Self::Error> {
    Rating::new(value).ok_or_else(|| format!("rating out of range [0, 5]: {value}"))
  }
}

impl From<Rating> for f32 {
  fn from(r: Rating) -> Self {
    r.as_f32()
  }
}

/// `4.8` → `★★★★☆ 4.8`.
impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let stars = self.stars();
    let bar: String = "★".repeat(stars) + &"☆".repeat(Self::MAX.stars() - stars);
    write!(f, "{bar} {}.{}", self.0 / 10, self.0 % 10)
  }
}
