use crate::domain::ids::ArtistId;
use crate::domain::rating::Rating;
use serde::{Deserialize, Serialize};

/// Un artista del catálogo (cantante, bailarín, speaker, DJ...).
///
/// Es dato de solo lectura: el dominio nunca lo modifica. `category` y
/// `languages` se comportan como conjuntos, pero se guardan como `Vec` para
/// conservar el orden en que los muestra el origen de datos.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
  pub id: ArtistId,

  /// Nombre artístico.
  pub name: String,

  /// Categorías en las que actúa (p. ej. `["Singers", "Dancers"]`).
  pub category: Vec<String>,

  pub bio: String,

  /// Idiomas en los que puede actuar o presentar.
  pub languages: Vec<String>,

  /// Etiqueta de tarifa tal como la publica el artista (`"$500-$1000"`).
  ///
  /// No se exige que pertenezca a [`FeeRange`](crate::domain::fee_range::FeeRange):
  /// el filtro del catálogo compara etiquetas tal cual.
  pub fee_range: String,

  /// Ciudad base, con el formato `"Ciudad, ST"`.
  pub location: String,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,

  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub rating: Option<Rating>,

  /// Experiencia declarada, texto libre (`"10+ years"`).
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub experience: Option<String>,
}

impl Artist {
  pub fn has_category(&self, name: &str) -> bool {
    self.category.iter().any(|c| c == name)
  }
}
