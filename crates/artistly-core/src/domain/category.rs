use crate::domain::ids::CategoryId;
use serde::{Deserialize, Serialize};

/// Categoría de artistas que ofrece la plataforma.
///
/// El conjunto es fijo (Singers, Dancers, Speakers, DJs) y lo define el origen
/// de datos; el dominio solo usa `name` para cruzar con [`Artist::category`].
///
/// [`Artist::category`]: crate::domain::artist::Artist::category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: CategoryId,
  pub name: String,
  pub description: String,
  /// Emoji que acompaña a la categoría en listados.
  pub icon: String,
}

/// Número de artistas por categoría, en el orden de las categorías.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
  pub category: Category,
  pub artists: usize,
}
