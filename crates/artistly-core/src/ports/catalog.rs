use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::ArtistId;
use crate::domain::artist::Artist;
use crate::domain::category::Category;
use crate::ports::bookings::RepoError;

/// Valores que la interfaz ofrece para filtrar y para el alta.
///
/// No se derivan de los artistas: son listas fijas del origen de datos
/// (p. ej. ubicaciones sin ningún artista todavía).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFacets {
  pub categories: Vec<String>,
  pub locations: Vec<String>,
  pub fee_ranges: Vec<String>,
  pub languages: Vec<String>,
}

/// Port de solo lectura sobre el catálogo de artistas.
///
/// Implementaciones posibles:
/// - datos de ejemplo en memoria
/// - un servicio de catálogo remoto
#[async_trait]
pub trait ArtistCatalog: Send + Sync {
  async fn list_artists(&self) -> Result<Vec<Artist>, RepoError>;
  async fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, RepoError>;
  async fn list_categories(&self) -> Result<Vec<Category>, RepoError>;
  async fn facets(&self) -> Result<CatalogFacets, RepoError>;
}
