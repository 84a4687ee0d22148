use std::sync::Arc;

use async_trait::async_trait;

use artistly_core::domain::ArtistId;
use artistly_core::domain::artist::Artist;
use artistly_core::domain::category::Category;
use artistly_core::ports::{ArtistCatalog, CatalogFacets, RepoError};

use crate::seed::SeedData;

/// Catálogo de solo lectura sobre la semilla en memoria.
#[derive(Debug, Clone)]
pub struct InMemoryCatalog {
  seed: Arc<SeedData>,
}

impl InMemoryCatalog {
  pub fn new(seed: Arc<SeedData>) -> Self {
    Self { seed }
  }
}

#[async_trait]
impl ArtistCatalog for InMemoryCatalog {
  async fn list_artists(&self) -> Result<Vec<Artist>, RepoError> {
    Ok(self.seed.artists.clone())
  }

  async fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, RepoError> {
    Ok(self.seed.artists.iter().find(|a| &a.id == id).cloned())
  }

  async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
    Ok(self.seed.categories.clone())
  }

  async fn facets(&self) -> Result<CatalogFacets, RepoError> {
    Ok(self.seed.facets())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(Arc::new(SeedData::builtin().unwrap()))
  }

  #[tokio::test]
  async fn finds_artist_by_id() {
    let artist = catalog().find_artist(&ArtistId::from("4")).await.unwrap().unwrap();
    assert_eq!(artist.name, "DJ Alex");
  }

  #[tokio::test]
  async fn facets_include_locations_without_artists() {
    let facets = catalog().facets().await.unwrap();
    assert!(facets.locations.iter().any(|l| l == "Seattle, WA"));
    assert_eq!(facets.categories, ["Singers", "Dancers", "Speakers", "DJs"]);
  }
}
