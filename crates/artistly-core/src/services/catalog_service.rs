use tracing::debug;

use crate::domain::ArtistId;
use crate::domain::artist::Artist;
use crate::domain::category::{Category, CategoryCount};
use crate::domain::filter::ArtistFilter;
use crate::errors::CoreError;
use crate::ports::{ArtistCatalog, CatalogFacets};

/// Consulta del catálogo de artistas.
///
/// No guarda la selección de filtros: la aporta quien llama en cada consulta.
pub struct CatalogService<C>
where
  C: ArtistCatalog,
{
  catalog: C,
}

impl<C> CatalogService<C>
where
  C: ArtistCatalog,
{
  pub fn new(catalog: C) -> Self {
    Self { catalog }
  }

  /// Artistas visibles con la selección dada, en el orden del catálogo.
  pub async fn browse(&self, filter: &ArtistFilter) -> Result<Vec<Artist>, CoreError> {
    let artists =
      self.catalog.list_artists().await.map_err(|e| CoreError::Repository(e.to_string()))?;

    let visible = filter.apply(&artists);
    debug!(total = artists.len(), visible = visible.len(), active = filter.is_active(), "browse artists");

    Ok(visible)
  }

  pub async fn get_artist(&self, id: &ArtistId) -> Result<Option<Artist>, CoreError> {
    self.catalog.find_artist(id).await.map_err(|e| CoreError::Repository(e.to_string()))
  }

  pub async fn list_categories(&self) -> Result<Vec<Category>, CoreError> {
    self.catalog.list_categories().await.map_err(|e| CoreError::Repository(e.to_string()))
  }

  pub async fn facets(&self) -> Result<CatalogFacets, CoreError> {
    self.catalog.facets().await.map_err(|e| CoreError::Repository(e.to_string()))
  }

  /// Artistas por categoría. Un artista con varias categorías cuenta en todas.
  pub async fn category_counts(&self) -> Result<Vec<CategoryCount>, CoreError> {
    let categories = self.list_categories().await?;
    let artists =
      self.catalog.list_artists().await.map_err(|e| CoreError::Repository(e.to_string()))?;

    Ok(
      categories
        .into_iter()
        .map(|category| {
          let count = artists.iter().filter(|a| a.has_category(&category.name)).count();
          CategoryCount { category, artists: count }
        })
        .collect(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::CategoryId;
  use crate::ports::RepoError;
  use async_trait::async_trait;

  struct FakeCatalog {
    artists: Vec<Artist>,
    categories: Vec<Category>,
  }

  #[async_trait]
  impl ArtistCatalog for FakeCatalog {
    async fn list_artists(&self) -> Result<Vec<Artist>, RepoError> {
      Ok(self.artists.clone())
    }

    async fn find_artist(&self, id: &ArtistId) -> Result<Option<Artist>, RepoError> {
      Ok(self.artists.iter().find(|a| &a.id == id).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
      Ok(self.categories.clone())
    }

    async fn facets(&self) -> Result<CatalogFacets, RepoError> {
      Ok(CatalogFacets::default())
    }
  }

  struct BrokenCatalog;

  #[async_trait]
  impl ArtistCatalog for BrokenCatalog {
    async fn list_artists(&self) -> Result<Vec<Artist>, RepoError> {
      Err(RepoError::Storage("offline".into()))
    }

    async fn find_artist(&self, _id: &ArtistId) -> Result<Option<Artist>, RepoError> {
      Err(RepoError::Storage("offline".into()))
    }

    async fn list_categories(&self) -> Result<Vec<Category>, RepoError> {
      Err(RepoError::Storage("offline".into()))
    }

    async fn facets(&self) -> Result<CatalogFacets, RepoError> {
      Err(RepoError::Storage("offline".into()))
    }
  }

  fn artist(id: &str, name: &str, category: &[&str], location: &str) -> Artist {
    Artist {
      id: ArtistId::from(id),
      name: name.into(),
      category: category.iter().map(|c| c.to_string()).collect(),
      bio: String::new(),
      languages: vec![],
      fee_range: "$500-$1000".into(),
      location: location.into(),
      image_url: None,
      rating: None,
      experience: None,
    }
  }

  fn category(id: &str, name: &str) -> Category {
    Category {
      id: CategoryId::new(id),
      name: name.into(),
      description: String::new(),
      icon: String::new(),
    }
  }

  fn service() -> CatalogService<FakeCatalog> {
    CatalogService::new(FakeCatalog {
      artists: vec![
        artist("1", "Sarah Johnson", &["Singers"], "New York, NY"),
        artist("2", "Michael Chen", &["Dancers"], "Los Angeles, CA"),
        artist("5", "Priya Patel", &["Singers", "Dancers"], "Houston, TX"),
      ],
      categories: vec![category("1", "Singers"), category("2", "Dancers"), category("4", "DJs")],
    })
  }

  #[tokio::test]
  async fn browse_applies_filter() {
    let svc = service();
    let filter = ArtistFilter::new().with_categories(["Singers"]);

    let names: Vec<String> = svc.browse(&filter).await.unwrap().into_iter().map(|a| a.name).collect();

    assert_eq!(names, ["Sarah Johnson", "Priya Patel"]);
  }

  #[tokio::test]
  async fn get_artist_by_id() {
    let svc = service();
    let found = svc.get_artist(&ArtistId::from("2")).await.unwrap();
    assert_eq!(found.map(|a| a.name).as_deref(), Some("Michael Chen"));
    assert!(svc.get_artist(&ArtistId::from("99")).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn counts_multi_category_artists_in_each() {
    let counts = service().category_counts().await.unwrap();
    let pairs: Vec<(&str, usize)> =
      counts.iter().map(|c| (c.category.name.as_str(), c.artists)).collect();
    assert_eq!(pairs, [("Singers", 2), ("Dancers", 2), ("DJs", 0)]);
  }

  #[tokio::test]
  async fn repository_failures_surface_as_core_errors() {
    let svc = CatalogService::new(BrokenCatalog);
    let err = svc.browse(&ArtistFilter::new()).await.unwrap_err();
    assert!(matches!(err, CoreError::Repository(msg) if msg.contains("offline")));
  }
}
