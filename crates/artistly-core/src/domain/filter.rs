use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::artist::Artist;

/// Selección de filtros del catálogo de artistas.
///
/// Tres dimensiones independientes (categoría, ubicación, tarifa). Dentro de
/// una dimensión basta con que coincida un valor (OR); entre dimensiones se
/// exige que pasen todas (AND). Una dimensión vacía no restringe nada.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistFilter {
  #[serde(default)]
  pub categories: BTreeSet<String>,
  #[serde(default)]
  pub locations: BTreeSet<String>,
  #[serde(default)]
  pub fee_ranges: BTreeSet<String>,
}

impl ArtistFilter {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_categories<I, S>(mut self, values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.categories.extend(values.into_iter().map(Into::into));
    self
  }

  pub fn with_locations<I, S>(mut self, values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.locations.extend(values.into_iter().map(Into::into));
    self
  }

  pub fn with_fee_ranges<I, S>(mut self, values: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.fee_ranges.extend(values.into_iter().map(Into::into));
    self
  }

  pub fn toggle_category(&mut self, category: &str) {
    toggle(&mut self.categories, category);
  }

  pub fn toggle_location(&mut self, location: &str) {
    toggle(&mut self.locations, location);
  }

  pub fn toggle_fee_range(&mut self, fee_range: &str) {
    toggle(&mut self.fee_ranges, fee_range);
  }

  pub fn clear(&mut self) {
    self.categories.clear();
    self.locations.clear();
    self.fee_ranges.clear();
  }

  /// `true` si hay al menos una selección en alguna dimensión.
  pub fn is_active(&self) -> bool {
    !(self.categories.is_empty() && self.locations.is_empty() && self.fee_ranges.is_empty())
  }

  pub fn matches(&self, artist: &Artist) -> bool {
    let category_match =
      self.categories.is_empty() || artist.category.iter().any(|c| self.categories.contains(c));

    let location_match = self.locations.is_empty() || self.locations.contains(&artist.location);

    let fee_match = self.fee_ranges.is_empty() || self.fee_ranges.contains(&artist.fee_range);

    category_match && location_match && fee_match
  }

  /// Subsecuencia de `artists` que pasa el filtro, en el orden original.
  pub fn apply(&self, artists: &[Artist]) -> Vec<Artist> {
    artists.iter().filter(|a| self.matches(a)).cloned().collect()
  }
}

fn toggle(set: &mut BTreeSet<String>, value: &str) {
  if !set.remove(value) {
    set.insert(value.to_string());
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::ids::ArtistId;

  fn artist(id: &str, name: &str, category: &[&str], fee: &str, location: &str) -> Artist {
    Artist {
      id: ArtistId::from(id),
      name: name.to_string(),
      category: category.iter().map(|c| c.to_string()).collect(),
      bio: String::new(),
      languages: vec!["English".to_string()],
      fee_range: fee.to_string(),
      location: location.to_string(),
      image_url: None,
      rating: None,
      experience: None,
    }
  }

  fn sample() -> Vec<Artist> {
    vec![
      artist("1", "Sarah Johnson", &["Singers"], "$500-$1000", "New York, NY"),
      artist("2", "Michael Chen", &["Dancers"], "$300-$800", "Los Angeles, CA"),
      artist("3", "Emma Rodriguez", &["Speakers"], "$1000-$2500", "Miami, FL"),
      artist("5", "Priya Patel", &["Singers", "Dancers"], "$600-$1500", "Houston, TX"),
    ]
  }

  fn names(artists: &[Artist]) -> Vec<&str> {
    artists.iter().map(|a| a.name.as_str()).collect()
  }

  #[test]
  fn empty_filter_keeps_everything() {
    let all = sample();
    assert_eq!(ArtistFilter::new().apply(&all), all);
  }

  #[test]
  fn category_is_or_within_dimension() {
    let all = sample();
    let filter = ArtistFilter::new().with_categories(["Singers"]);
    assert_eq!(names(&filter.apply(&all)), ["Sarah Johnson", "Priya Patel"]);
  }

  #[test]
  fn dimensions_combine_with_and() {
    let all = sample();
    let filter =
      ArtistFilter::new().with_categories(["Singers", "Dancers"]).with_locations(["Houston, TX"]);
    assert_eq!(names(&filter.apply(&all)), ["Priya Patel"]);
  }

  #[test]
  fn fee_labels_are_compared_verbatim() {
    let all = sample();
    let filter = ArtistFilter::new().with_fee_ranges(["$300-$600"]);
    assert!(filter.apply(&all).is_empty());

    let filter = ArtistFilter::new().with_fee_ranges(["$300-$800", "$1000-$2500"]);
    assert_eq!(names(&filter.apply(&all)), ["Michael Chen", "Emma Rodriguez"]);
  }

  #[test]
  fn filtering_is_idempotent() {
    let all = sample();
    let filter = ArtistFilter::new().with_categories(["Dancers"]).with_locations(["Houston, TX", "Los Angeles, CA"]);
    let once = filter.apply(&all);
    assert_eq!(filter.apply(&once), once);
  }

  #[test]
  fn toggle_adds_then_removes() {
    let mut filter = ArtistFilter::new();
    assert!(!filter.is_active());

    filter.toggle_location("Miami, FL");
    assert!(filter.is_active());
    assert!(filter.locations.contains("Miami, FL"));

    filter.toggle_location("Miami, FL");
    assert!(!filter.is_active());
  }

  #[test]
  fn toggles_are_independent_per_dimension() {
    let all = sample();
    let mut filter = ArtistFilter::new();

    filter.toggle_category("Dancers");
    filter.toggle_fee_range("$300-$800");
    assert_eq!(names(&filter.apply(&all)), ["Michael Chen"]);

    filter.toggle_fee_range("$300-$800");
    assert!(filter.fee_ranges.is_empty());
    assert!(filter.categories.contains("Dancers"));
  }

  #[test]
  fn clear_resets_all_dimensions() {
    let mut filter = ArtistFilter::new()
      .with_categories(["DJs"])
      .with_locations(["Chicago, IL"])
      .with_fee_ranges(["$2000+"]);
    filter.clear();
    assert_eq!(filter, ArtistFilter::default());
  }
}
