use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::fee_range::FeeRange;

pub const NAME_MIN_CHARS: usize = 2;
pub const BIO_MIN_CHARS: usize = 50;
pub const LOCATION_MIN_CHARS: usize = 2;

/// Campos del formulario de alta de artistas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
  Name,
  Bio,
  ImageUrl,
  Category,
  Languages,
  FeeRange,
  Location,
}

impl Field {
  pub const ALL: [Field; 7] = [
    Field::Name,
    Field::Bio,
    Field::ImageUrl,
    Field::Category,
    Field::Languages,
    Field::FeeRange,
    Field::Location,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Field::Name => "name",
      Field::Bio => "bio",
      Field::ImageUrl => "imageUrl",
      Field::Category => "category",
      Field::Languages => "languages",
      Field::FeeRange => "feeRange",
      Field::Location => "location",
    }
  }
}

impl fmt::Display for Field {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Errores de validación por campo, con un mensaje legible cada uno.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn get(&self, field: Field) -> Option<&str> {
    self.0.get(&field).map(String::as_str)
  }

  pub fn insert(&mut self, field: Field, message: impl Into<String>) {
    self.0.insert(field, message.into());
  }

  pub fn remove(&mut self, field: Field) {
    self.0.remove(&field);
  }

  /// Sustituye los errores de `fields` por los de `other`, dejando intactos
  /// los del resto de campos.
  pub fn merge_for(&mut self, fields: &[Field], other: ValidationErrors) {
    for field in fields {
      self.0.remove(field);
    }
    self.0.extend(other.0);
  }

  pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
    self.0.iter().map(|(f, m)| (*f, m.as_str()))
  }
}

impl fmt::Display for ValidationErrors {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let mut first = true;
    for (field, message) in self.iter() {
      if !first {
        write!(f, "; ")?;
      }
      write!(f, "{field}: {message}")?;
      first = false;
    }
    Ok(())
  }
}

/// Borrador del perfil tal como lo va rellenando el asistente.
///
/// Los valores se guardan sin normalizar (no se recortan espacios); la
/// longitud mínima se mide en caracteres Unicode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDraft {
  #[serde(default)]
  pub name: String,
  #[serde(default)]
  pub bio: String,
  #[serde(default)]
  pub category: Vec<String>,
  #[serde(default)]
  pub languages: Vec<String>,
  #[serde(default)]
  pub fee_range: String,
  #[serde(default)]
  pub location: String,
  #[serde(default)]
  pub image_url: Option<String>,
}

impl ProfileDraft {
  /// Valida solo los campos indicados.
  pub fn validate_fields(&self, fields: &[Field]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    for field in fields {
      let message = match field {
        Field::Name => check_text(&self.name, NAME_MIN_CHARS, "Name is required", "Name"),
        Field::Bio => check_text(&self.bio, BIO_MIN_CHARS, "Bio is required", "Bio"),
        Field::Location => {
          check_text(&self.location, LOCATION_MIN_CHARS, "Location is required", "Location")
        }
        Field::Category => self
          .category
          .is_empty()
          .then(|| "Please select at least one category".to_string()),
        Field::Languages => self
          .languages
          .is_empty()
          .then(|| "Please select at least one language".to_string()),
        Field::FeeRange => check_fee_range(&self.fee_range),
        Field::ImageUrl => None,
      };

      if let Some(message) = message {
        errors.insert(*field, message);
      }
    }

    errors
  }

  /// Valida el borrador completo y, si todo es correcto, produce el perfil.
  pub fn validate(&self) -> Result<ArtistProfile, ValidationErrors> {
    let errors = self.validate_fields(&Field::ALL);
    if !errors.is_empty() {
      return Err(errors);
    }

    let fee_range = self.fee_range.parse::<FeeRange>().map_err(|_| {
      let mut e = ValidationErrors::new();
      e.insert(Field::FeeRange, fee_range_choice_message());
      e
    })?;

    Ok(ArtistProfile {
      name: self.name.clone(),
      bio: self.bio.clone(),
      category: self.category.clone(),
      languages: self.languages.clone(),
      fee_range,
      location: self.location.clone(),
      image_url: self.image_url.clone().filter(|u| !u.is_empty()),
    })
  }
}

fn check_text(value: &str, min_chars: usize, required: &str, label: &str) -> Option<String> {
  if value.is_empty() {
    return Some(required.to_string());
  }
  if value.chars().count() < min_chars {
    return Some(format!("{label} must be at least {min_chars} characters"));
  }
  None
}

fn check_fee_range(value: &str) -> Option<String> {
  if value.is_empty() {
    return Some("Fee range is required".to_string());
  }
  match value.parse::<FeeRange>() {
    Ok(_) => None,
    Err(_) => Some(fee_range_choice_message()),
  }
}

fn fee_range_choice_message() -> String {
  format!("Fee range must be one of: {}", FeeRange::labels())
}

/// Perfil de artista validado, listo para enviarse al backend.
///
/// Solo se construye a través de [`ProfileDraft::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistProfile {
  pub name: String,
  pub bio: String,
  pub category: Vec<String>,
  pub languages: Vec<String>,
  pub fee_range: FeeRange,
  pub location: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub image_url: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;

  const BIO: &str = "Professional vocalist with 10+ years of experience in jazz and contemporary music.";

  fn valid_draft() -> ProfileDraft {
    ProfileDraft {
      name: "Sarah Johnson".into(),
      bio: BIO.into(),
      category: vec!["Singers".into()],
      languages: vec!["English".into(), "Spanish".into()],
      fee_range: "$600-$1000".into(),
      location: "New York, NY".into(),
      image_url: None,
    }
  }

  #[test]
  fn valid_draft_produces_profile() {
    let profile = valid_draft().validate().unwrap();
    assert_eq!(profile.fee_range, FeeRange::From600To1000);
    assert_eq!(profile.category, ["Singers"]);
  }

  #[test]
  fn short_bio_is_rejected_with_minimum_message() {
    let draft = ProfileDraft { bio: "Too short.".into(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert_eq!(errors.get(Field::Bio), Some("Bio must be at least 50 characters"));
    assert_eq!(errors.len(), 1);
  }

  #[test]
  fn empty_draft_reports_every_required_field() {
    let errors = ProfileDraft::default().validate().unwrap_err();
    assert_eq!(errors.get(Field::Name), Some("Name is required"));
    assert_eq!(errors.get(Field::Bio), Some("Bio is required"));
    assert_eq!(errors.get(Field::Category), Some("Please select at least one category"));
    assert_eq!(errors.get(Field::Languages), Some("Please select at least one language"));
    assert_eq!(errors.get(Field::FeeRange), Some("Fee range is required"));
    assert_eq!(errors.get(Field::Location), Some("Location is required"));
    assert_eq!(errors.get(Field::ImageUrl), None);
  }

  #[test]
  fn minimum_lengths_count_characters() {
    let draft = ProfileDraft { name: "É".into(), location: "NY".into(), ..valid_draft() };
    let errors = draft.validate_fields(&[Field::Name, Field::Location]);
    assert_eq!(errors.get(Field::Name), Some("Name must be at least 2 characters"));
    assert_eq!(errors.get(Field::Location), None);
  }

  #[test]
  fn fee_range_outside_enumeration_is_rejected() {
    let draft = ProfileDraft { fee_range: "$500-$1000".into(), ..valid_draft() };
    let errors = draft.validate().unwrap_err();
    assert!(errors.get(Field::FeeRange).unwrap().starts_with("Fee range must be one of: $100-$300"));
  }

  #[test]
  fn image_url_has_no_format_constraint() {
    let draft = ProfileDraft { image_url: Some("not a url".into()), ..valid_draft() };
    assert_eq!(draft.validate().unwrap().image_url.as_deref(), Some("not a url"));
  }

  #[test]
  fn merge_for_replaces_only_given_fields() {
    let mut errors = ProfileDraft::default().validate_fields(&Field::ALL);
    let fixed = ProfileDraft { name: "DJ Alex".into(), ..ProfileDraft::default() };

    errors.merge_for(&[Field::Name], fixed.validate_fields(&[Field::Name]));

    assert_eq!(errors.get(Field::Name), None);
    assert_eq!(errors.get(Field::Bio), Some("Bio is required"));
  }
}
