use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::domain::ids::RequestId;

/// Estado de una solicitud de booking.
///
/// `Pending` es el único estado no terminal: una solicitud solo sale de él
/// hacia `Approved` o `Rejected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
  Pending,
  Approved,
  Rejected,
}

impl BookingStatus {
  pub const ALL: [BookingStatus; 3] =
    [BookingStatus::Pending, BookingStatus::Approved, BookingStatus::Rejected];

  pub fn is_terminal(&self) -> bool {
    !matches!(self, BookingStatus::Pending)
  }

  pub fn as_str(&self) -> &'static str {
    match self {
      BookingStatus::Pending => "pending",
      BookingStatus::Approved => "approved",
      BookingStatus::Rejected => "rejected",
    }
  }

  /// Nombre con la primera letra en mayúscula, como se muestra en tablas.
  pub fn title(&self) -> &'static str {
    match self {
      BookingStatus::Pending => "Pending",
      BookingStatus::Approved => "Approved",
      BookingStatus::Rejected => "Rejected",
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown booking status: {0:?}")]
pub struct UnknownStatus(pub String);

impl FromStr for BookingStatus {
  type Err = UnknownStatus;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_lowercase().as_str() {
      "pending" => Ok(BookingStatus::Pending),
      "approved" => Ok(BookingStatus::Approved),
      "rejected" => Ok(BookingStatus::Rejected),
      _ => Err(UnknownStatus(s.to_string())),
    }
  }
}

impl fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Filtro por estado del panel de gestión: uno de los tres estados o todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
  #[default]
  All,
  Pending,
  Approved,
  Rejected,
}

impl StatusFilter {
  pub fn matches(&self, status: BookingStatus) -> bool {
    match self {
      StatusFilter::All => true,
      StatusFilter::Pending => status == BookingStatus::Pending,
      StatusFilter::Approved => status == BookingStatus::Approved,
      StatusFilter::Rejected => status == BookingStatus::Rejected,
    }
  }
}

impl From<BookingStatus> for StatusFilter {
  fn from(status: BookingStatus) -> Self {
    match status {
      BookingStatus::Pending => StatusFilter::Pending,
      BookingStatus::Approved => StatusFilter::Approved,
      BookingStatus::Rejected => StatusFilter::Rejected,
    }
  }
}

impl FromStr for StatusFilter {
  type Err = UnknownStatus;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s.trim().eq_ignore_ascii_case("all") {
      return Ok(StatusFilter::All);
    }
    s.parse::<BookingStatus>().map(StatusFilter::from)
  }
}

impl fmt::Display for StatusFilter {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      StatusFilter::All => f.write_str("all"),
      StatusFilter::Pending => f.write_str("pending"),
      StatusFilter::Approved => f.write_str("approved"),
      StatusFilter::Rejected => f.write_str("rejected"),
    }
  }
}

/// Solicitud de booking recibida por la plataforma.
///
/// `status` es el único campo mutable, y solo cambia mediante la transición
/// del servicio de triage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
  pub id: RequestId,
  pub artist_name: String,
  pub category: Vec<String>,
  pub location: String,
  pub fee_range: String,
  pub status: BookingStatus,
  pub request_date: NaiveDate,
}

impl BookingRequest {
  pub fn details(&self) -> RequestDetails {
    RequestDetails {
      artist_name: self.artist_name.clone(),
      categories: self.category.join(", "),
      location: self.location.clone(),
      fee_range: self.fee_range.clone(),
      status: self.status,
      request_date: format_request_date(self.request_date),
    }
  }
}

/// Fecha en formato largo, p. ej. `January 15, 2024`.
pub fn format_request_date(date: NaiveDate) -> String {
  date.format("%B %-d, %Y").to_string()
}

/// Resumen de solo lectura de una solicitud ("ver detalles").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestDetails {
  pub artist_name: String,
  pub categories: String,
  pub location: String,
  pub fee_range: String,
  pub status: BookingStatus,
  pub request_date: String,
}

impl fmt::Display for RequestDetails {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(f, "Viewing details for {}", self.artist_name)?;
    writeln!(f)?;
    writeln!(f, "Category: {}", self.categories)?;
    writeln!(f, "Location: {}", self.location)?;
    writeln!(f, "Fee Range: {}", self.fee_range)?;
    writeln!(f, "Status: {}", self.status)?;
    write!(f, "Request Date: {}", self.request_date)
  }
}

/// Consulta del panel: filtro por estado + búsqueda libre.
///
/// La búsqueda es una subcadena sin distinguir mayúsculas sobre el nombre del
/// artista o la ubicación. Una búsqueda vacía coincide con todo.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestQuery {
  #[serde(default)]
  pub status: StatusFilter,
  #[serde(default)]
  pub search: String,
}

impl RequestQuery {
  pub fn new(status: StatusFilter, search: impl Into<String>) -> Self {
    Self { status, search: search.into() }
  }

  pub fn matches(&self, request: &BookingRequest) -> bool {
    let term = self.search.to_lowercase();
    let search_match = request.artist_name.to_lowercase().contains(&term)
      || request.location.to_lowercase().contains(&term);

    self.status.matches(request.status) && search_match
  }

  pub fn apply(&self, requests: &[BookingRequest]) -> Vec<BookingRequest> {
    requests.iter().filter(|r| self.matches(r)).cloned().collect()
  }
}

/// Totales por estado (tarjetas de estadísticas del panel).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCounts {
  pub total: usize,
  pub pending: usize,
  pub approved: usize,
  pub rejected: usize,
}

impl StatusCounts {
  pub fn tally(requests: &[BookingRequest]) -> Self {
    requests.iter().fold(StatusCounts::default(), |mut acc, r| {
      acc.total += 1;
      match r.status {
        BookingStatus::Pending => acc.pending += 1,
        BookingStatus::Approved => acc.approved += 1,
        BookingStatus::Rejected => acc.rejected += 1,
      }
      acc
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(id: &str, name: &str, location: &str, status: BookingStatus) -> BookingRequest {
    BookingRequest {
      id: RequestId::from(id),
      artist_name: name.to_string(),
      category: vec!["Singers".to_string()],
      location: location.to_string(),
      fee_range: "$500-$1000".to_string(),
      status,
      request_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
    }
  }

  fn sample() -> Vec<BookingRequest> {
    vec![
      request("1", "Sarah Johnson", "New York, NY", BookingStatus::Pending),
      request("2", "Michael Chen", "Los Angeles, CA", BookingStatus::Approved),
      request("3", "Emma Rodriguez", "Miami, FL", BookingStatus::Rejected),
    ]
  }

  fn ids(requests: &[BookingRequest]) -> Vec<&str> {
    requests.iter().map(|r| r.id.as_str()).collect()
  }

  #[test]
  fn pending_with_empty_search() {
    let q = RequestQuery::new(StatusFilter::Pending, "");
    assert_eq!(ids(&q.apply(&sample())), ["1"]);
  }

  #[test]
  fn search_is_case_insensitive_on_name() {
    let q = RequestQuery::new(StatusFilter::All, "chen");
    assert_eq!(ids(&q.apply(&sample())), ["2"]);
  }

  #[test]
  fn search_matches_location() {
    let q = RequestQuery::new(StatusFilter::All, "MIAMI");
    assert_eq!(ids(&q.apply(&sample())), ["3"]);
  }

  #[test]
  fn status_and_search_are_combined() {
    let q = RequestQuery::new(StatusFilter::Approved, "sarah");
    assert!(q.apply(&sample()).is_empty());
  }

  #[test]
  fn parses_status_filters() {
    assert_eq!("all".parse::<StatusFilter>(), Ok(StatusFilter::All));
    assert_eq!("Rejected".parse::<StatusFilter>(), Ok(StatusFilter::Rejected));
    assert!("archived".parse::<StatusFilter>().is_err());
  }

  #[test]
  fn tallies_statuses() {
    let counts = StatusCounts::tally(&sample());
    assert_eq!(counts, StatusCounts { total: 3, pending: 1, approved: 1, rejected: 1 });
  }

  #[test]
  fn details_join_categories_and_format_date() {
    let mut r = request("5", "Priya Patel", "Houston, TX", BookingStatus::Pending);
    r.category = vec!["Singers".into(), "Dancers".into()];

    let details = r.details();
    assert_eq!(details.categories, "Singers, Dancers");
    assert_eq!(details.request_date, "January 15, 2024");
    assert!(details.to_string().starts_with("Viewing details for Priya Patel"));
  }

  #[test]
  fn only_pending_is_not_terminal() {
    assert!(!BookingStatus::Pending.is_terminal());
    assert!(BookingStatus::Approved.is_terminal());
    assert!(BookingStatus::Rejected.is_terminal());
  }
}
