use async_trait::async_trait;

use crate::domain::RequestId;
use crate::domain::booking::{BookingRequest, BookingStatus};

#[derive(Debug, thiserror::Error)]
pub enum RepoError {
  #[error("entity not found")]
  NotFound,
  #[error("storage error: {0}")]
  Storage(String),
}

/// Port sobre las solicitudes de booking.
///
/// `update_status` es la única escritura. Una implementación puede tardar
/// (latencia de red, simulada o real); el cambio solo es visible para
/// `list_requests` / `find_request` cuando el futuro se resuelve.
#[async_trait]
pub trait BookingRepository: Send + Sync {
  async fn list_requests(&self) -> Result<Vec<BookingRequest>, RepoError>;
  async fn find_request(&self, id: &RequestId) -> Result<Option<BookingRequest>, RepoError>;

  /// Sustituye el estado de la solicitud `id` y devuelve la solicitud
  /// actualizada. `RepoError::NotFound` si no existe.
  async fn update_status(
    &self,
    id: &RequestId,
    status: BookingStatus,
  ) -> Result<BookingRequest, RepoError>;
}
