use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use artistly_core::domain::RequestId;
use artistly_core::domain::booking::{BookingRequest, BookingStatus};
use artistly_core::ports::{BookingRepository, RepoError};

/// Solicitudes de booking en memoria con latencia de escritura simulada.
///
/// `update_status` espera `latency` antes de tocar la colección, así que el
/// cambio no es visible para las lecturas hasta que el futuro termina. El
/// mutex nunca se mantiene a través de un `.await`.
#[derive(Debug)]
pub struct InMemoryBookingStore {
  requests: Mutex<Vec<BookingRequest>>,
  latency: Duration,
}

impl InMemoryBookingStore {
  pub fn new(requests: Vec<BookingRequest>, latency: Duration) -> Self {
    Self { requests: Mutex::new(requests), latency }
  }

  fn snapshot(&self) -> Result<Vec<BookingRequest>, RepoError> {
    self
      .requests
      .lock()
      .map(|r| r.clone())
      .map_err(|_| RepoError::Storage("booking store mutex poisoned".to_string()))
  }
}

#[async_trait]
impl BookingRepository for InMemoryBookingStore {
  async fn list_requests(&self) -> Result<Vec<BookingRequest>, RepoError> {
    self.snapshot()
  }

  async fn find_request(&self, id: &RequestId) -> Result<Option<BookingRequest>, RepoError> {
    Ok(self.snapshot()?.into_iter().find(|r| &r.id == id))
  }

  async fn update_status(
    &self,
    id: &RequestId,
    status: BookingStatus,
  ) -> Result<BookingRequest, RepoError> {
    // Simula la llamada a la API.
    tokio::time::sleep(self.latency).await;

    let mut requests = self
      .requests
      .lock()
      .map_err(|_| RepoError::Storage("booking store mutex poisoned".to_string()))?;

    let request = requests.iter_mut().find(|r| &r.id == id).ok_or(RepoError::NotFound)?;
    request.status = status;
    debug!(request_id = %id, %status, "booking status stored");

    Ok(request.clone())
  }
}
