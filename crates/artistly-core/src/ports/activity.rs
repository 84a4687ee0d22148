use async_trait::async_trait;

use crate::domain::RequestId;
use crate::domain::booking::BookingStatus;
use crate::domain::submission::SubmissionReceipt;

/// Canal lateral de notificaciones hacia quien aloje los servicios
/// (logs, eventos de UI...). Nunca falla: si el destino no está, se descarta.
#[async_trait]
pub trait ActivityReporter: Send + Sync {
  async fn status_changed(&self, id: &RequestId, from: BookingStatus, to: BookingStatus);
  async fn profile_submitted(&self, artist_name: &str, receipt: &SubmissionReceipt);
}

/// Reporter que no hace nada, para tests o servicios sin observadores.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopReporter;

#[async_trait]
impl ActivityReporter for NoopReporter {
  async fn status_changed(&self, _id: &RequestId, _from: BookingStatus, _to: BookingStatus) {}
  async fn profile_submitted(&self, _artist_name: &str, _receipt: &SubmissionReceipt) {}
}
