use artistly_core::domain::RequestId;
use artistly_core::domain::booking::BookingStatus;
use artistly_core::domain::submission::SubmissionReceipt;
use artistly_core::ports::ActivityReporter;
use async_trait::async_trait;
use tracing::info;

/// `ActivityReporter` que convierte las notificaciones de los servicios en
/// eventos de `tracing` con target `artistly::activity`.
///
/// Es el equivalente en consola a emitir eventos hacia una interfaz: quien
/// quiera seguirlos filtra por ese target (`RUST_LOG=artistly::activity=info`).
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl TracingReporter {
  pub fn new() -> Self {
    Self
  }
}

#[async_trait]
impl ActivityReporter for TracingReporter {
  async fn status_changed(&self, id: &RequestId, from: BookingStatus, to: BookingStatus) {
    info!(target: "artistly::activity", event = "booking:status", request_id = %id, %from, %to);
  }

  async fn profile_submitted(&self, artist_name: &str, receipt: &SubmissionReceipt) {
    info!(
      target: "artistly::activity",
      event = "onboarding:submitted",
      submission_id = %receipt.id,
      artist = artist_name,
      accepted = receipt.is_accepted()
    );
  }
}
