use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use artistly_core::domain::profile::ArtistProfile;
use artistly_core::domain::submission::SubmissionReceipt;
use artistly_core::ports::{GatewayError, SubmissionGateway};

/// Backend de envíos simulado: espera `latency`, deja el perfil en el log y
/// acepta siempre. No guarda nada.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedSubmissionGateway {
  latency: Duration,
}

impl SimulatedSubmissionGateway {
  pub fn new(latency: Duration) -> Self {
    Self { latency }
  }
}

#[async_trait]
impl SubmissionGateway for SimulatedSubmissionGateway {
  async fn submit_profile(&self, profile: &ArtistProfile) -> Result<SubmissionReceipt, GatewayError> {
    tokio::time::sleep(self.latency).await;

    let receipt = SubmissionReceipt::accepted();
    let payload =
      serde_json::to_string(profile).map_err(|e| GatewayError::Internal(e.to_string()))?;
    info!(submission_id = %receipt.id, %payload, "form submitted");

    Ok(receipt)
  }
}
