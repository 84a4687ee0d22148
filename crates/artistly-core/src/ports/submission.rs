use async_trait::async_trait;

use crate::domain::profile::ArtistProfile;
use crate::domain::submission::SubmissionReceipt;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
  #[error("backend unavailable: {0}")]
  Unavailable(String),

  #[error("internal error: {0}")]
  Internal(String),
}

/// Port hacia el backend que recibe los perfiles de artista.
///
/// Un rechazo de negocio no es un error: llega como
/// [`SubmissionOutcome::Rejected`](crate::domain::submission::SubmissionOutcome)
/// dentro del justificante. `GatewayError` queda para fallos de transporte.
#[async_trait]
pub trait SubmissionGateway: Send + Sync {
  async fn submit_profile(&self, profile: &ArtistProfile) -> Result<SubmissionReceipt, GatewayError>;
}
