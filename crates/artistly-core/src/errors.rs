// crates/artistly-core/src/errors.rs
use thiserror::Error;

use crate::domain::RequestId;
use crate::domain::booking::BookingStatus;
use crate::domain::profile::ValidationErrors;

/// Error genérico del núcleo de Artistly.
///
/// Las capas superiores (comandos, CLI) lo mapean a mensajes de usuario.
#[derive(Debug, Error)]
pub enum CoreError {
  #[error("repository error: {0}")]
  Repository(String),

  #[error("submission backend error: {0}")]
  Gateway(String),

  #[error("{kind} not found: {id}")]
  NotFound { kind: &'static str, id: String },

  #[error("cannot move request {id} from {from} to {to}")]
  InvalidTransition { id: RequestId, from: BookingStatus, to: BookingStatus },

  #[error("request {0} is already being processed")]
  TransitionInFlight(RequestId),

  #[error("invalid profile: {0}")]
  Validation(ValidationErrors),

  #[error("submission rejected: {0}")]
  SubmissionRejected(String),

  #[error("a submission is already in progress")]
  SubmissionInProgress,

  #[error("profile already submitted")]
  AlreadySubmitted,
}

impl CoreError {
  pub fn artist_not_found(id: impl ToString) -> Self {
    CoreError::NotFound { kind: "artist", id: id.to_string() }
  }

  pub fn request_not_found(id: impl ToString) -> Self {
    CoreError::NotFound { kind: "booking request", id: id.to_string() }
  }
}
