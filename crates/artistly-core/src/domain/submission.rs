use serde::{Deserialize, Serialize};

use crate::domain::ids::SubmissionId;

/// Respuesta del backend de envíos a un perfil de artista.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmissionOutcome {
  Accepted,
  Rejected { reason: String },
}

/// Justificante de un envío procesado por el backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
  pub id: SubmissionId,
  #[serde(flatten)]
  pub outcome: SubmissionOutcome,
}

impl SubmissionReceipt {
  pub fn accepted() -> Self {
    Self { id: SubmissionId::new(), outcome: SubmissionOutcome::Accepted }
  }

  pub fn is_accepted(&self) -> bool {
    matches!(self.outcome, SubmissionOutcome::Accepted)
  }
}
