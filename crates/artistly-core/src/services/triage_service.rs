use std::collections::HashSet;
use std::sync::Mutex;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::RequestId;
use crate::domain::booking::{
  BookingRequest, BookingStatus, RequestDetails, RequestQuery, StatusCounts,
};
use crate::errors::CoreError;
use crate::ports::{ActivityReporter, BookingRepository, RepoError};

/// Qué transiciones de estado acepta el servicio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransitionPolicy {
  /// Solo `pending → approved | rejected`.
  #[default]
  PendingOnly,
  /// Cualquier solicitud puede pasar a un estado terminal, aunque ya lo
  /// estuviera. La interfaz se limita a ocultar los botones.
  Permissive,
}

/// Panel de gestión de solicitudes de booking.
pub struct TriageService<R, A>
where
  R: BookingRepository,
  A: ActivityReporter,
{
  repo: R,
  reporter: A,
  policy: TransitionPolicy,
  // IDs con una transición en vuelo.
  in_flight: Mutex<HashSet<RequestId>>,
}

impl<R, A> TriageService<R, A>
where
  R: BookingRepository,
  A: ActivityReporter,
{
  pub fn new(repo: R, reporter: A) -> Self {
    Self::with_policy(repo, reporter, TransitionPolicy::default())
  }

  pub fn with_policy(repo: R, reporter: A, policy: TransitionPolicy) -> Self {
    Self { repo, reporter, policy, in_flight: Mutex::new(HashSet::new()) }
  }

  pub fn policy(&self) -> TransitionPolicy {
    self.policy
  }

  // -------- QUERY (read) --------

  pub async fn list(&self, query: &RequestQuery) -> Result<Vec<BookingRequest>, CoreError> {
    let requests = self.all_requests().await?;
    let visible = query.apply(&requests);
    debug!(status = %query.status, search = %query.search, visible = visible.len(), "list requests");
    Ok(visible)
  }

  pub async fn status_counts(&self) -> Result<StatusCounts, CoreError> {
    Ok(StatusCounts::tally(&self.all_requests().await?))
  }

  pub async fn get(&self, id: &RequestId) -> Result<BookingRequest, CoreError> {
    self
      .repo
      .find_request(id)
      .await
      .map_err(|e| CoreError::Repository(e.to_string()))?
      .ok_or_else(|| CoreError::request_not_found(id))
  }

  pub async fn details(&self, id: &RequestId) -> Result<RequestDetails, CoreError> {
    Ok(self.get(id).await?.details())
  }

  /// `true` mientras haya una transición en curso para `id`.
  pub fn is_processing(&self, id: &RequestId) -> Result<bool, CoreError> {
    let set = self.in_flight.lock().map_err(|_| poisoned())?;
    Ok(set.contains(id))
  }

  async fn all_requests(&self) -> Result<Vec<BookingRequest>, CoreError> {
    self.repo.list_requests().await.map_err(|e| CoreError::Repository(e.to_string()))
  }

  // -------- COMMAND (write) --------

  pub async fn approve(&self, id: &RequestId) -> Result<BookingRequest, CoreError> {
    self.transition(id, BookingStatus::Approved).await
  }

  pub async fn reject(&self, id: &RequestId) -> Result<BookingRequest, CoreError> {
    self.transition(id, BookingStatus::Rejected).await
  }

  /// Lleva la solicitud `id` al estado terminal `target`.
  ///
  /// El cambio lo aplica el repositorio (con su latencia); mientras tanto el
  /// ID queda marcado como en proceso y un segundo intento sobre el mismo ID
  /// falla con [`CoreError::TransitionInFlight`]. IDs distintos no se
  /// bloquean entre sí.
  pub async fn transition(
    &self,
    id: &RequestId,
    target: BookingStatus,
  ) -> Result<BookingRequest, CoreError> {
    let _guard = InFlight::acquire(&self.in_flight, id)?;

    let current = self.get(id).await?;
    self.check_transition(&current, target)?;

    let updated = self.repo.update_status(id, target).await.map_err(|e| match e {
      RepoError::NotFound => CoreError::request_not_found(id),
      other => CoreError::Repository(other.to_string()),
    })?;

    info!(request_id = %id, from = %current.status, to = %updated.status, "booking request status changed");
    self.reporter.status_changed(id, current.status, updated.status).await;

    Ok(updated)
  }

  /// Lanza varias transiciones a la vez y devuelve el resultado de cada una,
  /// en el mismo orden que `ids`.
  pub async fn transition_many(
    &self,
    ids: &[RequestId],
    target: BookingStatus,
  ) -> Vec<Result<BookingRequest, CoreError>> {
    join_all(ids.iter().map(|id| self.transition(id, target))).await
  }

  fn check_transition(&self, current: &BookingRequest, target: BookingStatus) -> Result<(), CoreError> {
    let allowed = target.is_terminal()
      && match self.policy {
        TransitionPolicy::PendingOnly => current.status == BookingStatus::Pending,
        TransitionPolicy::Permissive => true,
      };

    if allowed {
      return Ok(());
    }

    warn!(request_id = %current.id, from = %current.status, to = %target, "transition refused");
    Err(CoreError::InvalidTransition { id: current.id.clone(), from: current.status, to: target })
  }
}

fn poisoned() -> CoreError {
  CoreError::Repository("triage mutex poisoned".to_string())
}

/// Marca de "en proceso" que se libera al salir de scope, también en error.
struct InFlight<'a> {
  set: &'a Mutex<HashSet<RequestId>>,
  id: RequestId,
}

impl<'a> InFlight<'a> {
  fn acquire(set: &'a Mutex<HashSet<RequestId>>, id: &RequestId) -> Result<Self, CoreError> {
    let mut guard = set.lock().map_err(|_| poisoned())?;

    if !guard.insert(id.clone()) {
      return Err(CoreError::TransitionInFlight(id.clone()));
    }

    Ok(Self { set, id: id.clone() })
  }
}

impl Drop for InFlight<'_> {
  fn drop(&mut self) {
    if let Ok(mut guard) = self.set.lock() {
      guard.remove(&self.id);
    }
  }
}
