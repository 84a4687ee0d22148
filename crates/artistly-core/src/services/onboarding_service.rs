use tracing::{info, warn};

use crate::domain::profile::ArtistProfile;
use crate::domain::submission::{SubmissionOutcome, SubmissionReceipt};
use crate::domain::wizard::{OnboardingWizard, WizardPhase};
use crate::errors::CoreError;
use crate::ports::{ActivityReporter, GatewayError, SubmissionGateway};

/// Envío de perfiles de artista desde el asistente de alta.
pub struct OnboardingService<G, A>
where
  G: SubmissionGateway,
  A: ActivityReporter,
{
  gateway: G,
  reporter: A,
}

impl<G, A> OnboardingService<G, A>
where
  G: SubmissionGateway,
  A: ActivityReporter,
{
  pub fn new(gateway: G, reporter: A) -> Self {
    Self { gateway, reporter }
  }

  /// Valida y envía el borrador del asistente.
  ///
  /// - Con algún campo inválido: guarda los errores en el asistente y
  ///   devuelve [`CoreError::Validation`] sin llamar al backend.
  /// - Si el backend acepta: el asistente pasa a `Submitted` y el borrador se
  ///   descarta.
  /// - Si el backend falla o rechaza: el asistente vuelve a `Editing` con el
  ///   borrador intacto.
  ///
  /// Equivale a [`prepare`](Self::prepare), [`send`](Self::send) y
  /// [`finish`](Self::finish) seguidos con el asistente prestado todo el rato.
  pub async fn submit(&self, wizard: &mut OnboardingWizard) -> Result<SubmissionReceipt, CoreError> {
    let profile = self.prepare(wizard)?;
    let sent = self.send(&profile).await;
    self.finish(wizard, &profile, sent).await
  }

  /// Primera mitad del envío: comprueba la fase, valida y deja el asistente
  /// en `Submitting`. Mientras tanto cualquier otro envío recibe
  /// [`CoreError::SubmissionInProgress`].
  pub fn prepare(&self, wizard: &mut OnboardingWizard) -> Result<ArtistProfile, CoreError> {
    match wizard.phase() {
      WizardPhase::Editing => {}
      WizardPhase::Submitting { .. } => return Err(CoreError::SubmissionInProgress),
      WizardPhase::Submitted { .. } => return Err(CoreError::AlreadySubmitted),
    }

    let profile = wizard.validate().map_err(|errors| {
      warn!(invalid_fields = errors.len(), "profile submission blocked: {errors}");
      CoreError::Validation(errors)
    })?;

    wizard.begin_submit(profile.clone());
    Ok(profile)
  }

  /// Llamada al backend. No toca el asistente, así que puede esperarse sin
  /// tenerlo bloqueado.
  pub async fn send(&self, profile: &ArtistProfile) -> Result<SubmissionReceipt, GatewayError> {
    self.gateway.submit_profile(profile).await
  }

  /// Segunda mitad: aplica el resultado de [`send`](Self::send) a un
  /// asistente que quedó en `Submitting` tras [`prepare`](Self::prepare).
  pub async fn finish(
    &self,
    wizard: &mut OnboardingWizard,
    profile: &ArtistProfile,
    sent: Result<SubmissionReceipt, GatewayError>,
  ) -> Result<SubmissionReceipt, CoreError> {
    let receipt = match sent {
      Ok(receipt) => receipt,
      Err(e) => {
        warn!(error = %e, "profile submission failed");
        wizard.abort_submit();
        return Err(CoreError::Gateway(e.to_string()));
      }
    };

    if let SubmissionOutcome::Rejected { reason } = &receipt.outcome {
      warn!(submission_id = %receipt.id, %reason, "profile submission rejected");
      wizard.abort_submit();
      return Err(CoreError::SubmissionRejected(reason.clone()));
    }

    info!(submission_id = %receipt.id, artist = %profile.name, "artist profile submitted");
    wizard.complete_submit(receipt.clone());
    self.reporter.profile_submitted(&profile.name, &receipt).await;

    Ok(receipt)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::RequestId;
  use crate::domain::booking::BookingStatus;
  use crate::domain::profile::{ArtistProfile, Field};
  use crate::domain::wizard::WizardStep;
  use crate::ports::{GatewayError, NoopReporter};
  use async_trait::async_trait;
  use std::sync::{Arc, Mutex};
  use std::time::Duration;

  #[derive(Clone, Copy)]
  enum Behaviour {
    Accept,
    Reject,
    Fail,
  }

  struct FakeGateway {
    behaviour: Behaviour,
    delay: Duration,
    received: Mutex<Vec<ArtistProfile>>,
  }

  impl FakeGateway {
    fn new(behaviour: Behaviour) -> Self {
      Self { behaviour, delay: Duration::ZERO, received: Mutex::new(Vec::new()) }
    }
  }

  #[async_trait]
  impl SubmissionGateway for FakeGateway {
    async fn submit_profile(&self, profile: &ArtistProfile) -> Result<SubmissionReceipt, GatewayError> {
      tokio::time::sleep(self.delay).await;
      self.received.lock().unwrap().push(profile.clone());
      match self.behaviour {
        Behaviour::Accept => Ok(SubmissionReceipt::accepted()),
        Behaviour::Reject => Ok(SubmissionReceipt {
          id: crate::domain::SubmissionId::new(),
          outcome: SubmissionOutcome::Rejected { reason: "duplicate artist".into() },
        }),
        Behaviour::Fail => Err(GatewayError::Unavailable("connection refused".into())),
      }
    }
  }

  #[derive(Default)]
  struct RecordingReporter {
    submitted: Mutex<Vec<String>>,
  }

  #[async_trait]
  impl ActivityReporter for Arc<RecordingReporter> {
    async fn status_changed(&self, _id: &RequestId, _from: BookingStatus, _to: BookingStatus) {}

    async fn profile_submitted(&self, artist_name: &str, _receipt: &SubmissionReceipt) {
      self.submitted.lock().unwrap().push(artist_name.to_string());
    }
  }

  fn filled_wizard() -> OnboardingWizard {
    let mut w = OnboardingWizard::new();
    w.set_name("Emma Rodriguez");
    w.set_bio("Motivational speaker and leadership coach with expertise in corporate events.");
    w.next_step();
    w.toggle_category("Speakers");
    w.toggle_language("English");
    w.toggle_language("Spanish");
    w.next_step();
    w.set_fee_range("$1000-$2000");
    w.set_location("Miami, FL");
    w
  }

  #[tokio::test]
  async fn accepted_submission_reaches_terminal_state() {
    let reporter = Arc::new(RecordingReporter::default());
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Accept), reporter.clone());
    let mut wizard = filled_wizard();

    let receipt = svc.submit(&mut wizard).await.unwrap();

    assert!(receipt.is_accepted());
    assert!(wizard.is_submitted());
    assert_eq!(wizard.draft().name, "");
    assert_eq!(*reporter.submitted.lock().unwrap(), ["Emma Rodriguez"]);
    assert_eq!(svc.gateway.received.lock().unwrap()[0].languages, ["English", "Spanish"]);
  }

  #[tokio::test]
  async fn short_bio_blocks_submission() {
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Accept), NoopReporter);
    let mut wizard = filled_wizard();
    wizard.set_bio("Ten chars!");

    let err = svc.submit(&mut wizard).await.unwrap_err();

    match err {
      CoreError::Validation(errors) => {
        assert_eq!(errors.get(Field::Bio), Some("Bio must be at least 50 characters"));
      }
      other => panic!("unexpected error: {other}"),
    }
    assert!(wizard.is_editing());
    assert_eq!(wizard.errors().get(Field::Bio), Some("Bio must be at least 50 characters"));
    assert!(svc.gateway.received.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn rejected_outcome_returns_to_editing() {
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Reject), NoopReporter);
    let mut wizard = filled_wizard();

    let err = svc.submit(&mut wizard).await.unwrap_err();

    assert!(matches!(err, CoreError::SubmissionRejected(reason) if reason == "duplicate artist"));
    assert!(wizard.is_editing());
    assert_eq!(wizard.draft().name, "Emma Rodriguez");
    assert_eq!(wizard.step(), WizardStep::PricingAndLocation);
  }

  #[tokio::test]
  async fn gateway_failure_keeps_draft() {
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Fail), NoopReporter);
    let mut wizard = filled_wizard();

    let err = svc.submit(&mut wizard).await.unwrap_err();

    assert!(matches!(err, CoreError::Gateway(_)));
    assert!(wizard.can_submit());
  }

  #[tokio::test]
  async fn submitted_wizard_cannot_submit_twice() {
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Accept), NoopReporter);
    let mut wizard = filled_wizard();
    svc.submit(&mut wizard).await.unwrap();

    let err = svc.submit(&mut wizard).await.unwrap_err();
    assert!(matches!(err, CoreError::AlreadySubmitted));

    wizard.start_another();
    assert!(matches!(svc.submit(&mut wizard).await, Err(CoreError::Validation(_))));
  }

  #[tokio::test]
  async fn prepared_wizard_refuses_a_second_submission() {
    let svc = OnboardingService::new(FakeGateway::new(Behaviour::Fail), NoopReporter);
    let mut wizard = filled_wizard();

    let profile = svc.prepare(&mut wizard).unwrap();
    assert!(matches!(wizard.phase(), WizardPhase::Submitting { .. }));
    assert!(matches!(svc.prepare(&mut wizard), Err(CoreError::SubmissionInProgress)));

    let sent = svc.send(&profile).await;
    let err = svc.finish(&mut wizard, &profile, sent).await.unwrap_err();

    assert!(matches!(err, CoreError::Gateway(_)));
    assert!(wizard.is_editing());
    assert_eq!(wizard.draft().name, "Emma Rodriguez");
  }

  #[tokio::test(start_paused = true)]
  async fn submission_waits_for_backend_delay() {
    let gateway = FakeGateway { delay: Duration::from_secs(2), ..FakeGateway::new(Behaviour::Accept) };
    let svc = OnboardingService::new(gateway, NoopReporter);
    let mut wizard = filled_wizard();
    let started = tokio::time::Instant::now();

    svc.submit(&mut wizard).await.unwrap();

    assert!(started.elapsed() >= Duration::from_secs(2));
  }
}
