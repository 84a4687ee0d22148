mod config;
mod infrastructure;

use artistly_config::{CONFIG_BACKEND, TomlConfigBackend};
use artistly_core::domain::artist::Artist;
use artistly_core::domain::booking::{
  BookingRequest, BookingStatus, RequestDetails, RequestQuery, StatusCounts, StatusFilter,
};
use artistly_core::domain::category::CategoryCount;
use artistly_core::domain::filter::ArtistFilter;
use artistly_core::domain::profile::{ProfileDraft, ValidationErrors};
use artistly_core::domain::submission::SubmissionReceipt;
use artistly_core::domain::wizard::{OnboardingWizard, WizardPhase, WizardStep};
use artistly_core::domain::{ArtistId, RequestId};
use artistly_core::ports::CatalogFacets;
use artistly_core::services::{CatalogService, OnboardingService, TriageService};
use artistly_core::CoreError;
use artistly_storage::{InMemoryBookingStore, InMemoryCatalog, MockStore, SimulatedSubmissionGateway};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

pub use crate::config::{SettingsDto, TriageConfig};
pub use infrastructure::reporter::TracingReporter;

type ConcreteCatalogService = CatalogService<InMemoryCatalog>;
type ConcreteTriageService = TriageService<InMemoryBookingStore, TracingReporter>;
type ConcreteOnboardingService = OnboardingService<SimulatedSubmissionGateway, TracingReporter>;

/// Estado de la aplicación: los tres servicios ya cableados y el asistente
/// de alta en curso.
pub struct AppState {
  catalog: ConcreteCatalogService,
  triage: ConcreteTriageService,
  onboarding: ConcreteOnboardingService,
  // Nunca se mantiene bloqueado mientras se espera al backend de envíos.
  wizard: Mutex<OnboardingWizard>,
}

impl AppState {
  pub fn new(store: MockStore, triage: &TriageConfig) -> Self {
    let MockStore { catalog, bookings, gateway } = store;
    let reporter = TracingReporter::new();

    AppState {
      catalog: CatalogService::new(catalog),
      triage: TriageService::with_policy(bookings, reporter, triage.policy()),
      onboarding: OnboardingService::new(gateway, reporter),
      wizard: Mutex::new(OnboardingWizard::new()),
    }
  }

  /// Cableado a partir del fichero de config global.
  pub fn from_config() -> anyhow::Result<Self> {
    Self::from_backend(&CONFIG_BACKEND)
  }

  pub fn from_backend(backend: &TomlConfigBackend) -> anyhow::Result<Self> {
    let store = MockStore::from_backend(backend)?;
    let triage = TriageConfig::load_from(backend)?;
    Ok(Self::new(store, &triage))
  }

  /// Semilla integrada, sin latencia y con la política por defecto.
  pub fn instant() -> anyhow::Result<Self> {
    Ok(Self::new(MockStore::instant()?, &TriageConfig::default()))
  }
}

// -------- DTOs --------

/// Lista del panel de gestión junto con los contadores globales.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestListDto {
  pub requests: Vec<BookingRequest>,
  pub counts: StatusCounts,
}

/// Resultado de una transición dentro de una operación en bloque.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionResultDto {
  pub id: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub request: Option<BookingRequest>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WizardDto {
  pub step: u8,
  pub step_title: &'static str,
  pub total_steps: u8,
  pub draft: ProfileDraft,
  pub errors: ValidationErrors,
  pub phase: WizardPhase,
  pub can_submit: bool,
}

impl From<&OnboardingWizard> for WizardDto {
  fn from(wizard: &OnboardingWizard) -> Self {
    WizardDto {
      step: wizard.step().number(),
      step_title: wizard.step().title(),
      total_steps: WizardStep::LAST.number(),
      draft: wizard.draft().clone(),
      errors: wizard.errors().clone(),
      phase: wizard.phase().clone(),
      can_submit: wizard.can_submit(),
    }
  }
}

/// Un cambio sobre un campo del asistente.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
pub enum WizardEdit {
  Name(String),
  Bio(String),
  ImageUrl(Option<String>),
  ToggleCategory(String),
  ToggleLanguage(String),
  FeeRange(String),
  Location(String),
}

// -------- commands: catalog --------

/// Categorías con el número de artistas de cada una.
pub async fn categories_list(state: &AppState) -> Result<Vec<CategoryCount>, String> {
  state.catalog.category_counts().await.map_err(|e| e.to_string())
}

/// Valores disponibles para los filtros del catálogo.
pub async fn catalog_facets(state: &AppState) -> Result<CatalogFacets, String> {
  state.catalog.facets().await.map_err(|e| e.to_string())
}

pub async fn artists_browse(state: &AppState, filter: &ArtistFilter) -> Result<Vec<Artist>, String> {
  state.catalog.browse(filter).await.map_err(|e| e.to_string())
}

pub async fn artist_get(state: &AppState, id: &str) -> Result<Artist, String> {
  let id = ArtistId::from(id);
  state
    .catalog
    .get_artist(&id)
    .await
    .map_err(|e| e.to_string())?
    .ok_or_else(|| CoreError::artist_not_found(&id).to_string())
}

// -------- commands: triage --------

/// Solicitudes visibles con el filtro de estado (`all`, `pending`...) y la
/// búsqueda dados.
pub async fn requests_list(state: &AppState, status: &str, search: &str) -> Result<RequestListDto, String> {
  let status = status.parse::<StatusFilter>().map_err(|e| e.to_string())?;
  let query = RequestQuery::new(status, search);

  let requests = state.triage.list(&query).await.map_err(|e| e.to_string())?;
  let counts = state.triage.status_counts().await.map_err(|e| e.to_string())?;

  Ok(RequestListDto { requests, counts })
}

pub async fn request_details(state: &AppState, id: &str) -> Result<RequestDetails, String> {
  state.triage.details(&RequestId::from(id)).await.map_err(|e| e.to_string())
}

pub async fn request_approve(state: &AppState, id: &str) -> Result<BookingRequest, String> {
  state.triage.approve(&RequestId::from(id)).await.map_err(|e| e.to_string())
}

pub async fn request_reject(state: &AppState, id: &str) -> Result<BookingRequest, String> {
  state.triage.reject(&RequestId::from(id)).await.map_err(|e| e.to_string())
}

/// Aplica la misma transición a varias solicitudes a la vez. Cada ID tiene
/// su propio resultado; un fallo no detiene al resto.
pub async fn requests_transition(
  state: &AppState,
  ids: &[String],
  target: BookingStatus,
) -> Vec<TransitionResultDto> {
  let ids: Vec<RequestId> = ids.iter().map(|id| RequestId::from(id.as_str())).collect();
  let results = state.triage.transition_many(&ids, target).await;

  ids
    .into_iter()
    .zip(results)
    .map(|(id, result)| match result {
      Ok(request) => TransitionResultDto { id: id.to_string(), request: Some(request), error: None },
      Err(e) => TransitionResultDto { id: id.to_string(), request: None, error: Some(e.to_string()) },
    })
    .collect()
}

// -------- commands: onboarding --------

pub async fn wizard_get(state: &AppState) -> WizardDto {
  WizardDto::from(&*state.wizard.lock().await)
}

pub async fn wizard_edit(state: &AppState, edit: WizardEdit) -> WizardDto {
  let mut wizard = state.wizard.lock().await;
  match edit {
    WizardEdit::Name(v) => wizard.set_name(v),
    WizardEdit::Bio(v) => wizard.set_bio(v),
    WizardEdit::ImageUrl(v) => wizard.set_image_url(v),
    WizardEdit::ToggleCategory(v) => wizard.toggle_category(&v),
    WizardEdit::ToggleLanguage(v) => wizard.toggle_language(&v),
    WizardEdit::FeeRange(v) => wizard.set_fee_range(v),
    WizardEdit::Location(v) => wizard.set_location(v),
  }
  WizardDto::from(&*wizard)
}

pub async fn wizard_next(state: &AppState) -> WizardDto {
  let mut wizard = state.wizard.lock().await;
  wizard.next_step();
  WizardDto::from(&*wizard)
}

pub async fn wizard_prev(state: &AppState) -> WizardDto {
  let mut wizard = state.wizard.lock().await;
  wizard.prev_step();
  WizardDto::from(&*wizard)
}

/// Valida todos los pasos sin enviar, para mostrar los errores pendientes.
pub async fn wizard_validate(state: &AppState) -> WizardDto {
  let mut wizard = state.wizard.lock().await;
  // El resultado queda reflejado en `errors`.
  let _ = wizard.validate();
  WizardDto::from(&*wizard)
}

/// Envía el borrador. Los errores de validación quedan también en el
/// asistente (`wizard_get().errors`).
///
/// Durante la espera al backend el asistente sigue accesible: `wizard_get`
/// lo ve en `Submitting` y otro `wizard_submit` falla con
/// "a submission is already in progress".
pub async fn wizard_submit(state: &AppState) -> Result<SubmissionReceipt, String> {
  let profile = {
    let mut wizard = state.wizard.lock().await;
    state.onboarding.prepare(&mut wizard).map_err(|e| e.to_string())?
  };

  let sent = state.onboarding.send(&profile).await;

  let mut wizard = state.wizard.lock().await;
  state.onboarding.finish(&mut wizard, &profile, sent).await.map_err(|e| e.to_string())
}

/// "Submit Another Application": vuelve al paso 1 con un borrador vacío.
pub async fn wizard_start_another(state: &AppState) -> WizardDto {
  let mut wizard = state.wizard.lock().await;
  wizard.start_another();
  WizardDto::from(&*wizard)
}

// -------- commands: settings --------

/// Ajustes efectivos. Leerlos ya deja escritas en `artistly.toml` las
/// secciones que faltaban, con sus valores por defecto.
pub fn settings_get() -> Result<SettingsDto, String> {
  SettingsDto::load_from(&CONFIG_BACKEND).map_err(|e| e.to_string())
}

pub fn settings_save(input: SettingsDto) -> Result<(), String> {
  input.save_to(&CONFIG_BACKEND).map_err(|e| e.to_string())
}

/// Deja el fichero de config completo en disco y devuelve lo que contiene.
pub fn settings_init() -> Result<SettingsDto, String> {
  let settings = settings_get()?;
  settings_save(settings.clone())?;
  Ok(settings)
}
