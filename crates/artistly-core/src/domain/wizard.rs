use serde::{Deserialize, Serialize};

use crate::domain::profile::{ArtistProfile, Field, ProfileDraft, ValidationErrors};
use crate::domain::submission::SubmissionReceipt;

/// Paso del asistente de alta. Navegación lineal acotada a `[1, 3]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WizardStep {
  /// 1: nombre, bio, imagen.
  #[default]
  BasicInfo,
  /// 2: categorías e idiomas.
  CategoriesAndLanguages,
  /// 3: tarifa y ubicación.
  PricingAndLocation,
}

impl WizardStep {
  pub const LAST: WizardStep = WizardStep::PricingAndLocation;

  pub fn number(&self) -> u8 {
    match self {
      WizardStep::BasicInfo => 1,
      WizardStep::CategoriesAndLanguages => 2,
      WizardStep::PricingAndLocation => 3,
    }
  }

  pub fn from_number(n: u8) -> Option<Self> {
    match n {
      1 => Some(WizardStep::BasicInfo),
      2 => Some(WizardStep::CategoriesAndLanguages),
      3 => Some(WizardStep::PricingAndLocation),
      _ => None,
    }
  }

  pub fn title(&self) -> &'static str {
    match self {
      WizardStep::BasicInfo => "Basic Info",
      WizardStep::CategoriesAndLanguages => "Categories & Languages",
      WizardStep::PricingAndLocation => "Pricing & Location",
    }
  }

  /// Campos que se editan en este paso.
  pub fn fields(&self) -> &'static [Field] {
    match self {
      WizardStep::BasicInfo => &[Field::Name, Field::Bio, Field::ImageUrl],
      WizardStep::CategoriesAndLanguages => &[Field::Category, Field::Languages],
      WizardStep::PricingAndLocation => &[Field::FeeRange, Field::Location],
    }
  }

  /// Paso siguiente; en el último se queda donde está.
  pub fn next(self) -> Self {
    Self::from_number(self.number() + 1).unwrap_or(self)
  }

  /// Paso anterior; en el primero se queda donde está.
  pub fn prev(self) -> Self {
    Self::from_number(self.number().saturating_sub(1)).unwrap_or(self)
  }
}

/// Fase del envío.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "phase", rename_all = "camelCase")]
pub enum WizardPhase {
  #[default]
  Editing,
  /// El perfil validado está en vuelo hacia el backend.
  Submitting { profile: ArtistProfile },
  /// Estado terminal: el backend aceptó el perfil.
  Submitted { receipt: SubmissionReceipt },
}

/// Estado explícito del asistente de alta: `{paso actual, valores, errores}`.
///
/// Todas las transiciones son funciones puras sobre este registro; no sabe
/// nada de renderizado ni de cómo se envía el perfil (eso es cosa de
/// [`OnboardingService`](crate::services::OnboardingService)).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingWizard {
  step: WizardStep,
  draft: ProfileDraft,
  errors: ValidationErrors,
  phase: WizardPhase,
}

impl OnboardingWizard {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn step(&self) -> WizardStep {
    self.step
  }

  pub fn draft(&self) -> &ProfileDraft {
    &self.draft
  }

  pub fn errors(&self) -> &ValidationErrors {
    &self.errors
  }

  pub fn phase(&self) -> &WizardPhase {
    &self.phase
  }

  pub fn is_editing(&self) -> bool {
    matches!(self.phase, WizardPhase::Editing)
  }

  pub fn is_submitted(&self) -> bool {
    matches!(self.phase, WizardPhase::Submitted { .. })
  }

  // -------- navegación --------

  pub fn next_step(&mut self) -> WizardStep {
    if self.is_editing() {
      self.step = self.step.next();
    }
    self.step
  }

  pub fn prev_step(&mut self) -> WizardStep {
    if self.is_editing() {
      self.step = self.step.prev();
    }
    self.step
  }

  // -------- edición --------
  //
  // Cada setter revalida solo su campo, como un formulario en modo
  // "on change". Fuera de `Editing` los cambios se ignoran.

  pub fn set_name(&mut self, name: impl Into<String>) {
    self.edit(Field::Name, |d| d.name = name.into());
  }

  pub fn set_bio(&mut self, bio: impl Into<String>) {
    self.edit(Field::Bio, |d| d.bio = bio.into());
  }

  pub fn set_image_url(&mut self, image_url: Option<String>) {
    self.edit(Field::ImageUrl, |d| d.image_url = image_url);
  }

  pub fn set_fee_range(&mut self, fee_range: impl Into<String>) {
    self.edit(Field::FeeRange, |d| d.fee_range = fee_range.into());
  }

  pub fn set_location(&mut self, location: impl Into<String>) {
    self.edit(Field::Location, |d| d.location = location.into());
  }

  pub fn toggle_category(&mut self, category: &str) {
    self.edit(Field::Category, |d| toggle(&mut d.category, category));
  }

  pub fn toggle_language(&mut self, language: &str) {
    self.edit(Field::Languages, |d| toggle(&mut d.languages, language));
  }

  fn edit(&mut self, field: Field, apply: impl FnOnce(&mut ProfileDraft)) {
    if !self.is_editing() {
      return;
    }
    apply(&mut self.draft);
    self.errors.merge_for(&[field], self.draft.validate_fields(&[field]));
  }

  // -------- validación --------

  /// Valida los campos de un paso y actualiza sus errores.
  pub fn validate_step(&mut self, step: WizardStep) -> bool {
    let fields = step.fields();
    let errors = self.draft.validate_fields(fields);
    let ok = errors.is_empty();
    self.errors.merge_for(fields, errors);
    ok
  }

  /// Valida todo el borrador. Devuelve el perfil si es enviable.
  pub fn validate(&mut self) -> Result<ArtistProfile, ValidationErrors> {
    match self.draft.validate() {
      Ok(profile) => {
        self.errors = ValidationErrors::new();
        Ok(profile)
      }
      Err(errors) => {
        self.errors = errors.clone();
        Err(errors)
      }
    }
  }

  /// `true` si el envío está permitido: en edición y sin errores.
  pub fn can_submit(&self) -> bool {
    self.is_editing() && self.draft.validate().is_ok()
  }

  // -------- ciclo de envío --------

  pub(crate) fn begin_submit(&mut self, profile: ArtistProfile) {
    self.phase = WizardPhase::Submitting { profile };
  }

  /// El backend aceptó: se descarta el borrador y se pasa al estado terminal.
  pub(crate) fn complete_submit(&mut self, receipt: SubmissionReceipt) {
    self.draft = ProfileDraft::default();
    self.errors = ValidationErrors::new();
    self.phase = WizardPhase::Submitted { receipt };
  }

  /// El envío no prosperó: se vuelve a edición conservando el borrador.
  pub(crate) fn abort_submit(&mut self) {
    self.phase = WizardPhase::Editing;
  }

  /// Desde `Submitted`, empieza una solicitud nueva en el paso 1.
  pub fn start_another(&mut self) {
    if self.is_submitted() {
      *self = Self::new();
    }
  }
}

fn toggle(values: &mut Vec<String>, value: &str) {
  if let Some(pos) = values.iter().position(|v| v == value) {
    values.remove(pos);
  } else {
    values.push(value.to_string());
  }
}
