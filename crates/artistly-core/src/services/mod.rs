pub mod catalog_service;
pub mod onboarding_service;
pub mod triage_service;

pub use catalog_service::CatalogService;
pub use onboarding_service::OnboardingService;
pub use triage_service::{TransitionPolicy, TriageService};
