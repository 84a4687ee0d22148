pub mod activity;
pub mod bookings;
pub mod catalog;
pub mod submission;

pub use activity::{ActivityReporter, NoopReporter};
pub use bookings::{BookingRepository, RepoError};
pub use catalog::{ArtistCatalog, CatalogFacets};
pub use submission::{GatewayError, SubmissionGateway};
