pub mod artist;
pub mod booking;
pub mod category;
pub mod fee_range;
pub mod filter;
pub mod ids;
pub mod profile;
pub mod rating;
pub mod submission;
pub mod wizard;

pub use ids::{ArtistId, CategoryId, RequestId, SubmissionId};
