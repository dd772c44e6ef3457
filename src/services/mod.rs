pub mod concept_library;
pub mod feedback_service;
pub mod http_helpers;
pub mod insights_service;
pub mod remote_client;

pub use feedback_service::FeedbackService;
pub use insights_service::InsightsService;
pub use remote_client::{FeedbackClient, HttpFeedbackClient};
