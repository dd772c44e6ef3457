pub mod feedback;
pub mod insights;
pub mod session;

pub use feedback::FeedbackQuery;
pub use insights::LearningInsights;
pub use session::{Role, SessionState};
