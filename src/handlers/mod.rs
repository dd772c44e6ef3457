pub mod feedback_handler;
pub mod insights_handler;
pub mod page_handler;

pub use feedback_handler::generate_feedback;
pub use insights_handler::get_learning_insights;
pub use page_handler::{health_check, home, login_page, student_dashboard, teacher_dashboard};
