use crate::models::domain::feedback::FeedbackQuery;
use crate::models::domain::session::{Role, SessionState};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    /// A correctly answered closures question
    pub fn correct_closure_query() -> FeedbackQuery {
        FeedbackQuery::new(
            "What is a closure in JavaScript?",
            "A function that remembers its outer scope",
        )
        .with_correctness(true)
    }

    /// An incorrectly answered hooks question with a known correct answer
    pub fn incorrect_hook_query() -> FeedbackQuery {
        FeedbackQuery::new("When should you use a React hook?", "Only in classes")
            .with_correct_answer("In function components")
            .with_correctness(false)
    }

    /// An open-ended question with no correctness information
    pub fn open_query() -> FeedbackQuery {
        FeedbackQuery::new("Describe your debugging process", "I add print statements")
    }

    pub fn teacher_session() -> SessionState {
        SessionState::signed_in(Role::Teacher)
    }

    pub fn student_session() -> SessionState {
        SessionState::signed_in(Role::Student)
    }
}
