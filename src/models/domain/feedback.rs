/// A single answer-review request. Constructed by the caller, consumed
/// once, never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedbackQuery {
    pub question_text: String,
    pub student_answer: String,
    pub correct_answer: Option<String>,
    pub is_correct: Option<bool>,
}

impl FeedbackQuery {
    pub fn new(question_text: impl Into<String>, student_answer: impl Into<String>) -> Self {
        Self {
            question_text: question_text.into(),
            student_answer: student_answer.into(),
            correct_answer: None,
            is_correct: None,
        }
    }

    pub fn with_correct_answer(mut self, correct_answer: impl Into<String>) -> Self {
        self.correct_answer = Some(correct_answer.into());
        self
    }

    pub fn with_correctness(mut self, is_correct: bool) -> Self {
        self.is_correct = Some(is_correct);
        self
    }
}
