use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::feedback::FeedbackQuery;

/// Inbound answer-review request. Field names are camelCase to match the
/// frontend's JSON.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRequest {
    #[validate(length(min = 1, max = 2000))]
    pub question_text: String,

    #[validate(length(min = 1, max = 2000))]
    pub student_answer: String,

    pub correct_answer: Option<String>,

    pub is_correct: Option<bool>,
}

impl FeedbackRequest {
    pub fn into_query(self) -> FeedbackQuery {
        FeedbackQuery {
            question_text: self.question_text,
            student_answer: self.student_answer,
            correct_answer: self.correct_answer,
            is_correct: self.is_correct,
        }
    }
}

/// Body POSTed to the remote feedback endpoint: the query fields plus a
/// flag asking for a concept explanation in the reply.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFeedbackPayload {
    pub question_text: String,
    pub student_answer: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_answer: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_correct: Option<bool>,

    pub include_concept_explanation: bool,
}

impl RemoteFeedbackPayload {
    pub fn from_query(query: &FeedbackQuery) -> Self {
        Self {
            question_text: query.question_text.clone(),
            student_answer: query.student_answer.clone(),
            correct_answer: query.correct_answer.clone(),
            is_correct: query.is_correct,
            include_concept_explanation: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feedback_request_deserializes_camel_case() {
        let json = r#"{
            "questionText": "What is a closure in JavaScript?",
            "studentAnswer": "A nested function",
            "isCorrect": true
        }"#;

        let request: FeedbackRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.question_text, "What is a closure in JavaScript?");
        assert_eq!(request.student_answer, "A nested function");
        assert_eq!(request.is_correct, Some(true));
        assert!(request.correct_answer.is_none());
    }

    #[test]
    fn test_feedback_request_validation() {
        let valid = FeedbackRequest {
            question_text: "What are React hooks?".to_string(),
            student_answer: "Functions".to_string(),
            correct_answer: None,
            is_correct: None,
        };
        assert!(valid.validate().is_ok());

        let empty_question = FeedbackRequest {
            question_text: String::new(),
            student_answer: "Functions".to_string(),
            correct_answer: None,
            is_correct: None,
        };
        assert!(empty_question.validate().is_err());
    }

    #[test]
    fn test_remote_payload_always_requests_concept_explanation() {
        let query = FeedbackQuery::new("What are React hooks?", "Functions");
        let payload = RemoteFeedbackPayload::from_query(&query);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["includeConceptExplanation"], true);
        assert_eq!(json["questionText"], "What are React hooks?");
        assert_eq!(json["studentAnswer"], "Functions");
    }

    #[test]
    fn test_remote_payload_omits_absent_optionals() {
        let query = FeedbackQuery::new("q", "a");
        let payload = RemoteFeedbackPayload::from_query(&query);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("correctAnswer").is_none());
        assert!(json.get("isCorrect").is_none());
    }
}
