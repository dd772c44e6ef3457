use std::sync::Arc;

use crate::{
    models::domain::feedback::FeedbackQuery,
    models::dto::request::RemoteFeedbackPayload,
    services::concept_library::concept_explanation,
    services::remote_client::FeedbackClient,
};

/// Result of one remote feedback attempt. Failure covers transport
/// errors, non-2xx statuses, and well-formed replies without usable
/// feedback text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteOutcome {
    Success(String),
    Failure(String),
}

pub struct FeedbackService {
    client: Arc<dyn FeedbackClient>,
}

impl FeedbackService {
    pub fn new(client: Arc<dyn FeedbackClient>) -> Self {
        Self { client }
    }

    /// Produce explanatory feedback for an answered question.
    ///
    /// The remote endpoint is asked first and its text wins verbatim
    /// when present. Every failure path degrades to locally templated
    /// text; the result is never empty and never an error.
    pub async fn resolve(&self, query: &FeedbackQuery) -> String {
        log::info!(
            "generating feedback for question: {:?}",
            query.question_text
        );

        match self.remote_feedback(query).await {
            RemoteOutcome::Success(feedback) => feedback,
            RemoteOutcome::Failure(reason) => {
                log::warn!(
                    "remote feedback unavailable ({}), falling back to local templates",
                    reason
                );
                local_fallback(query)
            }
        }
    }

    async fn remote_feedback(&self, query: &FeedbackQuery) -> RemoteOutcome {
        let payload = RemoteFeedbackPayload::from_query(query);

        match self.client.request_feedback(&payload).await {
            Ok(envelope) => match envelope.feedback {
                Some(feedback) if !feedback.is_empty() => RemoteOutcome::Success(feedback),
                _ => RemoteOutcome::Failure("response carried no feedback text".to_string()),
            },
            Err(err) => RemoteOutcome::Failure(err.to_string()),
        }
    }
}

/// Build feedback text locally when the remote endpoint is unavailable.
/// Three tiers: affirmation for correct answers, correction when the
/// correct answer is known, and a generic acknowledgement otherwise.
/// Each embeds a concept explanation keyed off the question text.
pub fn local_fallback(query: &FeedbackQuery) -> String {
    let explanation = concept_explanation(&query.question_text);

    if query.is_correct == Some(true) {
        format!(
            "Great job! Your answer is correct. This demonstrates your understanding of the concept. \
             Let me explain further: {}Keep up the good work and continue building on this knowledge.",
            explanation
        )
    } else if let Some(correct_answer) = &query.correct_answer {
        format!(
            "Your answer needs improvement. The correct answer is: {}. \
             Here's a detailed explanation of this concept: {}Take some time to review this concept. \
             Remember, mistakes are opportunities for learning and growth.",
            correct_answer, explanation
        )
    } else {
        format!(
            "Thank you for your response. Your answer shows effort, but let me provide a more \
             detailed explanation of this concept: {}Consider reviewing the material and practicing \
             with additional examples.",
            explanation
        )
    }
}
