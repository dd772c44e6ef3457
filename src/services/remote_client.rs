use async_trait::async_trait;

use crate::{
    errors::{AppError, AppResult},
    models::dto::{request::RemoteFeedbackPayload, response::RemoteFeedbackEnvelope},
};

const QUESTION_FEEDBACK_PATH: &str = "/functions/v1/question-feedback";

/// Transport seam for the remote feedback endpoint, mockable in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FeedbackClient: Send + Sync {
    async fn request_feedback(
        &self,
        payload: &RemoteFeedbackPayload,
    ) -> AppResult<RemoteFeedbackEnvelope>;
}

pub struct HttpFeedbackClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpFeedbackClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: format!(
                "{}{}",
                base_url.trim_end_matches('/'),
                QUESTION_FEEDBACK_PATH
            ),
        }
    }
}

#[async_trait]
impl FeedbackClient for HttpFeedbackClient {
    async fn request_feedback(
        &self,
        payload: &RemoteFeedbackPayload,
    ) -> AppResult<RemoteFeedbackEnvelope> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Upstream(format!(
                "feedback service returned status {}",
                status
            )));
        }

        let envelope = response.json::<RemoteFeedbackEnvelope>().await?;
        Ok(envelope)
    }
}
