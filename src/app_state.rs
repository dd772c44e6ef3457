use std::sync::Arc;

use crate::{
    config::Config,
    services::{FeedbackClient, FeedbackService, HttpFeedbackClient, InsightsService},
};

#[derive(Clone)]
pub struct AppState {
    pub feedback_service: Arc<FeedbackService>,
    pub insights_service: Arc<InsightsService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(HttpFeedbackClient::new(&config.feedback_service_url));
        Self::with_client(config, client)
    }

    /// Wire the state around an alternate feedback transport. Tests use
    /// this to stub the remote endpoint.
    pub fn with_client(config: Config, client: Arc<dyn FeedbackClient>) -> Self {
        Self {
            feedback_service: Arc::new(FeedbackService::new(client)),
            insights_service: Arc::new(InsightsService),
            config: Arc::new(config),
        }
    }
}
