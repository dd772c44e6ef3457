use serde::{Deserialize, Serialize};

use crate::models::domain::insights::LearningInsights;

#[derive(Debug, Clone, Serialize)]
pub struct FeedbackResponse {
    pub feedback: String,
}

/// Shape of the remote feedback endpoint's reply. The field is optional:
/// a well-formed 2xx response may still omit it, which counts as a
/// failure for the resolver.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoteFeedbackEnvelope {
    #[serde(default)]
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsResponse {
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub recommendations: Vec<String>,
}

impl From<LearningInsights> for InsightsResponse {
    fn from(insights: LearningInsights) -> Self {
        Self {
            strengths: insights.strengths,
            areas_to_improve: insights.areas_to_improve,
            recommendations: insights.recommendations,
        }
    }
}
