use std::time::Duration;

use crate::models::domain::insights::LearningInsights;

pub struct InsightsService;

impl InsightsService {
    /// Generate learning insights for a user. Returns mocked content
    /// until a real model service is wired in; the delay stands in for
    /// analysis time.
    pub async fn generate(&self, user_id: &str) -> LearningInsights {
        log::info!("generating learning insights for user {}", user_id);

        tokio::time::sleep(Duration::from_millis(500)).await;

        LearningInsights {
            strengths: vec![
                "JavaScript Basics".to_string(),
                "HTML Structure".to_string(),
                "CSS Layouts".to_string(),
            ],
            areas_to_improve: vec![
                "React Hooks".to_string(),
                "State Management".to_string(),
                "API Integration".to_string(),
            ],
            recommendations: vec![
                "Practice more with React Hooks by building small components".to_string(),
                "Try building a project with Redux to understand state management better".to_string(),
                "Review API documentation and integration patterns with RESTful services".to_string(),
            ],
        }
    }
}
