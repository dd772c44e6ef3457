use serde::Serialize;

/// Per-user learning insights: what the student is strong at, what needs
/// work, and concrete next steps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LearningInsights {
    pub strengths: Vec<String>,
    pub areas_to_improve: Vec<String>,
    pub recommendations: Vec<String>,
}

impl LearningInsights {
    pub fn is_empty(&self) -> bool {
        self.strengths.is_empty() && self.areas_to_improve.is_empty() && self.recommendations.is_empty()
    }
}
