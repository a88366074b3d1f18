use crate::draft::DraftCandidate;
use serde::Serialize;

/// A suggested selection, produced for the user by the strategy advisor
/// and for rivals by their behavior models. Not retained between picks.
#[derive(Debug, Clone, Serialize)]
pub struct PickRecommendation {
    pub candidate: DraftCandidate,
    pub reasoning: Vec<String>,
    pub confidence: f32,
    /// Composite candidate risk in [0, 1].
    pub risk: f32,
    /// Multiplicative ADP value score, 1.0 at market price.
    pub value: f32,
    /// Roster-need fit in [0, 1].
    pub strategic_fit: f32,
    /// Urgency of acting at this position now.
    pub market_timing: f32,
    pub alternatives: Vec<DraftCandidate>,
}

impl PickRecommendation {
    /// Ordering key for recommendation lists.
    pub fn ranking_score(&self) -> f32 {
        self.confidence * self.value * self.strategic_fit
    }

    pub fn joined_reasoning(&self) -> String {
        self.reasoning.join("; ")
    }
}
