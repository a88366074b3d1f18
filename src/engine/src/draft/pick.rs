use crate::draft::DraftCandidate;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Slots ahead of ADP before a pick counts as a reach.
pub const REACH_THRESHOLD: f32 = 5.0;
pub const MAJOR_REACH_THRESHOLD: f32 = 15.0;
/// Slots past ADP before a pick counts as value.
pub const VALUE_THRESHOLD: f32 = -10.0;
/// Consecutive same-position picks that make a run.
pub const POSITION_RUN_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PickClassification {
    MajorReach,
    Reach,
    Value,
    TrendFollow,
    Standard,
}

impl PickClassification {
    pub fn label(&self) -> &'static str {
        match self {
            PickClassification::MajorReach => "major reach",
            PickClassification::Reach => "reach",
            PickClassification::Value => "value",
            PickClassification::TrendFollow => "trend follow",
            PickClassification::Standard => "standard",
        }
    }
}

/// Buckets a completed pick by how far it landed from the market price.
/// ADP-based buckets win over the run bucket when both apply.
pub fn classify_pick(
    pick_number: u16,
    candidate: &DraftCandidate,
    position_run: u8,
) -> PickClassification {
    let delta = candidate.adp_delta(pick_number);

    if delta > MAJOR_REACH_THRESHOLD {
        PickClassification::MajorReach
    } else if delta > REACH_THRESHOLD {
        PickClassification::Reach
    } else if delta < VALUE_THRESHOLD {
        PickClassification::Value
    } else if position_run >= POSITION_RUN_THRESHOLD {
        PickClassification::TrendFollow
    } else {
        PickClassification::Standard
    }
}

/// Immutable record of one completed selection.
#[derive(Debug, Clone, Serialize)]
pub struct PickRecord {
    pub pick_number: u16,
    pub team_id: u32,
    pub candidate: DraftCandidate,
    pub timestamp: NaiveDateTime,
    pub reasoning: String,
    pub confidence: f32,
    /// pick_number - adp. Negative when the player went before his ADP.
    pub adp_deviation: f32,
    pub was_reach: bool,
    pub strategy_alignment: f32,
}

impl PickRecord {
    pub fn new(
        pick_number: u16,
        team_id: u32,
        candidate: DraftCandidate,
        timestamp: NaiveDateTime,
    ) -> Self {
        let adp_deviation = pick_number as f32 - candidate.adp_or_default();
        let was_reach = candidate.adp_delta(pick_number) > REACH_THRESHOLD;

        PickRecord {
            pick_number,
            team_id,
            candidate,
            timestamp,
            reasoning: String::new(),
            confidence: 0.0,
            adp_deviation,
            was_reach,
            strategy_alignment: 0.0,
        }
    }

    pub fn with_reasoning(mut self, reasoning: String) -> Self {
        self.reasoning = reasoning;
        self
    }

    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = confidence;
        self
    }

    pub fn with_alignment(mut self, strategy_alignment: f32) -> Self {
        self.strategy_alignment = strategy_alignment;
        self
    }
}
