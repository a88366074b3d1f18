use crate::draft::DraftCandidate;
use crate::draft::context::DraftContext;
use crate::draft::opponent::personality::{PersonalityProfile, Tendencies};
use crate::league::PlayerPosition;

const VALUE_BONUS_SCALE: f32 = 0.2;
const REACH_DISCOUNT_SCALE: f32 = 0.3;
const TREND_BONUS_SCALE: f32 = 0.15;
const RECENCY_SCALE: f32 = 0.1;
const RISK_DISCOUNT_SCALE: f32 = 0.2;

/// Same-position picks in the window before the trend factor engages.
const TREND_RUN_TRIGGER: u8 = 2;
/// Composite risk above this marks a risky candidate.
pub const RISK_TRIGGER: f32 = 0.5;

pub struct CandidateScorer;

impl CandidateScorer {
    /// Scores one candidate through a personality's eyes. Multiplicative
    /// chain over the raw projection; factor order is fixed.
    pub fn score(
        candidate: &DraftCandidate,
        tendencies: &Tendencies,
        profile: &PersonalityProfile,
        context: &DraftContext<'_>,
    ) -> f32 {
        let mut score = candidate.projection.max(0.0);

        score *= profile.position_priority(candidate.position);
        score *= adp_factor(candidate, tendencies, context.current_pick);
        score *= trend_factor(candidate.position, tendencies, context);
        score *= recency_factor(candidate, tendencies);
        score *= risk_factor(candidate, tendencies);

        score
    }
}

/// Market-price factor. Candidates the market prices later than this slot
/// reward value focus; candidates already past their ADP score through
/// reach tendency, so disciplined personalities discount them harder.
fn adp_factor(candidate: &DraftCandidate, tendencies: &Tendencies, current_pick: u16) -> f32 {
    let delta = candidate.adp_delta(current_pick);

    if delta > 0.0 {
        1.0 + tendencies.value_focus * VALUE_BONUS_SCALE
    } else {
        1.0 - (1.0 - tendencies.reach_tendency) * REACH_DISCOUNT_SCALE
    }
}

fn trend_factor(
    position: PlayerPosition,
    tendencies: &Tendencies,
    context: &DraftContext<'_>,
) -> f32 {
    if context.position_run(position) >= TREND_RUN_TRIGGER {
        1.0 + tendencies.trend_following * TREND_BONUS_SCALE
    } else {
        1.0
    }
}

fn recency_factor(candidate: &DraftCandidate, tendencies: &Tendencies) -> f32 {
    1.0 + tendencies.recency_bias * candidate.recent_form.clamp(-1.0, 1.0) * RECENCY_SCALE
}

fn risk_factor(candidate: &DraftCandidate, tendencies: &Tendencies) -> f32 {
    if candidate_risk(candidate) > RISK_TRIGGER {
        1.0 - (1.0 - tendencies.risk_tolerance) * RISK_DISCOUNT_SCALE
    } else {
        1.0
    }
}

/// Composite risk in [0, 1] from age curve, injury flag and the running
/// back attrition base rate.
pub fn candidate_risk(candidate: &DraftCandidate) -> f32 {
    let mut risk: f32 = 0.2;

    risk += match candidate.age {
        age if age < 23 => 0.1,
        age if age <= 27 => 0.0,
        age if age <= 29 => 0.1,
        _ => 0.25,
    };

    if let Some(status) = candidate.injury_status {
        risk += status.risk_weight();
    }

    if candidate.position == PlayerPosition::RunningBack {
        risk += 0.15;
    }

    risk.clamp(0.0, 1.0)
}
