use crate::draft::context::DraftContext;
use crate::draft::market::{adp_value_score, market_timing_score};
use crate::draft::opponent::personality::{PersonalityProfile, Tendencies};
use crate::draft::opponent::scoring::{self, CandidateScorer, RISK_TRIGGER};
use crate::draft::pick::{classify_pick, PickClassification, PickRecord, REACH_THRESHOLD};
use crate::draft::recommendation::PickRecommendation;
use crate::draft::DraftCandidate;
use crate::draft::strategy::needs;
use crate::league::{PlayerPosition, Team};
use crate::shared::DraftRng;
use log::debug;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

/// Model confidence never clears this, however well predictions land.
pub const CONFIDENCE_CEILING: f32 = 0.95;
const INITIAL_CONFIDENCE: f32 = 0.5;

const SHORTLIST_BASE: f32 = 3.0;
const SHORTLIST_DECAY: f32 = 0.7;
const ALTERNATIVES_KEPT: usize = 3;

/// Observed-vs-modeled gap on a tendency before it adapts.
const ADAPTATION_TRIGGER: f32 = 0.3;
const ADAPTATION_STEP_SCALE: f32 = 0.1;
const CONFIDENCE_STEP_SCALE: f32 = 0.1;

/// What the model currently expects this opponent to do.
#[derive(Debug, Clone)]
pub struct PredictedBehavior {
    /// Position likelihoods summing to 1.0, or empty when every position
    /// weighs zero for this roster.
    pub next_position_likelihood: HashMap<PlayerPosition, f32>,
    pub reach_probability: f32,
    /// Seconds this opponent tends to burn before picking.
    pub avg_pick_latency: f32,
    /// Clock seconds left under which this opponent panic-picks.
    pub panic_threshold: f32,
}

/// One processed observation, recorded whether or not tendencies moved.
#[derive(Debug, Clone)]
pub struct AdaptationEvent {
    pub round: u8,
    pub trigger: PickClassification,
    /// Model confidence after processing the observation.
    pub confidence: f32,
}

/// Per-opponent behavior model. Starts from a shared archetype and drifts
/// toward what the opponent actually does as picks come in.
#[derive(Debug)]
pub struct OpponentModel {
    pub team_id: u32,
    pub personality: Arc<PersonalityProfile>,
    /// Per-team copy of the archetype tendencies, free to drift.
    pub adapted_tendencies: Tendencies,
    pub confidence: f32,
    pub predicted_behavior: PredictedBehavior,
    pub adaptation_history: Vec<AdaptationEvent>,
    roster_counts: HashMap<PlayerPosition, u8>,
}

impl OpponentModel {
    pub fn from_team(team: &Team, personality: Arc<PersonalityProfile>) -> Self {
        let adapted_tendencies = personality.tendencies;
        let roster_counts = team.roster_counts();

        let mut model = OpponentModel {
            team_id: team.id,
            personality,
            adapted_tendencies,
            confidence: INITIAL_CONFIDENCE,
            predicted_behavior: PredictedBehavior {
                next_position_likelihood: HashMap::new(),
                reach_probability: adapted_tendencies.reach_tendency,
                avg_pick_latency: 0.0,
                panic_threshold: 0.0,
            },
            adaptation_history: Vec::new(),
            roster_counts,
        };

        model.refresh_predicted_behavior();

        model
    }

    pub fn position_count(&self, position: PlayerPosition) -> u8 {
        self.roster_counts.get(&position).copied().unwrap_or(0)
    }

    /// Low confidence widens the candidate shortlist, high confidence
    /// narrows it toward the top of the board.
    pub fn shortlist_width(&self) -> usize {
        (SHORTLIST_BASE * (2.0 - self.confidence)).ceil() as usize
    }

    /// Predicts this opponent's selection from the current board. Returns
    /// None only when nothing is available.
    pub fn predict_pick(
        &self,
        context: &DraftContext<'_>,
        rng: &mut DraftRng,
    ) -> Option<PickRecommendation> {
        if context.available_players.is_empty() {
            return None;
        }

        let mut scored: Vec<(&DraftCandidate, f32)> = context
            .available_players
            .iter()
            .map(|candidate| {
                (
                    candidate,
                    CandidateScorer::score(
                        candidate,
                        &self.adapted_tendencies,
                        &self.personality,
                        context,
                    ),
                )
            })
            .collect();

        // Stable sort keeps board order between equal scores.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

        let width = self.shortlist_width().min(scored.len());
        let shortlist = &scored[..width];
        let rank = weighted_rank(shortlist.len(), rng);
        let (candidate, _) = shortlist[rank];

        let alternatives: Vec<DraftCandidate> = shortlist
            .iter()
            .skip(rank + 1)
            .take(ALTERNATIVES_KEPT)
            .map(|(c, _)| (*c).clone())
            .collect();

        Some(PickRecommendation {
            reasoning: self.build_reasoning(candidate, context),
            confidence: self.confidence,
            risk: scoring::candidate_risk(candidate),
            value: adp_value_score(candidate.adp_or_default(), context.current_pick),
            strategic_fit: needs::need_score(candidate.position, &self.roster_counts),
            market_timing: market_timing_score(candidate.position, &context.market_trends, None),
            candidate: candidate.clone(),
            alternatives,
        })
    }

    /// Feeds one completed pick by this opponent back into the model.
    pub fn update_model(&mut self, pick: &PickRecord, context: &DraftContext<'_>) {
        let position = pick.candidate.position;
        let classification = classify_pick(
            pick.pick_number,
            &pick.candidate,
            context.position_run(position),
        );

        // Accuracy is judged against the prediction that existed before
        // this pick came in.
        let accuracy = self.prediction_accuracy(position);

        self.adapt_tendencies(classification);

        self.confidence = (self.confidence + (accuracy - 0.5) * CONFIDENCE_STEP_SCALE)
            .clamp(0.0, CONFIDENCE_CEILING);

        self.adaptation_history.push(AdaptationEvent {
            round: context.current_round,
            trigger: classification,
            confidence: self.confidence,
        });

        *self.roster_counts.entry(position).or_insert(0) += 1;

        self.refresh_predicted_behavior();
    }

    fn adapt_tendencies(&mut self, classification: PickClassification) {
        let observed_reach = match classification {
            PickClassification::MajorReach => 1.0,
            PickClassification::Reach => 0.75,
            _ => 0.0,
        };
        let observed_value = match classification {
            PickClassification::Value => 1.0,
            _ => 0.0,
        };

        let step = self.personality.adaptability * ADAPTATION_STEP_SCALE;

        let mut adapted = false;

        if (observed_reach - self.adapted_tendencies.reach_tendency).abs() > ADAPTATION_TRIGGER {
            self.adapted_tendencies.reach_tendency =
                nudge(self.adapted_tendencies.reach_tendency, observed_reach, step);
            adapted = true;
        }

        if (observed_value - self.adapted_tendencies.value_focus).abs() > ADAPTATION_TRIGGER {
            self.adapted_tendencies.value_focus =
                nudge(self.adapted_tendencies.value_focus, observed_value, step);
            adapted = true;
        }

        if adapted {
            debug!(
                "team {}: tendencies adapted after {} (reach {:.2}, value {:.2})",
                self.team_id,
                classification.label(),
                self.adapted_tendencies.reach_tendency,
                self.adapted_tendencies.value_focus
            );
        }
    }

    /// How much likelihood the current prediction gave the position that
    /// actually went. Uniform guessing maps to 0.5.
    fn prediction_accuracy(&self, position: PlayerPosition) -> f32 {
        let likelihoods = &self.predicted_behavior.next_position_likelihood;

        if likelihoods.is_empty() {
            return 0.5;
        }

        let likelihood = likelihoods.get(&position).copied().unwrap_or(0.0);

        (likelihood * PlayerPosition::ALL.len() as f32 * 0.5).clamp(0.0, 1.0)
    }

    fn refresh_predicted_behavior(&mut self) {
        let tendencies = &self.adapted_tendencies;

        self.predicted_behavior = PredictedBehavior {
            next_position_likelihood: self.position_likelihood(),
            reach_probability: tendencies.reach_tendency,
            avg_pick_latency: 18.0
                + (1.0 - tendencies.risk_tolerance) * 22.0
                + (1.0 - self.confidence) * 10.0,
            panic_threshold: 5.0 + (1.0 - tendencies.risk_tolerance) * 15.0,
        };
    }

    /// Normalized position weights from archetype priority, roster need
    /// and roster saturation.
    fn position_likelihood(&self) -> HashMap<PlayerPosition, f32> {
        let tendencies = &self.adapted_tendencies;

        let weighted: Vec<(PlayerPosition, f32)> = PlayerPosition::ALL
            .iter()
            .filter_map(|&position| {
                let need = needs::need_score(position, &self.roster_counts);
                let saturation = needs::saturation(position, &self.roster_counts);

                let weight = self.personality.position_priority(position)
                    * (1.0 + tendencies.needs_focus * need)
                    * (1.0 - tendencies.position_balance * saturation).max(0.0);

                (weight > 0.0).then_some((position, weight))
            })
            .collect();

        let total: f32 = weighted.iter().map(|(_, w)| w).sum();

        if total <= 0.0 {
            return HashMap::new();
        }

        weighted
            .into_iter()
            .map(|(position, weight)| (position, weight / total))
            .collect()
    }

    fn build_reasoning(
        &self,
        candidate: &DraftCandidate,
        context: &DraftContext<'_>,
    ) -> Vec<String> {
        let mut reasons = Vec::with_capacity(4);

        if self.personality.position_priority(candidate.position) > 1.05 {
            reasons.push(format!(
                "{} fits the {} blueprint",
                candidate.position, self.personality.name
            ));
        }

        if let Some(adp) = candidate.adp {
            let delta = candidate.adp_delta(context.current_pick);

            if delta > REACH_THRESHOLD {
                reasons.push(format!("Market expects him to last until pick {:.0}", adp));
            } else if delta < -REACH_THRESHOLD {
                reasons.push(format!("Fell {:.0} picks past his ADP", -delta));
            }
        }

        let run = context.position_run(candidate.position);
        if run >= 2 {
            reasons.push(format!(
                "{} run underway, {} of the last {} picks",
                candidate.position,
                run,
                context.recent_picks.len()
            ));
        }

        let need = needs::need_score(candidate.position, &self.roster_counts);
        if need >= 0.5 {
            reasons.push(format!(
                "Roster hole at {} ({} of {} filled)",
                candidate.position,
                self.position_count(candidate.position),
                candidate.position.roster_max()
            ));
        }

        if let Some(status) = candidate.injury_status {
            if scoring::candidate_risk(candidate) > RISK_TRIGGER {
                reasons.push(format!("Injury report: {}", status.label()));
            }
        }

        if context.time_remaining < self.predicted_behavior.panic_threshold {
            reasons.push(String::from("Clock pressure pick"));
        }

        if reasons.is_empty() {
            reasons.push(format!(
                "Best player available at pick {}",
                context.current_pick
            ));
        }

        reasons
    }
}

/// Steps a tendency toward an observed level, clamped to [0, 1].
fn nudge(current: f32, observed: f32, step: f32) -> f32 {
    if (observed - current).abs() < f32::EPSILON {
        return current;
    }

    let next = if observed > current {
        current + step
    } else {
        current - step
    };

    next.clamp(0.0, 1.0)
}

/// Rank draw over the shortlist with geometric decay, so the top candidate
/// stays the most likely selection.
fn weighted_rank(len: usize, rng: &mut DraftRng) -> usize {
    if len <= 1 {
        return 0;
    }

    let total: f32 = (0..len).map(|i| SHORTLIST_DECAY.powi(i as i32)).sum();
    let mut roll = rng.sample() * total;

    for rank in 0..len {
        let weight = SHORTLIST_DECAY.powi(rank as i32);

        if roll < weight {
            return rank;
        }

        roll -= weight;
    }

    len - 1
}
