use crate::draft::context::DraftContext;
use crate::draft::market::{adp_value_score, market_timing_score};
use crate::draft::opponent::model::OpponentModel;
use crate::draft::opponent::scoring::candidate_risk;
use crate::draft::recommendation::PickRecommendation;
use crate::draft::strategy::needs;
use crate::draft::DraftCandidate;
use crate::league::{PlayerPosition, Team};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Candidates off the top of the board that get a full evaluation.
const ADVISOR_POOL_LIMIT: usize = 10;

const BASE_CONFIDENCE: f32 = 0.5;
const EMPTY_POSITION_BONUS: f32 = 0.3;
const VALUE_DELTA_BONUS: f32 = 0.2;
const EARLY_PREMIUM_BONUS: f32 = 0.2;

/// ADP slots past the current pick before the value bonus applies.
const VALUE_DELTA_TRIGGER: f32 = 5.0;
const EARLY_ROUND_LIMIT: u8 = 3;

pub struct StrategyAdvisor;

impl StrategyAdvisor {
    /// Ranked recommendations for the user's pick, best first. Ordered by
    /// confidence x value x roster fit; board order breaks ties.
    pub fn generate(
        user_team: &Team,
        context: &DraftContext<'_>,
        opponents: &HashMap<u32, OpponentModel>,
    ) -> Vec<PickRecommendation> {
        let counts = user_team.roster_counts();
        let rival_demand = Self::rival_demand(opponents);

        let mut recommendations: Vec<PickRecommendation> = context
            .available_players
            .iter()
            .take(ADVISOR_POOL_LIMIT)
            .map(|candidate| Self::evaluate(candidate, &counts, context, &rival_demand))
            .collect();

        recommendations.sort_by(|a, b| {
            b.ranking_score()
                .partial_cmp(&a.ranking_score())
                .unwrap_or(Ordering::Equal)
        });

        let trailing: Vec<DraftCandidate> = recommendations
            .iter()
            .skip(1)
            .take(3)
            .map(|r| r.candidate.clone())
            .collect();

        if let Some(first) = recommendations.first_mut() {
            first.alternatives = trailing;
        }

        recommendations
    }

    fn evaluate(
        candidate: &DraftCandidate,
        counts: &HashMap<PlayerPosition, u8>,
        context: &DraftContext<'_>,
        rival_demand: &HashMap<PlayerPosition, f32>,
    ) -> PickRecommendation {
        let position = candidate.position;
        let position_count = counts.get(&position).copied().unwrap_or(0);
        let need = needs::need_score(position, counts);
        let delta = candidate.adp_delta(context.current_pick);
        let demand = rival_demand.get(&position).copied();

        let mut confidence = BASE_CONFIDENCE;

        if position_count == 0 {
            confidence += EMPTY_POSITION_BONUS;
        }

        if delta > VALUE_DELTA_TRIGGER {
            confidence += VALUE_DELTA_BONUS;
        }

        if context.current_round <= EARLY_ROUND_LIMIT && position.is_premium() {
            confidence += EARLY_PREMIUM_BONUS;
        }

        let mut reasoning = Vec::with_capacity(4);

        if position_count == 0 {
            reasoning.push(format!("First {} slot still open", position));
        } else if need >= 0.5 {
            reasoning.push(format!(
                "Need at {}, {} of {} filled",
                position,
                position_count,
                position.roster_max()
            ));
        }

        if delta > VALUE_DELTA_TRIGGER {
            reasoning.push(format!("ADP edge of {:.0} picks at this slot", delta));
        }

        if context.current_round <= EARLY_ROUND_LIMIT && position.is_premium() {
            reasoning.push(format!(
                "Round {} premium position",
                context.current_round
            ));
        }

        if context.trend_for(position).is_some() {
            reasoning.push(format!("{} run in progress", position));
        }

        if let Some(demand) = demand {
            if demand > 0.25 {
                reasoning.push(format!(
                    "{:.0}% of rival rooms project {} next",
                    demand * 100.0,
                    position
                ));
            }
        }

        if reasoning.is_empty() {
            reasoning.push(format!("Balanced option at pick {}", context.current_pick));
        }

        PickRecommendation {
            candidate: candidate.clone(),
            reasoning,
            // Additive score, deliberately allowed past 1.0.
            confidence,
            risk: candidate_risk(candidate),
            value: adp_value_score(candidate.adp_or_default(), context.current_pick),
            strategic_fit: need,
            market_timing: market_timing_score(position, &context.market_trends, demand),
            alternatives: Vec::new(),
        }
    }

    /// Average next-position likelihood across rival models, in stable
    /// team-id order.
    fn rival_demand(opponents: &HashMap<u32, OpponentModel>) -> HashMap<PlayerPosition, f32> {
        if opponents.is_empty() {
            return HashMap::new();
        }

        let mut ids: Vec<u32> = opponents.keys().copied().collect();
        ids.sort_unstable();

        PlayerPosition::ALL
            .iter()
            .map(|&position| {
                let total: f32 = ids
                    .iter()
                    .filter_map(|id| opponents.get(id))
                    .map(|model| {
                        model
                            .predicted_behavior
                            .next_position_likelihood
                            .get(&position)
                            .copied()
                            .unwrap_or(0.0)
                    })
                    .sum();

                (position, total / opponents.len() as f32)
            })
            .collect()
    }
}
