use crate::league::PlayerPosition;
use std::collections::HashMap;
use std::sync::Arc;

/// Behavioral dials, all in [0, 1].
#[derive(Debug, Clone, Copy)]
pub struct Tendencies {
    /// Willingness to take players well before their ADP.
    pub reach_tendency: f32,
    /// Pull toward players still on the board past their market price.
    pub value_focus: f32,
    /// Aversion to stacking one position.
    pub position_balance: f32,
    /// Comfort with injury-flagged and high-variance players.
    pub risk_tolerance: f32,
    /// Weight of roster holes when choosing a position.
    pub needs_focus: f32,
    /// Weight of recent performance over season-long projection.
    pub recency_bias: f32,
    /// Pull toward positions the room is currently running on.
    pub trend_following: f32,
}

/// Fixed draft-room archetype. Shared immutably between models; per-team
/// drift lives in the model's adapted copy of the tendencies.
#[derive(Debug, Clone)]
pub struct PersonalityProfile {
    pub name: &'static str,
    pub tendencies: Tendencies,
    /// Multipliers applied to candidate scores by position. Missing
    /// positions read as neutral 1.0.
    pub position_priorities: HashMap<PlayerPosition, f32>,
    /// How fast observed behavior overrides the archetype, in [0, 1].
    pub adaptability: f32,
}

impl PersonalityProfile {
    pub fn position_priority(&self, position: PlayerPosition) -> f32 {
        self.position_priorities.get(&position).copied().unwrap_or(1.0)
    }
}

/// The archetype catalog every simulated room draws from.
pub fn personality_catalog() -> Vec<Arc<PersonalityProfile>> {
    vec![
        Arc::new(PersonalityProfile {
            name: "Value Hunter",
            tendencies: Tendencies {
                reach_tendency: 0.2,
                value_focus: 0.9,
                position_balance: 0.6,
                risk_tolerance: 0.45,
                needs_focus: 0.5,
                recency_bias: 0.3,
                trend_following: 0.25,
            },
            position_priorities: HashMap::from([
                (PlayerPosition::RunningBack, 1.1),
                (PlayerPosition::WideReceiver, 1.1),
            ]),
            adaptability: 0.5,
        }),
        Arc::new(PersonalityProfile {
            name: "Robust RB",
            tendencies: Tendencies {
                reach_tendency: 0.55,
                value_focus: 0.6,
                position_balance: 0.4,
                risk_tolerance: 0.5,
                needs_focus: 0.6,
                recency_bias: 0.4,
                trend_following: 0.4,
            },
            position_priorities: HashMap::from([
                (PlayerPosition::RunningBack, 1.5),
                (PlayerPosition::WideReceiver, 0.85),
                (PlayerPosition::TightEnd, 0.9),
                (PlayerPosition::Quarterback, 0.8),
            ]),
            adaptability: 0.4,
        }),
        Arc::new(PersonalityProfile {
            name: "Zero RB Advocate",
            tendencies: Tendencies {
                reach_tendency: 0.5,
                value_focus: 0.7,
                position_balance: 0.45,
                risk_tolerance: 0.6,
                needs_focus: 0.55,
                recency_bias: 0.5,
                trend_following: 0.35,
            },
            position_priorities: HashMap::from([
                (PlayerPosition::RunningBack, 0.4),
                (PlayerPosition::WideReceiver, 1.5),
                (PlayerPosition::TightEnd, 1.25),
                (PlayerPosition::Quarterback, 1.05),
            ]),
            adaptability: 0.45,
        }),
        Arc::new(PersonalityProfile {
            name: "Upside Chaser",
            tendencies: Tendencies {
                reach_tendency: 0.85,
                value_focus: 0.3,
                position_balance: 0.3,
                risk_tolerance: 0.9,
                needs_focus: 0.35,
                recency_bias: 0.85,
                trend_following: 0.6,
            },
            position_priorities: HashMap::from([
                (PlayerPosition::RunningBack, 1.1),
                (PlayerPosition::WideReceiver, 1.2),
                (PlayerPosition::Quarterback, 1.1),
                (PlayerPosition::Kicker, 0.6),
                (PlayerPosition::Defense, 0.6),
            ]),
            adaptability: 0.7,
        }),
        Arc::new(PersonalityProfile {
            name: "Steady Veteran",
            tendencies: Tendencies {
                reach_tendency: 0.15,
                value_focus: 0.65,
                position_balance: 0.85,
                risk_tolerance: 0.2,
                needs_focus: 0.8,
                recency_bias: 0.2,
                trend_following: 0.2,
            },
            position_priorities: HashMap::from([
                (PlayerPosition::Kicker, 0.9),
                (PlayerPosition::Defense, 0.9),
            ]),
            adaptability: 0.25,
        }),
        Arc::new(PersonalityProfile {
            name: "Trend Surfer",
            tendencies: Tendencies {
                reach_tendency: 0.6,
                value_focus: 0.4,
                position_balance: 0.35,
                risk_tolerance: 0.65,
                needs_focus: 0.4,
                recency_bias: 0.7,
                trend_following: 0.95,
            },
            position_priorities: HashMap::from([(PlayerPosition::WideReceiver, 1.15)]),
            adaptability: 0.8,
        }),
    ]
}
