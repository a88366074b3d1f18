pub mod simulator;
pub use simulator::*;

pub mod draft;
pub mod league;

pub mod shared;
pub mod utils;

// Re-export draft items
pub use draft::{
    // Modules
    opponent, strategy,
    // Board exports
    DraftCandidate, InjuryStatus, DEFAULT_ADP,
    DraftContext, RECENT_PICK_WINDOW,
    PickRecord, PickClassification,
    // Market exports
    MarketAnalyzer, MarketTrend, TrendDirection,
    // Opponent exports
    OpponentModel, PredictedBehavior, AdaptationEvent,
    PersonalityProfile, Tendencies, personality_catalog,
    CandidateScorer,
    // Strategy exports
    StrategyAdvisor, PickRecommendation,
    // Engine itself
    DraftEngine,
};

// Re-export league items
pub use league::{League, PlayerPosition, Team};

pub use shared::DraftRng;
pub use utils::*;
