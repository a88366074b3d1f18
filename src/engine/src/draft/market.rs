use crate::draft::context::{DraftContext, RECENT_PICK_WINDOW};
use crate::league::PlayerPosition;
use itertools::Itertools;
use serde::Serialize;

/// Picks at one position inside the window before it reads as a trend.
pub const TREND_PICK_THRESHOLD: usize = 3;
const TREND_CONFIDENCE: f32 = 0.8;

/// Value gained per slot of ADP discount.
const ADP_VALUE_SLOPE: f32 = 0.05;
const ADP_VALUE_FLOOR: f32 = 0.2;
const ADP_VALUE_CEILING: f32 = 3.0;

/// Uniform per-position likelihood, the baseline for rival demand.
const DEMAND_BASELINE: f32 = 1.0 / PlayerPosition::ALL.len() as f32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Up,
    Down,
    Stable,
}

/// A positional run the room is currently on.
#[derive(Debug, Clone, Serialize)]
pub struct MarketTrend {
    pub position: PlayerPosition,
    pub direction: TrendDirection,
    /// Share of the trailing window taken by this position.
    pub magnitude: f32,
    pub confidence: f32,
    /// Picks the detection window spans.
    pub time_window: usize,
    pub contributing_picks: Vec<u16>,
}

pub struct MarketAnalyzer;

impl MarketAnalyzer {
    /// Run detection over the trailing pick window. Returns one Up trend
    /// per position that took at least TREND_PICK_THRESHOLD of the window,
    /// ordered by position for stable output.
    pub fn analyze(context: &DraftContext<'_>) -> Vec<MarketTrend> {
        let window = context.recent_picks;

        if window.is_empty() {
            return Vec::new();
        }

        let mut trends: Vec<MarketTrend> = window
            .iter()
            .counts_by(|p| p.candidate.position)
            .into_iter()
            .filter(|(_, count)| *count >= TREND_PICK_THRESHOLD)
            .map(|(position, count)| MarketTrend {
                position,
                direction: TrendDirection::Up,
                magnitude: count as f32 / RECENT_PICK_WINDOW as f32,
                confidence: TREND_CONFIDENCE,
                time_window: RECENT_PICK_WINDOW,
                contributing_picks: window
                    .iter()
                    .filter(|p| p.candidate.position == position)
                    .map(|p| p.pick_number)
                    .collect(),
            })
            .collect();

        trends.sort_by_key(|t| t.position);

        trends
    }
}

/// Scales an ADP discount into a multiplicative value score: 1.0 at market
/// price, ADP_VALUE_SLOPE per slot either side, clamped to sane bounds.
pub fn adp_value_score(adp: f32, current_pick: u16) -> f32 {
    let delta = adp - current_pick as f32;

    (1.0 + delta * ADP_VALUE_SLOPE).clamp(ADP_VALUE_FLOOR, ADP_VALUE_CEILING)
}

/// How urgent it is to act at this position right now. Base 0.5, pushed up
/// by an active run and by rival rosters demanding the position.
pub fn market_timing_score(
    position: PlayerPosition,
    trends: &[MarketTrend],
    rival_demand: Option<f32>,
) -> f32 {
    let mut timing = 0.5;

    if let Some(trend) = trends
        .iter()
        .find(|t| t.position == position && t.direction == TrendDirection::Up)
    {
        timing += trend.magnitude * 0.5;
    }

    if let Some(demand) = rival_demand {
        timing += (demand - DEMAND_BASELINE).max(0.0) * 0.6;
    }

    timing.clamp(0.0, 1.5)
}
