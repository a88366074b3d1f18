use crate::draft::market::MarketTrend;
use crate::draft::{DraftCandidate, PickRecord};
use crate::league::PlayerPosition;
use itertools::Itertools;
use std::collections::HashMap;

/// Trailing picks feeding run counters and trend detection.
pub const RECENT_PICK_WINDOW: usize = 5;

/// Read-only view of the draft room at one pick. Built fresh per pick and
/// borrowed by everything that evaluates candidates.
#[derive(Debug)]
pub struct DraftContext<'d> {
    pub current_round: u8,
    pub current_pick: u16,
    pub available_players: &'d [DraftCandidate],
    /// Trailing window of history, newest last. At most RECENT_PICK_WINDOW.
    pub recent_picks: &'d [PickRecord],
    pub position_runs: HashMap<PlayerPosition, u8>,
    pub market_trends: Vec<MarketTrend>,
    /// Seconds left on the pick clock.
    pub time_remaining: f32,
}

impl<'d> DraftContext<'d> {
    pub fn new(
        current_round: u8,
        current_pick: u16,
        available_players: &'d [DraftCandidate],
        history: &'d [PickRecord],
        time_remaining: f32,
    ) -> Self {
        let window_start = history.len().saturating_sub(RECENT_PICK_WINDOW);
        let recent_picks = &history[window_start..];

        let position_runs = recent_picks
            .iter()
            .counts_by(|p| p.candidate.position)
            .into_iter()
            .map(|(position, count)| (position, count as u8))
            .collect();

        DraftContext {
            current_round,
            current_pick,
            available_players,
            recent_picks,
            position_runs,
            market_trends: Vec::new(),
            time_remaining,
        }
    }

    pub fn with_trends(mut self, market_trends: Vec<MarketTrend>) -> Self {
        self.market_trends = market_trends;
        self
    }

    pub fn position_run(&self, position: PlayerPosition) -> u8 {
        self.position_runs.get(&position).copied().unwrap_or(0)
    }

    pub fn trend_for(&self, position: PlayerPosition) -> Option<&MarketTrend> {
        self.market_trends.iter().find(|t| t.position == position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pick(pick_number: u16, position: PlayerPosition) -> PickRecord {
        let timestamp = NaiveDate::from_ymd_opt(2025, 8, 24)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();

        let candidate = DraftCandidate::new(
            pick_number as u32,
            format!("Player {}", pick_number),
            position,
            String::from("KC"),
            150.0,
            Some(pick_number as f32),
            25,
        );

        PickRecord::new(pick_number, 1, candidate, timestamp)
    }

    #[test]
    fn test_window_keeps_trailing_five() {
        let history: Vec<PickRecord> = (1..=8)
            .map(|n| pick(n, PlayerPosition::WideReceiver))
            .collect();

        let context = DraftContext::new(1, 9, &[], &history, 90.0);

        assert_eq!(context.recent_picks.len(), RECENT_PICK_WINDOW);
        assert_eq!(context.recent_picks[0].pick_number, 4);
        assert_eq!(context.recent_picks[4].pick_number, 8);
    }

    #[test]
    fn test_short_history_is_whole_window() {
        let history = vec![
            pick(1, PlayerPosition::RunningBack),
            pick(2, PlayerPosition::RunningBack),
        ];

        let context = DraftContext::new(1, 3, &[], &history, 90.0);

        assert_eq!(context.recent_picks.len(), 2);
        assert_eq!(context.position_run(PlayerPosition::RunningBack), 2);
    }

    #[test]
    fn test_position_runs_count_window_only() {
        let mut history: Vec<PickRecord> = (1..=5)
            .map(|n| pick(n, PlayerPosition::RunningBack))
            .collect();
        history.extend((6..=10).map(|n| pick(n, PlayerPosition::WideReceiver)));

        let context = DraftContext::new(1, 11, &[], &history, 90.0);

        // The early running back run has rolled out of the window.
        assert_eq!(context.position_run(PlayerPosition::RunningBack), 0);
        assert_eq!(context.position_run(PlayerPosition::WideReceiver), 5);
    }

    #[test]
    fn test_empty_history() {
        let context = DraftContext::new(1, 1, &[], &[], 90.0);

        assert!(context.recent_picks.is_empty());
        assert_eq!(context.position_run(PlayerPosition::Quarterback), 0);
        assert!(context.trend_for(PlayerPosition::Quarterback).is_none());
    }
}
