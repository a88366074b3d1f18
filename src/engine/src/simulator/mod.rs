pub mod batch;
pub mod result;

pub use batch::*;
pub use result::*;

use crate::draft::context::DraftContext;
use crate::draft::engine::DraftEngine;
use crate::draft::pick::PickRecord;
use crate::draft::strategy::needs;
use crate::draft::DraftCandidate;
use crate::league::{League, PlayerPosition, Team};
use crate::utils::Logging;
use chrono::{Duration, NaiveDateTime};
use log::{debug, info, warn};
use std::cmp::Ordering;

/// Seconds the user slot burns per pick. Rival latency comes from their
/// behavior models.
const USER_PICK_LATENCY: f32 = 30.0;

#[derive(Debug, Clone)]
pub struct DraftSettings {
    pub rounds: u8,
    pub pick_clock_secs: f32,
    pub user_team_id: u32,
    pub start: NaiveDateTime,
}

impl DraftSettings {
    pub fn new(user_team_id: u32, start: NaiveDateTime) -> Self {
        DraftSettings {
            rounds: PlayerPosition::roster_size(),
            pick_clock_secs: 90.0,
            user_team_id,
            start,
        }
    }
}

/// Drives one draft from the first pick to the last. The user slot picks
/// off the advisor's top recommendation, rival slots pick through their
/// behavior models.
pub struct DraftSimulation {
    pub league: League,
    pub engine: DraftEngine,
    pool: Vec<DraftCandidate>,
    history: Vec<PickRecord>,
    settings: DraftSettings,
    clock: NaiveDateTime,
    next_pick: u16,
}

impl DraftSimulation {
    pub fn new(
        league: League,
        mut pool: Vec<DraftCandidate>,
        settings: DraftSettings,
        mut engine: DraftEngine,
    ) -> Self {
        // The board reads in market order.
        pool.sort_by(|a, b| {
            a.adp_or_default()
                .partial_cmp(&b.adp_or_default())
                .unwrap_or(Ordering::Equal)
        });

        let rivals: Vec<Team> = league
            .teams
            .iter()
            .filter(|t| t.id != settings.user_team_id)
            .cloned()
            .collect();

        engine.initialize_opponent_models(&rivals);

        let clock = settings.start;

        DraftSimulation {
            league,
            engine,
            pool,
            history: Vec::new(),
            settings,
            clock,
            next_pick: 1,
        }
    }

    pub fn total_picks(&self) -> u16 {
        self.settings.rounds as u16 * self.league.team_count() as u16
    }

    pub fn is_complete(&self) -> bool {
        self.next_pick > self.total_picks()
    }

    pub fn history(&self) -> &[PickRecord] {
        &self.history
    }

    pub fn remaining_pool(&self) -> &[DraftCandidate] {
        &self.pool
    }

    /// Executes the pick currently on the clock. None when the draft is
    /// over or the slot had to pass.
    pub fn advance_pick(&mut self) -> Option<PickRecord> {
        if self.is_complete() {
            return None;
        }

        let overall = self.next_pick;
        // Advance up front so a passed slot cannot stall the draft.
        self.next_pick += 1;

        let round = self.league.round_of(overall);

        let (team_id, is_user, roster_counts) = {
            let team = self.league.team_on_clock(overall)?;
            (
                team.id,
                team.id == self.settings.user_team_id,
                team.roster_counts(),
            )
        };

        // Positions already at their roster cap drop off this team's board.
        let tick_pool: Vec<DraftCandidate> = self
            .pool
            .iter()
            .filter(|c| {
                roster_counts.get(&c.position).copied().unwrap_or(0) < c.position.roster_max()
            })
            .cloned()
            .collect();

        let context = DraftContext::new(
            round,
            overall,
            &tick_pool,
            &self.history,
            self.settings.pick_clock_secs,
        );
        let trends = self.engine.analyze_market_trends(&context);
        let context = context.with_trends(trends);

        let recommendation = if is_user {
            let user_team = self.league.team(team_id)?;

            self.engine
                .generate_strategy_recommendations(user_team, &context)
                .into_iter()
                .next()
        } else {
            self.engine.predict_opponent_pick(team_id, &context)
        };

        let Some(recommendation) = recommendation else {
            warn!(
                "pick {} passed: nothing draftable for team {}",
                overall, team_id
            );
            return None;
        };

        let latency = self
            .engine
            .opponent_model(team_id)
            .map(|m| m.predicted_behavior.avg_pick_latency)
            .unwrap_or(USER_PICK_LATENCY);

        self.clock += Duration::seconds(latency as i64);

        let alignment = needs::need_score(recommendation.candidate.position, &roster_counts);

        let record = PickRecord::new(
            overall,
            team_id,
            recommendation.candidate.clone(),
            self.clock,
        )
        .with_reasoning(recommendation.joined_reasoning())
        .with_confidence(recommendation.confidence)
        .with_alignment(alignment);

        self.engine.update_opponent_model(team_id, &record, &context);

        debug!(
            "pick {}: team {} takes {} ({})",
            overall, team_id, record.candidate.name, record.candidate.position
        );

        self.pool.retain(|c| c.id != record.candidate.id);

        if let Some(team) = self.league.team_mut(team_id) {
            team.add_to_roster(record.candidate.clone());
        }

        self.history.push(record.clone());

        Some(record)
    }

    pub fn run(mut self) -> DraftResult {
        info!(
            "draft started: {} teams, {} rounds, {} candidates",
            self.league.team_count(),
            self.settings.rounds,
            self.pool.len()
        );

        while !self.is_complete() {
            let message = format!("pick {}", self.next_pick);
            Logging::estimate_result(|| self.advance_pick(), &message);
        }

        let reaches = self.history.iter().filter(|p| p.was_reach).count();

        info!(
            "draft complete: {} picks, {} reaches",
            self.history.len(),
            reaches
        );

        DraftResult::from_history(&self.league, self.history)
    }
}
