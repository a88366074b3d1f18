use crate::draft::PickRecord;
use crate::league::{League, PlayerPosition};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize)]
pub struct TeamDraftSummary {
    pub team_id: u32,
    pub team_name: String,
    pub picks: Vec<u16>,
    pub projection_total: f32,
    pub position_counts: HashMap<PlayerPosition, u8>,
}

/// Full outcome of one simulated draft.
#[derive(Debug, Clone, Serialize)]
pub struct DraftResult {
    pub league_id: u32,
    pub league_name: String,
    pub picks: Vec<PickRecord>,
    pub team_summaries: Vec<TeamDraftSummary>,
}

impl DraftResult {
    pub fn from_history(league: &League, picks: Vec<PickRecord>) -> Self {
        let team_summaries = league
            .teams
            .iter()
            .map(|team| TeamDraftSummary {
                team_id: team.id,
                team_name: team.name.clone(),
                picks: picks
                    .iter()
                    .filter(|p| p.team_id == team.id)
                    .map(|p| p.pick_number)
                    .collect(),
                projection_total: team.projection_total(),
                position_counts: team.roster_counts(),
            })
            .collect();

        DraftResult {
            league_id: league.id,
            league_name: league.name.clone(),
            picks,
            team_summaries,
        }
    }

    pub fn reach_count(&self) -> usize {
        self.picks.iter().filter(|p| p.was_reach).count()
    }

    pub fn team_summary(&self, team_id: u32) -> Option<&TeamDraftSummary> {
        self.team_summaries.iter().find(|s| s.team_id == team_id)
    }
}
