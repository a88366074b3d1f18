use crate::draft::engine::DraftEngine;
use crate::draft::DraftCandidate;
use crate::league::{League, PlayerPosition};
use crate::simulator::{DraftResult, DraftSettings, DraftSimulation};
use itertools::Itertools;
use log::info;
use rayon::prelude::*;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Where a player tends to go across a batch of mock drafts.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusSlot {
    pub candidate_id: u32,
    pub name: String,
    pub position: PlayerPosition,
    pub average_slot: f32,
    pub times_drafted: u32,
}

/// Aggregated view over many independent mocks, sorted by average slot.
#[derive(Debug, Clone, Serialize)]
pub struct ConsensusReport {
    pub runs: u32,
    pub slots: Vec<ConsensusSlot>,
}

impl ConsensusReport {
    pub fn from_results(runs: u32, results: &[DraftResult]) -> Self {
        let mut accumulated: HashMap<u32, (String, PlayerPosition, f32, u32)> = HashMap::new();

        for result in results {
            for pick in &result.picks {
                let entry = accumulated.entry(pick.candidate.id).or_insert((
                    pick.candidate.name.clone(),
                    pick.candidate.position,
                    0.0,
                    0,
                ));

                entry.2 += pick.pick_number as f32;
                entry.3 += 1;
            }
        }

        let slots = accumulated
            .into_iter()
            .map(|(candidate_id, (name, position, slot_sum, times_drafted))| ConsensusSlot {
                candidate_id,
                name,
                position,
                average_slot: slot_sum / times_drafted as f32,
                times_drafted,
            })
            .sorted_by(|a, b| {
                a.average_slot
                    .partial_cmp(&b.average_slot)
                    .unwrap_or(Ordering::Equal)
                    .then(a.candidate_id.cmp(&b.candidate_id))
            })
            .collect();

        ConsensusReport { runs, slots }
    }
}

pub struct MockDraftBatch;

impl MockDraftBatch {
    /// Runs independent seeded drafts in parallel and folds them into one
    /// consensus board. The league template and pool are shared read-only;
    /// every run clones its own mutable copies.
    pub fn run(
        league: &League,
        pool: &[DraftCandidate],
        settings: &DraftSettings,
        runs: u32,
        base_seed: u64,
    ) -> ConsensusReport {
        info!("mock batch: {} runs from seed {}", runs, base_seed);

        let results: Vec<DraftResult> = (0..runs)
            .into_par_iter()
            .map(|run| {
                let engine = DraftEngine::seeded(base_seed.wrapping_add(run as u64));

                DraftSimulation::new(league.clone(), pool.to_vec(), settings.clone(), engine)
                    .run()
            })
            .collect();

        ConsensusReport::from_results(runs, &results)
    }
}
