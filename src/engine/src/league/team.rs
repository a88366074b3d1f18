use crate::draft::DraftCandidate;
use crate::league::PlayerPosition;
use std::collections::HashMap;

/// One franchise in the draft room, user-controlled or not.
#[derive(Debug, Clone)]
pub struct Team {
    pub id: u32,
    pub name: String,
    /// 1-based slot in the first-round order.
    pub draft_slot: u8,
    pub roster: Vec<DraftCandidate>,
}

impl Team {
    pub fn new(id: u32, name: String, draft_slot: u8) -> Self {
        Team {
            id,
            name,
            draft_slot,
            roster: Vec::new(),
        }
    }

    pub fn add_to_roster(&mut self, candidate: DraftCandidate) {
        self.roster.push(candidate);
    }

    pub fn position_count(&self, position: PlayerPosition) -> u8 {
        self.roster.iter().filter(|c| c.position == position).count() as u8
    }

    pub fn has_open_slot(&self, position: PlayerPosition) -> bool {
        self.position_count(position) < position.roster_max()
    }

    pub fn roster_counts(&self) -> HashMap<PlayerPosition, u8> {
        let mut counts = HashMap::new();

        for candidate in &self.roster {
            *counts.entry(candidate.position).or_insert(0u8) += 1;
        }

        counts
    }

    pub fn projection_total(&self) -> f32 {
        self.roster.iter().map(|c| c.projection).sum()
    }
}
