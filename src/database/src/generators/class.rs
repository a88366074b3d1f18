use crate::loaders::NamesEntity;
use engine::{DraftCandidate, DraftRng, InjuryStatus, PlayerPosition};
use std::cmp::Ordering;

/// Positions and head counts of a generated draft class. Sized for a
/// 12-team room with spare depth at every position.
const CLASS_PLAN: [(PlayerPosition, u32); 6] = [
    (PlayerPosition::Quarterback, 26),
    (PlayerPosition::RunningBack, 58),
    (PlayerPosition::WideReceiver, 68),
    (PlayerPosition::TightEnd, 28),
    (PlayerPosition::Kicker, 16),
    (PlayerPosition::Defense, 16),
];

const INJURY_FLAG_RATE: f32 = 0.12;

pub struct DraftClassGenerator<'n> {
    names: &'n NamesEntity,
    pro_teams: &'n [String],
    next_id: u32,
}

impl<'n> DraftClassGenerator<'n> {
    pub fn new(names: &'n NamesEntity, pro_teams: &'n [String]) -> Self {
        DraftClassGenerator {
            names,
            pro_teams,
            next_id: 1,
        }
    }

    /// Builds the full class and prices it: ADP follows the projection
    /// order with market noise on top, so the board disagrees with pure
    /// projections the way a real room does.
    pub fn generate(&mut self, rng: &mut DraftRng) -> Vec<DraftCandidate> {
        let mut class: Vec<DraftCandidate> = Vec::new();

        for (position, count) in CLASS_PLAN {
            for rank in 0..count {
                class.push(self.generate_candidate(position, rank, count, rng));
            }
        }

        class.sort_by(|a, b| {
            b.projection
                .partial_cmp(&a.projection)
                .unwrap_or(Ordering::Equal)
        });

        for (rank, candidate) in class.iter_mut().enumerate() {
            let noise = rng.range_f32(-6.0, 6.0);
            candidate.adp = Some(((rank + 1) as f32 + noise).max(1.0));
        }

        class.sort_by(|a, b| {
            a.adp_or_default()
                .partial_cmp(&b.adp_or_default())
                .unwrap_or(Ordering::Equal)
        });

        class
    }

    fn generate_candidate(
        &mut self,
        position: PlayerPosition,
        rank: u32,
        count: u32,
        rng: &mut DraftRng,
    ) -> DraftCandidate {
        let id = self.next_id;
        self.next_id += 1;

        // Talent thins out down the position, with some scatter.
        let quality = 1.0 - rank as f32 / count as f32;
        let (floor, ceiling) = projection_range(position);
        let projection = floor + (ceiling - floor) * quality.powf(1.3) * rng.range_f32(0.92, 1.08);

        let (min_age, max_age) = age_range(position);
        let age = rng.range_u32(min_age, max_age) as u8;

        let pro_team = if position == PlayerPosition::Defense {
            // One unit per pro team.
            self.pro_teams[rank as usize % self.pro_teams.len()].clone()
        } else {
            self.pro_teams[rng.index(self.pro_teams.len())].clone()
        };

        let name = if position == PlayerPosition::Defense {
            format!("{} D/ST", pro_team)
        } else {
            format!(
                "{} {}",
                self.names.first_names[rng.index(self.names.first_names.len())],
                self.names.last_names[rng.index(self.names.last_names.len())]
            )
        };

        let mut candidate = DraftCandidate::new(id, name, position, pro_team, projection, None, age)
            .with_form(rng.range_f32(-0.6, 0.6));

        if position != PlayerPosition::Defense {
            if let Some(status) = roll_injury(rng) {
                candidate = candidate.with_injury(status);
            }
        }

        candidate
    }
}

fn projection_range(position: PlayerPosition) -> (f32, f32) {
    match position {
        PlayerPosition::Quarterback => (180.0, 400.0),
        PlayerPosition::RunningBack => (60.0, 340.0),
        PlayerPosition::WideReceiver => (60.0, 330.0),
        PlayerPosition::TightEnd => (40.0, 230.0),
        PlayerPosition::Kicker => (90.0, 160.0),
        PlayerPosition::Defense => (60.0, 140.0),
    }
}

fn age_range(position: PlayerPosition) -> (u32, u32) {
    match position {
        PlayerPosition::Quarterback => (22, 38),
        PlayerPosition::RunningBack => (21, 30),
        PlayerPosition::WideReceiver => (21, 32),
        PlayerPosition::TightEnd => (22, 33),
        PlayerPosition::Kicker => (23, 38),
        PlayerPosition::Defense => (25, 25),
    }
}

fn roll_injury(rng: &mut DraftRng) -> Option<InjuryStatus> {
    if !rng.chance(INJURY_FLAG_RATE) {
        return None;
    }

    let roll = rng.sample();

    Some(if roll < 0.4 {
        InjuryStatus::Probable
    } else if roll < 0.75 {
        InjuryStatus::Questionable
    } else if roll < 0.9 {
        InjuryStatus::Doubtful
    } else {
        InjuryStatus::Out
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;

    fn generated_class(seed: u64) -> Vec<DraftCandidate> {
        let database = DatabaseLoader::load();
        let mut rng = DraftRng::seeded(seed);

        DraftClassGenerator::new(&database.names, &database.league_template.pro_teams)
            .generate(&mut rng)
    }

    #[test]
    fn test_class_matches_position_plan() {
        let class = generated_class(1);

        let planned: u32 = CLASS_PLAN.iter().map(|(_, count)| count).sum();
        assert_eq!(class.len(), planned as usize);

        for (position, count) in CLASS_PLAN {
            let actual = class.iter().filter(|c| c.position == position).count();
            assert_eq!(actual, count as usize, "{}", position);
        }
    }

    #[test]
    fn test_class_is_priced_and_board_ordered() {
        let class = generated_class(2);

        for candidate in &class {
            let adp = candidate.adp.unwrap();
            assert!(adp >= 1.0);
            assert!(candidate.projection > 0.0);
        }

        for window in class.windows(2) {
            assert!(window[0].adp_or_default() <= window[1].adp_or_default());
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let class = generated_class(3);

        let mut ids: Vec<u32> = class.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), class.len());
    }

    #[test]
    fn test_same_seed_reproduces_class() {
        let left = generated_class(11);
        let right = generated_class(11);

        for (l, r) in left.iter().zip(right.iter()) {
            assert_eq!(l.id, r.id);
            assert_eq!(l.name, r.name);
            assert_eq!(l.adp, r.adp);
            assert_eq!(l.projection, r.projection);
        }
    }

    #[test]
    fn test_ages_respect_position_ranges() {
        let class = generated_class(4);

        for candidate in &class {
            let (min_age, max_age) = age_range(candidate.position);
            assert!((candidate.age as u32) >= min_age, "{}", candidate.name);
            assert!((candidate.age as u32) <= max_age, "{}", candidate.name);
        }
    }

    #[test]
    fn test_defense_units_are_team_branded() {
        let class = generated_class(5);

        for unit in class.iter().filter(|c| c.position == PlayerPosition::Defense) {
            assert!(unit.name.ends_with("D/ST"));
            assert!(unit.name.starts_with(unit.pro_team.as_str()));
            assert!(unit.injury_status.is_none());
        }
    }

    #[test]
    fn test_top_of_board_projects_highest_within_position() {
        let class = generated_class(6);

        // First running back off the board projects ahead of the last one.
        let backs: Vec<&DraftCandidate> = class
            .iter()
            .filter(|c| c.position == PlayerPosition::RunningBack)
            .collect();

        let first = backs.first().unwrap();
        let last = backs.last().unwrap();

        assert!(first.projection > last.projection);
    }
}
