use crate::generators::{DraftClassGenerator, LeagueGenerator};
use crate::loaders::DraftDatabase;
use engine::{DraftCandidate, DraftRng, League};
use log::debug;

/// A league and its candidate pool, ready to hand to a simulation.
pub struct GeneratedDraft {
    pub league: League,
    pub draft_class: Vec<DraftCandidate>,
}

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    pub fn generate(
        database: &DraftDatabase,
        team_count: u8,
        rng: &mut DraftRng,
    ) -> GeneratedDraft {
        let league = LeagueGenerator::generate(&database.league_template, team_count, rng);

        let mut class_generator = DraftClassGenerator::new(
            &database.names,
            &database.league_template.pro_teams,
        );
        let draft_class = class_generator.generate(rng);

        debug!(
            "generated league '{}' with {} teams and a class of {}",
            league.name,
            league.team_count(),
            draft_class.len()
        );

        GeneratedDraft {
            league,
            draft_class,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::DatabaseLoader;
    use chrono::NaiveDate;
    use engine::{DraftEngine, DraftSettings, DraftSimulation, PlayerPosition};

    #[test]
    fn test_generated_draft_is_complete() {
        let database = DatabaseLoader::load();
        let mut rng = DraftRng::seeded(7);

        let generated = DatabaseGenerator::generate(&database, 12, &mut rng);

        assert_eq!(generated.league.team_count(), 12);
        assert!(!generated.draft_class.is_empty());

        // Every position carries enough supply for twelve full rosters.
        for position in PlayerPosition::ALL {
            let supply = generated
                .draft_class
                .iter()
                .filter(|c| c.position == position)
                .count() as u8;

            assert!(
                supply >= position.roster_max() * 12,
                "{} supply {}",
                position,
                supply
            );
        }
    }

    #[test]
    fn test_same_seed_generates_same_draft() {
        let database = DatabaseLoader::load();

        let left = DatabaseGenerator::generate(&database, 10, &mut DraftRng::seeded(21));
        let right = DatabaseGenerator::generate(&database, 10, &mut DraftRng::seeded(21));

        let left_names: Vec<&str> = left.league.teams.iter().map(|t| t.name.as_str()).collect();
        let right_names: Vec<&str> = right.league.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(left_names, right_names);

        assert_eq!(left.draft_class.len(), right.draft_class.len());
        for (a, b) in left.draft_class.iter().zip(right.draft_class.iter()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.adp, b.adp);
        }
    }

    #[test]
    fn test_generated_draft_runs_to_completion() {
        let database = DatabaseLoader::load();
        let mut rng = DraftRng::seeded(35);

        let generated = DatabaseGenerator::generate(&database, 12, &mut rng);
        let user_team_id = generated.league.teams[0].id;

        let start = NaiveDate::from_ymd_opt(2025, 8, 24)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap();

        let simulation = DraftSimulation::new(
            generated.league,
            generated.draft_class,
            DraftSettings::new(user_team_id, start),
            DraftEngine::seeded(35),
        );

        let result = simulation.run();

        assert_eq!(result.picks.len(), 180);

        for summary in &result.team_summaries {
            assert_eq!(summary.picks.len(), 15);
        }
    }
}
