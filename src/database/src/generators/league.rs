use crate::loaders::LeagueTemplateEntity;
use engine::{DraftRng, League, Team};

pub struct LeagueGenerator;

impl LeagueGenerator {
    /// Builds a league of `team_count` franchises with names drawn from
    /// the template pool without repeats. Draft slots follow team ids.
    pub fn generate(
        template: &LeagueTemplateEntity,
        team_count: u8,
        rng: &mut DraftRng,
    ) -> League {
        let mut available = template.team_names.clone();

        let teams = (1..=team_count)
            .map(|slot| {
                let name = if available.is_empty() {
                    format!("Team {}", slot)
                } else {
                    available.swap_remove(rng.index(available.len()))
                };

                Team::new(slot as u32, name, slot)
            })
            .collect();

        League::new(1, template.name.clone(), teams)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::LeagueTemplateLoader;

    #[test]
    fn test_league_has_unique_names_and_slots() {
        let template = LeagueTemplateLoader::load();
        let mut rng = DraftRng::seeded(1);

        let league = LeagueGenerator::generate(&template, 12, &mut rng);

        assert_eq!(league.team_count(), 12);

        let mut names: Vec<&str> = league.teams.iter().map(|t| t.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 12);

        for (i, team) in league.teams.iter().enumerate() {
            assert_eq!(team.draft_slot as usize, i + 1);
            assert!(team.roster.is_empty());
        }
    }

    #[test]
    fn test_oversized_league_falls_back_to_numbered_names() {
        let template = LeagueTemplateEntity {
            name: String::from("Tiny Pool"),
            team_names: vec![String::from("Only Name")],
            pro_teams: vec![String::from("FA")],
        };
        let mut rng = DraftRng::seeded(2);

        let league = LeagueGenerator::generate(&template, 3, &mut rng);

        assert_eq!(league.team_count(), 3);
        assert!(league.teams.iter().any(|t| t.name == "Only Name"));
        assert!(league.teams.iter().any(|t| t.name == "Team 2"));
    }
}
