pub mod league;
pub mod names;

pub use league::*;
pub use names::*;

/// Everything the static data files provide, loaded in one shot.
pub struct DraftDatabase {
    pub names: NamesEntity,
    pub league_template: LeagueTemplateEntity,
}

pub struct DatabaseLoader;

impl DatabaseLoader {
    pub fn load() -> DraftDatabase {
        DraftDatabase {
            names: NamesLoader::load(),
            league_template: LeagueTemplateLoader::load(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_data_parses() {
        let database = DatabaseLoader::load();

        assert!(database.names.first_names.len() >= 20);
        assert!(database.names.last_names.len() >= 20);
        assert!(database.league_template.team_names.len() >= 12);
        assert!(!database.league_template.pro_teams.is_empty());
        assert!(!database.league_template.name.is_empty());
    }

    #[test]
    fn test_pro_team_codes_are_short_uppercase() {
        let template = LeagueTemplateLoader::load();

        for code in &template.pro_teams {
            assert!(code.len() <= 3, "{}", code);
            assert!(code.chars().all(|c| c.is_ascii_uppercase()), "{}", code);
        }
    }
}
