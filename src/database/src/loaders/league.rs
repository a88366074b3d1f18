use serde::Deserialize;

const STATIC_LEAGUE_JSON: &str = include_str!("../data/league.json");

#[derive(Deserialize)]
pub struct LeagueTemplateEntity {
    pub name: String,
    /// Franchise name pool leagues draw from.
    pub team_names: Vec<String>,
    /// Pro team codes candidates are attached to.
    pub pro_teams: Vec<String>,
}

pub struct LeagueTemplateLoader;

impl LeagueTemplateLoader {
    pub fn load() -> LeagueTemplateEntity {
        serde_json::from_str(STATIC_LEAGUE_JSON).unwrap()
    }
}
