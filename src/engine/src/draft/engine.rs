use crate::draft::context::DraftContext;
use crate::draft::market::{MarketAnalyzer, MarketTrend};
use crate::draft::opponent::model::OpponentModel;
use crate::draft::opponent::personality::{personality_catalog, PersonalityProfile};
use crate::draft::pick::PickRecord;
use crate::draft::recommendation::PickRecommendation;
use crate::draft::strategy::advisor::StrategyAdvisor;
use crate::league::Team;
use crate::shared::DraftRng;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// Front door of the engine. Owns the archetype catalog, one behavior
/// model per rival team, and the run's random source.
pub struct DraftEngine {
    catalog: Vec<Arc<PersonalityProfile>>,
    models: HashMap<u32, OpponentModel>,
    rng: DraftRng,
}

impl DraftEngine {
    pub fn new() -> Self {
        Self::with_rng(DraftRng::from_entropy())
    }

    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(DraftRng::seeded(seed))
    }

    pub fn with_rng(rng: DraftRng) -> Self {
        DraftEngine {
            catalog: personality_catalog(),
            models: HashMap::new(),
            rng,
        }
    }

    /// Assigns each team a random archetype and builds its model. Call
    /// once per draft with the rival teams only.
    pub fn initialize_opponent_models(&mut self, teams: &[Team]) {
        self.models.clear();

        for team in teams {
            let index = self.rng.index(self.catalog.len());
            let personality = Arc::clone(&self.catalog[index]);

            debug!("team {} drafts like \"{}\"", team.name, personality.name);

            self.models
                .insert(team.id, OpponentModel::from_team(team, personality));
        }
    }

    /// Predicted selection for a rival. None for unmodeled teams or an
    /// empty board.
    pub fn predict_opponent_pick(
        &mut self,
        team_id: u32,
        context: &DraftContext<'_>,
    ) -> Option<PickRecommendation> {
        let model = self.models.get(&team_id)?;

        model.predict_pick(context, &mut self.rng)
    }

    /// Feeds a completed pick into the picking team's model. Picks by
    /// unmodeled teams are ignored.
    pub fn update_opponent_model(
        &mut self,
        team_id: u32,
        pick: &PickRecord,
        context: &DraftContext<'_>,
    ) {
        match self.models.get_mut(&team_id) {
            Some(model) => model.update_model(pick, context),
            None => debug!("no model for team {}, pick {} ignored", team_id, pick.pick_number),
        }
    }

    pub fn analyze_market_trends(&self, context: &DraftContext<'_>) -> Vec<MarketTrend> {
        MarketAnalyzer::analyze(context)
    }

    pub fn generate_strategy_recommendations(
        &self,
        user_team: &Team,
        context: &DraftContext<'_>,
    ) -> Vec<PickRecommendation> {
        StrategyAdvisor::generate(user_team, context, &self.models)
    }

    pub fn opponent_model(&self, team_id: u32) -> Option<&OpponentModel> {
        self.models.get(&team_id)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }
}

impl Default for DraftEngine {
    fn default() -> Self {
        Self::new()
    }
}
