use database::{DatabaseGenerator, DatabaseLoader};
use engine::utils::TimeEstimation;
use engine::{DraftEngine, DraftRng, DraftSettings, DraftSimulation, MockDraftBatch};
use env_logger::Env;
use log::info;
use std::env;

const LEAGUE_SIZE: u8 = 12;
const BATCH_RUNS: u32 = 64;
const DEFAULT_BATCH_SEED: u64 = 2025;

fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let is_batch_mode = env::var("MODE") == Ok(String::from("BATCH"));

    let seed = env::var("DRAFT_SEED")
        .ok()
        .and_then(|value| value.parse::<u64>().ok());

    let (database, estimated) = TimeEstimation::estimate(DatabaseLoader::load);

    info!("database loaded: {} ms", estimated);

    let mut rng = match seed {
        Some(value) => DraftRng::seeded(value),
        None => DraftRng::from_entropy(),
    };

    let generated = DatabaseGenerator::generate(&database, LEAGUE_SIZE, &mut rng);
    let user_team_id = generated.league.teams[0].id;
    let settings = DraftSettings::new(user_team_id, chrono::Utc::now().naive_utc());

    if is_batch_mode {
        let report = MockDraftBatch::run(
            &generated.league,
            &generated.draft_class,
            &settings,
            BATCH_RUNS,
            seed.unwrap_or(DEFAULT_BATCH_SEED),
        );

        info!("consensus board over {} mocks:", report.runs);

        for slot in report.slots.iter().take(30) {
            info!(
                "{:>5.1}  {} ({}), drafted in {}/{}",
                slot.average_slot,
                slot.name,
                slot.position.get_short_name(),
                slot.times_drafted,
                report.runs
            );
        }
    } else {
        let engine = match seed {
            Some(value) => DraftEngine::seeded(value),
            None => DraftEngine::new(),
        };

        let result = DraftSimulation::new(
            generated.league,
            generated.draft_class,
            settings,
            engine,
        )
        .run();

        for pick in &result.picks {
            let team_name = result
                .team_summary(pick.team_id)
                .map(|summary| summary.team_name.as_str())
                .unwrap_or("Unknown");

            info!(
                "{:>3}. {} take {} ({})",
                pick.pick_number,
                team_name,
                pick.candidate.name,
                pick.candidate.position.get_short_name()
            );
        }

        info!(
            "user slot finished with {:.1} projected points",
            result
                .team_summary(user_team_id)
                .map(|summary| summary.projection_total)
                .unwrap_or(0.0)
        );
    }
}
