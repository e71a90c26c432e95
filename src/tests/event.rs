use rstest::*;

use crate::{
    prelude::{Collection, Config, Error, HitMatcher, InputTag, McParticle, MemoryEvent},
    tests::{init_logger, test_hits, test_particles, TableBackTracker, TestHit},
};

#[fixture]
fn build_config() -> Config {
    Config::from_labels("gaushit", "largeant::G4").unwrap()
}

#[fixture]
fn build_backtracker() -> TableBackTracker {
    TableBackTracker::new()
        .with_contributions(0, &[(1, 1.0, 2.0), (2, 3.0, 1.0)])
        .with_contributions(1, &[(2, 2.0, 2.0)])
}

fn simulated_event(cfg: &Config) -> MemoryEvent<TestHit, McParticle> {
    MemoryEvent::simulated()
        .with_hits(cfg.hit_tag.clone(), test_hits(2))
        .with_particles(cfg.particle_tag.clone(), test_particles(&[1, 2]))
}

#[rstest]
fn simulated_event_processing(
    #[from(build_config)] cfg: Config,
    #[from(build_backtracker)] backtracker: TableBackTracker,
) {
    init_logger();

    let event = simulated_event(&cfg);
    let mut matcher = HitMatcher::new(cfg);

    let assns = matcher
        .process(&event, &backtracker)
        .unwrap()
        .expect("simulated event should be matched");

    assert_eq!(assns.len(), 3);
    assert_eq!(assns.dominant_by_energy(0).map(|a| a.particle), Some(1));
    assert_eq!(assns.dominant_by_charge(0).map(|a| a.particle), Some(0));
    assert_eq!(assns.dominant_by_energy(1).map(|a| a.particle), Some(1));
}

#[rstest]
fn real_data_is_passed_through(
    #[from(build_config)] cfg: Config,
    #[from(build_backtracker)] backtracker: TableBackTracker,
) {
    init_logger();

    let event = MemoryEvent::real_data()
        .with_hits(cfg.hit_tag.clone(), test_hits(2))
        .with_particles(cfg.particle_tag.clone(), test_particles(&[1, 2]));

    let mut matcher = HitMatcher::new(cfg);

    assert_eq!(matcher.process(&event, &backtracker), Ok(None));
    assert_eq!(backtracker.queries(), 0);
}

#[rstest]
fn missing_hits(
    #[from(build_config)] cfg: Config,
    #[from(build_backtracker)] backtracker: TableBackTracker,
) {
    init_logger();

    // hits produced by another module
    let event = MemoryEvent::simulated()
        .with_hits(InputTag::new("linecluster"), test_hits(2))
        .with_particles(cfg.particle_tag.clone(), test_particles(&[1, 2]));

    let mut matcher = HitMatcher::new(cfg.clone());

    assert_eq!(
        matcher.process(&event, &backtracker),
        Err(Error::MissingInput(Collection::Hits, cfg.hit_tag.clone()))
    );
    assert_eq!(backtracker.queries(), 0);
}

#[rstest]
fn missing_particles(
    #[from(build_config)] cfg: Config,
    #[from(build_backtracker)] backtracker: TableBackTracker,
) {
    init_logger();

    let event = MemoryEvent::<TestHit, McParticle>::simulated()
        .with_hits(cfg.hit_tag.clone(), test_hits(2));

    let mut matcher = HitMatcher::new(cfg.clone());

    match matcher.process(&event, &backtracker) {
        Err(Error::MissingInput(Collection::Particles, tag)) => {
            assert_eq!(tag, cfg.particle_tag);
            assert_eq!(
                Error::MissingInput(Collection::Particles, tag).to_string(),
                "missing particles collection \"largeant::G4\""
            );
        },
        other => panic!("unexpected result: {:?}", other),
    }
}

#[rstest]
fn successive_events(#[from(build_config)] cfg: Config) {
    init_logger();

    let backtracker = TableBackTracker::new().with_contributions(0, &[(8, 1.0, 1.0)]);

    let mut matcher = HitMatcher::new(cfg.clone());

    let first = MemoryEvent::simulated()
        .with_hits(cfg.hit_tag.clone(), test_hits(1))
        .with_particles(cfg.particle_tag.clone(), test_particles(&[8]));

    let second = MemoryEvent::simulated()
        .with_hits(cfg.hit_tag.clone(), test_hits(1))
        .with_particles(cfg.particle_tag.clone(), test_particles(&[1, 2, 8]));

    let assns = matcher.process(&first, &backtracker).unwrap().unwrap();
    assert_eq!(assns.iter().next().map(|a| a.particle), Some(0));

    let assns = matcher.process(&second, &backtracker).unwrap().unwrap();
    assert_eq!(assns.iter().next().map(|a| a.particle), Some(2));
}

#[cfg(feature = "serde")]
#[rstest]
fn associations_serialization(
    #[from(build_config)] cfg: Config,
    #[from(build_backtracker)] backtracker: TableBackTracker,
) {
    let event = simulated_event(&cfg);
    let mut matcher = HitMatcher::new(cfg);

    let assns = matcher.process(&event, &backtracker).unwrap().unwrap();

    let content = serde_json::to_value(&assns).unwrap();
    let inner = content["inner"].as_array().unwrap();

    assert_eq!(inner.len(), 3);
    assert_eq!(inner[0]["hit"], 0);
    assert_eq!(inner[0]["particle"], 0);
    assert_eq!(inner[0]["data"]["energy_fraction"], 0.25);
    assert_eq!(inner[1]["data"]["is_max_energy"], true);
}
