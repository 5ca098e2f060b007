use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use terminal_life::{
    Algorithm, CancelToken, Driver, DriverOptions, Grid, InitialState, Simulation,
    SimulationConfig, presets, rendering::MemorySink,
};
use std::time::Duration;

fn quick(max: u64) -> DriverOptions {
    DriverOptions {
        interval: Duration::ZERO,
        max_generations: Some(max),
        ..Default::default()
    }
}

#[test]
fn pattern_run_renders_each_generation() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut sim = Simulation::new(
        SimulationConfig::default(),
        &InitialState::Pattern(presets::diamond()),
        &mut rng,
    )
    .unwrap();

    let mut sink = MemorySink::default();
    let summary = Driver::new(quick(3)).run(&mut sim, &mut sink, &CancelToken::new()).unwrap();

    assert_eq!(summary.final_generation, 4);
    let headers: Vec<_> = sink.frames.iter().map(|f| f.lines().next().unwrap()).collect();
    assert_eq!(headers, ["Generation 1", "Generation 2", "Generation 3", "Generation 4"]);

    let first_body: Vec<_> = sink.frames[0].lines().skip(3).collect();
    assert_eq!(first_body.len(), 15);
    assert_eq!(first_body[5], ". . . . . . . O . . . . . . .");
    assert_eq!(first_body[7], ". . . . . O O . O O . . . . .");
}

#[test]
fn glider_travels_without_wrapping() {
    let config = SimulationConfig { rows: 8, cols: 8, ..Default::default() };
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let mut sim = Simulation::new(config, &InitialState::Pattern(presets::glider()), &mut rng).unwrap();
    assert_eq!(sim.current().grid().population(), 5);

    // Four steps move a glider one cell down and right
    let start = sim.current().grid().clone();
    for _ in 0..4 {
        sim.step();
    }
    let shifted: Vec<_> = start
        .iter_cells()
        .filter(|(_, _, c)| c.is_alive())
        .map(|(r, c, _)| (r + 1, c + 1))
        .collect();
    assert_eq!(sim.current().grid(), &Grid::from_alive_cells(8, 8, shifted).unwrap());

    // Eventually it hits the corner and settles instead of reappearing on the far side
    for _ in 0..40 {
        sim.step();
    }
    let grid = sim.current().grid();
    assert!(!grid.is_alive(0, 0));
    assert!(grid.population() <= 4);
}

#[test]
fn random_runs_are_reproducible_across_algorithms() {
    let run = |algorithm| {
        let config = SimulationConfig { algorithm, ..Default::default() };
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut sim = Simulation::new(config, &InitialState::Random { alive: 90 }, &mut rng).unwrap();
        assert_eq!(sim.current().grid().population(), 90);
        let mut sink = MemorySink::default();
        Driver::new(quick(25)).run(&mut sim, &mut sink, &CancelToken::new()).unwrap();
        sink.frames
    };

    assert_eq!(run(Algorithm::Serial), run(Algorithm::Parallel));
}

#[test]
fn empty_field_stays_empty() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut sim = Simulation::new(
        SimulationConfig::default(),
        &InitialState::Random { alive: 0 },
        &mut rng,
    )
    .unwrap();
    let summary = Driver::new(quick(10))
        .run(&mut sim, &mut MemorySink::default(), &CancelToken::new())
        .unwrap();
    assert_eq!(summary.final_population, 0);
}
