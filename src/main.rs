use anyhow::Context;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use terminal_life::{
    CancelToken, Driver, InitialState, Simulation, SimulationConfig,
    config::{Cli, SeedMode},
    input::{Prompter, validate_alive_count},
    rendering::TerminalSink,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

/// Resolve the starting state from flags, asking for whatever is missing
fn initial_state(
    cli: &Cli,
    config: &SimulationConfig,
    prompter: &mut Prompter<std::io::StdinLock<'static>, std::io::Stdout>,
) -> anyhow::Result<InitialState> {
    let mode = match cli.mode {
        Some(mode) => mode,
        None => prompter.select_mode().context("reading seed mode")?,
    };

    Ok(match mode {
        SeedMode::Pattern => InitialState::Pattern(cli.pattern.clone()),
        SeedMode::Random => {
            let alive = match cli.alive {
                Some(value) => validate_alive_count(value, config.capacity())
                    .with_context(|| format!("invalid --alive {value}"))?,
                None => prompter
                    .alive_count(config.capacity())
                    .context("reading alive cell count")?,
            };
            InitialState::Random { alive }
        }
    })
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = cli.simulation_config();
    let mut prompter = Prompter::stdio();
    let initial = initial_state(&cli, &config, &mut prompter)?;

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, ?initial, algorithm = config.algorithm.name(), "setup complete");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut simulation =
        Simulation::new(config, &initial, &mut rng).context("building the first generation")?;

    if !cli.no_wait {
        prompter.wait_for_start().context("waiting for start")?;
    }

    // Never cancelled here: the loop runs until the process is interrupted
    // unless --generations bounds it.
    let cancel = CancelToken::new();
    let summary = Driver::new(cli.driver_options())
        .run(&mut simulation, &mut TerminalSink::stdout(), &cancel)
        .context("drawing to the terminal")?;

    info!(?summary, "finished");
    Ok(())
}
