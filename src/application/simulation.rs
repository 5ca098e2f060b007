use crate::domain::{Algorithm, DEFAULT_COLUMNS, DEFAULT_ROWS, Grid, InitialState, SeedError};
use rand::Rng;
use tracing::{info, trace};

/// Engine parameters fixed for the lifetime of a simulation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    pub rows: usize,
    pub cols: usize,
    /// Number given to the initial generation
    pub first_generation: u64,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLUMNS,
            first_generation: 1,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    /// Number of cells on the field, the upper bound for a random seed count
    pub const fn capacity(&self) -> usize {
        self.rows * self.cols
    }
}

/// Immutable snapshot of the field plus its sequence number
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generation {
    number: u64,
    grid: Grid,
}

impl Generation {
    pub fn new(number: u64, grid: Grid) -> Self {
        Self { number, grid }
    }

    pub const fn number(&self) -> u64 {
        self.number
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Successor generation computed from this one only
    pub fn next(&self, algorithm: Algorithm) -> Self {
        Self {
            number: self.number + 1,
            grid: algorithm.evolve(&self.grid),
        }
    }
}

/// Simulation owns the current generation and advances it.
/// No history is retained.
pub struct Simulation {
    config: SimulationConfig,
    current: Generation,
}

impl Simulation {
    /// Seed the first generation from `initial`
    pub fn new<R: Rng>(
        config: SimulationConfig,
        initial: &InitialState,
        rng: &mut R,
    ) -> Result<Self, SeedError> {
        let grid = initial.build(config.rows, config.cols, rng)?;
        info!(
            rows = config.rows,
            cols = config.cols,
            population = grid.population(),
            generation = config.first_generation,
            "simulation seeded"
        );
        Ok(Self::from_grid(config, grid))
    }

    /// Start from an already built grid. Grid dimensions win over the config's.
    pub fn from_grid(mut config: SimulationConfig, grid: Grid) -> Self {
        (config.rows, config.cols) = grid.dimensions();
        Self {
            current: Generation::new(config.first_generation, grid),
            config,
        }
    }

    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub const fn current(&self) -> &Generation {
        &self.current
    }

    /// Advance one generation, replacing the current one wholesale
    pub fn step(&mut self) -> &Generation {
        self.current = self.current.next(self.config.algorithm);
        trace!(
            generation = self.current.number(),
            population = self.current.grid().population(),
            "stepped"
        );
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!((config.rows, config.cols), (15, 15));
        assert_eq!(config.capacity(), 225);
        assert_eq!(config.first_generation, 1);
    }

    #[test]
    fn test_generation_counter_starts_at_one() {
        let sim = Simulation::new(
            SimulationConfig::default(),
            &InitialState::Pattern(presets::diamond()),
            &mut rng(),
        )
        .unwrap();
        assert_eq!(sim.current().number(), 1);
        assert_eq!(sim.current().grid().population(), 10);
    }

    #[test]
    fn test_configurable_origin() {
        let config = SimulationConfig { first_generation: 0, ..Default::default() };
        let mut sim = Simulation::from_grid(config, Grid::new(15, 15));
        assert_eq!(sim.current().number(), 0);
        assert_eq!(sim.step().number(), 1);
    }

    #[test]
    fn test_step_increments_and_keeps_dimensions() {
        let mut sim = Simulation::new(
            SimulationConfig::default(),
            &InitialState::Random { alive: 80 },
            &mut rng(),
        )
        .unwrap();
        for expected in 2..=30 {
            let generation = sim.step();
            assert_eq!(generation.number(), expected);
            assert_eq!(generation.grid().dimensions(), (15, 15));
        }
    }

    #[test]
    fn test_step_replaces_generation() {
        let grid = Grid::from_alive_cells(5, 5, [(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut sim = Simulation::from_grid(SimulationConfig::default(), grid.clone());
        let before = sim.current().clone();
        sim.step();
        assert_eq!(before.grid(), &grid);
        assert_ne!(sim.current().grid(), &grid);
        assert_eq!(sim.current(), &before.next(Algorithm::Serial));
    }

    #[test]
    fn test_from_grid_adopts_dimensions() {
        let sim = Simulation::from_grid(SimulationConfig::default(), Grid::new(4, 9));
        assert_eq!((sim.config().rows, sim.config().cols), (4, 9));
    }

    #[test]
    fn test_seed_error_propagates() {
        let result = Simulation::new(
            SimulationConfig::default(),
            &InitialState::Random { alive: 226 },
            &mut rng(),
        );
        assert!(matches!(result, Err(SeedError::TooManyCells { .. })));
    }
}
