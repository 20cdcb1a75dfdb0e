use std::io::Write;

use cgrid::{seeded_random, Algorithm, Generator, Grid, Random, SolveReport};
use log::{error, info, warn};

use crate::{error::AppError, renderer::print_grid, settings::Settings};

/// Everything one run needs, merged from the settings file and the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub rows: usize,
    pub columns: usize,
    pub open_probability: f64,
    pub seed: Option<u64>,
    pub algorithms: Vec<Algorithm>,
    pub color: bool,
}

impl RunConfig {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            rows: settings.get_rows(),
            columns: settings.get_columns(),
            open_probability: settings.get_open_probability(),
            seed: settings.get_seed(),
            algorithms: settings.get_algorithm().algorithms(),
            color: settings.get_color(),
        }
    }
}

/// Outcome of a single generate-and-solve cycle.
#[derive(Debug)]
pub enum CycleOutcome {
    Solved(SolveReport),
    Unsolvable(SolveReport),
    /// The maze couldn't be set up, e.g. not enough open cells for the endpoints.
    Failed(cgrid::GridError),
}

/// Generates and solves one fresh maze per configured algorithm.
///
/// Problems of a single maze are reported to `out` and the run goes on, invalid configuration
/// stops it.
pub fn run(config: &RunConfig, out: &mut impl Write) -> Result<Vec<CycleOutcome>, AppError> {
    let generator = Generator::new(config.open_probability)?;
    // validate the size once instead of failing every cycle
    Grid::new(config.rows, config.columns)?;

    let (mut rng, seed) = seeded_random(config.seed);
    info!("using seed {}", seed);

    let mut outcomes = Vec::with_capacity(config.algorithms.len());
    for (i, &algorithm) in config.algorithms.iter().enumerate() {
        if i > 0 {
            writeln!(out, "\nResetting Maze for {}...\n", algorithm)?;
        }

        let outcome = match run_cycle(config, &generator, &mut rng, algorithm, out) {
            Ok(report) if report.found() => CycleOutcome::Solved(report),
            Ok(report) => CycleOutcome::Unsolvable(report),
            Err(AppError::Grid(err)) if err.is_recoverable() => {
                error!("{} cycle failed: {}", algorithm, err);
                writeln!(out, "An error occurred: {}", err)?;
                CycleOutcome::Failed(err)
            }
            Err(err) => return Err(err),
        };
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

fn run_cycle(
    config: &RunConfig,
    generator: &Generator,
    rng: &mut Random,
    algorithm: Algorithm,
    out: &mut impl Write,
) -> Result<SolveReport, AppError> {
    let mut grid = Grid::new(config.rows, config.columns)?;
    generator.fill(&mut grid, rng);
    grid.choose_random_start_and_end(rng)?;

    writeln!(out, "Generated Maze (Before Solving):")?;
    print_grid(out, &grid, config.color)?;

    writeln!(out, "\nSolving with {}...", algorithm)?;
    let report = grid.solve(algorithm)?;

    match report.path_len() {
        Some(steps) => {
            info!(
                "{} found a path of {} steps, explored {} cells",
                algorithm, steps, report.explored
            );
            writeln!(out, "Solved Maze with {} (After Solving):", algorithm)?;
            print_grid(out, &grid, config.color)?;
        }
        None => {
            warn!(
                "{} explored {} cells without reaching the end",
                algorithm, report.explored
            );
            writeln!(out, "No path found with {}.", algorithm)?;
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use cgrid::GridError;

    use super::*;

    fn config() -> RunConfig {
        RunConfig {
            rows: 10,
            columns: 12,
            open_probability: 0.7,
            seed: Some(11),
            algorithms: vec![Algorithm::Bfs, Algorithm::Dfs],
            color: false,
        }
    }

    fn run_to_string(config: &RunConfig) -> (Vec<CycleOutcome>, String) {
        let mut out = Vec::new();
        let outcomes = run(config, &mut out).unwrap();
        (outcomes, String::from_utf8(out).unwrap())
    }

    #[test]
    fn seeded_run_is_reproducible() {
        let (outcomes, first) = run_to_string(&config());
        let (_, second) = run_to_string(&config());

        assert_eq!(outcomes.len(), 2);
        assert_eq!(first, second);
        assert_eq!(first.matches("Generated Maze (Before Solving):").count(), 2);
        assert!(first.contains("Solving with BFS..."));
        assert!(first.contains("Resetting Maze for DFS..."));
        assert!(first.contains("Solving with DFS..."));
    }

    #[test]
    fn output_matches_outcome() {
        let (outcomes, output) = run_to_string(&config());
        for outcome in outcomes {
            match outcome {
                CycleOutcome::Solved(report) => {
                    let heading = format!("Solved Maze with {} (After Solving):", report.algorithm);
                    assert!(output.contains(&heading));
                }
                CycleOutcome::Unsolvable(report) => {
                    let message = format!("No path found with {}.", report.algorithm);
                    assert!(output.contains(&message));
                }
                CycleOutcome::Failed(err) => panic!("unexpected failure {}", err),
            }
        }
    }

    #[test]
    fn fully_open_maze_is_solved() {
        let config = RunConfig {
            open_probability: 1.0,
            ..config()
        };
        let (outcomes, output) = run_to_string(&config);

        assert!(outcomes
            .iter()
            .all(|o| matches!(o, CycleOutcome::Solved(_))));
        // the end itself is marked, so every solved maze shows the path
        assert_eq!(output.matches("(After Solving)").count(), 2);
        assert!(output.contains('+'));
    }

    #[test]
    fn closed_maze_reports_and_continues() {
        let config = RunConfig {
            open_probability: 0.0,
            ..config()
        };
        let (outcomes, output) = run_to_string(&config);

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes
            .iter()
            .all(|o| matches!(o, CycleOutcome::Failed(GridError::NoOpenCells(_)))));
        assert_eq!(output.matches("An error occurred").count(), 2);
    }

    #[test]
    fn invalid_config_stops_the_run() {
        let mut out = Vec::new();
        let bad_size = RunConfig {
            rows: 0,
            ..config()
        };
        assert!(matches!(
            run(&bad_size, &mut out),
            Err(AppError::Grid(GridError::InvalidDimension { .. }))
        ));

        let bad_probability = RunConfig {
            open_probability: 2.0,
            ..config()
        };
        assert!(matches!(
            run(&bad_probability, &mut out),
            Err(AppError::Grid(GridError::InvalidProbability(_)))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn config_from_settings() {
        let settings = Settings::new().set_rows(5).set_seed(9);
        let config = RunConfig::from_settings(&settings);

        assert_eq!(config.rows, 5);
        assert_eq!(config.columns, crate::settings::DEFAULT_COLUMNS);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.algorithms, Algorithm::ALL.to_vec());
    }
}
