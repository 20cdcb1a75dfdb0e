use std::{path::PathBuf, process::ExitCode};

use gridmaze::{
    app::{self, RunConfig},
    logging,
    settings::{AlgorithmChoice, Settings},
};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(version, about, name = "gridmaze")]
struct Args {
    #[clap(short, long, help = "Number of rows, including the wall border")]
    rows: Option<usize>,
    #[clap(short, long, help = "Number of columns, including the wall border")]
    columns: Option<usize>,
    #[clap(short = 'p', long, help = "Chance of an interior cell being open")]
    open_probability: Option<f64>,
    #[clap(short, long, help = "Seed for reproducible mazes")]
    seed: Option<u64>,
    #[clap(short, long, value_enum, help = "Which search to run")]
    algorithm: Option<AlgorithmChoice>,
    #[clap(long, action, help = "Print plain glyphs without colors")]
    no_color: bool,
    #[clap(short, long, action = clap::ArgAction::Count, help = "More log output, repeatable")]
    verbose: u8,
    #[clap(long, help = "Use this settings file instead of the default one")]
    config: Option<PathBuf>,
    #[clap(long, action, help = "Show config path and quit")]
    show_config_path: bool,
    #[clap(long, action, help = "Reset config to default and quit")]
    reset_config: bool,
}

impl Args {
    fn apply(&self, settings: Settings) -> RunConfig {
        let mut config = RunConfig::from_settings(&settings);

        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(columns) = self.columns {
            config.columns = columns;
        }
        if let Some(open_probability) = self.open_probability {
            config.open_probability = open_probability;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(algorithm) = self.algorithm {
            config.algorithms = algorithm.algorithms();
        }
        if self.no_color {
            config.color = false;
        }

        config
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let settings_path = args.config.clone().unwrap_or_else(Settings::default_path);

    if args.reset_config {
        return match Settings::reset_config(&settings_path) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                eprintln!("{}", err);
                ExitCode::FAILURE
            }
        };
    }

    if args.show_config_path {
        if let Some(s) = settings_path.to_str() {
            println!("{}", s);
        } else {
            println!("{:?}", settings_path);
        }
        return ExitCode::SUCCESS;
    }

    better_panic::install();

    if let Err(err) = logging::init(args.verbose, !args.no_color) {
        eprintln!("Failed to set up logging: {}", err);
    }

    let settings = match Settings::load(&settings_path) {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("An error occurred: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let config = args.apply(settings);
    if !config.color {
        colored::control::set_override(false);
    }

    match app::run(&config, &mut std::io::stdout().lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("An error occurred: {}", err);
            ExitCode::FAILURE
        }
    }
}
