use std::process::ExitCode;

use logloss_nn::data::{synthetic_housing, TargetColumn};
use logloss_nn::experiment::summary_table;
use logloss_nn::{logging, run_experiment, Dataset, ExperimentConfig};

const USAGE: &str = "usage: logloss-nn [CONFIG.json] [DATA.csv]";

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") || args.len() > 2 {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    match run(args.first().map(String::as_str), args.get(1).map(String::as_str)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config_path: Option<&str>, data_path: Option<&str>) -> logloss_nn::Result<()> {
    let config = match config_path {
        Some(path) => ExperimentConfig::load_json(path)?,
        None => ExperimentConfig::default(),
    };

    let data = match data_path {
        Some(path) => {
            let target = config.target_column.clone().map_or(TargetColumn::Last, TargetColumn::Named);
            Dataset::from_csv_path(path, &target)?
        }
        None => synthetic_housing(1000, config.seed),
    };

    let reports = run_experiment(&data, &config)?;
    print!("{}", summary_table(&reports));
    Ok(())
}
