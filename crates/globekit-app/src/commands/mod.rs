//! Subcommand implementations.

pub mod measure;
pub mod sync;

use globekit_common::GlobeError;
use globekit_config::GlobekitConfig;

use crate::cli::Command;

pub fn dispatch(command: Command, config: &GlobekitConfig) -> Result<(), GlobeError> {
    match command {
        Command::Sync { mode, steps, json } => {
            let reports = sync::run(config, mode.map(Into::into), steps)?;
            if json {
                println!("{}", to_json(&reports)?);
            } else {
                sync::print(&reports);
            }
        }
        Command::Measure { kind, points, json } => {
            let result = measure::run(&config.measure, kind.into(), &points)?;
            if json {
                println!("{}", to_json(&result)?);
            } else {
                measure::print(&result);
            }
        }
        Command::Config => println!("{}", globekit_config::config_to_json(config)),
    }
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, GlobeError> {
    serde_json::to_string_pretty(value).map_err(|e| GlobeError::Other(e.to_string()))
}
