use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use globekit_config::schema::SyncMode;
use globekit_measure::MeasureKind;

/// Scripted camera-sync and measurement sessions on simulated globe views.
#[derive(Parser, Debug)]
#[command(name = "globekit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Pan a primary view and report how the secondary follows.
    Sync {
        /// Overrides `[sync] mode`.
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Number of camera moves to simulate.
        #[arg(long, default_value_t = 5)]
        steps: u32,

        /// Print the step reports as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Measure a set of points and print the labels.
    Measure {
        #[arg(value_enum)]
        kind: KindArg,

        /// `lon,lat[,height]` in degrees and meters. Repeat per point.
        #[arg(
            long = "point",
            value_parser = parse_point,
            required = true,
            allow_hyphen_values = true
        )]
        points: Vec<PointArg>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the effective configuration as JSON.
    Config,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeArg {
    Overview,
    Mirror,
}

impl From<ModeArg> for SyncMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Overview => SyncMode::Overview,
            ModeArg::Mirror => SyncMode::Mirror,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KindArg {
    Distance,
    Azimuth,
    Triangle,
    Area,
}

impl From<KindArg> for MeasureKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Distance => MeasureKind::Distance,
            KindArg::Azimuth => MeasureKind::AzimuthDistance,
            KindArg::Triangle => MeasureKind::Triangle,
            KindArg::Area => MeasureKind::Area,
        }
    }
}

/// A picked point in degrees and meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointArg {
    pub lon: f64,
    pub lat: f64,
    pub height: f64,
}

fn parse_point(s: &str) -> Result<PointArg, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if !(2..=3).contains(&parts.len()) {
        return Err(format!("expected lon,lat[,height], got {s:?}"));
    }
    let number = |v: &str| {
        v.parse::<f64>()
            .map_err(|e| format!("{v:?} is not a number: {e}"))
    };
    let lon = number(parts[0])?;
    let lat = number(parts[1])?;
    let height = parts.get(2).map(|v| number(v.trim())).transpose()?.unwrap_or(0.0);
    if !(-180.0..=180.0).contains(&lon) || !(-90.0..=90.0).contains(&lat) {
        return Err(format!("{s:?} is outside lon [-180, 180] / lat [-90, 90]"));
    }
    Ok(PointArg { lon, lat, height })
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_point_with_and_without_height() {
        assert_eq!(
            parse_point("116.3, 39.9").unwrap(),
            PointArg {
                lon: 116.3,
                lat: 39.9,
                height: 0.0
            }
        );
        assert_eq!(parse_point("1,2,300").unwrap().height, 300.0);
    }

    #[test]
    fn rejects_bad_points() {
        assert!(parse_point("1").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("200,0").is_err());
        assert!(parse_point("1,2,3,4").is_err());
    }

    #[test]
    fn sync_subcommand_defaults() {
        let args = Args::try_parse_from(["globekit", "sync"]).unwrap();
        match args.command {
            Command::Sync { mode, steps, json } => {
                assert_eq!(mode, None);
                assert_eq!(steps, 5);
                assert!(!json);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn measure_collects_points() {
        let args = Args::try_parse_from([
            "globekit",
            "--log-level",
            "debug",
            "measure",
            "triangle",
            "--point",
            "0,0,0",
            "--point",
            "0.01,0,120",
        ])
        .unwrap();
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        match args.command {
            Command::Measure { kind, points, .. } => {
                assert_eq!(MeasureKind::from(kind), MeasureKind::Triangle);
                assert_eq!(points.len(), 2);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn measure_requires_points() {
        assert!(Args::try_parse_from(["globekit", "measure", "area"]).is_err());
    }
}
