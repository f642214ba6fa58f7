use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::{Parser, Subcommand, ValueEnum};
use station_keeping::units::{LengthUnit, format_length, parse_length};
use station_keeping::export::report::write_report_to_path;
use station_keeping::fleet::{Fleet, FleetPaths};
use station_keeping::maneuver::{ManeuverResult, OrbitReadout, RecordingSink, readout};
use station_keeping::report::build_report;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Station keeping: nudge a vessel's semi-major axis with one burn"
)]
struct Cli {
    /// Directory holding station.toml, bodies/ and vessels/
    #[arg(long, default_value = "configs")]
    config_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show the vessel's SMA, the synchronous SMA and which corrections are enabled
    Status {
        /// Vessel name (defaults to the first orbiting vessel)
        #[arg(long)]
        vessel: Option<String>,
    },
    /// Set the semi-major axis to a typed target
    SetSma {
        #[arg(long)]
        vessel: Option<String>,

        /// Target as typed; only digits and the first decimal point are kept
        #[arg(long)]
        target: String,

        #[arg(long, value_enum, default_value_t = UnitArg::Mm)]
        unit: UnitArg,

        /// Burn even when the target is outside the station keeping tolerance
        #[arg(long, default_value_t = false)]
        force: bool,

        /// Write a JSON report (use '-' for stdout)
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Set the semi-major axis to the body's synchronous orbit
    SetSync {
        #[arg(long)]
        vessel: Option<String>,

        #[arg(long, default_value_t = false)]
        force: bool,

        #[arg(long)]
        report: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum UnitArg {
    Km,
    Mm,
    Gm,
}

impl From<UnitArg> for LengthUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Km => LengthUnit::Km,
            UnitArg::Mm => LengthUnit::Mm,
            UnitArg::Gm => LengthUnit::Gm,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let fleet = Fleet::load(&FleetPaths::under(&cli.config_dir))
        .with_context(|| format!("loading catalogs from {}", cli.config_dir.display()))?;
    debug!(
        bodies = fleet.bodies.len(),
        vessels = fleet.vessels.len(),
        "loaded catalogs"
    );

    match cli.command {
        Command::Status { vessel } => {
            let vehicle = fleet.vessel(vessel.as_deref())?;
            print_readout(&readout(&vehicle, &fleet.settings()));
            Ok(())
        }
        Command::SetSma {
            vessel,
            target,
            unit,
            force,
            report,
        } => {
            let target_m = parse_length(&target, unit.into());
            set_sma(&fleet, vessel.as_deref(), target_m, force, report)
        }
        Command::SetSync {
            vessel,
            force,
            report,
        } => {
            let vehicle = fleet.vessel(vessel.as_deref())?;
            let Some(sync) = readout(&vehicle, &fleet.settings()).synchronous_sma_m else {
                bail!(
                    "{} has no synchronous orbit above its surface",
                    vehicle.orbit.body.name
                );
            };
            set_sma(&fleet, Some(vehicle.name.as_str()), sync, force, report)
        }
    }
}

fn set_sma(
    fleet: &Fleet,
    vessel: Option<&str>,
    target_m: f64,
    force: bool,
    report: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut vehicle = fleet.vessel(vessel)?;
    let settings = fleet.settings();
    let before = readout(&vehicle, &settings);

    if !force && !before.target_enabled(target_m) {
        warn!(
            vessel = %vehicle.name,
            target_m,
            tolerance = settings.tolerance,
            "correction outside the station keeping tolerance"
        );
        bail!(
            "target {} is not within {:.1}% of the current SMA {}; pass --force to burn anyway",
            format_length(target_m),
            settings.tolerance * 100.0,
            before.sma_m.map_or_else(|| "N/A".to_string(), format_length),
        );
    }

    let mut notices = RecordingSink::new();
    let result = fleet
        .executor()
        .attempt_maneuver(&mut vehicle, target_m, &mut notices);

    for message in notices.messages() {
        println!("{message}");
    }

    if let Some(path) = report {
        let report = build_report(&vehicle.name, target_m, &result, &notices);
        write_report_to_path(&path, &report)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), applied = report.applied, "wrote maneuver report");
    }

    match result {
        ManeuverResult::Applied(outcome) => {
            println!(
                "Δv = {:.3} m/s, propellant = {:.3} kg ({})",
                outcome.delta_v_m_s, outcome.fuel_mass_kg, outcome.engine
            );
            vehicle.orbit = outcome.orbit;
            print_readout(&readout(&vehicle, &settings));
            Ok(())
        }
        ManeuverResult::Rejected(reason) => bail!("maneuver rejected: {reason}"),
    }
}

fn print_readout(readout: &OrbitReadout) {
    let na = || "N/A".to_string();
    println!("=== {} around {} ===", readout.vessel, readout.body);
    println!(
        "SMA            : {}",
        readout.sma_m.map_or_else(na, format_length)
    );
    println!(
        "Sync           : {}{}",
        readout.synchronous_sma_m.map_or_else(na, format_length),
        if readout.sync_enabled() {
            " (set-sync enabled)"
        } else {
            ""
        }
    );
    println!("Eccentricity   : {:.5}", readout.eccentricity);
    match readout.period_s {
        Some(period) => println!("Period         : {:.1} s", period),
        None => println!("Period         : N/A"),
    }
    println!("Tolerance      : {:.2}%", readout.tolerance * 100.0);
}
