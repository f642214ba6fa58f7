//! Configuration models and loaders for station keeping.
//!
//! Body catalogs and vessel snapshots are read from a YAML list, a single TOML record, or a
//! directory of TOML records (one per file, loaded in file-name order).

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Default fractional tolerance for the station keeping gate.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Station keeping settings shared by every maneuver.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StationConfig {
    /// Report semi-major axes from the body centre instead of from its surface.
    #[serde(default)]
    pub real_sma: bool,
    /// Fractional tolerance used to enable corrections (0.01 = 1%).
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default)]
    pub consumption: ConsumptionModeConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            real_sma: false,
            tolerance: DEFAULT_TOLERANCE,
            consumption: ConsumptionModeConfig::default(),
        }
    }
}

fn default_tolerance() -> f64 {
    DEFAULT_TOLERANCE
}

/// Propellant debit policy as spelled in configuration files.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ConsumptionModeConfig {
    #[default]
    BestEffort,
    AllOrNothing,
}

/// Central body parameters.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mu_m3_s2: f64,
    pub radius_m: f64,
    #[serde(default)]
    pub angular_velocity_rad_s: Option<f64>,
    /// Sidereal rotation period; used when no angular velocity is given.
    #[serde(default)]
    pub rotation_period_s: Option<f64>,
}

impl BodyConfig {
    /// Rotation rate in rad/s, zero when neither rate nor period is configured.
    pub fn angular_velocity(&self) -> f64 {
        match (self.angular_velocity_rad_s, self.rotation_period_s) {
            (Some(rate), _) => rate,
            (None, Some(period)) if period != 0.0 => 2.0 * std::f64::consts::PI / period,
            _ => 0.0,
        }
    }
}

/// Vessel snapshot as exported from the host simulation.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct VesselConfig {
    pub name: String,
    /// Name of the body the vessel orbits, matched case-insensitively against the catalog.
    pub body: String,
    pub situation: SituationConfig,
    pub total_mass_kg: f64,
    pub orbit: OrbitConfig,
    #[serde(default)]
    pub parts: Vec<PartConfig>,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SituationConfig {
    Prelaunch,
    Landed,
    Splashed,
    Flying,
    #[serde(alias = "sub_orbital")]
    Suborbital,
    Orbiting,
    Escaping,
    Docked,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OrbitConfig {
    /// Semi-major axis from the body centre; derived from the state vectors when omitted.
    #[serde(default)]
    pub semi_major_axis_m: Option<f64>,
    pub position_m: [f64; 3],
    pub velocity_m_s: [f64; 3],
    #[serde(default)]
    pub epoch_s: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PartConfig {
    pub name: String,
    #[serde(default)]
    pub engine: Option<EngineConfig>,
    #[serde(default)]
    pub resources: Vec<ResourceConfig>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct EngineConfig {
    pub name: String,
    /// Constant Isp shorthand; ignored when `isp_curve` is given.
    #[serde(default)]
    pub isp_vacuum_s: Option<f64>,
    /// `[pressure_atm, isp_s]` keys.
    #[serde(default)]
    pub isp_curve: Vec<[f64; 2]>,
    pub propellants: Vec<PropellantConfig>,
    pub mixture_density_kg_per_unit: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PropellantConfig {
    pub name: String,
    pub ratio: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResourceConfig {
    pub name: String,
    pub amount: f64,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration for '{name}': {reason}")]
    Invalid { name: String, reason: String },
}

fn invalid(name: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        name: name.to_string(),
        reason: reason.into(),
    }
}

/// Load station settings from a single TOML or YAML file.
pub fn load_station_config<P: AsRef<Path>>(path: P) -> Result<StationConfig, ConfigError> {
    let path = path.as_ref();
    let config: StationConfig = if is_toml(path) {
        toml::from_str(&std::fs::read_to_string(path)?)?
    } else {
        serde_yaml::from_reader(File::open(path)?)?
    };
    validate_station(&config)?;
    Ok(config)
}

/// Load a body catalog.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    let bodies: Vec<BodyConfig> = load_records(path)?;
    for body in &bodies {
        validate_body(body)?;
    }
    Ok(bodies)
}

/// Load vessel snapshots.
pub fn load_vessel_configs<P: AsRef<Path>>(path: P) -> Result<Vec<VesselConfig>, ConfigError> {
    let vessels: Vec<VesselConfig> = load_records(path)?;
    for vessel in &vessels {
        validate_vessel(vessel)?;
    }
    Ok(vessels)
}

pub fn validate_station(config: &StationConfig) -> Result<(), ConfigError> {
    if !(config.tolerance.is_finite() && config.tolerance > 0.0 && config.tolerance < 1.0) {
        return Err(invalid(
            "station",
            format!("tolerance must lie in (0, 1), got {}", config.tolerance),
        ));
    }
    Ok(())
}

pub fn validate_body(body: &BodyConfig) -> Result<(), ConfigError> {
    if !(body.mu_m3_s2.is_finite() && body.mu_m3_s2 > 0.0) {
        return Err(invalid(&body.name, "gravitational parameter must be positive"));
    }
    if !(body.radius_m.is_finite() && body.radius_m >= 0.0) {
        return Err(invalid(&body.name, "radius must be non-negative"));
    }
    if !body.angular_velocity().is_finite() {
        return Err(invalid(&body.name, "rotation rate must be finite"));
    }
    Ok(())
}

pub fn validate_vessel(vessel: &VesselConfig) -> Result<(), ConfigError> {
    if !(vessel.total_mass_kg.is_finite() && vessel.total_mass_kg > 0.0) {
        return Err(invalid(&vessel.name, "total mass must be positive"));
    }
    for part in &vessel.parts {
        if let Some(resource) = part
            .resources
            .iter()
            .find(|r| !(r.amount.is_finite() && r.amount >= 0.0))
        {
            return Err(invalid(
                &vessel.name,
                format!(
                    "resource {} on part {} has an invalid amount",
                    resource.name, part.name
                ),
            ));
        }
        if let Some(engine) = &part.engine {
            if !(engine.mixture_density_kg_per_unit.is_finite()
                && engine.mixture_density_kg_per_unit > 0.0)
            {
                return Err(invalid(
                    &vessel.name,
                    format!("engine {} needs a positive mixture density", engine.name),
                ));
            }
            if engine.isp_vacuum_s.is_none() && engine.isp_curve.is_empty() {
                return Err(invalid(
                    &vessel.name,
                    format!("engine {} has no specific impulse", engine.name),
                ));
            }
        }
    }
    Ok(())
}

fn is_toml(path: &Path) -> bool {
    path.extension().map(|ext| ext == "toml").unwrap_or(false)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if is_toml(path) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| is_toml(path))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
