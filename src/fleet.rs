//! Station settings, body catalog and vessel snapshots loaded together.

use std::path::{Path, PathBuf};

use station_config::{
    BodyConfig, ConfigError, StationConfig, VesselConfig, load_bodies, load_station_config,
    load_vessel_configs,
};
use station_maneuver::vessel::{self, VesselError};
use station_maneuver::{ManeuverExecutor, ManeuverSettings, Vehicle};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("vessel error: {0}")]
    Vessel(#[from] VesselError),
}

/// Where the catalogs live on disk.
#[derive(Debug, Clone)]
pub struct FleetPaths {
    /// Station settings; defaults apply when the file does not exist.
    pub station: PathBuf,
    pub bodies: PathBuf,
    pub vessels: PathBuf,
}

impl FleetPaths {
    /// Standard layout below a configuration root.
    pub fn under(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            station: root.join("station.toml"),
            bodies: root.join("bodies"),
            vessels: root.join("vessels"),
        }
    }
}

impl Default for FleetPaths {
    fn default() -> Self {
        Self::under("configs")
    }
}

/// Everything needed to run maneuvers against a set of vessel snapshots.
#[derive(Debug, Clone)]
pub struct Fleet {
    pub config: StationConfig,
    pub bodies: Vec<BodyConfig>,
    pub vessels: Vec<VesselConfig>,
}

impl Fleet {
    pub fn load(paths: &FleetPaths) -> Result<Self, FleetError> {
        let config = if paths.station.exists() {
            load_station_config(&paths.station)?
        } else {
            StationConfig::default()
        };
        Ok(Self {
            config,
            bodies: load_bodies(&paths.bodies)?,
            vessels: load_vessel_configs(&paths.vessels)?,
        })
    }

    pub fn settings(&self) -> ManeuverSettings {
        ManeuverSettings::from(&self.config)
    }

    pub fn executor(&self) -> ManeuverExecutor {
        ManeuverExecutor::new(self.settings())
    }

    /// Runtime snapshot of the named vessel (or the first orbiting one).
    pub fn vessel(&self, name: Option<&str>) -> Result<Vehicle, FleetError> {
        Ok(vessel::select(&self.vessels, &self.bodies, name)?)
    }
}
