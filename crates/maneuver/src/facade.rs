//! Re-exported APIs for consumers of the maneuver crate.

pub use crate::executor::{
    ManeuverExecutor, ManeuverOutcome, ManeuverPhase, ManeuverResult, ManeuverSettings,
    RejectionReason,
};
pub use crate::notify::{Notice, NotificationSink, NullSink, RecordingSink, TracingSink};
pub use crate::readout::{OrbitReadout, readout};
pub use station_propulsion::{ConsumptionPolicy, Situation, Vehicle};

pub mod vessel {
    use station_config::{BodyConfig, EngineConfig, SituationConfig, VesselConfig};
    use station_orbits::{CelestialBody, OrbitState};
    use station_propulsion::{
        Engine, IspCurve, Part, PropellantRequirement, ResourcePool, Situation, Vehicle,
    };
    use thiserror::Error;

    /// Errors surfaced when selecting or converting vessels.
    #[derive(Debug, Error)]
    pub enum VesselError {
        #[error("vessel '{0}' not found in catalog")]
        NotFound(String),
        #[error("vessel catalog is empty")]
        EmptyCatalog,
        #[error("vessel '{vessel}' orbits unknown body '{body}'")]
        UnknownBody { vessel: String, body: String },
    }

    /// Convert a `BodyConfig` into the runtime body description.
    pub fn body_from_config(config: &BodyConfig) -> CelestialBody {
        CelestialBody {
            name: config.name.clone(),
            mu_m3_s2: config.mu_m3_s2,
            radius_m: config.radius_m,
            angular_velocity_rad_s: config.angular_velocity(),
        }
    }

    fn engine_from_config(config: &EngineConfig) -> Engine {
        let isp_curve = if config.isp_curve.is_empty() {
            config
                .isp_vacuum_s
                .map_or_else(IspCurve::default, IspCurve::constant)
        } else {
            IspCurve::new(config.isp_curve.iter().map(|[p, isp]| (*p, *isp)).collect())
        };
        Engine {
            name: config.name.clone(),
            isp_curve,
            propellants: config
                .propellants
                .iter()
                .map(|p| PropellantRequirement::new(p.name.as_str(), p.ratio))
                .collect(),
            mixture_density_kg_per_unit: config.mixture_density_kg_per_unit,
        }
    }

    fn situation_from_config(config: SituationConfig) -> Situation {
        match config {
            SituationConfig::Prelaunch => Situation::Prelaunch,
            SituationConfig::Landed => Situation::Landed,
            SituationConfig::Splashed => Situation::Splashed,
            SituationConfig::Flying => Situation::Flying,
            SituationConfig::Suborbital => Situation::SubOrbital,
            SituationConfig::Orbiting => Situation::Orbiting,
            SituationConfig::Escaping => Situation::Escaping,
            SituationConfig::Docked => Situation::Docked,
        }
    }

    /// Convert a `VesselConfig` into a runtime `Vehicle`, resolving its body in `bodies`.
    pub fn from_config(config: &VesselConfig, bodies: &[BodyConfig]) -> Result<Vehicle, VesselError> {
        let upper = config.body.to_uppercase();
        let body = bodies
            .iter()
            .find(|b| b.name.to_uppercase() == upper)
            .map(body_from_config)
            .ok_or_else(|| VesselError::UnknownBody {
                vessel: config.name.clone(),
                body: config.body.clone(),
            })?;

        let mut orbit = OrbitState::from_state_vectors(
            config.orbit.position_m,
            config.orbit.velocity_m_s,
            body,
            config.orbit.epoch_s,
        );
        if let Some(sma) = config.orbit.semi_major_axis_m {
            orbit.semi_major_axis_m = sma;
        }

        let parts = config
            .parts
            .iter()
            .map(|part| Part {
                name: part.name.clone(),
                engine: part.engine.as_ref().map(engine_from_config),
                resources: part
                    .resources
                    .iter()
                    .map(|r| ResourcePool::new(r.name.as_str(), r.amount))
                    .collect(),
            })
            .collect();

        Ok(Vehicle {
            name: config.name.clone(),
            situation: situation_from_config(config.situation),
            total_mass_kg: config.total_mass_kg,
            orbit,
            parts,
        })
    }

    /// Select a vessel by optional name, defaulting to the first orbiting entry.
    pub fn select(
        configs: &[VesselConfig],
        bodies: &[BodyConfig],
        requested: Option<&str>,
    ) -> Result<Vehicle, VesselError> {
        if configs.is_empty() {
            return Err(VesselError::EmptyCatalog);
        }

        let chosen = if let Some(name) = requested {
            let upper = name.to_uppercase();
            configs
                .iter()
                .find(|cfg| cfg.name.to_uppercase() == upper)
                .ok_or_else(|| VesselError::NotFound(name.to_string()))?
        } else {
            configs
                .iter()
                .find(|cfg| cfg.situation == SituationConfig::Orbiting)
                .unwrap_or(&configs[0])
        };

        from_config(chosen, bodies)
    }
}
