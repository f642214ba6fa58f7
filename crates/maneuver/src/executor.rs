//! Single-burn semi-major axis change: validate, size the burn, pay for it, apply it.

use std::fmt;

use station_config::{ConsumptionModeConfig, StationConfig};
use station_core::constants::G0;
use station_core::vector;
use station_orbits::{CelestialBody, EnergyError, OrbitState, required_delta_v};
use station_propulsion::{
    ConsumptionPolicy, ConsumptionReport, PropellantLedger, Shortfall, Vehicle, select_engine,
};
use thiserror::Error;
use tracing::{debug, info, info_span, warn};

use crate::notify::{Notice, NotificationSink};

/// Per-call configuration for the executor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManeuverSettings {
    /// Semi-major axes are given and reported from the body centre. When false they are
    /// measured from the body surface.
    pub real_sma: bool,
    /// Fractional tolerance used by the readout gate.
    pub tolerance: f64,
    pub consumption: ConsumptionPolicy,
}

impl Default for ManeuverSettings {
    fn default() -> Self {
        Self {
            real_sma: false,
            tolerance: station_config::DEFAULT_TOLERANCE,
            consumption: ConsumptionPolicy::BestEffort,
        }
    }
}

impl ManeuverSettings {
    /// Convert a semi-major axis in the display convention to one measured from the body centre.
    pub fn absolute_sma(&self, display_sma_m: f64, body: &CelestialBody) -> f64 {
        if self.real_sma {
            display_sma_m
        } else {
            display_sma_m + body.radius_m
        }
    }

    /// Convert a centre-measured semi-major axis to the display convention.
    pub fn display_sma(&self, absolute_sma_m: f64, body: &CelestialBody) -> f64 {
        if self.real_sma {
            absolute_sma_m
        } else {
            absolute_sma_m - body.radius_m
        }
    }
}

impl From<&StationConfig> for ManeuverSettings {
    fn from(config: &StationConfig) -> Self {
        Self {
            real_sma: config.real_sma,
            tolerance: config.tolerance,
            consumption: match config.consumption {
                ConsumptionModeConfig::BestEffort => ConsumptionPolicy::BestEffort,
                ConsumptionModeConfig::AllOrNothing => ConsumptionPolicy::AllOrNothing,
            },
        }
    }
}

/// Stages of a maneuver attempt, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManeuverPhase {
    Validating,
    ComputingDeltaV,
    SelectingEngine,
    ConsumingPropellant,
    Applying,
    Done,
}

impl fmt::Display for ManeuverPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ManeuverPhase::Validating => "validating",
            ManeuverPhase::ComputingDeltaV => "computing delta-v",
            ManeuverPhase::SelectingEngine => "selecting engine",
            ManeuverPhase::ConsumingPropellant => "consuming propellant",
            ManeuverPhase::Applying => "applying",
            ManeuverPhase::Done => "done",
        };
        f.write_str(label)
    }
}

/// Why a maneuver was not applied.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RejectionReason {
    #[error("not in orbit")]
    NotOrbiting,
    #[error("orbit is not bound (semi-major axis {semi_major_axis_m} m)")]
    UnboundOrbit { semi_major_axis_m: f64 },
    #[error("invalid target semi-major axis {target_sma_m} m")]
    InvalidTarget { target_sma_m: f64 },
    /// `radicand` is the squared post-burn speed, negative when the target is out of reach.
    #[error("maneuver infeasible from current velocity")]
    InfeasibleManeuver { radicand: f64 },
    /// The snapshot is at rest but the target needs a non-zero speed change.
    #[error("no velocity to burn along (delta-v {delta_v_m_s} m/s)")]
    NoBurnDirection { delta_v_m_s: f64 },
    #[error("no usable engines")]
    NoUsableEngine,
    /// Carries the ledger's account of every propellant, short or not.
    #[error("insufficient fuel")]
    InsufficientFuel(Shortfall),
}

impl RejectionReason {
    /// Phase in which this rejection is raised.
    pub fn phase(&self) -> ManeuverPhase {
        match self {
            RejectionReason::NotOrbiting
            | RejectionReason::UnboundOrbit { .. }
            | RejectionReason::InvalidTarget { .. } => ManeuverPhase::Validating,
            RejectionReason::InfeasibleManeuver { .. } | RejectionReason::NoBurnDirection { .. } => {
                ManeuverPhase::ComputingDeltaV
            }
            RejectionReason::NoUsableEngine => ManeuverPhase::SelectingEngine,
            RejectionReason::InsufficientFuel(_) => ManeuverPhase::ConsumingPropellant,
        }
    }

    /// Sentence ending used in user notices ("<vessel> not in orbit").
    pub fn predicate(&self) -> &'static str {
        match self {
            RejectionReason::NotOrbiting => "not in orbit",
            RejectionReason::UnboundOrbit { .. } => "is not on a bound orbit",
            RejectionReason::InvalidTarget { .. } => "has no valid target orbit",
            RejectionReason::InfeasibleManeuver { .. } => {
                "cannot reach the target from its current velocity"
            }
            RejectionReason::NoBurnDirection { .. } => "has no velocity to burn along",
            RejectionReason::NoUsableEngine => "has no usable engines",
            RejectionReason::InsufficientFuel(_) => "has insufficient fuel",
        }
    }
}

/// Everything produced by an applied maneuver. The caller owns the new orbit.
#[derive(Debug, Clone, PartialEq)]
pub struct ManeuverOutcome {
    pub orbit: OrbitState,
    /// Signed speed change; negative for a retrograde burn.
    pub delta_v_m_s: f64,
    pub fuel_mass_kg: f64,
    pub engine: String,
    pub vacuum_isp_s: f64,
    pub consumption: ConsumptionReport,
    /// Target measured from the body centre.
    pub target_sma_m: f64,
    /// Target in the display convention of the settings.
    pub reported_sma_m: f64,
}

/// Terminal state of a maneuver attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ManeuverResult {
    Applied(ManeuverOutcome),
    Rejected(RejectionReason),
}

impl ManeuverResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, ManeuverResult::Applied(_))
    }

    pub fn outcome(&self) -> Option<&ManeuverOutcome> {
        match self {
            ManeuverResult::Applied(outcome) => Some(outcome),
            ManeuverResult::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&RejectionReason> {
        match self {
            ManeuverResult::Applied(_) => None,
            ManeuverResult::Rejected(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<ManeuverOutcome, RejectionReason> {
        self.into()
    }
}

impl From<Result<ManeuverOutcome, RejectionReason>> for ManeuverResult {
    fn from(result: Result<ManeuverOutcome, RejectionReason>) -> Self {
        match result {
            Ok(outcome) => ManeuverResult::Applied(outcome),
            Err(reason) => ManeuverResult::Rejected(reason),
        }
    }
}

impl From<ManeuverResult> for Result<ManeuverOutcome, RejectionReason> {
    fn from(result: ManeuverResult) -> Self {
        match result {
            ManeuverResult::Applied(outcome) => Ok(outcome),
            ManeuverResult::Rejected(reason) => Err(reason),
        }
    }
}

/// Stateless service that changes a vessel's semi-major axis with one impulsive burn.
#[derive(Debug, Clone, Default)]
pub struct ManeuverExecutor {
    settings: ManeuverSettings,
}

impl ManeuverExecutor {
    pub fn new(settings: ManeuverSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ManeuverSettings {
        &self.settings
    }

    /// Try to move `vehicle` to `target_sma_m` (in the display convention of the settings).
    ///
    /// Propellant is debited from `vehicle` on success. On an insufficient-fuel rejection the
    /// pools keep or drop the partial debits according to the consumption policy; every other
    /// rejection leaves the vehicle untouched. The vehicle's own orbit is never replaced; the
    /// new orbit is returned in the outcome.
    pub fn attempt_maneuver(
        &self,
        vehicle: &mut Vehicle,
        target_sma_m: f64,
        sink: &mut dyn NotificationSink,
    ) -> ManeuverResult {
        let span = info_span!("maneuver", vessel = %vehicle.name, target_sma_m);
        let _guard = span.enter();

        let result = self.run(vehicle, target_sma_m, sink);
        match &result {
            Ok(outcome) => {
                info!(
                    delta_v_m_s = outcome.delta_v_m_s,
                    fuel_mass_kg = outcome.fuel_mass_kg,
                    engine = %outcome.engine,
                    "maneuver applied"
                );
                sink.notify(Notice::Applied {
                    vessel: vehicle.name.clone(),
                    target_sma_m: outcome.reported_sma_m,
                });
            }
            Err(reason) => {
                warn!(phase = %reason.phase(), %reason, "maneuver rejected");
                sink.notify(Notice::Rejected {
                    vessel: vehicle.name.clone(),
                    reason: reason.clone(),
                });
            }
        }
        result.into()
    }

    fn run(
        &self,
        vehicle: &mut Vehicle,
        target_sma_m: f64,
        sink: &mut dyn NotificationSink,
    ) -> Result<ManeuverOutcome, RejectionReason> {
        debug!(phase = %ManeuverPhase::Validating);
        if !vehicle.is_orbiting() {
            debug!(situation = %vehicle.situation, "vessel is not orbiting");
            return Err(RejectionReason::NotOrbiting);
        }
        let orbit = vehicle.orbit.clone();
        if !orbit.is_bound() {
            return Err(RejectionReason::UnboundOrbit {
                semi_major_axis_m: orbit.semi_major_axis_m,
            });
        }
        let absolute_target = self.settings.absolute_sma(target_sma_m, &orbit.body);
        if !(absolute_target.is_finite() && absolute_target > 0.0) {
            return Err(RejectionReason::InvalidTarget { target_sma_m });
        }

        debug!(phase = %ManeuverPhase::ComputingDeltaV, absolute_target);
        let delta_v = required_delta_v(
            orbit.body.mu_m3_s2,
            orbit.semi_major_axis_m,
            absolute_target,
            &orbit.vectors,
        )
        .map_err(|EnergyError::Infeasible { radicand }| {
            RejectionReason::InfeasibleManeuver { radicand }
        })?;
        let speed = orbit.speed_m_s();
        if speed == 0.0 && delta_v != 0.0 {
            return Err(RejectionReason::NoBurnDirection {
                delta_v_m_s: delta_v,
            });
        }

        debug!(phase = %ManeuverPhase::SelectingEngine, delta_v);
        let engine = select_engine(vehicle)
            .cloned()
            .ok_or(RejectionReason::NoUsableEngine)?;
        let isp = engine.vacuum_isp();

        let fuel_mass_kg = delta_v.abs() / (isp * G0) * vehicle.total_mass_kg;
        debug!(
            phase = %ManeuverPhase::ConsumingPropellant,
            engine = %engine.name,
            isp,
            fuel_mass_kg
        );
        for (kind, units) in PropellantLedger::required_units(&engine, fuel_mass_kg) {
            sink.notify(Notice::PropellantDraw {
                vessel: vehicle.name.clone(),
                kind,
                units,
            });
        }
        let consumption = PropellantLedger::new(self.settings.consumption)
            .consume(vehicle, &engine, fuel_mass_kg)
            .map_err(|shortfall| {
                debug!(debits_applied = shortfall.debits_applied, "{shortfall}");
                RejectionReason::InsufficientFuel(shortfall)
            })?;

        debug!(phase = %ManeuverPhase::Applying);
        let velocity = if speed == 0.0 {
            orbit.vectors.velocity_m_s
        } else {
            vector::scale(&orbit.vectors.velocity_m_s, 1.0 + delta_v / speed)
        };
        let mut new_orbit = OrbitState::from_state_vectors(
            orbit.vectors.position_m,
            velocity,
            orbit.body.clone(),
            orbit.epoch_s,
        );
        // The vectors only approximate the target; the requested value is asserted.
        new_orbit.semi_major_axis_m = absolute_target;

        debug!(phase = %ManeuverPhase::Done);
        Ok(ManeuverOutcome {
            orbit: new_orbit,
            delta_v_m_s: delta_v,
            fuel_mass_kg,
            engine: engine.name,
            vacuum_isp_s: isp,
            consumption,
            target_sma_m: absolute_target,
            reported_sma_m: self.settings.display_sma(absolute_target, &orbit.body),
        })
    }
}
