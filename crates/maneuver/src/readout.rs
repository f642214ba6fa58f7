//! Display values for a vessel's orbit and the tolerance gate on corrections.

use station_orbits::within_tolerance;
use station_propulsion::Vehicle;

use crate::executor::ManeuverSettings;

/// Orbit summary in the display convention of the settings.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitReadout {
    pub vessel: String,
    pub body: String,
    /// `None` when the orbit is unbound.
    pub sma_m: Option<f64>,
    /// `None` when the body has no synchronous orbit, or it lies below the display origin.
    pub synchronous_sma_m: Option<f64>,
    pub eccentricity: f64,
    pub period_s: Option<f64>,
    pub tolerance: f64,
}

impl OrbitReadout {
    /// Corrections are only offered while the orbit is already close to the target.
    pub fn target_enabled(&self, target_sma_m: f64) -> bool {
        self.sma_m
            .is_some_and(|sma| within_tolerance(sma, target_sma_m, self.tolerance))
    }

    pub fn sync_enabled(&self) -> bool {
        self.synchronous_sma_m
            .is_some_and(|sync| self.target_enabled(sync))
    }
}

pub fn readout(vehicle: &Vehicle, settings: &ManeuverSettings) -> OrbitReadout {
    let orbit = &vehicle.orbit;
    let body = &orbit.body;
    let sma_m = orbit
        .is_bound()
        .then(|| settings.display_sma(orbit.semi_major_axis_m, body));
    let synchronous_sma_m = Some(settings.display_sma(body.synchronous_sma(), body))
        .filter(|sync| sync.is_finite() && *sync > 0.0);

    OrbitReadout {
        vessel: vehicle.name.clone(),
        body: body.name.clone(),
        sma_m,
        synchronous_sma_m,
        eccentricity: orbit.eccentricity(),
        period_s: orbit.period_s(),
        tolerance: settings.tolerance,
    }
}
