//! Orbit utility helpers: state vectors, vis-viva energy changes, and station keeping gates.

pub mod energy;
pub mod state;

pub use energy::{EnergyError, required_delta_v};
pub use state::{CelestialBody, OrbitState, StateVectors};

/// Semi-major axis of an orbit whose period matches the rotation of a body.
///
/// A body that does not rotate has no synchronous orbit at finite radius, so the result is
/// `f64::INFINITY` when `angular_velocity_rad_s` is zero. The sign of the rotation is ignored.
pub fn synchronous_sma(mu_m3_s2: f64, angular_velocity_rad_s: f64) -> f64 {
    if angular_velocity_rad_s == 0.0 {
        return f64::INFINITY;
    }
    (mu_m3_s2.sqrt() / angular_velocity_rad_s.abs()).powf(2.0 / 3.0)
}

/// Whether `current` lies within a fractional `tolerance` of `target`.
///
/// The comparison is on the ratio `current / target`, so a zero target (or any input that
/// makes the ratio non-finite) is never considered close enough.
pub fn within_tolerance(current: f64, target: f64, tolerance: f64) -> bool {
    let ratio = current / target;
    if !ratio.is_finite() {
        return false;
    }
    ratio >= 1.0 - tolerance && ratio <= 1.0 + tolerance
}
