//! Specific orbital energy bookkeeping for semi-major axis changes.
//!
//! Energies here are tracked as the magnitude `mu / 2a`; only their difference enters the
//! speed equation, so the physical minus sign cancels.

use station_core::vector;
use thiserror::Error;

use crate::state::StateVectors;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum EnergyError {
    /// The current speed cannot shed enough kinetic energy to reach the target.
    #[error("maneuver infeasible from current velocity (speed radicand {radicand:.3e} m²/s²)")]
    Infeasible { radicand: f64 },
}

/// Signed change in speed needed to move from `current_sma_m` to `target_sma_m`.
///
/// The burn is taken as a single tangential-magnitude impulse at the supplied state:
/// `|v'|² = |v|² + 2 (mu/2a - mu/2a')`. Positive results are prograde, negative retrograde.
pub fn required_delta_v(
    mu_m3_s2: f64,
    current_sma_m: f64,
    target_sma_m: f64,
    state: &StateVectors,
) -> Result<f64, EnergyError> {
    let current_energy = mu_m3_s2 / (2.0 * current_sma_m);
    let target_energy = mu_m3_s2 / (2.0 * target_sma_m);
    let additional_energy = current_energy - target_energy;

    let speed = vector::norm(&state.velocity_m_s);
    let radicand = vector::norm_squared(&state.velocity_m_s) + 2.0 * additional_energy;
    if radicand.is_nan() || radicand < 0.0 {
        return Err(EnergyError::Infeasible { radicand });
    }

    Ok(radicand.sqrt() - speed)
}
