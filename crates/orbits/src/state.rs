//! Value types describing a central body and a two-body orbit around it.

use station_core::vector::{self, Vector3};

use crate::synchronous_sma;

/// Central body parameters. Read-only input to every calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialBody {
    pub name: String,
    /// Gravitational parameter (m³/s²).
    pub mu_m3_s2: f64,
    /// Mean radius (m).
    pub radius_m: f64,
    /// Sidereal rotation rate (rad/s); zero for a body that does not rotate.
    pub angular_velocity_rad_s: f64,
}

impl CelestialBody {
    /// Semi-major axis of the body's synchronous orbit, measured from its centre.
    pub fn synchronous_sma(&self) -> f64 {
        synchronous_sma(self.mu_m3_s2, self.angular_velocity_rad_s)
    }
}

/// Body-relative position and velocity at a given instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateVectors {
    pub position_m: Vector3,
    pub velocity_m_s: Vector3,
}

/// Snapshot of a Keplerian orbit.
///
/// The semi-major axis is stored alongside the state vectors rather than derived from them:
/// after a station keeping burn it is asserted to the requested value, which the vectors only
/// approximate.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitState {
    /// Semi-major axis measured from the body centre (m). Negative or infinite when unbound.
    pub semi_major_axis_m: f64,
    pub vectors: StateVectors,
    /// Universal time of the snapshot (s).
    pub epoch_s: f64,
    pub body: CelestialBody,
}

impl OrbitState {
    /// Build an orbit from state vectors, deriving the semi-major axis from vis-viva.
    pub fn from_state_vectors(
        position_m: Vector3,
        velocity_m_s: Vector3,
        body: CelestialBody,
        epoch_s: f64,
    ) -> Self {
        let vectors = StateVectors {
            position_m,
            velocity_m_s,
        };
        let energy = specific_energy(body.mu_m3_s2, &vectors);
        Self {
            semi_major_axis_m: -body.mu_m3_s2 / (2.0 * energy),
            vectors,
            epoch_s,
            body,
        }
    }

    /// A bound orbit has a finite, positive semi-major axis.
    pub fn is_bound(&self) -> bool {
        self.semi_major_axis_m.is_finite() && self.semi_major_axis_m > 0.0
    }

    pub fn radius_m(&self) -> f64 {
        vector::norm(&self.vectors.position_m)
    }

    pub fn speed_m_s(&self) -> f64 {
        vector::norm(&self.vectors.velocity_m_s)
    }

    /// Specific orbital energy of the state vectors (J/kg, negative when bound).
    pub fn specific_energy(&self) -> f64 {
        specific_energy(self.body.mu_m3_s2, &self.vectors)
    }

    /// Eccentricity from the eccentricity vector of the state.
    pub fn eccentricity(&self) -> f64 {
        let mu = self.body.mu_m3_s2;
        let r = &self.vectors.position_m;
        let v = &self.vectors.velocity_m_s;
        let radial = vector::norm_squared(v) - mu / vector::norm(r);
        let e_vec = vector::sub(
            &vector::scale(r, radial),
            &vector::scale(v, vector::dot(r, v)),
        );
        vector::norm(&e_vec) / mu
    }

    /// Orbital period from the stored semi-major axis; `None` for unbound orbits.
    pub fn period_s(&self) -> Option<f64> {
        if !self.is_bound() {
            return None;
        }
        let a = self.semi_major_axis_m;
        Some(2.0 * std::f64::consts::PI * (a * a * a / self.body.mu_m3_s2).sqrt())
    }
}

fn specific_energy(mu_m3_s2: f64, vectors: &StateVectors) -> f64 {
    0.5 * vector::norm_squared(&vectors.velocity_m_s) - mu_m3_s2 / vector::norm(&vectors.position_m)
}
