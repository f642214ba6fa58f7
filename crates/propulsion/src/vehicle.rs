//! Vessel snapshot: situation, mass, orbit and the ordered list of parts.

use std::fmt;

use station_orbits::OrbitState;

use crate::PropellantKind;
use crate::engine::Engine;

/// Flight situation reported by the host simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    Prelaunch,
    Landed,
    Splashed,
    Flying,
    SubOrbital,
    Orbiting,
    Escaping,
    Docked,
}

impl fmt::Display for Situation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Situation::Prelaunch => "prelaunch",
            Situation::Landed => "landed",
            Situation::Splashed => "splashed",
            Situation::Flying => "flying",
            Situation::SubOrbital => "suborbital",
            Situation::Orbiting => "orbiting",
            Situation::Escaping => "escaping",
            Situation::Docked => "docked",
        };
        f.write_str(label)
    }
}

/// Propellant stored on a single part.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourcePool {
    pub kind: PropellantKind,
    /// Stored amount in resource units; never negative.
    pub amount: f64,
}

impl ResourcePool {
    pub fn new(kind: impl Into<PropellantKind>, amount: f64) -> Self {
        Self {
            kind: kind.into(),
            amount,
        }
    }
}

/// One vessel part: at most one engine plus any number of resource pools.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Part {
    pub name: String,
    pub engine: Option<Engine>,
    pub resources: Vec<ResourcePool>,
}

/// Vessel snapshot handed to the maneuver core for a single invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub name: String,
    pub situation: Situation,
    /// Total wet mass (kg).
    pub total_mass_kg: f64,
    pub orbit: OrbitState,
    pub parts: Vec<Part>,
}

impl Vehicle {
    pub fn is_orbiting(&self) -> bool {
        self.situation == Situation::Orbiting
    }

    /// Total amount of `kind` across every part.
    pub fn resource_amount(&self, kind: &PropellantKind) -> f64 {
        self.pools().filter(|p| &p.kind == kind).map(|p| p.amount).sum()
    }

    /// Every resource pool in part order.
    pub fn pools(&self) -> impl Iterator<Item = &ResourcePool> {
        self.parts.iter().flat_map(|part| part.resources.iter())
    }

    pub(crate) fn pools_mut(&mut self) -> impl Iterator<Item = &mut ResourcePool> {
        self.parts.iter_mut().flat_map(|part| part.resources.iter_mut())
    }
}
