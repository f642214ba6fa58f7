//! Vehicle, engine and propellant models, plus the ledger that debits propellant for a burn.

pub mod engine;
pub mod ledger;
pub mod vehicle;

use std::fmt;

pub use engine::{Engine, IspCurve, PropellantRequirement, select_engine};
pub use ledger::{
    ConsumptionPolicy, ConsumptionReport, LEDGER_EPSILON_UNITS, PropellantDraw, PropellantLedger,
    Shortage, Shortfall,
};
pub use vehicle::{Part, ResourcePool, Situation, Vehicle};

/// Typed key naming a propellant resource (e.g. `LiquidFuel`).
///
/// Pools and engine requirements are matched by exact key equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropellantKind(String);

impl PropellantKind {
    pub const LIQUID_FUEL: &'static str = "LiquidFuel";
    pub const OXIDIZER: &'static str = "Oxidizer";
    pub const MONO_PROPELLANT: &'static str = "MonoPropellant";
    pub const XENON_GAS: &'static str = "XenonGas";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn liquid_fuel() -> Self {
        Self::new(Self::LIQUID_FUEL)
    }

    pub fn oxidizer() -> Self {
        Self::new(Self::OXIDIZER)
    }

    pub fn mono_propellant() -> Self {
        Self::new(Self::MONO_PROPELLANT)
    }

    pub fn xenon_gas() -> Self {
        Self::new(Self::XENON_GAS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropellantKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropellantKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
