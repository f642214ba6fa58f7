//! Propellant accounting for a single impulsive burn.
//!
//! Each propellant an engine burns is settled independently against the same total propellant
//! mass: its unit count is `ratio * mass / mixture_density`, drawn greedily from the vessel's
//! pools in part order.

use thiserror::Error;
use tracing::debug;

use crate::PropellantKind;
use crate::engine::Engine;
use crate::vehicle::Vehicle;

/// Remaining units below this are treated as fully drawn.
pub const LEDGER_EPSILON_UNITS: f64 = 1e-10;

/// How debits are applied when some propellant runs short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsumptionPolicy {
    /// Debit every kind as far as the pools allow, even when another kind is short.
    #[default]
    BestEffort,
    /// Stage every debit and commit only if all kinds are satisfied.
    AllOrNothing,
}

/// Units requested and actually drawn for one engine propellant.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellantDraw {
    pub kind: PropellantKind,
    pub required_units: f64,
    pub drawn_units: f64,
    /// Units still owed after every matching pool was scanned.
    pub missing_units: f64,
}

impl PropellantDraw {
    pub fn is_short(&self) -> bool {
        self.missing_units > LEDGER_EPSILON_UNITS
    }
}

/// One propellant kind the vessel could not supply in full.
#[derive(Debug, Clone, PartialEq)]
pub struct Shortage {
    pub kind: PropellantKind,
    pub missing_units: f64,
}

/// Successful settlement of every propellant requirement.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConsumptionReport {
    pub draws: Vec<PropellantDraw>,
}

impl ConsumptionReport {
    pub fn units_drawn(&self, kind: &PropellantKind) -> f64 {
        self.draws
            .iter()
            .filter(|d| &d.kind == kind)
            .map(|d| d.drawn_units)
            .sum()
    }
}

/// At least one propellant kind could not be supplied.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("insufficient propellant: {}", describe(.shortages))]
pub struct Shortfall {
    pub shortages: Vec<Shortage>,
    pub draws: Vec<PropellantDraw>,
    /// Whether the partial debits were left on the vessel.
    pub debits_applied: bool,
}

fn describe(shortages: &[Shortage]) -> String {
    shortages
        .iter()
        .map(|s| format!("{} short by {:.2}", s.kind, s.missing_units))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Debits propellant from a vessel's pools according to a [`ConsumptionPolicy`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PropellantLedger {
    pub policy: ConsumptionPolicy,
}

impl PropellantLedger {
    pub fn new(policy: ConsumptionPolicy) -> Self {
        Self { policy }
    }

    /// Units of each engine propellant needed for `total_mass_kg` of propellant mixture.
    pub fn required_units(engine: &Engine, total_mass_kg: f64) -> Vec<(PropellantKind, f64)> {
        engine
            .propellants
            .iter()
            .map(|req| {
                (
                    req.kind.clone(),
                    req.ratio * total_mass_kg / engine.mixture_density_kg_per_unit,
                )
            })
            .collect()
    }

    /// Draw the propellant for `total_mass_kg` from `vehicle`.
    ///
    /// Under [`ConsumptionPolicy::BestEffort`] the vessel keeps any debits made before the
    /// shortfall was detected; under [`ConsumptionPolicy::AllOrNothing`] it is left untouched.
    pub fn consume(
        &self,
        vehicle: &mut Vehicle,
        engine: &Engine,
        total_mass_kg: f64,
    ) -> Result<ConsumptionReport, Shortfall> {
        let required = Self::required_units(engine, total_mass_kg);

        // Debits are staged on a copy of the pool levels, in part order.
        let kinds: Vec<PropellantKind> = vehicle.pools().map(|pool| pool.kind.clone()).collect();
        let mut staged: Vec<f64> = vehicle.pools().map(|pool| pool.amount).collect();

        let mut draws = Vec::with_capacity(required.len());
        for (kind, required_units) in required {
            let mut remaining = required_units;
            for (pool_kind, amount) in kinds.iter().zip(staged.iter_mut()) {
                if *pool_kind != kind {
                    continue;
                }
                let taken = amount.min(remaining).max(0.0);
                *amount -= taken;
                remaining -= taken;
            }
            debug!(
                vessel = %vehicle.name,
                propellant = %kind,
                required_units,
                remaining_units = remaining,
                "settled propellant requirement"
            );
            draws.push(PropellantDraw {
                kind,
                required_units,
                drawn_units: required_units - remaining,
                missing_units: remaining,
            });
        }

        let shortages: Vec<Shortage> = draws
            .iter()
            .filter(|draw| draw.is_short())
            .map(|draw| Shortage {
                kind: draw.kind.clone(),
                missing_units: draw.missing_units,
            })
            .collect();

        let commit = shortages.is_empty() || self.policy == ConsumptionPolicy::BestEffort;
        if commit {
            for (pool, amount) in vehicle.pools_mut().zip(staged) {
                pool.amount = amount;
            }
        }

        if shortages.is_empty() {
            Ok(ConsumptionReport { draws })
        } else {
            Err(Shortfall {
                shortages,
                draws,
                debits_applied: commit,
            })
        }
    }
}
