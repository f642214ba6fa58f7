//! Engine definitions and best-engine selection.

use crate::PropellantKind;
use crate::vehicle::Vehicle;

/// Specific impulse as a function of ambient pressure (atm).
///
/// Keys are `(pressure_atm, isp_s)`, kept sorted by pressure. Lookups interpolate linearly and
/// clamp outside the keyed range.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IspCurve {
    keys: Vec<(f64, f64)>,
}

impl IspCurve {
    pub fn new(mut keys: Vec<(f64, f64)>) -> Self {
        keys.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self { keys }
    }

    /// Curve with the same Isp at every pressure.
    pub fn constant(isp_s: f64) -> Self {
        Self::new(vec![(0.0, isp_s)])
    }

    pub fn keys(&self) -> &[(f64, f64)] {
        &self.keys
    }

    /// Isp at `pressure_atm`; NaN for an empty curve.
    pub fn evaluate(&self, pressure_atm: f64) -> f64 {
        let (first, last) = match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return f64::NAN,
        };
        if pressure_atm <= first.0 {
            return first.1;
        }
        if pressure_atm >= last.0 {
            return last.1;
        }
        for pair in self.keys.windows(2) {
            let (p0, isp0) = pair[0];
            let (p1, isp1) = pair[1];
            if pressure_atm <= p1 {
                if p1 == p0 {
                    return isp1;
                }
                let t = (pressure_atm - p0) / (p1 - p0);
                return isp0 + t * (isp1 - isp0);
            }
        }
        last.1
    }
}

/// One propellant consumed by an engine and its share of the propellant mass.
#[derive(Debug, Clone, PartialEq)]
pub struct PropellantRequirement {
    pub kind: PropellantKind,
    pub ratio: f64,
}

impl PropellantRequirement {
    pub fn new(kind: impl Into<PropellantKind>, ratio: f64) -> Self {
        Self {
            kind: kind.into(),
            ratio,
        }
    }
}

/// Static engine capability installed on a part.
#[derive(Debug, Clone, PartialEq)]
pub struct Engine {
    pub name: String,
    pub isp_curve: IspCurve,
    pub propellants: Vec<PropellantRequirement>,
    /// Mass of one unit of the propellant mixture (kg/unit).
    pub mixture_density_kg_per_unit: f64,
}

impl Engine {
    /// Specific impulse at zero ambient pressure (s).
    pub fn vacuum_isp(&self) -> f64 {
        self.isp_curve.evaluate(0.0)
    }

    /// An engine is usable for a burn when its vacuum Isp is a positive finite number.
    pub fn is_usable(&self) -> bool {
        let isp = self.vacuum_isp();
        isp.is_finite() && isp > 0.0
    }
}

/// Pick the usable engine with the highest vacuum Isp; the first one wins ties.
pub fn select_engine(vehicle: &Vehicle) -> Option<&Engine> {
    let mut best: Option<(&Engine, f64)> = None;
    for engine in vehicle.parts.iter().filter_map(|part| part.engine.as_ref()) {
        if !engine.is_usable() {
            continue;
        }
        let isp = engine.vacuum_isp();
        if best.is_none_or(|(_, best_isp)| isp > best_isp) {
            best = Some((engine, isp));
        }
    }
    best.map(|(engine, _)| engine)
}
