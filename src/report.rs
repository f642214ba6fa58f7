//! Conversion of maneuver results into exportable reports.

use station_export::report::{ManeuverReport, OrbitLine, PropellantLine};
use station_maneuver::{ManeuverResult, RecordingSink, RejectionReason};
use station_propulsion::PropellantDraw;

fn propellant_line(draw: &PropellantDraw) -> PropellantLine {
    PropellantLine {
        kind: draw.kind.to_string(),
        required_units: draw.required_units,
        drawn_units: draw.drawn_units,
        missing_units: draw.missing_units,
    }
}

/// Build a report for `vessel` from the result of a maneuver and the notices it produced.
pub fn build_report(
    vessel: &str,
    requested_sma_m: f64,
    result: &ManeuverResult,
    notices: &RecordingSink,
) -> ManeuverReport {
    let mut report = ManeuverReport {
        vessel: vessel.to_string(),
        requested_sma_m,
        applied: result.is_applied(),
        rejection: None,
        delta_v_m_s: None,
        fuel_mass_kg: None,
        engine: None,
        propellants: Vec::new(),
        orbit: None,
        notices: notices.messages(),
    };

    match result {
        ManeuverResult::Applied(outcome) => {
            report.delta_v_m_s = Some(outcome.delta_v_m_s);
            report.fuel_mass_kg = Some(outcome.fuel_mass_kg);
            report.engine = Some(outcome.engine.clone());
            report.propellants = outcome.consumption.draws.iter().map(propellant_line).collect();
            report.orbit = Some(OrbitLine {
                body: outcome.orbit.body.name.clone(),
                semi_major_axis_m: outcome.orbit.semi_major_axis_m,
                position_m: outcome.orbit.vectors.position_m,
                velocity_m_s: outcome.orbit.vectors.velocity_m_s,
                epoch_s: outcome.orbit.epoch_s,
            });
        }
        ManeuverResult::Rejected(reason) => {
            report.rejection = Some(reason.to_string());
            if let RejectionReason::InsufficientFuel(shortfall) = reason {
                report.propellants = shortfall.draws.iter().map(propellant_line).collect();
            }
        }
    }

    report
}
