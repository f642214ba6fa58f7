mod common;

use common::{bipropellant_engine, engine_part, orbiting_vessel, pool_levels, tank};
use station_keeping::propulsion::{
    ConsumptionPolicy, Engine, IspCurve, Part, PropellantKind, PropellantLedger,
    PropellantRequirement, ResourcePool, select_engine,
};

/// Engine burning a single propellant where one kilogram of mixture is one unit.
fn mono_engine() -> Engine {
    Engine {
        name: "Puff".to_string(),
        isp_curve: IspCurve::constant(250.0),
        propellants: vec![PropellantRequirement::new(PropellantKind::MONO_PROPELLANT, 1.0)],
        mixture_density_kg_per_unit: 1.0,
    }
}

fn mono_tank(name: &str, amount: f64) -> Part {
    Part {
        name: name.to_string(),
        engine: None,
        resources: vec![ResourcePool::new(PropellantKind::MONO_PROPELLANT, amount)],
    }
}

#[test]
fn split_pools_are_drained_in_part_order() {
    let mut vessel = orbiting_vessel(0.0, 0.0);
    vessel.parts = vec![mono_tank("first", 3.0), mono_tank("second", 5.0)];

    let report = PropellantLedger::default()
        .consume(&mut vessel, &mono_engine(), 6.0)
        .expect("8 units cover 6");

    assert_eq!(pool_levels(&vessel), vec![0.0, 2.0]);
    assert_eq!(report.draws.len(), 1);
    assert_eq!(report.draws[0].required_units, 6.0);
    assert_eq!(report.draws[0].drawn_units, 6.0);
    assert_eq!(report.units_drawn(&PropellantKind::mono_propellant()), 6.0);
}

#[test]
fn shortfall_drains_everything_and_reports_missing_units() {
    let mut vessel = orbiting_vessel(0.0, 0.0);
    vessel.parts = vec![mono_tank("first", 3.0), mono_tank("second", 3.0)];

    let shortfall = PropellantLedger::new(ConsumptionPolicy::BestEffort)
        .consume(&mut vessel, &mono_engine(), 10.0)
        .expect_err("6 units cannot cover 10");

    assert_eq!(pool_levels(&vessel), vec![0.0, 0.0]);
    assert!(shortfall.debits_applied);
    assert_eq!(shortfall.shortages.len(), 1);
    assert_eq!(shortfall.shortages[0].kind, PropellantKind::mono_propellant());
    assert_eq!(shortfall.shortages[0].missing_units, 4.0);
    assert!(shortfall.to_string().contains("MonoPropellant short by 4.00"));
}

#[test]
fn best_effort_keeps_debits_of_kinds_that_were_available() {
    let mut vessel = orbiting_vessel(1.0, 100.0);
    let engine = bipropellant_engine("Main", 300.0);

    // 20 kg of mixture: 3.6 units of fuel and 4.4 units of oxidizer.
    let shortfall = PropellantLedger::new(ConsumptionPolicy::BestEffort)
        .consume(&mut vessel, &engine, 20.0)
        .expect_err("fuel is short");

    let levels = pool_levels(&vessel);
    assert_eq!(levels[0], 0.0);
    assert!((levels[1] - 95.6).abs() < 1e-9, "oxidizer = {}", levels[1]);
    assert_eq!(shortfall.shortages.len(), 1);
    assert_eq!(shortfall.shortages[0].kind, PropellantKind::liquid_fuel());
    assert!((shortfall.shortages[0].missing_units - 2.6).abs() < 1e-9);
    assert_eq!(shortfall.draws.len(), 2);
    assert!(!shortfall.draws[1].is_short());
}

#[test]
fn all_or_nothing_leaves_pools_untouched_on_shortfall() {
    let mut vessel = orbiting_vessel(1.0, 100.0);
    let engine = bipropellant_engine("Main", 300.0);
    let before = pool_levels(&vessel);

    let shortfall = PropellantLedger::new(ConsumptionPolicy::AllOrNothing)
        .consume(&mut vessel, &engine, 20.0)
        .expect_err("fuel is short");

    assert!(!shortfall.debits_applied);
    assert_eq!(pool_levels(&vessel), before);
    assert!((shortfall.draws[0].drawn_units - 1.0).abs() < 1e-12);
}

#[test]
fn all_or_nothing_commits_when_every_kind_is_covered() {
    let mut vessel = orbiting_vessel(10.0, 10.0);
    let engine = bipropellant_engine("Main", 300.0);

    PropellantLedger::new(ConsumptionPolicy::AllOrNothing)
        .consume(&mut vessel, &engine, 20.0)
        .expect("enough of both");

    let levels = pool_levels(&vessel);
    assert!((levels[0] - 6.4).abs() < 1e-9);
    assert!((levels[1] - 5.6).abs() < 1e-9);
}

#[test]
fn each_kind_is_sized_from_the_full_mixture_mass() {
    let engine = bipropellant_engine("Main", 300.0);
    let required = PropellantLedger::required_units(&engine, 50.0);
    assert_eq!(
        required,
        vec![
            (PropellantKind::liquid_fuel(), 0.9 * 50.0 / 5.0),
            (PropellantKind::oxidizer(), 1.1 * 50.0 / 5.0),
        ]
    );
}

#[test]
fn pools_of_other_kinds_are_ignored() {
    let mut vessel = orbiting_vessel(50.0, 50.0);
    vessel.parts.push(mono_tank("rcs", 2.0));

    let shortfall = PropellantLedger::default()
        .consume(&mut vessel, &mono_engine(), 5.0)
        .expect_err("only 2 units of monopropellant aboard");

    assert_eq!(pool_levels(&vessel), vec![50.0, 50.0, 0.0]);
    assert_eq!(shortfall.shortages[0].missing_units, 3.0);
}

#[test]
fn residue_below_epsilon_is_not_a_shortfall() {
    let mut vessel = orbiting_vessel(0.0, 0.0);
    vessel.parts = vec![mono_tank("tank", 6.0 - 1e-12)];

    assert!(
        PropellantLedger::default()
            .consume(&mut vessel, &mono_engine(), 6.0)
            .is_ok()
    );
}

#[test]
fn highest_vacuum_isp_wins_and_ties_keep_the_first() {
    let mut vessel = orbiting_vessel(10.0, 10.0);
    vessel.parts = vec![
        engine_part(bipropellant_engine("Reliant", 280.0)),
        tank("tank", 10.0, 10.0),
        engine_part(bipropellant_engine("Terrier", 345.0)),
        engine_part(bipropellant_engine("Poodle", 345.0)),
    ];

    let engine = select_engine(&vessel).expect("engines aboard");
    assert_eq!(engine.name, "Terrier");
}

#[test]
fn engine_selection_uses_vacuum_end_of_the_curve() {
    let mut atmospheric = bipropellant_engine("Mainsail", 0.0);
    atmospheric.isp_curve = IspCurve::new(vec![(1.0, 285.0), (0.0, 310.0)]);
    let mut vacuum = bipropellant_engine("Poodle", 0.0);
    vacuum.isp_curve = IspCurve::new(vec![(0.0, 300.0), (1.0, 90.0)]);

    let mut vessel = orbiting_vessel(10.0, 10.0);
    vessel.parts = vec![engine_part(vacuum), engine_part(atmospheric)];

    let engine = select_engine(&vessel).unwrap();
    assert_eq!(engine.name, "Mainsail");
    assert_eq!(engine.vacuum_isp(), 310.0);
    assert!((engine.isp_curve.evaluate(0.5) - 297.5).abs() < 1e-12);
    assert_eq!(engine.isp_curve.evaluate(3.0), 285.0);
}

#[test]
fn vessels_without_usable_engines_select_nothing() {
    let mut vessel = orbiting_vessel(10.0, 10.0);
    vessel.parts = vec![tank("tank", 10.0, 10.0)];
    assert!(select_engine(&vessel).is_none());

    vessel.parts.push(engine_part(bipropellant_engine("Dud", 0.0)));
    let mut empty_curve = bipropellant_engine("Blank", 300.0);
    empty_curve.isp_curve = IspCurve::default();
    vessel.parts.push(engine_part(empty_curve));
    assert!(select_engine(&vessel).is_none());
}
