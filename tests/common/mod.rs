#![allow(dead_code)]

use station_keeping::orbits::{CelestialBody, OrbitState};
use station_keeping::propulsion::{
    Engine, IspCurve, Part, PropellantKind, PropellantRequirement, ResourcePool, Situation,
    Vehicle,
};

pub const MU_EARTH: f64 = 3.986e14; // m^3 / s^2
pub const R_EARTH: f64 = 6.371e6; // m

pub fn earth() -> CelestialBody {
    CelestialBody {
        name: "Earth".to_string(),
        mu_m3_s2: MU_EARTH,
        radius_m: R_EARTH,
        angular_velocity_rad_s: 7.292_115e-5,
    }
}

/// Circular orbit of radius `radius_m` in the x-y plane, SMA asserted to exactly `radius_m`.
pub fn circular_orbit(body: CelestialBody, radius_m: f64) -> OrbitState {
    let speed = (body.mu_m3_s2 / radius_m).sqrt();
    let mut orbit =
        OrbitState::from_state_vectors([radius_m, 0.0, 0.0], [0.0, speed, 0.0], body, 1.0e6);
    orbit.semi_major_axis_m = radius_m;
    orbit
}

pub fn bipropellant_engine(name: &str, isp_s: f64) -> Engine {
    Engine {
        name: name.to_string(),
        isp_curve: IspCurve::constant(isp_s),
        propellants: vec![
            PropellantRequirement::new(PropellantKind::LIQUID_FUEL, 0.9),
            PropellantRequirement::new(PropellantKind::OXIDIZER, 1.1),
        ],
        mixture_density_kg_per_unit: 5.0,
    }
}

pub fn tank(name: &str, liquid_fuel: f64, oxidizer: f64) -> Part {
    Part {
        name: name.to_string(),
        engine: None,
        resources: vec![
            ResourcePool::new(PropellantKind::LIQUID_FUEL, liquid_fuel),
            ResourcePool::new(PropellantKind::OXIDIZER, oxidizer),
        ],
    }
}

pub fn engine_part(engine: Engine) -> Part {
    Part {
        name: format!("{}-mount", engine.name),
        engine: Some(engine),
        resources: Vec::new(),
    }
}

/// 1 t vessel in a 6800 km circular Earth orbit with a 300 s engine and one tank.
pub fn orbiting_vessel(liquid_fuel: f64, oxidizer: f64) -> Vehicle {
    Vehicle {
        name: "Keeper".to_string(),
        situation: Situation::Orbiting,
        total_mass_kg: 1_000.0,
        orbit: circular_orbit(earth(), 6.8e6),
        parts: vec![
            tank("tank", liquid_fuel, oxidizer),
            engine_part(bipropellant_engine("Main", 300.0)),
        ],
    }
}

pub fn pool_levels(vehicle: &Vehicle) -> Vec<f64> {
    vehicle.pools().map(|pool| pool.amount).collect()
}
