//! Maneuver façade: the executor that sets a vessel's semi-major axis, plus the pieces a
//! front-end needs around it (readout, notices, config conversion).

pub mod executor;
pub mod notify;
pub mod readout;

pub use facade::*;
pub use station_orbits as orbits;
pub use station_propulsion as propulsion;

mod facade;
