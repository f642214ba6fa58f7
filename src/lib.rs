//! Station keeping: change a vessel's semi-major axis with a single impulsive burn, paid for
//! out of the propellant it actually carries.
//!
//! The heavy lifting lives in the workspace crates; this crate ties them together for
//! front-ends (catalog loading, report building) and re-exports them under short names.

pub mod fleet;
pub mod report;

pub use station_config as config;
pub use station_core::{constants, units, vector};
pub use station_export as export;
pub use station_maneuver as maneuver;
pub use station_orbits as orbits;
pub use station_propulsion as propulsion;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
