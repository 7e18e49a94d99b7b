//! Planetary unbinding calculator.
//!
//! Computes the impactor mass, size, or speed needed to deliver a body's gravitational
//! binding energy, with relativistic kinematics and empirical atmospheric losses.
//! Keeping the solver in library crates lets multiple front-ends share it; this crate
//! re-exports the workspace members under short names.

pub use unbind_atmosphere as atmosphere;
pub use unbind_bodies as bodies;
pub use unbind_config as config;
pub use unbind_core as core;
pub use unbind_dose as dose;
pub use unbind_export as export;
pub use unbind_relativity as relativity;
pub use unbind_solver as solver;

/// Returns the version of the library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
