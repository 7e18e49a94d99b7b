//! Impactor kinematics solver: the mass, diameter, and speed solve modes, with the
//! atmospheric retention coupling and relativistic speed handling they share.

pub mod coupling;
pub mod request;
pub mod result;
pub mod scenario;

pub use facade::*;
pub use unbind_atmosphere as atmosphere;
pub use unbind_bodies as bodies;
pub use unbind_relativity as relativity;

mod facade;
mod kinematics;
