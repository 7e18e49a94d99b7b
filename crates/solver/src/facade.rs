//! Re-exported APIs for consumers of the solver crate.

pub use crate::coupling::{COUPLING_PASSES, CouplingPass, SpeedCoupling};
pub use crate::kinematics::{SolveError, solve, solve_by_diameter, solve_by_mass, solve_by_speed};
pub use crate::request::{SolveMode, SolveRequest, ValidationError};
pub use crate::result::{SolveKind, SolveResult, is_destructive};
pub use unbind_bodies::{CelestialBody, ImpactorMaterial};
