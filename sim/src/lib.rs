//! Simulator-facing types for openloop scenarios.
//!
//! This crate describes what a scenario needs from a driving simulator:
//! world-space geometry, actor handles, and the collaborator traits used to
//! query the map and provision actors. It contains no simulation itself.
//!
//! # Design Principles
//!
//! - **Seams, not engines** - Physics, collision detection and behavior
//!   execution belong to the simulator behind these traits.
//! - **Borrowed collaborators** - Scenarios borrow a map and a provider per
//!   call; they never own the world.
//! - **Plain data** - Geometry and handles are `Copy`/`Clone` values with
//!   optional serde support.

mod actor;
mod error;
mod geom;
mod provider;

pub use actor::{Actor, ActorId, VEHICLE_PREFIX};
pub use error::{SimError, SimResult};
pub use geom::{Location, Rotation, Transform};
pub use provider::{ActorProvider, MapQuery};
