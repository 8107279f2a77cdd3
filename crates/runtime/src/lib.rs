//! Session layer for the crawl engine.
//!
//! The engine core is deliberately blind to everything outside one turn; this
//! crate supplies the collaborators it declares: event sinks (controllers), a
//! deterministic floor generator, and a single-writer session driver that
//! owns the state between turns. Transport, persistence, and rendering stay
//! out — a controller is where they would plug in.

pub mod controller;
pub mod generator;
pub mod session;

pub use controller::{BufferedController, EventBuffer, ReplayController};
pub use generator::{GeneratorConfig, GridFloorGenerator};
pub use session::{Session, SessionError, spawn_player};
