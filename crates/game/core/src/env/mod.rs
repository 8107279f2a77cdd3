//! Boundaries to the subsystems the engine uses but does not implement.
//!
//! The engine reaches the outside world through two traits: a floor generator
//! (invoked on advancement) and an RNG oracle (accuracy rolls). The
//! [`CrawlEnv`] aggregate bundles them so callers can wire up only what a
//! given invocation actually needs.

mod rng;

pub use rng::{PcgRng, RngOracle, compute_seed};

use crate::state::{CrawlEntity, CrawlState, Dungeon};

/// External floor construction.
///
/// Called by the executor when a qualifying entity reaches the stairs. Must
/// behave as a deterministic pure function of its inputs; the engine performs
/// no retries.
pub trait FloorGenerator {
    /// Builds the state for `floor_number`, carrying exactly the given
    /// entities forward, or concludes the crawl when the dungeon has no such
    /// floor.
    fn advance_to_floor(
        &self,
        dungeon: &Dungeon,
        floor_number: u32,
        advancers: Vec<CrawlEntity>,
    ) -> Result<CrawlState, GenerateError>;
}

/// Floor construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("floor generation failed: {0}")]
    Failed(String),
}

/// Aggregates the external collaborators one execute() call may touch.
#[derive(Clone, Copy)]
pub struct CrawlEnv<'a> {
    generator: Option<&'a dyn FloorGenerator>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> CrawlEnv<'a> {
    pub fn new(
        generator: Option<&'a dyn FloorGenerator>,
        rng: Option<&'a dyn RngOracle>,
    ) -> Self {
        Self { generator, rng }
    }

    pub fn with_all(generator: &'a dyn FloorGenerator, rng: &'a dyn RngOracle) -> Self {
        Self::new(Some(generator), Some(rng))
    }

    pub fn empty() -> Self {
        Self {
            generator: None,
            rng: None,
        }
    }

    /// Returns the floor generator, or an error if none was provided.
    pub fn generator(&self) -> Result<&'a dyn FloorGenerator, EnvError> {
        self.generator.ok_or(EnvError::GeneratorNotAvailable)
    }

    /// Returns the RNG oracle, or an error if none was provided.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, EnvError> {
        self.rng.ok_or(EnvError::RngNotAvailable)
    }
}

/// A collaborator the current call needed but was not wired up with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EnvError {
    #[error("floor generator not available")]
    GeneratorNotAvailable,
    #[error("rng oracle not available")]
    RngNotAvailable,
}
