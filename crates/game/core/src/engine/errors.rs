//! Errors surfaced by the execute pipeline.
//!
//! Invalid-but-submitted actions are NOT errors: they resolve to honest
//! no-ops. Everything here is either a malformed call or a broken invariant.

use crate::env::{EnvError, GenerateError};
use crate::fog::FogMapMismatch;
use crate::state::EntityId;

/// Failure of one `execute()` call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    /// The crawl has already concluded; concluded states are never mutated.
    #[error("crawl already concluded; no further actions may be executed")]
    CrawlConcluded,

    /// The acting entity is not part of the current state.
    #[error("entity {0} not found in crawl state")]
    EntityNotFound(EntityId),

    /// A required external collaborator was not wired up.
    #[error(transparent)]
    Env(#[from] EnvError),

    /// The floor generator failed during advancement.
    #[error(transparent)]
    Generate(#[from] GenerateError),

    /// An entity's fog map no longer matches the floor dimensions.
    #[error(transparent)]
    Fog(#[from] FogMapMismatch),
}
