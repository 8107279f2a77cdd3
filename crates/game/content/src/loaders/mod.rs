//! Loaders for reading content from RON data files.
//!
//! Loaders deserialize directly into `crawl-core` types; there is no separate
//! format layer.

pub mod attacks;

pub use attacks::AttackRegistry;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;
