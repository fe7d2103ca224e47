//! # docdex
//!
//! An in-memory inverted-index retrieval library: analyze text into
//! normalized tokens, build a term-to-documents index once from a fixed
//! collection, and answer union or intersection queries over it.
//!
//! The index is read-only after construction, so it can be shared across
//! query threads without synchronization.

pub mod core;
pub mod analysis;
pub mod index;
pub mod search;
pub mod engine;

// Re-exports for the public API
pub use crate::core::config::Config;
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::stats::IndexStats;
pub use crate::core::types::{DocId, DocSet, Document};
pub use crate::engine::SearchEngine;
pub use crate::index::builder::IndexBuilder;
pub use crate::index::inverted::{InvertedIndex, Term};
pub use crate::index::parallel::ParallelIndexBuilder;
pub use crate::search::searcher::Searcher;
