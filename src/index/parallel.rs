use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::core::error::{Error, ErrorKind, Result};
use crate::core::types::{DocId, Document};
use crate::index::inverted::InvertedIndex;

/// Parallel counterpart of `IndexBuilder` for large collections.
///
/// Documents are analyzed on a rayon pool into per-worker partial indexes
/// that are merged at the end. The output is observably identical to the
/// sequential builder's for the same input, including the overwrite
/// semantics for duplicate ids.
pub struct ParallelIndexBuilder {
    analyzer: Arc<Analyzer>,
    workers: usize,
}

impl ParallelIndexBuilder {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        ParallelIndexBuilder {
            analyzer,
            workers: num_cpus::get(),
        }
    }

    pub fn with_workers(analyzer: Arc<Analyzer>, workers: usize) -> Result<Self> {
        if workers == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "worker count must be at least 1",
            ));
        }

        Ok(ParallelIndexBuilder { analyzer, workers })
    }

    pub fn build<I>(self, documents: I) -> Result<InvertedIndex>
    where
        I: IntoIterator,
        I::Item: Into<Document>,
    {
        // Stage through a map first: last write per id wins, as in the
        // sequential builder.
        let staged: HashMap<DocId, String> = documents
            .into_iter()
            .map(|d| {
                let Document { id, text } = d.into();
                (id, text)
            })
            .collect();
        let entries: Vec<(DocId, String)> = staged.into_iter().collect();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .build()
            .map_err(|e| Error::new(ErrorKind::Internal, e.to_string()))?;

        let analyzer = &self.analyzer;
        let index = pool.install(|| {
            entries
                .par_iter()
                .fold(InvertedIndex::new, |mut partial, (id, text)| {
                    let tokens = analyzer.analyze(text);
                    partial.insert_document(id.clone(), &tokens);
                    partial
                })
                .reduce(InvertedIndex::new, |mut left, right| {
                    left.merge(right);
                    left
                })
        });

        debug!(
            "built index on {} workers: {} documents, {} terms",
            self.workers,
            index.doc_count(),
            index.term_count()
        );

        Ok(index)
    }
}
