use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::stats::IndexStats;
use crate::core::types::{DocSet, Document};
use crate::index::builder::IndexBuilder;
use crate::index::inverted::InvertedIndex;
use crate::index::posting::PostingList;
use crate::search::searcher::Searcher;

/// Owns the full retrieval pipeline: configuration, analyzer, the built
/// index and its searcher. The index is constructed once here and only read
/// afterwards; queries never mutate it.
pub struct SearchEngine {
    config: Config,
    index: Arc<InvertedIndex>,
    searcher: Searcher,
}

impl SearchEngine {
    /// Index the given collection under `config` and return the engine that
    /// owns the result. Duplicate ids overwrite silently, map-style.
    pub fn from_documents<I>(documents: I, config: Config) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Document>,
    {
        config.validate()?;

        let analyzer = Arc::new(Analyzer::from_config(&config));
        let mut builder = IndexBuilder::new(analyzer.clone());
        builder.add_documents(documents);

        let index = Arc::new(builder.build());
        let searcher = Searcher::new(index.clone(), analyzer);

        Ok(SearchEngine {
            config,
            index,
            searcher,
        })
    }

    /// Union query over the indexed collection (see `Searcher::search`).
    pub fn search(&self, query: &str) -> DocSet {
        self.searcher.search(query)
    }

    /// Intersection query (see `Searcher::search_all`).
    pub fn search_all(&self, query: &str) -> DocSet {
        self.searcher.search_all(query)
    }

    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.searcher.search_term(term)
    }

    pub fn doc_count(&self) -> usize {
        self.index.doc_count()
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats::from_index(&self.index)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
