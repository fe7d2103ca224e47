use std::sync::Arc;

use log::trace;

use crate::analysis::analyzer::Analyzer;
use crate::core::types::DocSet;
use crate::index::inverted::{InvertedIndex, Term};
use crate::index::posting::PostingList;

/// Read side of the index. Holds the immutable index together with the
/// analyzer it was built with, so query text is normalized exactly like
/// document text.
pub struct Searcher {
    index: Arc<InvertedIndex>,
    analyzer: Arc<Analyzer>,
}

impl Searcher {
    pub fn new(index: Arc<InvertedIndex>, analyzer: Arc<Analyzer>) -> Self {
        Searcher { index, analyzer }
    }

    /// Free-text query: the union of documents matching any query term.
    ///
    /// Terms absent from the index contribute nothing. An empty query, an
    /// all-stop-word query, or a query matching no documents returns an
    /// empty set; none of these are errors.
    pub fn search(&self, query: &str) -> DocSet {
        let mut matches = DocSet::new();

        for token in self.analyzer.analyze(query) {
            if let Some(list) = self.index.postings(&Term::new(&token.text)) {
                matches.extend(list.doc_ids().cloned());
            }
        }

        trace!("query {:?} matched {} documents", query, matches.len());
        matches
    }

    /// Intersection query: only documents matching every query term.
    ///
    /// A term absent from the index, or an empty query, short-circuits to an
    /// empty set.
    pub fn search_all(&self, query: &str) -> DocSet {
        let mut matches: Option<DocSet> = None;

        for token in self.analyzer.analyze(query) {
            let docs: DocSet = match self.index.postings(&Term::new(&token.text)) {
                Some(list) => list.doc_ids().cloned().collect(),
                None => return DocSet::new(),
            };

            matches = Some(match matches {
                Some(acc) => acc.intersection(&docs).cloned().collect(),
                None => docs,
            });

            if matches.as_ref().is_some_and(DocSet::is_empty) {
                return DocSet::new();
            }
        }

        matches.unwrap_or_default()
    }

    /// Postings lookup for a single, already-normalized term.
    pub fn search_term(&self, term: &str) -> Option<&PostingList> {
        self.index.postings(&Term::new(term))
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
