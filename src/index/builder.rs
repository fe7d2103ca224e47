use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::Analyzer;
use crate::core::config::Config;
use crate::core::types::{DocId, Document};
use crate::index::inverted::InvertedIndex;

/// Builds an `InvertedIndex` from a fixed document collection.
///
/// Documents are staged in a map keyed by id, so re-adding an id replaces
/// the earlier text rather than indexing both. `build` consumes the builder
/// and produces the index in one pass; the caller owns the result and no
/// state survives outside it.
pub struct IndexBuilder {
    analyzer: Arc<Analyzer>,
    documents: HashMap<DocId, String>,
}

impl IndexBuilder {
    pub fn new(analyzer: Arc<Analyzer>) -> Self {
        IndexBuilder {
            analyzer,
            documents: HashMap::new(),
        }
    }

    pub fn with_config(config: &Config) -> Self {
        IndexBuilder::new(Arc::new(Analyzer::from_config(config)))
    }

    pub fn add(&mut self, document: Document) {
        self.documents.insert(document.id, document.text);
    }

    pub fn add_document(&mut self, id: impl Into<DocId>, text: impl Into<String>) {
        self.documents.insert(id.into(), text.into());
    }

    pub fn add_documents<I>(&mut self, documents: I)
    where
        I: IntoIterator,
        I::Item: Into<Document>,
    {
        for document in documents {
            self.add(document.into());
        }
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn build(self) -> InvertedIndex {
        let mut index = InvertedIndex::new();

        for (id, text) in &self.documents {
            let tokens = self.analyzer.analyze(text);
            index.insert_document(id.clone(), &tokens);
        }

        debug!(
            "built index: {} documents, {} terms, {} tokens",
            index.doc_count(),
            index.term_count(),
            index.total_tokens()
        );

        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DocId;
    use crate::index::inverted::Term;

    #[test]
    fn staging_overwrites_duplicate_ids() {
        let mut builder = IndexBuilder::new(Arc::new(Analyzer::standard()));
        builder.add_document(1u64, "old obsolete words");
        builder.add_document(1u64, "replacement");

        let index = builder.build();
        assert_eq!(index.doc_count(), 1);
        assert!(!index.contains_term(&Term::new("obsolete")));
        assert!(index.contains_term(&Term::new("replacement")));
    }

    #[test]
    fn empty_collection_builds_empty_index() {
        let builder = IndexBuilder::new(Arc::new(Analyzer::standard()));
        let index = builder.build();
        assert!(index.is_empty());
        assert_eq!(index.doc_count(), 0);
    }

    #[test]
    fn accepts_both_numeric_and_text_ids() {
        let mut builder = IndexBuilder::new(Arc::new(Analyzer::standard()));
        builder.add_document(7u64, "numeric");
        builder.add_document("notes", "textual");

        let index = builder.build();
        let numeric = index.postings(&Term::new("numeric")).unwrap();
        assert_eq!(numeric.doc_ids().next(), Some(&DocId::Number(7)));
        let textual = index.postings(&Term::new("textual")).unwrap();
        assert_eq!(textual.doc_ids().next(), Some(&DocId::Text("notes".to_string())));
    }
}
