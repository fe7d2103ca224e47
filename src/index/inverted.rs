use std::collections::HashMap;

use serde::{Serialize, Deserialize};

use crate::analysis::token::Token;
use crate::core::types::DocId;
use crate::index::posting::{Posting, PostingList};

/// Index key: normalized token text.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Term(String);

impl Term {
    pub fn new(text: &str) -> Self {
        Term(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Boolean inverted index: term → documents containing it.
///
/// Built in one pass by `IndexBuilder` (or its parallel counterpart) and
/// read-only afterwards; the fields are private and no public method
/// mutates, so a built index can be shared across query threads without
/// synchronization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvertedIndex {
    postings: HashMap<Term, PostingList>,
    doc_count: usize,
    total_tokens: usize,
}

impl InvertedIndex {
    pub(crate) fn new() -> Self {
        InvertedIndex {
            postings: HashMap::new(),
            doc_count: 0,
            total_tokens: 0,
        }
    }

    pub(crate) fn insert_document(&mut self, doc_id: DocId, tokens: &[Token]) {
        let mut term_positions: HashMap<Term, Vec<u32>> = HashMap::new();

        // Group token occurrences by term; positions arrive in token order,
        // so each group stays sorted.
        for token in tokens {
            term_positions
                .entry(Term::new(&token.text))
                .or_default()
                .push(token.position);
        }

        for (term, positions) in term_positions {
            let posting = Posting {
                doc_id: doc_id.clone(),
                term_freq: positions.len() as u32,
                positions,
            };

            self.postings.entry(term).or_default().add_posting(posting);
        }

        self.doc_count += 1;
        self.total_tokens += tokens.len();
    }

    pub(crate) fn merge(&mut self, other: InvertedIndex) {
        for (term, list) in other.postings {
            self.postings.entry(term).or_default().merge(list);
        }
        self.doc_count += other.doc_count;
        self.total_tokens += other.total_tokens;
    }

    pub fn postings(&self, term: &Term) -> Option<&PostingList> {
        self.postings.get(term)
    }

    pub fn contains_term(&self, term: &Term) -> bool {
        self.postings.contains_key(term)
    }

    /// Number of documents containing the term; 0 for absent terms.
    pub fn doc_freq(&self, term: &Term) -> u32 {
        self.postings.get(term).map_or(0, PostingList::doc_freq)
    }

    pub fn terms(&self) -> impl Iterator<Item = &Term> {
        self.postings.keys()
    }

    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn total_tokens(&self) -> usize {
        self.total_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}
