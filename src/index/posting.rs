use serde::{Serialize, Deserialize};

use crate::core::types::DocId;

/// A single (term, document) entry. One posting per document: repeated
/// occurrences raise `term_freq` instead of adding duplicate entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub doc_id: DocId,
    pub term_freq: u32,
    pub positions: Vec<u32>, // Token positions within the document
}

/// Posting list for a term.
/// Note: Sorted by doc_id for efficient merging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostingList {
    pub postings: Vec<Posting>, // Sorted by doc_id
}

impl PostingList {
    pub fn new() -> Self {
        PostingList {
            postings: Vec::new(),
        }
    }

    /// Insert the posting at its sorted slot, replacing any existing posting
    /// for the same document.
    pub fn add_posting(&mut self, posting: Posting) {
        match self
            .postings
            .binary_search_by(|p| p.doc_id.cmp(&posting.doc_id))
        {
            Ok(pos) => {
                self.postings[pos] = posting;
            }
            Err(pos) => {
                self.postings.insert(pos, posting);
            }
        }
    }

    /// Fold another list into this one. Later postings win on equal doc_id.
    pub fn merge(&mut self, other: PostingList) {
        if self.postings.is_empty() {
            self.postings = other.postings;
            return;
        }

        for posting in other.postings {
            self.add_posting(posting);
        }
    }

    pub fn get(&self, doc_id: &DocId) -> Option<&Posting> {
        self.postings
            .binary_search_by(|p| p.doc_id.cmp(doc_id))
            .ok()
            .map(|pos| &self.postings[pos])
    }

    pub fn doc_ids(&self) -> impl Iterator<Item = &DocId> {
        self.postings.iter().map(|p| &p.doc_id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of documents containing the term.
    pub fn doc_freq(&self) -> u32 {
        self.postings.len() as u32
    }

    /// Total occurrences across all documents.
    pub fn total_freq(&self) -> u64 {
        self.postings.iter().map(|p| p.term_freq as u64).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posting(id: u64, term_freq: u32) -> Posting {
        Posting {
            doc_id: DocId::Number(id),
            term_freq,
            positions: Vec::new(),
        }
    }

    #[test]
    fn postings_stay_sorted_by_doc_id() {
        let mut list = PostingList::new();
        list.add_posting(posting(3, 1));
        list.add_posting(posting(1, 1));
        list.add_posting(posting(2, 1));

        let ids: Vec<&DocId> = list.doc_ids().collect();
        assert_eq!(
            ids,
            [&DocId::Number(1), &DocId::Number(2), &DocId::Number(3)]
        );
    }

    #[test]
    fn adding_same_document_replaces_the_posting() {
        let mut list = PostingList::new();
        list.add_posting(posting(1, 1));
        list.add_posting(posting(1, 4));

        assert_eq!(list.len(), 1);
        assert_eq!(list.get(&DocId::Number(1)).unwrap().term_freq, 4);
        assert_eq!(list.doc_freq(), 1);
        assert_eq!(list.total_freq(), 4);
    }

    #[test]
    fn merge_combines_disjoint_lists() {
        let mut left = PostingList::new();
        left.add_posting(posting(1, 1));
        left.add_posting(posting(4, 2));

        let mut right = PostingList::new();
        right.add_posting(posting(2, 1));
        right.add_posting(posting(3, 1));

        left.merge(right);
        let ids: Vec<u32> = left.postings.iter().map(|p| p.term_freq).collect();
        assert_eq!(left.len(), 4);
        assert_eq!(ids, [1, 1, 1, 2]);
    }
}
