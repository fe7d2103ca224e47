use serde::{Serialize, Deserialize};

use crate::index::inverted::InvertedIndex;

/// Index statistics for monitoring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexStats {
    pub doc_count: usize,
    pub term_count: usize,
    pub total_tokens: usize,
    pub avg_tokens_per_doc: f64,
}

impl IndexStats {
    pub fn from_index(index: &InvertedIndex) -> Self {
        let doc_count = index.doc_count();
        let total_tokens = index.total_tokens();
        let avg_tokens_per_doc = if doc_count == 0 {
            0.0
        } else {
            total_tokens as f64 / doc_count as f64
        };

        IndexStats {
            doc_count,
            term_count: index.term_count(),
            total_tokens,
            avg_tokens_per_doc,
        }
    }
}
