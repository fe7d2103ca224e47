use serde::{Serialize, Deserialize};
use std::collections::BTreeSet;
use std::fmt;

/// Document identifier. Collections key documents either by number or by name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DocId {
    Number(u64),
    Text(String),
}

impl From<u64> for DocId {
    fn from(id: u64) -> Self {
        DocId::Number(id)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        DocId::Text(id.to_string())
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        DocId::Text(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DocId::Number(n) => write!(f, "{}", n),
            DocId::Text(s) => f.write_str(s),
        }
    }
}

/// A raw document: unique identifier plus unprocessed text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocId,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<DocId>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl<D: Into<DocId>, T: Into<String>> From<(D, T)> for Document {
    fn from((id, text): (D, T)) -> Self {
        Document::new(id, text)
    }
}

/// Result of a query: deduplicated document identifiers.
pub type DocSet = BTreeSet<DocId>;
