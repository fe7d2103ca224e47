use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use rust_stemmers::Algorithm;

use crate::analysis::filter::TokenFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::token::Token;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};
use crate::core::config::Config;
use crate::core::error::{Error, ErrorKind, Result};

/// Text analysis pipeline: one tokenizer followed by a filter chain.
/// Documents and queries must go through the same pipeline so their
/// normalization agrees.
pub struct Analyzer {
    pub name: String,
    pub tokenizer: Box<dyn Tokenizer>,
    pub filters: Vec<Box<dyn TokenFilter>>,
}

impl Analyzer {
    pub fn new(name: impl Into<String>, tokenizer: Box<dyn Tokenizer>) -> Self {
        Analyzer {
            name: name.into(),
            tokenizer,
            filters: Vec::new(),
        }
    }

    pub fn add_filter(mut self, filter: Box<dyn TokenFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn analyze(&self, text: &str) -> Vec<Token> {
        let mut tokens = self.tokenizer.tokenize(text);

        for filter in &self.filters {
            tokens = filter.filter(tokens);
        }

        tokens
    }

    /// Unicode segmentation, lowercasing and English stop-word removal.
    pub fn standard() -> Self {
        Analyzer::new("standard", Box::new(StandardTokenizer::default()))
            .add_filter(Box::new(StopWordFilter::english()))
    }

    /// Standard pipeline plus Snowball stemming.
    pub fn english() -> Self {
        Analyzer::new("english", Box::new(StandardTokenizer::default()))
            .add_filter(Box::new(StopWordFilter::english()))
            .add_filter(Box::new(StemmerFilter::new(Algorithm::English)))
    }

    /// Standard pipeline with the tokenizer and stop-word set from `config`.
    pub fn from_config(config: &Config) -> Self {
        let tokenizer = StandardTokenizer {
            lowercase: config.lowercase,
            max_token_length: config.max_token_length,
        };

        Analyzer::new("standard", Box::new(tokenizer))
            .add_filter(Box::new(StopWordFilter::new(config.stop_words.iter().cloned())))
    }
}

/// Registry for managing named analyzers.
pub struct AnalyzerRegistry {
    analyzers: RwLock<HashMap<String, Arc<Analyzer>>>,
}

impl AnalyzerRegistry {
    pub fn new() -> Self {
        let registry = AnalyzerRegistry {
            analyzers: RwLock::new(HashMap::new()),
        };

        registry.register("standard", Analyzer::standard());
        registry.register("english", Analyzer::english());
        registry
    }

    pub fn register(&self, name: &str, analyzer: Analyzer) {
        self.analyzers
            .write()
            .insert(name.to_string(), Arc::new(analyzer));
    }

    pub fn get(&self, name: &str) -> Option<Arc<Analyzer>> {
        self.analyzers.read().get(name).cloned()
    }

    pub fn analyze(&self, analyzer_name: &str, text: &str) -> Result<Vec<Token>> {
        self.get(analyzer_name)
            .map(|analyzer| analyzer.analyze(text))
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::NotFound,
                    format!("Analyzer '{}' not found", analyzer_name),
                )
            })
    }
}

impl Default for AnalyzerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::filters::lowercase::LowercaseFilter;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn standard_pipeline_lowercases_and_drops_stop_words() {
        let analyzer = Analyzer::standard();
        let tokens = analyzer.analyze("The Quick Brown Fox");
        assert_eq!(texts(&tokens), ["quick", "brown", "fox"]);
    }

    #[test]
    fn lowercase_filter_matches_lowercasing_tokenizer() {
        let preserving = StandardTokenizer {
            lowercase: false,
            ..StandardTokenizer::default()
        };
        let filtered = Analyzer::new("cased", Box::new(preserving))
            .add_filter(Box::new(LowercaseFilter));

        let direct = Analyzer::new("plain", Box::new(StandardTokenizer::default()));

        let input = "Mixed CASE Text";
        assert_eq!(texts(&filtered.analyze(input)), texts(&direct.analyze(input)));
    }

    #[test]
    fn analysis_is_idempotent_on_normalized_text() {
        let analyzer = Analyzer::standard();
        let first = analyzer.analyze("The first document contains text");
        let rejoined = first
            .iter()
            .map(|t| t.text.clone())
            .collect::<Vec<_>>()
            .join(" ");
        let second = analyzer.analyze(&rejoined);
        assert_eq!(texts(&first), texts(&second));
    }

    #[test]
    fn registry_resolves_defaults_and_rejects_unknown_names() {
        let registry = AnalyzerRegistry::new();
        assert!(registry.get("standard").is_some());

        let tokens = registry.analyze("english", "running dogs").unwrap();
        assert_eq!(texts(&tokens), ["run", "dog"]);

        let err = registry.analyze("missing", "text").unwrap_err();
        assert_eq!(err.kind, ErrorKind::NotFound);
    }
}
