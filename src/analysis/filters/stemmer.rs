use rust_stemmers::{Algorithm, Stemmer};

use crate::analysis::filter::TokenFilter;
use crate::analysis::token::Token;

/// Snowball stemming filter. Not part of the standard pipeline: stemming
/// folds distinct surface forms onto one term, which changes match behavior.
pub struct StemmerFilter {
    stemmer: Stemmer,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter {
            stemmer: Stemmer::create(algorithm),
        }
    }
}

impl TokenFilter for StemmerFilter {
    fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens
            .into_iter()
            .map(|mut token| {
                token.text = self.stemmer.stem(&token.text).into_owned();
                token
            })
            .collect()
    }

    fn name(&self) -> &str {
        "stemmer"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_english_plurals_and_gerunds() {
        let filter = StemmerFilter::new(Algorithm::English);
        let tokens = vec![
            Token::new("running".to_string(), 0, 0),
            Token::new("documents".to_string(), 1, 8),
        ];
        let stemmed = filter.filter(tokens);
        assert_eq!(stemmed[0].text, "run");
        assert_eq!(stemmed[1].text, "document");
    }
}
