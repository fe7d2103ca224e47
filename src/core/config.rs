use std::collections::HashSet;

use crate::analysis::filters::stopword::ENGLISH_STOP_WORDS;
use crate::core::error::{Error, ErrorKind, Result};

/// Index configuration. The stop-word set applies to both indexing and
/// querying, since documents and queries share one analyzer.
#[derive(Debug, Clone)]
pub struct Config {
    pub stop_words: HashSet<String>,
    pub lowercase: bool,
    pub max_token_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            stop_words: ENGLISH_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            lowercase: true,
            max_token_length: 255,
        }
    }
}

impl Config {
    /// Default configuration with a caller-supplied stop-word set.
    pub fn with_stop_words<I, S>(stop_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Config {
            stop_words: stop_words.into_iter().map(Into::into).collect(),
            ..Config::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_token_length == 0 {
            return Err(Error::new(
                ErrorKind::InvalidArgument,
                "max_token_length must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().stop_words.contains("the"));
    }

    #[test]
    fn zero_token_length_is_rejected() {
        let config = Config {
            max_token_length: 0,
            ..Config::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidArgument);
    }
}
