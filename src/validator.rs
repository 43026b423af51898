//! Dictionary lookup boundary
//!
//! A guess only consumes an attempt once a dictionary recognizes it. The
//! lookup is a black box behind [`WordValidator`]: the bundled
//! implementations are an HTTP dictionary API client and the embedded word
//! list, but anything that can answer "is this a word?" satisfies the seam.

use crate::core::Word;
use rustc_hash::FxHashSet;
use std::time::Duration;

/// Default dictionary lookup endpoint (word appended as a path segment)
pub const DEFAULT_DICT_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// How long a lookup may take before it resolves to `Unknown`
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(5);

/// What the dictionary said about a word
///
/// `Unknown` covers network failure and timeout: the caller must not treat it
/// as a rejection of the word, only as "could not check right now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Recognized,
    NotRecognized,
    Unknown,
}

/// The dictionary seam
pub trait WordValidator {
    /// Check a word; never blocks longer than the lookup timeout
    fn check(&self, word: &Word) -> Verdict;
}

/// Dictionary lookup over HTTP
///
/// Interprets the response by status only: 2xx means the word exists, 404
/// means it does not, and anything else (including transport errors and the
/// timeout) is `Unknown`. Exactly one lookup is ever in flight: the call
/// blocks, which is the input-disable gate during a check.
pub struct HttpValidator {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpValidator {
    /// Build a validator against a lookup endpoint
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(LOOKUP_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Build a validator against the default endpoint
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn default_endpoint() -> Result<Self, reqwest::Error> {
        Self::new(DEFAULT_DICT_URL)
    }
}

impl WordValidator for HttpValidator {
    fn check(&self, word: &Word) -> Verdict {
        let url = format!("{}/{}", self.base_url, word.text().to_ascii_lowercase());

        match self.client.get(&url).send() {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    Verdict::Recognized
                } else if status == reqwest::StatusCode::NOT_FOUND {
                    Verdict::NotRecognized
                } else {
                    Verdict::Unknown
                }
            }
            Err(_) => Verdict::Unknown,
        }
    }
}

/// Membership check against a fixed word list
///
/// Used for offline play (with the embedded list) and as a deterministic
/// validator in tests. Never answers `Unknown`.
pub struct BuiltinValidator {
    words: FxHashSet<String>,
}

impl BuiltinValidator {
    /// Build from any list of words; entries are uppercased for comparison
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }

    /// Build from the embedded word list
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words(crate::wordlists::WORDS.iter().copied())
    }

    /// Number of words in the list
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordValidator for BuiltinValidator {
    fn check(&self, word: &Word) -> Verdict {
        if self.words.contains(word.text()) {
            Verdict::Recognized
        } else {
            Verdict::NotRecognized
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_recognizes_listed_words() {
        let validator = BuiltinValidator::from_words(["crane", "SLATE"]);

        assert_eq!(
            validator.check(&Word::new("crane").unwrap()),
            Verdict::Recognized
        );
        assert_eq!(
            validator.check(&Word::new("slate").unwrap()),
            Verdict::Recognized
        );
        assert_eq!(
            validator.check(&Word::new("zzyzx").unwrap()),
            Verdict::NotRecognized
        );
    }

    #[test]
    fn builtin_embedded_list_is_usable() {
        let validator = BuiltinValidator::embedded();
        assert!(!validator.is_empty());
        assert_eq!(
            validator.check(&Word::new("abbey").unwrap()),
            Verdict::Recognized
        );
    }

    #[test]
    fn http_validator_builds_against_custom_endpoint() {
        let validator = HttpValidator::new("http://localhost:9/dict/").unwrap();
        // Trailing slash is normalized away
        assert_eq!(validator.base_url, "http://localhost:9/dict");
    }

    #[test]
    fn unreachable_endpoint_is_unknown_not_rejected() {
        // Port 9 (discard) refuses connections immediately; the point is that
        // a transport failure must never read as "not a word".
        let validator = HttpValidator::new("http://127.0.0.1:9").unwrap();
        assert_eq!(
            validator.check(&Word::new("crane").unwrap()),
            Verdict::Unknown
        );
    }
}
