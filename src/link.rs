//! Shareable game links
//!
//! The canonical wire format is a URL fragment:
//!
//! ```text
//! https://host/path#<session_id>.<base64url_nopad(secret)>
//! ```
//!
//! The session id is the persistence key, so two games with the same secret
//! never collide. The base64 layer only keeps the secret out of a casual
//! glance at the URL; anyone who decodes it sees the word, which is the
//! intended behavior of a link you send to a friend.
//!
//! The earliest variant of the game used a plain `?word=SECRET` query
//! parameter. Those links still parse, with a session id derived from the
//! secret itself (so replaying the same word reuses one saved game — the
//! collision the canonical format exists to avoid).

use crate::core::{Word, WordError};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use rand::Rng;
use rand::distr::Alphanumeric;
use thiserror::Error;
use url::Url;

/// Length of generated session ids
const SESSION_ID_LEN: usize = 8;

/// A link could not be turned into a playable game
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LinkError {
    #[error("link carries no game: expected '#<id>.<encoded word>' or '?word=WORD'")]
    MissingGame,
    #[error("link fragment has an empty session id")]
    EmptySessionId,
    #[error("encoded secret is not valid base64")]
    BadEncoding,
    #[error("encoded secret is not a playable word: {0}")]
    BadWord(#[from] WordError),
}

/// A game identity: session id plus secret, as carried by a shareable link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameLink {
    session_id: String,
    secret: Word,
}

impl GameLink {
    /// Create a link for a secret with a fresh random session id
    #[must_use]
    pub fn generate(secret: Word) -> Self {
        let session_id: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(SESSION_ID_LEN)
            .map(char::from)
            .collect();

        Self { session_id, secret }
    }

    /// Create a link with an explicit session id
    #[must_use]
    pub fn with_id(session_id: impl Into<String>, secret: Word) -> Self {
        Self {
            session_id: session_id.into(),
            secret,
        }
    }

    /// The session id: the persistence key for this game
    #[must_use]
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// The secret word
    #[must_use]
    pub fn secret(&self) -> &Word {
        &self.secret
    }

    /// The canonical fragment, without the leading `#`
    ///
    /// # Examples
    /// ```
    /// use wordle_link::core::Word;
    /// use wordle_link::link::GameLink;
    ///
    /// let link = GameLink::with_id("abc123", Word::new("crane").unwrap());
    /// assert_eq!(link.fragment(), "abc123.Q1JBTkU");
    /// ```
    #[must_use]
    pub fn fragment(&self) -> String {
        format!(
            "{}.{}",
            self.session_id,
            URL_SAFE_NO_PAD.encode(self.secret.text())
        )
    }

    /// Attach the fragment to a base URL, producing the full shareable link
    #[must_use]
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_fragment(Some(&self.fragment()));
        url
    }

    /// Parse a shareable link
    ///
    /// Accepts a full URL, a bare fragment (with or without the leading `#`),
    /// or the legacy `?word=SECRET` query form.
    ///
    /// # Errors
    /// Returns [`LinkError`] when no game can be extracted from the input.
    pub fn parse(input: &str) -> Result<Self, LinkError> {
        let input = input.trim();

        if let Ok(url) = Url::parse(input) {
            if let Some(fragment) = url.fragment()
                && !fragment.is_empty()
            {
                return Self::parse_fragment(fragment);
            }

            if let Some((_, word)) = url.query_pairs().find(|(key, _)| key == "word") {
                return Self::parse_legacy_word(&word);
            }

            return Err(LinkError::MissingGame);
        }

        // Not an absolute URL: treat the input itself as the fragment
        let fragment = input.strip_prefix('#').unwrap_or(input);
        if fragment.is_empty() {
            return Err(LinkError::MissingGame);
        }
        Self::parse_fragment(fragment)
    }

    fn parse_fragment(fragment: &str) -> Result<Self, LinkError> {
        let (session_id, payload) = fragment.split_once('.').ok_or(LinkError::MissingGame)?;

        if session_id.is_empty() {
            return Err(LinkError::EmptySessionId);
        }

        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|_| LinkError::BadEncoding)?;
        let text = String::from_utf8(bytes).map_err(|_| LinkError::BadEncoding)?;
        let secret = Word::new(text)?;

        Ok(Self::with_id(session_id, secret))
    }

    /// Legacy `?word=` link: the session id is the secret itself
    fn parse_legacy_word(word: &str) -> Result<Self, LinkError> {
        let secret = Word::new(word)?;
        let session_id = secret.text().to_ascii_lowercase();
        Ok(Self { session_id, secret })
    }
}
