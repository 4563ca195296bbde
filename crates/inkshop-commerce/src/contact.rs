//! Contact form validation.
//!
//! Runs entirely in the page: a honeypot check, HTML escaping, an email
//! shape check and a per-browser rate limit kept in the durable store.

use std::sync::LazyLock;

use inkshop_cache::{Cache, KvStore};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::ShopConfig;

/// Store key holding the time of the last accepted submission (ms since epoch).
pub const LAST_SUBMIT_KEY: &str = "lastFormSubmit";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Raw form fields as typed by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Selected service; a fixed option value, not free text.
    pub service: String,
    pub message: String,
    /// Hidden field. Humans leave it empty.
    pub honeypot: String,
}

/// Escaped and trimmed form fields, safe to echo back into markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SanitizedContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

/// Why a submission was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactRejection {
    InvalidEmail,
    RateLimited { retry_after_secs: u64 },
}

impl ContactRejection {
    /// User-facing text for this rejection.
    pub fn message<'a>(&self, config: &'a ShopConfig) -> &'a str {
        match self {
            ContactRejection::InvalidEmail => &config.messages.invalid_email,
            ContactRejection::RateLimited { .. } => &config.messages.rate_limited,
        }
    }
}

/// Result of [`ContactValidator::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Honeypot was filled in. Dropped without telling the sender.
    Spam,
    Rejected(ContactRejection),
    Accepted(SanitizedContact),
}

/// Validates contact form submissions and enforces the rate limit.
pub struct ContactValidator<S> {
    cache: Cache<S>,
    rate_limit_ms: u64,
}

impl<S: KvStore> ContactValidator<S> {
    pub fn new(store: S, config: &ShopConfig) -> Self {
        Self {
            cache: Cache::new(store),
            rate_limit_ms: config.contact_rate_limit_ms(),
        }
    }

    /// Validate a submission made at `now_ms` (milliseconds since epoch).
    ///
    /// On acceptance the submission time is recorded, starting a new
    /// rate-limit window.
    pub fn submit(&self, form: &ContactForm, now_ms: u64) -> ContactOutcome {
        if !form.honeypot.is_empty() {
            tracing::warn!("contact form honeypot filled, dropping submission");
            return ContactOutcome::Spam;
        }

        let contact = SanitizedContact {
            name: sanitize(&form.name),
            email: sanitize(&form.email),
            phone: sanitize(&form.phone),
            service: form.service.clone(),
            message: sanitize(&form.message),
        };

        if !is_valid_email(&contact.email) {
            return ContactOutcome::Rejected(ContactRejection::InvalidEmail);
        }

        if let Some(last) = self.last_submit() {
            let elapsed = now_ms.saturating_sub(last);
            if elapsed < self.rate_limit_ms {
                let retry_after_secs = (self.rate_limit_ms - elapsed).div_ceil(1000);
                tracing::debug!(retry_after_secs, "contact form rate limited");
                return ContactOutcome::Rejected(ContactRejection::RateLimited {
                    retry_after_secs,
                });
            }
        }

        if let Err(e) = self.cache.set(LAST_SUBMIT_KEY, &now_ms) {
            tracing::warn!(error = %e, "failed to record contact submission time");
        }
        ContactOutcome::Accepted(contact)
    }

    fn last_submit(&self) -> Option<u64> {
        match self.cache.get::<u64>(LAST_SUBMIT_KEY) {
            Ok(last) => last,
            Err(e) => {
                tracing::warn!(error = %e, "unreadable contact submission time, ignoring");
                None
            }
        }
    }
}

/// Escape `&`, `<` and `>` as HTML text, then trim surrounding whitespace.
/// Quotes pass through unchanged.
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out.trim().to_string()
}

/// Loose email shape check: `local@domain.tld`, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkshop_cache::{CacheError, MemoryStore};

    /// Every write fails.
    struct ReadOnlyStore;

    impl KvStore for ReadOnlyStore {
        fn get_raw(&self, _key: &str) -> Result<Option<String>, CacheError> {
            Ok(None)
        }

        fn set_raw(&self, _key: &str, _value: &str) -> Result<(), CacheError> {
            Err(CacheError::StoreError("quota exceeded".to_string()))
        }

        fn delete(&self, _key: &str) -> Result<(), CacheError> {
            Ok(())
        }
    }

    fn form(email: &str) -> ContactForm {
        ContactForm {
            name: "Mila".to_string(),
            email: email.to_string(),
            phone: "060 123 4567".to_string(),
            service: "tattoo".to_string(),
            message: "Koliko košta rukav?".to_string(),
            honeypot: String::new(),
        }
    }

    fn validator(store: &MemoryStore) -> ContactValidator<MemoryStore> {
        ContactValidator::new(store.clone(), &ShopConfig::default())
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("mila@example.com"));
        assert!(is_valid_email("a.b+c@studio.co.rs"));
        assert!(!is_valid_email("mila@example"));
        assert!(!is_valid_email("mila example@x.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_sanitize_escapes_and_trims() {
        assert_eq!(
            sanitize("  <b>\"hi\" & 'bye'</b>\n"),
            "&lt;b&gt;\"hi\" &amp; 'bye'&lt;/b&gt;"
        );
    }

    #[test]
    fn test_apostrophe_in_email_survives() {
        let store = MemoryStore::new();
        match validator(&store).submit(&form("o'brien@x.rs"), 0) {
            ContactOutcome::Accepted(contact) => assert_eq!(contact.email, "o'brien@x.rs"),
            other => panic!("expected acceptance, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_valid_submission() {
        let store = MemoryStore::new();
        let outcome = validator(&store).submit(&form(" mila@example.com "), 1_000_000);

        match outcome {
            ContactOutcome::Accepted(contact) => {
                assert_eq!(contact.email, "mila@example.com");
                assert_eq!(contact.service, "tattoo");
            }
            other => panic!("expected acceptance, got {other:?}"),
        }
        assert_eq!(
            store.get_raw(LAST_SUBMIT_KEY).unwrap().as_deref(),
            Some("1000000")
        );
    }

    #[test]
    fn test_honeypot_is_spam() {
        let store = MemoryStore::new();
        let mut spam = form("bot@example.com");
        spam.honeypot = "http://spam".to_string();

        assert_eq!(validator(&store).submit(&spam, 0), ContactOutcome::Spam);
        assert!(store.is_empty());
    }

    #[test]
    fn test_invalid_email_rejected() {
        let store = MemoryStore::new();
        let outcome = validator(&store).submit(&form("not-an-email"), 0);

        assert_eq!(
            outcome,
            ContactOutcome::Rejected(ContactRejection::InvalidEmail)
        );
        assert_eq!(
            ContactRejection::InvalidEmail.message(&ShopConfig::default()),
            "Unesite validnu email adresu"
        );
        assert!(store.is_empty());
    }

    #[test]
    fn test_rate_limit_window() {
        let store = MemoryStore::new();
        let validator = validator(&store);

        assert!(matches!(
            validator.submit(&form("mila@example.com"), 100_000),
            ContactOutcome::Accepted(_)
        ));
        assert_eq!(
            validator.submit(&form("mila@example.com"), 130_500),
            ContactOutcome::Rejected(ContactRejection::RateLimited { retry_after_secs: 30 })
        );
        assert!(matches!(
            validator.submit(&form("mila@example.com"), 160_000),
            ContactOutcome::Accepted(_)
        ));
    }

    #[test]
    fn test_unreadable_timestamp_is_ignored() {
        let store = MemoryStore::new();
        store.set_raw(LAST_SUBMIT_KEY, "yesterday").unwrap();

        assert!(matches!(
            validator(&store).submit(&form("mila@example.com"), 5),
            ContactOutcome::Accepted(_)
        ));
    }

    #[test]
    fn test_unrecorded_submission_is_still_accepted() {
        let validator = ContactValidator::new(ReadOnlyStore, &ShopConfig::default());

        assert!(matches!(
            validator.submit(&form("mila@example.com"), 100_000),
            ContactOutcome::Accepted(_)
        ));
        // Nothing was recorded, so no window is open.
        assert!(matches!(
            validator.submit(&form("mila@example.com"), 100_001),
            ContactOutcome::Accepted(_)
        ));
    }
}
