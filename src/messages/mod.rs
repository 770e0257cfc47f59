//! Localized UI strings
//!
//! The catalog is read-only after construction. Lookups go through
//! [`get_messages`] each time they are needed.

use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_LANGUAGE: &str = "en";

/// Message key -> display string for one language.
pub type Messages = BTreeMap<String, String>;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    languages: BTreeMap<String, Messages>,
}

static BUILTIN: Lazy<MessageCatalog> = Lazy::new(|| {
    MessageCatalog::from_json(include_str!("messages.json")).unwrap_or_else(|e| {
        tracing::error!("built-in message catalog: {e:#}");
        MessageCatalog::default()
    })
});

impl MessageCatalog {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn builtin() -> &'static MessageCatalog {
        &BUILTIN
    }

    /// Language codes in sorted order.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    /// The language after `current`, wrapping around. Unknown codes restart
    /// at the first language.
    pub fn next_language(&self, current: &str) -> Option<&str> {
        let langs: Vec<&str> = self.languages().collect();
        let next = match langs.iter().position(|l| *l == current) {
            Some(i) => (i + 1) % langs.len(),
            None => 0,
        };
        langs.get(next).copied()
    }
}

pub fn get_messages<'a>(catalog: &'a MessageCatalog, language: &str) -> Option<&'a Messages> {
    catalog.languages.get(language)
}

/// Messages for `language`, or the default language when it is unknown.
pub fn messages_or_default<'a>(catalog: &'a MessageCatalog, language: &str) -> Option<&'a Messages> {
    get_messages(catalog, language).or_else(|| get_messages(catalog, DEFAULT_LANGUAGE))
}

/// Look up `key`, falling back to the key itself.
pub fn text<'a>(messages: Option<&'a Messages>, key: &'a str) -> &'a str {
    messages
        .and_then(|m| m.get(key))
        .map(String::as_str)
        .unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_languages_share_keys() {
        let catalog = MessageCatalog::builtin();
        let en = get_messages(catalog, "en").expect("en present");
        for lang in catalog.languages() {
            let m = get_messages(catalog, lang).unwrap();
            let keys: Vec<&String> = m.keys().collect();
            assert_eq!(keys, en.keys().collect::<Vec<_>>(), "keys of {lang}");
        }
    }

    #[test]
    fn test_unknown_language() {
        let catalog = MessageCatalog::builtin();
        assert!(get_messages(catalog, "xx").is_none());
        let fallback = messages_or_default(catalog, "xx");
        assert_eq!(text(fallback, "shuffle"), "Shuffle");
    }

    #[test]
    fn test_text_falls_back_to_key() {
        let catalog = MessageCatalog::from_json(r#"{"en":{"a":"A"}}"#).unwrap();
        let en = get_messages(&catalog, "en");
        assert_eq!(text(en, "a"), "A");
        assert_eq!(text(en, "b"), "b");
        assert_eq!(text(None, "c"), "c");
    }

    #[test]
    fn test_next_language_wraps() {
        let catalog = MessageCatalog::from_json(r#"{"de":{},"en":{},"fr":{}}"#).unwrap();
        assert_eq!(catalog.next_language("de"), Some("en"));
        assert_eq!(catalog.next_language("fr"), Some("de"));
        assert_eq!(catalog.next_language("zz"), Some("de"));
        assert_eq!(MessageCatalog::default().next_language("en"), None);
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        assert!(MessageCatalog::from_json(r#"{"en": "nope"}"#).is_err());
    }
}
