//! User options, persisted as a JSON blob through a key-value store

use serde::{Deserialize, Serialize};

/// Key the options blob is stored under.
pub const OPTIONS_KEY: &str = "options";

/// Minimal key-value persistence provider.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Light,
    Dark,
}

impl ColorMode {
    pub fn toggle(self) -> Self {
        match self {
            ColorMode::Light => ColorMode::Dark,
            ColorMode::Dark => ColorMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ColorMode::Light => "light",
            ColorMode::Dark => "dark",
        }
    }
}

/// Fields missing from a stored blob take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    pub color_mode: ColorMode,
    pub language: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            color_mode: ColorMode::Light,
            language: "en".to_string(),
        }
    }
}

impl Options {
    pub fn dark_mode(&self) -> bool {
        self.color_mode == ColorMode::Dark
    }
}

/// Read options from the store. Missing or unreadable data yields defaults.
pub fn load_options(store: &dyn KeyValueStore) -> Options {
    let raw = match store.get(OPTIONS_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Options::default(),
        Err(e) => {
            tracing::warn!("read stored options: {e:#}");
            return Options::default();
        }
    };

    match serde_json::from_str::<Options>(&raw) {
        Ok(opts) => opts,
        Err(e) => {
            tracing::warn!("stored options are malformed, using defaults: {e}");
            Options::default()
        }
    }
}

pub fn save_options(store: &dyn KeyValueStore, options: &Options) -> anyhow::Result<()> {
    let raw = serde_json::to_string(options)?;
    store.set(OPTIONS_KEY, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Storage;

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            anyhow::bail!("disk on fire")
        }

        fn set(&self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("disk on fire")
        }
    }

    #[test]
    fn test_missing_options_fall_back_to_defaults() {
        let store = Storage::open_in_memory().unwrap();
        assert_eq!(load_options(&store), Options::default());
    }

    #[test]
    fn test_malformed_options_fall_back_to_defaults() {
        let store = Storage::open_in_memory().unwrap();
        for raw in ["not json", "null", r#"{"colorMode":"sepia","language":"en"}"#, "{}"] {
            store.set(OPTIONS_KEY, raw).unwrap();
            assert_eq!(load_options(&store), Options::default(), "{raw}");
        }
    }

    #[test]
    fn test_partial_options_keep_present_fields() {
        let store = Storage::open_in_memory().unwrap();
        store.set(OPTIONS_KEY, r#"{"colorMode":"dark"}"#).unwrap();
        let opts = load_options(&store);
        assert!(opts.dark_mode());
        assert_eq!(opts.language, "en");

        store.set(OPTIONS_KEY, r#"{"language":"de"}"#).unwrap();
        let opts = load_options(&store);
        assert_eq!(opts.color_mode, ColorMode::Light);
        assert_eq!(opts.language, "de");
    }

    #[test]
    fn test_store_errors_fall_back_to_defaults() {
        assert_eq!(load_options(&BrokenStore), Options::default());
        assert!(save_options(&BrokenStore, &Options::default()).is_err());
    }

    #[test]
    fn test_save_uses_camel_case_json() {
        let store = Storage::open_in_memory().unwrap();
        let opts = Options {
            color_mode: ColorMode::Dark,
            language: "de".to_string(),
        };
        save_options(&store, &opts).unwrap();

        let raw = store.get(OPTIONS_KEY).unwrap().unwrap();
        let v: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(v["colorMode"], "dark");
        assert_eq!(v["language"], "de");

        let loaded = load_options(&store);
        assert_eq!(loaded, opts);
        assert!(loaded.dark_mode());
    }
}
