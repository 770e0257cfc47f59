use crate::options::KeyValueStore;
use anyhow::Context;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

pub struct Storage {
    conn: Connection,
}

impl Storage {
    pub fn open(path: &Path) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir {}", parent.display()))?;
        }

        let conn = Connection::open(path).with_context(|| format!("open {}", path.display()))?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    /// Nothing survives the process; used for `--ephemeral` runs.
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let conn = Connection::open_in_memory().context("open in-memory db")?;
        let s = Self { conn };
        s.init_schema()?;
        Ok(s)
    }

    fn init_schema(&self) -> anyhow::Result<()> {
        self.conn
            .execute_batch(
                r#"
CREATE TABLE IF NOT EXISTS kv (
  key TEXT PRIMARY KEY,
  value TEXT NOT NULL
);
"#,
            )
            .context("init schema")?;
        Ok(())
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.conn
            .query_row("SELECT value FROM kv WHERE key=?1", params![key], |row| row.get(0))
            .optional()
            .with_context(|| format!("read key {key}"))
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.conn
            .execute(
                r#"
INSERT INTO kv(key, value)
VALUES(?1, ?2)
ON CONFLICT(key) DO UPDATE SET
  value=excluded.value
"#,
                params![key, value],
            )
            .with_context(|| format!("write key {key}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_missing_key() {
        let s = Storage::open_in_memory().unwrap();
        assert_eq!(s.get("nope").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let s = Storage::open_in_memory().unwrap();
        s.set("k", "one").unwrap();
        s.set("k", "two").unwrap();
        assert_eq!(s.get("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("palette.sqlite3");
        {
            let s = Storage::open(&path).unwrap();
            s.set("options", r#"{"colorMode":"dark","language":"en"}"#).unwrap();
        }
        let s = Storage::open(&path).unwrap();
        assert_eq!(
            s.get("options").unwrap().as_deref(),
            Some(r#"{"colorMode":"dark","language":"en"}"#)
        );
    }
}
