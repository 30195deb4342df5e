//! Progress persistence behind a tiny key-value capability. The session
//! owns a [`ProgressStore`] over anything implementing [`KeyValue`]; the web
//! crate hands it browser localStorage, tests hand it a [`MemoryStore`].

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Key holding the resume position as a decimal string.
pub const CURSOR_KEY: &str = "linmo.sutra.index";
/// Key holding the serialized [`Profile`] blob.
pub const PROFILE_KEY: &str = "linmo.profile";

/// String key-value storage. Writes are fire-and-forget; a backend that
/// cannot persist (private browsing, quota) should swallow the write and
/// log rather than fail the session.
pub trait KeyValue {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory [`KeyValue`] backend for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValue for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Reward ledger shared with the rest of the app. Field names match the
/// stored JSON, which other features read and spend from.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "totalXP", default)]
    pub total_xp: u64,
    #[serde(rename = "spentXP", default)]
    pub spent_xp: u64,
}

/// Cursor and reward persistence over a [`KeyValue`] backend.
#[derive(Debug)]
pub struct ProgressStore<S: KeyValue> {
    store: S,
}

impl<S: KeyValue> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saved resume position, or 0 when the slot is missing, unparsable, or
    /// out of range for a corpus of `corpus_len` characters.
    pub fn load_cursor(&self, corpus_len: usize) -> usize {
        self.store
            .get(CURSOR_KEY)
            .and_then(|raw| raw.parse::<usize>().ok())
            .filter(|&index| index < corpus_len)
            .unwrap_or(0)
    }

    pub fn save_cursor(&mut self, index: usize) {
        self.store.set(CURSOR_KEY, &index.to_string());
    }

    /// Adds `amount` to the earned total. A missing or corrupt profile blob
    /// is replaced with a fresh one rather than blocking the award.
    pub fn award_credit(&mut self, amount: u64) {
        let mut profile = match self.store.get(PROFILE_KEY) {
            Some(raw) => serde_json::from_str::<Profile>(&raw).unwrap_or_else(|err| {
                log::warn!("resetting unreadable profile blob: {err}");
                Profile::default()
            }),
            None => Profile::default(),
        };
        profile.total_xp = profile.total_xp.saturating_add(amount);
        match serde_json::to_string(&profile) {
            Ok(raw) => self.store.set(PROFILE_KEY, &raw),
            Err(err) => log::warn!("could not serialize profile: {err}"),
        }
    }

    /// Current profile as stored, defaulting when absent or unreadable.
    pub fn profile(&self) -> Profile {
        self.store
            .get(PROFILE_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
