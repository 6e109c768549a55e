//! Durable user data: preferences, favorites and the recently-used list.
//!
//! The store owns the whole `UserData` aggregate. It is loaded once at
//! startup, cached in memory, and written back wholesale on every
//! mutation. Persistence is best effort: a failed read falls back to the
//! defaults, a failed write keeps the in-memory state and is logged, and
//! neither is surfaced to the caller as an error.

pub mod storage;

use std::sync::{
    atomic::{AtomicBool, Ordering},
    RwLock,
};

use chrono::Utc;
use log::warn;

use crate::models::user::{
    FavoriteSymbol, PreferencesUpdate, RecentlyUsedSymbol, UserData, MAX_RECENTLY_USED,
};
use storage::StorageBackend;

/// Fixed storage key for the persisted aggregate.
pub const USER_DATA_KEY: &str = "chinese-symbols-user-data";

pub struct UserDataStore {
    storage: Box<dyn StorageBackend>,
    data: RwLock<UserData>,
    loaded: AtomicBool,
}

impl UserDataStore {
    /// The store starts with the documented defaults; persisted values are
    /// not in effect until `load` has run.
    pub fn new(storage: Box<dyn StorageBackend>) -> Self {
        Self {
            storage,
            data: RwLock::new(UserData::default()),
            loaded: AtomicBool::new(false),
        }
    }

    /// Reads the persisted aggregate once at startup. A missing record,
    /// unreadable storage or an undecodable payload all fall back to the
    /// defaults; the session must always start usable.
    pub fn load(&self) {
        let data = match self.storage.get(USER_DATA_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<UserData>(&raw) {
                Ok(data) => data.normalized(),
                Err(err) => {
                    warn!("Discarding malformed user data: {err}");
                    UserData::default()
                }
            },
            Ok(None) => UserData::default(),
            Err(err) => {
                warn!("Failed to load user data: {err}");
                UserData::default()
            }
        };

        *self.data.write().unwrap() = data;
        self.loaded.store(true, Ordering::SeqCst);
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded.load(Ordering::SeqCst)
    }

    pub fn user_data(&self) -> UserData {
        self.data.read().unwrap().clone()
    }

    /// Merges the supplied fields into the current preferences and
    /// persists the aggregate.
    pub fn update_preferences(&self, update: &PreferencesUpdate) {
        let mut guard = self.data.write().unwrap();
        guard.preferences.apply(update);
        self.persist(&guard);
    }

    /// Idempotent: adding an id that is already a favorite changes
    /// nothing.
    pub fn add_favorite(&self, symbol_id: &str) {
        let mut guard = self.data.write().unwrap();
        if guard
            .favorites
            .iter()
            .any(|favorite| favorite.symbol_id == symbol_id)
        {
            return;
        }
        guard.favorites.push(FavoriteSymbol {
            symbol_id: symbol_id.to_string(),
            added_at: Utc::now(),
        });
        self.persist(&guard);
    }

    /// Removing an absent id is a no-op, not an error.
    pub fn remove_favorite(&self, symbol_id: &str) {
        let mut guard = self.data.write().unwrap();
        guard
            .favorites
            .retain(|favorite| favorite.symbol_id != symbol_id);
        self.persist(&guard);
    }

    pub fn is_favorite(&self, symbol_id: &str) -> bool {
        self.data
            .read()
            .unwrap()
            .favorites
            .iter()
            .any(|favorite| favorite.symbol_id == symbol_id)
    }

    /// Moves the id to the head of the recently-used list (re-use moves
    /// the existing entry rather than duplicating it) and clamps the list
    /// to the most recent twenty.
    pub fn add_to_recently_used(&self, symbol_id: &str) {
        let mut guard = self.data.write().unwrap();
        guard
            .recently_used
            .retain(|recent| recent.symbol_id != symbol_id);
        guard.recently_used.insert(
            0,
            RecentlyUsedSymbol {
                symbol_id: symbol_id.to_string(),
                used_at: Utc::now(),
            },
        );
        guard.recently_used.truncate(MAX_RECENTLY_USED);
        self.persist(&guard);
    }

    pub fn favorite_symbol_ids(&self) -> Vec<String> {
        self.data
            .read()
            .unwrap()
            .favorites
            .iter()
            .map(|favorite| favorite.symbol_id.clone())
            .collect()
    }

    pub fn recently_used_symbol_ids(&self) -> Vec<String> {
        self.data
            .read()
            .unwrap()
            .recently_used
            .iter()
            .map(|recent| recent.symbol_id.clone())
            .collect()
    }

    /// The in-memory aggregate is already updated when this runs; a failed
    /// write costs durability, not consistency within the session.
    fn persist(&self, data: &UserData) {
        let serialized = match serde_json::to_string_pretty(data) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!("Failed to serialize user data: {err}");
                return;
            }
        };
        if let Err(err) = self.storage.set(USER_DATA_KEY, &serialized) {
            warn!("Failed to persist user data: {err}");
        }
    }
}
