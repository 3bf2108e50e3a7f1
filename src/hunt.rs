//! # Snack Hunt
//!
//! Daily hidden-item discovery engine.
//!
//! ## Selection
//!
//! Today's hidden snack is a pure function of the catalog order and the
//! calendar date: the date's long calendar string (`Mon Jan 01 2026`) is
//! run through a 32-bit signed rolling hash (`h = h*31 + char`), and the
//! absolute value modulo the catalog length picks the index. No randomness
//! and no server state, so every client derives the same pick for the same
//! day.
//!
//! ## Discovery record
//!
//! One persisted record per session: `{ discovered, date }`. The record is
//! lazily invalidated — a stored date other than today simply reads as
//! "not discovered today", and the record is only rewritten on the next
//! discovery. The reward is issued at most once per calendar date; a second
//! discovery on the same day is a silent no-op.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{
    catalog::CatalogItem,
    storage::{StoreHandle, HUNT_KEY},
    wallet::Wallet,
};

/// Coins granted on finding the day's hidden snack.
pub const HUNT_REWARD: i64 = 15;

/// Locale-independent long calendar string for `date`, e.g. `Mon Jan 01 2026`.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%a %b %d %Y").to_string()
}

/// Picks today's hidden snack id, or `None` for an empty catalog.
pub fn select_hidden_item(catalog: &[CatalogItem], date: NaiveDate) -> Option<u32> {
    if catalog.is_empty() {
        return None;
    }

    let mut hash: i32 = 0;
    for c in date_key(date).chars() {
        hash = hash.wrapping_mul(31).wrapping_add(c as i32);
    }

    let index = hash.unsigned_abs() as usize % catalog.len();
    Some(catalog[index].id)
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct DiscoveryRecord {
    pub discovered: bool,
    pub date: Option<String>,
}

pub struct SnackHunt {
    record: DiscoveryRecord,
    store: StoreHandle,
}

impl SnackHunt {
    pub fn load(store: StoreHandle) -> Self {
        let record = match store.get(HUNT_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding corrupt hunt record: {e}");
                DiscoveryRecord::default()
            }),
            None => DiscoveryRecord::default(),
        };

        Self { record, store }
    }

    pub fn is_discovered_today(&self, date: NaiveDate) -> bool {
        self.record.discovered && self.record.date.as_deref() == Some(&date_key(date))
    }

    /// Claims today's discovery and credits the reward. Returns whether the
    /// reward was issued; repeat calls on the same date are no-ops.
    pub fn discover(&mut self, date: NaiveDate, reward: i64, wallet: &mut Wallet) -> bool {
        if self.is_discovered_today(date) {
            return false;
        }

        self.record = DiscoveryRecord {
            discovered: true,
            date: Some(date_key(date)),
        };
        self.persist();

        wallet.add(reward);

        true
    }

    fn persist(&self) {
        let raw = serde_json::to_string(&self.record).expect("record always serializes");
        self.store.set(HUNT_KEY, &raw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::test_catalog, storage::MemoryStore};

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn date_key_matches_long_calendar_format() {
        assert_eq!(date_key(day(2026, 1, 1)), "Thu Jan 01 2026");
        assert_eq!(date_key(day(2026, 8, 25)), "Tue Aug 25 2026");
    }

    #[test]
    fn selection_is_deterministic() {
        let catalog = test_catalog();
        let date = day(2026, 8, 25);

        let first = select_hidden_item(&catalog, date);
        assert!(first.is_some());

        for _ in 0..10 {
            assert_eq!(select_hidden_item(&catalog, date), first);
        }
    }

    #[test]
    fn selection_tracks_the_rolling_hash() {
        let catalog = test_catalog();
        let date = day(2026, 1, 1);

        let mut hash: i32 = 0;
        for c in "Thu Jan 01 2026".chars() {
            hash = hash.wrapping_mul(31).wrapping_add(c as i32);
        }
        let expected = catalog[hash.unsigned_abs() as usize % catalog.len()].id;

        assert_eq!(select_hidden_item(&catalog, date), Some(expected));
    }

    #[test]
    fn empty_catalog_selects_nothing() {
        assert_eq!(select_hidden_item(&[], day(2026, 8, 25)), None);
        assert_eq!(select_hidden_item(&[], day(1999, 12, 31)), None);
    }

    #[test]
    fn reward_is_issued_at_most_once_per_date() {
        let store = MemoryStore::handle();
        let mut wallet = Wallet::load(store.clone());
        let mut hunt = SnackHunt::load(store);
        let date = day(2026, 8, 25);

        assert!(hunt.discover(date, HUNT_REWARD, &mut wallet));
        assert_eq!(wallet.balance(), 65);
        assert!(hunt.is_discovered_today(date));

        assert!(!hunt.discover(date, HUNT_REWARD, &mut wallet));
        assert_eq!(wallet.balance(), 65);
    }

    #[test]
    fn yesterdays_record_reads_as_undiscovered() {
        let store = MemoryStore::handle();
        let mut wallet = Wallet::load(store.clone());
        let mut hunt = SnackHunt::load(store.clone());

        let yesterday = day(2026, 8, 24);
        let today = day(2026, 8, 25);

        hunt.discover(yesterday, HUNT_REWARD, &mut wallet);
        assert!(!hunt.is_discovered_today(today));

        // lazy reset: the stored record still carries yesterday until the
        // next discovery rewrites it
        let reloaded = SnackHunt::load(store);
        assert_eq!(
            reloaded.record.date.as_deref(),
            Some(date_key(yesterday).as_str())
        );

        assert!(hunt.discover(today, HUNT_REWARD, &mut wallet));
        assert_eq!(wallet.balance(), 80);
    }

    #[test]
    fn corrupt_record_falls_back_to_default() {
        let store = MemoryStore::handle();
        store.set(HUNT_KEY, "][");

        let hunt = SnackHunt::load(store);
        assert_eq!(hunt.record, DiscoveryRecord::default());
    }
}
