//! # Wallet
//!
//! Snacky Coin balance. Every mutation writes the new balance straight
//! through to storage, so a restart resumes from the last committed value.

use tracing::warn;

use crate::storage::{StoreHandle, WALLET_KEY};

/// Starting grant for a fresh session.
pub const INITIAL_COINS: i64 = 50;

pub struct Wallet {
    balance: i64,
    store: StoreHandle,
}

impl Wallet {
    pub fn load(store: StoreHandle) -> Self {
        let balance = match store.get(WALLET_KEY) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                warn!("Discarding corrupt wallet balance {raw:?}: {e}");
                INITIAL_COINS
            }),
            None => INITIAL_COINS,
        };

        Self { balance, store }
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    /// Credits `amount` coins. `amount` must be positive.
    pub fn add(&mut self, amount: i64) {
        debug_assert!(amount > 0);

        self.balance += amount;
        self.persist();
    }

    /// Debits `amount` coins. The caller validates sufficiency first; the
    /// wallet does not clamp to zero.
    pub fn subtract(&mut self, amount: i64) {
        debug_assert!(amount > 0);

        self.balance -= amount;
        self.persist();
    }

    fn persist(&self) {
        self.store.set(WALLET_KEY, &self.balance.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn fresh_wallet_gets_initial_grant() {
        let wallet = Wallet::load(MemoryStore::handle());
        assert_eq!(wallet.balance(), INITIAL_COINS);
    }

    #[test]
    fn mutations_persist_immediately() {
        let store = MemoryStore::handle();

        let mut wallet = Wallet::load(store.clone());
        wallet.add(15);
        assert_eq!(store.get(WALLET_KEY), Some("65".to_string()));

        wallet.subtract(30);
        assert_eq!(store.get(WALLET_KEY), Some("35".to_string()));

        let reloaded = Wallet::load(store);
        assert_eq!(reloaded.balance(), 35);
    }

    #[test]
    fn corrupt_balance_falls_back_to_grant() {
        let store = MemoryStore::handle();
        store.set(WALLET_KEY, "lots");

        let wallet = Wallet::load(store);
        assert_eq!(wallet.balance(), INITIAL_COINS);
    }
}
