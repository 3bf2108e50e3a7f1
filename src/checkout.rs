//! # Checkout
//!
//! Validates the cart total against the wallet and performs the only
//! purchase path that ever debits coins. Fractional totals are charged
//! rounded up to whole coins.

use crate::{cart::Cart, wallet::Wallet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckoutPhase {
    Reviewing,
    Paying,
    Succeeded,
    Rejected,
}

pub struct Checkout {
    phase: CheckoutPhase,
}

impl Default for Checkout {
    fn default() -> Self {
        Self {
            phase: CheckoutPhase::Reviewing,
        }
    }
}

/// Whole-coin cost of the cart.
pub fn cost(cart: &Cart) -> i64 {
    cart.total().ceil() as i64
}

pub fn can_afford(wallet: &Wallet, cart: &Cart) -> bool {
    wallet.balance() >= cost(cart)
}

impl Checkout {
    pub fn phase(&self) -> CheckoutPhase {
        self.phase
    }

    /// Attempts payment. On an empty cart or insufficient balance nothing
    /// changes and the flow lands in `Rejected`; on success the wallet is
    /// debited and the cart cleared as one step.
    pub fn pay(&mut self, wallet: &mut Wallet, cart: &mut Cart) -> bool {
        self.phase = CheckoutPhase::Paying;

        if cart.is_empty() || !can_afford(wallet, cart) {
            self.phase = CheckoutPhase::Rejected;
            return false;
        }

        wallet.subtract(cost(cart));
        cart.clear();
        self.phase = CheckoutPhase::Succeeded;

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::test_catalog, storage::MemoryStore};

    #[test]
    fn successful_payment_debits_and_clears() {
        let catalog = test_catalog();
        let mut wallet = Wallet::load(MemoryStore::handle());
        let mut cart = Cart::default();

        cart.add_item(&catalog[0]);
        cart.add_item(&catalog[1]);
        assert_eq!(cart.total(), 30.0);
        assert!(can_afford(&wallet, &cart));

        let mut checkout = Checkout::default();
        assert!(checkout.pay(&mut wallet, &mut cart));

        assert_eq!(checkout.phase(), CheckoutPhase::Succeeded);
        assert_eq!(wallet.balance(), 20);
        assert!(cart.is_empty());
    }

    #[test]
    fn insufficient_funds_is_a_no_op() {
        let catalog = test_catalog();
        let store = MemoryStore::handle();
        store.set(crate::storage::WALLET_KEY, "10");

        let mut wallet = Wallet::load(store);
        let mut cart = Cart::default();
        cart.add_item(&catalog[0]);
        cart.add_item(&catalog[1]);

        assert!(!can_afford(&wallet, &cart));

        let mut checkout = Checkout::default();
        assert!(!checkout.pay(&mut wallet, &mut cart));

        assert_eq!(checkout.phase(), CheckoutPhase::Rejected);
        assert_eq!(wallet.balance(), 10);
        assert_eq!(cart.count(), 2);
    }

    #[test]
    fn empty_cart_cannot_pay() {
        let mut wallet = Wallet::load(MemoryStore::handle());
        let mut cart = Cart::default();

        let mut checkout = Checkout::default();
        assert!(!checkout.pay(&mut wallet, &mut cart));
        assert_eq!(checkout.phase(), CheckoutPhase::Rejected);
        assert_eq!(wallet.balance(), 50);
    }

    #[test]
    fn fractional_totals_charge_whole_coins() {
        let mut item = test_catalog().remove(0);
        item.price = 3.99;

        let mut cart = Cart::default();
        cart.add_item(&item);

        assert_eq!(cost(&cart), 4);
    }
}
