//! # Session
//!
//! Single-user session context. Owns the wallet, cart, hunt record, and the
//! per-card dwell detectors, and serializes every mutation on one logical
//! thread of control — no locks, no ambient globals.
//!
//! Dwell detectors never touch the wallet directly. A threshold crossing
//! posts a [`SessionMsg::Discover`] onto the session queue, and the
//! mutation happens on the next [`Session::drain`], outside the tick path.

use std::collections::{HashMap, VecDeque};

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::{
    cart::Cart,
    catalog::{fetch_catalog, CatalogItem},
    checkout::{self, Checkout},
    dwell::DwellDetector,
    hunt::{select_hidden_item, SnackHunt, HUNT_REWARD},
    storage::StoreHandle,
    wallet::Wallet,
};

/// Reward toast lifetime before auto-hide, in milliseconds.
pub const TOAST_HIDE_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionMsg {
    Discover,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Toast {
    pub reward: i64,
    pub remaining_ms: u64,
}

pub struct Session {
    catalog: Vec<CatalogItem>,
    today: NaiveDate,
    wallet: Wallet,
    cart: Cart,
    hunt: SnackHunt,
    dwell: HashMap<u32, DwellDetector>,
    queue: VecDeque<SessionMsg>,
    toast: Option<Toast>,
}

impl Session {
    /// Boots a session against a running backend: one catalog fetch, then
    /// wallet and hunt record restored from storage. A failed fetch leaves
    /// the catalog empty and the hunt inert.
    pub async fn start(base_url: &str, store: StoreHandle) -> Self {
        let catalog = match fetch_catalog(base_url).await {
            Ok(items) => {
                info!("Loaded {} snacks", items.len());
                items
            }
            Err(e) => {
                warn!("Catalog fetch failed, starting empty: {e}");
                Vec::new()
            }
        };

        Self::new(catalog, store, Local::now().date_naive())
    }

    pub fn new(catalog: Vec<CatalogItem>, store: StoreHandle, today: NaiveDate) -> Self {
        Self {
            catalog,
            today,
            wallet: Wallet::load(store.clone()),
            cart: Cart::default(),
            hunt: SnackHunt::load(store),
            dwell: HashMap::new(),
            queue: VecDeque::new(),
            toast: None,
        }
    }

    pub fn catalog(&self) -> &[CatalogItem] {
        &self.catalog
    }

    pub fn balance(&self) -> i64 {
        self.wallet.balance()
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn hidden_snack_id(&self) -> Option<u32> {
        select_hidden_item(&self.catalog, self.today)
    }

    pub fn discovered_today(&self) -> bool {
        self.hunt.is_discovered_today(self.today)
    }

    // ── cart / checkout ──

    pub fn add_to_cart(&mut self, item_id: u32) {
        let item = self.catalog.iter().find(|i| i.id == item_id).cloned();
        if let Some(item) = item {
            self.cart.add_item(&item);
        }
    }

    pub fn remove_from_cart(&mut self, item_id: u32) {
        self.cart.remove_one(item_id);
    }

    pub fn can_afford(&self) -> bool {
        checkout::can_afford(&self.wallet, &self.cart)
    }

    pub fn pay(&mut self) -> bool {
        Checkout::default().pay(&mut self.wallet, &mut self.cart)
    }

    // ── snack hunt ──

    pub fn pointer_enter(&mut self, item_id: u32) {
        let is_hidden = self.hidden_snack_id() == Some(item_id);
        let discovered = self.discovered_today();

        self.dwell
            .entry(item_id)
            .or_default()
            .pointer_enter(is_hidden, discovered);
    }

    pub fn pointer_leave(&mut self, item_id: u32) {
        if let Some(dwell) = self.dwell.get_mut(&item_id) {
            dwell.pointer_leave();
        }
    }

    /// One 100ms dwell tick for `item_id`. A threshold crossing only queues
    /// the discovery; call [`drain`](Self::drain) to apply it.
    pub fn dwell_tick(&mut self, item_id: u32) {
        if let Some(dwell) = self.dwell.get_mut(&item_id) {
            if dwell.tick() {
                self.queue.push_back(SessionMsg::Discover);
            }
        }
    }

    /// Card removed from view: drop its detector and any running tick state.
    pub fn unmount_item(&mut self, item_id: u32) {
        self.dwell.remove(&item_id);
    }

    /// Consumes queued messages on the scheduler turn after they were
    /// posted. The at-most-once-per-day check lives in the hunt record, so
    /// duplicate messages collapse to one reward.
    pub fn drain(&mut self) {
        while let Some(msg) = self.queue.pop_front() {
            match msg {
                SessionMsg::Discover => {
                    if self.hunt.discover(self.today, HUNT_REWARD, &mut self.wallet) {
                        info!("Snack hunt discovered, +{HUNT_REWARD} coins");
                        self.toast = Some(Toast {
                            reward: HUNT_REWARD,
                            remaining_ms: TOAST_HIDE_MS,
                        });
                    }
                }
            }
        }
    }

    // ── toast ──

    pub fn toast(&self) -> Option<Toast> {
        self.toast
    }

    /// Advances the toast auto-hide countdown by `elapsed_ms` of wall time.
    pub fn elapse(&mut self, elapsed_ms: u64) {
        if let Some(toast) = &mut self.toast {
            if toast.remaining_ms <= elapsed_ms {
                self.toast = None;
            } else {
                toast.remaining_ms -= elapsed_ms;
            }
        }
    }
}
