use std::sync::Arc;

use super::{config::Config, snacks::SnackStore};

pub struct State {
    pub config: Config,
    pub snacks: SnackStore,
}

impl State {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            config: Config::load(),
            snacks: SnackStore::seeded(),
        })
    }
}
