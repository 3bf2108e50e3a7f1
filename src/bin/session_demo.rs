//! Drives a full session against a running backend: boot, hunt today's
//! hidden snack, buy it, and leave the wallet persisted for next time.
//!
//! ```sh
//! cargo run --bin session_demo
//! ```

use std::rc::Rc;

use snacky::{
    config::Config,
    dwell::{DWELL_THRESHOLD_MS, DWELL_TICK_MS},
    session::Session,
    storage::FileStore,
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::load();
    let store = Rc::new(FileStore::open(config.storage_path.clone().into()));

    let base_url = format!("http://localhost:{}", config.port);
    let mut session = Session::start(&base_url, store).await;

    println!("Catalog: {} snacks", session.catalog().len());
    println!("Balance: {} coins", session.balance());

    let Some(hidden) = session.hidden_snack_id() else {
        println!("Empty catalog, nothing to hunt today");
        return;
    };

    if session.discovered_today() {
        println!("Today's snack hunt is already claimed");
    } else {
        session.pointer_enter(hidden);
        for _ in 0..(DWELL_THRESHOLD_MS / DWELL_TICK_MS) {
            session.dwell_tick(hidden);
        }
        session.drain();

        println!("Discovered snack #{hidden}, balance now {}", session.balance());
    }

    session.add_to_cart(hidden);
    if session.can_afford() && session.pay() {
        println!("Bought snack #{hidden}, balance now {}", session.balance());
    } else {
        println!("Cannot afford snack #{hidden}");
    }
}
