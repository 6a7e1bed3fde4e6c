use crate::config::Config;
use crate::store::LedgerStore;

pub struct AppState {
    pub store: LedgerStore,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            store: LedgerStore::new(),
            config,
        }
    }
}
