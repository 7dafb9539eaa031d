use status_core::StatusStore;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<StatusStore>>,
}

impl AppState {
    pub fn new(store: StatusStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
