use std::sync::Arc;

use crate::ids::{IdGenerator, RandomIdGenerator};
use crate::store::JsonFileEventStore;

/// Immutable handles shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonFileEventStore>,
    pub ids: Arc<dyn IdGenerator>,
}

impl AppState {
    pub fn new(store: JsonFileEventStore) -> Self {
        Self::with_id_generator(store, RandomIdGenerator::new())
    }

    pub fn with_id_generator(store: JsonFileEventStore, ids: impl IdGenerator + 'static) -> Self {
        Self {
            store: Arc::new(store),
            ids: Arc::new(ids),
        }
    }
}
