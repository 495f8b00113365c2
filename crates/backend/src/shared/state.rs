use std::sync::Arc;

use crate::shared::data::datastore::Datastore;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub datastore: Arc<dyn Datastore>,
}

impl AppState {
    pub fn new<D: Datastore + 'static>(datastore: D) -> Self {
        Self {
            datastore: Arc::new(datastore),
        }
    }
}
