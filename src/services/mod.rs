//! Бизнес-логика сервисов

pub mod hashing;

use std::sync::Arc;

#[derive(Clone)]
pub struct Services {
    pub hashing: Arc<hashing::HashingService>,
}

impl Services {
    pub fn new() -> Self {
        Self {
            hashing: Arc::new(hashing::HashingService::new()),
        }
    }
}

impl Default for Services {
    fn default() -> Self {
        Self::new()
    }
}
