use std::collections::VecDeque;

use async_trait::async_trait;
use common::registration::Registration;
use tokio::sync::Mutex;
use tracing::debug;

use crate::traits::RegistrationStore;

pub const DEFAULT_CAPACITY: usize = 1000;

// nothing upstream accepts sign ups, so they only live for the process lifetime
// and the oldest are dropped once `capacity` is reached
pub struct MemoryRegistrationStore {
    registrations: Mutex<VecDeque<Registration>>,
    capacity: usize,
}

impl Default for MemoryRegistrationStore {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}

impl MemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            registrations: Mutex::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }
}

#[async_trait]
impl RegistrationStore for MemoryRegistrationStore {
    async fn insert(&self, registration: Registration) {
        let mut registrations = self.registrations.lock().await;

        if registrations.len() >= self.capacity {
            registrations.pop_front();
        }

        registrations.push_back(registration);

        debug!("Recorded registration, {} held", registrations.len());
    }

    async fn count(&self) -> usize {
        self.registrations.lock().await.len()
    }

    async fn list(&self) -> Vec<Registration> {
        self.registrations.lock().await.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn keeps_insertion_order() {
        let store = MemoryRegistrationStore::new();

        store.insert(Registration::new("Rahim".into())).await;
        store.insert(Registration::new("Karim".into())).await;

        let names: Vec<String> = store.list().await.into_iter().map(|r| r.name).collect();

        assert_eq!(store.count().await, 2);
        assert_eq!(names, vec!["Rahim", "Karim"]);
    }

    #[tokio::test]
    async fn drops_oldest_past_capacity() {
        let store = MemoryRegistrationStore::with_capacity(2);

        for name in ["Rahim", "Karim", "Nusrat"] {
            store.insert(Registration::new(name.into())).await;
        }

        let names: Vec<String> = store.list().await.into_iter().map(|r| r.name).collect();

        assert_eq!(store.count().await, 2);
        assert_eq!(names, vec!["Karim", "Nusrat"]);
    }
}
