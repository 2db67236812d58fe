//! In-memory collaborator for offline deployments and tests.

use super::{BackendError, BackendResult, PinBackend};
use crate::pin::Pin;
use std::sync::{Arc, Mutex};

/// Pin persistence with no network and no failure mode beyond lock poisoning.
///
/// Clones share the same underlying set, so a handle kept by the host still
/// observes what the store's worker thread wrote.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    pins: Arc<Mutex<Vec<Pin>>>,
}

impl MemoryBackend {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-seeded with pins.
    pub fn with_pins(pins: Vec<Pin>) -> Self {
        Self {
            pins: Arc::new(Mutex::new(pins)),
        }
    }

    /// Every pin currently held, regardless of page or owner.
    pub fn all_pins(&self) -> Vec<Pin> {
        self.pins.lock().map(|p| p.clone()).unwrap_or_default()
    }

    fn lock(&self) -> BackendResult<std::sync::MutexGuard<'_, Vec<Pin>>> {
        self.pins
            .lock()
            .map_err(|e| BackendError::Other(format!("lock error: {e}")))
    }
}

impl PinBackend for MemoryBackend {
    fn fetch_pins(&self, page: &str, owner: &str) -> BackendResult<Vec<Pin>> {
        let pins = self.lock()?;
        Ok(pins
            .iter()
            .filter(|pin| pin.path == page && pin.owner_id == owner)
            .cloned()
            .collect())
    }

    fn save_pin(&self, pin: &Pin) -> BackendResult<()> {
        let mut pins = self.lock()?;
        match pins.iter_mut().find(|existing| existing.id == pin.id) {
            Some(existing) => *existing = pin.clone(),
            None => pins.push(pin.clone()),
        }
        Ok(())
    }

    fn delete_pin(&self, id: &str) -> BackendResult<()> {
        let mut pins = self.lock()?;
        pins.retain(|pin| pin.id != id);
        Ok(())
    }

    fn delete_pins_by_page(&self, page: &str, owner: &str) -> BackendResult<()> {
        let mut pins = self.lock()?;
        pins.retain(|pin| !(pin.path == page && pin.owner_id == owner));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pin(id: &str, page: &str, owner: &str) -> Pin {
        Pin {
            id: id.to_string(),
            x: 10.0,
            y: 20.0,
            path: page.to_string(),
            feedback: "note".to_string(),
            created_at: 1_700_000_000_000,
            owner_id: owner.to_string(),
        }
    }

    #[test]
    fn test_save_and_fetch() {
        let backend = MemoryBackend::new();
        backend.save_pin(&pin("1", "demo://home", "a@x")).unwrap();

        let fetched = backend.fetch_pins("demo://home", "a@x").unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, "1");
    }

    #[test]
    fn test_fetch_filters_by_page_and_owner() {
        let backend = MemoryBackend::with_pins(vec![
            pin("1", "demo://home", "a@x"),
            pin("2", "demo://about", "a@x"),
            pin("3", "demo://home", "b@x"),
        ]);

        let fetched = backend.fetch_pins("demo://home", "a@x").unwrap();
        assert_eq!(fetched.len(), 1);
        assert_eq!(fetched[0].id, "1");
    }

    #[test]
    fn test_save_replaces_existing() {
        let backend = MemoryBackend::new();
        backend.save_pin(&pin("1", "demo://home", "a@x")).unwrap();

        let mut edited = pin("1", "demo://home", "a@x");
        edited.feedback = "edited".to_string();
        backend.save_pin(&edited).unwrap();

        let all = backend.all_pins();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].feedback, "edited");
    }

    #[test]
    fn test_delete_one() {
        let backend = MemoryBackend::with_pins(vec![
            pin("1", "demo://home", "a@x"),
            pin("2", "demo://home", "a@x"),
        ]);

        backend.delete_pin("1").unwrap();
        let all = backend.all_pins();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, "2");
    }

    #[test]
    fn test_delete_by_page_spares_other_pages_and_owners() {
        let backend = MemoryBackend::with_pins(vec![
            pin("1", "demo://home", "a@x"),
            pin("2", "demo://about", "a@x"),
            pin("3", "demo://home", "b@x"),
        ]);

        backend.delete_pins_by_page("demo://home", "a@x").unwrap();
        let ids: Vec<_> = backend.all_pins().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_clones_share_state() {
        let backend = MemoryBackend::new();
        let handle = backend.clone();
        backend.save_pin(&pin("1", "demo://home", "a@x")).unwrap();
        assert_eq!(handle.all_pins().len(), 1);
    }
}
