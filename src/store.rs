use std::collections::HashMap;

/// Session-lifetime record of trust decisions, keyed by certificate
/// fingerprint. Entries are never updated or removed once set.
pub trait DecisionStore: std::fmt::Debug {
    fn get(&self, fingerprint: &str) -> Option<bool>;
    fn insert(&mut self, fingerprint: &str, trusted: bool) -> bool;
    fn values(&self) -> HashMap<String, bool>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore(HashMap<String, bool>);
impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}
impl DecisionStore for MemoryStore {
    fn get(&self, fingerprint: &str) -> Option<bool> {
        self.0.get(fingerprint).copied()
    }

    fn insert(&mut self, fingerprint: &str, trusted: bool) -> bool {
        self.0.insert(fingerprint.to_string(), trusted).is_none()
    }

    fn values(&self) -> HashMap<String, bool> {
        self.0.clone()
    }
}
