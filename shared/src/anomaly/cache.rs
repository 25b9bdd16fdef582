//! Backing stores for the anomaly provider's memo cache

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use crate::models::{Anomaly, AnomalyKey};

/// Key-value store the provider memoizes lookups into.
///
/// Implementations must be safe to share across threads. There is no
/// eviction: the number of distinct keys in a session is small.
pub trait AnomalyCache: Send + Sync {
    fn get(&self, key: &AnomalyKey) -> Option<Anomaly>;

    /// Insert `anomaly` unless the key is already present, returning the
    /// value that ends up stored.
    fn get_or_insert(&self, key: AnomalyKey, anomaly: Anomaly) -> Anomaly;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn clear(&self);
}

/// Plain in-memory cache guarded by a read-write lock
#[derive(Debug, Default)]
pub struct InMemoryAnomalyCache {
    entries: RwLock<HashMap<AnomalyKey, Anomaly>>,
}

impl InMemoryAnomalyCache {
    pub fn new() -> Self {
        Self::default()
    }
}

// Lock poisoning is recovered: entries are deterministic, so a panicking
// writer cannot leave a half-computed value behind.
impl AnomalyCache for InMemoryAnomalyCache {
    fn get(&self, key: &AnomalyKey) -> Option<Anomaly> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .copied()
    }

    fn get_or_insert(&self, key: AnomalyKey, anomaly: Anomaly) -> Anomaly {
        *self
            .entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(key)
            .or_insert(anomaly)
    }

    fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Scenario;

    fn anomaly(delta: f64) -> Anomaly {
        Anomaly {
            delta_t_mean_c: delta,
            delta_t_max_c: delta,
            delta_wet_prob: 0.0,
            delta_intensity_frac: 0.0,
            delta_dry_spell_days: None,
            delta_hot_days_90f: None,
        }
    }

    fn key() -> AnomalyKey {
        AnomalyKey {
            lat_index: 40,
            lon_index: -75,
            month: 7,
            scenario: Scenario::BusinessAsUsual,
        }
    }

    #[test]
    fn test_first_insert_wins() {
        let cache = InMemoryAnomalyCache::new();
        assert!(cache.is_empty());

        assert_eq!(cache.get_or_insert(key(), anomaly(1.0)), anomaly(1.0));
        assert_eq!(cache.get_or_insert(key(), anomaly(2.0)), anomaly(1.0));
        assert_eq!(cache.get(&key()), Some(anomaly(1.0)));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = InMemoryAnomalyCache::new();
        cache.get_or_insert(key(), anomaly(1.0));
        cache.clear();
        assert!(cache.get(&key()).is_none());
    }
}
