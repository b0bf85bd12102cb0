use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Key-value cache whose entries expire a fixed time after insertion.
///
/// Expired entries read as absent and are overwritten by the next insert.
/// Time comes from tokio's clock, so a paused runtime controls expiry.
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, Entry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns a copy of the value for `key` if it has not expired.
    pub async fn get(&self, key: &K) -> Option<V> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        (Instant::now() < entry.expires_at).then(|| entry.value.clone())
    }

    /// Stores `value` under `key` for one TTL, replacing any previous value.
    pub async fn insert(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.ttl;
        self.entries
            .write()
            .await
            .insert(key, Entry { value, expires_at });
    }

    /// Drops the value for `key`.
    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.remove(key);
    }
}
