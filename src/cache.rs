use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::Mutex;
use tracing::info;

/// Plain in-memory key/value cache
///
/// No expiry and no eviction: a value stays until it is overwritten or
/// removed. Every operation is logged.
#[derive(Clone)]
pub struct SimpleCache {
    entries: Arc<Mutex<HashMap<String, Value>>>,
}

impl SimpleCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Store a value under a key, replacing any previous value
    pub async fn put(&self, key: &str, value: Value) {
        info!("cache put: key={}, value={}", key, value);
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value);
    }

    /// Look up a key, logging whether it was a hit or a miss
    pub async fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.lock().await;
        let value = entries.get(key).cloned();
        match &value {
            Some(v) => info!("cache hit: key={}, value={}", key, v),
            None => info!("cache miss: key={}", key),
        }
        value
    }

    /// Remove a key if present
    pub async fn remove(&self, key: &str) {
        info!("cache remove: key={}", key);
        let mut entries = self.entries.lock().await;
        entries.remove(key);
    }

    /// Drop every entry
    pub async fn clear(&self) {
        info!("cache clear: all entries removed");
        let mut entries = self.entries.lock().await;
        entries.clear();
    }
}

impl Default for SimpleCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn get_after_put_returns_the_last_value() {
        let cache = SimpleCache::new();

        assert!(cache.get("rates").await.is_none());

        cache.put("rates", json!({"USD": "3.2954"})).await;
        assert_eq!(cache.get("rates").await, Some(json!({"USD": "3.2954"})));

        cache.put("rates", json!("replaced")).await;
        assert_eq!(cache.get("rates").await, Some(json!("replaced")));
    }

    #[tokio::test]
    async fn remove_then_get_is_absent() {
        let cache = SimpleCache::new();
        cache.put("rates", json!(1)).await;

        cache.remove("rates").await;

        assert!(cache.get("rates").await.is_none());
    }

    #[tokio::test]
    async fn clear_empties_all_keys() {
        let cache = SimpleCache::new();
        cache.put("rates", json!(1)).await;
        cache.put("currencies", json!(2)).await;

        cache.clear().await;

        assert!(cache.get("rates").await.is_none());
        assert!(cache.get("currencies").await.is_none());
    }
}
