use async_trait::async_trait;
use moka::Expiry;
use moka::future::Cache;
use std::time::{Duration, Instant};
use tracing::debug;

use crate::cache::{CacheResult, ObjectCache};
use crate::config::AppConfig;
use crate::declare_object_cache_plugin;

declare_object_cache_plugin!("moka", MokaCacheWrapper);

/// 缓存条目：值和该条目自己的存活时间
#[derive(Clone)]
struct Entry {
    value: String,
    ttl: Duration,
}

struct PerEntryExpiry;

impl Expiry<String, Entry> for PerEntryExpiry {
    fn expire_after_create(
        &self,
        _key: &String,
        value: &Entry,
        _created_at: Instant,
    ) -> Option<Duration> {
        Some(value.ttl)
    }
}

pub struct MokaCacheWrapper {
    inner: Cache<String, Entry>,
    default_ttl: u64,
}

impl MokaCacheWrapper {
    pub fn new() -> Result<Self, String> {
        let config = AppConfig::get();
        Self::with_capacity(config.cache.memory.max_capacity, config.cache.default_ttl)
    }

    pub fn with_capacity(max_capacity: u64, default_ttl: u64) -> Result<Self, String> {
        if default_ttl == 0 {
            return Err("cache.default_ttl must be greater than zero".to_string());
        }

        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .expire_after(PerEntryExpiry)
            .build();

        debug!("MokaCacheWrapper initialized with max capacity: {max_capacity}");
        Ok(Self { inner, default_ttl })
    }
}

#[async_trait]
impl ObjectCache for MokaCacheWrapper {
    async fn get_raw(&self, key: &str) -> CacheResult<String> {
        match self.inner.get(key).await {
            Some(entry) => CacheResult::Found(entry.value),
            None => {
                debug!("Key not found in cache: {}", key);
                CacheResult::NotFound
            }
        }
    }

    async fn insert_raw(&self, key: String, value: String, ttl: u64) {
        let ttl = if ttl == 0 { self.default_ttl } else { ttl };
        self.inner
            .insert(
                key,
                Entry {
                    value,
                    ttl: Duration::from_secs(ttl),
                },
            )
            .await;
    }

    async fn remove(&self, key: &str) {
        self.inner.invalidate(key).await;
    }

    async fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::{get_json, insert_json};

    #[tokio::test]
    async fn test_insert_get_remove() {
        let cache = MokaCacheWrapper::with_capacity(100, 60).unwrap();
        cache.insert_raw("cep:01001000".into(), "{}".into(), 0).await;
        assert_eq!(
            cache.get_raw("cep:01001000").await,
            CacheResult::Found("{}".to_string())
        );

        cache.remove("cep:01001000").await;
        assert_eq!(cache.get_raw("cep:01001000").await, CacheResult::NotFound);
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let cache = MokaCacheWrapper::with_capacity(100, 60).unwrap();
        insert_json(&cache, "k".into(), &vec![1, 2, 3], 10).await;
        let value: Option<Vec<i32>> = get_json(&cache, "k").await;
        assert_eq!(value, Some(vec![1, 2, 3]));

        // 反序列化失败的条目会被清除
        let wrong: Option<String> = get_json(&cache, "k").await;
        assert!(wrong.is_none());
        assert_eq!(cache.get_raw("k").await, CacheResult::NotFound);
    }

    #[test]
    fn test_zero_default_ttl_rejected() {
        assert!(MokaCacheWrapper::with_capacity(10, 0).is_err());
    }
}
