//! Redis cache module for the HealthDesk application
//!
//! This module provides functionality for connecting to Redis and performing
//! the get/set/delete operations used to persist session blobs.

use redis::{AsyncCommands, Client};
use tracing::info;

use crate::error::{StoreError, StoreResult};

/// Configuration for Redis connection
#[derive(Debug, Clone)]
pub struct RedisConfig {
    /// Redis connection URL (e.g., "redis://localhost:6379")
    pub url: String,
}

impl RedisConfig {
    /// Create a new RedisConfig from environment variables
    ///
    /// # Environment Variables
    /// - `REDIS_URL`: Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> StoreResult<Self> {
        let url =
            std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string());

        if !url.starts_with("redis://") && !url.starts_with("rediss://") {
            return Err(StoreError::Configuration(format!(
                "Invalid Redis URL: {}",
                url
            )));
        }

        Ok(RedisConfig { url })
    }
}

/// Redis connection pool
#[derive(Clone)]
pub struct RedisPool {
    client: Client,
}

impl RedisPool {
    /// Initialize a new Redis connection pool
    pub async fn new(config: &RedisConfig) -> StoreResult<Self> {
        let client = Client::open(config.url.clone()).map_err(StoreError::Connection)?;
        info!("Redis client initialized with URL: {}", config.url);
        Ok(RedisPool { client })
    }

    /// Get a connection from the pool
    async fn get_connection(&self) -> StoreResult<redis::aio::MultiplexedConnection> {
        self.client
            .get_multiplexed_async_connection()
            .await
            .map_err(StoreError::Connection)
    }

    /// Set a key-value pair in Redis with optional TTL
    pub async fn set(&self, key: &str, value: &str, ttl_seconds: Option<u64>) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;

        if let Some(ttl) = ttl_seconds {
            let _: () = conn
                .set_ex(key, value, ttl)
                .await
                .map_err(StoreError::Command)?;
        } else {
            let _: () = conn.set(key, value).await.map_err(StoreError::Command)?;
        }

        Ok(())
    }

    /// Get a value from Redis by key
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut conn = self.get_connection().await?;
        let value: Option<String> = conn.get(key).await.map_err(StoreError::Command)?;
        Ok(value)
    }

    /// Delete a key from Redis
    pub async fn delete(&self, key: &str) -> StoreResult<()> {
        let mut conn = self.get_connection().await?;
        let _: u64 = conn.del(key).await.map_err(StoreError::Command)?;
        Ok(())
    }

    /// Check if Redis is reachable
    pub async fn health_check(&self) -> StoreResult<bool> {
        let mut conn = self.get_connection().await?;
        let pong: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(StoreError::Command)?;
        Ok(pong == "PONG")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_redis_config_rejects_foreign_scheme() {
        unsafe { std::env::set_var("REDIS_URL", "http://localhost:6379") };
        let result = RedisConfig::from_env();
        unsafe { std::env::remove_var("REDIS_URL") };

        assert!(matches!(result, Err(StoreError::Configuration(_))));
    }

    #[test]
    #[serial]
    fn test_redis_config_default_url() {
        unsafe { std::env::remove_var("REDIS_URL") };
        let config = RedisConfig::from_env().expect("default config should be valid");
        assert_eq!(config.url, "redis://localhost:6379");
    }

    #[tokio::test]
    #[ignore = "requires a running Redis instance"]
    async fn test_set_get_delete() -> StoreResult<()> {
        let config = RedisConfig {
            url: "redis://localhost:6379".to_string(),
        };

        let pool = RedisPool::new(&config).await?;
        assert!(pool.health_check().await?);

        let key = "healthdesk_test_key";
        pool.set(key, "test_value", Some(5)).await?;
        assert_eq!(pool.get(key).await?, Some("test_value".to_string()));

        pool.delete(key).await?;
        assert_eq!(pool.get(key).await?, None);

        Ok(())
    }
}
