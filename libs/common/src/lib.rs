//! Common library for the HealthDesk application
//!
//! This crate provides shared functionality used by the dashboard service,
//! mainly the key-value persistence that mirrors client sessions and the
//! errors those stores raise.
//!
//! ```rust,no_run
//! use common::cache::{RedisConfig, RedisPool};
//! use common::KvStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RedisConfig::from_env()?;
//!     let store = KvStore::Redis(RedisPool::new(&config).await?);
//!     store.set("healthdesk_session:demo", "{}", None).await?;
//!     println!("Store health check: {}", store.health_check().await?);
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod error;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use store::{KvStore, MemoryStore};
