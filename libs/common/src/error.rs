//! Custom error types for the common library
//!
//! This module defines the error types raised by the key-value stores that
//! back persisted session data.

use redis::RedisError;
use thiserror::Error;

/// Custom error type for key-value store operations
#[derive(Error, Debug)]
pub enum StoreError {
    /// Error occurred while opening or acquiring a connection
    #[error("Store connection error: {0}")]
    Connection(#[source] RedisError),

    /// Error occurred while executing a store command
    #[error("Store command error: {0}")]
    Command(#[source] RedisError),

    /// Configuration error
    #[error("Store configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with StoreError
pub type StoreResult<T> = Result<T, StoreError>;
