// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Thin async Redis client
//!
//! [`RedisClient`] wraps a pool of connections and exposes
//! typed helpers for strings, JSON values, counters, hashes, lists, sets,
//! sorted sets and pub/sub. Reads of a missing key fail with
//! [`KvError::KeyNotFound`].
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use redis_client::{KvError, RedisClient, RedisOptions};
//!
//! # async fn run() -> redis_client::KvResult<()> {
//! let client = RedisClient::connect(RedisOptions::new("127.0.0.1:6379").with_db(1)).await?;
//! client.set("greeting", "hello", Some(Duration::from_secs(60))).await?;
//! assert_eq!(client.get("greeting").await?, "hello");
//! assert!(matches!(client.get("absent").await, Err(KvError::KeyNotFound)));
//! # Ok(())
//! # }
//! ```

mod client;
mod error;
mod options;
mod pubsub;
mod stats;

pub use crate::{
    client::{RedisClient, Ttl},
    error::{KvError, KvResult},
    options::{
        DEFAULT_DIAL_TIMEOUT, DEFAULT_MIN_IDLE_CONNS, DEFAULT_POOL_SIZE, DEFAULT_READ_TIMEOUT,
        DEFAULT_WRITE_TIMEOUT, RedisOptions,
    },
    pubsub::{Message, Subscription},
    stats::Stats,
};
