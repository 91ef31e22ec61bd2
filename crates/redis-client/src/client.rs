// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Redis client with typed helpers
//!
//! Commands run on connections checked out of a `deadpool` pool. Checking a
//! connection out is bounded by the write timeout and the reply by the read
//! timeout; dropping a returned future cancels the command and the
//! connection goes back to the pool.

use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use deadpool_redis::{Connection, Manager, Pool, PoolError, Runtime};
use redis::{Client, Cmd, ConnectionInfo, FromRedisValue, ToRedisArgs, cmd};
use serde::{Serialize, de::DeserializeOwned};
use tokio::time::timeout;
use tracing::{debug, info, warn};

use crate::{
    error::{KvError, KvResult},
    options::RedisOptions,
    pubsub::Subscription,
    stats::{Counters, Stats},
};

/// Remaining lifetime of a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ttl {
    /// The key expires after this long
    Expires(Duration),
    /// The key exists and has no expiry
    Persistent,
    /// The key does not exist
    Missing,
}

impl Ttl {
    /// Interpret a `PTTL` reply
    fn from_millis(millis: i64) -> Self {
        match millis {
            -2 => Ttl::Missing,
            millis => u64::try_from(millis)
                .map_or(Ttl::Persistent, |ms| Ttl::Expires(Duration::from_millis(ms))),
        }
    }
}

/// Async Redis client
///
/// Cloning is cheap and clones share the pool and the counters.
#[derive(Clone)]
pub struct RedisClient {
    client: Client,
    pool: Pool,
    options: RedisOptions,
    counters: Arc<Counters>,
}

impl fmt::Debug for RedisClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedisClient")
            .field("options", &self.options)
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

impl RedisClient {
    /// Connect to the server described by `options`
    ///
    /// Opens `min_idle_conns` connections (at most `pool_size`) before
    /// returning, all within the dial timeout. At least one connection is
    /// always opened so an unreachable server fails here.
    pub async fn connect(options: RedisOptions) -> KvResult<Self> {
        let info = options.connection_info()?;
        info!(
            addr = %options.addr,
            db = options.db,
            pool_size = options.pool_size,
            "Creating Redis client"
        );

        let client = Client::open(info.clone())?;
        let pool = build_pool(info, &options)?;

        let warm = options.warm_conns().max(1);
        timeout(options.dial_timeout, async {
            let mut conns = Vec::with_capacity(warm);
            for _ in 0..warm {
                conns.push(pool.get().await.map_err(|e| pool_error(e, &options))?);
            }
            KvResult::Ok(())
        })
        .await
        .map_err(|_| KvError::Timeout(options.dial_timeout))??;

        info!(addr = %options.addr, idle_conns = warm, "Redis client connected");

        Ok(Self {
            client,
            pool,
            options,
            counters: Arc::new(Counters::default()),
        })
    }

    /// Connect with default options to `addr`
    pub async fn connect_addr(addr: impl Into<String>) -> KvResult<Self> {
        Self::connect(RedisOptions::new(addr)).await
    }

    /// Options the client was created with
    pub fn options(&self) -> &RedisOptions {
        &self.options
    }

    /// Pool state now and command counters since the client was created
    pub fn stats(&self) -> Stats {
        self.counters.snapshot(self.pool.status())
    }

    async fn connection(&self) -> KvResult<Connection> {
        self.pool.get().await.map_err(|e| {
            let err = pool_error(e, &self.options);
            if matches!(err, KvError::Timeout(_)) {
                self.counters.timeout();
                warn!(error = %err, "Timed out waiting for a Redis connection");
            } else {
                self.counters.error();
                debug!(error = %err, "Redis connection failed");
            }
            err
        })
    }

    async fn query<T: FromRedisValue>(&self, command: &Cmd) -> KvResult<T> {
        self.counters.command();
        let mut conn = self.connection().await?;
        let limit = self.options.read_timeout;

        match timeout(limit, command.query_async::<_, T>(&mut conn)).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                self.counters.error();
                debug!(error = %e, "Redis command failed");
                Err(e.into())
            }
            Err(_) => {
                self.counters.timeout();
                warn!(timeout_ms = limit.as_millis(), "Redis command timed out");
                Err(KvError::Timeout(limit))
            }
        }
    }

    /// Run a read that replies nil for a missing value
    async fn query_present<T: FromRedisValue>(&self, command: &Cmd) -> KvResult<T> {
        self.query::<Option<T>>(command).await?.ok_or_else(|| {
            self.counters.key_miss();
            KvError::KeyNotFound
        })
    }

    /// Check the connection
    pub async fn ping(&self) -> KvResult<()> {
        self.query::<String>(&cmd("PING")).await.map(|_| ())
    }

    /// Store a value, expiring after `expiration` unless it is `None` or zero
    pub async fn set<V: ToRedisArgs>(
        &self,
        key: &str,
        value: V,
        expiration: Option<Duration>,
    ) -> KvResult<()> {
        self.query(&set_cmd(key, value, expiration, None)).await
    }

    /// Fetch a string value
    pub async fn get(&self, key: &str) -> KvResult<String> {
        self.query_present(cmd("GET").arg(key)).await
    }

    /// Fetch a raw value
    pub async fn get_bytes(&self, key: &str) -> KvResult<Vec<u8>> {
        self.query_present(cmd("GET").arg(key)).await
    }

    /// Delete keys, returning how many existed
    pub async fn delete(&self, keys: &[&str]) -> KvResult<u64> {
        self.query(cmd("DEL").arg(keys)).await
    }

    /// Whether any of the keys exist
    pub async fn exists(&self, keys: &[&str]) -> KvResult<bool> {
        let count: u64 = self.query(cmd("EXISTS").arg(keys)).await?;
        Ok(count > 0)
    }

    /// Store a value encoded as JSON
    pub async fn set_json<T: Serialize + ?Sized>(
        &self,
        key: &str,
        value: &T,
        expiration: Option<Duration>,
    ) -> KvResult<()> {
        let encoded = serde_json::to_vec(value)?;
        self.set(key, encoded, expiration).await
    }

    /// Fetch and decode a JSON value
    pub async fn get_json<T: DeserializeOwned>(&self, key: &str) -> KvResult<T> {
        let raw = self.get_bytes(key).await?;
        Ok(serde_json::from_slice(&raw)?)
    }

    /// Increment an integer value, returning the new value
    pub async fn increment(&self, key: &str, by: i64) -> KvResult<i64> {
        self.query(&counter_cmd("INCR", "INCRBY", key, by)).await
    }

    /// Decrement an integer value, returning the new value
    pub async fn decrement(&self, key: &str, by: i64) -> KvResult<i64> {
        self.query(&counter_cmd("DECR", "DECRBY", key, by)).await
    }

    /// Set a key's expiry, returning whether the key exists
    pub async fn expire(&self, key: &str, expiration: Duration) -> KvResult<bool> {
        self.query(cmd("PEXPIRE").arg(key).arg(millis(expiration)))
            .await
    }

    /// Remaining lifetime of a key
    pub async fn ttl(&self, key: &str) -> KvResult<Ttl> {
        let millis: i64 = self.query(cmd("PTTL").arg(key)).await?;
        Ok(Ttl::from_millis(millis))
    }

    /// Store a value only if the key does not exist
    pub async fn set_nx<V: ToRedisArgs>(
        &self,
        key: &str,
        value: V,
        expiration: Option<Duration>,
    ) -> KvResult<bool> {
        let reply: Option<String> = self
            .query(&set_cmd(key, value, expiration, Some("NX")))
            .await?;
        Ok(reply.is_some())
    }

    /// Store a value only if the key already exists
    pub async fn set_xx<V: ToRedisArgs>(
        &self,
        key: &str,
        value: V,
        expiration: Option<Duration>,
    ) -> KvResult<bool> {
        let reply: Option<String> = self
            .query(&set_cmd(key, value, expiration, Some("XX")))
            .await?;
        Ok(reply.is_some())
    }

    /// Fetch several values at once; missing keys yield `None`
    pub async fn mget(&self, keys: &[&str]) -> KvResult<Vec<Option<String>>> {
        self.query(cmd("MGET").arg(keys)).await
    }

    /// Store several key/value pairs at once
    pub async fn mset<K: ToRedisArgs, V: ToRedisArgs>(&self, pairs: &[(K, V)]) -> KvResult<()> {
        self.query(cmd("MSET").arg(pairs)).await
    }

    /// Keys matching a glob pattern
    ///
    /// `KEYS` blocks the server while it walks the keyspace; prefer
    /// [`scan`](Self::scan) on large databases.
    pub async fn keys(&self, pattern: &str) -> KvResult<Vec<String>> {
        self.query(cmd("KEYS").arg(pattern)).await
    }

    /// One `SCAN` step, returning the keys found and the next cursor
    ///
    /// Iteration is complete when the returned cursor is zero.
    pub async fn scan(
        &self,
        cursor: u64,
        pattern: &str,
        count: usize,
    ) -> KvResult<(Vec<String>, u64)> {
        let (next, keys): (u64, Vec<String>) = self
            .query(
                cmd("SCAN")
                    .arg(cursor)
                    .arg("MATCH")
                    .arg(pattern)
                    .arg("COUNT")
                    .arg(count),
            )
            .await?;
        Ok((keys, next))
    }

    /// Set one hash field
    pub async fn hset<V: ToRedisArgs>(&self, key: &str, field: &str, value: V) -> KvResult<()> {
        self.query(cmd("HSET").arg(key).arg(field).arg(value)).await
    }

    /// Fetch one hash field
    pub async fn hget(&self, key: &str, field: &str) -> KvResult<String> {
        self.query_present(cmd("HGET").arg(key).arg(field)).await
    }

    /// Fetch every field of a hash
    pub async fn hget_all(&self, key: &str) -> KvResult<HashMap<String, String>> {
        self.query(cmd("HGETALL").arg(key)).await
    }

    /// Delete hash fields, returning how many existed
    pub async fn hdel(&self, key: &str, fields: &[&str]) -> KvResult<u64> {
        self.query(cmd("HDEL").arg(key).arg(fields)).await
    }

    /// Set several hash fields at once
    pub async fn hmset<F: ToRedisArgs, V: ToRedisArgs>(
        &self,
        key: &str,
        pairs: &[(F, V)],
    ) -> KvResult<()> {
        self.query(cmd("HSET").arg(key).arg(pairs)).await
    }

    /// Prepend values to a list, returning its new length
    pub async fn lpush<V: ToRedisArgs>(&self, key: &str, values: &[V]) -> KvResult<u64> {
        self.query(cmd("LPUSH").arg(key).arg(values)).await
    }

    /// Append values to a list, returning its new length
    pub async fn rpush<V: ToRedisArgs>(&self, key: &str, values: &[V]) -> KvResult<u64> {
        self.query(cmd("RPUSH").arg(key).arg(values)).await
    }

    /// Remove and return the first element of a list
    pub async fn lpop(&self, key: &str) -> KvResult<String> {
        self.query_present(cmd("LPOP").arg(key)).await
    }

    /// Remove and return the last element of a list
    pub async fn rpop(&self, key: &str) -> KvResult<String> {
        self.query_present(cmd("RPOP").arg(key)).await
    }

    /// Length of a list
    pub async fn llen(&self, key: &str) -> KvResult<u64> {
        self.query(cmd("LLEN").arg(key)).await
    }

    /// Elements of a list between two inclusive indices
    pub async fn lrange(&self, key: &str, start: i64, stop: i64) -> KvResult<Vec<String>> {
        self.query(cmd("LRANGE").arg(key).arg(start).arg(stop)).await
    }

    /// Add members to a set, returning how many were new
    pub async fn sadd<M: ToRedisArgs>(&self, key: &str, members: &[M]) -> KvResult<u64> {
        self.query(cmd("SADD").arg(key).arg(members)).await
    }

    /// Members of a set
    pub async fn smembers(&self, key: &str) -> KvResult<Vec<String>> {
        self.query(cmd("SMEMBERS").arg(key)).await
    }

    /// Whether a value is a member of a set
    pub async fn sis_member<M: ToRedisArgs>(&self, key: &str, member: M) -> KvResult<bool> {
        self.query(cmd("SISMEMBER").arg(key).arg(member)).await
    }

    /// Remove members from a set, returning how many were present
    pub async fn srem<M: ToRedisArgs>(&self, key: &str, members: &[M]) -> KvResult<u64> {
        self.query(cmd("SREM").arg(key).arg(members)).await
    }

    /// Add scored members to a sorted set, returning how many were new
    pub async fn zadd<M: ToRedisArgs>(&self, key: &str, members: &[(f64, M)]) -> KvResult<u64> {
        self.query(cmd("ZADD").arg(key).arg(members)).await
    }

    /// Members of a sorted set between two inclusive ranks
    pub async fn zrange(&self, key: &str, start: i64, stop: i64) -> KvResult<Vec<String>> {
        self.query(cmd("ZRANGE").arg(key).arg(start).arg(stop)).await
    }

    /// Members of a sorted set with a score between `min` and `max`
    ///
    /// Bounds use Redis syntax, so `-inf`, `+inf` and exclusive `(5` work.
    pub async fn zrange_by_score(&self, key: &str, min: &str, max: &str) -> KvResult<Vec<String>> {
        self.query(cmd("ZRANGEBYSCORE").arg(key).arg(min).arg(max))
            .await
    }

    /// Remove members from a sorted set, returning how many were present
    pub async fn zrem<M: ToRedisArgs>(&self, key: &str, members: &[M]) -> KvResult<u64> {
        self.query(cmd("ZREM").arg(key).arg(members)).await
    }

    /// Publish a message, returning how many subscribers received it
    pub async fn publish<M: ToRedisArgs>(&self, channel: &str, message: M) -> KvResult<u64> {
        self.query(cmd("PUBLISH").arg(channel).arg(message)).await
    }

    /// Subscribe to channels on a dedicated connection outside the pool
    pub async fn subscribe(&self, channels: &[&str]) -> KvResult<Subscription> {
        let pubsub = timeout(self.options.dial_timeout, async {
            Ok::<_, redis::RedisError>(self.client.get_async_connection().await?.into_pubsub())
        })
        .await
        .map_err(|_| KvError::Timeout(self.options.dial_timeout))??;
        let mut subscription = Subscription::new(pubsub);
        subscription.subscribe(channels).await?;
        debug!(?channels, "Subscribed to Redis channels");
        Ok(subscription)
    }
}

fn build_pool(info: ConnectionInfo, options: &RedisOptions) -> KvResult<Pool> {
    if options.pool_size == 0 {
        return Err(KvError::Config("pool size must be at least 1".to_string()));
    }

    Pool::builder(Manager::new(info)?)
        .max_size(options.pool_size)
        .runtime(Runtime::Tokio1)
        .create_timeout(Some(options.dial_timeout))
        .wait_timeout(Some(options.write_timeout))
        .build()
        .map_err(|e| KvError::Config(e.to_string()))
}

fn pool_error(error: PoolError, options: &RedisOptions) -> KvError {
    match error {
        PoolError::Backend(e) => KvError::Redis(e),
        PoolError::Timeout(_) => KvError::Timeout(options.write_timeout),
        other => KvError::Pool(other.to_string()),
    }
}

/// Expiry in whole milliseconds, `None` for no expiry
fn expiry_millis(expiration: Option<Duration>) -> Option<u64> {
    expiration
        .filter(|d| !d.is_zero())
        .map(|d| millis(d).max(1))
}

fn millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn set_cmd<V: ToRedisArgs>(
    key: &str,
    value: V,
    expiration: Option<Duration>,
    condition: Option<&str>,
) -> Cmd {
    let mut command = cmd("SET");
    command.arg(key).arg(value);
    if let Some(ms) = expiry_millis(expiration) {
        command.arg("PX").arg(ms);
    }
    if let Some(condition) = condition {
        command.arg(condition);
    }
    command
}

/// `INCR`/`DECR` for a step of one, the `BY` form otherwise
fn counter_cmd(single: &str, by_name: &str, key: &str, by: i64) -> Cmd {
    if by == 1 {
        let mut command = cmd(single);
        command.arg(key);
        command
    } else {
        let mut command = cmd(by_name);
        command.arg(key).arg(by);
        command
    }
}
