// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Connection options

use std::time::Duration;

use redis::{ConnectionAddr, ConnectionInfo, IntoConnectionInfo, RedisConnectionInfo};
use serde::Deserialize;

use crate::error::{KvError, KvResult};

/// Default dial timeout
pub const DEFAULT_DIAL_TIMEOUT: Duration = Duration::from_secs(5);
/// Default read timeout
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_secs(3);
/// Default write timeout
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_secs(3);
/// Default pool size
pub const DEFAULT_POOL_SIZE: usize = 10;
/// Default number of idle connections
pub const DEFAULT_MIN_IDLE_CONNS: usize = 5;

/// Options for [`RedisClient`](crate::RedisClient)
///
/// `addr` is either `host:port` or a full `redis://` URL. When a URL is used,
/// a non-empty `password` and a non-zero `db` set here take precedence over
/// the ones in the URL.
///
/// `pool_size` caps the number of open connections and `min_idle_conns` of
/// them are opened when the client connects. Waiting for a free connection
/// is bounded by `write_timeout`, the reply by `read_timeout`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RedisOptions {
    /// Server address
    pub addr: String,
    /// Password, empty for none
    pub password: String,
    /// Database index
    pub db: i64,
    /// Bound on establishing the connection
    #[serde(with = "millis")]
    pub dial_timeout: Duration,
    /// Bound on waiting for a command reply
    #[serde(with = "millis")]
    pub read_timeout: Duration,
    /// Bound on getting a pooled connection to send a command on
    #[serde(with = "millis")]
    pub write_timeout: Duration,
    /// Maximum number of open connections
    pub pool_size: usize,
    /// Connections opened up front and left idle in the pool
    pub min_idle_conns: usize,
}

impl Default for RedisOptions {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:6379".to_string(),
            password: String::new(),
            db: 0,
            dial_timeout: DEFAULT_DIAL_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            write_timeout: DEFAULT_WRITE_TIMEOUT,
            pool_size: DEFAULT_POOL_SIZE,
            min_idle_conns: DEFAULT_MIN_IDLE_CONNS,
        }
    }
}

impl RedisOptions {
    /// Default options for the given address
    pub fn new(addr: impl Into<String>) -> Self {
        Self {
            addr: addr.into(),
            ..Self::default()
        }
    }

    /// Set the password
    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    /// Select the database index
    pub fn with_db(mut self, db: i64) -> Self {
        self.db = db;
        self
    }

    /// Set the pool size
    pub fn with_pool_size(mut self, size: usize) -> Self {
        self.pool_size = size;
        self
    }

    /// Set the number of idle connections
    pub fn with_min_idle_conns(mut self, conns: usize) -> Self {
        self.min_idle_conns = conns;
        self
    }

    /// Set the dial, read and write timeouts at once
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.dial_timeout = timeout;
        self.read_timeout = timeout;
        self.write_timeout = timeout;
        self
    }

    /// Idle connections to open on connect, never more than the pool holds
    pub(crate) fn warm_conns(&self) -> usize {
        self.min_idle_conns.min(self.pool_size)
    }

    /// Resolve the options into driver connection info
    pub(crate) fn connection_info(&self) -> KvResult<ConnectionInfo> {
        let addr = self.addr.trim();
        if addr.is_empty() {
            return Err(KvError::Config("address is empty".to_string()));
        }

        let mut info = if addr.contains("://") {
            addr.into_connection_info()?
        } else {
            let (host, port) = addr
                .rsplit_once(':')
                .ok_or_else(|| KvError::Config(format!("address {addr} is missing a port")))?;
            let port = port
                .parse::<u16>()
                .map_err(|e| KvError::Config(format!("invalid port in {addr}: {e}")))?;
            ConnectionInfo {
                addr: ConnectionAddr::Tcp(host.to_string(), port),
                redis: RedisConnectionInfo::default(),
            }
        };

        if !self.password.is_empty() {
            info.redis.password = Some(self.password.clone());
        }
        if self.db != 0 {
            info.redis.db = self.db;
        }
        Ok(info)
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
