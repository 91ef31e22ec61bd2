// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Pool state and command counters

use std::sync::atomic::{AtomicU64, Ordering};

use deadpool_redis::Status;
use serde::Serialize;

/// Snapshot of the connection pool and the client's command counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Maximum number of connections the pool opens
    pub max_conns: usize,
    /// Connections currently open
    pub total_conns: usize,
    /// Open connections not in use
    pub idle_conns: usize,
    /// Commands issued
    pub commands: u64,
    /// Commands that failed with a driver error
    pub errors: u64,
    /// Commands that timed out waiting for a connection or a reply
    pub timeouts: u64,
    /// Reads that found no value
    pub key_misses: u64,
}

#[derive(Debug, Default)]
pub(crate) struct Counters {
    commands: AtomicU64,
    errors: AtomicU64,
    timeouts: AtomicU64,
    key_misses: AtomicU64,
}

impl Counters {
    pub(crate) fn command(&self) {
        self.commands.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn error(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn key_miss(&self) {
        self.key_misses.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self, pool: Status) -> Stats {
        Stats {
            max_conns: pool.max_size,
            total_conns: pool.size,
            idle_conns: usize::try_from(pool.available).unwrap_or(0),
            commands: self.commands.load(Ordering::Relaxed),
            errors: self.errors.load(Ordering::Relaxed),
            timeouts: self.timeouts.load(Ordering::Relaxed),
            key_misses: self.key_misses.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use deadpool_redis::{Manager, Pool, Runtime};

    use super::*;

    fn idle_pool(max_size: usize) -> Pool {
        Pool::builder(Manager::new("redis://127.0.0.1:1").unwrap())
            .max_size(max_size)
            .runtime(Runtime::Tokio1)
            .build()
            .unwrap()
    }

    #[test]
    fn snapshot_reports_pool_state() {
        let stats = Counters::default().snapshot(idle_pool(7).status());
        assert_eq!(
            stats,
            Stats {
                max_conns: 7,
                ..Stats::default()
            }
        );
    }

    #[test]
    fn snapshot_reflects_increments() {
        let pool = idle_pool(1);
        let counters = Counters::default();
        assert_eq!(counters.snapshot(pool.status()).commands, 0);

        counters.command();
        counters.command();
        counters.error();
        counters.timeout();
        counters.key_miss();
        counters.key_miss();

        assert_eq!(
            counters.snapshot(pool.status()),
            Stats {
                max_conns: 1,
                total_conns: 0,
                idle_conns: 0,
                commands: 2,
                errors: 1,
                timeouts: 1,
                key_misses: 2,
            }
        );
    }
}
