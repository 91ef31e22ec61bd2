// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Integration tests against a live Redis server
//!
//! Run with `cargo test -p redis-client -- --ignored` and a server listening
//! on `REDIS_ADDR` (default `127.0.0.1:6379`). Every test uses its own key
//! prefix so the tests can share a database.

use std::time::Duration;

use redis_client::{KvError, RedisClient, RedisOptions, Ttl};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
    roles: Vec<String>,
}

async fn client() -> RedisClient {
    let addr = std::env::var("REDIS_ADDR").unwrap_or_else(|_| "127.0.0.1:6379".to_string());
    RedisClient::connect(RedisOptions::new(addr).with_db(15))
        .await
        .unwrap()
}

#[tokio::test]
async fn unreachable_server_fails_to_connect() {
    let options = RedisOptions::new("127.0.0.1:1").with_timeout(Duration::from_millis(500));

    let err = RedisClient::connect(options).await.unwrap_err();
    assert!(
        matches!(err, KvError::Redis(_) | KvError::Timeout(_)),
        "unexpected error: {err}"
    );
}

#[tokio::test]
async fn invalid_address_is_rejected_before_dialing() {
    let err = RedisClient::connect_addr("no-port").await.unwrap_err();
    assert!(matches!(err, KvError::Config(_)));
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn strings_and_missing_keys() {
    let client = client().await;
    client.ping().await.unwrap();

    client.set("it:str:name", "ada", None).await.unwrap();
    assert_eq!(client.get("it:str:name").await.unwrap(), "ada");
    assert_eq!(client.get_bytes("it:str:name").await.unwrap(), b"ada");
    assert!(client.exists(&["it:str:name"]).await.unwrap());

    assert_eq!(client.delete(&["it:str:name", "it:str:other"]).await.unwrap(), 1);
    assert!(matches!(
        client.get("it:str:name").await,
        Err(KvError::KeyNotFound)
    ));
    assert!(!client.exists(&["it:str:name"]).await.unwrap());
    assert!(client.stats().key_misses >= 1);
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn pool_opens_idle_connections_up_front() {
    let addr = std::env::var("REDIS_ADDR").unwrap_or_else(|_| "127.0.0.1:6379".to_string());
    let options = RedisOptions::new(addr)
        .with_db(15)
        .with_pool_size(4)
        .with_min_idle_conns(2);
    let client = RedisClient::connect(options).await.unwrap();

    let stats = client.stats();
    assert_eq!(stats.max_conns, 4);
    assert_eq!(stats.total_conns, 2);
    assert_eq!(stats.idle_conns, 2);

    client.ping().await.unwrap();
    let stats = client.stats();
    assert!(stats.total_conns <= 4);
    assert_eq!(stats.commands, 1);
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn json_values() {
    let client = client().await;
    let session = Session {
        user: "ada".into(),
        roles: vec!["admin".into()],
    };

    client
        .set_json("it:json:session", &session, Some(Duration::from_secs(30)))
        .await
        .unwrap();
    let loaded: Session = client.get_json("it:json:session").await.unwrap();
    assert_eq!(loaded, session);

    client.set("it:json:broken", "not json", None).await.unwrap();
    let err = client.get_json::<Session>("it:json:broken").await.unwrap_err();
    assert!(matches!(err, KvError::Json(_)));

    client
        .delete(&["it:json:session", "it:json:broken"])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn counters_and_expiry() {
    let client = client().await;
    client.delete(&["it:counter"]).await.unwrap();

    assert_eq!(client.increment("it:counter", 1).await.unwrap(), 1);
    assert_eq!(client.increment("it:counter", 10).await.unwrap(), 11);
    assert_eq!(client.decrement("it:counter", 1).await.unwrap(), 10);
    assert_eq!(client.decrement("it:counter", 4).await.unwrap(), 6);

    assert_eq!(client.ttl("it:counter").await.unwrap(), Ttl::Persistent);
    assert!(client.expire("it:counter", Duration::from_secs(60)).await.unwrap());
    assert!(matches!(
        client.ttl("it:counter").await.unwrap(),
        Ttl::Expires(d) if d <= Duration::from_secs(60)
    ));

    client.delete(&["it:counter"]).await.unwrap();
    assert_eq!(client.ttl("it:counter").await.unwrap(), Ttl::Missing);
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn conditional_and_bulk_writes() {
    let client = client().await;
    client.delete(&["it:cond", "it:bulk:a", "it:bulk:b"]).await.unwrap();

    assert!(!client.set_xx("it:cond", "x", None).await.unwrap());
    assert!(client.set_nx("it:cond", "first", None).await.unwrap());
    assert!(!client.set_nx("it:cond", "second", None).await.unwrap());
    assert!(client.set_xx("it:cond", "third", None).await.unwrap());
    assert_eq!(client.get("it:cond").await.unwrap(), "third");

    client
        .mset(&[("it:bulk:a", "1"), ("it:bulk:b", "2")])
        .await
        .unwrap();
    let values = client
        .mget(&["it:bulk:a", "it:bulk:missing", "it:bulk:b"])
        .await
        .unwrap();
    assert_eq!(values, vec![Some("1".into()), None, Some("2".into())]);

    let mut keys = client.keys("it:bulk:*").await.unwrap();
    keys.sort();
    assert_eq!(keys, vec!["it:bulk:a", "it:bulk:b"]);

    let mut scanned = Vec::new();
    let mut cursor = 0;
    loop {
        let (batch, next) = client.scan(cursor, "it:bulk:*", 100).await.unwrap();
        scanned.extend(batch);
        if next == 0 {
            break;
        }
        cursor = next;
    }
    scanned.sort();
    assert_eq!(scanned, keys);

    client.delete(&["it:cond", "it:bulk:a", "it:bulk:b"]).await.unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn hashes_lists_and_sets() {
    let client = client().await;
    client
        .delete(&["it:hash", "it:list", "it:set", "it:zset"])
        .await
        .unwrap();

    client.hset("it:hash", "name", "ada").await.unwrap();
    client
        .hmset("it:hash", &[("lang", "en"), ("tz", "UTC")])
        .await
        .unwrap();
    assert_eq!(client.hget("it:hash", "name").await.unwrap(), "ada");
    assert!(matches!(
        client.hget("it:hash", "missing").await,
        Err(KvError::KeyNotFound)
    ));
    assert_eq!(client.hget_all("it:hash").await.unwrap().len(), 3);
    assert_eq!(client.hdel("it:hash", &["tz", "nope"]).await.unwrap(), 1);

    assert_eq!(client.rpush("it:list", &["b", "c"]).await.unwrap(), 2);
    assert_eq!(client.lpush("it:list", &["a"]).await.unwrap(), 3);
    assert_eq!(client.llen("it:list").await.unwrap(), 3);
    assert_eq!(
        client.lrange("it:list", 0, -1).await.unwrap(),
        vec!["a", "b", "c"]
    );
    assert_eq!(client.lpop("it:list").await.unwrap(), "a");
    assert_eq!(client.rpop("it:list").await.unwrap(), "c");

    assert_eq!(client.sadd("it:set", &["x", "y"]).await.unwrap(), 2);
    assert!(client.sis_member("it:set", "x").await.unwrap());
    assert_eq!(client.srem("it:set", &["x"]).await.unwrap(), 1);
    assert_eq!(client.smembers("it:set").await.unwrap(), vec!["y"]);

    assert_eq!(
        client
            .zadd("it:zset", &[(3.0, "c"), (1.0, "a"), (2.0, "b")])
            .await
            .unwrap(),
        3
    );
    assert_eq!(
        client.zrange("it:zset", 0, -1).await.unwrap(),
        vec!["a", "b", "c"]
    );
    assert_eq!(
        client.zrange_by_score("it:zset", "(1", "+inf").await.unwrap(),
        vec!["b", "c"]
    );
    assert_eq!(client.zrem("it:zset", &["b"]).await.unwrap(), 1);

    client
        .delete(&["it:hash", "it:list", "it:set", "it:zset"])
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires a running Redis server"]
async fn publish_and_subscribe() {
    let client = client().await;
    let mut subscription = client.subscribe(&["it:events"]).await.unwrap();

    let receivers = client.publish("it:events", "deployed").await.unwrap();
    assert_eq!(receivers, 1);

    let message = tokio::time::timeout(Duration::from_secs(2), subscription.next_message())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(message.channel, "it:events");
    assert_eq!(message.payload_str(), Some("deployed"));
}
