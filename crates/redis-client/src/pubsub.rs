// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Publish/subscribe

use std::fmt;

use futures_util::{Stream, StreamExt};
use redis::{Msg, aio::PubSub};

use crate::error::KvResult;

/// Message received on a subscribed channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    /// Channel the message was published on
    pub channel: String,
    /// Raw payload
    pub payload: Vec<u8>,
}

impl Message {
    /// Payload as UTF-8, if it is valid
    pub fn payload_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.payload).ok()
    }
}

impl From<Msg> for Message {
    fn from(msg: Msg) -> Self {
        Self {
            channel: msg.get_channel_name().to_string(),
            payload: msg.get_payload_bytes().to_vec(),
        }
    }
}

/// Active subscription on its own connection
///
/// Returned by [`RedisClient::subscribe`](crate::RedisClient::subscribe).
/// Dropping it closes the connection.
pub struct Subscription {
    pubsub: PubSub,
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}

impl Subscription {
    pub(crate) fn new(pubsub: PubSub) -> Self {
        Self { pubsub }
    }

    /// Subscribe to more channels
    pub async fn subscribe(&mut self, channels: &[&str]) -> KvResult<()> {
        self.pubsub.subscribe(channels).await?;
        Ok(())
    }

    /// Stop listening on channels
    pub async fn unsubscribe(&mut self, channels: &[&str]) -> KvResult<()> {
        self.pubsub.unsubscribe(channels).await?;
        Ok(())
    }

    /// Wait for the next message, `None` once the connection is closed
    pub async fn next_message(&mut self) -> Option<Message> {
        let mut messages = std::pin::pin!(self.pubsub.on_message());
        messages.next().await.map(Message::from)
    }

    /// Turn the subscription into a stream of messages
    pub fn into_stream(self) -> impl Stream<Item = Message> {
        self.pubsub.into_on_message().map(Message::from)
    }
}
