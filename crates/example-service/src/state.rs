// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Shared handler state

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// One-based identifier
    pub id: u64,
    /// Display name
    pub name: String,
}

/// State cloned into every handler
#[derive(Debug, Clone)]
pub struct AppState {
    service_name: Arc<str>,
    items: Arc<[Item]>,
}

impl AppState {
    /// State with a catalog of `item_count` generated items
    pub fn new(service_name: impl Into<String>, item_count: u64) -> Self {
        let items = (1..=item_count)
            .map(|id| Item {
                id,
                name: format!("item-{id}"),
            })
            .collect();
        Self {
            service_name: Arc::from(service_name.into()),
            items,
        }
    }

    /// Name reported by the health endpoint
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Every item in id order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Item with the given id
    pub fn item(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }
}
