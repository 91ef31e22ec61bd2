// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP handlers

use axum::{
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    response::Response,
};
use pagination::Pagination;
use response::{ApiError, ResponseResult};
use serde::Serialize;
use serde_json::json;

use crate::state::{AppState, Item};

/// Largest page a client may request
pub const MAX_PAGE_SIZE: i64 = 100;

/// Body of a list response
#[derive(Debug, Serialize)]
pub struct ItemPage<'a> {
    /// Items on the requested page
    pub items: &'a [Item],
    /// Request echoed back with totals
    pub pagination: Pagination,
}

/// Liveness check
pub async fn health(State(state): State<AppState>) -> ResponseResult {
    response::success(json!({
        "status": "ok",
        "service": state.service_name(),
    }))
}

/// One page of the catalog
///
/// Missing `page` and `page_size` default to 1 and 20. Malformed values are
/// answered with a 400 envelope.
pub async fn list_items(
    State(state): State<AppState>,
    query: Result<Query<Pagination>, QueryRejection>,
) -> Result<Response, ApiError> {
    let Query(mut page) = query.map_err(|e| ApiError::bad_request(e.body_text()))?;
    page.set_default();
    if page.page < 1 || page.page_size < 1 {
        return Err(ApiError::bad_request("page and page_size must be positive"));
    }
    if page.page_size > MAX_PAGE_SIZE {
        return Err(ApiError::bad_request(format!(
            "page_size must not exceed {MAX_PAGE_SIZE}"
        )));
    }

    let all = state.items();
    page.set_total(i64::try_from(all.len()).unwrap_or(i64::MAX));

    let start = usize::try_from(page.offset()).unwrap_or(usize::MAX).min(all.len());
    let end = start
        .saturating_add(usize::try_from(page.limit()).unwrap_or(0))
        .min(all.len());

    logger::debug()
        .i64("page", page.page)
        .i64("page_size", page.page_size)
        .i64("total_data", page.total_data)
        .msg("listing items");

    response::success(ItemPage {
        items: &all[start..end],
        pagination: page,
    })
    .map_err(ApiError::internal)
}

/// A single item by id
pub async fn get_item(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Response, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::bad_request(e.body_text()))?;
    let Some(item) = state.item(id) else {
        logger::info().u64("item_id", id).msg("item not found");
        return Err(ApiError::not_found(format!("item {id} not found")));
    };
    response::success(item).map_err(ApiError::internal)
}
