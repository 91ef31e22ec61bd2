// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Page and page-size arithmetic for list endpoints
//!
//! [`Pagination`] deserializes from a query string (missing parameters are
//! zero), is normalised with [`Pagination::set_default`], turns into an
//! offset/limit pair for the store, and records the total once it is known:
//!
//! ```
//! use pagination::Pagination;
//!
//! let mut page = Pagination::new(3, 0);
//! page.set_default();
//! assert_eq!((page.offset(), page.limit()), (40, 20));
//!
//! page.set_total(95);
//! assert_eq!(page.total_page, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when none is requested
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Page requested by a client plus totals reported back to it
///
/// `total_page` is only recomputed by [`set_total`](Self::set_total); changing
/// `page_size` afterwards leaves it stale until `set_total` is called again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    /// One-based page number
    pub page: i64,
    /// Items per page
    pub page_size: i64,
    /// Number of items across all pages
    pub total_data: i64,
    /// Number of pages
    pub total_page: i64,
}

impl Pagination {
    /// Pagination for a page and page size with no totals
    pub fn new(page: i64, page_size: i64) -> Self {
        Self {
            page,
            page_size,
            ..Self::default()
        }
    }

    /// Replace a zero page with 1 and a zero page size with 20
    ///
    /// Non-zero values, negatives included, are left as they are. Returns a
    /// copy of the updated value.
    pub fn set_default(&mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        *self
    }

    /// Maximum number of items to fetch
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    /// Number of items to skip: `(page - 1) * page_size`
    pub fn offset(&self) -> i64 {
        self.page.saturating_sub(1).saturating_mul(self.page_size)
    }

    /// Record the total item count and derive the page count
    ///
    /// The page count is the ceiling of `total_data / page_size`, or zero
    /// when `page_size` is zero. Returns a copy of the updated value.
    pub fn set_total(&mut self, total_data: i64) -> Self {
        self.total_data = total_data;
        self.total_page = total_data
            .saturating_add(self.page_size.saturating_sub(1))
            .checked_div(self.page_size)
            .unwrap_or(0);
        *self
    }
}
