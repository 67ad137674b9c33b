//! Pagination utilities for Postlane API responses.

use serde::{Deserialize, Serialize};

/// Pagination block of a [`PagedEnvelope`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Current page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub per: u32,
    /// Total number of items across all pages.
    pub total: u64,
}

/// A page of results from the Postlane API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedEnvelope<T> {
    /// Always `true` on the wire.
    #[serde(default)]
    pub success: bool,
    /// The items on this page.
    pub data: Vec<T>,
    /// Where this page sits in the full result set.
    pub metadata: PageMetadata,
}

impl<T> PagedEnvelope<T> {
    /// Create a page from items and pagination info.
    #[must_use]
    pub fn new(data: Vec<T>, page: u32, per: u32, total: u64) -> Self {
        Self {
            success: true,
            data,
            metadata: PageMetadata { page, per, total },
        }
    }

    /// Whether pages after this one hold more items.
    #[must_use]
    pub fn has_more(&self) -> bool {
        u64::from(self.metadata.page) * u64::from(self.metadata.per) < self.metadata.total
    }

    /// Number of pages in the full result set.
    #[must_use]
    pub fn total_pages(&self) -> u64 {
        let per = u64::from(self.metadata.per.max(1));
        self.metadata.total.div_ceil(per)
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> PagedEnvelope<U> {
        PagedEnvelope {
            success: self.success,
            data: self.data.into_iter().map(f).collect(),
            metadata: self.metadata,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T> IntoIterator for PagedEnvelope<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a PagedEnvelope<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

/// Query parameters for paginated requests.
///
/// Field names and 1-based numbering go on the wire unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// Page number (1-indexed).
    pub page: u32,
    /// Number of items per page.
    pub per: u32,
}

impl PageParams {
    /// Create pagination params for a specific page.
    #[must_use]
    pub fn new(page: u32, per: u32) -> Self {
        Self { page, per }
    }
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: 1,
            per: crate::traits::DEFAULT_PAGE_SIZE,
        }
    }
}
