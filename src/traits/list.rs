//! List trait for fetching collections of entities.

use async_trait::async_trait;

use crate::client::PostlaneClient;
use crate::error::Result;
use crate::pagination::PagedEnvelope;

/// Default page size for list operations.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Maximum pages to fetch (safety limit).
const MAX_PAGES: u32 = 1000;

/// List entities with pagination support.
///
/// # Example
///
/// ```ignore
/// use postlane::{PostlaneClient, Contact, List};
///
/// let client = PostlaneClient::from_env()?;
///
/// // Fetch a single page
/// let page = Contact::list_page(&client, 1, 50).await?;
///
/// // Fetch all pages
/// let all_contacts = Contact::list_all(&client).await?;
/// ```
#[async_trait]
pub trait List: Sized + Send {
    /// List a single page of entities.
    ///
    /// # Arguments
    ///
    /// * `client` - The Postlane API client
    /// * `page` - Page number (1-indexed)
    /// * `per` - Number of items per page
    ///
    /// # Errors
    ///
    /// Returns an error if `page` is 0 or the request fails.
    async fn list_page(client: &PostlaneClient, page: u32, per: u32) -> Result<PagedEnvelope<Self>>;

    /// List all entities (fetches all pages).
    ///
    /// Each page is a separate request; pages are fetched until the
    /// reported total is reached.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all(client: &PostlaneClient) -> Result<Vec<Self>> {
        let mut all_items = Vec::new();
        let mut page = 1;

        loop {
            let result = Self::list_page(client, page, DEFAULT_PAGE_SIZE).await?;
            let has_more = result.has_more();
            let items_count = result.len();
            all_items.extend(result.data);

            if !has_more || items_count == 0 {
                break;
            }
            page += 1;

            // Safety limit to prevent infinite loops
            if page > MAX_PAGES {
                tracing::warn!(
                    "Reached pagination limit of {} pages, stopping",
                    MAX_PAGES
                );
                break;
            }
        }

        Ok(all_items)
    }
}
