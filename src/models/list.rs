//! Contact list model and trait implementations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::PostlaneClient;
use crate::error::{PostlaneError, Result};
use crate::pagination::{PageParams, PagedEnvelope};
use crate::traits::List;

/// A mailing list contacts can subscribe to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactList {
    /// List ID, as used in [`crate::ListEmail::list_id`].
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: Option<String>,

    /// Whether contacts can join the list from the preference portal.
    #[serde(default)]
    pub public: bool,

    /// Number of contacts on the list.
    #[serde(default)]
    pub contact_count: u64,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[async_trait]
impl List for ContactList {
    #[tracing::instrument(skip(client))]
    async fn list_page(client: &PostlaneClient, page: u32, per: u32) -> Result<PagedEnvelope<Self>> {
        if page == 0 {
            return Err(PostlaneError::InvalidPage);
        }

        client.get_with_query("lists", &PageParams::new(page, per)).await
    }
}
