//! Update trait for modifying entities.

use async_trait::async_trait;

use crate::client::PostlaneClient;
use crate::envelope::DataEnvelope;
use crate::error::Result;

/// Update an existing entity.
///
/// Implement this trait for entity types that can be modified
/// after creation.
///
/// # Example
///
/// ```ignore
/// use postlane::{PostlaneClient, Contact, ContactUpdate, Update};
///
/// let client = PostlaneClient::from_env()?;
/// let updated = Contact::update(
///     &client,
///     "ada@example.com".to_string(),
///     ContactUpdate {
///         first_name: Some("Ada".to_string()),
///         ..Default::default()
///     },
/// ).await?;
/// ```
#[async_trait]
pub trait Update: Sized + Send {
    /// The ID type for this entity.
    type Id: Send;

    /// Parameters for the update.
    type Params: Send;

    /// Update the entity and return the updated version.
    ///
    /// # Arguments
    ///
    /// * `client` - The Postlane API client
    /// * `id` - The entity identifier
    /// * `params` - Update parameters
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update(
        client: &PostlaneClient,
        id: Self::Id,
        params: Self::Params,
    ) -> Result<DataEnvelope<Self>>;
}
