//! Delete trait for removing entities.

use async_trait::async_trait;

use crate::client::PostlaneClient;
use crate::envelope::EmptyEnvelope;
use crate::error::Result;

/// Delete an existing entity.
///
/// # Example
///
/// ```ignore
/// use postlane::{PostlaneClient, Contact, Delete};
///
/// let client = PostlaneClient::from_env()?;
/// Contact::delete(&client, "ada@example.com".to_string()).await?;
/// ```
#[async_trait]
pub trait Delete: Sized {
    /// The ID type for this entity.
    type Id: Send;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn delete(client: &PostlaneClient, id: Self::Id) -> Result<EmptyEnvelope>;
}
