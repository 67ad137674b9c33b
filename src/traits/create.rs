//! Create traits for adding new entities.

use async_trait::async_trait;

use crate::client::PostlaneClient;
use crate::envelope::{DataEnvelope, EmptyEnvelope};
use crate::error::Result;

/// Create a single entity.
///
/// # Example
///
/// ```ignore
/// use postlane::{PostlaneClient, Contact, Create, NewContact};
///
/// let client = PostlaneClient::from_env()?;
/// let created = Contact::create(&client, NewContact::new("ada@example.com")).await?;
/// println!("Created {}", created.data.id);
/// ```
#[async_trait]
pub trait Create: Sized + Send {
    /// Request body for the create call.
    type Params: Send;

    /// Create the entity and return it as stored by the API.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the entity.
    async fn create(client: &PostlaneClient, params: Self::Params) -> Result<DataEnvelope<Self>>;
}

/// Create several entities in one request.
///
/// The API acknowledges the batch without echoing the created entities.
#[async_trait]
pub trait CreateMany: Sized {
    /// Request body element for the batch.
    type Params: Send;

    /// Create all entities in a single round trip.
    ///
    /// # Errors
    ///
    /// Returns an error if the batch is too large or the request fails.
    async fn create_many(client: &PostlaneClient, params: Vec<Self::Params>) -> Result<EmptyEnvelope>;
}
