//! Postlane API client library.
//!
//! A Rust library for the Postlane transactional e-mail and contact
//! management REST API, using a trait-based architecture where each
//! operation (Create, Update, Delete, List) is defined as a trait that
//! entity types implement.
//!
//! # Quick Start
//!
//! ```no_run
//! use postlane::{Contact, Create, Delete, List, NewContact, PostlaneClient};
//!
//! #[tokio::main]
//! async fn main() -> postlane::Result<()> {
//!     // Create client from environment variables
//!     let client = PostlaneClient::from_env()?;
//!
//!     // Add a contact with a custom property
//!     let created = Contact::create(
//!         &client,
//!         NewContact::new("ada@example.com").first_name("Ada").property("plan", "pro"),
//!     )
//!     .await?;
//!     println!("Created contact {}", created.data.id);
//!
//!     // List the first page of contacts
//!     let page = Contact::list_page(&client, 1, 10).await?;
//!     println!("{} contacts in total", page.metadata.total);
//!
//!     // Remove it again
//!     Contact::delete(&client, "ada@example.com".to_string()).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Responses
//!
//! Every call resolves to one of three envelopes: [`DataEnvelope`],
//! [`EmptyEnvelope`] or [`PagedEnvelope`]. Non-2xx responses become
//! [`PostlaneError::Request`] carrying a [`RequestError`] with the status
//! code and the API's reason.
//!
//! # Configuration
//!
//! The client reads configuration from environment variables:
//!
//! - `POSTLANE_API_KEY` (required) - Your Postlane API key
//! - `POSTLANE_API_URL` (optional) - Base URL (defaults to `https://api.postlane.com/v1`)

mod client;
mod envelope;
mod error;
mod models;
mod pagination;
mod traits;

#[cfg(feature = "test-server")]
pub mod mock_server;

// Re-export core types
pub use client::{PostlaneClient, DEFAULT_API_URL, MAX_RESPONSE_BYTES, REQUEST_TIMEOUT};
pub use envelope::{DataEnvelope, EmptyEnvelope, ErrorEnvelope};
pub use error::{PostlaneError, RequestError, Result, UNKNOWN_REASON};
pub use pagination::{PageMetadata, PageParams, PagedEnvelope};

// Re-export traits
pub use traits::{Create, CreateMany, Delete, List, Update, DEFAULT_PAGE_SIZE};

// Re-export models
pub use models::{
    // Contact types
    Contact,
    ContactUpdate,
    DeleteContact,
    NewContact,
    Properties,
    MAX_CONTACT_BATCH,
    // Custom properties
    CustomPropertyValue,
    // List types
    ContactList,
    // E-mail types
    ContactEmail,
    Delay,
    ListEmail,
    TransactionalEmail,
    // Portal types
    PortalSession,
    PortalSessionRequest,
    PORTAL_SESSION_TTL,
};

// Re-export convenience functions
pub use models::{send_to_contacts, send_to_list, send_transactional};
