//! Mock Postlane API server for E2E testing.
//!
//! This module provides an in-memory mock server that simulates the Postlane
//! API for integration and end-to-end testing. Unlike wiremock which mocks at
//! the HTTP level per-test, this server maintains state across requests,
//! enabling realistic workflow testing.
//!
//! # Example
//!
//! ```ignore
//! use postlane::mock_server::MockServer;
//! use postlane::{Contact, List, PostlaneClient};
//!
//! #[tokio::test]
//! async fn test_workflow() {
//!     let server = MockServer::start().await;
//!     let client = PostlaneClient::new("test-token", server.url()).unwrap();
//!
//!     // Server comes with default fixtures
//!     let page = Contact::list_page(&client, 1, 10).await.unwrap();
//!     assert_eq!(page.metadata.total, 3);
//!
//!     server.shutdown().await;
//! }
//! ```

mod fixtures;
mod handlers;
mod server;
mod state;

pub use fixtures::{DefaultScenario, Fixtures};
pub use server::MockServer;
pub use state::{MockState, SentEmail, SharedState};
