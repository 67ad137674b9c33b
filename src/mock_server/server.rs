//! Mock Postlane API server.
//!
//! Provides an axum-based HTTP server that simulates the Postlane API.

use axum::{
    middleware,
    routing::{get, patch, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use super::fixtures::{DefaultScenario, Fixtures};
use super::handlers;
use super::state::{MockState, SharedState};

/// A mock Postlane API server for testing.
///
/// The server runs in the background and can be used to test the client
/// against a realistic API implementation.
pub struct MockServer {
    /// The API base URL, including the version prefix.
    url: String,
    /// Handle to the server task.
    handle: JoinHandle<()>,
    /// Shared state that can be modified during tests.
    state: SharedState,
}

impl MockServer {
    /// Start a new mock server with default fixtures.
    ///
    /// The server listens on a random available port and returns immediately.
    /// Use `url()` to get the server's base URL.
    pub async fn start() -> Self {
        Self::with_state(Self::default_state()).await
    }

    /// Start a mock server with empty state.
    ///
    /// Useful when you want to control exactly what data is available.
    pub async fn start_empty() -> Self {
        Self::with_state(MockState::new()).await
    }

    /// Start a mock server with custom state.
    pub async fn with_state(state: MockState) -> Self {
        let shared_state = state.shared();
        let app = Self::create_router(shared_state.clone());

        // Bind to a random available port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to address");
        let addr = listener.local_addr().expect("Failed to get local address");

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Server error");
        });

        Self {
            url: format!("http://{}/v1", addr),
            handle,
            state: shared_state,
        }
    }

    /// Get the base URL of the mock API.
    ///
    /// Use this URL when creating a `PostlaneClient` for testing.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Get access to the server's shared state.
    ///
    /// This allows inspecting or modifying the mock data during a test.
    pub fn state(&self) -> SharedState {
        self.state.clone()
    }

    /// Shutdown the server.
    ///
    /// This aborts the server task.
    pub async fn shutdown(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }

    /// Create the default state with common test fixtures.
    fn default_state() -> MockState {
        Self::state_from_scenario(Fixtures::default_scenario())
    }

    /// Create state from a scenario.
    fn state_from_scenario(scenario: DefaultScenario) -> MockState {
        let mut state = MockState::new();

        for contact in scenario.contacts {
            state.contacts.insert(contact.email.clone(), contact);
        }

        for list in scenario.lists {
            state.lists.insert(list.id.clone(), list);
        }

        state
    }

    /// Create the axum router with all routes.
    fn create_router(state: SharedState) -> Router {
        let api = Router::new()
            // Contact routes
            .route("/contacts", post(handlers::create_contact))
            .route("/contacts", get(handlers::list_contacts))
            .route("/contacts/batch", post(handlers::create_contacts_batch))
            .route("/contacts/delete", post(handlers::delete_contact))
            .route("/contacts/:email", patch(handlers::update_contact))
            // List routes
            .route("/lists", get(handlers::list_lists))
            // E-mail routes
            .route("/emails/transactional", post(handlers::send_transactional))
            .route("/emails/contacts", post(handlers::send_to_contacts))
            .route("/emails/list", post(handlers::send_to_list))
            // Portal routes
            .route("/portal/sessions", post(handlers::create_portal_session))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                handlers::require_token,
            ));

        Router::new()
            .nest("/v1", api)
            // Health check
            .route("/health", get(health_check))
            .with_state(state)
    }
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Contact, List, PostlaneClient, PostlaneError, RequestError};

    #[tokio::test]
    async fn test_server_starts_and_responds() {
        let server = MockServer::start().await;
        let base = server.url().trim_end_matches("/v1").to_string();

        // Server should be accessible
        let response = reqwest::get(format!("{}/health", base))
            .await
            .expect("Failed to send request");

        assert!(response.status().is_success());
        assert_eq!(response.text().await.unwrap(), "ok");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_list_contacts_with_postlane_client() {
        let server = MockServer::start().await;
        let client = PostlaneClient::new("test-token", server.url()).unwrap();

        let page = Contact::list_page(&client, 1, 20)
            .await
            .expect("Failed to list contacts");

        assert_eq!(page.len(), 3);
        assert_eq!(page.data[0].email, "ada@example.com");

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_required_token_rejects_wrong_key() {
        let state = MockState::new().with_required_token("secret");
        let server = MockServer::with_state(state).await;
        let client = PostlaneClient::new("wrong", server.url()).unwrap();

        let err = Contact::list_page(&client, 1, 20).await.unwrap_err();

        match err {
            PostlaneError::Request(e) => assert_eq!(e, RequestError::new(401, "Unauthorized")),
            other => panic!("unexpected error: {other:?}"),
        }

        server.shutdown().await;
    }

    #[tokio::test]
    async fn test_empty_server() {
        let server = MockServer::start_empty().await;
        let client = PostlaneClient::new("test-token", server.url()).unwrap();

        let page = Contact::list_page(&client, 1, 20).await.unwrap();

        assert!(page.is_empty());
        assert_eq!(page.metadata.total, 0);

        server.shutdown().await;
    }
}
