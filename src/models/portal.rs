//! Preference portal sessions.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::client::PostlaneClient;
use crate::envelope::DataEnvelope;
use crate::error::Result;
use crate::traits::Create;

/// How long a portal session URL stays valid after creation.
pub const PORTAL_SESSION_TTL: Duration = Duration::minutes(30);

/// A short-lived link that lets a contact manage their subscriptions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSession {
    /// URL to send the contact to.
    pub url: String,

    /// When the URL stops working.
    pub expires_at: DateTime<Utc>,
}

impl PortalSession {
    /// Session for `url` created at `created_at`.
    pub fn starting_at(url: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            url: url.into(),
            expires_at: created_at + PORTAL_SESSION_TTL,
        }
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }

    /// Time left before expiry, zero once expired.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> Duration {
        (self.expires_at - now).max(Duration::zero())
    }
}

/// Body of `POST /portal/sessions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalSessionRequest {
    /// Contact the session is for.
    pub email: String,

    /// Where the portal links back to when the contact is done.
    pub return_url: String,
}

impl PortalSessionRequest {
    pub fn new(email: impl Into<String>, return_url: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            return_url: return_url.into(),
        }
    }
}

#[async_trait]
impl Create for PortalSession {
    type Params = PortalSessionRequest;

    #[tracing::instrument(skip(client))]
    async fn create(
        client: &PostlaneClient,
        params: PortalSessionRequest,
    ) -> Result<DataEnvelope<Self>> {
        client.post("portal/sessions", &params).await
    }
}
