//! Contact model and trait implementations.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::PostlaneClient;
use crate::envelope::{DataEnvelope, EmptyEnvelope};
use crate::error::{PostlaneError, Result};
use crate::models::property::CustomPropertyValue;
use crate::pagination::{PageParams, PagedEnvelope};
use crate::traits::{Create, CreateMany, Delete, List, Update};

/// Largest batch accepted by `POST /contacts/batch`.
pub const MAX_CONTACT_BATCH: usize = 1000;

/// Custom properties keyed by property name.
pub type Properties = BTreeMap<String, CustomPropertyValue>;

/// A Postlane contact.
///
/// Contacts are identified by e-mail address for updates and deletes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Server-assigned contact ID.
    pub id: String,

    /// E-mail address.
    pub email: String,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    /// Whether the contact receives campaign e-mail.
    #[serde(default)]
    pub subscribed: bool,

    /// Segment the contact belongs to.
    #[serde(default)]
    pub user_group: Option<String>,

    /// Caller-side identifier for the contact.
    #[serde(default)]
    pub user_id: Option<String>,

    /// Where the contact came from (e.g. "API", "Form").
    #[serde(default)]
    pub source: Option<String>,

    /// Caller-defined properties.
    #[serde(default)]
    pub properties: Properties,

    /// IDs of mailing lists the contact is on.
    #[serde(default)]
    pub lists: Vec<String>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Contact {
    /// Full name, if any part of it is known.
    pub fn display_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            (Some(first), None) => Some(first.clone()),
            (None, Some(last)) => Some(last.clone()),
            (None, None) => None,
        }
    }

    /// Look up a custom property.
    pub fn property(&self, name: &str) -> Option<&CustomPropertyValue> {
        self.properties.get(name)
    }
}

/// Body of a contact create request.
///
/// # Example
///
/// ```
/// use postlane::NewContact;
///
/// let contact = NewContact::new("ada@example.com")
///     .first_name("Ada")
///     .property("plan", "pro")
///     .property("seats", 12);
/// assert_eq!(contact.properties.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewContact {
    pub email: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,

    /// Mailing list IDs to subscribe the contact to.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lists: Vec<String>,
}

impl NewContact {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    #[must_use]
    pub fn last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    #[must_use]
    pub fn subscribed(mut self, subscribed: bool) -> Self {
        self.subscribed = Some(subscribed);
        self
    }

    #[must_use]
    pub fn user_group(mut self, user_group: impl Into<String>) -> Self {
        self.user_group = Some(user_group.into());
        self
    }

    #[must_use]
    pub fn user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }

    /// Set a custom property, replacing any previous value.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<CustomPropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Subscribe the contact to a mailing list.
    #[must_use]
    pub fn list(mut self, list_id: impl Into<String>) -> Self {
        self.lists.push(list_id.into());
        self
    }
}

/// Parameters for updating a contact.
///
/// Only the fields that are set are sent. Properties are merged into the
/// existing ones server-side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscribed: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: Properties,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lists: Option<Vec<String>>,
}

/// Body of `POST /contacts/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteContact {
    pub email: String,
}

#[async_trait]
impl Create for Contact {
    type Params = NewContact;

    #[tracing::instrument(skip(client, params), fields(email = %params.email))]
    async fn create(client: &PostlaneClient, params: NewContact) -> Result<DataEnvelope<Self>> {
        client.post("contacts", &params).await
    }
}

#[async_trait]
impl CreateMany for Contact {
    type Params = NewContact;

    #[tracing::instrument(skip(client, params), fields(count = params.len()))]
    async fn create_many(client: &PostlaneClient, params: Vec<NewContact>) -> Result<EmptyEnvelope> {
        if params.len() > MAX_CONTACT_BATCH {
            return Err(PostlaneError::BatchTooLarge {
                size: params.len(),
                max: MAX_CONTACT_BATCH,
            });
        }

        client.post("contacts/batch", &params).await
    }
}

#[async_trait]
impl Update for Contact {
    type Id = String; // E-mail address
    type Params = ContactUpdate;

    #[tracing::instrument(skip(client, params))]
    async fn update(
        client: &PostlaneClient,
        email: String,
        params: Self::Params,
    ) -> Result<DataEnvelope<Self>> {
        let path = format!("contacts/{}", urlencoding::encode(&email));
        client.patch(&path, &params).await
    }
}

#[async_trait]
impl Delete for Contact {
    type Id = String; // E-mail address

    #[tracing::instrument(skip(client))]
    async fn delete(client: &PostlaneClient, email: String) -> Result<EmptyEnvelope> {
        client.post("contacts/delete", &DeleteContact { email }).await
    }
}

#[async_trait]
impl List for Contact {
    #[tracing::instrument(skip(client))]
    async fn list_page(client: &PostlaneClient, page: u32, per: u32) -> Result<PagedEnvelope<Self>> {
        if page == 0 {
            return Err(PostlaneError::InvalidPage);
        }

        client.get_with_query("contacts", &PageParams::new(page, per)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_contact_skips_unset_fields() {
        let body = serde_json::to_value(NewContact::new("ada@example.com").first_name("Ada")).unwrap();
        assert_eq!(body, json!({"email": "ada@example.com", "firstName": "Ada"}));
    }

    #[test]
    fn test_contact_decodes_mixed_properties() {
        let contact: Contact = serde_json::from_value(json!({
            "id": "c_1",
            "email": "ada@example.com",
            "subscribed": true,
            "properties": {
                "plan": "pro",
                "seats": 12,
                "trial": false,
                "renewsAt": "2025-01-01T00:00:00Z"
            }
        }))
        .unwrap();

        assert_eq!(contact.property("plan").and_then(|v| v.as_str()), Some("pro"));
        assert_eq!(contact.property("seats").and_then(|v| v.as_f64()), Some(12.0));
        assert_eq!(contact.property("trial").and_then(|v| v.as_bool()), Some(false));
        assert!(contact.property("renewsAt").and_then(|v| v.as_timestamp()).is_some());
        assert!(contact.lists.is_empty());
    }

    #[test]
    fn test_contact_rejects_nested_property() {
        let result = serde_json::from_value::<Contact>(json!({
            "id": "c_1",
            "email": "ada@example.com",
            "properties": {"address": {"city": "London"}}
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_display_name() {
        let mut contact: Contact =
            serde_json::from_value(json!({"id": "c_1", "email": "ada@example.com"})).unwrap();
        assert_eq!(contact.display_name(), None);

        contact.first_name = Some("Ada".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Ada"));

        contact.last_name = Some("Lovelace".to_string());
        assert_eq!(contact.display_name().as_deref(), Some("Ada Lovelace"));
    }

    #[test]
    fn test_contact_update_serializes_only_set_fields() {
        let update = ContactUpdate {
            subscribed: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&update).unwrap(), json!({"subscribed": false}));
    }
}
