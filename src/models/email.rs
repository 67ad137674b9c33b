//! E-mail sending operations.
//!
//! Sends are fire-and-acknowledge: the API answers with an
//! [`EmptyEnvelope`] once the message is queued.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::PostlaneClient;
use crate::envelope::EmptyEnvelope;
use crate::error::Result;

/// A one-off transactional e-mail to any address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionalEmail {
    /// Recipient address; need not be a contact.
    pub to: String,

    pub subject: String,

    /// HTML or plain-text body.
    pub body: String,

    /// Sender address; the project default when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,

    /// Sender display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

impl TransactionalEmail {
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
            from: None,
            name: None,
            reply_to: None,
        }
    }
}

/// When a personalized e-mail should go out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Delay {
    /// Send after this many seconds.
    #[serde(rename = "delaySeconds")]
    Seconds(u64),
    /// Send at this instant.
    #[serde(rename = "sendAt")]
    Until(DateTime<Utc>),
}

/// A personalized e-mail to one or more existing contacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEmail {
    /// Contact e-mail addresses; every address must belong to a contact.
    pub emails: Vec<String>,

    pub subject: String,

    pub body: String,

    /// Immediate when unset.
    #[serde(flatten)]
    pub delay: Option<Delay>,
}

impl ContactEmail {
    pub fn new(
        emails: impl IntoIterator<Item = impl Into<String>>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            emails: emails.into_iter().map(Into::into).collect(),
            subject: subject.into(),
            body: body.into(),
            delay: None,
        }
    }

    /// Delay delivery by `seconds`.
    #[must_use]
    pub fn delay_seconds(mut self, seconds: u64) -> Self {
        self.delay = Some(Delay::Seconds(seconds));
        self
    }

    /// Deliver at `at`.
    #[must_use]
    pub fn send_at(mut self, at: DateTime<Utc>) -> Self {
        self.delay = Some(Delay::Until(at));
        self
    }
}

/// A personalized e-mail to every contact on a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEmail {
    pub list_id: String,

    pub subject: String,

    pub body: String,
}

impl ListEmail {
    pub fn new(
        list_id: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            list_id: list_id.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Send a one-off transactional e-mail.
///
/// # Errors
///
/// Returns an error if the request fails.
#[tracing::instrument(skip(client, email), fields(to = %email.to))]
pub async fn send_transactional(
    client: &PostlaneClient,
    email: &TransactionalEmail,
) -> Result<EmptyEnvelope> {
    client.post("emails/transactional", email).await
}

/// Send a personalized e-mail to existing contacts, optionally delayed.
///
/// # Errors
///
/// Returns an error if the request fails or a recipient is not a contact.
#[tracing::instrument(skip(client, email), fields(recipients = email.emails.len()))]
pub async fn send_to_contacts(client: &PostlaneClient, email: &ContactEmail) -> Result<EmptyEnvelope> {
    client.post("emails/contacts", email).await
}

/// Send a personalized e-mail to every contact on a list.
///
/// # Errors
///
/// Returns an error if the request fails or the list does not exist.
#[tracing::instrument(skip(client, email), fields(list_id = %email.list_id))]
pub async fn send_to_list(client: &PostlaneClient, email: &ListEmail) -> Result<EmptyEnvelope> {
    client.post("emails/list", email).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_contact_email_without_delay() {
        let email = ContactEmail::new(["ada@example.com"], "Hi", "<p>Hello</p>");
        assert_eq!(
            serde_json::to_value(&email).unwrap(),
            json!({"emails": ["ada@example.com"], "subject": "Hi", "body": "<p>Hello</p>"})
        );
    }

    #[test]
    fn test_contact_email_delay_seconds() {
        let email = ContactEmail::new(["ada@example.com"], "Hi", "Hello").delay_seconds(600);
        let body = serde_json::to_value(&email).unwrap();
        assert_eq!(body["delaySeconds"], json!(600));
        assert!(body.get("sendAt").is_none());
    }

    #[test]
    fn test_contact_email_send_at_replaces_delay() {
        let at = Utc.with_ymd_and_hms(2024, 12, 24, 18, 0, 0).unwrap();
        let email = ContactEmail::new(["ada@example.com"], "Hi", "Hello")
            .delay_seconds(600)
            .send_at(at);
        let body = serde_json::to_value(&email).unwrap();
        assert_eq!(body["sendAt"], json!("2024-12-24T18:00:00Z"));
        assert!(body.get("delaySeconds").is_none());
    }

    #[test]
    fn test_transactional_email_camel_case() {
        let mut email = TransactionalEmail::new("ada@example.com", "Receipt", "Thanks");
        email.reply_to = Some("support@example.com".to_string());
        let body = serde_json::to_value(&email).unwrap();
        assert_eq!(body["replyTo"], json!("support@example.com"));
        assert!(body.get("from").is_none());
    }
}
