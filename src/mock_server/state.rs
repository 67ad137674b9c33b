//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Postlane API server.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;

use crate::{
    Contact, ContactEmail, ContactList, ContactUpdate, ListEmail, NewContact, PortalSession,
    TransactionalEmail,
};

/// State shared between the server task and the test.
pub type SharedState = Arc<RwLock<MockState>>;

/// An e-mail accepted by one of the send endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum SentEmail {
    Transactional(TransactionalEmail),
    Contacts(ContactEmail),
    List(ListEmail),
}

/// Shared state for the mock server.
///
/// Maps are ordered so paginated listings are stable.
#[derive(Debug, Default)]
pub struct MockState {
    /// Contacts indexed by e-mail address.
    pub contacts: BTreeMap<String, Contact>,

    /// Contact lists indexed by ID.
    pub lists: BTreeMap<String, ContactList>,

    /// Every e-mail accepted so far, in order.
    pub sent_emails: Vec<SentEmail>,

    /// Every portal session issued so far.
    pub portal_sessions: Vec<PortalSession>,

    /// Optional API key. If set, requests must carry it as a bearer token.
    pub required_token: Option<String>,

    id_counter: u64,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create state wrapped in Arc<RwLock> for sharing.
    pub fn shared(self) -> SharedState {
        Arc::new(RwLock::new(self))
    }

    /// Add a contact to the state.
    pub fn with_contact(mut self, contact: Contact) -> Self {
        self.contacts.insert(contact.email.clone(), contact);
        self
    }

    /// Add a contact list to the state.
    pub fn with_list(mut self, list: ContactList) -> Self {
        self.lists.insert(list.id.clone(), list);
        self
    }

    /// Set the required API key.
    pub fn with_required_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    /// Next value of the ID counter.
    pub fn next_id(&mut self) -> u64 {
        self.id_counter += 1;
        self.id_counter
    }

    /// Get a contact by e-mail address.
    pub fn get_contact(&self, email: &str) -> Option<&Contact> {
        self.contacts.get(email)
    }

    /// Store a new contact and return it as the API would.
    pub fn insert_contact(&mut self, params: NewContact) -> Contact {
        let now = Utc::now();
        let contact = Contact {
            id: format!("contact_{}", self.next_id()),
            email: params.email,
            first_name: params.first_name,
            last_name: params.last_name,
            subscribed: params.subscribed.unwrap_or(true),
            user_group: params.user_group,
            user_id: params.user_id,
            source: params.source.or_else(|| Some("API".to_string())),
            properties: params.properties,
            lists: params.lists,
            created_at: Some(now),
            updated_at: Some(now),
        };

        self.contacts.insert(contact.email.clone(), contact.clone());
        contact
    }

    /// Apply an update and return the updated contact.
    ///
    /// Properties are merged; every other set field replaces the old value.
    pub fn update_contact(&mut self, email: &str, params: ContactUpdate) -> Option<Contact> {
        let contact = self.contacts.get_mut(email)?;

        if let Some(first_name) = params.first_name {
            contact.first_name = Some(first_name);
        }
        if let Some(last_name) = params.last_name {
            contact.last_name = Some(last_name);
        }
        if let Some(subscribed) = params.subscribed {
            contact.subscribed = subscribed;
        }
        if let Some(user_group) = params.user_group {
            contact.user_group = Some(user_group);
        }
        if let Some(user_id) = params.user_id {
            contact.user_id = Some(user_id);
        }
        if let Some(lists) = params.lists {
            contact.lists = lists;
        }
        contact.properties.extend(params.properties);
        contact.updated_at = Some(Utc::now());

        Some(contact.clone())
    }

    /// Remove a contact.
    pub fn remove_contact(&mut self, email: &str) -> Option<Contact> {
        self.contacts.remove(email)
    }

    /// All contacts ordered by e-mail address.
    pub fn list_contacts(&self) -> Vec<Contact> {
        self.contacts.values().cloned().collect()
    }

    /// All lists ordered by ID, with member counts derived from contacts.
    pub fn list_lists(&self) -> Vec<ContactList> {
        self.lists
            .values()
            .map(|list| {
                let mut list = list.clone();
                list.contact_count = self
                    .contacts
                    .values()
                    .filter(|c| c.lists.contains(&list.id))
                    .count() as u64;
                list
            })
            .collect()
    }
}
