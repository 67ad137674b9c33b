//! Test data fixtures for the mock server.
//!
//! Provides factory functions for creating realistic test data.

use chrono::{TimeZone, Utc};

use crate::{Contact, ContactList, CustomPropertyValue, Properties};

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Data the default mock server starts with.
pub struct DefaultScenario {
    pub contacts: Vec<Contact>,
    pub lists: Vec<ContactList>,
}

impl Fixtures {
    // =========================================================================
    // Contact Fixtures
    // =========================================================================

    /// Create a subscribed contact with required fields only.
    pub fn contact(email: &str) -> Contact {
        let created = Utc.with_ymd_and_hms(2024, 1, 15, 10, 0, 0).unwrap();
        Contact {
            id: format!("contact_{}", email.split('@').next().unwrap_or(email)),
            email: email.to_string(),
            first_name: None,
            last_name: None,
            subscribed: true,
            user_group: None,
            user_id: None,
            source: Some("API".to_string()),
            properties: Properties::new(),
            lists: vec![],
            created_at: Some(created),
            updated_at: Some(created),
        }
    }

    /// Create a named contact.
    pub fn named_contact(email: &str, first_name: &str, last_name: &str) -> Contact {
        let mut contact = Self::contact(email);
        contact.first_name = Some(first_name.to_string());
        contact.last_name = Some(last_name.to_string());
        contact
    }

    /// Create a contact subscribed to one list.
    pub fn contact_on_list(email: &str, list_id: &str) -> Contact {
        let mut contact = Self::contact(email);
        contact.lists.push(list_id.to_string());
        contact
    }

    // =========================================================================
    // List Fixtures
    // =========================================================================

    /// Create a public contact list.
    pub fn list(id: &str, name: &str) -> ContactList {
        ContactList {
            id: id.to_string(),
            name: name.to_string(),
            description: None,
            public: true,
            contact_count: 0,
            created_at: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        }
    }

    // =========================================================================
    // Scenarios
    // =========================================================================

    /// Three contacts and two lists.
    pub fn default_scenario() -> DefaultScenario {
        let mut ada = Self::named_contact("ada@example.com", "Ada", "Lovelace");
        ada.lists.push("list_newsletter".to_string());
        ada.properties
            .insert("plan".to_string(), CustomPropertyValue::Text("pro".to_string()));
        ada.properties
            .insert("seats".to_string(), CustomPropertyValue::Number(5.0));

        let mut grace = Self::named_contact("grace@example.com", "Grace", "Hopper");
        grace.lists.push("list_newsletter".to_string());
        grace.lists.push("list_product".to_string());
        grace.properties.insert(
            "trialEndsAt".to_string(),
            CustomPropertyValue::Timestamp(Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap()),
        );

        let mut alan = Self::named_contact("alan@example.com", "Alan", "Turing");
        alan.subscribed = false;
        alan.properties
            .insert("beta".to_string(), CustomPropertyValue::Boolean(true));

        let mut product = Self::list("list_product", "Product updates");
        product.description = Some("Release notes and changelogs".to_string());

        DefaultScenario {
            contacts: vec![ada, grace, alan],
            lists: vec![Self::list("list_newsletter", "Newsletter"), product],
        }
    }
}
