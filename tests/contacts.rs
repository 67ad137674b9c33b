//! Request/response tests for contact operations.
//!
//! Uses wiremock to check the wire format of each call.

use postlane::{
    Contact, ContactUpdate, Create, CreateMany, CustomPropertyValue, Delete, EmptyEnvelope, List,
    NewContact, PostlaneClient, PostlaneError, Update, MAX_CONTACT_BATCH,
};
use serde_json::json;
use wiremock::matchers::{bearer_token, body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn contact_json(id: &str, email: &str) -> serde_json::Value {
    json!({
        "id": id,
        "email": email,
        "subscribed": true,
        "properties": {},
        "lists": []
    })
}

#[tokio::test]
async fn test_create_contact_sends_authenticated_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts"))
        .and(bearer_token("test-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "firstName": "Ada",
            "properties": {
                "plan": "pro",
                "seats": 12.0,
                "vip": true,
                "renewsAt": "2025-01-01T00:00:00Z"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "contact_1",
                "email": "ada@example.com",
                "firstName": "Ada",
                "subscribed": true,
                "properties": {
                    "plan": "pro",
                    "seats": 12,
                    "vip": true,
                    "renewsAt": "2025-01-01T00:00:00Z"
                }
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let renews_at = "2025-01-01T00:00:00Z".parse::<chrono::DateTime<chrono::Utc>>().unwrap();
    let params = NewContact::new("ada@example.com")
        .first_name("Ada")
        .property("plan", "pro")
        .property("seats", 12)
        .property("vip", true)
        .property("renewsAt", renews_at);

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let created = Contact::create(&client, params).await.unwrap();

    assert!(created.success);
    assert_eq!(created.data.id, "contact_1");
    assert_eq!(
        created.data.property("renewsAt"),
        Some(&CustomPropertyValue::Timestamp(renews_at))
    );
    assert_eq!(created.data.property("seats"), Some(&CustomPropertyValue::Number(12.0)));
}

#[tokio::test]
async fn test_create_many_sends_bare_array() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts/batch"))
        .and(body_json(json!([
            {"email": "a@example.com"},
            {"email": "b@example.com", "subscribed": false}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let ack = Contact::create_many(
        &client,
        vec![
            NewContact::new("a@example.com"),
            NewContact::new("b@example.com").subscribed(false),
        ],
    )
    .await
    .unwrap();

    assert_eq!(ack, EmptyEnvelope::ok());
}

#[tokio::test]
async fn test_create_many_rejects_oversized_batch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let batch = (0..=MAX_CONTACT_BATCH)
        .map(|i| NewContact::new(format!("user{i}@example.com")))
        .collect();

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let err = Contact::create_many(&client, batch).await.unwrap_err();

    assert!(matches!(
        err,
        PostlaneError::BatchTooLarge { size, max } if size == MAX_CONTACT_BATCH + 1 && max == MAX_CONTACT_BATCH
    ));
}

#[tokio::test]
async fn test_update_contact_patches_by_encoded_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/contacts/ada%2Bnews%40example.com"))
        .and(body_json(json!({"lastName": "Lovelace"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "id": "contact_1",
                "email": "ada+news@example.com",
                "lastName": "Lovelace"
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let updated = Contact::update(
        &client,
        "ada+news@example.com".to_string(),
        ContactUpdate {
            last_name: Some("Lovelace".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.data.last_name.as_deref(), Some("Lovelace"));
    assert!(!updated.data.subscribed);
}

#[tokio::test]
async fn test_delete_contact_posts_email() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/contacts/delete"))
        .and(body_json(json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let ack = Contact::delete(&client, "ada@example.com".to_string())
        .await
        .unwrap();

    assert!(ack.success);
}

#[tokio::test]
async fn test_list_contacts_uses_page_and_per() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "1"))
        .and(query_param("per", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                contact_json("contact_1", "a@example.com"),
                contact_json("contact_2", "b@example.com"),
                contact_json("contact_3", "c@example.com")
            ],
            "metadata": {"page": 1, "per": 10, "total": 3}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let page = Contact::list_page(&client, 1, 10).await.unwrap();

    assert_eq!(page.metadata.total, 3);
    assert_eq!(page.len(), 3);
    assert!(!page.has_more());
    assert_eq!(page.data[2].email, "c@example.com");
}

#[tokio::test]
async fn test_list_all_walks_pages() {
    let mock_server = MockServer::start().await;

    let first: Vec<_> = (0..100)
        .map(|i| contact_json(&format!("contact_{i}"), &format!("u{i}@example.com")))
        .collect();

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": first,
            "metadata": {"page": 1, "per": 100, "total": 101}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/contacts"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [contact_json("contact_100", "u100@example.com")],
            "metadata": {"page": 2, "per": 100, "total": 101}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PostlaneClient::new("test-token", &mock_server.uri()).unwrap();
    let all = Contact::list_all(&client).await.unwrap();

    assert_eq!(all.len(), 101);
    assert_eq!(all[100].email, "u100@example.com");
}
