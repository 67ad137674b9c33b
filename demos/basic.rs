//! Basic example demonstrating the Postlane API client.
//!
//! Run with:
//! ```
//! POSTLANE_API_KEY=your-key cargo run --example basic
//! ```

use postlane::{
    send_to_contacts, Contact, ContactEmail, ContactList, Create, Delete, List, NewContact,
    PortalSession, PortalSessionRequest, PostlaneClient,
};

#[tokio::main]
async fn main() -> postlane::Result<()> {
    // Initialize tracing for debugging (optional)
    tracing_subscriber::fmt::init();

    // Create client from environment variables
    println!("Creating Postlane client...");
    let client = PostlaneClient::from_env()?;
    println!("Connected to: {}", client.base_url());

    // List first page of contacts
    println!("\n--- Listing Contacts (first page) ---");
    let contacts = Contact::list_page(&client, 1, 10).await?;
    println!(
        "Showing {} of {} contacts",
        contacts.len(),
        contacts.metadata.total
    );

    for contact in &contacts {
        let name = contact.display_name().unwrap_or_else(|| "-".to_string());
        let status = if contact.subscribed { "subscribed" } else { "unsubscribed" };
        println!("  - {} ({}, {})", contact.email, name, status);
    }

    // List mailing lists
    println!("\n--- Listing Mailing Lists ---");
    let lists = ContactList::list_page(&client, 1, 10).await?;
    for list in &lists {
        println!("  - {} [{}] {} contacts", list.name, list.id, list.contact_count);
    }

    // Create, e-mail and remove a demo contact
    println!("\n--- Contact Round Trip ---");
    let email = "postlane-demo@example.com";
    let created = Contact::create(
        &client,
        NewContact::new(email)
            .first_name("Demo")
            .property("source", "basic example")
            .property("demoRuns", 1),
    )
    .await?;
    println!("Created contact {}", created.data.id);

    send_to_contacts(
        &client,
        &ContactEmail::new([email], "Hello from Postlane", "Hi {{firstName}}!").delay_seconds(60),
    )
    .await?;
    println!("Queued a welcome e-mail in 60 seconds");

    let session = PortalSession::create(
        &client,
        PortalSessionRequest::new(email, "https://example.com/account"),
    )
    .await?
    .into_data();
    println!("Preference portal: {} (expires {})", session.url, session.expires_at);

    Contact::delete(&client, email.to_string()).await?;
    println!("Deleted contact {email}");

    println!("\nDone!");
    Ok(())
}
