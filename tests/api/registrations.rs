use reqwest::StatusCode;

use tempfile::TempDir;

use eventbook::model::Registration;
use eventbook::repo::RegistrationStore;

use crate::helpers::{NewRegistration, TestApp};

#[tokio::test]
async fn register_returns_created_for_valid_request() {
    let app = TestApp::spawn().await;

    let new_registration = NewRegistration::new("Test Attendee", "test@test.com", "evt-1");

    let res = app
        .registration_create(&new_registration)
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::CREATED, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "You are registered successfully!");

    let stored = app.stored_registrations().await;
    assert_eq!(1, stored.len());
    assert_eq!("Test Attendee", stored[0].name);
    assert_eq!("test@test.com", stored[0].email);
    assert_eq!("evt-1", stored[0].event_id);
    assert_eq!(body["registration"]["id"], stored[0].id.to_string());
}

#[tokio::test]
async fn register_returns_bad_request_for_invalid_data() {
    let app = TestApp::spawn().await;

    let test_cases: Vec<(&str, NewRegistration, &str)> = vec![
        (
            "missing email",
            NewRegistration {
                name: Some("Test name".into()),
                email: None,
                event_id: Some("evt-1".into()),
            },
            "email",
        ),
        (
            "missing name",
            NewRegistration {
                name: None,
                email: Some("test@test.com".into()),
                event_id: Some("evt-1".into()),
            },
            "name",
        ),
        (
            "missing event id",
            NewRegistration {
                name: Some("Test name".into()),
                email: Some("test@test.com".into()),
                event_id: None,
            },
            "eventId",
        ),
        (
            "one character name",
            NewRegistration::new("T", "test@test.com", "evt-1"),
            "name",
        ),
        (
            "malformed email",
            NewRegistration::new("Test name", "not-an-email", "evt-1"),
            "email",
        ),
    ];

    for (desc, new_registration, field) in test_cases {
        let res = app
            .registration_create(&new_registration)
            .await
            .expect("Failed to execute request");

        assert_eq!(
            StatusCode::BAD_REQUEST,
            res.status(),
            "API did not fail when payload was {}",
            desc
        );

        let body: serde_json::Value = res.json().await.expect("Failed to parse response");
        assert!(
            body["errors"][field].is_string(),
            "No message for {} when payload was {}",
            field,
            desc
        );
    }

    assert!(app.stored_bytes().is_none());
}

#[tokio::test]
async fn register_reports_every_invalid_field() {
    let app = TestApp::spawn().await;

    let res = app
        .registration_create(&NewRegistration::new("T", "nope", " "))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(body["errors"]["name"], "Name must be at least 2 characters.");
    assert_eq!(body["errors"]["email"], "Please enter a valid email address.");
    assert_eq!(body["errors"]["eventId"], "Event id is required.");
}

#[tokio::test]
async fn register_rejects_non_form_payloads() {
    let app = TestApp::spawn().await;

    let res = app
        .request(reqwest::Method::POST, "registrations")
        .header("Content-Type", "text/plain")
        .body("name=Test")
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::BAD_REQUEST, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn register_leaves_store_unchanged_for_invalid_data() {
    let app = TestApp::spawn().await;

    let res = app
        .registration_create(&NewRegistration::new("Test name", "a@b.com", "evt-1"))
        .await
        .expect("Failed to execute request");
    assert!(res.status().is_success());

    let before = app.stored_bytes().expect("Store was not written");

    let res = app
        .registration_create(&NewRegistration::new("X", "b@b.com", "evt-1"))
        .await
        .expect("Failed to execute request");
    assert!(res.status().is_client_error());

    assert_eq!(Some(before), app.stored_bytes());
}

#[tokio::test]
async fn register_returns_conflict_for_duplicate_registration() {
    let app = TestApp::spawn().await;

    let new_registration = NewRegistration::new("Test name", "a@b.com", "evt-1");

    let res = app
        .registration_create(&new_registration)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, res.status());

    let res = app
        .registration_create(&new_registration)
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CONFLICT, res.status());

    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(
        body["message"],
        "This email is already registered for this event."
    );

    assert_eq!(1, app.stored_registrations().await.len());
}

#[tokio::test]
async fn register_allows_same_email_for_different_events() {
    let app = TestApp::spawn().await;

    for event_id in ["evt-1", "evt-2"] {
        let res = app
            .registration_create(&NewRegistration::new("Test name", "a@b.com", event_id))
            .await
            .expect("Failed to execute request");
        assert_eq!(StatusCode::CREATED, res.status());
    }

    let stored = app.stored_registrations().await;
    assert_eq!(2, stored.len());
    assert_ne!(stored[0].id, stored[1].id);
}

#[tokio::test]
async fn register_keeps_every_concurrent_registration() {
    let app = TestApp::spawn().await;

    let tasks: Vec<_> = (0..10)
        .map(|i| {
            let client = app.client.clone();
            let url = app.url("registrations");
            tokio::spawn(async move {
                let new_registration =
                    NewRegistration::new("Test name", &format!("user{}@test.com", i), "evt-1");
                client.post(url).form(&new_registration).send().await
            })
        })
        .collect();

    for task in tasks {
        let res = task
            .await
            .expect("Request task panicked")
            .expect("Failed to execute request");
        assert_eq!(StatusCode::CREATED, res.status());
    }

    assert_eq!(10, app.stored_registrations().await.len());
}

#[tokio::test]
async fn registrations_are_listed_for_an_event() {
    let app = TestApp::spawn().await;

    for (email, event_id) in [("a@b.com", "evt-1"), ("a@b.com", "evt-2"), ("c@d.com", "evt-1")] {
        app.registration_create(&NewRegistration::new("Test name", email, event_id))
            .await
            .expect("Failed to execute request");
    }

    let res = app
        .registrations_for_event("evt-1")
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::OK, res.status());

    let listed: Vec<Registration> = res.json().await.expect("Failed to parse response");
    let emails: Vec<_> = listed.iter().map(|r| r.email.as_str()).collect();
    assert_eq!(vec!["a@b.com", "c@d.com"], emails);
}

#[tokio::test]
async fn register_keeps_punctuated_names_and_email_case() {
    let app = TestApp::spawn().await;

    let res = app
        .registration_create(&NewRegistration::new(
            "Jane (Janie) Doe",
            "Jane.Doe@Example.com",
            "evt-1",
        ))
        .await
        .expect("Failed to execute request");
    assert_eq!(StatusCode::CREATED, res.status());

    let stored = app.stored_registrations().await;
    assert_eq!(stored[0].name, "Jane (Janie) Doe");
    assert_eq!(stored[0].email, "Jane.Doe@Example.com");
}

#[cfg(target_os = "linux")]
#[tokio::test]
async fn register_returns_server_error_when_store_cannot_be_written() {
    let store_dir = TempDir::new().expect("Failed to create store directory");
    // procfs reports the file as missing but refuses new files
    let store = RegistrationStore::new("/proc/self/registeredUsers.json");
    let app = TestApp::spawn_with_store(store_dir, store).await;

    let res = app
        .registration_create(&NewRegistration::new("Test name", "a@b.com", "evt-1"))
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to save registration.");
}

#[tokio::test]
async fn listing_returns_server_error_for_a_malformed_store() {
    let app = TestApp::spawn().await;

    let path = app.store.path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, "not json").unwrap();

    let res = app
        .registrations_for_event("evt-1")
        .await
        .expect("Failed to execute request");

    assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, res.status());
    let body: serde_json::Value = res.json().await.expect("Failed to parse response");
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Failed to load registrations.");
    assert_eq!(Some(b"not json".to_vec()), app.stored_bytes());
}
