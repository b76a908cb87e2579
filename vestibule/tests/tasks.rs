mod common;

use self::common::{extract_token, Client};
use http::StatusCode;
use vestibule::Application;

fn client() -> Client {
    Client::new(Application::TaskManager, "/")
}

/// ID of the first task linked from the listing
///
/// Slashes in rendered links are escaped, so only the query part is searched for.
fn first_task_id(body: &str) -> String {
    let marker = "?id=";
    let start = body.find(marker).expect("no task in listing") + marker.len();
    body[start..start + 36].to_string()
}

async fn add_task(client: &mut Client, title: &str, description: &str) {
    let token = extract_token(&client.get("/add").await.body);
    let response = client
        .post(
            "/add",
            &[
                ("csrfToken", token.as_str()),
                ("title", title),
                ("description", description),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));
}

#[tokio::test]
async fn empty_listing() {
    let response = client().get("/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.contains("Nothing to do"));
}

#[tokio::test]
async fn add_task_flow() {
    let mut client = client();
    add_task(&mut client, "Buy milk", "Oat, not dairy").await;

    let listing = client.get("/").await;
    assert!(listing.body.contains("Task added"));
    assert!(listing.body.contains("Buy milk"));
    assert!(listing.body.contains("Oat, not dairy"));
}

#[tokio::test]
async fn add_requires_all_fields() {
    let mut client = client();
    let token = extract_token(&client.get("/add").await.body);

    let response = client
        .post(
            "/add",
            &[
                ("csrfToken", token.as_str()),
                ("title", "Buy milk"),
                ("description", "   "),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body, "All fields are required");
}

#[tokio::test]
async fn add_with_bad_token_redirects_back() {
    let mut client = client();
    let _ = client.get("/add").await;

    let response = client
        .post(
            "/add",
            &[
                ("csrfToken", "0000"),
                ("title", "Buy milk"),
                ("description", "Oat"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/add"));

    let page = client.get("/add").await;
    assert!(page.body.contains("Sorry, please send the form again."));
    assert!(client.get("/").await.body.contains("Nothing to do"));
}

#[tokio::test]
async fn edit_task_flow() {
    let mut client = client();
    add_task(&mut client, "Buy milk", "Oat").await;

    let id = first_task_id(&client.get("/").await.body);
    let page = client.get(&format!("/edit?id={id}")).await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains(r#"value="Buy milk""#));

    let token = extract_token(&page.body);
    let response = client
        .post(
            "/edit",
            &[
                ("csrfToken", token.as_str()),
                ("id", id.as_str()),
                ("title", "Buy more milk"),
                ("description", "Oat"),
                ("done", "1"),
            ],
        )
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location.as_deref(), Some("/"));

    let listing = client.get("/").await;
    assert!(listing.body.contains("Task updated"));
    assert!(listing.body.contains("Buy more milk"));
    assert!(listing.body.contains(r#"class="done""#));
}

#[tokio::test]
async fn edit_with_bad_token_returns_to_form() {
    let mut client = client();
    add_task(&mut client, "Buy milk", "Oat").await;
    let id = first_task_id(&client.get("/").await.body);

    let response = client
        .post(
            "/edit",
            &[
                ("id", id.as_str()),
                ("title", "Hijacked"),
                ("description", "Oat"),
            ],
        )
        .await;

    assert_eq!(response.status, StatusCode::SEE_OTHER);
    assert_eq!(response.location, Some(format!("/edit?id={id}")));
    assert!(!client.get("/").await.body.contains("Hijacked"));
}

#[tokio::test]
async fn editing_unknown_task_is_404() {
    let mut client = client();

    for uri in [
        "/edit",
        "/edit?id=",
        "/edit?id=not-a-uuid",
        "/edit?id=67e55044-10b1-426f-9247-bb680e5fe0c8",
    ] {
        let response = client.get(uri).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(response.body, "404 Not Found");
    }
}

#[tokio::test]
async fn delete_task_flow() {
    let mut client = client();
    add_task(&mut client, "Buy milk", "Oat").await;

    let listing = client.get("/").await;
    let id = first_task_id(&listing.body);
    let token = extract_token(&listing.body);

    let response = client
        .post("/delete", &[("csrfToken", token.as_str()), ("id", id.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::SEE_OTHER);

    let listing = client.get("/").await;
    assert!(listing.body.contains("Task deleted"));
    assert!(listing.body.contains("Nothing to do"));

    // The task is gone, so a second delete with a fresh token is a 404
    let token = extract_token(&client.get("/add").await.body);
    let response = client
        .post("/delete", &[("csrfToken", token.as_str()), ("id", id.as_str())])
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_is_post_only() {
    let response = client().get("/delete").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}
