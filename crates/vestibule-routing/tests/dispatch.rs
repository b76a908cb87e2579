use axum::{body::Body, Router};
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;
use vestibule_routing::{Dispatcher, RequestContext, RouteTable};

async fn index() -> &'static str {
    "index"
}

async fn contact_form(context: RequestContext) -> String {
    format!("form posts to {}", context.url_for("contact"))
}

async fn contact_submit() -> (StatusCode, &'static str) {
    (StatusCode::ACCEPTED, "submitted")
}

fn router(base_path: &str) -> Router {
    let routes = RouteTable::new()
        .get("index", index)
        .get("contact", contact_form)
        .post("contact", contact_submit);

    Dispatcher::new(routes, base_path).into_router()
}

async fn send(router: Router, method: &str, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn unknown_route_is_404() {
    let (status, body) = send(router("/"), "GET", "/foobar").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "404 Not Found");
}

#[tokio::test]
async fn disallowed_methods_are_404() {
    for method in ["PUT", "DELETE", "PATCH", "delete", "OPTIONS"] {
        let (status, body) = send(router("/"), method, "/contact").await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{method}");
        assert_eq!(body, "404 Not Found");
    }
}

#[tokio::test]
async fn handler_response_is_passed_through() {
    let (status, body) = send(router("/"), "POST", "/contact").await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, "submitted");

    let (status, body) = send(router("/"), "GET", "/?page=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "index");
}

#[tokio::test]
async fn post_to_get_only_route_is_404() {
    let (status, _) = send(router("/"), "POST", "/").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn mounted_below_base_path() {
    let router = router("/guest-book/public");

    let (status, body) = send(router.clone(), "GET", "/Guest-Book/Public/Contact/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "form posts to /guest-book/public/contact");

    let (status, body) = send(router, "GET", "/guest-book/public").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "index");
}
