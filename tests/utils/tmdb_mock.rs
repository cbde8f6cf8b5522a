/// wiremock helpers standing in for the TMDB API
use tokio::net::TcpListener;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub const NOT_FOUND_BODY: &str =
    r#"{"status_code":34,"status_message":"The resource you requested could not be found."}"#;

pub fn json(status: u16, body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.into(), "application/json")
}

/// Serve `body` for every GET on `route`
pub async fn mount_json(server: &MockServer, route: &str, status: u16, body: impl Into<String>) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(json(status, body))
        .mount(server)
        .await;
}

/// Requests the server has seen so far
pub async fn received(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// Decoded value of a query parameter on a received request
pub fn query_value(request: &Request, key: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(name, _)| *name == key)
        .map(|(_, value)| value.into_owned())
}

/// Base URL of a port nothing listens on
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("address");
    drop(listener);
    format!("http://{}", addr)
}
