//! Shared helpers for provider integration tests.

use axum::Router;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

pub fn http_client() -> reqwest::Client {
    nyayai::utils::build_http_client(5, "nyayai-tests").unwrap()
}
