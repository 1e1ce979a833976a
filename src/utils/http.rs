//! HTTP client construction for provider calls.

use std::time::Duration;

use reqwest::Client;

/// Build the reqwest client shared by the OCR and TTS backends.
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .user_agent(user_agent)
        .build()
}
