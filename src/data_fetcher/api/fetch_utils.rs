//! Generic HTTP fetching with status-code and payload error classification

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, info, instrument};

use crate::error::AppError;

/// Fetches one URL and parses the body as JSON.
///
/// One attempt per call: the poll loop comes back around on its own
/// schedule, so transient failures are reported instead of retried.
/// Errors are classified so the caller can tell transport failures
/// (endpoint unreachable, non-2xx status) from payload failures (the
/// endpoint answered 200 but the body is not JSON); the refresh cycle
/// treats the two differently.
///
/// # Arguments
/// * `client` - HTTP client for making requests
/// * `url` - URL to fetch data from
///
/// # Returns
/// * `Result<Value, AppError>` - Parsed JSON payload or classified error
#[instrument(skip(client))]
pub(super) async fn fetch_json(client: &Client, url: &str) -> Result<Value, AppError> {
    info!("Fetching statistics from URL: {url}");

    let response = match client.get(url).send().await {
        Ok(resp) => resp,
        Err(e) => {
            error!("Request failed for URL {url}: {e}");
            return if e.is_timeout() {
                Err(AppError::network_timeout(url))
            } else if e.is_connect() {
                Err(AppError::network_connection(url, e.to_string()))
            } else {
                Err(AppError::ApiFetch(e))
            };
        }
    };

    let status = response.status();
    debug!("Response status: {status}");

    if !status.is_success() {
        let status_code = status.as_u16();
        let reason = status.canonical_reason().unwrap_or("Unknown error");

        error!("HTTP {status_code} - {reason} (URL: {url})");

        // Return specific error types based on HTTP status code
        return Err(match status_code {
            404 => AppError::api_not_found(url),
            429 => AppError::api_rate_limit(reason, url),
            400..=499 => AppError::api_client_error(status_code, reason, url),
            502 | 503 => AppError::api_service_unavailable(status_code, reason, url),
            _ => AppError::api_server_error(status_code, reason, url),
        });
    }

    let response_text = match response.text().await {
        Ok(text) => text,
        Err(e) => {
            error!("Failed to read response body from URL {url}: {e}");
            return Err(AppError::ApiFetch(e));
        }
    };

    debug!("Response length: {} bytes", response_text.len());

    match serde_json::from_str::<Value>(&response_text) {
        Ok(payload) => Ok(payload),
        Err(e) => {
            error!("Failed to parse API response: {e} (URL: {url})");
            error!(
                "Response text (first 200 chars): {}",
                &response_text.chars().take(200).collect::<String>()
            );

            let trimmed = response_text.trim();
            if trimmed.is_empty() {
                Err(AppError::api_no_data("Response body is empty", url))
            } else if !trimmed.starts_with('{') && !trimmed.starts_with('[') {
                Err(AppError::api_malformed_json(
                    "Response is not valid JSON",
                    url,
                ))
            } else {
                // Looked like JSON but did not parse (truncated body etc.)
                Err(AppError::api_unexpected_structure(e.to_string(), url))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn mock_endpoint(server: &MockServer, response: ResponseTemplate) -> String {
        Mock::given(method("GET"))
            .and(path("/stats"))
            .respond_with(response)
            .mount(server)
            .await;
        format!("{}/stats", server.uri())
    }

    #[tokio::test]
    async fn test_fetch_json_success() {
        let server = MockServer::start().await;
        let body = json!({"playerStats": [{"points": 10}]});
        let url = mock_endpoint(&server, ResponseTemplate::new(200).set_body_json(&body)).await;

        let client = create_test_http_client();
        let payload = fetch_json(&client, &url).await.unwrap();
        assert_eq!(payload, body);
    }

    #[tokio::test]
    async fn test_fetch_json_not_found() {
        let server = MockServer::start().await;
        let url = mock_endpoint(&server, ResponseTemplate::new(404)).await;

        let client = create_test_http_client();
        let err = fetch_json(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiNotFound { .. }));
        assert!(!err.is_payload_issue());
    }

    #[tokio::test]
    async fn test_fetch_json_status_classification() {
        let cases = [
            (429, "ApiRateLimit"),
            (400, "ApiClientError"),
            (502, "ApiServiceUnavailable"),
            (503, "ApiServiceUnavailable"),
            (500, "ApiServerError"),
        ];
        for (status, expected) in cases {
            let server = MockServer::start().await;
            let url = mock_endpoint(&server, ResponseTemplate::new(status)).await;

            let client = create_test_http_client();
            let err = fetch_json(&client, &url).await.unwrap_err();
            let matched = match err {
                AppError::ApiRateLimit { .. } => "ApiRateLimit",
                AppError::ApiClientError { .. } => "ApiClientError",
                AppError::ApiServiceUnavailable { .. } => "ApiServiceUnavailable",
                AppError::ApiServerError { .. } => "ApiServerError",
                other => panic!("unexpected error for {status}: {other}"),
            };
            assert_eq!(matched, expected, "status {status}");
            server.reset().await;
        }
    }

    #[tokio::test]
    async fn test_fetch_json_empty_body_is_payload_issue() {
        let server = MockServer::start().await;
        let url = mock_endpoint(&server, ResponseTemplate::new(200).set_body_string("")).await;

        let client = create_test_http_client();
        let err = fetch_json(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiNoData { .. }));
        assert!(err.is_payload_issue());
    }

    #[tokio::test]
    async fn test_fetch_json_garbage_body_is_payload_issue() {
        let server = MockServer::start().await;
        let url = mock_endpoint(
            &server,
            ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"),
        )
        .await;

        let client = create_test_http_client();
        let err = fetch_json(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiMalformedJson { .. }));
        assert!(err.is_payload_issue());
    }

    #[tokio::test]
    async fn test_fetch_json_truncated_json_is_payload_issue() {
        let server = MockServer::start().await;
        let url = mock_endpoint(
            &server,
            ResponseTemplate::new(200).set_body_string(r#"{"playerStats": [{"points""#),
        )
        .await;

        let client = create_test_http_client();
        let err = fetch_json(&client, &url).await.unwrap_err();
        assert!(matches!(err, AppError::ApiUnexpectedStructure { .. }));
        assert!(err.is_payload_issue());
    }

    #[tokio::test]
    async fn test_fetch_json_connection_refused() {
        // Nothing listens on this port
        let client = create_test_http_client();
        let err = fetch_json(&client, "http://127.0.0.1:9/stats")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::NetworkConnection { .. } | AppError::ApiFetch(_)
        ));
        assert!(!err.is_payload_issue());
    }
}
