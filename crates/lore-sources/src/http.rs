//! Shared HTTP response helpers for lore's service clients.
//!
//! Centralizes status-code checks (429 rate limiting with `Retry-After`
//! parsing, non-success -> [`SourceError::Api`]) for the content fetchers and
//! the tutor alike.

use crate::error::SourceError;

/// Longest error body kept in an [`SourceError::Api`] message.
const MAX_MESSAGE_CHARS: usize = 200;

/// Check an HTTP response for common error conditions.
///
/// Returns the response unchanged on success. Handles:
/// - **429 Too Many Requests** -> [`SourceError::RateLimited`] with
///   `Retry-After` header parsing (falls back to 60 s if absent or
///   unparseable).
/// - **Non-success status** -> [`SourceError::Api`] with status code and the
///   service's error message.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    if resp.status() == 429 {
        let retry_after = parse_retry_after(&resp);
        return Err(SourceError::RateLimited {
            retry_after_secs: retry_after,
        });
    }
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(SourceError::Api {
            status,
            message: api_message(&body),
        });
    }
    Ok(resp)
}

/// Parse the `Retry-After` header as seconds, falling back to 60 s.
fn parse_retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(60)
}

/// Pull a readable message out of an error body.
///
/// Google APIs nest it under `error.message`, Semantic Scholar and Cohere use
/// a top-level `message` or `error` string. Anything else is kept as text.
pub fn api_message(body: &str) -> String {
    let from_json = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .or_else(|| value.get("message"))
                .or_else(|| value.get("error"))
                .and_then(serde_json::Value::as_str)
                .map(str::to_string)
        });

    let message = from_json.unwrap_or_else(|| body.trim().to_string());
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message;
    }
    let mut truncated: String = message.chars().take(MAX_MESSAGE_CHARS - 1).collect();
    truncated.push('…');
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body.to_string())
                .unwrap(),
        )
    }

    fn mock_response_with_retry_after(status: u16, value: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .header("Retry-After", value)
                .body(String::new())
                .unwrap(),
        )
    }

    #[test]
    fn parse_retry_after_from_header() {
        let resp = mock_response_with_retry_after(429, "120");
        assert_eq!(parse_retry_after(&resp), 120);
    }

    #[test]
    fn parse_retry_after_non_numeric() {
        let resp = mock_response_with_retry_after(429, "not-a-number");
        assert_eq!(parse_retry_after(&resp), 60);
    }

    #[tokio::test]
    async fn check_response_rate_limited_default() {
        let resp = mock_response(429, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::RateLimited {
                retry_after_secs: 60
            }
        ));
    }

    #[tokio::test]
    async fn check_response_extracts_google_error_message() {
        let body = r#"{"error":{"code":403,"message":"The request cannot be completed because you have exceeded your quota."}}"#;
        let err = check_response(mock_response(403, body)).await.unwrap_err();
        match err {
            SourceError::Api { status, message } => {
                assert_eq!(status, 403);
                assert_eq!(
                    message,
                    "The request cannot be completed because you have exceeded your quota."
                );
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn check_response_success() {
        assert!(check_response(mock_response(200, "{}")).await.is_ok());
    }

    #[test]
    fn api_message_falls_back_to_text() {
        assert_eq!(api_message("  Bad Gateway \n"), "Bad Gateway");
        assert_eq!(api_message(r#"{"message":"invalid api token"}"#), "invalid api token");
    }

    #[test]
    fn api_message_truncates_long_bodies() {
        let long = "x".repeat(500);
        let message = api_message(&long);
        assert_eq!(message.chars().count(), MAX_MESSAGE_CHARS);
        assert!(message.ends_with('…'));
    }
}
