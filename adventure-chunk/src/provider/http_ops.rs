use adventure_chunk_core::ChunkFinderError;
use reqwest::blocking::Client;
use std::time::Duration;

use crate::app::AppError;

pub fn build_http_client(timeout_seconds: u64) -> Result<Client, AppError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .build()?;
    Ok(client)
}

/// issues a GET request and returns the body of a successful response.
///
/// `label` names the upstream endpoint in logs; the query string is not
/// logged since it may carry an access token.
pub(crate) fn get_text(
    client: &Client,
    label: &str,
    url: &str,
    params: &[(&str, String)],
) -> Result<String, ChunkFinderError> {
    log::debug!("GET {label}");
    let response = client.get(url).query(params).send().map_err(|e| {
        ChunkFinderError::upstream(
            e.status().map(|s| s.as_u16()),
            format!("{label} request failed: {}", e.without_url()),
        )
    })?;
    let status = response.status();
    let body = response.text().map_err(|e| {
        ChunkFinderError::upstream(
            Some(status.as_u16()),
            format!("{label} response could not be read: {}", e.without_url()),
        )
    })?;
    if status.is_success() {
        Ok(body)
    } else {
        log::warn!("{label} responded with status {status}");
        Err(classify_failure(status.as_u16(), &body))
    }
}

/// maps a non-success response to an error, singling out throttling so
/// callers can advise narrowing the request.
pub fn classify_failure(status: u16, message: &str) -> ChunkFinderError {
    let message = message.trim();
    if status == 429 || message.to_lowercase().contains("throttl") {
        ChunkFinderError::UpstreamRateLimited(message.to_string())
    } else {
        ChunkFinderError::upstream(Some(status), message)
    }
}

#[cfg(test)]
mod test {
    use super::classify_failure;
    use adventure_chunk_core::ChunkFinderError;

    #[test]
    fn test_classify_rate_limits() {
        assert!(matches!(
            classify_failure(429, "Too Many Requests"),
            ChunkFinderError::UpstreamRateLimited(_)
        ));
        assert!(matches!(
            classify_failure(403, "{\"message\":\"Request Throttling\"}"),
            ChunkFinderError::UpstreamRateLimited(_)
        ));
    }

    #[test]
    fn test_classify_other_failures_keep_status() {
        assert_eq!(
            classify_failure(401, " Not Authorized - Invalid Token "),
            ChunkFinderError::upstream(Some(401), "Not Authorized - Invalid Token")
        );
    }
}
