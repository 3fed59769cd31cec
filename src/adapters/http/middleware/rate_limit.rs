//! Rate limiting middleware for axum.
//!
//! Enforces the gateway-wide fixed-window limit through the injected
//! `RateLimiter` port. One bucket per caller address; requests with no
//! resolvable address share a global bucket.
//!
//! Rate limit status is returned in standard HTTP headers:
//! - `X-RateLimit-Limit`: Maximum requests allowed in the window
//! - `X-RateLimit-Remaining`: Requests remaining in the current window
//! - `X-RateLimit-Reset`: Unix timestamp when the window resets
//! - `Retry-After`: Seconds to wait (only on 429 response)

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::ports::{RateLimitKey, RateLimitResult, RateLimiter};

/// Rate limiter middleware state.
pub type RateLimiterState = Arc<dyn RateLimiter>;

/// Standard rate limit header names.
pub mod headers {
    use super::HeaderName;

    /// Maximum requests allowed in the window.
    pub static X_RATELIMIT_LIMIT: HeaderName = HeaderName::from_static("x-ratelimit-limit");
    /// Requests remaining in the current window.
    pub static X_RATELIMIT_REMAINING: HeaderName = HeaderName::from_static("x-ratelimit-remaining");
    /// Unix timestamp when the window resets.
    pub static X_RATELIMIT_RESET: HeaderName = HeaderName::from_static("x-ratelimit-reset");
}

/// Rate limiting middleware.
///
/// Extracts the caller address, checks the per-caller bucket, returns
/// 429 with a JSON body when the limit is exceeded, and adds rate limit
/// headers to allowed responses. Fails open when the limiter itself
/// errors, for availability.
pub async fn rate_limit_middleware(
    State(limiter): State<RateLimiterState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let key = match extract_client_ip(&request, connect_info.as_ref()) {
        Some(ip) => RateLimitKey::ip(&ip),
        None => RateLimitKey::global(),
    };

    let status = match limiter.check(key.clone()).await {
        Ok(RateLimitResult::Denied(denied)) => {
            return rate_limit_response(denied.limit, denied.retry_after_secs);
        }
        Ok(RateLimitResult::Allowed(status)) => Some(status),
        Err(e) => {
            tracing::warn!("Rate limiter unavailable: {}", e);
            None
        }
    };

    let mut response = next.run(request).await;

    if let Some(status) = status {
        add_rate_limit_headers(&mut response, status.limit, status.remaining, status.reset_at);
    }

    response
}

/// Extract client IP from request, checking forwarded headers first.
///
/// Order of precedence:
/// 1. X-Forwarded-For header (first IP in list)
/// 2. X-Real-IP header
/// 3. ConnectInfo socket address
fn extract_client_ip<B>(
    request: &axum::http::Request<B>,
    connect_info: Option<&ConnectInfo<SocketAddr>>,
) -> Option<String> {
    if let Some(forwarded) = request
        .headers()
        .get("X-Forwarded-For")
        .and_then(|h| h.to_str().ok())
    {
        if let Some(first_ip) = forwarded.split(',').next() {
            return Some(first_ip.trim().to_string());
        }
    }

    if let Some(real_ip) = request
        .headers()
        .get("X-Real-IP")
        .and_then(|h| h.to_str().ok())
    {
        return Some(real_ip.to_string());
    }

    connect_info.map(|ci| ci.0.ip().to_string())
}

/// Create a 429 Too Many Requests response.
fn rate_limit_response(limit: u32, retry_after_secs: u32) -> Response {
    let mut response = (
        StatusCode::TOO_MANY_REQUESTS,
        Json(serde_json::json!({
            "error": "Rate limit exceeded",
            "code": "RATE_LIMIT_EXCEEDED",
            "retry_after_secs": retry_after_secs
        })),
    )
        .into_response();

    let headers = response.headers_mut();
    if let Ok(value) = HeaderValue::from_str(&limit.to_string()) {
        headers.insert(headers::X_RATELIMIT_LIMIT.clone(), value);
    }
    headers.insert(headers::X_RATELIMIT_REMAINING.clone(), HeaderValue::from_static("0"));
    if let Ok(value) = HeaderValue::from_str(&retry_after_secs.to_string()) {
        headers.insert("Retry-After", value);
    }

    response
}

/// Add rate limit headers to a response.
fn add_rate_limit_headers(response: &mut Response, limit: u32, remaining: u32, reset_at: u64) {
    let headers = response.headers_mut();
    for (name, value) in [
        (&headers::X_RATELIMIT_LIMIT, limit.to_string()),
        (&headers::X_RATELIMIT_REMAINING, remaining.to_string()),
        (&headers::X_RATELIMIT_RESET, reset_at.to_string()),
    ] {
        if let Ok(value) = HeaderValue::from_str(&value) {
            headers.insert(name.clone(), value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    #[test]
    fn extract_ip_from_x_forwarded_for() {
        let request = Request::builder()
            .uri("/test")
            .header("X-Forwarded-For", "1.2.3.4, 5.6.7.8")
            .body(())
            .unwrap();

        let ip = extract_client_ip(&request, None);
        assert_eq!(ip, Some("1.2.3.4".to_string()));
    }

    #[test]
    fn extract_ip_from_x_real_ip() {
        let request = Request::builder()
            .uri("/test")
            .header("X-Real-IP", "9.8.7.6")
            .body(())
            .unwrap();

        let ip = extract_client_ip(&request, None);
        assert_eq!(ip, Some("9.8.7.6".to_string()));
    }

    #[test]
    fn extract_ip_prefers_x_forwarded_for() {
        let request = Request::builder()
            .uri("/test")
            .header("X-Forwarded-For", "1.2.3.4")
            .header("X-Real-IP", "5.6.7.8")
            .body(())
            .unwrap();

        let ip = extract_client_ip(&request, None);
        assert_eq!(ip, Some("1.2.3.4".to_string()));
    }

    #[test]
    fn extract_ip_returns_none_without_headers() {
        let request = Request::builder().uri("/test").body(()).unwrap();

        let ip = extract_client_ip(&request, None);
        assert_eq!(ip, None);
    }

    #[test]
    fn rate_limit_response_has_429_status() {
        let response = rate_limit_response(100, 60);
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    }

    #[test]
    fn rate_limit_response_has_retry_after_header() {
        let response = rate_limit_response(100, 30);
        let retry_after = response.headers().get("Retry-After").unwrap();
        assert_eq!(retry_after, "30");
    }

    #[test]
    fn rate_limit_response_has_limit_headers() {
        let response = rate_limit_response(100, 60);
        assert!(response.headers().contains_key("x-ratelimit-limit"));
        assert!(response.headers().contains_key("x-ratelimit-remaining"));
    }

    #[test]
    fn rate_limiter_state_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RateLimiterState>();
    }
}
