//! Sliding-window rate limiting for the public preview route.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::{HeaderValue, Request, StatusCode, header::RETRY_AFTER},
    middleware::Next,
    response::{IntoResponse, Response},
};
use dashmap::DashMap;
use metrics::counter;

use crate::application::error::ApiError;

#[derive(Debug, Clone)]
pub struct PreviewRateLimiter {
    window: Duration,
    max_requests: u32,
    buckets: Arc<DashMap<String, Vec<Instant>>>,
}

impl PreviewRateLimiter {
    pub fn new(window: Duration, max_requests: u32) -> Self {
        Self {
            window,
            max_requests,
            buckets: Arc::new(DashMap::new()),
        }
    }

    pub fn allow(&self, key: &str) -> bool {
        let now = Instant::now();
        let window = self.window;

        let mut entry = self.buckets.entry(key.to_string()).or_default();
        entry.retain(|instant| now.duration_since(*instant) < window);

        if entry.len() as u32 >= self.max_requests {
            return false;
        }

        entry.push(now);
        true
    }

    pub fn retry_after_secs(&self) -> u64 {
        self.window.as_secs().max(1)
    }
}

/// Per-client key: forwarded address when behind a proxy, then the socket
/// peer address, then a shared fallback bucket.
fn client_key(request: &Request<Body>) -> String {
    if let Some(forwarded) = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        return forwarded.to_string();
    }

    if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
        return addr.ip().to_string();
    }

    "unknown_client".to_string()
}

pub async fn preview_rate_limit(
    State(limiter): State<PreviewRateLimiter>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let key = client_key(&request);
    if limiter.allow(&key) {
        return next.run(request).await;
    }

    counter!("vitae_preview_rate_limited_total").increment(1);
    let mut response = ApiError::new(
        "infra::http::preview_rate_limit",
        StatusCode::TOO_MANY_REQUESTS,
        "RATE_LIMIT_EXCEEDED",
        "Too many preview requests, retry later",
    )
    .into_response();
    if let Ok(value) = HeaderValue::from_str(&limiter.retry_after_secs().to_string()) {
        response.headers_mut().insert(RETRY_AFTER, value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_up_to_the_limit_then_rejects() {
        let limiter = PreviewRateLimiter::new(Duration::from_secs(60), 3);
        assert!(limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.1"));
    }

    #[test]
    fn buckets_are_per_client() {
        let limiter = PreviewRateLimiter::new(Duration::from_secs(60), 1);
        assert!(limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.2"));
        assert!(!limiter.allow("10.0.0.1"));
    }

    #[test]
    fn window_expiry_frees_slots() {
        let limiter = PreviewRateLimiter::new(Duration::from_millis(10), 1);
        assert!(limiter.allow("10.0.0.1"));
        std::thread::sleep(Duration::from_millis(20));
        assert!(limiter.allow("10.0.0.1"));
    }
}
