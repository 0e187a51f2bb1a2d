//! Security response headers.
//!
//! Rendered pages carry no scripts and are never meant to be framed, so
//! every response gets the same fixed header set.

use axum::http::HeaderValue;
use axum::http::header::HeaderName;
use axum::response::Response;

/// Content-Security-Policy header value.
const CSP: &str = "default-src 'self'; \
                   script-src 'none'; \
                   style-src 'self' 'unsafe-inline'; \
                   font-src 'self' data:; \
                   img-src 'self' data:; \
                   frame-ancestors 'none'";

/// Headers set on every response, replacing any existing value.
const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("content-security-policy", CSP),
    ("x-content-type-options", "nosniff"),
    ("x-frame-options", "DENY"),
    ("referrer-policy", "same-origin"),
];

/// Response mapper for `axum::middleware::map_response`.
pub(crate) async fn security_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    for (name, value) in SECURITY_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
    response
}
