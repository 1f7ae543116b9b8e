//! Access Control Middleware.
//! Admits only requests whose resolved remote address equals the allowed IP.

use std::fmt;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};

use crate::security::client_ip::remote_ip;

/// Body written for rejected requests.
pub const DENIED_BODY: &str = "not allowed";

/// The single address allowed through the gate.
///
/// Set once at startup and shared read-only by every request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllowedIp(Arc<str>);

impl AllowedIp {
    pub fn new(ip: impl Into<Arc<str>>) -> Self {
        Self(ip.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AllowedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Outcome of comparing a resolved address with the allowed IP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    Permit,
    Deny,
}

impl Decision {
    /// Exact string comparison; an empty address never matches a non-empty allowed IP.
    pub fn evaluate(remote_ip: &str, allowed: &AllowedIp) -> Self {
        if remote_ip == allowed.as_str() {
            Decision::Permit
        } else {
            Decision::Deny
        }
    }
}

pub async fn client_restrict_middleware(
    State(allowed): State<AllowedIp>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let remote_ip = remote_ip(&request);

    match Decision::evaluate(&remote_ip, &allowed) {
        Decision::Deny => {
            tracing::warn!("remote IP {} not allowed ({})", remote_ip, allowed);
            denied_response()
        }
        Decision::Permit => {
            tracing::info!("remote IP {}", remote_ip);
            next.run(request).await
        }
    }
}

/// Guard every route of `router` with the client restriction gate.
///
/// Requests that match no route are left to the router's fallback.
pub fn restrict<S>(router: Router<S>, allowed: AllowedIp) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.route_layer(middleware::from_fn_with_state(
        allowed,
        client_restrict_middleware,
    ))
}

fn denied_response() -> Response {
    (StatusCode::UNAUTHORIZED, DENIED_BODY).into_response()
}
