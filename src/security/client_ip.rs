//! Client address resolution.
//!
//! # Precedence
//! ```text
//! X-Forwarded-For (last entry, if a valid IP)
//!     > X-Real-Ip (only when X-Forwarded-For is absent or empty)
//!     > peer host (only for a plain "host:port" peer)
//!     > ""
//! ```
//!
//! # Design Decisions
//! - Total function: malformed input yields an empty address, never an error
//! - Forwarding headers are trusted verbatim; no trusted-proxy check is done
//! - Peers with more than one colon (IPv6) leave the baseline empty

use std::borrow::Cow;
use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::ConnectInfo,
    http::{HeaderMap, Request},
};

pub const X_FORWARDED_FOR: &str = "x-forwarded-for";
pub const X_REAL_IP: &str = "x-real-ip";

/// Resolve the remote address of a request.
///
/// The peer address is taken from the `ConnectInfo<SocketAddr>` extension
/// installed by `into_make_service_with_connect_info`. Without it the peer is
/// treated as unknown.
pub fn remote_ip<B>(request: &Request<B>) -> String {
    let peer_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.to_string())
        .unwrap_or_default();

    resolve_remote_ip(&peer_addr, request.headers())
}

/// Resolve the remote address from a peer address string and request headers.
pub fn resolve_remote_ip(peer_addr: &str, headers: &HeaderMap) -> String {
    let mut remote_ip = peer_host(peer_addr).unwrap_or_default().to_string();

    let forwarded_for = header_str(headers, X_FORWARDED_FOR);
    let forwarded_for = forwarded_for.trim_matches(',');
    if !forwarded_for.is_empty() {
        // rsplit always yields at least one item
        let last_hop = forwarded_for.rsplit(',').next().unwrap_or_default();
        if let Some(ip) = parse_ip(last_hop.trim()) {
            remote_ip = ip;
        }
    } else {
        let real_ip = header_str(headers, X_REAL_IP);
        if !real_ip.is_empty() {
            if let Some(ip) = parse_ip(&real_ip) {
                remote_ip = ip;
            }
        }
    }

    remote_ip
}

/// Host part of a peer address with exactly one colon.
fn peer_host(peer_addr: &str) -> Option<&str> {
    let mut parts = peer_addr.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(host), Some(_port), None) => Some(host),
        _ => None,
    }
}

/// First value of a header, or `""` when missing.
///
/// Non-ASCII bytes are kept (lossily) so that such a value still counts as
/// present and only fails to parse.
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Cow<'a, str> {
    headers
        .get(name)
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .unwrap_or_default()
}

fn parse_ip(candidate: &str) -> Option<String> {
    candidate
        .parse::<IpAddr>()
        .ok()
        .map(|ip| ip.to_canonical().to_string())
}
