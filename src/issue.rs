//! Client-side generation of Hawk `Authorization` header values.

use {
    crate::{canonical::normalized_string, crypto::calculate_mac, format_header, Credentials},
    chrono::Utc,
    log::{debug, trace},
};

/// Generate an `Authorization` header value for a request, timestamped with the current time.
///
/// See [`get_authorization_header_at`] for details.
pub fn get_authorization_header(
    credentials: &Credentials,
    method: &str,
    uri: &str,
    host: &str,
    port: u16,
    ext: Option<&str>,
) -> String {
    get_authorization_header_at(credentials, method, uri, host, port, ext, Utc::now().timestamp())
}

/// Generate an `Authorization` header value for a request made at `timestamp` (seconds since the epoch).
///
/// `uri` is the request target (path and query); absolute URIs are accepted as well. `host` and `port` must be the
/// values the server will see in its host header, with the port resolved to 80 or 443 if it is not explicit there.
///
/// Returns an empty string if the credentials lack an id, key, or algorithm, or if the algorithm is not supported.
pub fn get_authorization_header_at(
    credentials: &Credentials,
    method: &str,
    uri: &str,
    host: &str,
    port: u16,
    ext: Option<&str>,
    timestamp: i64,
) -> String {
    if credentials.id().is_empty() || !credentials.has_key_and_algorithm() {
        debug!("get_authorization_header_at: credentials must have an id, key, and algorithm");
        return String::new();
    }

    let timestamp = timestamp.to_string();
    let normalized = normalized_string(&timestamp, method, uri, host, port, ext);
    trace!("Normalized string:\n{}", normalized);

    let mac = calculate_mac(credentials.key(), credentials.algorithm(), &normalized);
    if mac.is_empty() {
        return String::new();
    }

    format_header(credentials.id(), &timestamp, &mac, ext)
}
