//! Canonicalization functionality for MAC generation and validation.
//!
//! This includes the normalized string that is fed into the MAC, along with the request-side helpers needed to
//! recover its inputs from an HTTP request: the host/port split of the host header and the handling of tokens carried
//! in the `hawk` query parameter.

use {
    crate::{
        constants::{DEFAULT_HTTPS_PORT, DEFAULT_HTTP_PORT, HAWK_QUERY_PARAMETER},
        HawkError,
    },
    http::uri::Uri,
    lazy_static::lazy_static,
    log::trace,
    regex::Regex,
    std::{borrow::Cow, str::FromStr},
};

lazy_static! {
    /// Host header, tolerant of folded whitespace. IPv6 literals are not supported.
    static ref HOST_HEADER_RE: Regex =
        Regex::new(r"^(?:(?:\r\n)?[\t ])*([^:]+)(?::(\d+))?(?:(?:\r\n)?[\t ])*$").unwrap();
}

/// Return the normalized string covered by the MAC.
///
/// The string is six newline-terminated fields:
/// ```text
/// timestamp
/// METHOD
/// /path?query
/// host
/// port
/// ext
/// ```
///
/// The method is upper-cased and the host lower-cased. The port is used as given; resolving a default is the
/// caller's job.
pub fn normalized_string(timestamp: &str, method: &str, uri: &str, host: &str, port: u16, ext: Option<&str>) -> String {
    let resource = path_and_query(uri);
    let method = method.to_uppercase();
    let host = host.to_lowercase();
    let ext = ext.unwrap_or("");

    let mut result = String::with_capacity(
        timestamp.len() + method.len() + resource.len() + host.len() + 5 + ext.len() + 6,
    );

    let port = port.to_string();
    let fields: [&str; 6] = [timestamp, &method, &resource, &host, &port, ext];

    for field in fields {
        result.push_str(field);
        result.push('\n');
    }

    result
}

/// Return the path of the URI followed by its raw query string (including the `?`), if any.
///
/// Absolute URIs have their scheme and authority removed. URIs that `http` refuses to parse are split by hand at
/// the first `?`, with any fragment removed.
fn path_and_query(uri: &str) -> Cow<'_, str> {
    match Uri::from_str(uri) {
        Ok(parsed) => match parsed.query() {
            Some(query) => Cow::Owned(format!("{}?{}", parsed.path(), query)),
            None => Cow::Owned(parsed.path().to_string()),
        },
        Err(e) => {
            trace!("path_and_query: unable to parse URI {:?}: {}", uri, e);
            let uri = match uri.split_once('#') {
                Some((before, _)) => before,
                None => uri,
            };
            Cow::Borrowed(uri)
        }
    }
}

/// Split a host header into the host and port.
///
/// When the header has no explicit port, the port defaults to 443 if `encrypted` is set and 80 otherwise.
pub fn split_host_header(host_header: &str, encrypted: bool) -> Result<(String, u16), HawkError> {
    let Some(cap) = HOST_HEADER_RE.captures(host_header) else {
        trace!("split_host_header: {:?} does not match the host header pattern", host_header);
        return Err(HawkError::BadHostHeader);
    };

    let host = &cap[1];
    let port = match cap.get(2) {
        Some(port) => match u16::from_str(port.as_str()) {
            Ok(port) => port,
            Err(e) => {
                trace!("split_host_header: port {:?} is invalid: {}", port.as_str(), e);
                return Err(HawkError::BadHostHeader);
            }
        },
        None if encrypted => DEFAULT_HTTPS_PORT,
        None => DEFAULT_HTTP_PORT,
    };

    Ok((host.to_string(), port))
}

/// Return the decoded value of the first `hawk` query parameter of the URI, if present and non-empty.
pub fn query_token(uri: &Uri) -> Option<String> {
    let query = uri.query()?;
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == HAWK_QUERY_PARAMETER)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// Return the path and query of the URI with every `hawk` query parameter removed.
///
/// The remaining parameters keep their original order and encoding. If no parameters remain, the `?` is dropped
/// as well.
pub fn strip_query_token(uri: &Uri) -> String {
    let path = uri.path();
    let Some(query) = uri.query() else {
        return path.to_string();
    };

    let remaining = query
        .split('&')
        .filter(|segment| {
            let mut parsed = form_urlencoded::parse(segment.as_bytes());
            !matches!(parsed.next(), Some((key, _)) if key == HAWK_QUERY_PARAMETER)
        })
        .collect::<Vec<&str>>();

    if remaining.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, remaining.join("&"))
    }
}
