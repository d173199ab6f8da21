//! Hawk request authentication.
//!
//! [`authenticate_request`] takes an inbound request through the checks below, in order. The first failing check
//! ends the attempt:
//! 1. The host header (or the configured alternate) is present.
//! 2. A token is present in the `Authorization` header or, failing that, in the `hawk` query parameter.
//! 3. The token parses.
//! 4. The `id`, `ts`, and `mac` attributes are present.
//! 5. The host header splits into a host and a port.
//! 6. The credential lookup service returns usable credentials.
//! 7. The credentials name a supported algorithm.
//! 8. The MAC recalculated over the request matches the one in the token.

use {
    crate::{
        canonical::{normalized_string, query_token, split_host_header, strip_query_token},
        parse_header, Algorithm, Credentials, GetCredentialsRequest, HawkError,
    },
    derive_builder::Builder,
    http::{
        header::{AsHeaderName, HeaderMap, AUTHORIZATION},
        request::{Parts, Request},
        Method, Uri,
    },
    log::{debug, trace},
    std::{
        borrow::Cow,
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
        future::Future,
        str::FromStr,
    },
    subtle::ConstantTimeEq,
    tower::{BoxError, Service, ServiceExt},
};

/// Options that can be used to configure request authentication.
#[derive(Clone, Debug, Default)]
pub struct HawkOptions {
    /// The header supplying the host and port of the request, matched case-insensitively. If `None`, the `Host`
    /// header is used.
    ///
    /// This is needed behind proxies that rewrite the `Host` header while preserving the original value in another
    /// header such as `X-Forwarded-Host`.
    pub host_header_name: Option<String>,
}

impl HawkOptions {
    /// Create a `HawkOptions` that reads the host and port from the given header instead of `Host`.
    pub fn with_host_header_name<S: Into<String>>(name: S) -> Self {
        Self {
            host_header_name: Some(name.into()),
        }
    }

    fn host_header_name(&self) -> Cow<'_, str> {
        match &self.host_header_name {
            Some(name) => Cow::Owned(name.to_lowercase()),
            None => Cow::Borrowed("host"),
        }
    }
}

/// Upon successful authentication, this is returned to convey the credentials and extension data of the request.
///
/// AuthenticatorResponse structs are immutable. Use [AuthenticatorResponseBuilder] to construct a new response.
#[derive(Builder, Clone, Debug)]
pub struct AuthenticatorResponse {
    /// The credentials the request was signed with.
    credentials: Credentials,

    /// The `ext` attribute of the token, if any.
    #[builder(setter(into, strip_option), default)]
    ext: Option<String>,
}

impl AuthenticatorResponse {
    /// Create an [AuthenticatorResponseBuilder] to construct an [AuthenticatorResponse].
    #[inline]
    pub fn builder() -> AuthenticatorResponseBuilder {
        AuthenticatorResponseBuilder::default()
    }

    /// Retrieve the credentials the request was signed with.
    #[inline]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Retrieve the `ext` attribute of the token, if any.
    #[inline]
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }
}

/// Returned when authentication fails.
///
/// Along with the error, this carries whatever context was resolved before the failure so callers can log it
/// without parsing the request again.
#[derive(Debug)]
pub struct AuthenticatorFailure {
    error: HawkError,
    credentials: Option<Credentials>,
    ext: Option<String>,
}

impl AuthenticatorFailure {
    fn new(error: HawkError, credentials: Option<Credentials>, ext: Option<&str>) -> Self {
        Self {
            error,
            credentials,
            ext: ext.map(str::to_string),
        }
    }

    /// Retrieve the reason authentication failed.
    #[inline]
    pub fn error(&self) -> &HawkError {
        &self.error
    }

    /// Retrieve the credentials returned by the lookup service, if it was reached and returned any.
    #[inline]
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Retrieve the `ext` attribute of the token, if the token was parsed and has one.
    #[inline]
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    /// Discard the context and return the error.
    #[inline]
    pub fn into_error(self) -> HawkError {
        self.error
    }
}

impl Display for AuthenticatorFailure {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        Display::fmt(&self.error, f)
    }
}

impl Error for AuthenticatorFailure {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.error)
    }
}

impl From<HawkError> for AuthenticatorFailure {
    fn from(error: HawkError) -> Self {
        Self::new(error, None, None)
    }
}

/// Where the token of a request was found.
#[derive(Debug)]
enum TokenSource {
    Header(String),
    QueryString(String),
}

impl TokenSource {
    fn token(&self) -> &str {
        match self {
            Self::Header(token) | Self::QueryString(token) => token,
        }
    }
}

/// Authenticate a Hawk-signed request from its HTTP [`Parts`].
///
/// # Parameters
/// * `parts` - The HTTP [`Parts`] of the request to authenticate.
/// * `encrypted` - Whether the request arrived over an encrypted transport. This only determines the default port
///   when the host header does not specify one.
/// * `get_credentials` - A service that can provide the credentials for the token id. It is called at most once.
/// * `options` - [`HawkOptions`] that affect the behavior of the authentication. For most services, use
///   `HawkOptions::default()`.
///
/// # Errors
/// Returns an [`AuthenticatorFailure`] describing the first check that failed, along with the `ext` attribute and
/// credentials if they were resolved by then.
pub async fn authenticate_request<G, F>(
    parts: &Parts,
    encrypted: bool,
    get_credentials: &mut G,
    options: &HawkOptions,
) -> Result<AuthenticatorResponse, AuthenticatorFailure>
where
    G: Service<GetCredentialsRequest, Response = Option<Credentials>, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<Option<Credentials>, BoxError>> + Send,
{
    authenticate(&parts.method, &parts.uri, &parts.headers, encrypted, get_credentials, options).await
}

/// Authenticate a Hawk-signed HTTP [`Request`]. The body is not examined.
///
/// See [`authenticate_request`] for details.
pub async fn authenticate_http_request<B, G, F>(
    request: &Request<B>,
    encrypted: bool,
    get_credentials: &mut G,
    options: &HawkOptions,
) -> Result<AuthenticatorResponse, AuthenticatorFailure>
where
    G: Service<GetCredentialsRequest, Response = Option<Credentials>, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<Option<Credentials>, BoxError>> + Send,
{
    authenticate(request.method(), request.uri(), request.headers(), encrypted, get_credentials, options).await
}

async fn authenticate<G, F>(
    method: &Method,
    uri: &Uri,
    headers: &HeaderMap,
    encrypted: bool,
    get_credentials: &mut G,
    options: &HawkOptions,
) -> Result<AuthenticatorResponse, AuthenticatorFailure>
where
    G: Service<GetCredentialsRequest, Response = Option<Credentials>, Error = BoxError, Future = F> + Send,
    F: Future<Output = Result<Option<Credentials>, BoxError>> + Send,
{
    let host_header_name = options.host_header_name();
    let Some(host_header) = non_empty_header(headers, &*host_header_name) else {
        debug!("authenticate: missing {} header", host_header_name);
        return Err(HawkError::MissingHostHeader.into());
    };

    let token = match non_empty_header(headers, AUTHORIZATION) {
        Some(token) => TokenSource::Header(token.into_owned()),
        None => match query_token(uri) {
            Some(token) => TokenSource::QueryString(token),
            None => {
                debug!("authenticate: missing Authorization header and hawk query parameter");
                return Err(HawkError::MissingAuthorization.into());
            }
        },
    };

    let attributes = match parse_header(token.token()) {
        Ok(attributes) => attributes,
        Err(e) => {
            debug!("authenticate: unable to parse token: {}", e);
            return Err(e.into());
        }
    };

    let ext = attributes.ext();
    let (Some(id), Some(ts), Some(mac)) = (
        attributes.id().filter(|v| !v.is_empty()),
        attributes.ts().filter(|v| !v.is_empty()),
        attributes.mac().filter(|v| !v.is_empty()),
    ) else {
        debug!("authenticate: token is missing id, ts, or mac");
        return Err(AuthenticatorFailure::new(HawkError::MissingAttributes, None, ext));
    };

    let (host, port) = match split_host_header(&host_header, encrypted) {
        Ok(host_port) => host_port,
        Err(e) => {
            debug!("authenticate: bad {} header: {:?}", host_header_name, host_header);
            return Err(AuthenticatorFailure::new(e, None, ext));
        }
    };

    let req = GetCredentialsRequest::builder().id(id).build().expect("All fields set");
    let credentials = match get_credentials.oneshot(req).await {
        Ok(Some(credentials)) => {
            trace!("authenticate: got credentials for id {}", id);
            credentials
        }
        Ok(None) => {
            debug!("authenticate: no credentials for id {}", id);
            return Err(AuthenticatorFailure::new(HawkError::MissingCredentials, None, ext));
        }
        Err(e) => {
            debug!("authenticate: error getting credentials: {}", e);
            return Err(AuthenticatorFailure::new(HawkError::from(e), None, ext));
        }
    };

    if !credentials.has_key_and_algorithm() {
        debug!("authenticate: credentials for id {} have no key or algorithm", id);
        return Err(AuthenticatorFailure::new(HawkError::InvalidCredentials, Some(credentials), ext));
    }

    let algorithm = match Algorithm::from_str(credentials.algorithm()) {
        Ok(algorithm) => algorithm,
        Err(e) => {
            debug!("authenticate: credentials for id {}: {}", id, e);
            return Err(AuthenticatorFailure::new(HawkError::UnknownAlgorithm, Some(credentials), ext));
        }
    };

    let resource = match &token {
        TokenSource::Header(_) => uri.to_string(),
        TokenSource::QueryString(_) => strip_query_token(uri),
    };

    let normalized = normalized_string(ts, method.as_str(), &resource, &host, port, ext);
    trace!("Normalized string:\n{}", normalized);

    let expected_mac = algorithm.mac(credentials.key().as_bytes(), normalized.as_bytes());
    let is_equal: bool = mac.as_bytes().ct_eq(expected_mac.as_bytes()).into();
    if !is_equal {
        trace!("MAC mismatch: expected '{}', got '{}'", expected_mac, mac);
        return Err(AuthenticatorFailure::new(HawkError::BadMac, Some(credentials), ext));
    }

    Ok(AuthenticatorResponse {
        credentials,
        ext: ext.map(str::to_string),
    })
}

/// Return the value of the named header if it is present and non-empty.
fn non_empty_header<K: AsHeaderName>(headers: &HeaderMap, name: K) -> Option<Cow<'_, str>> {
    let value = headers.get(name)?;
    if value.is_empty() {
        None
    } else {
        Some(String::from_utf8_lossy(value.as_bytes()))
    }
}
