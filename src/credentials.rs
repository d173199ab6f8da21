use {
    derive_builder::Builder,
    std::{
        collections::HashMap,
        fmt::{Debug, Formatter, Result as FmtResult},
        future::Future,
    },
    tower::{service_fn, util::ServiceFn, BoxError},
};

/// A set of Hawk credentials: the id, the shared secret key, the MAC algorithm, and any application-defined data.
///
/// The algorithm is kept in its textual form so credentials naming an unsupported algorithm can still be represented
/// (and rejected during authentication). Empty strings are treated as absent values.
///
/// Credentials structs are immutable. Use [CredentialsBuilder] to construct a new set of credentials.
#[derive(Builder, Clone, Default, Eq, PartialEq)]
pub struct Credentials {
    /// The credentials id, as sent in the `id` attribute.
    #[builder(setter(into), default)]
    id: String,

    /// The shared secret key.
    #[builder(setter(into), default)]
    key: String,

    /// The MAC algorithm identifier, `hmac-sha-1` or `hmac-sha-256`.
    #[builder(setter(into), default)]
    algorithm: String,

    /// Application-defined data associated with the credentials (e.g. the user name).
    #[builder(setter(into), default)]
    extra: HashMap<String, String>,
}

impl Credentials {
    /// Create a [CredentialsBuilder] to construct a [Credentials].
    #[inline]
    pub fn builder() -> CredentialsBuilder {
        CredentialsBuilder::default()
    }

    /// Retrieve the credentials id.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Retrieve the shared secret key.
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Retrieve the MAC algorithm identifier.
    #[inline]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Retrieve the application-defined data associated with the credentials.
    #[inline]
    pub fn extra(&self) -> &HashMap<String, String> {
        &self.extra
    }

    /// Retrieve a single application-defined value.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.extra.get(name).map(String::as_str)
    }

    /// Indicates whether both the key and the algorithm are present.
    #[inline]
    pub(crate) fn has_key_and_algorithm(&self) -> bool {
        !self.key.is_empty() && !self.algorithm.is_empty()
    }
}

impl Debug for Credentials {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("algorithm", &self.algorithm)
            .field("extra", &self.extra)
            .finish_non_exhaustive()
    }
}

/// A request for the credentials matching the id of a token.
///
/// GetCredentialsRequest structs are immutable. Use [`GetCredentialsRequestBuilder`] to programmatically construct a
/// request.
#[derive(Builder, Clone, Debug)]
#[non_exhaustive]
pub struct GetCredentialsRequest {
    /// The credentials id sent in the token.
    #[builder(setter(into))]
    id: String,
}

impl GetCredentialsRequest {
    /// Create a [GetCredentialsRequestBuilder] to construct a [GetCredentialsRequest].
    #[inline]
    pub fn builder() -> GetCredentialsRequestBuilder {
        GetCredentialsRequestBuilder::default()
    }

    /// Retrieve the credentials id sent in the token.
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Create a Service that wraps a function that can look up credentials.
///
/// The function returns `Ok(None)` when no credentials exist for the id. Errors are passed through to the caller of
/// [`authenticate_request`][crate::authenticate_request] unchanged; return a boxed [`HawkError`][crate::HawkError] to
/// control the classification.
pub fn service_for_credentials_fn<F, Fut>(f: F) -> ServiceFn<F>
where
    F: FnMut(GetCredentialsRequest) -> Fut + Send + 'static,
    Fut: Future<Output = Result<Option<Credentials>, BoxError>> + Send + 'static,
{
    service_fn(f)
}
