//! Common constants used throughout the crate.
//!
//! This was consolidated here so the entire crate is on the same page about these constant values.
//! If a value is spelled incorrectly, at least it can be fixed in one spot.
//!
//! Tests that are testing the content of an error code or message should not use these constants;
//! they should use hard-coded strings so the tests are also testing for misspellings.
//!
//! Please keep this file organized alphabetically. (This can be a bit hard with comments, etc.)

/// Default port for requests received over an encrypted transport.
pub(crate) const DEFAULT_HTTPS_PORT: u16 = 443;

/// Default port for requests received over a plaintext transport.
pub(crate) const DEFAULT_HTTP_PORT: u16 = 80;

/// Error code: BadHostHeader
pub(crate) const ERR_CODE_BAD_HOST_HEADER: &str = "BadHostHeader";

/// Error code: BadMac
pub(crate) const ERR_CODE_BAD_MAC: &str = "BadMac";

/// Error code: CredentialLookupFailure
pub(crate) const ERR_CODE_CREDENTIAL_LOOKUP_FAILURE: &str = "CredentialLookupFailure";

/// Error code: IncorrectScheme
pub(crate) const ERR_CODE_INCORRECT_SCHEME: &str = "IncorrectScheme";

/// Error code: InvalidCredentials
pub(crate) const ERR_CODE_INVALID_CREDENTIALS: &str = "InvalidCredentials";

/// Error code: InvalidHeaderFormat
pub(crate) const ERR_CODE_INVALID_HEADER_FORMAT: &str = "InvalidHeaderFormat";

/// Error code: MissingAttributes
pub(crate) const ERR_CODE_MISSING_ATTRIBUTES: &str = "MissingAttributes";

/// Error code: MissingAuthorization
pub(crate) const ERR_CODE_MISSING_AUTHORIZATION: &str = "MissingAuthorization";

/// Error code: MissingCredentials
pub(crate) const ERR_CODE_MISSING_CREDENTIALS: &str = "MissingCredentials";

/// Error code: MissingHostHeader
pub(crate) const ERR_CODE_MISSING_HOST_HEADER: &str = "MissingHostHeader";

/// Error code: UnknownAlgorithm
pub(crate) const ERR_CODE_UNKNOWN_ALGORITHM: &str = "UnknownAlgorithm";

/// Error code: UnknownAttributes
pub(crate) const ERR_CODE_UNKNOWN_ATTRIBUTES: &str = "UnknownAttributes";

/// Error message: `"Bad Host header"`
pub(crate) const ERR_MSG_BAD_HOST_HEADER: &str = "Bad Host header";

/// Error message: `"Bad mac"`
pub(crate) const ERR_MSG_BAD_MAC: &str = "Bad mac";

/// Error message: `"Incorrect scheme"`
pub(crate) const ERR_MSG_INCORRECT_SCHEME: &str = "Incorrect scheme";

/// Error message: `"Invalid credentials"`
pub(crate) const ERR_MSG_INVALID_CREDENTIALS: &str = "Invalid credentials";

/// Error message: `"Invalid header format"`
pub(crate) const ERR_MSG_INVALID_HEADER_FORMAT: &str = "Invalid header format";

/// Error message: `"Missing attributes"`
pub(crate) const ERR_MSG_MISSING_ATTRIBUTES: &str = "Missing attributes";

/// Error message: `"Missing Authorization header"`
pub(crate) const ERR_MSG_MISSING_AUTHORIZATION: &str = "Missing Authorization header";

/// Error message: `"Missing credentials"`
pub(crate) const ERR_MSG_MISSING_CREDENTIALS: &str = "Missing credentials";

/// Error message: `"Missing Host header"`
pub(crate) const ERR_MSG_MISSING_HOST_HEADER: &str = "Missing Host header";

/// Error message: `"Unknown algorithm"`
pub(crate) const ERR_MSG_UNKNOWN_ALGORITHM: &str = "Unknown algorithm";

/// Error message: `"Unknown attributes"`
pub(crate) const ERR_MSG_UNKNOWN_ATTRIBUTES: &str = "Unknown attributes";

/// Query parameter that can carry the token in place of the `Authorization` header.
pub(crate) const HAWK_QUERY_PARAMETER: &str = "hawk";

/// Authentication scheme name, as emitted in issued headers.
pub(crate) const HAWK_SCHEME: &str = "Hawk";

/// Algorithm identifier for HMAC-SHA1.
pub(crate) const HMAC_SHA_1: &str = "hmac-sha-1";

/// Algorithm identifier for HMAC-SHA256.
pub(crate) const HMAC_SHA_256: &str = "hmac-sha-256";
