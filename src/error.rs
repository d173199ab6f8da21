use {
    crate::constants::*,
    http::status::StatusCode,
    scratchstack_errors::ServiceError,
    std::{
        error::Error,
        fmt::{Display, Formatter, Result as FmtResult},
    },
    tower::BoxError,
};

/// Error returned when an attempt at authenticating a Hawk request fails.
#[derive(Debug)]
#[non_exhaustive]
pub enum HawkError {
    /// The host header could not be split into a host and an optional decimal port. IPv6 literals are not supported.
    BadHostHeader,

    /// The MAC carried in the token did not match the calculated MAC.
    BadMac,

    /// The credential lookup service failed. The underlying error is passed through unchanged.
    CredentialLookup(BoxError),

    /// The token does not use the `Hawk` authentication scheme.
    IncorrectScheme,

    /// The credential lookup service returned credentials without a key or an algorithm.
    InvalidCredentials,

    /// The token names the `Hawk` scheme but carries no attributes.
    InvalidHeaderFormat,

    /// One of the `id`, `ts`, or `mac` attributes is missing or empty.
    MissingAttributes,

    /// The request has neither an `Authorization` header nor a `hawk` query parameter.
    MissingAuthorization,

    /// The credential lookup service did not find any credentials for the id.
    MissingCredentials,

    /// The request has no host header (or no header with the configured alternate name).
    MissingHostHeader,

    /// The credentials name an algorithm other than `hmac-sha-1` or `hmac-sha-256`.
    UnknownAlgorithm,

    /// The token contains an unrecognized attribute, malformed quoting, or trailing garbage.
    UnknownAttributes,
}

impl HawkError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::BadHostHeader => ERR_CODE_BAD_HOST_HEADER,
            Self::BadMac => ERR_CODE_BAD_MAC,
            Self::CredentialLookup(_) => ERR_CODE_CREDENTIAL_LOOKUP_FAILURE,
            Self::IncorrectScheme => ERR_CODE_INCORRECT_SCHEME,
            Self::InvalidCredentials => ERR_CODE_INVALID_CREDENTIALS,
            Self::InvalidHeaderFormat => ERR_CODE_INVALID_HEADER_FORMAT,
            Self::MissingAttributes => ERR_CODE_MISSING_ATTRIBUTES,
            Self::MissingAuthorization => ERR_CODE_MISSING_AUTHORIZATION,
            Self::MissingCredentials => ERR_CODE_MISSING_CREDENTIALS,
            Self::MissingHostHeader => ERR_CODE_MISSING_HOST_HEADER,
            Self::UnknownAlgorithm => ERR_CODE_UNKNOWN_ALGORITHM,
            Self::UnknownAttributes => ERR_CODE_UNKNOWN_ATTRIBUTES,
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::BadHostHeader
            | Self::InvalidHeaderFormat
            | Self::MissingAttributes
            | Self::MissingHostHeader
            | Self::UnknownAttributes => StatusCode::BAD_REQUEST,
            Self::BadMac | Self::IncorrectScheme | Self::MissingAuthorization | Self::MissingCredentials => {
                StatusCode::UNAUTHORIZED
            }
            Self::CredentialLookup(_) | Self::InvalidCredentials | Self::UnknownAlgorithm => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ServiceError for HawkError {
    fn error_code(&self) -> &'static str {
        HawkError::error_code(self)
    }

    fn http_status(&self) -> StatusCode {
        HawkError::http_status(self)
    }
}

impl Display for HawkError {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        match self {
            Self::BadHostHeader => f.write_str(ERR_MSG_BAD_HOST_HEADER),
            Self::BadMac => f.write_str(ERR_MSG_BAD_MAC),
            Self::CredentialLookup(ref e) => Display::fmt(e, f),
            Self::IncorrectScheme => f.write_str(ERR_MSG_INCORRECT_SCHEME),
            Self::InvalidCredentials => f.write_str(ERR_MSG_INVALID_CREDENTIALS),
            Self::InvalidHeaderFormat => f.write_str(ERR_MSG_INVALID_HEADER_FORMAT),
            Self::MissingAttributes => f.write_str(ERR_MSG_MISSING_ATTRIBUTES),
            Self::MissingAuthorization => f.write_str(ERR_MSG_MISSING_AUTHORIZATION),
            Self::MissingCredentials => f.write_str(ERR_MSG_MISSING_CREDENTIALS),
            Self::MissingHostHeader => f.write_str(ERR_MSG_MISSING_HOST_HEADER),
            Self::UnknownAlgorithm => f.write_str(ERR_MSG_UNKNOWN_ALGORITHM),
            Self::UnknownAttributes => f.write_str(ERR_MSG_UNKNOWN_ATTRIBUTES),
        }
    }
}

impl Error for HawkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CredentialLookup(ref e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<BoxError> for HawkError {
    fn from(e: BoxError) -> HawkError {
        match e.downcast::<HawkError>() {
            Ok(hawk_err) => *hawk_err,
            Err(e) => HawkError::CredentialLookup(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        crate::HawkError,
        scratchstack_errors::ServiceError,
        std::{error::Error, io::Error as IOError},
        tower::BoxError,
    };

    #[test_log::test]
    fn test_from() {
        let io_error: BoxError = Box::new(IOError::other("database unavailable"));
        let e = HawkError::from(io_error);
        assert_eq!(e.error_code(), "CredentialLookupFailure");
        assert_eq!(e.http_status(), 500);
        assert_eq!(e.to_string(), "database unavailable");
        assert!(e.source().is_some());

        let e: BoxError = Box::new(HawkError::MissingCredentials);
        let e2 = HawkError::from(e);
        assert!(matches!(e2, HawkError::MissingCredentials));
        assert_eq!(e2.to_string(), "Missing credentials");
        assert!(e2.source().is_none());
    }

    #[test_log::test]
    fn test_classification() {
        let e = HawkError::IncorrectScheme;
        assert_eq!(e.error_code(), "IncorrectScheme");
        assert_eq!(e.http_status(), 401);
        assert_eq!(format!("{}", e), "Incorrect scheme");

        let e = HawkError::InvalidHeaderFormat;
        assert_eq!(e.error_code(), "InvalidHeaderFormat");
        assert_eq!(e.http_status(), 400);
        assert_eq!(format!("{}", e), "Invalid header format");

        let e = HawkError::UnknownAttributes;
        assert_eq!(e.http_status(), 400);
        assert_eq!(format!("{}", e), "Unknown attributes");

        let e = HawkError::MissingHostHeader;
        assert_eq!(e.http_status(), 400);
        assert_eq!(format!("{}", e), "Missing Host header");

        let e = HawkError::MissingAuthorization;
        assert_eq!(e.http_status(), 401);
        assert_eq!(format!("{}", e), "Missing Authorization header");

        let e = HawkError::InvalidCredentials;
        assert_eq!(e.error_code(), "InvalidCredentials");
        assert_eq!(e.http_status(), 500);
        assert_eq!(format!("{}", e), "Invalid credentials");

        let e = HawkError::UnknownAlgorithm;
        assert_eq!(e.http_status(), 500);
        assert_eq!(format!("{}", e), "Unknown algorithm");

        let e = HawkError::BadMac;
        assert_eq!(e.error_code(), "BadMac");
        assert_eq!(e.http_status(), 401);
        assert_eq!(format!("{}", e), "Bad mac");
    }
}
