//! The `scratchstack_hawk` crate implements [Hawk](https://github.com/hueniverse/hawk) HTTP authentication: a
//! challenge-free scheme where the client signs each request with an HMAC over the request's timestamp, method,
//! path, host, and port, keyed by a secret shared with the server.
//!
//! The crate covers both sides of the exchange:
//! * Clients call [`get_authorization_header`] (or [`get_authorization_header_at`]) to produce the value of the
//!   `Authorization` header for an outgoing request.
//! * Servers call [`authenticate_request`] to verify an inbound request. The token may be carried in the
//!   `Authorization` header or, URL-encoded, in the `hawk` query parameter.
//!
//! Looking up credentials is left to the application. This crate asks for them through a [`tower::Service`]
//! that receives a [`GetCredentialsRequest`]; [`service_for_credentials_fn`] wraps an async function as one.
//!
//! Timestamps are covered by the MAC but not checked against the server's clock, and nonces are not tracked.
//! Replay protection, if needed, must be layered on top.
//!
//! ## Example
//! ```rust
//! use http::Request;
//! use scratchstack_hawk::{
//!     authenticate_request, get_authorization_header_at, service_for_credentials_fn, Credentials,
//!     GetCredentialsRequest, HawkOptions,
//! };
//! use tower::BoxError;
//!
//! const KEY_ID: &str = "dh37fgj492je";
//! const KEY: &str = "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn";
//!
//! // This is a mock function that returns a static set of credentials. For actual use, you would
//! // call out to a database or other service to obtain them.
//! async fn get_credentials(req: GetCredentialsRequest) -> Result<Option<Credentials>, BoxError> {
//!     if req.id() != KEY_ID {
//!         return Ok(None);
//!     }
//!
//!     let credentials = Credentials::builder().id(req.id()).key(KEY).algorithm("hmac-sha-256").build()?;
//!     Ok(Some(credentials))
//! }
//!
//! # tokio_test::block_on(async {
//! let credentials = Credentials::builder().id(KEY_ID).key(KEY).algorithm("hmac-sha-256").build().unwrap();
//!
//! // Client side: sign the request. Normally you would use `get_authorization_header` to use the
//! // current time; we're pinning this to a specific timestamp for the example.
//! let authorization = get_authorization_header_at(
//!     &credentials, "GET", "/resource/1?b=1&a=2", "example.com", 8000, Some("some-app-ext-data"), 1353832234);
//!
//! // Server side: normally this would come from your web framework.
//! let req = Request::get("/resource/1?b=1&a=2")
//!     .header("Host", "example.com:8000")
//!     .header("Authorization", authorization)
//!     .body(())
//!     .unwrap();
//! let parts = req.into_parts().0;
//!
//! let mut get_credentials_svc = service_for_credentials_fn(get_credentials);
//! let response = authenticate_request(&parts, false, &mut get_credentials_svc, &HawkOptions::default())
//!     .await
//!     .unwrap();
//! assert_eq!(response.credentials().id(), KEY_ID);
//! assert_eq!(response.ext(), Some("some-app-ext-data"));
//! # });
//! ```
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::missing_crate_level_docs)]

mod auth;
mod canonical;
mod constants;
mod credentials;
mod crypto;
mod error;
mod header;
mod issue;

pub use crate::{
    auth::{
        authenticate_http_request, authenticate_request, AuthenticatorFailure, AuthenticatorResponse,
        AuthenticatorResponseBuilder, AuthenticatorResponseBuilderError, HawkOptions,
    },
    canonical::{normalized_string, query_token, split_host_header, strip_query_token},
    credentials::{
        service_for_credentials_fn, Credentials, CredentialsBuilder, CredentialsBuilderError, GetCredentialsRequest,
        GetCredentialsRequestBuilder, GetCredentialsRequestBuilderError,
    },
    crypto::{calculate_mac, Algorithm, UnsupportedAlgorithm},
    error::HawkError,
    header::{format_header, parse_header, Attributes},
    issue::{get_authorization_header, get_authorization_header_at},
};
