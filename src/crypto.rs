//! MAC calculation for Hawk tokens.

use {
    crate::constants::{HMAC_SHA_1, HMAC_SHA_256},
    base64::{engine::general_purpose::STANDARD as BASE64, Engine},
    hmac::{Hmac, Mac},
    sha1::Sha1,
    sha2::Sha256,
    std::{
        fmt::{Display, Formatter, Result as FmtResult},
        str::FromStr,
    },
};

type HmacSha1 = Hmac<Sha1>;
type HmacSha256 = Hmac<Sha256>;

/// The MAC algorithms a set of [Credentials][crate::Credentials] may name.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// `hmac-sha-1`
    HmacSha1,

    /// `hmac-sha-256`
    HmacSha256,
}

impl Algorithm {
    /// The identifier of this algorithm as it appears in credentials.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HmacSha1 => HMAC_SHA_1,
            Self::HmacSha256 => HMAC_SHA_256,
        }
    }

    /// Calculate the keyed hash of `value` and return it base64-encoded.
    pub fn mac(&self, key: &[u8], value: &[u8]) -> String {
        match self {
            Self::HmacSha1 => BASE64.encode(hmac_sha1(key, value)),
            Self::HmacSha256 => BASE64.encode(hmac_sha256(key, value)),
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

/// Error returned by `Algorithm::from_str` when the identifier is not supported.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnsupportedAlgorithm(pub String);

impl Display for UnsupportedAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Unsupported algorithm: '{}'", self.0)
    }
}

impl std::error::Error for UnsupportedAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnsupportedAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            HMAC_SHA_1 => Ok(Self::HmacSha1),
            HMAC_SHA_256 => Ok(Self::HmacSha256),
            _ => Err(UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Wrapper function to form a HMAC-SHA1 operation.
#[inline(always)]
pub(crate) fn hmac_sha1(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha1::new_from_slice(key).expect("HMAC can take a key of any size");
    mac.update(value);
    mac.finalize().into_bytes().to_vec()
}

/// Wrapper function to form a HMAC-SHA256 operation.
#[inline(always)]
pub(crate) fn hmac_sha256(key: &[u8], value: &[u8]) -> Vec<u8> {
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC can take a key of any size");
    mac.update(value);
    mac.finalize().into_bytes().to_vec()
}

/// Calculate the base64-encoded MAC of a normalized string.
///
/// `algorithm` is the textual identifier from the credentials. If it is not one of `hmac-sha-1` or `hmac-sha-256`,
/// this returns an empty string; callers must treat that as "unsupported".
pub fn calculate_mac(key: &str, algorithm: &str, normalized: &str) -> String {
    match Algorithm::from_str(algorithm) {
        Ok(algorithm) => algorithm.mac(key.as_bytes(), normalized.as_bytes()),
        Err(e) => {
            log::debug!("calculate_mac: {}", e);
            String::new()
        }
    }
}
