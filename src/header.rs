//! Parsing and formatting of Hawk `Authorization` header values.
//!
//! A token has the form:
//! ```text
//! Hawk id="<id>", ts="<timestamp>", ext="<ext>", mac="<base64 mac>"
//! ```
//!
//! Attribute order does not matter and `ext` is optional. The same syntax is used when the token is carried in the
//! `hawk` query parameter.

use {
    crate::{constants::HAWK_SCHEME, HawkError},
    lazy_static::lazy_static,
    log::trace,
    regex::Regex,
};

lazy_static! {
    /// Scheme name (case-insensitive) followed by the attribute list.
    static ref HAWK_HEADER_RE: Regex = Regex::new(r"^[Hh][Aa][Ww][Kk](?:\s+(.*))?$").unwrap();

    /// A single `key="value"` attribute and its trailing separator.
    static ref ATTRIBUTE_RE: Regex = Regex::new(r#"(id|ts|ext|mac)="([^"\\]*)"\s*(?:,\s*|$)"#).unwrap();
}

/// The attributes of a parsed token.
///
/// Parsing only checks the syntax, so any attribute may be missing here; [`is_complete`][Self::is_complete] tells
/// whether the mandatory ones are present.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Attributes {
    id: Option<String>,
    ts: Option<String>,
    mac: Option<String>,
    ext: Option<String>,
}

impl Attributes {
    /// The credentials id.
    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// The timestamp, in seconds since the epoch, as sent by the client. This is not validated.
    #[inline]
    pub fn ts(&self) -> Option<&str> {
        self.ts.as_deref()
    }

    /// The base64-encoded MAC.
    #[inline]
    pub fn mac(&self) -> Option<&str> {
        self.mac.as_deref()
    }

    /// The application-defined extension data.
    #[inline]
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }

    /// Indicates whether `id`, `ts`, and `mac` are all present and non-empty.
    pub fn is_complete(&self) -> bool {
        [self.id(), self.ts(), self.mac()].iter().all(|value| matches!(value, Some(v) if !v.is_empty()))
    }

    fn slot(&mut self, key: &str) -> &mut Option<String> {
        match key {
            "id" => &mut self.id,
            "ts" => &mut self.ts,
            "mac" => &mut self.mac,
            _ => &mut self.ext,
        }
    }
}

/// Parse a token into its attributes.
///
/// # Errors
/// * [`HawkError::IncorrectScheme`] if the token does not start with `Hawk` (in any case).
/// * [`HawkError::InvalidHeaderFormat`] if nothing follows the scheme.
/// * [`HawkError::UnknownAttributes`] if anything other than `id`, `ts`, `ext`, and `mac` attributes is present.
///
/// If an attribute appears more than once, the first occurrence is kept and the others are ignored.
pub fn parse_header(header: &str) -> Result<Attributes, HawkError> {
    let Some(cap) = HAWK_HEADER_RE.captures(header) else {
        trace!("parse_header: incorrect scheme: {:?}", header);
        return Err(HawkError::IncorrectScheme);
    };

    let attribute_list = match cap.get(1) {
        Some(m) if !m.as_str().is_empty() => m.as_str(),
        _ => {
            trace!("parse_header: no attributes follow the scheme");
            return Err(HawkError::InvalidHeaderFormat);
        }
    };

    let mut attributes = Attributes::default();
    let mut unmatched = String::new();
    let mut last_end = 0;

    for attr in ATTRIBUTE_RE.captures_iter(attribute_list) {
        let whole = attr.get(0).expect("capture group 0 always participates");
        unmatched.push_str(&attribute_list[last_end..whole.start()]);
        last_end = whole.end();

        let slot = attributes.slot(&attr[1]);
        if slot.is_none() {
            *slot = Some(attr[2].to_string());
        }
    }

    unmatched.push_str(&attribute_list[last_end..]);

    if !unmatched.is_empty() {
        trace!("parse_header: unknown attributes: {:?}", unmatched);
        return Err(HawkError::UnknownAttributes);
    }

    Ok(attributes)
}

/// Format a token.
///
/// The `ext` attribute is only emitted when it is present and non-empty. Values are not escaped: an `id` or `ext`
/// containing a double quote or backslash produces a token that will not parse.
pub fn format_header(id: &str, timestamp: &str, mac: &str, ext: Option<&str>) -> String {
    match ext {
        Some(ext) if !ext.is_empty() => {
            format!(r#"{} id="{}", ts="{}", ext="{}", mac="{}""#, HAWK_SCHEME, id, timestamp, ext, mac)
        }
        _ => format!(r#"{} id="{}", ts="{}", mac="{}""#, HAWK_SCHEME, id, timestamp, mac),
    }
}
