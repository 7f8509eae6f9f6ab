use crate::Newtype;

/// Strongly typed request identifier backed by ULID.
///
/// A [`Newtype`] over [`ulid::Ulid`]: compares, hashes and encodes exactly as
/// the ULID does (serde emits the 26-character ULID string), and parsing a
/// malformed string fails with [`ulid::DecodeError`].
#[derive(Newtype, Clone, Copy, Debug)]
#[newtype(eq, ord, hash, serde, display, from_str)]
pub struct RequestId(ulid::Ulid);

impl RequestId {
    #[must_use]
    pub fn new() -> Self {
        Self::from_raw(ulid::Ulid::new())
    }

    /// Attempt to parse from a header string; if invalid, generate a new one.
    #[must_use]
    pub fn from_header_or_new(header_value: Option<&str>) -> Self {
        header_value
            .and_then(|s| s.parse::<RequestId>().ok())
            .unwrap_or_default()
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}
