//! The two shapes a share param takes on the wire.

use std::fmt;

/// Prefix marking a param whose token carries a raw-DEFLATE stream.
pub const COMPRESSED_MARKER: &str = "z:";

/// A share param split into its marker and base64url token.
///
/// Base64url tokens never contain `:`, so the prefix is unambiguous.
///
/// ```
/// use olumi_snapshot_share::SharedParam;
///
/// assert_eq!(SharedParam::parse("z:abc"), SharedParam::Compressed("abc"));
/// assert_eq!(SharedParam::parse("abc"), SharedParam::Raw("abc"));
/// assert_eq!(SharedParam::Compressed("abc").to_string(), "z:abc");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharedParam<'a> {
    /// Token of the UTF-8 JSON bytes.
    Raw(&'a str),
    /// Token of the deflated UTF-8 JSON bytes.
    Compressed(&'a str),
}

impl<'a> SharedParam<'a> {
    pub fn parse(param: &'a str) -> Self {
        match param.strip_prefix(COMPRESSED_MARKER) {
            Some(token) => SharedParam::Compressed(token),
            None => SharedParam::Raw(param),
        }
    }

    pub fn token(&self) -> &'a str {
        match *self {
            SharedParam::Raw(token) | SharedParam::Compressed(token) => token,
        }
    }

    pub fn is_compressed(&self) -> bool {
        matches!(self, SharedParam::Compressed(_))
    }

    /// Length of the rendered param in characters.
    pub fn len(&self) -> usize {
        match self {
            SharedParam::Raw(token) => token.len(),
            SharedParam::Compressed(token) => COMPRESSED_MARKER.len() + token.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for SharedParam<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SharedParam::Raw(token) => f.write_str(token),
            SharedParam::Compressed(token) => write!(f, "{COMPRESSED_MARKER}{token}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_only_counts_at_the_start() {
        assert_eq!(SharedParam::parse("abz:c"), SharedParam::Raw("abz:c"));
        assert_eq!(SharedParam::parse("z:"), SharedParam::Compressed(""));
        assert_eq!(SharedParam::parse("Z:abc"), SharedParam::Raw("Z:abc"));
    }

    #[test]
    fn len_includes_marker() {
        assert_eq!(SharedParam::Compressed("abcd").len(), 6);
        assert_eq!(SharedParam::Raw("abcd").len(), 4);
        assert!(SharedParam::Raw("").is_empty());
        assert!(!SharedParam::Compressed("").is_empty());
    }
}
