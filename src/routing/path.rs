//! Identifier ↔ URL path codec.
//!
//! # Responsibilities
//! - Render a hierarchical identifier ("a::b::c") as a URL path ("a/b/c")
//! - Recover the identifier from a URL path
//!
//! # Design Decisions
//! - Pure, total functions; no validation, no normalization
//! - Deliberately lossy for segments containing the separator or a slash:
//!   the encoding has no escape mechanism, and inventing one would change
//!   every published URL

/// The namespace separator between identifier segments.
pub const SEPARATOR: &str = "::";

/// Render an identifier as a URL path: every `::` becomes `/`.
///
/// For identifiers whose segments contain neither `/` nor `::`,
/// `decode(encode(id)) == id`.
pub fn encode(identifier: &str) -> String {
    identifier.replace(SEPARATOR, "/")
}

/// Recover an identifier from a URL path: every `/` becomes `::`.
///
/// Idempotent on already-decoded input: a separator-form string contains no
/// slashes, so it passes through unchanged.
pub fn decode(url_path: &str) -> String {
    url_path.replace('/', SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode("a::b::c"), "a/b/c");
        assert_eq!(encode("serde"), "serde");
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode("a/b/c"), "a::b::c");
        assert_eq!(decode("serde"), "serde");
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_round_trip() {
        for id in ["serde", "serde::de", "tokio::sync::watch", "a::b::c::d"] {
            assert_eq!(decode(&encode(id)), id);
        }
    }

    #[test]
    fn test_decode_is_idempotent_on_separator_form() {
        assert_eq!(decode("serde::de"), "serde::de");
    }

    #[test]
    fn test_lossy_segments_do_not_round_trip() {
        // Known limitation: a segment containing a slash collapses into
        // extra path segments and comes back as a separator.
        let id = "a::b/c";
        assert_eq!(decode(&encode(id)), "a::b::c");
    }
}
