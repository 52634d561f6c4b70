//! Fragment (anchor) extraction.

/// Strips one leading `#` from a fragment as reported by the browser.
///
/// An absent fragment is the empty string, never a placeholder like `null`.
pub fn strip_hash(hash: &str) -> &str {
    hash.strip_prefix('#').unwrap_or(hash)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_leading_hash() {
        assert_eq!(strip_hash("#foo"), "foo");
        assert_eq!(strip_hash("foo"), "foo");
        assert_eq!(strip_hash("##foo"), "#foo");
    }

    #[test]
    fn empty() {
        assert_eq!(strip_hash(""), "");
        assert_eq!(strip_hash("#"), "");
    }
}
