//! Stored value encoding: the literal strings `"true"` and `"false"`.

pub fn encode_checked(checked: bool) -> &'static str {
    if checked { "true" } else { "false" }
}

/// Anything other than the exact string `"true"` reads as unchecked
pub fn decode_checked(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode() {
        assert_eq!(encode_checked(true), "true");
        assert_eq!(encode_checked(false), "false");
    }

    #[test]
    fn test_decode_is_exact() {
        assert!(decode_checked("true"));
        assert!(!decode_checked("false"));
        assert!(!decode_checked("TRUE"));
        assert!(!decode_checked(" true"));
        assert!(!decode_checked("1"));
        assert!(!decode_checked(""));
    }
}
