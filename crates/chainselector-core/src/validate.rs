//! Hex selector validation.

/// Normalize user-supplied selector hex to `0x` + 8 lowercase hex digits.
///
/// Input is trimmed and lowercased and a single leading `0x` is stripped. The
/// remainder must be exactly 8 hex digits. Returns `None` for anything else,
/// including an empty string, a doubled `0x0x` prefix, or a full 32-byte hash.
pub fn normalize_hex_selector(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let digits = lowered.strip_prefix("0x").unwrap_or(&lowered);
    if digits.len() == 8 && digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        Some(format!("0x{digits}"))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uppercase_with_prefix() {
        assert_eq!(normalize_hex_selector("0xA9059CBB").as_deref(), Some("0xa9059cbb"));
    }

    #[test]
    fn accepts_without_prefix() {
        assert_eq!(normalize_hex_selector("a9059cbb").as_deref(), Some("0xa9059cbb"));
    }

    #[test]
    fn accepts_surrounding_whitespace_and_uppercase_prefix() {
        assert_eq!(normalize_hex_selector("  0XA9059cbb\n").as_deref(), Some("0xa9059cbb"));
    }

    #[test]
    fn rejects_wrong_length() {
        assert_eq!(normalize_hex_selector("0xa9059c"), None);
        assert_eq!(normalize_hex_selector("0xa9059cbb00"), None);
        assert_eq!(
            normalize_hex_selector(
                "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef"
            ),
            None
        );
    }

    #[test]
    fn rejects_non_hex() {
        assert_eq!(normalize_hex_selector("zzzzzzzz"), None);
        assert_eq!(normalize_hex_selector("0xa905 9cb"), None);
    }

    #[test]
    fn rejects_double_prefix() {
        assert_eq!(normalize_hex_selector("0x0xa9059cbb"), None);
        assert_eq!(normalize_hex_selector("0x0x"), None);
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(normalize_hex_selector(""), None);
        assert_eq!(normalize_hex_selector("   "), None);
        assert_eq!(normalize_hex_selector("0x"), None);
    }

    #[test]
    fn rejects_multibyte_text_of_matching_length() {
        // 8 bytes, but not hex
        assert_eq!(normalize_hex_selector("éééé"), None);
    }
}
