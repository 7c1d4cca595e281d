//! Core value types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::InvalidSelector;

/// A 4-byte function/error selector.
///
/// Renders as `0x` + 8 lowercase hex digits, which is also its serde form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Selector(pub [u8; 4]);

impl Selector {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    /// Parse user-supplied hex (optional `0x`, any case, surrounding whitespace).
    ///
    /// Returns `None` on anything that is not exactly 4 bytes of hex.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let canonical = crate::validate::normalize_hex_selector(raw)?;
        let mut bytes = [0u8; 4];
        hex::decode_to_slice(&canonical[2..], &mut bytes).ok()?;
        Some(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    /// Canonical `0x`-prefixed lowercase hex.
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl From<[u8; 4]> for Selector {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<Selector> for [u8; 4] {
    fn from(sel: Selector) -> Self {
        sel.0
    }
}

impl From<Selector> for u32 {
    fn from(sel: Selector) -> Self {
        u32::from_be_bytes(sel.0)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Selector {
    type Err = InvalidSelector;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| InvalidSelector::new(s))
    }
}

impl Serialize for Selector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Selector {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// The forward-direction result for one signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedSignature {
    /// Trimmed input as the user wrote it.
    pub input: String,
    /// Canonical signature that was hashed.
    pub canonical: String,
    /// First 4 bytes of keccak256(canonical).
    pub selector: Selector,
}

impl fmt::Display for DecodedSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.selector, self.canonical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_lowercase_prefixed() {
        let sel = Selector::new([0xA9, 0x05, 0x9C, 0xBB]);
        assert_eq!(sel.to_string(), "0xa9059cbb");
        assert_eq!(sel.to_hex(), "0xa9059cbb");
    }

    #[test]
    fn parse_accepts_mixed_case_and_no_prefix() {
        let a: Selector = "0xA9059CBB".parse().unwrap();
        let b: Selector = " a9059cbb ".parse().unwrap();
        assert_eq!(a, b);
        assert_eq!(u32::from(a), 0xa9059cbb);
    }

    #[test]
    fn parse_rejects_short_input() {
        let err = "0xa9059c".parse::<Selector>().unwrap_err();
        assert_eq!(err.input, "0xa9059c");
    }

    #[test]
    fn serde_uses_hex_string() {
        let sel = Selector::new([0x70, 0xa0, 0x82, 0x31]);
        let json = serde_json::to_string(&sel).unwrap();
        assert_eq!(json, "\"0x70a08231\"");
        let back: Selector = serde_json::from_str("\"0X70A08231\"").unwrap();
        assert_eq!(back, sel);
        assert!(serde_json::from_str::<Selector>("\"0x70a0\"").is_err());
    }
}
