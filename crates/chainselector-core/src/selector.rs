//! Selector derivation.
//!
//! The selector of a function or custom error is the first 4 bytes of the
//! keccak256 hash of its canonical signature:
//!   keccak256("transfer(address,uint256)")[..4] → 0xa9059cbb
//!
//! Input is always normalized first, so `"transfer(address to, uint256 amount)"`
//! yields the same selector as its canonical form.

use tiny_keccak::{Hasher, Keccak};

use crate::normalize::normalize_signature;
use crate::types::{DecodedSignature, Selector};

/// Well-known signatures, including one written with parameter names.
pub static EXAMPLE_SIGNATURES: &[&str] = &[
    "transfer(address,uint256)",
    "balanceOf(address)",
    "approve(address,uint256)",
    "Transfer(address,address,uint256)",
    "Error(string)",
    "transfer(address to, uint256 amount)",
];

/// keccak256 of raw bytes.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    let mut output = [0u8; 32];
    hasher.update(data);
    hasher.finalize(&mut output);
    output
}

/// Compute the selector of any signature string.
///
/// Never fails: garbage in simply produces a selector nothing else maps to.
pub fn selector(raw: &str) -> Selector {
    let canonical = normalize_signature(raw);
    selector_of_canonical(&canonical)
}

/// Compute the selector as `0x` + 8 lowercase hex digits.
pub fn selector_to_hex(raw: &str) -> String {
    selector(raw).to_hex()
}

/// Normalize and hash a signature, keeping the intermediate canonical form.
///
/// Returns `None` when the input is blank.
pub fn decode_signature(raw: &str) -> Option<DecodedSignature> {
    let input = raw.trim();
    if input.is_empty() {
        return None;
    }
    let canonical = normalize_signature(input);
    let selector = selector_of_canonical(&canonical);
    Some(DecodedSignature {
        input: input.to_string(),
        canonical,
        selector,
    })
}

fn selector_of_canonical(canonical: &str) -> Selector {
    let hash = keccak256(canonical.as_bytes());
    Selector::new([hash[0], hash[1], hash[2], hash[3]])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::normalize_hex_selector;

    #[test]
    fn erc20_transfer_selector() {
        assert_eq!(selector_to_hex("transfer(address,uint256)"), "0xa9059cbb");
    }

    #[test]
    fn erc20_balance_of_selector() {
        assert_eq!(selector_to_hex("balanceOf(address)"), "0x70a08231");
    }

    #[test]
    fn named_parameters_hash_like_canonical() {
        assert_eq!(
            selector_to_hex("transfer(address to, uint256 amount)"),
            selector_to_hex("transfer(address,uint256)")
        );
    }

    #[test]
    fn keccak_of_empty_input() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn blank_signature_still_hashes() {
        // keccak256("")[..4]
        assert_eq!(selector_to_hex(""), "0xc5d24601");
        assert_eq!(selector_to_hex("   "), "0xc5d24601");
    }

    #[test]
    fn deterministic() {
        for sig in EXAMPLE_SIGNATURES {
            assert_eq!(selector_to_hex(sig), selector_to_hex(sig));
        }
    }

    #[test]
    fn output_validates_to_itself() {
        for sig in EXAMPLE_SIGNATURES {
            let hex = selector_to_hex(sig);
            assert_eq!(normalize_hex_selector(&hex).as_deref(), Some(hex.as_str()));
        }
    }

    #[test]
    fn decode_keeps_canonical_form() {
        let decoded = decode_signature("  transfer(address to, uint256 amount) ").unwrap();
        assert_eq!(decoded.input, "transfer(address to, uint256 amount)");
        assert_eq!(decoded.canonical, "transfer(address,uint256)");
        assert_eq!(decoded.selector.to_hex(), "0xa9059cbb");
        assert_eq!(decoded.to_string(), "0xa9059cbb transfer(address,uint256)");
    }

    #[test]
    fn decode_blank_is_none() {
        assert!(decode_signature("").is_none());
        assert!(decode_signature(" \n").is_none());
    }
}
