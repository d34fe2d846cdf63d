use crate::error::{ConvertError, Result};
use alloy::primitives::keccak256;

const ADDRESS_HEX_LEN: usize = 40;

/// Clean a hex string by removing the "0x" prefix and whitespace
pub fn clean_hex(s: &str) -> &str {
    let s = s.trim();
    if let Some(stripped) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        stripped
    } else {
        s
    }
}

/// Normalize a (possibly short) hex token into an EIP-55 checksummed address.
///
/// Fuzzers print small actor addresses unpadded (`0x10000`), so the payload is
/// left-padded with zeros to 40 digits before the checksum is applied. Each
/// letter digit is upper-cased iff the matching nibble of
/// `keccak256(lowercase_hex)` is >= 8.
pub fn to_checksum_address(token: &str) -> Result<String> {
    let payload = clean_hex(token);
    let invalid = |reason: String| ConvertError::InvalidAddress {
        token: token.to_string(),
        reason,
    };

    if payload.len() > ADDRESS_HEX_LEN {
        return Err(invalid(format!(
            "{} hex digits exceeds the {ADDRESS_HEX_LEN}-digit address width",
            payload.len()
        )));
    }
    if let Some(bad) = payload.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(invalid(format!("non-hex character '{bad}'")));
    }

    let lower = format!("{:0>width$}", payload.to_ascii_lowercase(), width = ADDRESS_HEX_LEN);
    let hash_nibbles = ::hex::encode(keccak256(lower.as_bytes()));

    let mut out = String::with_capacity(ADDRESS_HEX_LEN + 2);
    out.push_str("0x");
    for (digit, nibble) in lower.chars().zip(hash_nibbles.chars()) {
        let upper = nibble.to_digit(16).is_some_and(|n| n >= 8);
        if digit.is_ascii_alphabetic() && upper {
            out.push(digit.to_ascii_uppercase());
        } else {
            out.push(digit);
        }
    }
    Ok(out)
}
