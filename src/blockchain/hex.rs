//! Hex quantity decoding for RPC responses.

use std::num::IntErrorKind;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Decode a JSON-RPC hex quantity (e.g. `"0x1b4"`) into a `u64`.
///
/// The `0x` prefix is optional. Values wider than 64 bits fail with
/// [`BlockchainError::Overflow`].
pub fn hex_to_u64(value: &str) -> BlockchainResult<u64> {
    if value == "0x0" {
        return Ok(0);
    }

    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    // from_str_radix tolerates a leading '+', RPC quantities never carry one.
    if digits.starts_with('+') {
        return Err(BlockchainError::InvalidHex(value.to_string()));
    }

    u64::from_str_radix(digits, 16).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => BlockchainError::Overflow(value.to_string()),
        _ => BlockchainError::InvalidHex(value.to_string()),
    })
}
