//! Wallet and contract address normalization.
//!
//! Addresses arrive as free-form user input: pasted from explorers,
//! exported from spreadsheets, typed by hand. This module validates the
//! structural shape (`0x` prefix, exactly 42 characters) and canonicalizes
//! the survivors into [`Address`] values whose `Display` form is the
//! EIP-55 checksummed representation. Two inputs differing only in letter
//! case normalize to the identical canonical value.

use alloy_primitives::Address;

use crate::errors::AddressError;

/// Total length of a textual EVM address: `0x` plus 40 hex characters.
pub const ADDRESS_LEN: usize = 42;

/// Validate and canonicalize an address string.
///
/// The structural gate is applied first: after trimming surrounding
/// whitespace, the candidate must start with the literal `0x` prefix and
/// be exactly 42 characters long. Only then is the hex payload parsed.
/// Anything that fails either step is rejected with
/// [`AddressError::InvalidAddress`].
///
/// The returned [`Address`] is canonical by construction: its `Display`
/// implementation renders the EIP-55 checksummed form, so normalizing a
/// previously normalized string is a no-op.
///
/// This is a pure function with no side effects.
///
/// # Examples
///
/// ```rust
/// use tallyscan::normalize;
///
/// let lower = normalize("0xd8da6bf26964af9d7eed9e03e53415d37aa96045").unwrap();
/// let upper = normalize("0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045").unwrap();
/// assert_eq!(lower, upper);
/// assert_eq!(
///     lower.to_string(),
///     "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045"
/// );
///
/// assert!(normalize("0x123").is_err());
/// assert!(normalize("not an address").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<Address, AddressError> {
    let candidate = raw.trim();
    if !candidate.starts_with("0x") || candidate.len() != ADDRESS_LEN {
        return Err(AddressError::invalid(raw));
    }
    candidate
        .parse::<Address>()
        .map_err(|_| AddressError::invalid(raw))
}

/// Render an address in its canonical EIP-55 checksummed form.
///
/// Equivalent to `address.to_string()`; provided as a named operation so
/// call sites read as intent rather than as a formatting detail.
pub fn checksummed(address: Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    #[test]
    fn test_normalize_case_insensitive() {
        let variants = [
            VITALIK.to_string(),
            VITALIK.to_lowercase(),
            VITALIK.to_uppercase().replace("0X", "0x"),
        ];
        let canonical: Vec<_> = variants.iter().map(|v| normalize(v).unwrap()).collect();
        assert_eq!(canonical[0], canonical[1]);
        assert_eq!(canonical[1], canonical[2]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = normalize(&VITALIK.to_lowercase()).unwrap();
        let second = normalize(&checksummed(first)).unwrap();
        assert_eq!(first, second);
        assert_eq!(checksummed(first), checksummed(second));
    }

    #[test]
    fn test_normalize_produces_checksummed_display() {
        let addr = normalize(&VITALIK.to_lowercase()).unwrap();
        assert_eq!(addr.to_string(), VITALIK);
        assert_eq!(checksummed(addr), VITALIK);
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let addr = normalize(&format!("  {VITALIK} \n")).unwrap();
        assert_eq!(addr.to_string(), VITALIK);
    }

    #[test]
    fn test_normalize_rejects_malformed_input() {
        // too short
        assert!(normalize("0x123").is_err());
        // too long
        assert!(normalize(&format!("{VITALIK}ab")).is_err());
        // missing prefix
        assert!(normalize("d8dA6BF26964aF9D7eEd9e03E53415D37aA96045ab").is_err());
        // non-hex characters at the right length
        assert!(normalize("0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045").is_err());
        // empty and junk
        assert!(normalize("").is_err());
        assert!(normalize("wallet").is_err());
    }

    #[test]
    fn test_invalid_address_retains_input() {
        let err = normalize("0x123").unwrap_err();
        let AddressError::InvalidAddress { input } = err;
        assert_eq!(input, "0x123");
    }
}
