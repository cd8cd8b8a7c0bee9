//! Bulk address import from tabular data.
//!
//! Imported files come from arbitrary sources: exported spreadsheets,
//! exchange statements, hand-maintained lists. No column or header
//! semantics are assumed; every cell is tested against the address shape
//! and the survivors are collected under their canonical form, so the
//! same address pasted in three casings collapses to one entry.

use std::collections::{BTreeSet, HashSet};

use alloy_primitives::Address;
use tracing::info;

use crate::address::normalize;
use crate::codec::{TabularCodec, TabularData};
use crate::errors::ImportError;

/// Extract every syntactically valid address from a cell grid.
///
/// Scans all cells regardless of position or surrounding content. The
/// returned set is deduplicated by canonical form; iteration order is a
/// property of the set, not a contract of this function — only membership
/// is.
///
/// # Examples
///
/// ```rust
/// use tallyscan::extract_addresses;
///
/// let grid = vec![
///     vec!["name".to_string(), "wallet".to_string()],
///     vec![
///         "alice".to_string(),
///         "0xd8da6bf26964af9d7eed9e03e53415d37aa96045".to_string(),
///     ],
///     vec![
///         "alice again".to_string(),
///         "0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045".to_string(),
///     ],
/// ];
///
/// let found = extract_addresses(&grid);
/// assert_eq!(found.len(), 1);
/// ```
pub fn extract_addresses(table: &TabularData) -> BTreeSet<Address> {
    table
        .iter()
        .flatten()
        .filter_map(|cell| normalize(cell).ok())
        .collect()
}

/// Parse file bytes with the given codec and extract addresses.
///
/// Distinguishes the two user-facing failure conditions: an unreadable
/// file ([`ImportError::Codec`]) and a readable file with nothing shaped
/// like an address in it ([`ImportError::NoAddressesFound`]).
pub fn import_addresses(
    bytes: &[u8],
    codec: &dyn TabularCodec,
) -> Result<BTreeSet<Address>, ImportError> {
    let grid = codec.parse(bytes).map_err(ImportError::codec)?;
    let found = extract_addresses(&grid);
    if found.is_empty() {
        return Err(ImportError::NoAddressesFound);
    }
    info!(count = found.len(), "Imported addresses from tabular input");
    Ok(found)
}

/// Merge found addresses into an existing wallet list.
///
/// Existing entries are preserved verbatim (casing and all) and compared
/// by canonical form only; a found address whose canonical form is already
/// present is dropped. New addresses are appended after the existing
/// entries, rendered in checksummed form.
///
/// # Examples
///
/// ```rust
/// use tallyscan::{extract_addresses, merge_wallets};
///
/// let existing = vec!["0xd8da6bf26964af9d7eed9e03e53415d37aa96045".to_string()];
/// let grid = vec![vec![
///     // same address, different casing: not re-added
///     "0xD8DA6BF26964AF9D7EED9E03E53415D37AA96045".to_string(),
///     "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".to_string(),
/// ]];
///
/// let merged = merge_wallets(&existing, &extract_addresses(&grid));
/// assert_eq!(merged.len(), 2);
/// assert_eq!(merged[0], existing[0]); // original entry untouched
/// ```
pub fn merge_wallets(existing: &[String], found: &BTreeSet<Address>) -> Vec<String> {
    let known: HashSet<Address> = existing
        .iter()
        .filter_map(|wallet| normalize(wallet).ok())
        .collect();

    let mut merged: Vec<String> = existing.to_vec();
    for address in found {
        if !known.contains(address) {
            merged.push(address.to_string());
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::CsvCodec;

    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    const VITALIK: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    fn grid(cells: &[&[&str]]) -> TabularData {
        cells
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_extract_scans_every_cell_ignoring_headers() {
        let table = grid(&[
            &["id", "note", "address"],
            // address hiding in the "note" column still counts
            &["1", USDC, "n/a"],
            &["2", "no address here", VITALIK],
        ]);
        let found = extract_addresses(&table);
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn test_extract_collapses_case_duplicates() {
        let lower = VITALIK.to_lowercase();
        let upper = VITALIK.to_uppercase().replace("0X", "0x");
        let table = vec![vec![lower], vec![upper]];
        assert_eq!(extract_addresses(&table).len(), 1);
    }

    #[test]
    fn test_extract_skips_malformed_cells() {
        let table = grid(&[&["0x123", "wallet", "", "0xZZdA6BF26964aF9D7eEd9e03E53415D37aA96045"]]);
        assert!(extract_addresses(&table).is_empty());
    }

    #[test]
    fn test_merge_preserves_existing_and_appends_new() {
        let existing = vec![VITALIK.to_lowercase(), "not-an-address".to_string()];
        let upper = VITALIK.to_uppercase().replace("0X", "0x");
        let table = vec![vec![upper, USDC.to_string()]];
        let merged = merge_wallets(&existing, &extract_addresses(&table));

        assert_eq!(merged.len(), 3);
        // originals verbatim, in order
        assert_eq!(merged[0], existing[0]);
        assert_eq!(merged[1], existing[1]);
        // only the genuinely new address appended, checksummed
        assert_eq!(merged[2], USDC);
    }

    #[test]
    fn test_merge_with_empty_found_is_identity() {
        let existing = vec![VITALIK.to_string()];
        let merged = merge_wallets(&existing, &BTreeSet::new());
        assert_eq!(merged, existing);
    }

    #[test]
    fn test_import_distinguishes_unreadable_from_empty() {
        // readable but nothing address-shaped
        let no_addresses = b"name,age\nalice,30\n";
        assert!(matches!(
            import_addresses(no_addresses, &CsvCodec),
            Err(ImportError::NoAddressesFound)
        ));

        // readable with one address
        let with_address = format!("wallet\n{VITALIK}\n");
        let found = import_addresses(with_address.as_bytes(), &CsvCodec).unwrap();
        assert_eq!(found.len(), 1);
    }
}
