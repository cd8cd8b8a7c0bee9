//! Result set export to CSV and spreadsheet formats.
//!
//! Export is a re-rendering from raw values, never from display strings:
//! the balance column is derived from the stored `f64` with exactly
//! [`DISPLAY_DIGITS`](crate::DISPLAY_DIGITS) fractional digits at the
//! moment of export. Row order in the output equals row order in the
//! result set; nothing is re-sorted.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::codec::{CsvCodec, TabularCodec, TabularData};
use crate::errors::ExportError;
use crate::format::DISPLAY_DIGITS;
use crate::types::BalanceRow;

/// Fixed export column order. Case-sensitive; the first grid row is
/// exactly this header.
pub const EXPORT_HEADER: [&str; 7] = [
    "chain", "wallet", "asset", "contract", "decimals", "balance", "error",
];

/// Render a result set as a row-major grid: the fixed header followed by
/// one record per row, in input order.
///
/// Absent fields (no wallet on a chain-level row, no balance on an error
/// row) become empty strings, so the grid is always rectangular.
pub fn to_grid(rows: &[BalanceRow]) -> TabularData {
    let mut grid = Vec::with_capacity(rows.len() + 1);
    grid.push(EXPORT_HEADER.iter().map(|h| h.to_string()).collect());
    grid.extend(rows.iter().map(record));
    grid
}

/// Serialize a result set to CSV bytes.
///
/// Every field is quoted unconditionally with doubled-quote escaping, so
/// error messages containing delimiters or quotes can never corrupt the
/// file.
pub fn to_csv(rows: &[BalanceRow]) -> Result<Vec<u8>, ExportError> {
    CsvCodec.serialize(&to_grid(rows)).map_err(ExportError::csv)
}

/// Serialize a result set through an external spreadsheet codec.
///
/// The codec receives the same grid the CSV path uses; the byte format
/// (`.xlsx`, `.xls`, ...) is entirely the codec's concern.
pub fn to_spreadsheet(
    rows: &[BalanceRow],
    codec: &dyn TabularCodec,
) -> Result<Vec<u8>, ExportError> {
    codec.serialize(&to_grid(rows)).map_err(ExportError::codec)
}

/// Timestamped export filename: `evm_balances_<ISO8601 UTC>.<extension>`.
pub fn export_filename(extension: &str) -> String {
    export_filename_at(extension, Utc::now())
}

/// [`export_filename`] with an explicit timestamp, for deterministic
/// testing.
pub fn export_filename_at(extension: &str, at: DateTime<Utc>) -> String {
    format!(
        "evm_balances_{}.{extension}",
        at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

fn record(row: &BalanceRow) -> Vec<String> {
    vec![
        row.chain_id.clone(),
        row.wallet.clone().unwrap_or_default(),
        row.asset.clone().unwrap_or_default(),
        row.contract
            .map(|contract| contract.to_string())
            .unwrap_or_default(),
        row.decimals
            .map(|decimals| decimals.to_string())
            .unwrap_or_default(),
        row.balance
            .map(|balance| format!("{balance:.digits$}", digits = DISPLAY_DIGITS))
            .unwrap_or_default(),
        row.error.as_ref().map(ToString::to_string).unwrap_or_default(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_rows() -> Vec<BalanceRow> {
        let usdc = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"
            .parse()
            .unwrap();
        vec![
            BalanceRow::native("eth", "0xabc", "ETH", 1234.56789, 18),
            BalanceRow::token("eth", "0xabc", "USDC", usdc, 100.25, 6),
            BalanceRow::native_error("eth", "0xdef", "ETH", "timeout"),
            BalanceRow::chain_unreachable("base", "connection refused"),
        ]
    }

    #[test]
    fn test_grid_has_header_and_preserves_row_order() {
        let grid = to_grid(&sample_rows());
        assert_eq!(grid.len(), 5);
        assert_eq!(grid[0], EXPORT_HEADER.map(String::from).to_vec());
        assert_eq!(grid[1][0], "eth");
        assert_eq!(grid[4][0], "base");
    }

    #[test]
    fn test_balance_rendered_with_four_fractional_digits() {
        let grid = to_grid(&sample_rows());
        assert_eq!(grid[1][5], "1234.5679");
        assert_eq!(grid[2][5], "100.2500");
    }

    #[test]
    fn test_error_rows_have_empty_balance_and_message() {
        let grid = to_grid(&sample_rows());
        assert_eq!(grid[3][5], "");
        assert_eq!(grid[3][6], "native error: timeout");

        // chain-level row: no wallet, no asset, no contract
        assert_eq!(grid[4][1], "");
        assert_eq!(grid[4][2], "");
        assert_eq!(grid[4][3], "");
        assert_eq!(grid[4][6], "RPC connect error: connection refused");
    }

    #[test]
    fn test_contract_column_distinguishes_native_and_token() {
        let grid = to_grid(&sample_rows());
        assert_eq!(grid[1][3], "native");
        assert_eq!(grid[2][3], "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
    }

    #[test]
    fn test_csv_quotes_every_field() {
        let bytes = to_csv(&sample_rows()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let first_line = text.lines().next().unwrap();
        assert_eq!(
            first_line,
            "\"chain\",\"wallet\",\"asset\",\"contract\",\"decimals\",\"balance\",\"error\""
        );
        assert!(text.lines().all(|line| line.starts_with('"')));
    }

    #[test]
    fn test_spreadsheet_export_goes_through_codec() {
        // CsvCodec doubles as a stand-in spreadsheet codec here
        let via_codec = to_spreadsheet(&sample_rows(), &CsvCodec).unwrap();
        let via_csv = to_csv(&sample_rows()).unwrap();
        assert_eq!(via_codec, via_csv);
    }

    #[test]
    fn test_export_filename_shape() {
        let at = Utc.with_ymd_and_hms(2026, 8, 24, 12, 30, 5).unwrap();
        assert_eq!(
            export_filename_at("csv", at),
            "evm_balances_2026-08-24T12:30:05Z.csv"
        );
        assert!(export_filename("xlsx").starts_with("evm_balances_"));
        assert!(export_filename("xlsx").ends_with(".xlsx"));
    }
}
