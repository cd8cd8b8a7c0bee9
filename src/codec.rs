//! Tabular codec abstraction.
//!
//! Spreadsheet parsing and writing is a collaborator, not a core concern:
//! the importer and exporter only ever see a row-major grid of strings.
//! The [`TabularCodec`] trait is the seam; [`CsvCodec`] is the in-crate
//! implementation, and `.xlsx`/`.xls` codecs are supplied by the embedding
//! application behind the same trait.

use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};

/// Row-major grid of cell values, as parsed from or written to a file.
///
/// No header semantics are attached at this level; consumers that care
/// about headers (the exporter does, the importer deliberately does not)
/// impose their own.
pub type TabularData = Vec<Vec<String>>;

/// Errors produced by a tabular codec implementation.
pub type CodecError = Box<dyn std::error::Error + Send + Sync>;

/// Converts between file bytes and a row-major cell grid.
pub trait TabularCodec: Send + Sync {
    /// Parse file content into a grid of cells.
    fn parse(&self, bytes: &[u8]) -> Result<TabularData, CodecError>;

    /// Serialize a grid of cells into file content.
    fn serialize(&self, grid: &[Vec<String>]) -> Result<Vec<u8>, CodecError>;
}

/// CSV codec.
///
/// Parsing is lenient: no header row is assumed and ragged rows are
/// accepted, since imported files come from arbitrary sources. Writing is
/// defensive: every field is quoted unconditionally, with embedded quotes
/// doubled, so embedded delimiters can never corrupt the output.
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

impl TabularCodec for CsvCodec {
    fn parse(&self, bytes: &[u8]) -> Result<TabularData, CodecError> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(bytes);

        let mut grid = Vec::new();
        for record in reader.records() {
            let record = record?;
            grid.push(record.iter().map(str::to_string).collect());
        }
        Ok(grid)
    }

    fn serialize(&self, grid: &[Vec<String>]) -> Result<Vec<u8>, CodecError> {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(Vec::new());

        for row in grid {
            writer.write_record(row)?;
        }
        Ok(writer.into_inner().map_err(|e| e.into_error())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headerless_grid() {
        let grid = CsvCodec.parse(b"a,b\nc,d\n").unwrap();
        assert_eq!(grid, vec![vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_parse_accepts_ragged_rows() {
        let grid = CsvCodec.parse(b"a,b,c\nd\n").unwrap();
        assert_eq!(grid.len(), 2);
        assert_eq!(grid[1], vec!["d"]);
    }

    #[test]
    fn test_serialize_quotes_every_field() {
        let grid = vec![vec!["plain".to_string(), "with,comma".to_string()]];
        let bytes = CsvCodec.serialize(&grid).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\"plain\",\"with,comma\"\n");
    }

    #[test]
    fn test_serialize_doubles_embedded_quotes() {
        let grid = vec![vec!["say \"hi\"".to_string()]];
        let bytes = CsvCodec.serialize(&grid).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\"say \"\"hi\"\"\"\n");
    }

    #[test]
    fn test_round_trip_preserves_cells() {
        let grid = vec![
            vec!["a".to_string(), "b,c".to_string()],
            vec!["\"quoted\"".to_string(), "".to_string()],
        ];
        let bytes = CsvCodec.serialize(&grid).unwrap();
        assert_eq!(CsvCodec.parse(&bytes).unwrap(), grid);
    }
}
