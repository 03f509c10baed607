//! Sources of already-decoded integer rows.
//!
//! Loaders validate their input up front so tables only ever receive
//! rectangular data.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{Position, ReaderBuilder, StringRecord, Trim};

use crate::error::DbError;

/// Provides a fixed column count and the rows to load.
pub trait DataLoader {
    /// Width of every row.
    fn num_cols(&self) -> usize;

    /// Rows in load order.
    fn rows(&self) -> &[Vec<i32>];

    fn num_rows(&self) -> usize {
        self.rows().len()
    }
}

/// Loader over rows already held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryLoader {
    num_cols: usize,
    rows: Vec<Vec<i32>>,
}

impl MemoryLoader {
    /// Wraps `rows`, checking that each is exactly `num_cols` wide.
    ///
    /// # Returns
    /// `Err(DbError::RaggedRow)` naming the first offending row (1-based).
    pub fn new(num_cols: usize, rows: Vec<Vec<i32>>) -> Result<Self, DbError> {
        if let Some((r, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != num_cols) {
            return Err(DbError::RaggedRow {
                line: r + 1,
                expected: num_cols,
                got: row.len(),
            });
        }
        Ok(Self { num_cols, rows })
    }

    /// Consumes the loader, returning its rows.
    pub fn into_rows(self) -> Vec<Vec<i32>> {
        self.rows
    }
}

impl DataLoader for MemoryLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Loader parsing comma-separated integers, one record per line.
///
/// Blank lines and lines starting with `#` are skipped, cells are trimmed and
/// may be quoted, and a leading UTF-8 byte order mark is ignored. The first
/// data record fixes the column count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvLoader {
    num_cols: usize,
    rows: Vec<Vec<i32>>,
}

impl CsvLoader {
    /// Parses rows from any reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, DbError> {
        let mut input = Vec::new();
        reader
            .read_to_end(&mut input)
            .map_err(|e| DbError::IoError(e.to_string()))?;
        let data = input.strip_prefix(UTF8_BOM).unwrap_or(&input[..]);

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .trim(Trim::All)
            .flexible(true)
            .from_reader(data);

        let mut num_cols = None;
        let mut rows = Vec::new();
        let mut record = StringRecord::new();

        while reader.read_record(&mut record).map_err(csv_error)? {
            let line = record.position().map_or(0, |pos| record_line(data, pos));
            if record.len() == 1 && record[0].is_empty() {
                continue;
            }

            let row = parse_record(&record, line)?;
            let expected = *num_cols.get_or_insert(row.len());
            if row.len() != expected {
                return Err(DbError::RaggedRow {
                    line,
                    expected,
                    got: row.len(),
                });
            }
            rows.push(row);
        }

        let num_cols = num_cols.ok_or(DbError::EmptyInput)?;
        tracing::debug!(rows = rows.len(), cols = num_cols, "Parsed CSV rows");
        Ok(Self { num_cols, rows })
    }

    /// Parses rows from a string.
    pub fn parse_str(input: &str) -> Result<Self, DbError> {
        Self::from_reader(input.as_bytes())
    }

    /// Parses rows from the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DbError> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| DbError::IoError(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(file)
    }
}

impl DataLoader for CsvLoader {
    fn num_cols(&self) -> usize {
        self.num_cols
    }

    fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }
}

fn parse_record(record: &StringRecord, line: usize) -> Result<Vec<i32>, DbError> {
    record
        .iter()
        .enumerate()
        .map(|(col, field)| {
            field.parse::<i32>().map_err(|_| DbError::ParseError {
                line,
                column: col + 1,
                value: field.to_string(),
            })
        })
        .collect()
}

/// 1-based line on which the record at `pos` starts.
///
/// The reader reports the position where it began looking for the record,
/// which precedes any blank or comment lines it skipped on the way.
fn record_line(data: &[u8], pos: &Position) -> usize {
    let mut line = pos.line() as usize;
    let mut rest = data.get(pos.byte() as usize..).unwrap_or_default();
    loop {
        let skipped = match rest {
            [b'\r', b'\n', ..] => 2,
            [b'\n', ..] => 1,
            [b'#', ..] => rest
                .iter()
                .position(|&b| b == b'\n')
                .map_or(rest.len(), |end| end + 1),
            _ => break,
        };
        line += 1;
        rest = &rest[skipped..];
    }
    line
}

fn csv_error(error: csv::Error) -> DbError {
    match error.kind() {
        csv::ErrorKind::Io(e) => DbError::IoError(e.to_string()),
        _ => DbError::CsvError(error.to_string()),
    }
}
