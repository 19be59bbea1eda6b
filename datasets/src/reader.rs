use std::fs::File;
use std::io::Read;
use std::marker::PhantomData;
use std::path::Path;
use std::str::FromStr;

use csv::{ReaderBuilder, StringRecord, StringRecordsIntoIter, Trim};

use crate::error::{ParseError, Result};

/// A typed record which can be built from one row of a delimited text file
pub trait FromRecord: Sized {
    /// Field separator of the dataset
    const DELIMITER: u8;
    /// Minimal number of columns a row must have
    const COLUMNS: usize;

    /// Map the fixed column positions of a row to the named fields of the record
    fn from_fields(fields: &Fields<'_>) -> Result<Self>;
}

/// Borrowed view of a single row, with typed accessors which report the row position on failure
pub struct Fields<'a> {
    record: &'a StringRecord,
    line: u64,
}

impl<'a> Fields<'a> {
    pub fn new(record: &'a StringRecord, line: u64) -> Self {
        Fields { record, line }
    }

    /// Fail with `MissingColumns` if the row is shorter than `expected`
    pub fn require(&self, expected: usize) -> Result<()> {
        if self.record.len() < expected {
            return Err(ParseError::MissingColumns {
                line: self.line,
                expected,
                found: self.record.len(),
            });
        }

        Ok(())
    }

    fn raw(&self, column: usize) -> Result<&'a str> {
        self.record
            .get(column)
            .ok_or_else(|| ParseError::MissingColumns {
                line: self.line,
                expected: column + 1,
                found: self.record.len(),
            })
    }

    fn parse<T: FromStr>(&self, column: usize, name: &'static str, kind: &'static str) -> Result<T> {
        let value = self.raw(column)?;

        value.parse().map_err(|_| ParseError::InvalidField {
            line: self.line,
            column,
            name,
            value: value.to_string(),
            kind,
        })
    }

    /// Single precision real number
    pub fn real(&self, column: usize, name: &'static str) -> Result<f32> {
        self.parse(column, name, "real number")
    }

    /// Single precision real number, an empty field is read as missing (`NaN`)
    pub fn real_or_missing(&self, column: usize, name: &'static str) -> Result<f32> {
        if self.raw(column)?.is_empty() {
            Ok(f32::NAN)
        } else {
            self.real(column, name)
        }
    }

    /// Whole number, used for ordinal and nominal codes
    pub fn integer(&self, column: usize, name: &'static str) -> Result<i32> {
        self.parse(column, name, "integer")
    }

    /// Boolean stored as a numeric flag, every non-zero value is `true`
    pub fn flag(&self, column: usize, name: &'static str) -> Result<bool> {
        let value: f32 = self.parse(column, name, "numeric flag")?;

        Ok(value != 0.0)
    }

    /// Free text, must not be empty
    pub fn text(&self, column: usize, name: &'static str) -> Result<String> {
        let value = self.raw(column)?;
        if value.is_empty() {
            return Err(ParseError::InvalidField {
                line: self.line,
                column,
                name,
                value: String::new(),
                kind: "text",
            });
        }

        Ok(value.to_string())
    }
}

/// Streaming iterator over the samples of a dataset
///
/// Yields the rows in file order, a single time. Re-open the source to read it again.
pub struct SampleIter<S, R = File> {
    records: StringRecordsIntoIter<R>,
    sample: PhantomData<S>,
}

impl<S: FromRecord, R: Read> Iterator for SampleIter<S, R> {
    type Item = Result<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;

        Some(
            record
                .map_err(|source| ParseError::Csv {
                    line: source.position().map_or(0, |pos| pos.line()),
                    source,
                })
                .and_then(|record| {
                    let line = record.position().map_or(0, |pos| pos.line());
                    let fields = Fields::new(&record, line);
                    fields.require(S::COLUMNS)?;

                    S::from_fields(&fields)
                }),
        )
    }
}

/// Read samples from any source of delimited text with a header line
pub fn read_samples_from<S: FromRecord, R: Read>(reader: R) -> SampleIter<S, R> {
    let reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(S::DELIMITER)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    SampleIter {
        records: reader.into_records(),
        sample: PhantomData,
    }
}

/// Open a dataset file and read its samples lazily
pub fn read_samples<S: FromRecord, P: AsRef<Path>>(path: P) -> Result<SampleIter<S>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParseError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(read_samples_from(file))
}

/// Read all samples of a dataset file, stopping at the first malformed row
pub fn load_samples<S: FromRecord, P: AsRef<Path>>(path: P) -> Result<Vec<S>> {
    read_samples(path)?.collect()
}
