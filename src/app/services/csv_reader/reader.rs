//! Delimited file reader for economic indicator data
//!
//! This module handles file access, delimiter detection, header validation and
//! the per-row clean -> validate -> convert sequence. Files are read strictly
//! one after another and the first bad row aborts the whole read.

use std::collections::HashMap;
use std::fs::File;
use std::io::{Read, Seek};
use std::iter::FusedIterator;
use std::path::Path;
use tracing::{debug, error, info};

use super::converter::EconomicDataConverter;
use super::dialect::detect_delimiter;
use super::validator::EconomicDataValidator;
use crate::app::models::EconomicRecord;
use crate::config::ReaderConfig;
use crate::constants::{DEFAULT_DELIMITERS, DEFAULT_SAMPLE_SIZE, FALLBACK_DELIMITER, HEADER_ROW_NUMBER};
use crate::{Error, Result};

/// Tunable reader settings
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderOptions {
    /// Bytes inspected for delimiter detection
    pub sample_size: usize,
    /// Candidate delimiters in tie-break order
    pub delimiters: Vec<u8>,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            delimiters: DEFAULT_DELIMITERS.as_bytes().to_vec(),
        }
    }
}

impl From<&ReaderConfig> for ReaderOptions {
    fn from(config: &ReaderConfig) -> Self {
        Self {
            sample_size: config.sample_size,
            delimiters: config.delimiters.as_bytes().to_vec(),
        }
    }
}

/// Reader for comma, semicolon or tab separated economic indicator files
#[derive(Debug, Clone, Default)]
pub struct CsvEconomicReader {
    validator: EconomicDataValidator,
    converter: EconomicDataConverter,
    options: ReaderOptions,
}

impl CsvEconomicReader {
    /// Create a reader with default options
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom options
    pub fn with_options(options: ReaderOptions) -> Self {
        Self {
            validator: EconomicDataValidator::new(),
            converter: EconomicDataConverter::new(),
            options,
        }
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Open one file and return its records as a lazy sequence
    ///
    /// The file is opened, its delimiter detected and its header validated
    /// before this returns. Rows are cleaned, validated and converted as the
    /// iterator is advanced; it yields nothing further after the first error.
    pub fn read_file(&self, path: &Path) -> Result<FileRecords<'_>> {
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }

        debug!("Reading file: {}", path.display());

        let mut file = File::open(path)
            .map_err(|e| Error::io(format!("Failed to open {}", path.display()), e))?;

        let delimiter = self.sniff_delimiter(&mut file, path)?;

        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .flexible(true)
            .from_reader(file);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| {
                Error::csv_parsing(
                    path.display().to_string(),
                    "Failed to read header row",
                    Some(e),
                )
            })?
            .iter()
            .map(|column| column.trim().to_lowercase())
            .collect();

        self.validator.validate_header(&headers)?;
        debug!("Header columns for {}: {:?}", path.display(), headers);

        Ok(FileRecords {
            reader: self,
            csv: csv_reader,
            headers,
            file: path.display().to_string(),
            row_num: HEADER_ROW_NUMBER,
            record: csv::StringRecord::new(),
            finished: false,
        })
    }

    /// Read every file in order and concatenate the records
    ///
    /// Fails on an empty path list, a missing file, or the first invalid
    /// header or row; no partial result is returned.
    pub fn read<P: AsRef<Path>>(&self, paths: &[P]) -> Result<Vec<EconomicRecord>> {
        if paths.is_empty() {
            return Err(Error::invalid_argument("No files provided for reading"));
        }

        let mut all_records = Vec::new();

        for path in paths {
            let path = path.as_ref();
            let records = self
                .read_file(path)
                .and_then(|records| records.collect::<Result<Vec<_>>>())
                .inspect_err(|e| error!("Failed to read {}: {}", path.display(), e))?;

            info!("Loaded {} records from {}", records.len(), path.display());
            all_records.extend(records);
        }

        info!("Total records loaded: {}", all_records.len());
        Ok(all_records)
    }

    /// Detect the delimiter from the leading sample and rewind the file
    fn sniff_delimiter(&self, file: &mut File, path: &Path) -> Result<u8> {
        let limit = self.options.sample_size;
        let mut buffer = Vec::with_capacity(limit + 1);

        file.by_ref()
            .take(limit as u64 + 1)
            .read_to_end(&mut buffer)
            .map_err(|e| Error::io(format!("Failed to sample {}", path.display()), e))?;
        file.rewind()
            .map_err(|e| Error::io(format!("Failed to rewind {}", path.display()), e))?;

        let truncated = buffer.len() > limit;
        buffer.truncate(limit);
        let sample = String::from_utf8_lossy(&buffer);

        match detect_delimiter(&sample, &self.options.delimiters, truncated) {
            Some(delimiter) => {
                debug!(
                    "Detected delimiter {:?} for {}",
                    delimiter as char,
                    path.display()
                );
                Ok(delimiter)
            }
            None => {
                debug!(
                    "Could not detect delimiter for {}, falling back to {:?}",
                    path.display(),
                    FALLBACK_DELIMITER as char
                );
                Ok(FALLBACK_DELIMITER)
            }
        }
    }
}

/// Lazy sequence of records from a single file
///
/// Finite and not restartable. After an error has been yielded the
/// iterator is exhausted.
pub struct FileRecords<'r> {
    reader: &'r CsvEconomicReader,
    csv: csv::Reader<File>,
    headers: Vec<String>,
    file: String,
    row_num: usize,
    record: csv::StringRecord,
    finished: bool,
}

impl FileRecords<'_> {
    /// Cleaned header names (trimmed, lower-cased)
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Row number of the most recently yielded row
    pub fn row_number(&self) -> usize {
        self.row_num
    }

    /// Map the current record onto the header, trimming every value
    ///
    /// Missing trailing cells become empty text; surplus cells are ignored.
    fn clean_row(&self) -> HashMap<String, String> {
        self.headers
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let value = self.record.get(index).unwrap_or("").trim().to_string();
                (column.clone(), value)
            })
            .collect()
    }

    fn process_current(&self) -> Result<EconomicRecord> {
        let row = self.clean_row();
        self.reader.validator.validate_row(&row, self.row_num)?;
        self.reader.converter.to_record(&row)
    }
}

impl Iterator for FileRecords<'_> {
    type Item = Result<EconomicRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.csv.read_record(&mut self.record) {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(Error::csv_parsing(
                        self.file.clone(),
                        format!("Failed to read row {}", self.row_num + 1),
                        Some(e),
                    )));
                }
            }

            if is_empty_record(&self.record) {
                continue;
            }

            self.row_num += 1;
            let result = self.process_current();

            if let Err(e) = &result {
                error!("Validation error in {}:{}: {}", self.file, self.row_num, e);
                self.finished = true;
            }

            return Some(result);
        }
    }
}

impl FusedIterator for FileRecords<'_> {}

/// A line with no cells at all
fn is_empty_record(record: &csv::StringRecord) -> bool {
    record.is_empty() || (record.len() == 1 && record.get(0) == Some(""))
}
