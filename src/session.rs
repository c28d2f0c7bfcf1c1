use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::decoder;
use crate::error::ParseError;
use crate::filter;
use crate::progress;
use crate::record::LogRecord;
use crate::schema::FieldSchema;
use crate::stats::RunStats;

/// Files at or above this many whole MiB are read in bounded chunks
/// instead of all at once.
pub const CHUNK_THRESHOLD_MB: u64 = 100;

/// Maximum decoded records per chunked batch. The cap counts decoded
/// records, not raw lines skipped as comments or pre-schema data.
pub const MAX_RECORDS_PER_CHUNK: usize = 1000;

const BYTES_PER_MB: u64 = 1024 * 1024;

/// How the file will be read, decided once at open time from its size.
/// A file growing afterward does not change the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadStrategy {
    /// Load and decode the whole file in one call.
    Bulk,
    /// Stateful, resumable reads yielding bounded batches.
    Chunked,
}

impl ReadStrategy {
    pub fn classify(size_bytes: u64) -> Self {
        if size_bytes / BYTES_PER_MB >= CHUNK_THRESHOLD_MB {
            ReadStrategy::Chunked
        } else {
            ReadStrategy::Bulk
        }
    }
}

/// What to do when a data line fails strict decoding.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorStrategy {
    /// Propagate the error, aborting the current batch read.
    #[default]
    Abort,
    /// Drop the offending line and keep reading.
    Skip,
}

/// The open-file state for one log: read strategy, active schema,
/// cursor, and end-of-file flag. Owns the file handle for its lifetime;
/// one caller at a time, no locking.
#[derive(Debug)]
pub struct ParserSession {
    path: PathBuf,
    file_size_bytes: u64,
    strategy: ReadStrategy,
    error_strategy: ErrorStrategy,
    schema: FieldSchema,
    /// Persistent cursor for chunked mode. Bulk mode never stores one.
    reader: Option<BufReader<File>>,
    line_number: u64,
    active: bool,
    stats: RunStats,
}

impl ParserSession {
    /// Open a session for `path`, classifying the read strategy from the
    /// file's current size. Fails with `ParseError::NotFound` if the
    /// path does not exist; no session is constructed in that case.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, ParseError> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path).map_err(|e| Self::map_open_error(e, &path))?;
        let file_size_bytes = metadata.len();
        let strategy = ReadStrategy::classify(file_size_bytes);
        Ok(Self::with_strategy(path, file_size_bytes, strategy))
    }

    /// Open with an explicit strategy, bypassing size classification.
    /// Lets callers force chunked reads on small files.
    pub fn open_with_strategy(
        path: impl AsRef<Path>,
        strategy: ReadStrategy,
    ) -> Result<Self, ParseError> {
        let path = path.as_ref().to_path_buf();
        let metadata = fs::metadata(&path).map_err(|e| Self::map_open_error(e, &path))?;
        Ok(Self::with_strategy(path, metadata.len(), strategy))
    }

    fn with_strategy(path: PathBuf, file_size_bytes: u64, strategy: ReadStrategy) -> Self {
        Self {
            path,
            file_size_bytes,
            strategy,
            error_strategy: ErrorStrategy::default(),
            schema: FieldSchema::new(),
            reader: None,
            line_number: 0,
            active: true,
            stats: RunStats::new(),
        }
    }

    pub fn with_error_strategy(mut self, error_strategy: ErrorStrategy) -> Self {
        self.error_strategy = error_strategy;
        self
    }

    fn map_open_error(err: io::Error, path: &Path) -> ParseError {
        match err.kind() {
            io::ErrorKind::NotFound => ParseError::NotFound {
                path: path.to_path_buf(),
            },
            _ => ParseError::Io(err),
        }
    }

    pub fn is_bulk_mode(&self) -> bool {
        self.strategy == ReadStrategy::Bulk
    }

    /// True while reads remain. Flips false after the single bulk read,
    /// or once a chunked read hits end-of-file.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn file_size_bytes(&self) -> u64 {
        self.file_size_bytes
    }

    pub fn stats(&self) -> &RunStats {
        &self.stats
    }

    /// Read the next batch of valid records, dispatching to the bulk or
    /// chunked strategy chosen at open time. Safe to call repeatedly;
    /// callers stop once `is_active` returns false.
    pub fn read_next(&mut self) -> Result<Vec<LogRecord>, ParseError> {
        match self.strategy {
            ReadStrategy::Bulk => self.read_all(),
            ReadStrategy::Chunked => self.read_next_chunk(),
        }
    }

    /// Bulk mode: decode the entire file in one pass. The handle lives
    /// only for the duration of this call.
    fn read_all(&mut self) -> Result<Vec<LogRecord>, ParseError> {
        let file = File::open(&self.path).map_err(|e| Self::map_open_error(e, &self.path))?;
        let reader = BufReader::new(file);

        let mut records = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            self.process_line(line, &mut records)?;
        }

        self.active = false;
        self.apply_filter(&mut records);
        Ok(records)
    }

    /// Chunked mode: resume from the cursor left by the previous call
    /// and accumulate up to `MAX_RECORDS_PER_CHUNK` decoded records.
    /// At end-of-file the session goes inactive but the handle stays
    /// open until `close` (or drop).
    fn read_next_chunk(&mut self) -> Result<Vec<LogRecord>, ParseError> {
        if self.reader.is_none() {
            // POSIX opens take no lock, so an actively-appended file can
            // be read alongside its writer.
            let file = File::open(&self.path).map_err(|e| Self::map_open_error(e, &self.path))?;
            self.reader = Some(BufReader::new(file));
        }

        let mut records = Vec::new();
        let mut buf = String::new();
        self.active = false;

        loop {
            buf.clear();
            let bytes_read = match self.reader.as_mut() {
                Some(reader) => reader.read_line(&mut buf)?,
                None => 0,
            };
            if bytes_read == 0 {
                break;
            }

            let line = buf.trim_end_matches(&['\r', '\n'][..]);
            self.process_line(line, &mut records)?;

            if records.len() >= MAX_RECORDS_PER_CHUNK {
                self.active = true;
                break;
            }
        }

        self.apply_filter(&mut records);
        Ok(records)
    }

    fn process_line(
        &mut self,
        line: &str,
        records: &mut Vec<LogRecord>,
    ) -> Result<(), ParseError> {
        self.line_number += 1;
        self.stats.lines_read += 1;

        if self.schema.apply_if_directive(line) {
            self.stats.lines_skipped += 1;
            return Ok(());
        }

        match decoder::decode(line, &self.schema) {
            Ok(Some(record)) => {
                self.stats.records_decoded += 1;
                records.push(record);
            }
            Ok(None) => self.stats.lines_skipped += 1,
            Err(source) => match self.error_strategy {
                ErrorStrategy::Abort => {
                    return Err(ParseError::Format {
                        line_number: self.line_number,
                        source,
                    })
                }
                ErrorStrategy::Skip => self.stats.format_errors += 1,
            },
        }

        Ok(())
    }

    fn apply_filter(&mut self, records: &mut Vec<LogRecord>) {
        self.stats.records_filtered += filter::retain_valid(records);
        self.stats.records_kept += records.len();
    }

    /// Percentage of the file covered by `records`, by raw line length.
    pub fn estimate_progress(&self, records: &[LogRecord]) -> Result<i32, ParseError> {
        progress::estimate(self.file_size_bytes, records)
    }

    /// Release the file handle. Idempotent; dropping the session covers
    /// every other exit path.
    pub fn close(&mut self) {
        self.reader = None;
        self.active = false;
    }
}
