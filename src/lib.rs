// Core library for the iisparse IIS/W3C extended log parsing tool

mod decoder;
mod error;
mod filter;
mod progress;
mod record;
mod report;
mod schema;
mod session;
mod stats;

pub mod cli;

pub use decoder::{classify, decode, RawLine, ABSENT_TOKEN, COMMENT_MARKER};
pub use error::{FormatError, ParseError};
pub use filter::{keep, retain_valid};
pub use progress::estimate;
pub use record::LogRecord;
pub use report::{group_by_client_ip, render, resolve_host};
pub use schema::{FieldSchema, FIELDS_DIRECTIVE};
pub use session::{
    ErrorStrategy, ParserSession, ReadStrategy, CHUNK_THRESHOLD_MB, MAX_RECORDS_PER_CHUNK,
};
pub use stats::RunStats;
