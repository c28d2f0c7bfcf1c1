use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::error::FormatError;
use crate::record::LogRecord;
use crate::schema::{FieldSchema, FIELDS_DIRECTIVE};

/// Marker starting control/comment lines.
pub const COMMENT_MARKER: char = '#';

/// Placeholder token for a field with no value on a data line.
pub const ABSENT_TOKEN: &str = "-";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Coarse classification of a raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RawLine {
    SchemaDirective,
    Comment,
    Data,
}

pub fn classify(line: &str) -> RawLine {
    if line.starts_with(FIELDS_DIRECTIVE) {
        RawLine::SchemaDirective
    } else if line.starts_with(COMMENT_MARKER) {
        RawLine::Comment
    } else {
        RawLine::Data
    }
}

/// Decode one raw line against the active schema.
///
/// Returns `Ok(None)` for comment lines and for data lines seen before
/// any `#Fields:` directive. Tokens are zipped positionally with the
/// schema names; whichever sequence is shorter wins, so excess tokens
/// are dropped and trailing undeclared fields stay absent.
///
/// Conversion is strict: a present numeric or date/time token that does
/// not parse fails the whole line with a `FormatError`.
pub fn decode(line: &str, schema: &FieldSchema) -> Result<Option<LogRecord>, FormatError> {
    if line.starts_with(COMMENT_MARKER) {
        return Ok(None);
    }
    if !schema.is_declared() {
        return Ok(None);
    }

    let mut record = LogRecord::with_line_length(line.len());
    let mut date_token: Option<&str> = None;
    let mut time_token: Option<&str> = None;

    for (name, token) in schema.field_names().iter().zip(line.split(' ')) {
        if token == ABSENT_TOKEN {
            continue;
        }
        match name.as_str() {
            "date" => date_token = Some(token),
            "time" => time_token = Some(token),
            "s-sitename" => record.site_name = Some(token.to_string()),
            "s-computername" => record.computer_name = Some(token.to_string()),
            "s-ip" => record.server_ip = Some(token.to_string()),
            "cs-method" => record.method = Some(token.to_string()),
            "cs-uri-stem" => record.uri_stem = Some(token.to_string()),
            "cs-uri-query" => record.uri_query = Some(token.to_string()),
            "s-port" => record.port = Some(parse_numeric("s-port", token)?),
            "cs-username" => record.username = Some(token.to_string()),
            "c-ip" => record.client_ip = Some(token.to_string()),
            "cs-version" => record.protocol_version = Some(token.to_string()),
            "cs(User-Agent)" => record.user_agent = Some(token.to_string()),
            "cs(Cookie)" => record.cookie = Some(token.to_string()),
            "cs(Referer)" => record.referer = Some(token.to_string()),
            "cs-host" => record.host = Some(token.to_string()),
            "sc-status" => record.status = Some(parse_numeric("sc-status", token)?),
            "sc-substatus" => record.substatus = Some(parse_numeric("sc-substatus", token)?),
            "sc-win32-status" => {
                record.win32_status = Some(parse_numeric("sc-win32-status", token)?)
            }
            "sc-bytes" => record.response_bytes = Some(parse_numeric("sc-bytes", token)?),
            "cs-bytes" => record.request_bytes = Some(parse_numeric("cs-bytes", token)?),
            "time-taken" => record.time_taken_ms = Some(parse_numeric("time-taken", token)?),
            // Unknown field names carry no slot in the record.
            _ => {}
        }
    }

    record.timestamp = match (date_token, time_token) {
        (Some(date), Some(time)) => Some(parse_timestamp(date, time)?),
        _ => None,
    };

    Ok(Some(record))
}

fn parse_numeric<T: FromStr>(field: &'static str, token: &str) -> Result<T, FormatError> {
    token.parse().map_err(|_| FormatError::Numeric {
        field,
        token: token.to_string(),
    })
}

fn parse_timestamp(date: &str, time: &str) -> Result<NaiveDateTime, FormatError> {
    let combined = format!("{} {}", date, time);
    NaiveDateTime::parse_from_str(&combined, TIMESTAMP_FORMAT).map_err(|_| {
        FormatError::Timestamp { value: combined }
    })
}
