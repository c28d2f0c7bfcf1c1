use chrono::NaiveDateTime;
use serde::Serialize;

/// One decoded log entry.
///
/// Every field except `line_length` is optional: absence means the field
/// was not declared in the active schema or the line carried the `-`
/// placeholder at its position. An absent value is distinct from an empty
/// string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LogRecord {
    /// Byte length of the raw line (without the line terminator).
    /// Used only for progress accounting, never re-derived.
    #[serde(skip)]
    pub line_length: usize,

    /// Combined `date` + `time` fields.
    pub timestamp: Option<NaiveDateTime>,

    pub site_name: Option<String>,
    pub computer_name: Option<String>,
    pub server_ip: Option<String>,
    pub method: Option<String>,
    pub uri_stem: Option<String>,
    pub uri_query: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub client_ip: Option<String>,
    pub protocol_version: Option<String>,
    pub user_agent: Option<String>,
    pub cookie: Option<String>,
    pub referer: Option<String>,
    pub host: Option<String>,
    pub status: Option<i32>,
    pub substatus: Option<i32>,
    pub win32_status: Option<i64>,
    pub response_bytes: Option<i64>,
    pub request_bytes: Option<i64>,
    pub time_taken_ms: Option<i64>,
}

impl LogRecord {
    pub fn with_line_length(line_length: usize) -> Self {
        Self {
            line_length,
            ..Default::default()
        }
    }
}
