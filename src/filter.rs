use crate::record::LogRecord;

/// Keep only records with a usable client IP: present and containing a
/// literal `.`. This drops placeholder-only entries and non-address
/// values like `localhost`, IPv6-only entries included.
pub fn keep(record: &LogRecord) -> bool {
    record
        .client_ip
        .as_deref()
        .is_some_and(|ip| ip.contains('.'))
}

/// Drop invalid records from a decoded batch, returning how many were
/// removed. Runs once per batch, after decoding finishes.
pub fn retain_valid(records: &mut Vec<LogRecord>) -> usize {
    let before = records.len();
    records.retain(keep);
    before - records.len()
}
