use crate::error::ParseError;
use crate::record::LogRecord;

/// Estimate the percentage of the file consumed by the records decoded
/// so far, from the sum of their raw line lengths.
///
/// The denominator is `file_size_bytes / 100` in integer arithmetic and
/// the result truncates, so 49.9% reports as 49. A file under 100 bytes
/// truncates the denominator to zero; that is reported as
/// `ParseError::ProgressEstimation` rather than clamped.
pub fn estimate(file_size_bytes: u64, records: &[LogRecord]) -> Result<i32, ParseError> {
    let divisor = file_size_bytes / 100;
    if divisor == 0 {
        return Err(ParseError::ProgressEstimation {
            file_size: file_size_bytes,
        });
    }

    let consumed: u64 = records.iter().map(|r| r.line_length as u64).sum();
    Ok((consumed / divisor) as i32)
}
