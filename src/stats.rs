/// Statistics collected over the lifetime of one parsing session.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub lines_read: usize,
    /// Comment, directive, and pre-schema data lines that produced no record.
    pub lines_skipped: usize,
    pub records_decoded: usize,
    pub records_kept: usize,
    pub records_filtered: usize,
    /// Malformed lines dropped under the `Skip` error strategy.
    pub format_errors: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn format_stats(&self) -> String {
        let mut output = format!(
            "Lines processed: {} total, {} skipped; Records: {} decoded, {} kept, {} filtered",
            self.lines_read,
            self.lines_skipped,
            self.records_decoded,
            self.records_kept,
            self.records_filtered
        );

        if self.format_errors > 0 {
            output.push_str(&format!(", {} malformed", self.format_errors));
        }

        output
    }
}
