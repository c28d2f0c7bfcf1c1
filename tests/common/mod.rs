// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

/// Write the given lines into a temporary log file.
pub fn write_log(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp log");
    for line in lines {
        writeln!(file, "{}", line).expect("failed to write temp log");
    }
    file.flush().expect("failed to flush temp log");
    file
}

/// Directive covering the common real-life IIS field order.
pub const FULL_DIRECTIVE: &str = "#Fields: date time s-ip cs-method cs-uri-stem cs-uri-query \
     s-port cs-username c-ip cs(User-Agent) cs(Referer) sc-status sc-substatus \
     sc-win32-status time-taken";

/// Build one data line for `FULL_DIRECTIVE` with the given client IP.
pub fn data_line(client_ip: &str) -> String {
    format!(
        "2016-02-15 09:30:24 10.10.2.18 GET / - 443 - {} Mozilla/5.0 - 200 0 995 40478",
        client_ip
    )
}

/// Helper function to run the iisparse binary with given arguments
pub fn run_iisparse(args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_iisparse"))
        .args(args)
        .output()
        .expect("Failed to run iisparse");

    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}
