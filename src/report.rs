use std::io::Write;
use std::net::IpAddr;

use dns_lookup::lookup_addr;
use indexmap::IndexMap;

use crate::record::LogRecord;

/// Group records by client IP, preserving first-seen order, and count
/// requests per IP.
pub fn group_by_client_ip(records: &[LogRecord]) -> IndexMap<String, u64> {
    let mut groups: IndexMap<String, u64> = IndexMap::new();
    for record in records {
        if let Some(ip) = record.client_ip.as_deref() {
            *groups.entry(ip.to_string()).or_insert(0) += 1;
        }
    }
    groups
}

/// Reverse-resolve an IP to a hostname. Returns None for unparseable
/// addresses and failed PTR lookups alike.
pub fn resolve_host(ip: &str) -> Option<String> {
    let addr: IpAddr = ip.parse().ok()?;
    lookup_addr(&addr).ok()
}

/// Write the per-IP summary: one line per client IP with its request
/// count and, when resolution is enabled, the reverse-DNS hostname.
pub fn render<W: Write>(
    out: &mut W,
    groups: &IndexMap<String, u64>,
    resolve: bool,
) -> std::io::Result<()> {
    for (ip, count) in groups {
        if resolve {
            match resolve_host(ip) {
                Some(hostname) => writeln!(out, "{} ({}) : {}", ip, count, hostname)?,
                None => writeln!(out, "{} ({}) : Cannot resolve host", ip, count)?,
            }
        } else {
            writeln!(out, "{} ({})", ip, count)?;
        }
    }
    Ok(())
}
