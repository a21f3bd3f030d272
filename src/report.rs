use std::io::{self, Write};

use crate::{LookupFailure, lookup::LookupResult};

/// Header line, then the payload as 2-space indented JSON with non-ASCII kept as-is.
pub fn write_result<W: Write>(out: &mut W, ip: &str, result: &LookupResult) -> io::Result<()> {
    writeln!(out, "--- Data for {} ---", ip)?;
    serde_json::to_writer_pretty(&mut *out, result)?;
    writeln!(out)
}

pub fn write_failure<W: Write>(out: &mut W, failure: &LookupFailure) -> io::Result<()> {
    writeln!(out, "Error fetching {}: {}", failure.ip, failure.cause)
}
