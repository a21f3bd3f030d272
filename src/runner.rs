use std::io::{self, Write};

use crate::{
    lookup::{IpLookup, normalize_isp},
    report,
};

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub succeeded: usize,
    pub failed: usize,
}

/// Runs lookups one after another and reports each outcome.
///
/// A failed lookup is reported and skipped; only a failing writer stops the run.
pub struct Runner<'a, L> {
    lookup: &'a L,
    normalize_isp: bool,
}

impl<'a, L> Runner<'a, L>
where
    L: IpLookup,
{
    pub fn new(lookup: &'a L) -> Self {
        Self {
            lookup,
            normalize_isp: false,
        }
    }

    pub fn normalize_isp(mut self, enable: bool) -> Self {
        self.normalize_isp = enable;
        self
    }

    pub fn run<S, W>(&self, targets: &[S], mut out: W) -> io::Result<Summary>
    where
        S: AsRef<str>,
        W: Write,
    {
        let mut summary = Summary::default();
        for target in targets {
            let ip = target.as_ref();
            match self.lookup.lookup(ip) {
                Ok(mut result) => {
                    if self.normalize_isp {
                        normalize_isp(&mut result);
                    }
                    if let Some(message) = result.provider_rejection() {
                        warn!("provider rejected {}: {}", ip, message);
                    }
                    report::write_result(&mut out, ip, &result)?;
                    summary.succeeded += 1;
                }
                Err(failure) => {
                    error!(code = failure.cause.code(), "{}", failure);
                    report::write_failure(&mut out, &failure)?;
                    summary.failed += 1;
                }
            }
        }
        out.flush()?;
        Ok(summary)
    }
}
