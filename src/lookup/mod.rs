mod http;
#[cfg(test)]
pub(crate) mod mock;
mod normalize;
mod parser;
mod result;

use crate::LookupFailure;

pub use http::{HttpIpLookup, IPWHOIS};
pub use normalize::normalize_isp;
pub use parser::{JsonObjectParser, LookupParser};
pub use result::LookupResult;

pub trait IpLookup {
    fn lookup(&self, ip: &str) -> Result<LookupResult, LookupFailure>;
}
