use isahc::ReadResponseExt;

use crate::http_client::HttpClient;
use crate::{Error, LookupFailure};

use super::{IpLookup, JsonObjectParser, LookupParser, LookupResult};

pub const IPWHOIS: &str = "https://ipwho.is";

pub struct HttpIpLookup<'a, P> {
    client: &'a HttpClient,
    endpoint: String,
    parser: P,
}

impl<'a, P> HttpIpLookup<'a, P> {
    pub fn new(client: &'a HttpClient, endpoint: impl Into<String>, parser: P) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            parser,
        }
    }

    /// The address is interpolated as-is; the provider decides whether it is valid.
    fn url_for(&self, ip: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), ip)
    }
}

impl<'a, P> HttpIpLookup<'a, P>
where
    P: LookupParser,
{
    fn fetch(&self, ip: &str) -> Result<LookupResult, Error> {
        let url = self.url_for(ip);
        let mut response = self.client.get(&url)?;
        let body = response.bytes()?;
        self.parser.parse(&body)
    }
}

impl<'a> HttpIpLookup<'a, JsonObjectParser> {
    pub fn ipwhois(client: &'a HttpClient) -> Self {
        Self::new(client, IPWHOIS, JsonObjectParser)
    }
}

impl<'a, P> IpLookup for HttpIpLookup<'a, P>
where
    P: LookupParser,
{
    fn lookup(&self, ip: &str) -> Result<LookupResult, LookupFailure> {
        debug!("looking up {}", ip);
        self.fetch(ip).map_err(|cause| LookupFailure::new(ip, cause))
    }
}
