use isahc::{Body, Response, config::Configurable};

use crate::{Error, config::Provider};

/// Blocking client shared by every lookup in a run.
///
/// Responses outside the 2xx range are turned into [`Error::Status`] here so
/// callers only ever see bodies worth decoding.
pub struct HttpClient {
    inner: isahc::HttpClient,
}

impl HttpClient {
    pub fn new(provider: &Provider) -> Result<Self, Error> {
        let mut builder = isahc::HttpClient::builder()
            .connect_timeout(provider.connect_timeout())
            .timeout(provider.timeout());
        if let Some(user_agent) = &provider.user_agent {
            builder = builder.default_header("user-agent", user_agent.as_str());
        }

        Ok(Self {
            inner: builder.build()?,
        })
    }

    pub fn get(&self, url: &str) -> Result<Response<Body>, Error> {
        let response = self.inner.get(url)?;
        let status = response.status();
        debug!("GET {} returned {}", url, status);
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        Ok(response)
    }
}
