use std::{fmt, time::Duration};

use config::{Config as ConfigLoader, Environment};
use is_terminal::IsTerminal;
use isahc::http::HeaderValue;
use once_cell::sync::Lazy;
use serde::Deserialize;

const PREFIX: &str = "IPLOOKUP";

pub static CONFIG: Lazy<Config> = Lazy::new(init_config);

#[derive(Debug, Default, PartialEq)]
pub enum LogStyle {
    #[default]
    Auto,
    Always,
    Never,
}

impl LogStyle {
    /// Logs are written to stderr, so that is the stream checked in `Auto`.
    pub fn is_color(&self) -> bool {
        match self {
            LogStyle::Auto => std::io::stderr().is_terminal(),
            LogStyle::Always => true,
            LogStyle::Never => false,
        }
    }
}

impl<'de> Deserialize<'de> for LogStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?.to_lowercase();
        match s.as_str() {
            "auto" => Ok(LogStyle::Auto),
            "always" => Ok(LogStyle::Always),
            "never" => Ok(LogStyle::Never),
            _ => Err(serde::de::Error::unknown_variant(
                &s,
                &["auto", "always", "never"],
            )),
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(default)]
pub struct Log {
    pub level: String,
    pub style: LogStyle,
}

impl Default for Log {
    fn default() -> Self {
        Log {
            level: Self::level(),
            style: LogStyle::default(),
        }
    }
}

impl Log {
    fn level() -> String {
        String::from("iplookup=info")
    }
}

/// Where lookups are sent and how long a single request may take.
#[derive(Deserialize)]
#[serde(default)]
pub struct Provider {
    pub endpoint: String,
    pub connect_timeout_seconds: u64,
    pub timeout_seconds: u64,
    pub user_agent: Option<String>,
}

impl Default for Provider {
    fn default() -> Self {
        Self {
            endpoint: Self::endpoint(),
            connect_timeout_seconds: 5,
            timeout_seconds: 10,
            user_agent: None,
        }
    }
}

impl Provider {
    fn endpoint() -> String {
        String::from(crate::lookup::IPWHOIS)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_seconds)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    pub fn validate(&self) -> Result<(), String> {
        let endpoint = self.endpoint.trim();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(format!(
                "provider endpoint must be an http(s) url, got {:?}",
                self.endpoint
            ));
        }
        if self.connect_timeout_seconds == 0 {
            return Err("provider connect timeout must be greater than zero".into());
        }
        if self.timeout_seconds == 0 {
            return Err("provider timeout must be greater than zero".into());
        }
        if let Some(user_agent) = &self.user_agent {
            if HeaderValue::from_str(user_agent).is_err() {
                return Err(format!(
                    "provider user agent is not a valid header value: {:?}",
                    user_agent
                ));
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("endpoint", &self.endpoint)
            .field("connect_timeout", &self.connect_timeout())
            .field("timeout", &self.timeout())
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub log: Log,
    pub provider: Provider,
    pub normalize_isp: bool,
}

pub fn init_config() -> Config {
    let config = ConfigLoader::builder()
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("_")
                .try_parsing(true),
        )
        .add_source(
            Environment::with_prefix(PREFIX)
                .separator("__")
                .prefix_separator("_")
                .try_parsing(true),
        )
        .build()
        .and_then(|cfg| cfg.try_deserialize::<Config>());

    match config {
        Ok(config) => {
            if let Err(err) = config.provider.validate() {
                panic!("{}", err);
            }
            config
        }
        Err(err) => {
            panic!("{:?}", err);
        }
    }
}
