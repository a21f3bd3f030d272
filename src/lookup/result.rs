use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Decoded provider payload, passed through without schema validation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResult(Map<String, Value>);

impl LookupResult {
    /// The provider's own error message when it answered `"success": false`.
    ///
    /// ipwho.is reports reserved or malformed addresses this way with a 200
    /// status, so the payload still counts as a decoded result.
    pub fn provider_rejection(&self) -> Option<&str> {
        match self.0.get("success") {
            Some(Value::Bool(false)) => Some(
                self.0
                    .get("message")
                    .and_then(Value::as_str)
                    .unwrap_or("no message"),
            ),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for LookupResult {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<LookupResult> for Value {
    fn from(result: LookupResult) -> Self {
        Value::Object(result.0)
    }
}

impl Deref for LookupResult {
    type Target = Map<String, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for LookupResult {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
