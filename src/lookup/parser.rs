use serde_json::Value;

use crate::Error;

use super::LookupResult;

pub trait LookupParser: Send + Sync {
    fn parse(&self, body: &[u8]) -> Result<LookupResult, Error>;
}

/// Accepts any UTF-8 JSON object; every other body is a decode failure.
#[derive(Default, Clone, Copy)]
pub struct JsonObjectParser;

impl LookupParser for JsonObjectParser {
    fn parse(&self, body: &[u8]) -> Result<LookupResult, Error> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(map) => Ok(map.into()),
            other => Err(Error::NotAnObject(kind(&other))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parses_nested_object() {
        let body = r#"{
            "ip": "125.121.61.164",
            "success": true,
            "latitude": 30.29,
            "flag": {"emoji": "🇨🇳"},
            "connection": {"asn": 4134, "isp": "Chinanet"}
        }"#;
        let result = JsonObjectParser.parse(body.as_bytes()).unwrap();
        assert_eq!(
            Value::from(result),
            json!({
                "ip": "125.121.61.164",
                "success": true,
                "latitude": 30.29,
                "flag": {"emoji": "🇨🇳"},
                "connection": {"asn": 4134, "isp": "Chinanet"}
            })
        );
    }

    #[test]
    fn plain_text_is_a_decode_error() {
        let err = JsonObjectParser.parse(b"not-json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn json_that_is_not_an_object_is_rejected() {
        let err = JsonObjectParser.parse(b"\"not-json\"").unwrap_err();
        assert!(matches!(err, Error::NotAnObject("a string")));

        let err = JsonObjectParser.parse(b"[1, 2]").unwrap_err();
        assert_eq!(err.to_string(), "expected a JSON object, got an array");
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let err = JsonObjectParser.parse(b"{\"city\":\"\xff\xfe\"}").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }
}
