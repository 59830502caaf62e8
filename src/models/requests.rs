//! Request models for the cache server API

use chrono::Duration;
use serde::Deserialize;
use serde_json::Value;

// == Put Request ==
/// Request body for `POST /api/lru`.
///
/// Missing fields deserialize to their defaults so that shape problems
/// surface as validation messages rather than deserializer rejections.
#[derive(Debug, Clone, Deserialize)]
pub struct PutRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,

    /// Arbitrary JSON payload, stored untouched
    #[serde(default)]
    pub value: Value,

    /// TTL in seconds; 0 or absent selects the server default
    #[serde(default)]
    pub ttl_seconds: Option<i64>,
}

impl PutRequest {
    /// Validates the request, returning an error message when invalid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("key is required".to_string());
        }
        if self.value.is_null() {
            return Some("value is required".to_string());
        }
        match self.ttl_seconds {
            Some(secs) if secs < 0 => Some("ttl_seconds must not be negative".to_string()),
            Some(secs) if Duration::try_seconds(secs).is_none() => {
                Some("ttl_seconds is out of range".to_string())
            }
            _ => None,
        }
    }

    /// The explicit TTL carried by the request, when one was supplied.
    pub fn ttl(&self) -> Option<Duration> {
        self.ttl_seconds.and_then(Duration::try_seconds)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: serde_json::Value) -> PutRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_deserialize_full_request() {
        let req = request(json!({"key": "user:1", "value": {"name": "ada"}, "ttl_seconds": 30}));

        assert_eq!(req.key, "user:1");
        assert_eq!(req.value, json!({"name": "ada"}));
        assert_eq!(req.ttl_seconds, Some(30));
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_deserialize_without_ttl() {
        let req = request(json!({"key": "k", "value": 1}));

        assert_eq!(req.ttl_seconds, None);
        assert_eq!(req.ttl(), None);
        assert!(req.validate().is_none());
    }

    #[test]
    fn test_missing_key_fails_validation() {
        let req = request(json!({"value": 1}));

        assert_eq!(req.validate(), Some("key is required".to_string()));
    }

    #[test]
    fn test_null_value_fails_validation() {
        let req = request(json!({"key": "k"}));

        assert_eq!(req.validate(), Some("value is required".to_string()));
    }

    #[test]
    fn test_negative_ttl_fails_validation() {
        let req = request(json!({"key": "k", "value": 1, "ttl_seconds": -5}));

        assert_eq!(
            req.validate(),
            Some("ttl_seconds must not be negative".to_string())
        );
    }

    #[test]
    fn test_oversized_ttl_fails_validation() {
        let req = request(json!({"key": "k", "value": 1, "ttl_seconds": i64::MAX}));

        assert_eq!(
            req.validate(),
            Some("ttl_seconds is out of range".to_string())
        );
    }

    #[test]
    fn test_zero_ttl_is_valid() {
        let req = request(json!({"key": "k", "value": 1, "ttl_seconds": 0}));

        assert!(req.validate().is_none());
        assert_eq!(req.ttl(), Some(Duration::zero()));
    }

    #[test]
    fn test_ttl_converts_to_duration() {
        let req = request(json!({"key": "k", "value": 1, "ttl_seconds": 90}));

        assert_eq!(req.ttl(), Some(Duration::seconds(90)));
    }
}
