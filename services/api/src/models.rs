//! API models for request and response payloads

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub mod category;
pub mod product;
pub mod user;

/// Wire format of every `createdAt` field.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The uniform wrapper around every response body.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> Envelope<T> {
    /// A successful response carrying a single payload.
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            count: None,
            message: None,
        }
    }

    /// Attach a human readable message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// A successful response carrying a list and its length.
    pub fn list(items: Vec<T>) -> Self {
        let count = items.len();
        Self {
            success: true,
            data: Some(items),
            count: Some(count),
            message: None,
        }
    }
}

impl Envelope<()> {
    /// A successful response that only carries a message.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }

    /// A failed response.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            count: None,
            message: Some(message.into()),
        }
    }
}

/// Deserialize a field whose key presence matters.
///
/// Use with `#[serde(default, deserialize_with = "present")]` on an
/// `Option<Option<T>>`: a missing key stays `None`, an explicit `null`
/// becomes `Some(None)`.
pub(crate) fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn serialize_timestamp<S>(timestamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&timestamp.format(TIMESTAMP_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "present")]
        description: Option<Option<String>>,
    }

    #[test]
    fn list_envelope_carries_count() {
        let body = serde_json::to_value(Envelope::list(vec![1, 2, 3])).unwrap();

        assert_eq!(body, json!({"success": true, "data": [1, 2, 3], "count": 3}));
    }

    #[test]
    fn failure_envelope_omits_data_and_count() {
        let body = serde_json::to_value(Envelope::failure("Product not found")).unwrap();

        assert_eq!(body, json!({"success": false, "message": "Product not found"}));
    }

    #[test]
    fn data_envelope_with_message() {
        let body = serde_json::to_value(Envelope::data("x").with_message("done")).unwrap();

        assert_eq!(body, json!({"success": true, "data": "x", "message": "done"}));
    }

    #[test]
    fn present_distinguishes_missing_from_null() {
        let missing: Patch = serde_json::from_value(json!({})).unwrap();
        let null: Patch = serde_json::from_value(json!({"description": null})).unwrap();
        let set: Patch = serde_json::from_value(json!({"description": "new"})).unwrap();

        assert_eq!(missing.description, None);
        assert_eq!(null.description, Some(None));
        assert_eq!(set.description, Some(Some("new".to_string())));
    }
}
