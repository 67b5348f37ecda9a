use serde::{Serialize, de::DeserializeOwned};

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Serialization failed: {0}")]
    Serialization(String),
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}

/// JSON blob encoding shared by every cache entry. Writes borrow the value
/// (`Json(&items)`); reads decode into an owned one.
#[derive(Clone, Debug, PartialEq)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn inner(self) -> T { self.0 }
}

impl<T: Serialize> Json<T> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, CacheError> {
        serde_json::to_vec(&self.0)
            .map_err(|e| CacheError::Serialization(e.to_string()))
    }
}

impl<T: DeserializeOwned> Json<T> {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CacheError> {
        serde_json::from_slice(bytes)
            .map(Json)
            .map_err(|e| CacheError::Deserialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_borrowed_write_decodes_to_owned_value() {
        let value = json!([{"eventType": "deploy", "timeCreated": "5"}]);
        let bytes = Json(&value).to_bytes().unwrap();
        let decoded = Json::<serde_json::Value>::from_bytes(&bytes).unwrap();
        assert_eq!(decoded.inner(), value);
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let result = Json::<Vec<String>>::from_bytes(b"not json");
        assert!(matches!(result, Err(CacheError::Deserialization(_))));
    }
}
