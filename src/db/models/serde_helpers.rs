//! Serde helpers for SurrealDB record ids

/// Serialize a `RecordId` as its bare key string (`member:abc123` -> `"abc123"`).
///
/// Deserialization delegates to the SDK's native `RecordId` format, so structs
/// using this helper can be read straight out of query responses and still
/// render a plain id in JSON.
pub mod record_id_key {
    use serde::{Deserialize, Deserializer, Serializer};
    use surrealdb::RecordId;

    pub fn serialize<S>(id: &RecordId, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&id.key().to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
    where
        D: Deserializer<'de>,
    {
        RecordId::deserialize(deserializer)
    }
}
