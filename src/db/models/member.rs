//! Member Model
//!
//! One registered roster profile. The store-assigned record id is the object
//! id used for metadata/photo lookups; `member_number` is the client-chosen
//! natural key (unique, bounded by the configured capacity).

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

/// Full member document as stored (reads only, never serialized to clients)
#[derive(Debug, Clone, Deserialize)]
pub struct MemberRecord {
    pub id: RecordId,
    pub member_number: u32,
    /// Plaintext edit/delete password; absent means "no password set"
    #[serde(default)]
    pub password: Option<String>,
    pub name: String,
    pub nickname: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_handle: String,
    /// Raw image bytes stored inline with the document
    #[serde(default)]
    pub photo: Vec<u8>,
}

impl MemberRecord {
    /// Redacted view: drops photo bytes, password, and member number
    pub fn into_summary(self) -> MemberSummary {
        MemberSummary {
            id: self.id,
            name: self.name,
            nickname: self.nickname,
            linkedin_url: self.linkedin_url,
            github_url: self.github_url,
            instagram_handle: self.instagram_handle,
        }
    }
}

/// Insert payload (no id; the store assigns one)
#[derive(Debug, Clone, Serialize)]
pub struct MemberInsert {
    pub member_number: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub name: String,
    pub nickname: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_handle: String,
    pub photo: Vec<u8>,
}

/// Partial update payload, applied with MERGE: only present fields overwrite.
///
/// `member_number` and `password` are deliberately not editable; the number
/// is the natural key and the password gates the mutation itself.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemberUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram_handle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<Vec<u8>>,
}

/// Response DTO for listings and single-member metadata.
///
/// Redaction by omission: photo bytes, password, and member number simply do
/// not exist on this type, so they can never leak into a response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    #[serde(with = "serde_helpers::record_id_key")]
    pub id: RecordId,
    pub name: String,
    pub nickname: String,
    pub linkedin_url: String,
    pub github_url: String,
    pub instagram_handle: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_serializes_id_as_bare_key() {
        let summary = MemberSummary {
            id: RecordId::from_table_key("member", "abc123"),
            name: "Ana".into(),
            nickname: "aninha".into(),
            linkedin_url: String::new(),
            github_url: String::new(),
            instagram_handle: String::new(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert_eq!(value["id"], "abc123");
        assert_eq!(value["name"], "Ana");
    }

    #[test]
    fn summary_never_contains_sensitive_fields() {
        let summary = MemberSummary {
            id: RecordId::from_table_key("member", "abc123"),
            name: "Ana".into(),
            nickname: String::new(),
            linkedin_url: String::new(),
            github_url: String::new(),
            instagram_handle: String::new(),
        };

        let value = serde_json::to_value(&summary).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("photo"));
        assert!(!obj.contains_key("password"));
        assert!(!obj.contains_key("member_number"));
    }

    #[test]
    fn update_merge_payload_skips_absent_fields() {
        let update = MemberUpdate {
            nickname: Some("nova".into()),
            ..Default::default()
        };

        let value = serde_json::to_value(&update).unwrap();
        let obj = value.as_object().unwrap();
        assert_eq!(obj.len(), 1);
        assert_eq!(obj["nickname"], "nova");
    }
}
