//! Member Repository

use super::{RepoError, RepoResult};
use crate::db::models::{MemberInsert, MemberRecord, MemberSummary, MemberUpdate};
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

const TABLE: &str = "member";

/// Guarded insert: capacity check, number re-check, and CREATE run inside one
/// store transaction. The thrown markers are translated to typed errors in
/// [`MemberRepository::insert`]; the unique index on `member_number` is the
/// final backstop should the store ever run these interleaved.
const INSERT_GUARDED: &str = "
    BEGIN TRANSACTION;
    LET $total = (SELECT count() AS total FROM member GROUP ALL)[0].total ?? 0;
    IF $total >= $capacity { THROW \"roster_full\" };
    LET $existing = (SELECT VALUE id FROM member WHERE member_number = $number LIMIT 1);
    IF $existing[0] != NONE { THROW \"duplicate_number\" };
    CREATE member CONTENT $data;
    COMMIT TRANSACTION;
";

#[derive(Clone, Debug)]
pub struct MemberRepository {
    db: Surreal<Any>,
    capacity: u32,
}

impl MemberRepository {
    pub fn new(db: Surreal<Any>, capacity: u32) -> Self {
        Self { db, capacity }
    }

    /// Find a member by the store-assigned object id (bare record key)
    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<MemberRecord>> {
        let record: Option<MemberRecord> = self.db.select((TABLE, key)).await?;
        Ok(record)
    }

    /// Find a member by the client-chosen member number
    pub async fn find_by_number(&self, number: u32) -> RepoResult<Option<MemberRecord>> {
        let mut result = self
            .db
            .query("SELECT * FROM member WHERE member_number = $number LIMIT 1")
            .bind(("number", number))
            .await?;
        let records: Vec<MemberRecord> = result.take(0)?;
        Ok(records.into_iter().next())
    }

    /// All members ordered by name ascending, photo and sensitive fields
    /// never selected
    pub async fn find_all(&self) -> RepoResult<Vec<MemberSummary>> {
        let rows: Vec<MemberSummary> = self
            .db
            .query(
                "SELECT id, name, nickname, linkedin_url, github_url, instagram_handle \
                 FROM member ORDER BY name ASC",
            )
            .await?
            .take(0)?;
        Ok(rows)
    }

    /// Insert a new member behind the capacity and uniqueness guards
    pub async fn insert(&self, data: MemberInsert) -> RepoResult<MemberRecord> {
        let number = data.member_number;
        let mut response = self
            .db
            .query(INSERT_GUARDED)
            .bind(("capacity", self.capacity))
            .bind(("number", number))
            .bind(("data", data))
            .await?;

        // A THROW aborts the whole transaction, so the sibling statements
        // report "not executed due to a failed transaction" and the marker
        // sits on only one of them. Collect every statement error and scan
        // them all for the markers.
        let errors = response.take_errors();
        if !errors.is_empty() {
            let messages: Vec<String> = errors.into_values().map(|e| e.to_string()).collect();
            return Err(if messages.iter().any(|m| m.contains("roster_full")) {
                RepoError::CapacityExceeded(format!(
                    "The roster already has {} members",
                    self.capacity
                ))
            } else if messages
                .iter()
                .any(|m| m.contains("duplicate_number") || m.contains("already contains"))
            {
                RepoError::Duplicate(format!("Member number {number} is already in use"))
            } else {
                RepoError::Database(messages.join("; "))
            });
        }

        self.find_by_number(number)
            .await?
            .ok_or_else(|| RepoError::Database("Failed to create member".to_string()))
    }

    /// Merge the supplied fields into the member with the given number.
    /// Fields absent from `data` are left untouched.
    pub async fn update_fields(&self, number: u32, data: MemberUpdate) -> RepoResult<MemberRecord> {
        let existing = self
            .find_by_number(number)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Member number {number} not found")))?;

        self.db
            .query("UPDATE $record MERGE $data")
            .bind(("record", existing.id))
            .bind(("data", data))
            .await?
            .check()?;

        self.find_by_number(number)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Member number {number} not found")))
    }

    /// Remove the member with the given number. Returns false when the record
    /// was already gone (lost the race to another delete).
    pub async fn delete_by_number(&self, number: u32) -> RepoResult<bool> {
        let Some(existing) = self.find_by_number(number).await? else {
            return Ok(false);
        };
        let deleted: Option<MemberRecord> = self.db.delete(existing.id).await?;
        Ok(deleted.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;

    async fn repo(capacity: u32) -> MemberRepository {
        let service = DbService::new("mem://").await.unwrap();
        MemberRepository::new(service.db, capacity)
    }

    fn insert_payload(number: u32, name: &str) -> MemberInsert {
        MemberInsert {
            member_number: number,
            password: Some("s3cret".into()),
            name: name.into(),
            nickname: format!("{name}-nick"),
            linkedin_url: format!("https://linkedin.com/in/{name}"),
            github_url: format!("https://github.com/{name}"),
            instagram_handle: format!("@{name}"),
            photo: vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10],
        }
    }

    #[tokio::test]
    async fn insert_then_find_by_number_and_id() {
        let repo = repo(42).await;
        let created = repo.insert(insert_payload(5, "ana")).await.unwrap();
        assert_eq!(created.member_number, 5);
        assert_eq!(created.photo, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);

        let by_number = repo.find_by_number(5).await.unwrap().unwrap();
        assert_eq!(by_number.name, "ana");

        let by_id = repo
            .find_by_id(&created.id.key().to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(by_id.member_number, 5);
    }

    #[tokio::test]
    async fn duplicate_number_is_rejected() {
        let repo = repo(42).await;
        repo.insert(insert_payload(5, "ana")).await.unwrap();

        let err = repo.insert(insert_payload(5, "bia")).await.unwrap_err();
        assert!(matches!(err, RepoError::Duplicate(_)), "got {err:?}");

        // No second insert happened
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unique_index_catches_raw_duplicate_creates() {
        let repo = repo(42).await;
        repo.insert(insert_payload(5, "ana")).await.unwrap();

        // Bypass the guarded insert entirely; the index must still refuse
        let result = repo
            .db
            .query("CREATE member CONTENT $data")
            .bind(("data", insert_payload(5, "bia")))
            .await
            .unwrap()
            .check();
        assert!(result.is_err());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn capacity_guard_refuses_overflow() {
        let repo = repo(2).await;
        repo.insert(insert_payload(1, "ana")).await.unwrap();
        repo.insert(insert_payload(2, "bia")).await.unwrap();

        let err = repo.insert(insert_payload(3, "caio")).await.unwrap_err();
        assert!(matches!(err, RepoError::CapacityExceeded(_)), "got {err:?}");
        assert_eq!(repo.find_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn update_merges_only_supplied_fields() {
        let repo = repo(42).await;
        repo.insert(insert_payload(5, "ana")).await.unwrap();

        let updated = repo
            .update_fields(
                5,
                MemberUpdate {
                    nickname: Some("nova".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nickname, "nova");
        // Everything else untouched
        assert_eq!(updated.name, "ana");
        assert_eq!(updated.photo, vec![0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]);
        assert_eq!(updated.password.as_deref(), Some("s3cret"));
    }

    #[tokio::test]
    async fn update_unknown_number_is_not_found() {
        let repo = repo(42).await;
        let err = repo
            .update_fields(9, MemberUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, RepoError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_then_delete_again() {
        let repo = repo(42).await;
        repo.insert(insert_payload(5, "ana")).await.unwrap();

        assert!(repo.delete_by_number(5).await.unwrap());
        assert!(!repo.delete_by_number(5).await.unwrap());
        assert!(repo.find_by_number(5).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn listing_is_ordered_by_name() {
        let repo = repo(42).await;
        repo.insert(insert_payload(2, "bruna")).await.unwrap();
        repo.insert(insert_payload(1, "ana")).await.unwrap();

        let names: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|m| m.name)
            .collect();
        assert_eq!(names, vec!["ana".to_string(), "bruna".to_string()]);
    }
}
