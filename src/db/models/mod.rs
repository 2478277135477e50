//! Data models for stored documents and response DTOs

pub mod member;
pub mod serde_helpers;

pub use member::{MemberInsert, MemberRecord, MemberSummary, MemberUpdate};
