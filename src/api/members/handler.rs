//! Member API Handlers
//!
//! Registration and edits arrive as multipart forms (the photo rides along
//! as a file part); deletion is a plain urlencoded form. All responses are
//! JSON except the photo endpoint, which answers with the raw stored bytes.

use axum::{
    Form, Json,
    extract::{Multipart, Path, Query, State},
    response::IntoResponse,
};
use http::header;
use serde::Deserialize;
use serde_json::json;

use crate::core::ServerState;
use crate::db::models::{MemberInsert, MemberRecord, MemberSummary, MemberUpdate};
use crate::utils::{AppError, AppResult};

/// Maximum photo size (5MB)
const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// Everything a register/edit form may carry. Absence and presence are
/// distinguished so edits only overwrite the fields that were submitted.
#[derive(Debug, Default)]
struct MemberForm {
    member_number: Option<String>,
    password: Option<String>,
    name: Option<String>,
    nickname: Option<String>,
    linkedin_url: Option<String>,
    github_url: Option<String>,
    instagram_handle: Option<String>,
    photo: Option<Vec<u8>>,
}

/// Drain the multipart stream into a [`MemberForm`], ignoring unknown fields
async fn collect_form(mut multipart: Multipart) -> AppResult<MemberForm> {
    let mut form = MemberForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "member_number" => form.member_number = Some(field.text().await?),
            "password" => form.password = Some(field.text().await?),
            "name" => form.name = Some(field.text().await?),
            "nickname" => form.nickname = Some(field.text().await?),
            "linkedin_url" => form.linkedin_url = Some(field.text().await?),
            "github_url" => form.github_url = Some(field.text().await?),
            "instagram_handle" => form.instagram_handle = Some(field.text().await?),
            "photo" => {
                let bytes = field.bytes().await?;
                // An empty file part means "no new photo"
                if !bytes.is_empty() {
                    form.photo = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(form)
}

fn parse_member_number(raw: Option<&str>, capacity: u32) -> AppResult<u32> {
    let raw = raw.ok_or_else(|| AppError::validation("member_number is required"))?;
    let number: u32 = raw.trim().parse().map_err(|_| {
        AppError::validation(format!(
            "member_number must be an integer between 1 and {capacity}"
        ))
    })?;
    if number < 1 || number > capacity {
        return Err(AppError::validation(format!(
            "member_number must be between 1 and {capacity}"
        )));
    }
    Ok(number)
}

/// Object ids are bare SurrealDB record keys: non-empty ASCII alphanumerics.
/// Anything else is rejected before the store is consulted.
fn parse_object_id(raw: &str) -> AppResult<&str> {
    if raw.is_empty() {
        return Err(AppError::validation("id is required"));
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::validation("Invalid id format"));
    }
    Ok(raw)
}

fn verify_password(record: &MemberRecord, submitted: Option<&str>) -> AppResult<()> {
    // Plaintext, exact, case-sensitive; a record without a password only
    // accepts the empty password
    let stored = record.password.as_deref().unwrap_or("");
    if stored != submitted.unwrap_or("") {
        return Err(AppError::unauthorized("Incorrect password"));
    }
    Ok(())
}

/// POST /upload - register a member
pub async fn upload(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let form = collect_form(multipart).await?;

    let number = parse_member_number(form.member_number.as_deref(), state.config.capacity)?;

    let photo = form
        .photo
        .ok_or_else(|| AppError::validation("photo file is required"))?;
    if photo.len() > MAX_PHOTO_BYTES {
        return Err(AppError::validation(format!(
            "Photo too large. Maximum size is {}MB",
            MAX_PHOTO_BYTES / 1024 / 1024
        )));
    }

    let record = state
        .members
        .insert(MemberInsert {
            member_number: number,
            password: form.password,
            name: form.name.unwrap_or_default(),
            nickname: form.nickname.unwrap_or_default(),
            linkedin_url: form.linkedin_url.unwrap_or_default(),
            github_url: form.github_url.unwrap_or_default(),
            instagram_handle: form.instagram_handle.unwrap_or_default(),
            photo,
        })
        .await?;

    let key = record.id.key().to_string();
    tracing::info!(member_number = number, id = %key, "Member registered");

    Ok(Json(json!({ "message": "Member registered", "id": key })))
}

#[derive(Deserialize)]
pub struct UserQuery {
    pub id: Option<String>,
}

/// Metadata response: redacted member plus a relative URL for the photo
#[derive(serde::Serialize)]
pub struct UserResponse {
    pub user: MemberSummary,
    #[serde(rename = "photoURL")]
    pub photo_url: String,
}

/// GET /user?id=<object_id> - member metadata without photo bytes
pub async fn get_user(
    State(state): State<ServerState>,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<UserResponse>> {
    let key = parse_object_id(query.id.as_deref().unwrap_or(""))?;

    let record = state
        .members
        .find_by_id(key)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    Ok(Json(UserResponse {
        photo_url: format!("/photo/{key}"),
        user: record.into_summary(),
    }))
}

/// GET /photo/{id} - raw photo bytes
///
/// Always served as image/jpeg, whatever the uploaded format was.
pub async fn get_photo(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let key = parse_object_id(&id)?;

    let record = state
        .members
        .find_by_id(key)
        .await?
        .ok_or_else(|| AppError::not_found("Member not found"))?;

    Ok(([(header::CONTENT_TYPE, "image/jpeg")], record.photo))
}

/// GET /all_users - every member, name-ordered, redacted
pub async fn list_users(State(state): State<ServerState>) -> AppResult<Json<Vec<MemberSummary>>> {
    let members = state.members.find_all().await?;
    Ok(Json(members))
}

/// POST /edit_user - partial update, password-gated
pub async fn edit_user(
    State(state): State<ServerState>,
    multipart: Multipart,
) -> AppResult<Json<serde_json::Value>> {
    let form = collect_form(multipart).await?;

    let number = parse_member_number(form.member_number.as_deref(), state.config.capacity)?;

    let record = state
        .members
        .find_by_number(number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member number {number} not found")))?;

    verify_password(&record, form.password.as_deref())?;

    if let Some(photo) = &form.photo
        && photo.len() > MAX_PHOTO_BYTES
    {
        return Err(AppError::validation(format!(
            "Photo too large. Maximum size is {}MB",
            MAX_PHOTO_BYTES / 1024 / 1024
        )));
    }

    state
        .members
        .update_fields(
            number,
            MemberUpdate {
                name: form.name,
                nickname: form.nickname,
                linkedin_url: form.linkedin_url,
                github_url: form.github_url,
                instagram_handle: form.instagram_handle,
                photo: form.photo,
            },
        )
        .await?;

    tracing::info!(member_number = number, "Member updated");

    Ok(Json(json!({ "message": "Member updated" })))
}

/// Both fields optional: absence is reported by [`parse_member_number`] as a
/// 400 with the usual JSON body, never by the extractor's own rejection
#[derive(Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub member_number: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// POST /delete_user - remove a member, password-gated
pub async fn delete_user(
    State(state): State<ServerState>,
    Form(form): Form<DeleteForm>,
) -> AppResult<Json<serde_json::Value>> {
    let number = parse_member_number(form.member_number.as_deref(), state.config.capacity)?;

    let record = state
        .members
        .find_by_number(number)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Member number {number} not found")))?;

    verify_password(&record, form.password.as_deref())?;

    // The record can vanish between the password check and the delete;
    // treat that as not-found rather than success
    if !state.members.delete_by_number(number).await? {
        return Err(AppError::not_found(format!(
            "Member number {number} not found"
        )));
    }

    tracing::info!(member_number = number, "Member deleted");

    Ok(Json(json!({ "message": "Member deleted" })))
}
