//! Profile routes — read and multipart update of the current user.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::Json;

use super::ApiError;
use super::auth::AuthUser;
use crate::services::users::UserRecord;
use crate::services::{avatar, users};
use crate::state::AppState;

/// `GET /profile` — return the authenticated user's profile.
pub async fn get_profile(auth: AuthUser) -> Json<UserRecord> {
    let user = auth.user;
    Json(UserRecord {
        id: user.id,
        username: user.username,
        name: user.name,
        email: user.email,
        avatar: user.avatar,
    })
}

/// Fields collected from the multipart `PUT /profile` body.
#[derive(Debug, Default)]
pub(crate) struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    /// Original filename and raw bytes of the uploaded avatar, if any.
    pub avatar: Option<(String, Vec<u8>)>,
}

/// Record a text part into the update. Unknown field names are ignored.
pub(crate) fn apply_text_field(update: &mut ProfileUpdate, field_name: &str, value: String) {
    match field_name {
        "name" => update.name = Some(value),
        "email" => update.email = Some(value),
        _ => {}
    }
}

/// Required text parts present and non-blank.
pub(crate) fn required_fields(update: &ProfileUpdate) -> Option<(&str, &str)> {
    let name = update.name.as_deref()?.trim();
    let email = update.email.as_deref()?.trim();
    if name.is_empty() || email.is_empty() {
        return None;
    }
    Some((name, email))
}

/// `PUT /profile` — update name/email and optionally store a new avatar.
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<UserRecord>, ApiError> {
    let mut update = ProfileUpdate::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|_| ApiError::bad_request("Malformed multipart body"))?
    {
        let Some(field_name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };
        if field_name == "avatar" {
            let original = field.file_name().unwrap_or("avatar").to_owned();
            let bytes = field
                .bytes()
                .await
                .map_err(|_| ApiError::bad_request("Malformed multipart body"))?;
            if !bytes.is_empty() {
                update.avatar = Some((original, bytes.to_vec()));
            }
        } else {
            let value = field
                .text()
                .await
                .map_err(|_| ApiError::bad_request("Malformed multipart body"))?;
            apply_text_field(&mut update, &field_name, value);
        }
    }

    let Some((name, email)) = required_fields(&update) else {
        return Err(ApiError::new(StatusCode::UNPROCESSABLE_ENTITY, "Name and email are required"));
    };
    let (name, email) = (name.to_owned(), email.to_owned());

    let avatar_name = match &update.avatar {
        Some((original, bytes)) => Some(
            avatar::store(&state.avatar_dir, auth.user.id, original, bytes)
                .await
                .map_err(|e| {
                    tracing::error!(error = %e, "avatar write failed");
                    ApiError::internal("Failed to store avatar")
                })?,
        ),
        None => None,
    };

    let record = users::update_profile(&state.pool, auth.user.id, &name, &email, avatar_name.as_deref())
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "profile update failed");
            ApiError::internal("Failed to update profile")
        })?;

    tracing::info!(username = %record.username, avatar_updated = avatar_name.is_some(), "profile updated");
    Ok(Json(record))
}

#[cfg(test)]
#[path = "profile_test.rs"]
mod tests;
