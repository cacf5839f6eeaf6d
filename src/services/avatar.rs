//! Avatar file storage.
//!
//! Uploads land in a flat directory served back at `/avatars/{filename}`.
//! Stored names are prefixed with the owning user's id so concurrent users
//! with identically named files never collide, matching the filename shape
//! clients join onto the avatar base path.

use std::path::{Path, PathBuf};

use uuid::Uuid;

const DEFAULT_AVATAR_DIR: &str = "avatars";
const FALLBACK_FILE_NAME: &str = "avatar";

/// Resolve the avatar storage directory (`AVATARS_DIR`, default `avatars`).
#[must_use]
pub fn avatar_dir() -> PathBuf {
    std::env::var("AVATARS_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_AVATAR_DIR))
}

/// Reduce a client-supplied filename to a safe flat name.
///
/// Path separators and anything outside `[A-Za-z0-9._-]` become `_`; an
/// empty or dot-only result falls back to a fixed name.
pub(crate) fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.chars().all(|c| c == '.') || cleaned.is_empty() {
        FALLBACK_FILE_NAME.to_owned()
    } else {
        cleaned
    }
}

/// Stored filename for a user's upload: `{user_id}_{sanitized name}`.
#[must_use]
pub fn stored_file_name(user_id: Uuid, original: &str) -> String {
    format!("{user_id}_{}", sanitize_file_name(original))
}

/// Write uploaded bytes into the avatar directory, returning the stored
/// filename. Re-uploads with the same original name overwrite in place.
pub async fn store(dir: &Path, user_id: Uuid, original: &str, bytes: &[u8]) -> Result<String, std::io::Error> {
    let file_name = stored_file_name(user_id, original);
    tokio::fs::write(dir.join(&file_name), bytes).await?;
    Ok(file_name)
}

#[cfg(test)]
#[path = "avatar_test.rs"]
mod tests;
