use super::*;

// =============================================================================
// sanitize_file_name
// =============================================================================

#[test]
fn sanitize_keeps_plain_names() {
    assert_eq!(sanitize_file_name("photo.png"), "photo.png");
    assert_eq!(sanitize_file_name("me-2024_final.jpeg"), "me-2024_final.jpeg");
}

#[test]
fn sanitize_strips_path_components() {
    assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
    assert_eq!(sanitize_file_name("C:\\Users\\me\\pic.png"), "pic.png");
}

#[test]
fn sanitize_replaces_disallowed_chars() {
    assert_eq!(sanitize_file_name("my photo (1).png"), "my_photo__1_.png");
}

#[test]
fn sanitize_empty_falls_back() {
    assert_eq!(sanitize_file_name(""), "avatar");
}

#[test]
fn sanitize_dot_only_falls_back() {
    assert_eq!(sanitize_file_name(".."), "avatar");
    assert_eq!(sanitize_file_name("."), "avatar");
}

// =============================================================================
// stored_file_name
// =============================================================================

#[test]
fn stored_file_name_prefixes_user_id() {
    let id = Uuid::nil();
    assert_eq!(
        stored_file_name(id, "pic.png"),
        "00000000-0000-0000-0000-000000000000_pic.png"
    );
}

#[test]
fn stored_file_name_sanitizes_original() {
    let id = Uuid::nil();
    let name = stored_file_name(id, "../pic.png");
    assert!(name.ends_with("_pic.png"));
    assert!(!name.contains(".."));
}

// =============================================================================
// store
// =============================================================================

#[tokio::test]
async fn store_writes_bytes_and_returns_name() {
    let dir = std::env::temp_dir().join(format!("userhub_avatar_store_{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();

    let user_id = Uuid::new_v4();
    let name = store(&dir, user_id, "face.png", b"png-bytes").await.unwrap();
    assert_eq!(name, format!("{user_id}_face.png"));

    let written = tokio::fs::read(dir.join(&name)).await.unwrap();
    assert_eq!(written, b"png-bytes");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn store_overwrites_same_original_name() {
    let dir = std::env::temp_dir().join(format!("userhub_avatar_overwrite_{}", Uuid::new_v4()));
    tokio::fs::create_dir_all(&dir).await.unwrap();

    let user_id = Uuid::new_v4();
    store(&dir, user_id, "face.png", b"first").await.unwrap();
    let name = store(&dir, user_id, "face.png", b"second").await.unwrap();

    let written = tokio::fs::read(dir.join(&name)).await.unwrap();
    assert_eq!(written, b"second");

    tokio::fs::remove_dir_all(&dir).await.unwrap();
}
