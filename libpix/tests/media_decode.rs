//! Media decoding against real files

use std::io::Write;

use libpix::error::MediaError;
use libpix::feed::{Action, FeedSettings, FeedState};
use libpix::media::MediaDecoder;
use libpix::MediaKind;
use tempfile::TempDir;

fn write_file(dir: &TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(bytes).unwrap();
    path
}

#[tokio::test]
async fn test_decode_png_to_data_url() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "photo.png", b"\x89PNG");

    let decoded = MediaDecoder::default().decode(&path).await.unwrap();

    assert_eq!(decoded.content_type, "image/png");
    assert_eq!(decoded.size, 4);
    assert_eq!(decoded.media_ref, "data:image/png;base64,iVBORw==");
}

#[tokio::test]
async fn test_decode_rejects_text_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "notes.txt", b"hello");

    let result = MediaDecoder::default().decode(&path).await;

    assert!(matches!(result, Err(MediaError::UnsupportedType(_))));
}

#[tokio::test]
async fn test_decode_enforces_size_limit() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "clip.mp4", &[0u8; 64]);

    let result = MediaDecoder::new(16).decode(&path).await;

    assert!(matches!(
        result,
        Err(MediaError::TooLarge { size: 64, limit: 16 })
    ));
}

#[tokio::test]
async fn test_decode_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gone.jpg");

    let result = MediaDecoder::default().decode(&path).await;

    assert!(matches!(result, Err(MediaError::Io(_))));
}

#[tokio::test]
async fn test_decoded_video_becomes_video_post() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "clip.mp4", b"ftyp");

    let decoded = MediaDecoder::default().decode(&path).await.unwrap();
    let state = libpix::feed::reduce(
        FeedState::seeded(FeedSettings::default()),
        Action::CompleteUpload {
            upload: None,
            title: "Clip".to_string(),
            media_ref: decoded.media_ref.clone(),
            content_type: decoded.content_type,
        },
    );

    assert_eq!(state.posts[0].media_kind, MediaKind::Video);
    assert_eq!(state.posts[0].media_ref, decoded.media_ref);
    assert_eq!(state.posts[0].title, "Clip");
}
