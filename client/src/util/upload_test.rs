#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_policy_is_images_up_to_five_mb() {
    let policy = UploadPolicy::default();
    assert_eq!(policy.accept, "image/*");
    assert_eq!(policy.max_bytes, 5.0 * 1024.0 * 1024.0);
}

#[test]
fn accepts_an_in_policy_image() {
    let policy = UploadPolicy::default();
    assert_eq!(validate_file("image/png", 1024.0, &policy), Ok(()));
    assert_eq!(validate_file("image/jpeg", 5.0 * 1024.0 * 1024.0, &policy), Ok(()));
}

#[test]
fn rejects_non_image_mime_types() {
    let policy = UploadPolicy::default();
    let err = validate_file("application/pdf", 1024.0, &policy).expect_err("pdf rejected");
    assert_eq!(err, UploadError::UnsupportedType { accept: "image/".to_owned() });
    assert_eq!(err.user_message(), "Invalid file type. Please upload image/ files.");
}

#[test]
fn rejects_oversized_files() {
    let policy = UploadPolicy::default();
    let err = validate_file("image/png", 5.0 * 1024.0 * 1024.0 + 1.0, &policy).expect_err("too large");
    assert_eq!(err, UploadError::TooLarge { max_mb: 5 });
    assert_eq!(err.user_message(), "File too large. Maximum size is 5MB.");
}

#[test]
fn exact_accept_patterns_match_exactly() {
    let policy = UploadPolicy { accept: "image/png".to_owned(), ..UploadPolicy::default() };
    assert_eq!(validate_file("image/png", 10.0, &policy), Ok(()));
    assert!(validate_file("image/jpeg", 10.0, &policy).is_err());
}

#[test]
fn type_check_runs_before_size_check() {
    let policy = UploadPolicy::default();
    let err = validate_file("video/mp4", 99.0 * 1024.0 * 1024.0, &policy).expect_err("rejected");
    assert!(matches!(err, UploadError::UnsupportedType { .. }));
}
