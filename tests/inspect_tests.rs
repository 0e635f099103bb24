use resfs::{DigestAlgorithm, ResourceError, content_hash, content_type};
use sha2::{Digest, Sha256};
use std::fs;
use tempfile::tempdir;

/// SHA-256 of the 4-byte content "TEST".
const TEST_SHA256: &str = "94ee059335e587e501cc4bf90613e0814f00a7b08bc7c648fd865a2af6a22cc2";

#[test]
fn hashing_known_content_matches_the_vector() {
    let td = tempdir().unwrap();
    let f = td.path().join("t.bin");
    fs::write(&f, b"TEST").unwrap();

    let digest = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();
    assert_eq!(digest, TEST_SHA256);
}

#[test]
fn hashes_are_deterministic_and_sized_per_algorithm() {
    let td = tempdir().unwrap();
    let f = td.path().join("data");
    fs::write(&f, b"some stable content").unwrap();

    let h256a = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();
    let h256b = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();
    assert_eq!(h256a, h256b);
    assert_eq!(h256a.len(), 64);
    assert!(h256a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));

    let h512 = content_hash(&f, DigestAlgorithm::Sha512).unwrap().unwrap();
    assert_eq!(h512.len(), 128);
}

#[test]
fn mutating_content_changes_the_hash() {
    let td = tempdir().unwrap();
    let f = td.path().join("mut.txt");
    fs::write(&f, b"before").unwrap();
    let before = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();

    fs::write(&f, b"after").unwrap();
    let after = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();
    assert_ne!(before, after);
}

#[test]
fn chunked_hash_matches_one_shot_digest() {
    let td = tempdir().unwrap();
    let f = td.path().join("large.bin");
    // Larger than the 64 KiB read buffer so several chunks are digested.
    let data: Vec<u8> = (0..200_000usize).map(|i| (i % 251) as u8).collect();
    fs::write(&f, &data).unwrap();

    let streamed = content_hash(&f, DigestAlgorithm::Sha256).unwrap().unwrap();
    let one_shot = hex::encode(Sha256::digest(&data));
    assert_eq!(streamed, one_shot);
}

#[test]
fn directories_have_no_hash_or_content_type() {
    let td = tempdir().unwrap();
    assert_eq!(content_hash(td.path(), DigestAlgorithm::Sha256).unwrap(), None);
    assert_eq!(content_type(td.path()).unwrap(), None);
}

#[test]
fn missing_path_fails_not_found() {
    let td = tempdir().unwrap();
    let gone = td.path().join("gone");
    assert!(matches!(
        content_hash(&gone, DigestAlgorithm::Sha256).unwrap_err(),
        ResourceError::NotFound(_)
    ));
    assert!(matches!(
        content_type(&gone).unwrap_err(),
        ResourceError::NotFound(_)
    ));
}

#[test]
fn content_type_is_guessed_for_known_extensions() {
    let td = tempdir().unwrap();
    let txt = td.path().join("note.txt");
    fs::write(&txt, b"hello").unwrap();
    assert_eq!(content_type(&txt).unwrap().as_deref(), Some("text/plain"));

    let jpg = td.path().join("photo.jpg");
    fs::write(&jpg, b"\xff\xd8\xff").unwrap();
    assert_eq!(content_type(&jpg).unwrap().as_deref(), Some("image/jpeg"));
}

#[test]
fn undetectable_content_type_is_none() {
    let td = tempdir().unwrap();
    let blob = td.path().join("blob.zzz9");
    fs::write(&blob, b"????").unwrap();
    assert_eq!(content_type(&blob).unwrap(), None);
}
