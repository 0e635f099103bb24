use resfs::{ListingOptions, ResourceError, UNLIMITED_DEPTH, copy_as, copy_to, list};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn build_source_tree(root: &Path) {
    fs::create_dir(root).unwrap();
    fs::write(root.join("one.txt"), b"one").unwrap();
    fs::create_dir(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("two.txt"), vec![2u8; 512]).unwrap();
    fs::write(root.join(".dotfile"), b"dot").unwrap();
}

/// Relative paths of all descendants, for structural comparison.
fn relative_set(root: &Path) -> BTreeSet<PathBuf> {
    list(root, UNLIMITED_DEPTH, ListingOptions::default())
        .unwrap()
        .into_iter()
        .map(|e| e.strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

#[test]
fn copy_file_to_exact_target() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, b"payload").unwrap();
    let dest = td.path().join("dest.txt");

    let out = copy_as(&src, &dest, false).unwrap();
    assert_eq!(out, dest);
    assert_eq!(fs::read(&dest).unwrap(), b"payload");
    assert_eq!(fs::read(&src).unwrap(), b"payload", "source unchanged");
}

#[test]
fn copy_refuses_existing_target_without_replace() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, b"new").unwrap();
    let dest = td.path().join("dest.txt");
    fs::write(&dest, b"old").unwrap();

    let err = copy_as(&src, &dest, false).unwrap_err();
    assert!(matches!(err, ResourceError::AlreadyExists(_)));
    assert_eq!(fs::read(&dest).unwrap(), b"old");
}

#[test]
fn copy_replaces_existing_target_when_asked() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, b"new").unwrap();
    let dest = td.path().join("dest.txt");
    fs::write(&dest, b"old").unwrap();

    copy_as(&src, &dest, true).unwrap();
    assert_eq!(fs::read(&dest).unwrap(), b"new");
}

#[test]
fn copy_without_target_parent_fails() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, b"x").unwrap();

    let err = copy_as(&src, &td.path().join("no/dir/dest.txt"), false).unwrap_err();
    assert!(matches!(err, ResourceError::ParentNotFound(_)));
}

#[test]
fn copy_missing_source_fails_not_found() {
    let td = tempdir().unwrap();
    let err = copy_as(&td.path().join("gone"), &td.path().join("dest"), false).unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(_)));
}

#[test]
fn directory_copy_preserves_relative_paths_and_sizes() {
    let td = tempdir().unwrap();
    let src = td.path().join("tree");
    build_source_tree(&src);
    let dest = td.path().join("tree-copy");

    copy_as(&src, &dest, false).unwrap();

    assert_eq!(relative_set(&src), relative_set(&dest));
    assert_eq!(
        fs::metadata(src.join("sub").join("two.txt")).unwrap().len(),
        fs::metadata(dest.join("sub").join("two.txt")).unwrap().len()
    );
    assert_eq!(fs::read(dest.join(".dotfile")).unwrap(), b"dot");
    // Source still intact.
    assert_eq!(relative_set(&src).len(), 4);
}

#[test]
fn replacing_a_directory_target_discards_its_old_content() {
    let td = tempdir().unwrap();
    let src = td.path().join("tree");
    build_source_tree(&src);

    let dest = td.path().join("old-tree");
    fs::create_dir(&dest).unwrap();
    fs::write(dest.join("stale.txt"), b"stale").unwrap();

    copy_as(&src, &dest, true).unwrap();
    assert!(!dest.join("stale.txt").exists());
    assert_eq!(relative_set(&src), relative_set(&dest));
}

#[test]
fn copy_to_keeps_the_source_name() {
    let td = tempdir().unwrap();
    let src = td.path().join("keepname.txt");
    fs::write(&src, b"k").unwrap();
    let dir = td.path().join("bucket");
    fs::create_dir(&dir).unwrap();

    let out = copy_to(&src, &dir, false).unwrap();
    assert_eq!(out, dir.join("keepname.txt"));
    assert!(out.exists());
}

#[test]
fn copy_to_requires_an_existing_directory() {
    let td = tempdir().unwrap();
    let src = td.path().join("src.txt");
    fs::write(&src, b"x").unwrap();

    let err = copy_to(&src, &td.path().join("nowhere"), false).unwrap_err();
    assert!(matches!(err, ResourceError::NotFound(_)));

    let not_dir = td.path().join("file-dest");
    fs::write(&not_dir, b"y").unwrap();
    let err = copy_to(&src, &not_dir, false).unwrap_err();
    assert!(matches!(err, ResourceError::NotADirectory(_)));
}
