use filetime::{FileTime, set_file_mtime};
use pofm::{Config, FileOpError, insert_text};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn sample(dir: &Path) -> PathBuf {
    let p = dir.join("sample.txt");
    fs::write(&p, b"abcdef").unwrap();
    p
}

fn no_temp_files(dir: &Path) -> bool {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .all(|e| !e.file_name().to_string_lossy().starts_with(".pofm."))
}

#[test]
fn inserts_in_the_middle() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    insert_text(&Config::default(), &p, "XYZ", 3).unwrap();
    assert_eq!(fs::read(&p).unwrap(), b"abcXYZdef");
    assert!(no_temp_files(td.path()));
}

#[test]
fn inserts_at_start_and_end() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    insert_text(&Config::default(), &p, "XYZ", 0).unwrap();
    assert_eq!(fs::read(&p).unwrap(), b"XYZabcdef");

    let q = td.path().join("end.txt");
    fs::write(&q, b"abcdef").unwrap();
    insert_text(&Config::default(), &q, "XYZ", 6).unwrap();
    assert_eq!(fs::read(&q).unwrap(), b"abcdefXYZ", "no newline is added at the end");
}

#[test]
fn offset_past_end_leaves_file_unchanged() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    let err = insert_text(&Config::default(), &p, "X", 7).unwrap_err();
    assert!(
        matches!(err, FileOpError::OffsetBeyondEnd { offset: 7, len: 6 }),
        "got {err:?}"
    );
    assert_eq!(fs::read(&p).unwrap(), b"abcdef");
}

#[test]
fn negative_offset_is_rejected() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    let err = insert_text(&Config::default(), &p, "X", -1).unwrap_err();
    assert!(matches!(err, FileOpError::NegativeOffset(-1)), "got {err:?}");
    assert_eq!(fs::read(&p).unwrap(), b"abcdef");
}

#[test]
fn missing_file_fails_to_open() {
    let td = tempdir().unwrap();
    let p = td.path().join("nothing.txt");
    let err = insert_text(&Config::default(), &p, "X", 0).unwrap_err();
    assert!(matches!(err, FileOpError::OpenFailed { .. }), "got {err:?}");
    assert!(!p.exists(), "insert must not create the file");
}

#[test]
fn allocation_failure_is_reported() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    let cfg = Config {
        max_buffer_bytes: 3,
        ..Config::default()
    };
    let err = insert_text(&cfg, &p, "X", 1).unwrap_err();
    assert!(
        matches!(err, FileOpError::AllocationFailed { requested: 6, .. }),
        "got {err:?}"
    );
    assert_eq!(fs::read(&p).unwrap(), b"abcdef");
}

#[test]
fn insert_refreshes_modification_time() {
    let td = tempdir().unwrap();
    let p = sample(td.path());
    let old = FileTime::from_unix_time(1_600_000_000, 0);
    set_file_mtime(&p, old).unwrap();

    insert_text(&Config::default(), &p, "!", 6).unwrap();

    let meta = fs::metadata(&p).unwrap();
    let mtime = FileTime::from_last_modification_time(&meta);
    assert!(mtime > old, "mtime should move forward after a rewrite");
    assert_eq!(meta.len(), 7);
}

#[cfg(unix)]
#[test]
fn read_only_file_is_not_rewritten() {
    use std::os::unix::fs::PermissionsExt;

    unsafe {
        if libc::geteuid() == 0 {
            eprintln!("skipping: running as root");
            return;
        }
    }

    let td = tempdir().unwrap();
    let p = sample(td.path());
    fs::set_permissions(&p, fs::Permissions::from_mode(0o444)).unwrap();

    let err = insert_text(&Config::default(), &p, "X", 0).unwrap_err();
    assert!(matches!(err, FileOpError::OpenFailed { .. }), "got {err:?}");
    assert_eq!(fs::read(&p).unwrap(), b"abcdef");
}

#[cfg(unix)]
#[test]
fn insert_through_symlink_edits_the_real_file() {
    let td = tempdir().unwrap();
    let real = sample(td.path());
    let link = td.path().join("link.txt");
    std::os::unix::fs::symlink(&real, &link).unwrap();

    insert_text(&Config::default(), &link, "XYZ", 3).unwrap();

    assert_eq!(fs::read(&real).unwrap(), b"abcXYZdef");
    assert!(
        fs::symlink_metadata(&link).unwrap().file_type().is_symlink(),
        "link must stay a link"
    );
}
