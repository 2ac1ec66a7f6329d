use std::collections::BTreeMap;

use appicon::lockfile::{hash_file, IconLock, Lockfile, LOCKFILE_VERSION};

#[test]
fn save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.lock.toml");

    let original = Lockfile {
        version: LOCKFILE_VERSION,
        logo_hash: Some("abc123".into()),
        icons: BTreeMap::from([
            (
                "app_icon_16.png".into(),
                IconLock {
                    size: 16,
                    hash: "def456".into(),
                    placeholder: false,
                },
            ),
            (
                "app_icon_32.png".into(),
                IconLock {
                    size: 32,
                    hash: "789abc".into(),
                    placeholder: true,
                },
            ),
        ]),
    };

    original.save(&path).unwrap();
    assert_eq!(Lockfile::load(&path).unwrap(), original);
}

#[test]
fn load_nonexistent_returns_default() {
    let dir = tempfile::tempdir().unwrap();
    let lockfile = Lockfile::load(&dir.path().join("missing.toml")).unwrap();

    assert_eq!(lockfile.version, 0);
    assert!(lockfile.logo_hash.is_none());
    assert!(lockfile.icons.is_empty());
}

#[test]
fn placeholder_defaults_to_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.lock.toml");
    std::fs::write(
        &path,
        r#"
version = 1
logo_hash = "aa"

[icons."app_icon_16.png"]
size = 16
hash = "bb"
"#,
    )
    .unwrap();

    let lockfile = Lockfile::load(&path).unwrap();
    assert!(!lockfile.icons["app_icon_16.png"].placeholder);
}

#[test]
fn hash_file_is_blake3_hex() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.bin");
    std::fs::write(&path, b"hello").unwrap();

    let hash = hash_file(&path).unwrap();
    assert_eq!(hash, blake3::hash(b"hello").to_hex().to_string());
    assert_eq!(hash.len(), 64);
}

#[test]
fn missing_logo_hash_is_omitted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("appicon.lock.toml");

    let lockfile = Lockfile::new(None);
    lockfile.save(&path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(!content.contains("logo_hash"), "{content}");
    assert_eq!(Lockfile::load(&path).unwrap(), lockfile);
}
