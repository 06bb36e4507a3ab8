use snake_arcade::save::{SaveData, SaveError, SaveStore};
use std::fs;
use tempfile::TempDir;

#[test]
fn missing_file_loads_as_zero() {
    let dir = TempDir::new().unwrap();
    let store = SaveStore::new(dir.path().join("snake_save.json"));

    let data = store.try_load().unwrap();

    assert_eq!(data, SaveData::default());
    assert_eq!(store.load().best_score, 0);
}

#[test]
fn write_then_load() {
    let dir = TempDir::new().unwrap();
    let store = SaveStore::new(dir.path().join("nested/dir/save.json"));
    let data = SaveData { best_score: 17, sound_volume: 0.4 };

    store.write(&data).unwrap();

    assert_eq!(store.load(), data);
}

#[test]
fn malformed_file_loads_as_zero() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("save.json");
    fs::write(&path, "not a score").unwrap();
    let store = SaveStore::new(&path);

    assert!(matches!(store.try_load(), Err(SaveError::Malformed { .. })));
    assert_eq!(store.load().best_score, 0);
}

#[test]
fn bare_integer_file_is_accepted() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("highscore.txt");
    fs::write(&path, "42\n").unwrap();

    let data = SaveStore::new(&path).try_load().unwrap();

    assert_eq!(data.best_score, 42);
    assert_eq!(data.sound_volume, 1.0);
}

#[test]
fn record_high_score_only_raises() {
    let dir = TempDir::new().unwrap();
    let store = SaveStore::new(dir.path().join("save.json"));
    store.write(&SaveData { best_score: 5, sound_volume: 0.25 }).unwrap();

    assert!(!store.record_high_score(3).unwrap());
    assert!(!store.record_high_score(5).unwrap());
    assert_eq!(store.load().best_score, 5);

    assert!(store.record_high_score(9).unwrap());
    let data = store.load();
    assert_eq!(data.best_score, 9);
    assert_eq!(data.sound_volume, 0.25);
}

#[test]
fn unwritable_path_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, "").unwrap();
    let store = SaveStore::new(blocker.join("save.json"));

    let err = store.write(&SaveData::default()).unwrap_err();

    assert!(matches!(err, SaveError::Io { .. }));
}
