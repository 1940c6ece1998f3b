use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;

use engine::{Engine, EngineError, Expense, today};
use tempfile::TempDir;

fn engine_with_file() -> (Engine, TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("test_expenses.json");
    let engine = Engine::builder().path(&path).build().unwrap();
    (engine, dir, path)
}

fn lunch() -> Expense {
    Expense::new(9.99, "Test", "Unit test", "")
}

#[test]
fn get_and_delete() {
    let (engine, _dir, path) = engine_with_file();

    let created = engine.create(lunch()).unwrap();
    assert_eq!(engine.get(created.id).unwrap(), created);

    engine.delete(created.id).unwrap();

    assert_eq!(engine.get(created.id), Err(EngineError::NotFound(created.id)));
    assert!(path.exists());
}

#[test]
fn ids_are_never_reused() {
    let engine = Engine::builder().build().unwrap();

    let first = engine.create(lunch()).unwrap();
    let second = engine.create(lunch()).unwrap();
    engine.delete(second.id).unwrap();
    let third = engine.create(lunch()).unwrap();

    assert_eq!((first.id, second.id, third.id), (1, 2, 3));
}

#[test]
fn blank_date_becomes_today_and_explicit_date_is_kept() {
    let engine = Engine::builder().build().unwrap();

    let dated = engine
        .create(Expense::new(3.0, "Food", "", "2023-12-24"))
        .unwrap();
    let undated = engine.create(Expense::new(3.0, "Food", "", " ")).unwrap();

    assert_eq!(dated.date, "2023-12-24");
    assert_eq!(undated.date, today());
}

#[test]
fn deleting_unknown_id_does_not_write() {
    let (engine, _dir, path) = engine_with_file();

    assert_eq!(engine.delete(99), Err(EngineError::NotFound(99)));
    assert!(!path.exists());
}

#[test]
fn reload_restores_records_and_id_sequence() {
    let (engine, _dir, path) = engine_with_file();
    engine.create(Expense::new(10.0, "Food", "", "2024-01-01")).unwrap();
    engine.create(Expense::new(5.0, "Food", "pizza", "2024-01-02")).unwrap();
    engine.create(Expense::new(7.0, "Transport", "", "2024-01-03")).unwrap();
    engine.delete(3).unwrap();
    let before = engine.list();
    drop(engine);

    let reloaded = Engine::builder().path(&path).build().unwrap();

    assert_eq!(reloaded.list(), before);
    assert_eq!(reloaded.create(lunch()).unwrap().id, 3);
}

#[test]
fn persisted_file_is_pretty_json_array() {
    let (engine, _dir, path) = engine_with_file();
    let created = engine
        .create(Expense::new(12.5, "Books", "", "2024-03-01"))
        .unwrap();

    let raw = fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert!(raw.contains("\n  {\n    \"id\": 1,\n    \"amount\": 12.5,"));
    assert_eq!(
        value,
        serde_json::json!([{
            "id": created.id,
            "amount": 12.5,
            "category": "Books",
            "note": "",
            "date": "2024-03-01",
        }])
    );
}

#[test]
fn missing_and_empty_files_start_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");

    let engine = Engine::builder().path(&path).build().unwrap();
    assert!(engine.list().is_empty());

    fs::write(&path, "").unwrap();
    let engine = Engine::builder().path(&path).build().unwrap();
    assert!(engine.list().is_empty());
    assert_eq!(engine.create(lunch()).unwrap().id, 1);
}

#[test]
fn malformed_file_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    fs::write(&path, "{ not json").unwrap();

    let err = Engine::builder().path(&path).build().unwrap_err();
    assert!(matches!(err, EngineError::Serialization(_)));
}

#[test]
fn records_without_note_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    fs::write(
        &path,
        r#"[{"id":1,"amount":2.0,"category":"Food","date":"2024-01-01"}]"#,
    )
    .unwrap();

    let engine = Engine::builder().path(&path).build().unwrap();

    assert_eq!(engine.get(1).unwrap().note, "");
    assert_eq!(engine.create(lunch()).unwrap().id, 2);
}

#[test]
fn exhausted_ids_are_reported() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.json");
    let record = |id: u64| {
        format!(r#"[{{"id":{id},"amount":2.0,"category":"Food","note":"","date":"2024-01-01"}}]"#)
    };

    fs::write(&path, record(u64::MAX)).unwrap();
    let err = Engine::builder().path(&path).build().unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));

    fs::write(&path, record(u64::MAX - 1)).unwrap();
    let engine = Engine::builder().path(&path).build().unwrap();
    let err = engine.create(lunch()).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
    assert_eq!(engine.list().len(), 1);
}

#[test]
fn padded_date_is_rejected() {
    let engine = Engine::builder().build().unwrap();

    let err = engine
        .create(Expense::new(1.0, "Food", "", " 2024-01-01 "))
        .unwrap_err();

    assert_eq!(
        err,
        EngineError::InvalidInput("date must be formatted as YYYY-MM-DD".to_string())
    );
    assert!(engine.list().is_empty());
}

#[test]
fn failed_write_rolls_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("expenses.json");
    let engine = Engine::builder().path(&path).build().unwrap();

    let err = engine.create(lunch()).unwrap_err();

    assert!(matches!(err, EngineError::Io(_)));
    assert!(engine.list().is_empty());

    fs::create_dir(dir.path().join("missing")).unwrap();
    assert_eq!(engine.create(lunch()).unwrap().id, 1);
}

#[test]
fn failed_delete_keeps_record() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    let path = data_dir.join("expenses.json");
    let engine = Engine::builder().path(&path).build().unwrap();
    engine.create(Expense::new(1.0, "a", "", "")).unwrap();
    engine.create(Expense::new(2.0, "b", "", "")).unwrap();
    let before = engine.list();

    fs::remove_dir_all(&data_dir).unwrap();
    assert!(matches!(engine.delete(1), Err(EngineError::Io(_))));

    assert_eq!(engine.list(), before);
}

#[test]
fn concurrent_creates_get_distinct_ids() {
    let (engine, _dir, path) = engine_with_file();
    let engine = Arc::new(engine);

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                (0..10)
                    .map(|_| {
                        engine
                            .create(Expense::new(1.0, format!("w{worker}"), "", ""))
                            .unwrap()
                            .id
                    })
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|h| h.join().unwrap())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, (1..=80).collect::<Vec<_>>());

    let persisted = Engine::builder().path(&path).build().unwrap();
    assert_eq!(persisted.list().len(), 80);
    assert_eq!(persisted.summary().total, 80.0);
}
