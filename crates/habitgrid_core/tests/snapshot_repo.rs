use chrono::NaiveDate;
use habitgrid_core::db::open_db_in_memory;
use habitgrid_core::{
    Habit, SnapshotRepository, SqliteSnapshotRepository, HABITS_SNAPSHOT_KEY,
};
use rusqlite::Connection;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn load_returns_empty_when_no_snapshot_exists() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    assert_eq!(repo.load_habits().unwrap(), Vec::new());
}

#[test]
fn save_then_load_reproduces_an_equal_collection() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let mut reading = Habit::new("reading");
    reading.toggle(date(2026, 3, 14));
    reading.toggle(date(2026, 3, 13));
    let running = Habit::new("running");

    let habits = vec![reading, running];
    repo.save_habits(&habits).unwrap();

    let loaded = repo.load_habits().unwrap();
    assert_eq!(loaded, habits);
}

#[test]
fn save_overwrites_the_single_snapshot_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_habits(&[Habit::new("one")]).unwrap();
    repo.save_habits(&[Habit::new("two"), Habit::new("three")])
        .unwrap();

    assert_eq!(snapshot_row_count(&conn), 1);
    let loaded = repo.load_habits().unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].name, "two");
}

#[test]
fn load_recovers_from_unparseable_snapshot_value() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (key, value) VALUES (?1, ?2);",
        rusqlite::params![HABITS_SNAPSHOT_KEY, "\"a string, not an array\""],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load_habits().unwrap().is_empty());
}

#[test]
fn load_recovers_when_record_shape_is_wrong() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO snapshots (key, value) VALUES (?1, ?2);",
        rusqlite::params![HABITS_SNAPSHOT_KEY, r#"[{"title": "wrong field"}]"#],
    )
    .unwrap();

    let repo = SqliteSnapshotRepository::new(&conn);
    assert!(repo.load_habits().unwrap().is_empty());
}

#[test]
fn snapshot_value_is_the_documented_wire_shape() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let mut habit = Habit::new("yoga");
    habit.toggle(date(2026, 3, 14));
    repo.save_habits(&[habit.clone()]).unwrap();

    let raw: String = conn
        .query_row(
            "SELECT value FROM snapshots WHERE key = ?1;",
            [HABITS_SNAPSHOT_KEY],
            |row| row.get(0),
        )
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(value[0]["id"], habit.id.to_string());
    assert_eq!(value[0]["name"], "yoga");
    assert_eq!(value[0]["completedDates"], serde_json::json!(["2026-03-14"]));
}

fn snapshot_row_count(conn: &Connection) -> i64 {
    conn.query_row("SELECT COUNT(*) FROM snapshots;", [], |row| row.get(0))
        .unwrap()
}
