use jiff::{SignedDuration, Timestamp};
use pathfinder_core::{
    db::plan_queries::NewPlan,
    generator::generate_plan,
    models::{ExperienceLevel, Plan, PlanStatus},
    params::UpdateTask,
    Database, PlannerError,
};
use rusqlite::Connection;
use tempfile::NamedTempFile;

/// Helper function to create a temporary database for testing
fn create_test_db() -> (NamedTempFile, Database) {
    let temp_file = NamedTempFile::new().expect("Failed to create temporary file");
    let db = Database::new(temp_file.path()).expect("Failed to create test database");
    (temp_file, db)
}

fn store_plan(db: &mut Database, user_id: u64, goal: &str, start: Timestamp) -> Plan {
    let skills: Vec<String> = Vec::new();
    let generated = generate_plan(goal, 1, &skills, ExperienceLevel::Beginner);
    db.create_plan(NewPlan {
        user_id,
        resume_id: None,
        goal,
        duration_months: 1,
        generated: &generated,
        start,
    })
    .expect("Failed to create plan")
}

fn hours_later(start: Timestamp, hours: i64) -> Timestamp {
    start.checked_add(SignedDuration::from_hours(hours)).unwrap()
}

#[test]
fn test_create_plan_stores_dates() {
    let (_temp_file, mut db) = create_test_db();
    let start: Timestamp = "2025-01-01T08:00:00Z".parse().unwrap();

    let plan = store_plan(&mut db, 1, "Data Analyst", start);
    assert_eq!(plan.start_date, start);
    assert_eq!(plan.end_date, "2025-01-31T08:00:00Z".parse().unwrap());
    assert_eq!(plan.created_at, start);
    assert_eq!(plan.tasks.len(), 30);
    assert_eq!(
        plan.tasks[0].planned_date,
        "2025-01-02T08:00:00Z".parse::<Timestamp>().unwrap()
    );
    assert!(plan.tasks.iter().all(|t| !t.completed && t.hours_spent == 0.0));
}

#[test]
fn test_latest_resume_wins() {
    let (_temp_file, db) = create_test_db();

    let older = db
        .insert_resume(5, &["Go".to_string()], ExperienceLevel::Beginner)
        .unwrap();
    let newer = db
        .insert_resume(5, &["Rust".to_string()], ExperienceLevel::Advanced)
        .unwrap();
    assert!(newer.id > older.id);

    let latest = db.latest_resume(5).unwrap().unwrap();
    assert_eq!(latest.id, newer.id);
    assert_eq!(latest.skills, vec!["Rust".to_string()]);
    assert!(db.latest_resume(6).unwrap().is_none());
}

#[test]
fn test_update_task_keeps_first_completion_date() {
    let (_temp_file, mut db) = create_test_db();
    let start: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
    let plan = store_plan(&mut db, 1, "Web Developer", start);
    let task_id = plan.tasks[0].id;
    let complete = UpdateTask {
        id: task_id,
        is_completed: Some(true),
        ..Default::default()
    };

    let first_time = hours_later(start, 10);
    let first = db.update_task(&complete, first_time).unwrap();
    assert_eq!(first.task.completed_date, Some(first_time));

    let second = db.update_task(&complete, hours_later(start, 20)).unwrap();
    assert_eq!(second.task.completed_date, Some(first_time));
    assert_eq!(second.task.updated_at, hours_later(start, 20));

    let snapshot = db.get_progress(1).unwrap().unwrap();
    assert_eq!(snapshot.total_days_completed, 1);
    assert_eq!(snapshot.last_updated, hours_later(start, 20));
}

#[test]
fn test_update_missing_task() {
    let (_temp_file, mut db) = create_test_db();
    let result = db.update_task(
        &UpdateTask {
            id: 3,
            ..Default::default()
        },
        Timestamp::now(),
    );
    assert!(matches!(result, Err(PlannerError::TaskNotFound { id: 3 })));
}

#[test]
fn test_count_completed_since() {
    let (_temp_file, mut db) = create_test_db();
    let start: Timestamp = "2025-01-01T00:00:00Z".parse().unwrap();
    let plan = store_plan(&mut db, 1, "Teacher", start);

    for (task, hours) in plan.tasks.iter().take(3).zip([1, 48, 96]) {
        db.update_task(
            &UpdateTask {
                id: task.id,
                is_completed: Some(true),
                ..Default::default()
            },
            hours_later(start, hours),
        )
        .unwrap();
    }

    assert_eq!(db.count_completed_since(plan.id, start).unwrap(), 3);
    assert_eq!(
        db.count_completed_since(plan.id, hours_later(start, 24)).unwrap(),
        2
    );
    assert_eq!(
        db.count_completed_since(plan.id, hours_later(start, 200)).unwrap(),
        0
    );
}

#[test]
fn test_flag_update_available_only_moves_active_plans() {
    let (_temp_file, mut db) = create_test_db();
    let now = Timestamp::now();
    let plan = store_plan(&mut db, 1, "Cloud Engineer", now);

    assert!(db.flag_update_available(plan.id, now).unwrap());
    let stored = db.get_plan_record(plan.id).unwrap().unwrap();
    assert_eq!(stored.status, PlanStatus::UpdateAvailable);

    // Already flagged
    assert!(!db.flag_update_available(plan.id, now).unwrap());
    assert!(!db.flag_update_available(999, now).unwrap());
}

#[test]
fn test_mark_update_pending_checks_owner() {
    let (_temp_file, mut db) = create_test_db();
    let plan = store_plan(&mut db, 1, "Cloud Engineer", Timestamp::now());

    assert_eq!(db.mark_update_pending(plan.id, 2).unwrap(), None);
    assert_eq!(db.mark_update_pending(plan.id, 1).unwrap(), Some(2));
    assert_eq!(db.mark_update_pending(plan.id, 1).unwrap(), Some(3));
}

#[test]
fn test_active_plan_for_user_is_newest_active() {
    let (_temp_file, mut db) = create_test_db();
    let now = Timestamp::now();
    let older = store_plan(&mut db, 1, "Teacher", now);
    let newer = store_plan(&mut db, 1, "Professor", now);

    let active = db.active_plan_for_user(1).unwrap().unwrap();
    assert_eq!(active.id, newer.id);
    assert_eq!(active.tasks.len(), 30);

    db.flag_update_available(newer.id, now).unwrap();
    let active = db.active_plan_for_user(1).unwrap().unwrap();
    assert_eq!(active.id, older.id);
    assert!(db.active_plan_for_user(2).unwrap().is_none());
}

#[test]
fn test_migration_adds_plan_column_to_old_progress_table() {
    let temp_file = NamedTempFile::new().unwrap();
    {
        let conn = Connection::open(temp_file.path()).unwrap();
        conn.execute_batch(
            "CREATE TABLE progress (
                user_id INTEGER PRIMARY KEY,
                total_days_planned INTEGER NOT NULL DEFAULT 0,
                total_days_completed INTEGER NOT NULL DEFAULT 0,
                completion_percentage REAL NOT NULL DEFAULT 0,
                last_updated TEXT NOT NULL
            );
            INSERT INTO progress VALUES (7, 30, 3, 10.0, '2025-01-01T00:00:00Z');",
        )
        .unwrap();
    }

    let db = Database::new(temp_file.path()).expect("migration should succeed");
    let snapshot = db.get_progress(7).unwrap().unwrap();
    assert_eq!(snapshot.plan_id, None);
    assert_eq!(snapshot.total_days_completed, 3);

    // Reopening is a no-op
    drop(db);
    Database::new(temp_file.path()).expect("second open should succeed");
}
