use swifttask_core::collection::remove_task;
use swifttask_core::frequency::{Frequency, partition, unbucketed};
use swifttask_core::layout::{column_count, pack};
use swifttask_shared::TaskListResponse;

const STORE_BODY: &str = r#"{
  "tasks": [
    { "_id": "a1", "title": "Stretch", "description": "Five minutes", "frequency": "Daily", "due_date": "2026-08-07", "due_time": "07:00" },
    { "_id": "a2", "title": "Journal", "description": "One page", "frequency": "daily", "due_date": "2026-08-07", "due_time": "21:30" },
    { "_id": "a3", "title": "Groceries", "description": "Market run", "frequency": "Weekly", "due_date": "2026-08-09", "due_time": "11:00" },
    { "_id": "a4", "title": "Budget", "description": "Close the month", "frequency": "Monthly", "due_date": "2026-08-31", "due_time": "18:00" },
    { "_id": "a5", "title": "Mystery", "description": "Bad import", "frequency": "someday", "due_date": "2026-08-10", "due_time": "12:00" },
    { "_id": "a6", "title": "Inbox zero", "description": "Archive everything", "frequency": "DAILY", "due_date": "2026-08-07", "due_time": "17:00" }
  ]
}"#;

#[test]
fn fetch_partition_layout_and_delete_pass() {
    let decoded: TaskListResponse =
        serde_json::from_str(STORE_BODY).expect("store body decodes");
    let tasks = decoded.tasks;
    assert_eq!(tasks.len(), 6);

    let daily = partition(&tasks, Frequency::Daily);
    let ids: Vec<&str> = daily.iter().map(|task| task.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a6"]);

    let stray = unbucketed(&tasks);
    assert_eq!(stray.len(), 1);
    assert_eq!(stray[0].id, "a5");

    // A 1280px dashboard resolves to four columns; three daily
    // cards land on the first row.
    let columns = column_count(1280.0);
    assert_eq!(columns, 4);

    let layout = pack(daily.len(), columns, 1280.0, 240.0);
    assert_eq!(layout.slots.len(), 3);
    assert!(layout.slots.iter().all(|slot| slot.y == 0.0));
    assert_eq!(layout.container_height(), 240.0);

    // Optimistic delete removes one entry; the next layout pass
    // shrinks accordingly.
    let after = remove_task(&tasks, "a2");
    assert_eq!(after.len(), 5);

    let daily_after = partition(&after, Frequency::Daily);
    assert_eq!(daily_after.len(), 2);

    let narrow = pack(daily_after.len(), column_count(480.0), 480.0, 240.0);
    assert_eq!(narrow.heights, vec![480.0]);
}
