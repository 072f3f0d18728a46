use swifttask_shared::Task;
use tracing::trace;

// The dashboard owns the canonical collection; views may only
// remove entries. Additions arrive via full refetch.
pub fn remove_task(
  tasks: &[Task],
  task_id: &str
) -> Vec<Task> {
  let out: Vec<Task> = tasks
    .iter()
    .filter(|task| task.id != task_id)
    .cloned()
    .collect();

  trace!(
    task_id,
    removed = tasks.len() - out.len(),
    "removed task locally"
  );
  out
}

#[cfg(test)]
mod tests {
  use swifttask_shared::Task;

  use super::remove_task;

  fn task(id: &str) -> Task {
    Task {
      id:          id.to_string(),
      title:       format!("task {id}"),
      description: "d".to_string(),
      frequency:   "Daily".to_string(),
      due_date:    "2026-08-07"
        .to_string(),
      due_time:    "10:00".to_string()
    }
  }

  #[test]
  fn removes_exactly_the_matching_entry()
  {
    let tasks = vec![
      task("a"),
      task("b"),
      task("c"),
    ];

    let after =
      remove_task(&tasks, "b");
    let ids: Vec<&str> = after
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, vec!["a", "c"]);
  }

  #[test]
  fn unknown_id_leaves_collection_unchanged()
  {
    let tasks =
      vec![task("a"), task("b")];
    let after =
      remove_task(&tasks, "zzz");
    assert_eq!(after, tasks);
  }
}
