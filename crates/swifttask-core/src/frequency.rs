use swifttask_shared::Task;
use tracing::trace;

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum Frequency {
  Daily,
  Weekly,
  Monthly
}

impl Frequency {
  pub fn all() -> [Self; 3] {
    [
      Self::Daily,
      Self::Weekly,
      Self::Monthly
    ]
  }

  pub fn as_key(self) -> &'static str {
    match self {
      | Self::Daily => "daily",
      | Self::Weekly => "weekly",
      | Self::Monthly => "monthly"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Daily => "Daily",
      | Self::Weekly => "Weekly",
      | Self::Monthly => "Monthly"
    }
  }

  pub fn from_key(
    key: &str
  ) -> Option<Self> {
    match key
      .to_lowercase()
      .as_str()
    {
      | "daily" => Some(Self::Daily),
      | "weekly" => Some(Self::Weekly),
      | "monthly" => Some(Self::Monthly),
      | _ => None
    }
  }

  // Stored frequencies are free-form strings; both sides are
  // lower-cased before comparing.
  pub fn matches(
    self,
    raw: &str
  ) -> bool {
    raw.to_lowercase() == self.as_key()
  }
}

pub fn partition(
  tasks: &[Task],
  bucket: Frequency
) -> Vec<Task> {
  let out: Vec<Task> = tasks
    .iter()
    .filter(|task| {
      bucket.matches(&task.frequency)
    })
    .cloned()
    .collect();

  trace!(
    bucket = bucket.as_key(),
    matched = out.len(),
    total = tasks.len(),
    "partitioned tasks"
  );
  out
}

pub fn unbucketed(
  tasks: &[Task]
) -> Vec<Task> {
  tasks
    .iter()
    .filter(|task| {
      Frequency::all()
        .iter()
        .all(|bucket| {
          !bucket
            .matches(&task.frequency)
        })
    })
    .cloned()
    .collect()
}

#[cfg(test)]
mod tests {
  use swifttask_shared::Task;

  use super::{
    Frequency,
    partition,
    unbucketed
  };

  fn task(
    id: &str,
    frequency: &str
  ) -> Task {
    Task {
      id:          id.to_string(),
      title:       format!("task {id}"),
      description: "d".to_string(),
      frequency:   frequency
        .to_string(),
      due_date:    "2026-08-07"
        .to_string(),
      due_time:    "10:00".to_string()
    }
  }

  #[test]
  fn partition_is_case_insensitive_and_order_preserving()
   {
    let tasks = vec![
      task("1", "Daily"),
      task("2", "daily"),
      task("3", "Weekly"),
    ];

    let daily = partition(
      &tasks,
      Frequency::Daily
    );
    let ids: Vec<&str> = daily
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, vec!["1", "2"]);

    let weekly = partition(
      &tasks,
      Frequency::Weekly
    );
    assert_eq!(weekly.len(), 1);
    assert_eq!(weekly[0].id, "3");
  }

  #[test]
  fn partition_excludes_unrecognized_values()
  {
    let tasks = vec![
      task("1", "Daily"),
      task("2", "fortnightly"),
      task("3", ""),
    ];

    for bucket in Frequency::all() {
      let matched =
        partition(&tasks, bucket);
      assert!(
        matched
          .iter()
          .all(|task| task.id == "1")
      );
    }

    let stray = unbucketed(&tasks);
    let ids: Vec<&str> = stray
      .iter()
      .map(|task| task.id.as_str())
      .collect();
    assert_eq!(ids, vec!["2", "3"]);
  }

  #[test]
  fn from_key_accepts_any_casing() {
    assert_eq!(
      Frequency::from_key("Daily"),
      Some(Frequency::Daily)
    );
    assert_eq!(
      Frequency::from_key("MONTHLY"),
      Some(Frequency::Monthly)
    );
    assert_eq!(
      Frequency::from_key("yearly"),
      None
    );
  }
}
