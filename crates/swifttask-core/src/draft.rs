use anyhow::bail;
use chrono::{
  Local,
  NaiveDate,
  NaiveTime
};
use swifttask_shared::TaskDraft;

use crate::frequency::Frequency;

// Gate run client-side before any submit reaches the store.
pub fn validate(
  draft: &TaskDraft
) -> anyhow::Result<()> {
  if draft.title.trim().is_empty() {
    bail!("Task title is required.");
  }
  if draft
    .description
    .trim()
    .is_empty()
  {
    bail!(
      "Task description is required."
    );
  }
  if Frequency::from_key(
    &draft.frequency
  )
  .is_none()
  {
    bail!(
      "Unknown frequency: {}",
      draft.frequency
    );
  }
  if NaiveDate::parse_from_str(
    &draft.due_date,
    "%Y-%m-%d"
  )
  .is_err()
  {
    bail!(
      "Due date must be YYYY-MM-DD."
    );
  }
  if NaiveTime::parse_from_str(
    &draft.due_time,
    "%H:%M"
  )
  .is_err()
  {
    bail!("Due time must be HH:MM.");
  }
  Ok(())
}

pub fn today() -> String {
  Local::now()
    .format("%Y-%m-%d")
    .to_string()
}

pub fn current_time() -> String {
  Local::now()
    .format("%H:%M")
    .to_string()
}

// Fresh draft for the New Task dialog: Daily, due today at
// the current wall-clock time.
pub fn new_draft() -> TaskDraft {
  TaskDraft {
    title:       String::new(),
    description: String::new(),
    frequency:   Frequency::Daily
      .label()
      .to_string(),
    due_date:    today(),
    due_time:    current_time()
  }
}

#[cfg(test)]
mod tests {
  use swifttask_shared::TaskDraft;

  use super::{
    new_draft,
    validate
  };

  fn draft() -> TaskDraft {
    TaskDraft {
      title:       "Water plants"
        .to_string(),
      description: "Balcony first"
        .to_string(),
      frequency:   "Weekly".to_string(),
      due_date:    "2026-08-07"
        .to_string(),
      due_time:    "08:30".to_string()
    }
  }

  #[test]
  fn accepts_complete_draft() {
    validate(&draft())
      .expect("draft is valid");
  }

  #[test]
  fn rejects_blank_required_fields() {
    let mut blank_title = draft();
    blank_title.title = "  ".to_string();
    assert!(
      validate(&blank_title).is_err()
    );

    let mut blank_desc = draft();
    blank_desc.description =
      String::new();
    assert!(
      validate(&blank_desc).is_err()
    );
  }

  #[test]
  fn rejects_malformed_schedule() {
    let mut bad_frequency = draft();
    bad_frequency.frequency =
      "hourly".to_string();
    assert!(
      validate(&bad_frequency).is_err()
    );

    let mut bad_date = draft();
    bad_date.due_date =
      "07-08-2026".to_string();
    assert!(
      validate(&bad_date).is_err()
    );

    let mut bad_time = draft();
    bad_time.due_time =
      "8.30am".to_string();
    assert!(
      validate(&bad_time).is_err()
    );
  }

  #[test]
  fn new_draft_is_submittable_after_title_and_description()
   {
    let mut fresh = new_draft();
    assert!(validate(&fresh).is_err());

    fresh.title = "t".to_string();
    fresh.description =
      "d".to_string();
    validate(&fresh).expect(
      "defaults form a valid draft"
    );
  }
}
