use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct Task {
  #[serde(
    rename = "_id",
    alias = "id"
  )]
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(default)]
  pub frequency:   String,
  #[serde(default)]
  pub due_date:    String,
  #[serde(default)]
  pub due_time:    String
}

#[derive(
  Debug,
  Clone,
  Default,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct TaskDraft {
  pub title:       String,
  pub description: String,
  pub frequency:   String,
  pub due_date:    String,
  pub due_time:    String
}

impl From<&Task> for TaskDraft {
  fn from(task: &Task) -> Self {
    Self {
      title:       task.title.clone(),
      description: task
        .description
        .clone(),
      frequency:   task
        .frequency
        .clone(),
      due_date:    task.due_date.clone(),
      due_time:    task.due_time.clone()
    }
  }
}

#[derive(
  Debug, Clone, Deserialize, PartialEq,
)]
pub struct TaskListResponse {
  #[serde(default)]
  pub tasks: Vec<Task>
}

// Share payloads carry the display fields only, never the id.
#[derive(
  Debug, Clone, Serialize, PartialEq,
)]
pub struct ShareRequest {
  pub to:   String,
  pub task: TaskDraft
}

#[derive(
  Debug, Clone, Serialize, PartialEq,
)]
pub struct Credentials {
  pub email:    String,
  pub password: String
}

#[derive(
  Debug, Clone, Serialize, PartialEq,
)]
pub struct RegisterForm {
  pub username: String,
  pub email:    String,
  pub password: String
}

#[derive(
  Debug, Clone, Serialize, PartialEq,
)]
pub struct GoogleExchange {
  pub access_token: String
}

#[derive(
  Debug,
  Clone,
  Default,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct SessionUser {
  #[serde(default)]
  pub id:       String,
  #[serde(default)]
  pub username: String
}

#[derive(
  Debug,
  Clone,
  Default,
  Deserialize,
  PartialEq,
)]
pub struct LoginResponse {
  #[serde(default)]
  pub message: String,
  #[serde(default)]
  pub token:   String,
  #[serde(default)]
  pub user:    SessionUser
}

#[derive(
  Debug,
  Clone,
  Default,
  Deserialize,
  PartialEq,
)]
pub struct ApiMessage {
  #[serde(default)]
  pub message: String
}

#[cfg(test)]
mod tests {
  use super::{
    ShareRequest,
    Task,
    TaskDraft,
    TaskListResponse
  };

  #[test]
  fn decodes_store_task_list() {
    let body = r#"{
      "tasks": [
        {
          "_id": "665f1a",
          "user_id": "42",
          "title": "Water plants",
          "description": "Balcony first",
          "frequency": "Daily",
          "due_date": "2026-08-07",
          "due_time": "08:30"
        }
      ]
    }"#;

    let decoded: TaskListResponse =
      serde_json::from_str(body)
        .expect("task list decodes");
    assert_eq!(decoded.tasks.len(), 1);
    assert_eq!(
      decoded.tasks[0].id,
      "665f1a"
    );
    assert_eq!(
      decoded.tasks[0].frequency,
      "Daily"
    );
  }

  #[test]
  fn accepts_earlier_id_field_name() {
    let body = r#"{
      "id": "7",
      "title": "Pay rent",
      "description": "First of month",
      "frequency": "Monthly",
      "due_date": "2026-09-01",
      "due_time": "09:00"
    }"#;

    let decoded: Task =
      serde_json::from_str(body)
        .expect("task decodes");
    assert_eq!(decoded.id, "7");
  }

  #[test]
  fn share_payload_has_no_id() {
    let task = Task {
      id:          "abc123".to_string(),
      title:       "Standup".to_string(),
      description: "Team sync"
        .to_string(),
      frequency:   "Daily".to_string(),
      due_date:    "2026-08-07"
        .to_string(),
      due_time:    "09:15".to_string()
    };

    let request = ShareRequest {
      to:   "friend@example.com"
        .to_string(),
      task: TaskDraft::from(&task)
    };

    let encoded =
      serde_json::to_value(&request)
        .expect("share encodes");
    assert_eq!(
      encoded["to"],
      "friend@example.com"
    );
    assert_eq!(
      encoded["task"]["title"],
      "Standup"
    );
    assert!(
      encoded["task"]
        .get("_id")
        .is_none()
    );
    assert!(
      encoded["task"].get("id").is_none()
    );
  }
}
