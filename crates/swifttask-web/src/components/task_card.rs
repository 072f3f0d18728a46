use swifttask_shared::Task;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCardProps {
  pub task:          Task,
  pub deleting:      bool,
  pub share_enabled: bool,
  pub on_delete:     Callback<String>,
  pub on_edit:       Callback<Task>,
  pub on_share:      Callback<Task>
}

#[function_component(TaskCard)]
pub fn task_card(
  props: &TaskCardProps
) -> Html {
  let on_delete_click = {
    let on_delete =
      props.on_delete.clone();
    let task_id =
      props.task.id.clone();
    Callback::from(move |_| {
      on_delete
        .emit(task_id.clone());
    })
  };

  let on_edit_click = {
    let on_edit =
      props.on_edit.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_edit.emit(task.clone());
    })
  };

  let on_share_click = {
    let on_share =
      props.on_share.clone();
    let task = props.task.clone();
    Callback::from(move |_| {
      on_share.emit(task.clone());
    })
  };

  html! {
      <div class="task-card">
          <div class="task-content">
              <h3 class="task-title">{ &props.task.title }</h3>
              <p class="task-desc">{ &props.task.description }</p>
          </div>

          <div class="task-footer">
              <div class="task-datetime">
                  <span>{ &props.task.due_date }</span>
                  <span>{ &props.task.due_time }</span>
              </div>

              <div class="task-actions">
                  <button
                      class="delete-btn"
                      onclick={on_delete_click}
                      disabled={props.deleting}
                  >
                      { if props.deleting { "Deleting..." } else { "Delete" } }
                  </button>

                  <button
                      class="edit-btn"
                      onclick={on_edit_click}
                  >
                      { "Edit" }
                  </button>

                  <button
                      class="share-btn"
                      onclick={on_share_click}
                      disabled={!props.share_enabled}
                  >
                      { "Share" }
                  </button>
              </div>
          </div>
      </div>
  }
}
