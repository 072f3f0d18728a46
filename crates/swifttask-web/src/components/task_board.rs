use swifttask_core::frequency::{
  Frequency,
  partition
};
use swifttask_shared::Task;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html,
  use_state
};

use crate::api::Api;
use crate::components::{
  MasonryGrid,
  ShareModal,
  TaskCard
};
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct TaskBoardProps {
  pub bucket:     Frequency,
  pub tasks:      Vec<Task>,
  // Optimistic removal from the owning collection; additions
  // only ever arrive through a refetch.
  pub on_remove:  Callback<String>,
  pub on_mutated: Callback<()>,
  pub on_edit:    Callback<Task>
}

#[function_component(TaskBoard)]
pub fn task_board(
  props: &TaskBoardProps
) -> Html {
  let session = use_session();
  let deleting =
    use_state(|| None::<String>);
  let share_target =
    use_state(|| None::<Task>);

  let bucket_tasks = partition(
    &props.tasks,
    props.bucket
  );
  let share_enabled =
    props.bucket == Frequency::Daily;

  let on_delete = {
    let deleting = deleting.clone();
    let session = session.clone();
    let on_remove =
      props.on_remove.clone();
    let on_mutated =
      props.on_mutated.clone();
    Callback::from(
      move |task_id: String| {
        // Flag set before the call starts so the control
        // disables immediately; cleared in the final step of
        // both outcomes.
        deleting
          .set(Some(task_id.clone()));

        let deleting =
          deleting.clone();
        let on_remove =
          on_remove.clone();
        let on_mutated =
          on_mutated.clone();
        let token = session.token();

        spawn_local(async move {
          let api =
            Api::bootstrap(token);
          match api
            .delete_task(&task_id)
            .await
          {
            | Ok(_) => {
              tracing::info!(
                task_id = %task_id,
                "task deleted"
              );
              on_remove.emit(
                task_id.clone()
              );
              on_mutated.emit(());
            }
            | Err(error) => {
              tracing::error!(
                %error,
                task_id = %task_id,
                "failed deleting task"
              );
            }
          }
          deleting.set(None);
        });
      }
    )
  };

  let on_share = {
    let share_target =
      share_target.clone();
    Callback::from(
      move |task: Task| {
        share_target.set(Some(task));
      }
    )
  };

  let on_share_close = {
    let share_target =
      share_target.clone();
    Callback::from(move |_| {
      share_target.set(None);
    })
  };

  let render_card = {
    let deleting = deleting.clone();
    let on_delete = on_delete.clone();
    let on_edit =
      props.on_edit.clone();
    let on_share = on_share.clone();
    Callback::from(
      move |task: Task| -> Html {
        let is_deleting = (*deleting)
          .as_deref()
          == Some(task.id.as_str());
        html! {
            <TaskCard
                task={task}
                deleting={is_deleting}
                share_enabled={share_enabled}
                on_delete={on_delete.clone()}
                on_edit={on_edit.clone()}
                on_share={on_share.clone()}
            />
        }
      }
    )
  };

  html! {
      <div class={classes!("task-board", format!("{}-tasks", props.bucket.as_key()))}>
          <div class="task-header">
              <p>{ format!("{} Tasks", props.bucket.label()) }</p>
          </div>
          {
              if bucket_tasks.is_empty() {
                  html! {
                      <p class="no-tasks">
                          { format!("No {} tasks yet.", props.bucket.as_key()) }
                      </p>
                  }
              } else {
                  html! {
                      <MasonryGrid
                          tasks={bucket_tasks}
                          render_card={render_card}
                      />
                  }
              }
          }
          {
              if share_enabled && share_target.is_some() {
                  html! {
                      <ShareModal
                          task={(*share_target).clone()}
                          on_close={on_share_close}
                      />
                  }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
