use gloo::storage::{
  LocalStorage,
  Storage
};
use swifttask_core::collection::remove_task;
use swifttask_core::draft::validate;
use swifttask_core::frequency::{
  Frequency,
  unbucketed
};
use swifttask_shared::Task;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_state
};

use crate::api::Api;
use crate::components::{
  Header,
  ModalMode,
  ModalState,
  Spinner,
  TaskBoard,
  TaskModal,
  ToastKind,
  push_toast,
  use_toast_bus
};
use crate::session::use_session;

const BUCKET_STORAGE_KEY: &str =
  "swifttask.dashboard.bucket";

fn load_bucket() -> Frequency {
  LocalStorage::get::<String>(
    BUCKET_STORAGE_KEY
  )
  .ok()
  .and_then(|key| {
    Frequency::from_key(&key)
  })
  .unwrap_or(Frequency::Daily)
}

fn save_bucket(bucket: Frequency) {
  let _ = LocalStorage::set(
    BUCKET_STORAGE_KEY,
    bucket.as_key()
  );
}

#[function_component(Home)]
pub fn home() -> Html {
  let session = use_session();
  let toasts = use_toast_bus();

  let bucket = use_state(load_bucket);
  let loading = use_state(|| true);
  let tasks =
    use_state(Vec::<Task>::new);
  let refresh_tick =
    use_state(|| 0_u64);
  let modal_state =
    use_state(|| None::<ModalState>);
  let modal_busy = use_state(|| false);

  {
    let bucket = bucket.clone();
    use_effect_with(
      *bucket,
      move |bucket| {
        save_bucket(*bucket);
        || ()
      }
    );
  }

  // Full refetch on mount and after every mutation; the result
  // replaces local state wholesale.
  {
    let tasks = tasks.clone();
    let loading = loading.clone();
    let token = session.token();

    use_effect_with(
      (token, *refresh_tick),
      move |(token, tick)| {
        match token.clone() {
          | Some(token) => {
            let tasks = tasks.clone();
            let loading =
              loading.clone();
            let tick = *tick;

            spawn_local(async move {
              tracing::info!(
                tick,
                "refreshing task list"
              );
              let api =
                Api::bootstrap(Some(
                  token
                ));
              match api
                .list_tasks()
                .await
              {
                | Ok(list) => {
                  tasks.set(list)
                }
                | Err(error) => {
                  tracing::error!(
                    %error,
                    "task list fetch \
                     failed"
                  )
                }
              }
              loading.set(false);
            });
          }
          | None => {
            tracing::debug!(
              "no session; skipping \
               task fetch"
            );
            loading.set(false);
          }
        }
        || ()
      }
    );
  }

  let stray_count =
    unbucketed(&tasks).len();
  {
    use_effect_with(
      stray_count,
      move |count| {
        if *count > 0 {
          tracing::warn!(
            count,
            "tasks with \
             unrecognized frequency \
             are hidden from every \
             bucket view"
          );
        }
        || ()
      }
    );
  }

  let on_remove = {
    let tasks = tasks.clone();
    Callback::from(
      move |task_id: String| {
        tasks.set(remove_task(
          &tasks, &task_id
        ));
      }
    )
  };

  let on_mutated = {
    let refresh_tick =
      refresh_tick.clone();
    Callback::from(move |_| {
      refresh_tick.set(
        (*refresh_tick)
          .saturating_add(1)
      );
    })
  };

  let on_edit = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(
      move |task: Task| {
        modal_busy.set(false);
        modal_state.set(Some(
          ModalState::edit(&task)
        ));
      }
    )
  };

  let on_add_click = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    Callback::from(move |_| {
      modal_busy.set(false);
      modal_state.set(Some(
        ModalState::add()
      ));
    })
  };

  let on_modal_close = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |_| {
      modal_state.set(None);
    })
  };

  let on_modal_submit = {
    let modal_state =
      modal_state.clone();
    let modal_busy =
      modal_busy.clone();
    let refresh_tick =
      refresh_tick.clone();
    let session = session.clone();
    let toasts = toasts.clone();
    Callback::from(
      move |state: ModalState| {
        let Some(token) =
          session.token()
        else {
          let mut current =
            state.clone();
          current.error = Some(
            "Login required."
              .to_string()
          );
          modal_state
            .set(Some(current));
          return;
        };

        if let Err(error) =
          validate(&state.draft)
        {
          let mut current =
            state.clone();
          current.error = Some(
            error.to_string()
          );
          modal_state
            .set(Some(current));
          return;
        }

        modal_busy.set(true);

        let modal_state =
          modal_state.clone();
        let modal_busy =
          modal_busy.clone();
        let refresh_tick =
          refresh_tick.clone();
        let toasts = toasts.clone();

        spawn_local(async move {
          let api = Api::bootstrap(
            Some(token)
          );
          let outcome = match &state
            .mode
          {
            | ModalMode::Add => api
              .create_task(
                &state.draft
              )
              .await
              .map(|_| "Task created"),
            | ModalMode::Edit(id) => {
              api
                .update_task(
                  id,
                  &state.draft
                )
                .await
                .map(|_| {
                  "Task updated"
                })
            }
          };

          match outcome {
            | Ok(message) => {
              push_toast(
                &toasts,
                ToastKind::Success,
                message
              );
              modal_state.set(None);
              refresh_tick.set(
                (*refresh_tick)
                  .saturating_add(1)
              );
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "task submit failed"
              );
              let mut current =
                state.clone();
              current.error = Some(
                error.to_string()
              );
              modal_state
                .set(Some(current));
            }
          }
          modal_busy.set(false);
        });
      }
    )
  };

  let bucket_button =
    |candidate: Frequency| {
      let bucket = bucket.clone();
      let active =
        *bucket == candidate;
      let onclick = Callback::from(
        move |_| {
          bucket.set(candidate);
        }
      );
      html! {
          <button
              key={candidate.as_key()}
              class={classes!(active.then_some("active"))}
              {onclick}
          >
              { candidate.label() }
          </button>
      }
    };

  let body = if *loading {
    html! { <Spinner /> }
  } else if session
    .current()
    .is_none()
  {
    html! {
        <h1 class="logged-out">{ "Login first to see task" }</h1>
    }
  } else {
    html! {
        <>
            {
                if stray_count > 0 {
                    html! {
                        <div class="stray-notice">
                            {
                                format!(
                                    "{stray_count} task(s) have an unrecognized \
                                     frequency and are not shown in any view."
                                )
                            }
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <TaskBoard
                bucket={*bucket}
                tasks={(*tasks).clone()}
                on_remove={on_remove}
                on_mutated={on_mutated}
                on_edit={on_edit}
            />
        </>
    }
  };

  html! {
      <>
          <Header />

          <div class="task-dashboard">
              <div class="new-task">
                  <button onclick={on_add_click}>
                      <span class="plus">{ "+" }</span>
                      <span>{ "New Task" }</span>
                  </button>
              </div>

              <div class="tasks-period">
                  { for Frequency::all().into_iter().map(bucket_button) }
              </div>
          </div>

          <TaskModal
              modal_state={modal_state.clone()}
              modal_busy={*modal_busy}
              on_modal_submit={on_modal_submit}
              on_modal_close={on_modal_close}
          />

          { body }
      </>
  }
}
