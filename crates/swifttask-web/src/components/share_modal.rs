use gloo::dialogs::alert;
use swifttask_shared::{
  ShareRequest,
  Task,
  TaskDraft
};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

use crate::api::Api;
use crate::session::use_session;

#[derive(Properties, PartialEq)]
pub struct ShareModalProps {
  // Kept optional so the submit gate can check that a task is
  // actually selected, not just that the modal is open.
  pub task:     Option<Task>,
  pub on_close: Callback<()>
}

#[function_component(ShareModal)]
pub fn share_modal(
  props: &ShareModalProps
) -> Html {
  let session = use_session();
  let recipient =
    use_state(String::new);
  let busy = use_state(|| false);
  let error =
    use_state(|| None::<String>);

  let on_recipient_input = {
    let recipient = recipient.clone();
    let error = error.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        recipient.set(input.value());
        error.set(None);
      }
    )
  };

  let on_cancel_click = {
    let on_close =
      props.on_close.clone();
    Callback::from(move |_| {
      on_close.emit(());
    })
  };

  let on_send_click = {
    let task = props.task.clone();
    let recipient = recipient.clone();
    let busy = busy.clone();
    let error = error.clone();
    let session = session.clone();
    let on_close =
      props.on_close.clone();
    Callback::from(move |_| {
      let Some(task) = task.clone()
      else {
        error.set(Some(
          "Select a task to share."
            .to_string()
        ));
        return;
      };

      let to =
        (*recipient).trim().to_string();
      if to.is_empty() {
        error.set(Some(
          "Recipient email is \
           required."
            .to_string()
        ));
        return;
      }

      busy.set(true);
      let busy = busy.clone();
      let error = error.clone();
      let on_close = on_close.clone();
      let token = session.token();

      spawn_local(async move {
        let api =
          Api::bootstrap(token);
        let request = ShareRequest {
          to,
          task: TaskDraft::from(
            &task
          )
        };

        match api
          .share_task(&request)
          .await
        {
          | Ok(body) => {
            let text = if body
              .message
              .is_empty()
            {
              "Task shared."
                .to_string()
            } else {
              body.message
            };
            alert(&text);
            on_close.emit(());
          }
          | Err(share_error) => {
            tracing::error!(
              error = %share_error,
              "share_task failed"
            );
            alert(&format!(
              "Failed to share \
               task: {share_error}"
            ));
          }
        }
        busy.set(false);
      });
    })
  };

  let task_title = props
    .task
    .as_ref()
    .map(|task| task.title.clone())
    .unwrap_or_default();

  html! {
      <div class="modal-backdrop">
          <div class="modal share-modal">
              <div class="header">{ "Share Task" }</div>
              <div class="content">
                  {
                      if let Some(message) = (*error).clone() {
                          html! { <div class="form-error">{ message }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <p class="share-subject">{ format!("Sharing: {task_title}") }</p>
                  <div class="field">
                      <label>{ "Recipient email" }</label>
                      <input
                          type="email"
                          value={(*recipient).clone()}
                          placeholder="friend@example.com"
                          oninput={on_recipient_input}
                      />
                  </div>
                  <div class="footer">
                      <button
                          type="button"
                          class="btn"
                          onclick={on_cancel_click}
                      >
                          { "Cancel" }
                      </button>
                      <button
                          type="button"
                          class="btn"
                          onclick={on_send_click}
                          disabled={*busy}
                      >
                          { if *busy { "Sending..." } else { "Send" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
