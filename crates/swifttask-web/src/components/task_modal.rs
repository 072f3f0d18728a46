use swifttask_core::draft::new_draft;
use swifttask_core::frequency::Frequency;
use swifttask_shared::{
  Task,
  TaskDraft
};
use web_sys::{
  Event,
  HtmlInputElement,
  HtmlSelectElement,
  HtmlTextAreaElement
};
use yew::{
  Callback,
  Html,
  InputEvent,
  Properties,
  TargetCast,
  UseStateHandle,
  function_component,
  html
};

#[derive(Clone, PartialEq)]
pub enum ModalMode {
  Add,
  Edit(String)
}

#[derive(Clone, PartialEq)]
pub struct ModalState {
  pub mode:  ModalMode,
  pub draft: TaskDraft,
  pub error: Option<String>
}

impl ModalState {
  pub fn add() -> Self {
    Self {
      mode:  ModalMode::Add,
      draft: new_draft(),
      error: None
    }
  }

  pub fn edit(task: &Task) -> Self {
    Self {
      mode:  ModalMode::Edit(
        task.id.clone()
      ),
      draft: TaskDraft::from(task),
      error: None
    }
  }
}

#[derive(Properties, PartialEq)]
pub struct TaskModalProps {
  pub modal_state:
    UseStateHandle<Option<ModalState>>,
  pub modal_busy:      bool,
  pub on_modal_submit:
    Callback<ModalState>,
  pub on_modal_close:  Callback<()>
}

#[function_component(TaskModal)]
pub fn task_modal(
  props: &TaskModalProps
) -> Html {
  let modal_state =
    props.modal_state.clone();
  let is_busy = props.modal_busy;
  let on_modal_submit =
    props.on_modal_submit.clone();
  let on_modal_close =
    props.on_modal_close.clone();

  let Some(state) =
    (*modal_state).clone()
  else {
    return html! {};
  };

  let on_save_click = {
    let on_modal_submit =
      on_modal_submit.clone();
    let submit_state = state.clone();
    Callback::from(move |_| {
      on_modal_submit
        .emit(submit_state.clone());
    })
  };

  let on_cancel_click = {
    let on_modal_close =
      on_modal_close.clone();
    Callback::from(move |_| {
      on_modal_close.emit(());
    })
  };

  let on_title_input = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*modal_state).clone()
        {
          current.draft.title =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_description_input = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |e: InputEvent| {
        let area: HtmlTextAreaElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*modal_state).clone()
        {
          current.draft.description =
            area.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_frequency_change = {
    let modal_state =
      modal_state.clone();
    Callback::from(move |e: Event| {
      let select: HtmlSelectElement =
        e.target_unchecked_into();
      if let Some(mut current) =
        (*modal_state).clone()
      {
        current.draft.frequency =
          select.value();
        current.error = None;
        modal_state.set(Some(current));
      }
    })
  };

  let on_date_input = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*modal_state).clone()
        {
          current.draft.due_date =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  let on_time_input = {
    let modal_state =
      modal_state.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        if let Some(mut current) =
          (*modal_state).clone()
        {
          current.draft.due_time =
            input.value();
          current.error = None;
          modal_state
            .set(Some(current));
        }
      }
    )
  };

  html! {
      <div class="modal-backdrop">
          <div class="modal">
              <div class="header">
                  {
                      match state.mode {
                          ModalMode::Add => "New Task",
                          ModalMode::Edit(_) => "Edit Task",
                      }
                  }
              </div>
              <div class="content">
                  {
                      if let Some(message) = state.error.clone() {
                          html! { <div class="form-error">{ message }</div> }
                      } else {
                          html! {}
                      }
                  }
                  <div class="field">
                      <input
                          class="input-field"
                          type="text"
                          placeholder="Enter task title"
                          value={state.draft.title.clone()}
                          oninput={on_title_input}
                      />
                  </div>
                  <div class="field">
                      <textarea
                          class="textbox"
                          placeholder="Task Description"
                          value={state.draft.description.clone()}
                          oninput={on_description_input}
                      />
                  </div>
                  <div class="field">
                      <select
                          class="select-box"
                          value={state.draft.frequency.clone()}
                          onchange={on_frequency_change}
                      >
                          {
                              for Frequency::all().iter().map(|bucket| html! {
                                  <option
                                      value={bucket.label()}
                                      selected={bucket.matches(&state.draft.frequency)}
                                  >
                                      { bucket.label() }
                                  </option>
                              })
                          }
                      </select>
                  </div>
                  <div class="field">
                      <input
                          type="date"
                          value={state.draft.due_date.clone()}
                          oninput={on_date_input}
                      />
                  </div>
                  <div class="field">
                      <input
                          type="time"
                          value={state.draft.due_time.clone()}
                          oninput={on_time_input}
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
                          class="btn submit-btn"
                          onclick={on_save_click}
                          disabled={is_busy}
                      >
                          { if is_busy { "Saving..." } else { "Submit" } }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
