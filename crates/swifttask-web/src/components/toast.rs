use std::collections::BTreeSet;
use std::rc::Rc;

use gloo::timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::{
  Callback,
  Html,
  Reducible,
  UseReducerHandle,
  classes,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with,
  use_mut_ref
};

const TOAST_DISMISS_MS: u32 = 4_000;

#[derive(
  Clone, Copy, PartialEq, Eq,
)]
pub enum ToastKind {
  Success,
  Error
}

impl ToastKind {
  fn as_class(self) -> &'static str {
    match self {
      | Self::Success => "success",
      | Self::Error => "error"
    }
  }
}

#[derive(Clone, PartialEq)]
pub struct Toast {
  pub id:   u64,
  pub kind: ToastKind,
  pub text: String
}

#[derive(
  Clone, Default, PartialEq,
)]
pub struct ToastList {
  pub items: Vec<Toast>,
  next_id:   u64
}

pub enum ToastAction {
  Push(ToastKind, String),
  Dismiss(u64)
}

impl Reducible for ToastList {
  type Action = ToastAction;

  fn reduce(
    self: Rc<Self>,
    action: ToastAction
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | ToastAction::Push(
        kind,
        text
      ) => {
        let id = next.next_id;
        next.next_id =
          id.wrapping_add(1);
        next.items.push(Toast {
          id,
          kind,
          text
        });
      }
      | ToastAction::Dismiss(id) => {
        next
          .items
          .retain(|toast| {
            toast.id != id
          });
      }
    }
    Rc::new(next)
  }
}

pub type ToastBus =
  UseReducerHandle<ToastList>;

pub fn push_toast(
  bus: &ToastBus,
  kind: ToastKind,
  text: impl Into<String>
) {
  bus.dispatch(ToastAction::Push(
    kind,
    text.into()
  ));
}

#[hook]
pub fn use_toast_bus() -> ToastBus {
  use_context::<ToastBus>()
    .expect("toast context missing")
}

#[function_component(ToastHost)]
pub fn toast_host() -> Html {
  let bus = use_toast_bus();
  let scheduled =
    use_mut_ref(BTreeSet::<u64>::new);

  {
    let bus = bus.clone();
    let scheduled = scheduled.clone();
    use_effect_with(
      bus.items.clone(),
      move |items| {
        for toast in items {
          if scheduled
            .borrow_mut()
            .insert(toast.id)
          {
            let bus = bus.clone();
            let id = toast.id;
            spawn_local(async move {
              TimeoutFuture::new(
                TOAST_DISMISS_MS
              )
              .await;
              bus.dispatch(
                ToastAction::Dismiss(
                  id
                )
              );
            });
          }
        }
        || ()
      }
    );
  }

  html! {
      <div class="toast-host">
          {
              for bus.items.iter().cloned().map(|toast| {
                  let bus = bus.clone();
                  let id = toast.id;
                  let on_dismiss = Callback::from(move |_| {
                      bus.dispatch(ToastAction::Dismiss(id));
                  });
                  html! {
                      <div
                          key={toast.id.to_string()}
                          class={classes!("toast", toast.kind.as_class())}
                          onclick={on_dismiss}
                      >
                          { toast.text }
                      </div>
                  }
              })
          }
      </div>
  }
}
