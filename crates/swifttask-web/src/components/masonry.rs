use std::collections::{
  BTreeMap,
  BTreeSet
};
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::future::TimeoutFuture;
use swifttask_core::layout::{
  Slot,
  column_count,
  pack
};
use swifttask_shared::Task;
use tracing::debug;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlElement;
use yew::{
  Callback,
  Html,
  Properties,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_mut_ref,
  use_node_ref,
  use_reducer,
  use_state_eq
};

pub const CARD_HEIGHT_PX: f64 = 240.0;

// Stagger is cosmetic; the enter/leave timing is what the CSS
// transition duration must match.
const STAGGER_MS: u32 = 40;
const ENTER_TICK_MS: u32 = 20;
const LEAVE_MS: u32 = 300;

#[derive(Properties, PartialEq)]
pub struct MasonryGridProps {
  pub tasks:       Vec<Task>,
  pub render_card: Callback<Task, Html>
}

#[derive(Clone, Default, PartialEq)]
struct GridState {
  entered: BTreeSet<String>,
  leaving:
    BTreeMap<String, (Task, Slot)>
}

enum GridAction {
  Entered(Vec<String>),
  Depart(Vec<(String, (Task, Slot))>),
  Reap(Vec<String>)
}

impl Reducible for GridState {
  type Action = GridAction;

  fn reduce(
    self: Rc<Self>,
    action: GridAction
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    match action {
      | GridAction::Entered(ids) => {
        for id in ids {
          next.entered.insert(id);
        }
      }
      | GridAction::Depart(items) => {
        for (id, entry) in items {
          next
            .leaving
            .insert(id, entry);
        }
      }
      | GridAction::Reap(ids) => {
        for id in ids {
          next.leaving.remove(&id);
          next.entered.remove(&id);
        }
      }
    }
    Rc::new(next)
  }
}

fn card_style(
  slot: &Slot,
  delay_ms: u32,
  opacity: f64
) -> String {
  format!(
    "transform: translate({}px, \
     {}px); width: {}px; height: \
     {}px; opacity: {opacity}; \
     transition-delay: {delay_ms}ms;",
    slot.x,
    slot.y,
    slot.width,
    slot.height
  )
}

#[function_component(MasonryGrid)]
pub fn masonry_grid(
  props: &MasonryGridProps
) -> Html {
  let container_ref = use_node_ref();
  let width =
    use_state_eq(|| 0.0_f64);
  let grid =
    use_reducer(GridState::default);
  // Last task + slot seen per id; departed entries freeze here
  // until the leave transition finishes.
  let seen = use_mut_ref(
    BTreeMap::<String, (Task, Slot)>::new
  );

  {
    let width = width.clone();
    let container_ref =
      container_ref.clone();
    use_effect_with((), move |_| {
      let measure = move || {
        if let Some(element) =
          container_ref
            .cast::<HtmlElement>()
        {
          width.set(f64::from(
            element.offset_width()
          ));
        }
      };
      measure();

      let listener =
        EventListener::new(
          &gloo::utils::window(),
          "resize",
          move |_event| measure()
        );
      move || drop(listener)
    });
  }

  let ids: Vec<String> = props
    .tasks
    .iter()
    .map(|task| task.id.clone())
    .collect();

  {
    let grid = grid.clone();
    let seen = seen.clone();
    use_effect_with(
      ids,
      move |ids| {
        let current: BTreeSet<String> =
          ids.iter().cloned().collect();

        let fresh: Vec<String> = ids
          .iter()
          .filter(|id| {
            !grid
              .entered
              .contains(*id)
          })
          .cloned()
          .collect();
        if !fresh.is_empty() {
          let grid = grid.clone();
          spawn_local(async move {
            TimeoutFuture::new(
              ENTER_TICK_MS
            )
            .await;
            grid.dispatch(
              GridAction::Entered(
                fresh
              )
            );
          });
        }

        let departed: Vec<(
          String,
          (Task, Slot)
        )> = {
          let mut seen =
            seen.borrow_mut();
          let gone: Vec<String> = seen
            .keys()
            .filter(|id| {
              !current
                .contains(id.as_str())
            })
            .cloned()
            .collect();
          gone
            .into_iter()
            .filter_map(|id| {
              seen
                .remove(&id)
                .map(|entry| {
                  (id, entry)
                })
            })
            .collect()
        };

        if !departed.is_empty() {
          debug!(
            leaving = departed.len(),
            "starting leave \
             transitions"
          );
          let reap: Vec<String> =
            departed
              .iter()
              .map(|(id, _)| {
                id.clone()
              })
              .collect();
          grid.dispatch(
            GridAction::Depart(
              departed
            )
          );

          let grid = grid.clone();
          spawn_local(async move {
            TimeoutFuture::new(
              LEAVE_MS
            )
            .await;
            grid.dispatch(
              GridAction::Reap(reap)
            );
          });
        }

        || ()
      }
    );
  }

  // Full recomputation on every change to columns, items, or
  // measured width.
  let columns = column_count(*width);
  let layout = pack(
    props.tasks.len(),
    columns,
    *width,
    CARD_HEIGHT_PX
  );

  {
    let mut seen = seen.borrow_mut();
    for (task, slot) in props
      .tasks
      .iter()
      .zip(layout.slots.iter())
    {
      seen.insert(
        task.id.clone(),
        (task.clone(), *slot)
      );
    }
  }

  let container_height =
    layout.container_height();

  html! {
      <div
          ref={container_ref}
          class="masonry"
          style={format!("height: {container_height}px;")}
      >
          {
              for props.tasks.iter().zip(layout.slots.iter()).enumerate().map(|(index, (task, slot))| {
                  let opacity = if grid.entered.contains(&task.id) {
                      1.0
                  } else {
                      0.0
                  };
                  let delay = index as u32 * STAGGER_MS;
                  html! {
                      <div
                          key={task.id.clone()}
                          class="masonry-item"
                          style={card_style(slot, delay, opacity)}
                      >
                          { props.render_card.emit(task.clone()) }
                      </div>
                  }
              })
          }
          {
              for grid.leaving.iter().map(|(id, (task, slot))| {
                  html! {
                      <div
                          key={id.clone()}
                          class="masonry-item"
                          style={card_style(slot, 0, 0.0)}
                      >
                          { props.render_card.emit(task.clone()) }
                      </div>
                  }
              })
          }
      </div>
  }
}
