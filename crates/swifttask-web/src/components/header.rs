use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::Node;
use yew::{
  Callback,
  Html,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};
use yew_router::prelude::{
  Link,
  use_navigator
};

use crate::app::Route;
use crate::session::use_session;

#[function_component(Header)]
pub fn header() -> Html {
  let session = use_session();
  let navigator = use_navigator();
  let dropdown_open =
    use_state(|| false);
  let dropdown_ref = use_node_ref();

  // Any press outside the dropdown closes it.
  {
    let dropdown_open =
      dropdown_open.clone();
    let dropdown_ref =
      dropdown_ref.clone();
    use_effect_with(
      *dropdown_open,
      move |open| {
        let listener =
          open.then(|| {
            EventListener::new(
              &gloo::utils::document(),
              "mousedown",
              move |event| {
                let inside =
                  dropdown_ref
                    .cast::<Node>()
                    .zip(
                      event
                        .target()
                        .and_then(
                          |target| {
                            target
                              .dyn_into::<Node>()
                              .ok()
                          }
                        )
                    )
                    .map(
                      |(root, target)| {
                        root.contains(
                          Some(&target)
                        )
                      }
                    )
                    .unwrap_or(false);

                if !inside {
                  dropdown_open
                    .set(false);
                }
              }
            )
          });
        move || drop(listener)
      }
    );
  }

  let on_toggle_dropdown = {
    let dropdown_open =
      dropdown_open.clone();
    Callback::from(move |_| {
      dropdown_open
        .set(!*dropdown_open);
    })
  };

  let on_logout = {
    let session = session.clone();
    let dropdown_open =
      dropdown_open.clone();
    let navigator = navigator.clone();
    Callback::from(move |_| {
      session.logout();
      dropdown_open.set(false);
      if let Some(navigator) =
        navigator.clone()
      {
        navigator
          .replace(&Route::Login);
      }
    })
  };

  let username = session
    .current()
    .map(|session| session.username);

  html! {
      <header>
          <div class="brand">
              <span>{ "Swift" }</span>
              <span class="brand-accent">{ "Task" }</span>
          </div>

          <div class="header-user" ref={dropdown_ref}>
              {
                  match username {
                      Some(name) => html! {
                          <>
                              <span
                                  class="username"
                                  onclick={on_toggle_dropdown}
                              >
                                  { name }
                              </span>
                              {
                                  if *dropdown_open {
                                      html! {
                                          <div class="dropdown">
                                              <span onclick={on_logout}>{ "Log out" }</span>
                                          </div>
                                      }
                                  } else {
                                      html! {}
                                  }
                              }
                          </>
                      },
                      None => html! {
                          <Link<Route> classes="login-button" to={Route::Login}>
                              { "Log in" }
                          </Link<Route>>
                      },
                  }
              }
          </div>
      </header>
  }
}
