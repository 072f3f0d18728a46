use swifttask_shared::RegisterForm;
use wasm_bindgen_futures::spawn_local;
use web_sys::{
  HtmlInputElement,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  InputEvent,
  TargetCast,
  function_component,
  html,
  use_state
};
use yew_router::prelude::use_navigator;

use crate::api::Api;
use crate::app::Route;
use crate::components::{
  ToastKind,
  push_toast,
  use_toast_bus
};
use crate::config::load_app_config;
use crate::google;

#[function_component(Signup)]
pub fn signup() -> Html {
  let toasts = use_toast_bus();
  let navigator = use_navigator();

  let username =
    use_state(String::new);
  let email = use_state(String::new);
  let password =
    use_state(String::new);
  let show_password =
    use_state(|| false);
  let busy = use_state(|| false);

  let bind_input =
    |target: &yew::UseStateHandle<
      String
    >| {
      let target = target.clone();
      Callback::from(
        move |e: InputEvent| {
          let input: HtmlInputElement =
            e.target_unchecked_into();
          target.set(input.value());
        }
      )
    };

  let on_username_input =
    bind_input(&username);
  let on_email_input =
    bind_input(&email);
  let on_password_input =
    bind_input(&password);

  let on_toggle_show = {
    let show_password =
      show_password.clone();
    Callback::from(move |_| {
      show_password
        .set(!*show_password);
    })
  };

  let on_submit = {
    let username = username.clone();
    let email = email.clone();
    let password = password.clone();
    let busy = busy.clone();
    let toasts = toasts.clone();
    let navigator = navigator.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();

        let form = RegisterForm {
          username: (*username)
            .clone(),
          email:    (*email).clone(),
          password: (*password)
            .clone()
        };

        if form.username.is_empty()
          || form.email.is_empty()
          || form.password.is_empty()
        {
          push_toast(
            &toasts,
            ToastKind::Error,
            "All fields are \
             required!"
          );
          return;
        }

        busy.set(true);
        let busy = busy.clone();
        let toasts = toasts.clone();
        let navigator =
          navigator.clone();

        spawn_local(async move {
          let api =
            Api::bootstrap(None);
          match api
            .register(&form)
            .await
          {
            | Ok(body) => {
              let text = if body
                .message
                .is_empty()
              {
                "Registration \
                 successful. Please \
                 log in."
                  .to_string()
              } else {
                body.message
              };
              push_toast(
                &toasts,
                ToastKind::Success,
                text
              );
              if let Some(
                navigator
              ) = navigator
              {
                navigator.push(
                  &Route::Login
                );
              }
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "registration failed"
              );
              push_toast(
                &toasts,
                ToastKind::Error,
                error.to_string()
              );
            }
          }
          busy.set(false);
        });
      }
    )
  };

  let on_google_click =
    Callback::from(move |_| {
      let config = load_app_config();
      google::begin_login(
        &config.google_client_id
      );
    });

  let on_login_click = {
    let navigator = navigator.clone();
    Callback::from(move |_| {
      if let Some(navigator) =
        navigator.clone()
      {
        navigator.push(&Route::Login);
      }
    })
  };

  let password_type =
    if *show_password {
      "text"
    } else {
      "password"
    };

  html! {
      <div class="auth-page signup-page">
          {
              if *busy {
                  html! {
                      <div class="full-page-loader">
                          <div class="spinner"></div>
                      </div>
                  }
              } else {
                  html! {}
              }
          }
          <div class="auth-box">
              <div class="auth-form">
                  <div class="heading"><p>{ "Register" }</p></div>

                  <form onsubmit={on_submit}>
                      <div class="input-group">
                          <input
                              type="text"
                              name="username"
                              placeholder="Username"
                              value={(*username).clone()}
                              oninput={on_username_input}
                              disabled={*busy}
                          />
                      </div>

                      <div class="input-group">
                          <input
                              type="email"
                              name="email"
                              placeholder="Email"
                              value={(*email).clone()}
                              oninput={on_email_input}
                              disabled={*busy}
                          />
                      </div>

                      <div class="input-group">
                          <input
                              type={password_type}
                              name="password"
                              placeholder="Password"
                              value={(*password).clone()}
                              oninput={on_password_input}
                              disabled={*busy}
                          />
                      </div>

                      <span class="password-checkbox">
                          <input
                              type="checkbox"
                              checked={*show_password}
                              onchange={on_toggle_show}
                              disabled={*busy}
                          />
                          <label>{ "Show password" }</label>
                      </span>

                      <div class="auth-submit">
                          <button type="submit" disabled={*busy}>{ "Register" }</button>
                      </div>
                  </form>

                  <p class="social-text">{ "or register with social platforms" }</p>

                  <div class="social-icons">
                      <button class="google-btn" onclick={on_google_click}>
                          { "Sign in with Google" }
                      </button>
                  </div>
              </div>

              <div class="auth-side">
                  <p class="auth-greeting">{ "Welcome Back!" }</p>
                  <p>{ "Already have an account?" }</p>
                  <button
                      class="auth-switch-btn"
                      onclick={on_login_click}
                      disabled={*busy}
                  >
                      { "Login" }
                  </button>
              </div>
          </div>
      </div>
  }
}
