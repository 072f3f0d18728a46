use swifttask_shared::Credentials;
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
  use_effect_with,
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
use crate::session::{
  Session,
  use_session
};

#[function_component(Login)]
pub fn login() -> Html {
  let session = use_session();
  let toasts = use_toast_bus();
  let navigator = use_navigator();

  let email = use_state(String::new);
  let password =
    use_state(String::new);
  let show_password =
    use_state(|| false);
  let busy = use_state(|| false);

  // Returning leg of the Google implicit flow: exchange the
  // fragment token once, then continue as a normal login.
  {
    let session = session.clone();
    let toasts = toasts.clone();
    let navigator = navigator.clone();
    let busy = busy.clone();
    use_effect_with((), move |_| {
      if let Some(access_token) =
        google::take_fragment_token()
      {
        busy.set(true);
        spawn_local(async move {
          let api =
            Api::bootstrap(None);
          match api
            .google_login(
              access_token
            )
            .await
          {
            | Ok(data) => {
              session.login(
                Session {
                  token:    data
                    .token,
                  username: data
                    .user
                    .username,
                  user_id:  data
                    .user
                    .id
                }
              );
              push_toast(
                &toasts,
                ToastKind::Success,
                "Google Login \
                 successful!"
              );
              if let Some(
                navigator
              ) = navigator
              {
                navigator.push(
                  &Route::Home
                );
              }
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "google login \
                 exchange failed"
              );
              push_toast(
                &toasts,
                ToastKind::Error,
                "Google login \
                 failed."
              );
            }
          }
          busy.set(false);
        });
      }
      || ()
    });
  }

  let on_email_input = {
    let email = email.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        email.set(input.value());
      }
    )
  };

  let on_password_input = {
    let password = password.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        password.set(input.value());
      }
    )
  };

  let on_toggle_show = {
    let show_password =
      show_password.clone();
    Callback::from(move |_| {
      show_password
        .set(!*show_password);
    })
  };

  let on_submit = {
    let email = email.clone();
    let password = password.clone();
    let busy = busy.clone();
    let session = session.clone();
    let toasts = toasts.clone();
    let navigator = navigator.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();

        busy.set(true);
        let credentials =
          Credentials {
            email:    (*email)
              .clone(),
            password: (*password)
              .clone()
          };
        let busy = busy.clone();
        let session =
          session.clone();
        let toasts = toasts.clone();
        let navigator =
          navigator.clone();

        spawn_local(async move {
          let api =
            Api::bootstrap(None);
          match api
            .login(&credentials)
            .await
          {
            | Ok(data) => {
              session.login(
                Session {
                  token:    data
                    .token,
                  username: data
                    .user
                    .username,
                  user_id:  data
                    .user
                    .id
                }
              );
              push_toast(
                &toasts,
                ToastKind::Success,
                "Login successful!"
              );
              if let Some(
                navigator
              ) = navigator
              {
                navigator.push(
                  &Route::Home
                );
              }
            }
            | Err(error) => {
              tracing::error!(
                %error,
                "login failed"
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

  let on_register_click = {
    let navigator = navigator.clone();
    Callback::from(move |_| {
      if let Some(navigator) =
        navigator.clone()
      {
        navigator
          .push(&Route::Register);
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
      <div class="auth-page login-page">
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
              <div class="auth-side">
                  <p class="auth-greeting">{ "Hello, Welcome!" }</p>
                  <p>{ "Don't have an account?" }</p>
                  <button
                      class="auth-switch-btn"
                      onclick={on_register_click}
                  >
                      { "Register" }
                  </button>
              </div>

              <div class="auth-form">
                  <div class="heading"><p>{ "Login" }</p></div>
                  <form onsubmit={on_submit}>
                      <div class="input-group">
                          <input
                              type="email"
                              name="email"
                              placeholder="Email"
                              value={(*email).clone()}
                              oninput={on_email_input}
                              required=true
                          />
                      </div>

                      <div class="input-group">
                          <input
                              type={password_type}
                              name="password"
                              placeholder="Password"
                              value={(*password).clone()}
                              oninput={on_password_input}
                              required=true
                          />
                      </div>

                      <span class="password-checkbox">
                          <input
                              type="checkbox"
                              checked={*show_password}
                              onchange={on_toggle_show}
                          />
                          <label>{ "Show password" }</label>
                      </span>

                      <div class="auth-submit">
                          <button type="submit" disabled={*busy}>{ "Login" }</button>
                      </div>
                      <p class="social-text">{ "or log in with social platforms" }</p>
                  </form>

                  <div class="social-icons">
                      <button class="google-btn" onclick={on_google_click}>
                          { "Sign in with Google" }
                      </button>
                  </div>
              </div>
          </div>
      </div>
  }
}
