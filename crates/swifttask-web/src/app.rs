use yew::{
  ContextProvider,
  Html,
  function_component,
  html,
  use_reducer,
  use_state
};
use yew_router::prelude::{
  BrowserRouter,
  Routable,
  Switch
};
use yew_router::components::Redirect;

use crate::components::{
  ToastBus,
  ToastHost,
  ToastList
};
use crate::pages::{
  Home,
  Login,
  Signup
};
use crate::session::{
  SessionHandle,
  load_session
};

#[derive(
  Clone, Routable, PartialEq,
)]
pub enum Route {
  #[at("/")]
  Home,
  #[at("/login")]
  Login,
  #[at("/register")]
  Register,
  #[not_found]
  #[at("/404")]
  NotFound
}

fn switch(route: Route) -> Html {
  match route {
    | Route::Home => {
      html! { <Home /> }
    }
    | Route::Login => {
      html! { <Login /> }
    }
    | Route::Register => {
      html! { <Signup /> }
    }
    | Route::NotFound => html! {
      <Redirect<Route>
        to={Route::Home}
      />
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  // The persisted session is read exactly once, at bootstrap;
  // everything below reaches identity through the context.
  let current =
    use_state(load_session);
  let session =
    SessionHandle::new(current);
  let toasts =
    use_reducer(ToastList::default);

  html! {
      <BrowserRouter>
          <ContextProvider<SessionHandle> context={session}>
              <ContextProvider<ToastBus> context={toasts}>
                  <Switch<Route> render={switch} />
                  <ToastHost />
              </ContextProvider<ToastBus>>
          </ContextProvider<SessionHandle>>
      </BrowserRouter>
  }
}
