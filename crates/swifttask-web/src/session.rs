use gloo::storage::errors::StorageError;
use gloo::storage::{
  LocalStorage,
  Storage
};
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info
};
use yew::{
  UseStateHandle,
  hook,
  use_context
};

const SESSION_STORAGE_KEY: &str =
  "swifttask.session";

#[derive(
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
pub struct Session {
  pub token:    String,
  pub username: String,
  pub user_id:  String
}

pub fn load_session() -> Option<Session>
{
  match LocalStorage::get::<Session>(
    SESSION_STORAGE_KEY
  ) {
    | Ok(session) => Some(session),
    | Err(
      StorageError::KeyNotFound(_)
    ) => None,
    | Err(error) => {
      error!(
        %error,
        "failed loading stored \
         session"
      );
      None
    }
  }
}

fn save_session(session: &Session) {
  if let Err(error) =
    LocalStorage::set(
      SESSION_STORAGE_KEY,
      session
    )
  {
    error!(
      %error,
      "failed persisting session"
    );
  }
}

fn clear_session() {
  LocalStorage::delete(
    SESSION_STORAGE_KEY
  );
}

// Identity is injected through this handle instead of being
// read from browser storage at every call site. The app reads
// the persisted session once at bootstrap; logout clears it.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
  current:
    UseStateHandle<Option<Session>>
}

impl SessionHandle {
  pub fn new(
    current: UseStateHandle<
      Option<Session>
    >
  ) -> Self {
    Self {
      current
    }
  }

  pub fn current(
    &self
  ) -> Option<Session> {
    (*self.current).clone()
  }

  pub fn token(&self) -> Option<String> {
    (*self.current)
      .as_ref()
      .map(|session| {
        session.token.clone()
      })
  }

  pub fn login(
    &self,
    session: Session
  ) {
    info!(
      username = %session.username,
      "session established"
    );
    save_session(&session);
    self.current.set(Some(session));
  }

  pub fn logout(&self) {
    info!("session cleared");
    clear_session();
    self.current.set(None);
  }
}

#[hook]
pub fn use_session() -> SessionHandle {
  use_context::<SessionHandle>()
    .expect("session context missing")
}
