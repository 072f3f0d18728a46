use gloo::net::http::{
  Request,
  RequestBuilder,
  Response
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use swifttask_shared::{
  ApiMessage,
  Credentials,
  GoogleExchange,
  LoginResponse,
  RegisterForm,
  ShareRequest,
  Task,
  TaskDraft,
  TaskListResponse
};
use thiserror::Error;

use crate::config::{
  AppConfig,
  load_app_config
};

// Requests fire once and report; there is no retry layer.
#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error("network error: {0}")]
  Network(String),
  #[error("{message}")]
  Rejected {
    status:  u16,
    message: String
  },
  #[error(
    "failed decoding response: {0}"
  )]
  Decode(String)
}

#[derive(Clone, PartialEq)]
pub struct Api {
  config: AppConfig,
  token:  Option<String>
}

impl Api {
  pub fn new(
    config: AppConfig,
    token: Option<String>
  ) -> Self {
    Self {
      config,
      token
    }
  }

  pub fn bootstrap(
    token: Option<String>
  ) -> Self {
    Self::new(load_app_config(), token)
  }

  fn url(&self, path: &str) -> String {
    format!(
      "{}{path}",
      self
        .config
        .api_url
        .trim_end_matches('/')
    )
  }

  fn authorized(
    &self,
    builder: RequestBuilder
  ) -> RequestBuilder {
    match &self.token {
      | Some(token) => builder.header(
        "Authorization",
        &format!("Bearer {token}")
      ),
      | None => builder
    }
  }

  pub async fn list_tasks(
    &self
  ) -> Result<Vec<Task>, ApiError> {
    let response = self
      .authorized(Request::get(
        &self.url("/tasks")
      ))
      .send()
      .await
      .map_err(network)?;

    let body: TaskListResponse =
      read(response).await?;
    Ok(body.tasks)
  }

  pub async fn create_task(
    &self,
    draft: &TaskDraft
  ) -> Result<ApiMessage, ApiError> {
    self
      .post_json(
        &self.url("/tasks"),
        draft
      )
      .await
  }

  pub async fn update_task(
    &self,
    task_id: &str,
    draft: &TaskDraft
  ) -> Result<ApiMessage, ApiError> {
    let request = self
      .authorized(Request::put(
        &self.url(&format!(
          "/update_task/{task_id}"
        ))
      ))
      .json(draft)
      .map_err(encode)?;

    read(
      request
        .send()
        .await
        .map_err(network)?
    )
    .await
  }

  pub async fn delete_task(
    &self,
    task_id: &str
  ) -> Result<ApiMessage, ApiError> {
    let response = self
      .authorized(Request::delete(
        &self.url(&format!(
          "/delete_task/{task_id}"
        ))
      ))
      .send()
      .await
      .map_err(network)?;

    read(response).await
  }

  pub async fn share_task(
    &self,
    request: &ShareRequest
  ) -> Result<ApiMessage, ApiError> {
    self
      .post_json(
        &self.url("/share_task"),
        request
      )
      .await
  }

  pub async fn login(
    &self,
    credentials: &Credentials
  ) -> Result<LoginResponse, ApiError>
  {
    self
      .post_json(
        &self.url("/login"),
        credentials
      )
      .await
  }

  pub async fn register(
    &self,
    form: &RegisterForm
  ) -> Result<ApiMessage, ApiError> {
    self
      .post_json(
        &self.url("/register"),
        form
      )
      .await
  }

  // The exchange endpoint is configured as a full URL; token
  // verification happens server-side.
  pub async fn google_login(
    &self,
    access_token: String
  ) -> Result<LoginResponse, ApiError>
  {
    let url = self
      .config
      .google_login_url
      .clone();
    self
      .post_json(
        &url,
        &GoogleExchange {
          access_token
        }
      )
      .await
  }

  async fn post_json<
    B: Serialize,
    T: DeserializeOwned
  >(
    &self,
    url: &str,
    body: &B
  ) -> Result<T, ApiError> {
    let request = self
      .authorized(Request::post(url))
      .json(body)
      .map_err(encode)?;

    read(
      request
        .send()
        .await
        .map_err(network)?
    )
    .await
  }
}

async fn read<T: DeserializeOwned>(
  response: Response
) -> Result<T, ApiError> {
  let status = response.status();

  if !response.ok() {
    let message = match response
      .json::<ApiMessage>()
      .await
    {
      | Ok(body)
        if !body.message.is_empty() =>
      {
        body.message
      }
      | _ => format!(
        "request failed with status \
         {status}"
      )
    };
    return Err(ApiError::Rejected {
      status,
      message
    });
  }

  response
    .json::<T>()
    .await
    .map_err(|error| {
      ApiError::Decode(
        error.to_string()
      )
    })
}

fn network(
  error: gloo::net::Error
) -> ApiError {
  ApiError::Network(error.to_string())
}

fn encode(
  error: gloo::net::Error
) -> ApiError {
  ApiError::Decode(error.to_string())
}
