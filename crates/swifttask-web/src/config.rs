use serde::Deserialize;
use tracing::error;

const APP_CONFIG_TOML: &str =
  include_str!("../assets/app.toml");

#[derive(
  Clone, PartialEq, Deserialize,
)]
pub struct AppConfig {
  #[serde(
    default = "default_api_url"
  )]
  pub api_url:          String,
  #[serde(
    default = "default_google_login_url"
  )]
  pub google_login_url: String,
  #[serde(default)]
  pub google_client_id: String
}

impl Default for AppConfig {
  fn default() -> Self {
    Self {
      api_url: default_api_url(),
      google_login_url:
        default_google_login_url(),
      google_client_id: String::new()
    }
  }
}

fn default_api_url() -> String {
  "http://localhost:10000".to_string()
}

fn default_google_login_url() -> String
{
  format!(
    "{}/google-login",
    default_api_url()
  )
}

pub fn load_app_config() -> AppConfig {
  match toml::from_str(APP_CONFIG_TOML)
  {
    | Ok(config) => config,
    | Err(error) => {
      error!(
        %error,
        "failed parsing embedded app \
         config; using defaults"
      );
      AppConfig::default()
    }
  }
}

#[cfg(test)]
mod tests {
  use super::load_app_config;

  #[test]
  fn embedded_config_parses() {
    let config = load_app_config();
    assert!(
      !config.api_url.is_empty()
    );
    assert!(
      !config
        .google_login_url
        .is_empty()
    );
  }
}
