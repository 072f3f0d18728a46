use tracing::{
  error,
  warn
};

const AUTHORIZE_ENDPOINT: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const OAUTH_SCOPE: &str =
  "openid email profile";

fn encode(value: &str) -> String {
  String::from(
    js_sys::encode_uri_component(value)
  )
}

fn authorize_url(
  client_id: &str,
  redirect_uri: &str
) -> String {
  format!(
    "{AUTHORIZE_ENDPOINT}?client_id={}\
     &redirect_uri={}&response_type=\
     token&scope={}",
    encode(client_id),
    encode(redirect_uri),
    encode(OAUTH_SCOPE)
  )
}

// Implicit flow: Google redirects back to the login page with
// the access token in the URL fragment.
pub fn begin_login(client_id: &str) {
  if client_id.is_empty() {
    warn!(
      "google login requested \
       without a configured client id"
    );
    return;
  }

  let location =
    gloo::utils::window().location();
  let origin = match location.origin()
  {
    | Ok(origin) => origin,
    | Err(_) => {
      error!(
        "could not resolve window \
         origin for google login"
      );
      return;
    }
  };

  let url = authorize_url(
    client_id,
    &format!("{origin}/login")
  );
  if location.set_href(&url).is_err() {
    error!(
      "failed redirecting to google \
       authorization endpoint"
    );
  }
}

pub fn token_from_fragment(
  fragment: &str
) -> Option<String> {
  fragment
    .trim_start_matches('#')
    .split('&')
    .find_map(|pair| {
      pair.strip_prefix(
        "access_token="
      )
    })
    .filter(|token| !token.is_empty())
    .map(str::to_string)
}

// Reads and consumes the fragment token so a page refresh does
// not replay the exchange.
pub fn take_fragment_token()
-> Option<String> {
  let location =
    gloo::utils::window().location();
  let hash = location.hash().ok()?;
  let token =
    token_from_fragment(&hash)?;
  let _ = location.set_hash("");
  Some(token)
}

#[cfg(test)]
mod tests {
  use super::token_from_fragment;

  #[test]
  fn finds_token_among_fragment_pairs()
  {
    let fragment = "#state=x&\
                    access_token=ya29.\
                    abc&token_type=\
                    Bearer&expires_in=\
                    3599";
    assert_eq!(
      token_from_fragment(fragment),
      Some("ya29.abc".to_string())
    );
  }

  #[test]
  fn ignores_missing_or_empty_token() {
    assert_eq!(
      token_from_fragment("#state=x"),
      None
    );
    assert_eq!(
      token_from_fragment(
        "#access_token="
      ),
      None
    );
    assert_eq!(
      token_from_fragment(""),
      None
    );
  }
}
