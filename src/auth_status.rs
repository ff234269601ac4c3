use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AuthStatus {
  pub(crate) is_logged_in: bool,
  pub(crate) url: String,
}

impl AuthStatus {
  pub(crate) fn label(&self) -> &'static str {
    if self.is_logged_in {
      "logged in"
    } else {
      "logged out"
    }
  }
}
