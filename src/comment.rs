use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) comment_image_url: Option<String>,
  pub(crate) comment_owner: String,
  pub(crate) comment_text: String,
  pub(crate) timestamp: i64,
}
