use super::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct CommentPage {
  pub(crate) comments: Vec<Comment>,
  pub(crate) cursor: Option<String>,
  pub(crate) last_timestamp: Option<i64>,
}

impl CommentPage {
  pub(crate) fn parse(
    strategy: PaginationStrategy,
    body: &str,
  ) -> Result<Self> {
    Ok(match strategy {
      PaginationStrategy::CursorBased => {
        serde_json::from_str::<CursorResponse>(body)?.into()
      }
      PaginationStrategy::None => {
        serde_json::from_str::<Vec<Comment>>(body)?.into()
      }
      PaginationStrategy::TimestampBased => {
        serde_json::from_str::<TimestampResponse>(body)?.into()
      }
    })
  }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimestampResponse {
  comments: Vec<Comment>,
  last_timestamp: i64,
}

#[derive(Debug, Deserialize)]
struct CursorResponse {
  comments: Vec<Comment>,
  #[serde(default, deserialize_with = "deserialize_optional_string")]
  cursor: Option<String>,
}

impl From<TimestampResponse> for CommentPage {
  fn from(response: TimestampResponse) -> Self {
    Self {
      comments: response.comments,
      cursor: None,
      last_timestamp: Some(response.last_timestamp),
    }
  }
}

impl From<CursorResponse> for CommentPage {
  fn from(response: CursorResponse) -> Self {
    Self {
      comments: response.comments,
      cursor: response.cursor.filter(|cursor| !cursor.is_empty()),
      last_timestamp: None,
    }
  }
}

impl From<Vec<Comment>> for CommentPage {
  fn from(comments: Vec<Comment>) -> Self {
    Self {
      comments,
      cursor: None,
      last_timestamp: None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const COMMENT: &str =
    r#"{"commentOwner":"a","commentText":"b","timestamp":5}"#;

  #[test]
  fn timestamp_response_keeps_last_timestamp() {
    let response = serde_json::from_str::<TimestampResponse>(&format!(
      r#"{{"comments":[{COMMENT}],"lastTimestamp":5}}"#
    ))
    .unwrap();

    let page = CommentPage::from(response);

    assert_eq!(page.comments.len(), 1);
    assert_eq!(page.last_timestamp, Some(5));
    assert_eq!(page.cursor, None);
  }

  #[test]
  fn cursor_response_accepts_numeric_and_null_cursors() {
    let numeric = serde_json::from_str::<CursorResponse>(
      r#"{"comments":[],"cursor":42}"#,
    )
    .unwrap();

    assert_eq!(CommentPage::from(numeric).cursor, Some("42".to_string()));

    let null = serde_json::from_str::<CursorResponse>(
      r#"{"comments":[],"cursor":null}"#,
    )
    .unwrap();

    assert_eq!(CommentPage::from(null).cursor, None);
  }

  #[test]
  fn empty_cursor_means_no_more_pages() {
    let response = serde_json::from_str::<CursorResponse>(
      r#"{"comments":[],"cursor":""}"#,
    )
    .unwrap();

    assert_eq!(CommentPage::from(response).cursor, None);
  }

  #[test]
  fn parse_decodes_the_shape_of_each_strategy() {
    let timestamp = CommentPage::parse(
      PaginationStrategy::TimestampBased,
      &format!(r#"{{"comments":[{COMMENT}],"lastTimestamp":5}}"#),
    )
    .unwrap();

    assert_eq!(timestamp.comments.len(), 1);
    assert_eq!(timestamp.last_timestamp, Some(5));

    let cursor = CommentPage::parse(
      PaginationStrategy::CursorBased,
      &format!(r#"{{"comments":[{COMMENT}],"cursor":"abc"}}"#),
    )
    .unwrap();

    assert_eq!(cursor.comments.len(), 1);
    assert_eq!(cursor.cursor.as_deref(), Some("abc"));

    let bare = CommentPage::parse(
      PaginationStrategy::None,
      &format!("[{COMMENT},{COMMENT}]"),
    )
    .unwrap();

    assert_eq!(bare.comments.len(), 2);
    assert_eq!(bare.last_timestamp, None);
    assert_eq!(bare.cursor, None);
  }

  #[test]
  fn parse_rejects_the_shape_of_another_strategy() {
    let bare = format!("[{COMMENT}]");

    assert!(
      CommentPage::parse(PaginationStrategy::TimestampBased, &bare).is_err()
    );
    assert!(
      CommentPage::parse(PaginationStrategy::CursorBased, &bare).is_err()
    );

    let timestamp = r#"{"comments":[],"lastTimestamp":5}"#;

    assert!(CommentPage::parse(PaginationStrategy::None, timestamp).is_err());
  }
}
