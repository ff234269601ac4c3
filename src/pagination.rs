use super::*;

#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
pub(crate) enum PaginationStrategy {
  #[serde(rename = "cursor")]
  CursorBased,
  #[serde(rename = "none")]
  None,
  #[default]
  #[serde(rename = "timestamp")]
  TimestampBased,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum PageDirection {
  Next,
  Previous,
}

impl PageDirection {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Next => "next",
      Self::Previous => "previous",
    }
  }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum PaginationError {
  #[error("Pagination is disabled")]
  Disabled,
  #[error("No more comments")]
  Exhausted,
  #[error("Previous page is not available")]
  PreviousUnsupported,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum PaginationState {
  CursorBased {
    cursor: Option<String>,
    loaded: bool,
  },
  None,
  TimestampBased {
    comments_on_page: Option<usize>,
    last_timestamp: Option<i64>,
  },
}

impl PaginationState {
  pub(crate) fn advance(&mut self, page: &CommentPage) {
    match self {
      Self::CursorBased { cursor, loaded } => {
        cursor.clone_from(&page.cursor);
        *loaded = true;
      }
      Self::None => {}
      Self::TimestampBased {
        comments_on_page,
        last_timestamp,
      } => {
        *last_timestamp = page.last_timestamp;
        *comments_on_page = Some(page.comments.len());
      }
    }
  }

  pub(crate) fn initial(strategy: PaginationStrategy) -> Self {
    match strategy {
      PaginationStrategy::CursorBased => Self::CursorBased {
        cursor: None,
        loaded: false,
      },
      PaginationStrategy::None => Self::None,
      PaginationStrategy::TimestampBased => Self::TimestampBased {
        comments_on_page: None,
        last_timestamp: None,
      },
    }
  }

  pub(crate) fn query(
    &self,
    max_comments: usize,
    direction: Option<PageDirection>,
  ) -> Result<CommentQuery, PaginationError> {
    let mut query = CommentQuery::new(max_comments);

    match self {
      Self::CursorBased { cursor, loaded } => match direction {
        None => {}
        Some(PageDirection::Previous) => {
          return Err(PaginationError::PreviousUnsupported);
        }
        Some(PageDirection::Next) => match cursor {
          Some(cursor) => query.push("cursor", cursor.clone()),
          None if *loaded => return Err(PaginationError::Exhausted),
          None => {}
        },
      },
      Self::None => {
        if direction.is_some() {
          return Err(PaginationError::Disabled);
        }
      }
      Self::TimestampBased {
        comments_on_page,
        last_timestamp,
      } => {
        if let Some(timestamp) = last_timestamp {
          query.push("timestamp", timestamp.to_string());
        }

        if let Some(direction) = direction {
          query.push("direction", direction.as_str().to_string());
        }

        if let Some(count) = comments_on_page {
          query.push("commentsonpage", count.to_string());
        }
      }
    }

    Ok(query)
  }

  pub(crate) fn strategy(&self) -> PaginationStrategy {
    match self {
      Self::CursorBased { .. } => PaginationStrategy::CursorBased,
      Self::None => PaginationStrategy::None,
      Self::TimestampBased { .. } => PaginationStrategy::TimestampBased,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentQuery {
  max_comments: usize,
  params: Vec<(&'static str, String)>,
}

impl CommentQuery {
  pub(crate) fn max_comments(&self) -> usize {
    self.max_comments
  }

  pub(crate) fn new(max_comments: usize) -> Self {
    Self {
      max_comments,
      params: vec![("maxcomments", max_comments.to_string())],
    }
  }

  fn push(&mut self, key: &'static str, value: String) {
    self.params.push((key, value));
  }

  pub(crate) fn url(&self, base_url: &Url) -> Result<Url> {
    let mut url = base_url
      .join(COMMENTS_PATH)
      .with_context(|| format!("invalid comments url for {base_url}"))?;

    url.query_pairs_mut().extend_pairs(self.params.iter());

    Ok(url)
  }
}
