use super::*;

pub(crate) struct CommentEntry {
  pub(crate) body: String,
  pub(crate) date: String,
  pub(crate) image_url: Option<String>,
  pub(crate) owner: String,
}

impl From<Comment> for CommentEntry {
  fn from(comment: Comment) -> Self {
    let owner = sanitize_comment(&comment.comment_owner);

    Self {
      body: sanitize_comment(&comment.comment_text),
      date: format_date(comment.timestamp),
      image_url: comment.comment_image_url.filter(|url| !url.is_empty()),
      owner: if owner.is_empty() {
        "anonymous".to_string()
      } else {
        owner
      },
    }
  }
}

impl CommentEntry {
  pub(crate) fn body(&self) -> &str {
    self.body.as_str()
  }

  pub(crate) fn header(&self) -> String {
    format!("{} · {}", truncate(&self.owner, 40), self.date)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn entry_strips_markup_and_keeps_image() {
    let entry = CommentEntry::from(Comment {
      comment_image_url: Some("/serve?blob=1".to_string()),
      comment_owner: "<b>anna</b>".to_string(),
      comment_text: "Hello &amp; <i>welcome</i>".to_string(),
      timestamp: 1_590_000_000_000,
    });

    assert_eq!(entry.owner, "anna");
    assert_eq!(entry.body(), "Hello & welcome");
    assert_eq!(entry.image_url.as_deref(), Some("/serve?blob=1"));
    assert!(entry.header().starts_with("anna · 2020-05-2"));
  }

  #[test]
  fn blank_owner_is_anonymous() {
    let entry = CommentEntry::from(Comment {
      comment_image_url: Some(String::new()),
      comment_owner: "  ".to_string(),
      comment_text: "text".to_string(),
      timestamp: 0,
    });

    assert_eq!(entry.owner, "anonymous");
    assert_eq!(entry.image_url, None);
  }
}
