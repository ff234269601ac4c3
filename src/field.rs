#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Field {
  CommentOwner,
  CommentText,
  MaxComments,
}

impl Field {
  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::CommentOwner => "Your name",
      Self::CommentText => "Your comment",
      Self::MaxComments => "Max comments",
    }
  }
}
