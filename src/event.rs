use super::*;

pub(crate) enum Event {
  AuthStatus {
    result: Result<AuthStatus>,
  },
  CommentPosted {
    result: Result,
  },
  Comments {
    request_id: u64,
    result: Result<CommentPage>,
  },
  CommentsDeleted {
    result: Result,
  },
}
