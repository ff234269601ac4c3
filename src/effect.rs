use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  DeleteAllComments,
  FetchAuthStatus,
  FetchComments {
    query: CommentQuery,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
  PostComment {
    submission: CommentSubmission,
  },
}
