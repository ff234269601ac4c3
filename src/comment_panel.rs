use super::*;

pub(crate) struct CommentPanel {
  entries: ListView<CommentEntry>,
  max_comments: usize,
  pagination: PaginationState,
  pending: Option<PendingLoad>,
}

impl CommentPanel {
  // Responses to superseded requests are dropped.
  pub(crate) fn apply(&mut self, request_id: u64, page: CommentPage) -> bool {
    if !self.take_pending(request_id) {
      return false;
    }

    self.pagination.advance(&page);

    self.entries = ListView::new(
      page.comments.into_iter().map(CommentEntry::from).collect(),
    );

    true
  }

  pub(crate) fn begin(
    &mut self,
    request_id: u64,
    direction: Option<PageDirection>,
  ) {
    self.pending = Some(PendingLoad {
      direction,
      request_id,
    });
  }

  pub(crate) fn entries(&self) -> &ListView<CommentEntry> {
    &self.entries
  }

  pub(crate) fn entries_mut(&mut self) -> &mut ListView<CommentEntry> {
    &mut self.entries
  }

  pub(crate) fn is_loading(&self) -> bool {
    self.pending.is_some()
  }

  pub(crate) fn max_comments(&self) -> usize {
    self.max_comments
  }

  pub(crate) fn new(strategy: PaginationStrategy, max_comments: usize) -> Self {
    Self {
      entries: ListView::default(),
      max_comments,
      pagination: PaginationState::initial(strategy),
      pending: None,
    }
  }

  #[cfg(test)]
  pub(crate) fn pagination(&self) -> &PaginationState {
    &self.pagination
  }

  pub(crate) fn query(
    &self,
    direction: Option<PageDirection>,
  ) -> Result<CommentQuery, PaginationError> {
    self.pagination.query(self.max_comments, direction)
  }

  pub(crate) fn reset(&mut self, max_comments: usize) {
    self.max_comments = max_comments;
    self.pagination = PaginationState::initial(self.pagination.strategy());
  }

  pub(crate) fn take_pending(&mut self, request_id: u64) -> bool {
    let is_latest = self
      .pending
      .as_ref()
      .is_some_and(|pending| pending.request_id == request_id);

    if !is_latest {
      tracing::debug!(request_id, "discarding stale comment response");
      return false;
    }

    if let Some(pending) = self.pending.take() {
      tracing::debug!(
        request_id,
        direction = ?pending.direction,
        "comment request settled"
      );
    }

    true
  }
}
