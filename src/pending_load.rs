use super::*;

pub(crate) struct PendingLoad {
  pub(crate) direction: Option<PageDirection>,
  pub(crate) request_id: u64,
}
