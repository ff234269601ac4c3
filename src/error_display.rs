use super::*;

#[derive(Clone, Debug)]
struct FieldError {
  expires_at: Instant,
  field: Field,
  message: String,
}

pub(crate) struct ErrorDisplay {
  errors: Vec<FieldError>,
  timeout: Duration,
}

impl ErrorDisplay {
  // A second dismissal of the same field is a no-op.
  pub(crate) fn dismiss(&mut self, field: Field) -> bool {
    let before = self.errors.len();

    self.errors.retain(|error| error.field != field);

    before != self.errors.len()
  }

  pub(crate) fn expire(&mut self, now: Instant) -> usize {
    let before = self.errors.len();

    self.errors.retain(|error| error.expires_at > now);

    before - self.errors.len()
  }

  pub(crate) fn is_marked(&self, field: Field) -> bool {
    self.errors.iter().any(|error| error.field == field)
  }

  #[cfg(test)]
  pub(crate) fn len(&self) -> usize {
    self.errors.len()
  }

  pub(crate) fn message(&self, field: Field) -> Option<&str> {
    self
      .errors
      .iter()
      .find(|error| error.field == field)
      .map(|error| error.message.as_str())
  }

  pub(crate) fn new(timeout: Duration) -> Self {
    Self {
      errors: Vec::new(),
      timeout,
    }
  }

  pub(crate) fn show(&mut self, field: Field, message: impl Into<String>) {
    self.show_at(field, message, Instant::now());
  }

  pub(crate) fn show_at(
    &mut self,
    field: Field,
    message: impl Into<String>,
    now: Instant,
  ) {
    let error = FieldError {
      expires_at: now + self.timeout,
      field,
      message: message.into(),
    };

    tracing::debug!(?field, message = %error.message, "showing field error");

    match self.errors.iter_mut().find(|existing| existing.field == field) {
      Some(existing) => *existing = error,
      None => self.errors.push(error),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const TIMEOUT: Duration = Duration::from_secs(5);

  #[test]
  fn show_marks_field_and_attaches_message() {
    let mut errors = ErrorDisplay::new(TIMEOUT);

    errors.show(Field::MaxComments, "Please, write a positive number");

    assert!(errors.is_marked(Field::MaxComments));
    assert!(!errors.is_marked(Field::CommentOwner));
    assert_eq!(
      errors.message(Field::MaxComments),
      Some("Please, write a positive number")
    );
  }

  #[test]
  fn dismiss_removes_exactly_once() {
    let mut errors = ErrorDisplay::new(TIMEOUT);

    errors.show(Field::CommentOwner, "Please, enter your name");
    errors.show(Field::CommentText, "Please, enter your comment");

    assert!(errors.dismiss(Field::CommentOwner));
    assert_eq!(errors.len(), 1);
    assert!(!errors.is_marked(Field::CommentOwner));

    assert!(!errors.dismiss(Field::CommentOwner));
    assert_eq!(errors.len(), 1);
  }

  #[test]
  fn expire_removes_errors_after_timeout() {
    let mut errors = ErrorDisplay::new(TIMEOUT);
    let now = Instant::now();

    errors.show_at(Field::MaxComments, "error", now);

    assert_eq!(errors.expire(now + Duration::from_secs(4)), 0);
    assert!(errors.is_marked(Field::MaxComments));

    assert_eq!(errors.expire(now + TIMEOUT), 1);
    assert!(!errors.is_marked(Field::MaxComments));
  }

  #[test]
  fn expiry_after_dismissal_is_a_no_op() {
    let mut errors = ErrorDisplay::new(TIMEOUT);
    let now = Instant::now();

    errors.show_at(Field::MaxComments, "error", now);

    assert!(errors.dismiss(Field::MaxComments));
    assert_eq!(errors.expire(now + TIMEOUT), 0);
  }

  #[test]
  fn repeated_error_replaces_message_and_restarts_timeout() {
    let mut errors = ErrorDisplay::new(TIMEOUT);
    let now = Instant::now();

    errors.show_at(Field::MaxComments, "first", now);
    errors.show_at(Field::MaxComments, "second", now + Duration::from_secs(3));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors.message(Field::MaxComments), Some("second"));

    assert_eq!(errors.expire(now + TIMEOUT), 0);
    assert_eq!(errors.expire(now + Duration::from_secs(8)), 1);
  }
}
