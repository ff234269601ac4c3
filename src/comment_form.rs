use super::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub(crate) enum CommentFormError {
  #[error("Please, enter your name")]
  MissingOwner,
  #[error("Please, enter your comment")]
  MissingText,
}

impl CommentFormError {
  pub(crate) fn field(&self) -> Field {
    match self {
      Self::MissingOwner => Field::CommentOwner,
      Self::MissingText => Field::CommentText,
    }
  }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CommentSubmission {
  pub(crate) owner: String,
  pub(crate) text: String,
}

#[derive(Debug, Default)]
pub(crate) struct CommentForm {
  pub(crate) owner: String,
  pub(crate) text: String,
}

impl CommentForm {
  pub(crate) fn buffer_mut(&mut self, field: Field) -> Option<&mut String> {
    match field {
      Field::CommentOwner => Some(&mut self.owner),
      Field::CommentText => Some(&mut self.text),
      Field::MaxComments => None,
    }
  }

  pub(crate) fn clear(&mut self) {
    self.owner.clear();
    self.text.clear();
  }

  pub(crate) fn validate(
    &self,
  ) -> Result<CommentSubmission, Vec<CommentFormError>> {
    let mut errors = Vec::new();

    if self.owner.trim().is_empty() {
      errors.push(CommentFormError::MissingOwner);
    }

    if self.text.trim().is_empty() {
      errors.push(CommentFormError::MissingText);
    }

    if !errors.is_empty() {
      return Err(errors);
    }

    Ok(CommentSubmission {
      owner: self.owner.trim().to_string(),
      text: self.text.trim().to_string(),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_form_reports_both_fields() {
    let form = CommentForm::default();

    let errors = form.validate().unwrap_err();

    assert_eq!(
      errors,
      vec![CommentFormError::MissingOwner, CommentFormError::MissingText]
    );

    assert_eq!(errors[0].field(), Field::CommentOwner);
    assert_eq!(errors[1].field(), Field::CommentText);
  }

  #[test]
  fn whitespace_only_text_is_missing() {
    let form = CommentForm {
      owner: "anna".to_string(),
      text: "   ".to_string(),
    };

    assert_eq!(form.validate(), Err(vec![CommentFormError::MissingText]));
  }

  #[test]
  fn valid_form_produces_trimmed_submission() {
    let form = CommentForm {
      owner: " anna ".to_string(),
      text: "nice site\n".to_string(),
    };

    assert_eq!(
      form.validate(),
      Ok(CommentSubmission {
        owner: "anna".to_string(),
        text: "nice site".to_string(),
      })
    );
  }

  #[test]
  fn buffer_mut_only_covers_form_fields() {
    let mut form = CommentForm::default();

    form.buffer_mut(Field::CommentOwner).unwrap().push('a');

    assert_eq!(form.owner, "a");
    assert!(form.buffer_mut(Field::MaxComments).is_none());
  }
}
