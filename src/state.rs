use super::*;

pub(crate) struct State {
  active_tab: Tab,
  auth: Option<AuthStatus>,
  comment_form: CommentForm,
  comments: CommentPanel,
  errors: ErrorDisplay,
  feedback_duration: Duration,
  focus: Option<Field>,
  help: HelpView,
  list_height: usize,
  max_comments_cap: usize,
  max_comments_input: String,
  message: String,
  message_backup: Option<String>,
  next_request_id: u64,
  pending_effects: Vec<Effect>,
  quiz: Quiz,
  quiz_feedback: Option<FeedbackFlash>,
  transient_message: Option<TransientMessage>,
}

impl State {
  pub(crate) fn active_tab(&self) -> Tab {
    self.active_tab
  }

  fn answer_quiz(&mut self, answer: Answer) {
    let Some(feedback) = self.quiz.answer(answer) else {
      return;
    };

    tracing::debug!(?answer, ?feedback, score = self.quiz.score(), "quiz answer");

    self.quiz_feedback = if self.quiz.is_finished() {
      None
    } else {
      Some(FeedbackFlash {
        expires_at: Instant::now() + self.feedback_duration,
        feedback,
      })
    };
  }

  pub(crate) fn auth(&self) -> Option<&AuthStatus> {
    self.auth.as_ref()
  }

  fn buffer_mut(&mut self, field: Field) -> &mut String {
    match self.comment_form.buffer_mut(field) {
      Some(buffer) => buffer,
      None => &mut self.max_comments_input,
    }
  }

  fn cancel_input(&mut self) {
    if self.focus.take().is_some() {
      self.restore_message();
    }
  }

  pub(crate) fn comment_form(&self) -> &CommentForm {
    &self.comment_form
  }

  pub(crate) fn comments(&self) -> &CommentPanel {
    &self.comments
  }

  pub(crate) fn comments_mut(&mut self) -> &mut CommentPanel {
    &mut self.comments
  }

  fn delete_all_comments(&mut self) {
    if !self.help.is_visible() {
      self.message = DELETING_COMMENTS_STATUS.into();
    }

    self.pending_effects.push(Effect::DeleteAllComments);
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::SwitchTab => self.switch_tab(),
      Command::SelectNext => self.comments.entries_mut().move_by(1),
      Command::SelectPrevious => self.comments.entries_mut().move_by(-1),
      Command::PageDown => self.page_down(),
      Command::PageUp => self.page_up(),
      Command::NextPage => self.request_page(Some(PageDirection::Next)),
      Command::PreviousPage => {
        self.request_page(Some(PageDirection::Previous));
      }
      Command::ReloadComments => {
        self.load_comments(self.comments.max_comments());
      }
      Command::DeleteAllComments => self.delete_all_comments(),
      Command::EditField(field) => self.edit_field(field),
      Command::InputChar(ch) => self.input_char(ch),
      Command::InputBackspace => self.input_backspace(),
      Command::NextField => self.next_field(),
      Command::SubmitInput => self.submit_input(),
      Command::CancelInput => self.cancel_input(),
      Command::OpenAuthLink => self.open_auth_link(),
      Command::StartQuiz => self.quiz.start(QUESTIONS),
      Command::AnswerLeft => self.answer_quiz(Answer::Left),
      Command::AnswerRight => self.answer_quiz(Answer::Right),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: self.take_pending_effects(),
      should_exit,
    })
  }

  fn edit_field(&mut self, field: Field) {
    self.errors.dismiss(field);

    if self.focus.is_none() {
      self.message_backup = Some(self.message.clone());
    }

    self.focus = Some(field);

    if field == Field::MaxComments {
      self.max_comments_input.clear();
    }

    self.update_input_message();
  }

  pub(crate) fn errors(&self) -> &ErrorDisplay {
    &self.errors
  }

  pub(crate) fn focus(&self) -> Option<Field> {
    self.focus
  }

  pub(crate) fn handle_event(&mut self, event: Event) -> Vec<Effect> {
    match event {
      Event::Comments { request_id, result } => match result {
        Ok(page) => {
          let count = page.comments.len();

          if self.comments.apply(request_id, page) {
            tracing::info!(request_id, count, "comments loaded");
            self.restore_idle_status();
          }
        }
        Err(error) => {
          if self.comments.take_pending(request_id) {
            tracing::warn!(request_id, "load comments fetch error: {error:#}");
            self.restore_idle_status();
          }
        }
      },
      Event::CommentsDeleted { result } => match result {
        Ok(()) => {
          tracing::info!("all comments deleted");
          self.load_comments(0);
        }
        Err(error) => {
          tracing::warn!("delete all comments error: {error:#}");
          self.restore_idle_status();
        }
      },
      Event::CommentPosted { result } => match result {
        Ok(()) => {
          tracing::info!("comment posted");
          self.comment_form.clear();
          self.load_comments(self.comments.max_comments());
        }
        Err(error) => {
          tracing::warn!("post comment error: {error:#}");
          self.restore_idle_status();
        }
      },
      Event::AuthStatus { result } => match result {
        Ok(status) => {
          tracing::info!(logged_in = status.is_logged_in, "auth status");
          self.auth = Some(status);
        }
        Err(error) => {
          tracing::warn!("auth status error: {error:#}");
        }
      },
    }

    self.take_pending_effects()
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  fn input_backspace(&mut self) {
    if let Some(field) = self.focus {
      self.buffer_mut(field).pop();
      self.update_input_message();
    }
  }

  fn input_char(&mut self, ch: char) {
    if let Some(field) = self.focus {
      self.buffer_mut(field).push(ch);
      self.update_input_message();
    }
  }

  pub(crate) fn input_command(&self, key: KeyEvent) -> Option<Command> {
    self.focus?;

    let modifiers = key.modifiers;

    Some(match key.code {
      KeyCode::Esc => Command::CancelInput,
      KeyCode::Enter => Command::SubmitInput,
      KeyCode::Tab | KeyCode::BackTab => Command::NextField,
      KeyCode::Backspace => Command::InputBackspace,
      KeyCode::Char(ch) => {
        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          Command::None
        } else {
          Command::InputChar(ch)
        }
      }
      _ => Command::None,
    })
  }

  fn load_comments(&mut self, max_comments: usize) {
    self.comments.reset(max_comments);
    self.request_page(None);
  }

  pub(crate) fn max_comments_input(&self) -> &str {
    &self.max_comments_input
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(config: &Config) -> Self {
    Self {
      active_tab: Tab::Comments,
      auth: None,
      comment_form: CommentForm::default(),
      comments: CommentPanel::new(
        config.pagination,
        config.default_max_comments,
      ),
      errors: ErrorDisplay::new(config.error_timeout()),
      feedback_duration: config.feedback_duration(),
      focus: None,
      help: HelpView::new(),
      list_height: 0,
      max_comments_cap: config.max_comments_cap,
      max_comments_input: String::new(),
      message: COMMENTS_STATUS.into(),
      message_backup: None,
      next_request_id: 0,
      pending_effects: Vec::new(),
      quiz: Quiz::NotStarted,
      quiz_feedback: None,
      transient_message: None,
    }
  }

  fn next_field(&mut self) {
    let next = match self.focus {
      Some(Field::CommentOwner) => Field::CommentText,
      Some(Field::CommentText) => Field::CommentOwner,
      _ => return,
    };

    self.edit_field(next);
  }

  fn next_request_id(&mut self) -> u64 {
    let request_id = self.next_request_id;
    self.next_request_id = self.next_request_id.wrapping_add(1);
    request_id
  }

  fn open_auth_link(&mut self) {
    match &self.auth {
      Some(status) => {
        let url = status.url.clone();
        self.pending_effects.push(Effect::OpenUrl { url });
      }
      None => {
        self.set_transient_message(CHECKING_AUTH_STATUS.into());
        self.pending_effects.push(Effect::FetchAuthStatus);
      }
    }
  }

  fn page_down(&mut self) {
    let jump = self.page_jump();
    self.comments.entries_mut().move_by(jump);
  }

  fn page_jump(&self) -> isize {
    isize::try_from(self.list_height.saturating_sub(1).max(1))
      .unwrap_or(isize::MAX)
  }

  fn page_up(&mut self) {
    let jump = self.page_jump();
    self.comments.entries_mut().move_by(-jump);
  }

  pub(crate) fn quiz(&self) -> &Quiz {
    &self.quiz
  }

  pub(crate) fn quiz_feedback(&self) -> Option<Feedback> {
    self.quiz_feedback.map(|flash| flash.feedback)
  }

  fn request_page(&mut self, direction: Option<PageDirection>) {
    let query = match self.comments.query(direction) {
      Ok(query) => query,
      Err(error) => {
        self.set_transient_message(error.to_string());
        return;
      }
    };

    let request_id = self.next_request_id();

    self.comments.begin(request_id, direction);

    if !self.help.is_visible() && self.focus.is_none() {
      self.message = LOADING_COMMENTS_STATUS.into();
    }

    self
      .pending_effects
      .push(Effect::FetchComments { query, request_id });
  }

  fn restore_idle_status(&mut self) {
    if !self.help.is_visible() && self.focus.is_none() {
      self.message = COMMENTS_STATUS.into();
    }
  }

  fn restore_message(&mut self) {
    self.message = self
      .message_backup
      .take()
      .unwrap_or_else(|| self.active_tab.status().into());
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  pub(crate) fn start(&mut self) -> Vec<Effect> {
    self.load_comments(self.comments.max_comments());
    self.pending_effects.push(Effect::FetchAuthStatus);
    self.take_pending_effects()
  }

  fn submit_comment_form(&mut self) {
    match self.comment_form.validate() {
      Ok(submission) => {
        self.pending_effects.push(Effect::PostComment { submission });
        self.message = POSTING_COMMENT_STATUS.into();
      }
      Err(errors) => {
        for error in errors {
          self.errors.show(error.field(), error.to_string());
        }
      }
    }
  }

  fn submit_input(&mut self) {
    let Some(field) = self.focus.take() else {
      return;
    };

    self.restore_message();

    match field {
      Field::MaxComments => {
        match parse_max_comments(&self.max_comments_input, self.max_comments_cap)
        {
          Ok(max_comments) => self.load_comments(max_comments),
          Err(error) => self.errors.show(field, error.to_string()),
        }
      }
      Field::CommentOwner | Field::CommentText => self.submit_comment_form(),
    }
  }

  fn switch_tab(&mut self) {
    self.cancel_input();
    self.active_tab = self.active_tab.next();

    if !self.help.is_visible() {
      self.message = self.active_tab.status().into();
    }
  }

  fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn update_input_message(&mut self) {
    if let Some(field) = self.focus {
      let value = match field {
        Field::MaxComments => self.max_comments_input.as_str(),
        Field::CommentOwner => self.comment_form.owner.as_str(),
        Field::CommentText => self.comment_form.text.as_str(),
      };

      self.message = truncate(&format!("{}: {value}", field.label()), 80);
    }
  }

  pub(crate) fn update_timers(&mut self, now: Instant) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired(now) {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }

    let expired = self.errors.expire(now);

    if expired > 0 {
      tracing::debug!(expired, "field errors timed out");
    }

    if self
      .quiz_feedback
      .is_some_and(|flash| now >= flash.expires_at)
    {
      self.quiz_feedback = None;
    }
  }
}
