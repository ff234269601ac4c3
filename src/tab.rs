use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Tab {
  Comments,
  Quiz,
}

impl Tab {
  pub(crate) const ALL: [Tab; 2] = [Tab::Comments, Tab::Quiz];

  pub(crate) fn handle_key(self, key: KeyEvent) -> Command {
    let modifiers = key.modifiers;

    match (self, key.code) {
      (_, KeyCode::Char('q' | 'Q') | KeyCode::Esc) => Command::Quit,
      (_, KeyCode::Char('?')) => Command::ShowHelp,
      (_, KeyCode::Tab | KeyCode::BackTab) => Command::SwitchTab,
      (Tab::Comments, KeyCode::Down | KeyCode::Char('j')) => {
        Command::SelectNext
      }
      (Tab::Comments, KeyCode::Up | KeyCode::Char('k')) => {
        Command::SelectPrevious
      }
      (Tab::Comments, KeyCode::PageDown) => Command::PageDown,
      (Tab::Comments, KeyCode::PageUp) => Command::PageUp,
      (Tab::Comments, KeyCode::Char('d'))
        if modifiers.contains(KeyModifiers::CONTROL) =>
      {
        Command::PageDown
      }
      (Tab::Comments, KeyCode::Char('u'))
        if modifiers.contains(KeyModifiers::CONTROL) =>
      {
        Command::PageUp
      }
      (Tab::Comments, KeyCode::Right | KeyCode::Char('l' | 'n')) => {
        Command::NextPage
      }
      (Tab::Comments, KeyCode::Left | KeyCode::Char('h' | 'p')) => {
        Command::PreviousPage
      }
      (Tab::Comments, KeyCode::Char('m')) => {
        Command::EditField(Field::MaxComments)
      }
      (Tab::Comments, KeyCode::Char('c')) => {
        Command::EditField(Field::CommentOwner)
      }
      (Tab::Comments, KeyCode::Char('t')) => {
        Command::EditField(Field::CommentText)
      }
      (Tab::Comments, KeyCode::Char('r')) => Command::ReloadComments,
      (Tab::Comments, KeyCode::Char('D')) => Command::DeleteAllComments,
      (Tab::Comments, KeyCode::Char('a')) => Command::OpenAuthLink,
      (Tab::Quiz, KeyCode::Enter | KeyCode::Char('s')) => Command::StartQuiz,
      (Tab::Quiz, KeyCode::Left | KeyCode::Char('h')) => Command::AnswerLeft,
      (Tab::Quiz, KeyCode::Right | KeyCode::Char('l')) => Command::AnswerRight,
      _ => Command::None,
    }
  }

  pub(crate) fn label(self) -> &'static str {
    match self {
      Self::Comments => "comments",
      Self::Quiz => "quiz",
    }
  }

  pub(crate) fn next(self) -> Self {
    match self {
      Self::Comments => Self::Quiz,
      Self::Quiz => Self::Comments,
    }
  }

  pub(crate) fn status(self) -> &'static str {
    match self {
      Self::Comments => COMMENTS_STATUS,
      Self::Quiz => QUIZ_STATUS,
    }
  }
}

#[cfg(test)]
mod tests {
  use {super::*, crossterm::event::KeyEventState};

  fn key(code: KeyCode) -> KeyEvent {
    KeyEvent {
      code,
      kind: KeyEventKind::Press,
      modifiers: KeyModifiers::NONE,
      state: KeyEventState::NONE,
    }
  }

  #[test]
  fn arrows_page_comments_and_answer_quiz() {
    assert_eq!(Tab::Comments.handle_key(key(KeyCode::Right)), Command::NextPage);
    assert_eq!(
      Tab::Comments.handle_key(key(KeyCode::Left)),
      Command::PreviousPage
    );
    assert_eq!(Tab::Quiz.handle_key(key(KeyCode::Right)), Command::AnswerRight);
    assert_eq!(Tab::Quiz.handle_key(key(KeyCode::Left)), Command::AnswerLeft);
  }

  #[test]
  fn field_keys_activate_fields() {
    assert_eq!(
      Tab::Comments.handle_key(key(KeyCode::Char('m'))),
      Command::EditField(Field::MaxComments)
    );

    assert_eq!(Tab::Quiz.handle_key(key(KeyCode::Char('m'))), Command::None);
  }

  #[test]
  fn tab_key_cycles_between_tabs() {
    assert_eq!(Tab::Comments.handle_key(key(KeyCode::Tab)), Command::SwitchTab);
    assert_eq!(Tab::Comments.next(), Tab::Quiz);
    assert_eq!(Tab::Quiz.next(), Tab::Comments);
  }
}
