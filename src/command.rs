use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Command {
  AnswerLeft,
  AnswerRight,
  CancelInput,
  DeleteAllComments,
  EditField(Field),
  HideHelp,
  InputBackspace,
  InputChar(char),
  NextField,
  NextPage,
  None,
  OpenAuthLink,
  PageDown,
  PageUp,
  PreviousPage,
  Quit,
  ReloadComments,
  SelectNext,
  SelectPrevious,
  ShowHelp,
  StartQuiz,
  SubmitInput,
  SwitchTab,
}
