use super::*;

pub(crate) const QUESTIONS: &[Question] = &[
  Question {
    left: "Petr I",
    prompt: "Who is the first Russian tsar?",
    right: "Ivan IV",
  },
  Question {
    left: "Pushkin",
    prompt: "Who of these people has ever been to Sakhalin?",
    right: "Checkov",
  },
  Question {
    left: "Russian scientist",
    prompt: "Who is Checkov?",
    right: "Russian writer",
  },
  Question {
    left: "Russian musician",
    prompt: "Who is Pushkin?",
    right: "Russian poet",
  },
  Question {
    left: "a city",
    prompt: "What is Sakhalin?",
    right: "an island",
  },
  Question {
    left: "I don't know!",
    prompt: "What is the purpose of this quiz?",
    right: "I like Russia!",
  },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Question {
  pub(crate) left: &'static str,
  pub(crate) prompt: &'static str,
  pub(crate) right: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Answer {
  Left,
  Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Feedback {
  Correct,
  Wrong,
}

impl Feedback {
  pub(crate) fn text(self) -> &'static str {
    match self {
      Self::Correct => "Correct!",
      Self::Wrong => "Wrong!",
    }
  }
}

#[derive(Clone, Copy, Debug)]
pub(crate) struct FeedbackFlash {
  pub(crate) expires_at: Instant,
  pub(crate) feedback: Feedback,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Quiz {
  Finished {
    score: usize,
    total: usize,
  },
  NotStarted,
  Playing {
    current_question: usize,
    questions: &'static [Question],
    score: usize,
  },
}

impl Quiz {
  pub(crate) fn answer(&mut self, answer: Answer) -> Option<Feedback> {
    let Self::Playing {
      current_question,
      questions,
      score,
    } = self
    else {
      return None;
    };

    let feedback = match answer {
      Answer::Left => Feedback::Wrong,
      Answer::Right => {
        *score += 1;
        Feedback::Correct
      }
    };

    *current_question += 1;

    if *current_question >= questions.len() {
      let (score, total) = (*score, questions.len());
      *self = Self::Finished { score, total };
    }

    Some(feedback)
  }

  pub(crate) fn current_question(&self) -> Option<&Question> {
    match self {
      Self::Playing {
        current_question,
        questions,
        ..
      } => questions.get(*current_question),
      _ => None,
    }
  }

  pub(crate) fn is_finished(&self) -> bool {
    matches!(self, Self::Finished { .. })
  }

  pub(crate) fn score(&self) -> usize {
    match self {
      Self::Finished { score, .. } | Self::Playing { score, .. } => *score,
      Self::NotStarted => 0,
    }
  }

  // No restart once a game has begun.
  pub(crate) fn start(&mut self, questions: &'static [Question]) {
    if !matches!(self, Self::NotStarted) {
      return;
    }

    *self = if questions.is_empty() {
      Self::Finished { score: 0, total: 0 }
    } else {
      Self::Playing {
        current_question: 0,
        questions,
        score: 0,
      }
    };
  }

  pub(crate) fn summary(&self) -> Option<String> {
    match self {
      Self::Finished { score, total } => Some(format!(
        "Your score: {score}/{total}. Thank you for playing! By the way, that's true, the right answer is always right :)"
      )),
      _ => None,
    }
  }
}
