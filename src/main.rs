use {
  anyhow::{Context, bail},
  app::App,
  auth_status::AuthStatus,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_entry::CommentEntry,
  comment_form::{CommentForm, CommentSubmission},
  comment_page::CommentPage,
  comment_panel::CommentPanel,
  config::Config,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  effect::Effect,
  error_display::ErrorDisplay,
  event::Event,
  field::Field,
  help_view::HelpView,
  list_view::ListView,
  max_comments::parse_max_comments,
  pagination::{
    CommentQuery, PageDirection, PaginationError, PaginationState,
    PaginationStrategy,
  },
  pending_load::PendingLoad,
  quiz::{Answer, Feedback, FeedbackFlash, QUESTIONS, Quiz},
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Tabs, Wrap,
    },
  },
  reqwest::Url,
  serde::{
    Deserialize, Deserializer,
    de::{self, Unexpected},
  },
  serde_json::Value,
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env, fs,
    io::{self, IsTerminal, Stdout},
    path::{Path, PathBuf},
    process,
    time::{Duration, Instant},
  },
  tab::Tab,
  thiserror::Error,
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{
    deserialize_optional_string, format_date, sanitize_comment, truncate,
    wrap_text,
  },
};

mod app;
mod auth_status;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_entry;
mod comment_form;
mod comment_page;
mod comment_panel;
mod config;
mod effect;
mod error_display;
mod event;
mod field;
mod help_view;
mod list_view;
mod logging;
mod max_comments;
mod pagination;
mod pending_load;
mod quiz;
mod state;
mod tab;
mod transient_message;
mod utils;

const COMMENTS_PATH: &str = "comments";

const COMMENTS_STATUS: &str = "↑/k ↓/j select • ←/→ page • m max comments • c name • t comment • r reload • tab quiz • ? help";

const QUIZ_STATUS: &str =
  "enter start • ← left answer • → right answer • tab comments • ? help";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const LOADING_COMMENTS_STATUS: &str = "Loading comments...";
const DELETING_COMMENTS_STATUS: &str = "Deleting all comments...";
const POSTING_COMMENT_STATUS: &str = "Posting comment...";
const CHECKING_AUTH_STATUS: &str = "Checking login status...";

const QUIZ_TITLE: &str = "Superfun quiz";
const QUIZ_START_PROMPT: &str = "Press enter to start the quiz.";

const BASE_INDENT: &str = " ";

const TRANSIENT_MESSAGE_TTL: Duration = Duration::from_secs(3);

const HELP_TEXT: &str = "\
General:
  tab     switch between comments and quiz
  q       quit
  esc     cancel editing, close help or quit
  ?       toggle this help

Comments:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     scroll down (or ctrl+d)
  pg↑     scroll up (or ctrl+u)
  → / l   next page
  ← / h   previous page
  m       set how many comments to show
  c       edit your name
  t       edit your comment
  enter   submit the field being edited
  r       reload the first page
  D       delete all comments
  a       open the login/logout link

Quiz:
  enter   start the quiz
  ← / h   pick the left answer
  → / l   pick the right answer
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let config = Config::load().context("could not load configuration")?;

  let _guard = logging::initialize()?;

  tracing::info!(
    base_url = %config.base_url,
    pagination = ?config.pagination,
    "starting folio"
  );

  let client = Client::new(config.base_url()?, config.pagination)?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, State::new(&config));

  let result = app.run(&mut terminal);

  restore_terminal(&mut terminal)?;

  result
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
