use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(entry: &CommentEntry, available_width: u16) -> ListItem {
    let mut lines = vec![Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(entry.header(), Style::default().fg(Color::White)),
    ])];

    let wrap_width = usize::from(available_width)
      .saturating_sub(BASE_INDENT.chars().count())
      .max(1);

    for line in wrap_text(entry.body(), wrap_width) {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(line, Style::default().fg(Color::Gray)),
      ]));
    }

    if let Some(url) = &entry.image_url {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          format!("[image] {}", truncate(url, wrap_width)),
          Style::default().fg(Color::DarkGray),
        ),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    let active_tab = self.state.active_tab();

    let tab_titles: Vec<Line> = Tab::ALL
      .iter()
      .map(|tab| Line::from(tab.label().to_uppercase()))
      .collect();

    let selected = Tab::ALL
      .iter()
      .position(|tab| *tab == active_tab)
      .unwrap_or(0);

    let tabs_widget = Tabs::new(tab_titles)
      .select(selected)
      .style(Style::default().fg(Color::DarkGray))
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .divider(Span::raw(" "));

    frame.render_widget(tabs_widget, layout[0]);

    if let Some(auth) = self.state.auth() {
      let auth_widget = Paragraph::new(auth.label())
        .alignment(Alignment::Right)
        .style(Style::default().fg(Color::DarkGray));

      frame.render_widget(auth_widget, layout[0]);
    }

    match active_tab {
      Tab::Comments => self.draw_comments(frame, layout[1]),
      Tab::Quiz => self.draw_quiz(frame, layout[1]),
    }

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    self.state.help().draw(frame);
  }

  fn draw_comments(&mut self, frame: &mut Frame, area: Rect) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .constraints([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
      ])
      .split(area);

    let max_comments = if self.state.focus() == Some(Field::MaxComments) {
      self.state.max_comments_input().to_string()
    } else {
      self.state.comments().max_comments().to_string()
    };

    self.draw_field(
      frame,
      layout[0],
      layout[1],
      Field::MaxComments,
      &max_comments,
    );

    self.state.set_list_height(usize::from(layout[2].height));

    let is_loading = self.state.comments().is_loading();
    let view = self.state.comments().entries();

    let list_items: Vec<ListItem> = if view.is_empty() {
      let text = if is_loading {
        LOADING_COMMENTS_STATUS
      } else {
        "No comments yet."
      };

      vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(text),
      ]))]
    } else {
      view
        .items()
        .iter()
        .map(|entry| Self::comment_list_item(entry, layout[2].width))
        .collect()
    };

    let mut list_state = ListState::default()
      .with_selected(view.selected_index())
      .with_offset(view.offset());

    let list = List::new(list_items).highlight_style(
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    );

    frame.render_stateful_widget(list, layout[2], &mut list_state);

    self
      .state
      .comments_mut()
      .entries_mut()
      .set_offset(list_state.offset());

    let owner = self.state.comment_form().owner.clone();
    let text = self.state.comment_form().text.clone();

    self.draw_field(frame, layout[3], layout[4], Field::CommentOwner, &owner);
    self.draw_field(frame, layout[5], layout[6], Field::CommentText, &text);
  }

  fn draw_field(
    &self,
    frame: &mut Frame,
    area: Rect,
    error_area: Rect,
    field: Field,
    value: &str,
  ) {
    let border_color = if self.state.errors().is_marked(field) {
      Color::Red
    } else if self.state.focus() == Some(field) {
      Color::Cyan
    } else {
      Color::DarkGray
    };

    let input = Paragraph::new(value.to_string()).block(
      Block::default()
        .title(field.label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color)),
    );

    frame.render_widget(input, area);

    if let Some(message) = self.state.errors().message(field) {
      let error = Paragraph::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
      ]));

      frame.render_widget(error, error_area);
    }
  }

  fn draw_quiz(&self, frame: &mut Frame, area: Rect) {
    let quiz = self.state.quiz();

    let mut lines = vec![
      Line::from(Span::styled(
        QUIZ_TITLE,
        Style::default()
          .fg(Color::White)
          .add_modifier(Modifier::BOLD),
      )),
      Line::from(""),
    ];

    if let Some(summary) = quiz.summary() {
      lines.push(Line::from(summary));
    } else if let Some(question) = quiz.current_question() {
      lines.push(Line::from(format!("Current score: {}", quiz.score())));
      lines.push(Line::from(""));
      lines.push(Line::from(Span::styled(
        question.prompt,
        Style::default().fg(Color::Cyan),
      )));
      lines.push(Line::from(""));
      lines.push(Line::from(format!(
        "← {}    {} →",
        question.left, question.right
      )));
      lines.push(Line::from(""));

      if let Some(feedback) = self.state.quiz_feedback() {
        let color = match feedback {
          Feedback::Correct => Color::Green,
          Feedback::Wrong => Color::Red,
        };

        lines.push(Line::from(Span::styled(
          feedback.text(),
          Style::default().fg(color),
        )));
      }
    } else {
      lines.push(Line::from(QUIZ_START_PROMPT));
    }

    let body = Paragraph::new(lines)
      .block(Block::default().borders(Borders::ALL))
      .wrap(Wrap { trim: true });

    frame.render_widget(body, area);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::FetchComments { query, request_id } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Comments {
            request_id,
            result: client.fetch_comments(&query).await,
          });
        });
      }
      Effect::DeleteAllComments => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentsDeleted {
            result: client.delete_all_comments().await,
          });
        });
      }
      Effect::PostComment { submission } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::CommentPosted {
            result: client.add_comment(&submission).await,
          });
        });
      }
      Effect::FetchAuthStatus => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::AuthStatus {
            result: client.fetch_auth_status().await,
          });
        });
      }
      Effect::OpenUrl { url } => match webbrowser::open(&url) {
        Ok(()) => {
          tracing::info!(%url, "opened in browser");

          self.state.set_transient_message(format!(
            "Opened in browser: {}",
            truncate(&url, 80)
          ));
        }
        Err(error) => {
          tracing::warn!(%url, "could not open link: {error}");

          self
            .state
            .set_transient_message(format!("Could not open link: {error}"));
        }
      },
    }
  }

  pub(crate) fn new(client: Client, state: State) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state,
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_timers(Instant::now());

    while let Ok(event) = self.event_rx.try_recv() {
      for effect in self.state.handle_event(event) {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    for effect in self.state.start() {
      self.execute_effect(effect);
    }

    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        continue;
      };

      if key.kind != KeyEventKind::Press {
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.input_command(key) {
        command
      } else {
        self.state.active_tab().handle_key(key)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }
        }
        Err(error) => {
          tracing::error!("command failed: {error:#}");
          self.state.set_transient_message(format!("error: {error}"));
        }
      }
    }

    Ok(())
  }
}
