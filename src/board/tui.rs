use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Utc};
use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Frame;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::board::client::ApiClient;
use crate::board::error::BoardError;
use crate::board::format::{
    cost_label, description_preview, needs_expansion, skills_label, time_ago,
};
use crate::board::model::Job;
use crate::board::state::{Board, FormFocus};

/// Messages delivered to the event loop by the one-shot worker threads
enum BoardEvent {
    JobsFetched(Result<Vec<Job>, BoardError>),
    OfferSubmitted(Result<(), BoardError>),
}

struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self, BoardError> {
        enable_raw_mode()?;
        io::stdout().execute(EnterAlternateScreen)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}

/// Run the board against a backend at `api_url` until the user quits
pub fn run(api_url: &str) -> Result<(), BoardError> {
    let client = ApiClient::new(api_url);
    let (event_tx, event_rx) = mpsc::channel::<BoardEvent>();

    // One fetch per session; no retry on failure.
    {
        let client = client.clone();
        let event_tx = event_tx.clone();
        thread::spawn(move || {
            let _ = event_tx.send(BoardEvent::JobsFetched(client.fetch_jobs()));
        });
    }

    let _guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut board = Board::new();

    loop {
        while let Ok(event) = event_rx.try_recv() {
            match event {
                BoardEvent::JobsFetched(result) => {
                    board.jobs_loaded(result.map_err(|e| e.to_string()));
                }
                BoardEvent::OfferSubmitted(result) => {
                    board.offer_submitted(result.map_err(|e| e.to_string()));
                }
            }
        }

        terminal.draw(|frame| draw(frame, &board))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if is_quit(&key) {
                    break;
                }
                if board.modal_open() {
                    handle_modal_key(key.code, &mut board, &client, &event_tx);
                } else if !handle_list_key(key.code, &mut board) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn is_quit(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Keys outside the modal; returns false when the user quits
fn handle_list_key(code: KeyCode, board: &mut Board) -> bool {
    match code {
        KeyCode::Esc => return false,
        KeyCode::Up => board.cursor_up(),
        KeyCode::Down => board.cursor_down(),
        KeyCode::Enter => board.open_modal(),
        KeyCode::Backspace => board.pop_filter_char(),
        KeyCode::Char(ch) => board.push_filter_char(ch),
        _ => {}
    }
    true
}

fn handle_modal_key(
    code: KeyCode,
    board: &mut Board,
    client: &ApiClient,
    event_tx: &mpsc::Sender<BoardEvent>,
) {
    match code {
        KeyCode::Esc => board.close_modal(),
        KeyCode::Tab => board.toggle_focus(),
        KeyCode::Enter => {
            if let Some(submission) = board.begin_submit() {
                let client = client.clone();
                let event_tx = event_tx.clone();
                thread::spawn(move || {
                    let result = client.submit_offer(
                        submission.job_id,
                        &submission.amount,
                        &submission.description,
                    );
                    let _ = event_tx.send(BoardEvent::OfferSubmitted(result));
                });
            }
        }
        KeyCode::Backspace => board.pop_form_char(),
        KeyCode::Char(ch) => board.push_form_char(ch),
        _ => {}
    }
}

fn draw(frame: &mut Frame, board: &Board) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new("Trabajos Publicados")
        .style(Style::default().add_modifier(Modifier::BOLD));
    frame.render_widget(header, layout[0]);

    let filter = Paragraph::new(board.filter_skill.as_str()).block(
        Block::default()
            .title("Buscar por habilidades")
            .borders(Borders::ALL),
    );
    frame.render_widget(filter, layout[1]);

    render_body(frame, layout[2], board);

    let help = if board.modal_open() {
        "Tab: cambiar campo | Enter: enviar oferta | Esc: cerrar"
    } else {
        "↑/↓: moverse | Enter: postularse | Esc: salir"
    };
    frame.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        layout[3],
    );

    if board.modal_open() {
        render_modal(frame, board);
    }
}

fn render_body(frame: &mut Frame, area: Rect, board: &Board) {
    if board.loading {
        frame.render_widget(Paragraph::new("Cargando trabajos..."), area);
        return;
    }

    if let Some(error) = &board.error {
        let message = Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red));
        frame.render_widget(message, area);
        return;
    }

    let now = Utc::now();
    let items: Vec<ListItem> = board
        .visible_jobs()
        .into_iter()
        .map(|job| job_card(job, now))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL))
        .highlight_style(Style::default().bg(Color::DarkGray));

    let mut state = ListState::default();
    state.select(Some(board.cursor));
    frame.render_stateful_widget(list, area, &mut state);
}

fn job_card(job: &Job, now: DateTime<Utc>) -> ListItem<'static> {
    let subtitle = format!(
        "Costo estimado: {} | Publicado {}",
        cost_label(job.cost),
        time_ago(job.posted_at, now)
    );

    let mut preview_spans = vec![Span::raw(description_preview(job.description.as_deref()))];
    if needs_expansion(job.description.as_deref()) {
        preview_spans.push(Span::styled(
            " Ver más",
            Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    let lines = vec![
        Line::from(Span::styled(
            job.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            subtitle,
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(preview_spans),
        Line::from(format!(
            "Habilidades necesarias: {}",
            skills_label(job.skills.as_deref())
        )),
        Line::from(""),
    ];

    ListItem::new(lines)
}

fn render_modal(frame: &mut Frame, board: &Board) {
    let Some(job) = &board.selected_job else {
        return;
    };

    let area = centered_rect(frame.size(), 80, 80);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(job.title.clone())
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let description = job
        .description
        .clone()
        .unwrap_or_else(|| "Sin descripción".to_string());
    frame.render_widget(Paragraph::new(description).wrap(Wrap { trim: false }), layout[0]);

    frame.render_widget(
        Paragraph::new(format!(
            "Habilidades necesarias: {}",
            skills_label(job.skills.as_deref())
        ))
        .style(Style::default().fg(Color::DarkGray)),
        layout[1],
    );

    let amount = Paragraph::new(board.offer_amount.as_str()).block(
        field_block("Tu oferta ($)", board.focus == FormFocus::Amount),
    );
    frame.render_widget(amount, layout[2]);

    let description_field = Paragraph::new(board.offer_description.as_str())
        .wrap(Wrap { trim: false })
        .block(field_block(
            "Describe tu propuesta",
            board.focus == FormFocus::Description,
        ));
    frame.render_widget(description_field, layout[3]);

    let status = if board.submitting {
        Span::styled("Enviando oferta...", Style::default().fg(Color::Yellow))
    } else if let Some(alert) = &board.alert {
        Span::styled(alert.clone(), Style::default().fg(Color::Red))
    } else {
        Span::raw("")
    };
    frame.render_widget(Paragraph::new(Line::from(status)), layout[4]);
}

fn field_block(title: &str, focused: bool) -> Block<'_> {
    let style = if focused {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style)
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}
