use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::prelude::*;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use matchup_form::config::AppConfig;
use matchup_form::form::{self, FormRow};
use matchup_form::roster::{PlayerField, TeamSide};
use matchup_form::state::{apply_delta, AppState, Delta};

struct App {
    state: AppState,
    config: AppConfig,
    should_quit: bool,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let mut state = AppState::with_max_logs(config.max_logs);
        state.push_log("[INFO] Session started. Press ? for help");
        Self {
            state,
            config,
            should_quit: false,
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if self.state.is_editing() {
            self.on_edit_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.state.help_overlay = !self.state.help_overlay,
            KeyCode::Tab | KeyCode::BackTab => self.state.toggle_focus(),
            KeyCode::Char('h') | KeyCode::Left => self.state.focus_team(TeamSide::A),
            KeyCode::Char('l') | KeyCode::Right => self.state.focus_team(TeamSide::B),
            KeyCode::Char('j') | KeyCode::Down => self.state.select_next(),
            KeyCode::Char('k') | KeyCode::Up => self.state.select_prev(),
            KeyCode::Enter => self.state.begin_edit(),
            KeyCode::Char('+') | KeyCode::Char('=') => {
                if let Some(delta) = self.state.step_selected(1) {
                    apply_delta(&mut self.state, delta);
                }
            }
            KeyCode::Char('-') => {
                if let Some(delta) = self.state.step_selected(-1) {
                    apply_delta(&mut self.state, delta);
                }
            }
            KeyCode::Char('a') => {
                let team = self.state.focus;
                apply_delta(&mut self.state, Delta::AddPlayer { team });
                let last = self.state.roster.team(team).players.len().saturating_sub(1);
                self.state.select_player(team, last);
            }
            KeyCode::Char('x') => match self.state.remove_selected_player() {
                Some(delta) => apply_delta(&mut self.state, delta),
                None => self.state.push_log("[INFO] Move to a player row to remove it"),
            },
            KeyCode::Char('p') => apply_delta(&mut self.state, Delta::Predict),
            _ => {}
        }
    }

    fn on_edit_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if let Some(delta) = self.state.commit_edit() {
                    apply_delta(&mut self.state, delta);
                }
            }
            KeyCode::Esc => self.state.cancel_edit(),
            KeyCode::Backspace => self.state.pop_edit_char(),
            KeyCode::Char(c) => self.state.push_edit_char(c),
            _ => {}
        }
    }
}

fn main() -> io::Result<()> {
    let _ = dotenvy::from_filename(".env.local");
    let _ = dotenvy::from_filename(".env");
    let config = AppConfig::from_env();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = ratatui::backend::CrosstermBackend::new(stdout);
    let mut terminal = ratatui::Terminal::new(backend)?;

    let mut app = App::new(config);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("error: {err}");
    }
    Ok(())
}

fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> io::Result<()> {
    let tick_rate = app.config.tick_rate;
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui(f, app))?;

        let timeout = tick_rate
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.on_key(key);
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            last_tick = Instant::now();
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn ui(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length((app.config.console_lines as u16).saturating_add(2)),
            Constraint::Length(1),
        ])
        .split(frame.size());

    let header = Paragraph::new(header_text(&app.state))
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);
    render_team_panel(frame, panels[0], &app.state, TeamSide::A);
    render_team_panel(frame, panels[1], &app.state, TeamSide::B);

    let preds = Paragraph::new(prediction_text(&app.state))
        .block(Block::default().title("Predictions").borders(Borders::ALL));
    frame.render_widget(preds, chunks[2]);

    let console = Paragraph::new(console_text(&app.state, app.config.console_lines))
        .block(Block::default().title("Console").borders(Borders::ALL));
    frame.render_widget(console, chunks[3]);

    let footer = Paragraph::new(footer_text(&app.state)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, chunks[4]);

    if app.state.help_overlay {
        render_help_overlay(frame, frame.size());
    }
}

fn header_text(state: &AppState) -> String {
    let a = state.roster.team(TeamSide::A);
    let b = state.roster.team(TeamSide::B);
    let line1 = format!(
        "  MATCHUP FORM | Editing: {}",
        form::team_label(state.focus)
    );
    let line2 = format!(
        "  Team A {}-{} ({} players) vs Team B {}-{} ({} players)",
        a.wins,
        a.losses,
        a.players.len(),
        b.wins,
        b.losses,
        b.players.len()
    );
    format!("{line1}\n{line2}")
}

fn footer_text(state: &AppState) -> String {
    if state.is_editing() {
        "Enter Save | Esc Cancel | Backspace Delete".to_string()
    } else {
        "Tab Team | j/k/↑/↓ Move | Enter Edit | +/- Step | a Add Player | x Remove Player | p Predict | ? Help | q Quit".to_string()
    }
}

fn render_team_panel(frame: &mut Frame, area: Rect, state: &AppState, side: TeamSide) {
    let focused = state.focus == side;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .title(format!("{} Statistics", form::team_label(side)))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 || inner.width == 0 {
        return;
    }

    let (lines, selected_line) = team_panel_lines(state, side);
    let (start, _) = visible_range(selected_line, lines.len(), inner.height as usize);
    let paragraph = Paragraph::new(lines).scroll((start as u16, 0));
    frame.render_widget(paragraph, inner);
}

fn team_panel_lines(state: &AppState, side: TeamSide) -> (Vec<Line<'static>>, usize) {
    let team = state.roster.team(side);
    let focused = state.focus == side;
    let selected = state.selected(side);
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut selected_line = 0;
    for (idx, row) in state.rows(side).into_iter().enumerate() {
        if let FormRow::Player {
            index,
            field: PlayerField::Name,
        } = row
        {
            if index == 0 {
                lines.push(Line::from(""));
                lines.push(Line::styled(format!("{} Players", form::team_label(side)), heading));
            }
            lines.push(Line::styled(format!(" Player {}", index + 1), heading));
        }

        let is_selected = focused && idx == selected;
        if idx == selected {
            selected_line = lines.len();
        }
        lines.push(row_line(state, side, row, is_selected));
    }

    if team.players.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled(format!("{} Players", form::team_label(side)), heading));
        lines.push(Line::styled(
            "  No players (a to add)",
            Style::default().fg(Color::DarkGray),
        ));
    }

    (lines, selected_line)
}

fn row_line(state: &AppState, side: TeamSide, row: FormRow, selected: bool) -> Line<'static> {
    let label = match row {
        FormRow::Team(field) => format!(" {:<18}", form::team_field_label(field)),
        FormRow::Player { field, .. } => format!("   {:<20}", form::player_field_label(field)),
    };

    let editing = state
        .editing
        .as_ref()
        .filter(|edit| edit.team == side && edit.row == row);
    let (value, value_style) = match editing {
        Some(edit) => (
            format!("{}_", edit.buffer),
            Style::default().fg(Color::Yellow),
        ),
        None => (
            form::row_value(state.roster.team(side), row).unwrap_or_default(),
            Style::default(),
        ),
    };

    let row_style = if selected {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(label, row_style),
        Span::styled(value, value_style.patch(row_style)),
    ])
}

fn visible_range(selected: usize, total: usize, visible: usize) -> (usize, usize) {
    if total == 0 {
        return (0, 0);
    }
    if total <= visible {
        return (0, total);
    }

    let mut start = selected.saturating_sub(visible / 2);
    if start + visible > total {
        start = total - visible;
    }
    (start, start + visible)
}

fn prediction_text(state: &AppState) -> String {
    match &state.prediction {
        Some(prediction) => {
            let mut lines = vec![
                format!("Game Outcome: {}", prediction.game_outcome),
                "Player Props:".to_string(),
            ];
            for prop in &prediction.player_props {
                lines.push(format!("  {prop}"));
            }
            lines.join("\n")
        }
        None => "Press p to predict".to_string(),
    }
}

fn console_text(state: &AppState, lines: usize) -> String {
    if state.logs.is_empty() {
        return "No messages yet".to_string();
    }
    let start = state.logs.len().saturating_sub(lines);
    state
        .logs
        .iter()
        .skip(start)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);
    frame.render_widget(Clear, popup_area);

    let text = [
        "Matchup Form - Help",
        "",
        "Teams:",
        "  Tab / h / l  Switch Team A / Team B",
        "  j/k or ↑/↓   Move between fields",
        "  a            Add player",
        "  x            Remove player under cursor",
        "",
        "Fields:",
        "  Enter        Edit field (Enter saves, Esc cancels)",
        "  + / -        Step number by 1",
        "",
        "Global:",
        "  p            Predict",
        "  ?            Toggle help",
        "  q            Quit",
    ]
    .join("\n");

    let help = Paragraph::new(text)
        .block(Block::default().title("Help").borders(Borders::ALL))
        .style(Style::default());
    frame.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
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
