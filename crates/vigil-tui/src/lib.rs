// Copyright 2026 Phillip Cloud
// Licensed under the Apache License, Version 2.0

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{execute, terminal};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, TableState, Tabs};
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;
use tracing::{debug, info, warn};
use vigil_app::{
    AppCommand, AppMode, AppState, BadgeTone, ListView, RouterError, RouterEvent, Screen,
    ScreenAction, ScreenRouter, SummaryCard, SummaryScreen, TableCell, ViewLabel,
    active_shell_mut, badge_tone, focused_label, focused_screen, focused_screen_mut, router_chain,
};

pub const DEFAULT_STATUS_CLEAR: Duration = Duration::from_secs(4);
const POLL_INTERVAL: Duration = Duration::from_millis(120);
const PERCENT_BAR_WIDTH: usize = 10;
const DETAIL_MARK: &str = "↳";
const EXPANDED_MARK: &str = "▾";
const COLLAPSED_MARK: &str = "▸";

/// The rows a screen currently shows, as displayed, handed to the runtime
/// along with an action request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleRows {
    pub view: ViewLabel,
    pub title: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

pub trait AppRuntime {
    /// Carries out a screen action. The returned text goes to the status bar.
    fn request_action(
        &mut self,
        view: ViewLabel,
        action: ScreenAction,
        rows: &VisibleRows,
    ) -> Result<String>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InternalEvent {
    ClearStatus { token: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ViewData {
    selected_row: usize,
    chip_cursor: usize,
    status_token: u64,
    status_clear: Duration,
}

impl Default for ViewData {
    fn default() -> Self {
        Self {
            selected_row: 0,
            chip_cursor: 0,
            status_token: 0,
            status_clear: DEFAULT_STATUS_CLEAR,
        }
    }
}

pub fn run_app<R: AppRuntime>(
    state: &mut AppState,
    root: &mut ScreenRouter,
    runtime: &mut R,
    status_clear: Duration,
) -> Result<()> {
    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, terminal::EnterAlternateScreen).context("enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let mut view_data = ViewData {
        status_clear,
        ..ViewData::default()
    };
    let (internal_tx, internal_rx) = mpsc::channel();
    info!(view = ?focused_label(root), "dashboard started");

    let mut result = Ok(());
    loop {
        process_internal_events(state, &view_data, &internal_rx);

        if let Err(error) = terminal.draw(|frame| render(frame, state, root, &view_data)) {
            result = Err(error).context("draw frame");
            break;
        }

        match event::poll(POLL_INTERVAL).context("poll event") {
            Ok(false) => {}
            Ok(true) => match event::read().context("read event") {
                Ok(Event::Key(key)) => {
                    if handle_key_event(state, root, runtime, &mut view_data, &internal_tx, key) {
                        break;
                    }
                }
                Ok(_) => {}
                Err(error) => {
                    result = Err(error);
                    break;
                }
            },
            Err(error) => {
                result = Err(error);
                break;
            }
        }
    }

    disable_raw_mode().context("disable raw mode")?;
    execute!(io::stdout(), terminal::LeaveAlternateScreen).context("leave alternate screen")?;
    info!("dashboard closed");
    result
}

fn process_internal_events(
    state: &mut AppState,
    view_data: &ViewData,
    rx: &Receiver<InternalEvent>,
) {
    while let Ok(event) = rx.try_recv() {
        match event {
            InternalEvent::ClearStatus { token } if token == view_data.status_token => {
                state.dispatch(AppCommand::ClearStatus);
            }
            InternalEvent::ClearStatus { .. } => {}
        }
    }
}

fn schedule_status_clear(internal_tx: &Sender<InternalEvent>, token: u64, delay: Duration) {
    let sender = internal_tx.clone();
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = sender.send(InternalEvent::ClearStatus { token });
    });
}

fn emit_status(
    state: &mut AppState,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    message: impl Into<String>,
) {
    state.dispatch(AppCommand::SetStatus(message.into()));
    view_data.status_token = view_data.status_token.saturating_add(1);
    schedule_status_clear(internal_tx, view_data.status_token, view_data.status_clear);
}

fn focused_list(root: &ScreenRouter) -> Option<&dyn ListView> {
    focused_screen(root).and_then(|screen| screen.list())
}

fn focused_list_mut(root: &mut ScreenRouter) -> Option<&mut (dyn ListView + 'static)> {
    focused_screen_mut(root).and_then(|screen| screen.list_mut())
}

fn handle_key_event<R: AppRuntime>(
    state: &mut AppState,
    root: &mut ScreenRouter,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    if key.code == KeyCode::Char('q') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return true;
    }

    if state.help_visible {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
            state.dispatch(AppCommand::ToggleHelp);
        }
        return false;
    }

    match state.mode {
        AppMode::Search => {
            handle_search_key(state, root, view_data, internal_tx, key);
            false
        }
        AppMode::Chips => {
            handle_chip_key(state, root, view_data, internal_tx, key);
            false
        }
        AppMode::Nav => handle_nav_key(state, root, runtime, view_data, internal_tx, key),
    }
}

fn handle_search_key(
    state: &mut AppState,
    root: &mut ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(list) = focused_list_mut(root) else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };

    match (key.code, key.modifiers) {
        (KeyCode::Esc | KeyCode::Enter, _) => {
            let summary = list.summary();
            state.dispatch(AppCommand::ExitToNav);
            emit_status(state, view_data, internal_tx, summary.showing_label());
            return;
        }
        (KeyCode::Char('u'), modifiers) if modifiers.contains(KeyModifiers::CONTROL) => {
            list.set_query("");
        }
        (KeyCode::Backspace, _) => {
            let mut query = list.query().to_owned();
            query.pop();
            list.set_query(&query);
        }
        (KeyCode::Char(ch), modifiers) if !modifiers.contains(KeyModifiers::CONTROL) => {
            let mut query = list.query().to_owned();
            query.push(ch);
            list.set_query(&query);
        }
        _ => return,
    }
    view_data.selected_row = 0;
}

fn handle_chip_key(
    state: &mut AppState,
    root: &mut ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) {
    let Some(list) = focused_list_mut(root) else {
        state.dispatch(AppCommand::ExitToNav);
        return;
    };
    let chips = list.summary().chips;
    if chips.is_empty() {
        state.dispatch(AppCommand::ExitToNav);
        return;
    }
    let last = chips.len() - 1;

    match key.code {
        KeyCode::Esc => {
            state.dispatch(AppCommand::ExitToNav);
        }
        KeyCode::Char('h') | KeyCode::Left => {
            view_data.chip_cursor = view_data.chip_cursor.saturating_sub(1).min(last);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            view_data.chip_cursor = (view_data.chip_cursor + 1).min(last);
        }
        KeyCode::Char('x') => {
            let chip = &chips[view_data.chip_cursor.min(last)];
            if let Err(error) = list.clear(chip.slot) {
                emit_status(state, view_data, internal_tx, error.to_string());
                return;
            }
            let summary = list.summary();
            debug!(chip = chip.label, visible = summary.visible, "chip cleared");
            view_data.selected_row = 0;
            if summary.chips.is_empty() {
                view_data.chip_cursor = 0;
                state.dispatch(AppCommand::ExitToNav);
            } else {
                view_data.chip_cursor = view_data.chip_cursor.min(summary.chips.len() - 1);
            }
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("cleared {}; {}", chip.label, summary.showing_label()),
            );
        }
        KeyCode::Char('X') => {
            let message = clear_all_message(list);
            view_data.selected_row = 0;
            view_data.chip_cursor = 0;
            state.dispatch(AppCommand::ExitToNav);
            emit_status(state, view_data, internal_tx, message);
        }
        _ => {}
    }
}

fn handle_nav_key<R: AppRuntime>(
    state: &mut AppState,
    root: &mut ScreenRouter,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    key: KeyEvent,
) -> bool {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return true,
        (KeyCode::Char('?'), _) => {
            state.dispatch(AppCommand::ToggleHelp);
        }
        (KeyCode::Char('f'), KeyModifiers::NONE) => {
            let result = root.select_next();
            finish_tab_change(state, root, view_data, internal_tx, result);
        }
        (KeyCode::Char('b'), KeyModifiers::NONE) => {
            let result = root.select_prev();
            finish_tab_change(state, root, view_data, internal_tx, result);
        }
        (KeyCode::Char(']'), _) => switch_sub_tab(state, root, view_data, internal_tx, true),
        (KeyCode::Char('['), _) => switch_sub_tab(state, root, view_data, internal_tx, false),
        (KeyCode::Char('j') | KeyCode::Down, _) => move_row(root, view_data, 1),
        (KeyCode::Char('k') | KeyCode::Up, _) => move_row(root, view_data, -1),
        (KeyCode::Char('g'), KeyModifiers::NONE) => view_data.selected_row = 0,
        (KeyCode::Char('G'), _) => {
            view_data.selected_row = visible_row_count(root).saturating_sub(1);
        }
        (KeyCode::Char('/'), _) => {
            if focused_list(root).is_some() {
                state.dispatch(AppCommand::EnterSearch);
            } else {
                emit_status(state, view_data, internal_tx, "nothing to search here");
            }
        }
        (KeyCode::Char(digit @ '1'..='9'), _) => {
            let index = usize::from(digit as u8 - b'1');
            cycle_category(state, root, view_data, internal_tx, index);
        }
        (KeyCode::Char('c'), KeyModifiers::NONE) => {
            let has_chips = focused_list(root).is_some_and(|list| list.summary().is_filtered());
            if has_chips {
                view_data.chip_cursor = 0;
                state.dispatch(AppCommand::EnterChips);
            } else {
                emit_status(state, view_data, internal_tx, "no active filters");
            }
        }
        (KeyCode::Char('X'), _) => {
            let Some(list) = focused_list_mut(root) else {
                return false;
            };
            let message = clear_all_message(list);
            view_data.selected_row = 0;
            emit_status(state, view_data, internal_tx, message);
        }
        (KeyCode::Enter | KeyCode::Char(' '), _) => {
            toggle_selected_row(state, root, view_data, internal_tx);
        }
        (KeyCode::Char('E'), _) => {
            let Some(list) = focused_list_mut(root) else {
                return false;
            };
            let collapsed = list.collapse_all();
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("collapsed {collapsed} rows"),
            );
        }
        (KeyCode::Char(ch), KeyModifiers::NONE) => {
            if let Some(action) = ScreenAction::for_key(ch) {
                request_screen_action(state, root, runtime, view_data, internal_tx, action);
            }
        }
        _ => {}
    }
    false
}

fn finish_tab_change(
    state: &mut AppState,
    root: &ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    result: Result<Vec<RouterEvent<ViewLabel>>, RouterError>,
) {
    view_data.selected_row = 0;
    view_data.chip_cursor = 0;
    match result {
        Ok(events) => {
            for event in events {
                if let RouterEvent::PlaceholderShown(label) = event {
                    warn!(view = ?label, "no view registered; showing placeholder");
                }
            }
            info!(view = ?focused_label(root), "view focused");
        }
        Err(error) => {
            warn!(%error, "tab switch failed");
            emit_status(
                state,
                view_data,
                internal_tx,
                format!("tab switch failed: {error}"),
            );
        }
    }
}

fn switch_sub_tab(
    state: &mut AppState,
    root: &mut ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    forward: bool,
) {
    let Some(shell) = active_shell_mut(root) else {
        emit_status(state, view_data, internal_tx, "no sub tabs here");
        return;
    };
    let result = if forward {
        shell.select_next()
    } else {
        shell.select_prev()
    };
    finish_tab_change(state, root, view_data, internal_tx, result);
}

fn visible_row_count(root: &ScreenRouter) -> usize {
    focused_list(root).map_or(0, |list| list.summary().visible)
}

fn move_row(root: &ScreenRouter, view_data: &mut ViewData, delta: isize) {
    let count = visible_row_count(root);
    if count == 0 {
        view_data.selected_row = 0;
        return;
    }
    let next = view_data.selected_row as isize + delta;
    view_data.selected_row = next.clamp(0, count as isize - 1) as usize;
}

fn cycle_category(
    state: &mut AppState,
    root: &mut ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    index: usize,
) {
    let Some(list) = focused_list_mut(root) else {
        emit_status(state, view_data, internal_tx, "no filters here");
        return;
    };
    let message = match list.cycle_category(index) {
        Ok(value) => {
            let summary = list.summary();
            let label = list
                .category_states()
                .get(index)
                .map_or("filter", |category| category.label);
            info!(
                list = list.title(),
                filter = label,
                value,
                visible = summary.visible,
                "category filter changed"
            );
            format!("{label}: {value} ({})", summary.showing_label())
        }
        Err(error) => error.to_string(),
    };
    view_data.selected_row = 0;
    emit_status(state, view_data, internal_tx, message);
}

fn clear_all_message(list: &mut dyn ListView) -> String {
    if list.clear_all() {
        info!(list = list.title(), "filters cleared");
        format!("filters cleared; {}", list.summary().showing_label())
    } else {
        "no active filters".to_owned()
    }
}

fn toggle_selected_row(
    state: &mut AppState,
    root: &mut ScreenRouter,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
) {
    let Some(list) = focused_list_mut(root) else {
        return;
    };
    let rows = list.rows();
    let Some(row) = rows.get(view_data.selected_row) else {
        return;
    };
    if !row.expandable() {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("{} has no details", row.key),
        );
        return;
    }
    let expanded = list.toggle_row(row.key);
    let verb = if expanded { "expanded" } else { "collapsed" };
    emit_status(state, view_data, internal_tx, format!("{verb} {}", row.key));
}

fn request_screen_action<R: AppRuntime>(
    state: &mut AppState,
    root: &ScreenRouter,
    runtime: &mut R,
    view_data: &mut ViewData,
    internal_tx: &Sender<InternalEvent>,
    action: ScreenAction,
) {
    let view = focused_label(root);
    let Some(screen) = focused_screen(root) else {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("{} unavailable: view not found", action.label()),
        );
        return;
    };
    if !screen.offers(action) {
        emit_status(
            state,
            view_data,
            internal_tx,
            format!("{} not available on {}", action.label(), view.title()),
        );
        return;
    }

    let rows = visible_rows(view, screen);
    info!(?view, ?action, rows = rows.rows.len(), "action requested");
    let message = match runtime.request_action(view, action, &rows) {
        Ok(message) => message,
        Err(error) => {
            let detail = format!("{error:#}");
            warn!(?view, ?action, error = %detail, "action failed");
            format!("{} failed: {detail}", action.label())
        }
    };
    emit_status(state, view_data, internal_tx, message);
}

fn visible_rows(view: ViewLabel, screen: &Screen) -> VisibleRows {
    match screen {
        Screen::List(list_screen) => {
            let list = list_screen.list.as_ref();
            VisibleRows {
                view,
                title: list.title(),
                columns: list.columns().to_vec(),
                rows: list
                    .rows()
                    .iter()
                    .map(|row| row.cells.iter().map(TableCell::display).collect())
                    .collect(),
            }
        }
        Screen::Summary(summary) => VisibleRows {
            view,
            title: summary.title,
            columns: vec!["metric", "value", "detail"],
            rows: summary
                .cards
                .iter()
                .map(|card| vec![card.label.to_owned(), card.value.clone(), card.detail.clone()])
                .collect(),
        },
        Screen::Shell(_) => VisibleRows {
            view,
            title: view.title(),
            columns: Vec::new(),
            rows: Vec::new(),
        },
    }
}

fn render(
    frame: &mut ratatui::Frame<'_>,
    state: &AppState,
    root: &ScreenRouter,
    view_data: &ViewData,
) {
    let chain = router_chain(root);
    let screen = focused_screen(root);
    let mut constraints = vec![Constraint::Length(3); chain.len()];
    if matches!(screen, Some(Screen::List(_))) {
        constraints.push(Constraint::Length(5));
    }
    constraints.push(Constraint::Min(1));
    constraints.push(Constraint::Length(3));
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    for (depth, router) in chain.iter().enumerate() {
        let title = match depth {
            0 => "vigil",
            _ => chain[depth - 1].active_label().title(),
        };
        let tabs = Tabs::new(tab_titles(router))
            .block(Block::default().title(title).borders(Borders::ALL))
            .style(Style::default().fg(Color::White))
            .highlight_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .select(router.active_index());
        frame.render_widget(tabs, layout[depth]);
    }

    let body = chain.len();
    match screen {
        Some(Screen::List(list_screen)) => {
            let list = list_screen.list.as_ref();
            let bar = Paragraph::new(
                filter_bar_lines(list, state.mode, view_data.chip_cursor).join("\n"),
            )
            .block(Block::default().title("filters").borders(Borders::ALL));
            frame.render_widget(bar, layout[body]);
            render_list(frame, layout[body + 1], list, view_data);
        }
        Some(Screen::Summary(summary)) => render_summary(frame, layout[body], summary),
        Some(Screen::Shell(_)) | None => {
            let placeholder = Paragraph::new(placeholder_text(focused_label(root)))
                .style(Style::default().fg(Color::Red))
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(placeholder, layout[body]);
        }
    }

    let status_widget = Paragraph::new(status_text(state, root))
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_widget, layout[layout.len() - 1]);

    if state.help_visible {
        let area = centered_rect(70, 60, frame.area());
        frame.render_widget(Clear, area);
        let help = Paragraph::new(help_overlay_text())
            .block(Block::default().title("help").borders(Borders::ALL));
        frame.render_widget(help, area);
    }
}

fn tab_titles(router: &ScreenRouter) -> Vec<String> {
    router
        .tabs()
        .iter()
        .map(|label| label.title().to_owned())
        .collect()
}

fn render_list(
    frame: &mut ratatui::Frame<'_>,
    area: Rect,
    list: &dyn ListView,
    view_data: &ViewData,
) {
    let summary = list.summary();
    let title = format!("{} ({})", list.title(), summary.count_label());

    if let Some(message) = summary.no_results_message() {
        let text = if summary.is_filtered() {
            format!("{message}\n\npress X to clear all filters")
        } else {
            message
        };
        let empty = Paragraph::new(text)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().title(title).borders(Borders::ALL));
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(list.columns().iter().map(|column| {
        Cell::from(*column).style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    }));

    let mut rows = Vec::new();
    let mut selected_line = None;
    for (index, row) in list.rows().into_iter().enumerate() {
        let selected = index == view_data.selected_row;
        if selected {
            selected_line = Some(rows.len());
        }
        let marker = match (row.expandable(), row.expanded) {
            (false, _) => " ",
            (true, true) => EXPANDED_MARK,
            (true, false) => COLLAPSED_MARK,
        };
        let cells = row
            .cells
            .iter()
            .enumerate()
            .map(|(column, cell)| {
                let mut text = cell_text(cell);
                if column == 0 {
                    text = format!("{marker} {text}");
                }
                let mut style = cell_style(cell);
                if selected {
                    style = style.bg(Color::DarkGray);
                }
                Cell::from(text).style(style)
            })
            .collect::<Vec<_>>();
        rows.push(Row::new(cells));

        if row.expanded {
            for detail in &row.details {
                rows.push(Row::new(vec![
                    Cell::from(String::new()),
                    Cell::from(format!("{DETAIL_MARK} {detail}"))
                        .style(Style::default().fg(Color::Gray)),
                ]));
            }
        }
    }

    let widths = vec![Constraint::Min(8); list.columns().len().max(1)];
    let table = Table::new(rows, widths)
        .header(header)
        .column_spacing(1)
        .block(Block::default().title(title).borders(Borders::ALL));
    // Detail lines shift the selected record down; scroll by table line.
    let mut table_state = TableState::default().with_selected(selected_line);
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn render_summary(frame: &mut ratatui::Frame<'_>, area: Rect, summary: &SummaryScreen) {
    let lines = summary
        .cards
        .iter()
        .map(|card| Line::styled(summary_card_line(card), tone_style(card.tone)))
        .collect::<Vec<_>>();
    let body = Paragraph::new(lines).block(
        Block::default()
            .title(summary.title)
            .borders(Borders::ALL),
    );
    frame.render_widget(body, area);
}

fn summary_card_line(card: &SummaryCard) -> String {
    let progress = card
        .progress
        .map(|percent| format!("{} ", percent_bar(percent)))
        .unwrap_or_default();
    format!(
        "{:<24} {:>6}  {progress}{}",
        card.label, card.value, card.detail
    )
}

fn placeholder_text(label: ViewLabel) -> String {
    format!("view not found: {}", label.title())
}

fn filter_bar_lines(list: &dyn ListView, mode: AppMode, chip_cursor: usize) -> Vec<String> {
    let labels = list.search_labels();
    let search = if labels.is_empty() {
        "search: none".to_owned()
    } else {
        let cursor = if mode == AppMode::Search { "_" } else { "" };
        format!("search ({}): {}{cursor}", labels.join("/"), list.query())
    };

    let categories = list.category_states();
    let categories = if categories.is_empty() {
        "no category filters".to_owned()
    } else {
        categories
            .iter()
            .enumerate()
            .map(|(index, category)| {
                format!(
                    "{} {}: {}",
                    index + 1,
                    category.label,
                    category.display_value()
                )
            })
            .collect::<Vec<_>>()
            .join("  ")
    };

    let summary = list.summary();
    let chips = summary
        .chips
        .iter()
        .enumerate()
        .map(|(index, chip)| {
            if mode == AppMode::Chips && index == chip_cursor {
                format!("<{}: {} x>", chip.label, chip.value)
            } else {
                format!("[{}: {} x]", chip.label, chip.value)
            }
        })
        .collect::<Vec<_>>();
    let footer = if chips.is_empty() {
        summary.showing_label()
    } else {
        format!("{}  {}", chips.join(" "), summary.showing_label())
    };

    vec![search, categories, footer]
}

fn cell_text(cell: &TableCell) -> String {
    match cell {
        TableCell::Percent(percent) => format!("{} {}", percent_bar(*percent), cell.display()),
        _ => cell.display(),
    }
}

fn cell_style(cell: &TableCell) -> Style {
    match cell {
        TableCell::Badge(value) => tone_style(badge_tone(value)),
        TableCell::Percent(_) => Style::default().fg(Color::Cyan),
        _ => Style::default(),
    }
}

fn tone_style(tone: BadgeTone) -> Style {
    let color = match tone {
        BadgeTone::Danger => Color::Red,
        BadgeTone::Warning => Color::LightRed,
        BadgeTone::Caution => Color::Yellow,
        BadgeTone::Success => Color::Green,
        BadgeTone::Info => Color::Blue,
        BadgeTone::Neutral => Color::Gray,
    };
    Style::default().fg(color)
}

fn percent_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) * PERCENT_BAR_WIDTH + 50) / 100;
    format!(
        "{}{}",
        "█".repeat(filled),
        "░".repeat(PERCENT_BAR_WIDTH - filled)
    )
}

fn status_text(state: &AppState, root: &ScreenRouter) -> String {
    if state.help_visible {
        return String::new();
    }

    let hints = match state.mode {
        AppMode::Nav => {
            let mut hints =
                "b/f tabs | [/] sub | j/k rows | / search | 1-9 filter | c chips | X clear | enter expand"
                    .to_owned();
            let actions = focused_screen(root).map_or(&[][..], Screen::actions);
            for action in actions {
                hints.push_str(&format!(" | {} {}", action.key(), action.label()));
            }
            hints.push_str(" | ? help | q quit");
            hints
        }
        AppMode::Search => "type to filter | ctrl+u clear | enter/esc done".to_owned(),
        AppMode::Chips => "h/l select | x clear chip | X clear all | esc done".to_owned(),
    };
    let mode = mode_label(state.mode);
    match &state.status_line {
        Some(status) => format!("{mode} | {status} | {hints}"),
        None => format!("{mode} | {hints}"),
    }
}

fn mode_label(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Nav => "NAV",
        AppMode::Search => "SEARCH",
        AppMode::Chips => "CHIPS",
    }
}

fn help_overlay_text() -> &'static str {
    "global: ctrl+q quit | ? help\n\
tabs: b/f top tabs | [/] sub tabs\n\
rows: j/k move | g/G first/last | enter/space expand | E collapse all\n\
search: / start | type to filter | backspace | ctrl+u clear | enter/esc done\n\
filters: 1-9 cycle category | X clear all\n\
chips: c enter | h/l select | x clear chip | X clear all | esc done\n\
actions: e export | a new | u upload | s schedule (when offered)"
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
