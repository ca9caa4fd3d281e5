//! Stateless UI rendering for the game and its move list.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use rewind_tictactoe::{Player, Position, Square, Win};

use super::app::{App, Focus};

const HELP: &str = "arrows move  enter/space place  1-9 place  tab history  s sort  q quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(12),   // Board + moves
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new("Rewind - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(chunks[1]);

    draw_board(frame, panes[0], app);
    draw_info(frame, panes[1], app);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[2]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Board")
        .border_style(focus_style(app.focus() == Focus::Board));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    let win = app.engine().winner();
    for (row, slot) in [0, 2, 4].into_iter().enumerate() {
        let cells = [
            Position::ALL[row * 3],
            Position::ALL[row * 3 + 1],
            Position::ALL[row * 3 + 2],
        ];
        draw_row(frame, rows[slot], app, win.as_ref(), cells);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, win: Option<&Win>, cells: [Position; 3]) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    draw_cell(frame, cols[0], app, win, cells[0]);
    draw_separator_vertical(frame, cols[1]);
    draw_cell(frame, cols[2], app, win, cells[1]);
    draw_separator_vertical(frame, cols[3]);
    draw_cell(frame, cols[4], app, win, cells[2]);
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, win: Option<&Win>, pos: Position) {
    let engine = app.engine();

    let (symbol, mut style) = match engine.board().get(pos) {
        Square::Empty => ("   ", Style::default().fg(Color::DarkGray)),
        Square::Occupied(Player::X) => (" X ", Style::default().fg(Color::Blue)),
        Square::Occupied(Player::O) => (" O ", Style::default().fg(Color::Red)),
    };

    if engine.last_move() == Some(pos) {
        style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
    }
    if win.is_some_and(|w| w.contains(pos)) {
        style = style.bg(Color::Green);
    }
    if app.focus() == Focus::Board && pos == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph = Paragraph::new(Line::from(Span::styled(symbol, style)))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_info(frame: &mut Frame, area: Rect, app: &App) {
    let engine = app.engine();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Min(3),    // Moves
            Constraint::Length(1), // Sort order
        ])
        .split(area);

    let status = Paragraph::new(engine.display_status().to_string())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[0]);

    let items: Vec<ListItem> = engine
        .move_descriptions()
        .iter()
        .map(|d| {
            let style = if d.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(d.to_string(), style)))
        })
        .collect();

    let history_focused = app.focus() == Focus::History;
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Moves")
                .border_style(focus_style(history_focused)),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::White))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(history_focused.then(|| app.selected_row()));
    frame.render_stateful_widget(list, chunks[1], &mut state);

    let sort = Paragraph::new(format!("Sorted in {} order", engine.sort_label()))
        .alignment(Alignment::Center);
    frame.render_widget(sort, chunks[2]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
