//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use super::app::{App, ClickTarget, Focus};
use crate::games::tictactoe::{status_line, Line as WinLine, Player, Position, Square};

const BOARD_WIDTH: u16 = 40;
const BOARD_HEIGHT: u16 = 11;

/// Screen regions the mouse can hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    title: Rect,
    status: Rect,
    moves: Rect,
    help: Rect,
    cells: [Rect; 9],
}

/// Splits the terminal area into the regions drawn by [`draw`].
pub fn layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(BOARD_HEIGHT),
            Constraint::Length(3), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(30)])
        .split(chunks[1]);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(body[1]);

    ScreenLayout {
        title: chunks[0],
        status: info[0],
        moves: info[1],
        help: chunks[2],
        cells: board_cells(body[0]),
    }
}

/// Finds what lies under a mouse click at (`column`, `row`).
///
/// Move list rows are counted from the first entry, so a scrolled list
/// maps a click to the entry actually drawn under the pointer.
pub fn hit_test(layout: &ScreenLayout, app: &App, column: u16, row: u16) -> Option<ClickTarget> {
    if let Some(i) = layout.cells.iter().position(|r| contains(*r, column, row)) {
        return Position::from_index(i).map(ClickTarget::Cell);
    }
    // First and last rows of the list are its border.
    let list = layout.moves;
    if contains(list, column, row) && row > list.y && row + 1 < list.y + list.height {
        let offset = moves_offset(app, list);
        return Some(ClickTarget::MoveRow(usize::from(row - list.y - 1) + offset));
    }
    None
}

/// Index of the first move list entry drawn in `list`.
///
/// Scrolls just far enough to keep the selected entry (or, with the board
/// focused, the current one) on the last visible row.
fn moves_offset(app: &App, list: Rect) -> usize {
    let visible = usize::from(list.height.saturating_sub(2)).max(1);
    let anchor = match app.focus() {
        Focus::Moves => app.selected_row(),
        Focus::Board => app.current_row(),
    };
    (anchor + 1).saturating_sub(visible)
}

fn contains(r: Rect, column: u16, row: u16) -> bool {
    column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout(frame.area());

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, layout.title);

    let winning_line = app
        .game()
        .outcome()
        .and_then(|o| o.line())
        .filter(|_| *app.highlight_winning_line());
    for (pos, area) in Position::ALL.iter().zip(layout.cells) {
        draw_cell(frame, area, app, *pos, winning_line);
    }

    let status = Paragraph::new(status_line(app.game()))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, layout.status);

    draw_moves(frame, layout.moves, app);

    let help = Paragraph::new(
        "arrows/hjkl move · enter play · 1-9 play cell · tab focus · [ ] step · s sort · n new · q quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::TOP));
    frame.render_widget(help, layout.help);
}

fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

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

    let mut cells = [Rect::default(); 9];
    for (r, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
                Constraint::Length(1),
                Constraint::Length(12),
            ])
            .split(row_area);
        for (c, col_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[r * 3 + c] = col_area;
        }
    }
    cells
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position, winning_line: Option<WinLine>) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if winning_line.is_some_and(|line| line.contains(pos)) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == *app.cursor() && *app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Middle row of the three-line cell.
    let text = Text::from(vec![
        Line::from(""),
        Line::from(Span::styled(format!("  {}  ", symbol), style)),
    ]);
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem> = app
        .entries()
        .into_iter()
        .map(|entry| {
            let style = if entry.is_current {
                Style::default().add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(entry.description, style)))
        })
        .collect();

    let border_style = if *app.focus() == Focus::Moves {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = format!("Moves ({})", app.order().label());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("> ");

    let selected = (*app.focus() == Focus::Moves).then(|| app.selected_row());
    let mut state = ListState::default()
        .with_offset(moves_offset(app, area))
        .with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn render_buffer(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        render_buffer(app, 100, 24)
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    /// Screen coordinates of the first occurrence of `text`.
    fn find_text(buffer: &Buffer, text: &str) -> Option<(u16, u16)> {
        let area = buffer.area;
        (area.y..area.y + area.height).find_map(|y| {
            let row: String = (area.x..area.x + area.width)
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.find(text)
                .map(|byte| (area.x + row[..byte].chars().count() as u16, y))
        })
    }

    /// Whether the middle row of `cell` shows `symbol` on a green background.
    fn cell_is_green(buffer: &Buffer, cell: Rect, symbol: &str) -> bool {
        let y = cell.y + 1;
        (cell.x..cell.x + cell.width).any(|x| {
            let c = &buffer[(x, y)];
            c.symbol() == symbol && c.style().bg == Some(Color::Green)
        })
    }

    fn play_keys(app: &mut App, keys: &[char]) {
        for key in keys {
            app.handle_key(KeyCode::Char(*key));
        }
    }

    #[test]
    fn test_renders_status_and_start_entry() {
        let app = App::new(&Settings::default());
        let screen = render(&app);
        assert!(screen.contains("Next player: X"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Moves (ascending)"));
    }

    #[test]
    fn test_renders_winner_and_moves() {
        let mut app = App::new(&Settings::default());
        play_keys(&mut app, &['1', '5', '2', '4', '3']);
        let screen = render(&app);
        assert!(screen.contains("Winner: X"));
        assert!(screen.contains("Go to move #5 ([1, 3])"));
    }

    #[test]
    fn test_hit_test_cells_and_rows() {
        let app = App::new(&Settings::default());
        let layout = layout(Rect::new(0, 0, 100, 24));
        let center = layout.cells[4];
        assert_eq!(
            hit_test(&layout, &app, center.x + 1, center.y + 1),
            Some(ClickTarget::Cell(Position::Center))
        );
        let moves = layout.moves;
        assert_eq!(
            hit_test(&layout, &app, moves.x + 2, moves.y + 1),
            Some(ClickTarget::MoveRow(0))
        );
        assert_eq!(hit_test(&layout, &app, moves.x + 2, moves.y), None);
    }

    #[test]
    fn test_click_on_scrolled_move_list() {
        // Nine moves ending in a draw: ten entries, nine visible rows at this height.
        let mut app = App::new(&Settings::default());
        play_keys(&mut app, &['1', '2', '3', '5', '4', '6', '8', '7', '9']);
        app.handle_key(KeyCode::Tab);
        assert_eq!(app.game().current_step(), 9);

        let buffer = render_buffer(&app, 100, 20);
        let layout = layout(Rect::new(0, 0, 100, 20));
        assert!(find_text(&buffer, "Go to game start").is_none());

        let (x, y) = find_text(&buffer, "Go to move #9").unwrap();
        let target = hit_test(&layout, &app, x, y).unwrap();
        assert_eq!(target, ClickTarget::MoveRow(9));
        app.handle_click(target);
        assert_eq!(app.game().current_step(), 9);

        let (x, y) = find_text(&buffer, "Go to move #5 ").unwrap();
        app.handle_click(hit_test(&layout, &app, x, y).unwrap());
        assert_eq!(app.game().current_step(), 5);
    }

    #[test]
    fn test_scrolled_list_follows_board_focus() {
        let mut app = App::new(&Settings::default());
        play_keys(&mut app, &['1', '2', '3', '5', '4', '6', '8', '7', '9']);
        assert_eq!(*app.focus(), Focus::Board);

        let buffer = render_buffer(&app, 100, 20);
        let layout = layout(Rect::new(0, 0, 100, 20));
        let (x, y) = find_text(&buffer, "Go to move #1 ").unwrap();
        app.handle_click(hit_test(&layout, &app, x, y).unwrap());
        assert_eq!(app.game().current_step(), 1);
    }

    #[test]
    fn test_winning_line_highlighted() {
        let mut app = App::new(&Settings::default());
        play_keys(&mut app, &['1', '5', '2', '4', '3']);
        let buffer = render_buffer(&app, 100, 24);
        let layout = layout(Rect::new(0, 0, 100, 24));

        for cell in &layout.cells[0..3] {
            assert!(cell_is_green(&buffer, *cell, "X"));
        }
        assert!(!cell_is_green(&buffer, layout.cells[4], "O"));
        assert!(!cell_is_green(&buffer, layout.cells[3], "O"));
    }

    #[test]
    fn test_winning_line_highlight_disabled() {
        let settings = Settings::from_toml("highlight_winning_line = false").unwrap();
        let mut app = App::new(&settings);
        play_keys(&mut app, &['1', '5', '2', '4', '3']);
        assert!(app.game().outcome().is_some());

        let buffer = render_buffer(&app, 100, 24);
        let layout = layout(Rect::new(0, 0, 100, 24));
        for cell in &layout.cells[0..3] {
            assert!(!cell_is_green(&buffer, *cell, "X"));
        }
    }

    #[test]
    fn test_current_entry_is_bold() {
        let mut app = App::new(&Settings::default());
        play_keys(&mut app, &['1', '5', '2']);
        app.handle_key(KeyCode::Char('['));
        assert_eq!(app.game().current_step(), 2);

        let buffer = render_buffer(&app, 100, 24);
        let bold = |text: &str| {
            let (x, y) = find_text(&buffer, text).unwrap();
            buffer[(x, y)].style().add_modifier.contains(Modifier::BOLD)
        };
        assert!(bold("Go to move #2 "));
        assert!(!bold("Go to move #3 "));
        assert!(!bold("Go to game start"));
    }
}
