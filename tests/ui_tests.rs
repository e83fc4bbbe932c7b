use sea_battle::{
    greeting, marker, render_boards, Board, Cell, CellState, Orientation, Ship,
};

fn sample_board() -> Board {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Cell::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    board
        .add_ship(Ship::new(Cell::new(4, 4), 1, Orientation::Horizontal))
        .unwrap();
    board.reset_turn_exclusions();
    board
}

#[test]
fn test_marker_hides_intact_ships_only() {
    assert_eq!(marker(CellState::ShipIntact, false), '■');
    assert_eq!(marker(CellState::ShipIntact, true), marker(CellState::Empty, true));
    assert_eq!(marker(CellState::Hit, true), 'X');
    assert_eq!(marker(CellState::Miss, true), '.');
    assert_eq!(marker(CellState::ExcludedEmpty, false), '.');
}

#[test]
fn test_render_hides_right_board() {
    let left = sample_board();
    let mut right = sample_board();
    right.resolve_shot(Cell::new(0, 0)).unwrap();
    right.resolve_shot(Cell::new(2, 2)).unwrap();

    let text = render_boards(&left, &right, true);
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[0].contains("Board of User"));
    assert!(lines[0].contains("Board of Comp"));
    assert!(lines[1].starts_with("  | 1 | 2 | 3 | 4 | 5 | 6 |"));

    // own ships shown once per cell on the left, none intact on the right
    assert_eq!(text.matches('■').count(), 3);
    assert!(lines[2].starts_with("1 | ■ | ■ | O |"));
    assert!(lines[2].ends_with("1 | X | O | O | O | O | O |"));
    assert!(lines[4].ends_with("3 | O | O | . | O | O | O |"));
}

#[test]
fn test_render_revealed() {
    let board = sample_board();
    let text = render_boards(&board, &board, false);
    assert_eq!(text.matches('■').count(), 6);
}

#[test]
fn test_greeting_mentions_format() {
    let text = greeting(6);
    assert!(text.contains("Input format"));
    assert!(text.contains("1-6"));
}
