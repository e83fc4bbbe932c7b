use sea_battle::{Board, BoardError, Cell, CellState, Orientation, Ship, ShotOutcome};

fn board_with(size: usize, ships: &[Ship]) -> Board {
    let mut board = Board::new(size);
    for &ship in ships {
        board.add_ship(ship).unwrap();
    }
    board.reset_turn_exclusions();
    board
}

#[test]
fn test_single_ship_sunk_and_contour_busy() {
    let mut board = board_with(6, &[Ship::new(Cell::new(0, 0), 1, Orientation::Horizontal)]);

    assert_eq!(board.resolve_shot(Cell::new(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.destroyed(), 1);
    assert!(board.is_defeated());
    assert_eq!(
        board.resolve_shot(Cell::new(0, 1)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
}

#[test]
fn test_hits_then_sink() {
    let ship = Ship::new(Cell::new(2, 1), 3, Orientation::Horizontal);
    let mut board = board_with(6, &[ship]);

    assert_eq!(board.resolve_shot(Cell::new(2, 1)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.resolve_shot(Cell::new(2, 3)).unwrap(), ShotOutcome::Hit);
    assert_eq!(board.destroyed(), 0);
    assert_eq!(board.resolve_shot(Cell::new(2, 2)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.destroyed(), 1);

    for c in 1..4 {
        assert_eq!(board.cell_state(Cell::new(2, c)), Some(CellState::Hit));
    }
    // the whole margin is now known water
    for c in 0..5 {
        assert_eq!(board.cell_state(Cell::new(1, c)), Some(CellState::ExcludedEmpty));
        assert_eq!(board.cell_state(Cell::new(3, c)), Some(CellState::ExcludedEmpty));
        assert!(board.is_busy(Cell::new(1, c)));
    }
    assert_eq!(board.cell_state(Cell::new(2, 0)), Some(CellState::ExcludedEmpty));
    assert_eq!(board.cell_state(Cell::new(2, 4)), Some(CellState::ExcludedEmpty));
    assert_eq!(board.cell_state(Cell::new(0, 0)), Some(CellState::Empty));
    assert!(!board.is_busy(Cell::new(4, 2)));
}

#[test]
fn test_out_of_bounds_shot_leaves_board_untouched() {
    let mut board = board_with(6, &[Ship::new(Cell::new(5, 4), 2, Orientation::Horizontal)]);
    for cell in [Cell::new(6, 0), Cell::new(0, 6), Cell::new(-1, 2), Cell::new(5, 6)] {
        assert_eq!(board.resolve_shot(cell).unwrap_err(), BoardError::OutOfBounds);
        assert!(!board.is_busy(cell));
    }
    assert_eq!(board.destroyed(), 0);
    assert_eq!(board.ships()[0].lives(), 2);
    assert!(board
        .rows()
        .flatten()
        .all(|s| matches!(s, CellState::Empty | CellState::ShipIntact)));
}

#[test]
fn test_repeat_shot_rejected() {
    let mut board = board_with(6, &[Ship::new(Cell::new(3, 3), 2, Orientation::Vertical)]);

    assert_eq!(board.resolve_shot(Cell::new(0, 0)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.cell_state(Cell::new(0, 0)), Some(CellState::Miss));
    assert_eq!(
        board.resolve_shot(Cell::new(0, 0)).unwrap_err(),
        BoardError::AlreadyTargeted
    );

    assert_eq!(board.resolve_shot(Cell::new(3, 3)).unwrap(), ShotOutcome::Hit);
    assert_eq!(
        board.resolve_shot(Cell::new(3, 3)).unwrap_err(),
        BoardError::AlreadyTargeted
    );
    assert_eq!(board.ships()[0].lives(), 1);
}

#[test]
fn test_sink_keeps_earlier_misses() {
    let mut board = board_with(6, &[Ship::new(Cell::new(0, 0), 1, Orientation::Vertical)]);
    assert_eq!(board.resolve_shot(Cell::new(1, 1)).unwrap(), ShotOutcome::Miss);
    assert_eq!(board.resolve_shot(Cell::new(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(board.cell_state(Cell::new(1, 1)), Some(CellState::Miss));
    assert_eq!(board.cell_state(Cell::new(1, 0)), Some(CellState::ExcludedEmpty));
    assert_eq!(board.cell_state(Cell::new(0, 1)), Some(CellState::ExcludedEmpty));
}

#[test]
fn test_add_ship_out_of_bounds() {
    let mut board = Board::new(6);
    let ship = Ship::new(Cell::new(0, 4), 3, Orientation::Horizontal);
    assert_eq!(board.add_ship(ship).unwrap_err(), BoardError::InvalidPlacement);
    let ship = Ship::new(Cell::new(-1, 0), 1, Orientation::Horizontal);
    assert_eq!(board.add_ship(ship).unwrap_err(), BoardError::InvalidPlacement);
    assert!(board.ships().is_empty());
    assert!(board.rows().flatten().all(|s| *s == CellState::Empty));
}

#[test]
fn test_add_ship_rejects_touching() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Cell::new(2, 2), 2, Orientation::Horizontal))
        .unwrap();

    // overlapping, side by side and diagonal neighbours are all refused
    for ship in [
        Ship::new(Cell::new(2, 3), 1, Orientation::Horizontal),
        Ship::new(Cell::new(3, 2), 2, Orientation::Horizontal),
        Ship::new(Cell::new(3, 4), 1, Orientation::Horizontal),
        Ship::new(Cell::new(0, 1), 2, Orientation::Vertical),
    ] {
        assert_eq!(board.add_ship(ship).unwrap_err(), BoardError::InvalidPlacement);
    }
    assert_eq!(board.ships().len(), 1);

    // one cell of water in between is enough
    board
        .add_ship(Ship::new(Cell::new(4, 2), 2, Orientation::Horizontal))
        .unwrap();
    board
        .add_ship(Ship::new(Cell::new(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    assert_eq!(board.ships().len(), 3);
}

#[test]
fn test_placement_contour_stays_hidden() {
    let mut board = Board::new(6);
    board
        .add_ship(Ship::new(Cell::new(1, 1), 2, Orientation::Vertical))
        .unwrap();
    assert_eq!(board.cell_state(Cell::new(1, 1)), Some(CellState::ShipIntact));
    assert_eq!(board.cell_state(Cell::new(2, 1)), Some(CellState::ShipIntact));
    assert!(board.is_busy(Cell::new(0, 0)));
    assert_eq!(board.cell_state(Cell::new(0, 0)), Some(CellState::Empty));

    board.reset_turn_exclusions();
    assert!(!board.is_busy(Cell::new(0, 0)));
    assert!(!board.is_busy(Cell::new(1, 1)));
}

#[test]
fn test_empty_board_not_defeated() {
    let board = Board::new(6);
    assert!(!board.is_defeated());
    assert_eq!(board.cell_state(Cell::new(6, 6)), None);
}

#[test]
fn test_defeated_only_when_all_sunk() {
    let mut board = board_with(
        6,
        &[
            Ship::new(Cell::new(0, 0), 1, Orientation::Horizontal),
            Ship::new(Cell::new(5, 5), 1, Orientation::Horizontal),
        ],
    );
    assert_eq!(board.resolve_shot(Cell::new(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert!(!board.is_defeated());
    assert_eq!(board.resolve_shot(Cell::new(5, 5)).unwrap(), ShotOutcome::Sunk);
    assert!(board.is_defeated());
    assert_eq!(board.destroyed(), 2);
}

#[test]
fn test_debug_output_has_no_trailing_newline() {
    let board = board_with(6, &[Ship::new(Cell::new(0, 0), 2, Orientation::Vertical)]);
    let dbg = format!("{:?}", board);
    assert!(dbg.starts_with("Board {"));
    assert!(dbg.ends_with('}'));
    assert!(dbg.contains("size: 6"));
}
