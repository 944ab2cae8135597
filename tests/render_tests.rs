use salvo::{render, status_lines, Board, Direction, GameConfig};

fn small_board() -> Board {
    let config = GameConfig {
        grid_size: 5,
        num_ships: 2,
        num_shots: 10,
        ..GameConfig::default()
    };
    let mut board = Board::new(&config).unwrap();
    board.place_ship(0, 0, Direction::Right, 3).unwrap();
    board
}

#[test]
fn test_fog_of_war_hides_ships() {
    let board = small_board();
    let lines = render(board.grid(), false);
    assert_eq!(
        lines,
        vec![
            "A . . . . .",
            "B . . . . .",
            "C . . . . .",
            "D . . . . .",
            "E . . . . .",
            "  0 1 2 3 4",
        ]
    );
}

#[test]
fn test_debug_view_reveals_ships() {
    let board = small_board();
    let lines = render(board.grid(), true);
    assert_eq!(lines[0], "A O O O . .");
    assert_eq!(lines[1], "B . . . . .");
}

#[test]
fn test_hits_and_misses() {
    let mut board = small_board();
    board.apply_shot(0, 1).unwrap();
    board.apply_shot(4, 4).unwrap();
    let hidden = render(board.grid(), false);
    assert_eq!(hidden[0], "A . X . . .");
    assert_eq!(hidden[4], "E . . . . #");
    let revealed = render(board.grid(), true);
    assert_eq!(revealed[0], "A O X O . .");
    // rendering is pure
    assert_eq!(render(board.grid(), false), hidden);
}

#[test]
fn test_status_lines() {
    let mut board = small_board();
    board.apply_shot(3, 3).unwrap();
    assert_eq!(
        status_lines(&board),
        [
            "Number of ships remaining: 2".to_string(),
            "Number of bullets left: 9".to_string(),
        ]
    );
}
