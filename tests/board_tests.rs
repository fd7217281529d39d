//! Board tests - cell access and line clearing

use blockfall::core::{Board, BoardError};
use blockfall::types::{Color, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(board: &mut Board, row: i32, color: Color) {
    for col in 0..board.cols() as i32 {
        board.set_cell(row, col, color).unwrap();
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::default();
    assert_eq!(board.cols(), BOARD_WIDTH as usize);
    assert_eq!(board.rows(), BOARD_HEIGHT as usize);

    for row in 0..BOARD_HEIGHT as i32 {
        for col in 0..BOARD_WIDTH as i32 {
            assert!(!board.is_occupied(row, col), "cell ({}, {}) should be empty", row, col);
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::default();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i32, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i32), None);
}

#[test]
fn test_board_set_and_clear_cell() {
    let mut board = Board::default();

    board.set_cell(10, 5, Color::BLUE).unwrap();
    assert_eq!(board.get(10, 5), Some(Some(Color::BLUE)));
    assert!(board.is_occupied(10, 5));

    board.clear_cell(10, 5).unwrap();
    assert_eq!(board.get(10, 5), Some(None));
    assert!(!board.is_occupied(10, 5));
}

#[test]
fn test_board_writes_out_of_bounds_fail_loudly() {
    let mut board = Board::default();

    let err = board.set_cell(20, 0, Color::RED).unwrap_err();
    assert_eq!(
        err,
        BoardError::OutOfBounds {
            row: 20,
            col: 0,
            rows: 20,
            cols: 10
        }
    );
    assert_eq!(err.to_string(), "cell (20, 0) is outside the 20x10 board");

    assert!(board.set_cell(-1, 0, Color::RED).is_err());
    assert!(board.set_cell(0, 10, Color::RED).is_err());
    assert!(board.clear_cell(0, -1).is_err());
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_out_of_range_reads_as_occupied() {
    let board = Board::default();
    assert!(board.is_occupied(-1, 0));
    assert!(board.is_occupied(0, 10));
    assert!(board.is_occupied(20, 0));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::default();
    assert!(!board.is_row_full(5));

    fill_row(&mut board, 5, Color::BLUE);
    assert!(board.is_row_full(5));

    for col in 0..BOARD_WIDTH as i32 - 1 {
        board.set_cell(6, col, Color::RED).unwrap();
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_full(100));
}

#[test]
fn test_clear_on_line_free_board_is_noop() {
    let mut board = Board::from_ascii(&["....", "#.#.", ".###"], Color::RED);
    let before = board.clone();
    assert_eq!(board.clear_full_lines(), 0);
    assert_eq!(board, before);
    assert_eq!(Board::default().clear_full_lines(), 0);
}

#[test]
fn test_clear_single_row_shifts_above_down() {
    let mut board = Board::default();
    fill_row(&mut board, 5, Color::BLUE);
    board.set_cell(3, 0, Color::RED).unwrap();
    board.set_cell(4, 1, Color::GREEN).unwrap();

    assert_eq!(board.clear_full_lines(), 1);

    assert_eq!(board.get(5, 1), Some(Some(Color::GREEN)));
    assert_eq!(board.get(4, 0), Some(Some(Color::RED)));
    assert_eq!(board.get(3, 0), Some(None));
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_clear_adjacent_rows_in_one_call() {
    let mut board = Board::default();
    fill_row(&mut board, 10, Color::RED);
    fill_row(&mut board, 11, Color::GREEN);
    board.set_cell(9, 0, Color::BLUE).unwrap();

    assert_eq!(board.clear_full_lines(), 2);

    assert_eq!(board.get(11, 0), Some(Some(Color::BLUE)));
    assert_eq!(board.occupied_count(), 1);
    assert!(!board.is_row_full(10));
    assert!(!board.is_row_full(11));
}

#[test]
fn test_clear_bottom_rows() {
    let mut board = Board::default();
    fill_row(&mut board, 18, Color::RED);
    fill_row(&mut board, 19, Color::GREEN);
    board.set_cell(17, 0, Color::BLUE).unwrap();

    assert_eq!(board.clear_full_lines(), 2);

    // Dropped by both cleared rows.
    assert_eq!(board.get(19, 0), Some(Some(Color::BLUE)));
}

#[test]
fn test_clear_separated_rows_order() {
    let mut board = Board::default();
    fill_row(&mut board, 5, Color::RED);
    fill_row(&mut board, 10, Color::RED);
    fill_row(&mut board, 15, Color::RED);

    board.set_cell(4, 0, Color::BLUE).unwrap(); // Above row 5
    board.set_cell(9, 0, Color::GREEN).unwrap(); // Above row 10
    board.set_cell(14, 0, Color::YELLOW).unwrap(); // Above row 15

    assert_eq!(board.clear_full_lines(), 3);

    // Each marker drops by the number of full rows below it.
    assert_eq!(board.get(7, 0), Some(Some(Color::BLUE)));
    assert_eq!(board.get(11, 0), Some(Some(Color::GREEN)));
    assert_eq!(board.get(15, 0), Some(Some(Color::YELLOW)));
}

#[test]
fn test_clear_whole_board_full() {
    let mut board = Board::new(4, 4);
    for row in 0..4 {
        fill_row(&mut board, row, Color::CYAN);
    }
    assert_eq!(board.clear_full_lines(), 4);
    assert_eq!(board.occupied_count(), 0);
}

#[test]
fn test_board_clear() {
    let mut board = Board::default();
    fill_row(&mut board, 5, Color::BLUE);

    board.clear();

    assert_eq!(board.occupied_count(), 0);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_board_rows_iter_shape() {
    let board = Board::new(6, 4);
    let rows: Vec<_> = board.rows_iter().collect();
    assert_eq!(rows.len(), 6);
    assert!(rows.iter().all(|row| row.len() == 4));
    assert_eq!(board.cells().len(), 24);
}
