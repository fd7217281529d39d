use blockfall::core::{Board, Piece};
use blockfall::term::{AnchorY, GameView, Rgb, Viewport};
use blockfall::types::{Color, PieceKind};

#[test]
fn term_view_renders_border_corners() {
    let board = Board::default();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&board, None, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut board = Board::default();
    board.set_cell(19, 0, Color::RED).unwrap();

    let view = GameView::default();
    let fb = view.render(&board, None, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0, y0).unwrap().style.fg, Rgb::new(255, 0, 0));
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_active_piece_at_spawn() {
    let board = Board::default();
    let piece = Piece::spawn(PieceKind::O, board.cols());
    let fb = GameView::default().render(&board, Some(&piece), Viewport::new(22, 22));

    // Columns 4..6 map to x = 1 + 4*2 ..= 1 + 5*2 + 1.
    assert_eq!(fb.row_text(1), "│········████········│");
    assert_eq!(fb.row_text(2), "│········████········│");
    assert_eq!(fb.row_text(3), "│····················│");
    assert_eq!(fb.get(9, 1).unwrap().style.fg, Rgb::new(0, 255, 0));
}

#[test]
fn term_view_centers_playfield_in_viewport() {
    let board = Board::default();
    let fb = GameView::default().render(&board, None, Viewport::new(40, 30));

    // (40 - 22) / 2 = 9, (30 - 22) / 2 = 4
    assert_eq!(fb.get(9, 4).unwrap().ch, '┌');
    assert_eq!(fb.get(30, 25).unwrap().ch, '┘');
    assert_eq!(fb.get(8, 4).unwrap().ch, ' ');
}

#[test]
fn term_view_top_anchor_pins_to_first_row() {
    let board = Board::default();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&board, None, Viewport::new(22, 40));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.row_text(22).trim(), "");
}

#[test]
fn term_view_shows_key_hints_when_wide_enough() {
    let board = Board::default();
    let view = GameView::default();

    let narrow = view.render(&board, None, Viewport::new(40, 22));
    assert!(!narrow.row_text(0).contains("KEYS"));

    let wide = view.render(&board, None, Viewport::new(60, 22));
    assert!(wide.row_text(0).contains("KEYS"));
    assert!(wide.row_text(4).contains("rotate"));
}

#[test]
fn term_view_follows_board_dimensions() {
    let board = Board::new(6, 4);
    let view = GameView::new(1, 1).with_anchor_y(AnchorY::Top);
    assert_eq!(view.frame_size(&board), (6, 8));

    let fb = view.render(&board, None, Viewport::new(6, 8));
    assert_eq!(fb.row_text(0), "┌────┐");
    assert_eq!(fb.row_text(6), "│····│");
    assert_eq!(fb.row_text(7), "└────┘");
}
