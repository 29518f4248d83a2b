use tty_tetris::core::{ActivePiece, GameSnapshot, GameState};
use tty_tetris::term::{AnchorY, GameView, Viewport};
use tty_tetris::types::PieceKind;

fn empty_snapshot() -> GameSnapshot {
    GameSnapshot::default()
}

#[test]
fn term_view_draws_ascii_frame() {
    let view = GameView::default();
    // 10 cells * 2 columns + 2 walls = 22; 10 rows + 2 rules + score line = 13
    let fb = view.render(&empty_snapshot(), Viewport::new(22, 13));

    let rule = format!(" {} ", "-".repeat(20));
    let inner = format!("|{}|", " ".repeat(20));
    assert_eq!(fb.row_text(0), rule);
    for y in 1..=10 {
        assert_eq!(fb.row_text(y), inner, "row {}", y);
    }
    assert_eq!(fb.row_text(11), rule);
    assert!(fb.row_text(12).starts_with("Score: 0"));
}

#[test]
fn term_view_renders_filled_cell_two_columns_wide() {
    let mut snap = empty_snapshot();
    snap.grid[9][0] = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 13));

    assert_eq!(fb.get(1, 10).unwrap().ch, '#');
    assert_eq!(fb.get(2, 10).unwrap().ch, '#');
    assert_eq!(fb.get(3, 10).unwrap().ch, ' ');
    assert_eq!(fb.get(0, 10).unwrap().ch, '|');
}

#[test]
fn term_view_shows_active_piece_from_snapshot() {
    let snap = GameState::new(1)
        .with_active(ActivePiece::new(PieceKind::O, 4, 0))
        .snapshot();
    let fb = GameView::default().render(&snap, Viewport::new(22, 13));

    let expected = format!("|{}####{}|", " ".repeat(8), " ".repeat(8));
    assert_eq!(fb.row_text(1), expected);
    assert_eq!(fb.row_text(2), expected);
}

#[test]
fn term_view_score_line_uses_snapshot_score() {
    let mut snap = empty_snapshot();
    snap.score = 42;
    let fb = GameView::default().render(&snap, Viewport::new(22, 13));
    assert_eq!(fb.row_text(12).trim_end(), "Score: 42");
}

#[test]
fn term_view_game_over_replaces_well() {
    let mut snap = empty_snapshot();
    snap.game_over = true;
    snap.score = 7;
    snap.grid[9][0] = true;
    let fb = GameView::default().render(&snap, Viewport::new(22, 13));

    assert_eq!(fb.row_text(5).trim(), "Game Over!");
    assert_eq!(fb.row_text(6).trim(), "Score: 7");
    assert_eq!(fb.row_text(7), "Press SPACE to restart");
    for y in 0..fb.height() {
        let text = fb.row_text(y);
        assert!(!text.contains('|'), "row {}: {:?}", y, text);
        assert!(!text.contains('#'), "row {}: {:?}", y, text);
    }
}

#[test]
fn term_view_centers_in_large_viewport() {
    let view = GameView::default();
    let fb = view.render(&empty_snapshot(), Viewport::new(42, 23));
    let layout = view.layout(Viewport::new(42, 23));
    assert_eq!((layout.x, layout.y), (10, 5));
    assert_eq!(fb.get(10, 6).unwrap().ch, '|');
    assert_eq!(fb.get(31, 6).unwrap().ch, '|');

    let top = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&empty_snapshot(), Viewport::new(42, 23));
    assert_eq!(top.get(10, 1).unwrap().ch, '|');
}

#[test]
fn term_view_survives_tiny_viewport() {
    let view = GameView::default();
    let mut snap = empty_snapshot();
    snap.grid[9][9] = true;
    for (w, h) in [(0, 0), (1, 1), (5, 3), (21, 12)] {
        let fb = view.render(&snap, Viewport::new(w, h));
        assert_eq!((fb.width(), fb.height()), (w, h));
    }
    snap.game_over = true;
    let fb = view.render(&snap, Viewport::new(3, 2));
    assert_eq!(fb.width(), 3);
}
