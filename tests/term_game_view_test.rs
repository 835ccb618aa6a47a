use queen_step::core::{BoardSize, GameSnapshot, GameState};
use queen_step::term::{FrameBuffer, GameView, PromptView, Rgb, ToolbarButton, ViewHit, Viewport};
use queen_step::types::Square;

const LIGHT: Rgb = Rgb::new(0xF0, 0xD9, 0xB5);
const DARK: Rgb = Rgb::new(0xB5, 0x88, 0x63);
const QUEEN: Rgb = Rgb::new(0xFF, 0xD1, 0x66);

/// 3x3 board, queen in the middle, block in the top-left corner.
fn snapshot() -> GameSnapshot {
    let size = BoardSize::new(3).unwrap();
    GameState::with_positions(size, Square::new(1, 1), Square::new(0, 0), 1)
        .unwrap()
        .snapshot()
}

fn render(view: GameView, snap: &GameSnapshot, vp: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(vp.width, vp.height);
    view.render_into(Some(snap), None, vp, &mut fb);
    fb
}

fn row_text(fb: &FrameBuffer, y: u16) -> String {
    (0..fb.width()).map(|x| fb.get(x, y).unwrap().ch).collect()
}

// With a 40x20 viewport a 3x3 board gets 6x3 squares:
// frame 20x11 at (10, 5), squares start at (11, 6).

#[test]
fn term_view_renders_border_corners() {
    let fb = render(GameView::default(), &snapshot(), Viewport::new(40, 20));

    assert_eq!(fb.get(10, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(29, 5).unwrap().ch, '┐');
    assert_eq!(fb.get(10, 15).unwrap().ch, '└');
    assert_eq!(fb.get(29, 15).unwrap().ch, '┘');
}

#[test]
fn term_view_colors_checkerboard_by_parity() {
    let fb = render(GameView::default(), &snapshot(), Viewport::new(40, 20));

    // Interior cell of each square (corners may carry move outlines).
    let bg_at = |row: u16, col: u16| fb.get(11 + col * 6 + 1, 6 + row * 3 + 1).unwrap().style.bg;
    assert_eq!(bg_at(0, 0), LIGHT);
    assert_eq!(bg_at(0, 1), DARK);
    assert_eq!(bg_at(2, 2), LIGHT);
    assert_eq!(bg_at(2, 1), DARK);
    assert_eq!(bg_at(1, 1), QUEEN);
}

#[test]
fn term_view_draws_queen_and_block_markers() {
    let fb = render(GameView::default(), &snapshot(), Viewport::new(40, 20));
    // Marker sits at ((6 - 1) / 2, (3 - 1) / 2) inside the square.
    assert_eq!(fb.get(17 + 2, 9 + 1).unwrap().ch, '♛');
    assert_eq!(fb.get(11 + 2, 6 + 1).unwrap().ch, '●');

    let ascii = render(
        GameView::default().with_ascii_queen(true),
        &snapshot(),
        Viewport::new(40, 20),
    );
    assert_eq!(ascii.get(19, 10).unwrap().ch, 'Q');
}

#[test]
fn term_view_outlines_legal_targets_only() {
    let fb = render(GameView::default(), &snapshot(), Viewport::new(40, 20));

    // (0, 1) is a legal target.
    assert_eq!(fb.get(17, 6).unwrap().ch, '┌');
    assert_eq!(fb.get(22, 6).unwrap().ch, '┐');
    assert_eq!(fb.get(17, 8).unwrap().ch, '└');
    assert_eq!(fb.get(22, 8).unwrap().ch, '┘');

    // The blocked square and the queen's own square are not.
    assert_eq!(fb.get(11, 6).unwrap().ch, ' ');
    assert_eq!(fb.get(17, 9).unwrap().ch, ' ');
}

#[test]
fn term_view_uses_brackets_on_single_row_squares() {
    // 22x8 leaves room for 1-row squares: frame 8x5 at (7, 2).
    let fb = render(GameView::default(), &snapshot(), Viewport::new(22, 8));
    assert_eq!(fb.get(7, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(10, 3).unwrap().ch, '[');
    assert_eq!(fb.get(11, 3).unwrap().ch, ']');
}

#[test]
fn term_view_header_shows_toolbar_size_and_moves() {
    let mut snap = snapshot();
    snap.move_count = 12;
    let fb = render(GameView::default(), &snap, Viewport::new(40, 20));

    assert!(row_text(&fb, 0).starts_with(" [Size] [Reset] [Queen] [Block]"));
    let status = row_text(&fb, 1);
    assert!(status.contains("Board: 3 x 3"));
    assert!(status.trim_end().ends_with("Moves: 12"));
}

#[test]
fn term_view_hit_test_maps_squares_and_buttons() {
    let view = GameView::default();
    let vp = Viewport::new(40, 20);
    let size = Some(BoardSize::new(3).unwrap());

    assert_eq!(view.hit_test(size, vp, 11, 6), Some(ViewHit::Square(Square::new(0, 0))));
    assert_eq!(view.hit_test(size, vp, 22, 8), Some(ViewHit::Square(Square::new(0, 1))));
    assert_eq!(view.hit_test(size, vp, 28, 14), Some(ViewHit::Square(Square::new(2, 2))));

    // Border and outside.
    assert_eq!(view.hit_test(size, vp, 10, 6), None);
    assert_eq!(view.hit_test(size, vp, 29, 6), None);
    assert_eq!(view.hit_test(size, vp, 20, 15), None);
    assert_eq!(view.hit_test(size, vp, 35, 10), None);

    // Toolbar.
    assert_eq!(view.hit_test(size, vp, 1, 0), Some(ViewHit::Button(ToolbarButton::Size)));
    assert_eq!(view.hit_test(size, vp, 7, 0), None);
    assert_eq!(view.hit_test(None, vp, 8, 0), Some(ViewHit::Button(ToolbarButton::Reset)));

    // No board yet: squares can't be hit.
    assert_eq!(view.hit_test(None, vp, 11, 6), None);
}

#[test]
fn term_view_prompt_overlay_without_game() {
    let view = GameView::default();
    let prompt = PromptView {
        input: "2",
        error: None,
        first_launch: true,
    };
    let mut fb = FrameBuffer::new(60, 20);
    view.render_into(None, Some(&prompt), Viewport::new(60, 20), &mut fb);

    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&row_text(&fb, y));
        all.push('\n');
    }
    assert!(all.contains("Board: -"));
    assert!(all.contains("Board size N"));
    assert!(all.contains("> 2_"));
    assert!(all.contains("Esc: default (8)"));
}
