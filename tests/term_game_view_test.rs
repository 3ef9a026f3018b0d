use lights_out::core::{GameState, Grid, SimpleRng};
use lights_out::term::game_view::{
    CURSOR_LIT_CHAR, CURSOR_UNLIT_CHAR, LIT_CHAR, UNLIT_CHAR, WIN_HINT, WIN_TEXT,
};
use lights_out::term::{AnchorY, FrameBuffer, GameView, Viewport};
use lights_out::types::{Coord, GameConfig};

fn screen_text(fb: &FrameBuffer) -> String {
    (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

fn one_lit_corner() -> GameState {
    let mut g = Grid::new(3, 3);
    g.set(Coord::new(0, 0), true);
    GameState::from_grid(g, SimpleRng::new(1))
}

#[test]
fn term_view_renders_border_corners() {
    let snap = one_lit_corner().snapshot();
    let view = GameView::default();

    // cell 4x2: board pixels = 12x6, plus border => 14x8
    let fb = view.render(&snap, None, Viewport::new(14, 8));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(13, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 7).unwrap().ch, '└');
    assert_eq!(fb.get(13, 7).unwrap().ch, '┘');
}

#[test]
fn term_view_fills_whole_cell_rect() {
    let snap = one_lit_corner().snapshot();
    let fb = GameView::default().render(&snap, None, Viewport::new(14, 8));

    // Lit cell (0,0) spans x 1..=4, y 1..=2.
    for y in 1..=2 {
        for x in 1..=4 {
            assert_eq!(fb.get(x, y).unwrap().ch, LIT_CHAR, "({x}, {y})");
        }
    }
    // Neighbour (0,1) is unlit.
    assert_eq!(fb.get(5, 1).unwrap().ch, UNLIT_CHAR);
    // Bottom-right cell (2,2).
    assert_eq!(fb.get(12, 6).unwrap().ch, UNLIT_CHAR);
}

#[test]
fn term_view_highlights_cursor() {
    let snap = one_lit_corner().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(14, 8);

    let on_lit = view.render(&snap, Some(Coord::new(0, 0)), vp);
    assert_eq!(on_lit.get(1, 1).unwrap().ch, CURSOR_LIT_CHAR);

    let on_dark = view.render(&snap, Some(Coord::new(1, 1)), vp);
    assert_eq!(on_dark.get(5, 3).unwrap().ch, CURSOR_UNLIT_CHAR);
    assert_eq!(on_dark.get(1, 1).unwrap().ch, LIT_CHAR);
}

#[test]
fn term_view_reflects_toggle() {
    let mut game = one_lit_corner();
    let view = GameView::default();
    let vp = Viewport::new(14, 8);

    game.toggle_around(Coord::new(1, 1)).unwrap();
    let fb = view.render(&game.snapshot(), None, vp);

    // Plus shape around the centre is now lit; corner stays lit.
    for (x, y) in [(1, 1), (5, 1), (1, 3), (5, 3), (9, 3), (5, 5)] {
        assert_eq!(fb.get(x, y).unwrap().ch, LIT_CHAR, "({x}, {y})");
    }
    assert_eq!(fb.get(9, 1).unwrap().ch, UNLIT_CHAR);
}

#[test]
fn term_view_shows_win_screen_instead_of_board() {
    let mut g = Grid::new(3, 3);
    g.set(Coord::new(0, 0), true);
    g.set(Coord::new(0, 1), true);
    g.set(Coord::new(1, 0), true);
    let mut game = GameState::from_grid(g, SimpleRng::new(1));
    game.toggle_around(Coord::new(0, 0)).unwrap();
    assert!(game.has_won());

    let fb = GameView::default().render(&game.snapshot(), Some(Coord::new(0, 0)), Viewport::new(14, 8));
    let text = screen_text(&fb);

    assert!(text.contains(WIN_TEXT));
    assert!(text.contains(WIN_HINT));
    assert!(!text.contains(LIT_CHAR));
    assert!(!text.contains(UNLIT_CHAR));
    assert!(!text.contains(CURSOR_UNLIT_CHAR));
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut game = GameState::new(GameConfig::new(3, 3, 1.0), 1);
    game.toggle_around(Coord::new(0, 0)).unwrap();
    let snap = game.snapshot();

    let fb = GameView::default().render(&snap, None, Viewport::new(50, 12));
    let text = screen_text(&fb);
    assert!(text.contains("LIT"));
    assert!(text.contains("MOVES"));
    assert!(text.contains("GAME"));

    // Too narrow: no panel.
    let fb = GameView::default().render(&snap, None, Viewport::new(14, 8));
    assert!(!screen_text(&fb).contains("MOVES"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = one_lit_corner().snapshot();

    // Frame is 8 rows tall.
    let fb = GameView::default().render(&snap, None, Viewport::new(14, 20));
    // start_y = (20 - 8) / 2 = 6
    assert_eq!(fb.get(0, 6).unwrap().ch, '┌');

    let fb = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, None, Viewport::new(14, 20));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_hit_test_round_trips_every_cell() {
    let game = GameState::new(GameConfig::new(4, 5, 1.0), 3);
    let snap = game.snapshot();
    let view = GameView::new(3, 1);
    let vp = Viewport::new(50, 20);
    let layout = view.layout(4, 5, vp);

    for row in 0..4u16 {
        for col in 0..5u16 {
            let x = layout.start_x + 1 + col * 3 + 2;
            let y = layout.start_y + 1 + row;
            assert_eq!(
                view.hit_test(&snap, vp, x, y),
                Some(Coord::new(row as usize, col as usize))
            );
        }
    }
    assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
}

#[test]
fn term_view_small_viewport_does_not_panic() {
    let snap = GameState::new(GameConfig::new(20, 20, 0.5), 1).snapshot();
    let fb = GameView::default().render(&snap, Some(Coord::new(19, 19)), Viewport::new(10, 5));
    assert_eq!((fb.width(), fb.height()), (10, 5));
}
