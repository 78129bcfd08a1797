use tui_memory::core::{Board, Game, GameConfig, GameSnapshot};
use tui_memory::term::{AnchorY, GameView, Palette, ViewContext, Viewport};
use tui_memory::types::{Symbol, Theme};

fn ab_game() -> Game {
    let s = Symbol::alphabet(2);
    let board = Board::from_symbols(&[s[0], s[1], s[0], s[1]]);
    Game::with_board(GameConfig::default().with_pairs(2), board).unwrap()
}

fn text(fb: &tui_memory::term::FrameBuffer) -> String {
    fb.to_text()
}

fn won_snapshot() -> GameSnapshot {
    let mut game = ab_game();
    game.request_flip(0);
    game.request_flip(2);
    game.advance(1000);
    game.request_flip(1);
    game.request_flip(3);
    game.advance(1500);
    game.snapshot()
}

#[test]
fn test_term_view_renders_frame_corners() {
    let snap = Game::new(GameConfig::default()).unwrap().snapshot();
    let view = GameView::default();

    // 4x4 tiles of 7x3 with 1-column gaps, plus frame padding => 35x14
    let fb = view.render(&snap, &ViewContext::default(), Viewport::new(35, 14));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(34, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 13).unwrap().ch, '└');
    assert_eq!(fb.get(34, 13).unwrap().ch, '┘');
    assert!(text(&fb).contains("MEMORY"));
}

#[test]
fn test_term_view_face_down_cards_hide_symbols() {
    let snap = ab_game().snapshot();
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let vp = Viewport::new(40, 10);
    let fb = view.render(&snap, &ViewContext::default(), vp);

    let layout = view.layout(snap.cards.len(), vp);
    for id in 0..4 {
        let (x, y) = layout.card_origin(id);
        assert_eq!(fb.get(x + 3, y + 1).unwrap().ch, '?');
    }
    let all = text(&fb);
    for s in Symbol::alphabet(2) {
        assert!(!all.contains(s.glyph()));
    }
}

#[test]
fn test_term_view_face_up_and_matched_show_glyph() {
    let mut game = ab_game();
    game.request_flip(0);
    game.request_flip(2);
    game.advance(1000);
    game.request_flip(1);
    let snap = game.snapshot();

    let view = GameView::default();
    let vp = Viewport::new(40, 12);
    let fb = view.render(&snap, &ViewContext::default(), vp);
    let layout = view.layout(4, vp);
    let palette = Palette::for_theme(Theme::Light);

    let s = Symbol::alphabet(2);
    let (x, y) = layout.card_origin(0);
    let matched = fb.get(x + 3, y + 1).unwrap();
    assert_eq!(matched.ch, s[0].glyph());
    assert_eq!(matched.style.bg, palette.card_matched.bg);

    let (x, y) = layout.card_origin(1);
    let face_up = fb.get(x + 3, y + 1).unwrap();
    assert_eq!(face_up.ch, s[1].glyph());
    assert_eq!(face_up.style.bg, palette.card_face.bg);

    let (x, y) = layout.card_origin(3);
    assert_eq!(fb.get(x + 3, y + 1).unwrap().ch, '?');
}

#[test]
fn test_term_view_draws_side_panel_when_wide_enough() {
    let mut game = ab_game();
    game.request_flip(0);
    game.request_flip(2);
    game.advance(65_000);
    let snap = game.snapshot();

    let view = GameView::default();
    let fb = view.render(&snap, &ViewContext::default(), Viewport::new(60, 20));
    let all = text(&fb);
    assert!(all.contains("MOVES"));
    assert!(all.contains("TIME"));
    assert!(all.contains("01:05"));
    assert!(all.contains("MATCHES"));
    assert!(all.contains("1 / 2"));
    assert!(all.contains("light"));
}

#[test]
fn test_term_view_skips_side_panel_when_narrow() {
    let snap = ab_game().snapshot();
    let fb = GameView::default().render(&snap, &ViewContext::default(), Viewport::new(20, 10));
    assert!(!text(&fb).contains("MOVES"));
}

#[test]
fn test_term_view_win_overlay() {
    let snap = won_snapshot();
    let fb = GameView::default().render(&snap, &ViewContext::default(), Viewport::new(60, 12));
    let all = text(&fb);
    assert!(all.contains("YOU WIN!"));
    assert!(all.contains("Moves: 2"));
    assert!(all.contains("Time: 00:02"));
    assert!(all.contains("R / Enter: play again"));
}

#[test]
fn test_term_view_cursor_changes_border_colour() {
    let snap = ab_game().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 10);
    let ctx = ViewContext {
        theme: Theme::Dark,
        cursor: Some(1),
    };
    let fb = view.render(&snap, &ctx, vp);
    let layout = view.layout(4, vp);
    let palette = Palette::dark();

    let (x, y) = layout.card_origin(1);
    assert_eq!(fb.get(x, y).unwrap().style.fg, palette.cursor.fg);
    let (x, y) = layout.card_origin(0);
    assert_eq!(fb.get(x, y).unwrap().style.fg, palette.card_back.fg);
}

#[test]
fn test_term_view_theme_sets_background() {
    let snap = ab_game().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 10);
    let light = view.render(&snap, &ViewContext::default(), vp);
    let dark = view.render(
        &snap,
        &ViewContext {
            theme: Theme::Dark,
            cursor: None,
        },
        vp,
    );
    assert_eq!(light.get(0, 0).unwrap().style.bg, Palette::light().screen.bg);
    assert_eq!(dark.get(0, 0).unwrap().style.bg, Palette::dark().screen.bg);
}

#[test]
fn test_term_view_hit_test_maps_clicks() {
    let snap = ab_game().snapshot();
    let view = GameView::default();
    let vp = Viewport::new(40, 10);
    let layout = view.layout(4, vp);

    for id in 0..4 {
        let (x, y) = layout.card_origin(id);
        assert_eq!(view.hit_test(&snap, vp, x + 1, y + 1), Some(id));
    }
    let (x, y) = layout.card_origin(0);
    // The gap column right of the first tile.
    assert_eq!(view.hit_test(&snap, vp, x + 7, y + 1), None);
    assert_eq!(view.hit_test(&snap, vp, 0, 0), None);
}
