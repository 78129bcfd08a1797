//! Board and shuffle properties

use std::collections::HashSet;

use tui_memory::core::{Board, Game, GameConfig, SimpleRng};
use tui_memory::types::{CardState, Symbol, MAX_PAIRS};

#[test]
fn test_every_symbol_dealt_twice() {
    for pairs in 1..=MAX_PAIRS {
        for seed in 1..20 {
            let board = Board::generate(pairs, &mut SimpleRng::new(seed));
            assert_eq!(board.len(), 2 * pairs);
            for symbol in Symbol::alphabet(pairs) {
                assert_eq!(
                    board.symbol_count(symbol),
                    2,
                    "pairs={pairs} seed={seed} symbol={symbol}"
                );
            }
        }
    }
}

#[test]
fn test_ids_match_positions_and_start_face_down() {
    let board = Board::generate(8, &mut SimpleRng::new(99));
    for (i, card) in board.iter().enumerate() {
        assert_eq!(card.id, i);
        assert_eq!(card.state, CardState::FaceDown);
    }
}

#[test]
fn test_shuffle_is_permutation() {
    let mut rng = SimpleRng::new(5);
    for len in 0..40usize {
        let mut v: Vec<usize> = (0..len).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..len).collect::<Vec<_>>());
    }
}

#[test]
fn test_shuffle_short_slices_untouched() {
    let mut rng = SimpleRng::new(5);
    let before = rng.state();

    let mut empty: [u8; 0] = [];
    rng.shuffle(&mut empty);
    let mut one = [7u8];
    rng.shuffle(&mut one);

    assert_eq!(one, [7]);
    assert_eq!(rng.state(), before, "no random draws for N <= 1");
}

#[test]
fn test_same_seed_same_board() {
    let a = Board::generate(8, &mut SimpleRng::new(1234));
    let b = Board::generate(8, &mut SimpleRng::new(1234));
    assert_eq!(a, b);
}

#[test]
fn test_seeds_vary_layout() {
    let layouts: HashSet<Vec<usize>> = (1..20)
        .map(|seed| {
            Board::generate(8, &mut SimpleRng::new(seed))
                .iter()
                .map(|c| c.symbol.index())
                .collect()
        })
        .collect();
    assert!(layouts.len() > 1);
}

#[test]
fn test_reset_deals_new_layout_from_same_stream() {
    let mut game = Game::new(GameConfig::default().with_seed(77)).unwrap();
    let first: Vec<Symbol> = game.session().board().iter().map(|c| c.symbol).collect();

    let mut seen_different = false;
    for _ in 0..5 {
        game.reset();
        let next: Vec<Symbol> = game.session().board().iter().map(|c| c.symbol).collect();
        seen_different |= next != first;
    }
    assert!(seen_different);
}

#[test]
fn test_flip_rejected_on_face_up_and_matched() {
    let s = Symbol::alphabet(2);
    let board = Board::from_symbols(&[s[0], s[0], s[1], s[1]]);
    let mut game = Game::with_board(GameConfig::default().with_pairs(2), board).unwrap();

    assert!(game.request_flip(0).accepted());
    assert!(!game.request_flip(0).accepted(), "face-up card");
    assert_eq!(game.session().moves(), 0, "single flip is not a move");

    assert!(game.request_flip(1).accepted());
    game.advance(1000);
    assert_eq!(game.session().moves(), 1);

    let before = game.snapshot();
    assert!(!game.request_flip(1).accepted(), "matched card");
    assert!(!game.request_flip(4).accepted(), "no such card");
    assert_eq!(game.snapshot(), before);
}
