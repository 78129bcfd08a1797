//! Board module - the dealt set of cards
//!
//! A board is `2 * pairs` cards stored in board order. Each symbol of the
//! alphabet appears on exactly two cards. Card ids are board positions and are
//! assigned after the shuffle, so `cards[i].id == i` always holds.

use std::collections::BTreeMap;

use crate::rng::SimpleRng;
use crate::types::{CardId, CardState, Symbol};

/// A single card on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: CardId,
    pub symbol: Symbol,
    pub state: CardState,
}

impl Card {
    pub fn is_face_down(&self) -> bool {
        self.state == CardState::FaceDown
    }

    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }
}

/// The dealt cards for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Cards in board order (index == id)
    cards: Vec<Card>,
}

impl Board {
    /// Deal a board from an alphabet of distinct symbols.
    ///
    /// Each symbol is duplicated, the resulting sequence is shuffled with
    /// Fisher-Yates, and ids are assigned from the final positions. All cards
    /// start face down.
    pub fn from_alphabet(alphabet: &[Symbol], rng: &mut SimpleRng) -> Self {
        let mut symbols: Vec<Symbol> = alphabet.iter().chain(alphabet.iter()).copied().collect();
        rng.shuffle(&mut symbols);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(id, symbol)| Card {
                id,
                symbol,
                state: CardState::FaceDown,
            })
            .collect();

        Self { cards }
    }

    /// Deal a board using the first `pairs` symbols of the built-in alphabet.
    pub fn generate(pairs: usize, rng: &mut SimpleRng) -> Self {
        Self::from_alphabet(&Symbol::alphabet(pairs), rng)
    }

    /// Build a board with a fixed layout (no shuffle).
    ///
    /// Intended for tests and replays that need to know where each symbol is.
    pub fn from_symbols(symbols: &[Symbol]) -> Self {
        let cards = symbols
            .iter()
            .enumerate()
            .map(|(id, &symbol)| Card {
                id,
                symbol,
                state: CardState::FaceDown,
            })
            .collect();
        Self { cards }
    }

    /// Total number of cards
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt
    pub fn pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Get card by id
    /// Returns None if out of range
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    pub(crate) fn set_state(&mut self, id: CardId, state: CardState) -> bool {
        match self.cards.get_mut(id) {
            Some(card) => {
                card.state = state;
                true
            }
            None => false,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// How many cards carry `symbol`
    pub fn symbol_count(&self, symbol: Symbol) -> usize {
        self.cards.iter().filter(|c| c.symbol == symbol).count()
    }

    /// Every symbol on the board appears on exactly two cards.
    pub fn is_paired(&self) -> bool {
        let mut counts: BTreeMap<Symbol, usize> = BTreeMap::new();
        for card in &self.cards {
            *counts.entry(card.symbol).or_default() += 1;
        }
        counts.values().all(|&n| n == 2)
    }

    /// Number of cards in the `Matched` state
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count()
    }

    /// Ids of the two cards carrying `symbol`, in board order.
    pub fn positions_of(&self, symbol: Symbol) -> Vec<CardId> {
        self.cards
            .iter()
            .filter(|c| c.symbol == symbol)
            .map(|c| c.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_paired() {
        let s = Symbol::alphabet(2);
        let mut rng = SimpleRng::new(3);
        assert!(Board::generate(8, &mut rng).is_paired());
        assert!(Board::from_symbols(&[s[1], s[0], s[0], s[1]]).is_paired());
        assert!(!Board::from_symbols(&[s[0]]).is_paired());
        assert!(!Board::from_symbols(&[s[0], s[1]]).is_paired());
        assert!(!Board::from_symbols(&[s[0], s[0], s[0], s[0]]).is_paired());
    }

    #[test]
    fn test_generate_card_count() {
        let mut rng = SimpleRng::new(1);
        let board = Board::generate(8, &mut rng);
        assert_eq!(board.len(), 16);
        assert_eq!(board.pairs(), 8);
    }

    #[test]
    fn test_every_symbol_appears_twice() {
        let mut rng = SimpleRng::new(12345);
        let alphabet = Symbol::alphabet(8);
        let board = Board::from_alphabet(&alphabet, &mut rng);
        for symbol in alphabet {
            assert_eq!(board.symbol_count(symbol), 2, "symbol {}", symbol);
        }
    }

    #[test]
    fn test_ids_follow_board_order() {
        let mut rng = SimpleRng::new(5);
        let board = Board::generate(6, &mut rng);
        for (i, card) in board.iter().enumerate() {
            assert_eq!(card.id, i);
        }
    }

    #[test]
    fn test_all_cards_start_face_down() {
        let mut rng = SimpleRng::new(5);
        let board = Board::generate(4, &mut rng);
        assert!(board.iter().all(Card::is_face_down));
        assert_eq!(board.matched_count(), 0);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let a = Board::generate(8, &mut SimpleRng::new(9));
        let b = Board::generate(8, &mut SimpleRng::new(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_symbols_keeps_layout() {
        let alphabet = Symbol::alphabet(2);
        let (a, b) = (alphabet[0], alphabet[1]);
        let board = Board::from_symbols(&[a, b, a, b]);
        assert_eq!(board.positions_of(a), vec![0, 2]);
        assert_eq!(board.positions_of(b), vec![1, 3]);
    }

    #[test]
    fn test_get_out_of_range() {
        let board = Board::generate(1, &mut SimpleRng::new(1));
        assert!(board.get(0).is_some());
        assert!(board.get(1).is_some());
        assert!(board.get(2).is_none());
    }

    #[test]
    fn test_set_state() {
        let mut board = Board::generate(1, &mut SimpleRng::new(1));
        assert!(board.set_state(1, CardState::Matched));
        assert!(!board.set_state(2, CardState::Matched));
        assert_eq!(board.matched_count(), 1);
    }
}
