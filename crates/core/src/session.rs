//! Session module - rules for a single play-through
//!
//! `GameSession` is the card-flip state machine for one dealt board. It knows
//! nothing about wall-clock time: the [`Game`](crate::game::Game) controller
//! decides when `evaluate_pending`, `tick` and `declare_won` are called.
//!
//! Invalid operations (double clicks, clicks during the reveal delay, clicks
//! on resolved cards) are silent no-ops reported through [`FlipOutcome`].

use arrayvec::ArrayVec;
use tracing::{debug, trace};

use crate::board::Board;
use crate::types::{CardId, CardState, FlipRejection, SessionPhase};

/// Result of a flip request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// The request was ignored; nothing changed.
    Ignored(FlipRejection),
    /// The card turned face up; one card is now pending.
    Revealed { first_flip: bool },
    /// The card turned face up and completed a pair; input is now blocked
    /// until the pair is evaluated.
    PairRevealed { first_flip: bool },
}

impl FlipOutcome {
    pub fn accepted(&self) -> bool {
        !matches!(self, FlipOutcome::Ignored(_))
    }

    pub fn first_flip(&self) -> bool {
        match self {
            FlipOutcome::Ignored(_) => false,
            FlipOutcome::Revealed { first_flip } | FlipOutcome::PairRevealed { first_flip } => {
                *first_flip
            }
        }
    }
}

/// Result of evaluating the pending pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairResult {
    pub first: CardId,
    pub second: CardId,
    pub matched: bool,
    /// This match found the last pair on the board.
    pub board_complete: bool,
}

/// Complete state of one session
#[derive(Debug, Clone)]
pub struct GameSession {
    /// Identity of this session; delayed events carry it.
    generation: u64,
    board: Board,
    /// Face-up cards awaiting evaluation, in flip order.
    pending: ArrayVec<CardId, 2>,
    matched_pairs: u32,
    moves: u32,
    elapsed_secs: u32,
    accepting_input: bool,
    started: bool,
    won: bool,
}

impl GameSession {
    /// Create a fresh (idle) session over a newly dealt board
    pub fn new(generation: u64, board: Board) -> Self {
        Self {
            generation,
            board,
            pending: ArrayVec::new(),
            matched_pairs: 0,
            moves: 0,
            elapsed_secs: 0,
            accepting_input: true,
            started: false,
            won: false,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pending(&self) -> &[CardId] {
        &self.pending
    }

    pub fn pairs(&self) -> u32 {
        self.board.pairs() as u32
    }

    pub fn matched_pairs(&self) -> u32 {
        self.matched_pairs
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    pub fn accepting_input(&self) -> bool {
        self.accepting_input
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn phase(&self) -> SessionPhase {
        if self.won {
            SessionPhase::Won
        } else if self.started {
            SessionPhase::Running
        } else {
            SessionPhase::Idle
        }
    }

    /// Whether the clock should be advancing
    pub fn is_running(&self) -> bool {
        self.phase() == SessionPhase::Running
    }

    /// All pairs found (the win may not have been announced yet)
    pub fn board_complete(&self) -> bool {
        self.matched_pairs == self.pairs()
    }

    /// Turn a face-down card face up.
    pub fn request_flip(&mut self, id: CardId) -> FlipOutcome {
        if !self.accepting_input {
            return FlipOutcome::Ignored(FlipRejection::InputBlocked);
        }
        let Some(card) = self.board.get(id) else {
            return FlipOutcome::Ignored(FlipRejection::NoSuchCard);
        };
        if !card.is_face_down() {
            return FlipOutcome::Ignored(FlipRejection::NotFaceDown);
        }

        let first_flip = !self.started;
        self.started = true;
        self.board.set_state(id, CardState::FaceUp);
        self.pending.push(id);
        trace!(generation = self.generation, id, "card revealed");

        if self.pending.is_full() {
            self.accepting_input = false;
            self.moves += 1;
            debug!(
                generation = self.generation,
                moves = self.moves,
                "pair revealed, awaiting evaluation"
            );
            FlipOutcome::PairRevealed { first_flip }
        } else {
            FlipOutcome::Revealed { first_flip }
        }
    }

    /// Resolve the two pending cards.
    ///
    /// Returns `None` (and changes nothing) unless exactly two cards are pending.
    pub fn evaluate_pending(&mut self) -> Option<PairResult> {
        if !self.pending.is_full() {
            return None;
        }
        let (first, second) = (self.pending[0], self.pending[1]);
        let matched = match (self.board.get(first), self.board.get(second)) {
            (Some(a), Some(b)) => a.symbol == b.symbol,
            _ => false,
        };

        let next_state = if matched {
            self.matched_pairs += 1;
            CardState::Matched
        } else {
            CardState::FaceDown
        };
        self.board.set_state(first, next_state);
        self.board.set_state(second, next_state);
        self.pending.clear();

        let board_complete = self.board_complete();
        // The last match keeps input blocked through the win hold; only a
        // reset reopens it.
        self.accepting_input = !board_complete;

        debug!(
            generation = self.generation,
            first,
            second,
            matched,
            matched_pairs = self.matched_pairs,
            "pair evaluated"
        );

        Some(PairResult {
            first,
            second,
            matched,
            board_complete,
        })
    }

    /// Advance the clock by one second while running.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_secs += 1;
        true
    }

    /// Mark the session won. Only valid once every pair is matched.
    pub fn declare_won(&mut self) -> bool {
        if self.won || !self.board_complete() {
            return false;
        }
        self.won = true;
        self.accepting_input = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Symbol;

    /// Board layout `A B A B`.
    fn two_pair_session() -> GameSession {
        let alphabet = Symbol::alphabet(2);
        let (a, b) = (alphabet[0], alphabet[1]);
        GameSession::new(1, Board::from_symbols(&[a, b, a, b]))
    }

    fn state(session: &GameSession, id: CardId) -> CardState {
        session.board().get(id).map(|c| c.state).unwrap()
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = two_pair_session();
        assert_eq!(session.phase(), SessionPhase::Idle);
        assert!(session.accepting_input());
        assert_eq!(session.moves(), 0);
        assert_eq!(session.matched_pairs(), 0);
        assert_eq!(session.elapsed_secs(), 0);
        assert!(session.pending().is_empty());
    }

    #[test]
    fn test_first_flip_starts_session() {
        let mut session = two_pair_session();
        let outcome = session.request_flip(0);
        assert_eq!(outcome, FlipOutcome::Revealed { first_flip: true });
        assert!(session.started());
        assert_eq!(session.phase(), SessionPhase::Running);
        assert_eq!(state(&session, 0), CardState::FaceUp);
        assert_eq!(session.pending(), &[0]);
    }

    #[test]
    fn test_single_flip_does_not_count_move() {
        let mut session = two_pair_session();
        session.request_flip(0);
        assert_eq!(session.moves(), 0);
        assert!(session.accepting_input());
    }

    #[test]
    fn test_second_flip_blocks_input_and_counts_move() {
        let mut session = two_pair_session();
        session.request_flip(0);
        let outcome = session.request_flip(1);
        assert_eq!(outcome, FlipOutcome::PairRevealed { first_flip: false });
        assert_eq!(session.moves(), 1);
        assert!(!session.accepting_input());
    }

    #[test]
    fn test_flip_same_card_twice_is_ignored() {
        let mut session = two_pair_session();
        session.request_flip(0);
        let outcome = session.request_flip(0);
        assert_eq!(outcome, FlipOutcome::Ignored(FlipRejection::NotFaceDown));
        assert_eq!(session.pending(), &[0]);
        assert_eq!(session.moves(), 0);
    }

    #[test]
    fn test_flip_out_of_range_is_ignored() {
        let mut session = two_pair_session();
        let outcome = session.request_flip(4);
        assert_eq!(outcome, FlipOutcome::Ignored(FlipRejection::NoSuchCard));
        assert!(!session.started());
    }

    #[test]
    fn test_flip_while_pair_pending_is_ignored() {
        let mut session = two_pair_session();
        session.request_flip(0);
        session.request_flip(1);
        let outcome = session.request_flip(2);
        assert_eq!(outcome, FlipOutcome::Ignored(FlipRejection::InputBlocked));
        assert_eq!(state(&session, 2), CardState::FaceDown);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_match_marks_both_cards() {
        let mut session = two_pair_session();
        session.request_flip(0);
        session.request_flip(2);
        let result = session.evaluate_pending().unwrap();
        assert!(result.matched);
        assert!(!result.board_complete);
        assert_eq!(state(&session, 0), CardState::Matched);
        assert_eq!(state(&session, 2), CardState::Matched);
        assert_eq!(session.matched_pairs(), 1);
        assert!(session.pending().is_empty());
        assert!(session.accepting_input());
    }

    #[test]
    fn test_mismatch_flips_back() {
        let mut session = two_pair_session();
        session.request_flip(0);
        session.request_flip(1);
        let result = session.evaluate_pending().unwrap();
        assert!(!result.matched);
        assert_eq!(state(&session, 0), CardState::FaceDown);
        assert_eq!(state(&session, 1), CardState::FaceDown);
        assert_eq!(session.matched_pairs(), 0);
        assert!(session.pending().is_empty());
        assert!(session.accepting_input());
    }

    #[test]
    fn test_matched_card_cannot_be_flipped() {
        let mut session = two_pair_session();
        session.request_flip(0);
        session.request_flip(2);
        session.evaluate_pending();

        let outcome = session.request_flip(0);
        assert_eq!(outcome, FlipOutcome::Ignored(FlipRejection::NotFaceDown));
        assert_eq!(state(&session, 0), CardState::Matched);
        assert_eq!(session.moves(), 1);
    }

    #[test]
    fn test_evaluate_without_pair_is_noop() {
        let mut session = two_pair_session();
        assert!(session.evaluate_pending().is_none());
        session.request_flip(0);
        assert!(session.evaluate_pending().is_none());
        assert_eq!(state(&session, 0), CardState::FaceUp);
    }

    #[test]
    fn test_last_match_keeps_input_blocked() {
        let mut session = two_pair_session();
        session.request_flip(0);
        session.request_flip(2);
        session.evaluate_pending();
        session.request_flip(1);
        session.request_flip(3);
        let result = session.evaluate_pending().unwrap();

        assert!(result.board_complete);
        assert!(session.board_complete());
        assert!(!session.accepting_input());
        // Won is only set when the announcement fires.
        assert!(!session.won());
        assert_eq!(session.phase(), SessionPhase::Running);
    }

    #[test]
    fn test_declare_won_requires_complete_board() {
        let mut session = two_pair_session();
        assert!(!session.declare_won());

        session.request_flip(0);
        session.request_flip(2);
        session.evaluate_pending();
        session.request_flip(1);
        session.request_flip(3);
        session.evaluate_pending();

        assert!(session.declare_won());
        assert!(session.won());
        assert_eq!(session.phase(), SessionPhase::Won);
        assert!(!session.declare_won());
    }

    #[test]
    fn test_tick_only_while_running() {
        let mut session = two_pair_session();
        assert!(!session.tick());
        assert_eq!(session.elapsed_secs(), 0);

        session.request_flip(0);
        assert!(session.tick());
        assert!(session.tick());
        assert_eq!(session.elapsed_secs(), 2);
    }

    #[test]
    fn test_tick_stops_after_win() {
        let mut session = two_pair_session();
        for (a, b) in [(0, 2), (1, 3)] {
            session.request_flip(a);
            session.request_flip(b);
            session.evaluate_pending();
        }
        session.tick();
        session.declare_won();
        assert!(!session.tick());
        assert_eq!(session.elapsed_secs(), 1);
    }
}
