use arrayvec::ArrayVec;

use crate::session::GameSession;
use crate::types::{CardId, CardState, Clock, SessionPhase, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSnapshot {
    pub symbol: Symbol,
    pub state: CardState,
}

/// Read-only view of a session handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub generation: u64,
    pub cards: Vec<CardSnapshot>,
    pub pending: ArrayVec<CardId, 2>,
    pub pairs: u32,
    pub matched_pairs: u32,
    pub moves: u32,
    pub elapsed_secs: u32,
    pub accepting_input: bool,
    pub started: bool,
    pub won: bool,
}

impl GameSnapshot {
    /// Refill from `session`, reusing the card allocation.
    pub fn fill_from(&mut self, session: &GameSession) {
        self.generation = session.generation();
        self.cards.clear();
        self.cards.extend(session.board().iter().map(|c| CardSnapshot {
            symbol: c.symbol,
            state: c.state,
        }));
        self.pending.clear();
        self.pending.extend(session.pending().iter().copied());
        self.pairs = session.pairs();
        self.matched_pairs = session.matched_pairs();
        self.moves = session.moves();
        self.elapsed_secs = session.elapsed_secs();
        self.accepting_input = session.accepting_input();
        self.started = session.started();
        self.won = session.won();
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

    pub fn clock(&self) -> Clock {
        Clock(self.elapsed_secs)
    }

    pub fn card(&self, id: CardId) -> Option<&CardSnapshot> {
        self.cards.get(id)
    }

    pub fn playable(&self) -> bool {
        self.accepting_input && !self.won
    }
}

impl From<&GameSession> for GameSnapshot {
    fn from(session: &GameSession) -> Self {
        let mut s = Self::default();
        s.fill_from(session);
        s
    }
}
