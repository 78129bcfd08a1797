//! Game controller - owns the live session and drives its timers.
//!
//! `Game` ties together the shuffler, the board generator, the current
//! [`GameSession`] and a [`Scheduler`] of delayed events. Time only moves when
//! the caller says so through [`Game::advance`], which keeps the whole engine
//! deterministic and testable without a real clock.

use tracing::{debug, info, instrument};

use crate::board::Board;
use crate::config::{ConfigError, GameConfig};
use crate::observer::GameObserver;
use crate::rng::SimpleRng;
use crate::schedule::{ScheduledEvent, Scheduler, TimerToken};
use crate::session::{FlipOutcome, GameSession, PairResult};
use crate::snapshot::GameSnapshot;
use crate::types::{CardId, GameAction, GameEvent, CLOCK_TICK_MS};

/// The memory game engine
#[derive(Debug, Clone)]
pub struct Game {
    config: GameConfig,
    rng: SimpleRng,
    session: GameSession,
    scheduler: Scheduler,
    /// Engine clock in milliseconds since construction.
    now_ms: u64,
    /// When the next one-second clock tick is due (None while not running).
    next_clock_tick_ms: Option<u64>,
    /// Events not yet taken by an observer.
    events: Vec<GameEvent>,
}

impl Game {
    /// Create a game and deal the first board
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = SimpleRng::new(config.seed);
        let board = Board::generate(config.pairs, &mut rng);
        Ok(Self::from_parts(config, rng, board))
    }

    /// Create a game whose first board has a known layout.
    ///
    /// The layout must hold each symbol exactly twice and match
    /// `config.pairs`. Later resets deal shuffled boards from `config`.
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, ConfigError> {
        config.validate()?;
        if !board.is_paired() {
            return Err(ConfigError::UnpairedSymbols);
        }
        if board.pairs() != config.pairs {
            return Err(ConfigError::PairCountMismatch {
                expected: config.pairs,
                actual: board.pairs(),
            });
        }
        let rng = SimpleRng::new(config.seed);
        Ok(Self::from_parts(config, rng, board))
    }

    fn from_parts(config: GameConfig, rng: SimpleRng, board: Board) -> Self {
        Self {
            config,
            rng,
            session: GameSession::new(1, board),
            scheduler: Scheduler::new(),
            now_ms: 0,
            next_clock_tick_ms: None,
            events: Vec::new(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of delayed events still waiting to fire (including stale ones).
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(&self.session)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.fill_from(&self.session);
    }

    fn token(&self) -> TimerToken {
        TimerToken {
            generation: self.session.generation(),
        }
    }

    /// Apply a discrete action. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Flip(id) => self.request_flip(id).accepted(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Reveal a card.
    ///
    /// Completing a pair schedules its evaluation after the configured flip
    /// delay. The first accepted flip of a session starts the clock.
    pub fn request_flip(&mut self, id: CardId) -> FlipOutcome {
        let outcome = self.session.request_flip(id);
        match outcome {
            FlipOutcome::Ignored(reason) => {
                self.events.push(GameEvent::FlipRejected { id, reason });
                return outcome;
            }
            FlipOutcome::Revealed { .. } | FlipOutcome::PairRevealed { .. } => {
                if let Some(card) = self.session.board().get(id) {
                    self.events.push(GameEvent::CardRevealed {
                        id,
                        symbol: card.symbol,
                    });
                }
            }
        }

        if outcome.first_flip() {
            self.next_clock_tick_ms = Some(self.now_ms + CLOCK_TICK_MS as u64);
        }
        if matches!(outcome, FlipOutcome::PairRevealed { .. }) {
            let token = self.token();
            let due = self.now_ms + self.config.flip_delay_ms as u64;
            self.scheduler.schedule(token, due, ScheduledEvent::EvaluatePending);
        }
        outcome
    }

    /// Resolve the pending pair now.
    ///
    /// Normally fired by the scheduler; calling it directly cancels the
    /// scheduled evaluation for this session so it cannot fire on a later pair.
    pub fn evaluate_pending(&mut self) -> Option<PairResult> {
        let token = self.token();
        self.scheduler.cancel(token, ScheduledEvent::EvaluatePending);
        self.run_evaluation()
    }

    fn run_evaluation(&mut self) -> Option<PairResult> {
        let result = self.session.evaluate_pending()?;
        self.events.push(GameEvent::PairEvaluated {
            first: result.first,
            second: result.second,
            matched: result.matched,
        });
        if result.board_complete {
            let token = self.token();
            let due = self.now_ms + self.config.win_delay_ms as u64;
            self.scheduler.schedule(token, due, ScheduledEvent::AnnounceWin);
        }
        Some(result)
    }

    /// End the session with a win summary. Requires a completed board.
    pub fn announce_win(&mut self) -> bool {
        let token = self.token();
        self.scheduler.cancel(token, ScheduledEvent::AnnounceWin);
        self.run_win_announcement()
    }

    fn run_win_announcement(&mut self) -> bool {
        if !self.session.declare_won() {
            return false;
        }
        self.next_clock_tick_ms = None;
        self.events.push(GameEvent::Won {
            moves: self.session.moves(),
            elapsed_secs: self.session.elapsed_secs(),
        });
        true
    }

    /// Advance the game clock by one second (no-op unless running).
    pub fn tick(&mut self) -> bool {
        if !self.session.tick() {
            return false;
        }
        self.events.push(GameEvent::Tick {
            elapsed_secs: self.session.elapsed_secs(),
        });
        true
    }

    /// Move engine time forward by `elapsed_ms`.
    ///
    /// Delayed events and clock ticks that fall inside the window are applied
    /// in chronological order; a delayed event fires before a clock tick due
    /// at the same instant.
    pub fn advance(&mut self, elapsed_ms: u32) {
        let target = self.now_ms + elapsed_ms as u64;

        loop {
            let timer_due = self.scheduler.next_due().filter(|&t| t <= target);
            let clock_due = self.next_clock_tick_ms.filter(|&t| t <= target);

            match (timer_due, clock_due) {
                (Some(t), Some(c)) if t <= c => self.fire_timer(t),
                (Some(t), None) => self.fire_timer(t),
                (_, Some(c)) => self.fire_clock(c),
                (None, None) => break,
            }
        }

        self.now_ms = target;
    }

    fn fire_timer(&mut self, due_ms: u64) {
        self.now_ms = due_ms;
        let Some(entry) = self.scheduler.pop_due(due_ms) else {
            return;
        };
        if entry.token != self.token() {
            debug!(
                generation = entry.token.generation,
                live = self.session.generation(),
                event = ?entry.event,
                "dropping timer from a replaced session"
            );
            self.events.push(GameEvent::StaleTimerDropped {
                generation: entry.token.generation,
            });
            return;
        }
        match entry.event {
            ScheduledEvent::EvaluatePending => {
                self.run_evaluation();
            }
            ScheduledEvent::AnnounceWin => {
                self.run_win_announcement();
            }
        }
    }

    fn fire_clock(&mut self, due_ms: u64) {
        self.now_ms = due_ms;
        if self.tick() {
            self.next_clock_tick_ms = Some(due_ms + CLOCK_TICK_MS as u64);
        } else {
            self.next_clock_tick_ms = None;
        }
    }

    /// Discard the current session and deal a new board.
    ///
    /// Timers scheduled by the old session stay queued but are discarded when
    /// they fire, because their generation no longer matches.
    #[instrument(skip(self), fields(generation = self.session.generation()))]
    pub fn reset(&mut self) {
        let generation = self.session.generation() + 1;
        let board = Board::generate(self.config.pairs, &mut self.rng);
        self.session = GameSession::new(generation, board);
        self.next_clock_tick_ms = None;
        info!(generation, pairs = self.config.pairs, "board reset");
        self.events.push(GameEvent::Reset { generation });
    }

    /// Drain queued events.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Deliver queued events to `observer`, in order.
    pub fn dispatch_events(&mut self, observer: &mut dyn GameObserver) {
        for event in self.events.drain(..) {
            observer.on_event(&event);
        }
    }
}
