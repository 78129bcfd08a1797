//! Observer seam between the engine and whatever presents it.

use tracing::{debug, info};

use crate::types::GameEvent;

/// Receives engine events in the order they happened.
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent);
}

/// Collecting observer, handy for tests and replays.
impl GameObserver for Vec<GameEvent> {
    fn on_event(&mut self, event: &GameEvent) {
        self.push(*event);
    }
}

/// Writes every event to the `tracing` pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent) {
        match *event {
            GameEvent::CardRevealed { id, symbol } => {
                debug!(id, symbol = %symbol, "card revealed")
            }
            GameEvent::FlipRejected { id, reason } => {
                debug!(id, reason = reason.as_str(), "flip ignored")
            }
            GameEvent::PairEvaluated {
                first,
                second,
                matched,
            } => debug!(first, second, matched, "pair evaluated"),
            GameEvent::Tick { .. } => {}
            GameEvent::Won {
                moves,
                elapsed_secs,
            } => info!(moves, elapsed_secs, "game won"),
            GameEvent::Reset { generation } => info!(generation, "new board dealt"),
            GameEvent::StaleTimerDropped { generation } => {
                debug!(generation, "stale timer dropped")
            }
        }
    }
}
