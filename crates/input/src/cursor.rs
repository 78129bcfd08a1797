//! Keyboard cursor over the card grid.
//!
//! Movement clamps at the grid edges. On a ragged last row, moving down from
//! a column that has no card below leaves the cursor where it is.

use crate::map::Direction;
use crate::types::{grid_dims, CardId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: CardId,
    len: usize,
    columns: usize,
}

impl Cursor {
    pub fn new(card_count: usize) -> Self {
        let (columns, _) = grid_dims(card_count);
        Self {
            index: 0,
            len: card_count,
            columns,
        }
    }

    pub fn index(&self) -> CardId {
        self.index
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Jump to `index` (ignored when out of range).
    pub fn set(&mut self, index: CardId) {
        if index < self.len {
            self.index = index;
        }
    }

    /// Adapt to a board of `card_count` cards, keeping the position when possible.
    pub fn resize(&mut self, card_count: usize) {
        let (columns, _) = grid_dims(card_count);
        self.len = card_count;
        self.columns = columns;
        if self.index >= card_count {
            self.index = card_count.saturating_sub(1);
        }
    }

    pub fn step(&mut self, dir: Direction) {
        if self.len == 0 || self.columns == 0 {
            return;
        }
        let col = self.index % self.columns;
        let next = match dir {
            Direction::Left if col > 0 => self.index - 1,
            Direction::Right if col + 1 < self.columns => self.index + 1,
            Direction::Up if self.index >= self.columns => self.index - self.columns,
            Direction::Down => self.index + self.columns,
            _ => self.index,
        };
        if next < self.len {
            self.index = next;
        }
    }
}
