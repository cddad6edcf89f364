use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use Direction::*;
use MoveResult::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!((self, other), (Up, Down) | (Down, Up) | (Right, Left) | (Left, Right))
    }

    pub fn delta(&self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MoveResult {
    Moved { new_head: Cell, old_tail: Cell },
    Grew { new_head: Cell },
    Crashed { new_head: Cell },
}

/// Body segments with the head at the front.
///
/// `direction` is what the next move uses; `pending_direction` is the last
/// accepted request and only takes over at the start of a tick.
pub struct Snake {
    body: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Direction,
}

impl Snake {
    pub fn new(head: Cell, direction: Direction) -> Self {
        Snake { body: VecDeque::from(vec![head]), direction, pending_direction: direction }
    }

    #[cfg(test)]
    pub(crate) fn from_cells(cells: &[Cell], direction: Direction) -> Self {
        assert!(!cells.is_empty());
        Snake { body: cells.iter().copied().collect(), direction, pending_direction: direction }
    }

    pub fn body(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    #[cfg(test)]
    pub(crate) fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub(crate) fn pending_direction(&self) -> Direction {
        self.pending_direction
    }

    /// Queues a turn for the next tick. Reversing onto the neck is refused.
    pub fn request_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction.is_opposite(self.direction) {
            return false;
        }
        self.pending_direction = new_direction;
        true
    }

    pub fn apply_pending_direction(&mut self) {
        if !self.pending_direction.is_opposite(self.direction) {
            self.direction = self.pending_direction;
        }
    }

    /// Advances one cell, wrapping at the grid edges, and keeps the tail when
    /// the new head lands on `food`.
    pub fn move_step(&mut self, grid: &Grid, food: Cell) -> MoveResult {
        let new_head = grid.wrap(self.head().shifted(self.direction));
        self.body.push_front(new_head);

        let result = if new_head == food {
            Grew { new_head }
        } else {
            // Length >= 2 here, since we just pushed
            let old_tail = self.body.pop_back().unwrap_or(new_head);
            Moved { new_head, old_tail }
        };

        if self.bites_itself() {
            Crashed { new_head }
        } else {
            result
        }
    }

    /// True when any segment other than the head shares the head's cell.
    pub fn bites_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn head_char(&self) -> char {
        match self.direction {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}
