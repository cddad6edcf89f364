use std::cmp::max;

use crate::snake::Direction;

/// A single grid-aligned square, in grid units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Cell { x, y }
    }

    /// The neighbouring cell in `direction`. May lie outside the grid.
    pub fn shifted(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Cell::new(self.x + dx, self.y + dy)
    }
}

/// Playing field bounds, derived from the surface size and the cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: i32,
    rows: i32,
}

impl Grid {
    pub fn new(cols: i32, rows: i32) -> Self {
        Grid { cols: max(cols, 1), rows: max(rows, 1) }
    }

    /// Fits as many whole cells as possible into a `width` x `height` surface.
    /// Always at least one cell on each axis, even if the surface is smaller.
    pub fn from_surface(width: u16, height: u16, cell_size: u16) -> Self {
        let cell_size = max(cell_size, 1);
        Grid::new((width / cell_size) as i32, (height / cell_size) as i32)
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn cell_count(&self) -> usize {
        self.cols as usize * self.rows as usize
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (0..self.cols).contains(&cell.x) && (0..self.rows).contains(&cell.y)
    }

    /// Brings a cell that left the grid back in from the opposite edge.
    /// Anything past the far edge lands on the first row/column and anything
    /// before the near edge on the last, however far out it was.
    pub fn wrap(&self, cell: Cell) -> Cell {
        let snap = |v: i32, len: i32| match v {
            v if v >= len => 0,
            v if v < 0 => len - 1,
            v => v,
        };
        Cell::new(snap(cell.x, self.cols), snap(cell.y, self.rows))
    }

    pub fn center(&self) -> Cell {
        Cell::new(self.cols / 2, self.rows / 2)
    }

    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }
}
