//! `Grid`: the torus of cells shared by every agent.

use tt_core::{Direction, Position};

use crate::{Cell, GridError, GridResult, OccupantKind};

/// A fixed `width × height` array of cell actors.
///
/// Built once by the coordinator and shared behind an `Arc`.  The structure
/// is immutable after construction; all mutable state lives inside the cell
/// actors.
#[derive(Debug)]
pub struct Grid {
    width:  u32,
    height: u32,
    /// Row-major: index = y * width + x.
    cells:  Vec<Cell>,
}

impl Grid {
    /// Spawn one actor per cell on the current tokio runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn spawn(width: u32, height: u32) -> Self {
        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Position::new(x, y)))
            .map(Cell::spawn)
            .collect();
        Self { width, height, cells }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is off the board.  Positions produced by
    /// [`Grid::neighbour`] are always on it.
    #[inline]
    pub fn cell(&self, pos: Position) -> &Cell {
        assert!(pos.in_bounds(self.width, self.height), "position {pos} is off the board");
        &self.cells[self.index(pos)]
    }

    /// Fallible variant of [`Grid::cell`].
    pub fn try_cell(&self, pos: Position) -> GridResult<&Cell> {
        if pos.in_bounds(self.width, self.height) {
            Ok(&self.cells[self.index(pos)])
        } else {
            Err(GridError::OutOfBounds(pos))
        }
    }

    /// The position one step from `pos` in `dir`, wrapping at the edges.
    #[inline]
    pub fn neighbour(&self, pos: Position, dir: Direction) -> Position {
        pos.step(dir, self.width, self.height)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Count of currently occupied cells, gathered cell by cell.
    ///
    /// Not an atomic snapshot of the whole board: each cell answers at its
    /// own moment.  Exact once agents have stopped moving.
    pub async fn occupied_count(&self) -> GridResult<usize> {
        let mut n = 0;
        for cell in &self.cells {
            if cell.query().await?.occupant != OccupantKind::Free {
                n += 1;
            }
        }
        Ok(n)
    }

    #[inline]
    fn index(&self, pos: Position) -> usize {
        pos.y as usize * self.width as usize + pos.x as usize
    }
}
