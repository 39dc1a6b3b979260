use std::fmt;

/// A single unit of grid state: alive or dead.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    alive: bool,
}

impl Cell {
    pub const DEAD: Cell = Cell { alive: false };
    pub const ALIVE: Cell = Cell { alive: true };

    pub fn new(alive: bool) -> Self {
        Cell { alive }
    }

    pub fn state(&self) -> bool {
        self.alive
    }

    pub fn set_state(&mut self, alive: bool) {
        self.alive = alive;
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        Cell::new(alive)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.alive { "*" } else { "." })
    }
}
