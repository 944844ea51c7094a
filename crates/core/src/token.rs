//! Token - one poolable falling unit.
//!
//! Tokens are never created or dropped during play. The grid allocates its
//! pool once and flips tokens between alive and dead.

/// A falling label on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Token {
    row: usize,
    col: usize,
    label: char,
    alive: bool,
}

impl Token {
    /// A dead token parked at the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Revive at the top row in `col` carrying `label`.
    pub fn spawn(&mut self, col: usize, label: char) {
        self.alive = true;
        self.row = 0;
        self.col = col;
        self.label = label;
    }

    /// Mark dead and park at the origin sentinel.
    pub fn kill(&mut self) {
        self.alive = false;
        self.row = 0;
        self.col = 0;
    }

    /// Move one row down. Dead tokens stay parked.
    pub fn fall(&mut self) {
        if self.alive {
            self.row += 1;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn label(&self) -> char {
        self.label
    }
}
