use crate::Player;

/// a single slot on the board, either empty or holding some player's disc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Disc(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
    pub fn is(&self, player: Player) -> bool {
        *self == Cell::Disc(player)
    }
}

impl From<u8> for Cell {
    fn from(n: u8) -> Self {
        match n {
            0 => Cell::Empty,
            p => Cell::Disc(p),
        }
    }
}

impl From<Cell> for u8 {
    fn from(cell: Cell) -> Self {
        match cell {
            Cell::Empty => 0,
            Cell::Disc(p) => p,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", u8::from(*self))
    }
}
