/// Cell represents the fundamental unit of the sand grid.
/// Each cell is either Empty or holds a grain of Sand.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Sand,
}

impl Cell {
    /// Check if the cell currently holds sand
    pub const fn is_sand(self) -> bool {
        matches!(self, Cell::Sand)
    }

    /// Check if the cell can receive a falling grain
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Map a coin flip onto a cell state (true = sand)
    pub const fn from_sand(sand: bool) -> Self {
        if sand { Cell::Sand } else { Cell::Empty }
    }
}
