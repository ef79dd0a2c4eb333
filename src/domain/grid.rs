use super::Cell;

/// Check whether (x, y) lies inside a `cols` × `rows` grid.
///
/// Coordinates are signed so that neighbour offsets which step past the
/// top or left edge can be tested before they are ever used as an index.
pub const fn in_bounds(x: i32, y: i32, cols: usize, rows: usize) -> bool {
    x >= 0 && y >= 0 && (x as usize) < cols && (y as usize) < rows
}

/// Grid owns the 2D cell array of the sand simulation.
/// Stored row-major; `x` is the column and `y` the row, row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid of `rows` × `cols` with every cell empty
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            width: cols,
            height: rows,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Create an empty grid covering a surface of the given pixel size.
    /// Partial cells at the right and bottom edges are dropped.
    pub fn for_surface(width_px: u32, height_px: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1);
        let rows = (height_px / cell_size) as usize;
        let cols = (width_px / cell_size) as usize;
        Self::new(rows, cols)
    }

    /// Get grid dimensions as (columns, rows)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn rows(&self) -> usize {
        self.height
    }

    /// Whether (x, y) is a valid coordinate of this grid
    pub const fn in_bounds(&self, x: i32, y: i32) -> bool {
        in_bounds(x, y, self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index. Callers check bounds first.
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position, `None` outside the grid
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.in_bounds(x, y)
            .then(|| self.cells[self.get_index(x as usize, y as usize)])
    }

    /// Whether the cell at (x, y) is sand. Out-of-range reads as false.
    pub fn is_sand(&self, x: i32, y: i32) -> bool {
        self.get(x, y).is_some_and(Cell::is_sand)
    }

    /// Set cell at position; writes outside the grid are ignored
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if self.in_bounds(x, y) {
            let idx = self.get_index(x as usize, y as usize);
            self.cells[idx] = cell;
        }
    }

    /// Number of cells currently holding sand
    pub fn sand_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_sand()).count()
    }

    /// Iterate over all cells with their positions, top row first
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width.max(1);
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(4, 7);
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.rows(), 4);
        assert_eq!(grid.sand_count(), 0);
        assert!(grid.iter_cells().all(|(_, _, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_for_surface_floors_dimensions() {
        let grid = Grid::for_surface(503, 249, 5);
        assert_eq!(grid.dimensions(), (100, 49));
    }

    #[test]
    fn test_for_surface_smaller_than_a_cell() {
        let grid = Grid::for_surface(4, 4, 5);
        assert_eq!(grid.dimensions(), (0, 0));
        assert!(!grid.in_bounds(0, 0));
        assert_eq!(grid.iter_cells().count(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut grid = Grid::new(3, 3);
        grid.set(2, 1, Cell::Sand);
        assert_eq!(grid.get(2, 1), Some(Cell::Sand));
        assert_eq!(grid.get(1, 2), Some(Cell::Empty));
        assert!(grid.is_sand(2, 1));
        assert_eq!(grid.sand_count(), 1);
    }

    #[test]
    fn test_out_of_range_access_is_ignored() {
        let mut grid = Grid::new(2, 2);
        grid.set(-1, 0, Cell::Sand);
        grid.set(0, 2, Cell::Sand);
        grid.set(2, 0, Cell::Sand);
        assert_eq!(grid.sand_count(), 0);
        assert_eq!(grid.get(-1, 0), None);
        assert_eq!(grid.get(0, 2), None);
        assert!(!grid.is_sand(5, 5));
    }

    #[test]
    fn test_iter_cells_is_row_major() {
        let mut grid = Grid::new(2, 3);
        grid.set(2, 0, Cell::Sand);
        let positions: Vec<_> = grid.iter_cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(positions, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        let sand: Vec<_> = grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_sand())
            .map(|(x, y, _)| (x, y))
            .collect();
        assert_eq!(sand, vec![(2, 0)]);
    }

    proptest! {
        #[test]
        fn prop_in_bounds_matches_ranges(
            x in -50i32..50,
            y in -50i32..50,
            cols in 0usize..30,
            rows in 0usize..30,
        ) {
            let expected = 0 <= x && x < cols as i32 && 0 <= y && y < rows as i32;
            prop_assert_eq!(in_bounds(x, y, cols, rows), expected);
            prop_assert_eq!(Grid::new(rows, cols).in_bounds(x, y), expected);
        }
    }
}
