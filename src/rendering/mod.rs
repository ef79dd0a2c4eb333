mod canvas;
mod moon;

pub use canvas::{Canvas, PixelBuffer};
pub use moon::Moon;

use macroquad::prelude::Color;
use crate::domain::Grid;

/// Window background behind the sand surface
pub const BACKGROUND: Color = Color::new(0.05, 0.05, 0.1, 1.0);

/// A 2D drawable area of known pixel size
pub trait Surface {
    /// Size in pixels as (width, height)
    fn size(&self) -> (u32, u32);

    /// Wipe the whole area back to transparent
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle, clipped to the surface
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color);
}

/// Green channel for a grain on `row` of a grid with `rows` rows:
/// 255 on the top row falling linearly to 0 on the bottom row
pub fn height_green(row: usize, rows: usize) -> u8 {
    if rows <= 1 {
        return u8::MAX;
    }
    let fraction = row.min(rows - 1) as f32 / (rows - 1) as f32;
    (255.0 - 255.0 * fraction).floor() as u8
}

/// Grain color by height: full red, no blue, green fading towards the bottom
pub fn height_color(row: usize, rows: usize) -> Color {
    Color::from_rgba(255, height_green(row, rows), 0, 255)
}

/// Repaint the surface from the grid
pub fn draw_grid(grid: &Grid, cell_size: u32, surface: &mut impl Surface) {
    surface.clear();
    let rows = grid.rows();
    grid.iter_cells()
        .filter(|(_, _, cell)| cell.is_sand())
        .for_each(|(x, y, _)| {
            surface.fill_rect(
                x as u32 * cell_size,
                y as u32 * cell_size,
                cell_size,
                cell_size,
                height_color(y, rows),
            );
        });
}
