use rand::Rng;

use crate::domain::{Cell, Grid, next_generation};

use super::SimConfig;

/// SandState holds everything one simulation tick reads or writes:
/// the grid plus the pause and settle flags.
#[derive(Clone, Debug)]
pub struct SandState {
    pub grid: Grid,
    /// User toggled; blocks injection and ornament rotation
    pub paused: bool,
    /// Last tick produced no change; ticks are skipped until disturbed
    pub settled: bool,
    /// Update passes since the grid was last allocated
    pub generation: u64,
    cell_size: u32,
    brush_radius: i32,
    spray_density: f64,
}

impl SandState {
    /// Create state for a surface of `width_px` × `height_px`
    pub fn new(width_px: u32, height_px: u32, config: &SimConfig) -> Self {
        Self {
            grid: Grid::for_surface(width_px, height_px, config.cell_size),
            paused: false,
            settled: false,
            generation: 0,
            cell_size: config.cell_size.max(1),
            brush_radius: config.brush_radius.max(0),
            spray_density: config.spray_density.clamp(0.0, 1.0),
        }
    }

    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Throw away the grid and start empty at the new surface size
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.grid = Grid::for_surface(width_px, height_px, self.cell_size);
        self.generation = 0;
        self.settled = false;
        let (cols, rows) = self.grid.dimensions();
        log::info!("surface resized to {width_px}x{height_px}, grid {cols}x{rows}");
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::debug!("paused = {}", self.paused);
    }

    /// Convert a pointer position in surface pixels to a cell coordinate.
    /// Positions left of or above the surface map to negative cells.
    pub fn pointer_to_cell(&self, pointer_x: f32, pointer_y: f32) -> (i32, i32) {
        let size = self.cell_size as f32;
        ((pointer_x / size).floor() as i32, (pointer_y / size).floor() as i32)
    }

    /// Spray sand around the pointer.
    ///
    /// Every in-bounds cell of the square brush centred on the pointer cell
    /// is overwritten: sand with probability `spray_density`, empty
    /// otherwise. Returns false without touching anything while paused.
    pub fn inject(&mut self, pointer_x: f32, pointer_y: f32, rng: &mut impl Rng) -> bool {
        if self.paused {
            return false;
        }
        if self.settled {
            log::debug!("injection woke the simulation at generation {}", self.generation);
        }
        self.settled = false;

        let (cx, cy) = self.pointer_to_cell(pointer_x, pointer_y);
        let r = self.brush_radius;
        for i in -r..=r {
            for j in -r..=r {
                let (x, y) = (cx + i, cy + j);
                if self.grid.in_bounds(x, y) {
                    let cell = Cell::from_sand(rng.random_bool(self.spray_density));
                    self.grid.set(x, y, cell);
                }
            }
        }
        true
    }

    /// Run one simulation tick.
    ///
    /// Returns true when the update pass ran (and the surface needs a
    /// redraw), false when the state is settled and the tick was skipped.
    pub fn tick(&mut self) -> bool {
        if self.settled {
            return false;
        }

        let next = next_generation(&self.grid);
        self.grid = next.grid;
        self.generation += 1;
        log::trace!("generation {}", self.generation);

        if !next.changed {
            self.settled = true;
            log::debug!(
                "settled at generation {} with {} grains",
                self.generation,
                self.grid.sand_count()
            );
        }
        true
    }
}
