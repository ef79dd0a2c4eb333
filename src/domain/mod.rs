mod cell;
mod grid;
pub mod engine;

pub use cell::Cell;
pub use grid::{Grid, in_bounds};
pub use engine::{Generation, FALL_ORDER, next_generation};
