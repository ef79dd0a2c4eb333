// Domain layer - grid model and falling-sand rule
pub mod domain;

// Application layer - simulation state, scheduling, configuration
pub mod application;

// Infrastructure layer - layout, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, Grid, Generation, next_generation};
pub use application::{SandState, SimConfig, Simulation};
