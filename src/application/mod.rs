pub mod config;
mod ornament;
mod sand_state;
pub mod scheduler;
mod simulation;

pub use config::{ConfigError, SimConfig};
pub use ornament::{Ornament, OrnamentElement};
pub use sand_state::SandState;
pub use scheduler::{RecurringTask, Scheduler, Ticks};
pub use simulation::{FrameReport, Simulation};
