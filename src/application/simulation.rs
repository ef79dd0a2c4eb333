use std::time::Duration;

use rand::Rng;

use crate::domain::Grid;

use super::{Ornament, SandState, Scheduler, SimConfig};

/// What happened during one `Simulation::advance`
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Simulation ticks that actually ran an update pass
    pub simulation_ticks: u32,
    /// The surface must be repainted from the grid
    pub redraw: bool,
    /// Ornament angle after this frame
    pub angle: f32,
}

/// Simulation is the single controller the frame loop drives.
/// It owns the sand state, the ornament and the scheduler that ticks both.
pub struct Simulation {
    pub state: SandState,
    pub ornament: Ornament,
    pub scheduler: Scheduler,
    needs_redraw: bool,
}

impl Simulation {
    /// Create a simulation for a surface of `width_px` × `height_px`
    pub fn new(width_px: u32, height_px: u32, config: &SimConfig) -> Self {
        let state = SandState::new(width_px, height_px, config);
        let (cols, rows) = state.grid.dimensions();
        log::info!(
            "simulation started: surface {width_px}x{height_px}, grid {cols}x{rows}, cell {}px",
            state.cell_size()
        );
        Self {
            state,
            ornament: Ornament::new(config.ornament_step),
            scheduler: Scheduler::new(
                config.sim_interval,
                config.ornament_interval,
                config.max_catch_up,
            ),
            needs_redraw: true,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn cell_size(&self) -> u32 {
        self.state.cell_size()
    }

    /// Replace the grid with an empty one sized for the new surface
    pub fn resize(&mut self, width_px: u32, height_px: u32) {
        self.state.resize(width_px, height_px);
        self.needs_redraw = true;
    }

    /// Pointer moved across the surface
    pub fn pointer_moved(&mut self, x: f32, y: f32, rng: &mut impl Rng) -> bool {
        self.state.inject(x, y, rng)
    }

    /// Discrete click on the surface
    pub fn clicked(&mut self) {
        self.state.toggle_pause();
    }

    /// One simulation/render tick; true when the grid was recomputed
    pub fn tick_simulation(&mut self) -> bool {
        let ran = self.state.tick();
        self.needs_redraw |= ran;
        ran
    }

    /// One ornament tick; returns the new angle
    pub fn tick_ornament(&mut self) -> f32 {
        self.ornament.advance(self.state.paused)
    }

    /// Run `n` simulation ticks synchronously, returning how many ran
    pub fn step(&mut self, n: u32) -> u32 {
        (0..n).filter(|_| self.tick_simulation()).count() as u32
    }

    /// Feed one frame's elapsed time to the scheduler and run what is due
    pub fn advance(&mut self, delta: Duration) -> FrameReport {
        let ticks = self.scheduler.advance(delta);
        let simulation_ticks = self.step(ticks.simulation);
        for _ in 0..ticks.ornament {
            self.tick_ornament();
        }

        let redraw = std::mem::take(&mut self.needs_redraw);
        FrameReport {
            simulation_ticks,
            redraw,
            angle: self.ornament.angle(),
        }
    }
}
