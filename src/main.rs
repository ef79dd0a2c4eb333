use std::time::Duration;

use macroquad::prelude::{Conf, clear_background, get_frame_time, next_frame};
use falling_sand::{
    SimConfig, Simulation,
    application::OrnamentElement,
    input::{self, PointerTracker},
    rendering::{self, Canvas, Moon},
    ui,
};

fn window_conf() -> Conf {
    Conf {
        window_title: "Falling Sand".to_owned(),
        window_width: 1000,
        window_height: 800,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SimConfig::from_env();
    log::info!("configuration: {config:?}");

    let mut surface = ui::surface_size(config.surface_margin);
    let mut sim = Simulation::new(surface.0, surface.1, &config);
    let mut canvas = Canvas::new(surface.0, surface.1);
    let (mut moon_x, mut moon_y, moon_radius) = ui::moon_placement(config.surface_margin);
    let mut moon = Moon::new(moon_radius);
    let mut pointer = PointerTracker::new();
    let mut rng = rand::rng();

    loop {
        // Resize before input and ticks so nothing this frame sees the old grid
        let current = ui::surface_size(config.surface_margin);
        if current != surface {
            surface = current;
            sim.resize(surface.0, surface.1);
            canvas = Canvas::new(surface.0, surface.1);
            (moon_x, moon_y, moon.radius) = ui::moon_placement(config.surface_margin);
        }

        let events = pointer.poll(surface);
        input::apply_events(&mut sim, &events, &mut rng);

        let frame_time = Duration::try_from_secs_f32(get_frame_time()).unwrap_or_default();
        let report = sim.advance(frame_time);
        if report.redraw {
            rendering::draw_grid(sim.grid(), sim.cell_size(), &mut canvas);
            canvas.present();
        }
        moon.set_rotation(report.angle);

        clear_background(rendering::BACKGROUND);
        canvas.draw(0.0, 0.0);
        moon.draw(moon_x, moon_y, rendering::BACKGROUND);

        next_frame().await;
    }
}
