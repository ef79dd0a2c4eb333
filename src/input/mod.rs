use macroquad::input::{
    MouseButton, is_mouse_button_pressed, is_mouse_button_released, mouse_position,
};
use rand::Rng;

use crate::application::Simulation;
use crate::ui::surface_contains;

/// Discrete pointer events on the sand surface
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// Cursor moved to (x, y), in surface pixels
    Move { x: f32, y: f32 },
    /// Left button pressed
    Click,
}

/// Pointer travel, in pixels, between press and release that still
/// counts as a click rather than a drag
pub const CLICK_SLOP: f32 = 3.0;

/// Turns per-frame mouse polling into move and click events
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<(f32, f32)>,
    press: Option<Press>,
}

#[derive(Clone, Copy, Debug)]
struct Press {
    origin: (f32, f32),
    dragged: bool,
}

fn beyond_slop(a: (f32, f32), b: (f32, f32)) -> bool {
    (a.0 - b.0).hypot(a.1 - b.1) > CLICK_SLOP
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare this frame's pointer state with the last one.
    ///
    /// A move is reported only when the position changed and lies on the
    /// surface; the first observed position just primes the tracker.
    /// A click is reported on release, and only when the button went down
    /// on the surface and the pointer never strayed past `CLICK_SLOP`.
    pub fn update(
        &mut self,
        pos: (f32, f32),
        pressed: bool,
        released: bool,
        surface: (u32, u32),
    ) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let on_surface = surface_contains(surface, pos);

        if let Some(last) = self.last_pos {
            if last != pos && on_surface {
                events.push(PointerEvent::Move { x: pos.0, y: pos.1 });
            }
        }

        if pressed && on_surface {
            self.press = Some(Press { origin: pos, dragged: false });
        }
        if let Some(press) = self.press.as_mut() {
            press.dragged |= beyond_slop(press.origin, pos);
        }
        if released {
            if let Some(press) = self.press.take() {
                if !press.dragged && on_surface {
                    events.push(PointerEvent::Click);
                }
            }
        }

        self.last_pos = Some(pos);
        events
    }

    /// Read the mouse from macroquad. The surface is drawn at the window
    /// origin, so window and surface coordinates coincide.
    pub fn poll(&mut self, surface: (u32, u32)) -> Vec<PointerEvent> {
        self.update(
            mouse_position(),
            is_mouse_button_pressed(MouseButton::Left),
            is_mouse_button_released(MouseButton::Left),
            surface,
        )
    }
}

/// Route pointer events to the simulation
pub fn apply_events(sim: &mut Simulation, events: &[PointerEvent], rng: &mut impl Rng) {
    for event in events {
        match *event {
            PointerEvent::Move { x, y } => {
                sim.pointer_moved(x, y, &mut *rng);
            }
            PointerEvent::Click => sim.clicked(),
        }
    }
}
