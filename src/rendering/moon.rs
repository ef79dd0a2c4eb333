use macroquad::prelude::*;

use crate::application::OrnamentElement;

const MOON_COLOR: Color = Color::new(0.95, 0.93, 0.8, 1.0);
const CRATER_COLOR: Color = Color::new(0.8, 0.78, 0.66, 1.0);

/// Crater centres relative to the moon centre, as fractions of the radius,
/// at rotation 0
const CRATERS: [(f32, f32, f32); 3] = [
    (-0.35, -0.3, 0.18),
    (0.1, 0.4, 0.12),
    (-0.5, 0.3, 0.1),
];

/// Rotate `(x, y)` clockwise on screen by `degrees` (y grows downwards)
pub fn rotate(x: f32, y: f32, degrees: f32) -> (f32, f32) {
    let (sin, cos) = degrees.to_radians().sin_cos();
    (x * cos - y * sin, x * sin + y * cos)
}

/// Decorative crescent moon in the corner of the window
#[derive(Clone, Debug)]
pub struct Moon {
    pub radius: f32,
    rotation: f32,
}

impl Moon {
    pub fn new(radius: f32) -> Self {
        Self { radius, rotation: 0.0 }
    }

    /// Draw the moon centred on (cx, cy) over `background`
    pub fn draw(&self, cx: f32, cy: f32, background: Color) {
        let r = self.radius;
        draw_circle(cx, cy, r, MOON_COLOR);

        for (dx, dy, size) in CRATERS {
            let (ox, oy) = rotate(dx * r, dy * r, self.rotation);
            draw_circle(cx + ox, cy + oy, size * r, CRATER_COLOR);
        }

        // The shadow disc turns with the moon and carves out the crescent.
        let (sx, sy) = rotate(0.45 * r, -0.2 * r, self.rotation);
        draw_circle(cx + sx, cy + sy, 0.9 * r, background);
    }
}

impl OrnamentElement for Moon {
    fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: (f32, f32), b: (f32, f32)) -> bool {
        (a.0 - b.0).abs() < 1e-4 && (a.1 - b.1).abs() < 1e-4
    }

    #[test]
    fn test_rotate_quarter_turn() {
        assert!(close(rotate(1.0, 0.0, 90.0), (0.0, 1.0)));
        assert!(close(rotate(0.0, 1.0, 90.0), (-1.0, 0.0)));
        assert!(close(rotate(0.3, -0.7, 0.0), (0.3, -0.7)));
    }

    #[test]
    fn test_set_rotation() {
        let mut moon = Moon::new(30.0);
        moon.set_rotation(42.5);
        assert_eq!(moon.rotation, 42.5);
    }
}
