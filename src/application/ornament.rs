/// Anything on screen whose rotation can be set, in degrees
pub trait OrnamentElement {
    fn set_rotation(&mut self, degrees: f32);
}

/// Rotation state of the decorative moon
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ornament {
    angle: f32,
    step: f32,
}

impl Ornament {
    pub const FULL_TURN: f32 = 360.0;

    pub fn new(step: f32) -> Self {
        Self { angle: 0.0, step }
    }

    /// Current angle in [0, 360)
    pub const fn angle(&self) -> f32 {
        self.angle
    }

    /// Advance one rotation tick unless paused; wraps to 0 at a full turn
    pub fn advance(&mut self, paused: bool) -> f32 {
        if !paused {
            let next = self.angle + self.step;
            self.angle = if next >= Self::FULL_TURN { 0.0 } else { next };
        }
        self.angle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advances_by_step() {
        let mut ornament = Ornament::new(0.5);
        assert_eq!(ornament.advance(false), 0.5);
        assert_eq!(ornament.advance(false), 1.0);
    }

    #[test]
    fn test_wraps_at_full_turn() {
        let mut ornament = Ornament::new(0.5);
        for _ in 0..719 {
            ornament.advance(false);
        }
        assert_eq!(ornament.angle(), 359.5);
        assert_eq!(ornament.advance(false), 0.0);
        assert_eq!(ornament.advance(false), 0.5);
    }

    #[test]
    fn test_paused_freezes_angle() {
        let mut ornament = Ornament::new(0.5);
        ornament.advance(false);
        assert_eq!(ornament.advance(true), 0.5);
        assert_eq!(ornament.advance(true), 0.5);
    }
}
