// Layout of the window: the sand surface sits at the top-left corner,
// inset from the right and bottom edges by the configured margin.
use macroquad::prelude::{screen_height, screen_width};

/// Surface size for a screen of the given size, in whole pixels
pub fn surface_size_for(screen_w: f32, screen_h: f32, margin: f32) -> (u32, u32) {
    (
        (screen_w - margin).max(0.0).floor() as u32,
        (screen_h - margin).max(0.0).floor() as u32,
    )
}

/// Current surface size
pub fn surface_size(margin: f32) -> (u32, u32) {
    surface_size_for(screen_width(), screen_height(), margin)
}

/// Whether a position in surface coordinates lies on the surface
pub fn surface_contains(surface: (u32, u32), pos: (f32, f32)) -> bool {
    pos.0 >= 0.0 && pos.1 >= 0.0 && pos.0 < surface.0 as f32 && pos.1 < surface.1 as f32
}

/// Centre and radius of the moon for a screen of the given width.
/// The moon sits in the right-hand margin strip, clear of the surface.
pub fn moon_placement_for(screen_w: f32, margin: f32) -> (f32, f32, f32) {
    let half = margin / 2.0;
    (screen_w - half, half, margin * 0.4)
}

/// Current moon placement
pub fn moon_placement(margin: f32) -> (f32, f32, f32) {
    moon_placement_for(screen_width(), margin)
}
