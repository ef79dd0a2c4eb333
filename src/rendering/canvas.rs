use macroquad::prelude::*;

use super::Surface;

/// CPU-side RGBA pixels with the `Surface` drawing operations
pub struct PixelBuffer {
    width: u32,
    height: u32,
    image: Image,
}

impl PixelBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        // Textures cannot be empty, so a zero-sized surface still gets one
        // backing pixel; `size()` keeps reporting the real dimensions.
        let backing_w = width.clamp(1, u16::MAX as u32) as u16;
        let backing_h = height.clamp(1, u16::MAX as u32) as u16;
        Self {
            width: width.min(u16::MAX as u32),
            height: height.min(u16::MAX as u32),
            image: Image::gen_image_color(backing_w, backing_h, BLANK),
        }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn clear(&mut self) {
        self.image
            .get_image_data_mut()
            .iter_mut()
            .for_each(|px| *px = [0, 0, 0, 0]);
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        let stride = self.image.width as u32;
        let rgba: [u8; 4] = color.into();
        let data = self.image.get_image_data_mut();
        for py in y..y_end {
            for px in x..x_end {
                data[(py * stride + px) as usize] = rgba;
            }
        }
    }
}

/// The on-screen sand surface: a pixel buffer mirrored into a GPU texture.
///
/// The texture is only re-uploaded by `present`, so frames where nothing
/// was redrawn keep showing the previous picture.
pub struct Canvas {
    pixels: PixelBuffer,
    texture: Texture2D,
}

impl Canvas {
    /// Needs a live graphics context
    pub fn new(width: u32, height: u32) -> Self {
        let pixels = PixelBuffer::new(width, height);
        let texture = Texture2D::from_image(pixels.image());
        texture.set_filter(FilterMode::Nearest);
        Self { pixels, texture }
    }

    /// Upload the pixel buffer to the GPU
    pub fn present(&self) {
        self.texture.update(self.pixels.image());
    }

    /// Blit the last presented picture with its top-left corner at (x, y)
    pub fn draw(&self, x: f32, y: f32) {
        let (width, height) = self.pixels.size();
        if width > 0 && height > 0 {
            draw_texture(&self.texture, x, y, WHITE);
        }
    }
}

impl Surface for Canvas {
    fn size(&self) -> (u32, u32) {
        self.pixels.size()
    }

    fn clear(&mut self) {
        self.pixels.clear();
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Color) {
        self.pixels.fill_rect(x, y, width, height, color);
    }
}
