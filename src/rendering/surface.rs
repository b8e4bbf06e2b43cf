use macroquad::texture::Image;

/// RGBA pixel target the renderer writes into.
pub trait Surface {
    /// (width, height) in pixels
    fn dimensions(&self) -> (usize, usize);

    /// Row-major pixels, `width * height` long
    fn pixels_mut(&mut self) -> &mut [[u8; 4]];

    fn lock(&mut self) {}

    fn unlock(&mut self) {}
}

/// Plain in-memory surface
#[derive(Clone, Debug)]
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 255]; width * height],
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }
}

impl Surface for FrameBuffer {
    fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        &mut self.pixels
    }
}

impl Surface for Image {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn pixels_mut(&mut self) -> &mut [[u8; 4]] {
        self.get_image_data_mut()
    }
}
