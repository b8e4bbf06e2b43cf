mod palette;
mod surface;

pub use palette::{Palette, AGE_RATE, PALETTE_SIZE};
pub use surface::{FrameBuffer, Surface};

use macroquad::prelude::*;
use crate::domain::{AgeMap, Grid, PIXEL_PER_GRID};

const BACKGROUND: [u8; 4] = [0, 0, 0, 255];

/// Draw every live cell as a `PIXEL_PER_GRID` square coloured by its age.
/// The whole surface is cleared to black first; blocks that fall outside
/// the surface are clipped.
pub fn draw_grid(
    surface: &mut impl Surface,
    grid: &Grid,
    ages: &AgeMap,
    palette: &Palette,
    age_rate: u32,
) {
    surface.lock();

    let (width, height) = surface.dimensions();
    let pixels = surface.pixels_mut();
    pixels.fill(BACKGROUND);

    let block = PIXEL_PER_GRID as usize;
    for coord in grid.live_cells() {
        let color = palette.for_age(ages.get(coord), age_rate);
        let left = coord.x as usize * block;
        let top = coord.y as usize * block;
        if left >= width {
            continue;
        }
        let right = (left + block).min(width);

        for y in top..(top + block).min(height) {
            let row = y * width;
            if let Some(span) = pixels.get_mut(row + left..row + right) {
                span.fill(color);
            }
        }
    }

    surface.unlock();
}

/// Upload the frame to the GPU texture and draw it over the window
pub fn present(image: &Image, texture: &Texture2D) {
    texture.update(image);
    clear_background(BLACK);
    draw_texture(texture, 0.0, 0.0, WHITE);
}

/// Small generation/population readout in the top-left corner
pub fn draw_stats(generation: u64, population: usize) {
    let text = format!(
        "Gen {} | Cells {} | FPS {}",
        generation,
        population,
        get_fps()
    );
    draw_rectangle(4.0, 4.0, 300.0, 22.0, Color::from_rgba(0, 0, 0, 160));
    draw_text(&text, 10.0, 20.0, 18.0, Color::from_rgba(180, 180, 180, 255));
}
