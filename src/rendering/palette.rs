/// Colour stops of the age gradient: light blue, yellow, red
const BASE_COLORS: [[u64; 3]; 3] = [
    [128, 220, 255],
    [255, 255, 0],
    [255, 0, 0],
];

const COLOR_RANGES: usize = BASE_COLORS.len() - 1;

/// Number of palette entries used by default
pub const PALETTE_SIZE: usize = 256;

/// Generations per palette step; lower values age colours faster
pub const AGE_RATE: u32 = 16;

/// Age gradient, interpolated piecewise-linearly between the base colours.
#[derive(Clone, Debug)]
pub struct Palette {
    colors: Vec<[u8; 4]>,
}

impl Palette {
    /// Build a palette with `size` entries (at least 1)
    pub fn new(size: usize) -> Self {
        let size = size.max(1);
        // Round up so the last range covers the tail
        let per_range = size.div_ceil(COLOR_RANGES);

        let colors = (0..size).map(|i| interpolate(i, per_range)).collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn color(&self, index: usize) -> [u8; 4] {
        self.colors[index.min(self.colors.len() - 1)]
    }

    /// Entry for a cell of the given age, clamped to the hottest colour
    pub fn for_age(&self, age: u32, age_rate: u32) -> [u8; 4] {
        self.color((age / age_rate.max(1)) as usize)
    }
}

/// Entry `i` of a palette whose ranges are `per_range` entries long
fn interpolate(i: usize, per_range: usize) -> [u8; 4] {
    let lo = BASE_COLORS[i / per_range];
    let hi = BASE_COLORS[i / per_range + 1];
    let per_range = per_range as u64;
    let s = (i as u64) % per_range;
    let oms = per_range - s;

    let channel = |c: usize| (hi[c] * s / per_range + lo[c] * oms / per_range) as u8;
    [channel(0), channel(1), channel(2), 255]
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(PALETTE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_256_entries() {
        assert_eq!(Palette::default().len(), 256);
    }

    #[test]
    fn test_stops_land_on_base_colors() {
        let palette = Palette::default();
        assert_eq!(palette.color(0), [128, 220, 255, 255]);
        assert_eq!(palette.color(128), [255, 255, 0, 255]);
    }

    #[test]
    fn test_interpolates_with_integer_rounding() {
        let palette = Palette::default();
        assert_eq!(palette.color(64), [191, 237, 127, 255]);
        assert_eq!(palette.color(255), [254, 1, 0, 255]);
    }

    #[test]
    fn test_age_is_scaled_and_clamped() {
        let palette = Palette::default();
        assert_eq!(palette.for_age(15, AGE_RATE), palette.color(0));
        assert_eq!(palette.for_age(16, AGE_RATE), palette.color(1));
        assert_eq!(palette.for_age(u32::MAX, AGE_RATE), palette.color(255));
    }

    #[test]
    fn test_huge_ranges_do_not_overflow() {
        let per_range = 40_000_000;
        assert_eq!(interpolate(0, per_range), [128, 220, 255, 255]);
        assert_eq!(interpolate(per_range, per_range), [255, 255, 0, 255]);
        assert_eq!(interpolate(2 * per_range - 1, per_range), [254, 0, 0, 255]);
    }

    #[test]
    fn test_odd_sizes_stay_in_range() {
        for size in [1, 2, 3, 7, 255] {
            assert_eq!(Palette::new(size).len(), size);
        }
    }
}
