/// A wrapped position on the toroidal grid. X = column, Y = row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord {
    pub x: u32,
    pub y: u32,
}

impl Coord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Fixed extent of a toroidal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Map any signed position onto the torus (Euclidean modulo on both axes)
    #[inline]
    pub fn wrap(&self, x: i64, y: i64) -> Coord {
        Coord {
            x: x.rem_euclid(self.width as i64) as u32,
            y: y.rem_euclid(self.height as i64) as u32,
        }
    }

    /// Offset a coordinate and wrap the result
    #[inline]
    pub fn offset(&self, coord: Coord, dx: i64, dy: i64) -> Coord {
        self.wrap(coord.x as i64 + dx, coord.y as i64 + dy)
    }

    /// The 8 surrounding cells, wrapping around the edges
    pub fn neighbours(&self, coord: Coord) -> impl Iterator<Item = Coord> + '_ {
        (-1..=1)
            .flat_map(|dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(coord, dx, dy))
    }

    pub const fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width && coord.y < self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_negative() {
        let bounds = Bounds::new(10, 8);
        assert_eq!(bounds.wrap(-1, -1), Coord::new(9, 7));
        assert_eq!(bounds.wrap(10, 8), Coord::new(0, 0));
        assert_eq!(bounds.wrap(-21, 17), Coord::new(9, 1));
    }

    #[test]
    fn test_neighbours_wrap_at_corner() {
        let bounds = Bounds::new(5, 5);
        let mut around: Vec<_> = bounds.neighbours(Coord::new(0, 0)).collect();
        around.sort();

        let mut expected = vec![
            Coord::new(4, 4), Coord::new(0, 4), Coord::new(1, 4),
            Coord::new(4, 0),                   Coord::new(1, 0),
            Coord::new(4, 1), Coord::new(0, 1), Coord::new(1, 1),
        ];
        expected.sort();
        assert_eq!(around, expected);
    }

    #[test]
    fn test_neighbours_never_include_self() {
        let bounds = Bounds::new(3, 3);
        let centre = Coord::new(1, 1);
        assert_eq!(bounds.neighbours(centre).count(), 8);
        assert!(bounds.neighbours(centre).all(|c| c != centre));
    }

    proptest! {
        #[test]
        fn wrap_is_idempotent(w in 1u32..600, h in 1u32..600, x in -5000i64..5000, y in -5000i64..5000) {
            let bounds = Bounds::new(w, h);
            let once = bounds.wrap(x, y);
            prop_assert!(bounds.contains(once));
            prop_assert_eq!(bounds.wrap(once.x as i64, once.y as i64), once);
        }
    }
}
